use nx_lint_project_generator::options::{Linter, LintProjectOptions};

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

mod options {
    use super::*;

    #[test]
    fn parses_eslint_args() {
        let options = LintProjectOptions::from_args(&to_args(&[
            "--project",
            "test-lib",
            "--linter",
            "eslint",
            "--eslint-file-patterns",
            "**/*.ts",
            "--eslint-file-patterns",
            "**/*.tsx",
        ]))
        .unwrap();

        assert_eq!(options.linter, Linter::EsLint);
        assert_eq!(options.project, "test-lib");
        assert_eq!(options.eslint_file_patterns, vec!["**/*.ts", "**/*.tsx"]);
        assert!(!options.set_parser_options_project);
        assert!(!options.skip_format);
    }

    #[test]
    fn parses_tslint_args() {
        let options = LintProjectOptions::from_args(&to_args(&[
            "--project",
            "test-lib",
            "--linter",
            "tslint",
            "--ts-config-paths",
            "tsconfig.json",
        ]))
        .unwrap();

        assert_eq!(options.linter, Linter::TsLint);
        assert_eq!(options.ts_config_paths, vec!["tsconfig.json"]);
    }

    #[test]
    fn defaults_to_eslint() {
        let options =
            LintProjectOptions::from_args(&to_args(&["--project", "test-lib"])).unwrap();

        assert_eq!(options.linter, Linter::EsLint);
    }

    #[test]
    fn parses_flags() {
        let options = LintProjectOptions::from_args(&to_args(&[
            "--project",
            "test-lib",
            "--set-parser-options-project",
            "--skip-format",
        ]))
        .unwrap();

        assert!(options.set_parser_options_project);
        assert!(options.skip_format);
    }

    #[test]
    fn rejects_unknown_linters() {
        let error = LintProjectOptions::from_args(&to_args(&[
            "--project",
            "test-lib",
            "--linter",
            "jshint",
        ]))
        .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Unsupported linter jshint, expected eslint or tslint."
        );
    }

    #[test]
    fn rejects_a_missing_project() {
        let error =
            LintProjectOptions::from_args(&to_args(&["--linter", "eslint"])).unwrap_err();

        assert!(error.to_string().starts_with("Invalid generator options:"));
    }

    #[test]
    fn validates_linter_specific_lists() {
        let options =
            LintProjectOptions::from_args(&to_args(&["--project", "test-lib"])).unwrap();

        assert!(options.validate().is_err());

        let options = LintProjectOptions::from_args(&to_args(&[
            "--project",
            "test-lib",
            "--eslint-file-patterns",
            "**/*.ts",
        ]))
        .unwrap();

        assert!(options.validate().is_ok());
    }
}
