use crate::options::{Linter, LintProjectOptions};
use nx_generator_common::error::GeneratorError;
use nx_generator_common::tree::FileTree;
use starbase_utils::json;
use std::path::{Component, Path};
use tracing::debug;

pub const ESLINT_CONFIG_FILE: &str = ".eslintrc.json";
pub const ESLINT_JS_CONFIG_FILE: &str = ".eslintrc.js";
pub const TSLINT_CONFIG_FILE: &str = "tslint.json";

/// Shared base for a scaffolded workspace-root ESLint config.
pub const ROOT_ESLINT_BASE: &str = "eslint:recommended";

/// Stage the linter config file for the project, extending the workspace
/// root config by reference.
pub fn create_lint_config(
    tree: &mut dyn FileTree,
    project_root: &Path,
    options: &LintProjectOptions,
) -> Result<(), GeneratorError> {
    match options.linter {
        Linter::EsLint => create_eslint_config(tree, project_root, options),
        Linter::TsLint => create_tslint_config(tree, project_root),
    }
}

fn create_eslint_config(
    tree: &mut dyn FileTree,
    project_root: &Path,
    options: &LintProjectOptions,
) -> Result<(), GeneratorError> {
    let offset = offset_from_root(project_root);

    // Prefer an existing root `.eslintrc.js`, otherwise fall back to a root
    // `.eslintrc.json`, scaffolding it on first use.
    let extends = if tree.exists(Path::new(ESLINT_JS_CONFIG_FILE)) {
        format!("{offset}{ESLINT_JS_CONFIG_FILE}")
    } else {
        if !tree.exists(Path::new(ESLINT_CONFIG_FILE)) {
            debug!("Creating workspace root {ESLINT_CONFIG_FILE}");

            tree.write(
                Path::new(ESLINT_CONFIG_FILE),
                json::format(
                    &serde_json::json!({
                        "root": true,
                        "ignorePatterns": ["**/*"],
                        "extends": [ROOT_ESLINT_BASE],
                    }),
                    false,
                )?,
            );
        }

        format!("{offset}{ESLINT_CONFIG_FILE}")
    };

    let mut config = serde_json::json!({
        "extends": [extends],
    });

    if options.set_parser_options_project {
        config["parserOptions"] = serde_json::json!({
            "project": [format!("{}/tsconfig.*?.json", project_root.display())],
        });
    }

    tree.write(
        &project_root.join(ESLINT_CONFIG_FILE),
        json::format(&config, false)?,
    );

    Ok(())
}

fn create_tslint_config(
    tree: &mut dyn FileTree,
    project_root: &Path,
) -> Result<(), GeneratorError> {
    let offset = offset_from_root(project_root);

    if !tree.exists(Path::new(TSLINT_CONFIG_FILE)) {
        debug!("Creating workspace root {TSLINT_CONFIG_FILE}");

        tree.write(
            Path::new(TSLINT_CONFIG_FILE),
            json::format(&serde_json::json!({ "rules": {} }), false)?,
        );
    }

    tree.write(
        &project_root.join(TSLINT_CONFIG_FILE),
        json::format(
            &serde_json::json!({
                "extends": format!("{offset}{TSLINT_CONFIG_FILE}"),
                "rules": {},
            }),
            false,
        )?,
    );

    Ok(())
}

fn offset_from_root(project_root: &Path) -> String {
    let depth = project_root
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .count();

    "../".repeat(depth)
}
