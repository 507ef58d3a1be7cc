use clap::Args;
use nx_generator_common::args::parse_args;
use nx_generator_common::error::GeneratorError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Linter {
    EsLint,
    TsLint,
}

impl FromStr for Linter {
    type Err = GeneratorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "eslint" => Ok(Self::EsLint),
            "tslint" => Ok(Self::TsLint),
            other => Err(GeneratorError::UnsupportedLinter(other.to_owned())),
        }
    }
}

#[derive(Args, Debug)]
pub struct LintProjectArgs {
    #[arg(long, required = true)]
    pub project: String,

    #[arg(long, default_value = "eslint")]
    pub linter: String,

    #[arg(long)]
    pub eslint_file_patterns: Vec<String>,

    #[arg(long)]
    pub ts_config_paths: Vec<String>,

    #[arg(long)]
    pub set_parser_options_project: bool,

    #[arg(long)]
    pub skip_format: bool,
}

#[derive(Clone, Debug)]
pub struct LintProjectOptions {
    pub linter: Linter,
    pub project: String,
    pub eslint_file_patterns: Vec<String>,
    pub ts_config_paths: Vec<String>,
    pub set_parser_options_project: bool,
    pub skip_format: bool,
}

impl LintProjectOptions {
    /// Map a raw host argument list into options.
    pub fn from_args(args: &[String]) -> Result<Self, GeneratorError> {
        let args = parse_args::<LintProjectArgs>(args)?;

        Ok(Self {
            linter: args.linter.parse()?,
            project: args.project,
            eslint_file_patterns: args.eslint_file_patterns,
            ts_config_paths: args.ts_config_paths,
            set_parser_options_project: args.set_parser_options_project,
            skip_format: args.skip_format,
        })
    }

    /// Linter-specific option lists must be present before any file content
    /// is computed.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        match self.linter {
            Linter::EsLint if self.eslint_file_patterns.is_empty() => {
                Err(GeneratorError::InvalidOptions(
                    "ESLint requires at least one file pattern (--eslint-file-patterns).".into(),
                ))
            }
            Linter::TsLint if self.ts_config_paths.is_empty() => {
                Err(GeneratorError::InvalidOptions(
                    "TSLint requires at least one tsconfig path (--ts-config-paths).".into(),
                ))
            }
            _ => Ok(()),
        }
    }
}
