pub mod lint_config;
pub mod lint_project;
pub mod lint_target;
pub mod options;
