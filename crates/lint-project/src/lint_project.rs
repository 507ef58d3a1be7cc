use crate::lint_config::create_lint_config;
use crate::lint_target::create_lint_target;
use crate::options::LintProjectOptions;
use nx_generator_common::error::GeneratorError;
use nx_generator_common::format::format_staged_files;
use nx_generator_common::tree::FileTree;
use nx_generator_common::workspace::Workspace;
use tracing::{debug, warn};

pub const LINT_TARGET: &str = "lint";

/// Scaffold lint tooling into a project: stage its linter config file(s)
/// and register a `lint` target on its configuration. All file writes go
/// through the injected tree; the host commits both the tree and the
/// patched project.
pub fn generate_lint_project(
    tree: &mut dyn FileTree,
    workspace: &mut Workspace,
    options: &LintProjectOptions,
) -> Result<(), GeneratorError> {
    options.validate()?;

    // Resolve the project up front so a bad name fails before anything is
    // staged.
    let project_root = workspace.get_project(&options.project)?.root.clone();

    debug!(
        "Scaffolding {:?} lint config for project {}",
        options.linter, options.project
    );

    create_lint_config(tree, &project_root, options)?;

    let target = create_lint_target(options, &project_root);
    let project = workspace.get_project_mut(&options.project)?;

    if project.targets.insert(LINT_TARGET.into(), target).is_some() {
        warn!(
            "Project {} already had a {LINT_TARGET} target, replacing it",
            options.project
        );
    }

    if !options.skip_format {
        format_staged_files(tree)?;
    }

    Ok(())
}
