//! Git integration for generated projects: the environment check run before
//! anything is written, the pre-commit hook and the commit message template.

use std::fs;
use std::path::{Path, PathBuf};

use git2::{ConfigLevel, Repository};
use log::{debug, warn};

use crate::constants::{
    COMMIT_TEMPLATE, COMMIT_TEMPLATE_FILE, GUARDRAILS_SCRIPT, PRE_COMMIT_HOOK,
};
use crate::error::{Error, Result};

/// Finds the git repository containing `project_root`.
///
/// `project_root` does not have to exist yet: the lookup starts from its
/// nearest existing ancestor and nothing is created on disk.
///
/// # Errors
/// * `Error::EnvironmentError` if `project_root` is not inside a repository
pub fn check_environment<P: AsRef<Path>>(project_root: P) -> Result<Repository> {
    let project_root = project_root.as_ref();
    let start = project_root
        .ancestors()
        .find(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new("."));
    Repository::discover(start).map_err(|e| {
        debug!("Repository lookup in {} failed: {}", project_root.display(), e);
        Error::EnvironmentError(
            "Not in a git repository. Please run \"git init\" first.".to_string(),
        )
    })
}

/// Path of the pre-commit hook inside the repository's git directory.
pub fn pre_commit_hook_path(repo: &Repository) -> PathBuf {
    repo.path().join("hooks").join("pre-commit")
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(Error::IoError)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Writes the pre-commit hook running the guardrails script and marks both
/// executable.
///
/// Returns the path of the written hook.
pub fn install_pre_commit_hook<P: AsRef<Path>>(
    repo: &Repository,
    project_root: P,
) -> Result<PathBuf> {
    let hook_path = pre_commit_hook_path(repo);
    if let Some(parent) = hook_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&hook_path, PRE_COMMIT_HOOK)?;
    make_executable(&hook_path)?;
    debug!("Installed pre-commit hook: {}", hook_path.display());

    let guardrails = project_root.as_ref().join(GUARDRAILS_SCRIPT);
    if guardrails.is_file() {
        make_executable(&guardrails)?;
    } else {
        warn!("{} was not generated, the pre-commit hook will fail", GUARDRAILS_SCRIPT);
    }
    Ok(hook_path)
}

/// Writes the commit message template into the project root.
pub fn write_commit_template<P: AsRef<Path>>(project_root: P) -> Result<PathBuf> {
    let template_path = project_root.as_ref().join(COMMIT_TEMPLATE_FILE);
    fs::write(&template_path, COMMIT_TEMPLATE)?;
    Ok(template_path)
}

/// Points `commit.template` at the generated template.
///
/// Git configuration is best effort: failures are logged and ignored.
pub fn configure_commit_template(repo: &Repository) {
    let result = repo
        .config()
        .and_then(|config| config.open_level(ConfigLevel::Local))
        .and_then(|mut local| local.set_str("commit.template", COMMIT_TEMPLATE_FILE));
    if let Err(e) = result {
        warn!("Could not set commit.template: {}", e);
    }
}
