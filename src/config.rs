//! Configuration handling for vibecode projects.
//! This module defines the answers collected from a supplier and the resolved,
//! read-only `Configuration` that drives project materialization.

use crate::error::{Error, Result};
use crate::validation::validate_package_name;
use chrono::Datelike;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Packages that can be generated in workspace mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageId {
    Core,
    Api,
    Web,
    SharedTypes,
    Cli,
}

impl PackageId {
    pub const ALL: [PackageId; 5] = [
        PackageId::Core,
        PackageId::Api,
        PackageId::Web,
        PackageId::SharedTypes,
        PackageId::Cli,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageId::Core => "core",
            PackageId::Api => "api",
            PackageId::Web => "web",
            PackageId::SharedTypes => "shared-types",
            PackageId::Cli => "cli",
        }
    }

    /// Human readable summary shown next to the package in prompts.
    pub fn summary(&self) -> &'static str {
        match self {
            PackageId::Core => "Core business logic",
            PackageId::Api => "REST/GraphQL API",
            PackageId::Web => "Frontend application",
            PackageId::SharedTypes => "Shared TypeScript types",
            PackageId::Cli => "Command line interface",
        }
    }

    pub fn selected_by_default(&self) -> bool {
        !matches!(self, PackageId::Cli)
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Pnpm,
    Npm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Pnpm, PackageManager::Npm, PackageManager::Yarn];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw choices as provided by a configuration supplier.
///
/// Keys omitted from an answers file fall back to the same defaults the
/// interactive prompts offer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Answers {
    pub project_name: String,
    pub description: String,
    pub author: String,
    pub use_type_script: bool,
    pub use_monorepo: bool,
    pub packages: Vec<PackageId>,
    pub package_manager: PackageManager,
    pub setup_git_hooks: bool,
    pub setup_github_actions: bool,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            description: "AI-assisted collaborative development project".to_string(),
            author: "Your Name".to_string(),
            use_type_script: true,
            use_monorepo: true,
            packages: PackageId::ALL
                .into_iter()
                .filter(PackageId::selected_by_default)
                .collect(),
            package_manager: PackageManager::Pnpm,
            setup_git_hooks: true,
            setup_github_actions: true,
        }
    }
}

impl Answers {
    /// The fixed configuration used for non-interactive runs.
    pub fn preset() -> Self {
        Self {
            project_name: "test-vibecode-project".to_string(),
            description: "Test AI-assisted collaborative development project".to_string(),
            author: "Test User".to_string(),
            ..Self::default()
        }
    }
}

/// Fully resolved configuration for one materialization run.
///
/// Derived fields are computed once in [`Configuration::new`]; the value is
/// never mutated afterwards and serializes to the template context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub project_name: String,
    pub description: String,
    pub author: String,
    pub use_type_script: bool,
    pub use_monorepo: bool,
    pub use_workspaces: bool,
    pub packages: Vec<PackageId>,
    pub package_manager: PackageManager,
    pub setup_git_hooks: bool,
    pub setup_github_actions: bool,
    pub package_name_scoped: String,
    pub current_year: i32,
}

impl Configuration {
    /// Resolves answers into a configuration stamped with the current year.
    pub fn new(answers: Answers) -> Self {
        Self::with_year(answers, chrono::Local::now().year())
    }

    pub fn with_year(answers: Answers, current_year: i32) -> Self {
        let packages = if answers.use_monorepo { answers.packages } else { Vec::new() };
        Self {
            package_name_scoped: format!("@{}", answers.project_name),
            project_name: answers.project_name,
            description: answers.description,
            author: answers.author,
            use_type_script: answers.use_type_script,
            use_monorepo: answers.use_monorepo,
            use_workspaces: answers.use_monorepo,
            packages,
            package_manager: answers.package_manager,
            setup_git_hooks: answers.setup_git_hooks,
            setup_github_actions: answers.setup_github_actions,
            current_year,
        }
    }

    /// Builds the JSON context handed to the template renderer.
    pub fn context(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Parses answers content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
pub fn parse_answers(content: &str) -> Result<Answers> {
    match serde_json::from_str(content) {
        Ok(answers) => Ok(answers),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid answers format: {}", e))),
    }
}

/// Loads answers from a JSON or YAML file.
///
/// # Arguments
/// * `path` - Path to the answers file
/// * `default_name` - Project name used when the file does not set one
///
/// # Errors
/// * `Error::ConfigError` if the file is missing or malformed
/// * `Error::ValidationError` if the project name is not a valid package name
pub fn load_answers<P: AsRef<Path>>(path: P, default_name: &str) -> Result<Answers> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid answers path: {}",
            path.display()
        )));
    }
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let mut answers = parse_answers(&content)?;
    if answers.project_name.is_empty() {
        answers.project_name = default_name.to_string();
    }
    validate_package_name(&answers.project_name)?;
    Ok(answers)
}
