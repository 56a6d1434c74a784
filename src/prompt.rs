//! Configuration suppliers.
//! Interactive prompting, answers files and the built-in preset all produce
//! the same `Answers`, which are resolved into a `Configuration` in one place.

use crate::config::{load_answers, Answers, Configuration, PackageId, PackageManager};
use crate::error::Result;
use crate::validation::validate_package_name;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use std::path::{Path, PathBuf};

/// A source of configuration answers.
pub trait ConfigurationGatherer {
    fn gather(&self) -> Result<Answers>;
}

/// Collects answers and resolves the derived configuration fields.
pub fn gather_configuration(gatherer: &dyn ConfigurationGatherer) -> Result<Configuration> {
    Ok(Configuration::new(gatherer.gather()?))
}

/// Project name suggested for a project generated into `project_root`:
/// the name of the directory itself.
pub fn default_project_name<P: AsRef<Path>>(project_root: P) -> String {
    let project_root = project_root.as_ref();
    std::fs::canonicalize(project_root)
        .unwrap_or_else(|_| project_root.to_path_buf())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Asks the user for every answer in the terminal.
pub struct DialoguerPrompter {
    default_name: String,
}

impl DialoguerPrompter {
    pub fn new(default_name: impl Into<String>) -> Self {
        Self { default_name: default_name.into() }
    }

    fn text(&self, prompt: &str, default: String) -> Result<String> {
        Ok(Input::new().with_prompt(prompt).default(default).interact_text()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}

impl ConfigurationGatherer for DialoguerPrompter {
    fn gather(&self) -> Result<Answers> {
        println!("\n📝 Project Configuration");
        let defaults = Answers::default();

        let project_name: String = Input::new()
            .with_prompt("Project name")
            .default(self.default_name.clone())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate_package_name(input).map_err(|e| e.to_string())
            })
            .interact_text()?;
        let description = self.text("Project description", defaults.description)?;
        let author = self.text("Author name", defaults.author)?;
        let use_type_script = self.confirm("Use TypeScript?", defaults.use_type_script)?;
        let use_monorepo =
            self.confirm("Set up as monorepo with workspaces?", defaults.use_monorepo)?;

        let packages = if use_monorepo {
            let labels: Vec<String> = PackageId::ALL
                .iter()
                .map(|id| format!("{} - {}", id, id.summary()))
                .collect();
            let checked: Vec<bool> =
                PackageId::ALL.iter().map(PackageId::selected_by_default).collect();
            MultiSelect::new()
                .with_prompt("Select packages to create")
                .items(&labels)
                .defaults(&checked)
                .interact()?
                .into_iter()
                .map(|index| PackageId::ALL[index])
                .collect()
        } else {
            Vec::new()
        };

        let managers: Vec<&str> = PackageManager::ALL.iter().map(|m| m.as_str()).collect();
        let selection = Select::new()
            .with_prompt("Package manager")
            .items(&managers)
            .default(0)
            .interact()?;

        let setup_git_hooks = self.confirm(
            "Install pre-commit hooks for AI code validation?",
            defaults.setup_git_hooks,
        )?;
        let setup_github_actions =
            self.confirm("Set up GitHub Actions CI/CD?", defaults.setup_github_actions)?;

        Ok(Answers {
            project_name,
            description,
            author,
            use_type_script,
            use_monorepo,
            packages,
            package_manager: PackageManager::ALL[selection],
            setup_git_hooks,
            setup_github_actions,
        })
    }
}

/// Reads answers from a JSON or YAML file.
pub struct AnswersFile {
    path: PathBuf,
    default_name: String,
}

impl AnswersFile {
    pub fn new(path: impl Into<PathBuf>, default_name: impl Into<String>) -> Self {
        Self { path: path.into(), default_name: default_name.into() }
    }
}

impl ConfigurationGatherer for AnswersFile {
    fn gather(&self) -> Result<Answers> {
        load_answers(&self.path, &self.default_name)
    }
}

/// Supplies the fixed built-in answers without asking anything.
pub struct Preset;

impl ConfigurationGatherer for Preset {
    fn gather(&self) -> Result<Answers> {
        Ok(Answers::preset())
    }
}
