use std::fs;
use tempfile::TempDir;
use vibecode::config::{load_answers, parse_answers, Answers, Configuration, PackageId, PackageManager};
use vibecode::error::Error;

#[test]
fn test_derived_fields() {
    let answers = Answers { project_name: "robot".to_string(), ..Answers::default() };
    let config = Configuration::with_year(answers, 2031);

    assert_eq!(config.package_name_scoped, "@robot");
    assert_eq!(config.current_year, 2031);
    assert!(config.use_workspaces);
    assert_eq!(
        config.packages,
        vec![PackageId::Core, PackageId::Api, PackageId::Web, PackageId::SharedTypes]
    );
}

#[test]
fn test_packages_cleared_without_workspace_mode() {
    let answers = Answers {
        project_name: "robot".to_string(),
        use_monorepo: false,
        packages: vec![PackageId::Core, PackageId::Cli],
        ..Answers::default()
    };
    let config = Configuration::new(answers);

    assert!(!config.use_workspaces);
    assert!(config.packages.is_empty());
}

#[test]
fn test_context_uses_template_field_names() {
    let config = Configuration::with_year(Answers::preset(), 2024);
    let context = config.context().unwrap();

    assert_eq!(context["projectName"], "test-vibecode-project");
    assert_eq!(context["packageNameScoped"], "@test-vibecode-project");
    assert_eq!(context["useTypeScript"], true);
    assert_eq!(context["setupGithubActions"], true);
    assert_eq!(context["packageManager"], "pnpm");
    assert_eq!(context["packages"], serde_json::json!(["core", "api", "web", "shared-types"]));
    assert_eq!(context["currentYear"], 2024);
}

#[test]
fn test_parse_json_answers() {
    let answers = parse_answers(
        r#"{"projectName": "robot", "useTypeScript": false, "packages": ["cli"], "packageManager": "yarn"}"#,
    )
    .unwrap();

    assert_eq!(answers.project_name, "robot");
    assert!(!answers.use_type_script);
    assert_eq!(answers.packages, vec![PackageId::Cli]);
    assert_eq!(answers.package_manager, PackageManager::Yarn);
    // Omitted keys keep their defaults.
    assert_eq!(answers.author, "Your Name");
    assert!(answers.setup_git_hooks);
}

#[test]
fn test_parse_yaml_answers() {
    let answers = parse_answers(
        "projectName: robot\nuseMonorepo: false\nsetupGithubActions: false\npackageManager: npm\n",
    )
    .unwrap();

    assert!(!answers.use_monorepo);
    assert!(!answers.setup_github_actions);
    assert_eq!(answers.package_manager, PackageManager::Npm);
}

#[test]
fn test_parse_invalid_answers() {
    let result = parse_answers("packages: [unknown-package]");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_load_answers_defaults_project_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    fs::write(&path, r#"{"author": "Ada"}"#).unwrap();

    let answers = load_answers(&path, "fallback-name").unwrap();
    assert_eq!(answers.project_name, "fallback-name");
    assert_eq!(answers.author, "Ada");
}

#[test]
fn test_load_answers_validates_project_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.yml");
    fs::write(&path, "projectName: Not Valid\n").unwrap();

    assert!(matches!(load_answers(&path, "x"), Err(Error::ValidationError(_))));
}

#[test]
fn test_load_answers_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_answers(temp_dir.path().join("nope.json"), "x");
    assert!(matches!(result, Err(Error::ConfigError(_))));
}
