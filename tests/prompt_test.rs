use std::fs;
use tempfile::TempDir;
use vibecode::config::Answers;
use vibecode::prompt::{
    default_project_name, gather_configuration, AnswersFile, ConfigurationGatherer, Preset,
};

#[test]
fn test_preset_gatherer() {
    let config = gather_configuration(&Preset).unwrap();

    assert_eq!(config.project_name, "test-vibecode-project");
    assert_eq!(config.author, "Test User");
    assert_eq!(config.package_name_scoped, "@test-vibecode-project");
    assert_eq!(config.packages.len(), 4);
}

#[test]
fn test_suppliers_are_interchangeable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    fs::write(
        &path,
        r#"{
            "projectName": "test-vibecode-project",
            "description": "Test AI-assisted collaborative development project",
            "author": "Test User"
        }"#,
    )
    .unwrap();

    let from_file = AnswersFile::new(&path, "unused").gather().unwrap();
    assert_eq!(from_file, Preset.gather().unwrap());
    assert_eq!(from_file, Answers::preset());
}

#[test]
fn test_default_project_name() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("my-app");
    fs::create_dir(&project).unwrap();

    assert_eq!(default_project_name(&project), "my-app");
}
