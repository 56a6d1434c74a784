use vibecode::config::{Answers, Configuration};
use vibecode::ignore::{ConditionalRule, SkipRules};

fn config(use_type_script: bool, setup_github_actions: bool) -> Configuration {
    Configuration::with_year(
        Answers {
            project_name: "demo".to_string(),
            use_type_script,
            setup_github_actions,
            ..Answers::default()
        },
        2024,
    )
}

#[test]
fn test_binary_extensions() {
    let rules = SkipRules::new().unwrap();

    for path in ["logo.png", "assets/photo.jpg", "a/b/c.jpeg", "anim.gif", "favicon.ico", "docs/spec.pdf"] {
        assert!(rules.is_binary(path), "{path} should be binary");
    }
    assert!(!rules.is_binary("README.md.hbs"));
    assert!(!rules.is_binary("png.txt"));
    assert!(!rules.is_binary("logo.png.hbs"));
}

#[test]
fn test_typescript_config_rule() {
    let rules = SkipRules::new().unwrap();

    assert_eq!(rules.conditional_skip("tsconfig.json", &config(false, true)), Some("typescript-config"));
    assert_eq!(
        rules.conditional_skip("packages/core/tsconfig.build.json", &config(false, true)),
        Some("typescript-config")
    );
    assert_eq!(rules.conditional_skip("tsconfig.json", &config(true, true)), None);
    assert_eq!(rules.conditional_skip("package.json", &config(false, true)), None);
}

#[test]
fn test_ci_workflow_rule() {
    let rules = SkipRules::new().unwrap();

    assert_eq!(rules.conditional_skip(".github/workflows/ci.yml", &config(true, false)), Some("ci-workflows"));
    assert_eq!(
        rules.conditional_skip(".github/workflows/nested/release.yml", &config(true, false)),
        Some("ci-workflows")
    );
    assert_eq!(rules.conditional_skip(".github/workflows/ci.yml", &config(true, true)), None);
    assert_eq!(rules.conditional_skip(".github/CODEOWNERS", &config(true, false)), None);
}

#[test]
fn test_rules_evaluated_in_order() {
    let rules = SkipRules::new().unwrap();
    // Both rules match; the TypeScript rule comes first.
    let skipped = rules.conditional_skip(".github/workflows/tsconfig-check.yml", &config(false, false));
    assert_eq!(skipped, Some("typescript-config"));
}

#[test]
fn test_appended_rule() {
    fn skip_cli_docs(path: &str, config: &Configuration) -> bool {
        path.starts_with("docs/cli") && config.packages.is_empty()
    }
    let rules = SkipRules::new()
        .unwrap()
        .with_rule(ConditionalRule { name: "cli-docs", applies: skip_cli_docs });

    let single = Configuration::with_year(
        Answers { project_name: "demo".to_string(), use_monorepo: false, ..Answers::default() },
        2024,
    );
    assert_eq!(rules.conditional_skip("docs/cli.md", &single), Some("cli-docs"));
    assert_eq!(rules.conditional_skip("docs/cli.md", &config(true, true)), None);
}
