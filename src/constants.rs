//! Common constants used throughout the vibecode application.

/// Trailing pseudo-extension marking a file as a template
pub const TEMPLATE_SUFFIX: &str = ".hbs";

/// Extensions that are never passed through the renderer
pub const BINARY_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "ico", "pdf"];

/// Output paths containing this marker are TypeScript configuration
pub const TYPESCRIPT_CONFIG_MARKER: &str = "tsconfig";

/// Output paths under this directory are CI workflows
pub const CI_WORKFLOW_MARKER: &str = ".github/workflows";

/// Directory holding the generated workspace packages
pub const PACKAGES_DIR: &str = "packages";

/// Source directory created inside every workspace package
pub const PACKAGE_SOURCE_DIR: &str = "src";

/// Manifest file name written for every workspace package
pub const MANIFEST_FILE: &str = "package.json";

/// Version given to freshly generated packages
pub const INITIAL_PACKAGE_VERSION: &str = "0.1.0";

/// Guardrails script invoked by the pre-commit hook
pub const GUARDRAILS_SCRIPT: &str = "scripts/agent-guardrails.sh";

/// Commit message template file name, relative to the project root
pub const COMMIT_TEMPLATE_FILE: &str = ".gitmessage";

pub const PRE_COMMIT_HOOK: &str = r#"#!/bin/bash
# Pre-commit hook for AI code validation
exec ./scripts/agent-guardrails.sh
"#;

pub const COMMIT_TEMPLATE: &str = r#"# [type](scope): brief description
#
# Detailed explanation of the change and why it was made.
# Include context about the problem being solved.
#
# - Key change 1
# - Key change 2
# - Key change 3
#
# AI-Generated: [Yes/No]
# Reviewed-by: [Human reviewer name]
# Refs: #[issue number]
"#;
