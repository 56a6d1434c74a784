//! Skip rules deciding which template entries end up in the generated project.
//!
//! Two independent checks run for every entry:
//! 1. the binary-extension rule, applied to the template path, excludes
//!    assets that must never reach the renderer;
//! 2. the conditional rules, applied to the output path, exclude
//!    feature-gated files. They run in order and the first match wins.

use crate::config::Configuration;
use crate::constants::{BINARY_EXTENSIONS, CI_WORKFLOW_MARKER, TYPESCRIPT_CONFIG_MARKER};
use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// A feature gate evaluated against an output path.
#[derive(Debug, Clone, Copy)]
pub struct ConditionalRule {
    /// Name reported when the rule excludes a file
    pub name: &'static str,
    /// Returns true when the output path must be skipped
    pub applies: fn(&str, &Configuration) -> bool,
}

fn skip_typescript_config(output_path: &str, config: &Configuration) -> bool {
    !config.use_type_script && output_path.contains(TYPESCRIPT_CONFIG_MARKER)
}

fn skip_ci_workflows(output_path: &str, config: &Configuration) -> bool {
    !config.setup_github_actions && output_path.contains(CI_WORKFLOW_MARKER)
}

/// The built-in feature gates, in evaluation order.
pub const DEFAULT_RULES: [ConditionalRule; 2] = [
    ConditionalRule { name: "typescript-config", applies: skip_typescript_config },
    ConditionalRule { name: "ci-workflows", applies: skip_ci_workflows },
];

/// Evaluates skip rules for template entries.
#[derive(Debug, Clone)]
pub struct SkipRules {
    binary: GlobSet,
    conditional: Vec<ConditionalRule>,
}

impl SkipRules {
    /// Builds the evaluator with the binary denylist and the default rules.
    ///
    /// # Errors
    /// * `Error::GlobSetParseError` if a binary pattern fails to compile
    pub fn new() -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for extension in BINARY_EXTENSIONS {
            builder.add(Glob::new(&format!("*.{extension}"))?);
        }
        Ok(Self { binary: builder.build()?, conditional: DEFAULT_RULES.to_vec() })
    }

    /// Appends a rule evaluated after the existing ones.
    pub fn with_rule(mut self, rule: ConditionalRule) -> Self {
        self.conditional.push(rule);
        self
    }

    /// True if the template path names a binary asset.
    pub fn is_binary(&self, template_path: &str) -> bool {
        let matched = self.binary.is_match(template_path);
        if matched {
            debug!("Skipping binary file: {}", template_path);
        }
        matched
    }

    /// Name of the first conditional rule excluding `output_path`, if any.
    pub fn conditional_skip(
        &self,
        output_path: &str,
        config: &Configuration,
    ) -> Option<&'static str> {
        let rule = self.conditional.iter().find(|rule| (rule.applies)(output_path, config))?;
        debug!("Skipping {} (rule: {})", output_path, rule.name);
        Some(rule.name)
    }
}
