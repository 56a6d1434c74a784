//! Vibecode sets up collaborative AI development projects.
//! It collects a configuration, renders a tree of Handlebars templates into the
//! project root and wires up git hooks and a commit message template.

/// Command-line interface module for the vibecode application
pub mod cli;

/// Configuration answers and the resolved run configuration
pub mod config;

pub mod constants;

/// Error types and handling for the vibecode application
pub mod error;

/// Template file enumeration
pub mod discovery;

/// Functions available inside templates
pub mod helpers;

/// Git environment check, pre-commit hook and commit message template
pub mod hooks;

/// Binary and feature-gated file exclusion
pub mod ignore;

pub mod logger;

/// Per-package manifest synthesis
pub mod manifest;

/// Core project materialization
/// Combines all components to generate the final output
pub mod processor;

/// Configuration suppliers: prompts, answers files and the built-in preset
pub mod prompt;

/// Template rendering
pub mod renderer;

/// Package name validation
pub mod validation;
