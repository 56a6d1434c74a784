//! Package-name validation applied by configuration suppliers.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

const MAX_NAME_LENGTH: usize = 214;

const RESERVED_NAMES: [&str; 2] = ["node_modules", "favicon.ico"];

static URL_SAFE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(@[a-z0-9\-._~]+/)?[a-z0-9\-._~]+$").unwrap());

/// Checks whether `name` can be used as the name of a new package.
///
/// Returns the first violated rule as a `ValidationError`.
pub fn validate_package_name(name: &str) -> Result<()> {
    let fail = |message: &str| Err(Error::ValidationError(message.to_string()));

    if name.is_empty() {
        return fail("name length must be greater than zero");
    }
    if name.trim() != name {
        return fail("name cannot contain leading or trailing spaces");
    }
    if name.starts_with('.') {
        return fail("name cannot start with a period");
    }
    if name.starts_with('_') {
        return fail("name cannot start with an underscore");
    }
    if RESERVED_NAMES.contains(&name.to_lowercase().as_str()) {
        return fail(&format!("{name} is not a valid package name"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return fail("name can no longer contain more than 214 characters");
    }
    if name.to_lowercase() != name {
        return fail("name can no longer contain capital letters");
    }
    if name.contains(['~', '\'', '!', '(', ')', '*']) {
        return fail("name can no longer contain special characters (\"~'!()*\")");
    }

    if !URL_SAFE_NAME.is_match(name) {
        return fail("name can only contain URL-friendly characters");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_package_name("my-project").is_ok());
        assert!(validate_package_name("vibecode.blueprint").is_ok());
        assert!(validate_package_name("@scope/pkg").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_package_name("").is_err());
        assert!(validate_package_name(" padded").is_err());
        assert!(validate_package_name(".hidden").is_err());
        assert!(validate_package_name("_private").is_err());
        assert!(validate_package_name("MyProject").is_err());
        assert!(validate_package_name("node_modules").is_err());
        assert!(validate_package_name("with space").is_err());
        assert!(validate_package_name("bang!").is_err());
        assert!(validate_package_name(&"a".repeat(215)).is_err());
    }

    #[test]
    fn test_url_safe_names_across_calls() {
        for _ in 0..3 {
            assert!(validate_package_name("@scope/pkg.name-1").is_ok());
            let err = validate_package_name("with space").unwrap_err();
            assert_eq!(
                err.to_string(),
                "Validation error: name can only contain URL-friendly characters."
            );
            assert!(validate_package_name("@scope/").is_err());
        }
    }

    #[test]
    fn test_error_message() {
        let err = validate_package_name("Upper").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: name can no longer contain capital letters."
        );
    }
}
