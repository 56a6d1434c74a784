//! Template discovery.
//! Enumerates every file under a template root, dotfiles included.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Lists all files below `template_root` as forward-slash separated paths
/// relative to the root, sorted by path.
///
/// Directories are not listed. Hidden entries are included.
///
/// # Errors
/// * `Error::WalkDirError` if the root or any entry below it cannot be read
pub fn discover_templates<P: AsRef<Path>>(template_root: P) -> Result<Vec<String>> {
    let template_root = template_root.as_ref();
    if template_root.is_file() {
        return Err(Error::ConfigError(format!(
            "Template root '{}' is not a directory",
            template_root.display()
        )));
    }
    let mut entries = Vec::new();

    for entry in WalkDir::new(template_root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        let relative_path = relative_path
            .components()
            .map(|c| {
                c.as_os_str()
                    .to_str()
                    .ok_or_else(|| Error::ConfigError(format!("Invalid path: {:?}", relative_path)))
            })
            .collect::<Result<Vec<_>>>()?
            .join("/");

        debug!("Discovered template: {}", relative_path);
        entries.push(relative_path);
    }

    entries.sort();
    Ok(entries)
}
