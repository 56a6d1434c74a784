//! Project materialization.
//! Walks the template root, applies the skip rules, renders every remaining
//! entry and writes it below the output root, then synthesizes the manifests
//! of the selected workspace packages.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::{Configuration, PackageId},
    constants::{MANIFEST_FILE, PACKAGES_DIR, PACKAGE_SOURCE_DIR, TEMPLATE_SUFFIX},
    discovery::discover_templates,
    error::{Error, Result},
    ignore::SkipRules,
    manifest::PackageManifest,
    renderer::TemplateRenderer,
};

/// Makes sure `output_dir` exists and is a directory.
///
/// # Errors
/// * `Error::OutputDirectoryError` if the path exists but is not a directory
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(Error::OutputDirectoryError {
            output_dir: output_dir.display().to_string(),
        });
    }
    fs::create_dir_all(output_dir)?;
    Ok(output_dir.to_path_buf())
}

/// True if the file name carries the template suffix in front of a
/// non-empty name.
pub fn is_template_path(template_path: &str) -> bool {
    let file_name = template_path.rsplit('/').next().unwrap_or(template_path);
    file_name.len() > TEMPLATE_SUFFIX.len() && file_name.ends_with(TEMPLATE_SUFFIX)
}

/// Output path of a template entry: the template suffix is removed when it
/// ends the path, anything else is kept verbatim.
pub fn resolve_output_path(template_path: &str) -> &str {
    if is_template_path(template_path) {
        &template_path[..template_path.len() - TEMPLATE_SUFFIX.len()]
    } else {
        template_path
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

/// Materializes a project from a template root and a configuration.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    rules: &'a SkipRules,
    template_root: &'a Path,
    output_root: &'a Path,
    config: &'a Configuration,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        rules: &'a SkipRules,
        template_root: &'a Path,
        output_root: &'a Path,
        config: &'a Configuration,
    ) -> Self {
        Self { renderer, rules, template_root, output_root, config }
    }

    /// Runs the whole materialization pass.
    ///
    /// Returns the written files relative to the output root, in write order.
    /// The first failing filesystem operation aborts the run; files written
    /// before it stay on disk.
    pub fn materialize(&self) -> Result<Vec<PathBuf>> {
        debug!("Processing templates from {}", self.template_root.display());
        let context = self.config.context()?;
        let mut written = Vec::new();

        for template_path in discover_templates(self.template_root)? {
            if let Some(output_path) = self.process(&template_path, &context)? {
                written.push(output_path);
            }
        }

        if self.config.use_monorepo {
            for package in &self.config.packages {
                written.push(self.write_package(*package)?);
            }
        }

        info!("Generated {} files in {}", written.len(), self.output_root.display());
        Ok(written)
    }

    /// Processes one template entry. Returns `None` when a skip rule applies.
    pub fn process(
        &self,
        template_path: &str,
        context: &serde_json::Value,
    ) -> Result<Option<PathBuf>> {
        debug!("Processing source file: {}", template_path);

        if self.rules.is_binary(template_path) {
            return Ok(None);
        }

        let raw = fs::read(self.template_root.join(template_path))?;
        let content = self.renderer.render(&String::from_utf8_lossy(&raw), context)?;

        let output_path = resolve_output_path(template_path);
        if self.rules.conditional_skip(output_path, self.config).is_some() {
            return Ok(None);
        }

        let target = self.output_root.join(output_path);
        debug!("Writing file: {}", target.display());
        write_file(&target, &content)?;
        Ok(Some(PathBuf::from(output_path)))
    }

    /// Creates `packages/<id>/src` and writes the package manifest.
    fn write_package(&self, package: PackageId) -> Result<PathBuf> {
        let package_dir = Path::new(PACKAGES_DIR).join(package.as_str());
        fs::create_dir_all(self.output_root.join(&package_dir).join(PACKAGE_SOURCE_DIR))?;

        let manifest_path = package_dir.join(MANIFEST_FILE);
        let manifest = PackageManifest::new(package, self.config);
        debug!("Writing manifest: {}", manifest_path.display());
        write_file(&self.output_root.join(&manifest_path), &manifest.to_json()?)?;
        Ok(manifest_path)
    }
}
