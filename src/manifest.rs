//! Package manifests synthesized for workspace packages.

use crate::config::{Configuration, PackageId};
use crate::constants::INITIAL_PACKAGE_VERSION;
use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// `package.json` contents for one workspace package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Derives the manifest of `package` from the configuration.
    pub fn new(package: PackageId, config: &Configuration) -> Self {
        let typed = config.use_type_script;

        let scripts = IndexMap::from([
            (
                "build".to_string(),
                if typed { "tsc" } else { "echo \"No build step needed\"" }.to_string(),
            ),
            ("dev".to_string(), "node --watch src/index.js".to_string()),
            ("test".to_string(), "node --test test/**/*.test.js".to_string()),
        ]);

        let dev_dependencies = if typed {
            IndexMap::from([
                ("typescript".to_string(), "^5.3.0".to_string()),
                ("@types/node".to_string(), "^20.10.0".to_string()),
            ])
        } else {
            IndexMap::new()
        };

        Self {
            name: format!("{}/{}", config.package_name_scoped, package),
            version: INITIAL_PACKAGE_VERSION.to_string(),
            description: format!("{} package for {}", package, config.project_name),
            main: if typed { "dist/index.js" } else { "src/index.js" }.to_string(),
            types: typed.then(|| "dist/index.d.ts".to_string()),
            scripts,
            dependencies: IndexMap::new(),
            dev_dependencies,
        }
    }

    /// Serializes the manifest with 2-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
