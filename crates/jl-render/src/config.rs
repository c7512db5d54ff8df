use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::FieldRenderers;
use crate::renderer::Renderer;
use crate::Result;

/// Renderer configuration as stored in TOML.
///
/// ```toml
/// builtin = true
///
/// [fields]
/// stack = "trace"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Start from the built-in field mapping
    #[serde(default = "default_builtin")]
    pub builtin: bool,

    /// Per-field overrides
    #[serde(default)]
    pub fields: BTreeMap<String, Renderer>,
}

fn default_builtin() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            builtin: default_builtin(),
            fields: BTreeMap::new(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Build the field mapping; config entries override built-ins.
    pub fn field_renderers(&self) -> FieldRenderers {
        let mut renderers = if self.builtin {
            FieldRenderers::builtin()
        } else {
            FieldRenderers::new()
        };
        for (field, renderer) in &self.fields {
            renderers.set(field.clone(), *renderer);
        }
        renderers
    }
}
