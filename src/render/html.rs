//! HTML Template Renderer
//!
//! Reads a template from disk and replaces `{{ name }}` placeholders.

use std::fs;
use std::path::PathBuf;

use regex::{NoExpand, Regex};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{CacheError, Result};

// == Html Renderer ==
/// Renders templates found under `base_path`.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Directory template paths are resolved against
    base_path: PathBuf,
    /// Warn when a placeholder is replaced by an empty string
    debug: bool,
}

impl HtmlRenderer {
    // == Constructor ==
    pub fn new(base_path: impl Into<PathBuf>, debug: bool) -> Self {
        Self {
            base_path: base_path.into(),
            debug,
        }
    }

    // == Render ==
    /// Reads `template_path` (relative to the base path) and applies `replacements`.
    pub fn render(&self, template_path: &str, replacements: &Map<String, Value>) -> Result<String> {
        if template_path.is_empty() {
            return Err(CacheError::InvalidInput(
                "Template path is required".to_string(),
            ));
        }

        let template = self.read_template(template_path)?;
        self.replace(&template, replacements)
    }

    // == Read Template ==
    fn read_template(&self, template_path: &str) -> Result<String> {
        let full_path = self.base_path.join(template_path);

        fs::read_to_string(&full_path).map_err(|err| {
            CacheError::TemplateMissing(format!("{} - {}", full_path.display(), err))
        })
    }

    // == Replace ==
    /// Substitutes every `{{ name }}` for which `replacements` has an entry.
    ///
    /// Placeholders without an entry are left untouched. Names are matched
    /// literally and may contain regex metacharacters.
    pub fn replace(&self, template: &str, replacements: &Map<String, Value>) -> Result<String> {
        if template.is_empty() {
            return Err(CacheError::InvalidInput(
                "Template content is required".to_string(),
            ));
        }

        let mut html = template.to_string();
        for (name, value) in replacements {
            let pattern = format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(name));
            let placeholder = Regex::new(&pattern)
                .map_err(|err| CacheError::Internal(format!("placeholder {}: {}", name, err)))?;

            let text = self.stringify(name, value);
            html = placeholder
                .replace_all(&html, NoExpand(&text))
                .into_owned();
        }

        Ok(html)
    }

    /// Text inserted for a replacement value.
    fn stringify(&self, name: &str, value: &Value) -> String {
        match value {
            Value::Null => {
                if self.debug {
                    warn!("[Html] Replacing {} with empty string (value was null)", name);
                }
                String::new()
            }
            Value::String(text) => text.clone(),
            Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
                value.to_string()
            }
        }
    }
}
