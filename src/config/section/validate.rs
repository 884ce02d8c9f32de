//! `[validate]` section configuration.
//!
//! Configuration for the `awaf validate` command.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! level = "error"             # Structural checks: error | warn
//! strict = false              # Unknown config fields fail validation
//!
//! [validate.pages]
//! enable = true               # Every link must have a content page
//! content = "."               # Content directory (relative to awaf.toml)
//! level = "error"
//!
//! [validate.orphans]
//! enable = true               # Report pages no link reaches
//! ignore = ["README.md"]      # Paths relative to the content directory
//! level = "warn"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Main ValidateConfig
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Level for structural checks (empty sections, duplicates, malformed links).
    pub level: ValidateLevel,

    /// Treat unknown config fields as errors.
    pub strict: bool,

    /// Content page cross-check.
    pub pages: PagesValidateConfig,

    /// Orphan page detection.
    pub orphans: OrphansValidateConfig,
}

impl ValidateConfig {
    /// Downgrade every check to a warning.
    pub fn warn_only(&mut self) {
        self.level = ValidateLevel::Warn;
        self.pages.level = ValidateLevel::Warn;
        self.orphans.level = ValidateLevel::Warn;
    }

    /// Whether any check needs the content directory.
    pub fn needs_content(&self) -> bool {
        self.pages.enable || self.orphans.enable
    }

    /// # Checks
    /// - the content directory must exist when a content check is enabled
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.needs_content() && !self.pages.content.is_dir() {
            diag.error_with_hint(
                PagesValidateConfig::CONTENT,
                format!(
                    "content directory `{}` does not exist",
                    self.pages.content.display()
                ),
                format!("set {} or pass --content", PagesValidateConfig::CONTENT),
            );
        }
    }
}

// ============================================================================
// Content checks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesValidateConfig {
    /// Check that every link resolves to a markdown page.
    pub enable: bool,

    /// Content directory. Resolved against the config file's directory.
    pub content: PathBuf,

    /// How to treat missing pages.
    pub level: ValidateLevel,
}

impl PagesValidateConfig {
    pub const CONTENT: FieldPath = FieldPath::new("validate.pages.content");
}

impl Default for PagesValidateConfig {
    fn default() -> Self {
        Self {
            enable: false,
            content: PathBuf::from("."),
            level: ValidateLevel::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrphansValidateConfig {
    /// Report content pages that no nav or sidebar entry links to.
    pub enable: bool,

    /// Pages exempt from the orphan check.
    pub ignore: Vec<String>,

    /// How to treat orphan pages.
    pub level: ValidateLevel,
}

impl Default for OrphansValidateConfig {
    fn default() -> Self {
        Self {
            enable: false,
            ignore: vec!["README.md".into()],
            level: ValidateLevel::Warn,
        }
    }
}

/// Validation error level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Treat validation failures as errors (command fails).
    #[default]
    Error,
    /// Treat validation failures as warnings (command succeeds).
    Warn,
}

// ============================================================================
// Tests
// ============================================================================
