//! `[site]` configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "awaf"
//! description = "The Apex Well-Architected Framework"
//! appearance = false
//!
//! [[site.head]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/fav_icon.png" }
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Site metadata. Everything except `title` is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Dark-mode toggle of the renderer; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<bool>,

    /// Extra `<head>` tags (fonts, favicon).
    pub head: Vec<HeadTag>,
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const DESCRIPTION: FieldPath = FieldPath::new("site.description");
    pub const HEAD: FieldPath = FieldPath::new("site.head");

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - every head tag needs a tag name
    /// - empty `description` is only a warning
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::TITLE,
                "site title must not be empty",
                format!("set {}, e.g.: \"awaf\"", Self::TITLE),
            );
        }

        if self.description.trim().is_empty() {
            diag.warn(Self::DESCRIPTION, "description is empty");
        }

        for (i, tag) in self.head.iter().enumerate() {
            if tag.tag.trim().is_empty() {
                diag.error(Self::HEAD, format!("head tag #{i} has no tag name"));
            }
        }
    }
}

/// A `<head>` element: tag name plus attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    pub tag: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    pub fn new<'a>(tag: &str, attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
