//! Export the site config in the shape the external renderer reads.
//!
//! ```text
//! {
//!   title, description, appearance?, head?,
//!   themeConfig: { logo?, nav, sidebar, socialLinks? }
//! }
//! ```
//!
//! The `mjs` form wraps the same JSON in `defineConfig(...)` so it can be
//! dropped in as `.vitepress/config.mjs`.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::ser::SerializeTuple;

use crate::config::{HeadTag, SiteConfig, SocialLink};
use crate::nav::{NavItem, SidebarSection};

/// Output format of `awaf export`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Mjs,
}

/// Root of the renderer's config object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalConfig<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<HeadEntry<'a>>,
    pub theme_config: ExternalTheme<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTheme<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<&'a str>,
    pub nav: &'a [NavItem],
    pub sidebar: &'a [SidebarSection],
    #[serde(skip_serializing_if = "is_empty")]
    pub social_links: &'a [SocialLink],
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

/// `[tag, { attrs }]` tuple form of a head tag.
#[derive(Debug)]
pub struct HeadEntry<'a> {
    tag: &'a str,
    attrs: &'a BTreeMap<String, String>,
}

impl Serialize for HeadEntry<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.tag)?;
        tuple.serialize_element(self.attrs)?;
        tuple.end()
    }
}

impl<'a> From<&'a HeadTag> for HeadEntry<'a> {
    fn from(tag: &'a HeadTag) -> Self {
        Self {
            tag: &tag.tag,
            attrs: &tag.attrs,
        }
    }
}

impl<'a> From<&'a SiteConfig> for ExternalConfig<'a> {
    fn from(config: &'a SiteConfig) -> Self {
        Self {
            title: &config.site.title,
            description: &config.site.description,
            appearance: config.site.appearance,
            head: config.site.head.iter().map(HeadEntry::from).collect(),
            theme_config: ExternalTheme {
                logo: config.theme.logo.as_deref(),
                nav: &config.theme.nav,
                sidebar: &config.theme.sidebar,
                social_links: &config.theme.social_links,
            },
        }
    }
}

impl ExternalConfig<'_> {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize site config")
    }

    pub fn to_mjs(&self) -> Result<String> {
        Ok(format!(
            "import {{ defineConfig }} from 'vitepress'\n\nexport default defineConfig({})\n",
            self.to_json(true)?
        ))
    }

    pub fn render(&self, format: ExportFormat, pretty: bool) -> Result<String> {
        match format {
            ExportFormat::Json => self.to_json(pretty),
            ExportFormat::Mjs => self.to_mjs(),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
