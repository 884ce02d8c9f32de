//! Navigation config tree for the documentation site.
//!
//! # Module Structure
//!
//! ```text
//! nav/
//! ├── builtin    # build(): the AWAF tree from static literals
//! ├── validate   # validate(), violations(), lint()
//! ├── pages      # content-directory cross-check (missing + orphan pages)
//! └── mod.rs     # NavItem, SidebarSection, SidebarConfig (this file)
//! ```
//!
//! The tree is built once and read-only afterwards. Order is meaningful
//! everywhere: it is the order the external renderer displays.

mod builtin;
pub mod pages;
mod validate;

pub use builtin::build;
pub use validate::{ValidationError, canonical_link, lint, validate, violations};

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// NavItem
// ============================================================================

/// A single labeled link, in the top nav or inside a sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavItem {
    /// Display text.
    #[serde(rename = "text", alias = "label")]
    pub label: String,

    /// Site-relative path, e.g. `/AWAF/background`.
    pub link: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

impl fmt::Display for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> `{}`", self.label, self.link)
    }
}

// ============================================================================
// SidebarSection
// ============================================================================

/// A titled, ordered group of sidebar items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Section heading.
    #[serde(rename = "text", alias = "title")]
    pub title: String,

    /// Items in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl SidebarSection {
    pub fn new(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

// ============================================================================
// SidebarConfig
// ============================================================================

/// Top navigation plus the ordered sidebar sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarConfig {
    pub nav: Vec<NavItem>,
    pub sections: Vec<SidebarSection>,
}

impl SidebarConfig {
    pub fn new(nav: Vec<NavItem>, sections: Vec<SidebarSection>) -> Self {
        Self { nav, sections }
    }

    /// All sidebar links in encounter order (nav excluded).
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.link.as_str()))
    }

    /// Every item with its location: nav first, then sidebar.
    pub fn items(&self) -> impl Iterator<Item = (ItemLocation, &NavItem)> {
        let nav = self
            .nav
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemLocation::Nav { index }, item));

        let sidebar = self.sections.iter().enumerate().flat_map(|(section, s)| {
            s.items
                .iter()
                .enumerate()
                .map(move |(index, item)| (ItemLocation::Sidebar { section, index }, item))
        });

        nav.chain(sidebar)
    }

    /// Number of sidebar items across all sections.
    pub fn sidebar_len(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Position of an item inside the tree (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemLocation {
    Nav { index: usize },
    Sidebar { section: usize, index: usize },
}

impl fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nav { index } => write!(f, "theme.nav[{index}]"),
            Self::Sidebar { section, index } => {
                write!(f, "theme.sidebar[{section}].items[{index}]")
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
