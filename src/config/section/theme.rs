//! `[theme]` configuration: the navigation tree and its decoration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/awaf-logo.svg"
//!
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Getting Started"
//! items = [
//!     { text = "Introduction", link = "/introduction" },
//!     { text = "About", link = "/about" },
//! ]
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/example/awaf"
//! ```

use crate::nav::{NavItem, SidebarConfig, SidebarSection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Logo path, passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Top navigation bar.
    pub nav: Vec<NavItem>,

    /// Sidebar sections in display order.
    pub sidebar: Vec<SidebarSection>,

    /// Social icons, passed through.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

impl ThemeSectionConfig {
    /// Navigation tree view of this section.
    pub fn tree(&self) -> SidebarConfig {
        SidebarConfig::new(self.nav.clone(), self.sidebar.clone())
    }
}

/// Social icon link. Opaque: carried to the renderer, never checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use crate::nav::NavItem;

    #[test]
    fn test_theme_tree() {
        let config = test_parse_config(
            r#"[theme]
logo = "/awaf-logo.svg"

[[theme.nav]]
text = "Home"
link = "/"

[[theme.sidebar]]
text = "Getting Started"
items = [
    { text = "Introduction", link = "/introduction" },
    { label = "About", link = "/about" },
]

[[theme.social_links]]
icon = "github"
link = "https://github.com/example/awaf"
"#,
        );
        let tree = config.theme.tree();
        assert_eq!(tree.nav, vec![NavItem::new("Home", "/")]);
        assert_eq!(tree.sections[0].title, "Getting Started");
        assert_eq!(tree.sections[0].items[1], NavItem::new("About", "/about"));
        assert_eq!(config.theme.logo.as_deref(), Some("/awaf-logo.svg"));
        assert_eq!(config.theme.social_links[0].icon, "github");
    }

    #[test]
    fn test_theme_unknown_item_field_detected() {
        let content = "[site]\ntitle = \"T\"\ndescription = \"T\"\n[[theme.nav]]\ntext = \"Home\"\nlink = \"/\"\ntarget = \"_blank\"";
        let (_, ignored) = crate::config::SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("target")));
    }
}
