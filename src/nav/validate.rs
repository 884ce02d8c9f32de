//! Structural checks for the navigation tree.
//!
//! Scan order is fixed and decides which violation `validate` reports:
//!
//! 1. empty sidebar sections
//! 2. duplicate sidebar links (exact match, single linear scan, first repeat wins)
//! 3. malformed items (nav first, then sidebar)

use std::collections::hash_map::Entry;
use std::fmt;
use std::ops::ControlFlow;
use std::path::PathBuf;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::{ItemLocation, NavItem, SidebarConfig};

// ============================================================================
// errors
// ============================================================================

/// A violation of the navigation tree invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sidebar section #{index} `{title}` has no items")]
    EmptySection { index: usize, title: String },

    #[error(
        "duplicate link `{link}` (first in section #{first_section}, again in section #{second_section})"
    )]
    DuplicateLink {
        link: String,
        first_section: usize,
        second_section: usize,
    },

    #[error("malformed item {item} at {location}: {reason}")]
    MalformedLink {
        item: NavItem,
        location: ItemLocation,
        reason: MalformedReason,
    },

    #[error("no content page for `{link}` at {location} (expected `{}`)", .expected.display())]
    MissingPage {
        link: String,
        location: ItemLocation,
        expected: PathBuf,
    },
}

impl ValidationError {
    /// Config field path the violation points at.
    pub fn field(&self) -> String {
        match self {
            Self::EmptySection { index, .. } => format!("theme.sidebar[{index}]"),
            Self::DuplicateLink { second_section, .. } => {
                format!("theme.sidebar[{second_section}]")
            }
            Self::MalformedLink { location, .. } | Self::MissingPage { location, .. } => {
                location.to_string()
            }
        }
    }
}

/// Why an item is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    EmptyLabel,
    EmptyLink,
    MissingLeadingSlash,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmptyLabel => "label is empty",
            Self::EmptyLink => "link is empty",
            Self::MissingLeadingSlash => "link must start with `/`",
        })
    }
}

// ============================================================================
// validation
// ============================================================================

/// Check the tree and return the first violation found.
pub fn validate(config: &SidebarConfig) -> Result<(), ValidationError> {
    match scan(config, true).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Same scan as [`validate`], but collects every violation.
pub fn violations(config: &SidebarConfig) -> Vec<ValidationError> {
    scan(config, false)
}

struct Collector {
    found: Vec<ValidationError>,
    first_only: bool,
}

impl Collector {
    fn push(&mut self, err: ValidationError) -> ControlFlow<()> {
        self.found.push(err);
        if self.first_only {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

fn scan(config: &SidebarConfig, first_only: bool) -> Vec<ValidationError> {
    let mut collector = Collector {
        found: Vec::new(),
        first_only,
    };
    let _ = scan_into(config, &mut collector);
    collector.found
}

fn scan_into(config: &SidebarConfig, out: &mut Collector) -> ControlFlow<()> {
    check_empty_sections(config, out)?;
    check_duplicate_links(config, out)?;
    check_malformed_items(config, out)
}

fn check_empty_sections(config: &SidebarConfig, out: &mut Collector) -> ControlFlow<()> {
    for (index, section) in config.sections.iter().enumerate() {
        if section.items.is_empty() {
            out.push(ValidationError::EmptySection {
                index,
                title: section.title.clone(),
            })?;
        }
    }
    ControlFlow::Continue(())
}

fn check_duplicate_links(config: &SidebarConfig, out: &mut Collector) -> ControlFlow<()> {
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();

    for (section_index, section) in config.sections.iter().enumerate() {
        for item in &section.items {
            // Empty links are reported as malformed instead
            if item.link.is_empty() {
                continue;
            }
            match seen.entry(item.link.clone()) {
                Entry::Occupied(first) => out.push(ValidationError::DuplicateLink {
                    link: item.link.clone(),
                    first_section: *first.get(),
                    second_section: section_index,
                })?,
                Entry::Vacant(slot) => {
                    slot.insert(section_index);
                }
            }
        }
    }
    ControlFlow::Continue(())
}

fn check_malformed_items(config: &SidebarConfig, out: &mut Collector) -> ControlFlow<()> {
    for (location, item) in config.items() {
        if let Some(reason) = malformed_reason(item) {
            out.push(ValidationError::MalformedLink {
                item: item.clone(),
                location,
                reason,
            })?;
        }
    }
    ControlFlow::Continue(())
}

fn malformed_reason(item: &NavItem) -> Option<MalformedReason> {
    if item.label.trim().is_empty() {
        Some(MalformedReason::EmptyLabel)
    } else if item.link.is_empty() {
        Some(MalformedReason::EmptyLink)
    } else if !item.link.starts_with('/') {
        Some(MalformedReason::MissingLeadingSlash)
    } else {
        None
    }
}

/// Canonical form of a site-relative link: the page it resolves to.
///
/// Drops `#fragment` and `?query`, then a `.html` / `.md` suffix, and maps
/// `/dir/index` to `/dir/`. A trailing slash is kept: `/a/` is `a/index.md`
/// while `/a` is `a.md`.
///
/// # Examples
/// ```ignore
/// canonical_link("/about.html")        -> "/about"
/// canonical_link("/about#team")        -> "/about"
/// canonical_link("/guide/index.md")    -> "/guide/"
/// canonical_link("/guide/")            -> "/guide/"
/// ```
pub fn canonical_link(link: &str) -> String {
    let end = link.find(['#', '?']).unwrap_or(link.len());
    let path = &link[..end];

    let path = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);

    match path.strip_suffix("index") {
        Some(dir) if dir.ends_with('/') => dir.to_string(),
        _ => path.to_string(),
    }
}

// ============================================================================
// lint
// ============================================================================

/// Non-fatal hygiene findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lint {
    /// Label has leading or trailing whitespace.
    PaddedLabel {
        item: NavItem,
        location: ItemLocation,
    },
    /// Two top-nav entries point at the same page.
    RepeatedNavLink {
        link: String,
        first: usize,
        second: usize,
    },
    /// A sidebar link spells an earlier sidebar page differently.
    AliasedLink {
        link: String,
        alias_of: String,
        location: ItemLocation,
    },
}

impl Lint {
    /// Config field path the finding points at.
    pub fn field(&self) -> String {
        match self {
            Self::PaddedLabel { location, .. } => location.to_string(),
            Self::RepeatedNavLink { second, .. } => format!("theme.nav[{second}]"),
            Self::AliasedLink { location, .. } => location.to_string(),
        }
    }
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaddedLabel { item, location } => {
                write!(f, "label of {item} at {location} has surrounding whitespace")
            }
            Self::RepeatedNavLink {
                link,
                first,
                second,
            } => write!(f, "nav entries #{first} and #{second} both link to `{link}`"),
            Self::AliasedLink {
                link,
                alias_of,
                location,
            } => write!(f, "`{link}` at {location} is the same page as `{alias_of}`"),
        }
    }
}

/// Collect hygiene warnings that do not fail validation.
pub fn lint(config: &SidebarConfig) -> Vec<Lint> {
    let mut lints: Vec<Lint> = config
        .items()
        .filter(|(_, item)| !item.label.is_empty() && item.label.trim() != item.label)
        .map(|(location, item)| Lint::PaddedLabel {
            item: item.clone(),
            location,
        })
        .collect();

    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    for (index, item) in config.nav.iter().enumerate() {
        if let Some(&first) = seen.get(&canonical_link(&item.link)) {
            lints.push(Lint::RepeatedNavLink {
                link: item.link.clone(),
                first,
                second: index,
            });
        } else {
            seen.insert(canonical_link(&item.link), index);
        }
    }

    lints.extend(aliased_links(config));
    lints
}

/// Sidebar links that differ as written but resolve to the same page.
/// Links carrying a `#fragment` point into a page and are skipped.
fn aliased_links(config: &SidebarConfig) -> Vec<Lint> {
    let mut pages: FxHashMap<String, &str> = FxHashMap::default();
    let mut lints = Vec::new();

    for (location, item) in config.items() {
        if matches!(location, ItemLocation::Nav { .. })
            || item.link.is_empty()
            || item.link.contains('#')
        {
            continue;
        }
        match pages.entry(canonical_link(&item.link)) {
            Entry::Occupied(first) if *first.get() != item.link => lints.push(Lint::AliasedLink {
                link: item.link.clone(),
                alias_of: first.get().to_string(),
                location,
            }),
            Entry::Occupied(_) => {}
            Entry::Vacant(slot) => {
                slot.insert(&item.link);
            }
        }
    }
    lints
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::SidebarSection;

    fn section(title: &str, items: &[(&str, &str)]) -> SidebarSection {
        SidebarSection::new(
            title,
            items.iter().map(|(t, l)| NavItem::new(*t, *l)).collect(),
        )
    }

    fn sidebar(sections: Vec<SidebarSection>) -> SidebarConfig {
        SidebarConfig::new(Vec::new(), sections)
    }

    #[test]
    fn test_single_section_is_valid() {
        let config = sidebar(vec![section(
            "Getting Started",
            &[("Introduction", "/introduction")],
        )]);
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn test_duplicate_across_sections() {
        let config = sidebar(vec![
            section("Getting Started", &[("Introduction", "/introduction")]),
            section("Again", &[("About", "/about"), ("Intro", "/introduction")]),
        ]);
        assert_eq!(
            validate(&config),
            Err(ValidationError::DuplicateLink {
                link: "/introduction".into(),
                first_section: 0,
                second_section: 1,
            })
        );
    }

    #[test]
    fn test_duplicate_within_section() {
        let config = sidebar(vec![section(
            "Framework",
            &[("Background", "/AWAF/background"), ("Again", "/AWAF/background")],
        )]);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::DuplicateLink {
                first_section: 0,
                second_section: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_aliased_link_is_lint_not_duplicate() {
        let config = sidebar(vec![section(
            "Getting Started",
            &[("About", "/about"), ("About (html)", "/about.html")],
        )]);
        assert_eq!(validate(&config), Ok(()));
        assert_eq!(
            lint(&config),
            [Lint::AliasedLink {
                link: "/about.html".into(),
                alias_of: "/about".into(),
                location: ItemLocation::Sidebar { section: 0, index: 1 },
            }]
        );
    }

    #[test]
    fn test_distinct_fragments_on_one_page_are_valid() {
        let config = sidebar(vec![section(
            "Guide",
            &[
                ("Guide", "/guide"),
                ("Install", "/guide#install"),
                ("Usage", "/guide#usage"),
            ],
        )]);
        assert_eq!(validate(&config), Ok(()));
        assert!(violations(&config).is_empty());
        assert!(lint(&config).is_empty());
    }

    #[test]
    fn test_repeated_fragment_link_is_duplicate() {
        let config = sidebar(vec![
            section("Guide", &[("Install", "/guide#install")]),
            section("Again", &[("Install", "/guide#install")]),
        ]);
        assert_eq!(
            validate(&config),
            Err(ValidationError::DuplicateLink {
                link: "/guide#install".into(),
                first_section: 0,
                second_section: 1,
            })
        );
    }

    #[test]
    fn test_missing_leading_slash() {
        let config = sidebar(vec![section("Getting Started", &[("About", "about")])]);
        match validate(&config) {
            Err(ValidationError::MalformedLink {
                item,
                location,
                reason,
            }) => {
                assert_eq!(item, NavItem::new("About", "about"));
                assert_eq!(location, ItemLocation::Sidebar { section: 0, index: 0 });
                assert_eq!(reason, MalformedReason::MissingLeadingSlash);
            }
            other => panic!("expected malformed link, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_label_and_link() {
        let config = sidebar(vec![section("S", &[("  ", "/a"), ("B", "")])]);
        let found = violations(&config);
        assert_eq!(found.len(), 2);
        assert!(matches!(
            found[0],
            ValidationError::MalformedLink {
                reason: MalformedReason::EmptyLabel,
                ..
            }
        ));
        assert!(matches!(
            found[1],
            ValidationError::MalformedLink {
                reason: MalformedReason::EmptyLink,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_nav_item() {
        let config = SidebarConfig::new(
            vec![NavItem::new("Docs", "introduction")],
            vec![section("S", &[("Intro", "/introduction")])],
        );
        assert!(matches!(
            validate(&config),
            Err(ValidationError::MalformedLink {
                location: ItemLocation::Nav { index: 0 },
                ..
            })
        ));
    }

    #[test]
    fn test_empty_section() {
        let config = sidebar(vec![section("Empty", &[])]);
        assert_eq!(
            validate(&config),
            Err(ValidationError::EmptySection {
                index: 0,
                title: "Empty".into()
            })
        );
    }

    #[test]
    fn test_scan_order_duplicates_before_malformed() {
        let config = sidebar(vec![
            section("A", &[("Bad", "bad"), ("X", "/x")]),
            section("B", &[("X again", "/x")]),
        ]);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::DuplicateLink { .. })
        ));
        assert_eq!(violations(&config).len(), 2);
    }

    #[test]
    fn test_nav_may_repeat_sidebar_link() {
        let config = SidebarConfig::new(
            vec![NavItem::new("Documentation", "/introduction")],
            vec![section("Getting Started", &[("Introduction", "/introduction")])],
        );
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn test_canonical_link() {
        assert_eq!(canonical_link("/about"), "/about");
        assert_eq!(canonical_link("/about.html"), "/about");
        assert_eq!(canonical_link("/about.md"), "/about");
        assert_eq!(canonical_link("/about#team"), "/about");
        assert_eq!(canonical_link("/about?x=1"), "/about");
        assert_eq!(canonical_link("/guide/index.md"), "/guide/");
        assert_eq!(canonical_link("/guide/"), "/guide/");
        assert_eq!(canonical_link("/"), "/");
        assert_eq!(canonical_link("/reindex"), "/reindex");
    }

    #[test]
    fn test_lint_padded_label_and_repeated_nav() {
        let config = SidebarConfig::new(
            vec![NavItem::new("Home", "/"), NavItem::new("Start", "/index.html")],
            vec![section("Framework", &[(" Use SFDX folders", "/AWAF/sfdx-folders")])],
        );
        let lints = lint(&config);
        assert_eq!(lints.len(), 2);
        assert!(matches!(lints[0], Lint::PaddedLabel { .. }));
        assert!(matches!(
            lints[1],
            Lint::RepeatedNavLink {
                first: 0,
                second: 1,
                ..
            }
        ));
        // lints never fail validation
        assert_eq!(validate(&config), Ok(()));
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::DuplicateLink {
            link: "/introduction".into(),
            first_section: 0,
            second_section: 2,
        };
        let display = err.to_string();
        assert!(display.contains("/introduction"));
        assert!(display.contains("#2"));
        assert_eq!(err.field(), "theme.sidebar[2]");
    }
}
