//! The AWAF navigation tree as static literals.

use super::{NavItem, SidebarConfig, SidebarSection, validate};
use crate::config::ConfigError;

/// `(label, link)` pairs, in display order.
type Entries = &'static [(&'static str, &'static str)];

const NAV: Entries = &[("Home", "/"), ("Documentation", "/introduction")];

/// Sidebar sections with their items.
///
/// The shipped site config labels `/AWAF/sfdx-folders` as `' Use SFDX folders'`
/// with a leading space. It is trimmed here, so exported output differs from
/// that file on this one label. `lint` reports the padded form in user configs.
const SIDEBAR: &[(&str, Entries)] = &[
    (
        "Getting Started",
        &[("Introduction", "/introduction"), ("About", "/about")],
    ),
    (
        "The Framework",
        &[
            ("Background", "/AWAF/background"),
            ("The challenges of FFLIB", "/AWAF/fflib-recap"),
            ("The Apex Well-Architected Framework", "/AWAF/awaf"),
            ("Use SFDX folders", "/AWAF/sfdx-folders"),
            ("Where to place business logic", "/AWAF/business-logic"),
            ("Filtering logic in trigger handlers", "/AWAF/trigger-handlers"),
            ("Domain Classes", "/AWAF/domain-classes"),
            ("Internal Libraries", "/AWAF/internal-libraries"),
            ("Trigger Frameworks", "/AWAF/trigger-frameworks"),
            ("Logging and Observability", "/AWAF/logging"),
            ("Feature Flags", "/AWAF/feature-flags"),
            ("Selector Classes", "/AWAF/selector-classes"),
            ("General Utilities", "/AWAF/general-utilities"),
            ("Deploying Apex Code", "/AWAF/deploying-apex"),
        ],
    ),
    (
        "Supporting Principles",
        &[
            ("Other Principles", "/foundations/overview"),
            ("Naming Techniques", "/foundations/naming-techniques"),
            ("Doing one thing", "/foundations/single-responsibility"),
            ("Short Methods and Deep Modules", "/foundations/method-size-structure"),
            ("Comments Don't Lie", "/foundations/comments-truth"),
            ("Nulls & Guard Clauses", "/foundations/nulls-guard-clauses"),
            ("Cascading Failures in Trigger Boundaries", "/foundations/trigger-failures"),
            ("Software Design Principles", "/foundations/design-principles"),
            ("Modularity, Coupling & Cohesion", "/foundations/modularity-cohesion"),
            ("Dependency Injection and Boundaries", "/foundations/dependency-injection"),
            ("Mocking the database for real CI", "/foundations/unit-testing-apex"),
        ],
    ),
];

fn items(entries: Entries) -> Vec<NavItem> {
    entries
        .iter()
        .map(|(label, link)| NavItem::new(*label, *link))
        .collect()
}

/// Build the AWAF navigation tree and validate it.
///
/// Fails with [`ConfigError::Navigation`] if the literals break an invariant.
pub fn build() -> Result<SidebarConfig, ConfigError> {
    let sections = SIDEBAR
        .iter()
        .map(|(title, entries)| SidebarSection::new(*title, items(*entries)))
        .collect();

    let config = SidebarConfig::new(items(NAV), sections);
    validate(&config)?;
    Ok(config)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{lint, violations};
    use rustc_hash::FxHashSet;

    #[test]
    fn test_build_succeeds() {
        let config = build().unwrap();
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.sections.len(), 3);
        assert_eq!(config.sidebar_len(), 27);
        assert_eq!(config.sections[1].title, "The Framework");
    }

    #[test]
    fn test_build_links_well_formed() {
        let config = build().unwrap();
        for (location, item) in config.items() {
            assert!(!item.link.is_empty(), "empty link at {location}");
            assert!(item.link.starts_with('/'), "relative link at {location}");
            assert!(!item.label.trim().is_empty(), "empty label at {location}");
        }
    }

    #[test]
    fn test_build_links_unique() {
        let config = build().unwrap();
        let mut seen = FxHashSet::default();
        for link in config.links() {
            assert!(seen.insert(link), "duplicate link {link}");
        }
    }

    #[test]
    fn test_build_sections_non_empty() {
        let config = build().unwrap();
        assert!(config.sections.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn test_build_idempotent() {
        assert_eq!(build().unwrap(), build().unwrap());
    }

    #[test]
    fn test_build_is_clean() {
        let config = build().unwrap();
        assert!(violations(&config).is_empty());
        assert!(lint(&config).is_empty());
    }

    /// The source site carried near-identical copies of this tree; a merged
    /// copy must be caught as duplicate links rather than rendered twice.
    #[test]
    fn test_merged_copy_is_rejected() {
        let mut config = build().unwrap();
        let copy = config.sections.clone();
        config.sections.extend(copy);

        match crate::nav::validate(&config) {
            Err(crate::nav::ValidationError::DuplicateLink {
                link,
                first_section,
                second_section,
            }) => {
                assert_eq!(link, "/introduction");
                assert_eq!(first_section, 0);
                assert_eq!(second_section, 3);
            }
            other => panic!("expected duplicate link, got {other:?}"),
        }
        assert_eq!(violations(&config).len(), 27);
    }
}
