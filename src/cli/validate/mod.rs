//! Site validation command.

mod report;

use anyhow::{Result, bail};

use crate::config::{SiteConfig, ValidateLevel};
use crate::nav::{self, SidebarConfig, pages};
use crate::utils::plural_count;
use crate::{debug, log};

pub use report::{Check, ValidationReport};

/// Validate the navigation tree and, when enabled, the content directory
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let tree = config.tree();

    log!(
        "validate";
        "checking {} and {}",
        plural_count(tree.sections.len(), "section"),
        plural_count(tree.sidebar_len() + tree.nav.len(), "link")
    );

    let report = run_checks(config, &tree);
    report.print();

    let errors = report.error_count();
    if errors > 0 {
        bail!("validation failed: {}", plural_count(errors, "error"));
    }

    log!("validate"; "{}", report);
    Ok(())
}

/// Run every enabled check and collect the findings.
pub fn run_checks(config: &SiteConfig, tree: &SidebarConfig) -> ValidationReport {
    let settings = &config.validate;
    let mut report = ValidationReport::default();

    for err in nav::violations(tree) {
        report.add(settings.level, Check::Structure, err.field(), err.to_string());
    }

    for lint in nav::lint(tree) {
        report.add(ValidateLevel::Warn, Check::Lint, lint.field(), lint.to_string());
    }

    let content = &settings.pages.content;

    if settings.pages.enable {
        debug!("validate"; "resolving pages under {}", content.display());
        for err in pages::missing_pages(tree, content) {
            report.add(settings.pages.level, Check::Pages, err.field(), err.to_string());
        }
    }

    if settings.orphans.enable {
        for page in pages::orphan_pages(tree, content, &settings.orphans.ignore) {
            report.add(
                settings.orphans.level,
                Check::Orphans,
                config.root_relative(content.join(&page)).display().to_string(),
                "not linked from nav or sidebar",
            );
        }
    }

    report
}

// ============================================================================
// tests
// ============================================================================
