//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::config::ValidateLevel;
use crate::utils::plural_s;

/// Which check produced a finding. Order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Check {
    Structure,
    Lint,
    Pages,
    Orphans,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Structure => "structure",
            Self::Lint => "lint",
            Self::Pages => "pages",
            Self::Orphans => "orphans",
        })
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Config field or content path the finding points at.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Findings grouped by check, split into errors and warnings
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: BTreeMap<Check, Vec<ReportEntry>>,
    pub warnings: BTreeMap<Check, Vec<ReportEntry>>,
}

impl ValidationReport {
    /// Add a finding at the given level.
    pub fn add(
        &mut self,
        level: ValidateLevel,
        check: Check,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) {
        let bucket = match level {
            ValidateLevel::Error => &mut self.errors,
            ValidateLevel::Warn => &mut self.warnings,
        };
        bucket.entry(check).or_default().push(ReportEntry {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.values().map(Vec::len).sum()
    }

    /// Findings of one check, errors first.
    pub fn entries(&self, check: Check) -> impl Iterator<Item = &ReportEntry> {
        let errors = self.errors.get(&check).into_iter().flatten();
        let warnings = self.warnings.get(&check).into_iter().flatten();
        errors.chain(warnings)
    }

    /// Print the full report to stderr (errors -> warnings).
    pub fn print(&self) {
        Self::print_group("error", &self.errors);
        Self::print_group("warning", &self.warnings);
    }

    fn print_group(kind: &str, groups: &BTreeMap<Check, Vec<ReportEntry>>) {
        for (check, entries) in groups {
            eprintln!();
            let header = format!("{check} {kind}{}", plural_s(entries.len()));
            let count = format!("({})", entries.len());
            if kind == "error" {
                eprintln!("{} {}", header.red().bold(), count.dimmed());
            } else {
                eprintln!("{} {}", header.yellow().bold(), count.dimmed());
            }

            for e in entries {
                eprintln!("{}{}{}", "[".dimmed(), e.target.cyan(), "]".dimmed());
                eprintln!("{} {}", "→".red(), e.reason);
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors == 0 && warnings == 0 {
            return write!(f, "{}", "all checks passed".green());
        }
        if errors == 0 {
            return write!(
                f,
                "{} {} {}",
                "passed with".dimmed(),
                warnings.to_string().yellow().bold(),
                format!("warning{}", plural_s(warnings)).dimmed()
            );
        }
        write!(
            f,
            "{} {} {}",
            "found".dimmed(),
            errors.to_string().red().bold(),
            format!("error{}", plural_s(errors)).dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_levels() {
        let mut report = ValidationReport::default();
        report.add(ValidateLevel::Error, Check::Structure, "theme.sidebar[1]", "dup");
        report.add(ValidateLevel::Warn, Check::Orphans, "AWAF/draft.md", "unlinked");
        report.add(ValidateLevel::Warn, Check::Structure, "theme.nav[0]", "padded");

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
        let structure: Vec<_> = report.entries(Check::Structure).collect();
        assert_eq!(structure.len(), 2);
        assert_eq!(structure[0].reason, "dup");
    }

    /// Drop ANSI color sequences.
    fn plain(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                chars.by_ref().find(|&c| c == 'm');
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_report_summary() {
        let mut report = ValidationReport::default();
        assert_eq!(plain(&report.to_string()), "all checks passed");

        report.add(ValidateLevel::Warn, Check::Lint, "theme.nav[1]", "x");
        assert_eq!(plain(&report.to_string()), "passed with 1 warning");

        report.add(ValidateLevel::Error, Check::Pages, "theme.nav[0]", "y");
        report.add(ValidateLevel::Error, Check::Pages, "theme.nav[1]", "z");
        assert_eq!(plain(&report.to_string()), "found 2 errors");
    }
}
