//! Cross-check navigation links against the content directory.
//!
//! Link resolution mirrors how the site renderer maps URLs to markdown:
//!
//! | link          | candidates                    |
//! |---------------|-------------------------------|
//! | `/`           | `index.md`                    |
//! | `/a/b`        | `a/b.md`, `a/b/index.md`      |
//! | `/a/`         | `a/index.md`                  |
//! | `/a.html`     | `a.md`, `a/index.md`          |

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rustc_hash::FxHashSet;

use super::{SidebarConfig, ValidationError, canonical_link};

/// Directories never scanned for pages.
const IGNORED_DIRS: &[&str] = &["node_modules", "public", "dist"];

/// Result of resolving a link against the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    /// Path of the page, relative to the content directory.
    Found(PathBuf),
    /// No page exists; `expected` is the primary candidate.
    Missing { expected: PathBuf },
}

/// Candidate markdown files for a link, relative to the content directory.
pub fn page_candidates(link: &str) -> Vec<PathBuf> {
    let canonical = canonical_link(link);
    let trimmed = canonical.trim_start_matches('/');

    if trimmed.is_empty() {
        return vec![PathBuf::from("index.md")];
    }
    if let Some(dir) = trimmed.strip_suffix('/') {
        return vec![Path::new(dir).join("index.md")];
    }
    vec![
        PathBuf::from(format!("{trimmed}.md")),
        Path::new(trimmed).join("index.md"),
    ]
}

/// Resolve a link to its content page.
pub fn resolve_page(content_dir: &Path, link: &str) -> PageLookup {
    let candidates = page_candidates(link);
    match candidates.iter().find(|c| content_dir.join(c).is_file()) {
        Some(found) => PageLookup::Found(found.clone()),
        None => PageLookup::Missing {
            expected: candidates.into_iter().next().unwrap_or_default(),
        },
    }
}

/// Every nav and sidebar link that has no content page.
///
/// Malformed links are skipped; structural validation reports them.
pub fn missing_pages(config: &SidebarConfig, content_dir: &Path) -> Vec<ValidationError> {
    config
        .items()
        .filter(|(_, item)| item.link.starts_with('/'))
        .filter_map(|(location, item)| match resolve_page(content_dir, &item.link) {
            PageLookup::Found(_) => None,
            PageLookup::Missing { expected } => Some(ValidationError::MissingPage {
                link: item.link.clone(),
                location,
                expected,
            }),
        })
        .collect()
}

/// Markdown pages under `content_dir` that no link reaches.
///
/// `ignore` entries are paths relative to `content_dir` using `/` separators.
/// Result is sorted for stable output.
pub fn orphan_pages(config: &SidebarConfig, content_dir: &Path, ignore: &[String]) -> Vec<PathBuf> {
    let reachable: FxHashSet<PathBuf> = config
        .items()
        .filter(|(_, item)| item.link.starts_with('/'))
        .filter_map(|(_, item)| match resolve_page(content_dir, &item.link) {
            PageLookup::Found(path) => Some(path),
            PageLookup::Missing { .. } => None,
        })
        .collect();

    let ignored: FxHashSet<PathBuf> = ignore.iter().map(PathBuf::from).collect();

    let mut orphans: Vec<PathBuf> = collect_pages(content_dir)
        .into_iter()
        .filter(|page| !reachable.contains(page) && !ignored.contains(page))
        .collect();
    orphans.sort();
    orphans
}

/// All `*.md` files under `content_dir`, relative to it.
///
/// Hidden entries (e.g. `.vitepress`) and build/vendor directories are skipped.
pub fn collect_pages(content_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(content_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .filter_map(|p| p.strip_prefix(content_dir).map(Path::to_path_buf).ok())
        .filter(|rel| {
            !rel.components().any(|c| {
                IGNORED_DIRS
                    .iter()
                    .any(|dir| c.as_os_str() == std::ffi::OsStr::new(dir))
            })
        })
        .collect()
}

// ============================================================================
// tests
// ============================================================================
