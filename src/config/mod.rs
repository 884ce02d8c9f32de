//! Site configuration management for `awaf.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── theme      # [theme] (nav + sidebar)
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Without an `awaf.toml`, the built-in AWAF navigation is used.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    HeadTag, SiteInfoConfig, SocialLink, ThemeSectionConfig, ValidateConfig, ValidateLevel,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, ValidateArgs},
    log,
    nav::{self, SidebarConfig},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Kumbh+Sans:wght@300;400;500;600;700&display=swap";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing awaf.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Unknown fields found while parsing (internal use only)
    #[serde(skip)]
    pub unknown_fields: Vec<String>,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Navigation tree and theme passthrough
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Falls back to the
    /// built-in navigation when the default `awaf.toml` does not exist.
    /// A missing file named with `--config` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            if !cli.is_init() {
                log!(
                    "config";
                    "`{}` not found, using built-in navigation",
                    cli.config.display()
                );
            }
            Self::builtin()?
        };

        config.config_path = config_path;
        config.finalize(cli);

        if !cli.is_init() {
            config.validate(cli)?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        if cli.is_init() {
            let path = cwd.join(&cli.config);
            let exists = path.exists();
            return Ok((path, exists));
        }

        match find_config_file(&cli.config) {
            Some(path) => Ok((path, true)),
            None if cli.has_explicit_config() => {
                bail!("config file `{}` not found", cli.config.display())
            }
            None => Ok((cwd.join(&cli.config), false)),
        }
    }

    /// The AWAF site as shipped: metadata, head tags and navigation literals.
    pub fn builtin() -> Result<Self, ConfigError> {
        let tree = nav::build()?;

        Ok(Self {
            site: SiteInfoConfig {
                title: "awaf".into(),
                description: "The Apex Well-Architected Framework".into(),
                appearance: Some(false),
                head: vec![
                    HeadTag::new("link", [("rel", "stylesheet"), ("href", FONT_STYLESHEET)]),
                    HeadTag::new("link", [("rel", "icon"), ("href", "/fav_icon.png")]),
                ],
            },
            theme: ThemeSectionConfig {
                logo: Some("/awaf-logo.svg".into()),
                nav: tree.nav,
                sidebar: tree.sections,
                social_links: Vec::new(),
            },
            ..Self::default()
        })
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.set_root(&root);
        self.apply_command_options(cli);
        self.normalize_paths(&root);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        config.unknown_fields = ignored;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Serialize back to `awaf.toml` form.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Navigation tree of this site.
    pub fn tree(&self) -> SidebarConfig {
        self.theme.tree()
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Validate { args } = &cli.command {
            self.apply_validate_args(args);
        }
    }

    /// Apply validate arguments from CLI.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        Self::update_option(&mut self.validate.pages.enable, args.pages.as_ref());
        Self::update_option(&mut self.validate.orphans.enable, args.orphans.as_ref());
        Self::update_option(&mut self.validate.pages.content, args.content.as_ref());

        if args.strict {
            self.validate.strict = true;
        }
        if args.warn_only {
            self.validate.warn_only();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve the content directory against the project root.
    fn normalize_paths(&mut self, root: &Path) {
        let content = &self.validate.pages.content;
        let expanded = shellexpand::tilde(&content.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        self.validate.pages.content = if path.is_relative() {
            root.join(path)
        } else {
            path
        };
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all errors and returns them at once. Navigation invariants
    /// are left to `nav::validate` (export) or the validate command's report.
    fn validate(&self, cli: &Cli) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);

        if cli.is_validate() {
            self.validate.validate(&mut diag);
            self.validate_unknown_fields(&mut diag);
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Unknown fields are fatal only in strict mode.
    fn validate_unknown_fields(&self, diag: &mut ConfigDiagnostics) {
        if self.validate.strict && !self.unknown_fields.is_empty() {
            diag.error_with_hint(
                FieldPath::new("validate.strict"),
                format!("unknown fields: {}", self.unknown_fields.join(", ")),
                "remove them or disable strict mode",
            );
        }
    }
}

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_args() -> ValidateArgs {
        ValidateArgs {
            pages: None,
            orphans: None,
            content: None,
            warn_only: false,
            strict: false,
        }
    }

    fn cli(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::parse_from(std::iter::once("awaf").chain(args.iter().copied()))
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        let cli = cli(&["-C", path.to_str().unwrap(), "validate"]);

        let err = SiteConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(SiteConfig::resolve_config_path(&cli).is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            "[site]\ntitle = \"Mine\"\ndescription = \"Test\"\n\n[[theme.sidebar]]\ntext = \"S\"\nitems = [{ text = \"A\", link = \"/a\" }]\n",
        )
        .unwrap();
        let cli = cli(&["-C", path.to_str().unwrap(), "show"]);

        let config = SiteConfig::load(&cli).unwrap();
        assert_eq!(config.site.title, "Mine");
        assert_eq!(config.config_path, path);
        assert_eq!(config.get_root(), dir.path());
        let tree = config.tree();
        assert_eq!(tree.links().collect::<Vec<_>>(), ["/a"]);
    }

    #[test]
    fn test_init_resolves_missing_explicit_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        let cli = cli(&["-C", path.to_str().unwrap(), "init"]);

        let (resolved, exists) = SiteConfig::resolve_config_path(&cli).unwrap();
        assert_eq!(resolved, path);
        assert!(!exists);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"awaf\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.site.title, "");
        assert!(config.tree().sections.is_empty());
    }

    #[test]
    fn test_builtin() {
        let config = SiteConfig::builtin().unwrap();
        assert_eq!(config.site.title, "awaf");
        assert_eq!(config.site.appearance, Some(false));
        assert_eq!(config.site.head.len(), 2);
        assert_eq!(config.theme.logo.as_deref(), Some("/awaf-logo.svg"));
        assert_eq!(config.tree(), nav::build().unwrap());
    }

    #[test]
    fn test_builtin_toml_loads_back() {
        let builtin = SiteConfig::builtin().unwrap();
        let content = builtin.to_toml().unwrap();

        let (parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
        assert!(ignored.is_empty(), "unexpected fields: {ignored:?}");
        assert_eq!(parsed.site, builtin.site);
        assert_eq!(parsed.theme, builtin.theme);
        assert_eq!(parsed.validate, builtin.validate);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content =
            "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_apply_validate_args() {
        let mut config = test_parse_config("");
        let args = ValidateArgs {
            pages: Some(true),
            orphans: Some(true),
            content: Some(PathBuf::from("docs")),
            warn_only: true,
            strict: true,
        };
        config.apply_validate_args(&args);

        assert!(config.validate.pages.enable);
        assert!(config.validate.orphans.enable);
        assert!(config.validate.strict);
        assert_eq!(config.validate.pages.content, PathBuf::from("docs"));
        assert_eq!(config.validate.pages.level, ValidateLevel::Warn);
    }

    #[test]
    fn test_apply_validate_args_keeps_config_values() {
        let mut config = test_parse_config("[validate.pages]\nenable = true\ncontent = \"site\"");
        config.apply_validate_args(&validate_args());

        assert!(config.validate.pages.enable);
        assert_eq!(config.validate.pages.content, PathBuf::from("site"));
        assert_eq!(config.validate.level, ValidateLevel::Error);
    }

    #[test]
    fn test_normalize_content_path() {
        let mut config = test_parse_config("[validate.pages]\ncontent = \"docs\"");
        config.normalize_paths(Path::new("/project"));
        assert_eq!(config.validate.pages.content, PathBuf::from("/project/docs"));

        let mut config = test_parse_config("[validate.pages]\ncontent = \"/abs/docs\"");
        config.normalize_paths(Path::new("/project"));
        assert_eq!(config.validate.pages.content, PathBuf::from("/abs/docs"));
    }

    #[test]
    fn test_strict_unknown_fields() {
        let mut config = test_parse_config("");
        config.unknown_fields = vec!["theme.nav.0.target".into()];

        let mut diag = ConfigDiagnostics::new();
        config.validate_unknown_fields(&mut diag);
        assert!(diag.is_empty());

        config.validate.strict = true;
        config.validate_unknown_fields(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("theme.nav.0.target"));
    }
}
