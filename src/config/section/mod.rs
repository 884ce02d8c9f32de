//! Configuration section definitions.
//!
//! Each module corresponds to a section in `awaf.toml`:
//!
//! | Module     | TOML Section   | Purpose                                   |
//! |------------|----------------|-------------------------------------------|
//! | `site`     | `[site]`       | Title, description, head tags             |
//! | `theme`    | `[theme]`      | Logo, top nav, sidebar, social links      |
//! | `validate` | `[validate]`   | Structural, content-page and orphan checks |

mod site;
mod theme;
mod validate;

pub use site::{HeadTag, SiteInfoConfig};
pub use theme::{SocialLink, ThemeSectionConfig};
pub use validate::{ValidateConfig, ValidateLevel};
