//! `awaf show`: print the navigation tree.

use owo_colors::OwoColorize;
use std::fmt::Write;

use crate::config::SiteConfig;
use crate::nav::NavItem;

pub fn show_site(config: &SiteConfig) {
    print!("{}", render(config));
}

fn render(config: &SiteConfig) -> String {
    let tree = config.tree();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        config.site.title.bold(),
        config.site.description.dimmed()
    );

    let _ = writeln!(out, "\n{}", "nav".bright_blue().bold());
    for item in &tree.nav {
        write_item(&mut out, item, 1);
    }

    let _ = writeln!(out, "\n{}", "sidebar".bright_blue().bold());
    for section in &tree.sections {
        let _ = writeln!(out, "  {}", section.title.bold());
        for item in &section.items {
            write_item(&mut out, item, 2);
        }
    }
    out
}

fn write_item(out: &mut String, item: &NavItem, depth: usize) {
    let _ = writeln!(
        out,
        "{:indent$}{}  {}",
        "",
        item.label,
        item.link.cyan(),
        indent = depth * 2
    );
}
