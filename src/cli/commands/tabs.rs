//! Tabs command handler
//!
//! Manages institute-wide tab visibility and ordering adjustments.

use crate::args::TabsSubcommand;
use edu_gate::access::AccessMatrix;
use edu_gate::config::Config;
use edu_gate::roles::RoleKey;
use edu_gate::settings::{SettingsStorage, TabSetting};
use std::io::{self, Write};

/// Dispatch tabs subcommands
pub fn run(subcommand: Option<TabsSubcommand>, config: &Config) {
    match subcommand {
        None | Some(TabsSubcommand::List) => handle_tabs_list(config),
        Some(TabsSubcommand::Show { id }) => handle_tabs_show(config, &id),
        Some(TabsSubcommand::Hide { id }) => handle_tabs_hide(config, &id),
        Some(TabsSubcommand::Order { ids }) => handle_tabs_order(config, &ids),
        Some(TabsSubcommand::Reset) => handle_tabs_reset(config),
    }
}

/// Every tab id the platform knows about.
///
/// The admin grant table lists every tab, so it doubles as the catalog
/// for validating tab ids typed on the command line.
fn known_tab_ids() -> Vec<&'static str> {
    AccessMatrix::new().granted_tabs(RoleKey::Admin)
}

/// Exit with an error unless `id` names a real tab
fn require_known_tab(id: &str) {
    let known = known_tab_ids();
    if !known.iter().any(|tab| *tab == id) {
        eprintln!("✗ Unknown tab: '{id}'");
        eprintln!("  Known tabs: {}", known.join(", "));
        std::process::exit(1);
    }
}

/// Handle the tabs list subcommand
fn handle_tabs_list(config: &Config) {
    let storage = SettingsStorage::from_config(config);
    let settings = storage.load();

    if settings.tabs.is_empty() {
        println!("✓ No tab adjustments; every role sees its built-in tabs");
        return;
    }

    println!("\n=== Tab adjustments ===\n");
    for tab in &settings.tabs {
        let visibility = if tab.visible { "visible" } else { "hidden" };
        println!("{:<22} {visibility:<8} position {}", tab.id, tab.order);
    }
}

/// Handle the tabs show subcommand
fn handle_tabs_show(config: &Config, id: &str) {
    require_known_tab(id);

    let storage = SettingsStorage::from_config(config);
    let mut settings = storage.load();

    match settings.tab_setting(id) {
        Some(existing) if !existing.visible => {
            // Dropping the record restores the built-in position too.
            settings.remove_tab(id);
            if let Err(e) = storage.save(&settings) {
                eprintln!("Failed to save settings: {e}");
                std::process::exit(1);
            }
            println!("✓ Tab '{id}' is visible again");
        }
        _ => println!("✓ Tab '{id}' is already visible"),
    }
}

/// Handle the tabs hide subcommand
fn handle_tabs_hide(config: &Config, id: &str) {
    require_known_tab(id);

    let storage = SettingsStorage::from_config(config);
    let mut settings = storage.load();

    let mut record = settings
        .tab_setting(id)
        .cloned()
        .unwrap_or_else(|| TabSetting::new(id.to_string(), 0));
    if !record.visible {
        println!("✓ Tab '{id}' is already hidden");
        return;
    }
    record.visible = false;
    settings.upsert_tab(record);

    if let Err(e) = storage.save(&settings) {
        eprintln!("Failed to save settings: {e}");
        std::process::exit(1);
    }

    println!("✓ Tab '{id}' hidden for the institute");
}

/// Handle the tabs order subcommand
fn handle_tabs_order(config: &Config, ids: &[String]) {
    for id in ids {
        require_known_tab(id);
    }
    for (index, id) in ids.iter().enumerate() {
        if ids[..index].contains(id) {
            eprintln!("✗ Duplicate tab in order list: '{id}'");
            std::process::exit(1);
        }
    }

    let storage = SettingsStorage::from_config(config);
    let mut settings = storage.load();

    // Pinning an order implies the tab should be on the strip.
    for (position, id) in (0u32..).zip(ids.iter()) {
        settings.upsert_tab(TabSetting::new(id.clone(), position));
    }

    if let Err(e) = storage.save(&settings) {
        eprintln!("Failed to save settings: {e}");
        std::process::exit(1);
    }

    println!("✓ Pinned tab order: {}", ids.join(", "));
}

/// Handle the tabs reset subcommand
fn handle_tabs_reset(config: &Config) {
    let storage = SettingsStorage::from_config(config);
    let mut settings = storage.load();

    if settings.tabs.is_empty() {
        println!("✓ No tab adjustments set");
        return;
    }

    // Ask for confirmation
    print!(
        "Are you sure you want to remove all {} tab adjustments? (y/n): ",
        settings.tabs.len()
    );
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        settings.tabs.clear();
        if let Err(e) = storage.save(&settings) {
            eprintln!("Failed to save settings: {e}");
            std::process::exit(1);
        }
        println!("✓ Tab adjustments cleared");
    } else {
        println!("✗ Reset cancelled");
    }
}
