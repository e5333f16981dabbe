//! Naming command handler
//!
//! Manages institute terminology overrides stored in the settings file.

use crate::args::NamingSubcommand;
use edu_gate::config::Config;
use edu_gate::session::InstituteSession;
use edu_gate::settings::SettingsStorage;
use edu_gate::terminology::{TermKey, TerminologySetting};
use std::io::{self, Write};

/// Dispatch naming subcommands
pub fn run(subcommand: Option<NamingSubcommand>, config: &Config) {
    match subcommand {
        None | Some(NamingSubcommand::List) => handle_naming_list(config),
        Some(NamingSubcommand::Get { key }) => handle_naming_get(config, &key),
        Some(NamingSubcommand::Set { key, label }) => handle_naming_set(config, &key, &label),
        Some(NamingSubcommand::Unset { key }) => handle_naming_unset(config, &key),
        Some(NamingSubcommand::Reset) => handle_naming_reset(config),
    }
}

/// Handle the naming list subcommand
fn handle_naming_list(config: &Config) {
    let session = InstituteSession::from_config(config);
    let ctx = edu_gate::report::ReportContext::new(&session);

    println!("\n=== Institute terminology ===\n");
    for row in ctx.terminology_rows() {
        let marker = if row.overridden { "  (override)" } else { "" };
        println!("{:<22} {}{marker}", row.key, row.effective);
    }
}

/// Handle the naming get subcommand
fn handle_naming_get(config: &Config, key: &str) {
    let session = InstituteSession::from_config(config);
    println!("{}", session.get_terminology(key, key));
}

/// Handle the naming set subcommand
fn handle_naming_set(config: &Config, key: &str, label: &str) {
    if label.trim().is_empty() {
        eprintln!("✗ Label cannot be empty. Use 'naming unset {key}' to remove an override.");
        std::process::exit(1);
    }

    let storage = SettingsStorage::from_config(config);
    let mut settings = storage.load();

    let mut record = TerminologySetting::new(key.to_string(), label.to_string());
    // Known keys keep their default label alongside the override so the
    // settings file stays readable on its own.
    match TermKey::parse(key) {
        TermKey::Custom(_) => {}
        known => record.system_value = Some(known.as_str().to_string()),
    }
    settings.upsert_naming(record);

    if let Err(e) = storage.save(&settings) {
        eprintln!("Failed to save settings: {e}");
        std::process::exit(1);
    }

    println!("✓ Set {key} = {label}");
}

/// Handle the naming unset subcommand
fn handle_naming_unset(config: &Config, key: &str) {
    let storage = SettingsStorage::from_config(config);
    let mut settings = storage.load();

    if settings.remove_naming(key) {
        if let Err(e) = storage.save(&settings) {
            eprintln!("Failed to save settings: {e}");
            std::process::exit(1);
        }
        println!("✓ Removed override for {key}");
    } else {
        println!("✓ No override set for {key}");
    }
}

/// Handle the naming reset subcommand
fn handle_naming_reset(config: &Config) {
    let storage = SettingsStorage::from_config(config);
    let mut settings = storage.load();

    if settings.naming.is_empty() {
        println!("✓ No naming overrides set");
        return;
    }

    // Ask for confirmation
    print!(
        "Are you sure you want to remove all {} naming overrides? (y/n): ",
        settings.naming.len()
    );
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        settings.naming.clear();
        if let Err(e) = storage.save(&settings) {
            eprintln!("Failed to save settings: {e}");
            std::process::exit(1);
        }
        println!("✓ Naming overrides cleared");
    } else {
        println!("✗ Reset cancelled");
    }
}
