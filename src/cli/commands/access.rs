//! Access command handler
//!
//! Answers "can this role see this?" questions from the command line and
//! prints the full access matrix.

use crate::args::AccessSubcommand;
use edu_gate::config::Config;
use edu_gate::roles::RoleKey;
use edu_gate::session::InstituteSession;

/// Dispatch access subcommands
pub fn run(subcommand: &AccessSubcommand, config: &Config) {
    let session = InstituteSession::from_config(config);

    match subcommand {
        AccessSubcommand::Tab { role, tab } => {
            let granted = session.has_tab_access(role, tab);
            print_verdict(granted, role, &format!("tab '{tab}'"));
            warn_unknown_role(role);
        }
        AccessSubcommand::Child { role, tab, child } => {
            let granted = session.has_child_tab_access(role, tab, child);
            print_verdict(granted, role, &format!("child tab '{child}' of '{tab}'"));
            warn_unknown_role(role);
        }
        AccessSubcommand::Feature { role, tab, feature } => {
            let granted = session.has_feature_access(role, tab, feature);
            print_verdict(granted, role, &format!("feature '{feature}' on tab '{tab}'"));
            warn_unknown_role(role);
        }
        AccessSubcommand::Matrix { role } => handle_matrix(&session, role.as_deref()),
    }
}

/// Print a single ✓/✗ access answer
fn print_verdict(granted: bool, role: &str, what: &str) {
    if granted {
        println!("✓ {role} has access to {what}");
    } else {
        println!("✗ {role} does not have access to {what}");
    }
}

/// Note when a role string is not one of the known backend roles.
///
/// Unknown roles are denied everything, which is easy to misread as a
/// missing grant for a real role.
fn warn_unknown_role(role: &str) {
    if RoleKey::parse(role).is_none() {
        println!("  (unknown role; access is denied by default)");
    }
}

/// Handle the access matrix subcommand
fn handle_matrix(session: &InstituteSession, role: Option<&str>) {
    match role {
        Some(raw) => match RoleKey::parse(raw) {
            Some(role) => print_role_matrix(session, role),
            None => {
                eprintln!("✗ Unknown role: '{raw}'");
                eprintln!(
                    "  Known roles: {}",
                    RoleKey::ALL
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                std::process::exit(1);
            }
        },
        None => {
            for role in RoleKey::ALL {
                print_role_matrix(session, role);
            }
        }
    }
}

/// Print one role's grants and effective tab strip
fn print_role_matrix(session: &InstituteSession, role: RoleKey) {
    let display = session.map_role_to_custom_name(role.as_str());
    println!("\n=== {role} (displays as \"{display}\") ===");

    let strip = session.visible_tabs(role);
    if strip.is_empty() {
        println!("Tab strip: (none)");
    } else {
        println!("Tab strip: {}", strip.join(", "));
    }

    for grant in session.matrix().grants(role) {
        println!("  {:<22} {}", grant.id, mark(grant.access));

        let children = format_flags(grant.children());
        if !children.is_empty() {
            println!("    children: {children}");
        }
        let features = format_flags(grant.features());
        if !features.is_empty() {
            println!("    features: {features}");
        }
    }
}

/// Render `(id, granted)` pairs as `id ✓, id ✗`
fn format_flags(flags: impl Iterator<Item = (&'static str, bool)>) -> String {
    flags
        .map(|(id, granted)| format!("{id} {}", mark(granted)))
        .collect::<Vec<_>>()
        .join(", ")
}

const fn mark(granted: bool) -> &'static str {
    if granted {
        "✓"
    } else {
        "✗"
    }
}
