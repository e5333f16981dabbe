//! Role command handler

use crate::args::RoleSubcommand;
use edu_gate::config::Config;
use edu_gate::roles::{map_role_to_custom_name, RoleKey};
use edu_gate::session::InstituteSession;
use edu_gate::terminology::TerminologyStore;

/// Dispatch role subcommands
pub fn run(subcommand: Option<RoleSubcommand>, config: &Config) {
    let session = InstituteSession::from_config(config);

    match subcommand {
        None | Some(RoleSubcommand::List) => handle_role_list(&session),
        Some(RoleSubcommand::Name { role }) => {
            println!("{}", session.map_role_to_custom_name(&role));
        }
    }
}

/// Handle the role list subcommand
fn handle_role_list(session: &InstituteSession) {
    let stock = TerminologyStore::new();

    println!("\n=== Roles ===\n");
    for role in RoleKey::ALL {
        let display = session.map_role_to_custom_name(role.as_str());
        let default_display = map_role_to_custom_name(role.as_str(), &stock);
        let marker = if display == default_display {
            ""
        } else {
            "  (override)"
        };
        println!("{:<20} {display}{marker}", role.as_str());
    }
}
