//! Session command handlers.

use venuesync_core::{MarketStore, Session, UserRole};

use crate::cli::{GlobalOpts, SessionArgs, SessionCommand, SessionRole};
use crate::error::CliError;
use crate::output;

pub fn handle(store: &MarketStore, args: SessionArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        SessionCommand::Show => {
            let session = store.session();
            let out = output::render_single(
                &global.output,
                &session,
                render_session,
                |s| s.logged_in.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SessionCommand::Login { role } => {
            let role = match role {
                SessionRole::Guest => UserRole::Guest,
                SessionRole::Host => UserRole::Host,
            };
            store.log_in(role);
            if !global.quiet {
                eprintln!("Logged in as {role}");
            }
            Ok(())
        }

        SessionCommand::Logout => {
            store.log_out();
            if !global.quiet {
                eprintln!("Logged out");
            }
            Ok(())
        }
    }
}

fn render_session(session: &Session) -> String {
    if session.logged_in {
        format!("Logged in as {}", session.role)
    } else {
        format!("Logged out (last role: {})", session.role)
    }
}
