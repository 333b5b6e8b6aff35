//! Command dispatch: bridges CLI args -> store operations -> output formatting.

pub mod bookings;
pub mod calendar;
pub mod config_cmd;
pub mod favorites;
pub mod inquiries;
pub mod messages;
pub mod session_cmd;
pub mod util;
pub mod venues;

use venuesync_core::MarketStore;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a store-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, store: &MarketStore, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Venues(args) => venues::handle(store, args, global),
        Command::Favorites(args) => favorites::handle(store, args, global),
        Command::Inquiries(args) => inquiries::handle(store, args, global),
        Command::Bookings(args) => bookings::handle(store, args, global),
        Command::Calendar(args) => calendar::handle(store, args, global),
        Command::Messages(args) => messages::handle(store, args, global),
        Command::Session(args) => session_cmd::handle(store, args, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
