//! Favorites command handlers.

use venuesync_core::{MarketStore, Venue};

use crate::cli::{FavoritesArgs, FavoritesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;
use super::venues::VenueRow;

pub fn handle(store: &MarketStore, args: FavoritesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        FavoritesCommand::List => {
            let snap = store.favorites_snapshot();
            let favorites: Vec<Venue> = snap.iter().map(|v| Venue::clone(v)).collect();
            let out = output::render_list(
                &global.output,
                &favorites,
                |v| VenueRow::from(v),
                |v| v.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FavoritesCommand::Toggle { venue } => {
            let venue = util::resolve_venue(store, &venue)?;
            let now_favorite = store.toggle_favorite(&venue.id)?;
            if !global.quiet {
                if now_favorite {
                    eprintln!("Added '{}' to favorites", venue.name);
                } else {
                    eprintln!("Removed '{}' from favorites", venue.name);
                }
            }
            Ok(())
        }
    }
}
