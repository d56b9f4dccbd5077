mod config_cmd;
mod fav;
mod plan;
mod prefs;
mod recipe;
mod shopping;

pub use config_cmd::ConfigCommand;
pub use fav::FavCommand;
pub use plan::PlanCommand;
pub use prefs::PrefsCommand;
pub use recipe::RecipeCommand;
pub use shopping::ShoppingCommand;

use quickbites_core::{AppState, FileStore};

/// Application state backed by the configured data directory.
pub type State = AppState<FileStore>;
