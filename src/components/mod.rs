//! Reusable UI components

mod filter_panel;
mod loading;
mod no_results;
mod resource_card;
mod search_bar;

pub use filter_panel::*;
pub use loading::*;
pub use no_results::*;
pub use resource_card::*;
pub use search_bar::*;
