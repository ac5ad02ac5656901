pub mod action;
pub mod catalog;
pub mod economy;
pub mod game;
pub mod movement;
pub mod player;
pub mod quest;
pub mod state;

pub use action::{Action, ActionError};
pub use catalog::Catalog;
pub use game::Game;
pub use movement::LocationId;
pub use player::{Apartment, ClothingTier, GuildRank, Player};
pub use state::{GameGoals, GameState};
