use crate::sim::movement::LocationId;
use crate::sim::player::{Apartment, ClothingTier};
use crate::sim::state::GameGoals;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of mutations. Every state change in the game flows through
/// exactly one of these, whether a human or the planner issued it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    StartGame { goals: GameGoals },
    AddPlayer { name: String, avatar: String },
    MoveToLocation { location: LocationId },
    Work { hours: u32 },
    Study { degree: String, hours: u32 },
    BuyFood { weeks: u32 },
    BuyFastFood,
    BuyFreshFood { weeks: u32 },
    BuyClothes { tier: ClothingTier },
    BuyItem { item: String },
    ApplyForJob { job: String },
    EnrollDegree { degree: String },
    PayRent,
    Deposit { amount: u64 },
    Withdraw { amount: u64 },
    ChangeApartment { apartment: Apartment },
    BuyStock { stock: String, shares: u32, price: u64 },
    SellStock { stock: String, shares: u32, price: u64 },
    PawnItem { item: String },
    RedeemItem { item: String },
    CompleteQuest {
        quest: String,
        success: bool,
        gold: u64,
        damage: u8,
        time_cost: u32,
    },
    RankUp,
    EndTurn,
    SetWeekendEvent { event: Option<String> },
}

/// Rejected preconditions. An `Err` from dispatch always means the state is
/// unchanged; the message is advisory text for the player-facing layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the game has not started yet")]
    GameNotStarted,
    #[error("the game has already started")]
    GameAlreadyStarted,
    #[error("the game is over")]
    GameOver,
    #[error("at least one player must join before starting")]
    NoPlayers,
    #[error("not enough hours left this week (need {needed})")]
    InsufficientHours { needed: u32 },
    #[error("not enough cash (need ${needed})")]
    InsufficientCash { needed: u64 },
    #[error("not enough in the bank (need ${needed})")]
    InsufficientBank { needed: u64 },
    #[error("no job to work")]
    NoJob,
    #[error("must be at {} for that", .needed.label())]
    WrongLocation { needed: LocationId },
    #[error("not enrolled in {degree}")]
    NotEnrolled { degree: String },
    #[error("already enrolled in {degree}")]
    AlreadyEnrolled { degree: String },
    #[error("already holds the {degree} degree")]
    AlreadyHeld { degree: String },
    #[error("course load is full (4 concurrent courses)")]
    CourseLoadFull,
    #[error("already owns {item}")]
    AlreadyOwned { item: String },
    #[error("does not own {item}")]
    NotOwned { item: String },
    #[error("{item} is not at the pawn shop")]
    NotPawned { item: String },
    #[error("missing the {degree} degree")]
    MissingDegree { degree: String },
    #[error("needs {} clothes or better", .needed.label())]
    ClothingBelowTier { needed: ClothingTier },
    #[error("nowhere to keep groceries without a refrigerator")]
    NoFoodStorage,
    #[error("the pantry is full")]
    PantryFull,
    #[error("not enough shares of {stock}")]
    InsufficientShares { stock: String },
    #[error("needs {needed} completed quests for the next rank")]
    RankRequirementNotMet { needed: usize },
    #[error("already at the highest guild rank")]
    AtHighestRank,
    #[error("amount must be greater than zero")]
    ZeroAmount,
    #[error("no such job listing")]
    UnknownJob,
    #[error("no such degree program")]
    UnknownDegree,
    #[error("no such item for sale")]
    UnknownItem,
    #[error("no such stock is traded here")]
    UnknownStock,
    #[error("no such quest is posted")]
    UnknownQuest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_read_like_advisories() {
        let err = ActionError::InsufficientCash { needed: 120 };
        assert_eq!(err.to_string(), "not enough cash (need $120)");
        let err = ActionError::ClothingBelowTier {
            needed: ClothingTier::Business,
        };
        assert_eq!(err.to_string(), "needs business clothes or better");
        let err = ActionError::WrongLocation {
            needed: LocationId::Factory,
        };
        assert_eq!(err.to_string(), "must be at Widget Factory for that");
    }
}
