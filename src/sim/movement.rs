use serde::{Deserialize, Serialize};

pub const MS_PER_TILE: u64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationId {
    LowRentRooms,
    SecurityArms,
    Factory,
    BurgerBar,
    Grocery,
    ApplianceStore,
    ClothingStore,
    PawnShop,
    Bank,
    University,
    EmploymentOffice,
    RentOffice,
    GuildHall,
}

impl LocationId {
    /// Fixed tile position on the board ring.
    pub fn tile(self) -> (i32, i32) {
        match self {
            LocationId::LowRentRooms => (0, 0),
            LocationId::SecurityArms => (6, 0),
            LocationId::Factory => (0, 4),
            LocationId::BurgerBar => (2, 0),
            LocationId::Grocery => (4, 0),
            LocationId::ApplianceStore => (6, 2),
            LocationId::ClothingStore => (6, 4),
            LocationId::PawnShop => (0, 2),
            LocationId::Bank => (4, 4),
            LocationId::University => (2, 4),
            LocationId::EmploymentOffice => (3, 2),
            LocationId::RentOffice => (5, 2),
            LocationId::GuildHall => (1, 2),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationId::LowRentRooms => "Low-Rent Rooms",
            LocationId::SecurityArms => "Security Arms Apartments",
            LocationId::Factory => "Widget Factory",
            LocationId::BurgerBar => "Burger Bar",
            LocationId::Grocery => "Corner Grocery",
            LocationId::ApplianceStore => "Appliance Emporium",
            LocationId::ClothingStore => "Thread Palace",
            LocationId::PawnShop => "Honest Ed's Pawn",
            LocationId::Bank => "First Municipal Bank",
            LocationId::University => "City University",
            LocationId::EmploymentOffice => "Employment Office",
            LocationId::RentOffice => "Rent Office",
            LocationId::GuildHall => "Adventurers' Guild Hall",
        }
    }
}

/// What the animation layer plays before it dispatches the location change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTransition {
    pub waypoints: Vec<(i32, i32)>,
    pub total_ms: u64,
}

/// Ordered tile walk from one venue to another. Zero-length when the
/// endpoints match, so a skipped animation is just an empty transition.
pub fn transition(from: LocationId, to: LocationId) -> MoveTransition {
    let (mut x, mut y) = from.tile();
    let (tx, ty) = to.tile();
    let mut waypoints = Vec::new();
    while x != tx {
        x += (tx - x).signum();
        waypoints.push((x, y));
    }
    while y != ty {
        y += (ty - y).signum();
        waypoints.push((x, y));
    }
    let total_ms = waypoints.len() as u64 * MS_PER_TILE;
    MoveTransition { waypoints, total_ms }
}
