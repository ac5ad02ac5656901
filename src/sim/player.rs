use crate::sim::action::ActionError;
use crate::sim::catalog::{Catalog, JobDef};
use crate::sim::movement::LocationId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const WEEKLY_HOURS: u32 = 60;
pub const STARTING_MONEY: u64 = 50;
pub const STARTING_FOOD: u32 = 2;
pub const FRIDGE_FOOD_CAP: u32 = 8;
pub const MAX_ENROLLED_COURSES: usize = 4;
pub const PAWN_WEEKS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClothingTier {
    Casual,
    Dress,
    Business,
}

impl ClothingTier {
    pub fn next(self) -> Option<ClothingTier> {
        match self {
            ClothingTier::Casual => Some(ClothingTier::Dress),
            ClothingTier::Dress => Some(ClothingTier::Business),
            ClothingTier::Business => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClothingTier::Casual => "casual",
            ClothingTier::Dress => "dress",
            ClothingTier::Business => "business",
        }
    }
}

/// Remaining weeks of wear per tier. A tier at zero no longer counts toward
/// job requirements; when everything is worn out the player has no tier at
/// all and fails any clothing requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothesRack {
    pub casual_weeks: u32,
    pub dress_weeks: u32,
    pub business_weeks: u32,
}

impl ClothesRack {
    pub fn weeks(&self, tier: ClothingTier) -> u32 {
        match tier {
            ClothingTier::Casual => self.casual_weeks,
            ClothingTier::Dress => self.dress_weeks,
            ClothingTier::Business => self.business_weeks,
        }
    }

    pub fn set_weeks(&mut self, tier: ClothingTier, weeks: u32) {
        match tier {
            ClothingTier::Casual => self.casual_weeks = weeks,
            ClothingTier::Dress => self.dress_weeks = weeks,
            ClothingTier::Business => self.business_weeks = weeks,
        }
    }

    pub fn wear_one_week(&mut self) {
        self.casual_weeks = self.casual_weeks.saturating_sub(1);
        self.dress_weeks = self.dress_weeks.saturating_sub(1);
        self.business_weeks = self.business_weeks.saturating_sub(1);
    }

    pub fn best_tier(&self) -> Option<ClothingTier> {
        if self.business_weeks > 0 {
            Some(ClothingTier::Business)
        } else if self.dress_weeks > 0 {
            Some(ClothingTier::Dress)
        } else if self.casual_weeks > 0 {
            Some(ClothingTier::Casual)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Apartment {
    LowCost,
    Security,
}

impl Apartment {
    pub fn home_location(self) -> LocationId {
        match self {
            Apartment::LowCost => LocationId::LowRentRooms,
            Apartment::Security => LocationId::SecurityArms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GuildRank {
    Novice,
    Apprentice,
    Journeyman,
    Adept,
    Veteran,
    Elite,
    Guildmaster,
}

impl GuildRank {
    pub fn next(self) -> Option<GuildRank> {
        match self {
            GuildRank::Novice => Some(GuildRank::Apprentice),
            GuildRank::Apprentice => Some(GuildRank::Journeyman),
            GuildRank::Journeyman => Some(GuildRank::Adept),
            GuildRank::Adept => Some(GuildRank::Veteran),
            GuildRank::Veteran => Some(GuildRank::Elite),
            GuildRank::Elite => Some(GuildRank::Guildmaster),
            GuildRank::Guildmaster => None,
        }
    }

    /// Completed quests needed to hold this rank.
    pub fn quest_threshold(self) -> usize {
        match self {
            GuildRank::Novice => 0,
            GuildRank::Apprentice => 3,
            GuildRank::Journeyman => 8,
            GuildRank::Adept => 15,
            GuildRank::Veteran => 25,
            GuildRank::Elite => 40,
            GuildRank::Guildmaster => 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PawnTicket {
    pub item: String,
    pub redeem_price: u64,
    pub weeks_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub avatar: String,
    pub money: u64,
    pub bank_balance: u64,
    pub happiness: u8,
    pub education: u32,
    pub career: u8,
    pub location: LocationId,
    pub job: Option<String>,
    pub degrees: BTreeSet<String>,
    pub enrolled_courses: BTreeSet<String>,
    pub study_progress: BTreeMap<String, u32>,
    pub items: BTreeSet<String>,
    pub pawned_items: Vec<PawnTicket>,
    pub food: u32,
    pub fast_food_relief: bool,
    pub clothes: ClothesRack,
    pub apartment: Apartment,
    pub hours_remaining: u32,
    pub hunger_penalty: u32,
    pub experience: u32,
    pub dependability: u32,
    pub relaxation: u8,
    pub lottery_tickets: u32,
    pub rent_debt: u64,
    pub stocks: BTreeMap<String, u32>,
    pub guild_rank: GuildRank,
    pub completed_quests: BTreeSet<String>,
}

impl Player {
    pub fn new(id: usize, name: String, avatar: String) -> Self {
        Player {
            id,
            name,
            avatar,
            money: STARTING_MONEY,
            bank_balance: 0,
            happiness: 50,
            education: 0,
            career: 0,
            location: Apartment::LowCost.home_location(),
            job: None,
            degrees: BTreeSet::new(),
            enrolled_courses: BTreeSet::new(),
            study_progress: BTreeMap::new(),
            items: BTreeSet::new(),
            pawned_items: Vec::new(),
            food: STARTING_FOOD,
            fast_food_relief: false,
            clothes: ClothesRack {
                casual_weeks: 6,
                dress_weeks: 0,
                business_weeks: 0,
            },
            apartment: Apartment::LowCost,
            hours_remaining: WEEKLY_HOURS,
            hunger_penalty: 0,
            experience: 0,
            dependability: 0,
            relaxation: 50,
            lottery_tickets: 0,
            rent_debt: 0,
            stocks: BTreeMap::new(),
            guild_rank: GuildRank::Novice,
            completed_quests: BTreeSet::new(),
        }
    }

    pub fn total_funds(&self) -> u64 {
        self.money + self.bank_balance
    }

    pub fn clothing_tier(&self) -> Option<ClothingTier> {
        self.clothes.best_tier()
    }

    pub fn owns(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// Why this player cannot hold this job, if anything.
    pub fn job_requirements(&self, job: &JobDef) -> Result<(), ActionError> {
        for degree in &job.required_degrees {
            if !self.degrees.contains(degree) {
                return Err(ActionError::MissingDegree {
                    degree: degree.clone(),
                });
            }
        }
        if let Some(needed) = job.required_clothing {
            if self.clothing_tier().map_or(true, |tier| tier < needed) {
                return Err(ActionError::ClothingBelowTier { needed });
            }
        }
        Ok(())
    }

    /// Weeks of groceries the pantry can hold. Zero without a refrigerator.
    pub fn max_food_storage(&self, catalog: &Catalog) -> u32 {
        let has_fridge = catalog
            .items
            .iter()
            .any(|item| item.provides_food_storage && self.items.contains(&item.id));
        if has_fridge { FRIDGE_FOOD_CAP } else { 0 }
    }

    pub fn add_happiness(&mut self, amount: u8) {
        self.happiness = self.happiness.saturating_add(amount).min(100);
    }

    pub fn deduct_happiness(&mut self, amount: u8) {
        self.happiness = self.happiness.saturating_sub(amount);
    }

    pub fn add_career(&mut self, amount: u8) {
        self.career = self.career.saturating_add(amount).min(100);
    }
}
