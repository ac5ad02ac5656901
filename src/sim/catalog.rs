use crate::sim::player::{Apartment, ClothingTier, GuildRank};
use crate::sim::movement::LocationId;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDef {
    pub id: String,
    pub title: String,
    pub location: LocationId,
    pub shift_pay: u64,
    pub shift_hours: u32,
    pub career_points: u8,
    pub required_degrees: Vec<String>,
    pub required_clothing: Option<ClothingTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeDef {
    pub id: String,
    pub name: String,
    pub tuition: u64,
    pub required_lessons: u32,
    pub education_award: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingDef {
    pub tier: ClothingTier,
    pub price: u64,
    pub weeks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub happiness: u8,
    #[serde(default)]
    pub provides_food_storage: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApartmentDef {
    pub kind: Apartment,
    pub base_rent: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPrices {
    pub grocery_per_week: u64,
    pub fresh_per_week: u64,
    pub fresh_happiness: u8,
    pub fast_food_meal: u64,
    pub fast_food_happiness: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockDef {
    pub id: String,
    pub name: String,
    pub base_price: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekendEventDef {
    pub text: String,
    pub cost: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestRank {
    E,
    D,
    C,
    B,
    A,
    S,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDef {
    pub id: String,
    pub name: String,
    pub rank: QuestRank,
    pub gold: u64,
    pub risk: f64,
    pub time_cost: u32,
    #[serde(default)]
    pub min_guild_rank: Option<GuildRank>,
}

/// Read-only rulebook data. Loaded once, never mutated by the reducer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub jobs: Vec<JobDef>,
    pub degrees: Vec<DegreeDef>,
    pub clothing: Vec<ClothingDef>,
    pub items: Vec<ItemDef>,
    pub apartments: Vec<ApartmentDef>,
    pub food: FoodPrices,
    pub stocks: Vec<StockDef>,
    pub weekend_events: Vec<WeekendEventDef>,
    pub quests: Vec<QuestDef>,
}

impl Catalog {
    /// Built-in tables, optionally replaced wholesale by a RON file.
    pub fn load(path: &str) -> Result<Catalog> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(ron::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Catalog::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn job(&self, id: &str) -> Option<&JobDef> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn degree(&self, id: &str) -> Option<&DegreeDef> {
        self.degrees.iter().find(|degree| degree.id == id)
    }

    pub fn clothing(&self, tier: ClothingTier) -> Option<&ClothingDef> {
        self.clothing.iter().find(|def| def.tier == tier)
    }

    pub fn item(&self, id: &str) -> Option<&ItemDef> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn apartment(&self, kind: Apartment) -> Option<&ApartmentDef> {
        self.apartments.iter().find(|def| def.kind == kind)
    }

    pub fn stock(&self, id: &str) -> Option<&StockDef> {
        self.stocks.iter().find(|stock| stock.id == id)
    }

    pub fn quest(&self, id: &str) -> Option<&QuestDef> {
        self.quests.iter().find(|quest| quest.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            jobs: default_jobs(),
            degrees: default_degrees(),
            clothing: vec![
                ClothingDef {
                    tier: ClothingTier::Casual,
                    price: 25,
                    weeks: 6,
                },
                ClothingDef {
                    tier: ClothingTier::Dress,
                    price: 60,
                    weeks: 8,
                },
                ClothingDef {
                    tier: ClothingTier::Business,
                    price: 120,
                    weeks: 10,
                },
            ],
            items: default_items(),
            apartments: vec![
                ApartmentDef {
                    kind: Apartment::LowCost,
                    base_rent: 80,
                },
                ApartmentDef {
                    kind: Apartment::Security,
                    base_rent: 150,
                },
            ],
            food: FoodPrices {
                grocery_per_week: 10,
                fresh_per_week: 14,
                fresh_happiness: 1,
                fast_food_meal: 8,
                fast_food_happiness: 5,
            },
            stocks: vec![
                stock("widget", "Consolidated Widget", 25),
                stock("ferret-air", "Ferret Airlines", 40),
                stock("monolith", "Monolith Industries", 65),
                stock("pyramid", "Pyramid Assurance", 15),
            ],
            weekend_events: default_weekend_events(),
            quests: default_quests(),
        }
    }
}

fn stock(id: &str, name: &str, base_price: u64) -> StockDef {
    StockDef {
        id: id.to_string(),
        name: name.to_string(),
        base_price,
    }
}

fn default_jobs() -> Vec<JobDef> {
    fn job(
        id: &str,
        title: &str,
        location: LocationId,
        shift_pay: u64,
        career_points: u8,
        required_degrees: &[&str],
        required_clothing: Option<ClothingTier>,
    ) -> JobDef {
        JobDef {
            id: id.to_string(),
            title: title.to_string(),
            location,
            shift_pay,
            shift_hours: 6,
            career_points,
            required_degrees: required_degrees.iter().map(|d| d.to_string()).collect(),
            required_clothing,
        }
    }

    vec![
        job("janitor", "Janitor", LocationId::Factory, 24, 5, &[], None),
        job(
            "fry-cook",
            "Fry Cook",
            LocationId::BurgerBar,
            30,
            8,
            &[],
            Some(ClothingTier::Casual),
        ),
        job(
            "clerk",
            "Sales Clerk",
            LocationId::ApplianceStore,
            36,
            12,
            &[],
            Some(ClothingTier::Dress),
        ),
        job(
            "assembler",
            "Line Assembler",
            LocationId::Factory,
            44,
            18,
            &["trade"],
            Some(ClothingTier::Casual),
        ),
        job(
            "teller",
            "Bank Teller",
            LocationId::Bank,
            48,
            22,
            &["business"],
            Some(ClothingTier::Dress),
        ),
        job(
            "supervisor",
            "Floor Supervisor",
            LocationId::Factory,
            58,
            30,
            &["trade", "business"],
            Some(ClothingTier::Dress),
        ),
        job(
            "engineer",
            "Engineer",
            LocationId::Factory,
            78,
            42,
            &["engineering"],
            Some(ClothingTier::Dress),
        ),
        job(
            "professor",
            "Professor",
            LocationId::University,
            84,
            52,
            &["academia"],
            Some(ClothingTier::Business),
        ),
        job(
            "manager",
            "Branch Manager",
            LocationId::Bank,
            96,
            60,
            &["business", "economics"],
            Some(ClothingTier::Business),
        ),
        job(
            "executive",
            "Executive",
            LocationId::Factory,
            120,
            72,
            &["business", "engineering"],
            Some(ClothingTier::Business),
        ),
    ]
}

fn default_degrees() -> Vec<DegreeDef> {
    fn degree(id: &str, name: &str, tuition: u64, required_lessons: u32, award: u32) -> DegreeDef {
        DegreeDef {
            id: id.to_string(),
            name: name.to_string(),
            tuition,
            required_lessons,
            education_award: award,
        }
    }

    vec![
        degree("trade", "Trade School Certificate", 40, 10, 8),
        degree("business", "Business Administration", 60, 12, 10),
        degree("economics", "Economics", 70, 12, 10),
        degree("engineering", "Engineering", 80, 14, 12),
        degree("academia", "Liberal Arts", 90, 16, 14),
        degree("law", "Pre-Law", 100, 18, 16),
    ]
}

fn default_items() -> Vec<ItemDef> {
    fn item(id: &str, name: &str, price: u64, happiness: u8) -> ItemDef {
        ItemDef {
            id: id.to_string(),
            name: name.to_string(),
            price,
            happiness,
            provides_food_storage: false,
        }
    }

    let mut items = vec![
        item("phone", "Telephone", 60, 3),
        item("microwave", "Microwave Oven", 80, 4),
        item("bicycle", "Bicycle", 90, 6),
        item("sofa", "Reclining Sofa", 110, 5),
        item("stereo", "Hi-Fi Stereo", 130, 6),
        item("tv", "Color Television", 196, 8),
        item("computer", "Home Computer", 480, 10),
    ];
    items.push(ItemDef {
        id: "refrigerator".to_string(),
        name: "Refrigerator".to_string(),
        price: 150,
        happiness: 3,
        provides_food_storage: true,
    });
    items.sort_by(|a, b| a.price.cmp(&b.price));
    items
}

fn default_weekend_events() -> Vec<WeekendEventDef> {
    fn event(text: &str, cost: u64) -> WeekendEventDef {
        WeekendEventDef {
            text: text.to_string(),
            cost,
        }
    }

    vec![
        event("You spent the weekend fishing at the reservoir.", 0),
        event("A night at the movies set you back $12.", 12),
        event("Your cousin visited and ate everything in the pantry.", 0),
        event("You found a $5 bill outside the laundromat, then lost it on lottery scratchers.", 0),
        event("Car pool fees came due: $9.", 9),
        event("You treated a friend to dinner downtown: $18.", 18),
        event("Rained all weekend. You stayed in and reorganized the closet.", 0),
        event("Street fair! Funnel cake and ring toss cost you $7.", 7),
        event("Your favorite team lost. Consolation pizza: $11.", 11),
        event("You volunteered at the food bank and slept well.", 0),
        event("Parking ticket from three weeks ago finally caught up: $15.", 15),
        event("Quiet weekend. Crossword finished in pen.", 0),
    ]
}

fn default_quests() -> Vec<QuestDef> {
    fn quest(
        id: &str,
        name: &str,
        rank: QuestRank,
        gold: u64,
        risk: f64,
        time_cost: u32,
    ) -> QuestDef {
        QuestDef {
            id: id.to_string(),
            name: name.to_string(),
            rank,
            gold,
            risk,
            time_cost,
            min_guild_rank: None,
        }
    }

    let mut quests = vec![
        quest("rats", "Clear the Cellar Rats", QuestRank::E, 15, 0.1, 3),
        quest("parcel", "Deliver a Parcel Across Town", QuestRank::E, 12, 0.05, 2),
        quest("posters", "Hang Guild Recruitment Posters", QuestRank::E, 10, 0.05, 2),
        quest("stray", "Recover a Runaway Ferret", QuestRank::D, 25, 0.2, 4),
        quest("night-watch", "Stand the Night Watch", QuestRank::D, 30, 0.25, 6),
        quest("ledger", "Audit the Pawnbroker's Ledger", QuestRank::C, 45, 0.3, 5),
        quest("courier", "Courier Run Through the Docks", QuestRank::C, 55, 0.35, 6),
        quest("bodyguard", "Bodyguard a Nervous Banker", QuestRank::B, 80, 0.4, 8),
        quest("smugglers", "Stake Out the Smugglers' Drop", QuestRank::B, 95, 0.45, 8),
        quest("vault", "Test the Bank Vault Defenses", QuestRank::A, 140, 0.55, 10),
        quest("rival", "Outwit the Rival Guild", QuestRank::A, 170, 0.6, 10),
        quest("dragon", "The Dragon of Interstate 9", QuestRank::S, 300, 0.75, 12),
    ];
    quests[10].min_guild_rank = Some(GuildRank::Veteran);
    quests[11].min_guild_rank = Some(GuildRank::Elite);
    quests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = Catalog::default();
        for (index, job) in catalog.jobs.iter().enumerate() {
            assert!(
                catalog.jobs.iter().skip(index + 1).all(|other| other.id != job.id),
                "duplicate job id {}",
                job.id
            );
        }
        for (index, degree) in catalog.degrees.iter().enumerate() {
            assert!(
                catalog
                    .degrees
                    .iter()
                    .skip(index + 1)
                    .all(|other| other.id != degree.id),
                "duplicate degree id {}",
                degree.id
            );
        }
        for (index, item) in catalog.items.iter().enumerate() {
            assert!(
                catalog.items.iter().skip(index + 1).all(|other| other.id != item.id),
                "duplicate item id {}",
                item.id
            );
        }
    }

    #[test]
    fn job_prerequisites_reference_real_degrees() {
        let catalog = Catalog::default();
        for job in &catalog.jobs {
            for degree in &job.required_degrees {
                assert!(
                    catalog.degree(degree).is_some(),
                    "{} requires unknown degree {degree}",
                    job.id
                );
            }
        }
    }

    #[test]
    fn every_clothing_tier_is_priced() {
        let catalog = Catalog::default();
        for tier in [ClothingTier::Casual, ClothingTier::Dress, ClothingTier::Business] {
            assert!(catalog.clothing(tier).is_some());
        }
    }

    #[test]
    fn exactly_one_item_provides_food_storage() {
        let catalog = Catalog::default();
        let storage = catalog
            .items
            .iter()
            .filter(|item| item.provides_food_storage)
            .count();
        assert_eq!(storage, 1);
    }

    #[test]
    fn quest_risks_are_probabilities() {
        let catalog = Catalog::default();
        for quest in &catalog.quests {
            assert!((0.0..1.0).contains(&quest.risk), "{} risk out of range", quest.id);
        }
    }

    #[test]
    fn missing_override_file_falls_back_to_defaults() {
        let catalog = Catalog::load("does-not-exist.ron").expect("fallback");
        assert!(!catalog.jobs.is_empty());
    }
}
