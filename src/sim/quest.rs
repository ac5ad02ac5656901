use crate::sim::catalog::{Catalog, QuestDef, QuestRank};
use crate::sim::player::GuildRank;
use rand::Rng;
use rand::seq::SliceRandom;

pub const QUEST_BOARD_SIZE: usize = 5;
pub const FAILURE_DAMAGE_MIN: u8 = 5;
pub const FAILURE_DAMAGE_MAX: u8 = 24;

/// Result of one quest roll, ready to feed back through CompleteQuest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestAttempt {
    pub quest: String,
    pub success: bool,
    pub gold: u64,
    pub damage: u8,
    pub time_cost: u32,
}

/// Highest quest rank a guild member of this standing may take on.
pub fn highest_accessible_rank(guild_rank: GuildRank) -> QuestRank {
    match guild_rank {
        GuildRank::Novice => QuestRank::E,
        GuildRank::Apprentice => QuestRank::D,
        GuildRank::Journeyman => QuestRank::C,
        GuildRank::Adept => QuestRank::B,
        GuildRank::Veteran => QuestRank::A,
        GuildRank::Elite | GuildRank::Guildmaster => QuestRank::S,
    }
}

/// Re-deal the guild board: filter to what this rank may attempt, shuffle,
/// post up to five.
pub fn refresh_quests(
    catalog: &Catalog,
    guild_rank: GuildRank,
    rng: &mut impl Rng,
) -> Vec<QuestDef> {
    let ceiling = highest_accessible_rank(guild_rank);
    let mut available: Vec<QuestDef> = catalog
        .quests
        .iter()
        .filter(|quest| quest.rank <= ceiling)
        .filter(|quest| quest.min_guild_rank.map_or(true, |needed| guild_rank >= needed))
        .cloned()
        .collect();
    available.shuffle(rng);
    available.truncate(QUEST_BOARD_SIZE);
    available
}

/// One uniform draw decides it: beat the risk and take the full purse, or
/// limp home with a quarter of it and some bruises.
pub fn attempt_quest(quest: &QuestDef, rng: &mut impl Rng) -> QuestAttempt {
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll > quest.risk {
        QuestAttempt {
            quest: quest.id.clone(),
            success: true,
            gold: quest.gold,
            damage: 0,
            time_cost: quest.time_cost,
        }
    } else {
        QuestAttempt {
            quest: quest.id.clone(),
            success: false,
            gold: quest.gold / 4,
            damage: rng.gen_range(FAILURE_DAMAGE_MIN..=FAILURE_DAMAGE_MAX),
            time_cost: quest.time_cost,
        }
    }
}

/// The rank the member is due, if the completed count clears the next bar.
pub fn due_promotion(guild_rank: GuildRank, completed_quests: usize) -> Option<GuildRank> {
    let next = guild_rank.next()?;
    (completed_quests >= next.quest_threshold()).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn risky_quest(risk: f64) -> QuestDef {
        QuestDef {
            id: "trial".to_string(),
            name: "Trial Run".to_string(),
            rank: QuestRank::C,
            gold: 100,
            risk,
            time_cost: 4,
            min_guild_rank: None,
        }
    }

    #[test]
    fn novices_only_see_rank_e_postings() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(1);
        let board = refresh_quests(&catalog, GuildRank::Novice, &mut rng);
        assert!(!board.is_empty());
        assert!(board.iter().all(|quest| quest.rank == QuestRank::E));
    }

    #[test]
    fn board_never_posts_more_than_five() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(2);
        for rank in [
            GuildRank::Novice,
            GuildRank::Journeyman,
            GuildRank::Veteran,
            GuildRank::Guildmaster,
        ] {
            assert!(refresh_quests(&catalog, rank, &mut rng).len() <= QUEST_BOARD_SIZE);
        }
    }

    #[test]
    fn gated_quests_stay_off_lower_boards() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let board = refresh_quests(&catalog, GuildRank::Veteran, &mut rng);
            assert!(board.iter().all(|quest| quest.id != "dragon"));
        }
    }

    #[test]
    fn failure_pays_a_quarter_and_bruises() {
        let quest = risky_quest(1.0);
        let mut rng = StdRng::seed_from_u64(4);
        let attempt = attempt_quest(&quest, &mut rng);
        assert!(!attempt.success);
        assert_eq!(attempt.gold, 25);
        assert!((FAILURE_DAMAGE_MIN..=FAILURE_DAMAGE_MAX).contains(&attempt.damage));
        assert_eq!(attempt.time_cost, 4);
    }

    #[test]
    fn success_pays_the_full_purse_unharmed() {
        let quest = risky_quest(0.0);
        let mut rng = StdRng::seed_from_u64(5);
        let attempt = attempt_quest(&quest, &mut rng);
        assert!(attempt.success);
        assert_eq!(attempt.gold, 100);
        assert_eq!(attempt.damage, 0);
    }

    #[test]
    fn success_rate_converges_to_one_minus_risk() {
        let quest = risky_quest(0.3);
        let mut rng = StdRng::seed_from_u64(6);
        let trials = 100_000;
        let successes = (0..trials)
            .filter(|_| attempt_quest(&quest, &mut rng).success)
            .count();
        let observed = successes as f64 / trials as f64;
        assert!(
            (observed - 0.7).abs() < 0.01,
            "observed success rate {observed} strayed from 0.7"
        );
    }

    #[test]
    fn promotion_is_one_step_and_threshold_gated() {
        assert_eq!(due_promotion(GuildRank::Novice, 2), None);
        assert_eq!(due_promotion(GuildRank::Novice, 3), Some(GuildRank::Apprentice));
        // A huge backlog still promotes one rank at a time.
        assert_eq!(due_promotion(GuildRank::Novice, 60), Some(GuildRank::Apprentice));
        assert_eq!(due_promotion(GuildRank::Elite, 60), Some(GuildRank::Guildmaster));
        assert_eq!(due_promotion(GuildRank::Guildmaster, 99), None);
    }
}
