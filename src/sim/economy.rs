use crate::sim::catalog::JobDef;
use crate::sim::state::{ECONOMY_MAX, ECONOMY_MIN};
use rand::Rng;

pub const DRIFT_CHANCE: f64 = 0.15;
pub const DRIFT_STEP: f64 = 0.10;

/// Every posted price and wage is the catalog base scaled by the shared
/// economy index, floored to whole dollars.
pub fn adjusted(base: u64, economy: f64) -> u64 {
    (base as f64 * economy).floor() as u64
}

pub fn shift_earnings(job: &JobDef, hours: u32, economy: f64) -> u64 {
    let per_shift = job.shift_pay as f64 * hours as f64 / job.shift_hours as f64;
    (per_shift * economy).floor() as u64
}

pub fn career_gain(hours: u32) -> u8 {
    (hours / 6).min(u8::MAX as u32) as u8
}

pub fn pawn_loan(value: u64) -> u64 {
    value / 2
}

pub fn pawn_redeem_price(value: u64) -> u64 {
    value * 3 / 5
}

/// Occasional drift in the shared index, up or down one step.
pub fn drift(economy: f64, rng: &mut impl Rng) -> f64 {
    if !rng.gen_bool(DRIFT_CHANCE) {
        return economy;
    }
    let next = if rng.gen_bool(0.5) {
        economy * (1.0 + DRIFT_STEP)
    } else {
        economy * (1.0 - DRIFT_STEP)
    };
    next.clamp(ECONOMY_MIN, ECONOMY_MAX)
}
