/// Tuning knobs and flavor lines for one computer opponent. Both stock
/// opponents run the same rule chain; only this record differs between them.
#[derive(Debug, Clone)]
pub struct Persona {
    pub name: &'static str,
    /// Below this many hours the week is considered spent.
    pub min_actionable_hours: u32,
    /// Happiness level that triggers emergency cheering-up.
    pub low_happiness: u8,
    /// Happiness level below which a low-rent tenant starts eyeing the
    /// security building.
    pub relocate_happiness: u8,
    /// Combined funds required before relocating to the security building.
    pub relocation_funds: u64,
    /// Minimum cash on hand before discretionary happiness shopping.
    pub happiness_spend_floor: u64,
    /// Cash kept out of the bank for day-to-day spending.
    pub cash_buffer: u64,
    /// Hours held back from a work shift for the trip home.
    pub work_reserve_hours: u32,
    /// Longest single study sitting.
    pub study_visit_cap: u32,
    /// Presentation pause between plan steps.
    pub step_delay_ms: u64,
    pub lines: PersonaLines,
}

/// Flavor text per rule family, formatted with runtime detail by the planner.
#[derive(Debug, Clone)]
pub struct PersonaLines {
    pub pay_rent: &'static str,
    pub buy_food: &'static str,
    pub out_of_time: &'static str,
    pub cheer_up: &'static str,
    pub relocate: &'static str,
    pub job_hunt: &'static str,
    pub job_upgrade: &'static str,
    pub dress_up: &'static str,
    pub work: &'static str,
    pub study: &'static str,
    pub enroll: &'static str,
    pub shopping: &'static str,
    pub utility: &'static str,
    pub bank: &'static str,
    pub end_turn: &'static str,
}

pub const JONES: Persona = Persona {
    name: "Jones",
    min_actionable_hours: 3,
    low_happiness: 20,
    relocate_happiness: 40,
    relocation_funds: 260,
    happiness_spend_floor: 120,
    cash_buffer: 60,
    work_reserve_hours: 2,
    study_visit_cap: 6,
    step_delay_ms: 600,
    lines: PersonaLines {
        pay_rent: "Jones hustles to the rent office before the landlord calls.",
        buy_food: "Jones is running on empty and goes looking for dinner.",
        out_of_time: "Jones is out of hours and calls it a week.",
        cheer_up: "Jones needs a pick-me-up.",
        relocate: "Jones is tired of hearing footsteps in the hall at night.",
        job_hunt: "Jones scans the classifieds for work.",
        job_upgrade: "Jones figures there's a better gig out there.",
        dress_up: "Jones invests in a sharper wardrobe.",
        work: "Jones clocks in and grinds out a shift.",
        study: "Jones hits the books at the university.",
        enroll: "Jones signs up for another course.",
        shopping: "Jones treats himself to something nice.",
        utility: "Jones springs for a refrigerator. Groceries at last.",
        bank: "Jones stashes spare cash at the bank.",
        end_turn: "Jones puts his feet up. Next week, then.",
    },
};

pub const GRIMWALD: Persona = Persona {
    name: "Grimwald",
    min_actionable_hours: 4,
    low_happiness: 28,
    relocate_happiness: 45,
    relocation_funds: 300,
    happiness_spend_floor: 150,
    cash_buffer: 100,
    work_reserve_hours: 2,
    study_visit_cap: 8,
    step_delay_ms: 800,
    lines: PersonaLines {
        pay_rent: "Grimwald settles the rent. Debts are beneath him.",
        buy_food: "Grimwald requires sustenance, immediately.",
        out_of_time: "Grimwald declares this week concluded.",
        cheer_up: "Grimwald's mood darkens. Retail therapy is indicated.",
        relocate: "Grimwald relocates somewhere with a doorman.",
        job_hunt: "Grimwald deigns to seek employment.",
        job_upgrade: "Grimwald's talents are wasted here. Onward.",
        dress_up: "Grimwald acquires attire befitting his station.",
        work: "Grimwald labors. The ledger demands it.",
        study: "Grimwald studies. Knowledge is leverage.",
        enroll: "Grimwald enrolls in further education.",
        shopping: "Grimwald procures a small luxury.",
        utility: "Grimwald purchases cold storage. Sensible.",
        bank: "Grimwald banks his surplus where thieves cannot reach.",
        end_turn: "Grimwald retires for the week.",
    },
};
