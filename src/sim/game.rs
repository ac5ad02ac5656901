use crate::sim::action::{Action, ActionError};
use crate::sim::catalog::{Catalog, DegreeDef, JobDef};
use crate::sim::economy;
use crate::sim::movement::LocationId;
use crate::sim::player::{
    Apartment, ClothingTier, PawnTicket, Player, MAX_ENROLLED_COURSES, PAWN_WEEKS, WEEKLY_HOURS,
};
use crate::sim::state::{GameGoals, GameState, WildWillyEvent, WEEKS_PER_MONTH};
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use std::collections::VecDeque;

pub const MOVE_HOURS: u32 = 1;
pub const APPLY_HOURS: u32 = 2;
pub const ENROLL_HOURS: u32 = 1;
pub const BANK_HOURS: u32 = 1;
pub const HUNGER_HAPPINESS_PENALTY: u8 = 10;
pub const HUNGER_HOURS_PENALTY: u32 = 10;
pub const BAILOUT_CASH_FLOOR: u64 = 10;
pub const BAILOUT_HAPPINESS_PENALTY: u8 = 15;
pub const CLOTHES_HAPPINESS: u8 = 2;
pub const WILD_WILLY_CHANCE: f64 = 0.08;

const MAX_MESSAGES: usize = 8;

/// Owns the world. Every mutation flows through `dispatch`; a rejected
/// action returns `Err` with the state untouched.
pub struct Game<R: Rng> {
    pub state: GameState,
    catalog: Catalog,
    rng: R,
    messages: VecDeque<String>,
}

impl Game<ThreadRng> {
    pub fn fresh(catalog: Catalog) -> Self {
        Game::with_rng(catalog, thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        Game {
            state: GameState::default(),
            catalog,
            rng,
            messages: VecDeque::with_capacity(MAX_MESSAGES),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn messages(&self) -> impl Iterator<Item = &String> {
        self.messages.iter()
    }

    /// Empties the narration log, oldest first.
    pub fn drain_messages(&mut self) -> Vec<String> {
        self.messages.drain(..).collect()
    }

    pub fn current_player(&self) -> &Player {
        &self.state.players[self.state.current_player]
    }

    /// Posted price after the economy index.
    pub fn price(&self, base: u64) -> u64 {
        economy::adjusted(base, self.state.economy)
    }

    /// This player's pay for a full shift at today's economy, zero if idle.
    pub fn shift_wage(&self, player: &Player) -> u64 {
        player
            .job
            .as_deref()
            .and_then(|id| self.catalog.job(id))
            .map(|job| economy::adjusted(job.shift_pay, self.state.economy))
            .unwrap_or(0)
    }

    pub fn eligible_jobs(&self, player: &Player) -> Vec<&JobDef> {
        self.catalog
            .jobs
            .iter()
            .filter(|job| player.job_requirements(job).is_ok())
            .collect()
    }

    pub fn enrollable_degrees(&self, player: &Player) -> Vec<&DegreeDef> {
        if player.enrolled_courses.len() >= MAX_ENROLLED_COURSES {
            return Vec::new();
        }
        self.catalog
            .degrees
            .iter()
            .filter(|degree| {
                !player.degrees.contains(&degree.id)
                    && !player.enrolled_courses.contains(&degree.id)
            })
            .collect()
    }

    /// The single mutation entry point.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        if !matches!(action, Action::StartGame { .. } | Action::AddPlayer { .. }) {
            self.ensure_running()?;
        }
        match action {
            Action::StartGame { goals } => self.start_game(goals),
            Action::AddPlayer { name, avatar } => self.add_player(name, avatar),
            Action::MoveToLocation { location } => self.move_to(location),
            Action::Work { hours } => self.work(hours),
            Action::Study { degree, hours } => self.study(&degree, hours),
            Action::BuyFood { weeks } => self.buy_groceries(weeks, false),
            Action::BuyFreshFood { weeks } => self.buy_groceries(weeks, true),
            Action::BuyFastFood => self.buy_fast_food(),
            Action::BuyClothes { tier } => self.buy_clothes(tier),
            Action::BuyItem { item } => self.buy_item(&item),
            Action::ApplyForJob { job } => self.apply_for_job(&job),
            Action::EnrollDegree { degree } => self.enroll_degree(&degree),
            Action::PayRent => self.pay_rent(),
            Action::Deposit { amount } => self.deposit(amount),
            Action::Withdraw { amount } => self.withdraw(amount),
            Action::ChangeApartment { apartment } => self.change_apartment(apartment),
            Action::BuyStock { stock, shares, price } => self.buy_stock(&stock, shares, price),
            Action::SellStock { stock, shares, price } => self.sell_stock(&stock, shares, price),
            Action::PawnItem { item } => self.pawn_item(&item),
            Action::RedeemItem { item } => self.redeem_item(&item),
            Action::CompleteQuest {
                quest,
                success,
                gold,
                damage,
                time_cost,
            } => self.complete_quest(&quest, success, gold, damage, time_cost),
            Action::RankUp => self.rank_up(),
            Action::EndTurn => self.end_turn(),
            Action::SetWeekendEvent { event } => {
                self.state.weekend_event = event;
                Ok(())
            }
        }
    }

    fn ensure_running(&self) -> Result<(), ActionError> {
        if !self.state.started {
            return Err(ActionError::GameNotStarted);
        }
        if self.state.game_over {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    fn current_mut(&mut self) -> &mut Player {
        let index = self.state.current_player;
        &mut self.state.players[index]
    }

    fn take_hours(player: &mut Player, needed: u32) -> Result<(), ActionError> {
        if player.hours_remaining < needed {
            return Err(ActionError::InsufficientHours { needed });
        }
        player.hours_remaining -= needed;
        Ok(())
    }

    fn start_game(&mut self, goals: GameGoals) -> Result<(), ActionError> {
        if self.state.started {
            return Err(ActionError::GameAlreadyStarted);
        }
        if self.state.players.is_empty() {
            return Err(ActionError::NoPlayers);
        }
        self.state.reset_for_start(goals);
        self.push_message("The race is on. First to every goal wins.".to_string());
        Ok(())
    }

    fn add_player(&mut self, name: String, avatar: String) -> Result<(), ActionError> {
        if self.state.started {
            return Err(ActionError::GameAlreadyStarted);
        }
        let id = self.state.players.len();
        let player = Player::new(id, name, avatar);
        self.push_message(format!("{} joined the game.", player.name));
        self.state.players.push(player);
        Ok(())
    }

    fn move_to(&mut self, location: LocationId) -> Result<(), ActionError> {
        let player = self.current_mut();
        if player.location == location {
            return Ok(());
        }
        Self::take_hours(player, MOVE_HOURS)?;
        player.location = location;
        Ok(())
    }

    fn work(&mut self, hours: u32) -> Result<(), ActionError> {
        if hours == 0 {
            return Err(ActionError::ZeroAmount);
        }
        let job_id = self
            .current_player()
            .job
            .clone()
            .ok_or(ActionError::NoJob)?;
        let job = self.catalog.job(&job_id).ok_or(ActionError::UnknownJob)?;
        let workplace = job.location;
        let earnings = economy::shift_earnings(job, hours, self.state.economy);
        let title = job.title.clone();
        let player = self.current_mut();
        if player.location != workplace {
            return Err(ActionError::WrongLocation { needed: workplace });
        }
        Self::take_hours(player, hours)?;
        player.money += earnings;
        player.add_career(economy::career_gain(hours));
        player.experience += hours;
        player.dependability += 1;
        player.relaxation = player.relaxation.saturating_sub((hours / 3).min(100) as u8);
        let name = player.name.clone();
        self.push_message(format!("{name} worked {hours}h as {title} (+${earnings})."));
        Ok(())
    }

    fn study(&mut self, degree: &str, hours: u32) -> Result<(), ActionError> {
        if hours == 0 {
            return Err(ActionError::ZeroAmount);
        }
        let def = self
            .catalog
            .degree(degree)
            .ok_or(ActionError::UnknownDegree)?;
        let required = def.required_lessons;
        let award = def.education_award;
        let degree_name = def.name.clone();
        let player = self.current_mut();
        if !player.enrolled_courses.contains(degree) {
            return Err(ActionError::NotEnrolled {
                degree: degree.to_string(),
            });
        }
        Self::take_hours(player, hours)?;
        let progress = player.study_progress.entry(degree.to_string()).or_insert(0);
        *progress += hours;
        if *progress >= required {
            player.study_progress.remove(degree);
            player.enrolled_courses.remove(degree);
            player.degrees.insert(degree.to_string());
            player.education += award;
            let name = player.name.clone();
            self.push_message(format!("{name} earned the {degree_name} degree!"));
        }
        Ok(())
    }

    fn buy_groceries(&mut self, weeks: u32, fresh: bool) -> Result<(), ActionError> {
        if weeks == 0 {
            return Err(ActionError::ZeroAmount);
        }
        let per_week = if fresh {
            self.catalog.food.fresh_per_week
        } else {
            self.catalog.food.grocery_per_week
        };
        let happiness = if fresh { self.catalog.food.fresh_happiness } else { 0 };
        let capacity = self.current_player().max_food_storage(&self.catalog);
        let economy_index = self.state.economy;
        let player = self.current_mut();
        if capacity == 0 {
            return Err(ActionError::NoFoodStorage);
        }
        if player.food >= capacity {
            return Err(ActionError::PantryFull);
        }
        let stored = weeks.min(capacity - player.food);
        let cost = economy::adjusted(per_week, economy_index) * stored as u64;
        if player.money < cost {
            return Err(ActionError::InsufficientCash { needed: cost });
        }
        player.money -= cost;
        player.food += stored;
        player.add_happiness(happiness);
        Ok(())
    }

    fn buy_fast_food(&mut self) -> Result<(), ActionError> {
        let cost = economy::adjusted(self.catalog.food.fast_food_meal, self.state.economy);
        let happiness = self.catalog.food.fast_food_happiness;
        let player = self.current_mut();
        if player.money < cost {
            return Err(ActionError::InsufficientCash { needed: cost });
        }
        player.money -= cost;
        player.fast_food_relief = true;
        player.add_happiness(happiness);
        Ok(())
    }

    fn buy_clothes(&mut self, tier: ClothingTier) -> Result<(), ActionError> {
        let def = self
            .catalog
            .clothing(tier)
            .ok_or(ActionError::UnknownItem)?;
        let weeks = def.weeks;
        let cost = economy::adjusted(def.price, self.state.economy);
        let player = self.current_mut();
        if player.money < cost {
            return Err(ActionError::InsufficientCash { needed: cost });
        }
        player.money -= cost;
        player.clothes.set_weeks(tier, weeks);
        player.add_happiness(CLOTHES_HAPPINESS);
        Ok(())
    }

    fn buy_item(&mut self, item: &str) -> Result<(), ActionError> {
        let def = self.catalog.item(item).ok_or(ActionError::UnknownItem)?;
        let cost = economy::adjusted(def.price, self.state.economy);
        let happiness = def.happiness;
        let item_name = def.name.clone();
        let player = self.current_mut();
        if player.items.contains(item) {
            return Err(ActionError::AlreadyOwned {
                item: item.to_string(),
            });
        }
        if player.money < cost {
            return Err(ActionError::InsufficientCash { needed: cost });
        }
        player.money -= cost;
        player.items.insert(item.to_string());
        player.add_happiness(happiness);
        let name = player.name.clone();
        self.push_message(format!("{name} bought a {item_name} (-${cost})."));
        Ok(())
    }

    fn apply_for_job(&mut self, job: &str) -> Result<(), ActionError> {
        let def = self.catalog.job(job).ok_or(ActionError::UnknownJob)?;
        let career_points = def.career_points;
        let title = def.title.clone();
        self.current_player().job_requirements(def)?;
        let player = self.current_mut();
        Self::take_hours(player, APPLY_HOURS)?;
        player.job = Some(job.to_string());
        if player.career < career_points {
            let gap = career_points - player.career;
            player.add_career(gap.div_ceil(2));
        }
        let name = player.name.clone();
        self.push_message(format!("{name} was hired as {title}."));
        Ok(())
    }

    fn enroll_degree(&mut self, degree: &str) -> Result<(), ActionError> {
        let def = self
            .catalog
            .degree(degree)
            .ok_or(ActionError::UnknownDegree)?;
        let tuition = economy::adjusted(def.tuition, self.state.economy);
        let player = self.current_mut();
        if player.degrees.contains(degree) {
            return Err(ActionError::AlreadyHeld {
                degree: degree.to_string(),
            });
        }
        if player.enrolled_courses.contains(degree) {
            return Err(ActionError::AlreadyEnrolled {
                degree: degree.to_string(),
            });
        }
        if player.enrolled_courses.len() >= MAX_ENROLLED_COURSES {
            return Err(ActionError::CourseLoadFull);
        }
        if player.money < tuition {
            return Err(ActionError::InsufficientCash { needed: tuition });
        }
        Self::take_hours(player, ENROLL_HOURS)?;
        player.money -= tuition;
        player.enrolled_courses.insert(degree.to_string());
        player.study_progress.insert(degree.to_string(), 0);
        Ok(())
    }

    fn pay_rent(&mut self) -> Result<(), ActionError> {
        let base = self
            .catalog
            .apartment(self.current_player().apartment)
            .map(|def| def.base_rent)
            .unwrap_or(0);
        let rent = economy::adjusted(base, self.state.economy);
        let player = self.current_mut();
        let name = player.name.clone();
        if player.total_funds() < rent {
            // The guarantor steps in: rent is never allowed to block play.
            let shortfall = rent - player.total_funds();
            player.rent_debt += shortfall;
            player.money = BAILOUT_CASH_FLOOR;
            player.deduct_happiness(BAILOUT_HAPPINESS_PENALTY);
            self.push_message(format!(
                "{name} couldn't cover ${rent} rent; the landlord's guarantor stepped in."
            ));
        } else {
            let from_cash = player.money.min(rent);
            player.money -= from_cash;
            player.bank_balance -= rent - from_cash;
            self.push_message(format!("{name} paid ${rent} rent."));
        }
        self.state.rent_due = false;
        Ok(())
    }

    fn deposit(&mut self, amount: u64) -> Result<(), ActionError> {
        if amount == 0 {
            return Err(ActionError::ZeroAmount);
        }
        let player = self.current_mut();
        if player.money < amount {
            return Err(ActionError::InsufficientCash { needed: amount });
        }
        Self::take_hours(player, BANK_HOURS)?;
        player.money -= amount;
        player.bank_balance += amount;
        Ok(())
    }

    fn withdraw(&mut self, amount: u64) -> Result<(), ActionError> {
        if amount == 0 {
            return Err(ActionError::ZeroAmount);
        }
        let player = self.current_mut();
        if player.bank_balance < amount {
            return Err(ActionError::InsufficientBank { needed: amount });
        }
        Self::take_hours(player, BANK_HOURS)?;
        player.bank_balance -= amount;
        player.money += amount;
        Ok(())
    }

    fn change_apartment(&mut self, apartment: Apartment) -> Result<(), ActionError> {
        let player = self.current_mut();
        player.apartment = apartment;
        player.location = apartment.home_location();
        let name = player.name.clone();
        self.push_message(format!("{name} moved into {}.", apartment.home_location().label()));
        Ok(())
    }

    fn buy_stock(&mut self, stock: &str, shares: u32, price: u64) -> Result<(), ActionError> {
        if shares == 0 {
            return Err(ActionError::ZeroAmount);
        }
        if self.catalog.stock(stock).is_none() {
            return Err(ActionError::UnknownStock);
        }
        let cost = price * shares as u64;
        let player = self.current_mut();
        if player.money < cost {
            return Err(ActionError::InsufficientCash { needed: cost });
        }
        player.money -= cost;
        *player.stocks.entry(stock.to_string()).or_insert(0) += shares;
        Ok(())
    }

    fn sell_stock(&mut self, stock: &str, shares: u32, price: u64) -> Result<(), ActionError> {
        if shares == 0 {
            return Err(ActionError::ZeroAmount);
        }
        if self.catalog.stock(stock).is_none() {
            return Err(ActionError::UnknownStock);
        }
        let player = self.current_mut();
        let held = player.stocks.get(stock).copied().unwrap_or(0);
        if held < shares {
            return Err(ActionError::InsufficientShares {
                stock: stock.to_string(),
            });
        }
        if held == shares {
            player.stocks.remove(stock);
        } else {
            player.stocks.insert(stock.to_string(), held - shares);
        }
        player.money += price * shares as u64;
        Ok(())
    }

    fn pawn_item(&mut self, item: &str) -> Result<(), ActionError> {
        let value = self
            .catalog
            .item(item)
            .ok_or(ActionError::UnknownItem)?
            .price;
        let player = self.current_mut();
        if !player.items.contains(item) {
            return Err(ActionError::NotOwned {
                item: item.to_string(),
            });
        }
        player.items.remove(item);
        player.money += economy::pawn_loan(value);
        player.pawned_items.push(PawnTicket {
            item: item.to_string(),
            redeem_price: economy::pawn_redeem_price(value),
            weeks_remaining: PAWN_WEEKS,
        });
        Ok(())
    }

    fn redeem_item(&mut self, item: &str) -> Result<(), ActionError> {
        let player = self.current_mut();
        let position = player
            .pawned_items
            .iter()
            .position(|ticket| ticket.item == item)
            .ok_or(ActionError::NotPawned {
                item: item.to_string(),
            })?;
        let price = player.pawned_items[position].redeem_price;
        if player.money < price {
            return Err(ActionError::InsufficientCash { needed: price });
        }
        player.money -= price;
        player.pawned_items.remove(position);
        player.items.insert(item.to_string());
        Ok(())
    }

    fn complete_quest(
        &mut self,
        quest: &str,
        success: bool,
        gold: u64,
        damage: u8,
        time_cost: u32,
    ) -> Result<(), ActionError> {
        if self.catalog.quest(quest).is_none() {
            return Err(ActionError::UnknownQuest);
        }
        let player = self.current_mut();
        Self::take_hours(player, time_cost)?;
        player.money += gold;
        player.deduct_happiness(damage);
        if success {
            player.completed_quests.insert(quest.to_string());
        }
        let name = player.name.clone();
        if success {
            self.push_message(format!("{name} completed a quest (+${gold})."));
        } else {
            self.push_message(format!("{name} limped back from a failed quest (+${gold})."));
        }
        Ok(())
    }

    fn rank_up(&mut self) -> Result<(), ActionError> {
        let player = self.current_mut();
        let next = player.guild_rank.next().ok_or(ActionError::AtHighestRank)?;
        let needed = next.quest_threshold();
        if player.completed_quests.len() < needed {
            return Err(ActionError::RankRequirementNotMet { needed });
        }
        player.guild_rank = next;
        let name = player.name.clone();
        self.push_message(format!("The guild promoted {name} to {next:?}."));
        Ok(())
    }

    /// The weekly tick for the player whose turn is ending.
    fn end_turn(&mut self) -> Result<(), ActionError> {
        let index = self.state.current_player;

        // 1. Win check happens before anything else can move the needle.
        if self.state.goals.all_met(&self.state.players[index]) {
            self.state.game_over = true;
            self.state.winner = Some(index);
            let name = self.state.players[index].name.clone();
            self.push_message(format!("{name} has it all. Game over!"));
            return Ok(());
        }

        // 2. Weekend narrative and its cost.
        let weekend = if self.catalog.weekend_events.is_empty() {
            None
        } else {
            let pick = self.rng.gen_range(0..self.catalog.weekend_events.len());
            Some(self.catalog.weekend_events[pick].clone())
        };
        if let Some(event) = &weekend {
            let player = &mut self.state.players[index];
            player.money = player.money.saturating_sub(event.cost);
        }

        // 3. Weekly upkeep: eat, wear, pawn countdown, robbery risk.
        let mut forfeited = Vec::new();
        let hungry;
        {
            let player = &mut self.state.players[index];
            if player.fast_food_relief {
                player.fast_food_relief = false;
                hungry = false;
            } else {
                player.food = player.food.saturating_sub(1);
                hungry = player.food == 0;
            }
            player.clothes.wear_one_week();
            for ticket in &mut player.pawned_items {
                ticket.weeks_remaining = ticket.weeks_remaining.saturating_sub(1);
                if ticket.weeks_remaining == 0 {
                    forfeited.push(ticket.item.clone());
                }
            }
            player.pawned_items.retain(|ticket| ticket.weeks_remaining > 0);
        }
        for item in forfeited {
            let name = self.state.players[index].name.clone();
            self.push_message(format!("The pawn shop sold off {name}'s {item}."));
        }
        self.state.wild_willy = None;
        let robbery_roll: f64 = self.rng.gen_range(0.0..1.0);
        {
            let player = &mut self.state.players[index];
            if player.apartment == Apartment::LowCost
                && player.money > 1
                && robbery_roll < WILD_WILLY_CHANCE
            {
                let stolen = player.money / 2;
                player.money -= stolen;
                let name = player.name.clone();
                self.state.wild_willy = Some(WildWillyEvent {
                    victim: index,
                    stolen,
                });
                self.push_message(format!("Wild Willy robbed {name} of ${stolen}!"));
            }
        }

        // 4-5. Hunger penalty, then the weekly reset.
        {
            let player = &mut self.state.players[index];
            player.hunger_penalty = if hungry { HUNGER_HOURS_PENALTY } else { 0 };
            if hungry {
                player.deduct_happiness(HUNGER_HAPPINESS_PENALTY);
            }
            player.hours_remaining = WEEKLY_HOURS - player.hunger_penalty;
            player.location = player.apartment.home_location();
            player.relaxation = player.relaxation.saturating_add(10).min(100);
        }

        // 6. Next player; a full round advances the calendar.
        self.state.current_player = (index + 1) % self.state.players.len();
        if self.state.current_player == 0 {
            self.state.week += 1;
            if (self.state.week - 1) % WEEKS_PER_MONTH == 0 {
                self.state.month += 1;
                self.state.rent_due = true;
                self.push_message("A new month begins. Rent is due.".to_string());
            }
        }

        // 7. Prices and wages drift together.
        self.state.economy = economy::drift(self.state.economy, &mut self.rng);

        // 8. Hand the narrative to the presentation layer.
        if let Some(event) = weekend {
            self.push_message(event.text.clone());
            self.state.weekend_event = Some(event.text);
        }
        Ok(())
    }

    fn push_message(&mut self, message: String) {
        if self.messages.len() >= MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }
}
