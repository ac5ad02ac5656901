use anyhow::Result;
use rat_race::ai::persona::Persona;
use rat_race::ai::{self, PlanView, GRIMWALD, JONES};
use rat_race::sim::movement;
use rat_race::sim::{Action, Catalog, Game, GameGoals};
use rand::rngs::ThreadRng;
use std::time::Duration;
use tokio::time::sleep;

/// Backstop so a surprising catalog can never wedge a turn.
const MAX_STEPS_PER_TURN: usize = 40;
/// Demo games are called after this many weeks without a winner.
const MAX_WEEKS: u32 = 200;

#[tokio::main]
async fn main() -> Result<()> {
    let fast = std::env::args().any(|arg| arg == "--fast");
    let catalog = Catalog::load("catalog.ron")?;
    let mut game = Game::fresh(catalog);

    game.dispatch(Action::AddPlayer {
        name: "Jones".to_string(),
        avatar: "token-blue".to_string(),
    })?;
    game.dispatch(Action::AddPlayer {
        name: "Grimwald".to_string(),
        avatar: "token-green".to_string(),
    })?;
    game.dispatch(Action::StartGame {
        goals: GameGoals::default(),
    })?;
    for line in game.drain_messages() {
        println!("{line}");
    }

    let personas = [&JONES, &GRIMWALD];
    let mut last_week = 0;
    while !game.state.game_over && game.state.week <= MAX_WEEKS {
        if game.state.week != last_week {
            last_week = game.state.week;
            print_standings(&game);
        }
        let persona = personas[game.state.current_player % personas.len()];
        play_turn(&mut game, persona, fast).await;
    }

    match game.state.winner {
        Some(index) => {
            let winner = &game.state.players[index];
            println!("\n{} wins in week {}!", winner.name, game.state.week);
        }
        None => println!("\nNo winner after {MAX_WEEKS} weeks. Calling it a draw."),
    }
    Ok(())
}

/// One player's whole turn: replan, step through with presentation pacing,
/// stop once an end-turn lands.
async fn play_turn(game: &mut Game<ThreadRng>, persona: &Persona, fast: bool) {
    let mut steps_taken = 0;
    loop {
        let steps = {
            let view = PlanView {
                player: game.current_player(),
                goals: &game.state.goals,
                rent_due: game.state.rent_due,
                economy: game.state.economy,
            };
            ai::plan(&view, persona, game.catalog())
        };
        for step in steps {
            if !fast {
                sleep(Duration::from_millis(step.delay_ms)).await;
            }
            // Movement plays out visually before its state effect lands.
            if let Action::MoveToLocation { location } = &step.action {
                let transition = movement::transition(game.current_player().location, *location);
                if !fast && transition.total_ms > 0 {
                    sleep(Duration::from_millis(transition.total_ms)).await;
                }
            }
            println!("  {}", step.message);
            let ended = matches!(step.action, Action::EndTurn);
            if let Err(err) = game.dispatch(step.action) {
                println!("    ({err})");
            }
            for line in game.drain_messages() {
                println!("    {line}");
            }
            steps_taken += 1;
            if ended {
                return;
            }
            if steps_taken >= MAX_STEPS_PER_TURN {
                println!("    (the week got away from {})", persona.name);
                if let Err(err) = game.dispatch(Action::EndTurn) {
                    println!("    ({err})");
                }
                return;
            }
        }
    }
}

fn print_standings(game: &Game<ThreadRng>) {
    println!(
        "\n=== Week {}, month {} | economy x{:.2}{} ===",
        game.state.week,
        game.state.month,
        game.state.economy,
        if game.state.rent_due { " | rent due" } else { "" }
    );
    for player in &game.state.players {
        let goals = &game.state.goals;
        println!(
            "  {:<9} ${:<5} happy {:>3}/{} edu {:>2}/{} career {:>3}/{}",
            player.name,
            player.total_funds(),
            player.happiness,
            goals.happiness,
            player.education,
            goals.education,
            player.career,
            goals.career,
        );
    }
}
