use colored::Colorize;

use snl_engine::{GameResult, Outcome, Position, TurnRecord};

pub fn run(
    mode: &str,
    seed: Option<u64>,
    max_turns: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let config = super::build_config(mode, seed, max_turns)?;
    log::info!("starting {} game", config.mode);
    let result = snl_engine::play(config).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("failed to serialize result: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    print_log(&result);
    print_outcome(&result);
    Ok(())
}

fn print_log(result: &GameResult) {
    for id in result.mode.players() {
        println!("Total Dice Roll: 0");
        println!("Player: {id}");
        println!("Position: {}", Position::START);
        println!();
    }
    for record in &result.log {
        println!("Total Dice Roll: {}", record.turn);
        println!("Player: {}", record.player);
        println!("Position: {}", record.after);
        println!("{}", describe(record).dimmed());
        println!();
    }
}

fn describe(record: &TurnRecord) -> String {
    format!(
        "  rolled {}, {}: {} -> {}",
        record.roll, record.option, record.before, record.after
    )
}

fn print_outcome(result: &GameResult) {
    match result.outcome {
        Outcome::Won { winner } => println!(
            "{} {winner} after {} rolls",
            "Winner:".green().bold(),
            result.total_rolls
        ),
        Outcome::TurnLimitReached { limit } => println!(
            "{} nobody reached 100 within {limit} turns",
            "No winner:".yellow().bold()
        ),
    }
    if let Some(seed) = result.seed {
        println!("{}", format!("seed: {seed}").dimmed());
    }
}
