use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use snl_engine::{PlayerId, play};

/// Running roll-count totals for one table row.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct RollStats {
    games: u64,
    min: Option<u64>,
    max: Option<u64>,
    sum: u64,
}

impl RollStats {
    fn record(&mut self, rolls: u64) {
        self.games += 1;
        self.min = Some(self.min.map_or(rolls, |m| m.min(rolls)));
        self.max = Some(self.max.map_or(rolls, |m| m.max(rolls)));
        self.sum = self.sum.saturating_add(rolls);
    }

    fn mean(&self) -> Option<f64> {
        (self.games > 0).then(|| self.sum as f64 / self.games as f64)
    }

    fn row(&self, label: &str) -> Vec<String> {
        let dash = || "--".to_string();
        vec![
            label.to_string(),
            self.games.to_string(),
            self.min.map_or_else(dash, |m| m.to_string()),
            self.mean().map_or_else(dash, |m| format!("{m:.1}")),
            self.max.map_or_else(dash, |m| m.to_string()),
        ]
    }
}

/// Per-outcome totals across a batch of games.
#[derive(Debug)]
struct BatchStats {
    wins: Vec<(PlayerId, RollStats)>,
    stalled: RollStats,
    all: RollStats,
}

impl BatchStats {
    fn new(players: &[PlayerId]) -> Self {
        Self {
            wins: players.iter().map(|&id| (id, RollStats::default())).collect(),
            stalled: RollStats::default(),
            all: RollStats::default(),
        }
    }

    fn record(&mut self, winner: Option<PlayerId>, rolls: u64) {
        self.all.record(rolls);
        match winner.and_then(|id| self.wins.iter_mut().find(|(seat, _)| *seat == id)) {
            Some((_, stats)) => stats.record(rolls),
            None => self.stalled.record(rolls),
        }
    }
}

pub fn run(mode: &str, games: u64, seed: u64, max_turns: u64) -> Result<(), String> {
    if games == 0 {
        return Err("--games must be at least 1".into());
    }
    let base = super::build_config(mode, Some(seed), Some(max_turns))?;

    // Only the winner and roll count of each game are kept.
    let mut stats = BatchStats::new(base.mode.players());
    for offset in 0..games {
        let config = base.clone().with_seed(seed.wrapping_add(offset));
        let result = play(config).map_err(|e| format!("game {} failed: {e}", offset + 1))?;
        stats.record(result.winner(), result.total_rolls);
    }

    println!(
        "  {} {} {}",
        "Simulation".bold(),
        base.mode,
        format!("({games} games, seeds {seed}.., cap {max_turns} turns)").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Games", "Min rolls", "Mean rolls", "Max rolls"]);

    for (id, won) in &stats.wins {
        table.add_row(won.row(&format!("{id} wins")));
    }
    table.add_row(stats.stalled.row("Turn limit reached"));
    table.add_row(stats.all.row("All games"));

    println!("{table}");

    if stats.stalled.games > 0 {
        println!();
        println!(
            "  {} {} game(s) did not converge within {max_turns} turns",
            "WARN".yellow().bold(),
            stats.stalled.games
        );
    }
    log::info!("simulated {games} {} games from seed {seed}", base.mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_stats_track_min_max_mean() {
        let mut stats = RollStats::default();
        for rolls in [40, 10, 25] {
            stats.record(rolls);
        }
        assert_eq!(stats.games, 3);
        assert_eq!(stats.min, Some(10));
        assert_eq!(stats.max, Some(40));
        assert_eq!(stats.mean(), Some(25.0));
        assert_eq!(stats.row("x"), vec!["x", "3", "10", "25.0", "40"]);
    }

    #[test]
    fn empty_row_shows_dashes() {
        let stats = RollStats::default();
        assert_eq!(stats.mean(), None);
        assert_eq!(stats.row("none"), vec!["none", "0", "--", "--", "--"]);
    }

    #[test]
    fn batch_routes_games_by_outcome() {
        let mut batch = BatchStats::new(&[PlayerId::ONE, PlayerId::TWO]);
        batch.record(Some(PlayerId::TWO), 30);
        batch.record(Some(PlayerId::ONE), 12);
        batch.record(None, 100);
        batch.record(Some(PlayerId::TWO), 50);

        assert_eq!(batch.wins[0].1.games, 1);
        assert_eq!(batch.wins[1].1.games, 2);
        assert_eq!(batch.wins[1].1.sum, 80);
        assert_eq!(batch.stalled.games, 1);
        assert_eq!(batch.all.games, 4);
        assert_eq!(batch.all.max, Some(100));
    }
}
