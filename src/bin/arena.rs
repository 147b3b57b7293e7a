//! Tournament runner: seats a table of agents and tallies game wins.

use clap::Parser;

use loveletter::agents::{Agent, RandomAgent, ReflexAgent};
use loveletter::arena::Arena;
use loveletter::mcts::{MCTSAgent, MCTSConfig};

#[derive(Parser)]
#[command(name = "arena")]
#[command(version, about = "Run Love Letter agent tournaments", long_about = None)]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Base RNG seed; every game and seat derives its own stream from it.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Agents by seat (2-4 entries): random, reflex, or mcts.
    #[arg(long, value_delimiter = ',', default_value = "mcts,random,random,random")]
    agents: Vec<String>,

    /// MCTS difficulty level; level 3 is 300ms per decision.
    #[arg(long, default_value_t = 3)]
    level: u32,
}

fn build_agent(kind: &str, seed: u64, level: u32) -> Result<Box<dyn Agent>, String> {
    match kind {
        "random" => Ok(Box::new(RandomAgent::new(seed))),
        "reflex" => Ok(Box::new(ReflexAgent::new(seed))),
        "mcts" => Ok(Box::new(MCTSAgent::new(
            MCTSConfig::default().with_seed(seed).with_level(level),
        ))),
        other => Err(format!(
            "unknown agent '{other}' (expected random, reflex, or mcts)"
        )),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if !(2..=4).contains(&cli.agents.len()) {
        return Err("a table seats 2 to 4 agents".into());
    }

    let mut wins = vec![0u32; cli.agents.len()];
    let mut rounds = 0u64;

    for game in 0..cli.games {
        let game_seed = cli.seed.wrapping_add(u64::from(game));
        let agents = cli
            .agents
            .iter()
            .enumerate()
            .map(|(seat, kind)| {
                build_agent(kind, game_seed.wrapping_add(1 + seat as u64), cli.level)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut arena = Arena::new(agents, game_seed);
        let outcome = arena.play_game()?;
        wins[outcome.winner.index()] += 1;
        rounds += u64::from(outcome.rounds);

        log::info!(
            "game {}/{}: {} ({}) wins after {} rounds",
            game + 1,
            cli.games,
            outcome.winner,
            arena.agent_name(outcome.winner),
            outcome.rounds
        );
    }

    println!("{} games, {} rounds", cli.games, rounds);
    for (seat, kind) in cli.agents.iter().enumerate() {
        println!(
            "  seat {seat} ({kind:>6}): {:>4} wins ({:.1}%)",
            wins[seat],
            100.0 * f64::from(wins[seat]) / f64::from(cli.games.max(1))
        );
    }

    Ok(())
}
