use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tank_arena::game::tuning::DEFAULT_ROUNDS_TO_WIN;
use tank_arena::{
    ArenaMap, ControlSet, GameEngine, GameEvent, MatchConfig, MatchSetupError, PlayerId,
};

/// Headless scripted skirmish for exercising the simulation end to end.
#[derive(Parser)]
struct Args {
    /// Map id (1-5); unknown ids fall back to the first map.
    #[arg(long, default_value_t = 1)]
    map: u8,
    /// Round wins needed to take the match.
    #[arg(long, default_value_t = DEFAULT_ROUNDS_TO_WIN)]
    rounds: u8,
    /// Simulation seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Seconds of simulated time per tick.
    #[arg(long, default_value_t = 0.05)]
    dt: f32,
    /// Hard stop if the match does not resolve by itself.
    #[arg(long, default_value_t = 50_000)]
    max_ticks: u64,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Both bots push forward and fire, weaving in alternating directions so
/// they sweep the arena instead of grinding along one wall.
fn scripted_inputs(engine: &GameEngine, step: u64) -> ControlSet {
    let mut held = ControlSet::new();
    let weave = (step / 30) % 4;
    for player in PlayerId::BOTH {
        let controls = engine.controls(player);
        held.insert(controls.forward.clone());
        held.insert(controls.fire.clone());
        let turn = match (player, weave) {
            (PlayerId::One, 0) | (PlayerId::Two, 2) => Some(controls.left.clone()),
            (PlayerId::One, 2) | (PlayerId::Two, 0) => Some(controls.right.clone()),
            _ => None,
        };
        if let Some(code) = turn {
            held.insert(code);
        }
    }
    held
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::ScoreChanged { scores } => debug!("score {}:{}", scores[0], scores[1]),
        GameEvent::TankDestroyed { victim, by } => info!("{:?} destroyed by {:?}", victim, by),
        GameEvent::ShieldAbsorbed { player } => info!("{:?} shield absorbed a hit", player),
        GameEvent::PowerUpCollected { player, kind } => info!("{:?} picked up {:?}", player, kind),
        GameEvent::WallDamaged { wall, health_left } => {
            debug!("wall {} down to {}", wall, health_left);
        }
        GameEvent::RoundStarted { round } => info!("round {} started", round),
        GameEvent::RoundWon { player, wins } => info!("round to {:?} ({} total)", player, wins),
        GameEvent::MatchOver { winner } => info!("match over, {:?} wins", winner),
    }
}

fn main() -> Result<(), MatchSetupError> {
    init_tracing();
    let args = Args::parse();

    let map = ArenaMap::from_id(args.map);
    let mut engine = GameEngine::new(MatchConfig {
        map,
        rounds_to_win: args.rounds,
        seed: args.seed,
    })?;
    info!("skirmish on {} (seed {})", map.name(), args.seed);

    for step in 0..args.max_ticks {
        let held = scripted_inputs(&engine, step);
        for event in engine.tick(args.dt, &held, None) {
            log_event(&event);
        }
        if engine.state().game_over() {
            break;
        }
    }

    let state = engine.state();
    match state.winner() {
        Some(winner) => info!(
            "match over after {:.1}s: {:?} wins {} rounds to {}",
            engine.clock(),
            winner,
            state.round_wins[winner.index()],
            state.round_wins[winner.opponent().index()],
        ),
        None => info!(
            "stopped after {:.1}s without a winner, rounds {}:{}",
            engine.clock(),
            state.round_wins[0],
            state.round_wins[1],
        ),
    }
    Ok(())
}
