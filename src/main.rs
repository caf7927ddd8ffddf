use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use textgame::engine::{Output, render_move, render_room};
use textgame::{WorldState, demo_world, load_world_from_file, validate_world};

/// Walk a player through a world, printing each room on the way.
#[derive(Parser)]
#[command(name = "textgame", version)]
struct Cli {
    /// TOML world definition. Uses the built-in demo world when omitted.
    world: Option<PathBuf>,

    /// Player name (overrides the world file)
    #[arg(short, long)]
    player: Option<String>,

    /// Starting room id (overrides the world file)
    #[arg(short, long)]
    start: Option<String>,

    /// Direction to attempt; repeat for a sequence of moves
    #[arg(short = 'm', long = "move", value_name = "DIR")]
    moves: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (mut world, name, start) = match &cli.world {
        Some(path) => {
            let setup = load_world_from_file(path)
                .with_context(|| format!("failed to load world file '{}'", path.display()))?;
            println!("Using world file: {}", path.display());
            (setup.world, setup.name, setup.start)
        }
        None => (demo_world(), "the demo manor".to_string(), None),
    };

    let player = cli
        .player
        .or_else(|| start.as_ref().map(|s| s.player.clone()))
        .unwrap_or_else(|| "Hero".to_string());
    let room = cli
        .start
        .or_else(|| start.map(|s| s.room))
        .or_else(|| cli.world.is_none().then(|| "room1".to_string()))
        .context("no starting room: pass --start or set world.start_room")?;

    world.start_game(player, room);
    warn_about_references(&world);

    if !name.trim().is_empty() {
        println!("Welcome to {name}!");
    }

    let mut out = Output::new();
    match world.current_room() {
        Some(room) => render_room(&mut out, room),
        None => out.event("You are nowhere at all."),
    }
    print!("{out}");

    let moves = if cli.moves.is_empty() && cli.world.is_none() {
        vec!["north".to_string(), "east".to_string(), "west".to_string()]
    } else {
        cli.moves
    };

    for direction in &moves {
        println!("\n> go {direction}");
        let moved = world.move_player(direction);
        let mut out = Output::new();
        render_move(&mut out, &world, direction, moved);
        print!("{out}");
    }

    Ok(())
}

fn warn_about_references(world: &WorldState) {
    for err in validate_world(world) {
        tracing::warn!("{err}");
    }
}
