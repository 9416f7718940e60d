use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::Rng;

use rusty_maze::ascii_utils::{visualize_maze_ascii, visualize_path_ascii};
use rusty_maze::json_utils::{agent_to_json, maze_to_json, path_to_json};
use rusty_maze::{
    codec, generate_seeded, solve, Hand, Result, Strategy, Traversal, DEFAULT_HEIGHT,
    DEFAULT_MAX_STEPS_FACTOR, DEFAULT_WIDTH,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HandArg {
    Left,
    Right,
}

impl From<HandArg> for Hand {
    fn from(arg: HandArg) -> Self {
        match arg {
            HandArg::Left => Hand::Left,
            HandArg::Right => Hand::Right,
        }
    }
}

/// Génère un labyrinthe parfait et fait courir les trois stratégies
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Largeur en cellules
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Hauteur en cellules
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Graine (tirée au hasard si absente)
    #[arg(long)]
    seed: Option<u64>,

    /// Plafond de pas, en multiple de width * height
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS_FACTOR)]
    max_steps_factor: usize,

    /// Main du suiveur de mur
    #[arg(long, value_enum, default_value_t = HandArg::Right)]
    hand: HandArg,

    /// Affiche aussi les vues JSON
    #[arg(long)]
    json: bool,

    /// Sauvegarde le labyrinthe au format binaire
    #[arg(long)]
    save: Option<PathBuf>,

    /// Recharge un labyrinthe sauvegardé au lieu d'en générer un
    #[arg(long, conflicts_with = "seed")]
    load: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());

    let maze = match &args.load {
        Some(path) => {
            let maze = codec::decode(&fs::read(path)?)?;
            log::info!(
                "Loaded {}x{} maze from {}",
                maze.width(),
                maze.height(),
                path.display()
            );
            maze
        }
        None => {
            log::info!("Generating {}x{} maze with seed {}", args.width, args.height, seed);
            generate_seeded(args.width, args.height, seed)?
        }
    };
    println!("{}", maze);

    let solution = solve(&maze)?;
    if solution.found {
        log::info!(
            "Shortest path: {} steps ({} nodes expanded)",
            solution.length(),
            solution.nodes_expanded
        );
        println!("{}", visualize_path_ascii(&maze, &solution.path));
    } else {
        log::warn!("No path between entrance and exit");
    }

    let max_steps = args.max_steps_factor * (maze.width() as usize) * (maze.height() as usize);

    let mut runs = vec![
        Traversal::from_entrance(&maze, "green", Strategy::wall_follower(args.hand.into())),
        Traversal::from_entrance(&maze, "red", Strategy::Wanderer),
        Traversal::from_entrance(&maze, "blue", Strategy::path_walker(solution.path.clone())),
    ];

    for run in runs.iter_mut() {
        match run.run(max_steps) {
            Ok(report) => log::info!(
                "{:<6} {:<28} steps={:<5} reached_exit={}",
                run.agent().crest(),
                run.strategy().name(),
                report.steps,
                report.reached_exit
            ),
            Err(e) => log::error!("{} ({}) aborted: {}", run.agent().crest(), run.strategy().name(), e),
        }
    }

    let agents: Vec<_> = runs.iter().map(|run| run.agent()).collect();
    println!("{}", visualize_maze_ascii(&maze, &agents));

    if args.json {
        let view = serde_json::json!({
            "seed": args.load.is_none().then_some(seed),
            "maze": maze_to_json(&maze),
            "solution": path_to_json(&solution.path),
            "agents": agents.iter().map(|a| agent_to_json(a)).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    if let Some(path) = args.save {
        fs::write(&path, codec::encode(&maze)?)?;
        log::info!("Maze saved to {}", path.display());
    }

    Ok(())
}
