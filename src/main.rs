//! Binary entrypoint for the zodiacquest CLI.
//!
//! Commands:
//! - `play` - build the world and play on stdin/stdout
//! - `init` - create a starter `zodiacquest.toml`
//! - `status` - print the world summary and start region
//!
//! See the library crate docs for module-level details: `zodiacquest::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::Path;

use zodiacquest::config::Config;
use zodiacquest::quest::{canonical_map_seed, load_map_from_json, Dictionary, GameSession, World};

#[derive(Parser)]
#[command(name = "zodiacquest")]
#[command(about = "A turn-based text adventure across the zodiac regions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "zodiacquest.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quest on the terminal
    Play,
    /// Write a default configuration file
    Init,
    /// Show the world summary
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Play => {
            let config = load_config(&cli.config, cli.verbose)?;
            info!("Starting zodiacquest v{}", env!("CARGO_PKG_VERSION"));
            let world = build_world(&config)?;
            let mut session =
                GameSession::new(world, &config.game.start_region, config.game.starting_coins)?;

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            session.run(stdin.lock(), stdout.lock())?;
        }
        Commands::Status => {
            let config = load_config(&cli.config, cli.verbose)?;
            let world = build_world(&config)?;
            let start = world
                .graph
                .regions
                .get(&config.game.start_region)
                .ok_or_else(|| anyhow!("Start region {} is not on the map", config.game.start_region))?;
            println!("{}", world.description());
            println!(
                "Quest starts in {} with {} coins",
                start, config.game.starting_coins
            );
        }
    }

    Ok(())
}

/// Load the config and start logging. A missing file means defaults; a
/// broken one is an error.
fn load_config(path: &str, verbosity: u8) -> Result<Config> {
    let loaded = if Path::new(path).exists() {
        Some(Config::load(path)?)
    } else {
        None
    };
    init_logging(&loaded, verbosity);
    if loaded.is_none() {
        warn!("Config file {} not found; using defaults", path);
    }
    Ok(loaded.unwrap_or_default())
}

fn build_world(config: &Config) -> Result<World> {
    let seed = match &config.game.map_path {
        Some(path) => {
            info!("Loading map from {}", path);
            load_map_from_json(path).map_err(|e| anyhow!("Failed to load map {}: {}", path, e))?
        }
        None => canonical_map_seed(),
    };
    let dictionary = Dictionary::load_or_empty(&config.game.valid_things_path);
    let world = World::from_seed(&seed, dictionary)?;
    info!("{}", world.description());
    Ok(world)
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

        // Echo to the console only when stdout is a terminal so piped game
        // output carries no log lines
        let is_tty = atty::is(atty::Stream::Stdout);

        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());

            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }

            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
