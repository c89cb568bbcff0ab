//! Dungeon level generator
//!
//! Generates one level and prints it as an ASCII map or as JSON.

mod render;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use dg_core::dungeon::LevelGenerator;
use dg_core::{ConfigError, GeneratorConfig};

/// Procedural dungeon level generator
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate a room-and-corridor level", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Grid width in cells
    #[arg(short = 'W', long = "width")]
    width: Option<i32>,

    /// Grid height in cells
    #[arg(short = 'H', long = "height")]
    height: Option<i32>,

    /// Number of rooms to try to place
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<u32>,

    /// Print the whole generated level as JSON
    #[arg(long = "json")]
    json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    fn resolve_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let config = args.resolve_config()?;
    let level = LevelGenerator::new(config).generate()?;
    if args.json {
        Ok(serde_json::to_string_pretty(&level)?)
    } else {
        Ok(render::render_ascii(&level))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "generation failed");
            eprintln!("dungen: {err}");
            ExitCode::FAILURE
        }
    }
}
