//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::commands;
use moulberry_utils::config::UtilsConfig;
use moulberry_utils::geometry::Vec3f;
use moulberry_utils::output::OutputMode;

/// mutils - weighted random tables, vector helpers and text utilities
#[derive(Parser, Debug)]
#[command(
    name = "mutils",
    version,
    about = "Weighted random tables, vector helpers and text utilities",
    long_about = "Draw from weighted tables, shuffle entries in weighted-random order,\n\
                  and run small 3D vector and text helpers.\n\n\
                  Tables are read from the config file or given inline with --entry."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for random operations (overrides the config seed)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where weighted entries come from
#[derive(Args, Debug, Clone)]
pub struct EntrySource {
    /// Named table from the config file
    #[arg(short, long, conflicts_with = "entries")]
    pub table: Option<String>,

    /// Inline entry as NAME=WEIGHT (repeatable)
    #[arg(short, long = "entry", value_name = "NAME=WEIGHT", value_parser = parse_entry)]
    pub entries: Vec<(String, f32)>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw random entries, weighted
    Sample {
        #[command(flatten)]
        source: EntrySource,

        /// Number of draws
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Draw without replacement (stops early when the table runs out)
        #[arg(short, long)]
        unique: bool,
    },

    /// Print every entry once, in weighted-random order
    Shuffle {
        #[command(flatten)]
        source: EntrySource,
    },

    /// List configured tables
    Tables,

    /// Capitalize the first letter of each word
    Capitalize {
        /// Text to capitalize (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Unit direction for a yaw and pitch
    Look {
        /// Yaw angle
        #[arg(long, allow_hyphen_values = true)]
        yaw: f32,

        /// Pitch angle
        #[arg(long, allow_hyphen_values = true)]
        pitch: f32,

        /// Angles are in radians instead of degrees
        #[arg(long)]
        radians: bool,
    },

    /// Where a ray enters an axis-aligned box
    Raycast {
        /// Minimum box corner as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        min: Vec3f,

        /// Maximum box corner as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        max: Vec3f,

        /// Ray origin as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        origin: Vec3f,

        /// Ray direction as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        dir: Vec3f,
    },

    /// Closest point on one line to another
    Closest {
        /// Point on the first line as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        along_point: Vec3f,

        /// Direction of the first line as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        along_dir: Vec3f,

        /// Point on the second line as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        to_point: Vec3f,

        /// Direction of the second line as x,y,z
        #[arg(long, allow_hyphen_values = true)]
        to_dir: Vec3f,
    },

    /// Show version
    Version,
}

/// Parse `NAME=WEIGHT`
pub fn parse_entry(s: &str) -> Result<(String, f32), String> {
    let (name, weight) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT but got '{s}'"))?;
    if name.is_empty() {
        return Err(format!("empty name in '{s}'"));
    }
    let weight = weight
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid weight in '{s}': {e}"))?;
    Ok((name.to_string(), weight))
}

/// Shared state handed to commands
#[derive(Debug)]
pub struct Context {
    /// Loaded configuration
    pub config: UtilsConfig,
    /// Where the configuration came from
    pub config_path: PathBuf,
    /// Random source (seeded if a seed was given)
    pub rng: StdRng,
    /// How to render results
    pub mode: OutputMode,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.clone().unwrap_or_else(UtilsConfig::config_path);
    let config = UtilsConfig::load_from(&config_path)?;

    let rng = match cli.seed.or(config.seed) {
        Some(seed) => {
            debug!("seeding rng with {seed}");
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_entropy(),
    };

    let mut ctx = Context {
        config,
        config_path,
        rng,
        mode,
    };

    match cli.command {
        Some(Command::Sample {
            source,
            count,
            unique,
        }) => commands::sample(&mut ctx, &source, count, unique),
        Some(Command::Shuffle { source }) => commands::shuffle(&mut ctx, &source),
        Some(Command::Tables) => commands::tables(&ctx),
        Some(Command::Capitalize { text }) => {
            commands::capitalize(&text.join(" "), mode);
            Ok(())
        },
        Some(Command::Look {
            yaw,
            pitch,
            radians,
        }) => {
            commands::look(yaw, pitch, radians, mode);
            Ok(())
        },
        Some(Command::Raycast {
            min,
            max,
            origin,
            dir,
        }) => {
            commands::raycast(min, max, origin, dir, mode);
            Ok(())
        },
        Some(Command::Closest {
            along_point,
            along_dir,
            to_point,
            to_dir,
        }) => {
            commands::closest(along_point, along_dir, to_point, to_dir, mode);
            Ok(())
        },
        Some(Command::Version) => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("mutils v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("mutils v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'mutils --help' for usage");
            }
            Ok(())
        },
    }
}
