//! Pokedex - Entry Point
//!
//! Command-line browser over the embedded dex tables.

use clap::{Parser, Subcommand};
use pokedex::core::config::{config, set_config, DexConfig};
use pokedex::core::error::Result;
use pokedex::core::types::OutputFormat;
use pokedex::dex::{all_pokemon, all_types, find_pokemon, get_type, pokemon_of_type};
use pokedex::render::{render_pokemon_detail, render_pokemon_list, render_snapshot, render_types};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Browse the original 151 Pokémon
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse the original 151 Pokémon and their type move lists")]
struct Args {
    /// Output format: text, json or toml (defaults to the config value)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every Pokémon in dex order
    List,
    /// Show one Pokémon, by dex number or name
    Show { pokemon: String },
    /// List the Pokémon of one type
    Type { category: String },
    /// Show type move lists, all of them or one
    Moves { category: Option<String> },
    /// Dump both tables
    Export,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => Some((path, DexConfig::load(path)?)),
        None => None,
    };

    let directive = loaded
        .as_ref()
        .map(|(_, cfg)| cfg.log_directive(args.verbose))
        .unwrap_or_else(|| DexConfig::default().log_directive(args.verbose));
    let filter = if args.verbose {
        EnvFilter::new(&directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some((path, cfg)) = loaded {
        tracing::debug!(path = %path.display(), config = ?cfg, "loaded config");
        if let Err(rejected) = set_config(cfg) {
            tracing::warn!(?rejected, "global config was already set, keeping it");
        }
    }
    let config = config();

    let format = args.format.unwrap_or(config.default_format);
    tracing::debug!(?args.command, %format, "running command");

    let output = match &args.command {
        Command::List => render_pokemon_list(all_pokemon(), format)?,
        Command::Show { pokemon } => match find_pokemon(pokemon) {
            Some(found) => render_pokemon_detail(found, format)?,
            None => return Ok(miss(&format!("no Pokémon matches '{}'", pokemon))),
        },
        Command::Type { category } => {
            let matches = pokemon_of_type(category);
            if matches.is_empty() {
                return Ok(miss(&format!("no Pokémon has type '{}'", category)));
            }
            render_pokemon_list(matches.iter().copied(), format)?
        }
        Command::Moves { category: None } => render_types(all_types(), format)?,
        Command::Moves {
            category: Some(category),
        } => match get_type(category) {
            Some(entry) => render_types(std::slice::from_ref(entry), format)?,
            None => return Ok(miss(&format!("type '{}' has no move list", category))),
        },
        Command::Export => render_snapshot(format)?,
    };

    print!("{}", output);
    Ok(ExitCode::SUCCESS)
}

fn miss(message: &str) -> ExitCode {
    tracing::debug!("{}", message);
    eprintln!("{}", message);
    ExitCode::FAILURE
}
