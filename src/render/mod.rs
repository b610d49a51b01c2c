//! Output rendering for dex tables
//!
//! Turns table rows into text, JSON or TOML. Rendering only reads the
//! static tables.

use serde::Serialize;
use std::fmt::Write;

use crate::core::error::Result;
use crate::core::types::{DexId, OutputFormat};
use crate::dex::{moves_for, DexSnapshot, Pokemon, TypeMoves, POKEDEX, TYPE_MOVES};

/// Placeholder shown in text output for a Pokémon with no type
pub const UNTYPED_LABEL: &str = "-";

/// TOML has no top-level arrays, so lists are wrapped in a named table
#[derive(Serialize)]
struct PokemonList<'a> {
    pokemon: Vec<&'a Pokemon>,
}

#[derive(Serialize)]
struct TypeList<'a> {
    types: &'a [TypeMoves],
}

/// A Pokémon joined with the move list of its type
#[derive(Serialize)]
struct PokemonDetail<'a> {
    id: DexId,
    name: &'a str,
    category: Option<&'a str>,
    moves: Option<&'a [&'a str]>,
}

impl<'a> From<&'a Pokemon> for PokemonDetail<'a> {
    fn from(pokemon: &'a Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name,
            category: pokemon.category,
            moves: moves_for(pokemon).map(|t| t.moves),
        }
    }
}

/// Structured formats go through serde; `None` means the caller renders text
fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Option<Result<String>> {
    match format {
        OutputFormat::Json => Some(serde_json::to_string_pretty(value).map_err(Into::into)),
        OutputFormat::Toml => Some(toml::to_string(value).map_err(Into::into)),
        OutputFormat::Text => None,
    }
}

fn pokemon_line(out: &mut String, pokemon: &Pokemon) {
    let _ = writeln!(
        out,
        "#{:03} {:<12} {}",
        pokemon.id,
        pokemon.name,
        pokemon.category.unwrap_or(UNTYPED_LABEL)
    );
}

fn type_line(out: &mut String, entry: &TypeMoves) {
    let _ = writeln!(out, "{}: {}", entry.id, entry.moves.join(", "));
}

/// One line per Pokémon, in the order given
pub fn render_pokemon_list<'a, I>(pokemon: I, format: OutputFormat) -> Result<String>
where
    I: IntoIterator<Item = &'a Pokemon>,
{
    let list = PokemonList {
        pokemon: pokemon.into_iter().collect(),
    };
    if let Some(out) = serialize(&list, format) {
        return out;
    }

    let mut out = String::new();
    for entry in list.pokemon {
        pokemon_line(&mut out, entry);
    }
    Ok(out)
}

/// A single Pokémon with its type's moves, if that type has any
pub fn render_pokemon_detail(pokemon: &Pokemon, format: OutputFormat) -> Result<String> {
    let detail = PokemonDetail::from(pokemon);
    if let Some(out) = serialize(&detail, format) {
        return out;
    }

    let mut out = String::new();
    let _ = writeln!(out, "#{:03} {}", detail.id, detail.name);
    let _ = writeln!(out, "type:  {}", detail.category.unwrap_or(UNTYPED_LABEL));
    match detail.moves {
        Some(moves) => {
            let _ = writeln!(out, "moves: {}", moves.join(", "));
        }
        None => {
            let _ = writeln!(out, "moves: {}", UNTYPED_LABEL);
        }
    }
    Ok(out)
}

pub fn render_types(types: &[TypeMoves], format: OutputFormat) -> Result<String> {
    if let Some(out) = serialize(&TypeList { types }, format) {
        return out;
    }

    let mut out = String::new();
    for entry in types {
        type_line(&mut out, entry);
    }
    Ok(out)
}

/// Both tables in full
pub fn render_snapshot(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => DexSnapshot::capture().to_json(),
        OutputFormat::Toml => DexSnapshot::capture().to_toml(),
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in POKEDEX {
                pokemon_line(&mut out, entry);
            }
            out.push('\n');
            for entry in TYPE_MOVES {
                type_line(&mut out, entry);
            }
            Ok(out)
        }
    }
}
