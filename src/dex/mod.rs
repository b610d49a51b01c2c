//! Embedded Kanto dex data
//!
//! Two static tables: the 151-entry Pokémon table and the type move table.
//! A Pokémon's type is a plain string key into the move table. Many types
//! have no move list, and some Pokémon have no type at all; both are
//! ordinary lookup misses.

pub mod pokemon;
pub mod snapshot;
pub mod types;

pub use pokemon::{
    all_pokemon, find_pokemon, find_pokemon_by_name, get_pokemon, pokemon_of_type,
    type_vocabulary, untyped_pokemon, Pokemon, POKEDEX, POKEDEX_SIZE,
};
pub use snapshot::{DexSnapshot, PokemonRecord, TypeRecord};
pub use types::{all_types, get_type, moves_for, TypeMoves, TYPE_MOVES};
