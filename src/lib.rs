//! Pokedex - the original 151 Pokémon and their type move lists

pub mod core;
pub mod dex;
pub mod render;
