//! Owned, serializable copy of both dex tables

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::DexId;
use crate::dex::pokemon::{Pokemon, POKEDEX};
use crate::dex::types::{TypeMoves, TYPE_MOVES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: DexId,
    pub name: String,
    /// `null` in JSON. TOML has no null, so there the key is left out.
    #[serde(default)]
    pub category: Option<String>,
}

impl From<&Pokemon> for PokemonRecord {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.to_string(),
            category: pokemon.category.map(str::to_string),
        }
    }
}

impl PartialEq<Pokemon> for PokemonRecord {
    fn eq(&self, other: &Pokemon) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.category.as_deref() == other.category
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub id: String,
    pub moves: Vec<String>,
}

impl From<&TypeMoves> for TypeRecord {
    fn from(entry: &TypeMoves) -> Self {
        Self {
            id: entry.id.to_string(),
            moves: entry.moves.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl PartialEq<TypeMoves> for TypeRecord {
    fn eq(&self, other: &TypeMoves) -> bool {
        self.id == other.id && self.moves.iter().eq(other.moves.iter())
    }
}

/// Both tables, in definition order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexSnapshot {
    pub pokemon: Vec<PokemonRecord>,
    pub types: Vec<TypeRecord>,
}

impl DexSnapshot {
    /// Copy the embedded tables
    pub fn capture() -> Self {
        Self {
            pokemon: POKEDEX.iter().map(PokemonRecord::from).collect(),
            types: TYPE_MOVES.iter().map(TypeRecord::from).collect(),
        }
    }

    /// True if this snapshot holds exactly the embedded tables
    pub fn matches_static(&self) -> bool {
        self.pokemon.len() == POKEDEX.len()
            && self.types.len() == TYPE_MOVES.len()
            && self.pokemon.iter().zip(POKEDEX).all(|(a, b)| a == b)
            && self.types.iter().zip(TYPE_MOVES).all(|(a, b)| a == b)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(input)?;
        tracing::debug!(
            pokemon = snapshot.pokemon.len(),
            types = snapshot.types.len(),
            "parsed dex snapshot from JSON"
        );
        Ok(snapshot)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_toml(input: &str) -> Result<Self> {
        let snapshot: Self = toml::from_str(input)?;
        tracing::debug!(
            pokemon = snapshot.pokemon.len(),
            types = snapshot.types.len(),
            "parsed dex snapshot from TOML"
        );
        Ok(snapshot)
    }
}
