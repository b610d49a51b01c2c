//! Type move lists
//!
//! Only six types carry moves. Types used by the entity table but missing
//! here (fire, water, grass...) are plain lookup misses.

use serde::Serialize;

use crate::dex::pokemon::Pokemon;

/// A type and its ordered move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeMoves {
    pub id: &'static str,
    pub moves: &'static [&'static str],
}

/// Global type table, in definition order
pub static TYPE_MOVES: &[TypeMoves] = &[
    TypeMoves {
        id: "electric",
        moves: &["thundershock", "thunder", "thunderbolt"],
    },
    TypeMoves {
        id: "bug",
        moves: &["string shot", "harden"],
    },
    TypeMoves {
        id: "psychic",
        moves: &["psychic", "psywave", "confusion", "telekinesis"],
    },
    TypeMoves {
        id: "dragon",
        moves: &["dragon breath", "dragon rage", "dragon hammer"],
    },
    TypeMoves {
        id: "rock",
        moves: &["earthquake", "rollout", "sandstorm", "rock tomb"],
    },
    TypeMoves {
        id: "ghost",
        moves: &["curse", "nightmare", "night shade"],
    },
];

pub fn all_types() -> &'static [TypeMoves] {
    TYPE_MOVES
}

pub fn get_type(id: &str) -> Option<&'static TypeMoves> {
    TYPE_MOVES.iter().find(|t| t.id == id)
}

/// Move list for a Pokémon's type, if it has a type and that type has moves
pub fn moves_for(pokemon: &Pokemon) -> Option<&'static TypeMoves> {
    pokemon.category.and_then(get_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::pokemon::get_pokemon;

    #[test]
    fn test_table_ids_and_order() {
        let ids: Vec<&str> = TYPE_MOVES.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["electric", "bug", "psychic", "dragon", "rock", "ghost"]);
    }

    #[test]
    fn test_move_lists() {
        assert_eq!(get_type("bug").unwrap().moves, &["string shot", "harden"]);
        assert_eq!(
            get_type("psychic").unwrap().moves,
            &["psychic", "psywave", "confusion", "telekinesis"]
        );
        for entry in TYPE_MOVES {
            assert!(
                (2..=4).contains(&entry.moves.len()),
                "Unexpected move count for {}",
                entry.id
            );
            assert!(entry.moves.iter().all(|m| !m.is_empty()));
        }
    }

    #[test]
    fn test_lookup_misses() {
        assert!(get_type("fairy").is_none());
        assert!(get_type("fire").is_none());
        assert!(get_type("").is_none());
        assert!(get_type("Electric").is_none());
    }

    #[test]
    fn test_moves_for_pokemon() {
        let pikachu = get_pokemon(25).unwrap();
        assert_eq!(moves_for(pikachu).map(|t| t.id), Some("electric"));

        // Typed, but fire has no move list
        let charmander = get_pokemon(4).unwrap();
        assert!(moves_for(charmander).is_none());

        // Untyped
        let nidorina = get_pokemon(30).unwrap();
        assert!(moves_for(nidorina).is_none());
    }
}
