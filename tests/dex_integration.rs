//! Integration tests for the embedded dex tables

use pokedex::core::types::DexId;
use pokedex::dex::{
    all_pokemon, all_types, find_pokemon, find_pokemon_by_name, get_pokemon, get_type, moves_for,
    pokemon_of_type, type_vocabulary, untyped_pokemon, DexSnapshot, POKEDEX_SIZE,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Test 1: ids cover 1..=151 exactly once, in order
#[test]
fn test_ids_are_contiguous() {
    let ids: Vec<DexId> = all_pokemon().iter().map(|p| p.id).collect();
    let expected: Vec<DexId> = (1..=151).collect();
    assert_eq!(ids, expected);
    assert_eq!(all_pokemon().len(), POKEDEX_SIZE);
}

/// Test 2: no record has an empty name
#[test]
fn test_names_non_empty() {
    assert!(all_pokemon().iter().all(|p| !p.name.is_empty()));
}

/// Test 3: literal spot checks from the source data
#[test]
fn test_spot_checks() {
    let nidorina = get_pokemon(30).unwrap();
    assert_eq!(nidorina.name, "Nidorina");
    assert!(nidorina.category.is_none());

    let bulbasaur = get_pokemon(1).unwrap();
    assert_eq!((bulbasaur.name, bulbasaur.category), ("Bulbasaur", Some("grass")));

    let mew = get_pokemon(151).unwrap();
    assert_eq!((mew.name, mew.category), ("Mew", Some("psychic")));
}

/// Test 4: exactly six type records, no more, no less
#[test]
fn test_type_table_ids() {
    let ids: HashSet<&str> = all_types().iter().map(|t| t.id).collect();
    let expected: HashSet<&str> = ["electric", "bug", "psychic", "dragon", "rock", "ghost"]
        .into_iter()
        .collect();
    assert_eq!(all_types().len(), 6);
    assert_eq!(ids, expected);
}

/// Test 5: move lists keep their order
#[test]
fn test_move_lists() {
    assert_eq!(get_type("bug").unwrap().moves, ["string shot", "harden"]);
    assert_eq!(
        get_type("psychic").unwrap().moves,
        ["psychic", "psywave", "confusion", "telekinesis"]
    );
}

/// Test 6: fire filter
#[test]
fn test_filter_fire() {
    let ids: Vec<DexId> = pokemon_of_type("fire").iter().map(|p| p.id).collect();
    assert_eq!(ids, [4, 5, 6, 38, 59, 77, 78, 126, 136, 146]);
}

/// Test 7: misses are results, not panics
#[test]
fn test_misses() {
    assert!(get_pokemon(999).is_none());
    assert!(get_type("fairy").is_none());
    assert!(find_pokemon_by_name("Missingno").is_none());
}

/// Test 8: `show` arguments resolve as a dex number first, then a name
#[test]
fn test_find_pokemon_query() {
    assert_eq!(find_pokemon("25").map(|p| p.id), Some(25));
    assert_eq!(find_pokemon(" pikachu ").map(|p| p.id), Some(25));
    assert!(find_pokemon("0").is_none());
    assert!(find_pokemon("70000").is_none());
    assert!(find_pokemon("-5").is_none());
}

/// Test 9: many entity types have no move list, and that stays a miss
#[test]
fn test_type_table_asymmetry() {
    let without_moves: Vec<&str> = type_vocabulary()
        .into_iter()
        .filter(|category| get_type(category).is_none())
        .collect();
    assert_eq!(
        without_moves,
        ["grass", "fire", "water", "normal", "poison", "ground", "fighting", "ice"]
    );
    for category in without_moves {
        for pokemon in pokemon_of_type(category) {
            assert!(moves_for(pokemon).is_none());
        }
    }
}

/// Test 10: every untyped Pokémon misses the move table
#[test]
fn test_untyped_have_no_moves() {
    for pokemon in untyped_pokemon() {
        assert!(moves_for(pokemon).is_none(), "{} should have no moves", pokemon.name);
    }
}

/// Test 11: serialize then parse gives back the same tables
#[test]
fn test_snapshot_round_trip() {
    let snapshot = DexSnapshot::capture();

    let from_json = DexSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(from_json, snapshot);

    let from_toml = DexSnapshot::from_toml(&snapshot.to_toml().unwrap()).unwrap();
    assert_eq!(from_toml, snapshot);
    assert!(from_toml.matches_static());
}

proptest! {
    #[test]
    fn prop_lookup_by_id_matches_position(id in any::<DexId>()) {
        match get_pokemon(id) {
            Some(pokemon) => {
                prop_assert!((1..=151).contains(&id));
                prop_assert_eq!(pokemon.id, id);
            }
            None => prop_assert!(id == 0 || id > 151),
        }
    }

    #[test]
    fn prop_filter_is_ordered_and_exact(category in prop_oneof![
        proptest::sample::select(type_vocabulary()).prop_map(str::to_string),
        "[a-zA-Z]{0,10}",
    ]) {
        let matches = pokemon_of_type(&category);
        prop_assert!(matches.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert!(matches.iter().all(|p| p.is_type(&category)));

        let expected = all_pokemon()
            .iter()
            .filter(|p| p.is_type(&category))
            .count();
        prop_assert_eq!(matches.len(), expected);
    }

    #[test]
    fn prop_type_lookup_only_hits_table(id in "[a-z]{0,10}") {
        match get_type(&id) {
            Some(entry) => prop_assert_eq!(entry.id, id.as_str()),
            None => prop_assert!(all_types().iter().all(|t| t.id != id)),
        }
    }
}
