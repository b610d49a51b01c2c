//! The Kanto entity table - 151 Pokémon with an optional type tag
//!
//! The table is static data. A `None` type is a real data state (the record
//! was never assigned one), distinct from any type string.

use ahash::AHashMap;
use serde::Serialize;
use std::sync::OnceLock;

use crate::core::types::DexId;

/// One row of the entity table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pokemon {
    pub id: DexId,
    pub name: &'static str,
    /// Lookup key into the type table; not guaranteed to have a match there
    pub category: Option<&'static str>,
}

impl Pokemon {
    const fn typed(id: DexId, name: &'static str, category: &'static str) -> Self {
        Self {
            id,
            name,
            category: Some(category),
        }
    }

    const fn untyped(id: DexId, name: &'static str) -> Self {
        Self {
            id,
            name,
            category: None,
        }
    }

    /// Check whether this Pokémon carries the given type tag
    pub fn is_type(&self, category: &str) -> bool {
        self.category == Some(category)
    }
}

/// Number of rows in the entity table
pub const POKEDEX_SIZE: usize = 151;

/// Global entity table, ascending by id starting at 1
pub static POKEDEX: &[Pokemon] = &[
    Pokemon::typed(1, "Bulbasaur", "grass"),
    Pokemon::typed(2, "Ivysaur", "grass"),
    Pokemon::typed(3, "Venusaur", "grass"),
    Pokemon::typed(4, "Charmander", "fire"),
    Pokemon::typed(5, "Charmeleon", "fire"),
    Pokemon::typed(6, "Charizard", "fire"),
    Pokemon::typed(7, "Squirtle", "water"),
    Pokemon::typed(8, "Wartortle", "water"),
    Pokemon::typed(9, "Blastoise", "water"),
    Pokemon::typed(10, "Caterpie", "bug"),
    Pokemon::typed(11, "Metapod", "bug"),
    Pokemon::typed(12, "Butterfree", "bug"),
    Pokemon::typed(13, "Weedle", "bug"),
    Pokemon::typed(14, "Kakuna", "bug"),
    Pokemon::typed(15, "Beedrill", "bug"),
    Pokemon::typed(16, "Pidgey", "normal"),
    Pokemon::typed(17, "Pidgeotto", "normal"),
    Pokemon::typed(18, "Pidgeot", "normal"),
    Pokemon::typed(19, "Rattata", "normal"),
    Pokemon::typed(20, "Raticate", "normal"),
    Pokemon::typed(21, "Spearow", "normal"),
    Pokemon::typed(22, "Fearow", "normal"),
    Pokemon::typed(23, "Ekans", "poison"),
    Pokemon::typed(24, "Arbok", "poison"),
    Pokemon::typed(25, "Pikachu", "electric"),
    Pokemon::typed(26, "Raichu", "electric"),
    Pokemon::typed(27, "Sandshrew", "ground"),
    Pokemon::typed(28, "Sandslash", "ground"),
    Pokemon::typed(29, "Nidoran-f", "poison"),
    Pokemon::untyped(30, "Nidorina"),
    Pokemon::typed(31, "Nidoqueen", "poison"),
    Pokemon::typed(32, "Nidoran-m", "poison"),
    Pokemon::untyped(33, "Nidorino"),
    Pokemon::typed(34, "Nidoking", "poison"),
    Pokemon::untyped(35, "Clefairy"),
    Pokemon::untyped(36, "Clefable"),
    Pokemon::untyped(37, "Vulpix"),
    Pokemon::typed(38, "Ninetales", "fire"),
    Pokemon::untyped(39, "Jigglypuff"),
    Pokemon::untyped(40, "Wigglytuff"),
    Pokemon::typed(41, "Zubat", "poison"),
    Pokemon::typed(42, "Golbat", "poison"),
    Pokemon::untyped(43, "Oddish"),
    Pokemon::untyped(44, "Gloom"),
    Pokemon::untyped(45, "Vileplume"),
    Pokemon::typed(46, "Paras", "bug"),
    Pokemon::typed(47, "Parasect", "bug"),
    Pokemon::typed(48, "Venonat", "bug"),
    Pokemon::typed(49, "Venomoth", "bug"),
    Pokemon::typed(50, "Diglett", "ground"),
    Pokemon::typed(51, "Dugtrio", "ground"),
    Pokemon::typed(52, "Meowth", "normal"),
    Pokemon::typed(53, "Persian", "normal"),
    Pokemon::typed(54, "Psyduck", "water"),
    Pokemon::typed(55, "Golduck", "water"),
    Pokemon::typed(56, "Mankey", "fighting"),
    Pokemon::typed(57, "Primeape", "fighting"),
    Pokemon::untyped(58, "Growlithe"),
    Pokemon::typed(59, "Arcanine", "fire"),
    Pokemon::typed(60, "Poliwag", "water"),
    Pokemon::untyped(61, "Poliwhirl"),
    Pokemon::typed(62, "Poliwrath", "water"),
    Pokemon::untyped(63, "Abra"),
    Pokemon::untyped(64, "Kadabra"),
    Pokemon::typed(65, "Alakazam", "psychic"),
    Pokemon::typed(66, "Machop", "fighting"),
    Pokemon::untyped(67, "Machoke"),
    Pokemon::typed(68, "Machamp", "fighting"),
    Pokemon::typed(69, "Bellsprout", "grass"),
    Pokemon::untyped(70, "Weepinbell"),
    Pokemon::typed(71, "Victreebel", "grass"),
    Pokemon::typed(72, "Tentacool", "water"),
    Pokemon::typed(73, "Tentacruel", "water"),
    Pokemon::typed(74, "Geodude", "rock"),
    Pokemon::untyped(75, "Graveler"),
    Pokemon::typed(76, "Golem", "rock"),
    Pokemon::typed(77, "Ponyta", "fire"),
    Pokemon::typed(78, "Rapidash", "fire"),
    Pokemon::typed(79, "Slowpoke", "water"),
    Pokemon::typed(80, "Slowbro", "water"),
    Pokemon::typed(81, "Magnemite", "electric"),
    Pokemon::typed(82, "Magneton", "electric"),
    Pokemon::typed(83, "Farfetchd", "normal"),
    Pokemon::typed(84, "Doduo", "normal"),
    Pokemon::typed(85, "Dodrio", "normal"),
    Pokemon::typed(86, "Seel", "water"),
    Pokemon::typed(87, "Dewgong", "water"),
    Pokemon::typed(88, "Grimer", "poison"),
    Pokemon::typed(89, "Muk", "poison"),
    Pokemon::untyped(90, "Shellder"),
    Pokemon::typed(91, "Cloyster", "water"),
    Pokemon::typed(92, "Gastly", "ghost"),
    Pokemon::untyped(93, "Haunter"),
    Pokemon::typed(94, "Gengar", "ghost"),
    Pokemon::typed(95, "Onix", "rock"),
    Pokemon::typed(96, "Drowzee", "psychic"),
    Pokemon::typed(97, "Hypno", "psychic"),
    Pokemon::typed(98, "Krabby", "water"),
    Pokemon::typed(99, "Kingler", "water"),
    Pokemon::typed(100, "Voltorb", "electric"),
    Pokemon::typed(101, "Electrode", "electric"),
    Pokemon::untyped(102, "Exeggcute"),
    Pokemon::typed(103, "Exeggutor", "grass"),
    Pokemon::typed(104, "Cubone", "ground"),
    Pokemon::typed(105, "Marowak", "ground"),
    Pokemon::typed(106, "Hitmonlee", "fighting"),
    Pokemon::typed(107, "Hitmonchan", "fighting"),
    Pokemon::typed(108, "Lickitung", "normal"),
    Pokemon::typed(109, "Koffing", "poison"),
    Pokemon::typed(110, "Weezing", "poison"),
    Pokemon::typed(111, "Rhyhorn", "ground"),
    Pokemon::typed(112, "Rhydon", "ground"),
    Pokemon::typed(113, "Chansey", "normal"),
    Pokemon::typed(114, "Tangela", "grass"),
    Pokemon::typed(115, "Kangaskhan", "normal"),
    Pokemon::typed(116, "Horsea", "water"),
    Pokemon::typed(117, "Seadra", "water"),
    Pokemon::typed(118, "Goldeen", "water"),
    Pokemon::typed(119, "Seaking", "water"),
    Pokemon::untyped(120, "Staryu"),
    Pokemon::typed(121, "Starmie", "water"),
    Pokemon::typed(122, "Mr-mime", "psychic"),
    Pokemon::typed(123, "Scyther", "bug"),
    Pokemon::typed(124, "Jynx", "ice"),
    Pokemon::typed(125, "Electabuzz", "electric"),
    Pokemon::typed(126, "Magmar", "fire"),
    Pokemon::typed(127, "Pinsir", "bug"),
    Pokemon::typed(128, "Tauros", "normal"),
    Pokemon::typed(129, "Magikarp", "water"),
    Pokemon::typed(130, "Gyarados", "water"),
    Pokemon::typed(131, "Lapras", "water"),
    Pokemon::untyped(132, "Ditto"),
    Pokemon::typed(133, "Eevee", "normal"),
    Pokemon::untyped(134, "Vaporeon"),
    Pokemon::typed(135, "Jolteon", "electric"),
    Pokemon::typed(136, "Flareon", "fire"),
    Pokemon::typed(137, "Porygon", "normal"),
    Pokemon::typed(138, "Omanyte", "rock"),
    Pokemon::typed(139, "Omastar", "rock"),
    Pokemon::typed(140, "Kabuto", "rock"),
    Pokemon::typed(141, "Kabutops", "rock"),
    Pokemon::typed(142, "Aerodactyl", "rock"),
    Pokemon::typed(143, "Snorlax", "normal"),
    Pokemon::typed(144, "Articuno", "ice"),
    Pokemon::typed(145, "Zapdos", "electric"),
    Pokemon::typed(146, "Moltres", "fire"),
    Pokemon::typed(147, "Dratini", "dragon"),
    Pokemon::typed(148, "Dragonair", "dragon"),
    Pokemon::typed(149, "Dragonite", "dragon"),
    Pokemon::typed(150, "Mewtwo", "psychic"),
    Pokemon::typed(151, "Mew", "psychic"),
];

/// Full table in definition order
pub fn all_pokemon() -> &'static [Pokemon] {
    POKEDEX
}

/// Look up a Pokémon by its dex number
///
/// Ids are contiguous from 1, so this is a direct index.
pub fn get_pokemon(id: DexId) -> Option<&'static Pokemon> {
    let index = usize::from(id).checked_sub(1)?;
    POKEDEX.get(index)
}

/// Case-insensitive lookup by display name
pub fn find_pokemon_by_name(name: &str) -> Option<&'static Pokemon> {
    let name = name.trim();
    POKEDEX.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Dex number if the query parses as one, otherwise a name lookup
///
/// Strings that are not a valid dex number (negative, too large for a dex
/// id) fall through to the name lookup and miss there.
pub fn find_pokemon(query: &str) -> Option<&'static Pokemon> {
    match query.trim().parse::<DexId>() {
        Ok(id) => get_pokemon(id),
        Err(_) => find_pokemon_by_name(query),
    }
}

static TYPE_INDEX: OnceLock<AHashMap<&'static str, Vec<&'static Pokemon>>> = OnceLock::new();

fn type_index() -> &'static AHashMap<&'static str, Vec<&'static Pokemon>> {
    TYPE_INDEX.get_or_init(|| {
        let mut index: AHashMap<&'static str, Vec<&'static Pokemon>> = AHashMap::new();
        for pokemon in POKEDEX {
            if let Some(category) = pokemon.category {
                index.entry(category).or_default().push(pokemon);
            }
        }
        tracing::debug!(types = index.len(), "built pokedex type index");
        index
    })
}

/// All Pokémon with the given type, in dex order
///
/// Untyped Pokémon never match. An unknown type yields an empty slice.
pub fn pokemon_of_type(category: &str) -> &'static [&'static Pokemon] {
    type_index()
        .get(category)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Pokémon that were never assigned a type, in dex order
pub fn untyped_pokemon() -> Vec<&'static Pokemon> {
    POKEDEX.iter().filter(|p| p.category.is_none()).collect()
}

/// Distinct type tags used by the entity table, in order of first appearance
pub fn type_vocabulary() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for category in POKEDEX.iter().filter_map(|p| p.category) {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
