//! The canonical four-page map that ships with the game.

use super::seed_loader::{MapSeed, ThingSeed};
use super::types::ThingKind;

/// Region every new quest starts in.
pub const REQUIRED_START_REGION: &str = "A";

/// Coins in hand at the start of a quest.
pub const STARTING_COINS: u32 = 15;

/// (long name, short code) for every region, page by page.
pub const CANONICAL_REGIONS: &[(&str, &str)] = &[
    // Page 1
    ("YE OLD HOME TOWN", "A"),
    ("TRANSITION MEADOW", "B"),
    ("OPEN ZONE", "C"),
    ("TRANSITION GLEN", "D"),
    ("GARDENS OF IVES", "E"),
    ("MOUNTAIN HEIGHTS", "F"),
    // Page 2
    ("MAMMOTH REEF COVE", "G"),
    ("NORTHINGTON EAST", "H"),
    ("PINELANDS OF OUR GODDESS", "I"),
    ("ABANDONED PLAINS", "J"),
    ("LEIGHTON PASS", "K"),
    ("FOURIER PLAZA AT AMALFI VERDI", "L"),
    // Page 3
    ("STONESIDE VALLEY", "M"),
    ("MOTHER-OF-OUR-EARTH REEDSWAMP", "N"),
    ("GLADE OF SUNNINESS", "O"),
    ("REALM OF HONESTY", "P"),
    ("VELVET WOLD", "Q"),
    // Page 4
    ("LOST WOODS OF BALFOUR", "R"),
    ("LONELY HILLS", "S"),
    ("WILDERNESS EVENT PAVILION", "T"),
    ("SOUTHINGTON EAST", "U"),
];

/// (region code, region code, listed toll) for every portal.
pub const CANONICAL_PORTALS: &[(&str, &str, u32)] = &[
    // Page 1
    ("A", "B", 1),
    ("A", "D", 1),
    ("B", "E", 1),
    ("B", "F", 1),
    ("B", "C", 1),
    ("D", "E", 1),
    ("E", "F", 1),
    ("C", "F", 2),
    ("C", "G", 3),
    ("C", "I", 2),
    ("F", "I", 1),
    ("F", "J", 1),
    ("F", "R", 3),
    // Page 2
    ("G", "H", 2),
    ("G", "I", 3),
    ("I", "H", 2),
    ("I", "J", 3),
    ("I", "K", 2),
    ("H", "K", 3),
    ("H", "L", 3),
    ("J", "K", 2),
    ("K", "L", 2),
    // Page 3
    ("D", "M", 1),
    ("E", "N", 2),
    ("F", "N", 3),
    ("F", "P", 2),
    ("F", "Q", 1),
    ("F", "O", 1),
    ("M", "N", 1),
    ("M", "P", 3),
    ("N", "P", 2),
    ("P", "Q", 1),
    ("Q", "O", 1),
    // Page 4
    ("J", "R", 1),
    ("K", "R", 2),
    ("K", "S", 2),
    ("L", "S", 2),
    ("L", "U", 1),
    ("O", "R", 2),
    ("R", "S", 3),
    ("R", "T", 2),
    ("S", "T", 3),
    ("S", "U", 2),
    ("O", "T", 3),
    ("T", "U", 2),
];

/// The built-in map with its one inhabitant.
pub fn canonical_map_seed() -> MapSeed {
    let mut seed = MapSeed::default();
    for (name, code) in CANONICAL_REGIONS {
        seed = seed.region(name, code);
    }
    for (from, to, cost) in CANONICAL_PORTALS {
        seed = seed.portal(from, to, *cost);
    }
    seed.thing(ThingSeed {
        region: "OPEN ZONE".to_string(),
        names: vec!["PHRONTIERSMAN".to_string(), "FIGURE".to_string()],
        strings: Vec::new(),
        fixed: true,
        // Turns one word into another by changing its first sound; not playable yet.
        kind: ThingKind::Person {
            magic: Some("phonetic transformation".to_string()),
        },
    })
}
