//! Test utilities & fixtures shared by the integration tests.

use std::io::Write;

use zodiacquest::quest::{canonical_map_seed, Dictionary, GameSession, Thing, World};

/// The built-in map with an empty word list.
pub fn canonical_world() -> World {
    World::from_seed(&canonical_map_seed(), Dictionary::default()).expect("canonical world")
}

/// A fresh quest on the built-in map, starting in region A with 15 coins.
#[allow(dead_code)] // Not every test binary plays a full session.
pub fn canonical_session() -> GameSession {
    GameSession::new(canonical_world(), "A", 15).expect("session")
}

/// Drop a thing on the floor of the region called `key`.
#[allow(dead_code)]
pub fn place(world: &mut World, key: &str, thing: Thing) {
    let id = world.graph.regions.id_of(key).expect("region");
    world
        .graph
        .regions
        .by_id_mut(id)
        .expect("region")
        .inventory
        .add(thing);
}

/// Write a word list into a temp file, one word per line.
#[allow(dead_code)]
pub fn word_list(words: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    for word in words {
        writeln!(file, "{}", word).expect("write word");
    }
    file
}
