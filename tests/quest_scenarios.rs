//! Integration tests for travel, tolls and inventory transfers on the built-in map.

mod common;

use zodiacquest::quest::{
    CommandInterpreter, Outcome, Player, QuestError, Thing, REQUIRED_START_REGION, STARTING_COINS,
};

fn start(world: &zodiacquest::quest::World) -> Player {
    let a = world.graph.regions.id_of(REQUIRED_START_REGION).unwrap();
    Player::new(a, STARTING_COINS)
}

/// Effective toll of the portal from the player's region to `key`
fn toll_to(world: &zodiacquest::quest::World, you: &Player, key: &str) -> u32 {
    let here = world.graph.regions.by_id(you.region()).unwrap();
    let portal = world.graph.portal(here.portals.get(key).unwrap()).unwrap();
    portal.cost(&you.snapshot(&world.graph).unwrap())
}

#[test]
fn test_go_then_unknown_destination() {
    let mut world = common::canonical_world();
    let mut you = start(&world);
    let interpreter = CommandInterpreter::new();

    interpreter.execute(&mut you, &mut world, "GB").unwrap();
    let meadow = world.graph.regions.by_id(you.region()).unwrap();
    assert_eq!(meadow.name(), "TRANSITION MEADOW");
    let meadow = meadow.id();
    assert_eq!(you.coins(), 14);

    let err = interpreter.execute(&mut you, &mut world, "GZ").unwrap_err();
    assert!(matches!(err, QuestError::NoSuchRoute(ref key) if key == "Z"));
    assert_eq!(you.region(), meadow);
    assert_eq!(you.coins(), 14);
    assert_eq!(you.history(), &["GB".to_string()]);
}

#[test]
fn test_ruby_discounts_toll_of_three() {
    let mut world = common::canonical_world();
    common::place(&mut world, "B", Thing::new("RUBY"));
    let mut you = start(&world);
    let interpreter = CommandInterpreter::new();

    // The ruby lies at B, next door to the toll of 3 between C and G
    interpreter.execute(&mut you, &mut world, "GB").unwrap();
    interpreter.execute(&mut you, &mut world, "GC").unwrap();
    assert_eq!(toll_to(&world, &you, "G"), 3);

    interpreter.execute(&mut you, &mut world, "GB").unwrap();
    interpreter.execute(&mut you, &mut world, "T RUBY").unwrap();
    interpreter.execute(&mut you, &mut world, "GC").unwrap();
    assert_eq!(toll_to(&world, &you, "G"), 1);

    let before = you.coins();
    let outcome = interpreter.execute(&mut you, &mut world, "GG").unwrap();
    assert_eq!(
        outcome,
        Outcome::Moved {
            destination: "MAMMOTH REEF COVE (G)".to_string(),
            cost: 1
        }
    );
    assert_eq!(you.coins(), before - 1);
}

#[test]
fn test_floor_gem_counts_while_standing_on_it() {
    let mut world = common::canonical_world();
    common::place(&mut world, "C", Thing::new("OPAL"));
    let mut you = start(&world);

    you.go(&world.graph, "B").unwrap();
    you.go(&world.graph, "C").unwrap();
    assert_eq!(toll_to(&world, &you, "G"), 1);
    assert_eq!(toll_to(&world, &you, "I"), 2);

    let description = you.description(&world.graph).unwrap();
    assert!(description.contains("MAMMOTH REEF COVE (G) at a special cost of 1 (normally 3)"));
    assert!(description.contains("PINELANDS OF OUR GODDESS (I) at a cost of 2"));
}

#[test]
fn test_cannot_afford_toll() {
    let mut world = common::canonical_world();
    let a = world.graph.regions.id_of("A").unwrap();
    let mut you = Player::new(a, 1);
    let interpreter = CommandInterpreter::new();

    interpreter.execute(&mut you, &mut world, "GB").unwrap();
    assert_eq!(you.coins(), 0);

    let err = interpreter.execute(&mut you, &mut world, "GC").unwrap_err();
    assert!(matches!(err, QuestError::CannotAfford { cost: 1, coins: 0, .. }));
    assert!(err.is_user_error());
    assert_eq!(you.region(), world.graph.regions.id_of("B").unwrap());
    assert!(you
        .description(&world.graph)
        .unwrap()
        .starts_with("You, devoid of coins!"));
}

#[test]
fn test_take_and_leave_conserve_things() {
    let mut world = common::canonical_world();
    common::place(&mut world, "A", Thing::new("LANTERN").with_alias("LAMP"));
    common::place(&mut world, "A", Thing::paper("SCROLL", 2, "yellow", "LEO"));
    let mut you = start(&world);
    let interpreter = CommandInterpreter::new();
    let a = you.region();

    let count = |world: &zodiacquest::quest::World, you: &Player| {
        world.graph.regions.by_id(a).unwrap().inventory.len() + you.inventory().len()
    };
    assert_eq!(count(&world, &you), 2);

    interpreter.execute(&mut you, &mut world, "t lamp").unwrap();
    assert_eq!(count(&world, &you), 2);
    assert_eq!(you.inventory().len(), 1);

    interpreter.execute(&mut you, &mut world, "T SCROLL").unwrap();
    assert!(you.inventory().has_zodiac_sign());
    assert!(world.graph.regions.by_id(a).unwrap().inventory.is_empty());

    interpreter.execute(&mut you, &mut world, "L LANTERN").unwrap();
    assert_eq!(count(&world, &you), 2);
    assert_eq!(world.graph.regions.by_id(a).unwrap().inventory.get("LAMP").len(), 1);
    assert_eq!(
        you.history(),
        &["T LAMP".to_string(), "T SCROLL".to_string(), "L LANTERN".to_string()]
    );
}

#[test]
fn test_phrontiersman_cannot_be_taken() {
    let mut world = common::canonical_world();
    let mut you = start(&world);
    let interpreter = CommandInterpreter::new();

    interpreter.execute(&mut you, &mut world, "GB").unwrap();
    interpreter.execute(&mut you, &mut world, "GC").unwrap();

    let err = interpreter.execute(&mut you, &mut world, "T FIGURE").unwrap_err();
    assert!(matches!(err, QuestError::NotMovable(ref name) if name == "PHRONTIERSMAN"));
    assert_eq!(err.to_string(), "sorry, PHRONTIERSMAN is not moveable");

    let open_zone = world.graph.regions.by_id(you.region()).unwrap();
    assert_eq!(open_zone.inventory.get("PHRONTIERSMAN").len(), 1);
    assert!(you.inventory().is_empty());
    assert_eq!(you.step(), 2);

    // Not offered as a take either
    let commands: Vec<String> = you
        .available_commands(&world.graph)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(!commands.iter().any(|c| c.starts_with("T ")));
}

#[test]
fn test_history_grows_only_on_success() {
    let mut world = common::canonical_world();
    let mut you = start(&world);
    let interpreter = CommandInterpreter::new();

    for input in ["GZ", "T NOTHING", "L NOTHING", "HELLO", "GD", "GA"] {
        let _ = interpreter.execute(&mut you, &mut world, input);
    }
    assert_eq!(you.history(), &["GD".to_string(), "GA".to_string()]);
    assert_eq!(you.coins(), 13);
}

#[test]
fn test_quit_once() {
    let mut world = common::canonical_world();
    let mut you = start(&world);
    let interpreter = CommandInterpreter::new();

    interpreter.execute(&mut you, &mut world, "GD").unwrap();
    let outcome = interpreter.execute(&mut you, &mut world, "Q").unwrap();
    assert_eq!(
        outcome,
        Outcome::Quit {
            history: vec!["GD".to_string(), "Q".to_string()]
        }
    );

    let again = interpreter.execute(&mut you, &mut world, "Q").unwrap();
    assert_eq!(again, Outcome::AlreadyTerminated);
    assert_eq!(you.step(), 2);

    let err = interpreter.execute(&mut you, &mut world, "GA").unwrap_err();
    assert!(matches!(err, QuestError::Terminated));
}
