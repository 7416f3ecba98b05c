//! Scripted sessions played through `GameSession::run` with in-memory I/O.

mod common;

use std::io::Cursor;

fn play(script: &str) -> (zodiacquest::quest::GameSession, String) {
    let mut session = common::canonical_session();
    let mut output = Vec::new();
    session
        .run(Cursor::new(script.to_string()), &mut output)
        .expect("session");
    (session, String::from_utf8(output).expect("utf8"))
}

#[test]
fn test_opening_screen() {
    let (_, text) = play("");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("World has 21 regions, 45 portals, and 0 strings recognised as valid things")
    );
    assert!(text.contains(
        "You, with 15 coins in the region of YE OLD HOME TOWN (A) with portals to:\n\
         TRANSITION MEADOW (B) at a cost of 1\n\
         TRANSITION GLEN (D) at a cost of 1\n\
         Commands: GB, GD\n\
         0> "
    ));
}

#[test]
fn test_full_quest() {
    let script = "GB\nGZ\nGC\nT FIGURE\nGF\nwhatever\nq\n";
    let (session, text) = play(script);

    assert!(text.contains("You pay 1 and arrive in TRANSITION MEADOW (B)."));
    assert!(text.contains("ERROR: you cannot get to Z from here"));
    assert!(text.contains("You see some 'things': PHRONTIERSMAN\nFIGURE"));
    assert!(text.contains("ERROR: sorry, PHRONTIERSMAN is not moveable"));
    assert!(text.contains("You pay 2 and arrive in MOUNTAIN HEIGHTS (F)."));
    assert!(text.contains("ERROR: did not understand command WHATEVER"));
    assert!(text.contains("Your quest, step by step:\nGB\nGC\nGF\nQ"));
    // The prompt counts successful commands only
    assert!(text.contains("\n3> "));
    assert!(!text.contains("\n4> "));

    let you = session.player();
    assert!(you.has_quit());
    assert_eq!(you.coins(), 11);
}

#[test]
fn test_end_of_input_is_not_recorded() {
    let (session, text) = play("GD\n");
    assert!(text.contains("1> "));
    assert_eq!(session.player().history(), &["GD".to_string()]);
    assert!(!session.player().has_quit());
}

#[test]
fn test_lines_after_quit_ignored() {
    let (session, _) = play("Q\nGB\n");
    assert_eq!(session.player().history(), &["Q".to_string()]);
    assert_eq!(session.player().coins(), 15);
}
