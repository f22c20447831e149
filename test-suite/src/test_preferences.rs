use crate::TestEnvironment;

#[test]
fn test_add_and_delete_genre() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "add Action",
        "delete Action",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("genre: Action"));
    // After the delete the set is empty again
    let after_delete = output.rfind("genre: (not set)").unwrap();
    let after_add = output.find("genre: Action").unwrap();
    assert!(after_delete > after_add);
}

#[test]
fn test_adding_a_present_genre_keeps_the_set_unchanged() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "add Action",
        "add Action",
        "exit",
        "exit",
        "exit",
    ]);
    // Printed after each add and again when returning to the edit screen
    assert_eq!(output.matches("genre: Action\n").count(), 3);
    assert!(!output.contains("Action, Action"));
}

#[test]
fn test_deleting_an_absent_genre_is_a_noop() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "add Strategy",
        "delete Action",
        "exit",
        "exit",
        "exit",
    ]);
    // Printed after the add, after the no-op delete, and on the way back out
    assert_eq!(output.matches("genre: Strategy\n").count(), 3);
}

#[test]
fn test_invalid_genre_option() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "add Platformer",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("Invalid genre option."));
}

#[test]
fn test_multi_word_options_and_aliases() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "e genre",
        "a early access",
        "d early access",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("genre: Early Access"));
}

#[test]
fn test_options_listing() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "options",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("genre options:"));
    assert!(output.contains("Massively Multiplayer"));
}

#[test]
fn test_set_release_range() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit release range",
        "set 2000-2008",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("Editing release_range of test"));
    assert!(output.contains("release_range: 2000-2008"));
}

#[test]
fn test_set_rejects_inverted_range() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit release range",
        "set 2008-2000",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("Invalid release_range value."));
    assert!(!output.contains("release_range: 2008-2000"));
}

#[test]
fn test_set_and_clear_player_count() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit players",
        "set 4",
        "set 0",
        "clear",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("Editing number_of_players of test"));
    assert!(output.contains("Invalid number_of_players value."));
    let set_at = output.find("number_of_players: 4").unwrap();
    let cleared_at = output.rfind("number_of_players: (not set)").unwrap();
    assert!(cleared_at > set_at);
}

#[test]
fn test_verbs_are_checked_against_value_kind() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "set Action",
        "exit",
        "edit length",
        "add 5",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("'set' and 'clear' only work on single-value preferences"));
    assert!(output.contains("'add' and 'delete' only work on option-list preferences"));
}

#[test]
fn test_edits_show_up_in_view_preferences() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "add Action",
        "exit",
        "exit",
        "view preferences",
        "exit",
        "exit",
    ]);
    let viewing = output.find("Viewing preferences of test").unwrap();
    assert!(output[viewing..].contains("genre: Action"));
}
