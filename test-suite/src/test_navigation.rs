use crate::TestEnvironment;

#[test]
fn test_unrecognized_input() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "frobnicate", "exit"]);
    assert!(output.contains("Unrecognized input."));
}

#[test]
fn test_bad_second_word() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "view garbage", "exit"]);
    assert!(output.contains("Second word in input is invalid."));
    assert!(!output.contains("Viewing preferences of"));
}

#[test]
fn test_missing_argument() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "view", "exit"]);
    assert!(output.contains("Command is missing an argument."));
}

#[test]
fn test_view_preferences() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "view preferences", "exit", "exit"]);
    assert!(output.contains("Viewing preferences of test"));
    assert!(output.contains("genre: (not set)"));
    assert!(output.contains("release_range: (not set)"));
    assert!(output.contains("number_of_players: (not set)"));
    assert!(output.contains("length: (not set)"));
}

#[test]
fn test_view_jumps_to_edit() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "view preferences", "edit preferences", "exit", "exit"]);
    assert!(output.contains("Viewing preferences of test"));
    assert!(output.contains("Editing preferences of test"));
}

#[test]
fn test_exit_pops_back_through_screens() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "exit",
        "exit",
        "exit",
    ]);
    assert!(output.contains("Editing genre of test"));
    // Returning from the genre screen renders the edit screen again
    assert_eq!(output.matches("Editing preferences of test").count(), 2);
    assert!(output.contains("Received exit command, closing..."));
}

#[test]
fn test_commands_are_screen_scoped() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "add Action", "exit"]);
    assert!(output.contains("That command is not available on this screen."));
}

#[test]
fn test_help_lists_home_commands() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "help", "exit"]);
    assert!(output.contains("logout - Log out of current user (returns to login screen)"));
    assert!(output.contains("exit - Quits the application"));
}

#[test]
fn test_quick_start() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "quick start", "exit"]);
    assert!(output.contains("Since you're logged in, head to edit preferences!"));
}

#[test]
fn test_recommendations_are_not_implemented() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "recommend", "exit"]);
    assert!(output.contains("Recommendations are not implemented yet."));
}

#[test]
fn test_empty_lines_are_ignored() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "", "  ", "exit"]);
    assert!(!output.contains("Unrecognized input."));
    assert!(output.contains("Received exit command, closing..."));
}
