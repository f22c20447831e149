use crate::TestEnvironment;

#[test]
fn test_simple_login() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "exit"]);
    assert!(output.contains("Attempting to login as test..."));
    assert!(output.contains("Successfully authenticated as test!"));
}

#[test]
fn test_wrong_credentials() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["this user", "does not exist"]);
    assert!(output.contains("Authentication failed, try again."));
    assert!(!output.contains("welcome to Game Recommender!"));
}

#[test]
fn test_wrong_password_returns_to_username_entry() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "wrong", "test", "1234", "exit"]);
    assert!(output.contains("Authentication failed, try again."));
    // The flow starts over from the username prompt and the retry succeeds
    assert_eq!(output.matches("Enter username: ").count(), 2);
    assert!(output.contains("Successfully authenticated as test!"));
}

#[test]
fn test_commands_are_not_dispatched_before_login() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["view preferences", "1234"]);
    // The line is consumed as a username attempt, not as a command
    assert!(output.contains("Attempting to login as view preferences..."));
    assert!(!output.contains("Viewing preferences of"));
}

#[test]
fn test_logout_requires_a_new_login() {
    let env = TestEnvironment::new();
    let output = env.run_script(&["test", "1234", "logout", "test", "1234", "exit"]);
    assert!(output.contains("Logged out."));
    assert_eq!(
        output.matches("Successfully authenticated as test!").count(),
        2
    );
    assert_eq!(output.matches("Welcome to Game Recommender!").count(), 2);
}

#[test]
fn test_preferences_reset_on_logout() {
    let env = TestEnvironment::new();
    let output = env.run_script(&[
        "test",
        "1234",
        "edit preferences",
        "edit genre",
        "add Action",
        "exit",
        "exit",
        "logout",
        "test",
        "1234",
        "view preferences",
        "exit",
        "exit",
    ]);
    assert!(output.contains("genre: Action"));
    // The fresh login starts from the repository's record again
    assert!(output.contains("Viewing preferences of test"));
    let after_relogin = output.split("Viewing preferences of test").nth(1).unwrap();
    assert!(after_relogin.contains("genre: (not set)"));
}
