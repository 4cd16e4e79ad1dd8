//! Tests for the user directory.

use super::*;
use crate::domain::ErrorCode;
use rstest::{fixture, rstest};

struct Seeded {
    directory: UserDirectory,
    john: UserId,
}

#[fixture]
fn seeded() -> Seeded {
    let mut directory = UserDirectory::new();
    let john = User::new("JohnDoe", "password", "johndoe@example.com");
    let id = john.id();
    assert_eq!(directory.register_user(john), Ok(true));
    Seeded {
        directory,
        john: id,
    }
}

#[rstest]
fn register_new_username_succeeds(mut seeded: Seeded) {
    let jane = User::new("JaneDoe", "password", "janedoe@example.com");
    assert_eq!(seeded.directory.register_user(jane), Ok(true));
    assert_eq!(seeded.directory.len(), 2);
}

#[rstest]
fn register_taken_username_fails_and_keeps_size(mut seeded: Seeded) {
    let again = User::new("JohnDoe", "other", "other@example.com");
    assert_eq!(seeded.directory.register_user(again), Ok(false));
    assert_eq!(seeded.directory.len(), 1);
}

#[rstest]
fn register_same_user_twice_fails(mut seeded: Seeded) {
    let copy = seeded
        .directory
        .find(seeded.john)
        .cloned()
        .expect("registered user");
    assert_eq!(seeded.directory.register_user(copy), Ok(false));
    assert_eq!(seeded.directory.len(), 1);
}

#[rstest]
fn register_accepts_empty_username(mut seeded: Seeded) {
    let blank = User::new("", "password", "email@example.com");
    assert_eq!(seeded.directory.register_user(blank), Ok(true));
    assert!(seeded.directory.find_by_username("").is_some());
}

#[rstest]
fn register_without_user_is_invalid_argument(mut seeded: Seeded) {
    let err = seeded
        .directory
        .register_user(None)
        .expect_err("missing user");
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    assert_eq!(seeded.directory.len(), 1);
}

#[rstest]
fn login_with_correct_password_returns_user(seeded: Seeded) {
    let user = seeded
        .directory
        .login_user("JohnDoe", "password")
        .expect("valid arguments")
        .expect("user found");
    assert_eq!(user.username(), "JohnDoe");
    assert_eq!(user.id(), seeded.john);
}

#[rstest]
#[case("JohnDoe", "wrongpassword")]
#[case("NonExistentUser", "password")]
#[case("johndoe", "password")]
fn login_mismatch_returns_none(seeded: Seeded, #[case] username: &str, #[case] password: &str) {
    let result = seeded
        .directory
        .login_user(username, password)
        .expect("valid arguments");
    assert!(result.is_none());
}

#[rstest]
fn login_without_credentials_is_invalid_argument(seeded: Seeded) {
    let no_username = seeded
        .directory
        .login_user(None, "password")
        .expect_err("missing username");
    let no_password = seeded
        .directory
        .login_user("JohnDoe", None)
        .expect_err("missing password");

    assert_eq!(no_username.code(), ErrorCode::InvalidArgument);
    assert_eq!(no_password.code(), ErrorCode::InvalidArgument);
    assert_eq!(no_password.message(), "password must be provided");
}

#[rstest]
fn update_to_free_username_overwrites_all_fields(mut seeded: Seeded) {
    let updated = seeded
        .directory
        .update_user_profile(seeded.john, "NewJohnDoe", "newpassword", "newjohn@example.com")
        .expect("valid arguments");
    assert!(updated);

    let user = seeded.directory.find(seeded.john).expect("registered user");
    assert_eq!(user.username(), "NewJohnDoe");
    assert!(user.password().matches("newpassword"));
    assert_eq!(user.email(), "newjohn@example.com");
}

#[rstest]
fn update_reindexes_username(mut seeded: Seeded) {
    seeded
        .directory
        .update_user_profile(seeded.john, "NewJohnDoe", "newpassword", "new@example.com")
        .expect("valid arguments");

    assert!(seeded.directory.find_by_username("JohnDoe").is_none());
    assert!(
        seeded
            .directory
            .login_user("NewJohnDoe", "newpassword")
            .expect("valid arguments")
            .is_some()
    );

    let newcomer = User::new("JohnDoe", "password", "johndoe@example.com");
    assert_eq!(seeded.directory.register_user(newcomer), Ok(true));
}

#[rstest]
fn update_to_taken_username_changes_nothing(mut seeded: Seeded) {
    let existing = User::new("ExistingUser", "password123", "existinguser@example.com");
    seeded
        .directory
        .register_user(existing)
        .expect("valid arguments");

    let updated = seeded
        .directory
        .update_user_profile(seeded.john, "ExistingUser", "newpassword", "newjohn@example.com")
        .expect("valid arguments");
    assert!(!updated);

    let user = seeded.directory.find(seeded.john).expect("registered user");
    assert_eq!(user.username(), "JohnDoe");
    assert!(user.password().matches("password"));
    assert_eq!(user.email(), "johndoe@example.com");
}

#[rstest]
fn update_keeping_own_username_succeeds(mut seeded: Seeded) {
    let updated = seeded
        .directory
        .update_user_profile(seeded.john, "JohnDoe", "rotated", "johndoe@example.com")
        .expect("valid arguments");
    assert!(updated);
    assert!(
        seeded
            .directory
            .login_user("JohnDoe", "rotated")
            .expect("valid arguments")
            .is_some()
    );
}

#[rstest]
fn update_to_empty_username_succeeds(mut seeded: Seeded) {
    let updated = seeded
        .directory
        .update_user_profile(seeded.john, "", "new_password", "new_email@example.com")
        .expect("valid arguments");
    assert!(updated);
    assert_eq!(
        seeded.directory.find_by_username("").map(User::id),
        Some(seeded.john)
    );
}

#[rstest]
fn update_unknown_user_fails(mut seeded: Seeded) {
    let updated = seeded
        .directory
        .update_user_profile(UserId::random(), "Ghost", "pw", "ghost@example.com")
        .expect("valid arguments");
    assert!(!updated);
    assert!(seeded.directory.find_by_username("Ghost").is_none());
}

#[rstest]
fn update_without_user_is_invalid_argument(mut seeded: Seeded) {
    let err = seeded
        .directory
        .update_user_profile(None, "Ghost", "pw", "ghost@example.com")
        .expect_err("missing user");
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
}
