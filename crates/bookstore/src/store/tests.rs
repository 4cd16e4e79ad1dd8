//! Tests for the shared bookstore facade.

use std::sync::Arc;
use std::thread;

use super::*;
use crate::domain::{ErrorCode, Price};
use rstest::{fixture, rstest};

struct Opened {
    store: Bookstore,
    john: UserId,
    orwell: BookId,
}

#[fixture]
fn opened() -> Opened {
    let store = Bookstore::new();
    let john = User::new("JohnDoe", "password", "johndoe@example.com");
    let john_id = john.id();
    assert_eq!(store.register_user(john), Ok(true));
    let orwell = store
        .add_book(Book::new("1984", "George Orwell", "Dystopian", Price::FREE))
        .expect("add book");
    Opened {
        store,
        john: john_id,
        orwell,
    }
}

#[rstest]
fn purchase_then_review_round_trip(opened: Opened) {
    assert_eq!(opened.store.purchase(opened.john, opened.orwell), Ok(true));
    assert_eq!(
        opened
            .store
            .review(opened.john, opened.orwell, Some("Great book!")),
        Ok(true)
    );

    let reviews = opened.store.reviews(opened.orwell).expect("reviews");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews.first().and_then(Review::text), Some("Great book!"));

    let user = opened
        .store
        .user(opened.john)
        .expect("lock")
        .expect("registered");
    assert_eq!(user.purchased_books().len(), 1);
}

#[rstest]
fn review_before_purchase_is_rejected(opened: Opened) {
    assert_eq!(opened.store.review(opened.john, opened.orwell, None), Ok(false));
    assert!(opened.store.reviews(opened.orwell).expect("reviews").is_empty());
}

#[rstest]
fn purchase_of_unknown_book_is_rejected(opened: Opened) {
    assert_eq!(opened.store.purchase(opened.john, BookId::random()), Ok(false));
    let user = opened
        .store
        .user(opened.john)
        .expect("lock")
        .expect("registered");
    assert!(user.purchased_books().is_empty());
}

#[rstest]
fn unknown_user_is_not_found(opened: Opened) {
    let err = opened
        .store
        .purchase(UserId::random(), opened.orwell)
        .expect_err("unknown user");
    assert_eq!(err.code(), ErrorCode::NotFound);

    let err = opened
        .store
        .review(UserId::random(), opened.orwell, None)
        .expect_err("unknown user");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
fn review_survives_catalogue_removal(opened: Opened) {
    assert_eq!(opened.store.purchase(opened.john, opened.orwell), Ok(true));
    assert_eq!(opened.store.remove_book(opened.orwell), Ok(true));
    assert_eq!(opened.store.remove_book(opened.orwell), Ok(false));
    assert_eq!(
        opened.store.review(opened.john, opened.orwell, Some("still mine")),
        Ok(true)
    );
}

#[rstest]
fn login_and_profile_update(opened: Opened) {
    assert!(
        opened
            .store
            .login("JohnDoe", "password")
            .expect("lock")
            .is_some()
    );
    assert_eq!(
        opened
            .store
            .update_profile(opened.john, "NewJohnDoe", "newpassword", "new@example.com"),
        Ok(true)
    );
    assert!(
        opened
            .store
            .login("JohnDoe", "password")
            .expect("lock")
            .is_none()
    );
    assert!(
        opened
            .store
            .login("NewJohnDoe", "newpassword")
            .expect("lock")
            .is_some()
    );
}

#[rstest]
fn search_returns_snapshots(opened: Opened) {
    opened
        .store
        .add_book(Book::new("Brave New World", "Aldous Huxley", "Science Fiction", Price::FREE))
        .expect("add book");

    let found = opened.store.search("").expect("search");
    let titles: Vec<_> = found.iter().map(Book::title).collect();
    assert_eq!(titles, vec!["1984", "Brave New World"]);
    assert_eq!(opened.store.counts(), Ok((2, 1)));
}

#[rstest]
fn concurrent_registrations_keep_usernames_unique() {
    let store = Arc::new(Bookstore::new());

    let accepted: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    store
                        .register_user(User::new("JohnDoe", "password", "j@x.com"))
                        .expect("lock")
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| usize::from(handle.join().expect("thread")))
            .sum()
    });

    assert_eq!(accepted, 1);
    assert_eq!(store.counts(), Ok((0, 1)));
}
