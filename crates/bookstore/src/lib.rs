//! In-memory bookstore domain model.
//!
//! Two stores collaborate:
//!
//! - [`catalog::BookCatalog`] keeps books in insertion order, answers title
//!   searches, records purchases on a borrowed [`domain::User`], and logs
//!   reviews for purchased books.
//! - [`directory::UserDirectory`] registers users under unique usernames,
//!   authenticates them by exact password match, and updates profiles.
//!
//! [`store::Bookstore`] wraps both behind mutexes for shared use, and
//! [`seed::SeedFile`] pre-populates it from JSON. [`cli::execute`] drives the
//! `bookstore` binary.
//!
//! # Example
//!
//! ```
//! use bookstore::catalog::BookCatalog;
//! use bookstore::directory::UserDirectory;
//! use bookstore::domain::{Book, Price, User};
//!
//! let mut catalog = BookCatalog::new();
//! let mut directory = UserDirectory::new();
//!
//! let book = Book::new("1984", "George Orwell", "Dystopian", Price::FREE);
//! catalog.add_book(book.clone());
//!
//! let john = User::new("JohnDoe", "password", "johndoe@example.com");
//! let id = john.id();
//! directory.register_user(john).expect("user supplied");
//!
//! assert_eq!(catalog.purchase_book(directory.user_mut(id), &book), Ok(true));
//! let john = directory.find(id).expect("registered");
//! assert_eq!(catalog.add_book_review(john, &book, Some("Great book!")), Ok(true));
//! ```

pub mod catalog;
pub mod cli;
pub mod directory;
pub mod domain;
pub mod seed;
pub mod settings;
pub mod store;
pub mod telemetry;

pub use catalog::BookCatalog;
pub use directory::UserDirectory;
pub use store::Bookstore;
