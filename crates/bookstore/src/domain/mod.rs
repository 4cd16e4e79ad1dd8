//! Domain primitives shared by the catalogue and the directory.
//!
//! Purpose: define the entities both stores operate on and the error payload
//! used for validation failures. Identity is carried by generated ids rather
//! than object addresses, so clones of an entity refer to the same entry.
//!
//! Public surface:
//! - Book, BookId, Price, Review — catalogue entries and attached reviews.
//! - User, UserId, Password — directory entries.
//! - DomainError, ErrorCode — validation failure payload.

pub mod book;
pub mod error;
pub mod user;

pub use self::book::{Book, BookId, BookValidationError, Price, Review};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::user::{Password, User, UserId};
