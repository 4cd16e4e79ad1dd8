//! User directory: registration, login, and profile updates.
//!
//! The directory owns every registered [`User`] and keeps a username index so
//! that no two users share a username at the same time. Validation failures
//! (a missing argument) are returned as [`DomainError`]; rejected registrations,
//! failed logins, and username clashes are ordinary `false` / `None` results.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{DomainError, Password, User, UserId};

/// In-memory user directory.
///
/// ## Invariants
/// - `users` keeps registration order and is never shrunk.
/// - `by_username` maps every registered username to exactly one user, so a
///   username is held by at most one user at a time.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    by_username: HashMap<String, UserId>,
}

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user` unless its username is already taken.
    ///
    /// Empty usernames are valid. Returns `Ok(false)` for a taken username or
    /// for a user whose id is already registered.
    ///
    /// # Errors
    /// Returns an [`ErrorCode::InvalidArgument`](crate::domain::ErrorCode)
    /// error when no user is supplied.
    ///
    /// # Examples
    /// ```
    /// use bookstore::directory::UserDirectory;
    /// use bookstore::domain::User;
    ///
    /// let mut directory = UserDirectory::new();
    /// let john = User::new("JohnDoe", "password", "johndoe@example.com");
    /// assert_eq!(directory.register_user(john), Ok(true));
    ///
    /// let impostor = User::new("JohnDoe", "other", "other@example.com");
    /// assert_eq!(directory.register_user(impostor), Ok(false));
    /// assert_eq!(directory.len(), 1);
    /// ```
    pub fn register_user(&mut self, user: impl Into<Option<User>>) -> Result<bool, DomainError> {
        let candidate = user.into().ok_or_else(|| DomainError::missing_argument("user"))?;

        if self.by_username.contains_key(candidate.username()) {
            debug!(username = candidate.username(), "registration rejected: username taken");
            return Ok(false);
        }
        if self.find(candidate.id()).is_some() {
            debug!(user_id = %candidate.id(), "registration rejected: user already registered");
            return Ok(false);
        }

        self.by_username
            .insert(candidate.username().to_owned(), candidate.id());
        self.users.push(candidate);
        Ok(true)
    }

    /// Return the user whose username and password both match exactly.
    ///
    /// Unknown usernames and wrong passwords both yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns an [`ErrorCode::InvalidArgument`](crate::domain::ErrorCode)
    /// error when either credential is absent.
    pub fn login_user<'a, 'b>(
        &self,
        username: impl Into<Option<&'a str>>,
        password: impl Into<Option<&'b str>>,
    ) -> Result<Option<&User>, DomainError> {
        let name = username
            .into()
            .ok_or_else(|| DomainError::missing_argument("username"))?;
        let secret = password
            .into()
            .ok_or_else(|| DomainError::missing_argument("password"))?;

        let matched = self
            .find_by_username(name)
            .filter(|candidate| candidate.password().matches(secret));
        if matched.is_none() {
            debug!(username = name, "login rejected");
        }
        Ok(matched)
    }

    /// Overwrite the username, password, and email of a registered user.
    ///
    /// Returns `Ok(false)` without touching any field when `new_username` is
    /// held by a different user or when `user` is not registered. Keeping the
    /// current username, or choosing an empty one, is allowed.
    ///
    /// # Errors
    /// Returns an [`ErrorCode::InvalidArgument`](crate::domain::ErrorCode)
    /// error when no user is supplied.
    pub fn update_user_profile(
        &mut self,
        user: impl Into<Option<UserId>>,
        new_username: impl Into<String>,
        new_password: impl Into<String>,
        new_email: impl Into<String>,
    ) -> Result<bool, DomainError> {
        let id = user.into().ok_or_else(|| DomainError::missing_argument("user"))?;
        let username = new_username.into();

        if self
            .by_username
            .get(&username)
            .is_some_and(|holder| *holder != id)
        {
            debug!(%username, "profile update rejected: username taken");
            return Ok(false);
        }
        let Some(target) = self.users.iter_mut().find(|entry| entry.id() == id) else {
            debug!(user_id = %id, "profile update rejected: user not registered");
            return Ok(false);
        };

        if self.by_username.get(target.username()) == Some(&id) {
            self.by_username.remove(target.username());
        }
        self.by_username.insert(username.clone(), id);
        target.overwrite_profile(
            username,
            Password::new(new_password),
            new_email.into(),
        );
        Ok(true)
    }

    /// Registered user with the given id.
    #[must_use]
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Mutable handle to a registered user, for recording purchases.
    ///
    /// Profile fields stay read-only through this handle; use
    /// [`UserDirectory::update_user_profile`] to change them.
    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id() == id)
    }

    /// Registered user holding `username`.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        let id = *self.by_username.get(username)?;
        self.find(id)
    }

    /// All users in registration order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of registered users.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no user is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests;
