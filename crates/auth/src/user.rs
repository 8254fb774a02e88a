//! User accounts.

use stockroom_core::Entity;

use crate::UserRole;

stockroom_core::numeric_id! {
    /// Unique identifier of a user account.
    pub struct UserId;
}

/// A user account.
///
/// Accounts are immutable once created. The password is kept as given and is
/// never included in `Debug` or `Display` output.
#[derive(Clone)]
pub struct User {
    id: UserId,
    name: String,
    login: String,
    password: String,
    role: UserRole,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            login: login.into(),
            password: password.into(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Debug for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "User(id={}, name={}, role={})",
            self.id, self.name, self.role
        )
    }
}
