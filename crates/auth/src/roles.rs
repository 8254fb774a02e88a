use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::DomainError;

/// Role of a user account.
///
/// The set is closed; every account has exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Administrator,
    Manager,
    WarehouseWorker,
    Cashier,
    Customer,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Administrator,
        UserRole::Manager,
        UserRole::WarehouseWorker,
        UserRole::Cashier,
        UserRole::Customer,
    ];

    /// Stable role name (matches the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrator => "ADMINISTRATOR",
            UserRole::Manager => "MANAGER",
            UserRole::WarehouseWorker => "WAREHOUSE_WORKER",
            UserRole::Cashier => "CASHIER",
            UserRole::Customer => "CUSTOMER",
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown user role '{s}'")))
    }
}
