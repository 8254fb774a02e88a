//! Strongly-typed numeric identifiers.
//!
//! Every entity crate declares its own id newtypes with [`numeric_id!`], so ids
//! of different entities cannot be mixed up at compile time.

/// Declare a `u64` identifier newtype.
///
/// The generated type is `Copy + Eq + Hash`, serializes transparently, displays
/// as the bare number and parses via `FromStr` (failing with
/// [`DomainError::InvalidId`](crate::DomainError::InvalidId)).
///
/// ```ignore
/// stockroom_core::numeric_id! {
///     /// Product identifier.
///     pub struct ProductId;
/// }
/// ```
#[macro_export]
macro_rules! numeric_id {
    ($(#[$meta:meta])* $vis:vis struct $t:ident;) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $t(u64);

        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let value = s.trim().parse::<u64>().map_err(|e| {
                    $crate::DomainError::invalid_id(format!("{}: {}", stringify!($t), e))
                })?;
                Ok(Self(value))
            }
        }
    };
}
