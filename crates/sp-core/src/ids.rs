//! Strongly typed, opaque string identifiers.
//!
//! Shelf and customer ids arrive from several places (uuid generation for
//! user-placed items, decimal visitor numbers from the simulation backend,
//! preset files), so the inner representation is a `String`.  Wrapping it in
//! a newtype keeps a `ShelfId` from ever being passed where a `CustomerId`
//! is expected.
//!
//! `Borrow<str>` is implemented so `FxHashMap<ShelfId, _>` can be queried with
//! a plain `&str`.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed id wrapper around an owned string.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            /// Wrap an existing raw id.
            #[inline]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// A fresh random (v4 uuid) id.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id! {
    /// Identity of a placed store fixture.  Unique within a `ShelfRegistry`.
    pub struct ShelfId;
}

typed_id! {
    /// Identity of a simulated customer.  Unique within the active set.
    pub struct CustomerId;
}
