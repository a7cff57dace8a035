//! Kind-tagged identifiers.
//!
//! Every id carries its kind as a fixed literal prefix (`container-` or `item-`), so the
//! kind is recoverable from the string alone. Raw strings coming from the presentation
//! layer are classified once, via [`EntityId::parse`], and everything downstream
//! dispatches on the enum rather than on the string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix carried by every container id
pub const CONTAINER_PREFIX: &str = "container-";

/// Prefix carried by every item id
pub const ITEM_PREFIX: &str = "item-";

macro_rules! tagged_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw string without checking its prefix.
            ///
            /// Used for values read back from storage; [`crate::BoardStore`] rejects
            /// boards whose ids do not carry the right prefix.
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Build an id from a unique suffix, adding the kind prefix
            pub fn with_suffix(suffix: impl fmt::Display) -> Self {
                Self(format!("{}{}", $prefix, suffix))
            }

            /// Parse a raw id, returning `None` unless it carries this kind's prefix
            pub fn parse(raw: &str) -> Option<Self> {
                raw.strip_prefix($prefix)
                    .filter(|suffix| !suffix.is_empty())
                    .map(|_| Self(raw.to_string()))
            }

            /// Whether the wrapped string carries this kind's prefix
            pub fn is_well_formed(&self) -> bool {
                Self::parse(&self.0).is_some()
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_string(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from_string(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

tagged_id!(
    /// Identifier of a container (board column)
    ContainerId,
    CONTAINER_PREFIX
);

tagged_id!(
    /// Identifier of an item (card)
    ItemId,
    ITEM_PREFIX
);

/// An identifier classified by kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    Container(ContainerId),
    Item(ItemId),
}

impl EntityId {
    /// Classify a raw id by its prefix. Unknown prefixes yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(id) = ContainerId::parse(raw) {
            return Some(Self::Container(id));
        }
        ItemId::parse(raw).map(Self::Item)
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Container(id) => id.as_str(),
            Self::Item(id) => id.as_str(),
        }
    }

    /// Kind name used in logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Container(_) => "container",
            Self::Item(_) => "item",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container(_))
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContainerId> for EntityId {
    fn from(id: ContainerId) -> Self {
        Self::Container(id)
    }
}

impl From<ItemId> for EntityId {
    fn from(id: ItemId) -> Self {
        Self::Item(id)
    }
}
