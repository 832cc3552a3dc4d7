//! Typed entity identifiers
//!
//! Ids are assigned by the storage layer on first save and never change.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw numeric value
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .trim_start_matches('#')
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| format!("Invalid id: {s}. Expected a positive number"))
            }
        }
    };
}

entity_id!(
    /// Identifier of a stored [`User`](super::User)
    UserId
);
entity_id!(
    /// Identifier of a stored [`Question`](super::Question)
    QuestionId
);
entity_id!(
    /// Identifier of a stored [`Answer`](super::Answer)
    AnswerId
);
entity_id!(
    /// Identifier of a stored [`DeleteHistory`](super::DeleteHistory)
    DeleteHistoryId
);
