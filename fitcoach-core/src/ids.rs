//! Session-local identifiers.
//!
//! Backend ids are optional and only unique within one response batch, so
//! every message and event is keyed by a [`LocalId`] handed out at ingestion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic identifier, unique for the lifetime of a [`crate::ChatSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalId(u64);

impl LocalId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing [`LocalId`]s starting at 1.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> LocalId {
        self.last += 1;
        LocalId(self.last)
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_id_is_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id().get(), 1);
        assert_eq!(ids.issued(), 1);
    }

    proptest! {
        #[test]
        fn ids_strictly_increase(count in 1usize..200) {
            let mut ids = IdAllocator::new();
            let mut previous = None;
            for _ in 0..count {
                let id = ids.next_id();
                if let Some(prev) = previous {
                    prop_assert!(id > prev);
                }
                previous = Some(id);
            }
            prop_assert_eq!(ids.issued(), count as u64);
        }
    }
}
