//! Card instance identification.
//!
//! Every card dealt into a match gets a unique `InstanceId`. Two copies of
//! "Strike" in the same deck share a catalog key but never an instance ID.
//!
//! IDs are handed out by an `InstanceAllocator` owned by the match, so they
//! are stable for the whole match and survive checkpoints.
//!
//! ```
//! use recursion_ccg::core::InstanceAllocator;
//!
//! let mut ids = InstanceAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for `InstanceId`s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    /// Create an allocator starting at ID 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = InstanceAllocator::new();

        assert_eq!(ids.alloc(), InstanceId(0));
        assert_eq!(ids.alloc(), InstanceId(1));
        assert_eq!(ids.alloc(), InstanceId(2));
    }

    #[test]
    fn test_instance_display() {
        assert_eq!(format!("{}", InstanceId(7)), "#7");
        assert_eq!(InstanceId(7).raw(), 7);
    }
}
