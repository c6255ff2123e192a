//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  IDs are handed out monotonically
//! and never reused, so they are *not* indices: agents and items can be
//! removed mid-run.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The id handed out after `self`.
            #[inline(always)]
            pub fn next(self) -> Self {
                $name(self.0 + 1)
            }

            /// Raw integer value, useful as an RNG seed offset.
            #[inline(always)]
            pub fn raw(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of a rat.  Assigned in spawn order starting at 0.
    pub struct AgentId(u32);
}

typed_id! {
    /// Identity of a placeable item (food, poison).
    pub struct ItemId(u32);
}
