//! Define index wrappers that can only be used to access their corresponding array.
//! If instead an index was returned as an integer, a cell index could be used
//! to reach a trie node and the other way around.
//! Here, the inner integer is kept private and only created inside the crate.

use std::{fmt, ops::Deref};

// Macro to create an index wrapper over a private u32
macro_rules! index_wrapper {
    ($(#[$meta:meta])* $index:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub struct $index {
            index: u32,
        }

        impl $index {
            pub(crate) const fn new(index: u32) -> Self {
                Self { index }
            }

            /// Return the index as a usize, to access the corresponding array.
            pub const fn get(self) -> usize {
                self.index as usize
            }
        }

        impl Deref for $index {
            type Target = u32;

            fn deref(&self) -> &Self::Target {
                &self.index
            }
        }

        impl From<$index> for usize {
            fn from(value: $index) -> Self {
                value.get()
            }
        }

        impl fmt::Display for $index {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.index)
            }
        }
    };
}

index_wrapper!(
    /// A node slot in the [PatternTree](crate::PatternTree) arena.
    NodeId
);
index_wrapper!(
    /// A cell of the [Board](crate::Board), numbered in row-major order.
    CellIndex
);
