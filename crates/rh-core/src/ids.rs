//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ports, terminals, train classes and trains are all plain dense indices into
//! the static configuration, so every ID is `Copy + Ord + Hash` and exposes
//! `.index()` for direct `Vec`/`Matrix` access.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` or `Matrix` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Dense index of a train instance, assigned class by class at model
    /// construction.
    pub struct TrainId(u32);
}

typed_id! {
    /// Row index into the port dimension (`distance`, `unloading_time`).
    pub struct PortId(u32);
}

typed_id! {
    /// Column index into the terminal dimension of `distance`; row index of
    /// `loading_time`.
    pub struct TerminalId(u32);
}

typed_id! {
    /// Train model class.  Indexes speed, payload, fleet size and the
    /// per-class service-time columns.
    pub struct ClassId(u16);
}
