//! Identifiers of cities and routes in a [`Network`](crate::core::Network).
//!
//! Both identifiers are dense integers assigned in insertion order, starting
//! at 0. This makes them usable as indices to contiguous arrays, which is what
//! the path search does with its visited set.

use std::{fmt, hash::Hash};

/// A unique identification of a city or route in a network.
///
/// Every value of the backing integer is a valid id.
pub trait IdType: Copy + Ord + Hash + fmt::Debug {
    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize;

    /// Converts an `usize` into the corresponding ID.
    ///
    /// # Panics
    ///
    /// Panics if the index does not fit into the backing integer.
    fn from_usize(index: usize) -> Self;
}

/// Index of a city (vertex) in a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

/// Index of a direct route (edge) in a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(u32);

macro_rules! impl_int_id {
    ($id_ty:ident, $prefix:literal) => {
        impl IdType for $id_ty {
            fn as_usize(&self) -> usize {
                self.0 as usize
            }

            fn from_usize(index: usize) -> Self {
                Self(index.try_into().expect("id type overflow"))
            }
        }

        impl From<usize> for $id_ty {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.as_usize()
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

impl_int_id!(VertexId, "v");
impl_int_id!(RouteId, "r");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_conversions() {
        let v = VertexId::from(3);
        assert_eq!(v.as_usize(), 3);
        assert_eq!(usize::from(v), 3);
        assert_eq!(RouteId::from_usize(7), RouteId::from(7));
    }

    #[test]
    fn full_range() {
        let max = u32::MAX as usize;
        assert_eq!(VertexId::from_usize(max).as_usize(), max);
        assert_ne!(VertexId::from_usize(max), VertexId::from_usize(max - 1));
    }

    #[test]
    fn display() {
        assert_eq!(VertexId::from(2).to_string(), "v2");
        assert_eq!(RouteId::from(0).to_string(), "r0");
    }

    #[test]
    #[should_panic(expected = "id type overflow")]
    fn overflow() {
        VertexId::from_usize(u32::MAX as usize + 1);
    }
}
