//! Domain types for the store finder.
//!
//! Coordinates and stores are plain values: a [`Store`] is built once from a
//! [`StoreRecord`] and its geocoded [`Coordinate`] and never changes after.

mod coordinate;
mod store;

pub use coordinate::Coordinate;
pub use store::{Store, StoreRecord};
