//! Collections

mod keyed;

pub use keyed::{KeySelector, KeyedCollection};
