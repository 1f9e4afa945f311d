/// The formula book.
///
/// Holds the user's saved formulas, validates new ones, and evaluates a
/// formula once every one of its variables has a value.
pub mod book;
/// Blob storage behind the formula book.
///
/// Defines the [`KeyValueStore`](store::KeyValueStore) interface together with
/// an in-memory and a file-backed implementation.
pub mod store;

pub use book::{FORMULAS_KEY, Formula, FormulaBook};
