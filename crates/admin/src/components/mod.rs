//! Stateful form components rendered by admin pages.

pub mod weight_based_price;

pub use weight_based_price::{EditorRowView, WeightBasedPriceEditor};
