//! Item primitives for the mock item layer.
//!
//! Provides the closed [`Material`] set and the [`ItemStack`] value type that
//! item metadata stores and compares.

pub mod error;
pub mod item_stack;
pub mod material;

pub use error::ItemError;
pub use item_stack::ItemStack;
pub use material::Material;
