//! Item metadata for the mock item layer.
//!
//! [`ItemMeta`] holds the fields every item carries; [`CrossbowMeta`] adds the
//! validated list of charged projectiles.

pub mod charged_projectiles;
pub mod crossbow;
pub mod error;
pub mod item_meta;

pub use charged_projectiles::{ChargedProjectiles, CHARGEABLE_MATERIALS};
pub use crossbow::CrossbowMeta;
pub use error::MetaError;
pub use item_meta::ItemMeta;
