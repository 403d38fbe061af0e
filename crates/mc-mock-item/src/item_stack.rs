//! ItemStack value type.
//!
//! Represents an item in an inventory slot or stored inside item metadata.
//! Stacks are plain values: `Clone` produces an independent copy and equality
//! compares content, never identity.

use crate::material::Material;

/// A single stack of one material.
///
/// `Material::Air` or `amount == 0` means the stack is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemStack {
    material: Material,
    amount: u8,
}

impl ItemStack {
    /// An empty slot (air).
    pub fn empty() -> Self {
        Self {
            material: Material::Air,
            amount: 0,
        }
    }

    /// A stack holding a single item.
    pub fn new(material: Material) -> Self {
        Self::with_amount(material, 1)
    }

    /// A stack holding `amount` items. The amount is clamped to the material's
    /// maximum stack size.
    pub fn with_amount(material: Material, amount: u8) -> Self {
        Self {
            material,
            amount: amount.min(material.max_stack_size()),
        }
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    /// Set the amount, clamped to the material's maximum stack size.
    pub fn set_amount(&mut self, amount: u8) {
        self.amount = amount.min(self.material.max_stack_size());
    }

    /// Whether this slot is empty.
    pub fn is_empty(&self) -> bool {
        self.material.is_air() || self.amount == 0
    }

    /// Whether both stacks hold the same kind of item, ignoring the amount.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.material == other.material
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Material> for ItemStack {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}
