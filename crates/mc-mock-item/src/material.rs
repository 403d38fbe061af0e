//! Material identifiers.
//!
//! Materials are keyed by their namespaced identifier (`minecraft:arrow`), the
//! same form the item registry uses. Serde reads and writes that key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ItemError;

/// The kind of item held by an [`ItemStack`](crate::ItemStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Material {
    Air,
    Stone,
    Dirt,
    Cobblestone,
    Arrow,
    TippedArrow,
    SpectralArrow,
    FireworkRocket,
    FireworkStar,
    Snowball,
    EnderPearl,
    Egg,
    Bow,
    Crossbow,
    Trident,
    Shield,
    DiamondSword,
    IronPickaxe,
    Stick,
    Feather,
}

impl Material {
    /// Every material, in declaration order.
    pub const ALL: &'static [Material] = &[
        Material::Air,
        Material::Stone,
        Material::Dirt,
        Material::Cobblestone,
        Material::Arrow,
        Material::TippedArrow,
        Material::SpectralArrow,
        Material::FireworkRocket,
        Material::FireworkStar,
        Material::Snowball,
        Material::EnderPearl,
        Material::Egg,
        Material::Bow,
        Material::Crossbow,
        Material::Trident,
        Material::Shield,
        Material::DiamondSword,
        Material::IronPickaxe,
        Material::Stick,
        Material::Feather,
    ];

    /// Namespaced identifier, e.g. `"minecraft:spectral_arrow"`.
    pub fn key(self) -> &'static str {
        match self {
            Material::Air => "minecraft:air",
            Material::Stone => "minecraft:stone",
            Material::Dirt => "minecraft:dirt",
            Material::Cobblestone => "minecraft:cobblestone",
            Material::Arrow => "minecraft:arrow",
            Material::TippedArrow => "minecraft:tipped_arrow",
            Material::SpectralArrow => "minecraft:spectral_arrow",
            Material::FireworkRocket => "minecraft:firework_rocket",
            Material::FireworkStar => "minecraft:firework_star",
            Material::Snowball => "minecraft:snowball",
            Material::EnderPearl => "minecraft:ender_pearl",
            Material::Egg => "minecraft:egg",
            Material::Bow => "minecraft:bow",
            Material::Crossbow => "minecraft:crossbow",
            Material::Trident => "minecraft:trident",
            Material::Shield => "minecraft:shield",
            Material::DiamondSword => "minecraft:diamond_sword",
            Material::IronPickaxe => "minecraft:iron_pickaxe",
            Material::Stick => "minecraft:stick",
            Material::Feather => "minecraft:feather",
        }
    }

    /// Maximum number of items a single stack of this material may hold.
    pub fn max_stack_size(self) -> u8 {
        match self {
            Material::Bow
            | Material::Crossbow
            | Material::Trident
            | Material::Shield
            | Material::DiamondSword
            | Material::IronPickaxe => 1,
            Material::Snowball | Material::EnderPearl | Material::Egg => 16,
            _ => 64,
        }
    }

    pub fn is_air(self) -> bool {
        self == Material::Air
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Material {
    type Err = ItemError;

    /// Parse a material key. The `minecraft:` namespace may be omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = s.strip_prefix("minecraft:").unwrap_or(s);
        Material::ALL
            .iter()
            .copied()
            .find(|m| m.key().strip_prefix("minecraft:") == Some(short))
            .ok_or_else(|| ItemError::UnknownMaterial(s.to_string()))
    }
}

impl TryFrom<String> for Material {
    type Error = ItemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Material> for &'static str {
    fn from(material: Material) -> Self {
        material.key()
    }
}
