//! Charged projectiles loaded into a crossbow.
//!
//! The list only accepts the materials in [`CHARGEABLE_MATERIALS`]. Items are
//! cloned on the way in and on the way out, so callers never hold a handle to
//! stored state. Bulk replacement validates the whole batch before touching
//! the stored list.

use mc_mock_item::{ItemStack, Material};
use tracing::{debug, trace};

use crate::error::MetaError;

/// Materials a crossbow can be charged with.
pub const CHARGEABLE_MATERIALS: &[Material] = &[
    Material::Arrow,
    Material::TippedArrow,
    Material::SpectralArrow,
    Material::FireworkRocket,
];

/// Whether `material` may be loaded as a charged projectile.
pub fn is_chargeable(material: Material) -> bool {
    CHARGEABLE_MATERIALS.contains(&material)
}

/// Check a candidate projectile without storing it.
///
/// `None` stands for a missing item and is always rejected.
pub fn validate(candidate: Option<&ItemStack>) -> Result<&ItemStack, MetaError> {
    let item = candidate.ok_or_else(|| MetaError::invalid("null item"))?;
    if !is_chargeable(item.material()) {
        return Err(MetaError::invalid(format!(
            "unsupported material: {}",
            item.material()
        )));
    }
    Ok(item)
}

/// Ordered list of charged projectiles. Duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct ChargedProjectiles {
    items: Vec<ItemStack>,
}

impl ChargedProjectiles {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A fresh copy of every stored projectile, in order.
    pub fn snapshot(&self) -> Vec<ItemStack> {
        trace!(count = self.items.len(), "Snapshot of charged projectiles");
        self.items.to_vec()
    }

    /// Replace every stored projectile.
    ///
    /// `None` clears the list. Otherwise all candidates must pass [`validate`];
    /// on the first failure the stored list is left as it was.
    pub fn replace_all(
        &mut self,
        candidates: Option<&[Option<ItemStack>]>,
    ) -> Result<(), MetaError> {
        let Some(candidates) = candidates else {
            self.clear();
            return Ok(());
        };

        let mut accepted = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            match validate(candidate.as_ref()) {
                Ok(item) => accepted.push(item.clone()),
                Err(e) => {
                    debug!(index, "Rejected charged projectile batch: {e}");
                    return Err(e);
                }
            }
        }

        debug!(
            previous = self.items.len(),
            count = accepted.len(),
            "Replaced charged projectiles"
        );
        self.items = accepted;
        Ok(())
    }

    /// Append one projectile after the existing ones.
    pub fn add(&mut self, candidate: Option<&ItemStack>) -> Result<(), MetaError> {
        let item = validate(candidate).inspect_err(|e| {
            debug!("Rejected charged projectile: {e}");
        })?;
        self.items.push(item.clone());
        debug!(
            material = %item.material(),
            count = self.items.len(),
            "Added charged projectile"
        );
        Ok(())
    }

    /// Remove every stored projectile.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            debug!(previous = self.items.len(), "Cleared charged projectiles");
        }
        self.items = Vec::new();
    }
}

impl PartialEq for ChargedProjectiles {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.items == other.items
    }
}

impl Eq for ChargedProjectiles {}
