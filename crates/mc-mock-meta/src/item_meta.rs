//! Fields shared by every item's metadata.

use tracing::debug;

use crate::error::MetaError;

/// Base metadata: display name, lore, custom model data, unbreakable flag and
/// damage. Every field is optional and unset by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMeta {
    display_name: Option<String>,
    lore: Option<Vec<String>>,
    custom_model_data: Option<i32>,
    unbreakable: bool,
    damage: Option<i32>,
}

impl ItemMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// `None` removes the display name.
    pub fn set_display_name(&mut self, name: Option<impl Into<String>>) {
        self.display_name = name.map(Into::into);
    }

    /// Lore is only present when at least one line is set.
    pub fn has_lore(&self) -> bool {
        self.lore.as_ref().is_some_and(|lines| !lines.is_empty())
    }

    /// A copy of the lore lines.
    pub fn lore(&self) -> Option<Vec<String>> {
        self.lore.clone()
    }

    /// `None` or an empty list removes the lore.
    pub fn set_lore(&mut self, lore: Option<Vec<String>>) {
        self.lore = lore.filter(|lines| !lines.is_empty());
    }

    pub fn has_custom_model_data(&self) -> bool {
        self.custom_model_data.is_some()
    }

    pub fn custom_model_data(&self) -> Option<i32> {
        self.custom_model_data
    }

    pub fn set_custom_model_data(&mut self, data: Option<i32>) {
        self.custom_model_data = data;
    }

    pub fn is_unbreakable(&self) -> bool {
        self.unbreakable
    }

    pub fn set_unbreakable(&mut self, unbreakable: bool) {
        self.unbreakable = unbreakable;
    }

    pub fn has_damage(&self) -> bool {
        self.damage.is_some()
    }

    /// Current damage, 0 when unset.
    pub fn damage(&self) -> i32 {
        self.damage.unwrap_or(0)
    }

    pub fn set_damage(&mut self, damage: i32) -> Result<(), MetaError> {
        if damage < 0 {
            debug!(damage, "Rejected negative item damage");
            return Err(MetaError::invalid(format!(
                "damage must be non-negative, got {damage}"
            )));
        }
        // zero damage is the same as no damage
        self.damage = (damage > 0).then_some(damage);
        Ok(())
    }
}
