//! Crossbow metadata.
//!
//! A crossbow carries the base [`ItemMeta`] fields plus the projectiles it is
//! charged with. Projectiles go through [`ChargedProjectiles`], which enforces
//! the material whitelist and hands out copies only.

use mc_mock_item::ItemStack;

use crate::charged_projectiles::ChargedProjectiles;
use crate::error::MetaError;
use crate::item_meta::ItemMeta;

/// Metadata of a crossbow item: base fields plus its charged projectiles.
#[derive(Debug, Clone, Default)]
pub struct CrossbowMeta {
    base: ItemMeta,
    charged: ChargedProjectiles,
}

impl CrossbowMeta {
    /// Crossbow metadata with no fields set and nothing charged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the base fields of `meta`. The result holds no projectiles.
    pub fn from_meta(meta: &ItemMeta) -> Self {
        Self {
            base: meta.clone(),
            charged: ChargedProjectiles::new(),
        }
    }

    pub fn base(&self) -> &ItemMeta {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ItemMeta {
        &mut self.base
    }

    pub fn has_charged_projectiles(&self) -> bool {
        !self.charged.is_empty()
    }

    /// Copies of the charged projectiles, in load order. Empty when uncharged.
    pub fn charged_projectiles(&self) -> Vec<ItemStack> {
        self.charged.snapshot()
    }

    /// Replace all charged projectiles. `None` unloads the crossbow.
    ///
    /// Fails with [`MetaError::InvalidArgument`] if any entry is missing or is
    /// not an arrow or firework rocket; the crossbow is then left unchanged.
    pub fn set_charged_projectiles(
        &mut self,
        projectiles: Option<&[Option<ItemStack>]>,
    ) -> Result<(), MetaError> {
        self.charged.replace_all(projectiles)
    }

    /// Load one more projectile after the existing ones.
    pub fn add_charged_projectile(&mut self, item: Option<&ItemStack>) -> Result<(), MetaError> {
        self.charged.add(item)
    }
}

impl PartialEq for CrossbowMeta {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.base == other.base && self.charged == other.charged)
    }
}

impl Eq for CrossbowMeta {}

impl From<ItemMeta> for CrossbowMeta {
    fn from(base: ItemMeta) -> Self {
        Self {
            base,
            charged: ChargedProjectiles::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_mock_item::Material;

    fn setup() -> CrossbowMeta {
        mc_mock_harness::init_test_tracing();
        CrossbowMeta::new()
    }

    fn rocket() -> ItemStack {
        ItemStack::new(Material::FireworkRocket)
    }

    #[test]
    fn new_has_no_projectiles() {
        let meta = setup();
        assert!(!meta.has_charged_projectiles());
        assert!(meta.charged_projectiles().is_empty());
    }

    #[test]
    fn clone_copies_values() {
        let mut meta = setup();
        meta.add_charged_projectile(Some(&rocket())).unwrap();

        let copy = meta.clone();
        assert_eq!(copy.charged_projectiles().len(), 1);
    }

    #[test]
    fn has_charged_projectiles_after_add() {
        let mut meta = setup();
        meta.add_charged_projectile(Some(&rocket())).unwrap();
        assert!(meta.has_charged_projectiles());
    }

    #[test]
    fn set_none_clears() {
        let mut meta = setup();
        meta.add_charged_projectile(Some(&rocket())).unwrap();

        meta.set_charged_projectiles(None).unwrap();
        assert!(!meta.has_charged_projectiles());
        assert!(meta.charged_projectiles().is_empty());
    }

    #[test]
    fn returned_list_is_a_copy() {
        let mut meta = setup();
        meta.add_charged_projectile(Some(&rocket())).unwrap();

        let projectiles = meta.charged_projectiles();
        assert_eq!(projectiles.len(), 1);

        meta.add_charged_projectile(Some(&rocket())).unwrap();
        assert_eq!(meta.charged_projectiles().len(), 2);
        assert_eq!(projectiles.len(), 1);
    }

    #[test]
    fn set_replaces_old_projectiles() {
        let mut meta = setup();
        meta.add_charged_projectile(Some(&ItemStack::new(Material::Arrow))).unwrap();

        let batch = [Some(rocket()), Some(rocket())];
        meta.set_charged_projectiles(Some(batch.as_slice())).unwrap();
        assert_eq!(meta.charged_projectiles(), vec![rocket(), rocket()]);
    }

    #[test]
    fn set_accepts_all_arrows() {
        let mut meta = setup();
        let batch = [
            Some(rocket()),
            Some(ItemStack::new(Material::Arrow)),
            Some(ItemStack::new(Material::TippedArrow)),
            Some(ItemStack::new(Material::SpectralArrow)),
        ];
        meta.set_charged_projectiles(Some(batch.as_slice())).unwrap();
        assert_eq!(meta.charged_projectiles().len(), 4);
    }

    #[test]
    fn set_with_missing_item_fails() {
        let mut meta = setup();
        let batch = [Some(ItemStack::new(Material::Arrow)), None];
        assert!(matches!(
            meta.set_charged_projectiles(Some(batch.as_slice())),
            Err(MetaError::InvalidArgument(_))
        ));
        assert!(meta.charged_projectiles().is_empty());
    }

    #[test]
    fn set_with_stone_fails() {
        let mut meta = setup();
        let batch = [Some(ItemStack::new(Material::Stone))];
        assert!(matches!(
            meta.set_charged_projectiles(Some(batch.as_slice())),
            Err(MetaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn add_does_not_overwrite() {
        let mut meta = setup();
        meta.add_charged_projectile(Some(&rocket())).unwrap();
        meta.add_charged_projectile(Some(&rocket())).unwrap();
        assert_eq!(meta.charged_projectiles().len(), 2);
    }

    #[test]
    fn add_accepts_all_arrows() {
        let mut meta = setup();
        for m in [
            Material::FireworkRocket,
            Material::Arrow,
            Material::SpectralArrow,
            Material::TippedArrow,
        ] {
            meta.add_charged_projectile(Some(&ItemStack::new(m))).unwrap();
        }
        assert_eq!(meta.charged_projectiles().len(), 4);
    }

    #[test]
    fn add_missing_item_fails() {
        let mut meta = setup();
        assert_eq!(
            meta.add_charged_projectile(None),
            Err(MetaError::InvalidArgument("null item".into()))
        );
        assert!(!meta.has_charged_projectiles());
    }

    #[test]
    fn add_stone_fails() {
        let mut meta = setup();
        assert!(matches!(
            meta.add_charged_projectile(Some(&ItemStack::new(Material::Stone))),
            Err(MetaError::InvalidArgument(_))
        ));
        assert!(!meta.has_charged_projectiles());
    }

    #[test]
    fn load_then_unload() {
        let mut meta = setup();
        meta.add_charged_projectile(Some(&rocket())).unwrap();
        assert_eq!(meta.charged_projectiles().len(), 1);

        meta.add_charged_projectile(Some(&ItemStack::new(Material::Arrow))).unwrap();
        assert_eq!(
            meta.charged_projectiles(),
            vec![rocket(), ItemStack::new(Material::Arrow)]
        );

        meta.set_charged_projectiles(None).unwrap();
        assert!(meta.charged_projectiles().is_empty());
    }

    #[test]
    fn equals_itself() {
        let meta = setup();
        assert_eq!(meta, meta);
    }

    #[test]
    fn equals_clone_with_same_values() {
        let mut meta = setup();
        meta.add_charged_projectile(Some(&rocket())).unwrap();
        meta.base_mut().set_display_name(Some("Repeater"));
        assert_eq!(meta.clone(), meta);
    }

    #[test]
    fn clone_with_extra_projectile_differs() {
        let meta = setup();
        let mut copy = meta.clone();
        copy.add_charged_projectile(Some(&rocket())).unwrap();
        assert_ne!(meta, copy);
    }

    #[test]
    fn base_fields_take_part_in_equality() {
        let meta = setup();
        let mut copy = meta.clone();
        copy.base_mut().set_unbreakable(true);
        assert_ne!(meta, copy);
    }

    #[test]
    fn clone_does_not_share_item_stacks() {
        let mut meta = setup();
        let item = rocket();
        meta.add_charged_projectile(Some(&item)).unwrap();

        let copy = meta.clone();
        let from_copy = copy.charged_projectiles();
        assert_eq!(from_copy[0], item);
        assert!(!std::ptr::eq(&from_copy[0], &item));
        assert!(!std::ptr::eq(&from_copy[0], &meta.charged_projectiles()[0]));
    }

    #[test]
    fn from_meta_copies_base_only() {
        let mut base = ItemMeta::new();
        base.set_display_name(Some("Pillager's Crossbow"));
        base.set_damage(40).unwrap();

        let meta = CrossbowMeta::from_meta(&base);
        assert_eq!(meta.base(), &base);
        assert!(!meta.has_charged_projectiles());

        let owned: CrossbowMeta = base.into();
        assert_eq!(owned, meta);
    }
}
