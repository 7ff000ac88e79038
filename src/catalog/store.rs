//! # Catalog Store
//!
//! The [`Catalog`] holds every item, recipe, and merchant definition known
//! to the host, keyed by identifier with symbolic-name indexes for lookup.
//! Generation resolves its configured names through these lookups and
//! commits derived records through `register_*` and `stock`.

use crate::catalog::definitions::{
    ItemDefinition, MerchantDefinition, RecipeDefinition, StockUnit,
};
use crate::{ArbalestError, ArbalestResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory content database.
///
/// Registration is append-only: records are never mutated or removed once
/// committed, and identifier collisions are rejected. Vendor stock is a
/// plain list; stocking the same item twice at the same merchant yields two
/// entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: HashMap<Uuid, ItemDefinition>,
    recipes: HashMap<Uuid, RecipeDefinition>,
    merchants: HashMap<Uuid, MerchantDefinition>,
    item_names: HashMap<String, Uuid>,
    recipe_names: HashMap<String, Uuid>,
    merchant_names: HashMap<String, Uuid>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item definition, keyed by its identifier.
    ///
    /// Fails with [`ArbalestError::DuplicateId`] if an item with the same
    /// identifier is already registered.
    pub fn register_item(&mut self, item: ItemDefinition) -> ArbalestResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(ArbalestError::DuplicateId(format!(
                "item {} ({})",
                item.name, item.id
            )));
        }
        self.item_names.insert(item.name.clone(), item.id);
        self.items.insert(item.id, item);
        Ok(())
    }

    /// Registers a recipe definition, keyed by its identifier.
    ///
    /// Fails with [`ArbalestError::DuplicateId`] if a recipe with the same
    /// identifier is already registered.
    pub fn register_recipe(&mut self, recipe: RecipeDefinition) -> ArbalestResult<()> {
        if self.recipes.contains_key(&recipe.id) {
            return Err(ArbalestError::DuplicateId(format!(
                "recipe {} ({})",
                recipe.name, recipe.id
            )));
        }
        self.recipe_names.insert(recipe.name.clone(), recipe.id);
        self.recipes.insert(recipe.id, recipe);
        Ok(())
    }

    /// Commits a generated (item, recipe) pair in one step.
    pub fn register(
        &mut self,
        item: ItemDefinition,
        recipe: RecipeDefinition,
    ) -> ArbalestResult<()> {
        self.register_item(item)?;
        self.register_recipe(recipe)
    }

    /// Registers a merchant definition.
    pub fn register_merchant(&mut self, merchant: MerchantDefinition) -> ArbalestResult<()> {
        if self.merchants.contains_key(&merchant.id) {
            return Err(ArbalestError::DuplicateId(format!(
                "merchant {} ({})",
                merchant.name, merchant.id
            )));
        }
        self.merchant_names.insert(merchant.name.clone(), merchant.id);
        self.merchants.insert(merchant.id, merchant);
        Ok(())
    }

    /// Appends a stock entry to a merchant's inventory.
    ///
    /// No uniqueness check is performed: stocking the same item twice
    /// appends two entries.
    pub fn stock(&mut self, merchant: Uuid, unit: StockUnit) -> ArbalestResult<()> {
        let merchant = self
            .merchants
            .get_mut(&merchant)
            .ok_or_else(|| ArbalestError::NotFound(format!("merchant {}", merchant)))?;
        merchant.stock.push(unit);
        Ok(())
    }

    /// Looks up an item by identifier.
    pub fn item(&self, id: Uuid) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }

    /// Looks up a recipe by identifier.
    pub fn recipe(&self, id: Uuid) -> Option<&RecipeDefinition> {
        self.recipes.get(&id)
    }

    /// Looks up a merchant by identifier.
    pub fn merchant(&self, id: Uuid) -> Option<&MerchantDefinition> {
        self.merchants.get(&id)
    }

    /// Looks up an item by symbolic name.
    pub fn item_by_name(&self, name: &str) -> ArbalestResult<&ItemDefinition> {
        self.item_names
            .get(name)
            .and_then(|id| self.items.get(id))
            .ok_or_else(|| ArbalestError::NotFound(format!("item {}", name)))
    }

    /// Looks up a recipe by symbolic name.
    pub fn recipe_by_name(&self, name: &str) -> ArbalestResult<&RecipeDefinition> {
        self.recipe_names
            .get(name)
            .and_then(|id| self.recipes.get(id))
            .ok_or_else(|| ArbalestError::NotFound(format!("recipe {}", name)))
    }

    /// Looks up a merchant's identifier by symbolic name.
    pub fn merchant_id_by_name(&self, name: &str) -> ArbalestResult<Uuid> {
        self.merchant_names
            .get(name)
            .copied()
            .ok_or_else(|| ArbalestError::NotFound(format!("merchant {}", name)))
    }

    /// Number of registered items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of registered recipes.
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Number of registered merchants.
    pub fn merchant_count(&self) -> usize {
        self.merchants.len()
    }
}
