//! # Generation Module
//!
//! The generative combination engine: derives one new item and one new
//! recipe per (carrier, enchantment template) pair, plus a purchasable
//! unlock manual per recipe.
//!
//! Derivation is fully deterministic. Identifiers come from name-based
//! hashing under a fixed namespace ([`ident`]), ingredient lists are
//! assembled with conflict-free substitution rules ([`ingredients`]),
//! records are built by pure functions ([`builder`]), and the cross
//! product is walked once by the driver ([`driver`]), which commits the
//! results to the catalog.

pub mod builder;
pub mod driver;
pub mod ident;
pub mod ingredients;

pub use builder::*;
pub use driver::*;
pub use ident::*;
pub use ingredients::*;

use crate::catalog::StockAmounts;
use crate::defaults;
use crate::{ArbalestError, ArbalestResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An enchantment to re-derive onto each carrier.
///
/// References an existing (item, recipe) pair in the catalog by symbolic
/// name; the pair supplies the magical stats, presentation, ingredient
/// list, and craft parameters the derived records copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentTemplate {
    /// Display key composed into generated names (e.g. "Accuracy")
    pub display_key: String,
    /// Symbolic name of the template's enchanted item
    pub item: String,
    /// Symbolic name of the template's crafting recipe
    pub recipe: String,
}

impl EnchantmentTemplate {
    /// Creates a template reference.
    pub fn new(display_key: &str, item: &str, recipe: &str) -> Self {
        Self {
            display_key: display_key.to_string(),
            item: item.to_string(),
            recipe: recipe.to_string(),
        }
    }
}

/// Configuration for a generation run.
///
/// All record references are symbolic names resolved against the catalog
/// when the driver starts. Carrier and template order is preserved through
/// generation (it only affects log ordering, not final catalog contents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Namespace for all derived identifiers
    pub namespace: Uuid,
    /// Base items to re-derive each enchantment onto
    pub carriers: Vec<String>,
    /// Enchantments to re-derive
    pub templates: Vec<EnchantmentTemplate>,
    /// Items dropped from template ingredient lists when copied; these are
    /// generic-carrier placeholders superseded by the carrier itself
    pub replaceable_ingredients: Vec<String>,
    /// Item copied to produce each recipe's unlock manual
    pub manual_template: String,
    /// Merchants that stock every generated manual
    pub vendors: Vec<String>,
    /// Restock parameters for manual stock entries
    pub stock_amounts: StockAmounts,
    /// Gold cost of each generated manual
    pub manual_cost: u32,
}

impl GenerationConfig {
    /// Creates an empty configuration under the given namespace.
    ///
    /// Empty carrier or template lists make generation an intentional
    /// no-op, not an error.
    pub fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            carriers: Vec::new(),
            templates: Vec::new(),
            replaceable_ingredients: Vec::new(),
            manual_template: String::new(),
            vendors: Vec::new(),
            stock_amounts: StockAmounts::default(),
            manual_cost: defaults::DEFAULT_MANUAL_COST,
        }
    }

    /// The crossbow crafting tables: re-derives the known enchanted bow
    /// variants onto the two crossbow carriers and sells the manuals at
    /// the two stores that stock crafting supplies.
    pub fn crossbow_crafting() -> Self {
        Self {
            namespace: defaults::GENERATION_NAMESPACE,
            carriers: vec!["LightCrossbow".to_string(), "HeavyCrossbow".to_string()],
            templates: vec![
                // Same as +1
                EnchantmentTemplate::new(
                    "Accuracy",
                    "Enchanted_Longbow_Of_Accuracy",
                    "Recipe_Enchantment_LongbowOfAccuracy",
                ),
                // Same as +2
                EnchantmentTemplate::new(
                    "Sharpshooting",
                    "Enchanted_Shortbow_Of_Sharpshooting",
                    "Recipe_Enchantment_ShortbowOfSharpshooting",
                ),
                EnchantmentTemplate::new(
                    "Lightbringer",
                    "Enchanted_Longbow_Lightbringer",
                    "Recipe_Enchantment_LongbowLightbringer",
                ),
                EnchantmentTemplate::new(
                    "Stormbow",
                    "Enchanted_Longbow_Stormbow",
                    "Recipe_Enchantment_LongbowStormbow",
                ),
                EnchantmentTemplate::new(
                    "Medusa",
                    "Enchanted_Shortbow_Medusa",
                    "Recipe_Enchantment_ShortbowMedusa",
                ),
            ],
            replaceable_ingredients: vec![
                "Primed_Longbow".to_string(),
                "Primed_Shortbow".to_string(),
            ],
            manual_template: "CraftingManual_Enchant_Longbow_Of_Accuracy".to_string(),
            vendors: vec![
                "Store_Merchant_Circe".to_string(),
                "Store_Merchant_Gorim_Ironsoot_Cyflen_GeneralStore".to_string(),
            ],
            stock_amounts: StockAmounts::default(),
            manual_cost: defaults::DEFAULT_MANUAL_COST,
        }
    }

    /// Validates the configuration for internal consistency.
    ///
    /// Empty lists are allowed (they yield zero generated records);
    /// duplicate entries are not, since revisiting a (carrier, template)
    /// pair would collide on registration.
    pub fn validate(&self) -> ArbalestResult<()> {
        let mut seen = std::collections::HashSet::new();
        for carrier in &self.carriers {
            if carrier.is_empty() {
                return Err(ArbalestError::InvalidConfig(
                    "empty carrier name".to_string(),
                ));
            }
            if !seen.insert(carrier.as_str()) {
                return Err(ArbalestError::InvalidConfig(format!(
                    "duplicate carrier {}",
                    carrier
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for template in &self.templates {
            if template.display_key.is_empty() {
                return Err(ArbalestError::InvalidConfig(format!(
                    "template {} has an empty display key",
                    template.item
                )));
            }
            if !seen.insert(template.display_key.as_str()) {
                return Err(ArbalestError::InvalidConfig(format!(
                    "duplicate template {}",
                    template.display_key
                )));
            }
        }

        if !self.templates.is_empty() && self.manual_template.is_empty() {
            return Err(ArbalestError::InvalidConfig(
                "no manual template configured".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::crossbow_crafting()
    }
}

/// Totals produced by a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Generated items registered with the catalog
    pub items: usize,
    /// Generated recipes registered with the catalog
    pub recipes: usize,
    /// Unlock manuals registered with the catalog
    pub manuals: usize,
    /// Stock entries appended to vendor inventories
    pub stock_entries: usize,
}
