//! # Content Record Definitions
//!
//! Plain-data record types for the content catalog: items, recipes,
//! merchants, and vendor stock entries. These mirror the host game's
//! definitions closely enough for generation to copy and re-derive them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Broad classification of an item record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// A wieldable weapon (carriers and enchanted variants)
    Weapon,
    /// Ammunition for a ranged weapon
    Ammunition,
    /// A crafting ingredient
    Ingredient,
    /// A readable document, such as a crafting manual
    Document,
}

/// Display strings shown by the host's UI for a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuiPresentation {
    /// Display title
    pub title: String,
    /// Flavor/description text
    pub description: String,
}

impl GuiPresentation {
    /// Creates a presentation with the given title and description.
    pub fn new(title: String, description: String) -> Self {
        Self { title, description }
    }
}

/// An item record in the content catalog.
///
/// Carriers, enchantment-template items, generated items, and unlock
/// manuals are all `ItemDefinition`s; manuals are the only ones with
/// `teaches_recipe` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: Uuid,
    /// Symbolic name, unique within the catalog (e.g. "LightCrossbow")
    pub name: String,
    /// Display strings
    pub gui: GuiPresentation,
    /// Broad classification
    pub category: ItemCategory,
    /// Weapon mechanics family, if this item is a weapon
    /// (e.g. "CrossbowType")
    pub weapon_type: Option<String>,
    /// Whether the item carries a magical enchantment
    pub magical: bool,
    /// Purchase price in gold
    pub gold_cost: u32,
    /// Recipe unlocked by owning this item (crafting manuals only)
    pub teaches_recipe: Option<Uuid>,
}

impl ItemDefinition {
    /// Creates a new item with defaulted presentation and no weapon or
    /// manual properties.
    pub fn new(id: Uuid, name: String, category: ItemCategory) -> Self {
        Self {
            id,
            gui: GuiPresentation::new(name.clone(), String::new()),
            name,
            category,
            weapon_type: None,
            magical: false,
            gold_cost: 0,
            teaches_recipe: None,
        }
    }
}

/// A single required ingredient line in a recipe.
///
/// # Examples
///
/// ```
/// use arbalest::Ingredient;
/// use uuid::Uuid;
///
/// let gem = Uuid::from_u128(42);
/// let line = Ingredient::new(gem, 2);
/// assert_eq!(line.item, gem);
/// assert_eq!(line.amount, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// The required item
    pub item: Uuid,
    /// How many of it the recipe consumes
    pub amount: u32,
}

impl Ingredient {
    /// Creates an ingredient line.
    pub fn new(item: Uuid, amount: u32) -> Self {
        Self { item, amount }
    }
}

/// A crafting recipe record.
///
/// Ingredient order is significant: it is the display order in the host's
/// crafting UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDefinition {
    /// Unique identifier
    pub id: Uuid,
    /// Symbolic name, unique within the catalog
    pub name: String,
    /// The item this recipe produces
    pub crafted_item: Uuid,
    /// Required ingredients, in display order
    pub ingredients: Vec<Ingredient>,
    /// Time to craft, in hours
    pub crafting_hours: u32,
    /// Difficulty class of the crafting skill check
    pub crafting_dc: u32,
    /// Tool proficiency required to attempt the craft
    /// (e.g. "EnchantingTool")
    pub tool_type: String,
}

impl RecipeDefinition {
    /// Creates a recipe with no ingredients and defaulted craft parameters.
    pub fn new(id: Uuid, name: String, crafted_item: Uuid) -> Self {
        Self {
            id,
            name,
            crafted_item,
            ingredients: Vec::new(),
            crafting_hours: 0,
            crafting_dc: 0,
            tool_type: String::new(),
        }
    }
}

/// Restock parameters for a vendor stock entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAmounts {
    /// Quantity available when the vendor is first visited
    pub initial: u32,
    /// Minimum quantity the vendor restocks up from
    pub min: u32,
    /// Maximum quantity the vendor holds
    pub max: u32,
    /// Units per displayed stack
    pub stack: u32,
    /// Quantity added per restock cycle
    pub restock: u32,
}

impl Default for StockAmounts {
    fn default() -> Self {
        Self {
            initial: 1,
            min: 1,
            max: 2,
            stack: 1,
            restock: 1,
        }
    }
}

/// One line of a merchant's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUnit {
    /// The item for sale
    pub item: Uuid,
    /// Quantity available when the vendor is first visited
    pub initial_amount: u32,
    /// Whether the entry starts active
    pub initialized: bool,
    /// Minimum quantity the vendor restocks up from
    pub min_amount: u32,
    /// Maximum quantity the vendor holds
    pub max_amount: u32,
    /// Units per displayed stack
    pub stack_count: u32,
    /// Quantity added per restock cycle
    pub restock_amount: u32,
}

impl StockUnit {
    /// Creates an initialized stock entry for `item` with the given amounts.
    pub fn new(item: Uuid, amounts: StockAmounts) -> Self {
        Self {
            item,
            initial_amount: amounts.initial,
            initialized: true,
            min_amount: amounts.min,
            max_amount: amounts.max,
            stack_count: amounts.stack,
            restock_amount: amounts.restock,
        }
    }
}

/// A merchant (vendor) record with its inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantDefinition {
    /// Unique identifier
    pub id: Uuid,
    /// Symbolic name, unique within the catalog
    pub name: String,
    /// Inventory lines, in append order
    pub stock: Vec<StockUnit>,
}

impl MerchantDefinition {
    /// Creates a merchant with an empty inventory.
    pub fn new(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            stock: Vec::new(),
        }
    }
}
