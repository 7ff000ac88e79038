//! # Record Builders
//!
//! Pure construction of derived records from a (carrier, template) pair:
//! the generated magic weapon, its crafting recipe, and the unlock manual
//! that teaches the recipe. Nothing here touches the catalog; the driver
//! commits whatever these builders return.

use crate::catalog::{ItemDefinition, RecipeDefinition};
use crate::defaults;
use crate::generation::ident::derive_id;
use crate::generation::ingredients::build_ingredients;
use std::collections::HashSet;
use uuid::Uuid;

/// Derives one generated item and its crafting recipe from a carrier and
/// an enchantment template.
///
/// The item is a copy of `template_item` re-based onto the carrier: it
/// takes the carrier's weapon category and mechanics and the template's
/// magical stats and presentation, under the composed name
/// `"<carrier> of <display_key>"`. The recipe copies the template recipe's
/// craft parameters, filters its ingredients through the replaceable set,
/// and crafts the generated item. Both identifiers are derived from the
/// composed names, so the pair is reproducible.
pub fn build_record(
    carrier: &ItemDefinition,
    template_item: &ItemDefinition,
    template_recipe: &RecipeDefinition,
    display_key: &str,
    exclude: &HashSet<Uuid>,
    namespace: &Uuid,
) -> (ItemDefinition, RecipeDefinition) {
    let name = format!("{} of {}", carrier.name, display_key);
    let mut item = template_item.clone();
    item.id = derive_id(namespace, &name);
    item.gui.title = format!("{} of {}", carrier.gui.title, display_key);
    item.name = name;
    // Base weapon mechanics come from the carrier, not the template bow
    item.category = carrier.category;
    item.weapon_type = carrier.weapon_type.clone();

    let recipe_name = format!("{}{}", defaults::RECIPE_NAME_PREFIX, item.name);
    let recipe = RecipeDefinition {
        id: derive_id(namespace, &recipe_name),
        name: recipe_name,
        crafted_item: item.id,
        ingredients: build_ingredients(carrier.id, &template_recipe.ingredients, exclude),
        crafting_hours: template_recipe.crafting_hours,
        crafting_dc: template_recipe.crafting_dc,
        tool_type: template_recipe.tool_type.clone(),
    };

    (item, recipe)
}

/// Derives the unlock manual for a generated recipe.
///
/// The manual is a copy of `manual_template` renamed after the recipe,
/// priced at `gold_cost`, and wired to teach the recipe when acquired.
pub fn build_manual(
    manual_template: &ItemDefinition,
    recipe: &RecipeDefinition,
    namespace: &Uuid,
    gold_cost: u32,
) -> ItemDefinition {
    let name = format!("{}{}", defaults::MANUAL_NAME_PREFIX, recipe.name);
    let mut manual = manual_template.clone();
    manual.id = derive_id(namespace, &name);
    manual.name = name;
    manual.gold_cost = gold_cost;
    manual.teaches_recipe = Some(recipe.id);
    manual
}
