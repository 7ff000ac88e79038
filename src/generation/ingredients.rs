//! # Ingredient List Assembly
//!
//! Builds the ingredient list for a derived recipe: the carrier comes
//! first as the mandatory vessel, followed by the template's ingredients
//! with the replaceable (generic-carrier placeholder) items dropped.

use crate::catalog::Ingredient;
use std::collections::HashSet;
use uuid::Uuid;

/// Assembles a derived recipe's ingredient list.
///
/// The carrier is the mandatory first entry with amount 1. Template
/// ingredients follow in their original order, skipping any whose item is
/// in `exclude`. No quantities are merged and nothing is deduplicated
/// against the carrier slot: a template line equal to the carrier is
/// copied verbatim as a separate entry. Order is the host UI's display
/// order and must be preserved.
pub fn build_ingredients(
    carrier: Uuid,
    template_ingredients: &[Ingredient],
    exclude: &HashSet<Uuid>,
) -> Vec<Ingredient> {
    let mut ingredients = Vec::with_capacity(template_ingredients.len() + 1);
    ingredients.push(Ingredient::new(carrier, 1));

    for ingredient in template_ingredients {
        if exclude.contains(&ingredient.item) {
            continue;
        }
        ingredients.push(*ingredient);
    }

    ingredients
}
