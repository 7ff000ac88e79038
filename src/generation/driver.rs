//! # Generation Driver
//!
//! Walks the full carriers × templates cross product, building and
//! committing one (item, recipe, manual) triple per pair. This is the
//! engine's single entry point; the host calls it once, after its catalog
//! has finished loading.

use crate::catalog::{Catalog, ItemDefinition, RecipeDefinition, StockUnit};
use crate::generation::builder::{build_manual, build_record};
use crate::generation::{GenerationConfig, GenerationSummary};
use crate::ArbalestResult;
use std::collections::HashSet;
use uuid::Uuid;

/// A resolved enchantment template: display key plus the catalog records
/// it references.
struct ResolvedTemplate {
    display_key: String,
    item: ItemDefinition,
    recipe: RecipeDefinition,
}

/// Runs generation against the catalog.
///
/// Resolves every configured name up front, then for each carrier and each
/// template (both in configured order) registers the derived item and
/// recipe, derives the recipe's unlock manual, and stocks the manual at
/// every configured vendor.
///
/// Any failure aborts the whole run; records committed before the failure
/// remain in the catalog. Empty carrier or template lists yield a zero
/// summary.
pub fn run(catalog: &mut Catalog, config: &GenerationConfig) -> ArbalestResult<GenerationSummary> {
    config.validate()?;

    // Resolve all configured names before mutating anything, so a bad
    // config name fails the run with the catalog untouched.
    let carriers: Vec<ItemDefinition> = config
        .carriers
        .iter()
        .map(|name| catalog.item_by_name(name).cloned())
        .collect::<ArbalestResult<_>>()?;

    let templates: Vec<ResolvedTemplate> = config
        .templates
        .iter()
        .map(|template| {
            Ok(ResolvedTemplate {
                display_key: template.display_key.clone(),
                item: catalog.item_by_name(&template.item)?.clone(),
                recipe: catalog.recipe_by_name(&template.recipe)?.clone(),
            })
        })
        .collect::<ArbalestResult<_>>()?;

    if carriers.is_empty() || templates.is_empty() {
        log::info!("no carriers or templates configured, nothing to generate");
        return Ok(GenerationSummary::default());
    }

    let exclude: HashSet<Uuid> = config
        .replaceable_ingredients
        .iter()
        .map(|name| catalog.item_by_name(name).map(|item| item.id))
        .collect::<ArbalestResult<_>>()?;

    let manual_template = catalog.item_by_name(&config.manual_template)?.clone();

    let vendors: Vec<Uuid> = config
        .vendors
        .iter()
        .map(|name| catalog.merchant_id_by_name(name))
        .collect::<ArbalestResult<_>>()?;

    let mut summary = GenerationSummary::default();

    for carrier in &carriers {
        for template in &templates {
            let (item, recipe) = build_record(
                carrier,
                &template.item,
                &template.recipe,
                &template.display_key,
                &exclude,
                &config.namespace,
            );
            log::debug!(
                "generated {} ({} ingredients, DC {})",
                recipe.name,
                recipe.ingredients.len(),
                recipe.crafting_dc
            );

            let manual = build_manual(
                &manual_template,
                &recipe,
                &config.namespace,
                config.manual_cost,
            );

            catalog.register(item, recipe)?;
            catalog.register_item(manual.clone())?;
            summary.items += 1;
            summary.recipes += 1;
            summary.manuals += 1;

            for vendor in &vendors {
                catalog.stock(*vendor, StockUnit::new(manual.id, config.stock_amounts))?;
                summary.stock_entries += 1;
            }
        }
    }

    log::info!(
        "generation complete: {} items, {} recipes, {} manuals, {} stock entries",
        summary.items,
        summary.recipes,
        summary.manuals,
        summary.stock_entries
    );

    Ok(summary)
}
