//! Integration tests driving generation end-to-end against a synthetic
//! catalog shaped like the game's crossbow-crafting content.

use arbalest::{
    generation, ArbalestResult, Catalog, GenerationConfig, GuiPresentation, Ingredient,
    ItemCategory, ItemDefinition, MerchantDefinition, RecipeDefinition,
};
use uuid::Uuid;

fn weapon(id: u128, name: &str, weapon_type: &str) -> ItemDefinition {
    let mut item = ItemDefinition::new(Uuid::from_u128(id), name.to_string(), ItemCategory::Weapon);
    item.weapon_type = Some(weapon_type.to_string());
    item
}

fn enchanted_bow(id: u128, name: &str, title: &str, weapon_type: &str) -> ItemDefinition {
    let mut item = weapon(id, name, weapon_type);
    item.magical = true;
    item.gui = GuiPresentation::new(title.to_string(), format!("{}.", title));
    item
}

fn template_recipe(
    id: u128,
    name: &str,
    crafted: u128,
    primed: u128,
    reagent: u128,
    dc: u32,
) -> RecipeDefinition {
    RecipeDefinition {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        crafted_item: Uuid::from_u128(crafted),
        ingredients: vec![
            Ingredient::new(Uuid::from_u128(primed), 1),
            Ingredient::new(Uuid::from_u128(reagent), 1),
        ],
        crafting_hours: 24,
        crafting_dc: dc,
        tool_type: "EnchantingTool".to_string(),
    }
}

/// A catalog carrying every record the built-in crossbow tables reference:
/// two crossbow carriers, the five enchanted bow templates and their
/// recipes, the primed bows, reagents, the manual template, and two stores.
fn crossbow_catalog() -> ArbalestResult<Catalog> {
    let mut catalog = Catalog::new();

    catalog.register_item(weapon(1, "LightCrossbow", "CrossbowType"))?;
    catalog.register_item(weapon(2, "HeavyCrossbow", "CrossbowType"))?;
    catalog.register_item(weapon(10, "Primed_Longbow", "LongbowType"))?;
    catalog.register_item(weapon(11, "Primed_Shortbow", "ShortbowType"))?;

    for (id, name) in [(12, "Gold"), (13, "Oil_Of_Accuracy"), (14, "Medusa_Coral")] {
        catalog.register_item(ItemDefinition::new(
            Uuid::from_u128(id),
            name.to_string(),
            ItemCategory::Ingredient,
        ))?;
    }

    let bows: [(u128, &str, &str, &str, u128, &str, u128, u128, u32); 5] = [
        (20, "Enchanted_Longbow_Of_Accuracy", "Longbow of Accuracy", "LongbowType",
         21, "Recipe_Enchantment_LongbowOfAccuracy", 10, 13, 10),
        (22, "Enchanted_Shortbow_Of_Sharpshooting", "Shortbow of Sharpshooting", "ShortbowType",
         23, "Recipe_Enchantment_ShortbowOfSharpshooting", 11, 12, 12),
        (24, "Enchanted_Longbow_Lightbringer", "Lightbringer Longbow", "LongbowType",
         25, "Recipe_Enchantment_LongbowLightbringer", 10, 12, 14),
        (26, "Enchanted_Longbow_Stormbow", "Stormbow", "LongbowType",
         27, "Recipe_Enchantment_LongbowStormbow", 10, 12, 16),
        (28, "Enchanted_Shortbow_Medusa", "Medusa Bow", "ShortbowType",
         29, "Recipe_Enchantment_ShortbowMedusa", 11, 14, 16),
    ];
    for (item_id, name, title, weapon_type, recipe_id, recipe_name, primed, reagent, dc) in bows {
        catalog.register_item(enchanted_bow(item_id, name, title, weapon_type))?;
        catalog.register_recipe(template_recipe(
            recipe_id, recipe_name, item_id, primed, reagent, dc,
        ))?;
    }

    catalog.register_item(ItemDefinition::new(
        Uuid::from_u128(30),
        "CraftingManual_Enchant_Longbow_Of_Accuracy".to_string(),
        ItemCategory::Document,
    ))?;

    catalog.register_merchant(MerchantDefinition::new(
        Uuid::from_u128(40),
        "Store_Merchant_Circe".to_string(),
    ))?;
    catalog.register_merchant(MerchantDefinition::new(
        Uuid::from_u128(41),
        "Store_Merchant_Gorim_Ironsoot_Cyflen_GeneralStore".to_string(),
    ))?;

    Ok(catalog)
}

#[test]
fn test_default_tables_full_cross_product() -> ArbalestResult<()> {
    let mut catalog = crossbow_catalog()?;
    let summary = generation::run(&mut catalog, &GenerationConfig::default())?;

    // 2 carriers x 5 templates, manuals at 2 vendors
    assert_eq!(summary.items, 10);
    assert_eq!(summary.recipes, 10);
    assert_eq!(summary.manuals, 10);
    assert_eq!(summary.stock_entries, 20);

    // Every combination exists under its composed name
    for carrier in ["LightCrossbow", "HeavyCrossbow"] {
        for key in ["Accuracy", "Sharpshooting", "Lightbringer", "Stormbow", "Medusa"] {
            let name = format!("{} of {}", carrier, key);
            let item = catalog.item_by_name(&name)?;
            assert!(item.magical);
            assert_eq!(item.weapon_type.as_deref(), Some("CrossbowType"));

            let recipe = catalog.recipe_by_name(&format!("RecipeEnchanting{}", name))?;
            assert_eq!(recipe.crafted_item, item.id);
        }
    }

    // Both stores carry all ten manuals
    for vendor in [
        "Store_Merchant_Circe",
        "Store_Merchant_Gorim_Ironsoot_Cyflen_GeneralStore",
    ] {
        let id = catalog.merchant_id_by_name(vendor)?;
        assert_eq!(catalog.merchant(id).unwrap().stock.len(), 10);
    }
    Ok(())
}

#[test]
fn test_primed_bows_replaced_by_carrier() -> ArbalestResult<()> {
    let mut catalog = crossbow_catalog()?;
    generation::run(&mut catalog, &GenerationConfig::default())?;

    let carrier_id = catalog.item_by_name("HeavyCrossbow")?.id;
    let recipe = catalog.recipe_by_name("RecipeEnchantingHeavyCrossbow of Accuracy")?;

    // Carrier replaces the primed longbow; the reagent survives in order
    let reagent_id = catalog.item_by_name("Oil_Of_Accuracy")?.id;
    assert_eq!(
        recipe.ingredients,
        vec![
            Ingredient::new(carrier_id, 1),
            Ingredient::new(reagent_id, 1),
        ]
    );

    // Craft parameters are copied verbatim from the template recipe
    assert_eq!(recipe.crafting_hours, 24);
    assert_eq!(recipe.crafting_dc, 10);
    assert_eq!(recipe.tool_type, "EnchantingTool");
    Ok(())
}

#[test]
fn test_manuals_teach_their_recipes() -> ArbalestResult<()> {
    let mut catalog = crossbow_catalog()?;
    generation::run(&mut catalog, &GenerationConfig::default())?;

    let recipe = catalog
        .recipe_by_name("RecipeEnchantingLightCrossbow of Medusa")?
        .clone();
    let manual =
        catalog.item_by_name("CraftingManual_RecipeEnchantingLightCrossbow of Medusa")?;

    assert_eq!(manual.teaches_recipe, Some(recipe.id));
    assert_eq!(manual.category, ItemCategory::Document);
    assert_eq!(manual.gold_cost, 200);
    Ok(())
}

#[test]
fn test_template_listing_carrier_keeps_both_lines() -> ArbalestResult<()> {
    // A template whose ingredient list already names the carrier: the
    // mandatory slot and the template line both survive, unmerged.
    let mut catalog = crossbow_catalog()?;
    let carrier_id = catalog.item_by_name("LightCrossbow")?.id;
    let gem_id = catalog.item_by_name("Gold")?.id;

    let odd = enchanted_bow(60, "Enchanted_SelfReferential", "Self Referential", "CrossbowType");
    catalog.register_item(odd)?;
    catalog.register_recipe(RecipeDefinition {
        id: Uuid::from_u128(61),
        name: "Recipe_SelfReferential".to_string(),
        crafted_item: Uuid::from_u128(60),
        ingredients: vec![
            Ingredient::new(carrier_id, 1),
            Ingredient::new(gem_id, 1),
        ],
        crafting_hours: 8,
        crafting_dc: 8,
        tool_type: "EnchantingTool".to_string(),
    })?;

    let mut config = GenerationConfig::default();
    config.carriers = vec!["LightCrossbow".to_string()];
    config.templates = vec![arbalest::EnchantmentTemplate::new(
        "Recursion",
        "Enchanted_SelfReferential",
        "Recipe_SelfReferential",
    )];
    config.replaceable_ingredients.clear();
    generation::run(&mut catalog, &config)?;

    let recipe = catalog.recipe_by_name("RecipeEnchantingLightCrossbow of Recursion")?;
    assert_eq!(
        recipe.ingredients,
        vec![
            Ingredient::new(carrier_id, 1),
            Ingredient::new(carrier_id, 1),
            Ingredient::new(gem_id, 1),
        ]
    );
    Ok(())
}

#[test]
fn test_catalog_file_roundtrip_then_generate() -> ArbalestResult<()> {
    // The CLI path: catalog serialized to disk, reloaded, then generated
    // against. Name indexes must survive the round trip.
    let catalog = crossbow_catalog()?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_string_pretty(&catalog)?)?;

    let mut reloaded: Catalog = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let summary = generation::run(&mut reloaded, &GenerationConfig::default())?;
    assert_eq!(summary.items, 10);

    // Identifiers are derived from names, so the reloaded catalog yields
    // the same records a direct run does.
    let mut direct = crossbow_catalog()?;
    generation::run(&mut direct, &GenerationConfig::default())?;
    assert_eq!(
        reloaded.item_by_name("LightCrossbow of Stormbow")?,
        direct.item_by_name("LightCrossbow of Stormbow")?
    );
    Ok(())
}
