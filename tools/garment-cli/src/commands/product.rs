//! Product page: details, cascading variant selection and add to cart.

use anyhow::{Context as _, Result};
use garment_commerce::catalog::{Catalog, Product};
use garment_commerce::ids::ProductId;
use garment_commerce::variant::VariantSelection;
use garment_commerce::{Currency, Money};
use serde_json::json;

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(&ProductId::new(args.id.as_str()))?;

    let mut selection = VariantSelection::new();
    if let Some(color) = &args.color {
        selection.select_color(color.as_str());
    }
    if let Some(size) = &args.size {
        if !selection.select_size(size.as_str()) {
            ctx.output.warn("Choose a color before a size; --size ignored");
        }
    }
    if let Some(material) = &args.material {
        if !selection.select_material(material.as_str()) {
            ctx.output.warn("Choose a size before a material; --material ignored");
        }
    }

    if let Some(units) = args.add {
        return add_to_cart(ctx, &catalog, product, &selection, units);
    }

    show(ctx, product, &selection, catalog.currency);
    Ok(())
}

fn show(
    ctx: &Context,
    product: &Product,
    selection: &VariantSelection,
    currency: Currency,
) {
    let variants = &product.variants;
    let resolved = selection.resolve(variants).ok();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "selection": {
                "color": selection.color(),
                "size": selection.size(),
                "material": selection.material(),
                "stage": selection.stage(variants).as_str(),
            },
            "options": {
                "colors": selection.colors(variants),
                "sizes": selection.sizes(variants),
                "materials": selection.materials(variants),
            },
            "variant": resolved.map(|r| json!({ "sku": r.variant.sku, "implicit": r.implicit })),
        }));
        return;
    }

    ctx.output.header(&product.name);
    ctx.output.kv("category", &product.category);
    ctx.output
        .kv("price", &Money::new(product.price, currency).display());
    ctx.output.kv("image", product.display_image());
    for paragraph in product.paragraphs() {
        println!("\n  {}", paragraph);
    }

    if !product.has_variants() {
        ctx.output.info("This product has no variants; add it with `garment cart add`");
        return;
    }

    println!();
    ctx.output.kv("colors", &options(&selection.colors(variants), selection.color()));
    if selection.color().is_some() {
        ctx.output.kv("sizes", &options(&selection.sizes(variants), selection.size()));
    }
    if selection.size().is_some() {
        ctx.output.kv(
            "materials",
            &options(&selection.materials(variants), selection.material()),
        );
    }

    match selection.resolve(variants) {
        Ok(resolved) if resolved.implicit => ctx.output.success(&format!(
            "SKU {} ({}, default material)",
            resolved.variant.sku,
            resolved.variant.label()
        )),
        Ok(resolved) => ctx.output.success(&format!(
            "SKU {} ({})",
            resolved.variant.sku,
            resolved.variant.label()
        )),
        Err(e) => ctx.output.info(&format!("{}", e)),
    }
}

/// Option list with the current choice in brackets.
fn options(values: &[&str], chosen: Option<&str>) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .map(|v| {
            if Some(*v) == chosen {
                format!("[{}]", v)
            } else {
                v.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn add_to_cart(
    ctx: &Context,
    catalog: &Catalog,
    product: &Product,
    selection: &VariantSelection,
    units: i64,
) -> Result<()> {
    let resolved = selection
        .resolve(&product.variants)
        .with_context(|| format!("Cannot add {} to the cart", product.name))?;

    let mut session = ctx.load_session(catalog)?;
    let logger = ctx.logger(&session, "cart");

    session
        .cart
        .add_units(product.variant_candidate(resolved.variant), units);
    ctx.save_session(&mut session)?;

    logger
        .info_builder("variant added")
        .field("sku", resolved.variant.sku.as_str())
        .field_i64("units", units)
        .field_bool("implicit_material", resolved.implicit)
        .field_i64("cart_units", session.cart.item_count())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&session.cart);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Added {} × {} ({}) to cart",
        units,
        product.name,
        resolved.variant.label()
    ));
    ctx.output.kv(
        "cart",
        &format!(
            "{} items, {}",
            session.cart.item_count(),
            session.cart.total().display()
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_marks_choice() {
        assert_eq!(options(&["S", "M", "L"], Some("M")), "S [M] L");
        assert_eq!(options(&["S"], None), "S");
        assert_eq!(options(&[], None), "none");
    }
}
