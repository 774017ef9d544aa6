//! Browse the catalog.

use anyhow::{bail, Result};
use garment_commerce::catalog::CatalogQuery;
use garment_commerce::Money;

use super::ShopArgs;
use crate::context::Context;

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if args.categories {
        let categories = catalog.categories();
        if ctx.output.is_json() {
            ctx.output.json(&categories);
            return Ok(());
        }
        ctx.output.header("Categories");
        for category in categories {
            ctx.output.list_item(category);
        }
        return Ok(());
    }

    if let Some(category) = &args.category {
        if !catalog.categories().contains(&category.as_str()) {
            bail!(
                "Unknown category '{}'. Available: {}",
                category,
                catalog.categories().join(", ")
            );
        }
    }

    let mut query = CatalogQuery::new().with_sort(args.sort);
    if let Some(category) = args.category {
        query = query.with_category(category);
    }
    let products = catalog.browse(&query);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = match &query.category {
        Some(category) => format!("{} ({})", category, args.sort.display_name()),
        None => format!("All Products ({})", args.sort.display_name()),
    };
    ctx.output.header(&title);
    ctx.output
        .info(&format!("Showing {} of {} products", products.len(), catalog.len()));

    let widths = [4, 22, 14, 10];
    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &widths);
    for product in products {
        let price = Money::new(product.price, catalog.currency).display();
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.category,
                &price,
            ],
            &widths,
        );
    }

    Ok(())
}
