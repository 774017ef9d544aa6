//! Cart page.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use garment_commerce::cart::{CartStore, OrderSummary};
use garment_commerce::ids::{ItemId, ProductId};

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = ctx.load_session(&catalog)?;
    let logger = ctx.logger(&session, "cart");

    let command = args.command.unwrap_or(CartCommand::Show);
    let changed = match command {
        CartCommand::Show => false,
        CartCommand::Add {
            product_id,
            quantity,
        } => {
            let product = catalog.require(&ProductId::new(product_id))?;
            session.cart.add_units(product.catalog_candidate(), quantity);
            logger
                .info_builder("item added")
                .field("item_id", product.id.as_str())
                .field_i64("units", quantity)
                .emit();
            ctx.output.success(&format!("Added {} to cart", product.name));
            true
        }
        CartCommand::Remove { id } => {
            let id = require_line(&session.cart, id)?;
            session.cart.remove_item(&id);
            logger.info_builder("item removed").field("item_id", id.as_str()).emit();
            ctx.output.success(&format!("Removed {}", id));
            true
        }
        CartCommand::Update { id, quantity } => {
            let id = require_line(&session.cart, id)?;
            session.cart.update_quantity(&id, quantity);
            logger
                .info_builder("quantity updated")
                .field("item_id", id.as_str())
                .field_i64("quantity", quantity)
                .emit();
            if quantity <= 0 {
                ctx.output.success(&format!("Removed {}", id));
            } else {
                ctx.output.success(&format!("Set {} to {}", id, quantity));
            }
            true
        }
        CartCommand::Inc { id } => {
            let id = require_line(&session.cart, id)?;
            session.cart.increment(&id);
            logger.debug_builder("quantity incremented").field("item_id", id.as_str()).emit();
            true
        }
        CartCommand::Dec { id } => {
            let id = require_line(&session.cart, id)?;
            session.cart.decrement(&id);
            logger.debug_builder("quantity decremented").field("item_id", id.as_str()).emit();
            if session.cart.get(&id).is_none() {
                ctx.output.success(&format!("Removed {}", id));
            }
            true
        }
        CartCommand::Clear { yes } => {
            if session.cart.is_empty() {
                ctx.output.info("Cart is already empty");
                false
            } else {
                if !yes && !ctx.output.is_json() {
                    let confirmed = Confirm::new()
                        .with_prompt(format!(
                            "Remove all {} items from the cart?",
                            session.cart.item_count()
                        ))
                        .default(false)
                        .interact()?;

                    if !confirmed {
                        ctx.output.warn("Clear cancelled");
                        return Ok(());
                    }
                }
                let lines = session.cart.unique_item_count();
                session.cart.clear();
                logger
                    .warn_builder("cart cleared")
                    .field_i64("lines", lines as i64)
                    .emit();
                true
            }
        }
    };

    if changed {
        ctx.save_session(&mut session)?;
    }

    show(ctx, &session.cart, ctx.config.checkout.shipping_fee);
    Ok(())
}

/// Resolve a line id, failing with the ids that do exist.
fn require_line(cart: &CartStore, id: String) -> Result<ItemId> {
    let id = ItemId::new(id);
    if cart.get(&id).is_none() {
        let known: Vec<&str> = cart.lines().iter().map(|item| item.id.as_str()).collect();
        if known.is_empty() {
            bail!("No line '{}': the cart is empty", id);
        }
        bail!("No line '{}' in the cart. Lines: {}", id, known.join(", "));
    }
    Ok(id)
}

/// Print the cart with its order summary.
pub fn show(ctx: &Context, cart: &CartStore, shipping_fee: i64) {
    let summary = OrderSummary::for_cart(cart, shipping_fee);

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return;
    }

    ctx.output.header("Shopping Cart");
    if summary.is_empty() {
        ctx.output.info("Your cart is empty. Browse with `garment shop`.");
        return;
    }

    print_summary(ctx, &summary);
}

/// Line table plus subtotal, shipping and total.
pub fn print_summary(ctx: &Context, summary: &OrderSummary) {
    let widths = [16, 22, 5, 10, 10];
    ctx.output
        .table_row(&["ID", "NAME", "QTY", "PRICE", "SUBTOTAL"], &widths);
    for line in &summary.lines {
        let quantity = line.quantity.to_string();
        let unit_price = line.unit_price.display();
        let subtotal = line.subtotal.display();
        ctx.output.table_row(
            &[line.id.as_str(), &line.name, &quantity, &unit_price, &subtotal],
            &widths,
        );
    }

    println!();
    ctx.output
        .kv("items", &summary.item_count.to_string());
    ctx.output.kv("subtotal", &summary.subtotal.display());
    ctx.output.kv("shipping", &summary.shipping.display());
    ctx.output.kv("total", &summary.grand_total.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use garment_commerce::cart::CartCandidate;
    use garment_commerce::Currency;

    #[test]
    fn test_require_line() {
        let mut cart = CartStore::new(Currency::INR);
        assert!(require_line(&cart, "p1".to_string()).is_err());

        cart.add_item(CartCandidate::new("p1", "Shirt", 500, "Shirt"));
        assert_eq!(require_line(&cart, "p1".to_string()).unwrap().as_str(), "p1");

        let err = require_line(&cart, "p2".to_string()).unwrap_err();
        assert!(err.to_string().contains("Lines: p1"));
    }
}
