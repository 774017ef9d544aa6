//! Last order receipt.

use anyhow::Result;
use garment_commerce::checkout::OrderConfirmation;

use crate::commands::cart;
use crate::context::Context;

/// Run the receipt command.
pub async fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let session = ctx.load_session(&catalog)?;

    match &session.last_order {
        Some(confirmation) if ctx.output.is_json() => ctx.output.json(confirmation),
        Some(confirmation) => {
            ctx.output.header("Last Order");
            print(ctx, confirmation);
        }
        None if ctx.output.is_json() => ctx.output.json(&serde_json::Value::Null),
        None => ctx.output.info("No orders placed in this session"),
    }

    Ok(())
}

/// Print an order confirmation.
pub fn print(ctx: &Context, confirmation: &OrderConfirmation) {
    ctx.output.kv("order", confirmation.order_id.as_str());
    ctx.output.kv(
        "placed",
        &confirmation.placed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    ctx.output.kv("ship to", &confirmation.shipping.one_line());
    ctx.output.kv("email", &confirmation.shipping.email);
    ctx.output.kv("paid by", &confirmation.payment);
    println!();
    cart::print_summary(ctx, &confirmation.summary);
}
