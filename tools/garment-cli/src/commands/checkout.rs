//! Checkout: review, payment, confirmation.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use chrono::Utc;
use garment_commerce::checkout::{
    CardDetails, CheckoutFlow, CheckoutStep, PaymentMethod, ShippingDetails,
};
use garment_commerce::session::SessionState;

use super::{CheckoutArgs, PaymentChoice};
use crate::commands::{cart, receipt};
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = ctx.load_session(&catalog)?;
    let logger = ctx.logger(&session, "checkout");

    if session.cart.is_empty() {
        bail!("Your cart is empty. Add something with `garment cart add` or `garment product`.");
    }

    let mut flow = CheckoutFlow::new(ctx.config.checkout.shipping_fee);

    // Step 1: review
    ctx.output.header("Checkout");
    ctx.output.checkout_steps(flow.step);
    let summary = flow.summary(&session.cart);
    if !ctx.output.is_json() {
        cart::print_summary(ctx, &summary);
    }

    if args.review {
        if ctx.output.is_json() {
            ctx.output.json(&summary);
        }
        return Ok(());
    }

    let details = shipping_details(&args, &session);
    flow.proceed_to_payment(&session.cart, details)?;
    logger
        .info_builder("shipping details accepted")
        .field("step", flow.step.as_str())
        .field_i64("grand_total", summary.grand_total.amount)
        .emit();

    // Step 2: payment
    ctx.output.checkout_steps(flow.step);
    let method = payment_method(&args);
    flow.submit_payment(method)?;

    let started = Instant::now();
    let spinner = ctx.output.spinner("Processing payment...");
    tokio::time::sleep(Duration::from_millis(ctx.config.checkout.payment_delay_ms)).await;
    spinner.finish_and_clear();

    // Step 3: confirmation
    let confirmation = flow.complete(&mut session.cart, Utc::now())?.clone();
    session.last_order = Some(confirmation.clone());
    ctx.save_session(&mut session)?;

    logger
        .info_builder("order placed")
        .field("order_id", confirmation.order_id.as_str())
        .field("payment", confirmation.payment.as_str())
        .field_i64("grand_total", confirmation.summary.grand_total.amount)
        .duration_ms("processing_ms", started.elapsed())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.checkout_steps(CheckoutStep::Success);
    ctx.output.success("Order placed");
    receipt::print(ctx, &confirmation);
    Ok(())
}

/// Shipping form from flags; the email falls back to the signed-in user's.
fn shipping_details(args: &CheckoutArgs, session: &SessionState) -> ShippingDetails {
    let email = args
        .email
        .clone()
        .or_else(|| session.user.as_ref().map(|u| u.email.clone()))
        .unwrap_or_default();

    ShippingDetails {
        name: args.name.clone().unwrap_or_default(),
        email,
        phone: args.phone.clone().unwrap_or_default(),
        address: args.address.clone().unwrap_or_default(),
        city: args.city.clone().unwrap_or_default(),
        state: args.state.clone().unwrap_or_default(),
        pincode: args.pincode.clone().unwrap_or_default(),
    }
}

fn payment_method(args: &CheckoutArgs) -> PaymentMethod {
    match args.method {
        PaymentChoice::Gateway => PaymentMethod::Gateway,
        PaymentChoice::Card => PaymentMethod::Card(CardDetails::new(
            args.card_number.as_deref().unwrap_or_default(),
            args.card_name.clone().unwrap_or_default(),
            args.expiry.as_deref().unwrap_or_default(),
            args.cvv.as_deref().unwrap_or_default(),
        )),
    }
}
