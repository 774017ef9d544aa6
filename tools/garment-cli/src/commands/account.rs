//! Simulated sign-in, sign-out and the current user.

use std::time::Duration;

use anyhow::Result;
use garment_commerce::account::Credentials;

use super::LoginArgs;
use crate::context::Context;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = ctx.load_session(&catalog)?;
    let logger = ctx.logger(&session, "account");

    let credentials = Credentials::new(args.email, args.password);
    if let Err(e) = credentials.validate() {
        logger.warn_builder("sign-in rejected").field("reason", e.to_string()).emit();
        return Err(e.into());
    }

    let spinner = ctx.output.spinner("Signing in...");
    tokio::time::sleep(Duration::from_millis(ctx.config.account.login_delay_ms)).await;
    spinner.finish_and_clear();

    let user = credentials.sign_in()?;
    if let Some(previous) = &session.user {
        ctx.output
            .debug(&format!("Replacing signed-in user {}", previous.email));
    }
    session.sign_in(user.clone());
    ctx.save_session(&mut session)?;

    logger.info_builder("signed in").field("email", user.email.as_str()).emit();

    if ctx.output.is_json() {
        ctx.output.json(&user);
    } else {
        ctx.output.success(&format!("Welcome, {}", user.name));
    }
    Ok(())
}

/// Run the logout command. The cart is kept.
pub async fn logout(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = ctx.load_session(&catalog)?;
    let logger = ctx.logger(&session, "account");

    match session.sign_out() {
        Some(user) => {
            ctx.save_session(&mut session)?;
            logger.info_builder("signed out").field("email", user.email.as_str()).emit();
            ctx.output.success(&format!("Signed out {}", user.email));
        }
        None => ctx.output.info("Not signed in"),
    }
    Ok(())
}

/// Run the whoami command.
pub async fn whoami(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let session = ctx.load_session(&catalog)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "session": session.id,
            "user": session.user,
            "cart_items": session.cart.item_count(),
        }));
        return Ok(());
    }

    match &session.user {
        Some(user) => {
            ctx.output.kv("name", &user.name);
            ctx.output.kv("email", &user.email);
        }
        None => ctx.output.info("Not signed in. Use `garment login <email> <password>`."),
    }
    ctx.output.kv("session", session.id.as_str());
    ctx.output
        .kv("cart", &format!("{} items", session.cart.item_count()));
    Ok(())
}
