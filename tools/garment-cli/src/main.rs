//! Garment CLI - Command line storefront for the garment catalog.
//!
//! Commands:
//! - `garment shop` - Browse products by category and price
//! - `garment product` - Show a product and pick a variant
//! - `garment cart` - View and change the cart
//! - `garment checkout` - Review, pay and place the order
//! - `garment receipt` - Show the last order
//! - `garment login` / `logout` / `whoami` - Simulated account
//! - `garment config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CheckoutArgs, ConfigArgs, LoginArgs, ProductArgs, ShopArgs};

/// Garment CLI - Browse, fill a cart and check out from the terminal
#[derive(Parser)]
#[command(name = "garment")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Shop(ShopArgs),

    /// Show a product and select a variant
    Product(ProductArgs),

    /// View and change the cart
    Cart(CartArgs),

    /// Check out the cart
    Checkout(CheckoutArgs),

    /// Show the last order
    Receipt,

    /// Sign in (simulated)
    Login(LoginArgs),

    /// Sign out; the cart is kept
    Logout,

    /// Show the signed-in user and session
    Whoami,

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Shop(_) => "shop",
            Commands::Product(_) => "product",
            Commands::Cart(_) => "cart",
            Commands::Checkout(_) => "checkout",
            Commands::Receipt => "receipt",
            Commands::Login(_) => "login",
            Commands::Logout => "logout",
            Commands::Whoami => "whoami",
            Commands::Config(_) => "config",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let command = cli.command.name();
    let ctx = match context::Context::load(config_path, output.clone(), command, cli.verbose) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Receipt => commands::receipt::run(&ctx).await,
        Commands::Login(args) => commands::account::login(args, &ctx).await,
        Commands::Logout => commands::account::logout(&ctx).await,
        Commands::Whoami => commands::account::whoami(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
