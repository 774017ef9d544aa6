//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;
pub mod receipt;
pub mod shop;

use clap::{Args, Subcommand, ValueEnum};
use garment_commerce::catalog::SortOption;

/// Most units a single command may put on one line.
pub const MAX_QUANTITY: i64 = 9999;

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Only show products in this category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order: featured, price-low or price-high.
    #[arg(short, long, default_value = "featured")]
    pub sort: SortOption,

    /// List the categories instead of products.
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,

    /// Color to select.
    #[arg(long)]
    pub color: Option<String>,

    /// Size to select (needs a color).
    #[arg(long)]
    pub size: Option<String>,

    /// Material to select (needs a size).
    #[arg(long)]
    pub material: Option<String>,

    /// Add this many units of the selected variant to the cart.
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_QUANTITY))]
    pub add: Option<i64>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product from the listing (no variant).
    Add {
        /// Product ID.
        product_id: String,
        /// Units to add.
        #[arg(
            short,
            long,
            default_value = "1",
            value_parser = clap::value_parser!(i64).range(1..=MAX_QUANTITY)
        )]
        quantity: i64,
    },
    /// Remove a line.
    Remove {
        /// Line ID (product ID or SKU).
        id: String,
    },
    /// Set a line's quantity; zero or less removes it.
    Update {
        /// Line ID (product ID or SKU).
        id: String,
        /// New quantity.
        #[arg(
            allow_hyphen_values = true,
            value_parser = clap::value_parser!(i64).range(..=MAX_QUANTITY)
        )]
        quantity: i64,
    },
    /// Add one unit to a line.
    Inc {
        /// Line ID (product ID or SKU).
        id: String,
    },
    /// Take one unit off a line.
    Dec {
        /// Line ID (product ID or SKU).
        id: String,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Payment options at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaymentChoice {
    /// Hosted payment gateway.
    Gateway,
    /// Card details on the command line.
    Card,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Email address. Defaults to the signed-in user's.
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Street address.
    #[arg(long)]
    pub address: Option<String>,

    /// City.
    #[arg(long)]
    pub city: Option<String>,

    /// State.
    #[arg(long)]
    pub state: Option<String>,

    /// PIN code.
    #[arg(long)]
    pub pincode: Option<String>,

    /// Payment method.
    #[arg(long, value_enum, default_value = "gateway")]
    pub method: PaymentChoice,

    /// Card number.
    #[arg(long)]
    pub card_number: Option<String>,

    /// Name on card.
    #[arg(long)]
    pub card_name: Option<String>,

    /// Expiry (MMYY or MM/YY).
    #[arg(long)]
    pub expiry: Option<String>,

    /// CVV.
    #[arg(long)]
    pub cvv: Option<String>,

    /// Stop after the review step.
    #[arg(long)]
    pub review: bool,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address.
    pub email: String,

    /// Password.
    pub password: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
