//! Carrito CLI - drives the cart widget from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of a product to the cart
//! carrito add "Filtro de aceite" --price 3500 --stock 5
//!
//! # Render the current cart
//! carrito show
//!
//! # Submit the cart for order finalization
//! carrito checkout
//! ```
//!
//! # Commands
//!
//! - `add` - Add one unit of a product
//! - `show` - Render the item list and badge
//! - `checkout` - Submit the cart to the checkout endpoint

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "carrito")]
#[command(author, version, about = "Carrito cart widget CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Product name
        name: String,

        /// Unit price in colones
        #[arg(short, long)]
        price: Decimal,

        /// Stock ceiling for the product
        #[arg(short, long)]
        stock: u32,
    },
    /// Render the current cart
    Show,
    /// Submit the cart for order finalization
    Checkout,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Add { name, price, stock } => commands::add(&name, price, stock)?,
        Commands::Show => commands::show()?,
        Commands::Checkout => commands::checkout().await?,
    }
    Ok(())
}
