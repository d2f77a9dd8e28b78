//! Full Colombiano CLI - catalog lookups and value checks.
//!
//! # Usage
//!
//! ```bash
//! # List departments and the cities of Antioquia
//! fc-cli geo departments
//! fc-cli geo cities 05
//!
//! # List store categories
//! fc-cli categories
//!
//! # Format and add amounts
//! fc-cli money format 1234.5 COP --locale es-CO
//! fc-cli money sum COP 10 5 2.50
//!
//! # Check values the forms would reject
//! fc-cli validate email ventas@cafe.co
//! fc-cli validate address --street "Calle 10 # 43-12" --city Medellín --state Antioquia
//!
//! # Print the site menus
//! fc-cli routes
//! ```
//!
//! Catalog commands go through the same mock services as the storefront and
//! honour `MOCK_LATENCY_MS` unless `--latency-ms` is given.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use full_colombiano_core::{AddressDto, Currency, Locale};
use full_colombiano_storefront::config::StorefrontConfig;
use full_colombiano_storefront::services::MockLatency;

mod commands;

#[derive(Parser)]
#[command(name = "fc-cli")]
#[command(author, version, about = "Full Colombiano CLI tools")]
struct Cli {
    /// Override the mock service delay in milliseconds
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the geographic catalog
    Geo {
        #[command(subcommand)]
        action: GeoAction,
    },
    /// List store categories
    Categories,
    /// Money helpers
    Money {
        #[command(subcommand)]
        action: MoneyAction,
    },
    /// Validate values the way the forms do
    Validate {
        #[command(subcommand)]
        target: ValidateTarget,
    },
    /// Print the site menus
    Routes,
}

#[derive(Subcommand)]
enum GeoAction {
    /// List all departments
    Departments,
    /// List the cities of a department
    Cities {
        /// DANE department code (e.g. 05 for Antioquia)
        department_id: String,
    },
}

#[derive(Subcommand)]
enum MoneyAction {
    /// Format an amount for display
    Format {
        amount: Decimal,
        currency: Currency,
        /// Display locale (`es-CO`, `en-US`, `es-ES`)
        #[arg(short, long, default_value = "es-CO")]
        locale: Locale,
    },
    /// Add amounts of the same currency
    Sum {
        currency: Currency,
        #[arg(required = true)]
        amounts: Vec<Decimal>,
        /// Display locale (`es-CO`, `en-US`, `es-ES`)
        #[arg(short, long, default_value = "es-CO")]
        locale: Locale,
    },
}

#[derive(Subcommand)]
enum ValidateTarget {
    /// Validate an email address
    Email { value: String },
    /// Validate a postal address
    Address {
        #[arg(long, default_value = "")]
        street: String,
        #[arg(long, default_value = "")]
        city: String,
        /// Department
        #[arg(long, default_value = "")]
        state: String,
        #[arg(long)]
        zip_code: Option<String>,
        #[arg(long, default_value = "")]
        country: String,
        #[arg(long)]
        additional_info: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "full_colombiano_cli=info,full_colombiano_storefront=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let latency = match cli.latency_ms {
        Some(ms) => MockLatency::new(Duration::from_millis(ms)),
        None => MockLatency::new(StorefrontConfig::from_env()?.mock_latency),
    };

    match cli.command {
        Commands::Geo { action } => match action {
            GeoAction::Departments => {
                commands::print_json(&commands::catalog::departments(latency).await?)?;
            }
            GeoAction::Cities { department_id } => {
                let cities = commands::catalog::cities(latency, &department_id).await?;
                if cities.is_empty() {
                    tracing::warn!(department_id = %department_id, "no cities for this department");
                }
                commands::print_json(&cities)?;
            }
        },
        Commands::Categories => {
            commands::print_json(&commands::catalog::categories(latency).await?)?;
        }
        Commands::Money { action } => match action {
            MoneyAction::Format {
                amount,
                currency,
                locale,
            } => commands::print_line(&commands::money::format(amount, currency, locale)?),
            MoneyAction::Sum {
                currency,
                amounts,
                locale,
            } => {
                let total = commands::money::sum(currency, &amounts)?;
                commands::print_line(&total.format(locale));
            }
        },
        Commands::Validate { target } => match target {
            ValidateTarget::Email { value } => {
                commands::print_json(&commands::validate::email(&value)?)?;
            }
            ValidateTarget::Address {
                street,
                city,
                state,
                zip_code,
                country,
                additional_info,
            } => {
                let address = commands::validate::address(AddressDto {
                    street,
                    city,
                    state,
                    zip_code,
                    country,
                    additional_info,
                })?;
                commands::print_line(&address.to_string());
            }
        },
        Commands::Routes => commands::print_json(&commands::routes::navigation())?,
    }
    Ok(())
}
