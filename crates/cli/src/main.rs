//! Catálogo Pro CLI - View and edit the seasonal catalog.
//!
//! # Usage
//!
//! ```bash
//! # Show the season on display, optionally filtered
//! catalogo show
//! catalogo show --query edredón
//!
//! # Switch season
//! catalogo season summer
//!
//! # Edit content
//! catalogo category add
//! catalogo product add w1
//! catalogo product set w1 p1 --price 260 --discount 10
//! catalogo settings --title "MI TIENDA"
//!
//! # Backups and inquiry links
//! catalogo export --out ./backups
//! catalogo link w1 p1
//!
//! # Interactive session
//! catalogo shell
//! ```
//!
//! # Commands
//!
//! - `show` - Render the active season
//! - `season` - Switch the season on display
//! - `category` / `product` / `settings` - Edit catalog content
//! - `export` - Write `catalogo_backup.json`
//! - `link` - Print the messaging inquiry link for a product
//! - `shell` - Interactive session with the hidden admin gesture

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use catalogo_core::Season;
use catalogo_editor::{CatalogStore, EditorConfig};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::edit::{ProductChanges, SettingsChanges};
use crate::confirm::CliConfirm;

mod commands;
mod confirm;
mod render;

#[derive(Parser)]
#[command(name = "catalogo")]
#[command(author, version, about = "Catálogo Pro command-line editor")]
struct Cli {
    /// Directory holding the catalog (overrides `CATALOGO_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the categories of the season on display
    Show {
        /// Only show products whose name or description contains this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Switch the season on display (winter or summer)
    Season { season: Season },
    /// Manage categories of the active season
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage products of the active season
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Change global catalog settings
    Settings(SettingsArgs),
    /// Write a pretty-printed JSON backup of the whole catalog
    Export {
        /// Directory to write `catalogo_backup.json` into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Print the messaging inquiry link for a product
    Link { category: String, product: String },
    /// Start an interactive session
    Shell,
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Append a new placeholder category
    Add,
    /// Delete a category and all of its products
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Change a category's name or icon
    Set {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Append a new placeholder product to a category
    Add { category: String },
    /// Delete a product
    Delete {
        category: String,
        product: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Change product fields
    Set(ProductSetArgs),
}

#[derive(Args)]
struct ProductSetArgs {
    category: String,
    product: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Base price; anything that is not a number is taken as 0
    #[arg(long)]
    price: Option<String>,
    /// Discount percentage (0-100); anything that is not a number is taken as 0
    #[arg(long)]
    discount: Option<String>,
    /// Image URL
    #[arg(long)]
    image: Option<String>,
}

#[derive(Args)]
struct SettingsArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    subtitle: Option<String>,
    /// Messaging contact number
    #[arg(long)]
    contact: Option<String>,
    /// Call-to-action button label
    #[arg(long)]
    cta_label: Option<String>,
    /// Call-to-action button color
    #[arg(long)]
    cta_color: Option<String>,
    /// Logo URL
    #[arg(long)]
    logo: Option<String>,
}

fn main() {
    // Logs go to stderr so command output stays clean on stdout.
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "catalogo=info,catalogo_editor=info".into());

    // CATALOGO_LOG_FORMAT=json for structured logs, text otherwise
    let is_json = std::env::var("CATALOGO_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = EditorConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    let mut store = CatalogStore::from_config(&config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Show { query } => commands::catalog::show(&store, query.as_deref(), &mut out),
        Commands::Season { season } => commands::catalog::season(&mut store, season),
        Commands::Category { action } => match action {
            CategoryAction::Add => commands::edit::add_category(&mut store, &mut out),
            CategoryAction::Delete { id, yes } => commands::edit::delete_category(
                &mut store,
                &id.into(),
                &mut CliConfirm::from_flag(yes),
            ),
            CategoryAction::Set { id, name, icon } => {
                commands::edit::set_category(&mut store, &id.into(), name, icon)
            }
        },
        Commands::Product { action } => match action {
            ProductAction::Add { category } => {
                commands::edit::add_product(&mut store, &category.into(), &mut out)
            }
            ProductAction::Delete {
                category,
                product,
                yes,
            } => commands::edit::delete_product(
                &mut store,
                &category.into(),
                &product.into(),
                &mut CliConfirm::from_flag(yes),
            ),
            ProductAction::Set(args) => commands::edit::set_product(
                &mut store,
                &args.category.into(),
                &args.product.into(),
                ProductChanges {
                    name: args.name,
                    description: args.description,
                    price: args.price,
                    discount: args.discount,
                    image: args.image,
                },
            ),
        },
        Commands::Settings(args) => commands::edit::set_settings(
            &mut store,
            SettingsChanges {
                title: args.title,
                subtitle: args.subtitle,
                contact: args.contact,
                cta_label: args.cta_label,
                cta_color: args.cta_color,
                logo: args.logo,
            },
        ),
        Commands::Export { out: dir } => commands::catalog::export(&store, &dir, &mut out),
        Commands::Link { category, product } => commands::catalog::link(
            &store,
            &config,
            &category.into(),
            &product.into(),
            &mut out,
        ),
        Commands::Shell => {
            // The shell locks stdout itself.
            drop(out);
            commands::shell::run(&mut store, &config)
        }
    }
}
