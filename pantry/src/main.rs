//! Pantry - household ingredient stock & shopping list
//!
//! Command-line front end: loads both stores, runs one command, exits.

use clap::{CommandFactory, Parser, Subcommand};
use pantry::config::{
    DEFAULT_CAPACITY, DEFAULT_INVENTORY_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_STANDING_FILE,
};
use pantry::{InventoryStore, ShoppingList, StandingListStore, StoreConfig};
use std::path::PathBuf;

/// Track pantry stock and generate shopping lists
#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(version, about, long_about = None)]
struct Cli {
    /// On-hand ingredients file
    #[arg(long, global = true, default_value = DEFAULT_INVENTORY_FILE)]
    inventory_file: PathBuf,

    /// Standing ("always stock") list file
    #[arg(long, global = true, default_value = DEFAULT_STANDING_FILE)]
    standing_file: PathBuf,

    /// Maximum number of on-hand ingredients
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an ingredient to the on-hand stock
    Add {
        name: String,
        quantity: f64,
        unit: String,
        /// Days until the ingredient expires
        #[arg(allow_negative_numbers = true)]
        expires_in: i32,
    },
    /// Take a quantity of an ingredient out of stock
    Take { name: String, quantity: f64 },
    /// Generate the shopping list
    Shopping {
        /// HTML output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Print the list as JSON instead of writing HTML
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the on-hand stock
    List,
    /// Edit the standing list
    Staple {
        #[command(subcommand)]
        action: StapleAction,
    },
}

#[derive(Subcommand, Debug)]
enum StapleAction {
    /// Add a name to the standing list
    Add { name: String },
    /// Remove every entry with this name
    Remove { name: String },
    /// Show the standing list
    List,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Bad invocations print usage and change nothing
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    let config = StoreConfig::new(&cli.inventory_file, &cli.standing_file, cli.capacity);
    log::debug!("Using {:?}", config);

    let Some(command) = cli.command else {
        println!("No command provided.");
        let _ = Cli::command().print_help();
        return;
    };

    if let Err(e) = run(command, &config) {
        log::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command, config: &StoreConfig) -> pantry::Result<()> {
    let mut inventory = InventoryStore::load(&config.inventory_path, config.capacity);
    let mut standing = StandingListStore::load(&config.standing_path);

    match command {
        Command::Add {
            name,
            quantity,
            unit,
            expires_in,
        } => {
            let outcome = inventory.add(&name, quantity, &unit, expires_in)?;
            println!("{outcome}");
        }
        Command::Take { name, quantity } => {
            let outcome = inventory.consume(&name, quantity)?;
            println!("{outcome}");
        }
        Command::Shopping { output, json } => {
            let list = ShoppingList::generate(&inventory, &standing);
            if json {
                println!("{}", list.to_json()?);
            } else {
                pantry::render::write_html(&list, &output)?;
                println!("Shopping list generated: {}", output.display());
            }
        }
        Command::List => {
            if inventory.is_empty() {
                println!("No ingredients stored.");
            }
            for record in inventory.records() {
                println!("{} (added {})", record.describe(), record.added_date);
            }
            println!("{} of {} slots used", inventory.len(), inventory.capacity());
        }
        Command::Staple { action } => match action {
            StapleAction::Add { name } => println!("{}", standing.insert(&name)?),
            StapleAction::Remove { name } => println!("{}", standing.remove(&name)?),
            StapleAction::List => {
                if standing.is_empty() {
                    println!("No standard ingredients.");
                }
                for name in standing.names() {
                    println!("{name}");
                }
            }
        },
    }

    Ok(())
}
