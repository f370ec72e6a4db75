mod commands;
mod crafting;
mod data;
mod errors;
mod fetcher;
mod lookup;
mod models;

use clap::{Parser, Subcommand};

use crate::data::{initialize_item_store, ItemDataStore, DEFAULT_CACHE_PATH};
use crate::errors::Result;
use crate::fetcher::ApiClient;

#[derive(Parser)]
#[command(name = "starbot-items", about = "Item metadata lookups for the starship chat bot")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show stats for items matching a name
    Item { name: String },
    /// Show market and fair prices for items matching a name
    Price { name: String },
    /// Show the multi-level crafting bill of materials for an item
    Ingredients { name: String },
    /// Rank equipment in a slot by a stat bonus, best last
    Best { slot: String, stat: String },
    /// Force a refresh of the cached item designs
    Refresh,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(success) => {
            if !success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(command: Command) -> Result<bool> {
    if let Command::Refresh = command {
        return refresh().await;
    }

    let store = initialize_item_store().await?;
    let reply = match command {
        Command::Item { name } => commands::get_item_details(store.items(), &name),
        Command::Price { name } => commands::get_item_price(store.items(), &name),
        Command::Ingredients { name } => commands::get_ingredients_for_item(store.items(), &name)?,
        Command::Best { slot, stat } => commands::get_best_items(store.items(), &slot, &stat),
        Command::Refresh => return refresh().await,
    };

    for line in &reply.lines {
        println!("{}", line);
    }
    Ok(reply.success)
}

async fn refresh() -> Result<bool> {
    let mut store = ItemDataStore::new(ApiClient::production(), DEFAULT_CACHE_PATH);
    let count = store.update_from_api().await?;
    store.save_to_file().await?;
    println!("Loaded {} item designs", count);
    Ok(true)
}
