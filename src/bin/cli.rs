//! Zookeepr CLI Client
//!
//! Command-line interface for a running Zookeepr server.

use clap::{Parser, Subcommand};
use reqwest::StatusCode;
use serde_json::json;
use zookeepr::{Animal, Result, ZooError};

/// Zookeepr CLI
#[derive(Parser, Debug)]
#[command(name = "zookeepr-cli")]
#[command(about = "CLI for the Zookeepr animal API")]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:3001")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List animals, optionally filtered
    List {
        /// Required personality trait (repeatable)
        #[arg(short = 't', long = "trait")]
        traits: Vec<String>,

        #[arg(long)]
        diet: Option<String>,

        #[arg(long)]
        species: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Get an animal by id
    Get {
        /// The id to look up
        id: String,
    },

    /// Add a new animal
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        species: String,

        #[arg(long)]
        diet: String,

        /// Personality trait (repeatable)
        #[arg(short = 't', long = "trait")]
        traits: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let client = reqwest::Client::new();
    let base = args.server.trim_end_matches('/');

    match args.command {
        Commands::List {
            traits,
            diet,
            species,
            name,
        } => {
            let mut params: Vec<(&str, String)> = traits
                .into_iter()
                .map(|t| ("personalityTraits", t))
                .collect();
            params.extend(diet.map(|v| ("diet", v)));
            params.extend(species.map(|v| ("species", v)));
            params.extend(name.map(|v| ("name", v)));

            let resp = client
                .get(format!("{}/api/animals", base))
                .query(&params)
                .send()
                .await
                .map_err(network)?;
            let animals: Vec<Animal> = resp.json().await.map_err(network)?;
            for animal in &animals {
                print_animal(animal);
            }
            println!("({} animals)", animals.len());
        }

        Commands::Get { id } => {
            let resp = client
                .get(format!("{}/api/animals/{}", base, id))
                .send()
                .await
                .map_err(network)?;
            if resp.status() == StatusCode::NOT_FOUND {
                return Err(ZooError::AnimalNotFound);
            }
            let animal: Animal = resp.json().await.map_err(network)?;
            print_animal(&animal);
        }

        Commands::Add {
            name,
            species,
            diet,
            traits,
        } => {
            let body = json!({
                "name": name,
                "species": species,
                "diet": diet,
                "personalityTraits": traits,
            });
            let resp = client
                .post(format!("{}/api/animals", base))
                .json(&body)
                .send()
                .await
                .map_err(network)?;
            if !resp.status().is_success() {
                let status = resp.status();
                let text = resp.text().await.map_err(network)?;
                return Err(ZooError::Network(format!("{}: {}", status, text)));
            }
            let animal: Animal = resp.json().await.map_err(network)?;
            println!("created:");
            print_animal(&animal);
        }
    }

    Ok(())
}

fn print_animal(animal: &Animal) {
    println!(
        "{:>4}  {:<12} {:<12} {:<10} [{}]",
        animal.id,
        animal.name,
        animal.species,
        animal.diet,
        animal.personality_traits.join(", ")
    );
}

fn network(e: reqwest::Error) -> ZooError {
    ZooError::Network(e.to_string())
}
