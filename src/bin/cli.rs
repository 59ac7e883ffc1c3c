//! Heroes CLI
//!
//! Command-line client for a heroes API:
//! - List, show and search heroes
//! - Add, rename and delete heroes
//! - Print the dashboard

use clap::{Parser, Subcommand};
use heroes::app::{App, Page};
use heroes::config::{generate_default_config, Config, ConfigNote};
use heroes::hero::{Hero, HeroId};
use heroes::service::HttpBackend;
use heroes::views::HeroSearch;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "heroes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage a roster of heroes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the service message log after the command
    #[arg(short, long, global = true)]
    pub messages: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all heroes
    List,

    /// Show one hero
    Show {
        id: HeroId,
    },

    /// Add a hero
    Add {
        name: String,
    },

    /// Rename a hero
    Rename {
        id: HeroId,
        name: String,
    },

    /// Delete a hero
    Delete {
        id: HeroId,
    },

    /// Search heroes by name
    Search {
        term: String,
    },

    /// Show the top heroes
    Dashboard,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, notes) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Vec::new()),
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.client.api_url = url.clone();
    }
    config.logging.init();
    notes.iter().for_each(ConfigNote::log);

    let backend = HttpBackend::new(config.client.backend_config())?;
    let app = App::new(Arc::new(backend));

    let ok = match cli.command {
        Commands::List => {
            if let Page::Heroes(view) = app.open("/heroes").await {
                print_heroes(view.heroes());
            }
            true
        }

        Commands::Show { id } => match app.open(&format!("/detail/{}", id)).await {
            Page::Detail(view) => match view.hero() {
                Some(hero) => {
                    println!("{} details!", hero.name.to_uppercase());
                    println!("id: {}", hero.id);
                    println!("name: {}", hero.name);
                    true
                }
                None => {
                    eprintln!("Hero {} not found", id);
                    false
                }
            },
            _ => false,
        },

        Commands::Add { name } => {
            if name.trim().is_empty() {
                eprintln!("Name cannot be empty");
                false
            } else {
                match app.open("/heroes").await {
                    Page::Heroes(mut view) => match view.add(&name).await {
                        Some(hero) => {
                            println!("Added {}", hero);
                            true
                        }
                        None => {
                            eprintln!("Failed to add {:?}", name);
                            false
                        }
                    },
                    _ => false,
                }
            }
        }

        Commands::Rename { id, name } => {
            app.open("/heroes").await;
            match app.open(&format!("/detail/{}", id)).await {
                Page::Detail(mut view) if view.hero().is_some() => {
                    view.rename(&name);
                    view.save().await;
                    let saved = app.service().get_hero(id).await;
                    match saved {
                        Some(hero) if hero.name == name.trim() => {
                            println!("Renamed {}", hero);
                            true
                        }
                        _ => {
                            eprintln!("Failed to rename hero {}", id);
                            false
                        }
                    }
                }
                _ => {
                    eprintln!("Hero {} not found", id);
                    false
                }
            }
        }

        Commands::Delete { id } => match app.service().delete_hero(id).await {
            Some(()) => {
                println!("Deleted hero {}", id);
                true
            }
            None => {
                eprintln!("Failed to delete hero {}", id);
                false
            }
        },

        Commands::Search { term } => {
            let search = HeroSearch::with_debounce(Arc::clone(app.service()), Duration::ZERO);
            search.search(&term).await;
            let results = search.results();
            if results.is_empty() {
                println!("No heroes matching {:?}", term.trim());
            } else {
                print_heroes(&results);
            }
            true
        }

        Commands::Dashboard => {
            if let Page::Dashboard(view) = app.open("/dashboard").await {
                println!("Top Heroes");
                for hero in view.top_heroes() {
                    println!("  {}", hero.name);
                }
            }
            true
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            true
        }
    };

    if cli.messages {
        println!();
        println!("Messages");
        for message in app.messages().messages() {
            println!("  {}", message);
        }
    }

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn print_heroes(heroes: &[Hero]) {
    if heroes.is_empty() {
        println!("No heroes.");
        return;
    }

    println!("{:<6} {}", "ID", "Name");
    println!("{}", "-".repeat(30));
    for hero in heroes {
        println!("{:<6} {}", hero.id, hero.name);
    }
}
