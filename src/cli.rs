use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::logging::LogTarget;
use crate::paths;

#[derive(Parser)]
#[command(name = "movieseek")]
#[command(about = "Search The Movie Database from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search movies by title and print one page of results
    #[command(visible_alias = "s")]
    Search {
        /// Movie title (words are joined with spaces)
        #[arg(num_args = 0..)]
        title: Vec<String>,

        /// Result page to fetch (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Response language, overriding tmdb.language (e.g. fr-FR)
        #[arg(short, long)]
        language: Option<String>,

        /// Include adult titles
        #[arg(long)]
        include_adult: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse results interactively with infinite scroll
    #[command(visible_alias = "b")]
    Browse {
        /// Title to search for on start
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Manage favorite movies
    #[command(visible_alias = "fav")]
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List favorite movie ids
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a movie id, or remove it if already a favorite
    Toggle {
        /// TMDB movie id
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (tmdb.access_token, tmdb.api_key, tmdb.base_url, tmdb.language, tmdb.include_adult)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Where this invocation should write its logs
    pub fn log_target(&self) -> LogTarget {
        match self.command {
            Commands::Browse { .. } => LogTarget::File(paths::log_file()),
            _ => LogTarget::Stderr,
        }
    }

    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            SearchOptions, cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show,
            cmd_favorites_list, cmd_favorites_toggle, cmd_search,
        };

        match self.command {
            Commands::Search {
                title,
                page,
                language,
                include_adult,
                json,
            } => {
                cmd_search(
                    &title.join(" "),
                    SearchOptions {
                        page,
                        language,
                        include_adult,
                        json,
                    },
                )
                .await
            }

            Commands::Browse { query } => {
                let query = (!query.is_empty()).then(|| query.join(" "));
                cmd_browse(query).await
            }

            Commands::Favorites { action } => match action {
                FavoritesAction::List { json } => cmd_favorites_list(json),
                FavoritesAction::Toggle { id, json } => cmd_favorites_toggle(id, json),
            },

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "movieseek", &mut io::stdout());
}
