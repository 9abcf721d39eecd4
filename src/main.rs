//! searx-pdbe: PDBe result source for a privacy-respecting metasearch engine
//!
//! Command-line entry point: runs a query through a configured engine and
//! prints the normalized results as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use searx_pdbe::{
    config,
    engines::{EngineLoader, RequestParams},
    network::HttpClient,
    Search,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "searx-pdbe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search the Protein Data Bank in Europe", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a query and print the results as JSON
    #[command(alias = "s")]
    Search {
        /// Query text, forwarded to the engine as-is
        query: String,

        /// Engine name or shortcut
        #[arg(long, short, default_value = "pdbe")]
        engine: String,

        /// Language for Accept-Language and the obsolete-entry notes
        /// (defaults to the configured UI locale)
        #[arg(long, short)]
        lang: Option<String>,
    },

    /// List available engine types
    Engines,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = config::load(cli.config)?;
    init_logging(settings.general.debug);

    info!("Starting searx-pdbe v{}", searx_pdbe::VERSION);

    match cli.command {
        Command::Engines => {
            for engine in EngineLoader::available_engines() {
                println!("{}", engine);
            }
        }
        Command::Search {
            query,
            engine,
            lang,
        } => {
            let client = HttpClient::with_settings(&settings.outgoing)?;
            let registry = Arc::new(EngineLoader::load(&settings)?);

            let mut search = Search::new(client, registry)
                .with_timeout(settings.outgoing.request_timeout()?);
            if let Some(max) = settings.outgoing.max_request_timeout()? {
                search = search.with_max_timeout(max);
            }

            let mut params = RequestParams::new(query);
            if let Some(lang) = lang {
                params = params.with_lang(lang);
            }
            let results = search.execute(&engine, &params).await?;

            println!("{}", serde_json::to_string_pretty(&results.results)?);
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays machine-readable
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
