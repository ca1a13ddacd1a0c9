use anyhow::{bail, Context};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use sn_cache::{MemoryCache, NewsCache};
use sn_core::{CacheStore, Category, FetchMode};
use sn_feeds::{registry, NewsPipeline};
use sn_rewrite::create_rewriter;
use sn_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sachlich aufbereitete Schweizer News", long_about = None)]
struct Cli {
    /// Cache backend. Available: memory (default), upstash
    #[arg(long, default_value = "memory")]
    cache: String,

    /// Rewriter backend. Available: openai (default), dummy
    #[arg(long, default_value = "openai")]
    rewriter: String,

    /// API key for the rewrite service; falls back to OPENAI_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,
    },
    /// Run one pipeline cycle and print the result
    Fetch {
        /// Restrict to one category (zuerich, schweiz, international, people, alternativ)
        #[arg(long)]
        category: Option<String>,
    },
    /// List the configured sources
    Sources,
    /// Cache maintenance
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
enum CacheCommands {
    /// Delete the known feed cache keys
    Clear,
}

fn build_store(kind: &str) -> anyhow::Result<Arc<dyn CacheStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryCache::new())),
        #[cfg(feature = "upstash")]
        "upstash" => Ok(Arc::new(sn_cache::UpstashCache::from_env()?)),
        #[cfg(not(feature = "upstash"))]
        "upstash" => bail!("built without the upstash feature"),
        other => bail!("unknown cache backend: {}", other),
    }
}

fn parse_category(raw: Option<String>) -> anyhow::Result<Option<Category>> {
    raw.map(|c| c.parse::<Category>())
        .transpose()
        .context("invalid category")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let store = build_store(&cli.cache)?;
    let cache = NewsCache::new(store);

    let api_key_flag = cli.api_key.clone();
    let rewriter_kind = cli.rewriter.clone();
    let cache_kind = cli.cache.clone();
    let build_pipeline = move |cache: NewsCache| -> anyhow::Result<Arc<NewsPipeline>> {
        let api_key = api_key_flag
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        let rewriter = create_rewriter(&rewriter_kind, api_key)?;
        info!("🤖 rewriter: {}, cache: {}", rewriter.name(), cache_kind);
        Ok(Arc::new(NewsPipeline::with_default_sources(rewriter, cache)?))
    };

    match cli.command {
        Commands::Serve { addr } => {
            let pipeline = build_pipeline(cache)?;
            let app = create_app(AppState { pipeline }).await;
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            info!("🚀 listening on {}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Fetch { category } => {
            let pipeline = build_pipeline(cache)?;
            let category = parse_category(category)?;
            let articles = pipeline.articles(category).await?;
            println!("{} Artikel:", articles.len());
            for article in articles {
                println!(
                    "  [{}] {} | {} ({})",
                    article.category, article.title, article.source, article.id
                );
            }
        }
        Commands::Sources => {
            for source in registry::sources() {
                let mode = match &source.mode {
                    FetchMode::Feed => "feed".to_string(),
                    FetchMode::Scrape { strategy } => format!("scrape/{}", strategy),
                };
                println!(
                    "  [{}] {} ({}) {}",
                    source.category, source.display_name, mode, source.endpoint
                );
            }
        }
        Commands::Cache { command } => match command {
            CacheCommands::Clear => {
                let cleared = cache.clear_feeds().await;
                println!("🗑️ {} Feed-Caches gelöscht:", cleared.len());
                for key in cleared {
                    println!("  {}", key);
                }
            }
        },
    }

    Ok(())
}
