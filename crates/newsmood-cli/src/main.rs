mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newsmood-cli")]
#[command(about = "News sentiment analysis from the command line")]
struct Cli {
    /// Replacement word-polarity lexicon (tab-separated `word<TAB>weight`)
    #[arg(long, global = true, env = "NEWSMOOD_LEXICON_PATH")]
    lexicon: Option<PathBuf>,

    /// Replacement stopword list (one word per line)
    #[arg(long, global = true, env = "NEWSMOOD_STOPWORDS_PATH")]
    stopwords: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch articles from NewsAPI and print the sentiment report as JSON
    Analyze {
        /// Search query; defaults to NEWSMOOD_DEFAULT_QUERY
        #[arg(long)]
        query: Option<String>,

        /// Page size for each of the two upstream searches (1-100)
        #[arg(long, default_value_t = 100)]
        max: u32,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
    /// Score a piece of text against the lexicon
    Score {
        /// Text to score
        text: String,
    },
    /// Print a deterministic synthetic report for a query
    Sample {
        /// Query the synthetic report is seeded from
        #[arg(long)]
        query: String,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Logs go to stderr so stdout stays machine-readable.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let tables = commands::Tables {
        lexicon: cli.lexicon,
        stopwords: cli.stopwords,
    };

    match cli.command {
        Commands::Analyze { query, max, pretty } => {
            commands::run_analyze(&tables, query.as_deref(), max, pretty).await?;
        }
        Commands::Score { text } => commands::run_score(&tables, &text)?,
        Commands::Sample { query, pretty } => commands::run_sample(&query, pretty)?,
    }

    Ok(())
}
