//! Terminal client for guitar-tech-signature.
//!
//! Loads the CSV dataset locally, evaluates a guitarist's technique
//! signature, draws the bar charts in the terminal and asks the backend for
//! an insight. When the backend is unreachable, insights come from local
//! fallbacks.
//!
//! # Usage
//!
//! ```bash
//! # List guitarists
//! cargo run --bin gts -- list
//!
//! # Show a signature (interactive picker without a name)
//! cargo run --bin gts -- show "Jimi Hendrix"
//! cargo run --bin gts -- show
//!
//! # Compare guitarists
//! cargo run --bin gts -- compare "Slash" "Prince"
//!
//! # Similar guitarists
//! cargo run --bin gts -- recommend "Slash"
//!
//! # Check the backend
//! cargo run --bin gts -- health
//! ```
//!
//! # Environment Variables
//!
//! - `GTS_API_URL` (default `http://localhost:3000`): backend base URL
//! - `DATA_DIR` (default `data`): directory holding the CSV files

use guitar_tech_signature::application::services::SignatureService;
use guitar_tech_signature::chart::{self, terminal};
use guitar_tech_signature::client::{DEFAULT_API_URL, InsightClient};
use guitar_tech_signature::domain::entities::{GuitaristProfile, Signature};
use guitar_tech_signature::infrastructure::data::CsvDataLoader;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Select;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Explore guitarists' technique signatures from the terminal.
#[derive(Parser)]
#[command(name = "gts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "GTS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory holding guitarists.csv, techniques.csv and sources.csv
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List guitarists in the dataset
    List,

    /// Show a guitarist's technique signature and insight
    Show {
        /// Guitarist name (prompted for when omitted)
        name: Option<String>,
    },

    /// Compare two or more guitarists
    Compare {
        #[arg(required = true, num_args = 2..)]
        names: Vec<String>,
    },

    /// Recommend guitarists similar to one
    Recommend { name: String },

    /// Check backend availability
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = InsightClient::new(cli.api_url.clone())
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

    match cli.command {
        Commands::Health => handle_health(&client).await?,
        Commands::List => handle_list(&load_signatures(&cli.data_dir)?),
        Commands::Show { name } => {
            handle_show(&load_signatures(&cli.data_dir)?, &client, name).await?
        }
        Commands::Compare { names } => {
            handle_compare(&load_signatures(&cli.data_dir)?, &client, &names).await?
        }
        Commands::Recommend { name } => {
            handle_recommend(&load_signatures(&cli.data_dir)?, &client, &name).await?
        }
    }

    Ok(())
}

/// Prints guitarists with their style.
fn handle_list(signatures: &SignatureService) {
    println!("{}", "🎸 Guitarists".bright_blue().bold());
    println!();

    let guitarists = signatures.guitarists();
    if guitarists.is_empty() {
        println!("{}", "  No guitarists found".yellow());
        return;
    }

    println!(
        "  {:<4} {:<28} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Style".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for guitarist in guitarists {
        println!(
            "  {:<4} {:<28} {}",
            guitarist.id.bright_black(),
            guitarist.name.cyan(),
            guitarist.style
        );
    }

    println!();
    println!(
        "  Total: {}",
        guitarists.len().to_string().bright_white().bold()
    );
    println!();
}

/// Shows one guitarist's signature.
///
/// # Flow
///
/// 1. Pick the guitarist (argument or interactive list)
/// 2. Evaluate tier/category distribution and top techniques locally
/// 3. Draw both bar charts
/// 4. Check the backend, then request the insight
async fn handle_show(
    signatures: &SignatureService,
    client: &InsightClient,
    name: Option<String>,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => pick_guitarist(signatures)?,
    };

    let signature = lookup(signatures, &name)?;

    println!(
        "{} {}",
        "🎸".bright_blue(),
        signature.guitarist.name.bright_blue().bold()
    );
    println!("  {}", signature.guitarist.style.bright_black());
    println!();

    if signature.is_empty() {
        println!(
            "{}",
            format!("No technique data available for {name}.").yellow()
        );
        return Ok(());
    }

    println!("{}", "Technique tiers".bright_white().bold());
    print!("{}", terminal::render(&chart::tier_chart(&signature.distribution)));
    println!();

    println!("{}", "Categories".bright_white().bold());
    print!(
        "{}",
        terminal::render(&chart::category_chart(&signature.category_distribution))
    );
    println!();

    println!("{}", "Top techniques".bright_white().bold());
    for (rank, technique) in signature.top_techniques.iter().enumerate() {
        println!(
            "  {}. {:<24} {}  {}",
            rank + 1,
            technique.technique.cyan(),
            format!("{:.2}", technique.confidence).bright_green(),
            technique.notes.bright_black()
        );
    }
    println!();

    warn_if_offline(client).await;

    println!("{}", "💡 Insight".bright_white().bold());
    println!("{}", "  Generating insight...".bright_black());
    let insight = client
        .generate_insight(
            &signature.guitarist.name,
            &signature.distribution,
            &signature.top_technique_names(),
            Some(signature.guitarist.style.as_str()),
        )
        .await;
    println!("  {insight}");
    println!();

    Ok(())
}

async fn handle_compare(
    signatures: &SignatureService,
    client: &InsightClient,
    names: &[String],
) -> Result<()> {
    let profiles = names
        .iter()
        .map(|name| lookup(signatures, name).map(|s| s.profile()))
        .collect::<Result<Vec<_>>>()?;

    println!("{}", "⚖️  Comparison".bright_blue().bold());
    for profile in &profiles {
        println!("  {}", profile.summary_line().cyan());
    }
    println!();

    warn_if_offline(client).await;

    let comparison = client.compare_guitarists(&profiles).await;
    println!("  {comparison}");
    println!();

    Ok(())
}

async fn handle_recommend(
    signatures: &SignatureService,
    client: &InsightClient,
    name: &str,
) -> Result<()> {
    let profile = lookup(signatures, name)?.profile();
    let candidates: Vec<GuitaristProfile> = signatures
        .profiles()
        .into_iter()
        .filter(|p| p.name != profile.name)
        .collect();

    println!(
        "{} {}",
        "✨ Similar to".bright_blue().bold(),
        profile.name.bright_blue().bold()
    );
    println!();

    warn_if_offline(client).await;

    let recommendations = client.get_recommendations(&profile, &candidates).await;
    if recommendations.is_empty() {
        println!("{}", "  No recommendations available".yellow());
        println!();
        return Ok(());
    }

    for recommendation in &recommendations {
        println!("  {}", recommendation.name.cyan().bold());
        if !recommendation.reason.is_empty() {
            println!("    Why:    {}", recommendation.reason);
        }
        if !recommendation.appeal.is_empty() {
            println!("    Appeal: {}", recommendation.appeal.bright_black());
        }
    }
    println!();

    Ok(())
}

async fn handle_health(client: &InsightClient) -> Result<()> {
    println!(
        "{} {}",
        "🔍 Checking backend at".bright_blue(),
        client.base_url().bright_white()
    );

    if client.check_api_health().await {
        println!("{}", "✅ Backend available".green().bold());
    } else {
        println!("{}", "❌ Backend unavailable".red().bold());
    }

    Ok(())
}

async fn warn_if_offline(client: &InsightClient) {
    if !client.check_api_health().await {
        println!(
            "{}",
            "⚠️  Backend not available, using fallback insights".yellow()
        );
        println!();
    }
}

fn load_signatures(data_dir: &Path) -> Result<SignatureService> {
    let dataset = CsvDataLoader::new(data_dir)
        .load()
        .with_context(|| format!("Failed to load data from {}", data_dir.display()))?;
    Ok(SignatureService::new(Arc::new(dataset)))
}

fn pick_guitarist(signatures: &SignatureService) -> Result<String> {
    let names: Vec<&str> = signatures
        .guitarists()
        .iter()
        .map(|g| g.name.as_str())
        .collect();

    if names.is_empty() {
        anyhow::bail!("No guitarists in the dataset");
    }

    let index = Select::new()
        .with_prompt("Choose a guitarist")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(names[index].to_string())
}

fn lookup(signatures: &SignatureService, name: &str) -> Result<Signature> {
    signatures
        .signature(name)
        .map_err(|_| anyhow::anyhow!("Guitarist '{}' not found", name))
}
