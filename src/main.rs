//! `carecost` command-line interface.

use std::path::PathBuf;

use anyhow::Context;
use carecost::{
    CareCostConfig, DefaultSearchEngine, HospitalResult, InsuranceProvider, InsuranceSelection,
    SearchParams, SortKey, build_engine,
};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "carecost", version, about = "Compare procedure prices across hospitals")]
struct Cli {
    /// YAML configuration file
    #[arg(long, short, global = true, env = "CARECOST_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price a procedure at every hospital that lists it
    Search {
        /// Procedure name fragment or CPT code
        #[arg(long, short)]
        procedure: String,

        /// Your 5-digit ZIP code
        #[arg(long, short)]
        zip: String,

        /// `cash` or a provider: aetna, bcbs, uhc, cigna, humana
        #[arg(long, short, default_value = "cash")]
        insurance: InsuranceSelection,

        /// Plan under the selected provider, e.g. PPO
        #[arg(long)]
        plan: Option<String>,

        /// price, distance or rating; defaults to the configured order
        #[arg(long, short)]
        sort: Option<SortKey>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggest procedures matching a partial name, category or code
    Procedures {
        query: String,

        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// List insurance providers and their plan types
    Insurance,
    /// Run the HTTP API (configured through CARECOST_SERVER__* variables)
    #[cfg(feature = "server")]
    Serve,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CareCostConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CareCostConfig::default(),
    };
    init_logging(&config, cli.log_level.as_deref());

    match cli.command {
        Command::Search {
            procedure,
            zip,
            insurance,
            plan,
            sort,
            json,
        } => {
            let engine = build_engine(&config).context("building search engine")?;
            let mut params = SearchParams::new(procedure, zip).with_insurance(insurance);
            params.plan = plan;
            let sort = sort.unwrap_or_else(|| config.default_sort());
            run_search(&engine, &params, sort, json)
        }
        Command::Procedures { query, limit } => {
            let engine = build_engine(&config).context("building search engine")?;
            let suggestions = engine.catalog().suggest_procedures(&query, limit);
            if suggestions.is_empty() {
                println!("No procedures match {query:?}");
            }
            for procedure in suggestions {
                println!(
                    "{}  {}  ({})",
                    procedure.cpt_code, procedure.name, procedure.category
                );
            }
            Ok(())
        }
        Command::Insurance => {
            println!("{:<8} {:<24} plans", "id", "provider");
            for provider in InsuranceProvider::ALL {
                println!(
                    "{:<8} {:<24} {}",
                    provider.as_str(),
                    provider.label(),
                    provider.plans().join(", ")
                );
            }
            Ok(())
        }
        #[cfg(feature = "server")]
        Command::Serve => serve(),
    }
}

fn init_logging(config: &CareCostConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&config.logging.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_search(
    engine: &DefaultSearchEngine,
    params: &SearchParams,
    sort: SortKey,
    json: bool,
) -> anyhow::Result<()> {
    let results = engine.search_sorted(params, sort)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let Some(first) = results.first() else {
        println!("No hospitals found for {:?}", params.procedure);
        return Ok(());
    };

    let coverage = match (params.insurance, params.plan.as_deref()) {
        (InsuranceSelection::Cash, _) => "cash".to_string(),
        (InsuranceSelection::Provider(p), Some(plan)) => format!("{} {plan}", p.label()),
        (InsuranceSelection::Provider(p), None) => p.label().to_string(),
    };
    println!(
        "{} (CPT {}), {coverage}, sorted by {sort}",
        first.procedure.name, first.procedure.cpt_code
    );
    for (index, result) in results.iter().enumerate() {
        println!("{}", format_row(index + 1, result));
    }
    Ok(())
}

fn format_row(rank: usize, result: &HospitalResult) -> String {
    format!(
        "{rank:>2}. {:<36} {:<18} {:<11} rating {:.1}",
        result.hospital.name,
        result.price_info.to_string(),
        result.distance.label(),
        result.hospital.rating
    )
}

#[cfg(feature = "server")]
fn serve() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = server::ServerConfig::load()?;
        server::start_server(config).await
    })
}
