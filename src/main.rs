use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod catalog;
mod config;
mod logging;
mod rest;
mod submit;

use catalog::{Catalog, Criteria, EngagementLevel, SortDirection, SortField, Status};
use config::Config;

#[derive(Parser)]
#[command(name = "moltdex")]
#[command(about = "Directory and comparison service for Moltbook ecosystem projects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Serve {
        /// Port to listen on (default: 7036)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List catalog projects, filtered and sorted
    List {
        /// Case-insensitive substring search
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category match
        #[arg(long)]
        category: Option<String>,

        /// Status filter (Live, Beta, "In Development")
        #[arg(long)]
        status: Option<String>,

        /// Engagement filter (High, Medium, Low, Emerging)
        #[arg(long)]
        engagement: Option<String>,

        /// Open-source filter
        #[arg(long)]
        open_source: Option<bool>,

        /// Sort field (name, category, status, engagement, features, launch)
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (asc, desc)
        #[arg(long, default_value = "asc")]
        direction: String,
    },

    /// Show aggregate catalog statistics
    Stats,

    /// List distinct categories
    Categories,

    /// Print the OpenAPI specification
    Openapi {
        /// Emit YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Serve mode may log to file; CLI commands log to stderr
    let is_serve_mode = matches!(&cli.command, None | Some(Commands::Serve { .. }));
    let logging_handle = logging::init_logging(&config, is_serve_mode, cli.debug)?;

    match cli.command {
        Some(Commands::List {
            search,
            category,
            status,
            engagement,
            open_source,
            sort,
            direction,
        }) => {
            cmd_list(
                &config,
                search,
                category,
                status,
                engagement,
                open_source,
                sort,
                &direction,
            )?;
        }
        Some(Commands::Stats) => {
            cmd_stats(&config)?;
        }
        Some(Commands::Categories) => {
            cmd_categories(&config)?;
        }
        Some(Commands::Openapi { yaml }) => {
            cmd_openapi(yaml)?;
        }
        Some(Commands::Serve { port }) => {
            cmd_serve(config, port, logging_handle.log_file_path.clone()).await?;
        }
        // No subcommand = serve on the configured port
        None => {
            cmd_serve(config, None, logging_handle.log_file_path.clone()).await?;
        }
    }

    Ok(())
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    match config.seed_path() {
        Some(path) => Catalog::from_path(&path),
        None => Catalog::builtin(),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_list(
    config: &Config,
    search: Option<String>,
    category: Option<String>,
    status: Option<String>,
    engagement: Option<String>,
    open_source: Option<bool>,
    sort: Option<String>,
    direction: &str,
) -> Result<()> {
    let catalog = load_catalog(config)?;

    let status = status
        .as_deref()
        .map(|s| Status::parse(s).ok_or_else(|| anyhow::anyhow!("unknown status '{s}'")))
        .transpose()?;
    let engagement = engagement
        .as_deref()
        .map(|s| {
            EngagementLevel::parse(s)
                .ok_or_else(|| anyhow::anyhow!("unknown engagement level '{s}'"))
        })
        .transpose()?;
    let sort = sort
        .as_deref()
        .map(|s| SortField::parse(s).ok_or_else(|| anyhow::anyhow!("unknown sort field '{s}'")))
        .transpose()?;
    let direction = SortDirection::parse(direction)
        .ok_or_else(|| anyhow::anyhow!("unknown direction '{direction}'"))?;

    let criteria = Criteria {
        search,
        category,
        status,
        engagement,
        open_source,
    };

    let projects = catalog.query(&criteria, sort, direction);

    if projects.is_empty() {
        println!("No projects match");
        return Ok(());
    }

    println!("{} projects", projects.len());
    println!("{}", "─".repeat(72));
    for project in projects {
        println!(
            "{:<24} {:<22} {:<14} {}",
            project.name,
            project.category,
            project.status,
            project.popularity.engagement_level
        );
    }

    Ok(())
}

fn cmd_stats(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    let stats = catalog.stats();

    println!("Catalog: {} projects", stats.total);
    println!(
        "Open source: {} ({}%), closed source: {}",
        stats.open_source_count, stats.open_source_percent, stats.closed_source_count
    );

    println!("\nBy status:");
    for (status, count) in &stats.by_status {
        println!("  {status:<16} {count}");
    }

    println!("\nBy engagement:");
    for (level, count) in &stats.by_engagement {
        println!("  {level:<16} {count}");
    }

    println!("\nBy category:");
    for (category, count) in &stats.by_category {
        println!("  {category:<24} {count}");
    }

    Ok(())
}

fn cmd_categories(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;
    for category in catalog.categories() {
        println!("{category}");
    }
    Ok(())
}

fn cmd_openapi(yaml: bool) -> Result<()> {
    let spec = if yaml {
        rest::ApiDoc::yaml()?
    } else {
        rest::ApiDoc::json()?
    };
    println!("{spec}");
    Ok(())
}

async fn cmd_serve(config: Config, port: Option<u16>, log_file: Option<PathBuf>) -> Result<()> {
    let port = port.unwrap_or(config.server.port);

    println!("Starting Moltdex API server...");
    println!("  Port: {port}");
    if let Some(path) = &log_file {
        println!("  Log file: {}", path.display());
    }
    println!("  Endpoints:");
    println!("    GET  /api/v1/health             Health check");
    println!("    GET  /api/v1/status             Server status");
    println!("    GET  /api/v1/projects           List projects");
    println!("    GET  /api/v1/projects/:name     Get project");
    println!("    GET  /api/v1/stats              Aggregate statistics");
    println!("    GET  /api/v1/categories         Distinct categories");
    println!("    POST /api/v1/compare            Compare selection");
    println!("    POST /api/v1/submissions        Submit new entry");
    println!("    GET  /docs                      Swagger UI");
    println!();

    let state = rest::ApiState::from_config(config)?;
    rest::serve(state, port).await?;

    Ok(())
}
