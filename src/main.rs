//! Command-line viewer for a seeded taskboard workspace.
//!
//! Loads an optional TOML configuration and JSON seed collections, then
//! prints one view of the workspace as JSON:
//!
//! ```text
//! taskboard --tasks tasks.json --projects projects.json list --sort dueDate --direction asc
//! ```
//!
//! `--simulate-latency` delays every store call with the remote backend's
//! latency profile, overriding any `[latency]` table in the config file.
//!
//! Logging goes to stderr and defaults to `warn`; set `RUST_LOG=debug` to
//! trace every repository call.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use serde::Serialize;
use taskboard::board::query::{SearchQuery, SortDirection, SortField, TaskSort};
use taskboard::config::{LatencyConfig, WorkspaceConfig};
use taskboard::workspace::{SeedData, Workspace};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Inspect tasks, projects and teams from seed files")]
#[command(version)]
struct Cli {
    /// Workspace configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Task seed file (JSON array)
    #[arg(long)]
    tasks: Option<PathBuf>,

    /// Project seed file (JSON array)
    #[arg(long)]
    projects: Option<PathBuf>,

    /// Team seed file (JSON array)
    #[arg(long)]
    teams: Option<PathBuf>,

    /// Delay every store call like the remote backend would
    #[arg(long)]
    simulate_latency: bool,

    /// Case-insensitive search text
    #[arg(short, long, default_value = "", global = true)]
    query: String,

    #[command(subcommand)]
    view: View,
}

#[derive(Subcommand)]
enum View {
    /// Tasks split into kanban columns
    Board,
    /// Sorted task list
    List {
        /// Sort key (title, description, status, priority, project, dueDate,
        /// createdAt, completedAt, id)
        #[arg(short, long, default_value = "createdAt")]
        sort: String,

        /// Sort direction (asc or desc)
        #[arg(short, long, default_value = "desc")]
        direction: String,
    },
    /// Projects with completion statistics
    Projects,
    /// Teams with completion statistics
    Teams,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = cli
        .config
        .as_deref()
        .map_or_else(|| Ok(WorkspaceConfig::default()), WorkspaceConfig::load)?;
    if cli.simulate_latency {
        config.latency = LatencyConfig::simulated_remote();
    }
    let seed = SeedData::from_json_strs(
        &read_seed(cli.tasks.as_deref())?,
        &read_seed(cli.projects.as_deref())?,
        &read_seed(cli.teams.as_deref())?,
    )?;
    let workspace = Workspace::with_seed(&config, seed)?;
    let query = SearchQuery::new(&cli.query);

    match cli.view {
        View::Board => print_json(&workspace.board(&query).await?),
        View::List { sort, direction } => {
            let order = TaskSort::new(
                SortField::try_from(sort.as_str())?,
                SortDirection::try_from(direction.as_str())?,
            );
            print_json(&workspace.task_list(&query, order).await?)
        }
        View::Projects => print_json(&workspace.projects().overview(&query).await?),
        View::Teams => print_json(&workspace.teams().overview(&query).await?),
    }
}

fn read_seed(path: Option<&Path>) -> Result<String> {
    path.map_or_else(
        || Ok("[]".to_owned()),
        |file| {
            fs::read_to_string(file)
                .wrap_err_with(|| format!("failed to read seed file {}", file.display()))
        },
    )
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
