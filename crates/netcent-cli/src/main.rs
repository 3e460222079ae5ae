#![forbid(unsafe_code)]

mod output;

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use netcent_core::config::RunConfig;
use netcent_core::layout::{LayoutKind, LayoutParams};
use netcent_core::pipeline::{self, RunSummary};
use output::{OutputMode, pretty_kv, pretty_section};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "netcent",
    author,
    version,
    about = "netcent: centrality tables and layout images for weighted edge lists",
    long_about = None,
    after_help = "EXAMPLES:\n    # One file, default spring layout\n    netcent -f data/edges.tsv\n\n    # Every edge list in a directory, scaled circular layout\n    netcent -f data/ -l circular --scale-nodes --scale-edges -o results"
)]
struct Cli {
    /// Edge-list file, or a directory of edge-list files.
    #[arg(short = 'f', long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Layout algorithm: kamada_kawai, circular, spring or random.
    #[arg(short, long, default_value = "spring", value_name = "NAME")]
    layout: String,

    /// Scale node size by degree.
    #[arg(long)]
    scale_nodes: bool,

    /// Scale edge width by weight.
    #[arg(long)]
    scale_edges: bool,

    /// Directory for tables and images (overrides the config file).
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// TOML run configuration.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the random and spring layouts (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the run summary as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        OutputMode::from_json_flag(self.json)
    }

    fn layout_params(&self) -> netcent_core::Result<LayoutParams> {
        Ok(LayoutParams {
            layout: LayoutKind::from_str(&self.layout)?,
            scale_node_by_degree: self.scale_nodes,
            scale_edge_by_weight: self.scale_edges,
        })
    }

    /// Config file (or defaults) with command-line overrides applied.
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(dir) = &self.output_dir {
            config.output.dir.clone_from(dir);
        }
        if let Some(seed) = self.seed {
            config.layout.seed = seed;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("NETCENT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "netcent=debug,info"
        } else {
            "netcent=info,warn"
        })
    });

    let format = env::var("NETCENT_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn display(path: Option<&Path>) -> String {
    path.map_or_else(|| "-".to_string(), |p| p.display().to_string())
}

fn print_summary(summary: &RunSummary, w: &mut dyn Write) -> io::Result<()> {
    for file in &summary.files {
        pretty_section(w, &file.input.display().to_string())?;
        if let Some(stats) = &file.stats {
            pretty_kv(
                w,
                "graph",
                format!(
                    "{} nodes, {} edges, {} component(s)",
                    stats.node_count, stats.edge_count, stats.component_count
                ),
            )?;
        }
        pretty_kv(w, "table", display(file.table.as_deref()))?;
        pretty_kv(w, "image", display(file.image.as_deref()))?;
        for err in &file.errors {
            pretty_kv(w, "error", err)?;
        }
    }
    writeln!(w)?;
    writeln!(
        w,
        "{} of {} file(s) fully processed into {}",
        summary.processed(),
        summary.files.len(),
        summary.output_dir.display()
    )
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    // Layout and config problems abort before any input is touched.
    let params = cli.layout_params()?;
    let config = cli.run_config()?;
    debug!(?params, ?config, "resolved run settings");

    let summary = pipeline::run(&cli.input, &params, &config)?;
    output::render(cli.output_mode(), &summary, print_summary)
}
