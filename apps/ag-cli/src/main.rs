use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ag_graph::{CompiledGraph, GraphCompiler, GraphResult};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

mod config;
mod error;

use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "ag-cli")]
#[command(about = "asciigraph CLI - compile ASCII-art diagrams into graphs", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Log elapsed time per compilation stage
    #[arg(long, global = true)]
    timing: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile one diagram and print its vertices and adjacency matrix
    Compile {
        /// Path to the diagram file
        path: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Print the token stream of a diagram
    Tokens {
        /// Path to the diagram file
        path: PathBuf,
    },
    /// Compile every *.graph file in a directory
    Check {
        /// Directory holding the diagrams
        dir: PathBuf,
        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(clap::Args)]
struct OptionArgs {
    /// YAML file with compiler options
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report every stray or overconnected segment, not just the first
    #[arg(long)]
    all_errors: bool,
}

impl OptionArgs {
    fn compiler(&self) -> CliResult<GraphCompiler> {
        let options = config::resolve_options(self.config.as_deref(), self.all_errors)?;
        Ok(GraphCompiler::with_options(options))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
    if cli.timing {
        ag_core::timing::enable_timing();
    }

    let result = match cli.command {
        Commands::Compile {
            path,
            json,
            options,
        } => cmd_compile(&path, json, &options),
        Commands::Tokens { path } => cmd_tokens(&path),
        Commands::Check { dir, options } => cmd_check(&dir, &options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn cmd_compile(path: &Path, json: bool, options: &OptionArgs) -> CliResult<()> {
    let text = read(path)?;
    let graph = options.compiler()?.compile(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
    } else {
        print_graph(&graph);
    }
    Ok(())
}

fn cmd_tokens(path: &Path) -> CliResult<()> {
    let text = read(path)?;
    let tokens = ag_graph::tokenize(&text).map_err(ag_graph::GraphError::from)?;
    for token in &tokens {
        println!("{token}");
    }
    Ok(())
}

fn cmd_check(dir: &Path, options: &OptionArgs) -> CliResult<()> {
    let compiler = options.compiler()?;
    let entries = std::fs::read_dir(dir).map_err(|source| CliError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "graph"))
        .collect();
    paths.sort();

    let mut failed = 0;
    for path in &paths {
        let text = read(path)?;
        println!("{}", path.display());
        println!("{}", text.trim_end_matches('\n'));
        println!("-->");
        if !report(compiler.compile(&text)) {
            failed += 1;
        }
        println!();
    }

    tracing::debug!(total = paths.len(), failed, "check finished");
    if failed > 0 {
        return Err(CliError::CheckFailed {
            failed,
            total: paths.len(),
        });
    }
    Ok(())
}

fn report(result: GraphResult<CompiledGraph>) -> bool {
    match result {
        Ok(graph) => {
            print_graph(&graph);
            true
        }
        Err(err) => {
            println!("{err}");
            false
        }
    }
}

fn print_graph(graph: &CompiledGraph) {
    let names: Vec<&str> = graph.vertices.iter().map(|v| v.name.as_str()).collect();
    println!("{names:?}");
    println!("{}", graph.adjacency);
}
