//! depgraph CLI - dependency graph ordering and inspection

use clap::{Parser, Subcommand};
use colored::Colorize;

use depgraph::demo::{self, COAT, UNDERPANTS};
use depgraph::{
    topological_sort, DiscoverReachableSetVisitor, Direction, FindSourceNodesVisitor,
    FixSuggestion, Graph, GraphError, GraphFile, PrintVisitor,
};

#[derive(Parser)]
#[command(name = "depgraph")]
#[command(about = "Dependency graph ordering and inspection")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in clothing example
    Demo {
        /// Add coat → underpants so the ordering fails
        #[arg(long)]
        cycle: bool,
    },

    /// Print a topological order of a graph file
    Sort {
        /// Path to a graph YAML file
        file: String,
    },

    /// Print vertices without predecessors
    Sources {
        /// Path to a graph YAML file
        file: String,
    },

    /// Print the connected component size of every vertex
    Components {
        /// Path to a graph YAML file
        file: String,
    },

    /// Depth-first walk from one vertex
    Walk {
        /// Path to a graph YAML file
        file: String,

        /// Start vertex
        #[arg(short, long)]
        from: String,

        /// Follow incoming edges instead of outgoing ones
        #[arg(long)]
        incident: bool,
    },

    /// Validate a graph file (parse and build only)
    Validate {
        /// Path to a graph YAML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (stderr keeps stdout clean for piping)
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Demo { cycle } => run_demo(cycle),
        Commands::Sort { file } => load(&file).and_then(print_order),
        Commands::Sources { file } => load(&file).and_then(|g| print_sources(&g)),
        Commands::Components { file } => load(&file).and_then(|g| print_components(&g)),
        Commands::Walk {
            file,
            from,
            incident,
        } => load(&file).and_then(|g| walk(&g, &from, incident)),
        Commands::Validate { file } => validate(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn load(file: &str) -> Result<Graph<String, f32>, GraphError> {
    GraphFile::load(file)?.build()
}

fn run_demo(cycle: bool) -> Result<(), GraphError> {
    let mut graph = demo::clothing_graph()?;
    if cycle {
        graph.add_forward_default(COAT, UNDERPANTS)?;
    }

    println!("{}", "Components:".cyan().bold());
    print_components(&graph)?;
    println!("{}", "Sources:".cyan().bold());
    print_sources(&graph)?;
    println!("{}", "Order:".cyan().bold());
    print_order(graph)
}

fn print_order(graph: Graph<String, f32>) -> Result<(), GraphError> {
    for (i, key) in topological_sort(graph)?.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, key);
    }
    Ok(())
}

fn print_sources(graph: &Graph<String, f32>) -> Result<(), GraphError> {
    let mut visitor = FindSourceNodesVisitor::new();
    for key in graph.list_vertex_keys() {
        graph.accept(&key, &mut visitor)?;
    }
    for key in visitor.sources() {
        println!("  {}", key.green());
    }
    Ok(())
}

fn print_components(graph: &Graph<String, f32>) -> Result<(), GraphError> {
    for key in graph.list_vertex_keys() {
        let mut visitor = DiscoverReachableSetVisitor::new();
        graph.accept(&key, &mut visitor)?;
        println!(
            "  found component of size {} starting at {}",
            visitor.len(),
            key.bold()
        );
    }
    Ok(())
}

fn walk(graph: &Graph<String, f32>, from: &str, incident: bool) -> Result<(), GraphError> {
    let direction = if incident {
        Direction::Incident
    } else {
        Direction::Adjacent
    };
    let mut visitor = PrintVisitor::stdout(direction);
    graph.accept(from, &mut visitor)
}

fn validate(file: &str) -> Result<(), GraphError> {
    let graph = load(file)?;

    println!("{} Graph '{}' is valid", "✓".green(), file);
    println!("  Vertices: {}", graph.len());
    println!("  Edges: {}", graph.edge_count());
    println!("  Sources: {}", graph.source_keys().len());
    Ok(())
}
