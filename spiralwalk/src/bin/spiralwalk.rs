use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use spiralwalk::{
    load_config, parse_position, walk_dynamic_batch, BatchSummary, DataType, DynamicMatrix,
    Position, SpiralWalker, WalkerConfig,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "Spiralwalk CLI - Render ragged integer matrices in clockwise spiral order"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk one matrix document and print the result
    Walk {
        /// JSON matrix document, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        #[command(flatten)]
        walker: WalkerArgs,

        /// Also print the number of cells walked
        #[arg(long)]
        count: bool,
    },
    /// Walk several matrix documents in parallel
    Batch {
        /// JSON matrix documents
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        walker: WalkerArgs,

        /// Print totals after the walks
        #[arg(long)]
        summary: bool,
    },
    /// Show the bounding shape of a matrix document
    Shape {
        /// JSON matrix document, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Element type of the matrix cells
        #[arg(long, default_value_t = DataType::I32)]
        element_type: DataType,
    },
}

/// Options shared by every command that walks
#[derive(Args)]
struct WalkerArgs {
    /// JSON settings file with separator, null_value_replacement and origin
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text between rendered cells
    #[arg(long)]
    separator: Option<String>,

    /// Placeholder for absent rows and short rows
    #[arg(long)]
    null_value: Option<String>,

    /// Traversal origin as "x,y" (only 0,0 is supported)
    #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
    origin: Option<Position>,

    /// Element type of the matrix cells
    #[arg(long, default_value_t = DataType::I32)]
    element_type: DataType,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Walk {
            input,
            walker,
            count,
        } => handle_walk(&input, &walker, count),
        Commands::Batch {
            inputs,
            walker,
            summary,
        } => handle_batch(&inputs, &walker, summary),
        Commands::Shape {
            input,
            element_type,
        } => handle_shape(&input, element_type),
    }
}

fn handle_walk(input: &Path, args: &WalkerArgs, count: bool) -> anyhow::Result<()> {
    let walker = build_walker(args)?;
    let matrix = read_document(input, args.element_type)?;

    let walk = matrix.walk(&walker);
    tracing::info!(
        input = %input.display(),
        shape = %walk.shape(),
        placeholders = walk.placeholders(),
        "walked matrix"
    );

    println!("{walk}");
    if count {
        println!("{}", walk.elements_walked());
    }

    Ok(())
}

fn handle_batch(inputs: &[PathBuf], args: &WalkerArgs, summary: bool) -> anyhow::Result<()> {
    let walker = build_walker(args)?;
    let matrices = inputs
        .iter()
        .map(|input| read_document(input, args.element_type))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let walks = walk_dynamic_batch(&walker, &matrices);
    for (input, walk) in inputs.iter().zip(&walks) {
        println!("{}: {walk}", input.display());
    }

    if summary {
        let BatchSummary {
            matrices,
            empty,
            elements_walked,
            placeholders,
        } = BatchSummary::of(&walks);
        println!("Matrices: {matrices} ({empty} empty)");
        println!("Cells walked: {elements_walked}");
        println!("Placeholders: {placeholders}");
    }

    Ok(())
}

fn handle_shape(input: &Path, element_type: DataType) -> anyhow::Result<()> {
    let matrix = read_document(input, element_type)?;

    if matrix.is_absent() {
        println!("Absent matrix");
        return Ok(());
    }

    let shape = matrix.shape();
    println!("Rows: {}", shape.row_count);
    println!("Width: {}", shape.width);
    println!("Cells: {}", shape.theoretical_total);

    Ok(())
}

/// Settings file first, then flags on top
fn build_walker(args: &WalkerArgs) -> anyhow::Result<SpiralWalker> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => WalkerConfig::default(),
    };

    if let Some(separator) = &args.separator {
        config = config.with_separator(separator.as_str());
    }
    if let Some(null_value) = &args.null_value {
        config = config.with_null_value_replacement(null_value.as_str());
    }
    if let Some(origin) = args.origin {
        config = config.with_origin(origin);
    }

    SpiralWalker::new(config).context("invalid walker settings")
}

fn read_document(input: &Path, element_type: DataType) -> anyhow::Result<DynamicMatrix> {
    let matrix = if input == Path::new("-") {
        DynamicMatrix::from_reader(element_type, io::stdin().lock())
    } else {
        DynamicMatrix::from_file(element_type, input)
    };

    matrix.with_context(|| format!("reading {element_type} matrix from {}", input.display()))
}
