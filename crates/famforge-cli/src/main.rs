use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use famforge_cli::{run_batch, BatchError, BatchOptions};
use famforge_render::PdfRenderer;

#[derive(Debug, Error)]
enum CliError {
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),
}

#[derive(Parser, Debug)]
#[command(
    name = "famforge",
    version,
    about = "Synthetic household registration document generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch of household registration PDFs.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// How many documents to generate.
    #[arg(long, default_value_t = 10)]
    count: u32,
    /// Output directory for documents and the run manifest.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
    /// Output name template: {prefix}_{index}.pdf, index starting at 1.
    #[arg(long, default_value = "household_record")]
    prefix: String,
    /// Seed the random source for a reproducible batch.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let options = BatchOptions {
        count: args.count,
        out_dir: args.out_dir,
        prefix: args.prefix,
        seed: args.seed,
    };

    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let mut renderer = PdfRenderer::new();
    let report = run_batch(&options, &mut rng, &mut renderer)?;

    for path in &report.outputs {
        println!("{}", path.display());
    }
    Ok(())
}
