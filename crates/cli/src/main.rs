//! vecbench CLI: seed a search index with synthetic data and compare query
//! latencies.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::VecbenchConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vecbench_bench::{compare, Comparison, MonotonicClock};
use vecbench_core::{EmbeddingVector, VectorError, VectorKind};
use vecbench_datagen::{generate_vector, DocumentGenerator, GeneratorConfig, MAX_BATCH_SIZE};
use vecbench_store::{
    count_pipeline, count_total, default_index_definition, DocumentStore, JsonLinesStore,
    StoreError,
};

#[derive(Parser, Debug)]
#[command(name = "vecbench")]
#[command(about = "Synthetic data and latency comparison tools for vector search")]
struct Args {
    /// JSON config file with `generator` and `bench` sections.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one random vector as JSON
    Vector {
        /// Vector dimension
        #[arg(long)]
        dimensions: Option<usize>,
        /// Vector kind (unit, float, int8, bit)
        #[arg(long)]
        kind: Option<VectorKind>,
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate random documents into a JSON-lines file
    Generate {
        /// Number of documents to generate
        #[arg(long)]
        count: usize,
        /// Documents per insert batch
        #[arg(long, default_value_t = MAX_BATCH_SIZE)]
        batch_cap: usize,
        /// Output file (truncated first)
        #[arg(long)]
        output: PathBuf,
        /// Vector dimension
        #[arg(long)]
        dimensions: Option<usize>,
        /// Vector kind (unit, float, int8, bit)
        #[arg(long)]
        kind: Option<VectorKind>,
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Compare generation latency of each vector kind
    BenchVectors {
        /// Vector dimension
        #[arg(long)]
        dimensions: Option<usize>,
        /// Measured trials per kind
        #[arg(long)]
        trials: Option<usize>,
        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare countDocuments against a $searchMeta count on a JSON-lines file
    BenchCount {
        /// JSON-lines file written by `generate`
        #[arg(long)]
        input: PathBuf,
        /// Measured trials per query
        #[arg(long)]
        trials: Option<usize>,
        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default search index definition
    IndexDefinition {
        /// Vector dimension
        #[arg(long)]
        dimensions: Option<usize>,
    },
}

type VectorRunnable = Box<dyn FnMut() -> Result<EmbeddingVector, VectorError>>;
type CountRunnable<'a> = Box<dyn FnMut() -> Result<u64, StoreError> + 'a>;

fn generator_config(
    base: &GeneratorConfig,
    dimensions: Option<usize>,
    kind: Option<VectorKind>,
    seed: Option<u64>,
) -> GeneratorConfig {
    let mut config = base.clone();
    if let Some(dimensions) = dimensions {
        config.dimensions = dimensions;
    }
    if let Some(kind) = kind {
        config.vector_kind = kind;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config
}

fn print_comparison(comparison: &Comparison, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(comparison)?);
    } else {
        println!("{}", comparison);
    }
    Ok(())
}

fn print_vector(config: &GeneratorConfig) -> Result<()> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let vector = generate_vector(&mut rng, config.dimensions, config.vector_kind)?;
    println!("{}", serde_json::to_string(&vector)?);
    Ok(())
}

fn generate(config: GeneratorConfig, count: usize, batch_cap: usize, output: &Path) -> Result<()> {
    let batch_cap = NonZeroUsize::new(batch_cap).context("batch cap must be > 0")?;
    let mut generator = DocumentGenerator::from_config(config)?;
    let mut store = JsonLinesStore::create(output)?;

    let total = generator.generate_and_insert(count, &mut store, batch_cap)?;
    println!("Total documents in {:?}: {}", output, total);
    Ok(())
}

fn bench_vectors(dimensions: usize, trials: usize, json: bool) -> Result<()> {
    let mut names = Vec::new();
    let mut runnables: Vec<VectorRunnable> = Vec::new();

    for kind in VectorKind::ALL {
        if let Err(e) = kind.check_dimensions(dimensions) {
            tracing::warn!("Skipping {} vectors: {}", kind, e);
            continue;
        }
        let mut rng = StdRng::from_entropy();
        names.push(kind.to_string());
        runnables.push(Box::new(move || generate_vector(&mut rng, dimensions, kind)));
    }

    let comparison = compare(&MonotonicClock::new(), &mut runnables, trials, names.as_slice())?;
    print_comparison(&comparison, json)
}

fn bench_count(input: &Path, trials: usize, json: bool) -> Result<()> {
    let store = JsonLinesStore::open(input)?;
    let pipeline = count_pipeline();

    let mut runnables: Vec<CountRunnable> = vec![
        Box::new(|| store.count_documents()),
        Box::new(|| {
            store
                .aggregate(&pipeline)
                .and_then(|results| count_total(&results))
        }),
    ];

    let comparison = compare(
        &MonotonicClock::new(),
        &mut runnables,
        trials,
        &["countDocuments", "searchMeta"],
    )?;
    print_comparison(&comparison, json)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => VecbenchConfig::load(path)?,
        None => VecbenchConfig::default(),
    };

    match args.command {
        Commands::Vector {
            dimensions,
            kind,
            seed,
        } => {
            print_vector(&generator_config(&config.generator, dimensions, kind, seed))?;
        }
        Commands::Generate {
            count,
            batch_cap,
            output,
            dimensions,
            kind,
            seed,
        } => {
            let generator = generator_config(&config.generator, dimensions, kind, seed);
            generate(generator, count, batch_cap, &output)?;
        }
        Commands::BenchVectors {
            dimensions,
            trials,
            json,
        } => {
            bench_vectors(
                dimensions.unwrap_or(config.generator.dimensions),
                trials.unwrap_or(config.bench.trials),
                json,
            )?;
        }
        Commands::BenchCount {
            input,
            trials,
            json,
        } => {
            bench_count(&input, trials.unwrap_or(config.bench.trials), json)?;
        }
        Commands::IndexDefinition { dimensions } => {
            let definition =
                default_index_definition(dimensions.unwrap_or(config.generator.dimensions));
            println!("{}", serde_json::to_string_pretty(&definition)?);
        }
    }

    Ok(())
}
