use std::{fs, path::{Path, PathBuf}};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vector_space_model::{EngineConfig, Hits, ScoringMode, UnknownTermPolicy, VectorSpace, VsmError};

/// Rank a directory of documents against a query with five vector space models
#[derive(Debug, Parser)]
#[command(name = "vector-space-model", version)]
struct Cli {
    /// query terms
    #[arg(short, long, required = true, num_args = 1..)]
    query: Vec<String>,

    /// directory holding one document per file
    #[arg(short, long, default_value = "./documents")]
    documents: PathBuf,

    /// number of results per ranking
    #[arg(short = 'k', long, default_value_t = 5)]
    top: usize,

    /// decimals printed per score
    #[arg(long, default_value_t = 6)]
    precision: usize,

    /// JSON engine config
    #[arg(long)]
    config: Option<PathBuf>,

    /// skip query terms missing from the vocabulary instead of failing
    #[arg(long)]
    drop_unknown: bool,
}

/// Read every regular file in `dir`, sorted by name.
/// Lines are joined with a space; the key is the file stem.
fn load_documents(dir: &Path) -> Result<(Vec<String>, Vec<String>), VsmError> {
    let mut files: Vec<_> = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    files.retain(|p| p.is_file());
    files.sort();
    if files.is_empty() {
        warn!(dir = %dir.display(), "no files found in directory");
    }

    let mut keys = Vec::with_capacity(files.len());
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        let content = fs::read_to_string(&path)?;
        documents.push(content.lines().collect::<Vec<_>>().join(" "));
        keys.push(
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string(),
        );
    }
    Ok((keys, documents))
}

fn run(cli: Cli) -> Result<(), VsmError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if cli.drop_unknown {
        config.unknown_terms = UnknownTermPolicy::Drop;
    }

    let (keys, documents) = load_documents(&cli.documents)?;
    let space = VectorSpace::with_config(&documents, config)?;
    info!(
        documents = space.len(),
        vocabulary = space.vocabulary().len(),
        "corpus loaded"
    );

    let query = vec![cli.query.join(" ")];
    println!("{:?}", query);
    for mode in ScoringMode::ALL {
        let scores = space.score(mode, &query)?;
        let mut hits = Hits::from_scores(keys.iter().cloned(), &scores);
        hits.rank(mode).top_k(cli.top);
        println!("{}:\n", mode.title());
        print!("{}", hits.display(cli.precision));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
