use std::{
    io::{self, BufRead},
    path::{Path, PathBuf},
    time::Instant,
};

use blog_search::{
    constants::{
        CATEGORIES_WEIGHT, DEFAULT_RESULT_LIMIT, EXCERPT_WEIGHT, TAGS_WEIGHT, TITLE_WEIGHT,
    },
    load_store, FieldWeights, IndexConfig, InvertedIndex, Result, SearchEngine, SearchResult,
};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Index words as written instead of by their English stem
    #[arg(long, global = true)]
    no_stem: bool,

    /// Weight of a word occurring in a post title
    #[arg(long, global = true, default_value_t = TITLE_WEIGHT)]
    title_weight: u32,

    /// Weight of a word occurring in a post excerpt
    #[arg(long, global = true, default_value_t = EXCERPT_WEIGHT)]
    excerpt_weight: u32,

    /// Weight of a word occurring in a post category
    #[arg(long, global = true, default_value_t = CATEGORIES_WEIGHT)]
    categories_weight: u32,

    /// Weight of a word occurring in a post tag
    #[arg(long, global = true, default_value_t = TAGS_WEIGHT)]
    tags_weight: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Builds the index from a store file or directory
    Build {
        /// Path to the store (`lunr-store.js` or a JSON array), or a directory of them
        store: PathBuf,

        /// Write the built index as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Searches the store; reads queries from stdin when none is given
    Search {
        store: PathBuf,

        query: Option<String>,

        /// Treat the input as an index written by `build --output`
        #[arg(long)]
        prebuilt: bool,

        /// Maximum number of results to print
        #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,
    },
    /// Lists indexed terms with their document frequency
    Terms {
        store: PathBuf,

        /// Only list terms starting with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Treat the input as an index written by `build --output`
        #[arg(long)]
        prebuilt: bool,
    },
}

impl Args {
    const fn index_config(&self) -> IndexConfig {
        IndexConfig {
            weights: FieldWeights {
                title: self.title_weight,
                excerpt: self.excerpt_weight,
                categories: self.categories_weight,
                tags: self.tags_weight,
            },
            stem: !self.no_stem,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_search=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = args.index_config();

    match args.command {
        Command::Build { store, output } => {
            let index = build_index(&store, config)?;

            if let Some(output) = output {
                index.write_index(&output)?;
            }
        }
        Command::Search {
            store,
            query,
            prebuilt,
            limit,
        } => {
            let index = open_index(&store, config, prebuilt)?;
            let search = SearchEngine::new(index);

            match query {
                Some(query) => print_results(&query, &search.search(&query)?, limit),
                None => interactive(&search, limit)?,
            }
        }
        Command::Terms {
            store,
            prefix,
            prebuilt,
        } => {
            let index = open_index(&store, config, prebuilt)?;

            match prefix {
                Some(prefix) => {
                    for (term, postings) in index.terms_with_prefix(&prefix.to_lowercase()) {
                        println!("{term}\t{}", postings.len());
                    }
                }
                None => {
                    for (term, df) in index.terms() {
                        println!("{term}\t{df}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_index(store: &Path, config: IndexConfig) -> Result<InvertedIndex> {
    let documents = load_store(store)?;
    info!(path = %store.display(), records = documents.len(), "Loaded store");

    InvertedIndex::from_documents(config, documents)
}

fn open_index(path: &Path, config: IndexConfig, prebuilt: bool) -> Result<InvertedIndex> {
    if prebuilt {
        InvertedIndex::read_index(path)
    } else {
        build_index(path, config)
    }
}

fn interactive(search: &SearchEngine, limit: usize) -> Result<()> {
    println!("Enter Search Query:");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let query = line.trim();

        if query == "exit" {
            break;
        }

        let start = Instant::now();
        match search.search(query) {
            Ok(results) => print_results(query, &results, limit),
            Err(e) => println!("{e}"),
        }
        println!("Time taken: {:?}", start.elapsed());
    }

    Ok(())
}

fn print_results(query: &str, results: &[SearchResult], limit: usize) {
    println!("Results for '{query}': {}", results.len());

    for result in results.iter().take(limit) {
        println!("{:>8.4}  {}  {}", result.score, result.url, result.title);
    }
}
