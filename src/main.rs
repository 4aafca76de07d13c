use clap::Parser;
use std::path::PathBuf;

use anagrams::AnagramIndex;

/// Look up dictionary anagrams of one or more words.
#[derive(Parser)]
struct Args {
    /// Word list file, one word per line
    words: PathBuf,
    /// Words to query
    #[arg(required = true)]
    queries: Vec<String>,
    /// Emit results as JSON instead of plain lines
    #[arg(long)]
    json: bool,
    /// Print index statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let index = AnagramIndex::from_words_file(&args.words)?;
    if args.stats {
        index.stats().report();
    }
    if args.json {
        let out: serde_json::Map<String, serde_json::Value> = args
            .queries
            .iter()
            .map(|q| (q.clone(), serde_json::json!(index.lookup(q))))
            .collect();
        println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(out))?);
    } else {
        for query in &args.queries {
            for word in index.lookup(query) {
                println!("{word}");
            }
        }
    }
    Ok(())
}
