//! Boggle Solver CLI
//!
//! Command-line front end for the word search.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use boggle_solver::{solve_all, Config, Error, Lexicon, OutputFormat, Position, Result, WordCheck, WordGroups};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

#[derive(Parser)]
#[command(name = "boggle-solver", version, about, before_help = BANNER_TEXT, after_help = USAGE_TEXT)]
struct Cli {
    /// Word list, one word per line. Defaults to the bundled list.
    #[arg(long, short, global = true, env = "BOGGLE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Log search details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find every word on one board.
    Solve {
        /// Tile tokens, row by row.
        #[arg(required = true)]
        tokens: Vec<String>,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
        /// Show the tiles used to spell each word.
        #[arg(long)]
        paths: bool,
    },
    /// Solve every board in a file, one board per line.
    Batch {
        file: PathBuf,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Look words up in the dictionary.
    Check {
        #[arg(required = true)]
        words: Vec<String>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Serialize)]
struct SolveOutput<'a> {
    words: &'a WordGroups,
    word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<&'a BTreeMap<String, Vec<Position>>>,
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    board: usize,
    word_count: usize,
    words: &'a WordGroups,
}

#[derive(Serialize)]
struct CheckEntry<'a> {
    word: &'a str,
    check: WordCheck,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_groups(words: &WordGroups) {
    for (len, group) in words.iter() {
        println!("{} letters ({}):", len, group.len());
        for chunk in group.chunks(8) {
            println!("  {}", chunk.join(" "));
        }
    }
    println!();
    println!("Total: {} words", words.word_count());
}

fn solve(config: &Config, lexicon: &Lexicon, tokens: &[String]) -> Result<()> {
    let mut board = config.parse_board(&tokens.join(" "))?;
    let report = board.search(lexicon);

    match config.format {
        OutputFormat::Json => {
            let output = SolveOutput {
                words: &report.words,
                word_count: report.words.word_count(),
                paths: config.show_paths.then_some(&report.paths),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{}", board);
            println!();
            if report.words.is_empty() {
                println!("No words found.");
                return Ok(());
            }
            print_groups(&report.words);
            if config.show_paths {
                println!();
                for (word, path) in &report.paths {
                    let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
                    println!("{:>12}  {}", word, steps.join(" → "));
                }
            }
        }
    }
    Ok(())
}

fn batch(config: &Config, lexicon: &Lexicon, file: &Path) -> Result<()> {
    let contents = fs::read_to_string(file).map_err(|source| Error::Boards {
        path: file.to_path_buf(),
        source,
    })?;
    let mut boards = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| config.parse_board(line))
        .collect::<Result<Vec<_>>>()?;

    let results = solve_all(&mut boards, lexicon);

    match config.format {
        OutputFormat::Json => {
            let entries: Vec<BatchEntry> = results
                .iter()
                .enumerate()
                .map(|(i, words)| BatchEntry {
                    board: i + 1,
                    word_count: words.word_count(),
                    words,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            for (i, words) in results.iter().enumerate() {
                let longest = words.lengths().last().unwrap_or(0);
                println!(
                    "Board {:>4}: {:>5} words, longest {} letters",
                    i + 1,
                    words.word_count(),
                    longest
                );
            }
            let total: usize = results.iter().map(WordGroups::word_count).sum();
            println!();
            println!("Solved {} boards, {} words in total.", results.len(), total);
        }
    }
    Ok(())
}

fn check(config: &Config, lexicon: &Lexicon, words: &[String]) -> Result<()> {
    let words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let entries: Vec<CheckEntry> = words
        .iter()
        .map(|word| CheckEntry {
            word,
            check: lexicon.check_word(word),
        })
        .collect();

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!("{:>12}: {}", entry.word, entry.check);
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config {
        dictionary: cli.dictionary,
        ..Config::default()
    };
    let lexicon = config.load_lexicon()?;

    match cli.command {
        Command::Solve {
            tokens,
            width,
            height,
            format,
            paths,
        } => {
            config.width = width;
            config.height = height;
            config.format = format;
            config.show_paths = paths;
            solve(&config, &lexicon, &tokens)
        }
        Command::Batch {
            file,
            width,
            height,
            format,
        } => {
            config.width = width;
            config.height = height;
            config.format = format;
            batch(&config, &lexicon, &file)
        }
        Command::Check { words, format } => {
            config.format = format;
            check(&config, &lexicon, &words)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
