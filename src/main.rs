//! Anagram Finder CLI
//!
//! One-shot and interactive front ends for the anagram search.

use anagram_finder::{
    load_dictionary, load_lexicon, AnagramSolver, QueryError, DEFAULT_MAX_LETTERS,
};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, Level};

const HELP_TEXT: &str = include_str!("text/help.txt");

/// List every dictionary word that can be spelled from a rack of letters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Word list with one word per line. The builtin list is used if omitted.
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Longest rack accepted. 0 disables the limit.
    #[arg(short, long, default_value_t = DEFAULT_MAX_LETTERS)]
    max_letters: usize,

    /// Log more; repeat for debug output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the words for one or more racks.
    Find {
        #[arg(required = true)]
        letters: Vec<String>,
    },
    /// Check whether words are in the dictionary.
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Show dictionary size.
    Stats,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn print_words(letters: &str, words: &[String]) {
    println!("{} ({} words)", letters, words.len());
    for word in words {
        println!("  {}", word);
    }
}

fn print_stats(solver: &AnagramSolver) {
    let lexicon = solver.lexicon();
    println!("Words: {}", lexicon.word_count());
    println!("Nodes: {}", lexicon.node_count());
    match solver.max_letters() {
        Some(max) => println!("Max letters: {}", max),
        None => println!("Max letters: unlimited"),
    }
}

fn print_check(solver: &AnagramSolver, word: &str) {
    if solver.is_word(word) {
        println!("{}: yes", word);
    } else {
        println!("{}: no", word);
    }
}

/// One line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum PromptLine<'a> {
    Blank,
    Help,
    Quit,
    Stats,
    Check(Vec<&'a str>),
    Find(Vec<&'a str>),
    Usage(&'static str),
}

/// A line is a command only when its first token is a command word. Any
/// other line is a list of racks, one per token. `find` searches its
/// arguments as racks even when they are spelled like commands.
fn parse_prompt_line(line: &str) -> PromptLine<'_> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = parts.first() else {
        return PromptLine::Blank;
    };
    let rest = parts[1..].to_vec();

    match first {
        "help" | "?" if rest.is_empty() => PromptLine::Help,
        "quit" | "exit" if rest.is_empty() => PromptLine::Quit,
        "stats" if rest.is_empty() => PromptLine::Stats,
        "check" if rest.is_empty() => PromptLine::Usage("Usage: check <word>..."),
        "check" => PromptLine::Check(rest),
        "find" if rest.is_empty() => PromptLine::Usage("Usage: find <letters>..."),
        "find" => PromptLine::Find(rest),
        _ => PromptLine::Find(parts),
    }
}

/// Print every rack's matches, then fail if any rack was rejected.
fn report_racks(results: Vec<(String, Result<Vec<String>, QueryError>)>) -> anyhow::Result<()> {
    let mut rejected = 0;
    for (rack, result) in results {
        match result {
            Ok(words) => print_words(&rack, &words),
            Err(err) => {
                eprintln!("{}: {}", rack, err);
                rejected += 1;
            }
        }
    }
    if rejected > 0 {
        bail!("one or more racks were rejected");
    }
    Ok(())
}

fn run_interactive(solver: &AnagramSolver) -> anyhow::Result<()> {
    println!(
        "Loaded {} words. Type letters to search, or 'help'.",
        solver.lexicon().word_count()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_prompt_line(&line) {
            PromptLine::Blank => continue,
            PromptLine::Help => println!("{}", HELP_TEXT),
            PromptLine::Quit => break,
            PromptLine::Stats => print_stats(solver),
            PromptLine::Usage(usage) => println!("{}", usage),
            PromptLine::Check(words) => {
                for word in words {
                    print_check(solver, word);
                }
            }
            PromptLine::Find(racks) => {
                if let Err(err) = report_racks(solver.solve_many(&racks)) {
                    println!("{}", err);
                }
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let lexicon = match &cli.dict {
        Some(path) => load_lexicon(path)
            .with_context(|| format!("could not load dictionary {}", path.display()))?,
        None => load_dictionary(),
    };

    let max_letters = (cli.max_letters > 0).then_some(cli.max_letters);
    let solver = AnagramSolver::new(Arc::new(lexicon)).with_max_letters(max_letters);

    match cli.command {
        Some(Command::Find { letters }) => report_racks(solver.solve_many(&letters))?,
        Some(Command::Check { words }) => {
            for word in &words {
                print_check(&solver, word);
            }
        }
        Some(Command::Stats) => print_stats(&solver),
        None => run_interactive(&solver)?,
    }

    Ok(())
}
