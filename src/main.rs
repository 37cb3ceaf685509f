//! Wordle Art - CLI
//!
//! Finds which Wordle art grid designs a solution word can draw, checks custom
//! designs and rebuilds the design rarity table.

use anyhow::Result;
use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_art::{
    catalog::{
        RarityTable, default_catalog, default_rarity_table,
        loader::{load_catalog, load_rarity_table, save_rarity_table},
    },
    checker::{Checker, DEFAULT_MAX_WORDS, RarityConfig},
    commands::{
        CUSTOM_DESIGN_NAME, CheckConfig, DesignConfig, SamplePicker, check_design, check_word,
        run_rarity, score_guess,
    },
    core::GridDesign,
    output::{
        print_check_result, print_design_result, print_feedback_result, print_rarity_result,
        rarity_progress_bar, update_rarity_progress,
    },
    wordlists::{Dictionary, loader::load_from_file},
};

/// Value selecting the data compiled into the binary
const EMBEDDED: &str = "embedded";

#[derive(Parser)]
#[command(
    name = "wordle_art",
    about = "Find which Wordle art designs a solution word can draw",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Design catalog: 'embedded' (default) or path to a JSON file
    #[arg(short = 'c', long, global = true, default_value = EMBEDDED)]
    catalog: String,

    /// Rarity table: 'embedded' (default) or path to a JSON file
    #[arg(short = 'r', long, global = true, default_value = EMBEDDED)]
    rarity: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a solution word against every catalog design
    Check {
        /// The solution word
        word: String,

        /// Matching guesses kept per row
        #[arg(short, long, default_value_t = DEFAULT_MAX_WORDS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
        max_words: usize,

        /// Show only the N rarest designs
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show matching guesses for every row
        #[arg(short, long)]
        details: bool,

        /// Pick sample guesses at random instead of in dictionary order
        #[arg(long)]
        random: bool,
    },

    /// Check a custom grid, e.g. "--Y--/-YGY-/GGGGG"
    Design {
        /// The solution word
        word: String,

        /// Rows of G (green), Y (yellow) and - (grey) separated by '/'
        grid: String,

        /// Design name
        #[arg(short, long, default_value = CUSTOM_DESIGN_NAME)]
        name: String,

        /// Do not try the mirrored grid
        #[arg(long)]
        no_mirror: bool,

        /// Matching guesses kept per row
        #[arg(short, long, default_value_t = DEFAULT_MAX_WORDS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
        max_words: usize,

        /// Show matching guesses for every row
        #[arg(short, long)]
        details: bool,

        /// Pick sample guesses at random instead of in dictionary order
        #[arg(long)]
        random: bool,
    },

    /// Show the feedback a guess gets against a solution
    Feedback {
        guess: String,
        solution: String,
    },

    /// Rebuild the rarity table for the catalog over the whole word list
    Rarity {
        /// Output JSON file
        #[arg(short, long, default_value = "rarity.json")]
        output: PathBuf,

        /// Solution words listed per design before switching to a count
        #[arg(short, long, default_value_t = RarityConfig::default().max_words_to_track)]
        track: usize,

        /// Progress step in percent (0 to disable)
        #[arg(short, long, default_value_t = RarityConfig::default().notify_every_percent)]
        notify: usize,
    },
}

/// Data every command may need, loaded once up front
struct Resources {
    dictionary: Dictionary,
    catalog: Vec<GridDesign>,
    rarity: RarityTable,
}

/// Load word list, catalog and rarity table from the global flags
///
/// - "embedded": data compiled into the binary
/// - "<path>": load from file
fn load_resources(cli: &Cli) -> Result<Resources> {
    let dictionary = match cli.wordlist.as_str() {
        EMBEDDED => Dictionary::embedded(),
        path => load_from_file(path)?,
    };

    let catalog = match cli.catalog.as_str() {
        EMBEDDED => default_catalog()?,
        path => load_catalog(path)?,
    };

    let rarity = match cli.rarity.as_str() {
        EMBEDDED => default_rarity_table()?,
        path => load_rarity_table(path)?,
    };

    Ok(Resources {
        dictionary,
        catalog,
        rarity,
    })
}

const fn picker(random: bool) -> SamplePicker {
    if random {
        SamplePicker::Random
    } else {
        SamplePicker::First
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let resources = load_resources(&cli)?;
    let checker = Checker::new(&resources.dictionary, &resources.rarity);

    match cli.command {
        Commands::Check {
            word,
            max_words,
            limit,
            details,
            random,
        } => {
            let config = CheckConfig {
                max_words,
                limit,
                picker: picker(random),
                ..CheckConfig::new(word)
            };
            run_check_command(config, details, &checker, &resources.catalog)
        }
        Commands::Design {
            word,
            grid,
            name,
            no_mirror,
            max_words,
            details,
            random,
        } => {
            let config = DesignConfig {
                name,
                can_mirror: !no_mirror,
                max_words,
                picker: picker(random),
                ..DesignConfig::new(word, grid)
            };
            run_design_command(config, details, &checker)
        }
        Commands::Rarity {
            output,
            track,
            notify,
        } => {
            let config = RarityConfig {
                max_words_to_track: track,
                notify_every_percent: notify,
            };
            run_rarity_command(&config, &output, &resources)
        }
        Commands::Feedback { guess, solution } => run_feedback_command(&guess, &solution),
    }
}

fn run_check_command(
    config: CheckConfig,
    details: bool,
    checker: &Checker<'_>,
    catalog: &[GridDesign],
) -> Result<()> {
    let result = check_word(config, checker, catalog).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result, details);
    Ok(())
}

fn run_design_command(config: DesignConfig, details: bool, checker: &Checker<'_>) -> Result<()> {
    let max_words = config.max_words;
    let result = check_design(config, checker).map_err(|e| anyhow::anyhow!(e))?;
    print_design_result(&result, max_words, details);
    Ok(())
}

fn run_feedback_command(guess: &str, solution: &str) -> Result<()> {
    let result = score_guess(guess, solution).map_err(|e| anyhow::anyhow!(e))?;
    print_feedback_result(&result);
    Ok(())
}

fn run_rarity_command(config: &RarityConfig, output: &Path, resources: &Resources) -> Result<()> {
    println!(
        "Computing rarity for {} designs over {} words...",
        resources.catalog.len(),
        resources.dictionary.len()
    );

    let pb = rarity_progress_bar();
    let result = run_rarity(&resources.dictionary, &resources.catalog, config, |progress| {
        update_rarity_progress(&pb, progress);
    })
    .map_err(|e| anyhow::anyhow!(e))?;
    pb.finish_with_message("Complete!");

    save_rarity_table(&result.table, output)?;
    print_rarity_result(&result, output);
    Ok(())
}
