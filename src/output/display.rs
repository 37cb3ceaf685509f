//! Display functions for command results

use super::formatters::{colored_rarity, create_bar, row_to_emoji, word_list};
use crate::commands::{CheckResult, DesignReport, DesignResult, FeedbackResult, RarityResult};
use colored::Colorize;
use std::path::Path;

/// Matches shown per row with `--details`
const DETAIL_WORDS: usize = 6;

/// Print the designs a word can draw
pub fn print_check_result(result: &CheckResult, details: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDLE ART FOR".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.designs.is_empty() {
        println!("\n{}", "No catalog design can be drawn with this word".red());
        return;
    }

    println!(
        "\n🎨 {} achievable designs, rarest first",
        result.total.to_string().bright_yellow().bold()
    );
    if result.designs.len() < result.total {
        println!("   showing the first {}", result.designs.len());
    }

    for report in &result.designs {
        print_design_report(report, result.max_words, details);
    }
}

/// Print a custom design check
pub fn print_design_result(result: &DesignResult, max_words: usize, details: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {} ",
        result.design.name().bright_cyan().bold(),
        "for".bright_cyan(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    match &result.direct {
        Some(report) => {
            println!("\n{}", "✅ Achievable as drawn".green().bold());
            print_design_report(report, max_words, details);
        }
        None => {
            println!("\n{}", "❌ Not achievable as drawn".red().bold());
            for row in result.design.grid() {
                println!("   {}", row_to_emoji(row));
            }
        }
    }

    let others: Vec<&DesignReport> = result
        .variations
        .iter()
        .filter(|report| report.result.name() != result.design.name())
        .collect();
    if others.is_empty() {
        println!("\nNo other variation is achievable");
        return;
    }

    println!("\n🔀 {}", "Achievable variations".bright_cyan().bold());
    for report in others {
        print_design_report(report, max_words, details);
    }
}

fn print_design_report(report: &DesignReport, max_words: usize, details: bool) {
    let result = &report.result;
    println!(
        "\n  {}  rarity {}  fill {:>3}%  difficulty {}",
        result.name().bold(),
        colored_rarity(result.rarity),
        result.color_fill,
        result.difficulty
    );

    let rows = result.design.grid().iter().zip(&report.sample);
    for ((row, guess), matches) in rows.zip(&result.guesses) {
        if details {
            let found = if matches.len() >= max_words {
                format!("{max_words}+")
            } else {
                matches.len().to_string()
            };
            println!(
                "   {}  {}  {} {}",
                row_to_emoji(row),
                guess.to_uppercase(),
                format!("[{found:>3}]").bright_black(),
                word_list(matches, DETAIL_WORDS).bright_black()
            );
        } else {
            println!("   {}  {}", row_to_emoji(row), guess.to_uppercase());
        }
    }
}

/// Print the feedback of one guess
pub fn print_feedback_result(result: &FeedbackResult) {
    println!(
        "\n{} vs {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.solution.to_uppercase().bold()
    );
    println!("   {}", row_to_emoji(&result.row));
}

/// Print a rarity run summary
pub fn print_rarity_result(result: &RarityResult, output: &Path) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RARITY TABLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Words checked:    {}", result.words);
    println!("   Base designs:     {}", result.designs);
    println!("   Variant names:    {}", result.table.len());
    println!("   Listed by word:   {}", result.tracked());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let mut rarest: Vec<(&str, usize)> = result
        .table
        .iter()
        .map(|(name, entry)| (name, entry.count()))
        .collect();
    rarest.sort_by_key(|&(_, count)| count);

    if let Some(&(_, most)) = rarest.last() {
        println!("\n💎 {}", "Rarest designs".bright_cyan().bold());
        for (name, count) in rarest.iter().take(5) {
            println!(
                "   {:<28} {} {count}",
                name,
                create_bar(*count as f64, most as f64, 20).green()
            );
        }
    }

    println!(
        "\n{} {}",
        "✅ Written to".green().bold(),
        output.display().to_string().bright_yellow()
    );
}
