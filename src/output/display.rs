//! Display functions for command results

use super::formatters::{colored_guess, weight_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::LetterSet;
use crate::solver::{CandidateReport, ScoredWord};
use colored::Colorize;

/// Print a candidate report
pub fn print_candidate_report(report: &CandidateReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Restrictions: {}   Candidates: {}",
        report.constraints.to_string().bright_yellow().bold(),
        report.total_candidates.to_string().bright_green().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if report.total_candidates == 0 {
        println!("\n{}", "No words match these restrictions".red().bold());
        return;
    }

    println!("\n🎯 {}", "Best candidates:".bright_cyan().bold());
    print_scored_words(&report.ranked);

    println!("\n🎣 {}", "Fishing words:".bright_cyan().bold());
    print_scored_words(&report.fishing);

    println!("\n🔤 {}", "Letter weights:".bright_cyan().bold());
    for (i, &weight) in report.letter_weights.iter().enumerate() {
        if weight == 0 {
            continue;
        }
        let letter = char::from(LetterSet::letter_at(i));
        println!(
            "   {} [{}] {weight}",
            letter.to_ascii_uppercase(),
            weight_bar(weight, report.total_candidates, 30).green()
        );
    }
}

fn print_scored_words(words: &[ScoredWord]) {
    for (i, scored) in words.iter().enumerate() {
        println!(
            "   {:>3}. {} {}",
            i + 1,
            scored.word.text().to_uppercase(),
            format!("{:.2}", scored.score).bright_black()
        );
    }
}

/// Print the result of solving a word
#[allow(clippy::cast_precision_loss)]
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            if let (Some(before), Some(after)) = (step.candidates_before, step.candidates_after) {
                println!("  Candidates: {before} → {after}");
                if after > 0 {
                    println!("  Reduction:  {:.1}x", before as f64 / after as f64);
                }
            }
        }
    }

    println!();
    match &result.failure {
        None => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        ),
        Some(failure) => println!(
            "{}",
            format!("❌ Failed after {} guesses: {failure}", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:>2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!("\n😰 {}", "Failures:".red().bold());
        for (word, reason) in result.failures.iter().take(10) {
            println!("   {} ({reason})", word.to_uppercase().yellow());
        }
    }
}
