//! Display functions for rounds, statistics and simulation reports

use super::formatters::{
    attempts_color, create_progress_bar, difficulty_color, format_time, outcome_label,
    range_window,
};
use crate::commands::SimulationResult;
use crate::core::{Difficulty, GuessOutcome};
use crate::game::{GuessReport, RoundSummary};
use crate::stats::StatsTracker;
use colored::Colorize;

/// Print the banner shown when a round starts
pub fn print_round_header(difficulty: Difficulty) {
    let profile = difficulty.profile();
    let color = difficulty_color(difficulty);

    println!("\n{}", "═".repeat(60).color(color));
    println!(
        "  Difficulty:       {}",
        difficulty.name().color(color).bold()
    );
    println!(
        "  Range:            {} - {}",
        profile.min_value(),
        profile.max_value()
    );
    println!("  Maximum attempts: {}", profile.max_attempts());
    println!("{}", "═".repeat(60).color(color));
    println!("\nI'm thinking of a number... Can you guess it?");
}

/// Print the attempt counter before a guess is read
pub fn print_attempt_banner(attempt: u32, max_attempts: u32) {
    println!("\n{}", "─".repeat(48).bright_black());
    println!("Attempt {attempt} of {max_attempts}");
    println!("{}", "─".repeat(48).bright_black());
}

/// Print feedback for one accepted guess
///
/// `range` is the engine's remaining window and `bounds` the tier's full range.
pub fn print_guess_report(report: &GuessReport, range: (i32, i32), bounds: (i32, i32)) {
    println!();
    let label = outcome_label(report.outcome);
    match report.outcome {
        GuessOutcome::TooLow => println!("  {}", label.blue().bold()),
        GuessOutcome::TooHigh => println!("  {}", label.yellow().bold()),
        GuessOutcome::Correct => println!("  {}", label.bright_green().bold()),
    }

    if report.repeated {
        println!(
            "  {}",
            format!("You already tried {}.", report.guess).bright_black()
        );
    }

    if report.result.is_some() {
        return;
    }

    println!(
        "\n  {}",
        format!("⏱ Attempts remaining: {}", report.attempts_remaining)
            .color(attempts_color(report.attempts_remaining))
    );

    if let Some(hint) = report.hint {
        println!(
            "\n  {} {} {}",
            "💡 Hint:".cyan(),
            hint.temperature.emoji(),
            hint.temperature.message()
        );
        if let Some(focus) = hint.focus {
            println!("  💭 Strategy: {}", focus.message());
        }
    }

    let (low, high) = range;
    println!(
        "  Still possible: [{}] {low} - {high}",
        range_window(low, high, bounds.0, bounds.1, 30).green()
    );
}

/// Print the result of a finished round
pub fn print_round_summary(summary: &RoundSummary) {
    let result = &summary.result;

    match summary.score {
        Some(score) => {
            println!("\n{}", "═".repeat(60).bright_green());
            println!(
                "{}",
                "    🎉  C O N G R A T U L A T I O N S !  🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_green());

            println!("\n  Attempts used: {}", result.attempts_used);
            println!("  Time taken:    {}", format_time(result.elapsed_seconds));
            println!(
                "  Score earned:  {}",
                score.to_string().bright_yellow().bold()
            );
            if let Some(grade) = summary.grade {
                println!("  Grade:         {}", grade.bright_cyan().bold());
            }

            for achievement in &summary.achievements {
                println!(
                    "\n  {} {}",
                    "🏆 Achievement Unlocked:".magenta().bold(),
                    achievement.to_string().magenta()
                );
            }
        }
        None => {
            println!("\n{}", "═".repeat(60).red());
            println!("{}", "    ❌  G A M E   O V E R  ❌    ".red().bold());
            println!("{}", "═".repeat(60).red());
            println!("\n  You've run out of attempts!");
            println!(
                "  The number was: {}",
                result.secret.to_string().bright_white().bold()
            );
        }
    }
}

/// Print overall and per-difficulty statistics
pub fn print_statistics(stats: &StatsTracker) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PLAYER STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games());
    println!("   Wins:          {}", stats.total_wins());
    println!("   Losses:        {}", stats.total_losses());
    println!(
        "   Win rate:      [{}] {:.1}%",
        create_progress_bar(stats.win_rate(), 100.0, 20).green(),
        stats.win_rate()
    );
    println!("   Total score:   {}", stats.total_score());
    println!("   Average score: {:.0}", stats.average_score());
    println!("   Rank:          {}", stats.rank().bright_yellow().bold());

    println!("\n🎮 {}", "By difficulty:".bright_cyan().bold());
    for difficulty in Difficulty::ALL {
        println!(
            "\n   {}",
            difficulty.name().color(difficulty_color(difficulty)).bold()
        );
        println!(
            "     Wins: {} | Best attempts: {} | Avg attempts: {:.1} | Avg time: {:.0}s",
            stats.wins(difficulty),
            stats.best_attempts(difficulty),
            stats.average_attempts(difficulty),
            stats.average_time(difficulty)
        );
    }
}

/// Print the rules, the difficulty table and the scoring summary
pub fn print_instructions() {
    println!("\n{}", "═".repeat(60).blue());
    println!(" {} ", "HOW TO PLAY".bright_blue().bold());
    println!("{}", "═".repeat(60).blue());

    println!("\n📖 {}", "Rules:".bold());
    println!("  1. A secret number is drawn from the difficulty's range");
    println!("  2. Guess it within the allowed attempts");
    println!("  3. After each guess you are told:");
    println!("     • 📈 Too Low  - guess higher");
    println!("     • 📉 Too High - guess lower");
    println!("     • 🎉 Correct  - you win!");
    println!("  4. Temperature hints tell you how close you are:");
    println!("     • 🔥 Burning hot, ♨️ very warm, 🌡️ warm, ❄️ cool, 🧊 cold");

    println!("\n🎯 {}", "Difficulty levels:".bold());
    for difficulty in Difficulty::ALL {
        let profile = difficulty.profile();
        println!(
            "  {:<8} range {}-{}, {} attempts, ×{:.1} score",
            difficulty.name().color(difficulty_color(difficulty)),
            profile.min_value(),
            profile.max_value(),
            profile.max_attempts(),
            profile.score_multiplier()
        );
    }

    println!("\n🏆 {}", "Scoring:".bold());
    println!("  • 1000 base points, multiplied by the difficulty factor");
    println!("  • +50 for every unused attempt");
    println!("  • +200 for finishing in under a minute");
    println!("  • +500 for a perfect game (3 attempts or fewer)");
    println!("  • ×1.25 for using at most half of the attempts");

    println!("\n💡 {}", "Tips:".bold());
    println!("  • Start in the middle of the range");
    println!("  • Halve the remaining range with every guess");
    println!("  • Watch the temperature hints");
}

/// Print the goodbye banner with a short summary
pub fn print_farewell(stats: &StatsTracker) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    Thanks for playing DigitDash!    ".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n  Games played: {}", stats.total_games());
    println!("  Total wins:   {}", stats.total_wins());
    println!("  Win rate:     {:.1}%", stats.win_rate());
    println!("  Final rank:   {}", stats.rank().bright_yellow());
    println!("\n  See you next time!\n");
}

/// Print the report of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Difficulty:       {}",
        result
            .difficulty
            .name()
            .color(difficulty_color(result.difficulty))
    );
    println!("   Player:           {}", result.player.name());
    println!("   Rounds played:    {}", stats.total_games());
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average attempts: {:.2}",
        stats.average_attempts(result.difficulty)
    );
    println!(
        "   Best case:        {}",
        stats.best_attempts(result.difficulty).to_string().green()
    );
    println!("   Average score:    {:.0}", stats.average_score());
    println!("   Total score:      {}", stats.total_score());
    println!("   Rank:             {}", stats.rank().bright_yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let total = stats.total_games();
    if total == 0 {
        return;
    }

    println!("\n📈 {}", "Attempts distribution (wins):".bright_cyan().bold());
    let max_attempts = result.difficulty.profile().max_attempts();
    for attempts in 1..=max_attempts {
        let count = result
            .attempts_distribution
            .get(&attempts)
            .copied()
            .unwrap_or(0);
        let pct = count as f64 / f64::from(total) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
    if stats.total_losses() > 0 {
        let pct = f64::from(stats.total_losses()) / f64::from(total) * 100.0;
        println!(
            "   {}: {} {:5} ({pct:5.1}%)",
            " ✗".red(),
            create_progress_bar(pct, 100.0, 40).red(),
            stats.total_losses()
        );
    }
}
