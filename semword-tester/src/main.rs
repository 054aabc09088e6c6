mod checks;
mod client;
mod reports;
mod scenarios;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use semword_game::{
    AttemptStats, CENTER_WORD_PICKS, JokerKind, ScoredWord, format_percent, normalize_guess,
};

use client::ServiceClient;
use reports::{render_console, render_json};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Colored, human-readable lines
    Console,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "semword-tester", version)]
#[command(about = "Exercise the semword game service endpoint by endpoint")]
struct Args {
    /// Base URL of the service API
    #[arg(long, default_value = "http://localhost:5000/api")]
    base_url: String,

    /// Output format for smoke reports
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Query the service health endpoint
    Health,
    /// Show the current game
    State,
    /// Submit a guess
    Guess { word: String },
    /// Spend a joker (high or medium)
    Joker { kind: JokerKind },
    /// Triangulate from three guessed words
    Center {
        #[arg(num_args = CENTER_WORD_PICKS, required = true)]
        words: Vec<String>,
    },
    /// Print the 3D projection points
    Viz,
    /// Start a new game
    Reset,
    /// Run health, reset, state, guess, projection and joker checks
    Smoke {
        /// Word submitted during the guess step
        #[arg(long, default_value = "chat")]
        word: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let client = ServiceClient::new(args.base_url.clone())?;

    if args.verbose {
        println!("{} {}", "🎯 semword tester".bright_cyan().bold(), client.base().cyan());
    }

    match args.command {
        Command::Health => {
            let body = client.system_health().await.context("health check failed")?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Command::State => {
            let state = client.game_state().await.context("could not load game")?;
            print_scores("Attempts", &state.attempts);
            print_jokers(&state.jokers);
            if state.word_found {
                println!("{}", "🎉 target found".green().bold());
            }
        }
        Command::Guess { word } => {
            let word = normalize_guess(&word)?;
            let guess = client.check_word(&word).await.context("guess failed")?;
            if let Some(message) = &guess.error {
                println!("{} {message}", "⚠️ ".yellow());
            }
            println!("{word}: {}", colored_score(guess.similarity));
            print_scores("History", &guess.history);
            if guess.word_found {
                println!("{}", "🎉 target found".green().bold());
                print_scores("Similar words", &guess.similar_words);
            }
        }
        Command::Joker { kind } => {
            let answer = client.use_joker(kind).await.context("joker refused")?;
            print_scores(&format!("{kind} hints"), &answer.joker_words);
            print_jokers(&answer.jokers);
        }
        Command::Center { words } => {
            let words = words
                .iter()
                .map(String::as_str)
                .map(normalize_guess)
                .collect::<Result<Vec<_>, _>>()?;
            let center = client
                .center_word(&words)
                .await
                .context("triangulation failed")?;
            println!("{}: {}", center.word.bold(), colored_score(center.similarity));
        }
        Command::Viz => {
            let points = client
                .visualization()
                .await
                .context("projection unavailable")?;
            for point in &points {
                let [x, y, z] = point.coordinates;
                let marker = if point.is_target { "🎯" } else { "  " };
                println!("{marker} {:<20} ({x:>7.3}, {y:>7.3}, {z:>7.3})", point.word);
            }
        }
        Command::Reset => {
            let state = client.reset_game().await.context("reset failed")?;
            println!("{}", "🔄 new game started".green());
            print_jokers(&state.jokers);
        }
        Command::Smoke { word } => {
            let report = scenarios::smoke(&client, &word).await;
            match args.report {
                ReportFormat::Console => print!("{}", render_console(&report)),
                ReportFormat::Json => println!("{}", render_json(&report)?),
            }
            if !report.passed() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn colored_score(similarity: f64) -> colored::ColoredString {
    let label = format_percent(similarity);
    match semword_game::ScoreTier::of(similarity) {
        semword_game::ScoreTier::High => label.green(),
        semword_game::ScoreTier::Medium => label.yellow(),
        semword_game::ScoreTier::Low => label.red(),
    }
}

fn print_scores(title: &str, words: &[ScoredWord]) {
    let stats = AttemptStats::from_attempts(words);
    println!(
        "{} ({}, best {}, average {})",
        title.bold(),
        semword_game::guess_count_label(stats.count),
        stats.best_label(),
        stats.average_label()
    );
    for item in semword_game::stats::sorted_by_similarity(words) {
        println!("  {:<20} {}", item.word, colored_score(item.similarity));
    }
}

fn print_jokers(jokers: &semword_game::Jokers) {
    for kind in JokerKind::ALL {
        let stock = jokers.get(kind);
        println!(
            "  {kind}: {} left ({} words per use)",
            stock.remaining, stock.words_per_use
        );
    }
}
