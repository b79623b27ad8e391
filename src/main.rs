//! MendCore CLI
//!
//! Usage:
//!   mendcore --text "your message here"      # Single evaluation
//!   mendcore --interactive                   # Interactive coaching session
//!   mendcore --text "text" --json            # JSON output
//!   mendcore --text "text" --verbose         # Category breakdown

use clap::Parser;
use std::io::{self, BufRead, Write};

use mendcore::core::{buddy_mood, find_highlights, CoachSession, MessageScorer, SessionOutcome};
use mendcore::types::{BuddyMood, ScoreResult};
use mendcore::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "mendcore",
    version = VERSION,
    about = "MendCore - Score messages for heat and repair, track XP and level",
    long_about = "MendCore is the scoring and progression engine behind repair coaching.\n\n\
                  It scans a message for escalating ('heat') and de-escalating ('repair')\n\
                  language, detects repair combos, and converts scores into XP, levels,\n\
                  buddy moods and achievements.\n\n\
                  Modes:\n  \
                  --text         Score one message and exit\n  \
                  --interactive  Coaching session with XP, levels and achievements\n\n\
                  Scores:\n  \
                  heat    0-100, lower is better\n  \
                  repair  0-100, higher is better"
)]
struct Args {
    /// Message to score (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive coaching session - read messages from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show per-category breakdown and highlights
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.interactive {
        run_interactive(&args);
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Score a single message and print the result
fn run_single(text: &str, args: &Args) {
    let scorer = MessageScorer::new();
    let score = scorer.score(text);
    let mood = buddy_mood(score.heat, score.repair);

    if args.json {
        print_json_single(&score, mood);
    } else if args.verbose {
        print_verbose(text, &score, mood, args.no_color);
    } else {
        print_score_line(&score, mood, args.no_color);
    }
}

/// Run an interactive coaching session
fn run_interactive(args: &Args) {
    let scorer = MessageScorer::new();
    let mut session = CoachSession::new();

    print_header(args.no_color);
    println!("Type a message and press Enter to score it. Type 'quit' to exit.");
    println!("Goal: keep heat low, earn repair, chain combos for bonus XP.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut mood = BuddyMood::Calm;

    loop {
        let prompt = format_prompt(&session, mood, args.no_color);
        print!("{}", prompt);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            print_session_summary(&session);
            break;
        }
        if line.is_empty() {
            continue;
        }

        let score = scorer.score(line);
        let outcome = session.apply(&score);
        mood = outcome.mood;

        if args.json {
            print_json_interactive(&score, &outcome);
        } else if args.verbose {
            print_verbose(line, &score, outcome.mood, args.no_color);
            print_outcome_messages(&score, &outcome, args.no_color);
        } else {
            print_score_line(&score, outcome.mood, args.no_color);
            print_outcome_messages(&score, &outcome, args.no_color);
        }
    }
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  MendCore v{} - Coaching Session", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m╔══════════════════════════════════════╗\x1b[0m");
        println!("\x1b[1m║  MendCore v{} - Coaching Session  ║\x1b[0m", VERSION);
        println!("\x1b[1m╚══════════════════════════════════════╝\x1b[0m");
    }
    println!();
}

/// Format the session prompt with mood and level
fn format_prompt(session: &CoachSession, mood: BuddyMood, no_color: bool) -> String {
    let level = session.level();
    if no_color {
        format!("[{} | L{} {}%] > ", mood, level.level, level.progress_percent)
    } else {
        format!(
            "{}{} [{} | L{} {}%]{} > ",
            mood.color_code(),
            mood.emoji(),
            mood,
            level.level,
            level.progress_percent,
            BuddyMood::color_reset()
        )
    }
}

/// One-line score output
fn print_score_line(score: &ScoreResult, mood: BuddyMood, no_color: bool) {
    let color = if no_color { "" } else { mood.color_code() };
    let reset = if no_color { "" } else { BuddyMood::color_reset() };
    let emoji = if no_color { "" } else { mood.emoji() };

    println!(
        "{}{} heat={} | repair={} | xp=+{} | mood={}{}",
        color, emoji, score.heat, score.repair, score.xp, mood, reset
    );
}

/// Combo, level-up and achievement announcements
fn print_outcome_messages(score: &ScoreResult, outcome: &SessionOutcome, no_color: bool) {
    let reset = if no_color { "" } else { BuddyMood::color_reset() };

    if let Some(combo) = score.combo {
        let color = if no_color { "" } else { "\x1b[32m" };
        println!("{}  ✦ COMBO: {} (+{} repair){}", color, combo.label(), combo.bonus(), reset);
    }

    if outcome.leveled_up {
        let color = if no_color { "" } else { "\x1b[1m\x1b[33m" };
        println!("{}  ★ LEVEL UP - now level {}{}", color, outcome.level.level, reset);
    }

    for achievement in &outcome.newly_unlocked {
        let color = if no_color { "" } else { "\x1b[36m" };
        println!(
            "{}  🏅 Achievement unlocked: {} - {}{}",
            color, achievement.title, achievement.description, reset
        );
    }
}

/// Boxed per-category breakdown
fn print_verbose(text: &str, score: &ScoreResult, mood: BuddyMood, no_color: bool) {
    let color = if no_color { "" } else { mood.color_code() };
    let reset = if no_color { "" } else { BuddyMood::color_reset() };

    println!("{}┌──────────────────────────────────────────┐{}", color, reset);
    println!("{}│ heat={} repair={} xp=+{} mood={}{}", color, score.heat, score.repair, score.xp, mood, reset);
    println!("{}├──────────────────────────────────────────┤{}", color, reset);
    if score.heat_triggers.is_empty() {
        println!("{}│ Heat: none{}", color, reset);
    } else {
        println!("{}│ Heat: {}{}", color, score.heat_triggers.join(", "), reset);
    }
    if score.repair_triggers.is_empty() {
        println!("{}│ Repair: none{}", color, reset);
    } else {
        println!("{}│ Repair: {}{}", color, score.repair_triggers.join(", "), reset);
    }
    match score.combo {
        Some(combo) => println!("{}│ Combo: {} (+{}){}", color, combo, combo.bonus(), reset),
        None => println!("{}│ Combo: none{}", color, reset),
    }
    let highlights = find_highlights(text);
    if !highlights.is_empty() {
        println!("{}├──────────────────────────────────────────┤{}", color, reset);
        for h in &highlights {
            println!(
                "{}│   {:?} [{}..{}] {}{}",
                color, h.text, h.start, h.end, h.category, reset
            );
        }
    }
    println!("{}└──────────────────────────────────────────┘{}", color, reset);
}

/// JSON output for single mode
fn print_json_single(score: &ScoreResult, mood: BuddyMood) {
    #[derive(serde::Serialize)]
    struct SingleOutput<'a> {
        score: &'a ScoreResult,
        mood: BuddyMood,
    }

    let out = SingleOutput { score, mood };
    println!("{}", serde_json::to_string(&out).unwrap_or_default());
}

/// JSON output for interactive mode
fn print_json_interactive(score: &ScoreResult, outcome: &SessionOutcome) {
    #[derive(serde::Serialize)]
    struct InteractiveOutput<'a> {
        score: &'a ScoreResult,
        outcome: &'a SessionOutcome,
    }

    let out = InteractiveOutput { score, outcome };
    println!("{}", serde_json::to_string(&out).unwrap_or_default());
}

/// Print end-of-session summary
fn print_session_summary(session: &CoachSession) {
    let level = session.level();
    println!();
    println!(
        "Session ended. Messages: {} | Total XP: {} | Level {} ({}/{} XP, {}%)",
        session.entries().len(),
        session.total_xp(),
        level.level,
        level.xp_into_level,
        level.xp_for_next_level,
        level.progress_percent
    );
    if !session.unlocked_ids().is_empty() {
        let mut ids: Vec<_> = session.unlocked_ids().iter().cloned().collect();
        ids.sort();
        println!("Achievements: {}", ids.join(", "));
    }
}
