// quizling — terminal host for the minigame session engine.
//
// Demonstrates the host protocol: deliver the frame's input first, then
// tick the session with measured elapsed time, then render the returned
// events.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use quizling_question::{QuestionItem, QuestionSet, Subject, questions_for_subject};
use quizling_session::{
    Outcome, Session, SessionConfig, SessionEvent, SessionInput, SessionState,
};

#[derive(Parser, Debug)]
#[command(name = "quizling", about = "Play a quiz minigame session in the terminal")]
struct Args {
    /// Subject for generated questions (math, reading, finance).
    #[arg(long, default_value = "math")]
    subject: Subject,

    /// Number of generated questions.
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Load a question set JSON file instead of generating questions.
    #[arg(long)]
    set: Option<PathBuf>,

    /// Session time limit in seconds.
    #[arg(long, default_value_t = 60)]
    duration_secs: u64,

    /// Number of lives.
    #[arg(long, default_value_t = 3)]
    lives: u32,

    /// Points awarded per correct answer.
    #[arg(long, default_value_t = 10)]
    points: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let questions = load_questions(&args)?;
    info!("loaded {} questions", questions.len());

    let config = SessionConfig {
        duration_ms: args.duration_secs * 1_000,
        initial_lives: args.lives,
        award_points: args.points,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        // Each playthrough is a fresh session; there is no in-place reset.
        run_session(questions.clone(), config, &mut lines)?;

        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        if !wants_replay(lines.next()) {
            break;
        }
    }
    Ok(())
}

/// Whether the replay-prompt answer asks for another session. EOF and read
/// errors both mean no.
fn wants_replay(line: Option<io::Result<String>>) -> bool {
    match line {
        Some(Ok(line)) => line.trim().eq_ignore_ascii_case("y"),
        _ => false,
    }
}

fn load_questions(args: &Args) -> Result<Vec<QuestionItem>> {
    if let Some(path) = &args.set {
        let file = File::open(path)
            .with_context(|| format!("failed to open question set {}", path.display()))?;
        let set = QuestionSet::from_reader(file)
            .with_context(|| format!("failed to parse question set {}", path.display()))?;
        info!("question set '{}' ({})", set.name, set.subject);
        Ok(set.questions)
    } else {
        let mut rng = rand::thread_rng();
        questions_for_subject(args.subject, args.count, &mut rng)
            .context("failed to generate questions")
    }
}

enum Command {
    Input(SessionInput),
    Quit,
}

fn run_session(
    items: Vec<QuestionItem>,
    config: SessionConfig,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let mut session = Session::new(items, config)?;
    println!(
        "\nAnswer with the option number, 'p' to pause, 'q' to quit. {}s on the clock.",
        config.duration_ms / 1_000
    );
    print_question(&session);

    let mut last_input = Instant::now();
    while !matches!(session.state(), SessionState::Ended(_)) {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break; // EOF ends the playthrough
        };
        let line = line?;
        let elapsed_ms = last_input.elapsed().as_millis() as u64;
        last_input = Instant::now();

        let input = match parse_command(line.trim(), &session) {
            Ok(Command::Input(input)) => input,
            Ok(Command::Quit) => break,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        // Input before tick: a pause on the expiry frame wins
        let events = session.handle_input(input);
        let resumed = events.contains(&SessionEvent::Resumed);
        render_events(&events, &session);

        if resumed {
            // Wall time spent paused is not gameplay time
            last_input = Instant::now();
        } else {
            let events = session.on_tick(elapsed_ms);
            render_events(&events, &session);
        }
    }

    print_summary(&session);
    Ok(())
}

fn parse_command(line: &str, session: &Session) -> Result<Command, String> {
    match line {
        "q" => Ok(Command::Quit),
        "p" => Ok(Command::Input(SessionInput::PauseToggle)),
        other => {
            let option_count = session
                .current_question()
                .map(|q| q.options().len())
                .unwrap_or(0);
            match other.parse::<usize>() {
                Ok(n) if n >= 1 && n <= option_count => {
                    Ok(Command::Input(SessionInput::Answer(n - 1)))
                }
                _ => Err(format!(
                    "Enter 1-{option_count}, 'p' to pause, or 'q' to quit"
                )),
            }
        }
    }
}

fn render_events(events: &[SessionEvent], session: &Session) {
    for event in events {
        match event {
            SessionEvent::ScoreChanged(score) => println!("Correct! Score: {score}"),
            SessionEvent::LivesChanged(lives) => println!("Wrong! Lives left: {lives}"),
            SessionEvent::QuestionChanged { .. } => print_question(session),
            SessionEvent::Paused(snapshot) => {
                println!("--- PAUSED ---");
                println!("Score: {}", snapshot.score);
                println!("Lives: {}", snapshot.lives_remaining);
                println!("Time: {}s", snapshot.remaining_ms / 1_000);
                println!("Questions: {}/{}", snapshot.answered, snapshot.total);
                println!("('p' to resume)");
            }
            SessionEvent::Resumed => {
                println!("--- RESUMED ---");
                print_question(session);
            }
            // Remaining time is shown in the question header instead
            SessionEvent::TimeChanged(_) => {}
            SessionEvent::Ended(_) => {}
        }
    }
}

fn print_question(session: &Session) {
    let Some(item) = session.current_question() else {
        return;
    };
    println!(
        "\n[Time {}s | Lives {} | Score {} | Question {}/{}]",
        session.remaining_ms() / 1_000,
        session.lives_remaining(),
        session.score(),
        session.answered_count() + 1,
        session.total_questions()
    );
    println!("{}", item.prompt());
    for (i, option) in item.options().iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
}

fn print_summary(session: &Session) {
    let summary = session.summary();
    let title = match summary.outcome {
        Some(Outcome::Completed) => "Completed!",
        Some(Outcome::TimedOut) => "Time's up!",
        Some(Outcome::LivesExhausted) => "Game over!",
        None => "Session ended early",
    };
    println!("\n=== {title} ===");
    println!("Final score: {}", summary.score);
    println!("Questions answered: {}/{}", summary.answered, summary.total);
    println!("Accuracy: {:.0}%", summary.accuracy());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_replay() {
        assert!(wants_replay(Some(Ok("y".to_string()))));
        assert!(wants_replay(Some(Ok("  Y ".to_string()))));
        assert!(!wants_replay(Some(Ok("n".to_string()))));
        assert!(!wants_replay(Some(Ok(String::new()))));
        assert!(!wants_replay(Some(Err(io::Error::other("tty gone")))));
        assert!(!wants_replay(None));
    }
}
