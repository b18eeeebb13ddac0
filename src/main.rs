//! Golf Guess
//!
//! Terminal front end. Reads one command per line from stdin:
//! a number to take a shot, `hint` to give up, `new` to start over,
//! `quit` to leave.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use golf_guess::{
    GameConfig, GameObserver, Session, VERSION, NUMBER_OF_SHOTS, MAX_VALUE, MIN_VALUE,
    core::{fixed::to_float, rng::DeterministicRng, vec2::FixedVec2},
    game::flight::{BallFlight, Course, DEFAULT_STEP},
    game::state::{lose_message, win_message},
};

/// Prints game notifications to stdout.
struct TerminalObserver<W: Write> {
    out: W,
}

impl<W: Write> TerminalObserver<W> {
    fn line(&mut self, text: &str) {
        // A closed stdout only loses the transcript
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<W: Write> GameObserver for TerminalObserver<W> {
    fn on_output(&mut self, message: &str) {
        self.line(message);
    }

    fn on_win(&mut self, shots: usize) {
        self.line(&win_message(shots));
        self.line("Type `new` to play again.");
    }

    fn on_lose(&mut self, secret: u32) {
        self.line(&lose_message(secret));
        self.line("Type `new` to play again.");
    }
}

enum Command {
    Guess(String),
    Hint,
    NewGame,
    Quit,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "hint" => Command::Hint,
        "new" | "reset" => Command::NewGame,
        "quit" | "exit" => Command::Quit,
        _ => Command::Guess(line.to_string()),
    }
}

/// Pixel column of the flag for a game's secret.
fn plant_flag(course: &Course, secret: u32) -> f32 {
    let x = to_float(course.flag_x(secret));
    debug!("Flag planted at x={:.1}", x);
    x
}

fn print_instructions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Guess a number between {} and {}. You have {} shots.",
        MIN_VALUE, MAX_VALUE, NUMBER_OF_SHOTS
    )?;
    writeln!(out, "Commands: a number, `hint`, `new`, `quit`.")
}

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;

    // Logs go to stderr so stdout stays the game transcript
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Golf Guess v{}", VERSION);

    let rng: DeterministicRng = config.rng();
    let observer = TerminalObserver { out: io::stdout() };
    let mut session = Session::with_max_value(rng, observer, config.max_value);

    let course = Course::new(20, 300, 100, 10);
    let mut ball = BallFlight::new(course, FixedVec2::from_ints(40, 380));
    plant_flag(&course, session.game().secret());

    print_instructions(&mut session.observer_mut().out)
        .context("failed to write instructions")?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Hint => {
                if session.give_up().is_some() {
                    session.observer_mut().line("Type `new` to play again.");
                }
            }
            Command::NewGame => {
                let secret = session.new_game().secret();
                ball.reset(None);
                plant_flag(&course, secret);
                print_instructions(&mut session.observer_mut().out)
                    .context("failed to write instructions")?;
            }
            Command::Guess(raw) => {
                let outcome = session.submit(raw);
                if let Some(guess) = outcome.guess() {
                    ball.launch(guess);
                    let landing = ball.land(DEFAULT_STEP);
                    debug!("Ball landed at {}", landing);
                }
                if outcome.is_terminal() {
                    let log = serde_json::to_string(session.game().events())
                        .context("failed to encode game log")?;
                    debug!("Game log: {}", log);
                }
            }
        }
    }

    let game = session.game();
    info!(
        "Session {} closed after {} games, last fingerprint {}",
        session.id(),
        session.games_played(),
        hex::encode(game.fingerprint())
    );

    Ok(())
}
