//! Game Session
//!
//! A session owns the one active game, the secret source used for new
//! games, and the observer that renders results. Starting a new game
//! replaces the previous one.

use tracing::{info, instrument};
use uuid::Uuid;

use crate::core::rng::SecretSource;
use crate::game::guess::RawGuess;
use crate::game::state::{give_up_message, GuessGame, Outcome};
use crate::MAX_VALUE;

/// Receives game notifications, synchronously, during a submission.
///
/// For a losing shot `on_output` fires before `on_lose`.
pub trait GameObserver {
    /// Progress or error message for the player.
    fn on_output(&mut self, message: &str);

    /// The secret was guessed in `shots` shots.
    fn on_win(&mut self, shots: usize);

    /// The last shot missed.
    fn on_lose(&mut self, secret: u32);

    /// The player gave up.
    fn on_give_up(&mut self, secret: u32) {
        self.on_output(&give_up_message(secret));
    }
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_output(&mut self, _message: &str) {}
    fn on_win(&mut self, _shots: usize) {}
    fn on_lose(&mut self, _secret: u32) {}
}

/// Unique session identifier.
pub type SessionId = Uuid;

/// The active game plus everything needed to start the next one.
pub struct Session<S: SecretSource, O: GameObserver> {
    id: SessionId,
    game: GuessGame,
    source: S,
    observer: O,
    max_value: u32,
    games_played: u32,
}

impl<S: SecretSource, O: GameObserver> Session<S, O> {
    /// Create a session and start its first game.
    pub fn new(source: S, observer: O) -> Self {
        Self::with_max_value(source, observer, MAX_VALUE)
    }

    /// Create a session whose secrets are drawn from `1..=max_value`.
    pub fn with_max_value(mut source: S, observer: O, max_value: u32) -> Self {
        let id = Uuid::new_v4();
        let game = GuessGame::new(max_value, &mut source);
        info!("Session {} started", id);
        Self {
            id,
            game,
            source,
            observer,
            max_value,
            games_played: 1,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The active game.
    pub fn game(&self) -> &GuessGame {
        &self.game
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Games started in this session, the current one included.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Discard the active game and start a fresh one.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn new_game(&mut self) -> &GuessGame {
        self.game = GuessGame::new(self.max_value, &mut self.source);
        self.games_played += 1;
        info!("Game {} started", self.games_played);
        &self.game
    }

    /// Submit a guess to the active game and notify the observer.
    pub fn submit(&mut self, raw: impl Into<RawGuess>) -> Outcome {
        let outcome = self.game.submit_guess(raw);
        dispatch(&outcome, &mut self.observer);
        outcome
    }

    /// Give up the active game. Returns the revealed secret, or `None` if
    /// the game was already over.
    pub fn give_up(&mut self) -> Option<u32> {
        let secret = self.game.give_up()?;
        self.observer.on_give_up(secret);
        Some(secret)
    }
}

/// Deliver an outcome to an observer in notification order.
pub fn dispatch<O: GameObserver + ?Sized>(outcome: &Outcome, observer: &mut O) {
    if let Some(message) = outcome.output_message() {
        observer.on_output(&message);
    }
    match outcome {
        Outcome::Won { shots, .. } => observer.on_win(*shots),
        Outcome::Lost { secret, .. } => observer.on_lose(*secret),
        _ => {}
    }
}

/// Replay raw inputs against a known secret.
///
/// Returns the final game and every outcome, in order.
pub fn replay_game<I, R>(secret: u32, inputs: I) -> (GuessGame, Vec<Outcome>)
where
    I: IntoIterator<Item = R>,
    R: Into<RawGuess>,
{
    let mut game = GuessGame::with_secret(secret);
    let outcomes = inputs
        .into_iter()
        .map(|raw| game.submit_guess(raw))
        .collect();
    (game, outcomes)
}
