//! Guessing Game State
//!
//! One `GuessGame` per round. It owns the secret and the guess history and
//! is mutated only by [`GuessGame::submit_guess`] and [`GuessGame::give_up`].

use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};

use crate::core::hash::{SessionHash, SessionHasher};
use crate::core::rng::SecretSource;
use crate::game::events::GameEvent;
use crate::game::feedback::Feedback;
use crate::game::guess::{check_range, GuessError, RawGuess};
use crate::NUMBER_OF_SHOTS;

// =============================================================================
// PHASE
// =============================================================================

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[derive(Default)]
pub enum GamePhase {
    /// Accepting guesses
    #[default]
    Playing = 0,
    /// The secret was guessed
    Won = 1,
    /// Ran out of shots
    Lost = 2,
    /// The player asked for the answer
    GaveUp = 3,
}

impl GamePhase {
    /// Whether no more guesses are accepted.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Playing
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Nothing was recorded.
    Rejected(GuessError),
    /// A wrong guess was recorded and shots remain.
    Accepted {
        /// The recorded guess
        guess: u32,
        /// Proximity compared with the previous guess
        feedback: Feedback,
        /// Shots remaining after this one
        shots_left: usize,
    },
    /// The secret was guessed.
    Won {
        /// The winning guess
        guess: u32,
        /// Shots used, the winning one included
        shots: usize,
    },
    /// A wrong guess used the last shot.
    Lost {
        /// The final recorded guess
        guess: u32,
        /// Proximity compared with the previous guess
        feedback: Feedback,
        /// The secret the player missed
        secret: u32,
    },
}

impl Outcome {
    /// The progress message for this submission, if any.
    ///
    /// Wins produce no progress message, and neither does a silent
    /// `GameOver` rejection.
    pub fn output_message(&self) -> Option<String> {
        match self {
            Outcome::Rejected(err) if err.is_reported() => Some(err.to_string()),
            Outcome::Rejected(_) => None,
            Outcome::Accepted { feedback, shots_left, .. } => {
                Some(miss_message(*feedback, *shots_left))
            }
            Outcome::Lost { feedback, .. } => Some(miss_message(*feedback, 0)),
            Outcome::Won { .. } => None,
        }
    }

    /// The closing message for a finished game, if this outcome ended it.
    pub fn summary(&self) -> Option<String> {
        match self {
            Outcome::Won { shots, .. } => Some(win_message(*shots)),
            Outcome::Lost { secret, .. } => Some(lose_message(*secret)),
            _ => None,
        }
    }

    /// Whether this outcome ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Won { .. } | Outcome::Lost { .. })
    }

    /// The guess that was recorded or won, if any.
    pub fn guess(&self) -> Option<u32> {
        match self {
            Outcome::Rejected(_) => None,
            Outcome::Accepted { guess, .. }
            | Outcome::Won { guess, .. }
            | Outcome::Lost { guess, .. } => Some(*guess),
        }
    }
}

fn miss_message(feedback: Feedback, shots_left: usize) -> String {
    format!("{}\nYou have {} shots remaining", feedback, shots_left)
}

/// Message shown on a win.
pub fn win_message(shots: usize) -> String {
    format!("You won in {} shots!", shots)
}

/// Message shown when the last shot misses.
pub fn lose_message(secret: u32) -> String {
    format!("You're out of shots!\nYou should have guessed {}", secret)
}

/// Message shown when the player gives up.
pub fn give_up_message(secret: u32) -> String {
    format!("Giving up already?\nYou should have guessed {}", secret)
}

// =============================================================================
// GUESS GAME
// =============================================================================

/// State of a single game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuessGame {
    /// The value to find, in `1..=max`
    secret: u32,

    /// Shot budget
    max_guesses: usize,

    /// Recorded wrong guesses in submission order. Never holds duplicates
    /// and never holds the winning guess.
    guesses: Vec<u32>,

    /// Lifecycle phase
    phase: GamePhase,

    /// Submissions seen, rejected ones included
    submissions: u32,

    /// Transition log
    events: Vec<GameEvent>,
}

impl GuessGame {
    /// Start a game whose secret is drawn from `1..=max`.
    ///
    /// A `max` of 0 is treated as 1.
    pub fn new<S: SecretSource + ?Sized>(max: u32, source: &mut S) -> Self {
        let secret = source.draw_secret(max.max(1));
        Self::with_secret(secret)
    }

    /// Start a game with a known secret.
    pub fn with_secret(secret: u32) -> Self {
        debug!("New game, {} shots", NUMBER_OF_SHOTS);
        Self {
            secret,
            max_guesses: NUMBER_OF_SHOTS,
            guesses: Vec::with_capacity(NUMBER_OF_SHOTS),
            phase: GamePhase::Playing,
            submissions: 0,
            events: Vec::new(),
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The secret.
    #[inline]
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Number of recorded (wrong) guesses.
    #[inline]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Recorded guesses in submission order.
    #[inline]
    pub fn guesses(&self) -> &[u32] {
        &self.guesses
    }

    /// Shot budget for this game.
    #[inline]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Shots remaining.
    #[inline]
    pub fn shots_left(&self) -> usize {
        self.max_guesses - self.guesses.len()
    }

    /// Whether any shots remain.
    #[inline]
    pub fn has_guesses_left(&self) -> bool {
        self.shots_left() > 0
    }

    /// Whether `n` was already recorded.
    pub fn has_been_guessed(&self, n: u32) -> bool {
        self.guesses.contains(&n)
    }

    /// Most recent recorded guess, `None` before the first one.
    pub fn last_guess(&self) -> Option<u32> {
        self.guesses.last().copied()
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Transition log.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    // =========================================================================
    // RULES
    // =========================================================================

    /// Validate a coerced guess.
    ///
    /// Zero, non-numbers, fractions and values outside `1..=100` are out of
    /// range. A value already in the history is a duplicate.
    pub fn validate(&self, n: f64) -> Result<u32, GuessError> {
        let guess = check_range(n)?;
        if self.has_been_guessed(guess) {
            return Err(GuessError::DuplicateGuess(guess));
        }
        Ok(guess)
    }

    /// Feedback for `guess` relative to the current last guess.
    ///
    /// Must be called before `guess` is appended.
    pub fn classify_distance(&self, guess: u32) -> Feedback {
        Feedback::classify(self.secret, self.last_guess(), guess)
    }

    /// Submit one guess.
    ///
    /// Rejected input never consumes a shot. A winning guess is not added
    /// to the history, so `shots` on a win is `guess_count() + 1`.
    pub fn submit_guess(&mut self, raw: impl Into<RawGuess>) -> Outcome {
        let raw = raw.into();

        if self.phase.is_terminal() || !self.has_guesses_left() {
            debug!("Ignoring {} after game over", raw);
            return Outcome::Rejected(GuessError::GameOver);
        }

        let seq = self.submissions;
        self.submissions += 1;

        let guess = match self.validate(raw.coerce()) {
            Ok(guess) => guess,
            Err(err) => {
                warn!("Rejected guess {}: {}", raw, err);
                self.events.push(GameEvent::guess_rejected(seq, raw.to_string(), err));
                return Outcome::Rejected(err);
            }
        };

        if guess == self.secret {
            let shots = self.guesses.len() + 1;
            info!("Secret {} found in {} shots", self.secret, shots);
            self.phase = GamePhase::Won;
            self.events.push(GameEvent::game_won(seq, guess, shots));
            return Outcome::Won { guess, shots };
        }

        let feedback = self.classify_distance(guess);
        self.guesses.push(guess);
        let shots_left = self.shots_left();
        debug!("Guess {} missed ({:?}), {} shots left", guess, feedback, shots_left);
        self.events.push(GameEvent::guess_missed(seq, guess, feedback, shots_left));

        if !self.has_guesses_left() {
            info!("Out of shots, secret was {}", self.secret);
            self.phase = GamePhase::Lost;
            self.events.push(GameEvent::game_lost(seq, self.secret));
            return Outcome::Lost {
                guess,
                feedback,
                secret: self.secret,
            };
        }

        Outcome::Accepted {
            guess,
            feedback,
            shots_left,
        }
    }

    /// End a game in progress and reveal the secret.
    ///
    /// Returns `None` if the game had already ended.
    pub fn give_up(&mut self) -> Option<u32> {
        if self.phase.is_terminal() {
            return None;
        }
        info!("Gave up after {} shots, secret was {}", self.guesses.len(), self.secret);
        self.phase = GamePhase::GaveUp;
        self.events.push(GameEvent::gave_up(
            self.submissions,
            self.secret,
            self.guesses.len(),
        ));
        Some(self.secret)
    }

    /// Fingerprint of the secret, history and phase.
    pub fn fingerprint(&self) -> SessionHash {
        let mut hasher = SessionHasher::for_session();
        hasher.update_u32(self.secret);
        hasher.update_u32_list(&self.guesses);
        hasher.update_u8(self.phase as u8);
        hasher.finalize()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{DeterministicRng, FixedSecret};
    use crate::game::events::GameEventData;
    use proptest::prelude::*;

    #[test]
    fn test_new_game_is_empty() {
        let game = GuessGame::with_secret(50);
        assert_eq!(game.secret(), 50);
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.shots_left(), NUMBER_OF_SHOTS);
        assert_eq!(game.last_guess(), None);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_new_uses_secret_source() {
        let game = GuessGame::new(100, &mut FixedSecret(42));
        assert_eq!(game.secret(), 42);

        let mut rng = DeterministicRng::new(7);
        let game = GuessGame::new(100, &mut rng);
        assert_eq!(game.secret(), 92);
    }

    #[test]
    fn test_zero_max_still_has_a_secret() {
        let game = GuessGame::new(0, &mut DeterministicRng::new(3));
        assert_eq!(game.secret(), 1);
    }

    #[test]
    fn test_warmer() {
        let mut game = GuessGame::with_secret(50);
        assert!(matches!(
            game.submit_guess(70),
            Outcome::Accepted { feedback: Feedback::FirstGuess, .. }
        ));
        assert_eq!(
            game.submit_guess(60),
            Outcome::Accepted { guess: 60, feedback: Feedback::Warmer, shots_left: 8 }
        );
    }

    #[test]
    fn test_colder() {
        let mut game = GuessGame::with_secret(50);
        game.submit_guess(60);
        assert_eq!(
            game.submit_guess(70),
            Outcome::Accepted { guess: 70, feedback: Feedback::Colder, shots_left: 8 }
        );
    }

    #[test]
    fn test_same_distance() {
        let mut game = GuessGame::with_secret(50);
        game.submit_guess(45);
        assert!(matches!(
            game.submit_guess(55),
            Outcome::Accepted { feedback: Feedback::SameDistance, .. }
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut game = GuessGame::with_secret(50);
        game.submit_guess(60);
        assert_eq!(game.submit_guess(60), Outcome::Rejected(GuessError::DuplicateGuess(60)));
        assert_eq!(game.guesses(), &[60]);
        assert_eq!(game.shots_left(), 9);
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut game = GuessGame::with_secret(50);
        game.submit_guess(30);
        let first = game.submit_guess("abc");
        let second = game.submit_guess("abc");
        assert_eq!(first, Outcome::Rejected(GuessError::OutOfRange));
        assert_eq!(first, second);
        assert_eq!(first.output_message(), second.output_message());
        assert_eq!(game.guesses(), &[30]);
    }

    #[test]
    fn test_duplicate_rejection_is_idempotent() {
        let mut game = GuessGame::with_secret(50);
        game.submit_guess(60);
        let first = game.submit_guess(60);
        let second = game.submit_guess("60");
        assert_eq!(first, Outcome::Rejected(GuessError::DuplicateGuess(60)));
        assert_eq!(first, second);
        assert_eq!(first.output_message().as_deref(), Some("You already guessed that number!"));
        assert_eq!(first.output_message(), second.output_message());
        assert_eq!(game.guesses(), &[60]);
        assert_eq!(game.shots_left(), 9);
    }

    #[test]
    fn test_boundaries_always_out_of_range() {
        let mut game = GuessGame::with_secret(50);
        for n in [10, 20, 30] {
            game.submit_guess(n);
        }
        assert_eq!(game.submit_guess(0), Outcome::Rejected(GuessError::OutOfRange));
        assert_eq!(game.submit_guess(101), Outcome::Rejected(GuessError::OutOfRange));
        assert_eq!(game.submit_guess("0"), Outcome::Rejected(GuessError::OutOfRange));
        assert_eq!(game.submit_guess(""), Outcome::Rejected(GuessError::OutOfRange));
        assert_eq!(game.guess_count(), 3);
    }

    #[test]
    fn test_text_input_accepted() {
        let mut game = GuessGame::with_secret(50);
        assert!(matches!(game.submit_guess(" 25 "), Outcome::Accepted { guess: 25, .. }));
        assert!(game.has_been_guessed(25));
    }

    #[test]
    fn test_win_on_first_guess() {
        let mut game = GuessGame::with_secret(42);
        let outcome = game.submit_guess(42);
        assert_eq!(outcome, Outcome::Won { guess: 42, shots: 1 });
        assert!(game.guesses().is_empty());
        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(outcome.summary().as_deref(), Some("You won in 1 shots!"));
        assert_eq!(outcome.output_message(), None);
    }

    #[test]
    fn test_win_counts_history_plus_one() {
        let mut game = GuessGame::with_secret(42);
        game.submit_guess(10);
        game.submit_guess(20);
        assert_eq!(game.submit_guess(42), Outcome::Won { guess: 42, shots: 3 });
        assert_eq!(game.guess_count(), 2);
    }

    #[test]
    fn test_no_guesses_after_win() {
        let mut game = GuessGame::with_secret(42);
        game.submit_guess(42);
        assert_eq!(game.submit_guess(42), Outcome::Rejected(GuessError::GameOver));
        assert_eq!(game.submit_guess(7), Outcome::Rejected(GuessError::GameOver));
        let wins = game
            .events()
            .iter()
            .filter(|e| matches!(e.data, GameEventData::GameWon { .. }))
            .count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn test_loss_after_ten_misses() {
        let mut game = GuessGame::with_secret(1);
        let mut outcomes = Vec::new();
        for n in 2..=11u32 {
            outcomes.push(game.submit_guess(n));
        }

        let losses = outcomes.iter().filter(|o| matches!(o, Outcome::Lost { .. })).count();
        assert_eq!(losses, 1);
        assert!(matches!(outcomes[9], Outcome::Lost { guess: 11, secret: 1, .. }));
        assert_eq!(game.guess_count(), 10);
        assert_eq!(game.phase(), GamePhase::Lost);

        assert_eq!(game.submit_guess(12), Outcome::Rejected(GuessError::GameOver));
        assert_eq!(game.guess_count(), 10);
    }

    #[test]
    fn test_messages_match_player_text() {
        let mut game = GuessGame::with_secret(1);
        let first = game.submit_guess(50);
        assert_eq!(
            first.output_message().as_deref(),
            Some("Drat! You missed!\nYou have 9 shots remaining")
        );

        for n in 51..=58u32 {
            game.submit_guess(n);
        }
        let last = game.submit_guess(59);
        assert_eq!(
            last.output_message().as_deref(),
            Some("Getting colder...\nYou have 0 shots remaining")
        );
        assert_eq!(
            last.summary().as_deref(),
            Some("You're out of shots!\nYou should have guessed 1")
        );
    }

    #[test]
    fn test_game_over_is_silent() {
        let outcome = Outcome::Rejected(GuessError::GameOver);
        assert_eq!(outcome.output_message(), None);
        assert_eq!(outcome.summary(), None);
    }

    #[test]
    fn test_give_up() {
        let mut game = GuessGame::with_secret(33);
        game.submit_guess(10);
        assert_eq!(game.give_up(), Some(33));
        assert_eq!(game.phase(), GamePhase::GaveUp);
        assert_eq!(game.give_up(), None);
        assert_eq!(game.submit_guess(33), Outcome::Rejected(GuessError::GameOver));
        assert_eq!(give_up_message(33), "Giving up already?\nYou should have guessed 33");
    }

    #[test]
    fn test_events_follow_submissions() {
        let mut game = GuessGame::with_secret(5);
        game.submit_guess(9);
        game.submit_guess("nope");
        game.submit_guess(5);

        let seqs: Vec<u32> = game.events().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert!(game.events()[2].is_terminal());
    }

    #[test]
    fn test_fingerprint_tracks_history() {
        let mut a = GuessGame::with_secret(50);
        let mut b = GuessGame::with_secret(50);
        a.submit_guess(10);
        b.submit_guess(10);
        assert_eq!(a.fingerprint(), b.fingerprint());

        b.submit_guess(20);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    proptest! {
        #[test]
        fn prop_secret_within_range(seed in any::<u64>(), max in 1u32..=1000) {
            let game = GuessGame::new(max, &mut DeterministicRng::new(seed));
            prop_assert!(game.secret() >= 1 && game.secret() <= max);
        }

        #[test]
        fn prop_history_bounded_and_unique(
            secret in 1u32..=100,
            inputs in proptest::collection::vec(-20i32..=130, 0..60),
        ) {
            let mut game = GuessGame::with_secret(secret);
            for n in inputs {
                game.submit_guess(n);
                prop_assert!(game.guess_count() <= NUMBER_OF_SHOTS);
            }

            let guesses = game.guesses();
            for (i, g) in guesses.iter().enumerate() {
                prop_assert!((1..=100).contains(g));
                prop_assert!(!guesses[i + 1..].contains(g));
                prop_assert_ne!(*g, secret);
            }
        }

        #[test]
        fn prop_invalid_input_never_mutates(
            secret in 1u32..=100,
            bad in prop_oneof![-1000i32..=0, 101i32..=1000],
        ) {
            let mut game = GuessGame::with_secret(secret);
            let before = game.guesses().to_vec();
            let first = game.submit_guess(bad);
            let second = game.submit_guess(bad);
            prop_assert_eq!(first, Outcome::Rejected(GuessError::OutOfRange));
            prop_assert_eq!(first, second);
            prop_assert_eq!(game.guesses(), before.as_slice());
        }
    }
}
