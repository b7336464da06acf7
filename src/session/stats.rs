//! Per-player game statistics

use super::state::{GameState, WordleSession};
use crate::core::MAX_ROUNDS;
use serde::{Deserialize, Serialize};

/// Aggregate results over a player's finished games
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
    /// Wins by the round they were won in; index 0 is round 1
    pub distribution: [usize; MAX_ROUNDS],
    /// Consecutive wins ending with the most recent finished game
    pub current_streak: usize,
    pub max_streak: usize,
}

impl PlayerStats {
    /// Tally finished sessions; sessions still in progress are ignored
    ///
    /// Streaks follow the order of `sessions`, which stores return oldest first.
    #[must_use]
    pub fn from_sessions(sessions: &[WordleSession]) -> Self {
        let mut stats = Self::default();

        for session in sessions.iter().filter(|s| s.is_terminal()) {
            stats.played += 1;
            match (session.state(), session.win_round()) {
                (GameState::Won, round) => {
                    stats.won += 1;
                    stats.current_streak += 1;
                    stats.max_streak = stats.max_streak.max(stats.current_streak);
                    if let Some(slot) = round
                        .and_then(|r| usize::from(r).checked_sub(1))
                        .and_then(|i| stats.distribution.get_mut(i))
                    {
                        *slot += 1;
                    }
                }
                _ => {
                    stats.lost += 1;
                    stats.current_streak = 0;
                }
            }
        }

        stats
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }

    /// Average winning round, if any game was won
    #[must_use]
    pub fn average_win_round(&self) -> Option<f64> {
        if self.won == 0 {
            return None;
        }
        let total: usize = self
            .distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(total as f64 / self.won as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::{SessionId, UserId};
    use crate::wordlists::Dictionary;

    fn play(id: u64, guesses: &[&str]) -> WordleSession {
        let dictionary = Dictionary::from_strs(&["crane", "solar", "tower"]).unwrap();
        let mut session = WordleSession::new(
            SessionId(id),
            UserId::new("alice"),
            Word::new("crane").unwrap(),
        );
        for guess in guesses {
            session.submit_guess(&dictionary, guess).unwrap();
        }
        session
    }

    #[test]
    fn empty_history() {
        let stats = PlayerStats::from_sessions(&[]);
        assert_eq!(stats, PlayerStats::default());
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.average_win_round(), None);
    }

    #[test]
    fn tallies_wins_losses_and_streaks() {
        let sessions = vec![
            play(1, &["crane"]),
            play(2, &["solar", "crane"]),
            play(3, &["solar"; 5]),
            play(4, &["tower", "solar", "crane"]),
            play(5, &["solar"]), // still in progress
        ];
        let stats = PlayerStats::from_sessions(&sessions);

        assert_eq!(stats.played, 4);
        assert_eq!(stats.won, 3);
        assert_eq!(stats.lost, 1);
        assert_eq!(stats.distribution, [1, 1, 1, 0, 0]);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
        assert!((stats.average_win_round().unwrap() - 2.0).abs() < 1e-9);
    }
}
