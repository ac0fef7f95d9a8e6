use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Time and accuracy tally for a single character
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CharTally {
    pub total_time_ms: u64,
    pub correct: u32,
    pub attempts: u32,
}

/// Live statistics for one practice attempt. Persisting them is up to the
/// caller; the struct round-trips through serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeStats {
    per_char: BTreeMap<char, CharTally>,
    pub total_time_ms: u64,
    pub total_correct: u32,
    pub total_symbols: u32,
}

impl PracticeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed character. Characters are tracked lower-case.
    pub fn record(&mut self, ch: char, time_ms: u64, correct: bool) {
        let key = ch.to_lowercase().next().unwrap_or(ch);
        let tally = self.per_char.entry(key).or_default();
        tally.total_time_ms += time_ms;
        tally.attempts += 1;
        self.total_time_ms += time_ms;
        self.total_symbols += 1;
        if correct {
            tally.correct += 1;
            self.total_correct += 1;
        }
    }

    pub fn tally(&self, ch: char) -> Option<&CharTally> {
        self.per_char.get(&ch.to_lowercase().next().unwrap_or(ch))
    }

    pub fn characters(&self) -> impl Iterator<Item = (char, &CharTally)> {
        self.per_char.iter().map(|(ch, tally)| (*ch, tally))
    }

    pub fn average_time_ms(&self, ch: char) -> Option<f64> {
        self.tally(ch)
            .filter(|t| t.attempts > 0)
            .map(|t| t.total_time_ms as f64 / f64::from(t.attempts))
    }

    /// Share of correct attempts for `ch`, 0.0 to 1.0
    pub fn accuracy(&self, ch: char) -> Option<f64> {
        self.tally(ch)
            .filter(|t| t.attempts > 0)
            .map(|t| f64::from(t.correct) / f64::from(t.attempts))
    }

    pub fn overall_accuracy(&self) -> Option<f64> {
        match self.total_symbols {
            0 => None,
            total => Some(f64::from(self.total_correct) / f64::from(total)),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Weights for [`score_with`]: accuracy against speed, where speed is
/// measured relative to `ideal_time_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub ideal_time_ms: f64,
    pub accuracy: f64,
    pub time: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ideal_time_ms: 2000.0,
            accuracy: 0.7,
            time: 0.3,
        }
    }
}

/// Mastery score for a letter, roughly 0.0 to 1.0. Zero without attempts.
pub fn score(correct: u32, attempts: u32, avg_time_ms: u64) -> f64 {
    score_with(correct, attempts, avg_time_ms, &ScoreWeights::default())
}

pub fn score_with(correct: u32, attempts: u32, avg_time_ms: u64, weights: &ScoreWeights) -> f64 {
    if attempts == 0 {
        return 0.0;
    }
    let accuracy = f64::from(correct) / f64::from(attempts);
    let time = 1.0 / (1.0 + avg_time_ms as f64 / weights.ideal_time_ms);
    weights.accuracy * accuracy + weights.time * time
}

/// One letter's performance across many attempts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterStats {
    pub average_accuracy: f64,
    pub average_time_ms: u64,
    /// Time spent on the letter in each of the most recent attempts, oldest first
    pub recent_times_ms: Vec<u64>,
    pub recent_accuracy: Vec<f64>,
    pub score: f64,
}

/// Summary over a history of practice attempts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsData {
    pub average_letter_time_ms: u64,
    pub total_correct: u32,
    pub total_symbols: u32,
    pub letters: BTreeMap<char, LetterStats>,
}

impl StatisticsData {
    /// Attempts kept in the per-letter recent series
    pub const RECENCY_LIMIT: usize = 5;

    pub fn from_attempts(attempts: &[PracticeStats]) -> Self {
        Self::with_recency(attempts, Self::RECENCY_LIMIT)
    }

    /// `attempts` are ordered oldest first.
    pub fn with_recency(attempts: &[PracticeStats], recency_limit: usize) -> Self {
        let mut grouped: BTreeMap<char, Vec<&CharTally>> = BTreeMap::new();
        for attempt in attempts {
            for (ch, tally) in attempt.characters() {
                grouped.entry(ch).or_default().push(tally);
            }
        }

        let letters = grouped
            .into_iter()
            .map(|(ch, tallies)| (ch, letter_stats(&tallies, recency_limit)))
            .collect();

        let total_symbols: u32 = attempts.iter().map(|a| a.total_symbols).sum();
        let total_correct: u32 = attempts.iter().map(|a| a.total_correct).sum();
        let total_time_ms: u64 = attempts.iter().map(|a| a.total_time_ms).sum();

        Self {
            average_letter_time_ms: match total_symbols {
                0 => 0,
                n => total_time_ms / u64::from(n),
            },
            total_correct,
            total_symbols,
            letters,
        }
    }
}

fn letter_stats(tallies: &[&CharTally], recency_limit: usize) -> LetterStats {
    let total_time: u64 = tallies.iter().map(|t| t.total_time_ms).sum();
    let correct: u32 = tallies.iter().map(|t| t.correct).sum();
    let attempts: u32 = tallies.iter().map(|t| t.attempts).sum();

    let average_time_ms = match attempts {
        0 => 0,
        n => total_time / u64::from(n),
    };
    let average_accuracy = match attempts {
        0 => 0.0,
        n => f64::from(correct) / f64::from(n),
    };

    let recent = &tallies[tallies.len().saturating_sub(recency_limit)..];

    LetterStats {
        average_accuracy,
        average_time_ms,
        recent_times_ms: recent.iter().map(|t| t.total_time_ms).collect(),
        recent_accuracy: recent
            .iter()
            .map(|t| match t.attempts {
                0 => 0.0,
                n => f64::from(t.correct) / f64::from(n),
            })
            .collect(),
        score: score(correct, attempts, average_time_ms),
    }
}
