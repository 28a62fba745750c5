use chrono::{Local, SubsecRound};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::model::entry::{Level, LogEntry, MESSAGES};

/// Produces log entries stamped with the current local time and a uniformly
/// chosen level and message.
pub struct LineGenerator {
    rng: SmallRng,
}

impl LineGenerator {
    pub fn new() -> Self {
        LineGenerator {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Same seed, same sequence of levels and messages.
    pub fn with_seed(seed: u64) -> Self {
        LineGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_entry(&mut self) -> LogEntry {
        let timestamp = Local::now().naive_local().trunc_subsecs(0);
        let level = Level::ALL[self.rng.random_range(0..Level::ALL.len())];
        let message = MESSAGES[self.rng.random_range(0..MESSAGES.len())];

        LogEntry::new(timestamp, level, message)
    }
}

impl Default for LineGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_draw_from_vocabulary() {
        let mut generator = LineGenerator::new();

        for _ in 0..200 {
            let entry = generator.next_entry();
            assert!(Level::ALL.contains(&entry.level));
            assert!(MESSAGES.contains(&entry.message.as_str()));
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = LineGenerator::with_seed(42);
        let mut b = LineGenerator::with_seed(42);

        for _ in 0..50 {
            let (x, y) = (a.next_entry(), b.next_entry());
            assert_eq!(x.level, y.level);
            assert_eq!(x.message, y.message);
        }
    }

    #[test]
    fn test_every_level_shows_up() {
        let mut generator = LineGenerator::with_seed(7);
        let seen: Vec<Level> = (0..500).map(|_| generator.next_entry().level).collect();

        for level in Level::ALL {
            assert!(seen.contains(&level), "{} never generated", level);
        }
    }

    #[test]
    fn test_rendered_entry_parses_back() {
        let entry = LineGenerator::with_seed(3).next_entry();
        let parsed: LogEntry = entry.to_string().parse().unwrap();
        assert_eq!(parsed, entry);
    }
}
