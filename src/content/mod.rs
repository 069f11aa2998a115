//! Learning content: CEFR levels, nouns with articles, ordered sentences
//!
//! The round logic only sees the `WordProvider` / `SentenceProvider` traits;
//! `Catalog` serves the built-in tables from a seeded RNG.

pub mod sentences;
pub mod words;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

pub use sentences::{Sentence, SentenceWord, WordRole};
pub use words::{Artikel, Word};

/// CEFR level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// Per-level parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Artikel-Drop fall speed multiplier
    pub fall_speed: f32,
    /// Satz-Splitter seconds per sentence
    pub time_limit: u32,
}

impl Level {
    pub const ALL: [Level; 6] = [Level::A1, Level::A2, Level::B1, Level::B2, Level::C1, Level::C2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A1" => Some(Level::A1),
            "A2" => Some(Level::A2),
            "B1" => Some(Level::B1),
            "B2" => Some(Level::B2),
            "C1" => Some(Level::C1),
            "C2" => Some(Level::C2),
            _ => None,
        }
    }

    pub fn info(&self) -> LevelInfo {
        match self {
            Level::A1 => LevelInfo {
                name: "A1",
                description: "Simple main clauses",
                fall_speed: 1.0,
                time_limit: 30,
            },
            Level::A2 => LevelInfo {
                name: "A2",
                description: "Time & Place expressions",
                fall_speed: 1.2,
                time_limit: 25,
            },
            Level::B1 => LevelInfo {
                name: "B1",
                description: "Subordinate clauses",
                fall_speed: 1.4,
                time_limit: 22,
            },
            Level::B2 => LevelInfo {
                name: "B2",
                description: "Complex conjunctions",
                fall_speed: 1.6,
                time_limit: 18,
            },
            Level::C1 => LevelInfo {
                name: "C1",
                description: "Passive constructions",
                fall_speed: 1.8,
                time_limit: 15,
            },
            Level::C2 => LevelInfo {
                name: "C2",
                description: "Literary structures",
                fall_speed: 2.0,
                time_limit: 12,
            },
        }
    }
}

/// Source of falling words
pub trait WordProvider {
    fn next_word(&mut self, level: Level) -> Word;
}

/// Source of sentences and their shuffled word pools
pub trait SentenceProvider {
    fn next_sentence(&mut self, level: Level) -> Sentence;
    /// Real words plus distractors in play order
    fn shuffle(&mut self, sentence: &Sentence) -> Vec<SentenceWord>;
}

/// Built-in tables behind a seeded RNG
#[derive(Debug, Clone)]
pub struct Catalog {
    rng: Pcg32,
}

impl Catalog {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl WordProvider for Catalog {
    fn next_word(&mut self, level: Level) -> Word {
        let words = words::words_for(level);
        // Tables are static and non-empty
        *words.choose(&mut self.rng).unwrap_or(&words[0])
    }
}

impl SentenceProvider for Catalog {
    fn next_sentence(&mut self, level: Level) -> Sentence {
        let index = self.rng.random_range(0..sentences::sentence_count(level));
        sentences::sentence_at(level, index)
    }

    fn shuffle(&mut self, sentence: &Sentence) -> Vec<SentenceWord> {
        let mut pool: Vec<SentenceWord> = sentence
            .words
            .iter()
            .chain(sentence.distractors.iter())
            .copied()
            .collect();
        pool.shuffle(&mut self.rng);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_roundtrip() {
        for level in Level::ALL {
            assert_eq!(Level::parse(level.as_str()), Some(level));
        }
        assert_eq!(Level::parse("b2"), Some(Level::B2));
        assert_eq!(Level::parse("D1"), None);
    }

    #[test]
    fn test_levels_get_harder() {
        for pair in Level::ALL.windows(2) {
            let (easy, hard) = (pair[0].info(), pair[1].info());
            assert!(hard.fall_speed > easy.fall_speed);
            assert!(hard.time_limit < easy.time_limit);
        }
        assert_eq!(Level::A1.info().fall_speed, 1.0);
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let mut a = Catalog::new(7);
        let mut b = Catalog::new(7);
        for _ in 0..20 {
            assert_eq!(a.next_word(Level::B1), b.next_word(Level::B1));
        }
        assert_eq!(a.next_sentence(Level::A2).id, b.next_sentence(Level::A2).id);
    }

    #[test]
    fn test_catalog_word_matches_level() {
        let mut catalog = Catalog::new(1);
        for _ in 0..20 {
            let word = catalog.next_word(Level::C1);
            assert!(words::words_for(Level::C1).contains(&word));
        }
    }

    #[test]
    fn test_shuffle_keeps_every_word() {
        let mut catalog = Catalog::new(3);
        let sentence = sentences::sentence_at(Level::B2, 0);
        let pool = catalog.shuffle(&sentence);
        assert_eq!(pool.len(), sentence.words.len() + sentence.distractors.len());
        for word in sentence.words.iter().chain(sentence.distractors.iter()) {
            assert!(pool.contains(word));
        }
    }
}
