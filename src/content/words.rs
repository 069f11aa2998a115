//! Nouns and their grammatical gender for Artikel-Drop

use serde::{Deserialize, Serialize};

use super::Level;

/// Definite article, one per drop zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Artikel {
    Der,
    Die,
    Das,
}

impl Artikel {
    /// Zones left to right; `das` sits in the middle as the neutral choice
    pub const ZONE_ORDER: [Artikel; 3] = [Artikel::Der, Artikel::Das, Artikel::Die];

    pub fn as_str(&self) -> &'static str {
        match self {
            Artikel::Der => "der",
            Artikel::Die => "die",
            Artikel::Das => "das",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "der" => Some(Artikel::Der),
            "die" => Some(Artikel::Die),
            "das" => Some(Artikel::Das),
            _ => None,
        }
    }
}

/// A noun to sort into its article zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Word {
    pub text: &'static str,
    pub artikel: Artikel,
    pub english: &'static str,
}

use Artikel::{Das, Der, Die};

const fn w(text: &'static str, artikel: Artikel, english: &'static str) -> Word {
    Word { text, artikel, english }
}

const A1_WORDS: &[Word] = &[
    w("Hund", Der, "dog"),
    w("Katze", Die, "cat"),
    w("Haus", Das, "house"),
    w("Tisch", Der, "table"),
    w("Lampe", Die, "lamp"),
    w("Buch", Das, "book"),
    w("Apfel", Der, "apple"),
    w("Milch", Die, "milk"),
    w("Kind", Das, "child"),
    w("Mann", Der, "man"),
];

const A2_WORDS: &[Word] = &[
    w("Bahnhof", Der, "train station"),
    w("Wohnung", Die, "apartment"),
    w("Fahrrad", Das, "bicycle"),
    w("Schlüssel", Der, "key"),
    w("Rechnung", Die, "bill"),
    w("Wetter", Das, "weather"),
    w("Urlaub", Der, "vacation"),
    w("Küche", Die, "kitchen"),
];

const B1_WORDS: &[Word] = &[
    w("Vertrag", Der, "contract"),
    w("Erfahrung", Die, "experience"),
    w("Gehalt", Das, "salary"),
    w("Termin", Der, "appointment"),
    w("Umwelt", Die, "environment"),
    w("Ergebnis", Das, "result"),
    w("Vorschlag", Der, "suggestion"),
    w("Gesellschaft", Die, "society"),
];

const B2_WORDS: &[Word] = &[
    w("Aufwand", Der, "effort"),
    w("Voraussetzung", Die, "prerequisite"),
    w("Verhältnis", Das, "relationship"),
    w("Zusammenhang", Der, "context"),
    w("Auswirkung", Die, "effect"),
    w("Bedürfnis", Das, "need"),
    w("Anspruch", Der, "claim"),
    w("Nachfrage", Die, "demand"),
];

const C1_WORDS: &[Word] = &[
    w("Sachverhalt", Der, "state of affairs"),
    w("Beeinträchtigung", Die, "impairment"),
    w("Gefüge", Das, "structure"),
    w("Einwand", Der, "objection"),
    w("Gepflogenheit", Die, "custom"),
    w("Vermächtnis", Das, "legacy"),
    w("Spielraum", Der, "leeway"),
    w("Tragweite", Die, "scope"),
];

const C2_WORDS: &[Word] = &[
    w("Habitus", Der, "habitus"),
    w("Gemengelage", Die, "mixed situation"),
    w("Dilemma", Das, "dilemma"),
    w("Gleichmut", Der, "equanimity"),
    w("Ambivalenz", Die, "ambivalence"),
    w("Kalkül", Das, "calculation"),
    w("Liebreiz", Der, "charm"),
    w("Quintessenz", Die, "quintessence"),
];

/// All words for a level
pub fn words_for(level: Level) -> &'static [Word] {
    match level {
        Level::A1 => A1_WORDS,
        Level::A2 => A2_WORDS,
        Level::B1 => B1_WORDS,
        Level::B2 => B2_WORDS,
        Level::C1 => C1_WORDS,
        Level::C2 => C2_WORDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_level_has_each_article() {
        for level in Level::ALL {
            let words = words_for(level);
            for artikel in Artikel::ZONE_ORDER {
                assert!(
                    words.iter().any(|w| w.artikel == artikel),
                    "{} has no '{}' word",
                    level.as_str(),
                    artikel.as_str()
                );
            }
        }
    }

    #[test]
    fn test_words_are_unique_per_level() {
        for level in Level::ALL {
            let mut seen = HashSet::new();
            for word in words_for(level) {
                assert!(seen.insert(word.text), "duplicate '{}' in {}", word.text, level.as_str());
                assert!(!word.english.is_empty());
            }
        }
    }

    #[test]
    fn test_artikel_parse() {
        assert_eq!(Artikel::parse("Der"), Some(Artikel::Der));
        assert_eq!(Artikel::parse(" das "), Some(Artikel::Das));
        assert_eq!(Artikel::parse("den"), None);
    }
}
