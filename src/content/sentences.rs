//! German sentences for Satz-Splitter, in correct word order

use serde::{Deserialize, Serialize};

use super::Level;

/// Grammatical role of a word (drives colouring, not scoring)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordRole {
    Subject,
    Verb,
    Object,
    Time,
    Place,
    Auxiliary,
    Particle,
    Conjunction,
}

/// One draggable word of a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentenceWord {
    pub text: &'static str,
    /// Correct slot, 1-based. Distractors carry 0.
    pub position: usize,
    pub role: WordRole,
    pub is_distractor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub id: &'static str,
    pub level: Level,
    pub english: &'static str,
    pub hint: Option<&'static str>,
    /// Real words in order; `words[i].position == i + 1`
    pub words: Vec<SentenceWord>,
    /// Extra words that fit no slot
    pub distractors: Vec<SentenceWord>,
}

impl Sentence {
    /// Number of slots to fill
    pub fn slot_count(&self) -> usize {
        self.words.len()
    }

    /// The sentence as it should read
    pub fn text(&self) -> String {
        self.words.iter().map(|w| w.text).collect::<Vec<_>>().join(" ")
    }
}

struct SentenceDef {
    id: &'static str,
    english: &'static str,
    words: &'static [(&'static str, WordRole)],
    hint: Option<&'static str>,
    distractors: &'static [&'static str],
}

use WordRole::*;

const A1_SENTENCES: &[SentenceDef] = &[
    SentenceDef {
        id: "a1-1",
        english: "I am drinking water.",
        words: &[("Ich", Subject), ("trinke", Verb), ("Wasser", Object)],
        hint: None,
        distractors: &[],
    },
    SentenceDef {
        id: "a1-2",
        english: "She reads a book.",
        words: &[("Sie", Subject), ("liest", Verb), ("ein", Object), ("Buch", Object)],
        hint: None,
        distractors: &[],
    },
    SentenceDef {
        id: "a1-5",
        english: "Today I go home.",
        words: &[("Heute", Time), ("gehe", Verb), ("ich", Subject), ("nach", Place), ("Hause", Place)],
        hint: Some("Time expression in position 1 pushes verb before subject"),
        distractors: &[],
    },
    SentenceDef {
        id: "a1-9",
        english: "I have a cat.",
        words: &[("Ich", Subject), ("habe", Verb), ("eine", Object), ("Katze", Object)],
        hint: None,
        distractors: &[],
    },
];

const A2_SENTENCES: &[SentenceDef] = &[
    SentenceDef {
        id: "a2-1",
        english: "Tomorrow we drive to Berlin.",
        words: &[("Morgen", Time), ("fahren", Verb), ("wir", Subject), ("nach", Place), ("Berlin", Place)],
        hint: None,
        distractors: &[],
    },
    SentenceDef {
        id: "a2-3",
        english: "Yesterday I bought a car.",
        words: &[
            ("Gestern", Time),
            ("habe", Auxiliary),
            ("ich", Subject),
            ("ein", Object),
            ("Auto", Object),
            ("gekauft", Verb),
        ],
        hint: Some("The participle goes to the end"),
        distractors: &[],
    },
    SentenceDef {
        id: "a2-6",
        english: "I can speak German.",
        words: &[("Ich", Subject), ("kann", Verb), ("Deutsch", Object), ("sprechen", Verb)],
        hint: Some("Modal verb second, infinitive last"),
        distractors: &["spreche"],
    },
];

const B1_SENTENCES: &[SentenceDef] = &[
    SentenceDef {
        id: "b1-1",
        english: "I know that he is coming.",
        words: &[("Ich", Subject), ("weiß", Verb), ("dass", Conjunction), ("er", Subject), ("kommt", Verb)],
        hint: Some("\"dass\" sends the verb to the end"),
        distractors: &[],
    },
    SentenceDef {
        id: "b1-2",
        english: "Because he is tired, he sleeps.",
        words: &[
            ("Weil", Conjunction),
            ("er", Subject),
            ("müde", Object),
            ("ist", Verb),
            ("schläft", Verb),
            ("er", Subject),
        ],
        hint: None,
        distractors: &["denn"],
    },
    SentenceDef {
        id: "b1-6",
        english: "I hope that you are well.",
        words: &[
            ("Ich", Subject),
            ("hoffe", Verb),
            ("dass", Conjunction),
            ("es", Subject),
            ("dir", Object),
            ("gut", Object),
            ("geht", Verb),
        ],
        hint: None,
        distractors: &[],
    },
];

const B2_SENTENCES: &[SentenceDef] = &[
    SentenceDef {
        id: "b2-1",
        english: "If I had more time, I would read more.",
        words: &[
            ("Wenn", Conjunction),
            ("ich", Subject),
            ("mehr", Object),
            ("Zeit", Object),
            ("hätte", Verb),
            ("würde", Auxiliary),
            ("ich", Subject),
            ("mehr", Object),
            ("lesen", Verb),
        ],
        hint: Some("Subjunctive II in both clauses"),
        distractors: &["hatte"],
    },
    SentenceDef {
        id: "b2-4",
        english: "I wonder whether he comes.",
        words: &[
            ("Ich", Subject),
            ("frage", Verb),
            ("mich", Object),
            ("ob", Conjunction),
            ("er", Subject),
            ("kommt", Verb),
        ],
        hint: None,
        distractors: &["wenn"],
    },
];

const C1_SENTENCES: &[SentenceDef] = &[
    SentenceDef {
        id: "c1-1",
        english: "The work was completed yesterday.",
        words: &[
            ("Die", Subject),
            ("Arbeit", Subject),
            ("wurde", Auxiliary),
            ("gestern", Time),
            ("fertiggestellt", Verb),
        ],
        hint: Some("Passive: werden + participle"),
        distractors: &["worden"],
    },
    SentenceDef {
        id: "c1-2",
        english: "This should have been done earlier.",
        words: &[
            ("Das", Subject),
            ("hätte", Auxiliary),
            ("früher", Time),
            ("gemacht", Verb),
            ("werden", Auxiliary),
            ("müssen", Verb),
        ],
        hint: None,
        distractors: &[],
    },
];

const C2_SENTENCES: &[SentenceDef] = &[
    SentenceDef {
        id: "c2-1",
        english: "Had he not been there, we would have failed.",
        words: &[
            ("Wäre", Auxiliary),
            ("er", Subject),
            ("nicht", Particle),
            ("gewesen", Verb),
            ("hätten", Auxiliary),
            ("wir", Subject),
            ("versagt", Verb),
        ],
        hint: Some("Subjunctive II without \"wenn\" - verb in position 1"),
        distractors: &["wenn"],
    },
    SentenceDef {
        id: "c2-3",
        english: "The by many expected breakthrough did not come.",
        words: &[
            ("Der", Subject),
            ("von", Object),
            ("vielen", Object),
            ("erwartete", Object),
            ("Durchbruch", Subject),
            ("blieb", Verb),
            ("aus", Particle),
        ],
        hint: None,
        distractors: &[],
    },
];

fn defs_for(level: Level) -> &'static [SentenceDef] {
    match level {
        Level::A1 => A1_SENTENCES,
        Level::A2 => A2_SENTENCES,
        Level::B1 => B1_SENTENCES,
        Level::B2 => B2_SENTENCES,
        Level::C1 => C1_SENTENCES,
        Level::C2 => C2_SENTENCES,
    }
}

impl SentenceDef {
    fn build(&self, level: Level) -> Sentence {
        Sentence {
            id: self.id,
            level,
            english: self.english,
            hint: self.hint,
            words: self
                .words
                .iter()
                .enumerate()
                .map(|(i, &(text, role))| SentenceWord {
                    text,
                    position: i + 1,
                    role,
                    is_distractor: false,
                })
                .collect(),
            distractors: self
                .distractors
                .iter()
                .map(|&text| SentenceWord {
                    text,
                    position: 0,
                    role: Particle,
                    is_distractor: true,
                })
                .collect(),
        }
    }
}

/// Number of sentences available for a level
pub fn sentence_count(level: Level) -> usize {
    defs_for(level).len()
}

/// Build the `index`th sentence of a level (wraps around)
pub fn sentence_at(level: Level, index: usize) -> Sentence {
    let defs = defs_for(level);
    defs[index % defs.len()].build(level)
}
