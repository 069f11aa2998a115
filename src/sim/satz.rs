//! Satz-Splitter: rebuild a German sentence word by word
//!
//! The sentence's words (plus distractors) sit shuffled in a pool. The player
//! drags each onto its numbered slot before the countdown runs out. Slots are
//! regions `0..n` of the layout.

use glam::Vec2;

use super::drag::{DragController, DragRelease, PointerEvent, PointerPhase};
use super::geometry::{Layout, Rect};
use super::hit_test;
use super::state::{DelayQueue, GameEvent, GamePhase, PhaseControl, Resolution, Scoreboard, TickInput};
use crate::content::{Level, Sentence, SentenceProvider, SentenceWord};
use crate::highscores::{GameMode, HighScore};
use crate::persistence::SharedStore;
use crate::tuning::Tuning;

/// A word waiting in the pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolWord {
    /// Stable for the life of the sentence; the host's drag target
    pub id: u32,
    pub word: SentenceWord,
    /// Drag offset from the word's resting place
    pub offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheduled {
    NextSentence,
    /// Same sentence, after a wrong drop
    Resume,
}

pub struct SatzSplitter {
    level: Level,
    tuning: Tuning,
    sentences: Box<dyn SentenceProvider>,
    high_score: HighScore,
    board: Scoreboard,
    control: PhaseControl,
    sentence: Option<Sentence>,
    pool: Vec<PoolWord>,
    slots: Vec<Option<SentenceWord>>,
    generation: u64,
    next_id: u32,
    drag: DragController,
    dragged: Option<u32>,
    slot_rects: Vec<(usize, Rect)>,
    time_left: u32,
    second_clock: f32,
    intro_left: f32,
    timers: DelayQueue<Scheduled>,
    failed: Vec<Sentence>,
    events: Vec<GameEvent>,
    live: bool,
}

impl SatzSplitter {
    pub fn new(level: Level, tuning: Tuning, sentences: Box<dyn SentenceProvider>, store: SharedStore) -> Self {
        let high_score = HighScore::load(store, GameMode::SatzSplitter, level);
        let mut game = Self {
            level,
            tuning,
            sentences,
            high_score,
            board: Scoreboard::default(),
            control: PhaseControl::new(GamePhase::Intro),
            sentence: None,
            pool: Vec::new(),
            slots: Vec::new(),
            generation: 0,
            next_id: 0,
            drag: DragController::new(),
            dragged: None,
            slot_rects: Vec::new(),
            time_left: level.info().time_limit,
            second_clock: 0.0,
            intro_left: 0.0,
            timers: DelayQueue::new(),
            failed: Vec::new(),
            events: Vec::new(),
            live: true,
        };
        log::info!("Satz-Splitter {} started (best {})", level.as_str(), game.high_score.best());
        game.begin_round();
        game
    }

    // === Queries ===

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn phase(&self) -> GamePhase {
        self.control.phase()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.board
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn sentence(&self) -> Option<&Sentence> {
        self.sentence.as_ref()
    }

    pub fn pool(&self) -> &[PoolWord] {
        &self.pool
    }

    /// Slot contents, index `i` holds the word for position `i + 1`
    pub fn slots(&self) -> &[Option<SentenceWord>] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whole seconds left on the countdown
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn failed_sentences(&self) -> &[Sentence] {
        &self.failed
    }

    /// Failed sentences for the game-over review, each once
    pub fn review(&self) -> Vec<Sentence> {
        let mut out: Vec<Sentence> = Vec::new();
        for sentence in &self.failed {
            if !out.iter().any(|s| s.id == sentence.id) {
                out.push(sentence.clone());
            }
        }
        out
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Layout ===

    /// Re-read slot rectangles (on resize and before every drag)
    pub fn refresh_slots(&mut self, layout: &dyn Layout<usize>) {
        self.slot_rects = hit_test::collect_regions(layout, 0..self.slots.len());
    }

    // === Control ===

    pub fn toggle_pause(&mut self) {
        if !self.live {
            return;
        }
        if let Some(event) = self.control.toggle_pause() {
            if self.control.is(GamePhase::Paused) {
                self.cancel_drag();
            }
            self.events.push(event);
        }
    }

    pub fn restart(&mut self) {
        if !self.live {
            return;
        }
        self.board = Scoreboard::default();
        self.failed.clear();
        self.timers.clear();
        self.cancel_drag();
        self.high_score.reload();
        self.events.push(GameEvent::Restarted);
        log::info!("Satz-Splitter {} restarted", self.level.as_str());
        self.begin_round();
    }

    /// Tear down; every later call is a no-op
    pub fn shutdown(&mut self) {
        self.live = false;
        self.timers.clear();
        self.cancel_drag();
    }

    // === Frame ===

    /// Advance one frame: intro, pointer input, pending actions, countdown
    pub fn tick(&mut self, input: &TickInput, dt: f32, layout: &dyn Layout<usize>) {
        if !self.live {
            return;
        }

        if input.restart {
            self.restart();
        }
        if input.pause {
            self.toggle_pause();
        }

        match self.control.phase() {
            GamePhase::Paused | GamePhase::GameOver => return,
            GamePhase::Intro => {
                self.intro_left -= dt.max(0.0);
                if self.intro_left <= 0.0 {
                    self.control.set(GamePhase::Active);
                }
                return;
            }
            _ => {}
        }

        for event in &input.pointer {
            self.pointer(event, layout);
        }

        for action in self.timers.advance(dt, self.generation) {
            match action {
                Scheduled::NextSentence => self.next_sentence(),
                Scheduled::Resume => self.control.set(GamePhase::Active),
            }
        }

        if self.control.is(GamePhase::Active) {
            self.count_down(dt);
        }
    }

    /// Feed one pointer event. `Down` must name the pool word in `target`.
    pub fn pointer(&mut self, event: &PointerEvent, layout: &dyn Layout<usize>) {
        if !self.live || !self.control.is(GamePhase::Active) {
            return;
        }

        match event.phase {
            PointerPhase::Down => {
                let Some(id) = event.target.filter(|id| self.pool.iter().any(|p| p.id == *id)) else {
                    return;
                };
                if self.drag.begin(event.pointer_id, event.pos, Vec2::ZERO, self.generation) {
                    self.dragged = Some(id);
                    self.refresh_slots(layout);
                }
            }
            PointerPhase::Move => {
                let Some(moved) = self.drag.update(event.pointer_id, event.pos, &self.tuning) else {
                    return;
                };
                let dragged = self.dragged;
                if let Some(word) = self.pool.iter_mut().find(|p| Some(p.id) == dragged) {
                    word.offset = moved.pos;
                }
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                if let Some(release) = self.drag.release(event.pointer_id, event.pos) {
                    self.finish_drag(release);
                }
            }
        }
    }

    fn finish_drag(&mut self, release: DragRelease) {
        let Some(id) = self.dragged.take() else {
            return;
        };
        if release.generation != self.generation {
            return;
        }
        let Some(index) = self.pool.iter().position(|p| p.id == id) else {
            return;
        };
        self.pool[index].offset = Vec2::ZERO;
        let word = self.pool[index].word;

        let slot = hit_test::region_at(release.pointer, &self.slot_rects);
        match slot {
            Some(slot) if self.slots.get(slot).is_some_and(|s| s.is_none()) => {
                if word.is_distractor || word.position != slot + 1 {
                    self.incorrect(word, slot);
                } else {
                    self.place(index, slot);
                }
            }
            _ => {
                log::debug!("'{}' returned to the pool", word.text);
                self.events.push(GameEvent::Returned {
                    generation: self.generation,
                });
            }
        }
    }

    fn cancel_drag(&mut self) {
        self.drag.abort();
        if let Some(id) = self.dragged.take() {
            if let Some(word) = self.pool.iter_mut().find(|p| p.id == id) {
                word.offset = Vec2::ZERO;
            }
        }
    }

    fn count_down(&mut self, dt: f32) {
        self.second_clock += dt.max(0.0);
        while self.second_clock >= 1.0 {
            self.second_clock -= 1.0;
            self.time_left = self.time_left.saturating_sub(1);
            if self.time_left == 0 {
                self.timeout();
                return;
            }
        }
    }

    // === Resolution ===

    fn place(&mut self, index: usize, slot: usize) {
        let placed = self.pool.remove(index);
        self.slots[slot] = Some(placed.word);
        log::debug!("'{}' placed in slot {}", placed.word.text, slot + 1);
        self.events.push(GameEvent::Placed {
            generation: self.generation,
            slot,
            text: placed.word.text.to_string(),
        });

        if self.pool.iter().any(|p| !p.word.is_distractor) {
            return;
        }

        let points = self.board.reward(self.tuning.sentence_points);
        log::debug!("Sentence complete (+{})", points);
        self.events.push(GameEvent::Resolved {
            generation: self.generation,
            resolution: Resolution::Correct,
            target: None,
            points,
        });
        if self.high_score.submit(self.board.score) {
            self.events.push(GameEvent::NewHighScore {
                score: self.board.score,
            });
        }
        self.control.set(GamePhase::Resolving);
        self.timers
            .schedule(self.tuning.sentence_delay, self.generation, Scheduled::NextSentence);
    }

    fn incorrect(&mut self, word: SentenceWord, slot: usize) {
        log::debug!("'{}' does not belong in slot {}", word.text, slot + 1);
        self.record_failure();
        self.events.push(GameEvent::Resolved {
            generation: self.generation,
            resolution: Resolution::Incorrect,
            target: Some((slot + 1).to_string()),
            points: 0,
        });
        if self.board.penalize() {
            self.game_over();
        } else {
            self.control.set(GamePhase::Resolving);
            self.timers
                .schedule(self.tuning.incorrect_delay, self.generation, Scheduled::Resume);
        }
    }

    fn timeout(&mut self) {
        log::debug!("Time is up");
        self.cancel_drag();
        self.record_failure();
        self.events.push(GameEvent::Resolved {
            generation: self.generation,
            resolution: Resolution::Missed,
            target: None,
            points: 0,
        });
        if self.board.penalize() {
            self.game_over();
        } else {
            self.control.set(GamePhase::Resolving);
            self.timers
                .schedule(self.tuning.missed_delay, self.generation, Scheduled::NextSentence);
        }
    }

    fn record_failure(&mut self) {
        if let Some(sentence) = &self.sentence {
            self.failed.push(sentence.clone());
        }
    }

    fn game_over(&mut self) {
        self.cancel_drag();
        self.timers.clear();
        self.time_left = 0;
        self.control.set(GamePhase::GameOver);
        log::info!(
            "Satz-Splitter {} over: score {} (best {})",
            self.level.as_str(),
            self.board.score,
            self.high_score.best()
        );
        self.events.push(GameEvent::GameOver {
            score: self.board.score,
            high_score: self.high_score.best(),
        });
    }

    /// Fresh sentence behind the intro preview
    fn begin_round(&mut self) {
        self.next_sentence();
        self.intro_left = self.tuning.intro_duration;
        if self.intro_left > 0.0 {
            self.control = PhaseControl::new(GamePhase::Intro);
        } else {
            self.control = PhaseControl::new(GamePhase::Active);
        }
    }

    fn next_sentence(&mut self) {
        if self.board.is_dead() {
            return;
        }
        self.generation += 1;
        let sentence = self.sentences.next_sentence(self.level);
        let words = self.sentences.shuffle(&sentence);

        self.pool = words
            .into_iter()
            .map(|word| {
                let id = self.next_id;
                self.next_id += 1;
                PoolWord {
                    id,
                    word,
                    offset: Vec2::ZERO,
                }
            })
            .collect();
        self.slots = vec![None; sentence.slot_count()];
        // Old rectangles belong to the previous sentence's slot count
        self.slot_rects.clear();
        self.time_left = self.level.info().time_limit;
        self.second_clock = 0.0;
        self.control.set(GamePhase::Active);

        self.events.push(GameEvent::Spawned {
            generation: self.generation,
            text: sentence.english.to_string(),
        });
        self.sentence = Some(sentence);
    }
}
