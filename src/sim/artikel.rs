//! Artikel-Drop: sort falling nouns into der / das / die
//!
//! One word falls at a time. The player drags it onto an article zone; the
//! drop is judged, the scoreboard updated, and after a short feedback window
//! the next word spawns with a fresh generation.

use glam::Vec2;

use super::drag::{DragController, DragRelease, PointerEvent, PointerPhase};
use super::fall::{FallBody, FallStep};
use super::geometry::{Layout, Rect};
use super::hit_test;
use super::state::{DelayQueue, GameEvent, GamePhase, PhaseControl, Resolution, Scoreboard, TickInput};
use crate::content::{Artikel, Level, Word, WordProvider};
use crate::highscores::{GameMode, HighScore};
use crate::persistence::SharedStore;
use crate::tuning::Tuning;

/// The live word
#[derive(Debug, Clone)]
pub struct FallingWord {
    pub word: Word,
    pub generation: u64,
    pub body: FallBody,
}

/// A word the player got wrong or let fall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedWord {
    pub word: Word,
    /// Zone chosen, `None` when the word hit the floor
    pub chosen: Option<Artikel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheduled {
    Spawn,
}

pub struct ArtikelDrop {
    level: Level,
    tuning: Tuning,
    words: Box<dyn WordProvider>,
    high_score: HighScore,
    board: Scoreboard,
    control: PhaseControl,
    active: Option<FallingWord>,
    generation: u64,
    drag: DragController,
    zones: Vec<(Artikel, Rect)>,
    arena_height: f32,
    timers: DelayQueue<Scheduled>,
    failed: Vec<FailedWord>,
    events: Vec<GameEvent>,
    /// Tilt follows the pointer (off for reduced motion)
    pub tilt_enabled: bool,
    live: bool,
}

impl ArtikelDrop {
    pub fn new(level: Level, tuning: Tuning, words: Box<dyn WordProvider>, store: SharedStore) -> Self {
        let high_score = HighScore::load(store, GameMode::ArtikelDrop, level);
        let mut game = Self {
            level,
            tuning,
            words,
            high_score,
            board: Scoreboard::default(),
            control: PhaseControl::new(GamePhase::Active),
            active: None,
            generation: 0,
            drag: DragController::new(),
            zones: Vec::new(),
            arena_height: 600.0,
            timers: DelayQueue::new(),
            failed: Vec::new(),
            events: Vec::new(),
            tilt_enabled: true,
            live: true,
        };
        log::info!("Artikel-Drop {} started (best {})", level.as_str(), game.high_score.best());
        game.spawn();
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

    pub fn active(&self) -> Option<&FallingWord> {
        self.active.as_ref()
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

    pub fn failed_words(&self) -> &[FailedWord] {
        &self.failed
    }

    /// Failures for the game-over review, first occurrence of each word
    pub fn review(&self) -> Vec<FailedWord> {
        let mut seen = Vec::new();
        self.failed
            .iter()
            .filter(|f| {
                if seen.contains(&f.word.text) {
                    false
                } else {
                    seen.push(f.word.text);
                    true
                }
            })
            .copied()
            .collect()
    }

    /// Words fall onto this line (offset from spawn)
    pub fn floor_y(&self) -> f32 {
        self.arena_height - self.tuning.floor_offset
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Layout ===

    /// Arena resized
    pub fn set_arena_height(&mut self, height: f32) {
        self.arena_height = height;
    }

    /// Re-read zone rectangles (on resize and before every drag)
    pub fn refresh_zones(&mut self, layout: &dyn Layout<Artikel>) {
        self.zones = hit_test::collect_regions(layout, Artikel::ZONE_ORDER);
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
        self.drag.abort();
        self.active = None;
        self.high_score.reload();
        self.control = PhaseControl::new(GamePhase::Active);
        self.events.push(GameEvent::Restarted);
        log::info!("Artikel-Drop {} restarted", self.level.as_str());
        self.spawn();
    }

    /// Tear down; every later call is a no-op
    pub fn shutdown(&mut self) {
        self.live = false;
        self.timers.clear();
        self.drag.abort();
        self.active = None;
    }

    // === Frame ===

    /// Advance one frame: pointer input first so a drag always beats gravity,
    /// then pending spawns, then gravity and the floor
    pub fn tick(&mut self, input: &TickInput, dt: f32, layout: &dyn Layout<Artikel>) {
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
            _ => {}
        }

        for event in &input.pointer {
            self.pointer(event, layout);
        }

        for action in self.timers.advance(dt, self.generation) {
            match action {
                Scheduled::Spawn => self.spawn(),
            }
        }

        if self.control.is(GamePhase::Active) {
            self.fall(dt, layout);
        }
    }

    /// Feed one pointer event
    pub fn pointer(&mut self, event: &PointerEvent, layout: &dyn Layout<Artikel>) {
        if !self.live || !self.control.is(GamePhase::Active) {
            return;
        }

        match event.phase {
            PointerPhase::Down => self.begin_drag(event, layout),
            PointerPhase::Move => {
                let Some(moved) = self.drag.update(event.pointer_id, event.pos, &self.tuning) else {
                    return;
                };
                if let Some(active) = self.active.as_mut() {
                    active.body.pos = moved.pos;
                    active.body.tilt = if self.tilt_enabled { moved.tilt } else { 0.0 };
                }
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                if let Some(release) = self.drag.release(event.pointer_id, event.pos) {
                    self.finish_drag(release, layout);
                }
            }
        }
    }

    fn begin_drag(&mut self, event: &PointerEvent, layout: &dyn Layout<Artikel>) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.body.landed {
            return;
        }
        if self.drag.begin(event.pointer_id, event.pos, active.body.pos, active.generation) {
            active.body.dragging = true;
            active.body.tilt = 0.0;
            self.zones = hit_test::collect_regions(layout, Artikel::ZONE_ORDER);
        }
    }

    fn finish_drag(&mut self, release: DragRelease, layout: &dyn Layout<Artikel>) {
        // Snapshot before anything can replace the word
        let Some(snapshot) = self
            .active
            .as_ref()
            .filter(|a| a.generation == release.generation)
            .map(|a| a.word)
        else {
            return;
        };

        if let Some(active) = self.active.as_mut() {
            active.body.dragging = false;
            active.body.tilt = 0.0;
        }

        let entity_rect = layout.entity_rect(release.position);
        let zone = hit_test::classify_drop(release.pointer, entity_rect, &self.zones, self.tuning.near_miss_margin);
        match zone {
            Some(zone) => self.judge(snapshot, zone),
            None => {
                log::debug!("'{}' released outside every zone", snapshot.text);
                self.events.push(GameEvent::Returned {
                    generation: release.generation,
                });
            }
        }
    }

    fn cancel_drag(&mut self) {
        self.drag.abort();
        if let Some(active) = self.active.as_mut() {
            active.body.dragging = false;
        }
    }

    fn fall(&mut self, dt: f32, layout: &dyn Layout<Artikel>) {
        let speed = self.level.info().fall_speed;
        let floor_y = self.floor_y();
        let entry_y = self.arena_height - self.tuning.zone_entry_offset;

        let Some(active) = self.active.as_mut() else {
            return;
        };
        let step = active.body.step(dt, speed, &self.tuning, floor_y, self.tilt_enabled);
        if step == FallStep::Held {
            return;
        }
        let word = active.word;
        let pos = active.body.pos;

        // A word that sinks into a zone counts as dropped there, even on the
        // frame it reaches the floor
        let center = layout.entity_rect(pos).map(|rect| rect.center());
        let zone = center
            .filter(|c| c.y > entry_y)
            .and_then(|c| hit_test::region_at(c, &self.zones));
        match zone {
            Some(zone) => self.judge(word, zone),
            None if step == FallStep::HitFloor => self.miss(word),
            None => {}
        }
    }

    // === Resolution ===

    fn judge(&mut self, word: Word, zone: Artikel) {
        if zone == word.artikel {
            self.correct(word, zone);
        } else {
            self.incorrect(word, zone);
        }
    }

    fn correct(&mut self, word: Word, zone: Artikel) {
        let points = self.board.reward(self.tuning.artikel_points);
        log::debug!("'{}' -> {} correct (+{})", word.text, zone.as_str(), points);
        self.events.push(GameEvent::Resolved {
            generation: self.generation,
            resolution: Resolution::Correct,
            target: Some(zone.as_str().to_string()),
            points,
        });
        if self.high_score.submit(self.board.score) {
            self.events.push(GameEvent::NewHighScore {
                score: self.board.score,
            });
        }
        self.end_word(self.tuning.correct_delay);
    }

    fn incorrect(&mut self, word: Word, zone: Artikel) {
        log::debug!("'{}' -> {} wrong (is {})", word.text, zone.as_str(), word.artikel.as_str());
        self.failed.push(FailedWord {
            word,
            chosen: Some(zone),
        });
        self.events.push(GameEvent::Resolved {
            generation: self.generation,
            resolution: Resolution::Incorrect,
            target: Some(zone.as_str().to_string()),
            points: 0,
        });
        self.lose_life(self.tuning.incorrect_delay);
    }

    fn miss(&mut self, word: Word) {
        log::debug!("'{}' hit the floor", word.text);
        self.failed.push(FailedWord { word, chosen: None });
        self.events.push(GameEvent::Resolved {
            generation: self.generation,
            resolution: Resolution::Missed,
            target: None,
            points: 0,
        });
        self.lose_life(self.tuning.missed_delay);
    }

    fn lose_life(&mut self, delay: f32) {
        if self.board.penalize() {
            self.game_over();
        } else {
            self.end_word(delay);
        }
    }

    fn end_word(&mut self, delay: f32) {
        self.drag.abort();
        self.active = None;
        self.control.set(GamePhase::Resolving);
        self.timers.schedule(delay, self.generation, Scheduled::Spawn);
    }

    fn game_over(&mut self) {
        self.drag.abort();
        self.active = None;
        self.timers.clear();
        self.control.set(GamePhase::GameOver);
        log::info!(
            "Artikel-Drop {} over: score {} (best {})",
            self.level.as_str(),
            self.board.score,
            self.high_score.best()
        );
        self.events.push(GameEvent::GameOver {
            score: self.board.score,
            high_score: self.high_score.best(),
        });
    }

    fn spawn(&mut self) {
        if self.board.is_dead() {
            return;
        }
        self.generation += 1;
        let word = self.words.next_word(self.level);
        self.active = Some(FallingWord {
            word,
            generation: self.generation,
            body: FallBody::new(),
        });
        self.control.set(GamePhase::Active);
        self.events.push(GameEvent::Spawned {
            generation: self.generation,
            text: word.text.to_string(),
        });
    }

    /// Screen-space centre offset of the live word, for renderers
    pub fn word_offset(&self) -> Option<(Vec2, f32)> {
        self.active.as_ref().map(|a| (a.body.pos, a.body.tilt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::words::words_for;
    use crate::persistence::{MemoryStore, ScoreStore, StoreError};
    use crate::sim::geometry::StaticLayout;
    use std::collections::VecDeque;
    use std::rc::Rc;

    const DT: f32 = 1.0 / 60.0;

    /// Every read and write fails, as in a locked-down browser
    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<u64>, StoreError> {
            Err(StoreError::Unavailable("storage disabled".into()))
        }
        fn set(&self, _key: &str, _value: u64) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
    }

    /// Serves a fixed list of words, then repeats the last one
    struct Script(VecDeque<Word>, Word);

    impl WordProvider for Script {
        fn next_word(&mut self, _level: Level) -> Word {
            self.0.pop_front().unwrap_or(self.1)
        }
    }

    fn word(artikel: Artikel) -> Word {
        *words_for(Level::A1).iter().find(|w| w.artikel == artikel).unwrap()
    }

    /// Arena 800x600: zones along the bottom, word spawns at (400, 60)
    fn layout() -> StaticLayout<Artikel> {
        StaticLayout::new()
            .with_region(Artikel::Der, Rect::new(20.0, 460.0, 260.0, 580.0))
            .with_region(Artikel::Das, Rect::new(280.0, 460.0, 520.0, 580.0))
            .with_region(Artikel::Die, Rect::new(540.0, 460.0, 780.0, 580.0))
            .with_entity(Vec2::new(400.0, 60.0), Vec2::new(140.0, 56.0))
    }

    fn zone_center(artikel: Artikel) -> Vec2 {
        layout().region_rect(artikel).unwrap().center()
    }

    fn game_with(words: Vec<Word>) -> (ArtikelDrop, Rc<MemoryStore>) {
        let store = MemoryStore::shared();
        let last = *words.last().unwrap();
        let mut game = ArtikelDrop::new(
            Level::A1,
            Tuning::default(),
            Box::new(Script(words.into(), last)),
            store.clone(),
        );
        game.set_arena_height(600.0);
        game.refresh_zones(&layout());
        game.drain_events();
        (game, store)
    }

    /// Press on the word, drag to `to`, release there
    fn drop_at(game: &mut ArtikelDrop, to: Vec2) {
        let start = Vec2::new(400.0, 60.0);
        let input = TickInput {
            pointer: vec![
                PointerEvent::down(1, start),
                PointerEvent::moved(1, to),
                PointerEvent::up(1, to),
            ],
            ..Default::default()
        };
        game.tick(&input, DT, &layout());
    }

    fn run_for(game: &mut ArtikelDrop, seconds: f32) {
        let frames = (seconds / DT).ceil() as usize;
        for _ in 0..frames {
            game.tick(&TickInput::default(), DT, &layout());
        }
    }

    #[test]
    fn test_correct_drop_scores() {
        let (mut game, store) = game_with(vec![word(Artikel::Der)]);
        drop_at(&mut game, zone_center(Artikel::Der));

        let board = game.scoreboard();
        assert_eq!(board.score, 10);
        assert_eq!(board.streak, 1);
        assert_eq!(board.lives, 3);
        assert_eq!(game.phase(), GamePhase::Resolving);
        assert!(game.active().is_none());
        assert_eq!(store.get("artikeldrop-highscore-A1").unwrap(), Some(10));

        let events = game.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Resolved { resolution: Resolution::Correct, points: 10, .. }
        )));
        assert!(events.contains(&GameEvent::NewHighScore { score: 10 }));
    }

    #[test]
    fn test_next_word_spawns_after_delay_with_new_generation() {
        let (mut game, _) = game_with(vec![word(Artikel::Der), word(Artikel::Die)]);
        let first = game.generation();
        drop_at(&mut game, zone_center(Artikel::Der));

        run_for(&mut game, 0.3);
        assert_eq!(game.phase(), GamePhase::Resolving);
        run_for(&mut game, 0.3);
        assert_eq!(game.phase(), GamePhase::Active);

        let active = game.active().unwrap();
        assert_eq!(active.word.artikel, Artikel::Die);
        assert_eq!(active.generation, first + 1);
        assert_eq!(active.body.pos.x, 0.0);
        assert!(active.body.pos.y < 40.0);
    }

    #[test]
    fn test_streak_multiplies() {
        let (mut game, _) = game_with(vec![word(Artikel::Das)]);
        for _ in 0..3 {
            drop_at(&mut game, zone_center(Artikel::Das));
            run_for(&mut game, 0.6);
        }
        assert_eq!(game.scoreboard().score, 10 + 20 + 30);
        assert_eq!(game.scoreboard().streak, 3);
    }

    #[test]
    fn test_wrong_zone_costs_life_and_streak() {
        let (mut game, _) = game_with(vec![word(Artikel::Der), word(Artikel::Die)]);
        drop_at(&mut game, zone_center(Artikel::Der));
        run_for(&mut game, 0.6);
        drop_at(&mut game, zone_center(Artikel::Das));

        let board = game.scoreboard();
        assert_eq!(board.lives, 2);
        assert_eq!(board.streak, 0);
        assert_eq!(board.score, 10);
        assert_eq!(
            game.failed_words(),
            &[FailedWord {
                word: word(Artikel::Die),
                chosen: Some(Artikel::Das)
            }]
        );
    }

    #[test]
    fn test_three_wrong_drops_end_the_game() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        for _ in 0..3 {
            drop_at(&mut game, zone_center(Artikel::Die));
            run_for(&mut game, 0.7);
        }
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.scoreboard().lives, 0);
        assert!(game.active().is_none());

        // A fourth attempt changes nothing
        let before = game.scoreboard();
        drop_at(&mut game, zone_center(Artikel::Die));
        run_for(&mut game, 2.0);
        assert_eq!(game.scoreboard(), before);
        assert!(game.active().is_none());
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_release_outside_zones_keeps_word() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        let generation = game.generation();
        drop_at(&mut game, Vec2::new(400.0, 200.0));

        assert_eq!(game.phase(), GamePhase::Active);
        assert!(!game.is_dragging());
        let active = game.active().unwrap();
        assert_eq!(active.generation, generation);
        assert!(!active.body.dragging);
        assert_eq!(game.scoreboard().lives, 3);
        assert!(game.drain_events().contains(&GameEvent::Returned { generation }));

        // Gravity resumes
        let y = game.active().unwrap().body.pos.y;
        run_for(&mut game, 0.1);
        assert!(game.active().unwrap().body.pos.y > y);
    }

    #[test]
    fn test_near_miss_uses_word_centre() {
        let (mut game, _) = game_with(vec![word(Artikel::Die)]);
        // Pointer ends in the gap above the zones, but the word was grabbed
        // by its top edge so its centre sits just above the 'die' zone
        let input = TickInput {
            pointer: vec![
                PointerEvent::down(1, Vec2::new(400.0, 40.0)),
                PointerEvent::moved(1, Vec2::new(660.0, 425.0)),
                PointerEvent::up(1, Vec2::new(660.0, 425.0)),
            ],
            ..Default::default()
        };
        game.tick(&input, DT, &layout());
        // Centre: (400 + 260, 60 + 385) = (660, 445), 15px above the zone
        assert_eq!(game.scoreboard().score, 10);
    }

    #[test]
    fn test_word_hits_floor() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        // Nothing below the spawn column, so the word lands on the bare floor
        let mut open = layout();
        open.remove_region(Artikel::Das);
        game.refresh_zones(&open);
        let run = |game: &mut ArtikelDrop, seconds: f32| {
            for _ in 0..(seconds / DT).ceil() as usize {
                game.tick(&TickInput::default(), DT, &open);
            }
        };
        // Floor at 600 - 200 = 400px; 120 px/s at A1
        run(&mut game, 3.0);
        assert_eq!(game.phase(), GamePhase::Active);
        run(&mut game, 0.4);
        assert_eq!(game.phase(), GamePhase::Resolving);
        assert_eq!(game.scoreboard().lives, 2);
        assert_eq!(game.failed_words()[0].chosen, None);

        let missed = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Resolved { resolution: Resolution::Missed, .. }))
            .count();
        assert_eq!(missed, 1);
    }

    #[test]
    fn test_dragging_suspends_gravity() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        let down = TickInput {
            pointer: vec![PointerEvent::down(1, Vec2::new(400.0, 60.0))],
            ..Default::default()
        };
        game.tick(&down, DT, &layout());
        let pos = game.active().unwrap().body.pos;
        run_for(&mut game, 10.0);
        assert_eq!(game.active().unwrap().body.pos, pos);
        assert_eq!(game.scoreboard().lives, 3);
    }

    #[test]
    fn test_cancel_behaves_like_release() {
        let (mut game, _) = game_with(vec![word(Artikel::Das)]);
        let target = zone_center(Artikel::Das);
        let input = TickInput {
            pointer: vec![
                PointerEvent::down(4, Vec2::new(400.0, 60.0)),
                PointerEvent::moved(4, target),
                PointerEvent::cancel(4, target),
            ],
            ..Default::default()
        };
        game.tick(&input, DT, &layout());
        assert_eq!(game.scoreboard().score, 10);
    }

    #[test]
    fn test_pause_freezes_word_and_spawns() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        game.toggle_pause();
        assert_eq!(game.phase(), GamePhase::Paused);
        let pos = game.active().unwrap().body.pos;
        run_for(&mut game, 5.0);
        assert_eq!(game.active().unwrap().body.pos, pos);

        // Pointer input is ignored while paused
        drop_at(&mut game, zone_center(Artikel::Der));
        assert_eq!(game.scoreboard().score, 0);

        game.toggle_pause();
        assert_eq!(game.phase(), GamePhase::Active);
        drop_at(&mut game, zone_center(Artikel::Der));
        assert_eq!(game.scoreboard().score, 10);

        // Paused during the feedback window: no spawn until resumed
        let input = TickInput {
            pause: true,
            ..Default::default()
        };
        game.tick(&input, DT, &layout());
        run_for(&mut game, 2.0);
        assert!(game.active().is_none());
        game.tick(&input, DT, &layout());
        assert_eq!(game.phase(), GamePhase::Resolving);
        run_for(&mut game, 0.6);
        assert!(game.active().is_some());
    }

    #[test]
    fn test_pause_mid_drag_returns_word() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        let down = TickInput {
            pointer: vec![PointerEvent::down(1, Vec2::new(400.0, 60.0))],
            ..Default::default()
        };
        game.tick(&down, DT, &layout());
        assert!(game.is_dragging());
        game.toggle_pause();
        assert!(!game.is_dragging());
        assert!(!game.active().unwrap().body.dragging);
    }

    #[test]
    fn test_restart_resets_everything() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        for _ in 0..3 {
            drop_at(&mut game, zone_center(Artikel::Die));
            run_for(&mut game, 0.7);
        }
        assert_eq!(game.phase(), GamePhase::GameOver);
        let old_generation = game.generation();

        for _ in 0..2 {
            let input = TickInput {
                restart: true,
                ..Default::default()
            };
            game.tick(&input, DT, &layout());
            assert_eq!(game.scoreboard(), Scoreboard::default());
            assert!(game.failed_words().is_empty());
            assert_eq!(game.phase(), GamePhase::Active);
            assert!(game.active().unwrap().generation > old_generation);
        }
    }

    #[test]
    fn test_unmounted_zone_is_no_target() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        // Keep the floor well below the zones so the word survives the release
        game.set_arena_height(1200.0);
        let mut partial = layout();
        partial.remove_region(Artikel::Der);
        let target = zone_center(Artikel::Der);
        let input = TickInput {
            pointer: vec![
                PointerEvent::down(1, Vec2::new(400.0, 60.0)),
                PointerEvent::moved(1, target),
                PointerEvent::up(1, target),
            ],
            ..Default::default()
        };
        game.tick(&input, DT, &partial);
        assert_eq!(game.scoreboard(), Scoreboard::default());
        assert_eq!(game.phase(), GamePhase::Active);
    }

    #[test]
    fn test_shutdown_stops_everything() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        drop_at(&mut game, zone_center(Artikel::Der));
        game.shutdown();
        run_for(&mut game, 2.0);
        game.toggle_pause();
        game.restart();
        assert!(!game.is_live());
        assert!(game.active().is_none());
        assert_eq!(game.scoreboard().score, 10);
        assert_eq!(game.phase(), GamePhase::Resolving);
    }

    #[test]
    fn test_word_sinking_into_zone_is_judged() {
        let (mut game, _) = game_with(vec![word(Artikel::Das)]);
        // Zones reach up to the floor line so a falling word enters 'das'
        let tall = layout().with_region(Artikel::Das, Rect::new(280.0, 300.0, 520.0, 580.0));
        game.refresh_zones(&tall);
        for _ in 0..600 {
            game.tick(&TickInput::default(), DT, &tall);
            if game.phase() != GamePhase::Active {
                break;
            }
        }
        assert_eq!(game.scoreboard().score, 10);
        assert_eq!(game.scoreboard().lives, 3);
    }

    #[test]
    fn test_zone_wins_over_floor_on_same_frame() {
        let (mut game, _) = game_with(vec![word(Artikel::Das)]);
        // On the floor frame the centre lands on the top edge of 'das' (y 460)
        let mut frames = 0;
        while game.phase() == GamePhase::Active && frames < 600 {
            game.tick(&TickInput::default(), DT, &layout());
            frames += 1;
        }
        assert_eq!(game.scoreboard().score, 10);
        assert_eq!(game.scoreboard().lives, 3);
        assert!(game.failed_words().is_empty());
    }

    #[test]
    fn test_failing_store_never_interrupts_play() {
        let store: SharedStore = Rc::new(BrokenStore);
        let mut game = ArtikelDrop::new(
            Level::A1,
            Tuning::default(),
            Box::new(Script(VecDeque::new(), word(Artikel::Der))),
            store,
        );
        game.refresh_zones(&layout());
        let first = game.generation();

        let mut records = 0;
        for _ in 0..3 {
            drop_at(&mut game, zone_center(Artikel::Der));
            records += game
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::NewHighScore { .. }))
                .count();
            run_for(&mut game, 0.6);
        }
        assert_eq!(records, 3);
        assert_eq!(game.scoreboard().score, 60);
        assert_eq!(game.high_score(), 60);
        assert_eq!(game.phase(), GamePhase::Active);
        assert_eq!(game.generation(), first + 3);
    }

    #[test]
    fn test_review_dedupes() {
        let (mut game, _) = game_with(vec![word(Artikel::Der)]);
        drop_at(&mut game, zone_center(Artikel::Die));
        run_for(&mut game, 0.7);
        drop_at(&mut game, zone_center(Artikel::Das));
        assert_eq!(game.failed_words().len(), 2);
        assert_eq!(game.review().len(), 1);
        assert_eq!(game.review()[0].chosen, Some(Artikel::Die));
    }
}
