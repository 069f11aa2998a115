//! JS-facing game handles
//!
//! The page owns the DOM: it reports zone/slot rectangles, forwards pointer
//! events, and calls `frame(now)` from `requestAnimationFrame`. Each frame
//! returns the drained events as a JSON array.

use std::rc::Rc;

use glam::Vec2;
use serde_json::json;
use wasm_bindgen::prelude::*;

use super::clock::FrameClock;
use super::storage::LocalStorageStore;
use crate::content::{Artikel, Catalog, Level};
use crate::highscores::GameMode;
use crate::persistence::SharedStore;
use crate::settings::Settings;
use crate::sim::{ArtikelDrop, GameEvent, PointerEvent, Rect, SatzSplitter, StaticLayout, TickInput};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    log::info!("Lernen Hub starting...");
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * f64::from(u32::MAX)) as u64
}

fn parse_level(level: &str) -> Result<Level, JsValue> {
    Level::parse(level).ok_or_else(|| JsValue::from_str(&format!("unknown level '{}'", level)))
}

fn events_json(events: &[GameEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}

fn shared_store() -> SharedStore {
    Rc::new(LocalStorageStore::new())
}

/// Stored settings, with this game remembered for the next visit
fn settings_for(mode: GameMode, level: Level) -> Settings {
    let mut settings = Settings::load();
    settings.remember(mode, level);
    settings.save();
    settings
}

/// Persist the page's preference toggles
#[wasm_bindgen]
pub fn save_settings(reduced_motion: bool, show_hints: bool) {
    let mut settings = Settings::load();
    settings.reduced_motion = reduced_motion;
    settings.show_hints = show_hints;
    settings.save();
}

#[wasm_bindgen]
pub struct WebArtikelDrop {
    game: ArtikelDrop,
    layout: StaticLayout<Artikel>,
    clock: FrameClock,
    input: TickInput,
}

#[wasm_bindgen]
impl WebArtikelDrop {
    #[wasm_bindgen(constructor)]
    pub fn new(level: &str) -> Result<WebArtikelDrop, JsValue> {
        let level = parse_level(level)?;
        let tuning = Tuning::default();
        let clock = FrameClock::new(tuning.max_frame_dt);
        let mut game = ArtikelDrop::new(level, tuning, Box::new(Catalog::new(random_seed())), shared_store());
        game.tilt_enabled = settings_for(GameMode::ArtikelDrop, level).tilt_enabled();
        Ok(Self {
            game,
            layout: StaticLayout::new(),
            clock,
            input: TickInput::default(),
        })
    }

    /// Report an article zone's client rectangle
    pub fn set_zone(&mut self, artikel: &str, left: f32, top: f32, right: f32, bottom: f32) -> bool {
        let Some(artikel) = Artikel::parse(artikel) else {
            return false;
        };
        self.layout.set_region(artikel, Rect::new(left, top, right, bottom));
        self.game.refresh_zones(&self.layout);
        true
    }

    pub fn clear_zone(&mut self, artikel: &str) {
        if let Some(artikel) = Artikel::parse(artikel) {
            self.layout.remove_region(artikel);
            self.game.refresh_zones(&self.layout);
        }
    }

    /// Spawn centre and size of the word card
    pub fn set_word_box(&mut self, center_x: f32, center_y: f32, width: f32, height: f32) {
        self.layout.entity_origin = Vec2::new(center_x, center_y);
        self.layout.entity_size = Some(Vec2::new(width, height));
    }

    pub fn resize(&mut self, arena_height: f32) {
        self.game.set_arena_height(arena_height);
        self.game.refresh_zones(&self.layout);
    }

    pub fn pointer_down(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.input.pointer.push(PointerEvent::down(pointer_id, Vec2::new(x, y)));
    }

    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.input.pointer.push(PointerEvent::moved(pointer_id, Vec2::new(x, y)));
    }

    pub fn pointer_up(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.input.pointer.push(PointerEvent::up(pointer_id, Vec2::new(x, y)));
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.input.pointer.push(PointerEvent::cancel(pointer_id, Vec2::new(x, y)));
    }

    pub fn toggle_pause(&mut self) {
        self.input.pause = true;
    }

    pub fn restart(&mut self) {
        self.input.restart = true;
    }

    /// Tab hidden: the next frame starts from zero
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Advance one animation frame; returns this frame's events as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        let dt = self.clock.frame(now_ms);
        let input = std::mem::take(&mut self.input);
        self.game.tick(&input, dt, &self.layout);
        events_json(&self.game.drain_events())
    }

    pub fn shutdown(&mut self) {
        self.game.shutdown();
    }

    // === State for rendering ===

    pub fn phase(&self) -> String {
        format!("{:?}", self.game.phase())
    }

    pub fn score(&self) -> f64 {
        self.game.scoreboard().score as f64
    }

    pub fn lives(&self) -> u8 {
        self.game.scoreboard().lives
    }

    pub fn streak(&self) -> u32 {
        self.game.scoreboard().streak
    }

    pub fn high_score(&self) -> f64 {
        self.game.high_score() as f64
    }

    pub fn word_text(&self) -> Option<String> {
        self.game.active().map(|a| a.word.text.to_string())
    }

    pub fn word_english(&self) -> Option<String> {
        self.game.active().map(|a| a.word.english.to_string())
    }

    /// Word offset from its spawn point
    pub fn word_x(&self) -> f32 {
        self.game.word_offset().map_or(0.0, |(pos, _)| pos.x)
    }

    pub fn word_y(&self) -> f32 {
        self.game.word_offset().map_or(0.0, |(pos, _)| pos.y)
    }

    /// Tilt in degrees
    pub fn word_tilt(&self) -> f32 {
        self.game.word_offset().map_or(0.0, |(_, tilt)| tilt)
    }

    /// Game-over review as JSON `[{word, correct, chosen, english}]`
    pub fn review_json(&self) -> String {
        let review: Vec<_> = self
            .game
            .review()
            .into_iter()
            .map(|f| {
                json!({
                    "word": f.word.text,
                    "correct": f.word.artikel.as_str(),
                    "chosen": f.chosen.map(|a| a.as_str()),
                    "english": f.word.english,
                })
            })
            .collect();
        serde_json::Value::Array(review).to_string()
    }
}

#[wasm_bindgen]
pub struct WebSatzSplitter {
    game: SatzSplitter,
    layout: StaticLayout<usize>,
    clock: FrameClock,
    input: TickInput,
    show_hints: bool,
}

#[wasm_bindgen]
impl WebSatzSplitter {
    #[wasm_bindgen(constructor)]
    pub fn new(level: &str) -> Result<WebSatzSplitter, JsValue> {
        let level = parse_level(level)?;
        let tuning = Tuning::default();
        let clock = FrameClock::new(tuning.max_frame_dt);
        let game = SatzSplitter::new(level, tuning, Box::new(Catalog::new(random_seed())), shared_store());
        Ok(Self {
            game,
            layout: StaticLayout::new(),
            clock,
            input: TickInput::default(),
            show_hints: settings_for(GameMode::SatzSplitter, level).show_hints,
        })
    }

    /// Report slot `index`'s client rectangle
    pub fn set_slot(&mut self, index: usize, left: f32, top: f32, right: f32, bottom: f32) {
        self.layout.set_region(index, Rect::new(left, top, right, bottom));
        self.game.refresh_slots(&self.layout);
    }

    /// Forget all slot rectangles (new sentence rendered)
    pub fn clear_slots(&mut self) {
        self.layout.clear_regions();
        self.game.refresh_slots(&self.layout);
    }

    /// Press on pool word `word_id`
    pub fn pointer_down(&mut self, pointer_id: i32, x: f32, y: f32, word_id: u32) {
        self.input
            .pointer
            .push(PointerEvent::down_on(pointer_id, Vec2::new(x, y), word_id));
    }

    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.input.pointer.push(PointerEvent::moved(pointer_id, Vec2::new(x, y)));
    }

    pub fn pointer_up(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.input.pointer.push(PointerEvent::up(pointer_id, Vec2::new(x, y)));
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.input.pointer.push(PointerEvent::cancel(pointer_id, Vec2::new(x, y)));
    }

    pub fn toggle_pause(&mut self) {
        self.input.pause = true;
    }

    pub fn restart(&mut self) {
        self.input.restart = true;
    }

    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Advance one animation frame; returns this frame's events as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        let dt = self.clock.frame(now_ms);
        let input = std::mem::take(&mut self.input);
        self.game.tick(&input, dt, &self.layout);
        events_json(&self.game.drain_events())
    }

    pub fn shutdown(&mut self) {
        self.game.shutdown();
    }

    // === State for rendering ===

    pub fn phase(&self) -> String {
        format!("{:?}", self.game.phase())
    }

    pub fn score(&self) -> f64 {
        self.game.scoreboard().score as f64
    }

    pub fn lives(&self) -> u8 {
        self.game.scoreboard().lives
    }

    pub fn streak(&self) -> u32 {
        self.game.scoreboard().streak
    }

    pub fn high_score(&self) -> f64 {
        self.game.high_score() as f64
    }

    pub fn time_left(&self) -> u32 {
        self.game.time_left()
    }

    pub fn slot_count(&self) -> usize {
        self.game.slot_count()
    }

    pub fn english(&self) -> Option<String> {
        self.game.sentence().map(|s| s.english.to_string())
    }

    pub fn hint(&self) -> Option<String> {
        if !self.show_hints {
            return None;
        }
        self.game.sentence().and_then(|s| s.hint).map(str::to_string)
    }

    /// Pool as JSON `[{id, text, role, dx, dy}]`
    pub fn pool_json(&self) -> String {
        let pool: Vec<_> = self
            .game
            .pool()
            .iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "text": p.word.text,
                    "role": p.word.role,
                    "dx": p.offset.x,
                    "dy": p.offset.y,
                })
            })
            .collect();
        serde_json::Value::Array(pool).to_string()
    }

    /// Slots as JSON, `null` for empty ones
    pub fn slots_json(&self) -> String {
        let slots: Vec<_> = self
            .game
            .slots()
            .iter()
            .map(|slot| slot.map(|w| w.text))
            .collect();
        serde_json::to_string(&slots).unwrap_or_else(|_| "[]".to_string())
    }

    /// Game-over review as JSON `[{english, sentence}]`
    pub fn review_json(&self) -> String {
        let review: Vec<_> = self
            .game
            .review()
            .iter()
            .map(|s| json!({ "english": s.english, "sentence": s.text() }))
            .collect();
        serde_json::Value::Array(review).to_string()
    }
}
