//! Lernen Hub entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless autoplay round of each game and logs what happens.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::Path;
    use std::rc::Rc;

    use glam::Vec2;
    use lernen_hub::persistence::{JsonFileStore, SharedStore};
    use lernen_hub::sim::{GameEvent, GamePhase, Layout, PointerEvent, Rect, StaticLayout, TickInput};
    use lernen_hub::{Arena, Artikel, GameMode, Level, Screen, Session, Settings, Tuning};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;
    /// Give up after this many simulated seconds
    const MAX_SECONDS: f32 = 600.0;
    /// Chance the bot answers correctly
    const SKILL: f64 = 0.8;

    const WORD_ORIGIN: Vec2 = Vec2::new(400.0, 60.0);

    fn zones() -> StaticLayout<Artikel> {
        StaticLayout::new()
            .with_region(Artikel::Der, Rect::new(20.0, 460.0, 260.0, 580.0))
            .with_region(Artikel::Das, Rect::new(280.0, 460.0, 520.0, 580.0))
            .with_region(Artikel::Die, Rect::new(540.0, 460.0, 780.0, 580.0))
            .with_entity(WORD_ORIGIN, Vec2::new(140.0, 56.0))
    }

    fn slots() -> StaticLayout<usize> {
        let mut layout = StaticLayout::new();
        for i in 0..12 {
            let left = 20.0 + 100.0 * i as f32;
            layout.set_region(i, Rect::new(left, 200.0, left + 90.0, 260.0));
        }
        layout
    }

    fn report(events: Vec<GameEvent>) {
        for event in events {
            match &event {
                GameEvent::GameOver { .. } | GameEvent::NewHighScore { .. } => log::info!("{:?}", event),
                _ => log::debug!("{:?}", event),
            }
        }
    }

    fn drag(from: Vec2, to: Vec2, target: Option<u32>) -> TickInput {
        let down = match target {
            Some(id) => PointerEvent::down_on(1, from, id),
            None => PointerEvent::down(1, from),
        };
        TickInput {
            pointer: vec![down, PointerEvent::moved(1, to), PointerEvent::up(1, to)],
            ..Default::default()
        }
    }

    fn play_artikel(session: &mut Session, rng: &mut Pcg32) {
        let layout = zones();
        let Some(Arena::Artikel(game)) = session.arena_mut() else {
            return;
        };
        game.set_arena_height(600.0);
        game.refresh_zones(&layout);

        let mut elapsed = 0.0;
        while game.phase() != GamePhase::GameOver && elapsed < MAX_SECONDS {
            let mut input = TickInput::default();
            // Let the word fall a little before answering
            if let Some(active) = game.active().filter(|a| a.body.pos.y > 100.0 && !a.body.dragging) {
                let correct = active.word.artikel;
                let choice = if rng.random_bool(SKILL) {
                    correct
                } else {
                    Artikel::ZONE_ORDER[rng.random_range(0..3)]
                };
                let from = WORD_ORIGIN + active.body.pos;
                let to = layout.region_rect(choice).map_or(from, |r| r.center());
                input = drag(from, to, None);
            }
            game.tick(&input, DT, &layout);
            report(game.drain_events());
            elapsed += DT;
        }
        let board = game.scoreboard();
        log::info!(
            "Artikel-Drop {}: score {}, {} words to review",
            game.level().as_str(),
            board.score,
            game.review().len()
        );
    }

    fn play_satz(session: &mut Session, rng: &mut Pcg32) {
        let layout = slots();
        let Some(Arena::Satz(game)) = session.arena_mut() else {
            return;
        };

        let mut elapsed = 0.0;
        let mut think = 0.0;
        while game.phase() != GamePhase::GameOver && elapsed < MAX_SECONDS {
            let mut input = TickInput::default();
            think += DT;
            if game.phase() == GamePhase::Active && think > 1.5 {
                think = 0.0;
                let next = game.slots().iter().position(Option::is_none);
                let pick = if rng.random_bool(SKILL) {
                    next.and_then(|slot| game.pool().iter().find(|p| p.word.position == slot + 1))
                } else {
                    game.pool().get(rng.random_range(0..game.pool().len().max(1)))
                };
                if let (Some(word), Some(slot)) = (pick, next) {
                    let to = layout.region_rect(slot).map_or(Vec2::ZERO, |r| r.center());
                    input = drag(Vec2::new(400.0, 500.0), to, Some(word.id));
                }
            }
            game.tick(&input, DT, &layout);
            report(game.drain_events());
            elapsed += DT;
        }
        let board = game.scoreboard();
        log::info!(
            "Satz-Splitter {}: score {}, {} sentences to review",
            game.level().as_str(),
            board.score,
            game.review().len()
        );
        for sentence in game.review() {
            log::info!("  {} -> {}", sentence.english, sentence.text());
        }
    }

    /// Balance overrides from `path`, defaults when absent or malformed
    fn load_tuning(path: &Path) -> Tuning {
        let Ok(json) = std::fs::read_to_string(path) else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring malformed tuning {}: {}", path.display(), e);
                Tuning::default()
            }
        }
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let dir = std::env::temp_dir().join("lernen-hub");
        std::fs::create_dir_all(&dir)?;
        let store: SharedStore = Rc::new(JsonFileStore::open(dir.join("highscores.json"))?);
        let settings_path = dir.join("settings.json");
        let settings = Settings::load_from(&settings_path);
        let tuning = load_tuning(&dir.join("tuning.json"));

        let seed = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(7);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut session = Session::new(store, tuning, settings, seed);

        for mode in GameMode::ALL {
            session.select_mode(mode);
            for (level, best) in session.best_scores(mode) {
                log::info!("{} {}: best {}", mode.title(), level.as_str(), best);
            }
            session.select_level(Level::A1);
            match mode {
                GameMode::ArtikelDrop => play_artikel(&mut session, &mut rng),
                GameMode::SatzSplitter => play_satz(&mut session, &mut rng),
            }
        }

        session.back_to_menu();
        debug_assert_eq!(session.screen(), Screen::Hub);
        if let Err(e) = session.settings().save_to(&settings_path) {
            log::warn!("Settings not saved: {}", e);
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Lernen Hub (native) starting...");
    log::info!("Native mode runs a headless autoplay demo - build for wasm32 to play");

    if let Err(e) = demo::run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
