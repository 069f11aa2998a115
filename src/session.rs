//! Hub shell: mode and level navigation
//!
//! The hub owns at most one arena. Leaving a game, or starting another, shuts
//! the previous arena down before it is dropped.

use crate::content::{Catalog, Level};
use crate::highscores::{GameMode, read_best};
use crate::persistence::SharedStore;
use crate::settings::Settings;
use crate::sim::{ArtikelDrop, SatzSplitter};
use crate::tuning::Tuning;

/// Where the player is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Hub,
    LevelSelect(GameMode),
    Playing(GameMode, Level),
}

/// The live game
pub enum Arena {
    Artikel(ArtikelDrop),
    Satz(SatzSplitter),
}

impl Arena {
    pub fn mode(&self) -> GameMode {
        match self {
            Arena::Artikel(_) => GameMode::ArtikelDrop,
            Arena::Satz(_) => GameMode::SatzSplitter,
        }
    }

    pub fn shutdown(&mut self) {
        match self {
            Arena::Artikel(game) => game.shutdown(),
            Arena::Satz(game) => game.shutdown(),
        }
    }

    pub fn is_live(&self) -> bool {
        match self {
            Arena::Artikel(game) => game.is_live(),
            Arena::Satz(game) => game.is_live(),
        }
    }
}

pub struct Session {
    screen: Screen,
    arena: Option<Arena>,
    store: SharedStore,
    tuning: Tuning,
    settings: Settings,
    /// Next content seed; bumped per round
    seed: u64,
}

impl Session {
    pub fn new(store: SharedStore, tuning: Tuning, settings: Settings, seed: u64) -> Self {
        Self {
            screen: Screen::Hub,
            arena: None,
            store,
            tuning,
            settings,
            seed,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn arena(&self) -> Option<&Arena> {
        self.arena.as_ref()
    }

    pub fn arena_mut(&mut self) -> Option<&mut Arena> {
        self.arena.as_mut()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Hub -> level select
    pub fn select_mode(&mut self, mode: GameMode) {
        self.close_arena();
        self.screen = Screen::LevelSelect(mode);
    }

    /// Level select -> playing. Any previous arena is shut down first.
    pub fn select_level(&mut self, level: Level) -> Option<&mut Arena> {
        let mode = match self.screen {
            Screen::LevelSelect(mode) | Screen::Playing(mode, _) => mode,
            Screen::Hub => return None,
        };
        self.close_arena();

        let catalog = Box::new(Catalog::new(self.seed));
        self.seed = self.seed.wrapping_add(1);
        let arena = match mode {
            GameMode::ArtikelDrop => {
                let mut game = ArtikelDrop::new(level, self.tuning.clone(), catalog, self.store.clone());
                game.tilt_enabled = self.settings.tilt_enabled();
                Arena::Artikel(game)
            }
            GameMode::SatzSplitter => {
                Arena::Satz(SatzSplitter::new(level, self.tuning.clone(), catalog, self.store.clone()))
            }
        };

        self.settings.remember(mode, level);
        self.screen = Screen::Playing(mode, level);
        self.arena = Some(arena);
        self.arena.as_mut()
    }

    /// Back to the hub from anywhere
    pub fn back_to_menu(&mut self) {
        self.close_arena();
        self.screen = Screen::Hub;
    }

    /// Stored best per level, for the level-select screen
    pub fn best_scores(&self, mode: GameMode) -> Vec<(Level, u64)> {
        Level::ALL
            .iter()
            .map(|&level| (level, read_best(&self.store, mode, level)))
            .collect()
    }

    fn close_arena(&mut self) {
        if let Some(mut arena) = self.arena.take() {
            arena.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, ScoreStore};

    fn session() -> (Session, std::rc::Rc<MemoryStore>) {
        let store = MemoryStore::shared();
        let session = Session::new(store.clone(), Tuning::default(), Settings::default(), 42);
        (session, store)
    }

    #[test]
    fn test_navigation() {
        let (mut session, _) = session();
        assert_eq!(session.screen(), Screen::Hub);
        assert!(session.select_level(Level::A1).is_none());

        session.select_mode(GameMode::ArtikelDrop);
        assert_eq!(session.screen(), Screen::LevelSelect(GameMode::ArtikelDrop));

        let arena = session.select_level(Level::B1).unwrap();
        assert_eq!(arena.mode(), GameMode::ArtikelDrop);
        assert_eq!(session.screen(), Screen::Playing(GameMode::ArtikelDrop, Level::B1));
        assert_eq!(session.settings().last_level, Some(Level::B1));

        session.back_to_menu();
        assert_eq!(session.screen(), Screen::Hub);
        assert!(session.arena().is_none());
    }

    #[test]
    fn test_one_arena_at_a_time() {
        let (mut session, _) = session();
        session.select_mode(GameMode::SatzSplitter);
        session.select_level(Level::A1);
        session.select_level(Level::A2);
        match session.arena() {
            Some(Arena::Satz(game)) => {
                assert_eq!(game.level(), Level::A2);
                assert!(game.is_live());
            }
            _ => panic!("expected a Satz-Splitter arena"),
        }
    }

    #[test]
    fn test_reduced_motion_reaches_arena() {
        let store = MemoryStore::shared();
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let mut session = Session::new(store, Tuning::default(), settings, 1);
        session.select_mode(GameMode::ArtikelDrop);
        match session.select_level(Level::A1) {
            Some(Arena::Artikel(game)) => assert!(!game.tilt_enabled),
            _ => panic!("expected an Artikel-Drop arena"),
        }
    }

    #[test]
    fn test_best_scores_per_level() {
        let (session, store) = session();
        store.set("satzsplitter-highscore-B2", 300).unwrap();
        let scores = session.best_scores(GameMode::SatzSplitter);
        assert_eq!(scores.len(), 6);
        assert!(scores.contains(&(Level::B2, 300)));
        assert!(scores.contains(&(Level::A1, 0)));
        assert!(session.best_scores(GameMode::ArtikelDrop).iter().all(|(_, best)| *best == 0));
    }
}
