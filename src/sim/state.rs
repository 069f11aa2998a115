//! Round state shared by both games
//!
//! Score, lives and streak, the phase machine, the event stream consumed by
//! the presentation layer, and the delay queue that replaces fire-and-forget
//! timers.

use serde::{Deserialize, Serialize};

use super::drag::PointerEvent;
use crate::consts::STARTING_LIVES;

/// Input collected by the host since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pause toggle
    pub pause: bool,
    /// Start over with fresh counters
    pub restart: bool,
    /// Pointer events in arrival order
    pub pointer: Vec<PointerEvent>,
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Sentence preview before the first round; input and clock frozen
    Intro,
    /// Item live and draggable
    Active,
    /// Feedback window after a resolution, before the next item
    Resolving,
    Paused,
    /// Lives exhausted; only a restart leaves this phase
    GameOver,
}

/// How a drop or timeout was judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Correct,
    Incorrect,
    /// Floor reached or countdown expired without a drop
    Missed,
}

/// Score, lives and streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub lives: u8,
    pub streak: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            streak: 0,
        }
    }
}

impl Scoreboard {
    /// Award `base × (streak + 1)` and extend the streak. Returns the points gained.
    pub fn reward(&mut self, base: u64) -> u64 {
        let gained = base * (u64::from(self.streak) + 1);
        self.score += gained;
        self.streak += 1;
        gained
    }

    /// Lose a life and the streak. Returns true when no lives remain.
    pub fn penalize(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.streak = 0;
        self.lives == 0
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }
}

/// Discrete notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// New word or sentence is live
    Spawned { generation: u64, text: String },
    /// Satz-Splitter: a word landed in its correct slot
    Placed { generation: u64, slot: usize, text: String },
    /// Drag ended over no target; the item stays live
    Returned { generation: u64 },
    Resolved {
        generation: u64,
        resolution: Resolution,
        /// Zone or slot the item was dropped on
        target: Option<String>,
        points: u64,
    },
    Paused,
    Resumed,
    NewHighScore { score: u64 },
    GameOver { score: u64, high_score: u64 },
    Restarted,
}

#[derive(Debug, Clone)]
struct Pending<A> {
    remaining: f32,
    generation: u64,
    action: A,
}

/// Actions due after a delay, tagged with the generation that scheduled them
#[derive(Debug, Clone)]
pub struct DelayQueue<A> {
    pending: Vec<Pending<A>>,
}

impl<A> Default for DelayQueue<A> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<A> DelayQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: f32, generation: u64, action: A) {
        self.pending.push(Pending {
            remaining: delay.max(0.0),
            generation,
            action,
        });
    }

    /// Advance by `dt`; returns due actions in scheduling order. Entries from
    /// an older generation are discarded rather than fired.
    pub fn advance(&mut self, dt: f32, current_generation: u64) -> Vec<A> {
        self.pending.retain(|p| p.generation == current_generation);

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            self.pending[i].remaining -= dt;
            if self.pending[i].remaining <= 0.0 {
                due.push(self.pending.remove(i).action);
            } else {
                i += 1;
            }
        }
        due
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Phase plus the phase to return to after a pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseControl {
    phase: GamePhase,
    resume: GamePhase,
}

impl PhaseControl {
    pub fn new(phase: GamePhase) -> Self {
        Self { phase, resume: phase }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn set(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    pub fn is(&self, phase: GamePhase) -> bool {
        self.phase == phase
    }

    /// Toggle pause. Returns the event to emit, `None` on GameOver.
    pub fn toggle_pause(&mut self) -> Option<GameEvent> {
        match self.phase {
            GamePhase::GameOver => None,
            GamePhase::Paused => {
                self.phase = self.resume;
                Some(GameEvent::Resumed)
            }
            other => {
                self.resume = other;
                self.phase = GamePhase::Paused;
                Some(GameEvent::Paused)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reward_scales_with_streak() {
        let mut board = Scoreboard::default();
        assert_eq!(board.reward(10), 10);
        assert_eq!(board.reward(10), 20);
        assert_eq!(board.reward(10), 30);
        assert_eq!(board.score, 60);
        assert_eq!(board.streak, 3);
    }

    #[test]
    fn test_penalize_resets_streak_and_floors_lives() {
        let mut board = Scoreboard::default();
        board.reward(10);
        assert!(!board.penalize());
        assert_eq!(board.streak, 0);
        assert_eq!(board.lives, 2);
        assert!(!board.penalize());
        assert!(board.penalize());
        assert!(board.penalize());
        assert_eq!(board.lives, 0);
        assert_eq!(board.score, 10);
    }

    #[test]
    fn test_delay_queue_fires_in_order() {
        let mut queue = DelayQueue::new();
        queue.schedule(0.5, 1, "spawn");
        queue.schedule(0.3, 1, "flash");
        assert!(queue.advance(0.2, 1).is_empty());
        assert_eq!(queue.advance(0.2, 1), vec!["flash"]);
        assert_eq!(queue.advance(0.2, 1), vec!["spawn"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_delay_queue_drops_stale_generation() {
        let mut queue = DelayQueue::new();
        queue.schedule(0.1, 1, "old");
        queue.schedule(0.1, 2, "new");
        assert_eq!(queue.advance(1.0, 2), vec!["new"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pause_restores_previous_phase() {
        let mut control = PhaseControl::new(GamePhase::Resolving);
        assert_eq!(control.toggle_pause(), Some(GameEvent::Paused));
        assert!(control.is(GamePhase::Paused));
        assert_eq!(control.toggle_pause(), Some(GameEvent::Resumed));
        assert!(control.is(GamePhase::Resolving));

        control.set(GamePhase::GameOver);
        assert_eq!(control.toggle_pause(), None);
        assert!(control.is(GamePhase::GameOver));
    }

    proptest! {
        #[test]
        fn prop_consecutive_correct_sum(n in 1u32..60, base in prop::sample::select(vec![10u64, 50])) {
            let mut board = Scoreboard::default();
            let mut last = 0;
            for _ in 0..n {
                board.reward(base);
                prop_assert!(board.score > last);
                last = board.score;
            }
            let expected: u64 = (1..=u64::from(n)).map(|k| base * k).sum();
            prop_assert_eq!(board.score, expected);
        }

        #[test]
        fn prop_lives_never_negative(failures in 0usize..20) {
            let mut board = Scoreboard::default();
            for _ in 0..failures {
                board.penalize();
            }
            prop_assert!(board.lives <= STARTING_LIVES);
            prop_assert_eq!(board.is_dead(), failures >= usize::from(STARTING_LIVES));
        }
    }
}
