//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives as `dt` from the host
//! - Content comes from seeded providers
//! - Geometry is read through the `Layout` port, never from a DOM
//! - No rendering or platform dependencies

pub mod artikel;
pub mod drag;
pub mod fall;
pub mod geometry;
pub mod satz;
pub mod state;

pub use artikel::{ArtikelDrop, FailedWord, FallingWord};
pub use drag::{DragController, DragMove, DragRelease, PointerEvent, PointerPhase};
pub use fall::{FallBody, FallStep};
pub use geometry::{Layout, Rect, StaticLayout};
pub use hit_test::{classify_drop, collect_regions, region_at, region_near};
pub use satz::{PoolWord, SatzSplitter};
pub use state::{DelayQueue, GameEvent, GamePhase, PhaseControl, Resolution, Scoreboard, TickInput};
