//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (`clock`)
//! - Storage (LocalStorage on web)
//! - The JS-facing game handles (`web`)

pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::FrameClock;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;
