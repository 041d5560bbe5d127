//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (requestAnimationFrame on web, manual pumping natively)
//! - Drawing surface acquisition and resize
//! - Pointer/touch input
//! - Listener lifetime on unmount

pub mod frame_loop;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use frame_loop::{Animator, FrameHandle, FrameScheduler, LoopState, ManualScheduler, pump};

#[cfg(target_arch = "wasm32")]
pub use web::{FieldHandle, load_settings, mount_field, save_settings};
