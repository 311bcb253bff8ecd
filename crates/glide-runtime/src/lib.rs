//! Glide Runtime - Frame loop infrastructure
//!
//! Provides the building blocks a host render loop needs to drive an animator:
//! - `FrameClock` — per-frame delta time, wall-clock or stepped manually
//! - `ScrollProgress` — normalized, damped scroll offset
//! - `FrameSystem` — trait for systems ticked once per rendered frame

mod clock;
mod scroll;
mod system;

pub use clock::FrameClock;
pub use scroll::ScrollProgress;
pub use system::FrameSystem;
