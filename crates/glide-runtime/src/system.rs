//! Frame system trait

use glide_core::Result;

/// A system that is ticked once per rendered frame by the host loop
///
/// Systems own their state exclusively; the host only hands them the elapsed
/// time and reads their outputs back afterwards.
pub trait FrameSystem {
    /// Called once before the first frame
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame with the seconds elapsed since the previous frame
    fn update(&mut self, dt: f64) -> Result<()>;

    /// Called when the host view is torn down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
