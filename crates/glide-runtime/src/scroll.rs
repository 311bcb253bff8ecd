//! Normalized scroll progress

use glide_core::{GlideError, Result};
use log::warn;

/// Scroll position of a container `pages` viewports tall, as a 0..1 offset.
///
/// The raw offset follows the container directly and may overshoot either
/// end (elastic overscroll). The exposed [`offset`](Self::offset) is damped
/// toward the raw value each frame and never reported below zero.
#[derive(Debug, Clone)]
pub struct ScrollProgress {
    pages: f32,
    /// Convergence rate per second; 0 means no damping.
    damping: f32,
    target: f32,
    current: f32,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self {
            pages: 1.0,
            damping: 0.0,
            target: 0.0,
            current: 0.0,
        }
    }
}

impl ScrollProgress {
    pub fn new(pages: f32, damping: f32) -> Result<Self> {
        if !pages.is_finite() || pages < 1.0 {
            return Err(GlideError::InvalidConfig(format!(
                "scroll pages must be at least 1, got {}",
                pages
            )));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(GlideError::InvalidConfig(format!(
                "scroll damping must be non-negative, got {}",
                damping
            )));
        }
        Ok(Self {
            pages,
            damping,
            ..Self::default()
        })
    }

    pub fn pages(&self) -> f32 {
        self.pages
    }

    /// Set the raw offset directly (0 = top, 1 = bottom).
    pub fn set_offset(&mut self, raw: f32) {
        if raw.is_nan() {
            warn!("Ignoring NaN scroll offset");
            return;
        }
        self.target = raw;
        if self.damping == 0.0 {
            self.current = raw;
        }
    }

    /// Set the raw offset from a pixel scroll position.
    ///
    /// The scrollable range is `(pages - 1) * viewport_height`; a container
    /// that cannot scroll reports offset 0.
    pub fn set_offset_pixels(&mut self, scroll_top: f32, viewport_height: f32) {
        let range = (self.pages - 1.0) * viewport_height;
        if range <= 0.0 || !range.is_finite() {
            self.set_offset(0.0);
        } else {
            self.set_offset(scroll_top / range);
        }
    }

    /// Move the damped offset toward the raw offset. Call once per frame.
    pub fn update(&mut self, dt: f32) {
        if self.damping == 0.0 {
            self.current = self.target;
            return;
        }
        let alpha = 1.0 - (-self.damping * dt.max(0.0)).exp();
        self.current += (self.target - self.current) * alpha;
    }

    /// Damped offset, never below zero. Not clamped above 1.
    pub fn offset(&self) -> f32 {
        self.current.max(0.0)
    }

    /// Undamped offset as last set.
    pub fn raw_offset(&self) -> f32 {
        self.target
    }
}
