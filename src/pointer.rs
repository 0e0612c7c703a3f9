//! Shared pointer state.
//!
//! One `PointerState` is owned by the field and read by every particle during
//! its step. Event handlers are the only writers; the update loop only reads.
//! `position` is `None` whenever no pointer is active: the cursor left the
//! window, or the field runs in static mode.

use glam::Vec2;

/// Default influence radius around the pointer, in surface pixels.
pub const DEFAULT_POINTER_RADIUS: f32 = 150.0;

/// Pointer position and influence radius.
///
/// The radius is fixed for the lifetime of the field; only the position
/// changes as the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Current pointer location in surface pixels, `None` when inactive.
    pub position: Option<Vec2>,
    /// Influence radius in surface pixels.
    pub radius: f32,
}

impl PointerState {
    /// Create an inactive pointer with the given influence radius.
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    /// Record a pointer position.
    pub fn set(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    /// Mark the pointer as inactive.
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Whether a pointer position is currently known.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(DEFAULT_POINTER_RADIUS)
    }
}
