#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The host translates its raw input (browser pointer events, a terminal
//! mouse stream, a scripted path) into these types and feeds them to the
//! effect components. All events derive `Clone` and `PartialEq` for use in
//! tests and pattern matching.
//!
//! # Design Notes
//!
//! - Coordinates are f32 page pixels, origin top-left, matching the raw
//!   pointer samples of the original page.
//! - There is deliberately no button or modifier state: the effects only
//!   ever consume movement and leave.

use crate::geometry::Point;

/// Canonical host event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// A pointer event.
    Pointer(PointerEvent),

    /// The viewport or document geometry changed (resize, orientation
    /// change, content growth). Carries the new geometry.
    ViewportChanged(Viewport),
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate in page pixels.
    pub x: f32,

    /// Y coordinate in page pixels.
    pub y: f32,
}

impl PointerEvent {
    /// Create a pointer-move event at the given position.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Moved,
            x,
            y,
        }
    }

    /// Create a pointer-leave event.
    ///
    /// The position is the last known sample before the pointer left the
    /// page; consumers that only care about departure can ignore it.
    #[must_use]
    pub const fn left(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Left,
            x,
            y,
        }
    }

    /// Get the position as a point.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved within the page.
    Moved,

    /// Pointer left the page.
    Left,
}

/// Viewport and document geometry as seen by the host.
///
/// `scroll_height` is the full document height, which can exceed `height`
/// (the visible viewport) on a scrolling page. The grid overlay spans the
/// whole document, so its row count derives from `scroll_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible viewport width in pixels.
    pub width: f32,

    /// Visible viewport height in pixels.
    pub height: f32,

    /// Full document scroll height in pixels.
    pub scroll_height: f32,
}

impl Viewport {
    /// Create a viewport whose document fits exactly in the visible area.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_height: height,
        }
    }

    /// Set the full document scroll height.
    #[must_use]
    pub const fn with_scroll_height(mut self, scroll_height: f32) -> Self {
        self.scroll_height = scroll_height;
        self
    }
}
