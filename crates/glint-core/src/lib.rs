#![forbid(unsafe_code)]

//! Host-facing vocabulary for the glint pointer effects.
//!
//! # Role in glint
//! `glint-core` is the shared vocabulary between an embedding host (the page
//! shell, a simulator, a test harness) and the effect components in
//! `glint-fx`. It owns no rendering and no timers; the host feeds events and
//! timestamps in, the effects hand draw state back out.
//!
//! # This crate provides
//! - [`event`]: pointer and viewport events in float pixel space.
//! - [`geometry`]: points and rectangles in the same space.
//! - [`surface`]: the marker-region map that stands in for DOM ancestry
//!   queries (`is interactive`, `is shielded`, `is an emphasized section`).
//! - [`clock`]: injectable monotonic time sources.

/// Pointer and viewport event types.
pub mod event;
/// Float-pixel geometric primitives.
pub mod geometry;
/// Marker-region surface map for pointer classification.
pub mod surface;
/// Injectable monotonic clocks.
pub mod clock;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use event::{HostEvent, PointerEvent, PointerEventKind, Viewport};
pub use geometry::{Point, Rectf};
pub use surface::{Region, RegionFlags, SurfaceMap};
