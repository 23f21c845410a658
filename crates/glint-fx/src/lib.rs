#![forbid(unsafe_code)]

//! Decorative pointer effects for the glint page.
//!
//! # Role in glint
//! Two purpose-built visual components compose at the page root:
//!
//! - [`indicator::PointerIndicator`] — a custom pointer replacement shown
//!   over interactive page regions, driven through an imperative paint
//!   handle for per-sample smoothness.
//! - [`grid_trail::GridTrail`] — a full-viewport grid overlay that lights
//!   the cells under the pointer with a fading, gradient-colored trail.
//!
//! Both are host-agnostic state machines over `glint-core` vocabulary: the
//! host forwards pointer/viewport events and tick timestamps, and draws
//! whatever the components hand back. Neither owns a timer, a thread, or a
//! render surface.
//!
//! This is not a general animation library; the components exist for one
//! page's visual identity and their defaults encode that page.

/// Color triples, interpolation, and easing.
pub mod color;
/// Gradient ramp construction and the ping-pong color cursor.
pub mod gradient;
/// The grid trail overlay.
pub mod grid_trail;
/// The custom pointer indicator.
pub mod indicator;

pub use color::Rgb;
pub use gradient::{ColorCursor, GradientRamp};
pub use grid_trail::{CellQuad, Glow, GlowLayer, GridLayout, GridTrail, GridTrailConfig, LitCell};
pub use indicator::{IndicatorPaint, PointerIndicator, PointerVariant};
