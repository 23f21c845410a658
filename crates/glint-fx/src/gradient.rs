#![forbid(unsafe_code)]

//! Gradient ramp and the ping-pong color cursor.
//!
//! Newly lit trail cells take their hue from a slowly advancing cursor over
//! a precomputed ramp. The cursor bounces at both ends instead of wrapping,
//! so the trail drifts back and forth between the two endpoint hues without
//! a harsh seam.
//!
//! # Invariants
//!
//! 1. A ramp always holds at least 2 colors.
//! 2. The cursor index stays inside `[0, ramp.len() - 1]` forever.
//! 3. A built ramp is immutable; cells keep the color they sampled even as
//!    the cursor moves on.

use crate::color::{Rgb, ease_in_out_quad, lerp_color};

/// Ramp start endpoint (purple).
pub const RAMP_FROM: Rgb = Rgb::new(168, 85, 247);
/// Ramp end endpoint (cyan).
pub const RAMP_TO: Rgb = Rgb::new(6, 182, 212);

/// Default ramp resolution when no explicit palette is supplied.
pub const DEFAULT_RAMP_STEPS: usize = 400;

/// An immutable ordered sequence of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientRamp {
    colors: Vec<Rgb>,
}

impl GradientRamp {
    /// Build an eased ramp between the two fixed endpoint colors.
    ///
    /// `steps` is clamped to a minimum of 2. The interpolation parameter is
    /// eased (quadratic in/out), evaluated at evenly spaced values in
    /// `[0, 1]`, so the ramp lingers near its endpoints.
    #[must_use]
    pub fn generated(steps: usize) -> Self {
        let steps = steps.max(2);
        let mut colors = Vec::with_capacity(steps);
        for i in 0..steps {
            let t = ease_in_out_quad(i as f64 / (steps - 1) as f64);
            colors.push(lerp_color(RAMP_FROM, RAMP_TO, t));
        }
        Self { colors }
    }

    /// Use an explicitly supplied palette.
    ///
    /// Palettes shorter than 2 colors are padded by repeating the last (or a
    /// neutral gray when empty) so cursor ping-pong stays well defined.
    #[must_use]
    pub fn explicit(mut colors: Vec<Rgb>) -> Self {
        while colors.len() < 2 {
            let fill = colors.last().copied().unwrap_or(Rgb::new(212, 212, 216));
            colors.push(fill);
        }
        Self { colors }
    }

    /// Number of colors in the ramp.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Ramps are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color at an index, if in range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }
}

/// Cursor into a ramp, advancing in a ping-pong pattern.
///
/// `sample()` returns the current index and then advances the cursor once
/// every `advance_every` samples, flipping direction when it reaches either
/// end of the ramp.
#[derive(Debug, Clone)]
pub struct ColorCursor {
    index: usize,
    direction: i8,
    sample_count: u32,
    advance_every: u32,
}

impl ColorCursor {
    /// Create a cursor at index 0, moving forward.
    ///
    /// `advance_every` is clamped to a minimum of 1.
    #[must_use]
    pub fn new(advance_every: u32) -> Self {
        Self {
            index: 0,
            direction: 1,
            sample_count: 0,
            advance_every: advance_every.max(1),
        }
    }

    /// Current index without sampling.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Take the current index for a newly lit cell and advance.
    pub fn sample(&mut self, ramp: &GradientRamp) -> usize {
        let current = self.index;
        self.sample_count += 1;
        if self.sample_count >= self.advance_every {
            self.sample_count = 0;
            self.step(ramp.len());
        }
        current
    }

    fn step(&mut self, len: usize) {
        if len <= 1 {
            return;
        }
        let next = self.index as i64 + i64::from(self.direction);
        if next >= len as i64 - 1 {
            self.index = len - 1;
            self.direction = -1;
        } else if next <= 0 {
            self.index = 0;
            self.direction = 1;
        } else {
            self.index = next as usize;
        }
    }
}
