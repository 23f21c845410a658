#![forbid(unsafe_code)]

//! Grid trail overlay.
//!
//! A full-viewport virtual grid that lights the cells under the pointer and
//! fades them back out. Fast pointer motion is bridged by lighting every
//! cell on the raster line between consecutive samples, so the trail never
//! shows gaps. Colors come from a ping-ponging cursor over a gradient ramp;
//! cells lit inside emphasized page sections carry a glow.
//!
//! The overlay is a pure state machine: the host feeds pointer events,
//! viewport changes, and tick timestamps in, and pulls a draw list of
//! [`CellQuad`]s back out. It owns no timer and no render surface.
//!
//! # Invariants
//!
//! 1. No cell is ever lit without a computed layout, or outside grid bounds.
//! 2. A cell's assigned color never changes while it fades; re-lighting
//!    assigns a fresh color and timestamp.
//! 3. `enhanced` is preserved verbatim on re-touch; only first touch
//!    consults the pointer's current section.
//! 4. A layout recompute clears all lit state: cell ids are flattened
//!    against the column count and do not survive a column-count change.
//! 5. The fade tick never does work more often than the configured rate cap
//!    and never while no cells are tracked.
//!
//! # Failure Modes
//!
//! None that surface to the host: missing layout and out-of-bounds
//! coordinates are silent no-ops, and configuration is clamped into range at
//! construction.

use std::time::Duration;

use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use glint_core::event::{PointerEvent, PointerEventKind, Viewport};
use glint_core::geometry::Point;
use glint_core::surface::{RegionFlags, SurfaceMap};

use crate::color::Rgb;
use crate::gradient::{ColorCursor, DEFAULT_RAMP_STEPS, GradientRamp};

/// Smallest permitted cell size, bounding total cell count on pathological
/// configurations.
pub const MIN_CELL_SIZE: f32 = 4.0;

/// Color rendered for a cell whose stored ramp index is out of range
/// (possible only with a swapped palette).
pub const FALLBACK_CELL_COLOR: Rgb = Rgb::new(212, 212, 216);

/// Glow layer color: purple.
pub const GLOW_PURPLE: Rgb = Rgb::new(168, 85, 247);
/// Glow layer color: sky.
pub const GLOW_SKY: Rgb = Rgb::new(56, 189, 248);

/// Alpha of the faint inset outline on non-enhanced quads.
pub const INSET_OUTLINE_ALPHA: f32 = 0.04;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Construction options for [`GridTrail`].
///
/// Out-of-range values are clamped rather than rejected; the worst case of a
/// bad configuration is a degraded visual, never an error.
#[derive(Debug, Clone)]
pub struct GridTrailConfig {
    cell_size: f32,
    fade_out: Duration,
    intensity: f32,
    gradient_colors: Option<Vec<Rgb>>,
    gradient_advance_every: u32,
    gradient_steps: usize,
    max_fps: u32,
}

impl GridTrailConfig {
    /// Create a configuration from the three required knobs.
    ///
    /// `cell_size` is floored at [`MIN_CELL_SIZE`], `fade_out` at 1 ms, and
    /// `intensity` clamped to `[0, 1]`.
    #[must_use]
    pub fn new(cell_size: f32, fade_out: Duration, intensity: f32) -> Self {
        Self {
            cell_size: cell_size.max(MIN_CELL_SIZE),
            fade_out: fade_out.max(Duration::from_millis(1)),
            intensity: intensity.clamp(0.0, 1.0),
            gradient_colors: None,
            gradient_advance_every: 1,
            gradient_steps: DEFAULT_RAMP_STEPS,
            max_fps: 120,
        }
    }

    /// Supply an explicit palette instead of the generated ramp.
    #[must_use]
    pub fn gradient_colors(mut self, colors: Vec<Rgb>) -> Self {
        self.gradient_colors = Some(colors);
        self
    }

    /// Advance the color cursor once every `n` newly lit cells (min 1).
    #[must_use]
    pub fn gradient_advance_every(mut self, n: u32) -> Self {
        self.gradient_advance_every = n.max(1);
        self
    }

    /// Resolution of the generated ramp (min 2).
    #[must_use]
    pub fn gradient_steps(mut self, steps: usize) -> Self {
        self.gradient_steps = steps.max(2);
        self
    }

    /// Cap on fade-tick processing rate (min 1).
    #[must_use]
    pub fn max_fps(mut self, fps: u32) -> Self {
        self.max_fps = fps.max(1);
        self
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Derived grid geometry, recomputed whole on every viewport change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Cell side length in pixels (>= [`MIN_CELL_SIZE`]).
    pub cell_size: f32,
    /// Columns spanning the viewport width.
    pub cols: u32,
    /// Rows spanning the full document scroll height.
    pub rows: u32,
}

impl GridLayout {
    /// Compute a layout from the viewport.
    #[must_use]
    pub fn compute(cell_size: f32, viewport: Viewport) -> Self {
        let size = cell_size.max(MIN_CELL_SIZE);
        let cols = (viewport.width.max(0.0) / size).ceil() as u32;
        let rows = (viewport.scroll_height.max(0.0) / size).ceil() as u32;
        Self {
            cell_size: size,
            cols,
            rows,
        }
    }

    /// Total grid width in pixels (>= viewport width).
    #[must_use]
    pub fn grid_width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    /// Total grid height in pixels (>= document scroll height).
    #[must_use]
    pub fn grid_height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Resolve a page point to `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell_at(&self, p: Point) -> Option<(u32, u32)> {
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let col = (p.x / self.cell_size) as u32;
        let row = (p.y / self.cell_size) as u32;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Flatten `(row, col)` to a cell id.
    #[inline]
    #[must_use]
    pub const fn cell_id(&self, row: u32, col: u32) -> u32 {
        row * self.cols + col
    }

    /// Unflatten a cell id to `(row, col)`.
    #[inline]
    #[must_use]
    pub const fn cell_pos(&self, id: u32) -> (u32, u32) {
        (id / self.cols, id % self.cols)
    }
}

// ---------------------------------------------------------------------------
// Lit-cell state
// ---------------------------------------------------------------------------

/// Tracked state of one lit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LitCell {
    /// Timestamp of the most recent (re-)light.
    pub touched_at: Duration,
    /// Ramp index assigned at light time; never recomputed while fading.
    pub color_index: usize,
    /// Lit inside an emphasized section; sticky until the cell is pruned.
    pub enhanced: bool,
}

/// One glow layer of an enhanced quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowLayer {
    pub color: Rgb,
    /// Shadow alpha, already scaled by the cell's current fade factor.
    pub strength: f32,
    /// Blur radius in pixels.
    pub radius: f32,
}

/// Soft two-layer glow around an enhanced cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub inner: GlowLayer,
    pub outer: GlowLayer,
}

/// One rectangle of the overlay draw list.
///
/// Quads without a glow get the faint inset outline
/// ([`INSET_OUTLINE_ALPHA`]) instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellQuad {
    /// Grid position.
    pub row: u32,
    pub col: u32,
    /// Top-left corner in page pixels.
    pub x: f32,
    pub y: f32,
    /// Side length in pixels.
    pub size: f32,
    /// Assigned ramp color.
    pub color: Rgb,
    /// Current opacity in `(0, intensity]`.
    pub opacity: f32,
    /// Present on enhanced cells.
    pub glow: Option<Glow>,
}

impl CellQuad {
    /// Alpha of the inset outline to draw on this quad; zero when the quad
    /// glows instead.
    #[must_use]
    pub fn outline_alpha(&self) -> f32 {
        if self.glow.is_some() {
            0.0
        } else {
            INSET_OUTLINE_ALPHA
        }
    }
}

// ---------------------------------------------------------------------------
// The overlay
// ---------------------------------------------------------------------------

/// The grid trail overlay component.
#[derive(Debug, Clone)]
pub struct GridTrail {
    cell_size: f32,
    fade_out: Duration,
    intensity: f32,
    frame_interval: Duration,
    ramp: GradientRamp,
    cursor: ColorCursor,
    layout: Option<GridLayout>,
    lit: AHashMap<u32, LitCell>,
    active: Option<u32>,
    prev_active: Option<u32>,
    last_frame: Option<Duration>,
}

impl GridTrail {
    /// Create an overlay from its configuration.
    ///
    /// The overlay starts without a layout and ignores pointer events until
    /// the first [`resize`](Self::resize).
    #[must_use]
    pub fn new(config: GridTrailConfig) -> Self {
        let ramp = match config.gradient_colors {
            Some(colors) => GradientRamp::explicit(colors),
            None => GradientRamp::generated(config.gradient_steps),
        };
        Self {
            cell_size: config.cell_size,
            fade_out: config.fade_out,
            intensity: config.intensity,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(config.max_fps)),
            ramp,
            cursor: ColorCursor::new(config.gradient_advance_every),
            layout: None,
            lit: AHashMap::new(),
            active: None,
            prev_active: None,
            last_frame: None,
        }
    }

    /// Current layout, once computed.
    #[must_use]
    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    /// Peak opacity of a freshly lit cell.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Number of currently tracked lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.lit.len()
    }

    /// Tracked state of a cell, if lit.
    #[must_use]
    pub fn lit_cell(&self, row: u32, col: u32) -> Option<&LitCell> {
        let layout = self.layout.as_ref()?;
        self.lit.get(&layout.cell_id(row, col))
    }

    /// The cell the pointer currently rests on, if any.
    #[must_use]
    pub fn active_cell(&self) -> Option<(u32, u32)> {
        let layout = self.layout.as_ref()?;
        self.active.map(|id| layout.cell_pos(id))
    }

    /// Recompute the layout for a new viewport.
    ///
    /// Cell ids are relative to the column count, so all lit state (and the
    /// path-interpolation anchor) is cleared; stale ids must not leak into
    /// the new grid.
    pub fn resize(&mut self, viewport: Viewport) {
        let layout = GridLayout::compute(self.cell_size, viewport);
        debug!(
            cols = layout.cols,
            rows = layout.rows,
            cell_size = layout.cell_size,
            "grid layout recomputed"
        );
        self.layout = Some(layout);
        self.lit.clear();
        self.active = None;
        self.prev_active = None;
    }

    /// Process a pointer event against the page's surface map.
    ///
    /// No-op while no layout has been computed.
    pub fn on_pointer(&mut self, event: PointerEvent, surfaces: &SurfaceMap, now: Duration) {
        let Some(layout) = self.layout else {
            return;
        };

        if event.kind == PointerEventKind::Left {
            // Path break: the next entry lights a single fresh cell, and the
            // cell the pointer rested on starts fading normally.
            self.prev_active = None;
            self.active = None;
            return;
        }

        let flags = surfaces.flags_at(event.position());

        // Lighting is suppressed over shielded elements; the overlay itself
        // stays visible and the trail must not be drawn across them.
        if flags.contains(RegionFlags::SHIELD) {
            trace!("grid lighting shielded");
            self.prev_active = None;
            self.active = None;
            return;
        }

        let enhance = flags.contains(RegionFlags::EMPHASIS);

        let Some((row, col)) = layout.cell_at(event.position()) else {
            return;
        };
        let id = layout.cell_id(row, col);

        if let Some(prev) = self.prev_active
            && prev != id
        {
            self.light_path(&layout, prev, (row, col), now, enhance);
        }

        self.light(id, now, enhance);
        self.prev_active = Some(id);
        self.active = Some(id);
    }

    /// Light every cell on the raster line from the previous cell to the
    /// current one, previous cell included, current cell excluded (it is lit
    /// separately with active-cell handling).
    fn light_path(
        &mut self,
        layout: &GridLayout,
        prev: u32,
        (row, col): (u32, u32),
        now: Duration,
        enhance: bool,
    ) {
        let (prev_row, prev_col) = layout.cell_pos(prev);
        let d_row = i64::from(row) - i64::from(prev_row);
        let d_col = i64::from(col) - i64::from(prev_col);
        let steps = d_row.abs().max(d_col.abs());
        if steps == 0 {
            return;
        }

        // Simple linear rounding per step; shallow-angle long jumps may land
        // on the same intermediate cell twice, which is an idempotent
        // re-light and accepted.
        let mut batch: SmallVec<[u32; 16]> = SmallVec::new();
        for s in 0..=steps {
            let r = prev_row as f64 + d_row as f64 * s as f64 / steps as f64;
            let c = prev_col as f64 + d_col as f64 * s as f64 / steps as f64;
            let (r, c) = (r.round(), c.round());
            if r < 0.0 || c < 0.0 {
                continue;
            }
            let (r, c) = (r as u32, c as u32);
            if r >= layout.rows || c >= layout.cols {
                continue;
            }
            let path_id = layout.cell_id(r, c);
            if path_id == layout.cell_id(row, col) {
                continue;
            }
            batch.push(path_id);
        }
        for path_id in batch {
            self.light(path_id, now, enhance);
        }
    }

    /// (Re-)light one cell: fresh timestamp and color sample; `enhanced`
    /// preserved verbatim when the cell was already lit.
    fn light(&mut self, id: u32, now: Duration, enhance: bool) {
        let color_index = self.cursor.sample(&self.ramp);
        self.lit
            .entry(id)
            .and_modify(|cell| {
                cell.touched_at = now;
                cell.color_index = color_index;
            })
            .or_insert(LitCell {
                touched_at: now,
                color_index,
                enhanced: enhance,
            });
    }

    /// Fade/prune tick.
    ///
    /// Rate-limited: calls arriving within the minimum frame interval are
    /// skipped outright (no work queued). A no-op while nothing is lit, to
    /// avoid idle redraws. Returns whether the rendered state changed and a
    /// redraw is due.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.lit.is_empty() {
            return false;
        }
        if let Some(last) = self.last_frame
            && now.saturating_sub(last) < self.frame_interval
        {
            return false;
        }
        self.last_frame = Some(now);

        let before = self.lit.len();
        let fade_out = self.fade_out;
        self.lit
            .retain(|_, cell| now.saturating_sub(cell.touched_at) < fade_out);
        let pruned = before - self.lit.len();
        if pruned > 0 {
            trace!(pruned, remaining = self.lit.len(), "faded cells pruned");
        }
        true
    }

    /// Build the draw list for the current instant.
    ///
    /// Quads are ordered by cell id so output is deterministic. Cells whose
    /// fade has completed between ticks are skipped, never emitted at
    /// positive opacity.
    #[must_use]
    pub fn render(&self, now: Duration) -> Vec<CellQuad> {
        let Some(layout) = self.layout else {
            return Vec::new();
        };

        let mut quads: Vec<CellQuad> = Vec::with_capacity(self.lit.len());
        for (&id, cell) in &self.lit {
            let opacity = self.opacity_of(id, cell, now);
            if opacity <= 0.0 {
                continue;
            }
            let (row, col) = layout.cell_pos(id);
            let color = self.ramp.get(cell.color_index).unwrap_or(FALLBACK_CELL_COLOR);
            let glow = cell
                .enhanced
                .then(|| Self::glow_for(opacity / self.intensity, self.active == Some(id)));
            quads.push(CellQuad {
                row,
                col,
                x: col as f32 * layout.cell_size,
                y: row as f32 * layout.cell_size,
                size: layout.cell_size,
                color,
                opacity,
                glow,
            });
        }
        quads.sort_unstable_by_key(|q| (q.row, q.col));
        quads
    }

    fn opacity_of(&self, id: u32, cell: &LitCell, now: Duration) -> f32 {
        // The cell under the pointer renders at full intensity while lit.
        if self.active == Some(id) {
            return self.intensity;
        }
        let elapsed = now.saturating_sub(cell.touched_at);
        if elapsed >= self.fade_out {
            return 0.0;
        }
        self.intensity * (1.0 - elapsed.as_secs_f32() / self.fade_out.as_secs_f32())
    }

    fn glow_for(fade_factor: f32, is_active: bool) -> Glow {
        let (inner_strength, outer_strength, inner_radius, outer_radius) = if is_active {
            (0.6, 0.35, 10.0, 22.0)
        } else {
            (0.45, 0.25, 6.0, 14.0)
        };
        Glow {
            inner: GlowLayer {
                color: GLOW_PURPLE,
                strength: inner_strength * fade_factor,
                radius: inner_radius,
            },
            outer: GlowLayer {
                color: GLOW_SKY,
                strength: outer_strength * fade_factor,
                radius: outer_radius,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::geometry::Rectf;
    use glint_core::surface::Region;

    fn config() -> GridTrailConfig {
        GridTrailConfig::new(20.0, Duration::from_millis(900), 0.9)
    }

    fn trail() -> GridTrail {
        let mut trail = GridTrail::new(config());
        trail.resize(Viewport::new(200.0, 100.0).with_scroll_height(400.0));
        trail
    }

    fn no_surfaces() -> SurfaceMap {
        SurfaceMap::new()
    }

    #[test]
    fn layout_uses_ceiling_division() {
        let layout = GridLayout::compute(20.0, Viewport::new(190.0, 100.0).with_scroll_height(395.0));
        assert_eq!(layout.cols, 10);
        assert_eq!(layout.rows, 20);
        assert!(layout.grid_width() >= 190.0);
        assert!(layout.grid_width() < 190.0 + 20.0);
    }

    #[test]
    fn layout_floors_cell_size() {
        let layout = GridLayout::compute(1.0, Viewport::new(100.0, 100.0));
        assert_eq!(layout.cell_size, MIN_CELL_SIZE);
        assert_eq!(layout.cols, 25);
    }

    #[test]
    fn cell_at_rejects_out_of_bounds() {
        let layout = GridLayout::compute(20.0, Viewport::new(200.0, 100.0).with_scroll_height(400.0));
        assert_eq!(layout.cell_at(Point::new(5.0, 5.0)), Some((0, 0)));
        assert_eq!(layout.cell_at(Point::new(-1.0, 5.0)), None);
        assert_eq!(layout.cell_at(Point::new(5.0, 400.0)), None);
        assert_eq!(layout.cell_at(Point::new(200.0, 5.0)), None);
    }

    #[test]
    fn pointer_before_layout_is_a_no_op() {
        let mut trail = GridTrail::new(config());
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        assert_eq!(trail.lit_count(), 0);
    }

    #[test]
    fn single_move_lights_one_cell() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(30.0, 10.0), &no_surfaces(), Duration::ZERO);
        assert_eq!(trail.lit_count(), 1);
        assert!(trail.lit_cell(0, 1).is_some());
        assert_eq!(trail.active_cell(), Some((0, 1)));
    }

    #[test]
    fn out_of_bounds_move_is_ignored() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(500.0, 10.0), &no_surfaces(), Duration::ZERO);
        assert_eq!(trail.lit_count(), 0);
    }

    #[test]
    fn horizontal_jump_lights_every_column() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(0.0, 0.0), &no_surfaces(), Duration::ZERO);
        trail.on_pointer(PointerEvent::moved(100.0, 0.0), &no_surfaces(), Duration::ZERO);
        // Columns 0..=5: six cells, no gaps.
        assert_eq!(trail.lit_count(), 6);
        for col in 0..=5 {
            assert!(trail.lit_cell(0, col).is_some(), "column {col} not lit");
        }
    }

    #[test]
    fn diagonal_jump_lights_raster_line() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        trail.on_pointer(PointerEvent::moved(90.0, 90.0), &no_surfaces(), Duration::ZERO);
        assert_eq!(trail.lit_count(), 5);
        for i in 0..=4 {
            assert!(trail.lit_cell(i, i).is_some(), "diagonal cell {i} not lit");
        }
    }

    #[test]
    fn retouch_refreshes_timestamp_and_color() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        let first = *trail.lit_cell(0, 0).unwrap();

        trail.on_pointer(
            PointerEvent::moved(11.0, 11.0),
            &no_surfaces(),
            Duration::from_millis(100),
        );
        let second = *trail.lit_cell(0, 0).unwrap();
        assert_eq!(second.touched_at, Duration::from_millis(100));
        assert_ne!(second.color_index, first.color_index);
    }

    #[test]
    fn shield_suppresses_lighting_and_breaks_path() {
        let surfaces = SurfaceMap::new().with_region(Region::new(
            Rectf::new(40.0, 0.0, 40.0, 40.0),
            RegionFlags::SHIELD,
        ));
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &surfaces, Duration::ZERO);
        assert_eq!(trail.lit_count(), 1);

        // Pointer enters the shielded button: no mutation at all.
        trail.on_pointer(PointerEvent::moved(50.0, 10.0), &surfaces, Duration::ZERO);
        assert_eq!(trail.lit_count(), 1);
        assert_eq!(trail.active_cell(), None);

        // Next unshielded move lights a single fresh cell; no interpolation
        // back across the shield.
        trail.on_pointer(PointerEvent::moved(110.0, 10.0), &surfaces, Duration::ZERO);
        assert_eq!(trail.lit_count(), 2);
        assert!(trail.lit_cell(0, 5).is_some());
        assert!(trail.lit_cell(0, 2).is_none());
        assert!(trail.lit_cell(0, 3).is_none());
        assert!(trail.lit_cell(0, 4).is_none());
    }

    #[test]
    fn enhancement_flag_attaches_and_sticks() {
        let surfaces = SurfaceMap::new().with_region(
            Region::new(Rectf::new(0.0, 0.0, 40.0, 40.0), RegionFlags::EMPHASIS).with_id("about"),
        );
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &surfaces, Duration::ZERO);
        assert!(trail.lit_cell(0, 0).unwrap().enhanced);

        // Leave the section and come back over the same cell while outside:
        // re-touch preserves the flag.
        trail.on_pointer(PointerEvent::moved(100.0, 100.0), &surfaces, Duration::ZERO);
        assert!(trail.lit_cell(0, 0).is_some());
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &surfaces, Duration::ZERO);
        assert!(trail.lit_cell(0, 0).unwrap().enhanced);
    }

    #[test]
    fn cells_first_lit_outside_emphasis_stay_plain() {
        let surfaces = SurfaceMap::new().with_region(Region::new(
            Rectf::new(0.0, 0.0, 40.0, 40.0),
            RegionFlags::EMPHASIS,
        ));
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(100.0, 100.0), &surfaces, Duration::ZERO);
        assert!(!trail.lit_cell(5, 5).unwrap().enhanced);
    }

    #[test]
    fn pointer_leave_clears_active_and_path_anchor() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        trail.on_pointer(PointerEvent::left(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        assert_eq!(trail.active_cell(), None);

        trail.on_pointer(PointerEvent::moved(110.0, 10.0), &no_surfaces(), Duration::ZERO);
        // Fresh single cell, no interpolation from the pre-leave position.
        assert_eq!(trail.lit_count(), 2);
    }

    #[test]
    fn tick_prunes_fully_faded_cells() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        trail.on_pointer(PointerEvent::left(10.0, 10.0), &no_surfaces(), Duration::ZERO);

        assert!(trail.tick(Duration::from_millis(500)));
        assert_eq!(trail.lit_count(), 1);

        assert!(trail.tick(Duration::from_millis(900)));
        assert_eq!(trail.lit_count(), 0);
    }

    #[test]
    fn tick_is_rate_limited() {
        let mut trail = GridTrail::new(config().max_fps(100));
        trail.resize(Viewport::new(200.0, 100.0));
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);

        assert!(trail.tick(Duration::from_millis(100)));
        // 5ms later: inside the 10ms minimum interval, skipped outright.
        assert!(!trail.tick(Duration::from_millis(105)));
        assert!(trail.tick(Duration::from_millis(110)));
    }

    #[test]
    fn tick_skips_when_nothing_is_lit() {
        let mut trail = trail();
        assert!(!trail.tick(Duration::from_millis(100)));
        // An idle skip does not consume the rate budget.
        trail.on_pointer(
            PointerEvent::moved(10.0, 10.0),
            &no_surfaces(),
            Duration::from_millis(100),
        );
        assert!(trail.tick(Duration::from_millis(101)));
    }

    #[test]
    fn render_opacity_follows_linear_fade() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        trail.on_pointer(PointerEvent::left(10.0, 10.0), &no_surfaces(), Duration::ZERO);

        let quads = trail.render(Duration::from_millis(450));
        assert_eq!(quads.len(), 1);
        // 0.9 * (1 - 450/900) = 0.45
        assert!((quads[0].opacity - 0.45).abs() < 1e-4);

        // At the fade deadline nothing is emitted even before pruning.
        assert!(trail.render(Duration::from_millis(900)).is_empty());
    }

    #[test]
    fn active_cell_renders_at_full_intensity() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);

        let quads = trail.render(Duration::from_millis(850));
        assert_eq!(quads.len(), 1);
        assert!((quads[0].opacity - 0.9).abs() < 1e-6);
    }

    #[test]
    fn render_quads_carry_grid_geometry() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(50.0, 30.0), &no_surfaces(), Duration::ZERO);
        let quads = trail.render(Duration::ZERO);
        assert_eq!(quads.len(), 1);
        let q = &quads[0];
        assert_eq!((q.row, q.col), (1, 2));
        assert_eq!((q.x, q.y), (40.0, 20.0));
        assert_eq!(q.size, 20.0);
        assert!(q.glow.is_none());
        assert_eq!(q.outline_alpha(), INSET_OUTLINE_ALPHA);
    }

    #[test]
    fn enhanced_active_cell_glows_strongest() {
        let surfaces = SurfaceMap::new().with_region(Region::new(
            Rectf::new(0.0, 0.0, 200.0, 400.0),
            RegionFlags::EMPHASIS,
        ));
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &surfaces, Duration::ZERO);
        trail.on_pointer(PointerEvent::moved(50.0, 10.0), &surfaces, Duration::ZERO);

        let quads = trail.render(Duration::from_millis(450));
        let active = quads.iter().find(|q| (q.row, q.col) == (0, 2)).unwrap();
        let passive = quads.iter().find(|q| (q.row, q.col) == (0, 0)).unwrap();

        let active_glow = active.glow.unwrap();
        let passive_glow = passive.glow.unwrap();
        assert!((active_glow.inner.strength - 0.6).abs() < 1e-6);
        assert_eq!(active_glow.outer.radius, 22.0);
        // Passive glow scales with the faded opacity (0.45 / 0.9 = 0.5).
        assert!((passive_glow.inner.strength - 0.45 * 0.5).abs() < 1e-4);
        assert_eq!(passive_glow.inner.color, GLOW_PURPLE);
        assert_eq!(passive_glow.outer.color, GLOW_SKY);
        assert_eq!(active.outline_alpha(), 0.0);
    }

    #[test]
    fn resize_clears_lit_state() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        assert_eq!(trail.lit_count(), 1);

        trail.resize(Viewport::new(300.0, 100.0).with_scroll_height(400.0));
        assert_eq!(trail.lit_count(), 0);
        assert_eq!(trail.active_cell(), None);

        // The next move does not interpolate from a pre-resize cell id.
        trail.on_pointer(PointerEvent::moved(290.0, 10.0), &no_surfaces(), Duration::ZERO);
        assert_eq!(trail.lit_count(), 1);
    }

    #[test]
    fn render_order_is_deterministic() {
        let mut trail = trail();
        trail.on_pointer(PointerEvent::moved(90.0, 90.0), &no_surfaces(), Duration::ZERO);
        trail.on_pointer(PointerEvent::moved(10.0, 10.0), &no_surfaces(), Duration::ZERO);
        let a: Vec<(u32, u32)> = trail.render(Duration::ZERO).iter().map(|q| (q.row, q.col)).collect();
        let b: Vec<(u32, u32)> = trail.render(Duration::ZERO).iter().map(|q| (q.row, q.col)).collect();
        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }
}
