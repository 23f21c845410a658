#![forbid(unsafe_code)]

//! glint demo
//!
//! Drives both pointer effects over a simulated portfolio page with a
//! scripted pointer path and a manual clock, printing ASCII snapshots of
//! the grid trail as it goes. Deterministic by construction: the same
//! frames print on every run.
//!
//! # Running
//!
//! ```sh
//! cargo run -p glint-demo
//! RUST_LOG=glint_fx=trace cargo run -p glint-demo
//! ```

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use glint_core::clock::{Clock, ManualClock};
use glint_core::event::{HostEvent, PointerEvent, Viewport};
use glint_core::geometry::Rectf;
use glint_core::surface::{Region, RegionFlags, SurfaceMap};
use glint_fx::grid_trail::{GridTrail, GridTrailConfig};
use glint_fx::indicator::{IndicatorPaint, PointerIndicator, PointerVariant};

/// Paint handle that mirrors indicator writes into plain fields, the way a
/// page host would write them onto a floating element's style.
#[derive(Debug, Default)]
struct ElementPaint {
    x: f32,
    y: f32,
    variant: Option<PointerVariant>,
    visible: bool,
}

impl IndicatorPaint for ElementPaint {
    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn set_variant(&mut self, variant: Option<PointerVariant>) {
        self.variant = variant;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// The portfolio page as tagged regions: nav, hero, emphasized sections,
/// project cards with shielded buttons, and the contact form.
fn portfolio_page() -> SurfaceMap {
    SurfaceMap::new()
        .with_region(
            Region::new(
                Rectf::new(0.0, 0.0, 1280.0, 64.0),
                RegionFlags::NAVBAR | RegionFlags::SHIELD,
            )
            .with_id("nav"),
        )
        .with_region(
            Region::new(Rectf::new(0.0, 640.0, 1280.0, 560.0), RegionFlags::EMPHASIS)
                .with_id("about"),
        )
        .with_region(
            Region::new(Rectf::new(0.0, 1200.0, 1280.0, 800.0), RegionFlags::EMPHASIS)
                .with_id("projects"),
        )
        .with_region(Region::new(
            Rectf::new(80.0, 1280.0, 340.0, 260.0),
            RegionFlags::SURFACE,
        ))
        .with_region(Region::new(
            Rectf::new(460.0, 1280.0, 340.0, 260.0),
            RegionFlags::SURFACE,
        ))
        .with_region(Region::new(
            Rectf::new(100.0, 1470.0, 140.0, 40.0),
            RegionFlags::INTERACTIVE | RegionFlags::SHIELD,
        ))
        .with_region(
            Region::new(Rectf::new(0.0, 2000.0, 1280.0, 400.0), RegionFlags::empty())
                .with_id("contact"),
        )
        .with_region(Region::new(
            Rectf::new(200.0, 2080.0, 400.0, 44.0),
            RegionFlags::INPUT,
        ))
        .with_region(Region::new(
            Rectf::new(200.0, 2200.0, 160.0, 44.0),
            RegionFlags::INTERACTIVE | RegionFlags::SHIELD,
        ))
}

/// Scripted pointer path: hero wander, a sprint across #about, a hover over
/// a shielded project button, and a pause over the contact input.
const WAYPOINTS: &[(f32, f32)] = &[
    (640.0, 320.0),
    (660.0, 340.0),
    (700.0, 400.0),
    (400.0, 700.0),
    (900.0, 760.0),
    (250.0, 1350.0),
    (170.0, 1490.0), // shielded "view project" button
    (620.0, 1350.0),
    (420.0, 2100.0), // contact input
    (260.0, 2220.0), // shielded submit button
];

const FRAME: Duration = Duration::from_millis(16);

/// Feed one host event to both effects, the single ingestion point a page
/// host would wire its listeners to.
fn dispatch(
    event: HostEvent,
    page: &SurfaceMap,
    indicator: &mut PointerIndicator<ElementPaint>,
    trail: &mut GridTrail,
    now: Duration,
) {
    match event {
        HostEvent::Pointer(pointer) => {
            indicator.on_pointer(pointer, page);
            trail.on_pointer(pointer, page, now);
        }
        HostEvent::ViewportChanged(viewport) => trail.resize(viewport),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let page = portfolio_page();
    let viewport = Viewport::new(1280.0, 800.0).with_scroll_height(2400.0);
    let clock = ManualClock::new();

    let mut trail = GridTrail::new(
        GridTrailConfig::new(20.0, Duration::from_millis(900), 0.9).max_fps(120),
    );
    let mut indicator = PointerIndicator::new(ElementPaint::default());
    dispatch(
        HostEvent::ViewportChanged(viewport),
        &page,
        &mut indicator,
        &mut trail,
        clock.now(),
    );

    if let Some(layout) = trail.layout() {
        info!(cols = layout.cols, rows = layout.rows, "glint demo starting");
    }

    for window in WAYPOINTS.windows(2) {
        let (x0, y0) = window[0];
        let (x1, y1) = window[1];

        // Four pointer samples per leg; the overlay bridges whatever the
        // sampling misses.
        for step in 0..4u32 {
            let t = step as f32 / 3.0;
            let event = PointerEvent::moved(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
            dispatch(
                HostEvent::Pointer(event),
                &page,
                &mut indicator,
                &mut trail,
                clock.now(),
            );
            trail.tick(clock.now());
            clock.advance(FRAME);
        }

        print_frame(&trail, &indicator, clock.now());
    }

    // Pointer leaves the page; watch the trail drain.
    dispatch(
        HostEvent::Pointer(PointerEvent::left(260.0, 2220.0)),
        &page,
        &mut indicator,
        &mut trail,
        clock.now(),
    );
    while trail.lit_count() > 0 {
        clock.advance(FRAME);
        trail.tick(clock.now());
    }
    println!("\ntrail drained at t={:?}", clock.now());
}

/// Print an ASCII window of the grid around the busiest row, one glyph per
/// cell, denser glyphs for higher opacity, uppercase ring for glow.
fn print_frame(trail: &GridTrail, indicator: &PointerIndicator<ElementPaint>, now: Duration) {
    const RAMP: &[u8] = b" .:-=+*#%@";
    const GLOW_RAMP: &[u8] = b" .oO0W@@@@";
    let Some(layout) = trail.layout() else {
        return;
    };
    let quads = trail.render(now);
    if quads.is_empty() {
        return;
    }

    let min_row = quads.iter().map(|q| q.row).min().unwrap_or(0);
    let max_row = quads
        .iter()
        .map(|q| q.row)
        .max()
        .unwrap_or(min_row)
        .min(min_row + 15);
    let cols = layout.cols.min(64) as usize;

    // Unlit cells show the static hairline grid.
    let mut rows = vec![vec![b'.'; cols]; (max_row - min_row + 1) as usize];
    for q in &quads {
        if q.row < min_row || q.row > max_row {
            continue;
        }
        let Some(slot) = rows[(q.row - min_row) as usize].get_mut(q.col as usize) else {
            continue;
        };
        let ramp = if q.glow.is_some() { GLOW_RAMP } else { RAMP };
        let level = (q.opacity / trail.intensity() * (ramp.len() - 1) as f32).round() as usize;
        // Floor at 1 so barely-faded cells still read as lit over the
        // hairline background.
        *slot = ramp[level.clamp(1, ramp.len() - 1)];
    }

    let paint = indicator.paint();
    let cursor = match indicator.variant() {
        Some(v) if paint.visible => v.name(),
        _ => "native",
    };
    println!(
        "\nt={now:>6?}  lit={:<3} cursor={cursor}@({:.0},{:.0})  rows {min_row}..={max_row}",
        trail.lit_count(),
        paint.x,
        paint.y,
    );
    for row in rows {
        println!("|{}|", String::from_utf8_lossy(&row));
    }
}
