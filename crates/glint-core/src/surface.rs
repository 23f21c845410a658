#![forbid(unsafe_code)]

//! Marker-region surface map.
//!
//! On the original page the effects classified the element under the pointer
//! by walking DOM ancestry for marker attributes (`input`-likes,
//! buttons/links, surfaced cards, the navigation bar, shield and emphasis
//! markers). Here the host describes its page once as a flat list of tagged
//! rectangles; classification becomes a point query that unions the flags of
//! every region containing the point, which is what ancestry walking
//! computed one attribute at a time.
//!
//! # Invariants
//!
//! 1. Regions may nest and overlap freely; `flags_at` is order-independent.
//! 2. An empty map classifies every point as [`RegionFlags::empty`].
//! 3. Queries never mutate the map.

use bitflags::bitflags;

use crate::geometry::{Point, Rectf};

bitflags! {
    /// Marker flags a page author attaches to regions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Input-like element (text input, textarea).
        const INPUT       = 0b0000_0001;
        /// Button, link, or explicitly-marked interactive element.
        const INTERACTIVE = 0b0000_0010;
        /// Surfaced container (cards and similar raised regions).
        const SURFACE     = 0b0000_0100;
        /// The navigation bar.
        const NAVBAR      = 0b0000_1000;
        /// Suppresses grid lighting while hovered.
        const SHIELD      = 0b0001_0000;
        /// Emphasized page section; cells lit here glow.
        const EMPHASIS    = 0b0010_0000;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A tagged rectangle on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Bounds in page pixels.
    pub rect: Rectf,
    /// Marker flags for this region.
    pub flags: RegionFlags,
    /// Optional author-facing id (for example a section anchor name),
    /// carried for diagnostics only.
    pub id: Option<&'static str>,
}

impl Region {
    /// Create a region with the given bounds and flags.
    #[must_use]
    pub const fn new(rect: Rectf, flags: RegionFlags) -> Self {
        Self {
            rect,
            flags,
            id: None,
        }
    }

    /// Attach an author-facing id.
    #[must_use]
    pub const fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }
}

/// The host page described as tagged regions.
///
/// A portfolio page has a few dozen regions at most, so queries are a plain
/// scan; there is no spatial index to keep coherent across layout changes.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMap {
    regions: Vec<Region>,
}

impl SurfaceMap {
    /// Create an empty surface map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Add a region, builder style.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    /// Add a region in place.
    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Remove all regions (host rebuilds the map on layout change).
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the map holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Union of the flags of every region containing the point.
    #[must_use]
    pub fn flags_at(&self, p: Point) -> RegionFlags {
        let mut flags = RegionFlags::empty();
        for region in &self.regions {
            if region.rect.contains(p) {
                flags |= region.flags;
            }
        }
        flags
    }

    /// Iterate over the regions.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }
}
