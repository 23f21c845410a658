#![forbid(unsafe_code)]

//! Custom pointer indicator.
//!
//! A single floating shape that replaces the native pointer over inputs,
//! buttons/links, surfaced cards, and the navigation bar, and disappears
//! everywhere else. Classification happens on every pointer move from the
//! surface map; the shape itself is positioned through an imperative
//! [`IndicatorPaint`] handle so position updates bypass whatever declarative
//! render cycle the host runs.
//!
//! The active flag is instance state: hosts read [`PointerIndicator::is_active`]
//! (or observe `set_visible`) to decide when to suppress the native pointer.

use glint_core::event::{PointerEvent, PointerEventKind};
use glint_core::surface::{RegionFlags, SurfaceMap};

/// Visual variant of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerVariant {
    /// Over a button, link, or shield-marked interactive element.
    Button,
    /// Over a surfaced card or the navigation bar.
    Card,
    /// Over an input-like element.
    Input,
}

impl PointerVariant {
    /// Indicator size for this variant, in pixels.
    ///
    /// `Input` is a narrow caret-like bar; the others are small squares.
    #[must_use]
    pub const fn size(self) -> (f32, f32) {
        match self {
            Self::Button => (22.0, 22.0),
            Self::Card => (18.0, 18.0),
            Self::Input => (2.0, 22.0),
        }
    }

    /// Stable name, suitable as a styling attribute value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Card => "card",
            Self::Input => "input",
        }
    }
}

/// Classify surface flags into an indicator variant.
///
/// Priority: input > button > card/nav. Shield-marked elements count as
/// interactive (on the page they are buttons and nav items). Returns `None`
/// when the indicator should hide.
#[must_use]
pub fn classify(flags: RegionFlags) -> Option<PointerVariant> {
    if flags.contains(RegionFlags::INPUT) {
        Some(PointerVariant::Input)
    } else if flags.intersects(RegionFlags::INTERACTIVE | RegionFlags::SHIELD) {
        Some(PointerVariant::Button)
    } else if flags.intersects(RegionFlags::SURFACE | RegionFlags::NAVBAR) {
        Some(PointerVariant::Card)
    } else {
        None
    }
}

/// Imperative paint handle for the indicator element.
///
/// The escape hatch around the host's declarative rendering: the handle
/// exposes only what the event handler needs to write per pointer sample.
/// Implementations should treat every call as a direct style write with no
/// transition applied.
pub trait IndicatorPaint {
    /// Move the element's top-left corner to page coordinates.
    fn set_position(&mut self, x: f32, y: f32);

    /// Publish the active variant (`None` clears the variant attribute).
    fn set_variant(&mut self, variant: Option<PointerVariant>);

    /// Show or hide the element.
    fn set_visible(&mut self, visible: bool);
}

/// The pointer classifier component.
///
/// Owns its paint handle and its active flag; purely reactive to the most
/// recent pointer event, no other state.
#[derive(Debug)]
pub struct PointerIndicator<P: IndicatorPaint> {
    paint: P,
    active: bool,
    variant: Option<PointerVariant>,
}

impl<P: IndicatorPaint> PointerIndicator<P> {
    /// Create an indicator around a paint handle. Starts hidden.
    #[must_use]
    pub fn new(paint: P) -> Self {
        Self {
            paint,
            active: false,
            variant: None,
        }
    }

    /// Whether the custom indicator is currently shown.
    ///
    /// Hosts suppress the native pointer only while this is true.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The variant currently shown, if any.
    #[must_use]
    pub fn variant(&self) -> Option<PointerVariant> {
        self.variant
    }

    /// Borrow the paint handle (host-side inspection).
    #[must_use]
    pub fn paint(&self) -> &P {
        &self.paint
    }

    /// Borrow the paint handle mutably (teardown).
    pub fn paint_mut(&mut self) -> &mut P {
        &mut self.paint
    }

    /// Process a pointer event against the page's surface map.
    pub fn on_pointer(&mut self, event: PointerEvent, surfaces: &SurfaceMap) {
        if event.kind == PointerEventKind::Left {
            self.hide();
            return;
        }

        let flags = surfaces.flags_at(event.position());
        match classify(flags) {
            Some(variant) => self.show(event, variant),
            None => self.hide(),
        }
    }

    fn show(&mut self, event: PointerEvent, variant: PointerVariant) {
        let (w, h) = variant.size();
        // Center the shape on the pointer.
        self.paint.set_position(event.x - w / 2.0, event.y - h / 2.0);
        self.paint.set_variant(Some(variant));
        self.variant = Some(variant);
        if !self.active {
            self.active = true;
            self.paint.set_visible(true);
        }
    }

    fn hide(&mut self) {
        if self.active {
            self.active = false;
            self.paint.set_visible(false);
        }
        self.paint.set_variant(None);
        self.variant = None;
    }
}
