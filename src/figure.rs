//! Gallows and stick-figure geometry.
//!
//! All drawing goes through the [`DrawSurface`] trait so the game core stays
//! independent of `web-sys`: the browser build draws on a real canvas while
//! native tests substitute a recording stub. Every shape is an axis-aligned
//! filled rectangle at fixed coordinates; the gallows occupies 260x420 units
//! and the figure hangs from the noose, so a 300x450 surface fits everything.

/// Minimal 2D surface contract: clear a region, fill a rectangle, report size.
/// Mirrors the subset of `CanvasRenderingContext2d` the game actually uses.
pub trait DrawSurface {
    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

// --- Fixed layout -----------------------------------------------------------

// Gallows: top beam, noose, upright, base (drawn in this order).
const GALLOWS: [(f64, f64, f64, f64); 4] = [
    (95.0, 10.0, 150.0, 10.0),
    (245.0, 10.0, 10.0, 50.0),
    (95.0, 10.0, 10.0, 400.0),
    (10.0, 410.0, 175.0, 10.0),
];

/// One stick-figure segment, revealed per wrong guess in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Torso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

impl BodyPart {
    /// The part revealed by the n-th wrong guess (1..=6). `None` outside that
    /// range; the session never asks past 6.
    pub fn for_wrong_count(n: u8) -> Option<BodyPart> {
        match n {
            1 => Some(BodyPart::Head),
            2 => Some(BodyPart::Torso),
            3 => Some(BodyPart::RightArm),
            4 => Some(BodyPart::LeftArm),
            5 => Some(BodyPart::RightLeg),
            6 => Some(BodyPart::LeftLeg),
            _ => None,
        }
    }

    /// Fixed rectangle for this segment, hanging from the noose at x=250.
    fn rect(self) -> (f64, f64, f64, f64) {
        match self {
            BodyPart::Head => (230.0, 60.0, 40.0, 40.0),
            BodyPart::Torso => (245.0, 100.0, 10.0, 110.0),
            BodyPart::RightArm => (255.0, 120.0, 45.0, 10.0),
            BodyPart::LeftArm => (200.0, 120.0, 45.0, 10.0),
            BodyPart::RightLeg => (255.0, 210.0, 10.0, 80.0),
            BodyPart::LeftLeg => (235.0, 210.0, 10.0, 80.0),
        }
    }
}

// --- Drawing routines --------------------------------------------------------

/// Clear the whole surface.
pub fn clear<S: DrawSurface>(surface: &S) {
    surface.clear_rect(0.0, 0.0, surface.width(), surface.height());
}

/// Draw the static gallows. Called once per round, right after [`clear`].
pub fn draw_gallows<S: DrawSurface>(surface: &S) {
    for (x, y, w, h) in GALLOWS {
        surface.fill_rect(x, y, w, h);
    }
}

/// Draw a single stick-figure segment.
pub fn draw_part<S: DrawSurface>(surface: &S, part: BodyPart) {
    let (x, y, w, h) = part.rect();
    surface.fill_rect(x, y, w, h);
}
