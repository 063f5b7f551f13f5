/// Game entity types.  Positions and sizes are playfield pixels; the
/// renderer only ever sees them through the `Drawable` capability.

use rand::Rng;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when the two rectangles share interior area.  Touching edges
    /// do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Colours & sprites ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const GREEN: Rgb = Rgb(0, 255, 62);
pub const LIGHT_BLUE: Rgb = Rgb(59, 211, 255);

/// Opaque image identifiers.  Loading and drawing the actual artwork is the
/// renderer's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Monster,
    Basket,
    Heart,
}

/// Anything the renderer can put on screen: a sized rectangle plus an image.
pub trait Drawable {
    fn rect(&self) -> Rect;
    fn sprite(&self) -> Sprite;
}

// ── Falling object ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct FallingObject {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Maximum sideways step per frame.
    pub drift: i32,
    /// Pixels descended per frame, fixed at creation.
    pub speed: i32,
    /// Rightmost legal x (screen width minus object width).
    pub max_x: i32,
}

impl FallingObject {
    /// One frame of motion: random sideways drift clamped to the playfield,
    /// then a fall of `speed` pixels.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        let step = if self.drift > 0 {
            rng.gen_range(-self.drift..=self.drift)
        } else {
            0
        };
        self.x = (self.x + step).clamp(0, self.max_x);
        self.y += self.speed;
    }
}

impl Drawable for FallingObject {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Monster
    }
}

// ── Catcher ───────────────────────────────────────────────────────────────────

/// The player's basket.  Only `x` moves; size and row are fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct Catcher {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Catcher {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Catcher { x, y, width, height }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn follow_pointer(&mut self, pointer_x: i32) {
        self.x = pointer_x;
    }
}

impl Drawable for Catcher {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Basket
    }
}

// ── Life marker ───────────────────────────────────────────────────────────────

pub const LIFE_MARKER_SPACING: i32 = 10;
pub const LIFE_MARKER_TOP: i32 = 5;
pub const LIFE_MARKER_SIZE: i32 = 10;

/// One heart in the top-left row of remaining lives.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeMarker {
    pub index: u32,
}

impl Drawable for LifeMarker {
    fn rect(&self) -> Rect {
        Rect::new(
            self.index as i32 * LIFE_MARKER_SPACING,
            LIFE_MARKER_TOP,
            LIFE_MARKER_SIZE,
            LIFE_MARKER_SIZE,
        )
    }

    fn sprite(&self) -> Sprite {
        Sprite::Heart
    }
}
