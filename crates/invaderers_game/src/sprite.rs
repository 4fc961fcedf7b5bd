/// Distance a disabled sprite is moved along x so it sits outside the
/// playfield and never overlaps anything still in play.
pub const PARK_OFFSET: f32 = 20.0;

/// Opaque handle to a loaded texture. `TextureId::NONE` marks sprites that
/// take part in gameplay but are never drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// An axis-aligned rectangle in world space.
///
/// Half-extents are fixed by [`Sprite::init`]; afterwards the sprite only
/// moves by translation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sprite {
    x: f32,
    y: f32,
    half_width: f32,
    half_height: f32,
    texture: TextureId,
    enabled: bool,
}

impl Sprite {
    /// A sprite of full size `w` x `h` centred on (`x`, `y`).
    pub fn new(texture: TextureId, x: f32, y: f32, w: f32, h: f32) -> Self {
        let mut sprite = Self::default();
        sprite.init(texture, x, y, w, h);
        sprite
    }

    pub fn init(&mut self, texture: TextureId, x: f32, y: f32, w: f32, h: f32) {
        self.x = x;
        self.y = y;
        self.half_width = w * 0.5;
        self.half_height = h * 0.5;
        self.texture = texture;
        self.enabled = true;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Move to `other`'s position plus an offset, keeping our own size.
    pub fn set_relative(&mut self, other: &Sprite, dx: f32, dy: f32) {
        self.x = other.x + dx;
        self.y = other.y + dy;
    }

    pub fn collides_with(&self, other: &Sprite) -> bool {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.abs() < self.half_width + other.half_width
            && dy.abs() < self.half_height + other.half_height
    }

    /// Horizontal proximity only: height is ignored so an invader anywhere
    /// up the column counts as above the ship.
    pub fn is_above(&self, other: &Sprite, margin: f32) -> bool {
        let dx = other.x - self.x;
        dx.abs() < self.half_width + margin
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Take the sprite out of play: disable it and move it off-screen.
    pub fn park(&mut self) {
        self.enabled = false;
        self.translate(PARK_OFFSET, 0.0);
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn half_extents(&self) -> (f32, f32) {
        (self.half_width, self.half_height)
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }
}
