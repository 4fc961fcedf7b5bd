#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::new_rgba(0, 0, 0, 0);
    /// Pixels of this color in sprite images are treated as see-through.
    pub const MAGENTA: Color = Color::new_rgb(255, 0, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Build an opaque color from channels in `0.0..=1.0`, the way clear
    /// colors are usually written down.
    pub fn from_unit_rgb(r: f32, g: f32, b: f32) -> Color {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::new_rgb(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Parse `#rrggbb`. Returns `None` for anything else.
    pub fn from_hex(text: &str) -> Option<Color> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::new_rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Composite `self` over an opaque `dst` using straight alpha.
    pub fn blend_over(&self, dst: Color) -> Color {
        match self.a {
            0xff => *self,
            0 => dst,
            a => {
                let a = a as u16;
                let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a)) / 255) as u8;
                Color::new_rgb(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
            }
        }
    }
}
