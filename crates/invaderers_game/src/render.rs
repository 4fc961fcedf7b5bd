use invaderers_common::Color;

use crate::assets::TextureStore;
use crate::sprite::Sprite;

/// World units from the center of the screen to each edge.
pub const WORLD_HALF_EXTENT: f32 = 3.2;

const BYTES_PER_PIXEL: usize = 3;

/// An RGB24 frame buffer borrowed from the frontend for one frame.
pub struct Canvas<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// Returns `None` when `pixels` is too small for `width * height` RGB24.
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Option<Self> {
        (pixels.len() >= width * height * BYTES_PER_PIXEL).then_some(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn clear(&mut self, color: Color) {
        let (r, g, b) = color.rgb();
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[r, g, b]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        Some(Color::new_rgb(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
        ))
    }

    /// Blend `color` over the pixel at `x`, `y`. Out of range is ignored.
    pub fn blend(&mut self, x: usize, y: usize, color: Color) {
        let Some(dst) = self.pixel(x, y) else {
            return;
        };
        let (r, g, b) = color.blend_over(dst).rgb();
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b]);
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) {
        for py in y..(y + h).min(self.height) {
            for px in x..(x + w).min(self.width) {
                self.blend(px, py, color);
            }
        }
    }

    /// Map world coordinates to fractional pixel coordinates, y pointing down.
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        let span = 2.0 * WORLD_HALF_EXTENT;
        (
            (x + WORLD_HALF_EXTENT) / span * self.width as f32,
            (WORLD_HALF_EXTENT - y) / span * self.height as f32,
        )
    }

    /// Draw `sprite` stretched over its box. Disabled sprites and sprites
    /// without a known texture are skipped.
    pub fn draw_sprite(&mut self, sprite: &Sprite, textures: &TextureStore) {
        if !sprite.is_enabled() {
            return;
        }
        let Some(texture) = textures.get(sprite.texture()) else {
            return;
        };

        let (x, y) = sprite.position();
        let (hw, hh) = sprite.half_extents();
        let (left, top) = self.to_screen(x - hw, y + hh);
        let (right, bottom) = self.to_screen(x + hw, y - hh);
        if right <= left || bottom <= top {
            return;
        }

        let x0 = left.max(0.0).floor() as usize;
        let y0 = top.max(0.0).floor() as usize;
        let x1 = (right.ceil().max(0.0) as usize).min(self.width);
        let y1 = (bottom.ceil().max(0.0) as usize).min(self.height);

        for py in y0..y1 {
            let v = (py as f32 + 0.5 - top) / (bottom - top);
            if !(0.0..1.0).contains(&v) {
                continue;
            }
            for px in x0..x1 {
                let u = (px as f32 + 0.5 - left) / (right - left);
                if !(0.0..1.0).contains(&u) {
                    continue;
                }
                self.blend(px, py, texture.sample(u, v));
            }
        }
    }
}
