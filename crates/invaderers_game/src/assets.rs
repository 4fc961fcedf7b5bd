use std::path::PathBuf;

use invaderers_common::Color;

use crate::error::{AssetKind, AssetLoadError};
use crate::game::SpriteTextures;
use crate::sprite::TextureId;

/// An RGBA image kept in memory for the software renderer.
#[derive(Clone, Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Texture {
    pub fn solid(color: Color) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        (width > 0 && height > 0 && pixels.len() == (width * height) as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Nearest texel for `u`, `v` in `0.0..1.0`, `v` running top to bottom.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let tx = ((u * self.width as f32) as u32).min(self.width - 1);
        let ty = ((v * self.height as f32) as u32).min(self.height - 1);
        self.pixels[(ty * self.width + tx) as usize]
    }
}

/// Owns every loaded texture and hands out [`TextureId`]s for them.
#[derive(Default)]
pub struct TextureStore {
    textures: Vec<Texture>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() as u32)
    }

    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        let index = (id.0 as usize).checked_sub(1)?;
        self.textures.get(index)
    }

    /// Load `#rrggbb` as a solid color, anything else as an image file.
    /// Magenta pixels in images become transparent.
    pub fn load(&mut self, source: &str) -> Result<TextureId, AssetLoadError> {
        if source.starts_with('#') {
            let color = Color::from_hex(source).ok_or_else(|| {
                AssetLoadError::new(AssetKind::Texture, source, "expected a #rrggbb color")
            })?;
            return Ok(self.insert(Texture::solid(color)));
        }

        let image = image::open(source)
            .map_err(|e| AssetLoadError::new(AssetKind::Texture, source, e))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                let color = Color::new_rgba(r, g, b, a);
                if color == Color::MAGENTA {
                    Color::TRANSPARENT
                } else {
                    color
                }
            })
            .collect();
        let texture = Texture::from_pixels(width, height, pixels)
            .ok_or_else(|| AssetLoadError::new(AssetKind::Texture, source, "empty image"))?;

        log::debug!("loaded texture {} ({}x{})", source, width, height);
        Ok(self.insert(texture))
    }
}

/// Where every asset of the game lives, relative to one root directory.
#[derive(Clone, Debug)]
pub struct AssetManifest {
    root: PathBuf,
}

impl AssetManifest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn file(&self, name: &str) -> String {
        self.root.join("invaderers").join(name).to_string_lossy().into_owned()
    }

    /// Texture sources in `SpriteTextures` field order.
    fn texture_sources(&self) -> [String; 10] {
        [
            self.file("ship.ppm"),
            self.file("invaderer.ppm"),
            self.file("missile.ppm"),
            self.file("bomb.ppm"),
            self.file("holy_bomb.ppm"),
            "#ef9d97".to_string(),
            self.file("game_over.ppm"),
            self.file("restart.ppm"),
            self.file("success.ppm"),
            self.file("next_wave.ppm"),
        ]
    }

    pub fn whoosh(&self) -> String {
        self.file("whoosh.wav")
    }

    pub fn bang(&self) -> String {
        self.file("bang.wav")
    }

    pub fn pickup_points(&self) -> PathBuf {
        self.root.join("invaderers").join("points.txt")
    }

    /// Load every sprite texture into `store`, stopping at the first failure.
    pub fn load_textures(&self, store: &mut TextureStore) -> Result<SpriteTextures, AssetLoadError> {
        let [ship, invader, missile, bomb, pickup, border, game_over, restart, success, next_wave] =
            self.texture_sources();
        Ok(SpriteTextures {
            ship: store.load(&ship)?,
            invader: store.load(&invader)?,
            missile: store.load(&missile)?,
            bomb: store.load(&bomb)?,
            pickup: store.load(&pickup)?,
            border: store.load(&border)?,
            game_over: store.load(&game_over)?,
            restart: store.load(&restart)?,
            success: store.load(&success)?,
            next_wave: store.load(&next_wave)?,
        })
    }
}
