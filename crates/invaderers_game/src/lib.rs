pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod game;
pub mod hud;
pub mod pickup;
pub mod pool;
pub mod render;
pub mod sound;
pub mod sprite;
pub mod state;

pub use app::InvaderersApp;
pub use assets::{AssetManifest, TextureStore};
pub use config::{BomberScan, FireGate, GameConfig, Rules};
pub use error::{AssetLoadError, ConfigDataError};
pub use game::{Game, GameEvent, SpriteTextures};
pub use pickup::PickupTable;
pub use state::{RoundState, Scoreboard, Sky};

/// Window width in pixels.
pub const SCREEN_WIDTH: usize = 512;
/// Window height in pixels.
pub const SCREEN_HEIGHT: usize = 512;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;
