use anyhow::{Context, Result};
use invaderers_common::app::App;
use invaderers_common::input::{InputSource, InputState};
use invaderers_common::key::Key;

use crate::assets::{AssetManifest, TextureStore};
use crate::config::GameConfig;
use crate::game::Game;
use crate::hud;
use crate::pickup::PickupTable;
use crate::render::Canvas;
use crate::sound::{Sound, SoundBank, SoundManager};
use crate::{SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frontend-facing wrapper: steps the game once per frame, plays the
/// sounds its events ask for and draws the result.
pub struct InvaderersApp {
    should_exit: bool,
    game: Game,
    textures: TextureStore,
    sound_bank: SoundBank,
    sound: Option<SoundManager>,
}

impl InvaderersApp {
    pub fn new(game: Game, textures: TextureStore, sound_bank: SoundBank) -> Self {
        Self {
            should_exit: false,
            game,
            textures,
            sound_bank,
            sound: None,
        }
    }

    /// Load every asset named by `manifest` and start a game with `config`.
    pub fn load(manifest: &AssetManifest, config: GameConfig) -> Result<Self> {
        let points = manifest.pickup_points();
        let pickup_table = PickupTable::load(&points)
            .with_context(|| format!("loading pickup points from {}", points.display()))?;

        let mut textures = TextureStore::new();
        let sprite_textures = manifest
            .load_textures(&mut textures)
            .context("loading textures")?;
        let sound_bank =
            SoundBank::load(&manifest.whoosh(), &manifest.bang()).context("loading sounds")?;

        let game = Game::new(config, sprite_textures, pickup_table);
        Ok(Self::new(game, textures, sound_bank))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn render(&self, screen: &mut [u8]) {
        let Some(mut canvas) = Canvas::new(screen, SCREEN_WIDTH, SCREEN_HEIGHT) else {
            log::error!("screen buffer too small: {} bytes", screen.len());
            return;
        };
        canvas.clear(self.game.sky().color());
        for sprite in self.game.draw_list() {
            canvas.draw_sprite(sprite, &self.textures);
        }
        hud::draw_hud(&mut canvas, &self.game.scoreboard());
    }
}

impl App for InvaderersApp {
    fn init(&mut self) -> Result<()> {
        log::info!("Invaderers init");
        // Without audio the game still runs, just silently.
        if self.sound.is_none() {
            self.sound = SoundManager::new(self.sound_bank.clone());
        }
        Ok(())
    }

    fn update(&mut self, input: &InputState, screen: &mut [u8]) {
        if input.is_key_going_down(Key::Escape) {
            self.should_exit = true;
            return;
        }

        self.game.step(input);

        if let Some(sound) = &self.sound {
            self.game
                .events()
                .iter()
                .filter_map(|event| Sound::for_event(*event))
                .for_each(|s| sound.play(s));
        }

        self.render(screen);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        let board = self.game.scoreboard();
        log::info!("Invaderers exit, score {} lives {}", board.score, board.lives);
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Invaderers".to_string()
    }
}
