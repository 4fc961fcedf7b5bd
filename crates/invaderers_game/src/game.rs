use invaderers_common::input::InputSource;
use invaderers_common::key::Key;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::config::{BomberScan, FireGate, GameConfig};
use crate::pickup::{PickupTable, PICKUP_POINTS};
use crate::pool::Pool;
use crate::sprite::{Sprite, TextureId};
use crate::state::{RoundState, Scoreboard, Sky};

#[cfg(test)]
mod tests;

const SHIP_START: (f32, f32) = (0.0, -2.75);
const SHIP_SIZE: f32 = 0.25;
const INVADER_SIZE: f32 = 0.25;
const INVADER_SPACING: f32 = 0.4;
const INVADER_TOP: f32 = 2.75;
const INVADER_ROW_SPACING: f32 = 0.37;
const PROJECTILE_WIDTH: f32 = 0.0625;
const PROJECTILE_HEIGHT: f32 = 0.25;
/// Missiles leave from just above the ship, bombs from just below the bomber.
const MISSILE_OFFSET: f32 = 0.5;
const BOMB_OFFSET: f32 = -0.25;
const PICKUP_SIZE: f32 = 0.25;
const BANNER_WIDTH: f32 = 3.0;
const BANNER_HEIGHT: f32 = 1.5;

/// Texture handles for every kind of sprite in the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpriteTextures {
    pub ship: TextureId,
    pub invader: TextureId,
    pub missile: TextureId,
    pub bomb: TextureId,
    pub pickup: TextureId,
    pub border: TextureId,
    pub game_over: TextureId,
    pub restart: TextureId,
    pub success: TextureId,
    pub next_wave: TextureId,
}

/// Things that happened during one [`Game::step`], in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    MissileFired,
    BombDropped,
    InvaderHit,
    ShipHit,
    PickupCollected,
    WaveCleared,
    GameLost,
    WaveStarted,
    Restarted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wall {
    Bottom = 0,
    Top = 1,
    Left = 2,
    Right = 3,
}

/// The four edges of the playfield.
#[derive(Clone, Debug)]
struct Borders([Sprite; 4]);

impl Borders {
    fn new(texture: TextureId) -> Self {
        Self([
            Sprite::new(texture, 0.0, -3.0, 6.0, 0.2),
            Sprite::new(texture, 0.0, 3.0, 6.0, 0.2),
            Sprite::new(texture, -3.0, 0.0, 0.2, 6.0),
            Sprite::new(texture, 3.0, 0.0, 0.2, 6.0),
        ])
    }

    fn get(&self, wall: Wall) -> &Sprite {
        &self.0[wall as usize]
    }

    fn iter(&self) -> std::slice::Iter<'_, Sprite> {
        self.0.iter()
    }
}

/// End-of-round messages: game over and restart prompt, then success and
/// next-wave prompt.
#[derive(Clone, Debug)]
struct Banners([Sprite; 4]);

impl Banners {
    fn new(textures: &SpriteTextures) -> Self {
        let banner = |texture, x, y| Sprite::new(texture, x, y, BANNER_WIDTH, BANNER_HEIGHT);
        Self([
            banner(textures.game_over, 0.0, 0.2),
            banner(textures.restart, 1.7, -2.2),
            banner(textures.success, 0.0, 0.0),
            banner(textures.next_wave, 1.7, -2.2),
        ])
    }

    fn visible(&self, round: RoundState) -> &[Sprite] {
        match round {
            RoundState::Playing => &[],
            RoundState::RoundOver { loss: true } => &self.0[..2],
            RoundState::RoundOver { loss: false } => &self.0[2..],
        }
    }
}

/// The whole simulation: every sprite, counter and the round state.
pub struct Game {
    config: GameConfig,
    textures: SpriteTextures,
    pickup_table: PickupTable,
    rng: StdRng,

    ship: Sprite,
    pickup: Sprite,
    invaders: Pool,
    missiles: Pool,
    bombs: Pool,
    borders: Borders,
    banners: Banners,

    missile_cooldown: u32,
    bomb_cooldown: u32,
    scoreboard: Scoreboard,
    round: RoundState,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(config: GameConfig, textures: SpriteTextures, pickup_table: PickupTable) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let invaders = Pool::parked(
            config.invader_capacity(),
            textures.invader,
            INVADER_SIZE,
            INVADER_SIZE,
        );
        let missiles = Pool::parked(
            config.missile_slots,
            textures.missile,
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
        );
        let bombs = Pool::parked(
            config.bomb_slots,
            textures.bomb,
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
        );

        let mut game = Self {
            textures,
            pickup_table,
            rng,
            ship: Sprite::default(),
            pickup: Sprite::default(),
            invaders,
            missiles,
            bombs,
            borders: Borders::new(textures.border),
            banners: Banners::new(&textures),
            missile_cooldown: 0,
            bomb_cooldown: 0,
            scoreboard: Scoreboard::default(),
            round: RoundState::Playing,
            events: Vec::new(),
            config,
        };
        game.reset();
        log::info!(
            "new game: {} invaders, {} lives, rules {:?}",
            game.scoreboard.live_invaders,
            game.scoreboard.lives,
            game.config.rules
        );
        game
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self, input: &impl InputSource) {
        self.events.clear();

        if let RoundState::RoundOver { loss } = self.round {
            if input.is_key_down(Key::R) {
                self.restart();
            } else if !loss && input.is_key_down(Key::Y) {
                self.next_wave();
            }
            return;
        }

        self.move_ship(input);
        self.fire_missiles(input);
        self.fire_bombs();
        self.move_missiles();
        self.move_bombs();
        self.collect_pickup();
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn round(&self) -> RoundState {
        self.round
    }

    pub fn sky(&self) -> Sky {
        Sky::from_lives(self.scoreboard.lives)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ship(&self) -> &Sprite {
        &self.ship
    }

    pub fn pickup(&self) -> &Sprite {
        &self.pickup
    }

    pub fn invaders(&self) -> &Pool {
        &self.invaders
    }

    pub fn missiles(&self) -> &Pool {
        &self.missiles
    }

    pub fn bombs(&self) -> &Pool {
        &self.bombs
    }

    /// Every sprite in back-to-front order. Sprites out of play are parked
    /// off-screen, so a renderer can draw the list as is.
    pub fn draw_list(&self) -> impl Iterator<Item = &Sprite> + '_ {
        std::iter::once(&self.ship)
            .chain(self.banners.visible(self.round))
            .chain(std::iter::once(&self.pickup))
            .chain(&self.invaders)
            .chain(&self.missiles)
            .chain(&self.bombs)
            .chain(self.borders.iter())
    }

    fn reset(&mut self) {
        let (x, y) = SHIP_START;
        self.ship.init(self.textures.ship, x, y, SHIP_SIZE, SHIP_SIZE);
        self.pickup.init(self.textures.pickup, 0.0, 0.0, PICKUP_SIZE, PICKUP_SIZE);
        self.missiles.park_all();
        self.bombs.park_all();

        self.missile_cooldown = 0;
        self.bomb_cooldown = self.config.bomb_initial_cooldown;
        self.scoreboard = Scoreboard {
            lives: self.config.starting_lives,
            score: 0,
            live_invaders: 0,
        };
        self.spawn_wave();
        self.round = RoundState::Playing;
    }

    /// Lay out a fresh formation in the first `wave_size` slots and free
    /// the rest of the pool.
    fn spawn_wave(&mut self) {
        let wave_size = self.config.wave_size();
        let wave_cols = self.config.wave_cols.max(1);
        let center = self.config.invader_cols as f32 * 0.5;
        let texture = self.textures.invader;

        for (index, invader) in self.invaders.iter_mut().enumerate() {
            if index < wave_size {
                let col = (index % wave_cols) as f32;
                let row = (index / wave_cols) as f32;
                invader.init(
                    texture,
                    (col - center) * INVADER_SPACING,
                    INVADER_TOP - row * INVADER_ROW_SPACING,
                    INVADER_SIZE,
                    INVADER_SIZE,
                );
            } else if invader.is_enabled() {
                invader.park();
            }
        }
        self.scoreboard.live_invaders = wave_size as u32;
    }

    fn restart(&mut self) {
        self.reset();
        self.events.push(GameEvent::Restarted);
        log::info!("game restarted");
    }

    fn next_wave(&mut self) {
        self.spawn_wave();
        self.round = RoundState::Playing;
        self.events.push(GameEvent::WaveStarted);
        log::info!(
            "next wave: {} invaders, score {}",
            self.scoreboard.live_invaders,
            self.scoreboard.score
        );
    }

    fn move_ship(&mut self, input: &impl InputSource) {
        let speed = self.config.ship_speed;
        if input.is_key_down(Key::Left) {
            self.nudge_ship(-speed, 0.0, Wall::Left);
        }
        if input.is_key_down(Key::Right) {
            self.nudge_ship(speed, 0.0, Wall::Right);
        }
        if input.is_key_down(Key::Up) {
            self.nudge_ship(0.0, speed, Wall::Top);
        }
        if input.is_key_down(Key::Down) {
            self.nudge_ship(0.0, -speed, Wall::Bottom);
        }
    }

    /// Move the ship, undoing the move if it ends up touching `wall`.
    fn nudge_ship(&mut self, dx: f32, dy: f32, wall: Wall) {
        self.ship.translate(dx, dy);
        if self.ship.collides_with(self.borders.get(wall)) {
            self.ship.translate(-dx, -dy);
        }
    }

    fn fire_allowed(&self) -> bool {
        match self.config.rules.fire_gate {
            FireGate::Always => true,
            FireGate::OddLives => self.scoreboard.lives % 2 != 0,
        }
    }

    fn fire_missiles(&mut self, input: &impl InputSource) {
        if self.missile_cooldown > 0 {
            self.missile_cooldown -= 1;
            return;
        }
        if !input.is_key_going_down(Key::Space) || !self.fire_allowed() {
            return;
        }
        if let Some(slot) = self.missiles.spawn_relative(&self.ship, 0.0, MISSILE_OFFSET) {
            self.missile_cooldown = self.config.missile_cooldown;
            self.events.push(GameEvent::MissileFired);
            log::debug!("missile {} fired", slot);
        }
    }

    fn pick_bomber(&mut self) -> Option<usize> {
        let ship = &self.ship;
        let margin = self.config.bomber_margin;
        let qualifies = |invader: &Sprite| invader.is_enabled() && invader.is_above(ship, margin);

        match self.config.rules.bomber_scan {
            BomberScan::Uniform => self
                .invaders
                .iter()
                .enumerate()
                .filter(|(_, invader)| qualifies(*invader))
                .map(|(index, _)| index)
                .choose(&mut self.rng),
            BomberScan::TailFromRandom => {
                let capacity = self.invaders.capacity();
                if capacity == 0 {
                    return None;
                }
                let start = self.rng.gen_range(0..capacity);
                self.invaders
                    .iter()
                    .enumerate()
                    .skip(start)
                    .find(|(_, invader)| qualifies(*invader))
                    .map(|(index, _)| index)
            }
        }
    }

    fn fire_bombs(&mut self) {
        if self.bomb_cooldown > 0 {
            self.bomb_cooldown -= 1;
            return;
        }
        let Some(bomber) = self.pick_bomber() else {
            return;
        };
        let Some(invader) = self.invaders.get(bomber).copied() else {
            return;
        };
        if let Some(slot) = self.bombs.spawn_relative(&invader, 0.0, BOMB_OFFSET) {
            self.bomb_cooldown = self.config.bomb_spawn_cooldown;
            self.events.push(GameEvent::BombDropped);
            log::debug!("invader {} dropped bomb {}", bomber, slot);
        }
    }

    fn move_missiles(&mut self) {
        let speed = self.config.missile_speed;
        let top = self.borders.get(Wall::Top);
        let mut hits = 0;

        for missile in self.missiles.iter_mut().filter(|m| m.is_enabled()) {
            missile.translate(0.0, speed);

            // first invader in pool order wins; a missile takes out one invader
            let target = self
                .invaders
                .iter_mut()
                .find(|invader| invader.is_enabled() && missile.collides_with(invader));
            if let Some(invader) = target {
                invader.park();
                missile.park();
                hits += 1;
            } else if missile.collides_with(top) {
                missile.park();
            }
        }

        for _ in 0..hits {
            self.on_invader_hit();
        }
    }

    fn move_bombs(&mut self) {
        let speed = self.config.bomb_speed;
        let bottom = self.borders.get(Wall::Bottom);
        let mut hits = 0;

        for bomb in self.bombs.iter_mut().filter(|b| b.is_enabled()) {
            bomb.translate(0.0, -speed);

            if bomb.collides_with(&self.ship) {
                bomb.park();
                hits += 1;
            } else if bomb.collides_with(bottom) {
                bomb.park();
            }
        }

        if hits > 0 {
            self.bomb_cooldown = self.config.bomb_hit_cooldown;
        }
        for _ in 0..hits {
            self.on_ship_hit();
        }
    }

    fn collect_pickup(&mut self) {
        if !self.round.is_playing() || !self.ship.collides_with(&self.pickup) {
            return;
        }
        self.scoreboard.lives += 1;

        let entry = self.rng.gen_range(0..PICKUP_POINTS);
        let (x, y) = self.pickup_table.spawn_point(entry);
        self.pickup.init(self.textures.pickup, x, y, PICKUP_SIZE, PICKUP_SIZE);
        self.events.push(GameEvent::PickupCollected);
        log::debug!(
            "pickup collected, {} lives, moved to ({}, {})",
            self.scoreboard.lives,
            x,
            y
        );
    }

    fn on_invader_hit(&mut self) {
        self.scoreboard.live_invaders = self.scoreboard.live_invaders.saturating_sub(1);
        self.scoreboard.score += 1;
        self.events.push(GameEvent::InvaderHit);

        if self.scoreboard.live_invaders == 0 && self.round.is_playing() {
            self.round = RoundState::RoundOver { loss: false };
            self.events.push(GameEvent::WaveCleared);
            log::info!("wave cleared, score {}", self.scoreboard.score);
        }
    }

    fn on_ship_hit(&mut self) {
        self.scoreboard.lives = self.scoreboard.lives.saturating_sub(1);
        self.events.push(GameEvent::ShipHit);

        if self.scoreboard.lives == 0 && self.round != (RoundState::RoundOver { loss: true }) {
            self.round = RoundState::RoundOver { loss: true };
            self.events.push(GameEvent::GameLost);
            log::info!("game lost, final score {}", self.scoreboard.score);
        }
    }
}
