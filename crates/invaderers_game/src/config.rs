use typed_builder::TypedBuilder;

/// When the player is allowed to fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FireGate {
    /// Fire whenever the cooldown has run out.
    #[default]
    Always,
    /// Only fire while the number of lives is odd (the "daytime" sky).
    OddLives,
}

/// How the invader dropping the next bomb is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BomberScan {
    /// Uniformly among every live invader that is above the ship.
    #[default]
    Uniform,
    /// Scan from a random start index to the end of the pool without
    /// wrapping, taking the first qualifying invader. Invaders before the
    /// start index cannot be picked that frame.
    TailFromRandom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    pub fire_gate: FireGate,
    pub bomber_scan: BomberScan,
}

impl Rules {
    /// The behaviour of the first release of the game, quirks included.
    pub fn classic() -> Self {
        Self {
            fire_gate: FireGate::OddLives,
            bomber_scan: BomberScan::TailFromRandom,
        }
    }
}

/// Tunables of the simulation. The defaults give the standard layout and pacing.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GameConfig {
    /// Invader pool capacity is `invader_rows * invader_cols`.
    #[builder(default = 7)]
    pub invader_rows: usize,
    #[builder(default = 13)]
    pub invader_cols: usize,
    /// Formation spawned at the start of each wave. It fills the first
    /// `wave_rows * wave_cols` pool slots; any remaining slots stay free.
    #[builder(default = 6)]
    pub wave_rows: usize,
    #[builder(default = 14)]
    pub wave_cols: usize,
    #[builder(default = 2)]
    pub missile_slots: usize,
    #[builder(default = 7)]
    pub bomb_slots: usize,

    #[builder(default = 5)]
    pub starting_lives: u32,

    #[builder(default = 0.05)]
    pub ship_speed: f32,
    #[builder(default = 0.3)]
    pub missile_speed: f32,
    #[builder(default = 0.2)]
    pub bomb_speed: f32,

    /// Frames to wait after firing before the next missile.
    #[builder(default = 5)]
    pub missile_cooldown: u32,
    /// Bomb cooldown at the start of a game.
    #[builder(default = 50)]
    pub bomb_initial_cooldown: u32,
    /// Bomb cooldown after a bomb is dropped.
    #[builder(default = 0)]
    pub bomb_spawn_cooldown: u32,
    /// Bomb cooldown after the ship is hit.
    #[builder(default = 50)]
    pub bomb_hit_cooldown: u32,
    /// Horizontal slack for an invader to count as above the ship.
    #[builder(default = 2.0)]
    pub bomber_margin: f32,

    #[builder(default)]
    pub rules: Rules,
    /// Fixed seed for reproducible runs; entropy is used when absent.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GameConfig {
    /// Rows and columns below one are treated as one, so the pool always
    /// holds at least one invader.
    pub fn invader_capacity(&self) -> usize {
        self.invader_rows.max(1) * self.invader_cols.max(1)
    }

    /// Number of invaders a fresh wave puts in play. Wave rows or columns
    /// below one count as one, so a round in play always has something to
    /// shoot.
    pub fn wave_size(&self) -> usize {
        (self.wave_rows.max(1) * self.wave_cols.max(1)).min(self.invader_capacity())
    }
}
