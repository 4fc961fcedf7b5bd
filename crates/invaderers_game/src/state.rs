use invaderers_common::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    /// The round has ended. `loss` is true when the ship ran out of lives and
    /// false when the wave was cleared.
    RoundOver { loss: bool },
}

impl RoundState {
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Counters shown on the HUD and driving the round state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub lives: u32,
    pub score: u32,
    pub live_invaders: u32,
}

/// Background of the playfield, derived from the parity of the lives
/// counter rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sky {
    Day,
    Night,
}

impl Sky {
    pub fn from_lives(lives: u32) -> Self {
        if lives % 2 == 0 {
            Sky::Night
        } else {
            Sky::Day
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Sky::Day => Color::from_unit_rgb(0.0, 0.8, 1.0),
            Sky::Night => Color::from_unit_rgb(0.2, 0.0, 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_follows_lives_parity() {
        assert_eq!(Sky::from_lives(5), Sky::Day);
        assert_eq!(Sky::from_lives(4), Sky::Night);
        assert_eq!(Sky::from_lives(0), Sky::Night);
        assert_ne!(Sky::Day.color(), Sky::Night.color());
    }
}
