use std::fs;
use std::path::Path;

use crate::error::ConfigDataError;

pub const PICKUP_POINTS: usize = 10;

/// Sign applied to the x and y of each table entry when the pickup is
/// placed there, so ten stored points cover every quadrant.
const SIGNS: [(f32, f32); PICKUP_POINTS] = [
    (1.0, 1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
];

/// Spawn locations of the bonus pickup, loaded once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct PickupTable {
    points: [(f32, f32); PICKUP_POINTS],
}

impl PickupTable {
    pub fn from_points(points: [(f32, f32); PICKUP_POINTS]) -> Self {
        Self { points }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigDataError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text)?;
        log::debug!("loaded {} pickup points from {}", PICKUP_POINTS, path.display());
        Ok(table)
    }

    /// Parse exactly ten whitespace-separated `x y` pairs.
    pub fn parse(text: &str) -> Result<Self, ConfigDataError> {
        let expected = PICKUP_POINTS * 2;
        let mut values = [0.0f32; PICKUP_POINTS * 2];
        let mut tokens = text.split_whitespace();

        for (index, value) in values.iter_mut().enumerate() {
            let token = tokens.next().ok_or(ConfigDataError::TooFewValues {
                expected,
                found: index,
            })?;
            *value = token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ConfigDataError::InvalidNumber {
                    index,
                    token: token.to_string(),
                })?;
        }
        if let Some(token) = tokens.next() {
            return Err(ConfigDataError::TrailingData {
                token: token.to_string(),
            });
        }

        let mut points = [(0.0, 0.0); PICKUP_POINTS];
        for (point, pair) in points.iter_mut().zip(values.chunks_exact(2)) {
            *point = (pair[0], pair[1]);
        }
        Ok(Self { points })
    }

    /// Entry `index` with its fixed sign pattern applied.
    pub fn spawn_point(&self, index: usize) -> (f32, f32) {
        let index = index % PICKUP_POINTS;
        let (x, y) = self.points[index];
        let (sx, sy) = SIGNS[index];
        (x * sx, y * sy)
    }
}
