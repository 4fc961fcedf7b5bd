//! Score and lives overlay drawn with a tiny built-in 3x5 pixel font.

use invaderers_common::Color;

use crate::render::Canvas;
use crate::state::Scoreboard;

const GLYPH_WIDTH: usize = 3;
const GLYPH_HEIGHT: usize = 5;
const HUD_SCALE: usize = 3;
const HUD_TOP: usize = 8;

/// Rows top to bottom, the three low bits of each row left to right.
fn glyph(c: char) -> Option<[u8; GLYPH_HEIGHT]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        _ => return None,
    };
    Some(rows)
}

/// Width in pixels of `text` at `scale`, one blank column between glyphs.
pub fn text_width(text: &str, scale: usize) -> usize {
    let n = text.chars().count();
    if n == 0 {
        return 0;
    }
    (n * (GLYPH_WIDTH + 1) - 1) * scale
}

/// Draw `text` with its top-left corner at `x`, `y`. Characters the font
/// lacks, including spaces, leave a gap.
pub fn draw_text(canvas: &mut Canvas<'_>, x: usize, y: usize, scale: usize, text: &str, color: Color) {
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let gx = x + i * (GLYPH_WIDTH + 1) * scale;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    canvas.fill_rect(gx + col * scale, y + row * scale, scale, scale, color);
                }
            }
        }
    }
}

pub fn hud_text(scoreboard: &Scoreboard) -> String {
    format!("SCORE {}  LIVES {}", scoreboard.score, scoreboard.lives)
}

/// Left edge of the HUD text, centred on a canvas `canvas_width` wide.
pub fn hud_left(text: &str, canvas_width: usize) -> usize {
    canvas_width.saturating_sub(text_width(text, HUD_SCALE)) / 2
}

pub fn draw_hud(canvas: &mut Canvas<'_>, scoreboard: &Scoreboard) {
    let text = hud_text(scoreboard);
    let left = hud_left(&text, canvas.width());
    draw_text(canvas, left, HUD_TOP, HUD_SCALE, &text, Color::WHITE);
}
