//! Color helpers shared by the screens and banners.

use crossterm::style::Color;

/// RGB triple; converted to a terminal color at the edge.
pub type Rgb = (u8, u8, u8);

#[must_use]
pub const fn color((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Cycled across characters by the animated title and the loser's closing
/// line.
pub const RAINBOW: [Rgb; 7] = [
    (255, 92, 87),
    (255, 160, 60),
    (255, 221, 87),
    (87, 255, 135),
    (87, 220, 255),
    (120, 140, 255),
    (200, 120, 255),
];

/// Pastel gradient endpoints for the outcome banners.
pub const PASTEL_FROM: Rgb = (116, 235, 213);
pub const PASTEL_TO: Rgb = (172, 182, 229);

/// Linear blend between two colors; `t` is clamped to `0.0..=1.0`.
#[must_use]
pub fn blend(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
    };
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

/// Evenly spaced colors from `from` to `to`, inclusive on both ends.
#[must_use]
pub fn gradient(from: Rgb, to: Rgb, steps: usize) -> Vec<Rgb> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        _ => (0..steps)
            .map(|step| blend(from, to, step as f32 / (steps - 1) as f32))
            .collect(),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
