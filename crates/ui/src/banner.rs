//! Block-letter rendering for the outcome banners.
//!
//! Letters come from an embedded 5-row glyph font; each `#` cell becomes a
//! full block character. Glyphs have individual widths, rows within a glyph
//! are always the same width.

/// Rows per glyph, and per rendered banner line.
pub const GLYPH_HEIGHT: usize = 5;

/// Render text as [`GLYPH_HEIGHT`] rows of block characters.
///
/// Lowercase input is uppercased; characters outside the font render as a
/// gap.
#[must_use]
pub fn big_text(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT];

    for (position, ch) in text.chars().enumerate() {
        let glyph = glyph(ch);
        for (row, line) in rows.iter_mut().zip(glyph) {
            if position > 0 {
                row.push(' ');
            }
            for cell in line.chars() {
                row.push(if cell == '#' { '█' } else { ' ' });
            }
        }
    }

    rows
}

#[rustfmt::skip]
fn glyph(ch: char) -> &'static [&'static str; GLYPH_HEIGHT] {
    match ch.to_ascii_uppercase() {
        'A' => &[" # ", "# #", "###", "# #", "# #"],
        'B' => &["## ", "# #", "## ", "# #", "## "],
        'C' => &[" ##", "#  ", "#  ", "#  ", " ##"],
        'D' => &["## ", "# #", "# #", "# #", "## "],
        'E' => &["###", "#  ", "## ", "#  ", "###"],
        'F' => &["###", "#  ", "## ", "#  ", "#  "],
        'G' => &[" ##", "#  ", "# #", "# #", " ##"],
        'H' => &["# #", "# #", "###", "# #", "# #"],
        'I' => &["###", " # ", " # ", " # ", "###"],
        'J' => &["  #", "  #", "  #", "# #", " # "],
        'K' => &["# #", "# #", "## ", "# #", "# #"],
        'L' => &["#  ", "#  ", "#  ", "#  ", "###"],
        'M' => &["#   #", "## ##", "# # #", "#   #", "#   #"],
        'N' => &["#  #", "## #", "# ##", "#  #", "#  #"],
        'O' => &["###", "# #", "# #", "# #", "###"],
        'P' => &["## ", "# #", "## ", "#  ", "#  "],
        'Q' => &[" ## ", "#  #", "#  #", "# ##", " ###"],
        'R' => &["## ", "# #", "## ", "# #", "# #"],
        'S' => &[" ##", "#  ", " # ", "  #", "## "],
        'T' => &["###", " # ", " # ", " # ", " # "],
        'U' => &["# #", "# #", "# #", "# #", "###"],
        'V' => &["# #", "# #", "# #", "# #", " # "],
        'W' => &["#   #", "#   #", "# # #", "## ##", "#   #"],
        'X' => &["# #", "# #", " # ", "# #", "# #"],
        'Y' => &["# #", "# #", " # ", " # ", " # "],
        'Z' => &["###", "  #", " # ", "#  ", "###"],
        '0' => &["###", "# #", "# #", "# #", "###"],
        '1' => &[" # ", "## ", " # ", " # ", "###"],
        '2' => &["###", "  #", "###", "#  ", "###"],
        '3' => &["###", "  #", "###", "  #", "###"],
        '4' => &["# #", "# #", "###", "  #", "  #"],
        '5' => &["###", "#  ", "###", "  #", "###"],
        '6' => &["###", "#  ", "###", "# #", "###"],
        '7' => &["###", "  #", "  #", "  #", "  #"],
        '8' => &["###", "# #", "###", "# #", "###"],
        '9' => &["###", "# #", "###", "  #", "###"],
        '$' => &[" ##", "## ", " # ", " ##", "## "],
        '!' => &["#", "#", "#", " ", "#"],
        '?' => &["###", "  #", " ##", "   ", " # "],
        ',' => &["  ", "  ", "  ", " #", "# "],
        '.' => &[" ", " ", " ", " ", "#"],
        '\'' => &["#", "#", " ", " ", " "],
        _ => &["  ", "  ", "  ", "  ", "  "],
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
