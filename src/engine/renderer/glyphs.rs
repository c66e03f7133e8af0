// Stroke font for the handful of on-screen labels
//
// Glyphs live on a 4x6 grid, y down. Each entry is a line segment
// `[x0, y0, x1, y1]`.

/// Grid width of a glyph
pub const GLYPH_WIDTH: f32 = 4.0;
/// Grid height of a glyph
pub const GLYPH_HEIGHT: f32 = 6.0;
/// Horizontal advance per character, in grid units
pub const GLYPH_ADVANCE: f32 = 5.5;

/// Segments for a character; unknown characters have none
pub fn glyph(c: char) -> &'static [[f32; 4]] {
    match c.to_ascii_uppercase() {
        'A' => &[
            [0.0, 6.0, 0.0, 2.0],
            [0.0, 2.0, 2.0, 0.0],
            [2.0, 0.0, 4.0, 2.0],
            [4.0, 2.0, 4.0, 6.0],
            [0.0, 3.5, 4.0, 3.5],
        ],
        'C' => &[[4.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 6.0], [0.0, 6.0, 4.0, 6.0]],
        'E' => &[
            [4.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 6.0],
            [0.0, 6.0, 4.0, 6.0],
            [0.0, 3.0, 3.0, 3.0],
        ],
        'I' => &[[0.0, 0.0, 4.0, 0.0], [2.0, 0.0, 2.0, 6.0], [0.0, 6.0, 4.0, 6.0]],
        'L' => &[[0.0, 0.0, 0.0, 6.0], [0.0, 6.0, 4.0, 6.0]],
        'M' => &[
            [0.0, 6.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 3.0],
            [2.0, 3.0, 4.0, 0.0],
            [4.0, 0.0, 4.0, 6.0],
        ],
        'R' => &[
            [0.0, 6.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [4.0, 0.0, 4.0, 3.0],
            [4.0, 3.0, 0.0, 3.0],
            [1.5, 3.0, 4.0, 6.0],
        ],
        'T' => &[[0.0, 0.0, 4.0, 0.0], [2.0, 0.0, 2.0, 6.0]],
        'U' => &[[0.0, 0.0, 0.0, 6.0], [0.0, 6.0, 4.0, 6.0], [4.0, 6.0, 4.0, 0.0]],
        'X' => &[[0.0, 0.0, 4.0, 6.0], [4.0, 0.0, 0.0, 6.0]],
        '!' => &[[2.0, 0.0, 2.0, 4.0], [2.0, 5.2, 2.0, 6.0]],
        ':' => &[[2.0, 1.2, 2.0, 2.0], [2.0, 4.0, 2.0, 4.8]],
        '+' => &[[0.5, 3.0, 3.5, 3.0], [2.0, 1.5, 2.0, 4.5]],
        _ => &[],
    }
}

/// Width in pixels of `text` drawn with glyphs `height` pixels tall
pub fn text_width(text: &str, height: f32) -> f32 {
    let unit = height / GLYPH_HEIGHT;
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    ((count - 1) as f32 * GLYPH_ADVANCE + GLYPH_WIDTH) * unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_covered() {
        for c in "MIAU! EXIT: CTRL + ALT + E + X".chars() {
            if c != ' ' {
                assert!(!glyph(c).is_empty(), "missing glyph for {c:?}");
            }
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('m'), glyph('M'));
    }

    #[test]
    fn test_segments_stay_in_cell() {
        for c in "ACEILMRTUX!:+".chars() {
            for s in glyph(c) {
                for (i, v) in s.iter().enumerate() {
                    let max = if i % 2 == 0 { GLYPH_WIDTH } else { GLYPH_HEIGHT };
                    assert!(*v >= 0.0 && *v <= max);
                }
            }
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 12.0), 0.0);
        assert_eq!(text_width("I", 12.0), 8.0);
        assert_eq!(text_width("II", 12.0), 19.0);
    }
}
