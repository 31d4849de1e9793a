//! Block-letter banner font for the portfolio hero.

/// Height of every glyph in rows.
pub const GLYPH_HEIGHT: usize = 7;

/// Letter A
const LETTER_A: [&str; GLYPH_HEIGHT] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter D
const LETTER_D: [&str; GLYPH_HEIGHT] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "█████ ",
];

/// Letter E
const LETTER_E: [&str; GLYPH_HEIGHT] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter K
const LETTER_K: [&str; GLYPH_HEIGHT] = [
    "██  ██",
    "██ ██ ",
    "████  ",
    "███   ",
    "████  ",
    "██ ██ ",
    "██  ██",
];

/// Letter M
const LETTER_M: [&str; GLYPH_HEIGHT] = [
    "██   ██",
    "███ ███",
    "███████",
    "██ █ ██",
    "██   ██",
    "██   ██",
    "██   ██",
];

/// Letter O
const LETTER_O: [&str; GLYPH_HEIGHT] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Letter R
const LETTER_R: [&str; GLYPH_HEIGHT] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "████  ",
    "██ ██ ",
    "██  ██",
];

/// Letter U
const LETTER_U: [&str; GLYPH_HEIGHT] = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Dot separator (2 chars wide)
const DOT: [&str; GLYPH_HEIGHT] = ["  ", "  ", "  ", "  ", "  ", "██", "██"];

/// Word gap (3 chars wide)
const SPACE: [&str; GLYPH_HEIGHT] = ["   "; GLYPH_HEIGHT];

/// Look up the glyph for a character. Characters without a glyph return `None`.
pub fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match ch.to_ascii_uppercase() {
        'A' => Some(&LETTER_A),
        'D' => Some(&LETTER_D),
        'E' => Some(&LETTER_E),
        'K' => Some(&LETTER_K),
        'M' => Some(&LETTER_M),
        'O' => Some(&LETTER_O),
        'R' => Some(&LETTER_R),
        'U' => Some(&LETTER_U),
        '.' => Some(&DOT),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Build the banner rows for `text`, one space between glyphs.
/// Characters without a glyph are skipped.
pub fn build_banner(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    let mut lines = Vec::with_capacity(GLYPH_HEIGHT);

    for row in 0..GLYPH_HEIGHT {
        let mut line = String::new();
        for (i, g) in glyphs.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(g[row]);
        }
        lines.push(line);
    }

    lines
}

/// Display width of the banner for `text`, in columns.
pub fn banner_width(text: &str) -> usize {
    build_banner(text)
        .first()
        .map(|l| l.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_rows_share_width() {
        for ch in "ADEKMORU. ".chars() {
            let g = glyph(ch).unwrap();
            let width = g[0].chars().count();
            assert!(g.iter().all(|row| row.chars().count() == width), "{ch}");
        }
    }

    #[test]
    fn test_banner_has_fixed_height() {
        let banner = build_banner("Eduardo Kamo");
        assert_eq!(banner.len(), GLYPH_HEIGHT);
        let width = banner[0].chars().count();
        assert!(banner.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert_eq!(build_banner("A?"), build_banner("A"));
        assert_eq!(banner_width(""), 0);
        assert_eq!(banner_width("AM"), 6 + 1 + 7);
    }
}
