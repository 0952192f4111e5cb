//! Built-in 8x8 bitmap font.
//!
//! Glyphs are stored as eight rows of bits, the least significant bit is the leftmost pixel.

use glam::IVec2;

/// Width of a single glyph in pixels when drawn unscaled.
pub const GLYPH_WIDTH: i32 = 8;

/// Height of a single glyph in pixels when drawn unscaled.
pub const GLYPH_HEIGHT: i32 = 8;

/// Bitmap of a single glyph.
pub type Glyph = [u8; 8];

/// Glyph drawn for characters that are not in the font.
const BLANK: Glyph = [0; 8];

/// Printable ASCII characters, starting at `' '` and ending at `'~'`.
#[rustfmt::skip]
const ASCII: [Glyph; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // !
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // #
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // $
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // %
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // &
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // (
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // )
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // *
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ,
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // .
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // /
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // 0
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // 1
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // 2
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // 3
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // 4
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // 5
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // 6
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // 7
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 8
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // 9
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // :
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ;
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // <
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // =
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // >
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // ?
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // @
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // A
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // B
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // C
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // D
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // E
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // F
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // G
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // H
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // I
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // J
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // K
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // L
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // M
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // N
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // O
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // P
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // Q
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // R
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // S
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // T
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // V
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // W
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // X
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // Y
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // Z
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // [
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // \
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ]
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // _
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // a
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // b
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // c
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // d
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // e
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // f
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // g
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // h
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // i
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // j
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // k
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // l
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // m
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // n
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // o
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // p
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // q
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // r
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // s
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // t
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // u
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // v
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // w
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // x
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // y
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // z
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // |
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // }
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
];

/// Map a character to the character of the glyph that will be drawn for it.
///
/// Returns `None` when the font has no fitting glyph.
#[must_use]
pub fn font_char(ch: char) -> Option<char> {
    if (' '..='~').contains(&ch) {
        return Some(ch);
    }

    let mapped = match ch {
        // Cyrillic letters that look like Latin ones
        'Ѕ' => 'S',
        'І' | 'Ї' => 'I',
        'Ј' => 'J',
        'А' => 'A',
        'В' | 'в' => 'B',
        'Е' | 'Ѐ' | 'Ё' => 'E',
        'З' | 'з' => '3',
        'К' | 'к' => 'K',
        'М' | 'м' => 'M',
        'Н' | 'н' => 'H',
        'О' => 'O',
        'Р' => 'P',
        'С' => 'C',
        'Т' | 'т' => 'T',
        'У' | 'у' => 'y',
        'Х' => 'X',
        'Ь' | 'ь' | 'ъ' => 'b',
        'а' => 'a',
        'г' => 'r',
        'е' | 'ё' | 'ѐ' => 'e',
        'о' => 'o',
        'р' => 'p',
        'с' => 'c',
        'х' => 'x',
        'ѕ' => 's',
        'і' => 'i',
        'ј' => 'j',
        'ѡ' => 'w',
        'Ѵ' => 'V',
        'ѵ' => 'v',
        // Latin-1 letters drawn without their accents
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };

    Some(mapped)
}

/// Get the bitmap drawn for a character.
///
/// Characters not in the font get an empty glyph, they still take up space.
#[must_use]
pub fn glyph(ch: char) -> &'static Glyph {
    font_char(ch).map_or(&BLANK, |ch| &ASCII[ch as usize - ' ' as usize])
}

/// Size of a single character cell when drawn with a scale.
///
/// Rounded to the nearest pixel, huge scales saturate at [`i32::MAX`].
#[inline]
#[must_use]
pub fn cell_size(scale: f32) -> IVec2 {
    IVec2::new(
        (GLYPH_WIDTH as f32).mul_add(scale, 0.5) as i32,
        (GLYPH_HEIGHT as f32).mul_add(scale, 0.5) as i32,
    )
}

/// Size of a text when drawn with a scale.
///
/// The width is the longest line, every `'\n'` starts a new line.
/// Empty text or a scale of zero or less is `(0, 0)`.
/// Sizes that don't fit in an `i32` saturate.
#[must_use]
pub fn text_size(text: &str, scale: f32) -> IVec2 {
    if text.is_empty() || scale <= 0.0 {
        return IVec2::ZERO;
    }

    let cell = cell_size(scale);

    let (longest_line, lines) = text
        .split('\n')
        .fold((0, 0), |(longest, lines), line| {
            (longest.max(line.chars().count() as i32), lines + 1)
        });

    IVec2::new(
        cell.x.saturating_mul(longest_line),
        cell.y.saturating_mul(lines),
    )
}

/// Position of every visible character of a text.
///
/// Line breaks are not returned, they move the next character to the start of the next line.
pub fn layout(text: &str, start: IVec2, scale: f32) -> impl Iterator<Item = (IVec2, char)> + '_ {
    let cell = cell_size(scale);

    text.chars()
        .scan(start, move |cursor, ch| {
            if ch == '\n' {
                *cursor = IVec2::new(start.x, cursor.y.saturating_add(cell.y));

                Some(None)
            } else {
                let position = *cursor;
                cursor.x = cursor.x.saturating_add(cell.x);

                Some(Some((position, ch)))
            }
        })
        .flatten()
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::{font_char, glyph, layout, text_size, BLANK};

    #[test]
    fn ascii_maps_to_itself() {
        assert_eq!(font_char('a'), Some('a'));
        assert_eq!(font_char('~'), Some('~'));
        assert_eq!(font_char(' '), Some(' '));
        assert_eq!(font_char('\u{7f}'), None);
    }

    #[test]
    fn cyrillic_look_alikes() {
        assert_eq!(font_char('А'), Some('A'));
        assert_eq!(font_char('в'), Some('B'));
        assert_eq!(font_char('г'), Some('r'));
        assert_eq!(font_char('У'), Some('y'));
        assert_eq!(glyph('З'), glyph('3'));
    }

    #[test]
    fn unknown_is_blank() {
        assert_eq!(glyph('☃'), &BLANK);
        assert_eq!(glyph(' '), &BLANK);
        assert_ne!(glyph('#'), &BLANK);
    }

    #[test]
    fn text_sizes() {
        assert_eq!(text_size("", 1.0), IVec2::ZERO);
        assert_eq!(text_size("abc", 0.0), IVec2::ZERO);
        assert_eq!(text_size("abc", -1.0), IVec2::ZERO);
        assert_eq!(text_size("abc", 1.0), IVec2::new(24, 8));
        assert_eq!(text_size("a\nbcd\n", 1.0), IVec2::new(24, 24));
        assert_eq!(text_size("ab", 2.0), IVec2::new(32, 16));
        // Characters are counted, not bytes
        assert_eq!(text_size("привет", 1.0), IVec2::new(48, 8));
    }

    #[test]
    fn layout_restarts_lines() {
        let positions = layout("ab\nc", IVec2::new(10, 20), 1.0).collect::<Vec<_>>();

        assert_eq!(
            positions,
            [
                (IVec2::new(10, 20), 'a'),
                (IVec2::new(18, 20), 'b'),
                (IVec2::new(10, 28), 'c'),
            ]
        );
    }

    #[test]
    fn huge_scales_saturate() {
        assert_eq!(text_size("ab", 1.0e9), IVec2::splat(i32::MAX));
        assert_eq!(text_size("a\nb", f32::MAX), IVec2::splat(i32::MAX));

        let positions = layout("ab\nc", IVec2::new(5, 0), 1.0e9).collect::<Vec<_>>();
        assert_eq!(positions[1].0, IVec2::new(i32::MAX, 0));
        assert_eq!(positions[2].0, IVec2::new(5, i32::MAX));
    }
}
