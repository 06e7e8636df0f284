use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::{Font, Vec2};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Word-wrap `s` to at most `columns` display columns per line.
/// Words wider than a line are split between characters. Explicit newlines are kept.
pub fn wrap_words(s: &str, columns: usize) -> Vec<String> {
    if columns == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);
            let separator = usize::from(!line.is_empty());
            if width + separator + word_width <= columns {
                if separator == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                width += separator + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                width = 0;
            }

            // Break words that can never fit on one line
            for ch in word.chars() {
                let ch_width = char_width(ch);
                if width + ch_width > columns && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    width = 0;
                }
                line.push(ch);
                width += ch_width;
            }
        }

        lines.push(line);
    }

    lines
}

/// Pixel size of `text` rendered at `text_size` in `font`, wrapped to fit `limits.x`.
///
/// Every display column advances by `text_size * font.advance_ratio()` and every
/// line is `text_size` tall. The result never exceeds `limits`.
pub fn measure_text(text: &str, text_size: f32, font: Font, limits: Vec2) -> Vec2 {
    if text.is_empty() || text_size <= 0.0 {
        return Vec2::ZERO;
    }

    let advance = text_size * font.advance_ratio();
    let columns = if limits.x.is_finite() {
        ((limits.x / advance).floor() as usize).max(1)
    } else {
        usize::MAX
    };

    let lines = wrap_words(text, columns);
    let widest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let size = Vec2::new(widest as f32 * advance, lines.len() as f32 * text_size);

    size.min(limits)
}
