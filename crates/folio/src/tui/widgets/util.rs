use std::borrow::Cow;

use folio_core::Tone;
use ratatui::{layout::Rect, style::Color};
use unicode_segmentation::UnicodeSegmentation;

pub(in crate::tui) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> Cow<'_, str> {
    const ELLIPSIS: &str = "...";
    const ELLIPSIS_GRAPHEMES: usize = 3;

    if max_graphemes == 0 {
        return Cow::Owned(String::new());
    }

    let grapheme_count = UnicodeSegmentation::graphemes(input, true).count();
    if grapheme_count <= max_graphemes {
        return Cow::Borrowed(input);
    }

    if max_graphemes <= ELLIPSIS_GRAPHEMES {
        let truncated: String = UnicodeSegmentation::graphemes(input, true)
            .take(max_graphemes)
            .collect();
        return Cow::Owned(truncated);
    }

    let keep = max_graphemes - ELLIPSIS_GRAPHEMES;
    let mut truncated: String = UnicodeSegmentation::graphemes(input, true).take(keep).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

/// Terminal color for a chip or badge tone.
pub(in crate::tui) const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Purple => Color::Rgb(192, 132, 252),
        Tone::Blue => Color::Rgb(96, 165, 250),
        Tone::Green => Color::Rgb(74, 222, 128),
        Tone::Cyan => Color::Rgb(34, 211, 238),
        Tone::Orange => Color::Rgb(251, 146, 60),
        Tone::Yellow => Color::Rgb(250, 204, 21),
        Tone::Red => Color::Rgb(248, 113, 113),
        Tone::Indigo => Color::Rgb(129, 140, 248),
        Tone::Emerald => Color::Rgb(52, 211, 153),
        Tone::Amber => Color::Rgb(251, 191, 36),
        Tone::Pink => Color::Rgb(244, 114, 182),
        Tone::Teal => Color::Rgb(45, 212, 191),
        Tone::Sky => Color::Rgb(56, 189, 248),
        Tone::Violet => Color::Rgb(167, 139, 250),
        Tone::Rose => Color::Rgb(251, 113, 133),
        Tone::Fuchsia => Color::Rgb(232, 121, 249),
        Tone::Slate => Color::Gray,
    }
}

/// Centered rectangle sized by percentage, clamped to a minimum and to `area`.
pub(in crate::tui) fn centered_popup(
    area: Rect,
    width_percent: u16,
    height_percent: u16,
    min_width: u16,
    min_height: u16,
) -> Rect {
    let width = percent_of(area.width, width_percent)
        .max(min_width)
        .min(area.width);
    let height = percent_of(area.height, height_percent)
        .max(min_height)
        .min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent) / 100;
    u16::try_from(scaled).unwrap_or(length)
}
