// SPDX-License-Identifier: MPL-2.0
//! Text styles with a reveal opacity applied.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::{Color, Theme};

/// Role of a run of text on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Headings and names.
    Strong,
    /// Paragraphs.
    Body,
    /// Dates, captions, counters.
    Muted,
    /// Highlighted words and company names.
    Accent,
    /// Section titles.
    Brand,
}

impl Tone {
    #[must_use]
    pub fn color(self, theme: &Theme) -> Color {
        let base = theme.extended_palette().background.base.text;
        match self {
            Tone::Strong => base,
            Tone::Body => Color { a: 0.75, ..base },
            Tone::Muted => Color { a: 0.55, ..base },
            Tone::Accent => palette::PRIMARY_400,
            Tone::Brand => palette::PRIMARY_500,
        }
    }
}

/// Text style of `tone`, faded to `opacity`.
pub fn tone(tone: Tone, opacity: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(fade(tone.color(theme), opacity)),
    }
}

/// Scales a color's alpha by `opacity`.
#[must_use]
pub fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_scales_alpha_only() {
        let faded = fade(palette::PRIMARY_500, 0.5);
        assert_eq!(faded.r, palette::PRIMARY_500.r);
        assert!((faded.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn fade_clamps_opacity() {
        assert_eq!(fade(palette::WHITE, 3.0).a, 1.0);
        assert_eq!(fade(palette::WHITE, -1.0).a, 0.0);
    }

    #[test]
    fn hidden_text_is_transparent() {
        let style = tone(Tone::Body, 0.0)(&Theme::Dark);
        assert_eq!(style.color.map(|c| c.a), Some(0.0));
    }

    #[test]
    fn brand_tone_ignores_theme() {
        assert_eq!(Tone::Brand.color(&Theme::Light), palette::PRIMARY_500);
        assert_eq!(Tone::Brand.color(&Theme::Dark), palette::PRIMARY_500);
    }
}
