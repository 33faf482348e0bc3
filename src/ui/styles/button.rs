// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary filled button (gallery "view post", toast actions).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::SLATE_700)),
            text_color: palette::SLATE_400,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined brand button (navbar Resume, hero CV call to action).
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().primary;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: 0.1,
            ..palette::PRIMARY_500
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: 0.2,
            ..palette::PRIMARY_500
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: text,
        border: Border {
            color: palette::PRIMARY_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only navigation link; turns brand colored on hover.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let idle = theme.extended_palette().background.base.text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ => Color { a: 0.8, ..idle },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent button over imagery (gallery arrows and close).
pub fn overlay_round(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::SLATE_800
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// One half of a project card's action strip.
pub fn card_action(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::SLATE_800,
        _ => Color {
            a: opacity::OVERLAY_PRESSED,
            ..palette::SLATE_900
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::SLATE_700,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Icon link (GitHub, LinkedIn, e-mail).
pub fn icon_link(theme: &Theme, status: button::Status) -> button::Style {
    let idle = theme.extended_palette().background.base.text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ => Color { a: 0.6, ..idle },
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Wraps a button style so the whole button fades with a reveal.
pub fn faded(
    style: fn(&Theme, button::Status) -> button::Style,
    opacity: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    use crate::ui::styles::text::fade;
    move |theme: &Theme, status: button::Status| {
        let base = style(theme, status);
        button::Style {
            background: base.background.map(|background| background.scale_alpha(opacity)),
            text_color: fade(base.text_color, opacity),
            border: Border {
                color: fade(base.border.color, opacity),
                ..base.border
            },
            shadow: iced::Shadow {
                color: fade(base.shadow.color, opacity),
                ..base.shadow
            },
            snap: base.snap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn outline_gains_tint_on_hover() {
        let idle = outline(&Theme::Dark, button::Status::Active);
        let hover = outline(&Theme::Dark, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hover.background.is_some());
    }

    #[test]
    fn overlay_round_alpha_changes_on_hover() {
        let normal = overlay_round(&Theme::Dark, button::Status::Active);
        let hover = overlay_round(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn faded_button_is_invisible_at_zero() {
        let style = faded(outline, 0.0)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color.a, 0.0);
        assert_eq!(style.border.color.a, 0.0);
    }

    #[test]
    fn nav_link_highlights_on_hover() {
        let hover = nav_link(&Theme::Dark, button::Status::Hovered);
        assert_eq!(hover.text_color, palette::PRIMARY_400);
    }
}
