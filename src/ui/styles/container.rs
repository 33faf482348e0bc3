// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Alternate band behind the experience section.
pub fn band(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(Color { a: 0.5, ..base })),
        ..Default::default()
    }
}

/// Navbar surface. Transparent at the top of the page, opaque once scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        if !scrolled {
            return container::Style::default();
        }
        let base = theme.extended_palette().background.strong.color;
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SURFACE,
                ..base
            })),
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

/// Card surface (experience, skills, projects).
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Vertical accent stripe on the left edge of an experience card.
pub fn accent_bar(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// White tile behind company logos.
pub fn logo_tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded frame around remote images and their placeholders.
pub fn image_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_700)),
        border: Border {
            color: palette::SLATE_700,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Skill tag pill under a project card.
pub fn tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..palette::PRIMARY_500
        })),
        text_color: Some(palette::PRIMARY_400),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window dimmed backdrop behind the gallery.
pub fn gallery_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::SLATE_950
        })),
        ..Default::default()
    }
}

/// Gallery dialog panel.
pub fn gallery_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        text_color: Some(palette::SLATE_300),
        border: Border {
            color: palette::SLATE_700,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Footer strip with a top separator.
pub fn footer(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Wraps a container style so the whole surface fades with a reveal.
pub fn faded(
    style: fn(&Theme) -> container::Style,
    opacity: f32,
) -> impl Fn(&Theme) -> container::Style {
    use crate::ui::styles::text::fade;
    move |theme: &Theme| {
        let base = style(theme);
        container::Style {
            background: base.background.map(|background| background.scale_alpha(opacity)),
            text_color: base.text_color.map(|color| fade(color, opacity)),
            border: Border {
                color: fade(base.border.color, opacity),
                ..base.border
            },
            shadow: iced::Shadow {
                color: fade(base.shadow.color, opacity),
                ..base.shadow
            },
            ..base
        }
    }
}
