// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_folio::ui::styles::{button, container, text};
    use iced_folio::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;
        for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
            let _ = button::primary(&theme, status);
            let _ = button::outline(&theme, status);
            let _ = button::nav_link(&theme, status);
            let _ = button::overlay_round(&theme, status);
            let _ = button::card_action(&theme, status);
            let _ = button::icon_link(&theme, status);
        }
    }

    #[test]
    fn navbar_gains_a_background_when_scrolled() {
        let theme = AppTheme::new(ThemeMode::Dark).iced_theme();
        let resting = container::navbar(false)(&theme);
        let scrolled = container::navbar(true)(&theme);
        assert_ne!(resting.background, scrolled.background);
    }

    #[test]
    fn faded_styles_follow_reveal_opacity() {
        let theme = Theme::Light;
        let hidden = text::tone(text::Tone::Body, 0.0)(&theme);
        assert_eq!(hidden.color.map(|c| c.a), Some(0.0));

        let half = text::fade(palette::PRIMARY_500, 0.5);
        assert!((half.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn design_tokens_are_coherent() {
        assert!(spacing::XS < spacing::MD && spacing::MD < spacing::XL);
        assert!(opacity::DECORATION < opacity::OPAQUE);
        assert!(sizing::NAVBAR_HEIGHT_COMPACT < sizing::NAVBAR_HEIGHT);
        assert!(sizing::PROJECT_COVER_HEIGHT < sizing::PROJECT_CARD_HEIGHT);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }
}
