// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes for the page.

use crate::ui::design_tokens::{opacity, palette};
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub page: Color,
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_soft: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    pub overlay_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page: palette::SLATE_50,
            surface_primary: palette::WHITE,
            surface_secondary: palette::SLATE_100,
            border: palette::SLATE_200,

            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_700,
            text_tertiary: palette::SLATE_500,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_500,
            brand_soft: palette::PRIMARY_900,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::SLATE_900
            },
        }
    }

    /// The page's native look: slate-950 background, blue accents.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            page: palette::SLATE_950,
            surface_primary: palette::SLATE_800,
            surface_secondary: palette::SLATE_900,
            border: palette::SLATE_700,

            text_primary: palette::SLATE_100,
            text_secondary: palette::SLATE_400,
            text_tertiary: palette::SLATE_500,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_400,
            brand_soft: palette::PRIMARY_100,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::SLATE_950
            },
        }
    }

    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

/// Resolved theme: the mode requested and the colors it produced.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Builds the Iced theme so stock widgets pick up the page colors.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let mut palette = if self.mode.is_dark() {
            Palette::DARK
        } else {
            Palette::LIGHT
        };
        palette.background = self.colors.page;
        palette.text = self.colors.text_primary;
        palette.primary = self.colors.brand_primary;
        palette.success = self.colors.success;
        palette.danger = self.colors.error;

        Theme::custom("IcedFolio".to_string(), palette)
    }
}
