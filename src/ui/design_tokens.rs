// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the page's design tokens in one place.

## Organization

- **Palette**: Base colors (slate surfaces, blue accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and section sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_HOVER,
    ..palette::SLATE_950
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Slate (surfaces and text)
    pub const SLATE_950: Color = Color::from_rgb8(0x02, 0x06, 0x17);
    pub const SLATE_900: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);
    pub const SLATE_800: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);
    pub const SLATE_700: Color = Color::from_rgb8(0x33, 0x41, 0x55);
    pub const SLATE_500: Color = Color::from_rgb8(0x64, 0x74, 0x8b);
    pub const SLATE_400: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);
    pub const SLATE_300: Color = Color::from_rgb8(0xcb, 0xd5, 0xe1);
    pub const SLATE_200: Color = Color::from_rgb8(0xe2, 0xe8, 0xf0);
    pub const SLATE_100: Color = Color::from_rgb8(0xf1, 0xf5, 0xf9);
    pub const SLATE_50: Color = Color::from_rgb8(0xf8, 0xfa, 0xfc);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb8(0xdb, 0xea, 0xfe);
    pub const PRIMARY_300: Color = Color::from_rgb8(0x93, 0xc5, 0xfd);
    pub const PRIMARY_400: Color = Color::from_rgb8(0x60, 0xa5, 0xfa);
    pub const PRIMARY_500: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
    pub const PRIMARY_600: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
    pub const PRIMARY_900: Color = Color::from_rgb8(0x1e, 0x3a, 0x8a);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Background code snippets.
    pub const DECORATION: f32 = 0.2;
    pub const OVERLAY_SUBTLE: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OVERLAY_HOVER: f32 = 0.9;
    pub const OVERLAY_PRESSED: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - cards and the scrolled navbar
    pub const SURFACE: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    pub const XXXL: f32 = 64.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Navbar height when resting at the top of the page.
    pub const NAVBAR_HEIGHT: f32 = 72.0;
    /// Navbar height once the page has scrolled.
    pub const NAVBAR_HEIGHT_COMPACT: f32 = 56.0;

    /// Widest column used by section content.
    pub const CONTENT_MAX_WIDTH: f32 = 1152.0;

    pub const PROFILE_IMAGE_WIDTH: f32 = 360.0;
    pub const PROFILE_IMAGE_HEIGHT: f32 = 450.0;
    pub const COMPANY_LOGO: f32 = 48.0;

    pub const PROJECT_CARD_WIDTH: f32 = 352.0;
    pub const PROJECT_CARD_HEIGHT: f32 = 470.0;
    pub const PROJECT_COVER_HEIGHT: f32 = 192.0;

    pub const GALLERY_MAX_WIDTH: f32 = 896.0;
    pub const GALLERY_IMAGE_MAX_HEIGHT: f32 = 520.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: the hero headline
    //! - Titles: section and card headings
    //! - Body: paragraphs and labels
    //! - Caption: tags, periods, counters

    /// Hero headline.
    pub const DISPLAY: f32 = 56.0;

    /// Section headings (Experience, Skills, Key Projects).
    pub const TITLE_LG: f32 = 36.0;

    /// Card headings.
    pub const TITLE_MD: f32 = 20.0;

    /// Navbar brand and small headings.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 18.0;

    pub const BODY: f32 = 15.0;

    pub const BODY_SM: f32 = 13.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Accent stripes and the CV button outline.
    pub const WIDTH_MD: f32 = 2.0;

    /// Left accent bar of experience cards.
    pub const WIDTH_ACCENT: f32 = 8.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::NAVBAR_HEIGHT > sizing::NAVBAR_HEIGHT_COMPACT);
    assert!(sizing::PROJECT_CARD_HEIGHT > sizing::PROJECT_COVER_HEIGHT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn slate_scale_gets_lighter() {
        assert!(palette::SLATE_950.r < palette::SLATE_800.r);
        assert!(palette::SLATE_800.r < palette::SLATE_400.r);
        assert!(palette::SLATE_400.r < palette::SLATE_100.r);
    }
}
