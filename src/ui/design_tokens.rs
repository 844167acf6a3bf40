// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the dark, media-first look.
//!
//! - **Palette**: base colors, brand gradient endpoints, semantic colors
//! - **Opacity**: standardized overlay levels
//! - **Spacing**: 8px-grid spacing scale
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions
//!
//! Tokens are designed to stay consistent across screens; ratios between
//! steps matter more than absolute values.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// App background: near-black, slightly warm.
    pub const BG_900: Color = Color::from_rgb(0.06, 0.06, 0.08);
    /// Card/panel surfaces.
    pub const SURFACE_800: Color = Color::from_rgb(0.11, 0.11, 0.14);
    /// Hovered surfaces.
    pub const SURFACE_700: Color = Color::from_rgb(0.16, 0.16, 0.20);
    /// Hairline borders.
    pub const BORDER_600: Color = Color::from_rgb(0.22, 0.22, 0.26);
    /// Secondary text.
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.60);
    /// Disabled text.
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.42, 0.47);

    // Brand colors (pink to cyan gradient endpoints)
    pub const BRAND_PINK: Color = Color::from_rgb(0.996, 0.173, 0.333);
    pub const BRAND_CYAN: Color = Color::from_rgb(0.145, 0.839, 0.925);

    // Semantic colors
    /// Heart color once an item is liked.
    pub const LIKE_500: Color = Color::from_rgb(0.996, 0.173, 0.333);
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
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon glyph sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Avatar circle on the action rail.
    pub const AVATAR: f32 = 48.0;
    /// Avatar circle on the profile header.
    pub const AVATAR_LG: f32 = 80.0;

    /// Progress rail segment dimensions.
    pub const RAIL_SEGMENT_WIDTH: f32 = 4.0;
    pub const RAIL_SEGMENT_HEIGHT: f32 = 32.0;

    /// Bottom navigation bar height.
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    /// Thumbnail tiles in discovery/profile grids.
    pub const TILE_WIDTH: f32 = 150.0;
    pub const TILE_HEIGHT: f32 = 200.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - screen headings (Discover, profile username).
    pub const TITLE_LG: f32 = 26.0;
    /// Medium title - stats, prominent labels.
    pub const TITLE_MD: f32 = 20.0;
    /// Small title - section headers.
    pub const TITLE_SM: f32 = 18.0;
    /// Standard body - captions, labels, descriptions.
    pub const BODY: f32 = 14.0;
    /// Caption - counters, timestamps, tab labels.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::AVATAR_LG > sizing::AVATAR);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
