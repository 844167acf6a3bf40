// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-bleed app background.
pub fn app_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BG_900)),
        ..container::Style::default()
    }
}

/// Card surface used for hashtag/sound/video tiles.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_800)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Dark media surface behind each feed item.
pub fn media_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        ..container::Style::default()
    }
}

/// Semi-transparent scrim over the media surface so overlaid text stays
/// readable.
pub fn media_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Bottom navigation bar surface with a hairline top border.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BG_900)),
        border: Border {
            color: palette::BORDER_600,
            width: 1.0,
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Circular avatar placeholder filled with a brand color.
pub fn avatar(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color: palette::WHITE,
            width: 2.0,
            radius: radius::FULL.into(),
        },
        ..container::Style::default()
    }
}

/// One segment of the feed progress rail; bright when active.
pub fn rail_segment(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if active {
            opacity::OPAQUE
        } else {
            opacity::OVERLAY_SUBTLE + 0.1
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::WHITE
            })),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..container::Style::default()
        }
    }
}
