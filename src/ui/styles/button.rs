// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (sign-in, follow).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BRAND_PINK)),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BRAND_PINK
            })),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Secondary button (message, following).
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::SURFACE_700,
        _ => palette::SURFACE_800,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::BORDER_600,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Semi-transparent circular button floating over the media surface
/// (like, comment, share).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Borderless text button for tab-like controls; highlighted when selected.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if selected {
            WHITE
        } else {
            match status {
                button::Status::Hovered => WHITE,
                _ => palette::GRAY_400,
            }
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Gradient-colored pill for the upload target in the navigation bar.
pub fn upload(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        _ => opacity::OPAQUE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BRAND_PINK
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}
