// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored accent border, stacked
//! in the bottom-right corner above the rest of the UI.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, sizing, typography};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let accent_color = notification.severity().color();

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::BODY)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::WHITE),
                    }),
            );
        }
        body = body.push(
            Text::new(notification.message())
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );

        let notification_id = notification.id();
        let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications, stacked
    /// in the bottom-right corner.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

fn toast_container_style(_theme: &Theme, accent_color: Color) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..palette::SURFACE_800
        })),
        border: Border {
            color: accent_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..iced::widget::container::Style::default()
    }
}

fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::WHITE,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
