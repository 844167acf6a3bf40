// SPDX-License-Identifier: MPL-2.0
//! A single feed item card: media surface, gradient scrim, caption block,
//! and the action rail with formatted counters.

use crate::catalog::{format_count, FeedItem};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Border, Element, Length, Theme,
};

/// Messages emitted by a card. The card index is attached by the feed
/// component when mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleLike,
    /// Tapping the media surface is equivalent to pressing the mute
    /// control.
    ToggleMute,
}

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub item: &'a FeedItem,
    pub is_active: bool,
    pub is_playing: bool,
    pub liked: bool,
    /// Display value for the like counter (base ± like adjustment).
    pub like_count: u64,
    pub muted: bool,
    pub height: f32,
}

/// Render one feed card at a fixed height.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let media = media_surface(&ctx);
    let scrim = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::media_scrim);

    let overlay = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(caption_block(&ctx))
        .push(action_rail(&ctx));

    Container::new(
        Stack::new()
            .push(media)
            .push(scrim)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(ctx.height))
    .clip(true)
    .into()
}

/// The (mock) media surface. Tapping it toggles mute.
fn media_surface<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let status = if ctx.is_playing {
        if ctx.muted {
            "▶ muted"
        } else {
            "▶"
        }
    } else {
        "⏸"
    };

    let placeholder = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(status)
                .size(typography::TITLE_LG)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(ctx.item.media_url)
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );

    let surface = Container::new(placeholder)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::media_surface);

    mouse_area(surface).on_press(Message::ToggleMute).into()
}

/// Author handle, caption, and soundtrack label in the bottom-left corner.
fn caption_block<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let block = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(format!("@{}", ctx.item.author))
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .push(
            Text::new(ctx.item.caption)
                .size(typography::BODY)
                .color(palette::WHITE),
        )
        .push(
            Text::new(format!("♪ {}", ctx.item.soundtrack))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(block)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// Avatar plus like/comment/share buttons stacked on the right edge.
fn action_rail<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let avatar_initial = ctx
        .item
        .author
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let avatar = Container::new(
        Text::new(avatar_initial)
            .size(typography::TITLE_SM)
            .color(palette::WHITE),
    )
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::avatar(palette::BRAND_CYAN));

    let like_color = if ctx.liked {
        palette::LIKE_500
    } else {
        palette::WHITE
    };

    let like = action_button("♥", like_color, Some(Message::ToggleLike));
    let comment = action_button("💬", palette::WHITE, None);
    let share = action_button("➦", palette::WHITE, None);

    let mute = action_button(
        if ctx.muted { "🔇" } else { "🔊" },
        palette::WHITE,
        Some(Message::ToggleMute),
    );

    let rail = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(avatar)
        .push(labeled(like, format_count(ctx.like_count)))
        .push(labeled(comment, format_count(ctx.item.comment_count)))
        .push(labeled(share, format_count(ctx.item.share_count)))
        .push(mute)
        .push(soundtrack_disc());

    Container::new(rail)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn action_button(
    glyph: &'static str,
    color: iced::Color,
    on_press: Option<Message>,
) -> Element<'static, Message> {
    let mut b = button(
        Text::new(glyph)
            .size(sizing::ICON_MD)
            .align_x(Horizontal::Center),
    )
    .padding(spacing::SM)
    .style(styles::button::overlay(
        color,
        opacity::OVERLAY_SUBTLE + 0.1,
        opacity::OVERLAY_MEDIUM,
    ));

    if let Some(message) = on_press {
        b = b.on_press(message);
    }

    b.into()
}

fn labeled(control: Element<'static, Message>, label: String) -> Element<'static, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(control)
        .push(Text::new(label).size(typography::CAPTION).color(palette::WHITE))
        .into()
}

/// Spinning-record stand-in for the soundtrack control.
fn soundtrack_disc() -> Element<'static, Message> {
    Container::new(
        Text::new("♪")
            .size(sizing::ICON_MD)
            .color(palette::WHITE)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(|_theme: &Theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(palette::SURFACE_800)),
        border: Border {
            color: palette::BRAND_PINK,
            width: 2.0,
            radius: radius::FULL.into(),
        },
        ..iced::widget::container::Style::default()
    })
    .into()
}
