// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar.
//!
//! Five targets are rendered but only three are real destinations; upload
//! and notifications are intercepted by the shell and produce a transient
//! toast instead of navigating.

use crate::app::Tab;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Everything the user can press in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Home,
    Discover,
    Upload,
    Notifications,
    Profile,
}

impl Target {
    /// All targets in display order.
    pub const ALL: [Target; 5] = [
        Target::Home,
        Target::Discover,
        Target::Upload,
        Target::Notifications,
        Target::Profile,
    ];

    fn label(self) -> &'static str {
        match self {
            Target::Home => "Home",
            Target::Discover => "Discover",
            Target::Upload => "Upload",
            Target::Notifications => "Inbox",
            Target::Profile => "Profile",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Target::Home => "⌂",
            Target::Discover => "🔍",
            Target::Upload => "＋",
            Target::Notifications => "🔔",
            Target::Profile => "👤",
        }
    }

    /// The tab this target navigates to, or `None` for intercepted
    /// targets.
    #[must_use]
    pub fn tab(self) -> Option<Tab> {
        match self {
            Target::Home => Some(Tab::Feed),
            Target::Discover => Some(Tab::Discover),
            Target::Profile => Some(Tab::Profile),
            Target::Upload | Target::Notifications => None,
        }
    }
}

/// Messages emitted by the navigation bar.
#[derive(Debug, Clone)]
pub enum Message {
    Pressed(Target),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Switch to a real destination.
    Navigate(Tab),
    /// Upload was pressed; show a transient notice instead of navigating.
    UploadIntercepted,
    /// Notifications was pressed; show a transient notice instead.
    NotificationsIntercepted,
}

/// Process a navigation bar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Pressed(target) => match target.tab() {
            Some(tab) => Event::Navigate(tab),
            None => match target {
                Target::Upload => Event::UploadIntercepted,
                _ => Event::NotificationsIntercepted,
            },
        },
    }
}

/// Render the navigation bar with the active tab highlighted.
pub fn view(active: Tab) -> Element<'static, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .width(Length::Fill);

    for target in Target::ALL {
        row = row.push(target_button(target, active));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn target_button(target: Target, active: Tab) -> Element<'static, Message> {
    let is_active = target.tab() == Some(active);

    // The upload pill shows only its glyph, in the brand color.
    if target == Target::Upload {
        return Container::new(
            button(
                Text::new(target.glyph())
                    .size(typography::TITLE_SM)
                    .align_x(Horizontal::Center),
            )
            .on_press(Message::Pressed(target))
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::upload),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into();
    }

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(target.glyph()).size(typography::TITLE_SM))
        .push(Text::new(target.label()).size(typography::CAPTION));

    Container::new(
        button(content)
            .on_press(Message::Pressed(target))
            .padding(spacing::XXS)
            .style(styles::button::tab(is_active)),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}
