// SPDX-License-Identifier: MPL-2.0
//! Profile screen: header with stats, follow toggle, and the posted-video
//! grid. All content comes from the static catalog; the follow flag and
//! selected section are local component state.

use crate::catalog::{self, format_count, PostedVideo};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Grid sections under the profile header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Videos,
    Liked,
}

impl Section {
    const ALL: [Section; 2] = [Section::Videos, Section::Liked];

    fn label(self) -> &'static str {
        match self {
            Section::Videos => "Videos",
            Section::Liked => "Liked",
        }
    }
}

/// Profile screen state.
#[derive(Debug, Default)]
pub struct State {
    following: bool,
    section: Section,
}

/// Messages emitted by the profile screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleFollow,
    SectionSelected(Section),
    SignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    SignedOut,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn following(&self) -> bool {
        self.following
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleFollow => {
                self.following = !self.following;
                Event::None
            }
            Message::SectionSelected(section) => {
                self.section = section;
                Event::None
            }
            Message::SignOut => Event::SignedOut,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let profile = &catalog::PROFILE;

        let header = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                Text::new(profile.username)
                    .size(typography::TITLE_MD)
                    .color(palette::WHITE),
            )
            .push(if profile.verified {
                Text::new("✔")
                    .size(typography::CAPTION)
                    .color(palette::BRAND_CYAN)
            } else {
                Text::new("")
            });

        let avatar_initial = profile
            .display_name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_default();
        let avatar = Container::new(
            Text::new(avatar_initial)
                .size(typography::TITLE_LG)
                .color(palette::WHITE),
        )
        .width(Length::Fixed(sizing::AVATAR_LG))
        .height(Length::Fixed(sizing::AVATAR_LG))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::avatar(palette::BRAND_PINK));

        let stats = Row::new()
            .spacing(spacing::LG)
            .push(stat(profile.following_count, "Following"))
            .push(stat(profile.follower_count, "Followers"))
            .push(stat(profile.like_count, "Likes"));

        let follow_label = if self.following { "Following" } else { "Follow" };
        let follow_button = if self.following {
            button(Text::new(follow_label).size(typography::BODY))
                .on_press(Message::ToggleFollow)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::secondary)
        } else {
            button(Text::new(follow_label).size(typography::BODY))
                .on_press(Message::ToggleFollow)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
        };

        let message_button = button(Text::new("Message").size(typography::BODY))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::secondary);

        let sign_out = button(Text::new("Sign out").size(typography::BODY))
            .on_press(Message::SignOut)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::secondary);

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(follow_button)
            .push(message_button)
            .push(sign_out);

        let info = Column::new()
            .spacing(spacing::SM)
            .push(stats)
            .push(actions);

        let bio = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(profile.display_name)
                    .size(typography::TITLE_SM)
                    .color(palette::WHITE),
            )
            .push(
                Text::new(profile.bio)
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );

        let videos: &[PostedVideo] = match self.section {
            Section::Videos => catalog::POSTED_VIDEOS,
            // The mock account liked a subset of its own uploads.
            Section::Liked => &catalog::POSTED_VIDEOS[..4],
        };

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(header)
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(Vertical::Center)
                    .push(avatar)
                    .push(info),
            )
            .push(bio)
            .push(self.section_tabs())
            .push(video_grid(videos));

        Container::new(iced::widget::scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::app_background)
            .into()
    }

    fn section_tabs(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::MD);
        for section in Section::ALL {
            row = row.push(
                button(Text::new(section.label()).size(typography::BODY))
                    .on_press(Message::SectionSelected(section))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::tab(section == self.section)),
            );
        }
        row.into()
    }
}

fn stat(value: u64, label: &'static str) -> Element<'static, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(format_count(value))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .into()
}

/// Three tiles per row, each showing view and like counts.
fn video_grid(videos: &'static [PostedVideo]) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    let mut row = Row::new().spacing(spacing::XS);
    let mut in_row = 0;

    for video in videos {
        row = row.push(video_tile(video));
        in_row += 1;
        if in_row == 3 {
            column = column.push(row);
            row = Row::new().spacing(spacing::XS);
            in_row = 0;
        }
    }
    if in_row > 0 {
        column = column.push(row);
    }

    column.into()
}

fn video_tile(video: &'static PostedVideo) -> Element<'static, Message> {
    let stats = Row::new()
        .width(Length::Fill)
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(Text::new("▶").size(typography::CAPTION).color(palette::WHITE))
                .push(
                    Text::new(format_count(video.view_count))
                        .size(typography::CAPTION)
                        .color(palette::WHITE),
                ),
        )
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .push(Text::new("♥").size(typography::CAPTION).color(palette::WHITE))
                .push(
                    Text::new(format_count(video.like_count))
                        .size(typography::CAPTION)
                        .color(palette::WHITE),
                ),
        );

    Container::new(
        Container::new(stats)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom)
            .padding(spacing::XS),
    )
    .width(Length::Fixed(sizing::TILE_WIDTH * 0.75))
    .height(Length::Fixed(sizing::TILE_HEIGHT * 0.75))
    .style(|_theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(palette::SURFACE_800)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..iced::Border::default()
        },
        ..iced::widget::container::Style::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_toggle_alternates() {
        let mut state = State::new();
        assert!(!state.following());
        assert_eq!(state.update(Message::ToggleFollow), Event::None);
        assert!(state.following());
        assert_eq!(state.update(Message::ToggleFollow), Event::None);
        assert!(!state.following());
    }

    #[test]
    fn default_section_is_videos() {
        assert_eq!(State::new().section(), Section::Videos);
    }

    #[test]
    fn section_selection_switches() {
        let mut state = State::new();
        state.update(Message::SectionSelected(Section::Liked));
        assert_eq!(state.section(), Section::Liked);
    }

    #[test]
    fn sign_out_emits_event() {
        let mut state = State::new();
        assert_eq!(state.update(Message::SignOut), Event::SignedOut);
    }
}
