// SPDX-License-Identifier: MPL-2.0
//! Discovery screen: search field plus trending content sections.
//!
//! Everything renders from the static catalog; the search query is local
//! component state and filters nothing yet.

use crate::catalog::{self, format_count};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Content sections below the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Trending,
    Sounds,
    Hashtags,
}

impl Section {
    const ALL: [Section; 3] = [Section::Trending, Section::Sounds, Section::Hashtags];

    fn label(self) -> &'static str {
        match self {
            Section::Trending => "Trending",
            Section::Sounds => "Sounds",
            Section::Hashtags => "Hashtags",
        }
    }
}

/// Discovery screen state.
#[derive(Debug, Default)]
pub struct State {
    query: String,
    section: Section,
}

/// Messages emitted by the discovery screen.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SectionSelected(Section),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::QueryChanged(query) => self.query = query,
            Message::SectionSelected(section) => self.section = section,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                Text::new("Discover")
                    .size(typography::TITLE_LG)
                    .color(palette::WHITE),
            )
            .push(
                Text::new("📈")
                    .size(typography::TITLE_MD)
                    .color(palette::BRAND_PINK),
            );

        let search = text_input("Search users, sounds, hashtags...", &self.query)
            .on_input(Message::QueryChanged)
            .padding(spacing::SM)
            .size(typography::BODY);

        let tabs = self.section_tabs();

        let body = match self.section {
            Section::Trending => self.trending_section(),
            Section::Sounds => sounds_list(catalog::TRENDING_SOUNDS),
            Section::Hashtags => hashtag_grid(catalog::TRENDING_HASHTAGS),
        };

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(title)
            .push(search)
            .push(tabs)
            .push(body);

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

    fn trending_section(&self) -> Element<'_, Message> {
        let featured = section_header("Featured Videos");
        let videos = featured_grid(catalog::FEATURED_VIDEOS);

        let hashtags_header = section_header("Trending Hashtags");
        let hashtags = hashtag_grid(&catalog::TRENDING_HASHTAGS[..4]);

        Column::new()
            .spacing(spacing::MD)
            .push(featured)
            .push(videos)
            .push(hashtags_header)
            .push(hashtags)
            .into()
    }
}

fn section_header(label: &'static str) -> Element<'static, Message> {
    Text::new(label)
        .size(typography::TITLE_SM)
        .color(palette::WHITE)
        .into()
}

fn featured_grid(videos: &'static [catalog::FeaturedVideo]) -> Element<'static, Message> {
    grid(videos.iter().map(|video| {
        thumbnail_tile(vec![(
            "▶",
            format_count(video.view_count),
        )])
    }))
}

fn hashtag_grid(hashtags: &'static [catalog::Hashtag]) -> Element<'static, Message> {
    grid(hashtags.iter().map(|hashtag| {
        let content = Column::new()
            .spacing(spacing::XS)
            .push(
                Container::new(
                    Text::new("#")
                        .size(typography::TITLE_MD)
                        .color(palette::WHITE),
                )
                .width(Length::Fixed(sizing::AVATAR))
                .height(Length::Fixed(sizing::AVATAR))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(|_theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(palette::BRAND_PINK)),
                    border: iced::Border {
                        radius: radius::MD.into(),
                        ..iced::Border::default()
                    },
                    ..iced::widget::container::Style::default()
                }),
            )
            .push(
                Text::new(format!("#{}", hashtag.tag))
                    .size(typography::BODY)
                    .color(palette::WHITE),
            )
            .push(
                Text::new(format!("{} posts", format_count(hashtag.post_count)))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );

        Container::new(content)
            .width(Length::Fixed(sizing::TILE_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::card)
            .into()
    }))
}

fn sounds_list(sounds: &'static [catalog::Sound]) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    for sound in sounds {
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Container::new(Text::new("♪").size(typography::TITLE_MD).color(palette::WHITE))
                    .width(Length::Fixed(sizing::AVATAR))
                    .height(Length::Fixed(sizing::AVATAR))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .style(styles::container::card),
            )
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(
                        Text::new(sound.title)
                            .size(typography::BODY)
                            .color(palette::WHITE),
                    )
                    .push(
                        Text::new(format!("by {}", sound.artist))
                            .size(typography::CAPTION)
                            .color(palette::GRAY_400),
                    ),
            )
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .align_x(Horizontal::Right)
                    .push(
                        Text::new(format_count(sound.use_count))
                            .size(typography::BODY)
                            .color(palette::WHITE),
                    )
                    .push(
                        Text::new("uses")
                            .size(typography::CAPTION)
                            .color(palette::GRAY_400),
                    ),
            );

        column = column.push(
            Container::new(row)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::card),
        );
    }
    column.into()
}

/// Lays elements out two per row.
fn grid(
    tiles: impl Iterator<Item = Element<'static, Message>>,
) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::SM);
    let mut row = Row::new().spacing(spacing::SM);
    let mut in_row = 0;

    for tile in tiles {
        row = row.push(tile);
        in_row += 1;
        if in_row == 2 {
            column = column.push(row);
            row = Row::new().spacing(spacing::SM);
            in_row = 0;
        }
    }
    if in_row > 0 {
        column = column.push(row);
    }

    column.into()
}

/// Dark tile with stat lines anchored to the bottom-left corner.
fn thumbnail_tile(stats: Vec<(&'static str, String)>) -> Element<'static, Message> {
    let mut overlay = Column::new().spacing(spacing::XXS);
    for (glyph, value) in stats {
        overlay = overlay.push(
            Row::new()
                .spacing(spacing::XXS)
                .push(Text::new(glyph).size(typography::CAPTION).color(palette::WHITE))
                .push(Text::new(value).size(typography::CAPTION).color(palette::WHITE)),
        );
    }

    Container::new(
        Container::new(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom)
            .padding(spacing::XS),
    )
    .width(Length::Fixed(sizing::TILE_WIDTH))
    .height(Length::Fixed(sizing::TILE_HEIGHT))
    .style(styles::container::card)
    .into()
}
