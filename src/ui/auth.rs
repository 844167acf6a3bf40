// SPDX-License-Identifier: MPL-2.0
//! Authentication placeholder screen.
//!
//! There is no real authentication (non-goal): any username signs in, and
//! an empty field falls back to a guest handle. The screen only exists so
//! the shell has a signed-out state to route to.

use crate::session::UserSession;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Handle used when signing in with an empty username.
const GUEST_USERNAME: &str = "guest";

/// Authentication screen state.
#[derive(Debug, Default)]
pub struct State {
    username: String,
}

/// Messages emitted by the authentication screen.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    SignIn,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SignedIn(UserSession),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::UsernameChanged(username) => {
                self.username = username;
                Event::None
            }
            Message::SignIn => {
                let username = self.username.trim();
                let username = if username.is_empty() {
                    GUEST_USERNAME
                } else {
                    username
                };
                Event::SignedIn(UserSession::new(username, username))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Reels")
            .size(typography::TITLE_LG)
            .color(palette::BRAND_PINK);

        let subtitle = Text::new("Sign in to start watching")
            .size(typography::BODY)
            .color(palette::GRAY_400);

        let username = text_input("Username", &self.username)
            .on_input(Message::UsernameChanged)
            .on_submit(Message::SignIn)
            .padding(spacing::SM)
            .size(typography::BODY)
            .width(Length::Fixed(280.0));

        let sign_in = button(Text::new("Sign in").size(typography::BODY))
            .on_press(Message::SignIn)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(title)
            .push(subtitle)
            .push(username)
            .push(sign_in);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::app_background)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_username_signs_in() {
        let mut state = State::new();
        assert_eq!(
            state.update(Message::UsernameChanged("johndoe".to_string())),
            Event::None
        );
        assert_eq!(
            state.update(Message::SignIn),
            Event::SignedIn(UserSession::new("johndoe", "johndoe"))
        );
    }

    #[test]
    fn empty_username_falls_back_to_guest() {
        let mut state = State::new();
        assert_eq!(
            state.update(Message::SignIn),
            Event::SignedIn(UserSession::new(GUEST_USERNAME, GUEST_USERNAME))
        );
    }

    #[test]
    fn whitespace_username_is_treated_as_empty() {
        let mut state = State::new();
        state.update(Message::UsernameChanged("   ".to_string()));
        assert_eq!(
            state.update(Message::SignIn),
            Event::SignedIn(UserSession::new(GUEST_USERNAME, GUEST_USERNAME))
        );
    }
}
