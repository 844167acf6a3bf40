// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the feed, discovery, profile, and auth
//! components and translates their events into side effects like session
//! persistence or toast notifications. All state transitions happen
//! synchronously inside `App::update`; the only timers are presentation
//! ticks for the scroll animation and toast auto-dismiss.

use crate::catalog;
use crate::config::{self, Config};
use crate::session::{self, UserSession};
use crate::ui::design_tokens::sizing;
use crate::ui::feed;
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Notification, NotificationMessage, Toast};
use crate::ui::{auth, discover, profile};
use iced::widget::{Column, Container, Stack};
use iced::{event, time, window, Element, Length, Subscription, Task, Theme};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional override for the session data directory.
    pub data_dir: Option<String>,
    /// Optional path to a preferences file.
    pub config_path: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 568.0;

/// Toast auto-dismiss polling interval.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Animation frame interval while a snap transition runs.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Builds the window settings: a portrait window sized for one feed card.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Signed-out placeholder.
    Auth,
    /// The main app: active tab plus bottom navigation.
    Shell,
}

/// Destinations reachable from the bottom navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Feed,
    Discover,
    Profile,
}

#[derive(Debug, Clone)]
pub enum Message {
    Auth(auth::Message),
    Feed(feed::Message),
    Discover(discover::Message),
    Profile(profile::Message),
    Navbar(navbar::Message),
    Notification(NotificationMessage),
    Tick(Instant),
}

/// Root application state.
pub struct App {
    screen: Screen,
    tab: Tab,
    auth: auth::State,
    feed: feed::State,
    discover: discover::State,
    profile: profile::State,
    notifications: Manager,
    config: Config,
    session: Option<UserSession>,
    data_dir: Option<PathBuf>,
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// session snapshot. A stored session skips the auth placeholder.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(Path::new(path)),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            eprintln!("Failed to load preferences: {err}");
            Config::default()
        });

        let data_dir = flags.data_dir.map(PathBuf::from);
        let (session, warning) = session::load_from(data_dir.clone());
        if let Some(warning) = warning {
            eprintln!("{warning}");
        }

        let screen = if session.is_some() {
            Screen::Shell
        } else {
            Screen::Auth
        };

        let viewport_height = WINDOW_DEFAULT_HEIGHT - sizing::NAVBAR_HEIGHT;
        let mut feed = feed::State::new(catalog::sample_feed(), &config, viewport_height);
        if screen == Screen::Auth {
            // Nothing plays behind the auth placeholder.
            feed.pause_active();
        }

        let app = App {
            screen,
            tab: Tab::Feed,
            auth: auth::State::new(),
            feed,
            discover: discover::State::new(),
            profile: profile::State::new(),
            notifications: Manager::new(),
            config,
            session,
            data_dir,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.session {
            Some(user) => format!("Iced Reels - @{}", user.username),
            None => "Iced Reels".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        // Gesture input only flows while the feed is the visible screen.
        let event_subscription = if self.screen == Screen::Shell && self.tab == Tab::Feed {
            event::listen_with(|event, _status, _window_id| match &event {
                event::Event::Mouse(..)
                | event::Event::Touch(..)
                | event::Event::Window(window::Event::Resized(_)) => {
                    Some(Message::Feed(feed::Message::RawEvent(event)))
                }
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let animation_subscription = if self.feed.is_animating() {
            time::every(ANIMATION_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let notification_subscription = if self.notifications.has_notifications() {
            time::every(NOTIFICATION_TICK)
                .map(|_| Message::Notification(NotificationMessage::Tick))
        } else {
            Subscription::none()
        };

        Subscription::batch([
            event_subscription,
            animation_subscription,
            notification_subscription,
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Auth(auth_message) => {
                match self.auth.update(auth_message) {
                    auth::Event::None => {}
                    auth::Event::SignedIn(user) => self.sign_in(user),
                }
                Task::none()
            }
            Message::Feed(feed_message) => self.feed.update(feed_message).map(Message::Feed),
            Message::Discover(discover_message) => {
                self.discover.update(discover_message);
                Task::none()
            }
            Message::Profile(profile_message) => {
                match self.profile.update(profile_message) {
                    profile::Event::None => {}
                    profile::Event::SignedOut => self.sign_out(),
                }
                Task::none()
            }
            Message::Navbar(navbar_message) => {
                match navbar::update(navbar_message) {
                    navbar::Event::Navigate(tab) => self.switch_tab(tab),
                    navbar::Event::UploadIntercepted => {
                        self.notifications
                            .push(Notification::info("Upload is not available yet"));
                    }
                    navbar::Event::NotificationsIntercepted => {
                        self.notifications
                            .push(Notification::info("Notifications are not available yet"));
                    }
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                if self.feed.is_animating() {
                    self.feed.update(feed::Message::Tick(now)).map(Message::Feed)
                } else {
                    Task::none()
                }
            }
        }
    }

    /// Persists the session and enters the shell on the feed tab.
    fn sign_in(&mut self, user: UserSession) {
        if let Some(warning) = session::save_to(&user, self.data_dir.clone()) {
            eprintln!("{warning}");
            self.notifications.push(Notification::warning(warning));
        }

        self.notifications.push(Notification::success(format!(
            "Welcome, @{}",
            user.username
        )));
        self.session = Some(user);
        self.screen = Screen::Shell;
        self.tab = Tab::Feed;
        self.remount_feed();
    }

    /// Clears the session and returns to the auth placeholder. The feed is
    /// rebuilt so the next sign-in starts from the first item.
    fn sign_out(&mut self) {
        session::clear_from(self.data_dir.clone());
        self.session = None;
        self.screen = Screen::Auth;
        self.tab = Tab::Feed;
        self.auth = auth::State::new();
        self.remount_feed();
        self.feed.pause_active();
        self.notifications.push(Notification::info("Signed out"));
    }

    /// Selects a tab. Leaving the feed pauses the active item; returning
    /// remounts the feed from scratch, discarding per-item UI state.
    fn switch_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }

        if self.tab == Tab::Feed {
            self.feed.pause_active();
        }
        if tab == Tab::Feed {
            self.remount_feed();
        }
        self.tab = tab;
    }

    fn remount_feed(&mut self) {
        let viewport_height = self.feed.viewport_height();
        self.feed = feed::State::new(catalog::sample_feed(), &self.config, viewport_height);
    }

    fn view(&self) -> Element<'_, Message> {
        let base: Element<'_, Message> = match self.screen {
            Screen::Auth => self.auth.view().map(Message::Auth),
            Screen::Shell => {
                let content: Element<'_, Message> = match self.tab {
                    Tab::Feed => self.feed.view().map(Message::Feed),
                    Tab::Discover => self.discover.view().map(Message::Discover),
                    Tab::Profile => self.profile.view().map(Message::Profile),
                };

                Column::new()
                    .push(
                        Container::new(content)
                            .width(Length::Fill)
                            .height(Length::Fill),
                    )
                    .push(navbar::view(self.tab).map(Message::Navbar))
                    .into()
            }
        };

        let overlay = Toast::view_overlay(&self.notifications).map(Message::Notification);

        Stack::new()
            .push(base)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn flags_with(data_dir: &std::path::Path) -> Flags {
        Flags {
            data_dir: Some(data_dir.to_string_lossy().into_owned()),
            // A nonexistent preferences file resolves to defaults.
            config_path: Some(data_dir.join("settings.toml").to_string_lossy().into_owned()),
        }
    }

    #[test]
    fn starts_on_auth_without_a_stored_session() {
        let dir = tempdir().expect("failed to create temp dir");
        let (app, _) = App::new(flags_with(dir.path()));
        assert_eq!(app.screen, Screen::Auth);
        assert_eq!(app.feed.player().playing_count(), 0);
    }

    #[test]
    fn starts_on_shell_with_a_stored_session() {
        let dir = tempdir().expect("failed to create temp dir");
        let user = UserSession::new("johndoe", "John Doe");
        assert!(session::save_to(&user, Some(dir.path().to_path_buf())).is_none());

        let (app, _) = App::new(flags_with(dir.path()));
        assert_eq!(app.screen, Screen::Shell);
        assert_eq!(app.tab, Tab::Feed);
        assert_eq!(app.session, Some(user));
        assert_eq!(app.feed.player().playing_count(), 1);
    }

    #[test]
    fn sign_in_persists_session_and_shows_welcome_toast() {
        let dir = tempdir().expect("failed to create temp dir");
        let (mut app, _) = App::new(flags_with(dir.path()));

        let _ = app.update(Message::Auth(auth::Message::UsernameChanged(
            "johndoe".to_string(),
        )));
        let _ = app.update(Message::Auth(auth::Message::SignIn));

        assert_eq!(app.screen, Screen::Shell);
        assert_eq!(app.notifications.visible_count(), 1);

        let (stored, _) = session::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(stored, Some(UserSession::new("johndoe", "johndoe")));
    }

    #[test]
    fn sign_out_clears_session_and_returns_to_auth() {
        let dir = tempdir().expect("failed to create temp dir");
        let user = UserSession::new("johndoe", "John Doe");
        assert!(session::save_to(&user, Some(dir.path().to_path_buf())).is_none());

        let (mut app, _) = App::new(flags_with(dir.path()));
        let _ = app.update(Message::Profile(profile::Message::SignOut));

        assert_eq!(app.screen, Screen::Auth);
        assert_eq!(app.tab, Tab::Feed);
        assert!(app.session.is_none());

        let (stored, _) = session::load_from(Some(dir.path().to_path_buf()));
        assert!(stored.is_none());
    }

    #[test]
    fn intercepted_targets_push_toasts_without_navigating() {
        let dir = tempdir().expect("failed to create temp dir");
        let user = UserSession::new("johndoe", "John Doe");
        assert!(session::save_to(&user, Some(dir.path().to_path_buf())).is_none());
        let (mut app, _) = App::new(flags_with(dir.path()));

        let _ = app.update(Message::Navbar(navbar::Message::Pressed(
            navbar::Target::Upload,
        )));
        let _ = app.update(Message::Navbar(navbar::Message::Pressed(
            navbar::Target::Notifications,
        )));

        assert_eq!(app.tab, Tab::Feed);
        assert_eq!(app.notifications.visible_count(), 2);
    }

    #[test]
    fn leaving_the_feed_pauses_and_returning_remounts() {
        let dir = tempdir().expect("failed to create temp dir");
        let user = UserSession::new("johndoe", "John Doe");
        assert!(session::save_to(&user, Some(dir.path().to_path_buf())).is_none());
        let (mut app, _) = App::new(flags_with(dir.path()));

        // Advance the feed and like an item so there is state to discard.
        let wheel = event::Event::Mouse(iced::mouse::Event::WheelScrolled {
            delta: iced::mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });
        let _ = app.update(Message::Feed(feed::Message::RawEvent(wheel)));
        assert_eq!(app.feed.pager().current_index(), Some(1));

        let _ = app.update(Message::Navbar(navbar::Message::Pressed(
            navbar::Target::Discover,
        )));
        assert_eq!(app.tab, Tab::Discover);
        assert_eq!(app.feed.player().playing_count(), 0);

        let _ = app.update(Message::Navbar(navbar::Message::Pressed(
            navbar::Target::Home,
        )));
        assert_eq!(app.tab, Tab::Feed);
        assert_eq!(app.feed.pager().current_index(), Some(0));
        assert_eq!(app.feed.player().playing_count(), 1);
    }

    #[test]
    fn selecting_the_current_tab_is_a_no_op() {
        let dir = tempdir().expect("failed to create temp dir");
        let user = UserSession::new("johndoe", "John Doe");
        assert!(session::save_to(&user, Some(dir.path().to_path_buf())).is_none());
        let (mut app, _) = App::new(flags_with(dir.path()));

        let wheel = event::Event::Mouse(iced::mouse::Event::WheelScrolled {
            delta: iced::mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });
        let _ = app.update(Message::Feed(feed::Message::RawEvent(wheel)));

        let _ = app.update(Message::Navbar(navbar::Message::Pressed(
            navbar::Target::Home,
        )));
        // Reselecting the feed must not reset its position.
        assert_eq!(app.feed.pager().current_index(), Some(1));
    }
}
