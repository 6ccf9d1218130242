use crate::cli::{Flags, USAGE};
use crate::components::{add_photo_button, FAB_CLEARANCE, FAB_MARGIN};
use crate::config::{self, Settings, ThemeChoice};
use crate::message::Message;
use crate::model::{navigation, GalleryState, PhotoRef, Screen};
use crate::picker::{self, IMAGE_MIME_FILTER};
use crate::views::{photo_detail, photo_grid};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::{container, stack};
use iced::{application, Alignment, Element, Length, Padding, Size, Subscription, Task, Theme};

const APP_TITLE: &str = "Photo Gallery";
const CONTENT_PADDING: f32 = 20.0;

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let flags = Flags::from_env().unwrap_or_else(|err| {
        log::warn!("{err}\n{USAGE}");
        Flags::default()
    });
    let settings = config::load(flags.config_path.as_deref()).unwrap_or_else(|err| {
        log::warn!("{err}; falling back to default settings");
        Settings::default()
    });

    let app = App::new(settings, flags.photos);
    let window_size = Size::new(app.settings.window_width, app.settings.window_height);

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(window_size)
        .run_with(move || (app, Task::none()))
}

pub struct App {
    gallery: GalleryState,
    settings: Settings,
}

impl App {
    /// Starts with `photos`, or with the configured samples when none are given.
    pub fn new(settings: Settings, photos: Vec<PhotoRef>) -> Self {
        let photos = if photos.is_empty() {
            settings.sample_photos()
        } else {
            photos
        };
        log::info!("Starting gallery with {} photos", photos.len());

        Self {
            gallery: GalleryState::new(photos),
            settings,
        }
    }

    #[cfg(test)]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickPhoto => Task::perform(
                picker::pick_photo(IMAGE_MIME_FILTER),
                Message::PhotoPicked,
            ),
            Message::PhotoPicked(picked) => {
                if let Some(photo) = picked {
                    self.gallery.add(photo);
                    log::info!("Gallery now holds {} photos", self.gallery.len());
                }
                Task::none()
            }
            Message::OpenPhoto(photo) => {
                self.gallery.select(&photo);
                Task::none()
            }
            Message::ShowPrevious => {
                if let Some(photo) = navigation::previous(&self.gallery).cloned() {
                    log::debug!("Showing previous photo {photo}");
                    self.gallery.select(&photo);
                }
                Task::none()
            }
            Message::ShowNext => {
                if let Some(photo) = navigation::next(&self.gallery).cloned() {
                    log::debug!("Showing next photo {photo}");
                    self.gallery.select(&photo);
                }
                Task::none()
            }
            Message::BackToGrid => {
                self.gallery.clear_selection();
                Task::none()
            }
            Message::DeletePhoto(photo) => {
                self.gallery.remove(&photo);
                log::info!("Gallery now holds {} photos", self.gallery.len());
                Task::none()
            }
            Message::DeleteSelected => {
                if let Some(photo) = self.gallery.selected().cloned() {
                    self.gallery.remove(&photo);
                    log::info!("Gallery now holds {} photos", self.gallery.len());
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let screen = Screen::of(&self.gallery);
        let content = match screen {
            Screen::Grid => photo_grid(
                self.gallery.photos(),
                self.settings.grid_columns,
                self.settings.thumbnail_size,
            ),
            Screen::Detail(current) => photo_detail(
                current,
                navigation::previous(&self.gallery),
                navigation::next(&self.gallery),
            ),
        };

        let content = container(content)
            .padding(content_padding(screen))
            .width(Length::Fill)
            .height(Length::Fill);

        let fab = container(add_photo_button())
            .padding(FAB_MARGIN)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::End)
            .align_y(Alignment::End);

        stack![content, fab].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match Screen::of(&self.gallery) {
            Screen::Detail(_) => keyboard::on_key_press(detail_shortcut),
            Screen::Grid => Subscription::none(),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

/// The detail controls sit on the bottom edge, so Detail reserves room for the
/// add button below them.
fn content_padding(screen: Screen<'_>) -> Padding {
    let bottom = match screen {
        Screen::Grid => CONTENT_PADDING,
        Screen::Detail(_) => CONTENT_PADDING.max(FAB_CLEARANCE),
    };

    Padding {
        top: CONTENT_PADDING,
        right: CONTENT_PADDING,
        bottom,
        left: CONTENT_PADDING,
    }
}

fn detail_shortcut(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::ShowPrevious),
        Key::Named(Named::ArrowRight) => Some(Message::ShowNext),
        Key::Named(Named::Escape) => Some(Message::BackToGrid),
        Key::Named(Named::Delete) => Some(Message::DeleteSelected),
        _ => None,
    }
}
