use std::path::PathBuf;

use clap::Parser;
use iced::event::{self, Event};
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::{Element, Subscription, Task, Theme};
use rfd::FileDialog;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod discovery;
mod state;
mod ui;

use crate::config::{Overrides, Settings, ThemeChoice};
use crate::state::{Document, Gallery, KeyInput, Target};

/// Filterable image gallery with a keyboard-accessible lightbox
#[derive(Parser, Debug)]
#[command(name = "gallery-lightbox", version)]
struct Args {
    /// Gallery manifest (gallery.json) or a directory of category folders
    path: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Close the lightbox when the filter changes while it is open
    #[arg(long)]
    close_on_filter_change: bool,

    /// Thumbnail edge length in logical pixels
    #[arg(long)]
    thumbnail_size: Option<f32>,

    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            gallery_path: self.path.clone(),
            thumbnail_size: self.thumbnail_size,
            close_on_filter_change: self.close_on_filter_change,
            theme: self.theme,
        }
    }
}

/// Main application state
struct GalleryApp {
    /// The wired gallery document
    gallery: Gallery,
    settings: Settings,
    /// Status message to display to the user
    status: String,
    /// Last grid scroll position, restored when the lightbox releases the page
    grid_offset: AbsoluteOffset,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer activation of a filter control, item, lightbox control or the backdrop
    Pressed(Target),
    /// A key the gallery understands was pressed
    Key(KeyInput),
    /// User clicked the "Open Gallery" button
    OpenFolder,
    /// Background discovery finished
    GalleryLoaded(Result<Document, String>),
    /// The thumbnail grid was scrolled
    GridScrolled(AbsoluteOffset),
}

impl GalleryApp {
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let gallery = Gallery::wire(Document::default(), settings.gallery_options());

        let (status, task) = match settings.gallery_path.clone() {
            Some(path) => (
                format!("Loading {}...", path.display()),
                Task::perform(discovery::load(path), Message::GalleryLoaded),
            ),
            None => (
                "Open a gallery folder to begin.".to_string(),
                Task::none(),
            ),
        };

        (
            GalleryApp {
                gallery,
                settings,
                status,
                grid_offset: AbsoluteOffset::default(),
            },
            task,
        )
    }

    fn title(&self) -> String {
        match self.gallery.lightbox().session() {
            Some(session) => format!(
                "Gallery - image {} of {}",
                session.position(self.gallery.filter().state()),
                self.gallery.filter().state().len()
            ),
            None => "Gallery".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pressed(target) => {
                let was_locked = self.gallery.page().is_scroll_locked();
                self.gallery.click(target);
                self.restore_grid_scroll(was_locked)
            }
            Message::Key(input) => {
                let was_locked = self.gallery.page().is_scroll_locked();
                self.gallery.handle_key(input);
                self.restore_grid_scroll(was_locked)
            }
            Message::GridScrolled(offset) => {
                self.grid_offset = offset;
                Task::none()
            }
            Message::OpenFolder => {
                let folder = FileDialog::new()
                    .set_title("Select Gallery Folder")
                    .pick_folder();

                match folder {
                    Some(folder_path) => {
                        self.status = format!("Loading {}...", folder_path.display());
                        Task::perform(discovery::load(folder_path), Message::GalleryLoaded)
                    }
                    None => Task::none(),
                }
            }
            Message::GalleryLoaded(Ok(document)) => {
                let count = document.items().len();
                // A new document replaces the gallery and starts from fresh state
                self.gallery = Gallery::wire(document, self.settings.gallery_options());
                self.grid_offset = AbsoluteOffset::default();
                self.status = format!("Ready. {} images in gallery.", count);
                Task::none()
            }
            Message::GalleryLoaded(Err(error)) => {
                warn!(%error, "failed to load gallery");
                self.status = format!("Could not load gallery: {}", error);
                Task::none()
            }
        }
    }

    /// Whether an input just released the scroll lock
    fn scroll_released(&self, was_locked: bool) -> bool {
        was_locked && !self.gallery.page().is_scroll_locked()
    }

    /// The grid is rebuilt as a scrollable when the lock lifts; put it back
    /// where the user left it
    fn restore_grid_scroll(&self, was_locked: bool) -> Task<Message> {
        if self.scroll_released(was_locked) {
            scrollable::scroll_to(ui::gallery::grid_id(), self.grid_offset)
        } else {
            Task::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        ui::view(&self.gallery, self.settings.thumbnail_size, &self.status)
    }

    /// Keyboard input is routed through the gallery, which decides what it consumes
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                KeyInput::from_iced(&key, modifiers).map(Message::Key)
            }
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())
        .unwrap_or_else(|error| {
            warn!(%error, "failed to load config, using defaults");
            Settings::default()
        })
        .with_overrides(&args.overrides());

    if args.print_config {
        match settings.to_toml() {
            Ok(text) => print!("{}", text),
            Err(error) => warn!(%error, "failed to render config"),
        }
        return Ok(());
    }

    info!(gallery = ?settings.gallery_path, "starting gallery viewer");

    iced::application(GalleryApp::title, GalleryApp::update, GalleryApp::view)
        .subscription(GalleryApp::subscription)
        .theme(GalleryApp::theme)
        .centered()
        .run_with(move || GalleryApp::new(settings))
}
