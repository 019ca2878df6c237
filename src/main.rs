use clap::Parser;
use iced::keyboard::{self, key};
use iced::widget::{button, column, row, scrollable, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use image_gallery::config::Settings;
use image_gallery::render::{GalleryView, Surface};
use image_gallery::state::gallery::{Action, Gallery};
use image_gallery::state::library::Library;
use image_gallery::state::lightbox::{ClickTarget, Lightbox};

mod ui;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "image-gallery", version, about = "A filterable image gallery with a lightbox viewer")]
struct Cli {
    /// Settings file (defaults to the per-user settings.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog to open: a JSON manifest or a folder of images
    catalog: Option<PathBuf>,
}

/// What the window currently shows, as last notified by the gallery
#[derive(Debug, Default)]
struct Frame {
    gallery: GalleryView,
    /// Source shown in the lightbox, None while closed
    lightbox: Option<String>,
    /// Whether the gallery behind the lightbox may scroll
    scroll_locked: bool,
}

impl Surface for Frame {
    fn render(&mut self, view: &GalleryView) {
        self.gallery = view.clone();
    }

    fn present_lightbox(&mut self, lightbox: &Lightbox) {
        self.lightbox = lightbox.active_src().map(str::to_string);
        self.scroll_locked = lightbox.scroll_locked();
    }
}

/// Main application state
struct ImageGallery {
    /// Filter engine, lightbox and catalog
    gallery: Gallery,
    /// Materialized view state read by `view`
    frame: Frame,
    settings: Settings,
    /// Raw contents of the search input, as typed
    search: String,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A category button was pressed
    CategorySelected(String),
    /// The search input changed
    SearchChanged(String),
    /// A gallery tile was clicked
    ImageSelected(String),
    /// The lightbox close button was pressed
    CloseLightbox,
    /// A click landed inside the lightbox overlay
    LightboxClicked(ClickTarget),
    /// Escape key
    EscapePressed,
    /// User clicked the "Open Folder" button
    OpenFolder,
}

impl ImageGallery {
    /// Create a new instance of the application
    fn new(settings: Settings, catalog: Option<PathBuf>, status: Option<String>) -> (Self, Task<Message>) {
        let (library, load_status) = match catalog.as_deref() {
            Some(path) => match Library::load(path) {
                Ok(library) if library.is_empty() => {
                    (library, format!("No images found in {}.", path.display()))
                }
                Ok(library) => {
                    let status = format!("Ready. {} images in catalog.", library.len());
                    (library, status)
                }
                Err(err) => {
                    tracing::error!("❌ {}", err);
                    (Library::default(), format!("Could not open catalog: {}", err))
                }
            },
            None => (Library::default(), "No catalog loaded. Open a folder to begin.".to_string()),
        };

        let gallery = Gallery::new(library, settings.categories.clone());
        let mut frame = Frame::default();
        gallery.attach(&mut frame);

        tracing::info!("🎨 Image Gallery initialized with {} images", gallery.library().len());

        (
            ImageGallery {
                gallery,
                frame,
                settings,
                search: String::new(),
                status: status.unwrap_or(load_status),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.settings.title.clone()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let action = match message {
            Message::CategorySelected(identifier) => Action::SelectCategory(identifier),
            Message::SearchChanged(raw) => {
                self.search = raw.clone();
                Action::Search(raw)
            }
            Message::ImageSelected(src) => Action::SelectImage(src),
            Message::CloseLightbox => Action::CloseLightbox,
            Message::LightboxClicked(target) => Action::LightboxClicked(target),
            Message::EscapePressed => Action::Escape,
            Message::OpenFolder => {
                self.open_folder();
                return Task::none();
            }
        };

        self.gallery.dispatch(action, &mut self.frame);
        Task::none()
    }

    /// Pick a folder and replace the catalog with its images
    fn open_folder(&mut self) {
        // Show the native folder picker dialog
        let Some(folder) = FileDialog::new()
            .set_title("Select Folder with Photos")
            .pick_folder()
        else {
            return;
        };

        match Library::scan_folder(&folder) {
            Ok(library) => {
                self.status = format!("Opened {}: {} images.", folder.display(), library.len());
                self.search.clear();
                self.gallery.replace_library(library, &mut self.frame);
            }
            Err(err) => {
                tracing::error!("❌ {}", err);
                self.status = format!("Could not open folder: {}", err);
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let active = self.gallery.filter_state().category.identifier();

        let header = column![
            text(&self.settings.title).size(32),
            ui::filters::search_bar(&self.search),
            ui::filters::category_bar(self.gallery.categories(), active),
            row![
                button("Open Folder…")
                    .on_press(Message::OpenFolder)
                    .padding(8),
                text(&self.status).size(14),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        ]
        .spacing(12);

        let grid = ui::grid::view(
            &self.frame.gallery,
            self.gallery.library(),
            self.settings.tile_width,
            self.settings.spacing,
        );

        let base = column![header, scrollable(grid).height(Length::Fill)]
            .spacing(16)
            .padding(24);

        match &self.frame.lightbox {
            Some(src) => ui::lightbox::view(
                base,
                self.gallery.library().resolve(src),
                self.frame.scroll_locked,
            ),
            None => base.into(),
        }
    }

    /// Escape is the only global shortcut
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|pressed, _modifiers| match pressed {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::EscapePressed),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("image_gallery=info")),
        )
        .init();

    let cli = Cli::parse();

    // A broken settings file should not keep the gallery from opening
    let (settings, status) = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => (settings, None),
        Err(err) => {
            tracing::error!("❌ {}", err);
            (Settings::default(), Some(format!("Using default settings: {}", err)))
        }
    };

    let catalog = cli.catalog.or_else(|| settings.catalog.clone());

    iced::application(ImageGallery::title, ImageGallery::update, ImageGallery::view)
        .subscription(ImageGallery::subscription)
        .theme(ImageGallery::theme)
        .centered()
        .run_with(move || ImageGallery::new(settings, catalog, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_locks_scroll_while_lightbox_open() {
        let mut frame = Frame::default();
        let mut lightbox = Lightbox::default();

        lightbox.open("a.jpg");
        frame.present_lightbox(&lightbox);
        assert_eq!(frame.lightbox.as_deref(), Some("a.jpg"));
        assert!(frame.scroll_locked);

        lightbox.close();
        frame.present_lightbox(&lightbox);
        assert_eq!(frame.lightbox, None);
        assert!(!frame.scroll_locked);
    }
}
