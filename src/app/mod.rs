// SPDX-License-Identifier: MPL-2.0
//! Composition root: owns the search modal and every open viewer.
//!
//! The [`Workspace`] issues viewer ids, builds hosts through the embedder's
//! [`EngineFactory`], routes messages to the host they are addressed to and
//! disposes hosts that ask to be removed. It never runs I/O itself: `update`
//! returns [`Deferred`] work that [`run`] turns into iced tasks.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::engine::EngineFactory;
use crate::i18n::fluent::I18n;
use crate::ids::{IdGenerator, ViewerId};
use crate::net::HttpClient;
use crate::task::Deferred;
use crate::ui::search::{self, SearchModal};
use crate::ui::viewer::{self, ViewerHost};
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub struct Workspace {
    ids: IdGenerator,
    search: SearchModal,
    /// Open viewers in the order they were opened.
    viewers: Vec<ViewerHost>,
    factory: Box<dyn EngineFactory>,
    http: HttpClient,
    config: Config,
    i18n: I18n,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("viewers", &self.viewers)
            .field("search_open", &self.search.is_open())
            .field("i18n", &self.i18n)
            .finish_non_exhaustive()
    }
}

impl Workspace {
    pub fn new(factory: Box<dyn EngineFactory>, config: Config, i18n: I18n, http: HttpClient) -> Self {
        Self {
            ids: IdGenerator::new(),
            search: SearchModal::new(&config.search, http.clone()),
            viewers: Vec::new(),
            factory,
            http,
            config,
            i18n,
        }
    }

    /// Builds a host for `manifest_url`, starts it and appends it to the
    /// viewer list.
    pub fn open_viewer(&mut self, manifest_url: impl Into<String>) -> Deferred<Message> {
        let manifest_url = manifest_url.into();
        let id = self.ids.next_id();
        tracing::info!(viewer = %id, manifest = %manifest_url, "opening viewer");

        let mut host = ViewerHost::new(id, Some(manifest_url), self.factory.create(), self.http.clone())
            .with_viewer_config(&self.config.viewer);
        let work = host.initialize();
        self.viewers.push(host);
        route(id, work)
    }

    /// Disposes and drops the host. Returns `false` if it was already gone.
    pub fn remove_viewer(&mut self, id: ViewerId) -> bool {
        let Some(position) = self.position(id) else {
            return false;
        };
        let mut host = self.viewers.remove(position);
        host.dispose();
        tracing::info!(viewer = %id, "viewer removed");
        true
    }

    pub fn update(&mut self, message: Message) -> Deferred<Message> {
        match message {
            Message::Search(message) => {
                let (effect, work) = self.search.update(message);
                let mut work = work.map(Message::Search);
                if let search::Effect::OpenViewer { manifest_url } = effect {
                    work.extend(self.open_viewer(manifest_url));
                }
                work
            }
            Message::Viewer(id, message) => {
                let Some(position) = self.position(id) else {
                    tracing::trace!(viewer = %id, ?message, "dropping message for removed viewer");
                    return Deferred::none();
                };
                let (effect, work) = self.viewers[position].update(message);
                match effect {
                    viewer::Effect::None => route(id, work),
                    viewer::Effect::Remove => {
                        self.remove_viewer(id);
                        Deferred::none()
                    }
                }
            }
            Message::Tick(_) => {
                for host in self.viewers.iter_mut().filter(|host| host.progress().is_visible()) {
                    // Ticks only animate; they never produce work.
                    let _ = host.update(viewer::Message::Tick);
                }
                Deferred::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.overlay_visible())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn position(&self, id: ViewerId) -> Option<usize> {
        self.viewers.iter().position(|host| host.id() == id)
    }

    /// Whether any host currently shows its progress overlay.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.viewers.iter().any(|host| host.progress().is_visible())
    }

    #[must_use]
    pub fn viewers(&self) -> &[ViewerHost] {
        &self.viewers
    }

    #[must_use]
    pub fn viewer(&self, id: ViewerId) -> Option<&ViewerHost> {
        self.position(id).map(|position| &self.viewers[position])
    }

    #[must_use]
    pub fn search(&self) -> &SearchModal {
        &self.search
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}

/// Tags a host's deferred work with its id.
fn route(id: ViewerId, work: Deferred<viewer::Message>) -> Deferred<Message> {
    work.map(move |message| Message::Viewer(id, message))
}

/// Loads config and translations and opens the viewers named in `flags`.
fn boot(factory: Box<dyn EngineFactory>, flags: Flags) -> (Workspace, Task<Message>) {
    let (config, config_warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
    let i18n = I18n::new(flags.lang, &config);

    if let Some(key) = config_warning {
        tracing::warn!(message = %i18n.tr(&key), "using default settings");
    }

    let http = HttpClient::new(&config.search).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default HTTP client");
        HttpClient::default()
    });

    let mut workspace = Workspace::new(factory, config, i18n, http);
    let work = Deferred::batch(
        flags
            .manifests
            .into_iter()
            .map(|manifest| workspace.open_viewer(manifest))
            .collect::<Vec<_>>(),
    );
    (workspace, work.into_task())
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Launches the workspace as a standalone iced application.
///
/// Installs the default log subscriber unless the embedder already did.
pub fn run(factory: impl EngineFactory + 'static, flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    if let Err(err) = crate::logging::init(paths::default_log_file().as_deref()) {
        eprintln!("{err}");
    }

    // iced 0.14 requires an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some((Box::new(factory) as Box<dyn EngineFactory>, flags)));
    let boot_fn = move || {
        let (factory, flags) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        boot(factory, flags)
    };

    iced::application(boot_fn, Workspace::update_task, Workspace::view)
        .title(Workspace::title)
        .window(window_settings())
        .subscription(Workspace::subscription)
        .run()
}

impl Workspace {
    fn update_task(&mut self, message: Message) -> Task<Message> {
        self.update(message).into_task()
    }
}
