// SPDX-License-Identifier: MPL-2.0
//! Viewer host: manifest loading, page surfaces and navigation.

use super::canvas::Pointer;
use super::{lazy_load, navbar, progress, show, view, Effect, Message};
use crate::binding::{Ancestry, Owner};
use crate::config::ViewerConfig;
use crate::config::{DEFAULT_ICON_VISIBLE, DEFAULT_LIST_VISIBLE};
use crate::engine::{DirectionHint, PageIndex, RenderEngine};
use crate::i18n::fluent::I18n;
use crate::ids::ViewerId;
use crate::net::HttpClient;
use crate::task::{Deferred, Lifetime};
use crate::ui::component::Container;
use crate::ui::surface::{IconItem, IconSurface, ListItem, ListSurface, Selection};
use futures_util::FutureExt;
use iced::Element;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Initialized,
    Disposed,
}

pub struct ViewerHost {
    id: ViewerId,
    manifest: Option<String>,
    engine: Box<dyn RenderEngine>,
    http: HttpClient,
    lifetime: Lifetime,
    lifecycle: Lifecycle,
    label: Option<String>,
    list: ListSurface,
    icons: IconSurface,
    list_highlighted: bool,
    icons_highlighted: bool,
    menu_open: bool,
    progress: progress::State,
    lazy_scheduled: bool,
}

impl fmt::Debug for ViewerHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerHost")
            .field("id", &self.id)
            .field("manifest", &self.manifest)
            .field("lifecycle", &self.lifecycle)
            .field("label", &self.label)
            .field("pages", &self.list.len())
            .field("progress", &self.progress.pending())
            .finish_non_exhaustive()
    }
}

impl ViewerHost {
    /// Builds a host around `engine`. Nothing happens until [`Self::initialize`].
    #[must_use]
    pub fn new(
        id: ViewerId,
        manifest: Option<String>,
        engine: Box<dyn RenderEngine>,
        http: HttpClient,
    ) -> Self {
        let ancestry = Ancestry::root(Owner::host(id));
        Self {
            id,
            manifest,
            engine,
            http,
            lifetime: Lifetime::new(),
            lifecycle: Lifecycle::Created,
            label: None,
            list: ListSurface::new(&ancestry, DEFAULT_LIST_VISIBLE),
            icons: IconSurface::new(&ancestry, DEFAULT_ICON_VISIBLE),
            list_highlighted: DEFAULT_LIST_VISIBLE,
            icons_highlighted: DEFAULT_ICON_VISIBLE,
            menu_open: false,
            progress: progress::State::default(),
            lazy_scheduled: false,
        }
    }

    /// Applies the configured initial visibility of both surfaces.
    #[must_use]
    pub fn with_viewer_config(mut self, config: &ViewerConfig) -> Self {
        let list_visible = config.list_visible.unwrap_or(DEFAULT_LIST_VISIBLE);
        let icons_visible = config.icon_visible.unwrap_or(DEFAULT_ICON_VISIBLE);
        if self.list.is_visible() != list_visible {
            self.list_highlighted = self.list.toggle();
        }
        if self.icons.is_visible() != icons_visible {
            self.icons_highlighted = self.icons.toggle();
        }
        self
    }

    /// Starts fetching the manifest, if there is one. Idempotent.
    pub fn initialize(&mut self) -> Deferred<Message> {
        if self.lifecycle != Lifecycle::Created {
            return Deferred::none();
        }
        self.lifecycle = Lifecycle::Initialized;

        let Some(url) = self.manifest.clone() else {
            tracing::debug!(viewer = %self.id, "no manifest to load");
            return Deferred::none();
        };

        tracing::debug!(viewer = %self.id, %url, "fetching manifest");
        let http = self.http.clone();
        let fetch = async move { http.get_text(&url).await };
        Deferred::optional(
            self.lifetime
                .guard(fetch)
                .map(|fetched| fetched.map(Message::ManifestFetched)),
        )
    }

    /// Cancels pending work and releases the engine. Idempotent.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.lifecycle = Lifecycle::Disposed;
        self.lifetime.end();
        self.progress.reset();
        self.engine.free();
        tracing::debug!(viewer = %self.id, "viewer disposed");
    }

    pub fn update(&mut self, message: Message) -> (Effect, Deferred<Message>) {
        if self.lifecycle == Lifecycle::Disposed {
            tracing::trace!(viewer = %self.id, ?message, "message for disposed viewer");
            return (Effect::None, Deferred::none());
        }

        match message {
            Message::ManifestFetched(Ok(text)) => self.accept_manifest(&text),
            Message::ManifestFetched(Err(err)) => {
                tracing::warn!(viewer = %self.id, manifest = ?self.manifest, error = %err, "manifest fetch failed");
                (Effect::Remove, Deferred::none())
            }
            Message::StartLazyLoad => {
                if self.lazy_scheduled {
                    return (Effect::None, Deferred::none());
                }
                self.lazy_scheduled = true;
                (
                    Effect::None,
                    lazy_load::schedule(self.engine.as_mut(), &self.lifetime),
                )
            }
            Message::AssetLoaded(index) => {
                if let Some(item) = self.list.child_mut(index) {
                    item.finish_loading();
                }
                if let Some(item) = self.icons.child_mut(index) {
                    item.finish_loading();
                }
                (Effect::None, Deferred::none())
            }
            Message::AssetReady(index) => {
                self.progress.handle(progress::Message::WaitEnded);
                (Effect::None, self.show(index))
            }
            Message::AssetLost { index, error } => {
                self.progress.handle(progress::Message::WaitEnded);
                tracing::warn!(viewer = %self.id, index, %error, "page will not be shown");
                (Effect::None, Deferred::none())
            }
            Message::ListSelected(selection) => (Effect::None, self.select_from_list(&selection)),
            Message::IconSelected(selection) => (Effect::None, self.select_from_icons(&selection)),
            Message::Pointer(pointer) => (Effect::None, self.pointer(pointer)),
            Message::Nav(message) => match navbar::update(message, &mut self.menu_open) {
                navbar::Event::None => (Effect::None, Deferred::none()),
                navbar::Event::Close => {
                    tracing::debug!(viewer = %self.id, "viewer closed from menu");
                    (Effect::Remove, Deferred::none())
                }
                navbar::Event::ToggleList => {
                    self.list_highlighted = self.list.toggle();
                    (Effect::None, Deferred::none())
                }
                navbar::Event::ToggleIcons => {
                    self.icons_highlighted = self.icons.toggle();
                    (Effect::None, Deferred::none())
                }
            },
            Message::Tick => {
                if let progress::Effect::Stalled(waited) = self.progress.handle(progress::Message::Tick) {
                    tracing::warn!(viewer = %self.id, ?waited, "page still waiting for its asset");
                }
                (Effect::None, Deferred::none())
            }
        }
    }

    fn accept_manifest(&mut self, text: &str) -> (Effect, Deferred<Message>) {
        if !self.engine.set_manifest(text) {
            tracing::warn!(viewer = %self.id, manifest = ?self.manifest, "manifest rejected by engine");
            return (Effect::Remove, Deferred::none());
        }

        let label = self.engine.label();
        tracing::debug!(viewer = %self.id, %label, pages = self.engine.size(), "manifest accepted");
        self.label = Some(label);
        self.populate();

        let first = self.show(0);
        (
            Effect::None,
            Deferred::batch([first, Deferred::done(Message::StartLazyLoad)]),
        )
    }

    /// One list row and one icon tile per asset, labelled with the page number.
    fn populate(&mut self) {
        for index in 0..self.engine.size() {
            let src = self.engine.asset_src(index).unwrap_or_default();
            let label = (index + 1).to_string();
            self.list.append(ListItem::new(src.clone(), label.clone()).into());
            self.icons.append(IconItem::new(src, label).into());
        }
    }

    /// Shows `index`, or waits for its asset and retries.
    pub fn show(&mut self, index: PageIndex) -> Deferred<Message> {
        match show::attempt(self.engine.as_mut(), &mut self.list, index) {
            show::Outcome::Shown | show::Outcome::Dropped => Deferred::none(),
            show::Outcome::Waiting(handle) => {
                self.progress.handle(progress::Message::WaitStarted);
                show::await_asset(handle, &self.lifetime)
            }
        }
    }

    pub fn next(&mut self) -> Deferred<Message> {
        self.show(self.engine.index().saturating_add(1))
    }

    pub fn prev(&mut self) -> Deferred<Message> {
        self.show(self.engine.index().saturating_sub(1))
    }

    fn resolve(&self, selection: &Selection) -> Option<PageIndex> {
        let index = self.engine.index_by_src(&selection.src);
        if index.is_none() {
            tracing::debug!(viewer = %self.id, src = %selection.src, "selected asset unknown to engine");
        }
        index.and_then(|index| PageIndex::try_from(index).ok())
    }

    fn select_from_list(&mut self, selection: &Selection) -> Deferred<Message> {
        let Some(index) = self.resolve(selection) else {
            return Deferred::none();
        };
        let work = self.show(index);
        self.list.select(selection.position);
        work
    }

    fn select_from_icons(&mut self, selection: &Selection) -> Deferred<Message> {
        let Some(index) = self.resolve(selection) else {
            return Deferred::none();
        };
        let work = self.show(index);
        self.icons_highlighted = self.icons.toggle();
        work
    }

    fn pointer(&mut self, pointer: Pointer) -> Deferred<Message> {
        match pointer {
            Pointer::Down(event) => self.engine.mouse_down(event),
            Pointer::Move(event) => self.engine.mouse_move(event),
            Pointer::Up { event, click } => {
                self.engine.mouse_up(event);
                if click {
                    return match self.engine.click(event) {
                        Some(DirectionHint::TowardStart) => self.next(),
                        Some(DirectionHint::TowardEnd) => self.prev(),
                        None => Deferred::none(),
                    };
                }
            }
        }
        Deferred::none()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(self, i18n)
    }

    #[must_use]
    pub fn id(&self) -> ViewerId {
        self.id
    }

    #[must_use]
    pub fn manifest(&self) -> Option<&str> {
        self.manifest.as_deref()
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn engine(&self) -> &dyn RenderEngine {
        self.engine.as_ref()
    }

    #[must_use]
    pub fn list(&self) -> &ListSurface {
        &self.list
    }

    #[must_use]
    pub fn icons(&self) -> &IconSurface {
        &self.icons
    }

    #[must_use]
    pub fn list_highlighted(&self) -> bool {
        self.list_highlighted
    }

    #[must_use]
    pub fn icons_highlighted(&self) -> bool {
        self.icons_highlighted
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn progress(&self) -> &progress::State {
        &self.progress
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.lifecycle == Lifecycle::Disposed
    }
}
