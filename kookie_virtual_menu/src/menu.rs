// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The virtualized menu engine.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    ConfigError, Highlight, ItemEvent, ItemHandlers, ItemProps, ItemRenderer, ItemSize,
    ItemSizes, ItemStyle, ItemView, Key, KeyOutcome, LabelAccessor, MenuEnvironment, RootProps,
    ScrollAlign, SizeModel, VirtualItem, VisibleRange, Virtualizer, WrapMode, item_id,
};

static NEXT_MENU_ID: AtomicUsize = AtomicUsize::new(0);

fn next_menu_id() -> String {
    format!("kookie-vm-{}", NEXT_MENU_ID.fetch_add(1, Ordering::Relaxed))
}

/// Tunables for a [`VirtualMenu`].
#[derive(Debug)]
pub struct VirtualMenuOptions {
    /// Item sizing. `None` takes the extent implied by the [`MenuEnvironment`].
    pub estimated_item_size: Option<ItemSize>,
    /// Items realized beyond each edge of the viewport.
    pub overscan: usize,
    /// Accessible label for the container.
    pub aria_label: Option<String>,
    /// Container id. `None` generates a unique one.
    pub id: Option<String>,
}

impl Default for VirtualMenuOptions {
    fn default() -> Self {
        Self {
            estimated_item_size: None,
            overscan: 5,
            aria_label: None,
            id: None,
        }
    }
}

type SelectCallback<T> = Box<dyn FnMut(&T, usize)>;

/// Configures and validates a [`VirtualMenu`].
///
/// Exactly one of [`label`](Self::label) or [`render_item`](Self::render_item)
/// must be supplied.
pub struct VirtualMenuBuilder<T, N> {
    label: Option<LabelAccessor<T>>,
    custom: Option<Box<dyn Fn(&T, &ItemProps) -> N>>,
    on_select: Option<SelectCallback<T>>,
    options: VirtualMenuOptions,
    environment: MenuEnvironment,
    viewport_extent: f32,
}

impl<T, N> Default for VirtualMenuBuilder<T, N> {
    fn default() -> Self {
        Self {
            label: None,
            custom: None,
            on_select: None,
            options: VirtualMenuOptions::default(),
            environment: MenuEnvironment::root(),
            viewport_extent: 0.0,
        }
    }
}

impl<T, N> fmt::Debug for VirtualMenuBuilder<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualMenuBuilder")
            .field("label", &self.label)
            .field("custom", &self.custom.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("options", &self.options)
            .field("environment", &self.environment)
            .field("viewport_extent", &self.viewport_extent)
            .finish()
    }
}

impl<T, N> VirtualMenuBuilder<T, N> {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders items as plain labels.
    #[must_use]
    pub fn label(mut self, accessor: LabelAccessor<T>) -> Self {
        self.label = Some(accessor);
        self
    }

    /// Renders items as labels borrowed from a field.
    #[must_use]
    pub fn label_field(self, field: fn(&T) -> &str) -> Self {
        self.label(LabelAccessor::Field(field))
    }

    /// Renders items with a custom renderer.
    #[must_use]
    pub fn render_item(mut self, render: impl Fn(&T, &ItemProps) -> N + 'static) -> Self {
        self.custom = Some(Box::new(render));
        self
    }

    /// Called with the item and its index when an item is selected.
    #[must_use]
    pub fn on_select(mut self, on_select: impl FnMut(&T, usize) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Replaces the options.
    #[must_use]
    pub fn options(mut self, options: VirtualMenuOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the environment established by an enclosing menu.
    #[must_use]
    pub fn environment(mut self, environment: MenuEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Initial extent of the scroll container.
    #[must_use]
    pub fn viewport_extent(mut self, extent: f32) -> Self {
        self.viewport_extent = extent;
        self
    }

    /// Validates the configuration and creates an empty menu.
    pub fn build(self) -> Result<VirtualMenu<T, N>, ConfigError> {
        let renderer = match (self.label, self.custom) {
            (Some(accessor), None) => ItemRenderer::Label(accessor),
            (None, Some(render)) => ItemRenderer::Custom(render),
            (None, None) => {
                tracing::debug!("virtual menu rejected: no item renderer");
                return Err(ConfigError::MissingRenderer);
            }
            (Some(_), Some(_)) => {
                tracing::debug!("virtual menu rejected: both label and custom renderer");
                return Err(ConfigError::ConflictingRenderers);
            }
        };
        let VirtualMenuOptions {
            estimated_item_size,
            overscan,
            aria_label,
            id,
        } = self.options;
        let explicit_item_size = estimated_item_size.is_some();
        let item_size =
            estimated_item_size.unwrap_or_else(|| self.environment.default_item_size());
        let list = Virtualizer::new(item_size.build(0), self.viewport_extent, overscan);
        Ok(VirtualMenu {
            id: id.unwrap_or_else(next_menu_id),
            renderer,
            on_select: self.on_select,
            item_size,
            explicit_item_size,
            aria_label,
            environment: self.environment,
            highlight: Highlight::new(0),
            list,
        })
    }
}

/// One render pass: container props plus the realized items.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuView<N> {
    /// Props for the scroll container.
    pub root: RootProps,
    /// Realized items in index order.
    pub items: Vec<ItemView<N>>,
}

/// A windowed list of selectable items with menu keyboard semantics.
///
/// The item collection stays owned by the caller and is passed to every
/// operation that needs it; the menu only tracks its length. Operations that
/// take `items` first adapt to its current length, so a collection that
/// changed between calls is picked up without an explicit resync.
///
/// `N` is the host's node type produced by a custom item renderer.
pub struct VirtualMenu<T, N> {
    id: String,
    renderer: ItemRenderer<T, N>,
    on_select: Option<SelectCallback<T>>,
    item_size: ItemSize,
    explicit_item_size: bool,
    aria_label: Option<String>,
    environment: MenuEnvironment,
    highlight: Highlight,
    list: Virtualizer<SizeModel<f32>>,
}

impl<T, N> fmt::Debug for VirtualMenu<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualMenu")
            .field("id", &self.id)
            .field("renderer", &self.renderer)
            .field("item_size", &self.item_size)
            .field("aria_label", &self.aria_label)
            .field("environment", &self.environment)
            .field("highlight", &self.highlight)
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

impl<T, N> VirtualMenu<T, N> {
    /// Starts configuring a menu.
    #[must_use]
    pub fn builder() -> VirtualMenuBuilder<T, N> {
        VirtualMenuBuilder::new()
    }

    /// Container id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of items as of the last sync.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.model().len()
    }

    /// Returns `true` if the menu had no items as of the last sync.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The environment the menu is mounted in.
    #[must_use]
    pub const fn environment(&self) -> MenuEnvironment {
        self.environment
    }

    /// Moves the menu to a different environment.
    ///
    /// Unless the caller sized items explicitly, the item extent follows the
    /// new environment and measured sizes are discarded.
    pub fn set_environment(&mut self, environment: MenuEnvironment) {
        if environment == self.environment {
            return;
        }
        let extent_changed =
            environment.default_item_extent() != self.environment.default_item_extent();
        self.environment = environment;
        if !self.explicit_item_size && extent_changed {
            self.item_size = environment.default_item_size();
            let len = self.len();
            *self.list.model_mut() = self.item_size.build(len);
        }
    }

    /// Adapts to a collection of `len` items.
    ///
    /// The highlight is clamped into the new range and the scroll offset into
    /// the new content extent.
    pub fn sync_len(&mut self, len: usize) {
        if self.list.model().len() != len {
            let strategy = &self.item_size;
            self.list.model_mut().resize(len, strategy);
            self.list.clamp_scroll_to_content();
        }
        self.highlight.set_len(len);
    }

    /// The highlighted index.
    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlight.index()
    }

    /// Highlights `index` without scrolling. Out-of-range indices are ignored.
    ///
    /// The range is the length from the last [`sync_len`](Self::sync_len),
    /// [`render`](Self::render) or event call; a fresh menu has no items yet.
    pub fn set_highlighted(&mut self, index: usize) -> bool {
        self.highlight.set(index)
    }

    /// Current scroll offset of the container.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.list.scroll_offset()
    }

    /// Records a scroll of the container.
    pub fn on_scroll(&mut self, offset: f32) {
        self.list.set_scroll_offset(offset);
    }

    /// Records a resize of the container.
    pub fn set_viewport_extent(&mut self, extent: f32) {
        self.list.set_viewport_extent(extent);
    }

    /// Records the rendered size of item `index`, replacing its estimate.
    pub fn measure(&mut self, index: usize, size: f32) {
        self.list.model_mut().measure(index, size);
    }

    /// Scrolls item `index` into view and returns the offset to assign.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> f32 {
        self.list.scroll_to_index(index, align)
    }

    /// The items to realize, overscan included.
    pub fn visible_range(&mut self) -> VisibleRange<f32> {
        self.list.visible_range()
    }

    /// Props for the scroll container.
    pub fn root_props(&mut self) -> RootProps {
        RootProps {
            id: self.id.clone(),
            role: self.environment.owns_menu_role().then_some("menu"),
            aria_label: self.aria_label.clone(),
            aria_activedescendant: self.highlight.index().map(|i| item_id(&self.id, i)),
            tab_index: 0,
            total_size: self.list.total_size(),
        }
    }

    /// Props for one realized item.
    #[must_use]
    pub fn item_props(&self, item: &VirtualItem<f32>) -> ItemProps {
        let is_highlighted = self.highlight.is(item.index);
        ItemProps {
            id: item_id(&self.id, item.index),
            index: item.index,
            is_highlighted,
            style: ItemStyle {
                height: item.size,
                translate_y: item.offset,
            },
            role: "menuitem",
            tab_index: if is_highlighted { 0 } else { -1 },
            aria_posinset: item.index + 1,
            aria_setsize: self.len(),
            handlers: ItemHandlers::new(item.index),
        }
    }

    /// Renders the container and the realized subset of `items`.
    pub fn render(&mut self, items: &[T]) -> MenuView<N> {
        self.sync_len(items.len());
        let realized = self.list.virtual_items();
        let views = realized
            .iter()
            .filter_map(|virtual_item| {
                let item = items.get(virtual_item.index)?;
                Some(self.renderer.render(item, self.item_props(virtual_item)))
            })
            .collect();
        MenuView {
            root: self.root_props(),
            items: views,
        }
    }

    /// Invokes the selection callback for item `index`.
    ///
    /// Returns `false` without calling back if `index` is out of range, which
    /// happens when an event raced a shrinking collection.
    pub fn select(&mut self, items: &[T], index: usize) -> bool {
        self.sync_len(items.len());
        let Some(item) = items.get(index) else {
            return false;
        };
        if let Some(on_select) = &mut self.on_select {
            on_select(item, index);
        }
        true
    }

    /// Applies a pointer event from a rendered item.
    ///
    /// Returns the selected index for clicks that selected an item.
    pub fn handle_item_event(&mut self, items: &[T], event: ItemEvent) -> Option<usize> {
        self.sync_len(items.len());
        match event {
            ItemEvent::PointerEnter(index) => {
                self.highlight.set(index);
                None
            }
            // The highlight persists until another item takes it.
            ItemEvent::PointerLeave(_) => None,
            ItemEvent::Click(index) => self.select(items, index).then_some(index),
        }
    }

    /// Applies a key press on the container.
    pub fn handle_key(&mut self, items: &[T], key: Key) -> KeyOutcome {
        self.sync_len(items.len());
        match key {
            Key::ArrowDown => {
                let next = self.highlight.next(WrapMode::Wrap);
                self.navigated(next, ScrollAlign::Auto)
            }
            Key::ArrowUp => {
                let prev = self.highlight.prev(WrapMode::Wrap);
                self.navigated(prev, ScrollAlign::Auto)
            }
            Key::Home => {
                let first = self.highlight.first();
                self.navigated(first, ScrollAlign::Start)
            }
            Key::End => {
                let last = self.highlight.last();
                self.navigated(last, ScrollAlign::End)
            }
            Key::Enter | Key::Space => {
                let selected = self
                    .highlight
                    .index()
                    .filter(|&index| self.select(items, index));
                KeyOutcome {
                    selected,
                    ..KeyOutcome::prevented()
                }
            }
            Key::Tab => KeyOutcome::prevented(),
            Key::Escape => KeyOutcome {
                release_focus: true,
                ..KeyOutcome::ignored()
            },
            Key::Other => KeyOutcome::ignored(),
        }
    }

    fn navigated(&mut self, highlighted: Option<usize>, align: ScrollAlign) -> KeyOutcome {
        KeyOutcome {
            highlighted,
            scroll_to: highlighted.map(|index| self.list.scroll_to_index(index, align)),
            ..KeyOutcome::prevented()
        }
    }
}
