use alloc::format;
use alloc::vec::Vec;
use core::fmt;

use crate::ViewType;
use crate::error::{Error, Result};
use crate::key::{KeyMap, LookupKey};

/// Items that expose a fieldless variant tag.
///
/// This is the classification input for view type dispatch: two items with the same `kind`
/// always share a view type, whatever their field values.
///
/// ```
/// use aquarius::ItemVariant;
///
/// enum Row {
///     Header { title: String },
///     Message { id: u64, text: String },
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// enum RowKind {
///     Header,
///     Message,
/// }
///
/// impl ItemVariant for Row {
///     type Kind = RowKind;
///
///     fn kind(&self) -> RowKind {
///         match self {
///             Row::Header { .. } => RowKind::Header,
///             Row::Message { .. } => RowKind::Message,
///         }
///     }
/// }
/// ```
pub trait ItemVariant {
    type Kind;

    fn kind(&self) -> Self::Kind;
}

/// Maps item kinds to view types.
///
/// `create_view_type_for` derives the view type from scratch; `view_type_for` may answer from a
/// cache. Both must agree for the same kind.
pub trait ViewTypeSelector<K> {
    fn create_view_type_for(&self, kind: &K) -> Option<ViewType>;

    fn view_type_for(&self, kind: &K) -> Option<ViewType> {
        self.create_view_type_for(kind)
    }
}

/// Assigns view types to kinds in registration order, starting at `0`.
#[derive(Clone)]
pub struct KindViewTypeSelector<K> {
    kinds: Vec<K>,
    cache: KeyMap<K, ViewType>,
}

impl<K: LookupKey + Clone> KindViewTypeSelector<K> {
    pub fn new() -> Self {
        Self {
            kinds: Vec::new(),
            cache: KeyMap::default(),
        }
    }

    /// Registers `kind` and returns its view type. Registering a kind twice returns the view
    /// type assigned the first time.
    pub fn register(&mut self, kind: K) -> ViewType {
        if let Some(view_type) = self.cache.get(&kind) {
            return *view_type;
        }
        let view_type = ViewType(self.kinds.len() as u32);
        self.kinds.push(kind.clone());
        self.cache.insert(kind, view_type);
        view_type
    }

    pub fn kinds(&self) -> &[K] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl<K: LookupKey + Clone> Default for KindViewTypeSelector<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: LookupKey> ViewTypeSelector<K> for KindViewTypeSelector<K> {
    fn create_view_type_for(&self, kind: &K) -> Option<ViewType> {
        self.kinds
            .iter()
            .position(|k| k == kind)
            .map(|index| ViewType(index as u32))
    }

    fn view_type_for(&self, kind: &K) -> Option<ViewType> {
        self.cache.get(kind).copied()
    }
}

impl<K: fmt::Debug> fmt::Debug for KindViewTypeSelector<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindViewTypeSelector")
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}

/// The view type dispatch table: kind → view type → renderer (and optional click handler).
///
/// Renderers and click handlers are caller-owned values keyed by the same view type. The table
/// is immutable once built, so it can be shared between readers.
///
/// A view type without a renderer is a configuration error reported by [`Self::renderer`] at
/// dispatch time.
pub struct RenderRegistry<K, R, C = ()> {
    selector: KindViewTypeSelector<K>,
    renderers: KeyMap<ViewType, R>,
    clickers: KeyMap<ViewType, C>,
}

impl<K, R, C> RenderRegistry<K, R, C>
where
    K: LookupKey + Clone + fmt::Debug,
{
    pub fn builder() -> RenderRegistryBuilder<K, R, C> {
        RenderRegistryBuilder {
            registry: Self {
                selector: KindViewTypeSelector::new(),
                renderers: KeyMap::default(),
                clickers: KeyMap::default(),
            },
        }
    }

    pub fn selector(&self) -> &KindViewTypeSelector<K> {
        &self.selector
    }

    /// Derives the view type of `item` from its kind.
    pub fn classify<T>(&self, item: &T) -> Result<ViewType>
    where
        T: ItemVariant<Kind = K> + ?Sized,
    {
        let kind = item.kind();
        self.selector
            .create_view_type_for(&kind)
            .ok_or_else(|| unregistered(&kind))
    }

    /// Looks up the cached view type of `item`.
    pub fn view_type_of<T>(&self, item: &T) -> Result<ViewType>
    where
        T: ItemVariant<Kind = K> + ?Sized,
    {
        let kind = item.kind();
        self.selector
            .view_type_for(&kind)
            .ok_or_else(|| unregistered(&kind))
    }

    pub fn renderer(&self, view_type: ViewType) -> Result<&R> {
        self.renderers.get(&view_type).ok_or_else(|| {
            awarn!(view_type = view_type.get(), "no renderer for view type");
            Error::MissingRenderer(view_type)
        })
    }

    pub fn clicker(&self, view_type: ViewType) -> Option<&C> {
        self.clickers.get(&view_type)
    }

    pub fn renderer_for<T>(&self, item: &T) -> Result<&R>
    where
        T: ItemVariant<Kind = K> + ?Sized,
    {
        let view_type = self.view_type_of(item)?;
        self.renderer(view_type)
    }

    pub fn clicker_for<T>(&self, item: &T) -> Result<Option<&C>>
    where
        T: ItemVariant<Kind = K> + ?Sized,
    {
        let view_type = self.view_type_of(item)?;
        Ok(self.clicker(view_type))
    }
}

fn unregistered<K: fmt::Debug>(kind: &K) -> Error {
    awarn!(kind = ?kind, "item kind has no view type");
    Error::UnregisteredKind(format!("{kind:?}"))
}

impl<K: fmt::Debug, R, C> fmt::Debug for RenderRegistry<K, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderRegistry")
            .field("selector", &self.selector)
            .field("renderers", &self.renderers.len())
            .field("clickers", &self.clickers.len())
            .finish()
    }
}

/// Builds a [`RenderRegistry`].
///
/// Registering a renderer or click handler for a kind also assigns its view type.
pub struct RenderRegistryBuilder<K, R, C = ()> {
    registry: RenderRegistry<K, R, C>,
}

impl<K, R, C> RenderRegistryBuilder<K, R, C>
where
    K: LookupKey + Clone + fmt::Debug,
{
    /// Assigns a view type to `kind` without attaching anything to it.
    pub fn view_type(mut self, kind: K) -> Self {
        self.registry.selector.register(kind);
        self
    }

    pub fn renderer(mut self, kind: K, renderer: R) -> Self {
        let view_type = self.registry.selector.register(kind);
        if self.registry.renderers.insert(view_type, renderer).is_some() {
            awarn!(view_type = view_type.get(), "renderer replaced");
        }
        self
    }

    pub fn clicker(mut self, kind: K, clicker: C) -> Self {
        let view_type = self.registry.selector.register(kind);
        if self.registry.clickers.insert(view_type, clicker).is_some() {
            awarn!(view_type = view_type.get(), "click handler replaced");
        }
        self
    }

    pub fn build(self) -> RenderRegistry<K, R, C> {
        let registry = self.registry;
        adebug!(
            view_types = registry.selector.len(),
            renderers = registry.renderers.len(),
            clickers = registry.clickers.len(),
            "RenderRegistry::build"
        );
        registry
    }
}

impl<K: fmt::Debug, R, C> fmt::Debug for RenderRegistryBuilder<K, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderRegistryBuilder")
            .field("registry", &self.registry)
            .finish()
    }
}
