use alloc::sync::Arc;
use core::fmt;

use aquarius::{
    DataSourceObserver, DifferStrategy, ItemVariant, LookupKey, RenderRegistry, Result, ViewType,
    check_position,
};

use crate::Differ;

/// Derives a stable id from an item, for presentation layers that track items by id.
pub type ItemIdSelector<T> = Arc<dyn Fn(&T) -> u64 + Send + Sync>;

/// A list adapter facade: a [`Differ`] for structural updates plus a [`RenderRegistry`] for
/// per-position dispatch.
///
/// A presentation layer asks it how many items there are, which view type each one has and
/// which renderer and click handler serve that view type. Mutations go through
/// [`Self::submit_list`], [`Self::remove_at_position`] and [`Self::swap`], which notify the
/// observer before returning.
pub struct RenderAdapter<T: ItemVariant, S, O, R, C = ()> {
    differ: Differ<T, S, O>,
    registry: RenderRegistry<T::Kind, R, C>,
    item_id: ItemIdSelector<T>,
}

impl<T, S, O, R, C> RenderAdapter<T, S, O, R, C>
where
    T: ItemVariant,
    T::Kind: LookupKey + Clone + fmt::Debug,
    S: DifferStrategy<T>,
    O: DataSourceObserver<S::Payload>,
{
    pub fn new(
        strategy: S,
        observer: O,
        registry: RenderRegistry<T::Kind, R, C>,
        item_id: impl Fn(&T) -> u64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            differ: Differ::new(strategy, observer),
            registry,
            item_id: Arc::new(item_id),
        }
    }

    pub fn item_count(&self) -> usize {
        self.differ.len()
    }

    pub fn item(&self, position: usize) -> Result<&T> {
        check_position(position, self.differ.len())?;
        Ok(&self.differ.current_list()[position])
    }

    pub fn item_id(&self, position: usize) -> Result<u64> {
        self.item(position).map(|item| (self.item_id)(item))
    }

    pub fn item_view_type(&self, position: usize) -> Result<ViewType> {
        let item = self.item(position)?;
        self.registry.view_type_of(item)
    }

    /// The renderer registered for the view type of the item at `position`.
    pub fn renderer_at(&self, position: usize) -> Result<&R> {
        let item = self.item(position)?;
        self.registry.renderer_for(item)
    }

    /// The click handler for the item at `position`, if its view type has one.
    pub fn clicker_at(&self, position: usize) -> Result<Option<&C>> {
        let item = self.item(position)?;
        self.registry.clicker_for(item)
    }

    pub fn submit_list(&mut self, items: impl Into<Arc<[T]>>) {
        self.differ.submit_list(items);
    }

    pub fn remove_at_position(&mut self, position: usize) -> Result<T>
    where
        T: Clone,
    {
        self.differ.remove_at_position(position)
    }

    pub fn swap(&mut self, from: usize, to: usize) -> Result<()>
    where
        T: Clone,
    {
        self.differ.swap(from, to)
    }

    pub fn differ(&self) -> &Differ<T, S, O> {
        &self.differ
    }

    pub fn registry(&self) -> &RenderRegistry<T::Kind, R, C> {
        &self.registry
    }

    pub fn observer_mut(&mut self) -> &mut O {
        self.differ.observer_mut()
    }
}

impl<T, S, O, R, C> fmt::Debug for RenderAdapter<T, S, O, R, C>
where
    T: ItemVariant,
    T::Kind: fmt::Debug,
    S: fmt::Debug,
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderAdapter")
            .field("differ", &self.differ)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
