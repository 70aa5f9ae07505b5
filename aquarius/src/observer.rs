use alloc::vec::Vec;

use crate::{EditScript, Update};

/// Receives ordered structural notifications for a list.
///
/// Implementations must apply the callbacks in the order they arrive: positions are relative
/// to the cumulative effect of earlier callbacks of the same dispatch.
pub trait DataSourceObserver<P = ()> {
    fn on_range_inserted(&mut self, position: usize, count: usize);
    fn on_range_removed(&mut self, position: usize, count: usize);
    fn on_moved(&mut self, from: usize, to: usize);
    fn on_range_changed(&mut self, position: usize, count: usize, payload: Option<&P>);
}

impl<P, O: DataSourceObserver<P> + ?Sized> DataSourceObserver<P> for &mut O {
    fn on_range_inserted(&mut self, position: usize, count: usize) {
        (**self).on_range_inserted(position, count);
    }

    fn on_range_removed(&mut self, position: usize, count: usize) {
        (**self).on_range_removed(position, count);
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        (**self).on_moved(from, to);
    }

    fn on_range_changed(&mut self, position: usize, count: usize, payload: Option<&P>) {
        (**self).on_range_changed(position, count, payload);
    }
}

impl<P> EditScript<P> {
    /// Forwards every update to `observer`, one callback per update, in script order.
    pub fn dispatch_updates_to<O>(&self, observer: &mut O)
    where
        O: DataSourceObserver<P> + ?Sized,
    {
        atrace!(updates = self.len(), "dispatch_updates_to");
        for update in self {
            match update {
                Update::Inserted { position, count } => {
                    observer.on_range_inserted(*position, *count);
                }
                Update::Removed { position, count } => {
                    observer.on_range_removed(*position, *count);
                }
                Update::Moved { from, to } => observer.on_moved(*from, *to),
                Update::Changed {
                    position,
                    count,
                    payload,
                } => observer.on_range_changed(*position, *count, payload.as_ref()),
            }
        }
    }
}

/// An observer that records every notification it receives.
///
/// Useful for adapters that replay notifications later, and for tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateLog<P = ()> {
    updates: Vec<Update<P>>,
}

impl<P> Default for UpdateLog<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> UpdateLog<P> {
    pub const fn new() -> Self {
        Self {
            updates: Vec::new(),
        }
    }

    pub fn updates(&self) -> &[Update<P>] {
        &self.updates
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn clear(&mut self) {
        self.updates.clear();
    }

    /// Takes the recorded updates, leaving the log empty.
    pub fn take(&mut self) -> EditScript<P> {
        EditScript::from_updates(core::mem::take(&mut self.updates))
    }
}

impl<P: Clone> DataSourceObserver<P> for UpdateLog<P> {
    fn on_range_inserted(&mut self, position: usize, count: usize) {
        self.updates.push(Update::Inserted { position, count });
    }

    fn on_range_removed(&mut self, position: usize, count: usize) {
        self.updates.push(Update::Removed { position, count });
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        self.updates.push(Update::Moved { from, to });
    }

    fn on_range_changed(&mut self, position: usize, count: usize, payload: Option<&P>) {
        self.updates.push(Update::Changed {
            position,
            count,
            payload: payload.cloned(),
        });
    }
}
