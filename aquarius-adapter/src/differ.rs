use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use aquarius::{DataSourceObserver, DifferStrategy, EditScript, Result, check_position};

/// Owns the current list snapshot and keeps an observer in sync with it.
///
/// Every mutation computes an [`EditScript`] against the snapshot that was current before the
/// call, publishes the new snapshot, then forwards the script to the observer. Snapshots are
/// immutable `Arc<[T]>`s: a reader holding [`Self::snapshot`] keeps seeing the list as it was.
///
/// All entry points take `&mut self`; the differ is not reentrant.
pub struct Differ<T, S, O> {
    items: Arc<[T]>,
    strategy: S,
    observer: O,
}

impl<T, S, O> Differ<T, S, O>
where
    S: DifferStrategy<T>,
    O: DataSourceObserver<S::Payload>,
{
    /// Creates a differ with an empty list.
    pub fn new(strategy: S, observer: O) -> Self {
        Self {
            items: Arc::from(Vec::new()),
            strategy,
            observer,
        }
    }

    /// Replaces the list with `items`.
    ///
    /// The script is computed before the snapshot is replaced and dispatched after.
    pub fn submit_list(&mut self, items: impl Into<Arc<[T]>>) {
        let next: Arc<[T]> = items.into();
        let script = self.strategy.calculate_diff(&self.items, &next);
        adebug!(
            old_len = self.items.len(),
            new_len = next.len(),
            updates = script.len(),
            "submit_list"
        );
        self.publish(next, script);
    }

    /// Removes the item at `position` and returns it.
    ///
    /// Fails with [`aquarius::Error::OutOfRange`] when `position >= len`; the list and the
    /// observer are untouched in that case.
    pub fn remove_at_position(&mut self, position: usize) -> Result<T>
    where
        T: Clone,
    {
        check_position(position, self.items.len()).inspect_err(|_err| {
            awarn!(position, len = self.items.len(), "remove_at_position rejected");
        })?;

        let removed = self.items[position].clone();
        let mut next = Vec::with_capacity(self.items.len() - 1);
        next.extend_from_slice(&self.items[..position]);
        next.extend_from_slice(&self.items[position + 1..]);

        let script = self.strategy.remove_at_position(position);
        adebug!(position, "remove_at_position");
        self.publish(next.into(), script);
        Ok(removed)
    }

    /// Exchanges the items at `from` and `to`.
    ///
    /// Both positions are validated before anything changes. Swapping a position with itself
    /// publishes nothing.
    pub fn swap(&mut self, from: usize, to: usize) -> Result<()>
    where
        T: Clone,
    {
        let len = self.items.len();
        check_position(from, len)
            .and_then(|()| check_position(to, len))
            .inspect_err(|_err| {
                awarn!(from, to, len, "swap rejected");
            })?;
        if from == to {
            return Ok(());
        }

        let mut next = self.items.to_vec();
        next.swap(from, to);

        let script = self.strategy.swap(from, to);
        adebug!(from, to, "swap");
        self.publish(next.into(), script);
        Ok(())
    }

    fn publish(&mut self, next: Arc<[T]>, script: EditScript<S::Payload>) {
        atrace!(len = next.len(), updates = script.len(), "publish");
        self.items = next;
        script.dispatch_updates_to(&mut self.observer);
    }
}

impl<T, S, O> Differ<T, S, O> {
    pub fn current_list(&self) -> &[T] {
        &self.items
    }

    /// A shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<[T]> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<T, S: fmt::Debug, O: fmt::Debug> fmt::Debug for Differ<T, S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Differ")
            .field("len", &self.items.len())
            .field("strategy", &self.strategy)
            .field("observer", &self.observer)
            .finish()
    }
}
