use alloc::vec::Vec;

use crate::error::{Error, Result};

/// A single structural operation of an [`EditScript`].
///
/// Positions are relative to the list state produced by all earlier operations of the same
/// script.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Update<P = ()> {
    Inserted { position: usize, count: usize },
    Removed { position: usize, count: usize },
    /// Removes the item at `from`, then inserts it at `to` (indexed after the removal).
    Moved { from: usize, to: usize },
    Changed {
        position: usize,
        count: usize,
        payload: Option<P>,
    },
}

/// An ordered list of [`Update`]s transforming one snapshot into another.
///
/// Applying the updates in order to the old snapshot yields the new snapshot. An empty script
/// means nothing changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditScript<P = ()> {
    updates: Vec<Update<P>>,
}

impl<P> Default for EditScript<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> EditScript<P> {
    pub const fn new() -> Self {
        Self {
            updates: Vec::new(),
        }
    }

    pub fn from_updates(updates: Vec<Update<P>>) -> Self {
        Self { updates }
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn updates(&self) -> &[Update<P>] {
        &self.updates
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Update<P>> {
        self.updates.iter()
    }

    pub fn into_updates(self) -> Vec<Update<P>> {
        self.updates
    }

    pub fn push(&mut self, update: Update<P>) {
        self.updates.push(update);
    }

    pub(crate) fn insert(&mut self, position: usize, count: usize) {
        if count > 0 {
            self.push(Update::Inserted { position, count });
        }
    }

    pub(crate) fn remove(&mut self, position: usize, count: usize) {
        if count > 0 {
            self.push(Update::Removed { position, count });
        }
    }

    pub(crate) fn move_item(&mut self, from: usize, to: usize) {
        if from != to {
            self.push(Update::Moved { from, to });
        }
    }

    pub(crate) fn change(&mut self, position: usize, count: usize, payload: Option<P>) {
        if count > 0 {
            self.push(Update::Changed {
                position,
                count,
                payload,
            });
        }
    }

    /// Counts how many updates of each kind the script holds, as
    /// `(inserted, removed, moved, changed)`.
    pub fn summary(&self) -> (usize, usize, usize, usize) {
        self.updates
            .iter()
            .fold((0, 0, 0, 0), |(i, r, m, c), update| match update {
                Update::Inserted { .. } => (i + 1, r, m, c),
                Update::Removed { .. } => (i, r + 1, m, c),
                Update::Moved { .. } => (i, r, m + 1, c),
                Update::Changed { .. } => (i, r, m, c + 1),
            })
    }

    /// Replays the script against a mirrored list, the way a presentation layer would.
    ///
    /// `make(position)` creates the slot for an inserted position (indexed at the time of the
    /// insertion). `rebind(position, slot, payload)` refreshes a changed slot.
    ///
    /// Fails with [`Error::OutOfRange`] when an update does not fit the mirror; updates before
    /// the failing one stay applied.
    pub fn apply_to<M>(
        &self,
        mirror: &mut Vec<M>,
        mut make: impl FnMut(usize) -> M,
        mut rebind: impl FnMut(usize, &mut M, Option<&P>),
    ) -> Result<()> {
        for update in &self.updates {
            match *update {
                Update::Inserted { position, count } => {
                    if position > mirror.len() {
                        return Err(Error::OutOfRange {
                            position,
                            len: mirror.len(),
                        });
                    }
                    let fresh: Vec<M> = (position..position + count).map(&mut make).collect();
                    mirror.splice(position..position, fresh);
                }
                Update::Removed { position, count } => {
                    let end = position.saturating_add(count);
                    if end > mirror.len() {
                        return Err(Error::OutOfRange {
                            position: end.saturating_sub(1),
                            len: mirror.len(),
                        });
                    }
                    mirror.drain(position..end);
                }
                Update::Moved { from, to } => {
                    if from >= mirror.len() || to >= mirror.len() {
                        return Err(Error::OutOfRange {
                            position: from.max(to),
                            len: mirror.len(),
                        });
                    }
                    let item = mirror.remove(from);
                    mirror.insert(to, item);
                }
                Update::Changed {
                    position,
                    count,
                    ref payload,
                } => {
                    let end = position.saturating_add(count);
                    if end > mirror.len() {
                        return Err(Error::OutOfRange {
                            position: end.saturating_sub(1),
                            len: mirror.len(),
                        });
                    }
                    for (offset, slot) in mirror[position..end].iter_mut().enumerate() {
                        rebind(position + offset, slot, payload.as_ref());
                    }
                }
            }
        }
        Ok(())
    }
}

impl<P> From<Vec<Update<P>>> for EditScript<P> {
    fn from(updates: Vec<Update<P>>) -> Self {
        Self::from_updates(updates)
    }
}

impl<P> IntoIterator for EditScript<P> {
    type Item = Update<P>;
    type IntoIter = alloc::vec::IntoIter<Update<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.updates.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a EditScript<P> {
    type Item = &'a Update<P>;
    type IntoIter = core::slice::Iter<'a, Update<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.updates.iter()
    }
}
