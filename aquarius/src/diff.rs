use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::EditScript;
use crate::myers::common_subsequence;

/// Turns list changes into edit scripts.
///
/// `calculate_diff` compares two snapshots. `remove_at_position` and `swap` describe a single
/// positional change without looking at the items. Callers are responsible for validating
/// positions against the snapshot before asking for a positional script.
pub trait DifferStrategy<T> {
    type Payload;

    fn calculate_diff(&self, old: &[T], new: &[T]) -> EditScript<Self::Payload>;

    fn remove_at_position(&self, position: usize) -> EditScript<Self::Payload> {
        let mut script = EditScript::new();
        script.remove(position, 1);
        script
    }

    /// Exchanges the items at `from` and `to`, using moves only.
    fn swap(&self, from: usize, to: usize) -> EditScript<Self::Payload> {
        swap_script(from, to)
    }
}

/// Moves that exchange two positions: the lower item moves to the higher slot, then the item
/// that shifted down by one moves back to the lower slot.
pub(crate) fn swap_script<P>(from: usize, to: usize) -> EditScript<P> {
    let mut script = EditScript::new();
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    if lo == hi {
        return script;
    }
    script.move_item(lo, hi);
    script.move_item(hi - 1, lo);
    script
}

/// Compares old and new items for the comparison strategy.
pub trait ItemCallback<T: ?Sized> {
    type Payload;

    /// Whether both items represent the same logical entity.
    fn are_items_the_same(&self, old: &T, new: &T) -> bool;

    /// Whether both items look the same. Only asked when `are_items_the_same` holds.
    fn are_contents_the_same(&self, old: &T, new: &T) -> bool;

    /// An optional partial-update payload for items whose contents differ.
    fn change_payload(&self, _old: &T, _new: &T) -> Option<Self::Payload> {
        None
    }
}

/// Item types that can compare themselves against another item of the same type.
pub trait ComparableItem {
    fn are_items_the_same(&self, other: &Self) -> bool;
    fn are_contents_the_same(&self, other: &Self) -> bool;
}

/// [`ItemCallback`] that delegates to [`ComparableItem`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ComparableCallback;

impl<T: ComparableItem + ?Sized> ItemCallback<T> for ComparableCallback {
    type Payload = ();

    fn are_items_the_same(&self, old: &T, new: &T) -> bool {
        old.are_items_the_same(new)
    }

    fn are_contents_the_same(&self, old: &T, new: &T) -> bool {
        old.are_contents_the_same(new)
    }
}

/// [`ItemCallback`] built from two closures.
#[derive(Clone, Copy)]
pub struct FnCallback<I, C> {
    same_identity: I,
    same_content: C,
}

impl<I, C> FnCallback<I, C> {
    pub fn new(same_identity: I, same_content: C) -> Self {
        Self {
            same_identity,
            same_content,
        }
    }
}

impl<I, C> fmt::Debug for FnCallback<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCallback(..)")
    }
}

impl<T, I, C> ItemCallback<T> for FnCallback<I, C>
where
    T: ?Sized,
    I: Fn(&T, &T) -> bool,
    C: Fn(&T, &T) -> bool,
{
    type Payload = ();

    fn are_items_the_same(&self, old: &T, new: &T) -> bool {
        (self.same_identity)(old, new)
    }

    fn are_contents_the_same(&self, old: &T, new: &T) -> bool {
        (self.same_content)(old, new)
    }
}

/// A strategy without change detection.
///
/// Every submit refreshes the whole list: the shared range is reported as changed and the
/// tail is inserted or removed when the length differs.
pub struct NoneStrategy<P = ()> {
    _payload: PhantomData<fn() -> P>,
}

impl<P> NoneStrategy<P> {
    pub const fn new() -> Self {
        Self {
            _payload: PhantomData,
        }
    }
}

impl<P> Default for NoneStrategy<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for NoneStrategy<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NoneStrategy<P> {}

impl<P> fmt::Debug for NoneStrategy<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoneStrategy")
    }
}

impl<T, P> DifferStrategy<T> for NoneStrategy<P> {
    type Payload = P;

    fn calculate_diff(&self, old: &[T], new: &[T]) -> EditScript<P> {
        let mut script = EditScript::new();
        let shared = old.len().min(new.len());
        script.change(0, shared, None);
        if old.len() > new.len() {
            script.remove(shared, old.len() - shared);
        } else {
            script.insert(shared, new.len() - shared);
        }
        adebug!(
            old_len = old.len(),
            new_len = new.len(),
            "NoneStrategy::calculate_diff"
        );
        script
    }
}

/// A strategy that computes a minimal edit script from identity and content comparisons.
///
/// Identity drives a longest-common-subsequence match between old and new items. Matched items
/// whose content differs are reported as changed at their new position. With move detection
/// (the default), items matched outside the common subsequence become moves instead of a
/// removal plus an insertion.
///
/// Scripts are emitted in four phases: removals (back to front), moves, insertions (front to
/// back, at final positions), then changes (at final positions).
#[derive(Clone, Debug)]
pub struct DiffStrategy<C> {
    callback: C,
    detect_moves: bool,
}

impl<C> DiffStrategy<C> {
    pub fn new(callback: C) -> Self {
        Self {
            callback,
            detect_moves: true,
        }
    }

    pub fn with_detect_moves(mut self, detect_moves: bool) -> Self {
        self.detect_moves = detect_moves;
        self
    }

    pub fn detect_moves(&self) -> bool {
        self.detect_moves
    }

    pub fn callback(&self) -> &C {
        &self.callback
    }
}

impl<T, C: ItemCallback<T>> DifferStrategy<T> for DiffStrategy<C> {
    type Payload = C::Payload;

    fn calculate_diff(&self, old: &[T], new: &[T]) -> EditScript<C::Payload> {
        let cb = &self.callback;
        let mut old_match: Vec<Option<usize>> = vec![None; old.len()];
        let mut new_match: Vec<Option<usize>> = vec![None; new.len()];

        for (i, j) in common_subsequence(old.len(), new.len(), |i, j| {
            cb.are_items_the_same(&old[i], &new[j])
        }) {
            old_match[i] = Some(j);
            new_match[j] = Some(i);
        }

        let mut moved = vec![false; old.len()];
        if self.detect_moves {
            for (j, slot) in new_match.iter_mut().enumerate() {
                if slot.is_some() {
                    continue;
                }
                let candidate = (0..old.len())
                    .find(|&i| old_match[i].is_none() && cb.are_items_the_same(&old[i], &new[j]));
                if let Some(i) = candidate {
                    old_match[i] = Some(j);
                    *slot = Some(i);
                    moved[i] = true;
                }
            }
        }

        let mut script = EditScript::new();
        push_removals(&mut script, &old_match);
        push_moves(&mut script, &old_match, &new_match, &moved);
        push_insertions(&mut script, &new_match);
        push_changes(&mut script, cb, old, new, &new_match);

        #[cfg(feature = "tracing")]
        {
            let (inserted, removed, moves, changed) = script.summary();
            adebug!(
                old_len = old.len(),
                new_len = new.len(),
                inserted,
                removed,
                moves,
                changed,
                "DiffStrategy::calculate_diff"
            );
        }

        script
    }
}

fn push_removals<P>(script: &mut EditScript<P>, old_match: &[Option<usize>]) {
    // Back to front: removing a run never shifts the runs still to be removed.
    let mut i = old_match.len();
    while i > 0 {
        if old_match[i - 1].is_some() {
            i -= 1;
            continue;
        }
        let end = i;
        while i > 0 && old_match[i - 1].is_none() {
            i -= 1;
        }
        script.remove(i, end - i);
    }
}

fn push_moves<P>(
    script: &mut EditScript<P>,
    old_match: &[Option<usize>],
    new_match: &[Option<usize>],
    moved: &[bool],
) {
    if !moved.contains(&true) {
        return;
    }

    // Surviving old items, in current order, and the order they must end up in.
    let mut working: Vec<usize> = (0..old_match.len())
        .filter(|&i| old_match[i].is_some())
        .collect();
    let target: Vec<usize> = new_match.iter().filter_map(|&i| i).collect();

    for (t, &item) in target.iter().enumerate() {
        if !moved[item] {
            continue;
        }
        let Some(from) = working.iter().position(|&w| w == item) else {
            continue;
        };
        working.remove(from);
        // Place right after the predecessor in the new order; it is already in place.
        let to = match t.checked_sub(1) {
            None => 0,
            Some(prev) => working
                .iter()
                .position(|&w| w == target[prev])
                .map_or(0, |p| p + 1),
        };
        working.insert(to, item);
        script.move_item(from, to);
    }

    debug_assert_eq!(working, target, "moves must produce the new order");
}

fn push_insertions<P>(script: &mut EditScript<P>, new_match: &[Option<usize>]) {
    let mut j = 0;
    while j < new_match.len() {
        if new_match[j].is_some() {
            j += 1;
            continue;
        }
        let start = j;
        while j < new_match.len() && new_match[j].is_none() {
            j += 1;
        }
        script.insert(start, j - start);
    }
}

fn push_changes<T, C: ItemCallback<T>>(
    script: &mut EditScript<C::Payload>,
    cb: &C,
    old: &[T],
    new: &[T],
    new_match: &[Option<usize>],
) {
    let mut run: Option<(usize, usize)> = None;
    for (j, matched) in new_match.iter().enumerate() {
        let changed = matches!(*matched, Some(i) if !cb.are_contents_the_same(&old[i], &new[j]));
        if !changed {
            if let Some((start, count)) = run.take() {
                script.change(start, count, None);
            }
            continue;
        }

        let payload = matched.and_then(|i| cb.change_payload(&old[i], &new[j]));
        if payload.is_some() {
            if let Some((start, count)) = run.take() {
                script.change(start, count, None);
            }
            script.change(j, 1, payload);
            continue;
        }

        run = match run {
            Some((start, count)) => Some((start, count + 1)),
            None => Some((j, 1)),
        };
    }
    if let Some((start, count)) = run {
        script.change(start, count, None);
    }
}

/// Shorthand constructors for the built-in strategies.
pub mod strategies {
    use super::{ComparableCallback, DiffStrategy, FnCallback, NoneStrategy};

    /// No change detection; every submit refreshes the full range.
    pub fn none<P>() -> NoneStrategy<P> {
        NoneStrategy::new()
    }

    /// Comparison strategy driven by a custom [`super::ItemCallback`].
    pub fn with_callback<C>(callback: C) -> DiffStrategy<C> {
        DiffStrategy::new(callback)
    }

    /// Comparison strategy from identity and content closures.
    pub fn with_fns<T, I, C>(same_identity: I, same_content: C) -> DiffStrategy<FnCallback<I, C>>
    where
        I: Fn(&T, &T) -> bool,
        C: Fn(&T, &T) -> bool,
    {
        DiffStrategy::new(FnCallback::new(same_identity, same_content))
    }

    /// Comparison strategy for items implementing [`super::ComparableItem`].
    pub fn comparable() -> DiffStrategy<ComparableCallback> {
        DiffStrategy::new(ComparableCallback)
    }
}
