//! Rule-based item spacing for linear lists and wrapped grids.
//!
//! A [`SpaceRuleDecoration`] holds an ordered set of `(rule, param)` pairs. For every item the
//! first rule that matches `(item, position)` selects the spacing; items that match no rule get
//! zero offsets. Overlapping rules are not an error: the earlier registration wins.
//!
//! Within the selected [`SpaceParam`], `container` padding applies on the sides that touch the
//! edge of the virtual grid (first/last row, start/end span) and `padding` on every other side.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;
use core::ops::Range;

use crate::{ItemOffsets, ItemVariant, Orientation, Padding};

/// Decides whether a decoration parameter applies to an item.
pub trait DecorationRule<T: ?Sized> {
    fn matches(&self, item: &T, position: usize) -> bool;

    /// Whether the rule matches every item. Rules registered after a catch-all rule are never
    /// reached.
    fn is_catch_all(&self) -> bool {
        false
    }
}

impl<T: ?Sized, F> DecorationRule<T> for F
where
    F: Fn(&T, usize) -> bool,
{
    fn matches(&self, item: &T, position: usize) -> bool {
        self(item, position)
    }
}

/// Matches every item. The default rule of a [`SpaceParam`] registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnyRule;

impl<T: ?Sized> DecorationRule<T> for AnyRule {
    fn matches(&self, _item: &T, _position: usize) -> bool {
        true
    }

    fn is_catch_all(&self) -> bool {
        true
    }
}

/// Matches items whose adapter position lies in a range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionRule(pub Range<usize>);

impl<T: ?Sized> DecorationRule<T> for PositionRule {
    fn matches(&self, _item: &T, position: usize) -> bool {
        self.0.contains(&position)
    }
}

/// Matches items of one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindRule<K>(pub K);

impl<T, K> DecorationRule<T> for KindRule<K>
where
    T: ItemVariant<Kind = K> + ?Sized,
    K: PartialEq,
{
    fn matches(&self, item: &T, _position: usize) -> bool {
        item.kind() == self.0
    }
}

/// Both rules must match.
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(A, B);

impl<T: ?Sized, A: DecorationRule<T>, B: DecorationRule<T>> DecorationRule<T> for And<A, B> {
    fn matches(&self, item: &T, position: usize) -> bool {
        self.0.matches(item, position) && self.1.matches(item, position)
    }

    fn is_catch_all(&self) -> bool {
        self.0.is_catch_all() && self.1.is_catch_all()
    }
}

/// Either rule must match.
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B>(A, B);

impl<T: ?Sized, A: DecorationRule<T>, B: DecorationRule<T>> DecorationRule<T> for Or<A, B> {
    fn matches(&self, item: &T, position: usize) -> bool {
        self.0.matches(item, position) || self.1.matches(item, position)
    }

    fn is_catch_all(&self) -> bool {
        self.0.is_catch_all() || self.1.is_catch_all()
    }
}

/// Inverts a rule.
#[derive(Clone, Copy, Debug)]
pub struct Not<A>(A);

impl<T: ?Sized, A: DecorationRule<T>> DecorationRule<T> for Not<A> {
    fn matches(&self, item: &T, position: usize) -> bool {
        !self.0.matches(item, position)
    }
}

/// Wraps a closure so it can be combined with [`RuleExt`].
#[derive(Clone, Copy)]
pub struct FnRule<F>(pub F);

impl<T: ?Sized, F: Fn(&T, usize) -> bool> DecorationRule<T> for FnRule<F> {
    fn matches(&self, item: &T, position: usize) -> bool {
        (self.0)(item, position)
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnRule(..)")
    }
}

/// Combinators for the built-in [`DecorationRule`]s.
pub trait RuleExt: Sized {
    fn and<B>(self, other: B) -> And<Self, B> {
        And(self, other)
    }

    fn or<B>(self, other: B) -> Or<Self, B> {
        Or(self, other)
    }

    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl RuleExt for AnyRule {}
impl RuleExt for PositionRule {}
impl<K> RuleExt for KindRule<K> {}
impl<F> RuleExt for FnRule<F> {}
impl<A, B> RuleExt for And<A, B> {}
impl<A, B> RuleExt for Or<A, B> {}
impl<A> RuleExt for Not<A> {}

/// Ordered `(rule, param)` pairs with first-match-wins lookup.
pub struct RuleSet<T: ?Sized, P> {
    entries: Vec<(Box<dyn DecorationRule<T> + Send + Sync>, P)>,
}

impl<T: ?Sized, P> RuleSet<T, P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a rule. It is consulted after every rule added before it.
    pub fn with_rule(
        mut self,
        rule: impl DecorationRule<T> + Send + Sync + 'static,
        param: P,
    ) -> Self {
        if self.entries.iter().any(|(r, _)| r.is_catch_all()) {
            awarn!(
                index = self.entries.len(),
                "decoration rule is shadowed by an earlier catch-all rule"
            );
        }
        self.entries.push((Box::new(rule), param));
        self
    }

    /// Returns the param of the first rule that matches `(item, position)`.
    pub fn param_for(&self, item: &T, position: usize) -> Option<&P> {
        self.entries
            .iter()
            .find(|(rule, _)| rule.matches(item, position))
            .map(|(_, param)| param)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized, P> Default for RuleSet<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, P: fmt::Debug> fmt::Debug for RuleSet<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(_, param)| param))
            .finish()
    }
}

/// Spacing for one decoration rule.
///
/// `padding` is the spacing between items. `container` is the spacing against the edges of
/// the list; it equals `padding` unless configured separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceParam {
    pub padding: Padding,
    pub container: Padding,
}

impl SpaceParam {
    pub const fn new(padding: Padding) -> Self {
        Self {
            padding,
            container: padding,
        }
    }

    pub const fn with_container(mut self, container: Padding) -> Self {
        self.container = container;
        self
    }
}

/// Per-pass layout facts needed for edge detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridContext {
    pub orientation: Orientation,
    /// Number of spans (columns of a vertical grid, rows of a horizontal one).
    pub span_count: NonZeroUsize,
    pub item_count: usize,
}

impl GridContext {
    /// A single-span list.
    pub const fn linear(orientation: Orientation, item_count: usize) -> Self {
        Self {
            orientation,
            span_count: NonZeroUsize::MIN,
            item_count,
        }
    }

    pub const fn grid(orientation: Orientation, span_count: NonZeroUsize, item_count: usize) -> Self {
        Self {
            orientation,
            span_count,
            item_count,
        }
    }

    pub fn is_start_span(&self, position: usize) -> bool {
        position % self.span_count.get() == 0
    }

    pub fn is_end_span(&self, position: usize) -> bool {
        let span_count = self.span_count.get();
        position % span_count == span_count - 1
    }

    pub fn is_first_row(&self, position: usize) -> bool {
        position < self.span_count.get()
    }

    pub fn is_last_row(&self, position: usize) -> bool {
        let span_count = self.span_count.get();
        let remainder = self.item_count % span_count;
        let last_row_count = if remainder == 0 { span_count } else { remainder };
        position >= self.item_count.saturating_sub(last_row_count)
    }
}

/// Spacing decoration driven by first-match rules.
///
/// ```
/// use core::num::NonZeroUsize;
/// use aquarius::{GridContext, ItemOffsets, Orientation, Padding, SpaceParam, SpaceRuleDecoration};
///
/// let decoration = SpaceRuleDecoration::<u32>::new().with_param(
///     SpaceParam::new(Padding::all(4)).with_container(Padding::all(16)),
/// );
/// let grid = GridContext::grid(Orientation::Vertical, NonZeroUsize::new(2).unwrap(), 4);
///
/// assert_eq!(
///     decoration.item_offsets(&0, 0, &grid),
///     ItemOffsets { left: 16, top: 16, right: 4, bottom: 4 },
/// );
/// ```
pub struct SpaceRuleDecoration<T: ?Sized> {
    rules: RuleSet<T, SpaceParam>,
}

impl<T: ?Sized> SpaceRuleDecoration<T> {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }

    pub fn from_rules(rules: RuleSet<T, SpaceParam>) -> Self {
        Self { rules }
    }

    /// Adds a param guarded by `rule`.
    pub fn with_rule(
        mut self,
        rule: impl DecorationRule<T> + Send + Sync + 'static,
        param: SpaceParam,
    ) -> Self {
        self.rules = self.rules.with_rule(rule, param);
        self
    }

    /// Adds a param that applies to every item not matched by an earlier rule.
    pub fn with_param(self, param: SpaceParam) -> Self {
        self.with_rule(AnyRule, param)
    }

    pub fn rules(&self) -> &RuleSet<T, SpaceParam> {
        &self.rules
    }

    /// Computes the offsets of the item at `position`.
    pub fn item_offsets(&self, item: &T, position: usize, grid: &GridContext) -> ItemOffsets {
        let Some(param) = self.rules.param_for(item, position) else {
            return ItemOffsets::default();
        };
        let pick = |edge: bool, container: u32, padding: u32| if edge { container } else { padding };
        let (c, p) = (&param.container, &param.padding);

        let start_span = grid.is_start_span(position);
        let end_span = grid.is_end_span(position);
        let first_row = grid.is_first_row(position);
        let last_row = grid.is_last_row(position);

        let offsets = match grid.orientation {
            Orientation::Vertical => ItemOffsets {
                left: pick(start_span, c.start, p.start),
                top: pick(first_row, c.top, p.top),
                right: pick(end_span, c.end, p.end),
                bottom: pick(last_row, c.bottom, p.bottom),
            },
            Orientation::Horizontal => ItemOffsets {
                left: pick(first_row, c.start, p.start),
                top: pick(start_span, c.top, p.top),
                right: pick(last_row, c.end, p.end),
                bottom: pick(end_span, c.bottom, p.bottom),
            },
        };
        atrace!(position, ?offsets, "item_offsets");
        offsets
    }
}

impl<T: ?Sized> Default for SpaceRuleDecoration<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for SpaceRuleDecoration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceRuleDecoration")
            .field("rules", &self.rules)
            .finish()
    }
}
