//! A headless diff-dispatch engine for heterogeneous, mutable lists.
//!
//! The crate keeps an external presentation layer in sync with an ordered list that changes
//! over time:
//! - [`DifferStrategy`] turns a list change into an [`EditScript`] of inserts, removes, moves
//!   and changes ([`NoneStrategy`] for full refreshes, [`DiffStrategy`] for minimal scripts
//!   driven by identity/content comparison).
//! - [`EditScript::dispatch_updates_to`] forwards the script, in order, to a
//!   [`DataSourceObserver`].
//! - [`RenderRegistry`] maps each item's variant to a stable [`ViewType`] and to the renderer
//!   and click handler registered for it.
//! - [`SpaceRuleDecoration`] computes grid-aware item spacing from first-match rules.
//!
//! It is UI-agnostic: it never holds views. For an adapter that owns the list snapshot and
//! drives all of the above, see the `aquarius-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod decoration;
mod diff;
mod error;
mod key;
mod myers;
mod observer;
mod script;
mod types;
mod view_type;


pub use decoration::{
    And, AnyRule, DecorationRule, FnRule, GridContext, KindRule, Not, Or, PositionRule, RuleExt,
    RuleSet, SpaceParam, SpaceRuleDecoration,
};
pub use diff::{
    ComparableCallback, ComparableItem, DiffStrategy, DifferStrategy, FnCallback, ItemCallback,
    NoneStrategy, strategies,
};
pub use error::{Error, Result, check_position};
pub use observer::{DataSourceObserver, UpdateLog};
pub use script::{EditScript, Update};
pub use types::{ItemOffsets, Orientation, Padding, ViewType};
pub use view_type::{
    ItemVariant, KindViewTypeSelector, RenderRegistry, RenderRegistryBuilder, ViewTypeSelector,
};

#[doc(hidden)]
pub use key::LookupKey;
