//! Adapter layer for the `aquarius` crate.
//!
//! `aquarius` computes edit scripts and dispatch tables but owns no list. This crate adds the
//! pieces an adapter needs on top:
//!
//! - [`Differ`]: owns the list snapshot, diffs every change against it and notifies a
//!   [`aquarius::DataSourceObserver`].
//! - [`RenderAdapter`]: a [`Differ`] combined with a [`aquarius::RenderRegistry`], answering
//!   per-position questions (item id, view type, renderer, click handler).
//!
//! Like the core crate it holds no UI objects.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod differ;
mod render_adapter;

#[cfg(test)]
mod tests;

pub use differ::Differ;
pub use render_adapter::{ItemIdSelector, RenderAdapter};
