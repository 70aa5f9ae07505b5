use alloc::string::String;

use crate::ViewType;

/// Errors reported by the list engine.
///
/// Every variant is a precondition violation detected synchronously at the call that triggered
/// it; the engine never retries or repairs state on its own.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A positional mutation referenced an index outside `0..len`.
    ///
    /// Raised before any mutation happens: the snapshot is left untouched.
    #[error("position {position} is out of range for a list of {len} items")]
    OutOfRange { position: usize, len: usize },

    /// A view type was dispatched without a registered renderer.
    #[error("no renderer registered for view type {0}")]
    MissingRenderer(ViewType),

    /// An item kind was never registered with the view type selector.
    #[error("item kind `{0}` has no view type")]
    UnregisteredKind(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Checks that `position` addresses an item of a list with `len` items.
pub fn check_position(position: usize, len: usize) -> Result<()> {
    if position < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { position, len })
    }
}
