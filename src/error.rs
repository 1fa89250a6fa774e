use crate::Order;

/// Errors returned by [`Tree::traverse`][crate::Tree::traverse].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    /// The traversal was started without a callback to hand the keys to.
    #[error("no callback supplied for {order:?} order traversal")]
    MissingCallback {
        /// The order that was requested.
        order: Order,
    },
}
