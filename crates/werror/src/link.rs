//! The capability set every chain node offers.

use alloc::sync::Arc;
use core::error::Error;

/// An error value with shared ownership.
///
/// Chains hold their links as `SharedError` so one suffix can sit under any
/// number of heads. Cloning bumps a reference count and keeps the identity of
/// the error, which is what [`Link::is`] compares.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Moves `err` behind a fresh [`SharedError`].
///
/// Every call allocates, so two calls on equal values produce two errors that
/// are *not* identical to each other.
pub fn shared<E>(err: E) -> SharedError
where
    E: Error + Send + Sync + 'static,
{
    Arc::new(err)
}

/// A node in an error chain.
///
/// Rendering comes from `Display`, and stepping to the next link from
/// [`Error::source`]. This trait adds typed access to the two links and the
/// single-node identity test that [`chain::is`](crate::chain::is) consults
/// while it walks a chain.
pub trait Link: Error + Send + Sync + 'static {
    /// The error this node stands for.
    fn primary(&self) -> &SharedError;

    /// The rest of the chain, if any.
    fn next_error(&self) -> Option<&SharedError>;

    /// Whether this node's primary error is `target` itself.
    ///
    /// Only this node is inspected. Use [`Link::contains`] to search the chain.
    fn is(&self, target: &(dyn Error + 'static)) -> bool {
        same(&**self.primary(), target)
    }

    /// Whether `target` is anywhere in the chain headed by this node.
    fn contains(&self, target: &SharedError) -> bool
    where
        Self: Sized,
    {
        crate::chain::is(self, target)
    }
}

/// Allocation identity of two error references. Vtables are ignored.
pub(crate) fn same(a: &(dyn Error + 'static), b: &(dyn Error + 'static)) -> bool {
    core::ptr::addr_eq(a, b)
}
