//! The chain node.

use alloc::sync::Arc;
use core::{error::Error, fmt};

use crate::link::{Link, SharedError, same};

/// An error paired with the rest of its chain.
///
/// `primary` is the error this node stands for: it alone decides what the node
/// renders and what [`is`](Self::is) matches. `next` is whatever comes after it,
/// another `ChainedError` or any other error, and is what
/// [`Error::source`] returns.
///
/// Nodes never change after construction. [`wrap`](Self::wrap) builds a new
/// head on top of a copy of the receiver, so a chain can only grow at the
/// front and always ends in `None`.
#[derive(Clone, Debug)]
pub struct ChainedError {
    primary: SharedError,
    next: Option<SharedError>,
}

impl ChainedError {
    /// Creates a single-link chain.
    pub const fn new(err: SharedError) -> Self {
        Self {
            primary: err,
            next: None,
        }
    }

    /// Creates a single-link chain, or `None` when there is nothing to report.
    pub fn from_option(err: Option<SharedError>) -> Option<Self> {
        err.map(Self::new)
    }

    /// Creates a node whose source is `next`.
    pub const fn with_next(primary: SharedError, next: SharedError) -> Self {
        Self {
            primary,
            next: Some(next),
        }
    }

    /// Combines the outcomes of two fallible steps into one chain head.
    ///
    /// | `base`  | `addition` | result                                  |
    /// |---------|------------|-----------------------------------------|
    /// | `None`  | `None`     | `None`                                  |
    /// | `None`  | `Some(a)`  | node with primary `a` and no next       |
    /// | `Some(b)` | any      | node with primary `b` and next `addition` |
    ///
    /// ```
    /// use werror::{ChainedError, shared};
    ///
    /// let io = shared(std::io::Error::other("disk full"));
    /// let joined = ChainedError::join(None, Some(io.clone())).unwrap();
    /// assert!(joined.is(&*io));
    /// assert!(joined.next_error().is_none());
    ///
    /// assert!(ChainedError::join(None, None).is_none());
    /// ```
    pub fn join(base: Option<SharedError>, addition: Option<SharedError>) -> Option<Self> {
        match (base, addition) {
            (None, None) => None,
            (None, Some(addition)) => Some(Self::new(addition)),
            (Some(base), next) => Some(Self {
                primary: base,
                next,
            }),
        }
    }

    /// The error this node stands for, unchanged.
    pub const fn primary(&self) -> &SharedError {
        &self.primary
    }

    /// The next link, unchanged.
    pub const fn next_error(&self) -> Option<&SharedError> {
        self.next.as_ref()
    }

    /// Whether this node's primary error is `target` itself.
    ///
    /// Identity is allocation identity. Two errors with the same message are
    /// different errors unless they are the same value. The rest of the chain
    /// is not looked at; see [`chain::is`](crate::chain::is) for that.
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        same(&*self.primary, target)
    }

    /// Returns a new head with `err` as its primary and this whole node as its
    /// next link.
    ///
    /// `self` is left as it was and stays valid for every other holder.
    #[must_use = "wrap returns a new chain head and leaves the receiver unchanged"]
    pub fn wrap(&self, err: SharedError) -> Self {
        Self::with_next(err, Arc::new(self.clone()))
    }

    /// Moves this node behind a [`SharedError`] so it can be the next link of
    /// another chain.
    pub fn into_shared(self) -> SharedError {
        Arc::new(self)
    }
}

impl fmt::Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.primary, f)
    }
}

impl Error for ChainedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.next
            .as_deref()
            .map(|next| next as &(dyn Error + 'static))
    }
}

impl Drop for ChainedError {
    // Unlink uniquely owned nodes one at a time so long chains don't drop
    // recursively. A node still held elsewhere stops the walk.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut link) = next {
            next = Arc::get_mut(&mut link)
                .and_then(|err| err.downcast_mut::<Self>())
                .and_then(|node| node.next.take());
        }
    }
}

impl Link for ChainedError {
    fn primary(&self) -> &SharedError {
        &self.primary
    }

    fn next_error(&self) -> Option<&SharedError> {
        self.next.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chain, shared, tests::*};

    fn next_is(node: &ChainedError, want: Option<&SharedError>) -> bool {
        match (node.next_error(), want) {
            (None, None) => true,
            (Some(got), Some(want)) => Arc::ptr_eq(got, want),
            _ => false,
        }
    }

    #[test]
    fn test_new() {
        let err = ChainedError::new(ERR_CLOSED.clone());
        assert_eq!(err.to_string(), "file already closed");
        assert!(err.is(&**ERR_CLOSED));
        assert!(!err.is(&**ERR_INVALID));
        assert!(chain::is(&err, &ERR_CLOSED));
        assert!(err.next_error().is_none());
    }

    #[test]
    fn test_from_option() {
        let err = ChainedError::from_option(Some(ERR_CLOSED.clone())).unwrap();
        assert!(err.is(&**ERR_CLOSED));
        assert!(err.next_error().is_none());

        assert!(ChainedError::from_option(None).is_none());
    }

    #[test]
    fn test_join_base_only() {
        let err = ChainedError::join(Some(ERR_INVALID.clone()), None).unwrap();
        assert!(err.is(&**ERR_INVALID));
        assert!(next_is(&err, None));
    }

    #[test]
    fn test_join_both() {
        let err = ChainedError::join(Some(ERR_NOT_EXIST.clone()), Some(ERR_CLOSED.clone())).unwrap();
        assert!(err.is(&**ERR_NOT_EXIST));
        assert!(next_is(&err, Some(&ERR_CLOSED)));
        assert!(chain::is(&err, &ERR_CLOSED));
    }

    #[test]
    fn test_join_addition_only() {
        let err = ChainedError::join(None, Some(ERR_CLOSED.clone())).unwrap();
        assert!(err.is(&**ERR_CLOSED));
        assert!(next_is(&err, None));
    }

    #[test]
    fn test_join_nothing() {
        assert!(ChainedError::join(None, None).is_none());
    }

    #[test]
    fn test_display_is_primary_only() {
        let err = ChainedError::with_next(ERR_INVALID.clone(), ERR_CLOSED.clone());
        assert_eq!(err.to_string(), "invalid argument");
        assert_eq!(err.to_string(), ERR_INVALID.to_string());
    }

    #[test]
    fn test_next_error_and_source() {
        let inner = ChainedError::new(ERR_PERMISSION.clone()).into_shared();
        let err = ChainedError::with_next(ERR_NOT_EXIST.clone(), inner.clone());

        assert!(next_is(&err, Some(&inner)));
        let source = err.source().unwrap();
        assert!(chain::is(source, &ERR_PERMISSION));
        assert!(!chain::is(source, &ERR_NOT_EXIST));
    }

    #[test]
    fn test_primary_is_identity() {
        let err = ChainedError::new(ERR_NO_DEADLINE.clone());
        assert!(Arc::ptr_eq(err.primary(), &ERR_NO_DEADLINE));
    }

    #[test]
    fn test_is_ignores_message_text() {
        let twin = shared(FsError::Closed);
        let err = ChainedError::new(ERR_CLOSED.clone());
        assert_eq!(twin.to_string(), err.to_string());
        assert!(!err.is(&*twin));
    }

    #[test]
    fn test_is_ignores_next() {
        let err = ChainedError::with_next(ERR_NOT_EXIST.clone(), ERR_CLOSED.clone());
        assert!(!err.is(&**ERR_CLOSED));
    }

    #[test]
    fn test_wrap_finds_inner_and_outer() {
        let err = ChainedError::new(ERR_PERMISSION.clone());
        let wrapped = err.wrap(ERR_INVALID.clone());

        assert!(wrapped.is(&**ERR_INVALID));
        assert!(chain::is(&wrapped, &ERR_INVALID));
        assert!(chain::is(&wrapped, &ERR_PERMISSION));
        assert!(!chain::is(&wrapped, &ERR_DEADLINE_EXCEEDED));
        assert!(!chain::is(&wrapped, &ERR_NO_DEADLINE));
    }

    #[test]
    fn test_wrap_leaves_receiver_alone() {
        let err = ChainedError::with_next(ERR_PERMISSION.clone(), ERR_EXIST.clone());
        let wrapped = err.wrap(ERR_INVALID.clone());

        assert!(err.is(&**ERR_PERMISSION));
        assert!(next_is(&err, Some(&ERR_EXIST)));
        assert!(!chain::is(&err, &ERR_INVALID));

        // The copy under the new head behaves like the receiver.
        let below = wrapped.next_error().unwrap();
        let below = below.downcast_ref::<ChainedError>().unwrap();
        assert_eq!(below.to_string(), err.to_string());
        assert!(below.is(&**ERR_PERMISSION));
        assert!(next_is(below, Some(&ERR_EXIST)));
    }

    #[test]
    fn test_chain_may_end_in_foreign_error() {
        let io = shared(std::io::Error::other("socket reset"));
        let err = ChainedError::with_next(ERR_CLOSED.clone(), io.clone());
        assert!(chain::is(&err, &io));
        assert!(err.source().unwrap().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_link_view_matches_inherent() {
        let err = ChainedError::with_next(ERR_NOT_EXIST.clone(), ERR_CLOSED.clone());
        let link: &dyn Link = &err;
        assert!(Arc::ptr_eq(Link::primary(&err), err.primary()));
        assert!(link.is(&**ERR_NOT_EXIST));
        assert!(!link.is(&**ERR_CLOSED));
        assert!(next_is(&err, Link::next_error(&err)));
        assert!(Link::contains(&err, &ERR_CLOSED));
    }
}
