//! Searching an error chain.
//!
//! The standard library only knows how to take one step along a chain
//! ([`Error::source`]). The functions here walk the whole chain the same way
//! for every error type, and let each [`ChainedError`] answer for its own
//! primary error along the way:
//!
//! ```
//! use werror::{ChainedError, chain, shared};
//!
//! let a = shared(std::io::Error::other("a"));
//! let b = shared(std::io::Error::other("b"));
//! let c = shared(std::io::Error::other("c"));
//!
//! let err = ChainedError::new(a.clone()).wrap(b.clone()).wrap(c.clone());
//! assert_eq!(chain::depth_of(&err, &c), Some(0));
//! assert_eq!(chain::depth_of(&err, &b), Some(1));
//! assert_eq!(chain::depth_of(&err, &a), Some(2));
//!
//! let d = shared(std::io::Error::other("d"));
//! assert!(!chain::is(&err, &d));
//! ```

use core::{error::Error, iter::FusedIterator};

use crate::{
    ChainedError,
    link::{Link, SharedError, same},
};

/// Iterator over an error and everything reachable through
/// [`Error::source`].
///
/// The first item is the error the iterator was created with. If you only want
/// what lies below it, use `skip(1)`.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Starts a walk at `err`.
    pub const fn new(err: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(err) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Whether `target` is anywhere in the chain starting at `err`.
///
/// A link matches when it is `target` itself, or when it is a
/// [`ChainedError`] whose primary error is `target`. The search gives up once
/// the chain runs out.
pub fn is(err: &(dyn Error + 'static), target: &SharedError) -> bool {
    depth_of(err, target).is_some()
}

/// How many steps below `err` the first match for `target` sits, `0` being
/// `err` itself.
///
/// Matching follows the same rules as [`is`].
pub fn depth_of(err: &(dyn Error + 'static), target: &SharedError) -> Option<usize> {
    let target: &(dyn Error + 'static) = &**target;
    Chain::new(err).position(|link| matches(link, target))
}

/// The first error of type `T` in the chain starting at `err`.
///
/// A [`ChainedError`] link is checked for itself first and then for its
/// primary error, so a chain of nodes can be searched for the concrete error
/// types they carry.
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    Chain::new(err).find_map(|link| {
        link.downcast_ref::<T>().or_else(|| {
            link.downcast_ref::<ChainedError>()
                .and_then(|node| node.primary().downcast_ref::<T>())
        })
    })
}

fn matches(link: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    same(link, target)
        || link
            .downcast_ref::<ChainedError>()
            .is_some_and(|node| Link::is(node, target))
}
