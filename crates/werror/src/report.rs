//! Whole-chain rendering.

use core::{error::Error, fmt};

use crate::Chain;

/// Renders a whole error chain on one line, outermost first, joined by `": "`.
///
/// [`ChainedError`](crate::ChainedError) only ever renders its primary error.
/// Wrap a reference in `Report` when the full chain is wanted, e.g. in a log
/// line:
///
/// ```
/// use werror::{ChainedError, Report, shared};
///
/// let err = ChainedError::new(shared(std::io::Error::other("connection refused")))
///     .wrap(shared(std::io::Error::other("fetch failed")));
///
/// assert_eq!(err.to_string(), "fetch failed");
/// assert_eq!(Report::new(&err).to_string(), "fetch failed: connection refused");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(&'a (dyn Error + 'static));

impl<'a> Report<'a> {
    /// Wraps `err` for rendering.
    pub const fn new(err: &'a (dyn Error + 'static)) -> Self {
        Self(err)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut links = Chain::new(self.0);
        if let Some(first) = links.next() {
            write!(f, "{first}")?;
        }
        for link in links {
            write!(f, ": {link}")?;
        }
        Ok(())
    }
}
