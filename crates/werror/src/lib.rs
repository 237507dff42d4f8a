//! Immutable, shareable error chains.
//!
//! This crate provides [`ChainedError`], a node that pairs the error it stands
//! for with an optional "next" error. Following `next` through
//! [`Error::source`](core::error::Error::source) walks a singly-linked chain
//! that ends in `None`. Nodes are never mutated: [`ChainedError::wrap`]
//! returns a new head and leaves the receiver usable by anyone else holding it.
//!
//! # Identity
//!
//! Errors are compared by allocation identity, not by message text. Keep the
//! errors you want to look for as [`SharedError`]s and hand out clones of the
//! same `Arc`:
//!
//! ```
//! use werror::{ChainedError, SharedError, chain, shared};
//!
//! #[derive(Debug)]
//! struct Msg(&'static str);
//!
//! impl core::fmt::Display for Msg {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str(self.0)
//!     }
//! }
//!
//! impl core::error::Error for Msg {}
//!
//! let not_exist: SharedError = shared(Msg("file does not exist"));
//! let closed: SharedError = shared(Msg("file already closed"));
//!
//! let err = ChainedError::with_next(not_exist.clone(), closed.clone());
//! assert_eq!(err.to_string(), "file does not exist");
//! assert!(err.is(&*not_exist));
//! assert!(chain::is(&err, &closed));
//!
//! // A look-alike with the same message is a different error.
//! assert!(!chain::is(&err, &shared(Msg("file already closed"))));
//! ```
//!
//! # Features
//!
//! - `std` (default): Enable standard library support
//! - `tracing`: Emit chains as `tracing` events with [`trace::trace_chain`]

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

extern crate alloc;

pub mod chain;
mod chained;
mod link;
mod report;

#[cfg(feature = "tracing")]
pub mod trace;


pub use chain::Chain;
pub use chained::ChainedError;
pub use link::{Link, SharedError, shared};
pub use report::Report;
