//! Error chains as `tracing` events.

use core::error::Error;

use crate::Chain;

/// Emits one `DEBUG` event per link of the chain starting at `err`.
///
/// Each event carries the link's `depth` (`0` for `err` itself) and its
/// rendered `error`, under the `werror` target.
pub fn trace_chain(err: &(dyn Error + 'static)) {
    for (depth, link) in Chain::new(err).enumerate() {
        tracing::debug!(target: "werror", depth, error = %link, "error chain link");
    }
}
