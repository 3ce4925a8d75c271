//! Integration tests for value-collection.
//!
//! A single test binary, one module per area:
//! - collection: base container operations and the `Sequence` capability
//! - comparison: the by-value and by-instance comparators
//! - set_algebra: contains, diff, intersect, merge and group by
//! - sort: in-place and copying sorts in both key modes
//! - typed: validators and typed collections
//! - array_access: bracket-style access
//! - iterable: the internal cursor
//! - json: JSON encoding (requires the `serde` feature)

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("value_collection=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod collection;
mod comparison;
mod helpers;
mod iterable;
#[cfg(feature = "serde")]
mod json;
mod sort;
