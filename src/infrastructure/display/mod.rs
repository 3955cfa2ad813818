//! Display infrastructure module

mod snapshot;

pub use snapshot::SnapshotDisplay;
