//! Shared test mocks and utilities for the Eco-Quest daily widget.

mod clock;
mod repository;
mod rng;

pub use clock::FixedClock;
pub use repository::{EmptyBlobStore, FailingBlobStore, RecordingBlobStore};
pub use rng::{MockRng, SequenceRng};
