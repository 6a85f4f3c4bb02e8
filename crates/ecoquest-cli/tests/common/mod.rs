//! Shared test helpers for CLI integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ecoquest_cli::app;
use ecoquest_cli::state::AppState;
use ecoquest_content::domain::builtin::builtin_catalog;
use ecoquest_core::calendar::CalendarDate;
use ecoquest_core::clock::Clock;
use ecoquest_core::repository::BlobStore;
use ecoquest_progress::application::persistence::{STORAGE_KEY, decode_progress, encode_progress};
use ecoquest_progress::domain::progress::ProgressState;
use ecoquest_test_support::{FixedClock, MockRng, RecordingBlobStore};

/// Fixed date used across all integration tests.
pub fn fixed_clock() -> FixedClock {
    FixedClock::ymd(2026, 10, 19)
}

/// A clock the test can move forward while a session is running.
#[derive(Debug, Clone)]
pub struct SharedClock(Arc<Mutex<CalendarDate>>);

impl SharedClock {
    pub fn starting_at(clock: FixedClock) -> Self {
        Self(Arc::new(Mutex::new(clock.0)))
    }

    pub fn advance_one_day(&self) {
        let mut date = self.0.lock().unwrap();
        *date = date.succ();
    }
}

impl Clock for SharedClock {
    fn today(&self) -> CalendarDate {
        *self.0.lock().unwrap()
    }
}

/// Build app state over the built-in catalog with a deterministic clock and
/// RNG and the given store.
pub fn build_state(clock: FixedClock, store: Arc<dyn BlobStore>) -> AppState {
    AppState::new(
        Arc::new(builtin_catalog()),
        Arc::new(clock),
        Box::new(MockRng),
        store,
    )
}

/// A recording store pre-seeded with `progress`.
pub fn store_with(progress: &ProgressState) -> Arc<RecordingBlobStore> {
    Arc::new(RecordingBlobStore::with_blob(
        STORAGE_KEY,
        &encode_progress(progress).unwrap(),
    ))
}

/// Feed `script` to the interactive loop and return everything it printed.
pub async fn run_script(state: AppState, script: &str) -> String {
    let mut output = Vec::new();
    app::run(state, script.as_bytes(), &mut output).await.unwrap();
    String::from_utf8(output).unwrap()
}

/// Decode the progress currently held by a recording store.
pub fn persisted(store: &RecordingBlobStore) -> ProgressState {
    decode_progress(&store.current(STORAGE_KEY).unwrap()).unwrap()
}
