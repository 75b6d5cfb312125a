// AppState builders for adapter and end-to-end tests.

use chrono::NaiveDate;

use crate::shell::state::{AppState, InMemoryStores};
use crate::tests::fixtures::essays::anchor_date;

fn fixed_today() -> NaiveDate {
    anchor_date()
}

pub fn make_test_state() -> AppState {
    AppState::new(InMemoryStores::empty(), fixed_today)
}

pub fn make_seeded_state() -> AppState {
    AppState::new(InMemoryStores::seeded(), fixed_today)
}

pub fn make_offline_state() -> AppState {
    let mut stores = InMemoryStores::empty();
    stores.toggle_offline();
    AppState::new(stores, fixed_today)
}

/// Test state with the session already open.
pub fn make_signed_in_state() -> AppState {
    let state = make_test_state();
    state.session.open();
    state
}
