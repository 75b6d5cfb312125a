// Portal session state.
//
// A single process-wide flag: any non-empty credential pair opens it. This is
// a presence check, not authentication.

use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct SessionFlag {
    open: AtomicBool,
}

impl SessionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn is_present(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}
