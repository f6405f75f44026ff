//! Nullable link opener: record URLs instead of launching a browser.

use cryp_history::LinkOpener;
use std::sync::Mutex;

#[derive(Default)]
pub struct NullLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl NullLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every URL "opened" so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for NullLinkOpener {
    fn open_external(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}
