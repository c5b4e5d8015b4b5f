use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};

use crate::error::SiteError;

// At most one scheduled callback; rescheduling, cancel and drop clear it.
#[derive(Default)]
pub struct PendingTimer {
    handle: Option<TimeoutHandle>,
    pending: Rc<Cell<bool>>,
}

impl PendingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        delay_ms: u32,
        callback: impl FnOnce() + 'static,
    ) -> Result<(), SiteError> {
        self.cancel();
        let pending = Rc::new(Cell::new(true));
        let fired = pending.clone();
        let handle = set_timeout_with_handle(
            move || {
                fired.set(false);
                callback();
            },
            Duration::from_millis(u64::from(delay_ms)),
        )?;
        self.handle = Some(handle);
        self.pending = pending;
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    // true only if a callback was still waiting to run
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.pending.replace(false);
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
        was_pending
    }
}

impl Drop for PendingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
