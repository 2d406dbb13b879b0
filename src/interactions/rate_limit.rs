//! Rate-limiting wrappers for high-frequency event handlers. Nothing on the
//! current page applies them; they are exported for reuse.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Delays a callback until calls stop arriving for `wait_ms`.
pub struct Debounce {
    wait_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Restarts the wait. Replacing the previous timeout drops it, which
    /// cancels it.
    pub fn call(&self) {
        let callback = self.callback.clone();
        let timeout = Timeout::new(self.wait_ms, move || callback());
        self.pending.replace(Some(timeout));
    }
}

/// Runs a callback at most once per `limit_ms`; calls landing inside the
/// cooldown window are dropped, not queued.
pub struct Throttle {
    limit_ms: u32,
    callback: Rc<dyn Fn()>,
    in_cooldown: Rc<Cell<bool>>,
}

impl Throttle {
    pub fn new(limit_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            limit_ms,
            callback: Rc::new(callback),
            in_cooldown: Rc::new(Cell::new(false)),
        }
    }

    pub fn call(&self) {
        if self.in_cooldown.get() {
            return;
        }
        (self.callback)();
        self.in_cooldown.set(true);

        let in_cooldown = self.in_cooldown.clone();
        Timeout::new(self.limit_ms, move || in_cooldown.set(false)).forget();
    }
}
