//! Single-shot delays owned by a view.
//!
//! A delay fires its action only while its [`TimerGuard`] is alive and
//! armed. The guard lives in the owning component's hook slot, so
//! unmounting the view disarms it even if the sleep itself completes.

use dioxus::prelude::*;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Cancellation handle for a [`scoped_delay`]. Dropping it cancels.
#[derive(Debug)]
pub struct TimerGuard {
    armed: Rc<Cell<bool>>,
}

impl TimerGuard {
    pub fn cancel(&self) {
        if self.armed.replace(false) {
            tracing::debug!("scoped delay cancelled");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `action` once after `delay` unless the returned guard is dropped or
/// cancelled first. The future resolves to whether the action ran.
pub fn scoped_delay<F>(delay: Duration, action: F) -> (TimerGuard, impl Future<Output = bool>)
where
    F: FnOnce() + 'static,
{
    let armed = Rc::new(Cell::new(true));
    let guard = TimerGuard {
        armed: armed.clone(),
    };
    let pending = async move {
        sleep(delay).await;
        if armed.replace(false) {
            action();
            true
        } else {
            false
        }
    };
    (guard, pending)
}

/// Hook form of [`scoped_delay`], scheduled on first render and cancelled
/// when the component unmounts.
pub fn use_scoped_delay(delay: Duration, action: impl FnOnce() + 'static) -> Rc<TimerGuard> {
    use_hook(move || {
        let (guard, pending) = scoped_delay(delay, action);
        spawn(async move {
            pending.await;
        });
        Rc::new(guard)
    })
}
