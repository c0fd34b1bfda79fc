//! Timer scheduling.
//!
//! Everything time-based (typing ticks, toast timelines) goes through the
//! [`Scheduler`] trait so it can run against `setTimeout` in the browser or a
//! virtual clock in tests.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use portfolio_fx::pipeline::scheduler::{ManualScheduler, Scheduler};
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = fired.clone();
//! scheduler.schedule(100, Box::new(move || flag.set(true)));
//!
//! scheduler.advance(99);
//! assert!(!fired.get());
//! scheduler.advance(1);
//! assert!(fired.get());
//! ```

use std::cell::{Cell, RefCell};

/// A one-shot timer callback.
pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay.
///
/// Single-threaded: tasks are not `Send` and always run on the thread that
/// scheduled them.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

// =============================================================================
// Manual (virtual clock)
// =============================================================================

struct Pending {
    due: u64,
    seq: u64,
    task: Task,
}

/// Virtual-clock scheduler.
///
/// Time only moves when [`ManualScheduler::advance`] is called. Due tasks run
/// in `(due, insertion)` order, and tasks scheduled from inside a running task
/// are picked up in the same `advance` call if they fall due within it.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Number of tasks not yet run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move time forward by `ms`, running every task that falls due.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;

        while let Some(pending) = self.pop_due(target) {
            self.now.set(pending.due);
            // Queue borrow is released here; the task may schedule more.
            (pending.task)();
        }

        self.now.set(target);
    }

    /// Run every pending task, however far in the future.
    ///
    /// Stops after `limit` tasks so self-rearming loops terminate.
    pub fn run_until_idle(&self, limit: usize) -> usize {
        let mut ran = 0;
        while ran < limit {
            let Some(pending) = self.pop_due(u64::MAX) else {
                break;
            };
            self.now.set(pending.due);
            (pending.task)();
            ran += 1;
        }
        ran
    }

    fn pop_due(&self, target: u64) -> Option<Pending> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(queue.swap_remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}

// =============================================================================
// setTimeout (wasm32)
// =============================================================================

#[cfg(target_arch = "wasm32")]
pub use timeout::TimeoutScheduler;

#[cfg(target_arch = "wasm32")]
mod timeout {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::{Scheduler, Task};

    /// Scheduler backed by `window.setTimeout`.
    pub struct TimeoutScheduler {
        window: web_sys::Window,
    }

    impl TimeoutScheduler {
        pub fn new(window: web_sys::Window) -> Self {
            Self { window }
        }
    }

    impl Scheduler for TimeoutScheduler {
        fn schedule(&self, delay_ms: u32, task: Task) {
            let callback = Closure::once_into_js(move || task());
            let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
            if let Err(err) = self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    delay,
                )
            {
                log::warn!("setTimeout failed: {:?}", err);
            }
        }
    }
}
