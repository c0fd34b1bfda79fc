//! Page Pipeline
//!
//! Connects page events to the output surface.
//!
//! ```text
//! DOM event → Page handler → signals / trackers → Instruction → Surface
//!                        └→ Scheduler (typing ticks, toast timelines)
//! ```
//!
//! - **page** - The [`Page`] controller and its render effects
//! - **scheduler** - Delayed tasks: virtual clock for tests, `setTimeout` in the browser
//! - **mount** - Browser wiring and the `mountPortfolio` / `unmountPortfolio` exports (wasm32)

pub mod page;
pub mod scheduler;

#[cfg(target_arch = "wasm32")]
pub mod mount;

pub use page::Page;
pub use scheduler::{ManualScheduler, Scheduler, Task};

#[cfg(target_arch = "wasm32")]
pub use mount::{mount, MountHandle};
#[cfg(target_arch = "wasm32")]
pub use scheduler::TimeoutScheduler;
