//! Notification Emitter - transient toasts
//!
//! Each call creates an independent toast with its own timeline:
//!
//! ```text
//! t = 0            create (off-screen, inline styles)
//! t = slide_in     translateX(0)
//! t = hold         translateX(120%)
//! t = hold + exit  remove
//! ```
//!
//! There is no queue. Overlapping calls produce overlapping toasts, each
//! removed on its own schedule.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::NotificationConfig;
use crate::pipeline::scheduler::Scheduler;
use crate::renderer::{Instruction, Surface, Target};
use crate::theme;
use crate::types::NotificationKind;

/// Creates toasts and schedules their timelines.
pub struct NotificationEmitter {
    config: NotificationConfig,
    surface: Rc<dyn Surface>,
    scheduler: Rc<dyn Scheduler>,
    next_id: Cell<u32>,
}

impl NotificationEmitter {
    pub fn new(
        config: NotificationConfig,
        surface: Rc<dyn Surface>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            config,
            surface,
            scheduler,
            next_id: Cell::new(0),
        }
    }

    /// Show a toast. Returns its id.
    pub fn show(&self, message: &str, kind: NotificationKind) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let target = Target::Notification(id);

        log::debug!("notification {} ({}): {}", id, kind.as_class(), message);

        self.surface.apply(Instruction::CreateNotification {
            id,
            kind,
            text: message.to_string(),
        });
        for (property, value) in theme::notification_styles(kind) {
            self.surface.apply(Instruction::style(target, property, value));
        }

        let surface = self.surface.clone();
        self.scheduler.schedule(
            self.config.slide_in_delay_ms,
            Box::new(move || {
                surface.apply(Instruction::style(
                    target,
                    "transform",
                    theme::NOTIFICATION_ONSCREEN,
                ));
            }),
        );

        let surface = self.surface.clone();
        let scheduler = self.scheduler.clone();
        let exit_ms = self.config.exit_ms;
        self.scheduler.schedule(
            self.config.hold_ms,
            Box::new(move || {
                surface.apply(Instruction::style(
                    target,
                    "transform",
                    theme::NOTIFICATION_OFFSCREEN,
                ));
                scheduler.schedule(
                    exit_ms,
                    Box::new(move || surface.apply(Instruction::Remove { target })),
                );
            }),
        );

        id
    }

    pub fn success(&self, message: &str) -> u32 {
        self.show(message, NotificationKind::Success)
    }

    pub fn error(&self, message: &str) -> u32 {
        self.show(message, NotificationKind::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::scheduler::ManualScheduler;
    use crate::renderer::RecordingSurface;

    fn emitter() -> (NotificationEmitter, Rc<RecordingSurface>, Rc<ManualScheduler>) {
        let surface = Rc::new(RecordingSurface::new());
        let scheduler = Rc::new(ManualScheduler::new());
        let emitter = NotificationEmitter::new(
            NotificationConfig::default(),
            surface.clone(),
            scheduler.clone(),
        );
        (emitter, surface, scheduler)
    }

    fn is_removed(surface: &RecordingSurface, id: u32) -> bool {
        surface.instructions().contains(&Instruction::Remove {
            target: Target::Notification(id),
        })
    }

    #[test]
    fn test_creates_styled_toast() {
        let (emitter, surface, _) = emitter();
        let id = emitter.error("bad");

        let log = surface.instructions();
        assert_eq!(
            log[0],
            Instruction::CreateNotification {
                id,
                kind: NotificationKind::Error,
                text: "bad".into()
            }
        );
        let target = Target::Notification(id);
        assert_eq!(
            surface.last_style(target, "background").as_deref(),
            Some("linear-gradient(135deg, #e74c3c, #ff7675)")
        );
        assert_eq!(
            surface.last_style(target, "transform").as_deref(),
            Some("translateX(120%)")
        );
    }

    #[test]
    fn test_timeline() {
        let (emitter, surface, scheduler) = emitter();
        let id = emitter.success("ok");
        let target = Target::Notification(id);

        scheduler.advance(10);
        assert_eq!(
            surface.last_style(target, "transform").as_deref(),
            Some("translateX(0)")
        );

        scheduler.advance(3989);
        assert_eq!(
            surface.last_style(target, "transform").as_deref(),
            Some("translateX(0)")
        );

        scheduler.advance(1);
        assert_eq!(
            surface.last_style(target, "transform").as_deref(),
            Some("translateX(120%)")
        );
        assert!(!is_removed(&surface, id));

        scheduler.advance(300);
        assert!(is_removed(&surface, id));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_overlapping_toasts_are_independent() {
        let (emitter, surface, scheduler) = emitter();
        let first = emitter.success("one");
        scheduler.advance(1000);
        let second = emitter.error("two");
        assert_ne!(first, second);

        scheduler.advance(3300);
        assert!(is_removed(&surface, first));
        assert!(!is_removed(&surface, second));

        scheduler.advance(1000);
        assert!(is_removed(&surface, second));
    }
}
