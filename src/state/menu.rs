//! Mobile menu state.
//!
//! A single `menu_open` signal. The page's render effect turns it into class
//! changes on `.nav-links` and the hamburger icon.

use spark_signals::{signal, Signal};

use crate::renderer::{Instruction, Target};
use crate::theme;

thread_local! {
    static MENU_OPEN: Signal<bool> = signal(false);
}

pub fn is_menu_open() -> bool {
    MENU_OPEN.with(|s| s.get())
}

/// Flip the menu. Returns the new state.
pub fn toggle_menu() -> bool {
    MENU_OPEN.with(|s| {
        let open = !s.get();
        s.set(open);
        open
    })
}

pub fn close_menu() {
    MENU_OPEN.with(|s| s.set(false));
}

/// Reset menu state (for testing).
pub fn reset_menu_state() {
    MENU_OPEN.with(|s| s.set(false));
}

/// Classes for the given open state.
///
/// Open: `.nav-links.active`, icon `fa-times`. Closed: the reverse with icon
/// `fa-bars`.
pub fn menu_instructions(open: bool) -> Vec<Instruction> {
    let (add_icon, remove_icon) = if open {
        (theme::ICON_TIMES, theme::ICON_BARS)
    } else {
        (theme::ICON_BARS, theme::ICON_TIMES)
    };

    let menu = if open {
        Instruction::AddClass {
            target: Target::NavMenu,
            class: theme::ACTIVE_CLASS,
        }
    } else {
        Instruction::RemoveClass {
            target: Target::NavMenu,
            class: theme::ACTIVE_CLASS,
        }
    };

    vec![
        menu,
        Instruction::RemoveClass {
            target: Target::MenuIcon,
            class: remove_icon,
        },
        Instruction::AddClass {
            target: Target::MenuIcon,
            class: add_icon,
        },
    ]
}
