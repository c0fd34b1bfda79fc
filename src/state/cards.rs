//! Project cards: hover tilt and the "view details" stub.

use crate::renderer::{Instruction, Target};
use crate::theme;

/// Lift and tilt a card under the pointer.
pub fn card_enter(index: usize) -> Instruction {
    Instruction::style(
        Target::ProjectCard(index),
        "transform",
        theme::CARD_HOVER_TRANSFORM,
    )
}

/// Return a card to rest.
pub fn card_leave(index: usize) -> Instruction {
    Instruction::style(
        Target::ProjectCard(index),
        "transform",
        theme::CARD_REST_TRANSFORM,
    )
}

/// Toast text for a card's details button.
pub fn details_message(title: &str) -> String {
    format!("Opening details for: {}", title)
}
