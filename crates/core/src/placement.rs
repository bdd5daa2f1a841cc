//! Where an overlay lands on screen.
use crate::{Dropdown, Modal, Rectangle, Screen};

/// Computes the rectangle of an overlay.
pub trait Placement {
    /// Places the overlay of a label measured at `label`, inside `screen`.
    ///
    /// Both rectangles, and the result, are in the presenter's coordinate
    /// space.
    fn place(&self, label: Rectangle, screen: &Screen) -> Rectangle;
}

/// One of the built-in overlay variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Anchored below the label.
    Dropdown(Dropdown),
    /// Centered on, or filling, the screen.
    Modal(Modal),
}

impl Placement for Strategy {
    fn place(&self, label: Rectangle, screen: &Screen) -> Rectangle {
        let placement = match self {
            Strategy::Dropdown(dropdown) => dropdown.place(label, screen),
            Strategy::Modal(modal) => modal.place(label, screen),
        };

        log::trace!("Placed {self:?} for label {label:?} at {placement:?}");

        placement
    }
}

impl From<Dropdown> for Strategy {
    fn from(dropdown: Dropdown) -> Self {
        Strategy::Dropdown(dropdown)
    }
}

impl From<Modal> for Strategy {
    fn from(modal: Modal) -> Self {
        Strategy::Modal(modal)
    }
}
