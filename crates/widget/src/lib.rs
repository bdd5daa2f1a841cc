//! iced widgets that present anchored overlays.
//!
//! Wrap a subtree in a [`Presenter`] and place [`Dropdown`] and [`Modal`]
//! labels anywhere inside it. Each label is driven by a boolean owned by the
//! application: set it to present the content, clear it to dismiss. When a
//! label asks to be dismissed, for instance after a tap outside its content,
//! it publishes its `on_dismiss` message and waits for the boolean to be
//! cleared.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use iced_core as core;

mod anchor;
mod surface;

#[cfg(test)]
mod testing;

pub mod dropdown;
pub mod modal;
pub mod presenter;
pub mod style;

pub use dropdown::Dropdown;
pub use modal::Modal;
pub use presenter::Presenter;
pub use style::{Catalog, Style};

use crate::core::Element;

/// Creates a [`Presenter`] for the labels inside `content`.
pub fn presenter<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Presenter<'a, Message, Theme, Renderer> {
    Presenter::new(content)
}

/// Creates a [`Dropdown`] showing `content` below `label` while
/// `is_presenting` holds.
pub fn dropdown<'a, Message, Theme, Renderer>(
    is_presenting: bool,
    label: impl Into<Element<'a, Message, Theme, Renderer>>,
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Dropdown<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    Dropdown::new(is_presenting, label, content)
}

/// Creates a [`Modal`] showing `content` over its presenter while
/// `is_presenting` holds.
pub fn modal<'a, Message, Theme, Renderer>(
    is_presenting: bool,
    label: impl Into<Element<'a, Message, Theme, Renderer>>,
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Modal<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    Modal::new(is_presenting, label, content)
}
