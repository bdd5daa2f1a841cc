//! Anchored dropdowns and modals for iced.
//!
//! Any subtree can host overlays by wrapping it in a [`presenter()`]. Labels
//! inside it, created with [`dropdown()`] or [`modal()`], present their content
//! through the nearest presenter while the boolean they are given holds.
//!
//! ```ignore
//! use presenter::{Position, dropdown, presenter};
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     presenter(
//!         column![
//!             dropdown(state.is_open, button("Fruits").on_press(Message::Toggle), fruits())
//!                 .position(Position::Leading(180.0))
//!                 .max_height(120.0)
//!                 .on_dismiss(Message::Close),
//!             text("Pick a fruit"),
//!         ],
//!     )
//!     .into()
//! }
//! ```
//!
//! The placement engine lives in [`presenter_core`] and does not depend on
//! any renderer, so it can be driven by other hosts through its
//! [`Registry`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use presenter_core as engine;
pub use presenter_widget as widget;

pub use presenter_core::{
    Alignment, Behavior, Context, Error, Overlay, Phase, Placement, Position, Presentation,
    Registry, Request, SCREEN_PADDING, Screen, Strategy, Transition,
};
pub use presenter_widget::style;
pub use presenter_widget::{
    Catalog, Dropdown, Modal, Presenter, Style, dropdown, modal, presenter,
};
