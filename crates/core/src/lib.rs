//! The placement engine and presentation state behind anchored overlays.
//!
//! A presenter owns a [`Context`] holding at most one [`Overlay`]. Labels
//! inside the presenter drive a [`Presentation`] state machine with a boolean
//! signal and commit their requests into the nearest context. Where the
//! overlay lands is decided by a [`Placement`]: a [`Dropdown`] anchored below
//! its label, or a screen-centered [`Modal`].
//!
//! Nothing in this crate renders; the widget crate wires it into iced.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod dropdown;
pub mod error;
pub mod geometry;
pub mod modal;
pub mod placement;
pub mod position;
pub mod presentation;
pub mod registry;
pub mod screen;
pub mod transition;

pub use iced_core::time;
pub use iced_core::{Padding, Point, Rectangle, Size, Vector};

pub use dropdown::Dropdown;
pub use error::Error;
pub use geometry::{Latch, Snapshot, Space};
pub use modal::Modal;
pub use placement::{Placement, Strategy};
pub use position::{Alignment, Position};
pub use presentation::{Behavior, Phase, Presentation, Request};
pub use registry::{Context, Overlay, Registry};
pub use screen::{SCREEN_PADDING, Screen};
pub use transition::Transition;
