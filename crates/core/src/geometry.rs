//! Measured frames and the coordinate spaces they live in.
use crate::{Point, Rectangle, Size};

use std::cell::OnceCell;

/// The name of the coordinate space shared by a presenter and its
/// descendants.
pub const PRESENTER: Space = Space::Named("presenter");

/// Edge accessors for a [`Rectangle`].
pub trait Edges {
    /// The x coordinate of the left edge.
    fn min_x(&self) -> f32;
    /// The x coordinate of the right edge.
    fn max_x(&self) -> f32;
    /// The y coordinate of the top edge.
    fn min_y(&self) -> f32;
    /// The y coordinate of the bottom edge.
    fn max_y(&self) -> f32;
}

impl Edges for Rectangle {
    fn min_x(&self) -> f32 {
        self.x
    }

    fn max_x(&self) -> f32 {
        self.x + self.width
    }

    fn min_y(&self) -> f32 {
        self.y
    }

    fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Returns the center point of the given bounds.
pub fn center(bounds: &Rectangle) -> Point {
    Point::new(
        (bounds.min_x() + bounds.max_x()) / 2.0,
        (bounds.min_y() + bounds.max_y()) / 2.0,
    )
}

/// A coordinate space frames can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Space {
    /// Window coordinates.
    #[default]
    Global,
    /// The space of a named ancestor, with its top-left corner at the origin.
    Named(&'static str),
}

/// The frame of a view, measured at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    frame: Rectangle,
    space: Space,
}

impl Snapshot {
    /// Creates a [`Snapshot`] of a frame already expressed in `space`.
    pub fn new(frame: Rectangle, space: Space) -> Self {
        Self { frame, space }
    }

    /// Extracts the frame of `absolute` bounds relative to a space whose
    /// top-left corner sits at `origin` in window coordinates.
    pub fn measure(absolute: Rectangle, origin: Point, space: Space) -> Self {
        let offset = origin - Point::ORIGIN;

        Self {
            frame: Rectangle::new(absolute.position() - offset, absolute.size()),
            space,
        }
    }

    /// The measured frame.
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// The measured size.
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// The coordinate space of the frame.
    pub fn space(&self) -> Space {
        self.space
    }
}

/// A set-once cell for the first [`Snapshot`] of a view.
///
/// Re-measuring on every layout pass would feed the overlay's own layout back
/// into the label's position, so only the first measurement is kept.
#[derive(Debug, Clone, Default)]
pub struct Latch(OnceCell<Snapshot>);

impl Latch {
    /// Creates an empty [`Latch`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the latched snapshot, measuring it with `measure` if this is
    /// the first call.
    pub fn capture(&self, measure: impl FnOnce() -> Snapshot) -> &Snapshot {
        self.0.get_or_init(measure)
    }

    /// Returns the latched snapshot, if any.
    pub fn get(&self) -> Option<&Snapshot> {
        self.0.get()
    }

    /// Returns whether a snapshot has been captured.
    pub fn is_set(&self) -> bool {
        self.0.get().is_some()
    }
}
