//! The display area overlays are clamped against.
use crate::{Padding, Rectangle};

/// The minimum distance kept between an overlay and the edge of the screen.
pub const SCREEN_PADDING: f32 = 3.0;

/// The bounds of the host display and the insets obscured by system chrome.
///
/// A [`Screen`] is rebuilt for every placement, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    /// The bounds of the display, in the presenter's coordinate space.
    pub bounds: Rectangle,
    /// The insets that content should stay clear of.
    pub safe_area: Padding,
}

impl Screen {
    /// Creates a [`Screen`] without safe-area insets.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            safe_area: Padding::ZERO,
        }
    }

    /// Sets the safe-area insets of the [`Screen`].
    #[must_use]
    pub fn safe_area(mut self, safe_area: impl Into<Padding>) -> Self {
        self.safe_area = safe_area.into();
        self
    }

    /// Returns the bounds minus the safe-area insets.
    pub fn available(&self) -> Rectangle {
        let Padding {
            top,
            right,
            bottom,
            left,
        } = self.safe_area;

        Rectangle {
            x: self.bounds.x + left,
            y: self.bounds.y + top,
            width: (self.bounds.width - left - right).max(0.0),
            height: (self.bounds.height - top - bottom).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Size};

    #[test]
    fn available_area_excludes_insets() {
        let screen = Screen::new(Rectangle::new(Point::ORIGIN, Size::new(320.0, 600.0))).safe_area(
            Padding {
                top: 44.0,
                right: 0.0,
                bottom: 34.0,
                left: 10.0,
            },
        );

        assert_eq!(
            screen.available(),
            Rectangle::new(Point::new(10.0, 44.0), Size::new(310.0, 522.0))
        );
    }

    #[test]
    fn insets_larger_than_screen_leave_nothing() {
        let screen =
            Screen::new(Rectangle::new(Point::ORIGIN, Size::new(40.0, 40.0))).safe_area(30.0);

        assert_eq!(screen.available().size(), Size::ZERO);
    }
}
