//! Overlays centered on, or filling, the screen.
use crate::error::{self, Error};
use crate::geometry;
use crate::{Placement, Point, Rectangle, SCREEN_PADDING, Screen, Size};

/// The padding used when none is given.
pub const DEFAULT_PADDING: f32 = 50.0;

/// A modal placement.
///
/// With a [`size`](Modal::size) the overlay is shrunk to fit and centered in
/// the safe area of the screen. Without one it fills the safe area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modal {
    /// The requested size of the content, if any.
    pub size: Option<Size>,
    /// The space kept around the content.
    pub padding: f32,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            size: None,
            padding: DEFAULT_PADDING,
        }
    }
}

impl Modal {
    /// Creates a [`Modal`] filling the screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`Modal`] with a fixed content size.
    pub fn sized(size: impl Into<Size>) -> Self {
        Self {
            size: Some(size.into()),
            ..Self::default()
        }
    }

    /// Sets the padding of the [`Modal`].
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Checks the size and the padding.
    pub fn validate(&self) -> Result<(), Error> {
        if !error::is_length(self.padding) {
            return Err(Error::InvalidPadding(self.padding));
        }

        match self.size {
            Some(Size { width, height })
                if !error::is_length(width) || !error::is_length(height) =>
            {
                Err(Error::InvalidSize { width, height })
            }
            _ => Ok(()),
        }
    }

    /// Replaces unusable values with their defaults.
    #[must_use]
    pub fn sanitize(self) -> Self {
        let Err(error) = self.validate() else {
            return self;
        };

        log::warn!("Sanitizing {self:?}: {error}");

        Self {
            size: self.size.filter(|size| {
                error::is_length(size.width) && error::is_length(size.height)
            }),
            padding: if error::is_length(self.padding) {
                self.padding
            } else {
                DEFAULT_PADDING
            },
        }
    }
}

impl Placement for Modal {
    fn place(&self, _label: Rectangle, screen: &Screen) -> Rectangle {
        let available = screen.available();

        let Some(requested) = self.size else {
            let inset = self.padding.max(SCREEN_PADDING);

            return Rectangle {
                x: available.x + inset,
                y: available.y + inset,
                width: (available.width - inset * 2.0).max(0.0),
                height: (available.height - inset * 2.0).max(0.0),
            };
        };

        let fit = |length: f32, room: f32| {
            let overflow = (length + self.padding * 2.0) - (room - SCREEN_PADDING * 2.0);

            if overflow > 0.0 {
                (length - overflow).max(0.0)
            } else {
                length
            }
        };

        let size = Size::new(
            fit(requested.width, available.width),
            fit(requested.height, available.height),
        );

        let center = geometry::center(&available);

        Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Padding;
    use crate::geometry::Edges;

    fn screen() -> Screen {
        Screen::new(Rectangle::new(Point::ORIGIN, Size::new(320.0, 600.0)))
    }

    #[test]
    fn oversized_modal_is_shrunk_and_centered() {
        let placement = Modal::sized([300.0, 800.0]).place(Rectangle::with_size(Size::ZERO), &screen());

        assert_eq!(placement.width, 214.0);
        assert_eq!(placement.height, 494.0);
        assert_eq!(geometry::center(&placement), Point::new(160.0, 300.0));
        assert_eq!(placement.x, 53.0);
        assert_eq!(placement.y, 53.0);
    }

    #[test]
    fn small_modal_keeps_its_size() {
        let placement = Modal::sized([100.0, 80.0])
            .padding(10.0)
            .place(Rectangle::with_size(Size::ZERO), &screen());

        assert_eq!(
            placement,
            Rectangle::new(Point::new(110.0, 260.0), Size::new(100.0, 80.0))
        );
    }

    #[test]
    fn sized_modal_stays_in_the_safe_area() {
        let screen = screen().safe_area(Padding {
            top: 40.0,
            right: 0.0,
            bottom: 20.0,
            left: 0.0,
        });

        let placement = Modal::sized([1000.0, 1000.0]).place(Rectangle::with_size(Size::ZERO), &screen);
        let available = screen.available();

        assert_eq!(geometry::center(&placement), geometry::center(&available));
        assert!(placement.min_x() >= available.min_x());
        assert!(placement.max_x() <= available.max_x());
        assert!(placement.min_y() >= available.min_y());
        assert!(placement.max_y() <= available.max_y());
        assert_eq!(placement.height, 540.0 - 100.0 - 6.0);
    }

    #[test]
    fn unsized_modal_fills_the_screen() {
        let placement = Modal::new().place(Rectangle::with_size(Size::ZERO), &screen());

        assert_eq!(
            placement,
            Rectangle::new(Point::new(50.0, 50.0), Size::new(220.0, 500.0))
        );
    }

    #[test]
    fn unsized_modal_keeps_the_screen_padding() {
        let placement = Modal::new()
            .padding(0.0)
            .place(Rectangle::with_size(Size::ZERO), &screen().safe_area([10.0, 0.0]));

        assert_eq!(
            placement,
            Rectangle::new(Point::new(3.0, 13.0), Size::new(314.0, 574.0))
        );
    }

    #[test]
    fn label_is_irrelevant() {
        let far = Rectangle::new(Point::new(900.0, 900.0), Size::new(5.0, 5.0));

        assert_eq!(
            Modal::sized([50.0, 50.0]).place(far, &screen()),
            Modal::sized([50.0, 50.0]).place(Rectangle::with_size(Size::ZERO), &screen())
        );
    }

    #[test]
    fn validation() {
        assert_eq!(Modal::default().validate(), Ok(()));
        assert_eq!(
            Modal::new().padding(-1.0).validate(),
            Err(Error::InvalidPadding(-1.0))
        );
        assert!(Modal::sized([f32::NAN, 10.0]).validate().is_err());

        let sanitized = Modal::sized([-1.0, 10.0]).padding(f32::INFINITY).sanitize();
        assert_eq!(sanitized, Modal::default());
    }
}
