//! Overlays anchored below their label.
use crate::error::{self, Error};
use crate::geometry::{self, Edges};
use crate::{Alignment, Placement, Position, Rectangle, SCREEN_PADDING, Screen};

/// The height used when no minimum is given; a comfortable tap target.
pub const DEFAULT_MIN_HEIGHT: f32 = 44.0;

/// The height used when no maximum is given.
pub const DEFAULT_MAX_HEIGHT: f32 = 200.0;

/// A dropdown placement.
///
/// The overlay always opens downwards from the bottom edge of the label and is
/// only clamped horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dropdown {
    /// The width strategy and alignment.
    pub position: Position,
    /// The minimum height; [`DEFAULT_MIN_HEIGHT`] if `None`.
    pub min_height: Option<f32>,
    /// The maximum height; [`DEFAULT_MAX_HEIGHT`] if `None`.
    pub max_height: Option<f32>,
}

impl Dropdown {
    /// Creates a [`Dropdown`] with the given [`Position`] and default heights.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Sets the [`Position`] of the [`Dropdown`].
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the minimum height of the [`Dropdown`].
    #[must_use]
    pub fn min_height(mut self, min_height: f32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    /// Sets the maximum height of the [`Dropdown`].
    #[must_use]
    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Returns the effective `(min, max)` heights.
    pub fn height_range(&self) -> (f32, f32) {
        (
            self.min_height.unwrap_or(DEFAULT_MIN_HEIGHT),
            self.max_height.unwrap_or(DEFAULT_MAX_HEIGHT),
        )
    }

    /// Checks the position and the height bounds.
    pub fn validate(&self) -> Result<(), Error> {
        self.position.validate()?;

        for height in [self.min_height, self.max_height].into_iter().flatten() {
            if !error::is_length(height) {
                return Err(Error::InvalidHeight(height));
            }
        }

        match (self.min_height, self.max_height) {
            (Some(min), Some(max)) if min > max => Err(Error::InvertedHeights { min, max }),
            _ => Ok(()),
        }
    }

    /// Replaces unusable values with their defaults.
    ///
    /// An inverted range keeps the minimum, which is what placement would
    /// honor anyway.
    #[must_use]
    pub fn sanitize(self) -> Self {
        let Err(error) = self.validate() else {
            return self;
        };

        log::warn!("Sanitizing {self:?}: {error}");

        let usable = |height: Option<f32>| height.filter(|height| error::is_length(*height));

        let min_height = usable(self.min_height);
        let max_height = usable(self.max_height)
            .filter(|max| min_height.is_none_or(|min| min <= *max));

        Self {
            position: self.position.sanitize(),
            min_height,
            max_height,
        }
    }

    fn height(&self, available: f32) -> f32 {
        let (min, max) = self.height_range();
        let available = available.max(0.0);

        if available < min {
            available
        } else {
            available.min(max).max(min)
        }
    }
}

impl Placement for Dropdown {
    fn place(&self, label: Rectangle, screen: &Screen) -> Rectangle {
        let bounds = screen.bounds;

        let width = self
            .position
            .width()
            .unwrap_or(label.width)
            .min(bounds.width);

        let x = match self.position.alignment() {
            Alignment::Leading => label.min_x(),
            Alignment::Trailing => label.max_x() - width,
            Alignment::Center => geometry::center(&label).x - width / 2.0,
        };

        let y = label.max_y();

        let mut placement = Rectangle {
            x,
            y,
            width,
            height: self.height(bounds.max_y() - y),
        };

        let left = bounds.min_x() + SCREEN_PADDING;
        let right = bounds.max_x() - SCREEN_PADDING;

        if placement.min_x() < left {
            match self.position {
                Position::MatchLabelWidth | Position::Center(_) | Position::Leading(_) => {
                    placement.width = bounds.width - SCREEN_PADDING;
                    placement.x = left;
                }
                Position::Trailing(_) => {
                    let overflow = left - placement.min_x();

                    placement.width -= overflow;
                    placement.x += overflow;
                }
            }
        }

        placement.x = placement.x.min(right);

        if placement.max_x() > right {
            placement.width -= placement.max_x() - right;
        }

        placement.width = placement.width.max(0.0);
        placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Size};

    fn screen() -> Screen {
        Screen::new(Rectangle::new(Point::ORIGIN, Size::new(320.0, 600.0)))
    }

    fn label() -> Rectangle {
        Rectangle::new(Point::new(20.0, 100.0), Size::new(100.0, 40.0))
    }

    #[test]
    fn matches_label_width_below_label() {
        let placement = Dropdown::default().place(label(), &screen());

        assert_eq!(
            placement,
            Rectangle::new(Point::new(20.0, 140.0), Size::new(100.0, 200.0))
        );
    }

    #[test]
    fn trailing_overflow_shrinks_from_the_left() {
        let placement = Dropdown::new(Position::Trailing(200.0)).place(label(), &screen());

        assert_eq!(placement.x, 3.0);
        assert_eq!(placement.width, 117.0);
        assert_eq!(placement.max_x(), label().max_x());
        assert_eq!(placement.y, 140.0);
    }

    #[test]
    fn centered_overflow_pins_to_the_left_padding() {
        let placement = Dropdown::new(Position::Center(200.0)).place(label(), &screen());

        assert_eq!(placement.x, 3.0);
        assert_eq!(placement.width, 314.0);
    }

    #[test]
    fn leading_overflow_shrinks_from_the_right() {
        let label = Rectangle::new(Point::new(100.0, 100.0), Size::new(60.0, 30.0));
        let placement = Dropdown::new(Position::Leading(300.0)).place(label, &screen());

        assert_eq!(placement.x, 100.0);
        assert_eq!(placement.width, 217.0);
    }

    #[test]
    fn fixed_width_is_capped_to_the_screen() {
        let placement = Dropdown::new(Position::Leading(1000.0)).place(label(), &screen());

        assert_eq!(placement.x, 20.0);
        assert_eq!(placement.max_x(), 317.0);
    }

    #[test]
    fn centered_fits_without_adjustment() {
        let label = Rectangle::new(Point::new(110.0, 10.0), Size::new(100.0, 30.0));
        let placement = Dropdown::new(Position::Center(160.0)).place(label, &screen());

        assert_eq!(placement.x, 80.0);
        assert_eq!(placement.width, 160.0);
        assert_eq!(placement.y, 40.0);
    }

    #[test]
    fn height_is_clamped_to_bounds() {
        let at = |bottom: f32| Rectangle::new(Point::new(20.0, bottom - 40.0), Size::new(100.0, 40.0));

        let dropdown = Dropdown::default();
        assert_eq!(dropdown.place(at(140.0), &screen()).height, 200.0);
        assert_eq!(dropdown.place(at(500.0), &screen()).height, 100.0);

        let bounded = Dropdown::default().min_height(60.0).max_height(80.0);
        assert_eq!(bounded.place(at(140.0), &screen()).height, 80.0);
        assert_eq!(bounded.place(at(530.0), &screen()).height, 70.0);
    }

    #[test]
    fn height_falls_back_to_available_space() {
        let label = Rectangle::new(Point::new(20.0, 530.0), Size::new(100.0, 40.0));

        assert_eq!(Dropdown::default().place(label, &screen()).height, 30.0);

        let below = Rectangle::new(Point::new(20.0, 600.0), Size::new(100.0, 40.0));
        assert_eq!(Dropdown::default().place(below, &screen()).height, 0.0);
    }

    #[test]
    fn minimum_wins_over_default_maximum() {
        let placement = Dropdown::default().min_height(300.0).place(label(), &screen());

        assert_eq!(placement.height, 300.0);
    }

    #[test]
    fn never_opens_upwards() {
        let label = Rectangle::new(Point::new(20.0, 550.0), Size::new(100.0, 40.0));
        let placement = Dropdown::default().place(label, &screen());

        assert_eq!(placement.y, 590.0);
    }

    #[test]
    fn respects_a_translated_screen() {
        let screen = Screen::new(Rectangle::new(Point::new(-50.0, -20.0), Size::new(320.0, 600.0)));
        let label = Rectangle::new(Point::new(-60.0, 0.0), Size::new(100.0, 40.0));

        let placement = Dropdown::default().place(label, &screen);

        assert_eq!(placement.x, -47.0);
        assert_eq!(placement.max_x(), 267.0);
        assert_eq!(placement.height, 200.0);
    }

    #[test]
    fn edges_stay_inside_the_padded_screen() {
        let positions = [
            Position::MatchLabelWidth,
            Position::Center(90.0),
            Position::Center(400.0),
            Position::Leading(150.0),
            Position::Leading(500.0),
            Position::Trailing(150.0),
            Position::Trailing(500.0),
        ];

        for position in positions {
            for x in (0..=300).step_by(15) {
                for width in [1.0, 20.0, 100.0, 320.0] {
                    let width = f32::min(width, 320.0 - x as f32);
                    let label = Rectangle::new(Point::new(x as f32, 50.0), Size::new(width, 30.0));

                    let placement = Dropdown::new(position).place(label, &screen());

                    assert!(placement.min_x() >= 3.0, "{position:?} {label:?} {placement:?}");
                    assert!(placement.max_x() <= 317.0, "{position:?} {label:?} {placement:?}");
                    assert!(placement.width >= 0.0);
                }
            }
        }
    }

    #[test]
    fn validation() {
        assert_eq!(Dropdown::default().validate(), Ok(()));
        assert_eq!(
            Dropdown::default().min_height(100.0).max_height(50.0).validate(),
            Err(Error::InvertedHeights {
                min: 100.0,
                max: 50.0
            })
        );
        assert_eq!(
            Dropdown::default().max_height(-1.0).validate(),
            Err(Error::InvalidHeight(-1.0))
        );

        let sanitized = Dropdown::new(Position::Center(-5.0))
            .min_height(100.0)
            .max_height(50.0)
            .sanitize();

        assert_eq!(sanitized.position, Position::MatchLabelWidth);
        assert_eq!(sanitized.min_height, Some(100.0));
        assert_eq!(sanitized.max_height, None);
    }
}
