//! Horizontal width and alignment strategies for dropdowns.
use crate::error::{self, Error};

/// How wide a dropdown is and where it lines up with its label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// As wide as the label, aligned to its leading edge.
    #[default]
    MatchLabelWidth,
    /// A fixed width, centered under the label.
    Center(f32),
    /// A fixed width, aligned to the label's leading edge.
    Leading(f32),
    /// A fixed width, aligned to the label's trailing edge.
    Trailing(f32),
}

/// The horizontal edge a dropdown lines up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// The left edge of the label.
    #[default]
    Leading,
    /// The horizontal center of the label.
    Center,
    /// The right edge of the label.
    Trailing,
}

impl Position {
    /// Returns the [`Alignment`] implied by the [`Position`].
    pub fn alignment(self) -> Alignment {
        match self {
            Position::MatchLabelWidth | Position::Leading(_) => Alignment::Leading,
            Position::Center(_) => Alignment::Center,
            Position::Trailing(_) => Alignment::Trailing,
        }
    }

    /// Returns the fixed width, or `None` when the label width is used.
    pub fn width(self) -> Option<f32> {
        match self {
            Position::MatchLabelWidth => None,
            Position::Center(width) | Position::Leading(width) | Position::Trailing(width) => {
                Some(width)
            }
        }
    }

    /// Checks that a fixed width is usable.
    pub fn validate(self) -> Result<(), Error> {
        match self.width() {
            Some(width) if !error::is_length(width) || width == 0.0 => {
                Err(Error::InvalidWidth(width))
            }
            _ => Ok(()),
        }
    }

    /// Falls back to [`Position::MatchLabelWidth`] if the fixed width is not
    /// usable.
    #[must_use]
    pub fn sanitize(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(error) => {
                log::warn!("Ignoring dropdown position {self:?}: {error}");
                Position::MatchLabelWidth
            }
        }
    }
}
