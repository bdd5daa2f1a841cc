//! Style the chrome of presented overlays.
use crate::core::border::{self, Border};
use crate::core::{Background, Color, Shadow, Theme, Vector};

/// The radius of the rounded corners of overlay chrome.
pub const CORNER_RADIUS: f32 = 15.0;

/// The appearance of a presented overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// The [`Background`] behind the overlay content, if any.
    pub background: Option<Background>,
    /// The [`Border`] of the overlay content.
    pub border: Border,
    /// The [`Shadow`] cast by the overlay content.
    pub shadow: Shadow,
    /// The [`Background`] drawn over the whole presenter, if any.
    ///
    /// Presses outside the content are captured even without a backdrop.
    pub backdrop: Option<Background>,
}

impl Style {
    /// Returns the [`Style`] faded to the given `opacity`.
    #[must_use]
    pub fn scale_alpha(self, opacity: f32) -> Self {
        Self {
            background: self
                .background
                .map(|background| background.scale_alpha(opacity)),
            border: Border {
                color: self.border.color.scale_alpha(opacity),
                ..self.border
            },
            shadow: Shadow {
                color: self.shadow.color.scale_alpha(opacity),
                ..self.shadow
            },
            backdrop: self.backdrop.map(|backdrop| backdrop.scale_alpha(opacity)),
        }
    }
}

/// The theme catalog of presented overlays.
pub trait Catalog {
    /// The item class of the [`Catalog`].
    type Class<'a>;

    /// The default class of a dropdown.
    fn default<'a>() -> Self::Class<'a>;

    /// The default class of a modal.
    fn default_modal<'a>() -> Self::Class<'a>;

    /// The [`Style`] of a class.
    fn style(&self, class: &Self::Class<'_>) -> Style;
}

/// A styling function for a presented overlay.
///
/// This is just a boxed closure: `Fn(&Theme) -> Style`.
pub type StyleFn<'a, Theme> = Box<dyn Fn(&Theme) -> Style + 'a>;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(dropdown)
    }

    fn default_modal<'a>() -> Self::Class<'a> {
        Box::new(modal)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

/// Hangs the overlay off its label: square top corners, rounded bottom
/// corners and a drop shadow.
pub fn dropdown(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 0.0,
            radius: border::Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: CORNER_RADIUS,
                bottom_left: CORNER_RADIUS,
            },
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(if palette.is_dark { 0.5 } else { 0.2 }),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 10.0,
        },
        backdrop: None,
    }
}

/// A rounded card over a dimmed presenter.
pub fn modal(theme: &Theme) -> Style {
    let palette = theme.extended_palette();

    Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: CORNER_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.3),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        backdrop: Some(Color::BLACK.scale_alpha(0.4).into()),
    }
}

/// No chrome at all; the content draws everything.
pub fn transparent(_theme: &Theme) -> Style {
    Style {
        background: None,
        border: Border::default(),
        shadow: Shadow::default(),
        backdrop: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_rounds_only_the_bottom() {
        let style = dropdown(&Theme::Light);

        assert_eq!(style.border.radius.top_left, 0.0);
        assert_eq!(style.border.radius.top_right, 0.0);
        assert_eq!(style.border.radius.bottom_left, CORNER_RADIUS);
        assert_eq!(style.border.radius.bottom_right, CORNER_RADIUS);
        assert!(style.shadow.offset.y > 0.0);
    }

    #[test]
    fn fading_scales_every_color() {
        let style = modal(&Theme::Dark).scale_alpha(0.0);

        assert_eq!(style.shadow.color.a, 0.0);
        assert_eq!(style.border.color.a, 0.0);
        assert_eq!(style.backdrop, Some(Background::Color(Color::TRANSPARENT)));
    }
}
