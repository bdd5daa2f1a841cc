//! Show content below a label.
use crate::anchor::Anchor;
use crate::core::Element;
use crate::style::{Catalog, Style, StyleFn};

use presenter_core::{Behavior, Position};

/// A label that shows its content below itself while presenting.
///
/// Dropdowns ask to be dismissed when a press lands outside their content
/// and when their label goes away.
pub struct Dropdown<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    is_presenting: bool,
    label: Element<'a, Message, Theme, Renderer>,
    content: Element<'a, Message, Theme, Renderer>,
    placement: presenter_core::Dropdown,
    on_dismiss: Option<Message>,
    class: Theme::Class<'a>,
}

impl<'a, Message, Theme, Renderer> Dropdown<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    /// Creates a new [`Dropdown`].
    ///
    /// `content` is shown below `label` while `is_presenting` holds.
    pub fn new(
        is_presenting: bool,
        label: impl Into<Element<'a, Message, Theme, Renderer>>,
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            is_presenting,
            label: label.into(),
            content: content.into(),
            placement: presenter_core::Dropdown::default(),
            on_dismiss: None,
            class: <Theme as Catalog>::default(),
        }
    }

    /// Sets the [`Position`] of the content relative to the label.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.placement.position = position;
        self
    }

    /// Sets the minimum height of the content.
    #[must_use]
    pub fn min_height(mut self, min_height: f32) -> Self {
        self.placement.min_height = Some(min_height);
        self
    }

    /// Sets the maximum height of the content.
    #[must_use]
    pub fn max_height(mut self, max_height: f32) -> Self {
        self.placement.max_height = Some(max_height);
        self
    }

    /// Sets the message that asks the application to clear its signal.
    #[must_use]
    pub fn on_dismiss(mut self, message: Message) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// Sets the style of the [`Dropdown`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme) -> Style + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`Dropdown`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

impl<'a, Message, Theme, Renderer> From<Dropdown<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'static,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(dropdown: Dropdown<'a, Message, Theme, Renderer>) -> Self {
        Anchor {
            is_presenting: dropdown.is_presenting,
            label: dropdown.label,
            content: dropdown.content,
            strategy: dropdown.placement.sanitize().into(),
            behavior: Behavior::DISMISSIBLE,
            on_dismiss: dropdown.on_dismiss,
            class: dropdown.class,
        }
        .into()
    }
}
