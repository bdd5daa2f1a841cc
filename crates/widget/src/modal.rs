//! Show content in the middle of the presenter.
use crate::anchor::Anchor;
use crate::core::{Element, Size};
use crate::style::{Catalog, Style, StyleFn};

use presenter_core::Behavior;

/// A label that shows its content centered on, or filling, its presenter.
///
/// Unlike a [`Dropdown`](crate::Dropdown), a [`Modal`] stays up on external
/// taps and disappearance unless told otherwise.
pub struct Modal<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    is_presenting: bool,
    label: Element<'a, Message, Theme, Renderer>,
    content: Element<'a, Message, Theme, Renderer>,
    placement: presenter_core::Modal,
    behavior: Behavior,
    on_dismiss: Option<Message>,
    class: Theme::Class<'a>,
}

impl<'a, Message, Theme, Renderer> Modal<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    /// Creates a new [`Modal`] filling its presenter.
    pub fn new(
        is_presenting: bool,
        label: impl Into<Element<'a, Message, Theme, Renderer>>,
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            is_presenting,
            label: label.into(),
            content: content.into(),
            placement: presenter_core::Modal::default(),
            behavior: Behavior::default(),
            on_dismiss: None,
            class: <Theme as Catalog>::default_modal(),
        }
    }

    /// Sets the size of the content. It is shrunk to fit and centered.
    #[must_use]
    pub fn size(mut self, size: impl Into<Size>) -> Self {
        self.placement.size = Some(size.into());
        self
    }

    /// Sets the space kept around the content.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.placement.padding = padding;
        self
    }

    /// Sets whether a press outside the content asks for a dismissal.
    #[must_use]
    pub fn dismiss_on_external_tap(mut self, dismiss: bool) -> Self {
        self.behavior.dismiss_on_external_tap = dismiss;
        self
    }

    /// Sets whether removing the label asks for a dismissal.
    #[must_use]
    pub fn dismiss_on_disappear(mut self, dismiss: bool) -> Self {
        self.behavior.dismiss_on_disappear = dismiss;
        self
    }

    /// Sets the message that asks the application to clear its signal.
    #[must_use]
    pub fn on_dismiss(mut self, message: Message) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// Sets the style of the [`Modal`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme) -> Style + 'a) -> Self
    where
        Theme::Class<'a>: From<StyleFn<'a, Theme>>,
    {
        self.class = (Box::new(style) as StyleFn<'a, Theme>).into();
        self
    }

    /// Sets the style class of the [`Modal`].
    #[must_use]
    pub fn class(mut self, class: impl Into<Theme::Class<'a>>) -> Self {
        self.class = class.into();
        self
    }
}

impl<'a, Message, Theme, Renderer> From<Modal<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'static,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(modal: Modal<'a, Message, Theme, Renderer>) -> Self {
        Anchor {
            is_presenting: modal.is_presenting,
            label: modal.label,
            content: modal.content,
            strategy: modal.placement.sanitize().into(),
            behavior: modal.behavior,
            on_dismiss: modal.on_dismiss,
            class: modal.class,
        }
        .into()
    }
}
