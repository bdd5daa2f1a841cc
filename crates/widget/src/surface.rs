//! The overlay that hosts presented content above the presenter.
use crate::anchor::State;
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::time::Instant;
use crate::core::touch;
use crate::core::widget::{Operation, Tree};
use crate::core::window;
use crate::core::{
    Clipboard, Element, Event, Layout, Point, Rectangle, Shell, Size, Vector,
};
use crate::style::Catalog;

use presenter_core::Strategy;

/// Covers the whole presenter and positions the content at its placement.
///
/// Every press outside the content is captured, whether or not it asks for
/// a dismissal.
pub(crate) struct Surface<'a, 'b, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    pub tree: &'b mut Tree,
    pub content: &'b mut Element<'a, Message, Theme, Renderer>,
    pub class: &'b Theme::Class<'a>,
    pub state: &'b mut State<Message>,
    /// The top-left corner of the presenter, in window coordinates.
    pub origin: Point,
    /// The placement of the content, in the presenter's space.
    pub placement: Rectangle,
}

impl<Message, Theme, Renderer> Surface<'_, '_, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    fn opacity(&self) -> f32 {
        let now = self.state.now.unwrap_or_else(Instant::now);

        self.state.transition.opacity(now)
    }
}

impl<Message, Theme, Renderer> overlay::Overlay<Message, Theme, Renderer>
    for Surface<'_, '_, Message, Theme, Renderer>
where
    Message: Clone,
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, _bounds: Size) -> layout::Node {
        let size = self.placement.size();
        let limits = layout::Limits::new(size, size);

        let content = self
            .content
            .as_widget_mut()
            .layout(self.tree, renderer, &limits);

        let panel = layout::Node::with_children(size, vec![content])
            .move_to(self.placement.position());

        layout::Node::with_children(self.state.presenter, vec![panel]).move_to(self.origin)
    }

    fn draw(
        &self,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
    ) {
        let Some(panel) = layout.children().next() else {
            return;
        };
        let Some(content) = panel.children().next() else {
            return;
        };

        let bounds = layout.bounds();
        let chrome = theme.style(self.class).scale_alpha(self.opacity());

        renderer.with_layer(bounds, |renderer| {
            if let Some(backdrop) = chrome.backdrop {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds,
                        ..renderer::Quad::default()
                    },
                    backdrop,
                );
            }

            if let Some(background) = chrome.background {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: panel.bounds(),
                        border: chrome.border,
                        shadow: chrome.shadow,
                        ..renderer::Quad::default()
                    },
                    background,
                );
            }

            self.content.as_widget().draw(
                self.tree,
                renderer,
                theme,
                style,
                content,
                cursor,
                &panel.bounds(),
            );
        });
    }

    fn operate(
        &mut self,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        let Some(content) = layout.children().next().and_then(|panel| panel.children().next())
        else {
            return;
        };

        self.content
            .as_widget_mut()
            .operate(self.tree, content, renderer, operation);
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
    ) {
        let Some(panel) = layout.children().next() else {
            return;
        };
        let Some(content) = panel.children().next() else {
            return;
        };

        match event {
            Event::Window(window::Event::RedrawRequested(now)) => {
                self.state.now = Some(*now);

                if self.state.transition.is_animating(*now) {
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(_))
            | Event::Touch(touch::Event::FingerPressed { .. })
                if !cursor.is_over(panel.bounds()) =>
            {
                if self.state.presentation.external_tap().is_some() {
                    log::debug!("External tap on the overlay of {:?}", self.state.id);

                    if let Some(on_dismiss) = &self.state.on_dismiss {
                        shell.publish(on_dismiss.clone());
                    }
                }

                shell.capture_event();
                return;
            }
            _ => {}
        }

        self.content.as_widget_mut().update(
            self.tree,
            event,
            content,
            cursor,
            renderer,
            clipboard,
            shell,
            &layout.bounds(),
        );

        if matches!(event, Event::Mouse(_) | Event::Touch(_)) && cursor.is_over(layout.bounds())
        {
            shell.capture_event();
        }
    }

    fn mouse_interaction(
        &self,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(content) = layout.children().next().and_then(|panel| panel.children().next())
        else {
            return mouse::Interaction::default();
        };

        let interaction = self.content.as_widget().mouse_interaction(
            self.tree,
            content,
            cursor,
            &layout.bounds(),
            renderer,
        );

        if cursor.is_over(layout.bounds()) {
            interaction.max(mouse::Interaction::Idle)
        } else {
            interaction
        }
    }

    fn overlay<'c>(
        &'c mut self,
        layout: Layout<'c>,
        renderer: &Renderer,
    ) -> Option<overlay::Element<'c, Message, Theme, Renderer>> {
        let content = layout.children().next()?.children().next()?;

        self.content.as_widget_mut().overlay(
            self.tree,
            content,
            renderer,
            &layout.bounds(),
            Vector::ZERO,
        )
    }

    fn index(&self) -> f32 {
        match self.state.strategy {
            Strategy::Dropdown(_) => 1.0,
            Strategy::Modal(_) => 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::clipboard;
    use crate::core::mouse;
    use crate::core::widget::Tree;
    use crate::core::{Event, Layout, Point, Rectangle, Shell, Vector};
    use crate::testing::{self, block, board, menu, Element, Message, DISPLAY};
    use crate::{modal, presenter};

    /// Presses at `position` on the overlay of the only label in `label`.
    fn press(label: Element<'static>, position: Point) -> (Vec<Message>, bool) {
        let mut element: Element<'_> =
            presenter(board(vec![(Point::new(20.0, 100.0), label)])).into();
        let mut tree = Tree::new(&element);
        let node = testing::layout(&mut element, &mut tree);

        let mut overlay = element
            .as_widget_mut()
            .overlay(
                &mut tree,
                Layout::new(&node),
                &(),
                &Rectangle::with_size(DISPLAY),
                Vector::ZERO,
            )
            .expect("label is presented");

        let node = overlay.as_overlay_mut().layout(&(), DISPLAY);

        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);

        overlay.as_overlay_mut().update(
            &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            Layout::new(&node),
            mouse::Cursor::Available(position),
            &(),
            &mut clipboard::Null,
            &mut shell,
        );

        let captured = shell.is_event_captured();

        (messages, captured)
    }

    #[test]
    fn press_outside_the_content_asks_to_dismiss() {
        let (messages, captured) = press(menu(true), Point::new(300.0, 500.0));

        assert_eq!(messages, vec![Message::Dismissed]);
        assert!(captured);
    }

    #[test]
    fn press_on_the_content_keeps_it() {
        let (messages, captured) = press(menu(true), Point::new(50.0, 200.0));

        assert!(messages.is_empty());
        assert!(captured);
    }

    #[test]
    fn modals_swallow_outside_presses() {
        let label = modal(true, block(60.0, 30.0), block(100.0, 100.0))
            .size([100.0, 100.0])
            .on_dismiss(Message::Dismissed);

        let (messages, captured) = press(label.into(), Point::new(5.0, 5.0));

        assert!(messages.is_empty());
        assert!(captured);
    }

    #[test]
    fn dismissible_modals_ask_on_outside_presses() {
        let label = modal(true, block(60.0, 30.0), block(100.0, 100.0))
            .size([100.0, 100.0])
            .dismiss_on_external_tap(true)
            .on_dismiss(Message::Dismissed);

        let (messages, _) = press(label.into(), Point::new(5.0, 5.0));

        assert_eq!(messages, vec![Message::Dismissed]);
    }
}
