//! The label widget shared by dropdowns and modals.
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::time::Instant;
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::{self, Operation, Widget};
use crate::core::{
    Clipboard, Element, Event, Layout, Length, Point, Rectangle, Shell, Size, Vector,
};
use crate::style::Catalog;
use crate::surface::Surface;

use presenter_core::{Behavior, Presentation, Strategy, Transition};

/// The state of a label, visited by its presenter on every layout pass.
pub(crate) struct State<Message> {
    pub id: widget::Id,
    pub presentation: Presentation,
    pub strategy: Strategy,
    pub on_dismiss: Option<Message>,
    /// The current frame, in the presenter's space.
    pub frame: Rectangle,
    /// Set while this label owns the active overlay.
    pub placement: Option<Rectangle>,
    pub presenter: Size,
    pub transition: Transition,
    pub now: Option<Instant>,
}

impl<Message> State<Message> {
    fn new(strategy: Strategy, behavior: Behavior) -> Self {
        Self {
            id: widget::Id::unique(),
            presentation: Presentation::new(behavior),
            strategy,
            on_dismiss: None,
            frame: Rectangle::with_size(Size::ZERO),
            placement: None,
            presenter: Size::ZERO,
            transition: Transition::default(),
            now: None,
        }
    }

    /// The position of the presenter in window coordinates, given the
    /// current absolute position of the label.
    pub fn origin(&self, label: Point) -> Point {
        label - (self.frame.position() - Point::ORIGIN)
    }
}

/// A label that presents `content` through the nearest presenter.
pub(crate) struct Anchor<'a, Message, Theme, Renderer>
where
    Theme: Catalog,
{
    pub is_presenting: bool,
    pub label: Element<'a, Message, Theme, Renderer>,
    pub content: Element<'a, Message, Theme, Renderer>,
    pub strategy: Strategy,
    pub behavior: Behavior,
    pub on_dismiss: Option<Message>,
    pub class: Theme::Class<'a>,
}

impl<Message, Theme, Renderer> Anchor<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Theme: Catalog,
{
    fn sync(&self, state: &mut State<Message>) {
        state.strategy = self.strategy;
        state.on_dismiss.clone_from(&self.on_dismiss);
        state.presentation.set_behavior(self.behavior);

        if let Some(request) = state.presentation.set_signal(self.is_presenting) {
            log::debug!("Label {:?} queued {request:?}", state.id);
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Anchor<'_, Message, Theme, Renderer>
where
    Message: Clone + 'static,
    Theme: Catalog,
    Renderer: crate::core::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State<Message>>()
    }

    fn state(&self) -> tree::State {
        let mut state = State::new(self.strategy, self.behavior);
        self.sync(&mut state);

        tree::State::new(state)
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.label), Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        self.sync(tree.state.downcast_mut::<State<Message>>());

        tree.diff_children(&[&self.label, &self.content]);
    }

    fn size(&self) -> Size<Length> {
        self.label.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.label
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        let Tree {
            state, children, ..
        } = tree;

        let state = state.downcast_mut::<State<Message>>();
        let id = state.id.clone();

        operation.custom(Some(&id), layout.bounds(), state);
        operation.container(Some(&id), layout.bounds());
        operation.traverse(&mut |operation| {
            self.label
                .as_widget_mut()
                .operate(&mut children[0], layout, renderer, operation);
        });
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.label.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.label.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.label.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let Tree {
            state, children, ..
        } = tree;

        let state = state.downcast_mut::<State<Message>>();
        let [label, content] = children.as_mut_slice() else {
            return None;
        };

        let Some(placement) = state.placement else {
            return self.label.as_widget_mut().overlay(
                label,
                layout,
                renderer,
                viewport,
                translation,
            );
        };

        let origin = state.origin(layout.position() + translation);

        Some(overlay::Element::new(Box::new(Surface {
            tree: content,
            content: &mut self.content,
            class: &self.class,
            state,
            origin,
            placement,
        })))
    }
}

impl<'a, Message, Theme, Renderer> From<Anchor<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'static,
    Theme: Catalog + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(anchor: Anchor<'a, Message, Theme, Renderer>) -> Self {
        Element::new(anchor)
    }
}
