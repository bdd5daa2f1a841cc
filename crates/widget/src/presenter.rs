//! Host overlays for the labels inside a subtree.
//!
//! A [`Presenter`] owns a single overlay slot. On every layout pass it walks
//! its content, latches the geometry of each label it finds, applies their
//! pending requests and hands the resulting placement back to the label that
//! owns the active overlay. Walks stop at nested presenters, so every label
//! is served by its nearest one.
use crate::anchor;
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::time::{Duration, Instant};
use crate::core::widget::tree::{self, Tree};
use crate::core::widget::{self, Operation, Widget};
use crate::core::{
    Clipboard, Element, Event, Layout, Length, Padding, Rectangle, Shell, Size, Vector,
};

use presenter_core::geometry::PRESENTER;
use presenter_core::transition::DEFAULT_DURATION;
use presenter_core::{Context, Overlay, Placement, Screen, Snapshot, Transition};

use rustc_hash::FxHashMap;

use std::any::Any;

/// A widget that presents the overlays of the labels it contains.
pub struct Presenter<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    safe_area: Padding,
    fade: Duration,
}

impl<'a, Message, Theme, Renderer> Presenter<'a, Message, Theme, Renderer> {
    /// Creates a [`Presenter`] around the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            safe_area: Padding::ZERO,
            fade: DEFAULT_DURATION,
        }
    }

    /// Sets the insets of the [`Presenter`] that overlays must stay clear of.
    #[must_use]
    pub fn safe_area(mut self, safe_area: impl Into<Padding>) -> Self {
        self.safe_area = safe_area.into();
        self
    }

    /// Sets how long overlays take to fade in.
    ///
    /// Only the background, border, shadow and backdrop fade; the presented
    /// content is drawn at full opacity from the first frame. A zero
    /// duration shows them at once.
    #[must_use]
    pub fn fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }
}

/// The overlay slot of a [`Presenter`].
pub(crate) struct State<Message> {
    pub context: Context<widget::Id>,
    /// The dismiss messages of the labels that are presenting, published
    /// when a label stops showing up in the tree.
    pub farewells: FxHashMap<widget::Id, Message>,
    /// Flushed by the next event reaching the presenter.
    pub outbox: Vec<Message>,
}

impl<Message> State<Message> {
    fn new() -> Self {
        Self {
            context: Context::new(),
            farewells: FxHashMap::default(),
            outbox: Vec::new(),
        }
    }
}

/// Marks the root of a nested [`Presenter`] for the walks of its ancestors.
struct Boundary;

/// Visits every label of a subtree, skipping nested presenters.
struct Scoped<F> {
    visit: F,
    skip: bool,
}

impl<F> Scoped<F>
where
    F: FnMut(Rectangle, &mut dyn Any) + Send,
{
    fn new(visit: F) -> Self {
        Self { visit, skip: false }
    }
}

impl<F> Operation for Scoped<F>
where
    F: FnMut(Rectangle, &mut dyn Any) + Send,
{
    fn traverse(&mut self, operate: &mut dyn FnMut(&mut dyn Operation)) {
        if std::mem::take(&mut self.skip) {
            return;
        }

        operate(self);
    }

    fn container(&mut self, _id: Option<&widget::Id>, _bounds: Rectangle) {}

    fn custom(&mut self, _id: Option<&widget::Id>, bounds: Rectangle, state: &mut dyn Any) {
        if state.is::<Boundary>() {
            self.skip = true;
        } else {
            (self.visit)(bounds, state);
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Presenter<'_, Message, Theme, Renderer>
where
    Message: Clone + Send + 'static,
    Renderer: crate::core::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State<Message>>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::<Message>::new())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let Tree {
            state, children, ..
        } = tree;

        let content = &mut children[0];
        let node = self
            .content
            .as_widget_mut()
            .layout(content, renderer, limits);

        let state = state.downcast_mut::<State<Message>>();
        let origin = node.bounds().position();
        let screen = Screen::new(Rectangle::with_size(display(limits, node.size())))
            .safe_area(self.safe_area);

        {
            let context = &mut state.context;

            let mut collect = Scoped::new(|bounds: Rectangle, label: &mut dyn Any| {
                let Some(label) = label.downcast_mut::<anchor::State<Message>>() else {
                    return;
                };

                let snapshot = Snapshot::measure(bounds, origin, PRESENTER);
                label.frame = snapshot.frame();

                let _ = label.presentation.measure(|| snapshot);

                let id = label.id.clone();
                let strategy = label.strategy;

                let _ = label.presentation.commit(
                    Some(&mut *context),
                    |latched| Overlay::new(id.clone(), strategy.place(latched.frame(), &screen)),
                    |active| active.content == id,
                );
            });

            self.content
                .as_widget_mut()
                .operate(content, Layout::new(&node), renderer, &mut collect);
        }

        let mut owner_found = false;
        let mut visited = FxHashMap::default();

        {
            let context = &mut state.context;
            let fade = self.fade;
            let now = Instant::now();

            let mut sync = Scoped::new(|_bounds: Rectangle, label: &mut dyn Any| {
                let Some(label) = label.downcast_mut::<anchor::State<Message>>() else {
                    return;
                };

                label.presenter = screen.bounds.size();

                if label.transition.duration() != fade {
                    label.transition = Transition::new(fade);
                }

                let _ = visited.insert(
                    label.id.clone(),
                    label
                        .presentation
                        .disappear()
                        .and_then(|_| label.on_dismiss.clone()),
                );

                let owns = context
                    .active()
                    .is_some_and(|active| active.content == label.id);

                let Some(snapshot) = label.presentation.snapshot().filter(|_| owns) else {
                    label.placement = None;
                    label.transition.reset();
                    return;
                };

                let placement = label.strategy.place(snapshot.frame(), &screen);
                let _ = context.present(Overlay::new(label.id.clone(), placement));

                label.placement = Some(placement);
                label.transition.appear(now);

                owner_found = true;
            });

            self.content
                .as_widget_mut()
                .operate(content, Layout::new(&node), renderer, &mut sync);
        }

        if !owner_found {
            if let Some(orphan) = state.context.dismiss() {
                log::debug!("Clearing the overlay of vanished label {:?}", orphan.content);
            }
        }

        for (id, message) in std::mem::take(&mut state.farewells) {
            if !visited.contains_key(&id) {
                log::debug!("Label {id:?} disappeared while presenting");
                state.outbox.push(message);
            }
        }

        state.farewells = visited
            .into_iter()
            .filter_map(|(id, message)| Some((id, message?)))
            .collect();

        node
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        let mut boundary = Boundary;

        operation.custom(None, layout.bounds(), &mut boundary);
        operation.traverse(&mut |operation| {
            self.content
                .as_widget_mut()
                .operate(&mut tree.children[0], layout, renderer, operation);
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
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let state = tree.state.downcast_mut::<State<Message>>();

        if state.outbox.is_empty() {
            return;
        }

        for message in state.outbox.drain(..) {
            shell.publish(message);
        }

        shell.request_redraw();
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
        self.content.as_widget().draw(
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
        self.content.as_widget().mouse_interaction(
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
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

/// The size of the display the presenter lives in.
///
/// Falls back to the laid-out size when the limits are unbounded.
fn display(limits: &layout::Limits, laid_out: Size) -> Size {
    let max = limits.max();

    Size::new(
        if max.width.is_finite() { max.width } else { laid_out.width },
        if max.height.is_finite() { max.height } else { laid_out.height },
    )
}

impl<'a, Message, Theme, Renderer> From<Presenter<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + Send + 'static,
    Theme: 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(presenter: Presenter<'a, Message, Theme, Renderer>) -> Self {
        Element::new(presenter)
    }
}
