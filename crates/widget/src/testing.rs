//! Widgets and helpers shared by the tests of this crate.
use crate::core::layout;
use crate::core::mouse;
use crate::core::overlay;
use crate::core::renderer;
use crate::core::widget::{Operation, Tree, Widget};
use crate::core::{Layout, Length, Point, Rectangle, Size, Theme, Vector};
use crate::dropdown;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Dismissed,
}

pub type Element<'a> = crate::core::Element<'a, Message, Theme, ()>;

/// A leaf of a fixed size.
struct Block(Size);

impl Widget<Message, Theme, ()> for Block {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.0.width), Length::Fixed(self.0.height))
    }

    fn layout(&mut self, _tree: &mut Tree, _renderer: &(), _limits: &layout::Limits) -> layout::Node {
        layout::Node::new(self.0)
    }

    fn draw(
        &self,
        _tree: &Tree,
        _renderer: &mut (),
        _theme: &Theme,
        _style: &renderer::Style,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
    }
}

pub fn block(width: f32, height: f32) -> Element<'static> {
    Element::new(Block(Size::new(width, height)))
}

/// Children pinned at fixed positions.
struct Board<'a> {
    size: Size,
    positions: Vec<Point>,
    children: Vec<Element<'a>>,
}

impl Widget<Message, Theme, ()> for Board<'_> {
    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.size.width), Length::Fixed(self.size.height))
    }

    fn layout(&mut self, tree: &mut Tree, renderer: &(), _limits: &layout::Limits) -> layout::Node {
        let limits = layout::Limits::new(Size::ZERO, self.size);

        let children = self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(&self.positions)
            .map(|((child, tree), position)| {
                child
                    .as_widget_mut()
                    .layout(tree, renderer, &limits)
                    .move_to(*position)
            })
            .collect();

        layout::Node::with_children(self.size, children)
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &(),
        operation: &mut dyn Operation,
    ) {
        operation.container(None, layout.bounds());
        operation.traverse(&mut |operation| {
            for ((child, tree), layout) in self
                .children
                .iter_mut()
                .zip(&mut tree.children)
                .zip(layout.children())
            {
                child.as_widget_mut().operate(tree, layout, renderer, operation);
            }
        });
    }

    fn draw(
        &self,
        _tree: &Tree,
        _renderer: &mut (),
        _theme: &Theme,
        _style: &renderer::Style,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &(),
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, ()>> {
        overlay::from_children(&mut self.children, tree, layout, renderer, viewport, translation)
    }
}

/// A board filling the whole display.
pub fn board(children: Vec<(Point, Element<'_>)>) -> Element<'_> {
    board_sized(DISPLAY, children)
}

pub fn board_sized(size: Size, children: Vec<(Point, Element<'_>)>) -> Element<'_> {
    let (positions, children) = children.into_iter().unzip();

    Element::new(Board {
        size,
        positions,
        children,
    })
}

/// A dismissible dropdown with a 100x40 label and 100x200 content.
pub fn menu(is_presenting: bool) -> Element<'static> {
    dropdown(is_presenting, block(100.0, 40.0), block(100.0, 200.0))
        .on_dismiss(Message::Dismissed)
        .into()
}

pub const DISPLAY: Size = Size::new(320.0, 600.0);

/// Lays out `element` in a window of [`DISPLAY`] size.
pub fn layout(element: &mut Element<'_>, tree: &mut Tree) -> layout::Node {
    element
        .as_widget_mut()
        .layout(tree, &(), &layout::Limits::new(Size::ZERO, DISPLAY))
}
