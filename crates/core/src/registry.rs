//! Presenter contexts and the subtrees they are registered for.
use crate::Rectangle;

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};

use std::fmt;
use std::hash::Hash;

new_key_type! {
    /// Identifies a registered [`Context`].
    pub struct Id;
}

/// A positioned overlay payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<T> {
    /// What to render. Opaque to the placement engine.
    pub content: T,
    /// Where to render it, in the presenter's coordinate space.
    pub placement: Rectangle,
}

impl<T> Overlay<T> {
    /// Creates a new [`Overlay`].
    pub fn new(content: T, placement: Rectangle) -> Self {
        Self { content, placement }
    }
}

/// The overlay slot of a single presenter.
///
/// A [`Context`] holds at most one [`Overlay`]. Presenting replaces whatever
/// was there in a single step.
pub struct Context<T> {
    active: Option<Overlay<T>>,
}

impl<T> Context<T> {
    /// Creates an empty [`Context`].
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Presents `overlay`, returning the overlay it replaced.
    ///
    /// The replaced overlay is discarded without being dismissed.
    pub fn present(&mut self, overlay: Overlay<T>) -> Option<Overlay<T>> {
        self.active.replace(overlay)
    }

    /// Dismisses the active overlay, if any.
    pub fn dismiss(&mut self) -> Option<Overlay<T>> {
        self.active.take()
    }

    /// Dismisses the active overlay only if `predicate` holds for it.
    pub fn dismiss_if(
        &mut self,
        predicate: impl FnOnce(&Overlay<T>) -> bool,
    ) -> Option<Overlay<T>> {
        if self.active.as_ref().is_some_and(predicate) {
            self.active.take()
        } else {
            None
        }
    }

    /// Returns whether an overlay is being presented.
    pub fn is_presenting(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the active overlay.
    pub fn active(&self) -> Option<&Overlay<T>> {
        self.active.as_ref()
    }
}

impl<T> Default for Context<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Context<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("active", &self.active)
            .finish()
    }
}

/// Presenter contexts keyed by the root of the subtree they serve.
///
/// Views find their context by walking their ancestors, nearest first, with
/// [`Registry::resolve`].
pub struct Registry<R, T> {
    contexts: SlotMap<Id, Context<T>>,
    roots: FxHashMap<R, Id>,
}

impl<R, T> Registry<R, T>
where
    R: Eq + Hash,
{
    /// Creates an empty [`Registry`].
    pub fn new() -> Self {
        Self {
            contexts: SlotMap::with_key(),
            roots: FxHashMap::default(),
        }
    }

    /// Registers `root` as a presenter, returning its context [`Id`].
    ///
    /// Registering the same root twice returns the existing context.
    pub fn register(&mut self, root: R) -> Id {
        if let Some(id) = self.roots.get(&root) {
            return *id;
        }

        let id = self.contexts.insert(Context::new());
        let _ = self.roots.insert(root, id);

        id
    }

    /// Removes the context of `root`, dropping any active overlay.
    pub fn unregister(&mut self, root: &R) -> Option<Context<T>> {
        let id = self.roots.remove(root)?;

        self.contexts.remove(id)
    }

    /// Returns the context registered nearest to a view.
    ///
    /// `ancestry` starts at the view itself and walks up towards the root.
    pub fn resolve<'a>(&self, ancestry: impl IntoIterator<Item = &'a R>) -> Option<Id>
    where
        R: 'a,
    {
        ancestry
            .into_iter()
            .find_map(|node| self.roots.get(node).copied())
    }

    /// Presents `overlay` in the context `id`.
    pub fn present(&mut self, id: Id, overlay: Overlay<T>) -> Option<Overlay<T>> {
        let Some(context) = self.contexts.get_mut(id) else {
            log::debug!("Presenter {id:?} is gone; dropping overlay");
            return None;
        };

        context.present(overlay)
    }

    /// Dismisses the overlay of the context `id`.
    pub fn dismiss(&mut self, id: Id) -> Option<Overlay<T>> {
        self.contexts.get_mut(id).and_then(Context::dismiss)
    }

    /// Returns whether the context `id` is presenting.
    pub fn is_presenting(&self, id: Id) -> bool {
        self.contexts.get(id).is_some_and(Context::is_presenting)
    }

    /// Returns the context `id`.
    pub fn context(&self, id: Id) -> Option<&Context<T>> {
        self.contexts.get(id)
    }

    /// Returns the context `id` mutably.
    pub fn context_mut(&mut self, id: Id) -> Option<&mut Context<T>> {
        self.contexts.get_mut(id)
    }

    /// Returns the number of registered presenters.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Returns whether no presenter is registered.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl<R, T> Default for Registry<R, T>
where
    R: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, T> fmt::Debug for Registry<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("presenters", &self.contexts.len())
            .finish()
    }
}
