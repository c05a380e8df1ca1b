use crate::drag::handler::DragHandlerI;
use std::rc::Rc;

/// Step and end handlers bound for the duration of one gesture.
///
/// The registration owns the handler; this only holds a reference to it until the gesture terminates.
pub struct BoundDrag<C: ?Sized> {
    handler: Rc<dyn DragHandlerI<C>>,
}

impl<C: ?Sized> BoundDrag<C> {
    pub(super) fn handler(&self) -> &Rc<dyn DragHandlerI<C>> {
        &self.handler
    }
}

impl<C: ?Sized> Clone for BoundDrag<C> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

/// Whether a drag is in progress.
///
/// Handlers can only be bound while active, and step/end are always bound together.
/// `Active(None)` is inconsistent; it is repaired on the next motion or release.
pub enum DragSession<C: ?Sized> {
    Idle,
    Active(Option<BoundDrag<C>>),
}

impl<C: ?Sized> Default for DragSession<C> {
    fn default() -> Self {
        DragSession::Idle
    }
}

impl<C: ?Sized> std::fmt::Debug for DragSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragSession::Idle => write!(f, "Idle"),
            DragSession::Active(Some(_)) => write!(f, "Active(bound)"),
            DragSession::Active(None) => write!(f, "Active(unbound)"),
        }
    }
}

impl<C: ?Sized> DragSession<C> {
    pub fn is_active(&self) -> bool {
        match self {
            DragSession::Idle => false,
            DragSession::Active(_) => true,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, DragSession::Active(Some(_)))
    }

    pub(super) fn start(&mut self, handler: Rc<dyn DragHandlerI<C>>) {
        *self = DragSession::Active(Some(BoundDrag { handler }));
    }

    pub(super) fn clear(&mut self) {
        *self = DragSession::Idle;
    }
}
