use crate::input_event::PointerPosition;
use crate::pointer::CursorHint;

/// Answer of [`DragHandlerI::begin()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragBegin {
    /// Grab the pointer with the given cursor and start the gesture.
    Proceed(CursorHint),
    /// Do not start the gesture. Nothing is grabbed.
    Cancel,
}

/// The begin/step/end triple bound to a button registration.
///
/// `C` is the context passed through from the dispatch loop, e.g. an X connection. Handlers never see the drag session.
pub trait DragHandlerI<C: ?Sized> {
    /// Called on a matching button press while no gesture is active, before the pointer is grabbed.
    fn begin(&self, ctx: &mut C, pos: PointerPosition) -> DragBegin;

    /// Called on every pointer motion while the gesture is active.
    fn step(&self, ctx: &mut C, pos: PointerPosition);

    /// Called on the button release that terminates the gesture. The grab is released after this returns.
    fn end(&self, ctx: &mut C, pos: PointerPosition);
}

/// Adapts three closures to [`DragHandlerI`].
pub struct DragFns<B, S, E> {
    pub begin: B,
    pub step: S,
    pub end: E,
}

impl<C, B, S, E> DragHandlerI<C> for DragFns<B, S, E>
where
    C: ?Sized,
    B: Fn(&mut C, PointerPosition) -> DragBegin,
    S: Fn(&mut C, PointerPosition),
    E: Fn(&mut C, PointerPosition),
{
    fn begin(&self, ctx: &mut C, pos: PointerPosition) -> DragBegin {
        (self.begin)(ctx, pos)
    }

    fn step(&self, ctx: &mut C, pos: PointerPosition) {
        (self.step)(ctx, pos)
    }

    fn end(&self, ctx: &mut C, pos: PointerPosition) {
        (self.end)(ctx, pos)
    }
}
