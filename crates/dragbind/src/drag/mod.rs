//! Gesture state machine: press → motions → release, one gesture at a time.

pub mod handler;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

pub use handler::{DragBegin, DragFns, DragHandlerI};
pub use session::DragSession;

use crate::input_event::{PointerPosition, WindowId};
use crate::pointer::{self, PointerGrabI};
use std::rc::Rc;

/// What a button press did. Only for diagnostics; every outcome is already handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    Started,
    /// Another gesture is active. Nothing was called.
    AlreadyActive,
    /// `begin` returned `DragBegin::Cancel`.
    Cancelled,
    GrabFailed,
}

pub struct DragMachine<C: ?Sized> {
    session: DragSession<C>,
}

impl<C: ?Sized> Default for DragMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> DragMachine<C> {
    pub fn new() -> Self {
        Self {
            session: DragSession::Idle,
        }
    }

    pub fn session(&self) -> &DragSession<C> {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }
}

impl<C> DragMachine<C>
where
    C: PointerGrabI + ?Sized,
{
    pub fn handle_button_press(
        &mut self,
        ctx: &mut C,
        window: WindowId,
        handler: &Rc<dyn DragHandlerI<C>>,
        pos: PointerPosition,
    ) -> BeginOutcome {
        if self.session.is_active() {
            debug!("button press ignored as a drag is already in progress");
            return BeginOutcome::AlreadyActive;
        }

        // `begin` runs before anything is grabbed. It may cancel and it chooses the cursor.
        let cursor = match handler.begin(ctx, pos) {
            DragBegin::Proceed(cursor) => cursor,
            DragBegin::Cancel => return BeginOutcome::Cancelled,
        };

        if !pointer::acquire(ctx, window, cursor) {
            return BeginOutcome::GrabFailed;
        }

        self.session.start(Rc::clone(handler));
        debug!("drag started: window = {:#x}, pos = {:?}", window, pos);
        BeginOutcome::Started
    }

    pub fn handle_motion(&mut self, ctx: &mut C, pos: PointerPosition) {
        match &self.session {
            DragSession::Idle => {}
            DragSession::Active(Some(bound)) => {
                let handler = Rc::clone(bound.handler());
                handler.step(ctx, pos);
            }
            DragSession::Active(None) => {
                warn!("drag session is active without handlers; releasing the pointer grab");
                pointer::release(ctx);
                self.session.clear();
            }
        }
    }

    pub fn handle_button_release(&mut self, ctx: &mut C, pos: PointerPosition) {
        let bound = match &self.session {
            DragSession::Idle => return,
            DragSession::Active(bound) => bound.clone(),
        };

        match bound {
            Some(bound) => bound.handler().end(ctx, pos),
            None => {
                warn!("drag session is active without handlers; ending it without calling `end`");
            }
        }

        pointer::release(ctx);
        self.session.clear();
        debug!("drag finished: pos = {:?}", pos);
    }
}
