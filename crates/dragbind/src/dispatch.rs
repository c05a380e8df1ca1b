use crate::drag::{BeginOutcome, DragHandlerI, DragMachine};
use crate::input::ButtonSpec;
use crate::input_event::{ButtonEvent, ButtonState, InputEvent, WindowId};
use crate::pointer::PointerGrabI;
use std::rc::Rc;

/// Capability to have button notifications for a window delivered to this client.
pub trait ButtonBindI {
    /// Select button press/release notifications on `window`. If `grab` is true, also install a passive grab for `spec` so
    /// that the press is delivered even when it happens over a child window of another client.
    fn bind_button(&mut self, window: WindowId, spec: &ButtonSpec, grab: bool)
        -> crate::Result<()>;
}

struct DragRegistration<C: ?Sized> {
    window: WindowId,
    spec: ButtonSpec,
    handler: Rc<dyn DragHandlerI<C>>,
}

/// Routes notifications from the event loop into the drag machine.
pub struct Dispatcher<C: ?Sized> {
    machine: DragMachine<C>,
    registrations: Vec<DragRegistration<C>>,
}

impl<C: ?Sized> Default for Dispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Dispatcher<C> {
    pub fn new() -> Self {
        Self {
            machine: DragMachine::new(),
            registrations: vec![],
        }
    }

    pub fn machine(&self) -> &DragMachine<C> {
        &self.machine
    }
}

impl<C> Dispatcher<C>
where
    C: PointerGrabI + ButtonBindI + ?Sized,
{
    /// Registers a drag for `spec` on `window`.
    ///
    /// `grab` is passed to [`ButtonBindI::bind_button()`]; it is about receiving the initial press. The pointer grab for the
    /// gesture itself is always taken once `begin` proceeds.
    pub fn register_drag<H>(
        &mut self,
        ctx: &mut C,
        window: WindowId,
        spec: ButtonSpec,
        grab: bool,
        handler: H,
    ) -> crate::Result<()>
    where
        H: DragHandlerI<C> + 'static,
    {
        ctx.bind_button(window, &spec, grab)?;

        info!(
            "registered drag: window = {:#x}, spec = {:?}, grab = {}",
            window, spec, grab
        );
        self.registrations.push(DragRegistration {
            window,
            spec,
            handler: Rc::new(handler),
        });
        Ok(())
    }

    pub fn dispatch(&mut self, ctx: &mut C, event: &InputEvent) {
        match event {
            InputEvent::Button(
                ev @ ButtonEvent {
                    state: ButtonState::Pressed,
                    ..
                },
            ) => self.dispatch_button_press(ctx, ev),
            InputEvent::Button(ButtonEvent {
                state: ButtonState::Released,
                position,
                ..
            }) => self.machine.handle_button_release(ctx, *position),
            InputEvent::Motion(ev) => self.machine.handle_motion(ctx, ev.position),
        }
    }

    fn dispatch_button_press(&mut self, ctx: &mut C, ev: &ButtonEvent) {
        for registration in &self.registrations {
            if registration.window != ev.window || !registration.spec.matches(ev.button, ev.mods) {
                continue;
            }

            let outcome = self.machine.handle_button_press(
                ctx,
                registration.window,
                &registration.handler,
                ev.position,
            );
            trace!("button press on {:#x}: {:?}", ev.window, outcome);
            if outcome == BeginOutcome::Started {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::testing::{Call, FakeCtx, RecordingHandler};
    use crate::drag::DragBegin;
    use crate::input::{Button, ModMask};
    use crate::input_event::{MotionEvent, PointerPosition};
    use crate::pointer::CursorHint;

    const ROOT: WindowId = 0x2a;
    const OTHER: WindowId = 0x400001;

    fn press(window: WindowId, button: u8, mods: ModMask, pos: PointerPosition) -> InputEvent {
        ButtonEvent {
            state: ButtonState::Pressed,
            window,
            button: Button(button),
            mods,
            position: pos,
        }
        .into()
    }

    fn release(window: WindowId, button: u8, pos: PointerPosition) -> InputEvent {
        ButtonEvent {
            state: ButtonState::Released,
            window,
            button: Button(button),
            mods: ModMask::empty(),
            position: pos,
        }
        .into()
    }

    fn motion(pos: PointerPosition) -> InputEvent {
        MotionEvent {
            window: ROOT,
            position: pos,
        }
        .into()
    }

    fn proceed() -> RecordingHandler {
        RecordingHandler::new(DragBegin::Proceed(CursorHint::Cursor(52)))
    }

    #[test]
    fn test_register_binds_button() {
        let mut ctx = FakeCtx::granting();
        let mut dispatcher = Dispatcher::new();
        let spec = "Mod4-1".parse().unwrap();

        dispatcher
            .register_drag(&mut ctx, ROOT, spec, true, proceed())
            .unwrap();
        dispatcher
            .register_drag(&mut ctx, OTHER, spec, false, proceed())
            .unwrap();

        assert_eq!(ctx.binds, vec![(ROOT, spec, true), (OTHER, spec, false)]);
    }

    #[test]
    fn test_full_gesture() {
        let mut ctx = FakeCtx::granting();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register_drag(&mut ctx, ROOT, "Mod4-1".parse().unwrap(), true, proceed())
            .unwrap();

        let p0 = PointerPosition::new(100, 100, 10, 10);
        let p1 = PointerPosition::new(110, 100, 20, 10);
        let p2 = PointerPosition::new(120, 100, 30, 10);
        dispatcher.dispatch(&mut ctx, &press(ROOT, 1, ModMask::MOD4 | ModMask::MOD2, p0));
        assert!(dispatcher.machine().is_active());
        dispatcher.dispatch(&mut ctx, &motion(p1));
        dispatcher.dispatch(&mut ctx, &release(ROOT, 1, p2));

        assert_eq!(
            ctx.calls,
            vec![
                Call::Begin(p0),
                Call::Grab(ROOT, CursorHint::Cursor(52)),
                Call::Step(p1),
                Call::End(p2),
                Call::Ungrab,
            ]
        );
        assert!(!dispatcher.machine().is_active());
    }

    #[test]
    fn test_non_matching_press_is_ignored() {
        let mut ctx = FakeCtx::granting();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register_drag(&mut ctx, ROOT, "Mod4-1".parse().unwrap(), true, proceed())
            .unwrap();

        let p = PointerPosition::default();
        dispatcher.dispatch(&mut ctx, &press(ROOT, 3, ModMask::MOD4, p));
        dispatcher.dispatch(&mut ctx, &press(ROOT, 1, ModMask::CONTROL, p));
        dispatcher.dispatch(&mut ctx, &press(OTHER, 1, ModMask::MOD4, p));
        dispatcher.dispatch(&mut ctx, &motion(p));
        dispatcher.dispatch(&mut ctx, &release(ROOT, 1, p));

        assert!(ctx.calls.is_empty());
    }

    #[test]
    fn test_cancelled_registration_falls_through_to_next() {
        let mut ctx = FakeCtx::granting();
        let mut dispatcher = Dispatcher::new();
        let spec: ButtonSpec = "1".parse().unwrap();
        dispatcher
            .register_drag(
                &mut ctx,
                ROOT,
                spec,
                false,
                RecordingHandler::new(DragBegin::Cancel),
            )
            .unwrap();
        dispatcher
            .register_drag(&mut ctx, ROOT, spec, false, proceed())
            .unwrap();
        dispatcher
            .register_drag(&mut ctx, ROOT, spec, false, proceed())
            .unwrap();

        let p = PointerPosition::new(1, 2, 3, 4);
        dispatcher.dispatch(&mut ctx, &press(ROOT, 1, ModMask::empty(), p));

        // The first cancels, the second starts, the third is not consulted.
        assert_eq!(
            ctx.calls,
            vec![
                Call::Begin(p),
                Call::Begin(p),
                Call::Grab(ROOT, CursorHint::Cursor(52)),
            ]
        );
    }

    #[test]
    fn test_press_during_gesture_is_noop() {
        let mut ctx = FakeCtx::granting();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register_drag(&mut ctx, ROOT, "any-any".parse().unwrap(), true, proceed())
            .unwrap();

        let p = PointerPosition::default();
        dispatcher.dispatch(&mut ctx, &press(ROOT, 1, ModMask::empty(), p));
        let calls = ctx.calls.len();
        dispatcher.dispatch(&mut ctx, &press(ROOT, 2, ModMask::SHIFT, p));

        assert_eq!(ctx.calls.len(), calls);
        assert_eq!(ctx.held_grabs, 1);
    }

    #[test]
    fn test_release_of_other_button_ends_gesture() {
        let mut ctx = FakeCtx::granting();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register_drag(&mut ctx, ROOT, "1".parse().unwrap(), false, proceed())
            .unwrap();

        let p = PointerPosition::default();
        dispatcher.dispatch(&mut ctx, &press(ROOT, 1, ModMask::empty(), p));
        dispatcher.dispatch(&mut ctx, &release(OTHER, 3, p));

        assert!(!dispatcher.machine().is_active());
        assert_eq!(ctx.ungrab_calls(), 1);
    }
}
