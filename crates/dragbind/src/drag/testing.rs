use crate::dispatch::ButtonBindI;
use crate::drag::handler::{DragBegin, DragHandlerI};
use crate::input::ButtonSpec;
use crate::input_event::{PointerPosition, WindowId};
use crate::pointer::{CursorHint, GrabStatus, PointerGrabI};
use std::cell::Cell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Grab(WindowId, CursorHint),
    Ungrab,
    Begin(PointerPosition),
    Step(PointerPosition),
    End(PointerPosition),
}

/// Records every call in order. Grab outcomes are scripted; `Err(())` makes the request itself fail.
pub(crate) struct FakeCtx {
    pub calls: Vec<Call>,
    pub held_grabs: i32,
    pub fail_ungrab: bool,
    pub binds: Vec<(WindowId, ButtonSpec, bool)>,
    grab_script: VecDeque<Result<GrabStatus, ()>>,
}

fn request_error() -> crate::Error {
    #[cfg(feature = "x11")]
    {
        crate::Error::Connection(x11rb::errors::ConnectionError::UnknownError)
    }
    #[cfg(not(feature = "x11"))]
    {
        crate::Error::UnsupportedFormat(0)
    }
}

impl FakeCtx {
    pub fn granting() -> Self {
        Self::scripted(vec![])
    }

    pub fn scripted(grab_script: Vec<Result<GrabStatus, ()>>) -> Self {
        Self {
            calls: vec![],
            held_grabs: 0,
            fail_ungrab: false,
            binds: vec![],
            grab_script: grab_script.into(),
        }
    }

    pub fn grab_attempts(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Grab(..)))
            .count()
    }

    pub fn ungrab_calls(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Ungrab).count()
    }
}

impl PointerGrabI for FakeCtx {
    fn grab_pointer(
        &mut self,
        window: WindowId,
        cursor: CursorHint,
    ) -> crate::Result<GrabStatus> {
        assert_eq!(self.held_grabs, 0, "grab requested while holding one");

        self.calls.push(Call::Grab(window, cursor));
        match self.grab_script.pop_front().unwrap_or(Ok(GrabStatus::Granted)) {
            Ok(GrabStatus::Granted) => {
                self.held_grabs += 1;
                Ok(GrabStatus::Granted)
            }
            Ok(status) => Ok(status),
            Err(()) => Err(request_error()),
        }
    }

    fn ungrab_pointer(&mut self) -> crate::Result<()> {
        assert_eq!(self.held_grabs, 1, "ungrab requested without a grab");

        self.calls.push(Call::Ungrab);
        self.held_grabs -= 1;
        if self.fail_ungrab {
            Err(request_error())
        } else {
            Ok(())
        }
    }
}

impl ButtonBindI for FakeCtx {
    fn bind_button(
        &mut self,
        window: WindowId,
        spec: &ButtonSpec,
        grab: bool,
    ) -> crate::Result<()> {
        self.binds.push((window, *spec, grab));
        Ok(())
    }
}

pub(crate) struct RecordingHandler {
    begin: DragBegin,
    steps: Cell<usize>,
}

impl RecordingHandler {
    pub fn new(begin: DragBegin) -> Self {
        Self {
            begin,
            steps: Cell::new(0),
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.get()
    }
}

impl DragHandlerI<FakeCtx> for RecordingHandler {
    fn begin(&self, ctx: &mut FakeCtx, pos: PointerPosition) -> DragBegin {
        ctx.calls.push(Call::Begin(pos));
        self.begin
    }

    fn step(&self, ctx: &mut FakeCtx, pos: PointerPosition) {
        self.steps.set(self.steps.get() + 1);
        ctx.calls.push(Call::Step(pos));
    }

    fn end(&self, ctx: &mut FakeCtx, pos: PointerPosition) {
        ctx.calls.push(Call::End(pos));
    }
}
