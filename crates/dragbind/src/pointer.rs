use crate::input_event::WindowId;

/// Cursor image requested for the duration of a pointer grab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Keep the cursor of the window under the pointer.
    #[default]
    Unchanged,
    /// X resource id of a cursor.
    Cursor(u32),
}

impl CursorHint {
    /// Cursor id for the wire. `0` is `None`.
    pub fn as_raw(&self) -> u32 {
        match self {
            CursorHint::Unchanged => 0,
            CursorHint::Cursor(id) => *id,
        }
    }
}

/// Why the windowing system refused a pointer grab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabDenial {
    AlreadyGrabbed,
    InvalidTime,
    NotViewable,
    Frozen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabStatus {
    Granted,
    Denied(GrabDenial),
}

/// Capability to take and give back exclusive control of the pointer.
///
/// Callers must not call `grab_pointer()` while they already hold a grab, and must call `ungrab_pointer()` only while they
/// hold one.
pub trait PointerGrabI {
    fn grab_pointer(&mut self, window: WindowId, cursor: CursorHint)
        -> crate::Result<GrabStatus>;

    fn ungrab_pointer(&mut self) -> crate::Result<()>;
}

/// Returns true iff the grab was established. Failures are logged, not propagated.
pub(crate) fn acquire<C>(ctx: &mut C, window: WindowId, cursor: CursorHint) -> bool
where
    C: PointerGrabI + ?Sized,
{
    match ctx.grab_pointer(window, cursor) {
        Ok(GrabStatus::Granted) => true,
        Ok(GrabStatus::Denied(denial)) => {
            info!(
                "mouse dragging was unsuccessful as pointer grab could not be established: denial = {:?}",
                denial
            );
            false
        }
        Err(e) => {
            warn!("mouse dragging was unsuccessful: {}", e);
            false
        }
    }
}

/// Failures are logged and otherwise ignored so that the caller's cleanup continues.
pub(crate) fn release<C>(ctx: &mut C)
where
    C: PointerGrabI + ?Sized,
{
    if let Err(e) = ctx.ungrab_pointer() {
        warn!("failed to ungrab pointer: {}", e);
    }
}
