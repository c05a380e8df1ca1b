use crate::dispatch::ButtonBindI;
use crate::input::{Button, ButtonSpec, ModMask};
use crate::input_event::{
    ButtonEvent, ButtonState, InputEvent, MotionEvent, PointerPosition, WindowId,
};
use crate::pointer::{CursorHint, GrabDenial, GrabStatus, PointerGrabI};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{self, ChangeWindowAttributesAux, ConnectionExt, EventMask, GrabMode};
use x11rb::protocol::Event;
use x11rb::rust_connection::RustConnection;

pub struct X11Context {
    conn: RustConnection,
    screen_num: usize,
    root: xproto::Window,
}

impl X11Context {
    /// Connects to `display`, or to `$DISPLAY` if `None`.
    pub fn connect(display: Option<&str>) -> crate::Result<Self> {
        let (conn, screen_num) = x11rb::connect(display)?;
        let root = conn.setup().roots[screen_num].root;
        info!("connected to X server: screen = {}, root = {:#x}", screen_num, root);

        Ok(Self {
            conn,
            screen_num,
            root,
        })
    }

    pub fn conn(&self) -> &RustConnection {
        &self.conn
    }

    pub fn screen_num(&self) -> usize {
        self.screen_num
    }

    pub fn root(&self) -> xproto::Window {
        self.root
    }

    /// Blocks until the next event and returns it with its drag-relevant part, if any.
    pub fn wait_for_event(&self) -> crate::Result<(Event, Option<InputEvent>)> {
        let event = self.conn.wait_for_event()?;
        let input_event = translate_event(&event);
        Ok((event, input_event))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PointerGrabParams {
    grab_window: xproto::Window,
    confine_to: xproto::Window,
    event_mask: EventMask,
    cursor: xproto::Cursor,
}

/// The drag grab is always taken on the root window, which is viewable regardless of the window the binding is on.
fn pointer_grab_params(root: xproto::Window, cursor: CursorHint) -> PointerGrabParams {
    PointerGrabParams {
        grab_window: root,
        confine_to: root,
        event_mask: EventMask::BUTTON_RELEASE | EventMask::BUTTON_MOTION | EventMask::POINTER_MOTION,
        cursor: cursor.as_raw(),
    }
}

/// Adds the button bits to what this client already selected on a window.
fn with_button_events(current: EventMask) -> EventMask {
    current | EventMask::BUTTON_PRESS | EventMask::BUTTON_RELEASE
}

impl PointerGrabI for X11Context {
    fn grab_pointer(
        &mut self,
        _window: WindowId,
        cursor: CursorHint,
    ) -> crate::Result<GrabStatus> {
        let params = pointer_grab_params(self.root, cursor);
        let reply = self
            .conn
            .grab_pointer(
                false,
                params.grab_window,
                params.event_mask,
                GrabMode::ASYNC,
                GrabMode::ASYNC,
                params.confine_to,
                params.cursor,
                x11rb::CURRENT_TIME,
            )?
            .reply()?;

        let status = match reply.status {
            xproto::GrabStatus::SUCCESS => GrabStatus::Granted,
            xproto::GrabStatus::ALREADY_GRABBED => GrabStatus::Denied(GrabDenial::AlreadyGrabbed),
            xproto::GrabStatus::INVALID_TIME => GrabStatus::Denied(GrabDenial::InvalidTime),
            xproto::GrabStatus::NOT_VIEWABLE => GrabStatus::Denied(GrabDenial::NotViewable),
            _ => GrabStatus::Denied(GrabDenial::Frozen),
        };
        Ok(status)
    }

    fn ungrab_pointer(&mut self) -> crate::Result<()> {
        self.conn.ungrab_pointer(x11rb::CURRENT_TIME)?;
        self.conn.flush()?;
        Ok(())
    }
}

impl ButtonBindI for X11Context {
    fn bind_button(
        &mut self,
        window: WindowId,
        spec: &ButtonSpec,
        grab: bool,
    ) -> crate::Result<()> {
        if grab {
            let button = xproto::ButtonIndex::from(spec.button().raw());
            for mods in spec.ignore_mask_combinations() {
                self.conn
                    .grab_button(
                        false,
                        window,
                        EventMask::BUTTON_PRESS | EventMask::BUTTON_RELEASE,
                        GrabMode::ASYNC,
                        GrabMode::ASYNC,
                        x11rb::NONE,
                        x11rb::NONE,
                        button,
                        xproto::ModMask::from(mods.bits()),
                    )?
                    .check()?;
            }
        } else {
            let attrs = self.conn.get_window_attributes(window)?.reply()?;
            let current = EventMask::from(u32::from(attrs.your_event_mask));
            // Still fails with `Access` if another client, e.g. a window manager, already selected button presses on
            // `window`.
            let aux = ChangeWindowAttributesAux::new().event_mask(with_button_events(current));
            self.conn.change_window_attributes(window, &aux)?.check()?;
        }
        Ok(())
    }
}

pub fn translate_event(event: &Event) -> Option<InputEvent> {
    let input_event = match event {
        Event::ButtonPress(ev) => ButtonEvent {
            state: ButtonState::Pressed,
            window: ev.event,
            button: Button(ev.detail),
            mods: ModMask::from_bits_retain(u16::from(ev.state)),
            position: position(ev.root_x, ev.root_y, ev.event_x, ev.event_y),
        }
        .into(),
        Event::ButtonRelease(ev) => ButtonEvent {
            state: ButtonState::Released,
            window: ev.event,
            button: Button(ev.detail),
            mods: ModMask::from_bits_retain(u16::from(ev.state)),
            position: position(ev.root_x, ev.root_y, ev.event_x, ev.event_y),
        }
        .into(),
        Event::MotionNotify(ev) => MotionEvent {
            window: ev.event,
            position: position(ev.root_x, ev.root_y, ev.event_x, ev.event_y),
        }
        .into(),
        _ => return None,
    };
    Some(input_event)
}

fn position(root_x: i16, root_y: i16, event_x: i16, event_y: i16) -> PointerPosition {
    PointerPosition::new(root_x.into(), root_y.into(), event_x.into(), event_y.into())
}
