// Moves the top-level window under the pointer while the configured button (`DRAGBIND_BUTTON`, default Mod4-1) is dragged.

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

use dragbind::backend::x11::X11Context;
use dragbind::config::DragbindConfig;
use dragbind::dispatch::Dispatcher;
use dragbind::drag::{DragBegin, DragHandlerI};
use dragbind::input_event::PointerPosition;
use dragbind::pointer::CursorHint;
use dragbind::reexports::x11rb;
use dragbind::xevent::{new_client_message, new_configure_notify, Geometry};
use dragbind::EnvVar;
use eyre::WrapErr;
use std::cell::Cell;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{self, ConfigureWindowAux, ConnectionExt, EventMask};

fn tracing_init() -> eyre::Result<()> {
    use time::macros::format_description;
    use time::UtcOffset;
    use tracing_subscriber::fmt::time::OffsetTime;
    use tracing_subscriber::EnvFilter;

    match std::env::var("RUST_LOG") {
        Err(std::env::VarError::NotPresent) => {}
        _ => {
            let offset = UtcOffset::current_local_offset().wrap_err("failed to get local offset")?;
            let timer = OffsetTime::new(
                offset,
                format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
            );

            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_timer(timer)
                .with_line_number(true)
                .with_ansi(true)
                .init();
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct MoveTarget {
    window: xproto::Window,
    geometry: Geometry,
    border_width: u16,
    // Pointer location at the press.
    start_root_x: i32,
    start_root_y: i32,
}

struct WindowMover {
    cursor: xproto::Cursor,
    net_active_window: xproto::Atom,
    target: Cell<Option<MoveTarget>>,
}

impl WindowMover {
    fn find_target(
        &self,
        ctx: &X11Context,
        pos: PointerPosition,
    ) -> dragbind::Result<Option<MoveTarget>> {
        let conn = ctx.conn();
        let pointer = conn.query_pointer(ctx.root())?.reply()?;
        if pointer.child == x11rb::NONE {
            return Ok(None);
        }

        let geometry = conn.get_geometry(pointer.child)?.reply()?;
        Ok(Some(MoveTarget {
            window: pointer.child,
            geometry: Geometry {
                x: geometry.x,
                y: geometry.y,
                width: geometry.width,
                height: geometry.height,
            },
            border_width: geometry.border_width,
            start_root_x: pos.root_x,
            start_root_y: pos.root_y,
        }))
    }

    fn move_target(
        &self,
        ctx: &X11Context,
        target: &MoveTarget,
        pos: PointerPosition,
    ) -> dragbind::Result<()> {
        let conn = ctx.conn();
        let x = i32::from(target.geometry.x) + pos.root_x - target.start_root_x;
        let y = i32::from(target.geometry.y) + pos.root_y - target.start_root_y;
        conn.configure_window(target.window, &ConfigureWindowAux::new().x(x).y(y))?;

        // ICCCM 4.1.5: a move without resize is notified with a synthetic ConfigureNotify.
        let geometry = Geometry {
            x: x.clamp(i16::MIN.into(), i16::MAX.into()) as i16,
            y: y.clamp(i16::MIN.into(), i16::MAX.into()) as i16,
            ..target.geometry
        };
        let ev = new_configure_notify(
            target.window,
            target.window,
            x11rb::NONE,
            geometry,
            target.border_width,
            false,
        );
        conn.send_event(false, target.window, EventMask::STRUCTURE_NOTIFY, ev)?;
        conn.flush()?;
        Ok(())
    }

    fn activate(&self, ctx: &X11Context, window: xproto::Window) -> dragbind::Result<()> {
        let conn = ctx.conn();
        // Source indication 2: pager or other direct user action.
        let ev = new_client_message(
            32,
            window,
            self.net_active_window,
            &[2, i64::from(x11rb::CURRENT_TIME), 0],
        )?;
        conn.send_event(
            false,
            ctx.root(),
            EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
            ev,
        )?;
        conn.flush()?;
        Ok(())
    }
}

impl DragHandlerI<X11Context> for WindowMover {
    fn begin(&self, ctx: &mut X11Context, pos: PointerPosition) -> DragBegin {
        match self.find_target(ctx, pos) {
            Ok(Some(target)) => {
                debug!("start moving window {:#x}", target.window);
                self.target.set(Some(target));
                DragBegin::Proceed(CursorHint::Cursor(self.cursor))
            }
            Ok(None) => DragBegin::Cancel,
            Err(e) => {
                warn!("failed to find window under pointer: {}", e);
                DragBegin::Cancel
            }
        }
    }

    fn step(&self, ctx: &mut X11Context, pos: PointerPosition) {
        let Some(target) = self.target.get() else {
            return;
        };
        if let Err(e) = self.move_target(ctx, &target, pos) {
            warn!("failed to move window {:#x}: {}", target.window, e);
        }
    }

    fn end(&self, ctx: &mut X11Context, pos: PointerPosition) {
        let Some(target) = self.target.take() else {
            return;
        };
        if let Err(e) = self.move_target(ctx, &target, pos) {
            warn!("failed to move window {:#x}: {}", target.window, e);
        }
        if let Err(e) = self.activate(ctx, target.window) {
            warn!("failed to activate window {:#x}: {}", target.window, e);
        }
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_init()?;

    let envvar = EnvVar::load()?;
    let config = DragbindConfig::from_envvar(&envvar)?;
    info!("config = {:?}", config);

    let mut ctx = X11Context::connect(envvar.generic.display.as_deref())
        .wrap_err("failed to connect to X server")?;
    let cursor = dragbind::cursor::create_glyph_cursor(ctx.conn(), config.cursor)?;
    let net_active_window = ctx
        .conn()
        .intern_atom(false, b"_NET_ACTIVE_WINDOW")?
        .reply()?
        .atom;

    let mover = WindowMover {
        cursor,
        net_active_window,
        target: Cell::new(None),
    };
    let mut dispatcher = Dispatcher::new();
    let root = ctx.root();
    dispatcher
        .register_drag(&mut ctx, root, config.button, config.grab, mover)
        .wrap_err("failed to register drag on root window")?;
    ctx.conn().flush()?;

    loop {
        let (_, input_event) = ctx.wait_for_event()?;
        if let Some(input_event) = input_event {
            dispatcher.dispatch(&mut ctx, &input_event);
        }
    }
}
