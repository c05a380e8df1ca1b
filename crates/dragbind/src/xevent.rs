//! Construction of synthetic events to be sent with `SendEvent`.

use crate::error::{Error, Result};
use x11rb::protocol::xproto::{
    Atom, ClientMessageData, ClientMessageEvent, ConfigureNotifyEvent, Window,
    CLIENT_MESSAGE_EVENT, CONFIGURE_NOTIFY_EVENT,
};

/// Builds a `ClientMessage` event.
///
/// `format` is the width in bits of the items in `data`: 8 (up to 20 items), 16 (up to 10) or 32 (up to 5). Items are
/// truncated to that width, missing ones are zero and ones beyond the capacity are ignored. Other formats are rejected.
pub fn new_client_message(
    format: u8,
    window: Window,
    type_: Atom,
    data: &[i64],
) -> Result<ClientMessageEvent> {
    let data = match format {
        8 => {
            let mut buf = [0u8; 20];
            for (b, &x) in buf.iter_mut().zip(data) {
                *b = x as u8;
            }
            ClientMessageData::from(buf)
        }
        16 => {
            let mut buf = [0u16; 10];
            for (b, &x) in buf.iter_mut().zip(data) {
                *b = x as u16;
            }
            ClientMessageData::from(buf)
        }
        32 => {
            let mut buf = [0u32; 5];
            for (b, &x) in buf.iter_mut().zip(data) {
                *b = x as u32;
            }
            ClientMessageData::from(buf)
        }
        _ => return Err(Error::UnsupportedFormat(format)),
    };

    Ok(ClientMessageEvent {
        response_type: CLIENT_MESSAGE_EVENT,
        format,
        sequence: 0,
        window,
        type_,
        data,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

/// Builds a `ConfigureNotify` event, e.g. the synthetic one ICCCM requires after moving a window without resizing it.
pub fn new_configure_notify(
    event: Window,
    window: Window,
    above_sibling: Window,
    geometry: Geometry,
    border_width: u16,
    override_redirect: bool,
) -> ConfigureNotifyEvent {
    ConfigureNotifyEvent {
        response_type: CONFIGURE_NOTIFY_EVENT,
        sequence: 0,
        event,
        window,
        above_sibling,
        x: geometry.x,
        y: geometry.y,
        width: geometry.width,
        height: geometry.height,
        border_width,
        override_redirect,
    }
}
