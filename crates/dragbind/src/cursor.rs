use crate::error::Error;
use std::str::FromStr;

/// Glyphs of the X core "cursor" font. Values are indices into the font (<X11/cursorfont.h>).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum CursorGlyph {
    XCursor = 0,
    Arrow = 2,
    BottomLeftCorner = 12,
    BottomRightCorner = 14,
    Cross = 30,
    Crosshair = 34,
    Fleur = 52,
    Hand1 = 58,
    Hand2 = 60,
    LeftPtr = 68,
    Sizing = 120,
    TopLeftCorner = 134,
    TopRightCorner = 136,
    Watch = 150,
    Xterm = 152,
}

impl CursorGlyph {
    pub const ALL: [CursorGlyph; 15] = [
        CursorGlyph::XCursor,
        CursorGlyph::Arrow,
        CursorGlyph::BottomLeftCorner,
        CursorGlyph::BottomRightCorner,
        CursorGlyph::Cross,
        CursorGlyph::Crosshair,
        CursorGlyph::Fleur,
        CursorGlyph::Hand1,
        CursorGlyph::Hand2,
        CursorGlyph::LeftPtr,
        CursorGlyph::Sizing,
        CursorGlyph::TopLeftCorner,
        CursorGlyph::TopRightCorner,
        CursorGlyph::Watch,
        CursorGlyph::Xterm,
    ];

    pub fn index(&self) -> u16 {
        *self as u16
    }

    /// Name as in <X11/cursorfont.h> without the `XC_` prefix.
    pub fn name(&self) -> &'static str {
        match self {
            CursorGlyph::XCursor => "X_cursor",
            CursorGlyph::Arrow => "arrow",
            CursorGlyph::BottomLeftCorner => "bottom_left_corner",
            CursorGlyph::BottomRightCorner => "bottom_right_corner",
            CursorGlyph::Cross => "cross",
            CursorGlyph::Crosshair => "crosshair",
            CursorGlyph::Fleur => "fleur",
            CursorGlyph::Hand1 => "hand1",
            CursorGlyph::Hand2 => "hand2",
            CursorGlyph::LeftPtr => "left_ptr",
            CursorGlyph::Sizing => "sizing",
            CursorGlyph::TopLeftCorner => "top_left_corner",
            CursorGlyph::TopRightCorner => "top_right_corner",
            CursorGlyph::Watch => "watch",
            CursorGlyph::Xterm => "xterm",
        }
    }
}

impl FromStr for CursorGlyph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CursorGlyph::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| Error::UnknownCursorGlyph(s.to_string()))
    }
}

/// Creates a black-on-white cursor from the core cursor font. Each glyph's mask is the next index in the font.
#[cfg(feature = "x11")]
pub fn create_glyph_cursor<Conn>(
    conn: &Conn,
    glyph: CursorGlyph,
) -> crate::Result<x11rb::protocol::xproto::Cursor>
where
    Conn: x11rb::connection::Connection,
{
    use x11rb::protocol::xproto::ConnectionExt;

    let font = conn.generate_id()?;
    conn.open_font(font, b"cursor")?;

    let cursor = conn.generate_id()?;
    conn.create_glyph_cursor(
        cursor,
        font,
        font,
        glyph.index(),
        glyph.index() + 1,
        0,
        0,
        0,
        0xffff,
        0xffff,
        0xffff,
    )?;
    conn.close_font(font)?;

    debug!("created cursor {:#x} for glyph {}", cursor, glyph.name());
    Ok(cursor)
}
