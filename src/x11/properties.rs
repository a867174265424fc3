//! Single-value window property reads.

use tracing::warn;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt, Window};

use crate::x11::atoms::Atoms;

/// Outcome of one property round trip.
///
/// `Failed` covers a refused request as well as a reply error; callers
/// collapse it to "unknown" alongside `Missing` and never use either as
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue {
    Value(u32),
    Missing,
    Failed,
}

impl PropertyValue {
    /// The decoded value, if the property was present and readable.
    pub fn value(self) -> Option<u32> {
        match self {
            PropertyValue::Value(value) => Some(value),
            PropertyValue::Missing | PropertyValue::Failed => None,
        }
    }
}

/// Read the first 32-bit item of `property` on `window`.
///
/// A failed round trip is logged; an absent property is an expected
/// condition and stays silent.
pub fn read_cardinal<C: Connection>(
    conn: &C,
    window: Window,
    property: Atom,
    name: &str,
) -> PropertyValue {
    let cookie = match conn.get_property(false, window, property, AtomEnum::ANY, 0, 1) {
        Ok(cookie) => cookie,
        Err(err) => {
            warn!("could not request property '{}' for window {}: {}", name, window, err);
            return PropertyValue::Failed;
        }
    };

    match cookie.reply() {
        Ok(reply) => match reply.value32().and_then(|mut values| values.next()) {
            Some(value) => PropertyValue::Value(value),
            None => PropertyValue::Missing,
        },
        Err(err) => {
            warn!("could not acquire property '{}' for window {}: {}", name, window, err);
            PropertyValue::Failed
        }
    }
}

/// The window `_NET_ACTIVE_WINDOW` names on the root, if any.
///
/// Zero is the protocol's "no active window" value and reads as `None`.
pub fn active_window<C: Connection>(conn: &C, atoms: &Atoms, root: Window) -> Option<Window> {
    read_cardinal(conn, root, atoms.net_active_window, "_NET_ACTIVE_WINDOW")
        .value()
        .filter(|&window| window != 0)
}

/// `_NET_CURRENT_DESKTOP` on the root window.
pub fn current_desktop<C: Connection>(conn: &C, atoms: &Atoms, root: Window) -> Option<u32> {
    read_cardinal(conn, root, atoms.net_current_desktop, "_NET_CURRENT_DESKTOP").value()
}
