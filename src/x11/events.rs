//! Control messages asking the window manager to act.
//!
//! Everything here is a format-32 ClientMessage sent to a root window
//! with the substructure masks set, so the window manager (a separate,
//! uncontrolled process) receives it and performs the actual state
//! change.

use anyhow::{Context, Result};
use tracing::debug;
use x11rb::CURRENT_TIME;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, ClientMessageEvent, ConnectionExt, EventMask, Window};

use crate::x11::WindowInfo;
use crate::x11::atoms::Atoms;
use crate::x11::properties;

/// EWMH source indication for pagers and task switchers.
const SOURCE_PAGER: u32 = 2;

/// ICCCM WM_STATE iconic value, the payload of a WM_CHANGE_STATE request.
const ICONIC_STATE: u32 = 3;

fn client_message(window: Window, message_type: Atom, data: [u32; 5]) -> ClientMessageEvent {
    ClientMessageEvent::new(32, window, message_type, data)
}

/// Send a ClientMessage about `info.window` to `destination` and wait for
/// the request's round trip, so the message has reached the server when
/// this returns.
pub fn send_wm_message<C: Connection>(
    conn: &C,
    destination: Window,
    info: &WindowInfo,
    message_type: Atom,
    type_name: &str,
    data: [u32; 5],
) -> Result<()> {
    let event = client_message(info.window, message_type, data);

    conn.send_event(
        false,
        destination,
        EventMask::SUBSTRUCTURE_NOTIFY | EventMask::SUBSTRUCTURE_REDIRECT,
        event,
    )
    .with_context(|| send_failure(type_name, info))?
    .check()
    .with_context(|| send_failure(type_name, info))?;

    Ok(())
}

fn send_failure(type_name: &str, info: &WindowInfo) -> String {
    format!(
        "could not send a '{}' event to window {} ({})",
        type_name,
        info.window,
        info.class_name.as_deref().unwrap_or("unknown class"),
    )
}

/// Ask the window manager to iconify `info`'s window.
///
/// WM_CHANGE_STATE goes to the root of the window's own screen, the
/// direct protocol form of an iconify request.
pub fn minimize<C: Connection>(conn: &C, atoms: &Atoms, info: &WindowInfo) -> Result<()> {
    let root = conn.setup().roots[info.screen].root;
    send_wm_message(
        conn,
        root,
        info,
        atoms.wm_change_state,
        "WM_CHANGE_STATE",
        [ICONIC_STATE, 0, 0, 0, 0],
    )
}

/// Bring `info`'s window to the current desktop and activate it.
///
/// Two messages in order: a `_NET_WM_DESKTOP` move to the desktop the
/// root window reports as current, then a `_NET_ACTIVE_WINDOW`
/// activation. Both carry the pager source indication. Succeeds only if
/// every send succeeds.
pub fn focus<C: Connection>(conn: &C, atoms: &Atoms, root: Window, info: &WindowInfo) -> Result<()> {
    let desktop = properties::current_desktop(conn, atoms, root);
    if desktop.is_none() {
        debug!("current desktop unknown, skipping the desktop move for window {}", info.window);
    }

    for (message_type, type_name, data) in focus_messages(atoms, desktop) {
        send_wm_message(conn, root, info, message_type, type_name, data)?;
    }

    Ok(())
}

/// The focus event pair, desktop move first, activation last.
fn focus_messages(atoms: &Atoms, desktop: Option<u32>) -> Vec<(Atom, &'static str, [u32; 5])> {
    let mut messages = Vec::new();

    if let Some(desktop) = desktop {
        messages.push((
            atoms.net_wm_desktop,
            "_NET_WM_DESKTOP",
            [desktop, SOURCE_PAGER, 0, 0, 0],
        ));
    }

    messages.push((
        atoms.net_active_window,
        "_NET_ACTIVE_WINDOW",
        [SOURCE_PAGER, CURRENT_TIME, 0, 0, 0],
    ));

    messages
}
