//! X11 Session Module
//!
//! Property reads, class resolution, window discovery, and the EWMH
//! control messages winshow sends. Every operation takes the connection
//! explicitly; nothing here holds ambient state.

pub mod atoms;
pub mod class;
pub mod events;
pub mod properties;
pub mod search;

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt, Window};

/// A window picked out by discovery or the active-window lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub window: Window,
    /// Index of the screen whose hierarchy the window belongs to.
    pub screen: usize,
    /// WM_CLASS instance name, when the window carries one.
    pub class_name: Option<String>,
}

/// Resolve the live identity of `window`: its screen and class name.
pub fn window_info<C: Connection>(conn: &C, window: Window) -> WindowInfo {
    let screen = match screen_of_window(conn, window) {
        Some(screen) => screen,
        None => {
            debug!("could not resolve the screen of window {}, assuming screen 0", window);
            0
        }
    };

    WindowInfo {
        window,
        screen,
        class_name: class::class_name(conn, window),
    }
}

/// Screen index owning `window`, via the root its geometry reports.
fn screen_of_window<C: Connection>(conn: &C, window: Window) -> Option<usize> {
    let geometry = conn.get_geometry(window).ok()?.reply().ok()?;
    conn.setup()
        .roots
        .iter()
        .position(|screen| screen.root == geometry.root)
}
