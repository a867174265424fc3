//! Atom table for the EWMH/ICCCM conversation with the window manager.

use anyhow::Result;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, ConnectionExt};

/// Holds all interned atoms
#[derive(Debug)]
pub struct Atoms {
    pub net_active_window: Atom,
    pub net_current_desktop: Atom,
    pub net_wm_desktop: Atom,
    pub wm_change_state: Atom,
}

impl Atoms {
    /// Intern all required atoms
    pub fn new<C: Connection>(conn: &C) -> Result<Self> {
        // Helper to intern a single atom
        let intern = |name: &str| -> Result<Atom> {
            Ok(conn.intern_atom(false, name.as_bytes())?.reply()?.atom)
        };

        Ok(Self {
            net_active_window: intern("_NET_ACTIVE_WINDOW")?,
            net_current_desktop: intern("_NET_CURRENT_DESKTOP")?,
            net_wm_desktop: intern("_NET_WM_DESKTOP")?,
            wm_change_state: intern("WM_CHANGE_STATE")?,
        })
    }
}
