//! The three-step decision pass.
//!
//! One snapshot per invocation: search the tree for the class, look up
//! the active window, then minimize, focus, or fall through to a launch.
//! Whichever step fires is terminal.

use anyhow::Result;
use tracing::info;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::Window;

use crate::x11::atoms::Atoms;
use crate::x11::{WindowInfo, events, properties, search, window_info};

/// Result of a completed pass, as far as the core takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The window was minimized or focused; nothing left to do.
    Done,
    /// No window matched; the caller should launch the executable.
    Launch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Minimize(Window),
    Focus(WindowInfo),
    Launch,
}

/// Pick the step to take from the discovery snapshot.
///
/// Handles are compared, not class names: a window manager can leave a
/// stale `_NET_ACTIVE_WINDOW` behind after the last matching window
/// closes, and the class of whatever it points at proves nothing.
fn decide(matched: Option<WindowInfo>, active: Option<Window>) -> Step {
    match matched {
        Some(info) if active == Some(info.window) => Step::Minimize(info.window),
        Some(info) => Step::Focus(info),
        None => Step::Launch,
    }
}

/// Run one decision pass over the session.
pub fn run<C: Connection>(
    conn: &C,
    atoms: &Atoms,
    screen_num: usize,
    class_name: &str,
) -> Result<Outcome> {
    let root = conn.setup().roots[screen_num].root;

    let matched = search::find_window_by_class(conn, class_name);
    let active = properties::active_window(conn, atoms, root);

    match decide(matched, active) {
        Step::Minimize(window) => {
            // The active-window lookup is the authoritative live identity;
            // resolve it fresh instead of reusing the match.
            let info = window_info(conn, window);
            info!(
                "minimizing window {} ({})",
                info.window,
                info.class_name.as_deref().unwrap_or("unknown class"),
            );
            events::minimize(conn, atoms, &info)?;
            Ok(Outcome::Done)
        }
        Step::Focus(info) => {
            info!("presenting window {} ({}) on the current desktop", info.window, class_name);
            events::focus(conn, atoms, root, &info)?;
            Ok(Outcome::Done)
        }
        Step::Launch => {
            info!("no mapped window matches class '{}'", class_name);
            Ok(Outcome::Launch)
        }
    }
}
