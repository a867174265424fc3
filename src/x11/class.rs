//! WM_CLASS resolution.

use x11rb::connection::Connection;
use x11rb::properties::WmClass;
use x11rb::protocol::xproto::Window;

/// Fetch the WM_CLASS instance name of `window` as an owned string.
///
/// Most windows in the hierarchy are not application toplevels and carry
/// no class hint, so `None` is the common case here, not an error. A
/// window destroyed mid-walk reads as `None` too.
pub fn class_name<C: Connection>(conn: &C, window: Window) -> Option<String> {
    let class = WmClass::get(conn, window).ok()?.reply().ok()??;
    Some(String::from_utf8_lossy(class.instance()).into_owned())
}
