//! System tray (notification area) residency.
//!
//! Subclasses the main window so tray events can be handled without losing
//! the window's normal behavior, registers the icon, and shows the context
//! menu. The subclass stays installed for the process lifetime; the icon is
//! removed on the way out of the message loop.

use std::cell::RefCell;

use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CallWindowProcW, CreatePopupMenu, DefWindowProcW, DestroyMenu, GetCursorPos,
    LoadImageW, PostQuitMessage, SetForegroundWindow, SetWindowLongPtrW, ShowWindow,
    TrackPopupMenu, GWLP_WNDPROC, HICON, IMAGE_ICON, LR_DEFAULTSIZE, LR_SHARED, MF_STRING,
    SW_RESTORE, TPM_NONOTIFY, TPM_RETURNCMD, WM_LBUTTONUP, WM_RBUTTONUP, WM_USER, WNDPROC,
};

use crate::platform::windows::app::STATE;

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_USER + 1;

// Context menu item IDs
pub const MENU_EXIT: u32 = 1001;

// Tray icon ID
const TRAY_ICON_ID: u32 = 1;

const TOOLTIP: &str = "Curswitch - Cursor Schemes";

/// Evidence that the window has been subclassed and the icon registered.
/// Holds the original window procedure so unhandled messages keep flowing
/// to it.
struct TraySession {
    original_proc: WNDPROC,
}

thread_local! {
    static SESSION: RefCell<Option<TraySession>> = const { RefCell::new(None) };
}

/// Subclass `hwnd` and register the tray icon bound to it.
///
/// Installing twice would chain the subclass onto itself, so repeated calls
/// are ignored.
pub fn install_tray(hwnd: HWND) {
    let already_installed = SESSION.with(|s| s.borrow().is_some());
    if already_installed {
        return;
    }

    unsafe {
        let proc: unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT = tray_wnd_proc;
        let previous = SetWindowLongPtrW(hwnd, GWLP_WNDPROC, proc as usize as isize);
        let original_proc: WNDPROC = std::mem::transmute::<isize, WNDPROC>(previous);
        SESSION.with(|s| *s.borrow_mut() = Some(TraySession { original_proc }));

        // App icon from the embedded resources (resource ID 1)
        let hinstance = GetModuleHandleW(None).unwrap_or_default();
        let icon = LoadImageW(
            Some(hinstance.into()),
            windows::core::PCWSTR(1 as *const u16),
            IMAGE_ICON,
            16, // Small icon for tray
            16,
            LR_DEFAULTSIZE | LR_SHARED,
        );
        let hicon = match icon {
            Ok(handle) => HICON(handle.0),
            Err(_) => HICON::default(),
        };

        let mut nid = NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: hwnd,
            uID: TRAY_ICON_ID,
            uFlags: NIF_ICON | NIF_MESSAGE | NIF_TIP,
            uCallbackMessage: WM_TRAYICON,
            hIcon: hicon,
            ..Default::default()
        };
        let tip_wide: Vec<u16> = TOOLTIP.encode_utf16().collect();
        for (i, &c) in tip_wide.iter().enumerate().take(127) {
            nid.szTip[i] = c;
        }

        let _ = Shell_NotifyIconW(NIM_ADD, &nid);
    }
}

/// Remove the tray icon. The subclass stays in place; it is torn down
/// implicitly at process exit.
pub fn remove_tray_icon(hwnd: HWND) {
    unsafe {
        let nid = NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: hwnd,
            uID: TRAY_ICON_ID,
            ..Default::default()
        };
        let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
    }
}

/// Make the close button hide the window instead of quitting. After this,
/// the only exits are the tray menu and the in-window Exit button.
pub fn suppress_close_termination() {
    STATE.with(|s| s.borrow_mut().hide_on_close = true);
}

/// Subclass procedure: tray notifications are consumed here, everything
/// else is forwarded verbatim to the original window procedure.
unsafe extern "system" fn tray_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_TRAYICON {
        match (lparam.0 & 0xFFFF) as u32 {
            WM_LBUTTONUP => {
                // Bring the hidden window back
                let _ = ShowWindow(hwnd, SW_RESTORE);
                let _ = SetForegroundWindow(hwnd);
            }
            WM_RBUTTONUP => {
                show_tray_menu(hwnd);
            }
            _ => {}
        }
        return LRESULT(0);
    }

    let original = SESSION.with(|s| s.borrow().as_ref().and_then(|t| t.original_proc));
    match original {
        Some(proc) => CallWindowProcW(Some(proc), hwnd, msg, wparam, lparam),
        None => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Show the context menu at the cursor position and act on the selection.
/// `TrackPopupMenu` blocks this thread until the menu is dismissed.
unsafe fn show_tray_menu(hwnd: HWND) {
    let mut pt = POINT::default();
    let _ = GetCursorPos(&mut pt);

    let Ok(menu) = CreatePopupMenu() else {
        return;
    };
    let _ = AppendMenuW(menu, MF_STRING, MENU_EXIT as usize, w!("Exit"));

    // Required for the menu to close when clicking outside
    let _ = SetForegroundWindow(hwnd);

    let selected = TrackPopupMenu(
        menu,
        TPM_RETURNCMD | TPM_NONOTIFY,
        pt.x,
        pt.y,
        None, // nReserved - must be None/0
        hwnd,
        None,
    );
    let _ = DestroyMenu(menu);

    // With TPM_RETURNCMD the "BOOL" carries the selected command id,
    // or 0 when the menu was dismissed.
    if selected.0 as u32 == MENU_EXIT {
        PostQuitMessage(0);
    }
}
