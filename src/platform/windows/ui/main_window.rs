//! Main window: a listbox of installed schemes and an Exit button.
//!
//! Ordinary UI plumbing around the model. Selecting a listbox entry applies
//! that scheme; the close button only hides the window once tray residency
//! has suppressed close termination.

use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, LoadCursorW, PostQuitMessage, RegisterClassW,
    SendMessageW, ShowWindow, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, HMENU, IDC_ARROW, SW_HIDE,
    WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_COMMAND, WM_CREATE, WM_DESTROY, WNDCLASSW,
    WS_BORDER, WS_CAPTION, WS_CHILD, WS_MINIMIZEBOX, WS_OVERLAPPED, WS_SYSMENU, WS_TABSTOP,
    WS_VISIBLE, WS_VSCROLL,
};

use crate::model::{apply_scheme, SchemeCatalog};
use crate::platform::windows::app::STATE;
use crate::platform::windows::storage::RegistrySchemeStore;

// Control IDs
const ID_EXIT_BUTTON: i32 = 101;
const ID_SCHEME_LIST: i32 = 102;

// ListBox messages and notifications (from winuser.h)
const LB_ADDSTRING: u32 = 0x0180;
const LB_SETCURSEL: u32 = 0x0186;
const LB_GETCURSEL: u32 = 0x0188;
const LBN_SELCHANGE: u32 = 1;
const LBS_NOTIFY: u32 = 0x0001;

// Window dimensions
const WINDOW_WIDTH: i32 = 360;
const WINDOW_HEIGHT: i32 = 340;

// Layout constants
const MARGIN: i32 = 20;
const LIST_WIDTH: i32 = 300;
const LIST_HEIGHT: i32 = 200;

/// Register the window class and create the main window. Children are
/// created and populated in `WM_CREATE`.
pub fn create_main_window() -> windows::core::Result<HWND> {
    unsafe {
        let class_name = w!("CurswitchMain");
        let hinstance = GetModuleHandleW(None)?;

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(main_wnd_proc),
            hInstance: hinstance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            lpszClassName: class_name,
            ..Default::default()
        };
        let _ = RegisterClassW(&wc);

        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Curswitch"),
            WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            None,
            None,
            Some(hinstance.into()),
            None,
        )
    }
}

unsafe extern "system" fn main_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            create_controls(hwnd);
            LRESULT(0)
        }

        WM_COMMAND => {
            let control_id = (wparam.0 & 0xFFFF) as i32;
            let notification = ((wparam.0 >> 16) & 0xFFFF) as u32;
            handle_command(control_id, notification, lparam);
            LRESULT(0)
        }

        WM_CLOSE => {
            // Tray residency turns the close button into "hide"; the tray
            // icon's left click restores the window.
            let hide = STATE.with(|s| s.borrow().hide_on_close);
            if hide {
                let _ = ShowWindow(hwnd, SW_HIDE);
            } else {
                let _ = DestroyWindow(hwnd);
            }
            LRESULT(0)
        }

        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Create the Exit button and the scheme listbox, then fill the listbox
/// from a fresh catalog snapshot.
unsafe fn create_controls(hwnd: HWND) {
    let hinstance = GetModuleHandleW(None).unwrap_or_default();

    let _ = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("BUTTON"),
        w!("Exit"),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        MARGIN,
        MARGIN,
        80,
        26,
        Some(hwnd),
        Some(HMENU(ID_EXIT_BUTTON as *mut _)),
        Some(hinstance.into()),
        None,
    );

    let listbox = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("LISTBOX"),
        None,
        WS_CHILD | WS_VISIBLE | WS_TABSTOP | WS_VSCROLL | WS_BORDER | WINDOW_STYLE(LBS_NOTIFY),
        MARGIN,
        MARGIN + 50,
        LIST_WIDTH,
        LIST_HEIGHT,
        Some(hwnd),
        Some(HMENU(ID_SCHEME_LIST as *mut _)),
        Some(hinstance.into()),
        None,
    )
    .unwrap_or_default();

    let catalog = SchemeCatalog::build(&RegistrySchemeStore::new());
    for name in &catalog.names {
        let name_wide: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
        SendMessageW(
            listbox,
            LB_ADDSTRING,
            None,
            Some(LPARAM(name_wide.as_ptr() as isize)),
        );
    }
    if let Some(index) = catalog.current {
        SendMessageW(listbox, LB_SETCURSEL, Some(WPARAM(index)), None);
    }

    // Keep the snapshot so selection changes can be mapped back to names.
    STATE.with(|s| s.borrow_mut().scheme_names = catalog.names);
}

unsafe fn handle_command(control_id: i32, notification: u32, lparam: LPARAM) {
    match control_id {
        ID_EXIT_BUTTON => {
            PostQuitMessage(0);
        }
        ID_SCHEME_LIST => {
            if notification == LBN_SELCHANGE {
                let listbox = HWND(lparam.0 as *mut _);
                let selection = SendMessageW(listbox, LB_GETCURSEL, None, None).0;
                if selection < 0 {
                    return;
                }
                let name =
                    STATE.with(|s| s.borrow().scheme_names.get(selection as usize).cloned());
                if let Some(name) = name {
                    apply_scheme(&mut RegistrySchemeStore::new(), &name);
                }
            }
        }
        _ => {}
    }
}
