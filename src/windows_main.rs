//! Windows entry point.
//!
//! Creates the scheme list window, installs tray residency, and runs the
//! message loop. From here on everything is message-driven on this thread.

use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, ShowWindow, TranslateMessage, MSG, SW_SHOW,
};

use curswitch::platform::windows::app::STATE;
use curswitch::platform::windows::ui::{main_window, tray};

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        eprintln!("Curswitch error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> windows::core::Result<()> {
    unsafe {
        let hwnd = main_window::create_main_window()?;
        STATE.with(|s| s.borrow_mut().hwnd = hwnd);

        // Subclass + icon first, then reroute the close button so the only
        // exits left are the tray menu and the Exit button.
        tray::install_tray(hwnd);
        tray::suppress_close_termination();

        let _ = ShowWindow(hwnd, SW_SHOW);

        // Message loop
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        tray::remove_tray_icon(hwnd);

        Ok(())
    }
}
