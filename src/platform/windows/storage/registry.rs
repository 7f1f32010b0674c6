//! Registry-backed scheme store.
//!
//! Schemes live as named values under `HKCU\Control Panel\Cursors\Schemes`;
//! the active configuration is `HKCU\Control Panel\Cursors`, with one
//! REG_EXPAND_SZ value per role and the scheme name as the key's default
//! value. Any key that cannot be opened degrades to "no schemes" or a no-op
//! write; callers never see an error.

use std::iter::once;

use windows::core::PCWSTR;
use windows::Win32::System::Environment::ExpandEnvironmentStringsW;
use windows::Win32::UI::WindowsAndMessaging::{
    SystemParametersInfoW, SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SPI_SETCURSORS,
};
use winreg::enums::{RegType, HKEY_CURRENT_USER, KEY_SET_VALUE};
use winreg::{RegKey, RegValue};

use crate::model::constants::{ACTIVE_SUBKEY, MAX_CURSOR_PATH_LEN, SCHEMES_SUBKEY};
use crate::model::{CursorRole, SchemeStore};

/// Store over the live HKCU cursor keys.
#[derive(Debug, Default)]
pub struct RegistrySchemeStore;

impl RegistrySchemeStore {
    pub fn new() -> Self {
        Self
    }

    fn schemes_key(&self) -> Option<RegKey> {
        RegKey::predef(HKEY_CURRENT_USER).open_subkey(SCHEMES_SUBKEY).ok()
    }

    fn active_key_for_write(&self) -> Option<RegKey> {
        RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey_with_flags(ACTIVE_SUBKEY, KEY_SET_VALUE)
            .ok()
    }
}

impl SchemeStore for RegistrySchemeStore {
    fn scheme_names(&self) -> Vec<String> {
        let Some(key) = self.schemes_key() else {
            return Vec::new();
        };
        key.enum_values()
            .filter_map(|entry| entry.ok())
            .map(|(name, _)| name)
            .collect()
    }

    fn active_scheme_name(&self) -> Option<String> {
        let key = RegKey::predef(HKEY_CURRENT_USER).open_subkey(ACTIVE_SUBKEY).ok()?;
        // The scheme name marker is the key's unnamed default value.
        key.get_value::<String, _>("").ok()
    }

    fn scheme_path_list(&self, name: &str) -> Option<String> {
        self.schemes_key()?.get_value::<String, _>(name).ok()
    }

    fn set_role_path(&mut self, role: CursorRole, path: &str) {
        let Some(key) = self.active_key_for_write() else {
            return;
        };
        // REG_EXPAND_SZ, stored as UTF-16 with terminator. An empty path is
        // written out explicitly rather than deleting the value.
        let bytes: Vec<u8> = path
            .encode_utf16()
            .chain(once(0))
            .flat_map(u16::to_le_bytes)
            .collect();
        let value = RegValue {
            bytes,
            vtype: RegType::REG_EXPAND_SZ,
        };
        let _ = key.set_raw_value(role.value_name(), &value);
    }

    fn set_active_scheme_name(&mut self, name: &str) {
        if let Some(key) = self.active_key_for_write() {
            let _ = key.set_value("", &name);
        }
    }

    fn expand_path(&self, spec: &str) -> String {
        if spec.is_empty() {
            return String::new();
        }
        let wide: Vec<u16> = spec.encode_utf16().chain(once(0)).collect();
        let mut buffer = [0u16; MAX_CURSOR_PATH_LEN];
        let written =
            unsafe { ExpandEnvironmentStringsW(PCWSTR(wide.as_ptr()), Some(&mut buffer)) };
        // `written` counts the terminator. Zero means failure, anything past
        // the buffer means the expanded path exceeds the per-role cap; both
        // fall back to the unexpanded specifier.
        if written == 0 || written as usize > buffer.len() {
            return spec.to_owned();
        }
        String::from_utf16_lossy(&buffer[..written as usize - 1])
    }

    fn broadcast_change(&mut self) {
        // Reload cursors session-wide and persist to the user profile.
        unsafe {
            let _ = SystemParametersInfoW(
                SPI_SETCURSORS,
                0,
                None,
                SPIF_UPDATEINIFILE | SPIF_SENDCHANGE,
            );
        }
    }
}
