//! The fixed cursor-role table.
//!
//! A scheme's raw path list is positional: entry *i* always targets role *i*
//! in the order below, which is also the order Windows documents for the
//! `Control Panel\Cursors` value names. Keeping the mapping as one reviewable
//! table avoids pairing two parallel arrays by index.

use super::constants::CURSOR_ROLE_COUNT;

/// One of the 17 semantic cursor slots Windows picks a glyph from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorRole {
    Arrow,
    Help,
    AppStarting,
    Wait,
    Crosshair,
    IBeam,
    NWPen,
    No,
    SizeNS,
    SizeWE,
    SizeNWSE,
    SizeNESW,
    SizeAll,
    UpArrow,
    Hand,
    Pin,
    Person,
}

impl CursorRole {
    /// All roles in scheme-list position order.
    pub const ALL: [CursorRole; CURSOR_ROLE_COUNT] = [
        CursorRole::Arrow,
        CursorRole::Help,
        CursorRole::AppStarting,
        CursorRole::Wait,
        CursorRole::Crosshair,
        CursorRole::IBeam,
        CursorRole::NWPen,
        CursorRole::No,
        CursorRole::SizeNS,
        CursorRole::SizeWE,
        CursorRole::SizeNWSE,
        CursorRole::SizeNESW,
        CursorRole::SizeAll,
        CursorRole::UpArrow,
        CursorRole::Hand,
        CursorRole::Pin,
        CursorRole::Person,
    ];

    /// Role addressed by position `i` of a scheme path list, if in range.
    pub fn from_position(i: usize) -> Option<CursorRole> {
        Self::ALL.get(i).copied()
    }

    /// Position of this role in a scheme path list.
    pub fn position(self) -> usize {
        // ALL is total over the enum, so the lookup always succeeds.
        Self::ALL.iter().position(|&r| r == self).unwrap_or(0)
    }

    /// Registry value name under the active-configuration key.
    pub fn value_name(self) -> &'static str {
        match self {
            CursorRole::Arrow => "Arrow",
            CursorRole::Help => "Help",
            CursorRole::AppStarting => "AppStarting",
            CursorRole::Wait => "Wait",
            CursorRole::Crosshair => "Crosshair",
            CursorRole::IBeam => "IBeam",
            CursorRole::NWPen => "NWPen",
            CursorRole::No => "No",
            CursorRole::SizeNS => "SizeNS",
            CursorRole::SizeWE => "SizeWE",
            CursorRole::SizeNWSE => "SizeNWSE",
            CursorRole::SizeNESW => "SizeNESW",
            CursorRole::SizeAll => "SizeAll",
            CursorRole::UpArrow => "UpArrow",
            CursorRole::Hand => "Hand",
            CursorRole::Pin => "Pin",
            CursorRole::Person => "Person",
        }
    }
}
