//! Tests for the fixed cursor-role table.
//!
//! The positional order is load-bearing: scheme path lists are parsed by
//! position, so any reordering here would scramble applied cursors.

use curswitch::model::constants::CURSOR_ROLE_COUNT;
use curswitch::model::CursorRole;

#[test]
fn role_table_has_seventeen_entries() {
    assert_eq!(CursorRole::ALL.len(), CURSOR_ROLE_COUNT);
    assert_eq!(CURSOR_ROLE_COUNT, 17);
}

#[test]
fn role_table_order_matches_registry_value_names() {
    let expected = [
        "Arrow",
        "Help",
        "AppStarting",
        "Wait",
        "Crosshair",
        "IBeam",
        "NWPen",
        "No",
        "SizeNS",
        "SizeWE",
        "SizeNWSE",
        "SizeNESW",
        "SizeAll",
        "UpArrow",
        "Hand",
        "Pin",
        "Person",
    ];
    let actual: Vec<&str> = CursorRole::ALL.iter().map(|r| r.value_name()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn from_position_covers_exactly_the_table() {
    assert_eq!(CursorRole::from_position(0), Some(CursorRole::Arrow));
    assert_eq!(CursorRole::from_position(14), Some(CursorRole::Hand));
    assert_eq!(CursorRole::from_position(16), Some(CursorRole::Person));
    assert_eq!(CursorRole::from_position(17), None);
    assert_eq!(CursorRole::from_position(usize::MAX), None);
}

#[test]
fn position_round_trips_for_every_role() {
    for (i, role) in CursorRole::ALL.iter().enumerate() {
        assert_eq!(role.position(), i);
        assert_eq!(CursorRole::from_position(i), Some(*role));
    }
}

#[test]
fn role_table_entries_are_unique() {
    for (i, a) in CursorRole::ALL.iter().enumerate() {
        for b in CursorRole::ALL.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
