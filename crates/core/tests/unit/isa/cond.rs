//! Condition predicate tests.

use y86_core::isa::cond::ConditionCodes;
use y86_core::isa::opcodes::cc;

fn flags(zf: bool, sf: bool, of: bool) -> ConditionCodes {
    ConditionCodes { zf, sf, of }
}

/// The reset state has ZF set and nothing else.
#[test]
fn reset_state() {
    let reset = ConditionCodes::default();
    assert!(reset.zf);
    assert!(!reset.sf);
    assert!(!reset.of);
}

/// The unconditional predicate always holds.
#[test]
fn yes_always_holds() {
    for &zf in &[false, true] {
        for &sf in &[false, true] {
            for &of in &[false, true] {
                assert!(flags(zf, sf, of).holds(cc::YES));
            }
        }
    }
}

/// Equality predicates track ZF alone.
#[test]
fn equality_tracks_zf() {
    assert!(flags(true, false, false).holds(cc::E));
    assert!(!flags(false, false, false).holds(cc::E));
    assert!(flags(false, true, true).holds(cc::NE));
    assert!(!flags(true, false, false).holds(cc::NE));
}

/// Signed less-than is SF xor OF.
#[test]
fn less_than_is_sf_xor_of() {
    assert!(flags(false, true, false).holds(cc::L));
    assert!(flags(false, false, true).holds(cc::L));
    assert!(!flags(false, true, true).holds(cc::L));
    assert!(!flags(false, false, false).holds(cc::L));
}

/// Less-or-equal adds the ZF case to less-than.
#[test]
fn less_or_equal() {
    assert!(flags(true, false, false).holds(cc::LE));
    assert!(flags(false, true, false).holds(cc::LE));
    assert!(!flags(false, false, false).holds(cc::LE));
    assert!(!flags(false, true, true).holds(cc::LE));
}

/// Greater-or-equal is the complement of less-than.
#[test]
fn greater_or_equal() {
    for &zf in &[false, true] {
        for &sf in &[false, true] {
            for &of in &[false, true] {
                let f = flags(zf, sf, of);
                assert_eq!(f.holds(cc::GE), !f.holds(cc::L));
            }
        }
    }
}

/// Strictly-greater requires both GE and non-zero.
#[test]
fn strictly_greater() {
    assert!(flags(false, false, false).holds(cc::G));
    assert!(!flags(true, false, false).holds(cc::G));
    assert!(!flags(false, true, false).holds(cc::G));
    assert!(flags(false, true, true).holds(cc::G));
}

/// Unknown function codes never hold.
#[test]
fn unknown_condition_never_holds() {
    assert!(!flags(true, true, true).holds(0x7));
    assert!(!flags(true, true, true).holds(0xF));
}
