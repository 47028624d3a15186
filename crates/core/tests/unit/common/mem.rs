//! Memory tests.
//!
//! Covers little-endian word access, the end-of-memory bounds check, and
//! the sparse non-zero word view used by snapshots.

use y86_core::common::mem::{Memory, MEM_SIZE};

/// A written word reads back.
#[test]
fn word_round_trip() {
    let mut mem = Memory::new();
    mem.write64(0x100, 0x0123_4567_89AB_CDEF).unwrap();
    assert_eq!(mem.read64(0x100).unwrap(), 0x0123_4567_89AB_CDEF);
}

/// Words are stored little-endian: the low byte lands at the low address.
#[test]
fn words_are_little_endian() {
    let mut mem = Memory::new();
    mem.write64(0x100, 0x0123_4567_89AB_CDEF).unwrap();
    assert_eq!(mem.read8(0x100).unwrap(), 0xEF);
    assert_eq!(mem.read8(0x107).unwrap(), 0x01);
}

/// Unaligned word access is allowed.
#[test]
fn unaligned_access_is_allowed() {
    let mut mem = Memory::new();
    mem.write64(3, 0x1122_3344_5566_7788).unwrap();
    assert_eq!(mem.read64(3).unwrap(), 0x1122_3344_5566_7788);
}

/// The last full word in memory is accessible; one byte further is not.
#[test]
fn word_bounds_at_end_of_memory() {
    let mut mem = Memory::new();
    let last = (MEM_SIZE - 8) as u64;
    assert!(mem.write64(last, 7).is_ok());
    assert_eq!(mem.read64(last).unwrap(), 7);
    assert!(mem.read64(last + 1).is_err());
    assert!(mem.write64(last + 1, 7).is_err());
}

/// Byte reads fail exactly at the end of memory.
#[test]
fn byte_bounds_at_end_of_memory() {
    let mem = Memory::new();
    assert!(mem.read8(MEM_SIZE as u64 - 1).is_ok());
    assert!(mem.read8(MEM_SIZE as u64).is_err());
}

/// `load_image` places bytes at address zero.
#[test]
fn load_image_at_base() {
    let mut mem = Memory::new();
    mem.load_image(&[0x30, 0xF0, 0x08]);
    assert_eq!(mem.read8(0).unwrap(), 0x30);
    assert_eq!(mem.read8(2).unwrap(), 0x08);
    assert_eq!(mem.read8(3).unwrap(), 0);
}

/// The sparse view reports only non-zero aligned words, as signed values.
#[test]
fn nonzero_words_are_sparse_and_signed() {
    let mut mem = Memory::new();
    mem.write64(16, 5).unwrap();
    mem.write64(24, 0).unwrap();
    mem.write64(4096, -3i64 as u64).unwrap();
    let words = mem.nonzero_words();
    assert_eq!(words.len(), 2);
    assert_eq!(words.get(&16), Some(&5));
    assert_eq!(words.get(&4096), Some(&-3));
    assert!(!words.contains_key(&24));
}

/// An unaligned write shows up in both aligned words it straddles.
#[test]
fn nonzero_words_straddle() {
    let mut mem = Memory::new();
    mem.write64(4, u64::MAX).unwrap();
    let words = mem.nonzero_words();
    assert!(words.contains_key(&0));
    assert!(words.contains_key(&8));
}
