//! `.yo` object-file parsing.
//!
//! The format is line-oriented assembler listing output. A data line looks
//! like:
//!
//! ```text
//! 0x00a: 30f40001000000000000 |irmovq stack, %rsp
//! ```
//!
//! Lines without a `|` or a `:`, or starting with `#`, are ignored, as are
//! lines whose address or bytes fail to parse. The resulting image is
//! zero-padded up to the highest touched address.

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::common::mem::MEM_SIZE;

/// Parses a `.yo` listing into a byte image based at address 0.
///
/// Returns an empty image when no data line was usable; the caller treats
/// that as "no program loaded". Bytes addressed past the end of simulated
/// memory are dropped.
pub fn parse_yo<R: BufRead>(input: R) -> Vec<u8> {
    let mut bytes: BTreeMap<u64, u8> = BTreeMap::new();

    for line in input.lines() {
        let Ok(line) = line else { break };
        if line.is_empty() || line.starts_with('#') || !line.contains('|') {
            continue;
        }
        let Some(colon) = line.find(':') else {
            continue;
        };

        let Some(addr) = parse_addr(&line[..colon]) else {
            continue;
        };

        let data = &line[colon + 1..];
        let data = data.split('|').next().unwrap_or("");
        let hex: String = data.chars().filter(|c| !c.is_whitespace()).collect();

        let mut offset = 0u64;
        for pair in hex.as_bytes().chunks_exact(2) {
            let Ok(text) = std::str::from_utf8(pair) else {
                break;
            };
            let Ok(byte) = u8::from_str_radix(text, 16) else {
                break;
            };
            let at = addr.wrapping_add(offset);
            if at < MEM_SIZE as u64 {
                bytes.insert(at, byte);
            }
            offset += 1;
        }
    }

    let Some(max_addr) = bytes.keys().next_back().copied() else {
        return Vec::new();
    };
    let mut image = vec![0u8; max_addr as usize + 1];
    for (addr, byte) in bytes {
        image[addr as usize] = byte;
    }
    image
}

/// Parses the `0x<hex>` address before the colon.
fn parse_addr(field: &str) -> Option<u64> {
    let at = field.find("0x")?;
    let digits: String = field[at + 2..]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    u64::from_str_radix(&digits, 16).ok()
}
