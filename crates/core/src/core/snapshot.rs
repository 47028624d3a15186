//! Retirement snapshots and their serialization model.
//!
//! A snapshot deep-copies the architectural state at the moment an
//! instruction retires. The JSON shape is part of the external contract:
//! register keys appear in canonical ISA order, condition flags serialize
//! as 0/1, memory as a sparse map from decimal byte address to signed word,
//! and the status as its numeric code.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::common::mem::Memory;
use crate::common::reg::RegisterFile;
use crate::isa::abi;
use crate::isa::cond::ConditionCodes;
use crate::isa::status::Status;

/// Architectural state at one retirement.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    #[serde(rename = "PC")]
    pub pc: u64,
    #[serde(rename = "REG")]
    pub reg: RegValues,
    #[serde(rename = "MEM")]
    pub mem: BTreeMap<u64, i64>,
    #[serde(rename = "CC")]
    pub cc: CcValues,
    #[serde(rename = "STAT")]
    pub stat: Status,
}

impl Snapshot {
    /// Deep-copies the observable state.
    pub fn capture(
        pc: u64,
        regs: &RegisterFile,
        mem: &Memory,
        cc: ConditionCodes,
        stat: Status,
    ) -> Self {
        Self {
            pc,
            reg: RegValues(regs.dump()),
            mem: mem.nonzero_words(),
            cc: CcValues(cc),
            stat,
        }
    }
}

/// Register bank copy, serialized as fifteen named keys in ISA order.
#[derive(Clone, Copy, Debug)]
pub struct RegValues(pub [i64; abi::NUM_REGS]);

impl Serialize for RegValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(abi::NUM_REGS))?;
        for (name, val) in abi::REG_NAMES.iter().zip(self.0.iter()) {
            map.serialize_entry(name, val)?;
        }
        map.end()
    }
}

/// Condition flag copy, serialized as `ZF`/`SF`/`OF` with 0/1 values.
#[derive(Clone, Copy, Debug)]
pub struct CcValues(pub ConditionCodes);

impl Serialize for CcValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("ZF", &(self.0.zf as u8))?;
        map.serialize_entry("SF", &(self.0.sf as u8))?;
        map.serialize_entry("OF", &(self.0.of as u8))?;
        map.end()
    }
}
