use std::fmt;

use serde::{Deserialize, Serialize};

use crate::split_host_port;
use crate::TopoError;

#[cfg(test)]
#[path = "./tests/node_tests.rs"]
mod tests;

/// SlotRange is a range of hash slots, `start` inclusive and `end` exclusive.
///
/// The wire format uses an inclusive end; see `from_inclusive` and `last`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotRange {
    pub start: u16,
    pub end: u16,
}

impl SlotRange {
    pub fn new(start: u16, end: u16) -> SlotRange {
        SlotRange { start, end }
    }

    /// from_inclusive builds a range from the `[start, last]` pair of a
    /// cluster slots reply.
    pub fn from_inclusive(start: u16, last: u16) -> Result<SlotRange, TopoError> {
        if last < start || last == u16::MAX {
            return Err(TopoError::BadRange(start, last as u32 + 1));
        }
        Ok(SlotRange::new(start, last + 1))
    }

    /// last returns the inclusive end, i.e., the last slot in this range.
    pub fn last(&self) -> Result<u16, TopoError> {
        if self.is_empty() {
            return Err(TopoError::BadRange(self.start, self.end as u32));
        }
        Ok(self.end - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, slot: u16) -> bool {
        self.start <= slot && slot < self.end
    }

    pub fn overlaps(&self, other: &SlotRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<(u16, u16)> for SlotRange {
    fn from(v: (u16, u16)) -> Self {
        SlotRange::new(v.0, v.1)
    }
}

impl fmt::Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Node describes a single node in the cluster at a moment in time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// `host:port` the node serves clients on.
    pub addr: String,

    /// Older servers do not send the node id, in which case it is empty.
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub slots: Vec<SlotRange>,

    /// Address and id of the master this node replicates.
    /// Both are empty for a master.
    #[serde(default)]
    pub replica_of_addr: String,
    #[serde(default)]
    pub replica_of_id: String,
}

impl Node {
    pub fn is_master(&self) -> bool {
        self.replica_of_addr.is_empty()
    }

    pub fn is_replica(&self) -> bool {
        !self.is_master()
    }

    /// first_slot returns the start of the first range in `slots`.
    /// It is only meaningful after `slots` is sorted.
    pub fn first_slot(&self) -> Option<u16> {
        self.slots.first().map(|r| r.start)
    }

    pub fn owns(&self, slot: u16) -> bool {
        self.slots.iter().any(|r| r.contains(slot))
    }

    pub fn host_port(&self) -> Result<(&str, &str), TopoError> {
        split_host_port(&self.addr)
    }

    pub(crate) fn sort_slots(&mut self) {
        self.slots.sort_by_key(|r| r.start);
    }

    /// check_slots checks that the node owns at least one range, that every
    /// range is non-empty and that no two of them overlap. `slots` must
    /// already be sorted.
    pub(crate) fn check_slots(&self) -> Result<(), TopoError> {
        if self.slots.is_empty() {
            return Err(TopoError::NoSlots(self.addr.clone()));
        }

        for r in self.slots.iter() {
            if r.is_empty() {
                return Err(TopoError::BadRange(r.start, r.end as u32));
            }
        }

        for w in self.slots.windows(2) {
            if w[0].overlaps(&w[1]) {
                return Err(TopoError::OverlappingSlots(
                    self.addr.clone(),
                    w[0].to_string(),
                    w[1].to_string(),
                ));
            }
        }
        Ok(())
    }
}
