use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::io::{Read, Write};
use std::ops::{Deref, DerefMut};
use std::path::Path;

use parse::ArrayHeader;
use redis::{FromRedisValue, RedisResult, Value};
use serde::{Deserialize, Serialize};

use crate::slotset::slot_set_response;
use crate::Node;
use crate::SlotRange;
use crate::SlotSet;
use crate::TopoError;

#[cfg(test)]
#[path = "./tests/topo_tests.rs"]
mod tests;

/// Topology describes the cluster at a given moment, as reported by
/// `CLUSTER SLOTS`.
///
/// After `sort()` nodes are ordered by the first slot they own, and masters
/// come before replicas that start at the same slot.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    pub nodes: Vec<Node>,
}

// let user to use t.iter() just like t.nodes.iter()
impl Deref for Topology {
    type Target = Vec<Node>;
    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}

impl DerefMut for Topology {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.nodes
    }
}

impl From<Vec<Node>> for Topology {
    fn from(nodes: Vec<Node>) -> Self {
        Topology { nodes }
    }
}

impl Topology {
    /// from_file reads a topology described in yaml and checks it.
    /// The result is sorted.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Topology, TopoError> {
        let content = fs::read_to_string(path)?;
        Topology::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Topology, TopoError> {
        let mut t: Topology = serde_yaml::from_str(content)?;
        t.sort();
        t.check()?;
        Ok(t)
    }

    /// sort puts every node's slots in ascending order, then the nodes in
    /// canonical order: by the start of the first range, masters before
    /// replicas, then by address.
    /// Nodes without any slot go last.
    pub fn sort(&mut self) {
        for n in self.nodes.iter_mut() {
            n.sort_slots();
        }

        self.nodes.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    }

    /// check verifies that addresses are non-empty and unique and that no
    /// node has empty or overlapping ranges. Nodes must be sorted.
    pub fn check(&self) -> Result<(), TopoError> {
        let mut seen = HashSet::with_capacity(self.nodes.len());

        for n in self.nodes.iter() {
            if n.addr.is_empty() {
                return Err(TopoError::BadAddr(n.addr.clone()));
            }
            if !seen.insert(n.addr.as_str()) {
                return Err(TopoError::DupNode(n.addr.clone()));
            }
            n.check_slots()?;
        }
        Ok(())
    }

    /// map returns the nodes indexed by address.
    pub fn map(&self) -> HashMap<&str, &Node> {
        self.nodes.iter().map(|n| (n.addr.as_str(), n)).collect()
    }

    pub fn masters(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_master())
    }

    pub fn replicas_of<'a>(&'a self, master_addr: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes
            .iter()
            .filter(move |n| n.replica_of_addr == master_addr)
    }

    /// node_for_slot returns the master that owns `slot`.
    pub fn node_for_slot(&self, slot: u16) -> Option<&Node> {
        self.masters().find(|n| n.owns(slot))
    }

    /// decode reads one `CLUSTER SLOTS` reply from `r`.
    pub fn decode<R: Read>(r: R) -> Result<Topology, TopoError> {
        let v = redis::Parser::new().parse_value(r)?;
        Topology::from_value(&v)
    }

    /// from_value builds a sorted topology from a parsed `CLUSTER SLOTS`
    /// reply. Nodes appearing in several slot sets are merged into one node
    /// owning all of these ranges.
    pub fn from_value(v: &Value) -> Result<Topology, TopoError> {
        let entries = match v {
            Value::Bulk(entries) => entries,
            _ => return Err(TopoError::malformed("cluster slots reply", v)),
        };

        let mut slot_sets = Vec::with_capacity(entries.len());
        for e in entries.iter() {
            slot_sets.push(SlotSet::from_value(e)?);
        }

        let mut t = Topology::merge(slot_sets);
        t.sort();

        debug!("decoded cluster slots";
               "slot_sets" => entries.len(),
               "nodes" => t.nodes.len());
        Ok(t)
    }

    /// merge groups the nodes of all slot sets by address.
    /// Identity fields are taken from the first occurrence of an address.
    fn merge(slot_sets: Vec<SlotSet>) -> Topology {
        let mut nodes: Vec<Node> = Vec::new();
        let mut idx: HashMap<String, usize> = HashMap::new();

        for n in slot_sets.into_iter().flat_map(|ss| ss.nodes) {
            match idx.get(&n.addr) {
                Some(&i) => {
                    let existing = &mut nodes[i];
                    if existing.id != n.id || existing.replica_of_addr != n.replica_of_addr {
                        warn!("node identity differs between slot sets, keep the first";
                              "addr" => &n.addr,
                              "id" => &existing.id, "other_id" => &n.id,
                              "replica_of" => &existing.replica_of_addr,
                              "other_replica_of" => &n.replica_of_addr);
                    }
                    existing.slots.extend(n.slots);
                }
                None => {
                    idx.insert(n.addr.clone(), nodes.len());
                    nodes.push(n);
                }
            }
        }

        Topology { nodes }
    }

    /// buckets groups nodes by the exact range they own, ordered by range.
    /// A node owning several ranges appears in several groups.
    /// Within a group masters come first; otherwise the order of `nodes` is
    /// kept.
    fn buckets(&self) -> BTreeMap<SlotRange, Vec<&Node>> {
        let mut m: BTreeMap<SlotRange, Vec<&Node>> = BTreeMap::new();
        for n in self.nodes.iter() {
            for r in n.slots.iter() {
                m.entry(*r).or_default().push(n);
            }
        }

        for nodes in m.values_mut() {
            nodes.sort_by_key(|n| n.is_replica());
        }
        m
    }

    /// slot_sets returns the wire grouping of this topology.
    pub fn slot_sets(&self) -> Vec<SlotSet> {
        self.buckets()
            .into_iter()
            .map(|(slots, nodes)| SlotSet {
                slots,
                nodes: nodes.into_iter().cloned().collect(),
            })
            .collect()
    }

    /// encode writes the topology in the format of a `CLUSTER SLOTS` reply.
    ///
    /// Bad ranges or addresses are reported before anything is written.
    /// If writing fails `w` is left with a partial reply.
    pub fn encode<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), TopoError> {
        let buckets = self.buckets();

        let mut entries = Vec::with_capacity(buckets.len());
        for (slots, nodes) in buckets.iter() {
            entries.push(slot_set_response(*slots, nodes)?);
        }

        ArrayHeader::new(entries.len()).write_to(w)?;
        for e in entries.iter() {
            e.write_to(w)?;
        }

        debug!("encoded cluster slots";
               "slot_sets" => entries.len(),
               "nodes" => self.nodes.len());
        Ok(())
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, TopoError> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }
}

fn sort_key(n: &Node) -> (u32, bool, &str) {
    let first = n.first_slot().map_or(u32::MAX, u32::from);
    (first, n.is_replica(), n.addr.as_str())
}

impl FromRedisValue for Topology {
    fn from_redis_value(v: &Value) -> RedisResult<Topology> {
        Topology::from_value(v).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "invalid cluster slots reply",
                e.to_string(),
            ))
        })
    }
}
