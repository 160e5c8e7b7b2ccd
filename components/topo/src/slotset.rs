use std::convert::TryFrom;

use parse::Response;
use redis::Value;

use crate::join_host_port;
use crate::Node;
use crate::SlotRange;
use crate::TopoError;

#[cfg(test)]
#[path = "./tests/slotset_tests.rs"]
mod tests;

/// SlotSet is one entry of a `CLUSTER SLOTS` reply: a slot range and every
/// node serving it, the master first.
///
/// On the wire it is `[start, last, [host, port, id?], ...]` where `last` is
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSet {
    pub slots: SlotRange,
    pub nodes: Vec<Node>,
}

impl SlotSet {
    /// from_value parses one slot set entry.
    /// Every node it returns carries exactly one range: `slots`.
    pub fn from_value(v: &Value) -> Result<SlotSet, TopoError> {
        let items = match v {
            Value::Bulk(items) if items.len() >= 2 => items,
            _ => return Err(TopoError::malformed("slot set", v)),
        };

        let start = slot_of(&items[0])?;
        let last = slot_of(&items[1])?;
        let slots = SlotRange::from_inclusive(start, last)?;

        let mut nodes: Vec<Node> = Vec::with_capacity(items.len() - 2);

        for item in items[2..].iter() {
            let (addr, id) = node_entry_of(item)?;

            let mut node = Node {
                addr,
                id,
                slots: vec![slots],
                ..Default::default()
            };

            // replicas refer to the first node of the entry, never to another replica
            if let Some(master) = nodes.first() {
                node.replica_of_addr = master.addr.clone();
                node.replica_of_id = master.id.clone();
            }

            nodes.push(node);
        }

        Ok(SlotSet { slots, nodes })
    }

    pub fn to_response(&self) -> Result<Response, TopoError> {
        let nodes: Vec<&Node> = self.nodes.iter().collect();
        slot_set_response(self.slots, &nodes)
    }
}

/// slot_set_response builds the wire entry of a range and the nodes serving it,
/// in the order given.
pub(crate) fn slot_set_response(slots: SlotRange, nodes: &[&Node]) -> Result<Response, TopoError> {
    let mut items = Vec::with_capacity(2 + nodes.len());

    items.push(Response::Integer(slots.start as i64));
    items.push(Response::Integer(slots.last()? as i64));

    for n in nodes.iter() {
        let (host, port) = n.host_port()?;

        let mut entry = vec![Response::from(host), Response::from(port)];
        if !n.id.is_empty() {
            entry.push(Response::from(n.id.as_str()));
        }
        items.push(Response::Array(entry));
    }

    Ok(Response::Array(items))
}

fn slot_of(v: &Value) -> Result<u16, TopoError> {
    let n = match v {
        Value::Int(n) => Some(*n),
        Value::Data(d) => std::str::from_utf8(d).ok().and_then(|s| s.parse::<i64>().ok()),
        _ => None,
    };

    n.and_then(|n| u16::try_from(n).ok())
        .ok_or_else(|| TopoError::malformed("slot", v))
}

/// node_entry_of parses `[host, port, id?, ...]` into an address and an id.
///
/// Servers since 7.0 append a map of networking metadata, which is ignored.
fn node_entry_of(v: &Value) -> Result<(String, String), TopoError> {
    let fields = match v {
        Value::Bulk(fields) if fields.len() >= 2 => fields,
        _ => return Err(TopoError::malformed("node entry", v)),
    };

    let host = string_of(&fields[0])?;
    let port = string_of(&fields[1])?;
    let id = match fields.get(2) {
        Some(f) => string_of(f)?,
        None => String::new(),
    };

    Ok((join_host_port(&host, &port), id))
}

fn string_of(v: &Value) -> Result<String, TopoError> {
    match v {
        Value::Data(d) => String::from_utf8(d.clone()).map_err(|_| TopoError::malformed("string", v)),
        Value::Status(s) => Ok(s.clone()),
        Value::Int(n) => Ok(n.to_string()),
        _ => Err(TopoError::malformed("string", v)),
    }
}
