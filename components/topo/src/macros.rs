/// Build a `Vec<SlotRange>` from half-open `(start, end)` pairs.
///
/// ```
/// #[macro_use] extern crate topo;
/// use topo::SlotRange;
///
/// let slots = slots![(0, 100), (200, 300)];
/// assert_eq!(SlotRange::new(200, 300), slots[1]);
/// ```
#[macro_export]
#[allow(unused_macros)]
macro_rules! slots {
    [$(($start:expr, $end:expr)),*] => {
        vec![$($crate::SlotRange::new($start, $end)),*]
    }
}

/// Build a master `Node`: `master!(addr, id, [(start, end), ...])`.
#[macro_export]
#[allow(unused_macros)]
macro_rules! master {
    ($addr:expr, $id:expr, [$(($start:expr, $end:expr)),*]) => {
        $crate::Node {
            addr: $addr.to_string(),
            id: $id.to_string(),
            slots: $crate::slots![$(($start, $end)),*],
            replica_of_addr: String::new(),
            replica_of_id: String::new(),
        }
    };
}

/// Build a replica `Node`:
/// `replica!(addr, id, [(start, end), ...], master_addr, master_id)`.
#[macro_export]
#[allow(unused_macros)]
macro_rules! replica {
    ($addr:expr, $id:expr, [$(($start:expr, $end:expr)),*], $maddr:expr, $mid:expr) => {
        $crate::Node {
            addr: $addr.to_string(),
            id: $id.to_string(),
            slots: $crate::slots![$(($start, $end)),*],
            replica_of_addr: $maddr.to_string(),
            replica_of_id: $mid.to_string(),
        }
    };
}
