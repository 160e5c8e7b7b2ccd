#![allow(dead_code)]

use parse::Response;

/// slot_set builds one entry of a `CLUSTER SLOTS` reply. `last` is inclusive.
pub fn slot_set(start: i64, last: i64, nodes: Vec<Response>) -> Response {
    let mut items = vec![Response::Integer(start), Response::Integer(last)];
    items.extend(nodes);
    Response::Array(items)
}

/// node_entry builds a node entry of bulk strings.
pub fn node_entry(fields: &[&str]) -> Response {
    Response::Array(fields.iter().map(|f| Response::from(*f)).collect())
}

/// server_node builds a node entry the way a 7.x server sends it:
/// an integer port and networking metadata after the id.
pub fn server_node(host: &str, port: i64, id: &str) -> Response {
    Response::Array(vec![
        Response::from(host),
        Response::Integer(port),
        Response::from(id),
        Response::Array(vec![Response::from("hostname"), Response::from("")]),
    ])
}
