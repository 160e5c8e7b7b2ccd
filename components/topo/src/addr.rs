use crate::TopoError;

#[cfg(test)]
#[path = "./tests/addr_tests.rs"]
mod tests;

/// split_host_port splits `host:port`, or `[host]:port` for IPv6 hosts.
///
/// Neither part may be empty.
pub fn split_host_port(addr: &str) -> Result<(&str, &str), TopoError> {
    let bad = || TopoError::BadAddr(addr.into());

    let (host, port) = addr.rsplit_once(':').ok_or_else(bad)?;

    let host = if host.starts_with('[') {
        host.strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .ok_or_else(bad)?
    } else if host.contains(':') {
        // unbracketed IPv6 is ambiguous
        return Err(bad());
    } else {
        host
    };

    if host.is_empty() || port.is_empty() {
        return Err(bad());
    }

    Ok((host, port))
}

/// join_host_port is the reverse of split_host_port: a host containing a
/// colon is bracketed.
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
