quick_error! {
    /// Errors occur when decoding or encoding a cluster slots reply.
    #[derive(Debug)]
    pub enum TopoError {
        IOError(e: std::io::Error) {
            from(e: std::io::Error) -> (e)
            display("io error: {}", e)
        }

        /// The reply could not be read or is not valid Redis protocol.
        RespError(e: redis::RedisError) {
            from(e: redis::RedisError) -> (e)
            display("resp error: {}", e)
        }

        /// A well-formed RESP value with the wrong shape for a cluster slots reply.
        MalformedEntry(what: String, raw: String) {
            display("malformed {}: {}", what, raw)
        }

        BadRange(start: u16, end: u32) {
            display("bad slot range: start:{}, end:{}", start, end)
        }

        BadAddr(addr: String) {
            display("bad node address: {:?}", addr)
        }

        DupNode(addr: String) {
            display("duplicated node address: {}", addr)
        }

        /// A node without any slot range can not be put in a reply.
        NoSlots(addr: String) {
            display("node {} owns no slot", addr)
        }

        OverlappingSlots(addr: String, a: String, b: String) {
            display("node {} has overlapping slots: {} and {}", addr, a, b)
        }

        BadYaml(e: serde_yaml::Error) {
            from(e: serde_yaml::Error) -> (e)
            display("bad yaml: {}", e)
        }
    }
}

impl TopoError {
    pub(crate) fn malformed<T: std::fmt::Debug>(what: &str, raw: &T) -> TopoError {
        TopoError::MalformedEntry(what.into(), format!("{:?}", raw))
    }
}

impl PartialEq<TopoError> for TopoError {
    fn eq(&self, other: &TopoError) -> bool {
        match (self, other) {
            (Self::IOError(a), Self::IOError(b)) => a.kind() == b.kind(),
            (Self::RespError(a), Self::RespError(b)) => a.kind() == b.kind(),
            (Self::MalformedEntry(a, b), Self::MalformedEntry(x, y)) => a == x && b == y,
            (Self::BadRange(a, b), Self::BadRange(x, y)) => a == x && b == y,
            (Self::BadAddr(a), Self::BadAddr(b)) => a == b,
            (Self::DupNode(a), Self::DupNode(b)) => a == b,
            (Self::NoSlots(a), Self::NoSlots(b)) => a == b,
            (Self::OverlappingSlots(a, b, c), Self::OverlappingSlots(x, y, z)) => {
                a == x && b == y && c == z
            }
            (Self::BadYaml(_), Self::BadYaml(_)) => true,
            _ => false,
        }
    }
}
