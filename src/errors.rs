use topo::TopoError;

quick_error! {
    /// Errors occur when running a celetopo command.
    #[derive(Debug)]
    pub enum CmdError {
        IOError(e: std::io::Error) {
            from(e: std::io::Error) -> (e)
            display("io error: {}", e)
        }

        Topo(e: TopoError) {
            from(e: TopoError) -> (e)
            display("{}", e)
        }

        BadYaml(e: serde_yaml::Error) {
            from(e: serde_yaml::Error) -> (e)
            display("bad yaml: {}", e)
        }

        UnknownCommand(name: String) {
            display("unknown command: {}", name)
        }

        BadLogLevel(level: String) {
            display("bad log level: {}", level)
        }
    }
}
