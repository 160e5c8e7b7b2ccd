use std::{io, result};

use slog::{Drain, OwnedKVList, Record, KV};
use slog_term::{Decorator, RecordDecorator, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f %:z";

/// TopoFormat formats a record as:
/// `[<time>] [<LEVEL>] [<file>:<line>] <msg>, <key>: <value>, ...`
pub struct TopoFormat<D>
where
    D: Decorator,
{
    decorator: D,
}

impl<D> Drain for TopoFormat<D>
where
    D: Decorator,
{
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record, values: &OwnedKVList) -> result::Result<Self::Ok, Self::Err> {
        self.decorator.with_record(record, values, |rd| {
            write_header(rd, record)?;

            rd.start_whitespace()?;
            write!(rd, " ")?;
            rd.start_msg()?;
            write!(rd, "{}", record.msg())?;

            // kvs follow msg after a comma, in the order they are given
            let mut serializer = Serializer::new(rd, true, true);
            record.kv().serialize(record, &mut serializer)?;
            values.serialize(record, &mut serializer)?;
            serializer.finish()?;

            rd.start_whitespace()?;
            writeln!(rd)?;
            rd.flush()
        })
    }
}

impl<D> TopoFormat<D>
where
    D: Decorator,
{
    pub fn new(d: D) -> TopoFormat<D> {
        TopoFormat { decorator: d }
    }
}

fn write_header(rd: &mut dyn RecordDecorator, record: &Record) -> io::Result<()> {
    rd.start_timestamp()?;
    write!(rd, "[{}]", chrono::Local::now().format(TIMESTAMP_FORMAT))?;

    rd.start_whitespace()?;
    write!(rd, " ")?;

    rd.start_level()?;
    write!(rd, "[{}]", record.level().as_short_str())?;

    rd.start_whitespace()?;
    write!(rd, " ")?;

    // there is no `start_location()`
    rd.start_msg()?;
    write!(rd, "[{}:{}]", record.file(), record.line())
}
