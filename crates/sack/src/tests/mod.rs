use std::{fmt::Debug, io::Write};

use crate::Sack;

mod scenarios;

/// What the shared test bodies need from a store.
trait TestSack: Sack<u32> + Default + Debug + FromIterator<u32> {}
impl<S> TestSack for S where S: Sack<u32> + Default + Debug + FromIterator<u32> {}

pub fn init_logger() {
    let _ = env_logger::Builder::new()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .format(|buf, record| {
            let str = record.args().to_string().replace("\n", "\n\t");
            writeln!(
                buf,
                "[{}] in {}:{}\n\t{}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                str
            )
        })
        .try_init();
}
