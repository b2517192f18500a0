//! Order generator adapters: time, randomness and the two export channels

pub mod clock;
pub mod download;
pub mod print;

pub use clock::{RandomSuffix, SystemClock};
pub use download::FileDownloadSink;
pub use print::PrintSpoolExporter;
