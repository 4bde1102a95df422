// Purpose - external interfaces, wire formats

pub mod trace;

pub use trace::{Sample, Trace};
