pub mod decision;
pub mod error;
pub mod stopping;

pub use decision::Decision;
pub use error::MonitorError;
pub use stopping::StoppingMonitor;
