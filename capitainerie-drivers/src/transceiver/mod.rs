//! Bus transceiver implementations

pub mod rs485;

pub use rs485::Rs485Transceiver;
