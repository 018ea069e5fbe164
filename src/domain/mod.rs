pub mod fee_schedule;
pub mod payment;
pub mod ports;
pub mod price;
