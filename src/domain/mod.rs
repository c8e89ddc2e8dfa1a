pub mod beverage;
pub mod payment;
pub mod ports;
