pub mod calibration;
pub mod classify;
pub mod config;
pub mod next;
