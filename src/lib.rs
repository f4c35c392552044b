// src/lib.rs

//! Holiday notice exporter library
//!
//! Parses the State Council "部分节假日安排的通知" into a date keyed
//! holiday calendar.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
