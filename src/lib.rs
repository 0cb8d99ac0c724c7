// src/lib.rs

//! campcal: booking-window calendar exports for Washington State campsites

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
