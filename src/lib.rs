pub mod config;

pub mod constants;

pub mod error;

pub mod application;

pub mod session;

pub mod transport;

pub mod utils;
