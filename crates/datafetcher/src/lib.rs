pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod professors;
pub mod requisites;
pub mod sample;
pub mod sink;
pub mod util;
