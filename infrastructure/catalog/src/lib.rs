pub mod client;
pub mod config;
mod dto;
pub mod product_search;
