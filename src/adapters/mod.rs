// Adapters layer: concrete implementations of the domain ports and page parsing.

pub mod html_table;
pub mod http;
pub mod storage;
