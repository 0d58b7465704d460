pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod listing;
pub mod map;
pub mod pages;
pub mod server;
