pub mod api;
pub mod checker;
pub mod config;
pub mod estimator;
pub mod ranking;
pub mod search;
