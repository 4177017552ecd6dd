mod config;
mod path;
mod show;
pub mod support;
