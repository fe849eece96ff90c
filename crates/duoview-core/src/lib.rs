pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod surface;
pub mod viewport;
