pub mod audio;
pub mod background;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;
pub mod scheduler;
pub mod wave;
