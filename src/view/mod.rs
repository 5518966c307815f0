pub mod command;
pub mod controller;
pub mod render;
pub mod shell;

pub use command::Command;
pub use controller::{PropertyEdit, PropertyField, RoomEdit, ViewController};
pub use render::Page;
