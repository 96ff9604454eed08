#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::CadApp;
pub use command::{Command, CommandContext};
pub use config::AppConfig;
pub use document::ShapeStore;
pub use error::ConfigError;
pub use input::{InputEvent, InputHandler};
pub use renderer::{Canvas, RenderStyle};
pub use shape::{Point, Shape};
pub use state::EditorState;
pub use surface::{InteractionSurface, SurfaceState};
pub use tools::ToolMode;
