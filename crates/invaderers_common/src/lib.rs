pub mod app;
pub mod color;
pub mod input;
pub mod key;

pub use app::App;
pub use color::Color;
pub use input::{InputSource, InputState};
pub use key::Key;
