use anyhow::Result;

use crate::input::InputState;

/// A frame-driven application that a frontend can host.
///
/// The frontend owns the window and the event pump. Once per frame it hands
/// the app the keyboard state collected since the previous frame and an
/// RGB24 buffer of `width() * height()` pixels to draw into.
pub trait App {
    fn init(&mut self) -> Result<()>;
    fn update(&mut self, input: &InputState, screen: &mut [u8]);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
