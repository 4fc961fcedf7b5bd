use bitflags::bitflags;

use crate::key::Key;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct KeySet: u16 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const SPACE = 1 << 4;
        const Y = 1 << 5;
        const R = 1 << 6;
        const ESCAPE = 1 << 7;
    }
}

impl From<Key> for KeySet {
    fn from(key: Key) -> Self {
        match key {
            Key::Left => KeySet::LEFT,
            Key::Right => KeySet::RIGHT,
            Key::Up => KeySet::UP,
            Key::Down => KeySet::DOWN,
            Key::Space => KeySet::SPACE,
            Key::Y => KeySet::Y,
            Key::R => KeySet::R,
            Key::Escape => KeySet::ESCAPE,
            Key::None => KeySet::empty(),
        }
    }
}

/// Polled keyboard queries used by the game update.
pub trait InputSource {
    /// True while the key is held.
    fn is_key_down(&self, key: Key) -> bool;
    /// True only on the frame the key went from up to down.
    fn is_key_going_down(&self, key: Key) -> bool;
}

/// Keyboard state accumulated by the frontend between two frames.
///
/// Auto-repeated key-down events do not produce a new edge: a key has to be
/// released before it can go down again.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    held: KeySet,
    pressed: KeySet,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_event(&mut self, key: Key, is_down: bool) {
        let flag = KeySet::from(key);
        if is_down {
            if !self.held.contains(flag) {
                self.pressed |= flag;
            }
            self.held |= flag;
        } else {
            self.held.remove(flag);
        }
    }

    /// Forget the edges of the frame that was just simulated.
    pub fn end_frame(&mut self) {
        self.pressed = KeySet::empty();
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held = KeySet::empty();
        self.pressed = KeySet::empty();
    }
}

impl InputSource for InputState {
    fn is_key_down(&self, key: Key) -> bool {
        let flag = KeySet::from(key);
        !flag.is_empty() && self.held.contains(flag)
    }

    fn is_key_going_down(&self, key: Key) -> bool {
        let flag = KeySet::from(key);
        !flag.is_empty() && self.pressed.contains(flag)
    }
}
