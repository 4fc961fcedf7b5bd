/// Logical keys understood by the game. Frontends map their own keycodes
/// onto this set and report anything else as `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Y,
    R,
    Escape,
    None,
}
