use crate::sprite::{Sprite, TextureId, PARK_OFFSET};

/// A fixed-capacity arena of sprites.
///
/// Slots are never added or removed after construction. A disabled slot is
/// free and the next spawn reuses the first free slot in pool order.
#[derive(Clone, Debug)]
pub struct Pool {
    slots: Box<[Sprite]>,
}

impl Pool {
    /// `capacity` disabled sprites of size `w` x `h`, parked off-screen.
    pub fn parked(capacity: usize, texture: TextureId, w: f32, h: f32) -> Self {
        let mut template = Sprite::new(texture, PARK_OFFSET, 0.0, w, h);
        template.set_enabled(false);
        Self {
            slots: vec![template; capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&Sprite> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Sprite> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sprite> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Sprite> {
        self.slots.iter_mut()
    }

    pub fn enabled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_enabled()).count()
    }

    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.is_enabled())
    }

    /// Enable the first free slot at `anchor` + (`dx`, `dy`). Returns the slot
    /// used, or `None` when every slot is in play.
    pub fn spawn_relative(&mut self, anchor: &Sprite, dx: f32, dy: f32) -> Option<usize> {
        let index = self.first_free()?;
        let slot = &mut self.slots[index];
        slot.set_relative(anchor, dx, dy);
        slot.set_enabled(true);
        Some(index)
    }

    pub fn park_all(&mut self) {
        for slot in self.slots.iter_mut().filter(|s| s.is_enabled()) {
            slot.park();
        }
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Sprite;
    type IntoIter = std::slice::Iter<'a, Sprite>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
