use std::mem;

// values live inline in the slot vector, no per-slot allocation
#[derive(Debug)]
pub(crate) enum Slot<T> {
    Empty,
    Occupied(T),
    Tombstone(T),
}

impl<T> Slot<T> {
    // the value that governs probe termination, live or not
    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(v) | Slot::Tombstone(v) => Some(v),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    // Occupied -> Tombstone, returns whether the slot was live
    pub(crate) fn bury(&mut self) -> bool {
        match mem::replace(self, Slot::Empty) {
            Slot::Occupied(v) => {
                *self = Slot::Tombstone(v);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    pub(crate) fn into_active(self) -> Option<T> {
        match self {
            Slot::Occupied(v) => Some(v),
            Slot::Empty | Slot::Tombstone(_) => None,
        }
    }
}

pub(crate) fn alloc_slots<T>(len: usize) -> Vec<Slot<T>> {
    let mut slots = Vec::with_capacity(len);
    slots.resize_with(len, || Slot::Empty);
    slots
}
