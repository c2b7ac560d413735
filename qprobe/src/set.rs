use std::{
    borrow::Borrow,
    fmt,
    hash::{BuildHasher, Hash},
    mem,
};

use tracing::debug;

use crate::{
    next_prime_from,
    slot::{alloc_slots, Slot},
    stats::CollisionStats,
    DefaultHashBuilder, DEFAULT_TABLE_SIZE,
};

/// Open addressing set with quadratic probing and lazy deletion.
///
/// The slot count is always prime and at most half of the slots are touched
/// (live or tombstoned) once an insertion returns, which guarantees that a
/// probe finds either its key or an empty slot.
pub struct HashSet<T, S = DefaultHashBuilder> {
    hash_builder: S,
    slots: Vec<Slot<T>>,
    // slots written since the last allocation, tombstones included
    occupied: usize,
    active: usize,
    stats: CollisionStats,
}

enum Probe<'a> {
    Lookup,
    // `active` is the live count before the insertion lands
    Insert {
        stats: &'a mut CollisionStats,
        active: usize,
    },
}

impl<T> HashSet<T> {
    pub fn new() -> Self {
        HashSet::with_capacity(DEFAULT_TABLE_SIZE)
    }
    pub fn with_capacity(capacity: usize) -> Self {
        HashSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> HashSet<T, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        HashSet::with_capacity_and_hasher(DEFAULT_TABLE_SIZE, hash_builder)
    }
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            hash_builder,
            slots: alloc_slots(next_prime_from(capacity)),
            occupied: 0,
            active: 0,
            stats: CollisionStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.active
    }
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }
    /// Number of slots in the backing store. Always prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
    /// Slots written since the last allocation, live or tombstoned.
    pub fn occupied(&self) -> usize {
        self.occupied
    }
    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.slots.len() as f64
    }

    pub fn stats(&self) -> CollisionStats {
        self.stats
    }
    pub fn collisions(&self) -> usize {
        self.stats.collisions()
    }
    pub fn avg_chain_length(&self) -> f64 {
        self.stats.avg_chain_length()
    }
    pub fn longest_chain(&self) -> usize {
        self.stats.longest_chain()
    }

    /// Empties every slot in place, keeping the current capacity.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| Slot::Empty);
        self.occupied = 0;
        self.active = 0;
        self.stats = CollisionStats::default();
    }

    // live values in slot order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(v) => Some(v),
            Slot::Empty | Slot::Tombstone(_) => None,
        })
    }
}

impl<T: Hash + Eq, S: BuildHasher> HashSet<T, S> {
    /// Returns `false` if `value` was already live in the set.
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.hash_builder.hash_one(&value);
        let index = find_pos(
            &self.slots,
            &value,
            hash,
            Probe::Insert {
                stats: &mut self.stats,
                active: self.active,
            },
        );
        let slot = &mut self.slots[index];
        if slot.is_active() {
            return false;
        }
        // a tombstone holding an equal value is reused without touching a new slot
        if slot.is_empty() {
            self.occupied += 1;
        }
        *slot = Slot::Occupied(value);
        self.active += 1;
        if self.occupied > self.slots.len() / 2 {
            self.rehash();
        }
        true
    }

    /// Returns `true` if a live entry was turned into a tombstone.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hash_builder.hash_one(value);
        let index = find_pos(&self.slots, value, hash, Probe::Lookup);
        if self.slots[index].bury() {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hash_builder.hash_one(value);
        self.slots[find_pos(&self.slots, value, hash, Probe::Lookup)].is_active()
    }

    fn rehash(&mut self) {
        let capacity = next_prime_from(
            self.slots
                .len()
                .checked_mul(2)
                .expect("multiplication by 2 overflows a usize"),
        );
        debug!(
            old_capacity = self.slots.len(),
            new_capacity = capacity,
            live = self.active,
            tombstones = self.occupied - self.active,
            "rehashing"
        );
        let old = mem::replace(&mut self.slots, alloc_slots(capacity));
        self.occupied = 0;
        self.active = 0;
        self.stats = CollisionStats::default();
        for value in old.into_iter().filter_map(Slot::into_active) {
            self.insert(value);
        }
    }
}

// Walks start, start + 1, start + 4, start + 9, ... until it reaches an empty
// slot or one whose value (live or tombstoned) equals `key`.
fn find_pos<T, Q>(slots: &[Slot<T>], key: &Q, hash: u64, probe: Probe<'_>) -> usize
where
    T: Borrow<Q>,
    Q: ?Sized + Eq,
{
    let len = slots.len();
    let mut index = (hash % len as u64) as usize;
    let mut offset = 1;
    let mut chain_length = 1;
    while let Some(v) = slots[index].value() {
        if v.borrow() == key {
            break;
        }
        chain_length += 1;
        index = (index + offset) % len;
        offset += 2;
    }
    if let Probe::Insert { stats, active } = probe {
        stats.record(chain_length, active);
    }
    index
}

impl<T> Default for HashSet<T> {
    fn default() -> Self {
        HashSet::new()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for HashSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for HashSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = HashSet::with_capacity(iter.size_hint().0.saturating_mul(2));
        set.extend(iter);
        set
    }
}
