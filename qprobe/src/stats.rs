/// Collision counters for the insertions made since the table was last
/// allocated, cleared or rehashed.
///
/// Only insertion probes feed these numbers; lookups and removals never do.
/// A chain length of 1 means the first slot examined was the terminal one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionStats {
    collisions: usize,
    avg_chain_length: f64,
    longest_chain: usize,
}

impl CollisionStats {
    /// Number of insertion probes that examined more than one slot.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn avg_chain_length(&self) -> f64 {
        self.avg_chain_length
    }

    pub fn longest_chain(&self) -> usize {
        self.longest_chain
    }

    // `active` is the live element count before the probing insertion lands
    pub(crate) fn record(&mut self, chain_length: usize, active: usize) {
        if chain_length > 1 {
            self.collisions += 1;
            self.longest_chain = self.longest_chain.max(chain_length);
        }
        let active = active as f64;
        self.avg_chain_length =
            (self.avg_chain_length * active + chain_length as f64) / (active + 1.0);
    }
}

impl Default for CollisionStats {
    fn default() -> Self {
        CollisionStats {
            collisions: 0,
            avg_chain_length: 1.0,
            longest_chain: 1,
        }
    }
}
