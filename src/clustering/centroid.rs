use crate::Value;

/// `Centroid` is a running mean split into two halves.
/// `last` is the position points are measured against during
/// an assignment pass, while `next` accumulates the members of
/// that pass. After the pass, `rotate` promotes the new mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    last: Value,
    next: Accumulator,
}

/// Running mean and count of the values absorbed during one pass.
/// The mean is updated in place so it stays finite for any finite input.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Accumulator {
    mean: Value,
    count: usize,
}

impl Centroid {
    pub fn reveal(&self) -> Value {
        self.last
    }
    pub fn absorb(&mut self, x: Value) {
        self.next.count += 1;
        let n = self.next.count as Value;
        self.next.mean += x / n - self.next.mean / n;
    }
    /// members absorbed since the last rotation
    pub fn count(&self) -> usize {
        self.next.count
    }
    /// promote the accumulated mean and reset the accumulator.
    /// returns whether the position moved. a centroid that absorbed
    /// nothing keeps its position and never counts as moved, so an
    /// orphaned cluster cannot hold the iteration open.
    pub fn rotate(&mut self) -> bool {
        let next = std::mem::take(&mut self.next);
        if next.count == 0 {
            return false;
        }
        let moved = next.mean != self.last;
        self.last = next.mean;
        moved
    }
}

impl From<Value> for Centroid {
    fn from(x: Value) -> Self {
        Self {
            last: x,
            next: Accumulator::default(),
        }
    }
}
