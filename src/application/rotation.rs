use crate::domain::order_book::{ORDER_SNAPSHOTS, Snapshot, snapshot_at};

/// Which fixture frame is on screen, and how many rotations have happened.
///
/// `cycle` only ever grows; the view keys the annotation layer on it so the
/// callout entrance animation replays even when the index wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotRotation {
    index: usize,
    cycle: u64,
    len: usize,
}

impl SnapshotRotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, cycle: 0, len }
    }

    /// Rotation over the built-in fixtures.
    pub fn over_fixtures() -> Self {
        Self::new(ORDER_SNAPSHOTS.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step to the next frame, wrapping to zero after the last one.
    pub fn advance(&mut self) {
        self.index = if self.len == 0 { 0 } else { (self.index + 1) % self.len };
        self.cycle = self.cycle.wrapping_add(1);
    }

    pub fn current(&self) -> &'static Snapshot {
        snapshot_at(self.index)
    }
}

impl Default for SnapshotRotation {
    fn default() -> Self {
        Self::over_fixtures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rotation_stays_at_zero() {
        let mut rotation = SnapshotRotation::new(0);
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.index(), 0);
        assert_eq!(rotation.cycle(), 2);
    }

    #[test]
    fn current_follows_index() {
        let mut rotation = SnapshotRotation::over_fixtures();
        assert_eq!(rotation.current().id, "grid-alpha");
        rotation.advance();
        assert_eq!(rotation.current().id, "grid-beta");
    }
}
