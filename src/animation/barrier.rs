//! All-of join over tween completion signals.

use rustc_hash::FxHashSet;

/// Identifier handed out to each tween started by a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

/// Opens once every registered tween has reported completion.
///
/// A barrier with no members is open from the start, so an empty phase
/// never stalls a sequence.
#[derive(Debug, Clone, Default)]
pub struct Barrier {
    pending: FxHashSet<TweenId>,
    arrived: usize,
}

impl Barrier {
    /// Barrier waiting on every id in `members`.
    pub fn new(members: impl IntoIterator<Item = TweenId>) -> Self {
        Self {
            pending: members.into_iter().collect(),
            arrived: 0,
        }
    }

    /// Record that `id` completed. Returns `false` for ids that were not
    /// pending (unknown, or already arrived).
    pub fn arrive(&mut self, id: TweenId) -> bool {
        let was_pending = self.pending.remove(&id);
        if was_pending {
            self.arrived += 1;
        }
        was_pending
    }

    /// Whether every member has arrived.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of members still outstanding.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of members that have arrived.
    #[must_use]
    pub fn arrived(&self) -> usize {
        self.arrived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_after_all_members_arrive() {
        let mut barrier = Barrier::new([TweenId(1), TweenId(2), TweenId(3)]);
        assert!(!barrier.is_open());
        assert!(barrier.arrive(TweenId(2)));
        assert!(barrier.arrive(TweenId(1)));
        assert!(!barrier.is_open());
        assert!(barrier.arrive(TweenId(3)));
        assert!(barrier.is_open());
        assert_eq!(barrier.arrived(), 3);
    }

    #[test]
    fn duplicate_and_unknown_arrivals_are_ignored() {
        let mut barrier = Barrier::new([TweenId(7)]);
        assert!(!barrier.arrive(TweenId(8)));
        assert!(barrier.arrive(TweenId(7)));
        assert!(!barrier.arrive(TweenId(7)));
        assert_eq!(barrier.arrived(), 1);
    }

    #[test]
    fn empty_barrier_is_open() {
        assert!(Barrier::new([]).is_open());
    }
}
