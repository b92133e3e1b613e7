use crate::types;

/// Position while paging through validator sets of an appchain.
///
/// Sets are numbered `1..=latest` with `0` standing for "no set formed yet".
/// The cursor starts at the latest set and never leaves `0..=latest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatorSetCursor {
    current: types::SeqNum,
    latest: types::SeqNum,
}

impl ValidatorSetCursor {
    pub fn new(latest: types::SeqNum) -> Self { Self { current: latest, latest } }

    pub fn current(&self) -> types::SeqNum { self.current }

    pub fn latest(&self) -> types::SeqNum { self.latest }

    /// Sequence number to fetch, `None` if there is no set at the current
    /// position.
    pub fn seq_num(&self) -> Option<types::SeqNum> { (self.current > 0).then_some(self.current) }

    pub fn has_prev(&self) -> bool { self.current > 0 }

    pub fn has_next(&self) -> bool { self.current < self.latest }

    /// Moves to the previous set. Returns `false` at the lower bound.
    pub fn back(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Moves to the next set. Returns `false` at the latest set.
    pub fn forward(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Jumps to `seq_num`, clamped to the latest set.
    pub fn seek(&mut self, seq_num: types::SeqNum) { self.current = seq_num.min(self.latest); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_within_bounds() {
        let mut cursor = ValidatorSetCursor::new(2);
        assert_eq!(cursor.seq_num(), Some(2));
        assert!(!cursor.forward());
        assert!(cursor.back());
        assert!(cursor.back());
        assert_eq!(cursor.seq_num(), None);
        assert!(!cursor.back());
        assert_eq!(cursor.current(), 0);
        assert!(cursor.forward());
        assert_eq!(cursor.seq_num(), Some(1));
    }

    #[test]
    fn seek_is_clamped() {
        let mut cursor = ValidatorSetCursor::new(5);
        cursor.seek(3);
        assert_eq!(cursor.current(), 3);
        cursor.seek(9);
        assert_eq!(cursor.current(), 5);
    }

    #[test]
    fn fresh_appchain_has_nothing_to_fetch() {
        let cursor = ValidatorSetCursor::new(0);
        assert_eq!(cursor.seq_num(), None);
        assert!(!cursor.has_prev());
        assert!(!cursor.has_next());
    }
}
