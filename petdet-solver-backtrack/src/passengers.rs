//! Carried pets with an undo trail.
//!
//! Every change to the carried set is logged. A search takes a [`TrailMark`]
//! before descending and rolls back to it when the branch fails, so each
//! mutation is paired with its inverse on every exit path.

/// A single reversible change to the carried set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    /// A pet was appended to the end of the carry order.
    Loaded,
    /// `pet` was removed from `position` in the carry order.
    Unloaded { position: usize, pet: usize },
}

/// Position in the trail to roll back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct TrailMark(usize);

/// Ordered, capacity-bounded set of carried pet indices.
#[derive(Debug, Clone, Default)]
pub(crate) struct Passengers {
    pets: Vec<usize>,
    trail: Vec<Change>,
    capacity: usize,
}

impl Passengers {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pets: Vec::with_capacity(capacity),
            trail: Vec::new(),
            capacity,
        }
    }

    /// Pets on board in pick-up order.
    pub(crate) fn pets(&self) -> &[usize] {
        &self.pets
    }

    pub(crate) fn is_full(&self) -> bool {
        self.pets.len() >= self.capacity
    }

    pub(crate) fn mark(&self) -> TrailMark {
        TrailMark(self.trail.len())
    }

    /// Take `pet` on board; `false` when the vehicle is full.
    pub(crate) fn load(&mut self, pet: usize) -> bool {
        if self.is_full() {
            return false;
        }
        self.pets.push(pet);
        self.trail.push(Change::Loaded);
        true
    }

    /// Drop the first pet in carry order that `accepts` approves.
    pub(crate) fn unload_first(&mut self, accepts: impl Fn(usize) -> bool) -> Option<usize> {
        let position = self.pets.iter().position(|&pet| accepts(pet))?;
        let pet = self.pets.remove(position);
        self.trail.push(Change::Unloaded { position, pet });
        Some(pet)
    }

    /// Undo every change made since `mark`, newest first.
    pub(crate) fn rollback(&mut self, mark: TrailMark) {
        while self.trail.len() > mark.0 {
            match self.trail.pop() {
                Some(Change::Loaded) => {
                    self.pets.pop();
                }
                Some(Change::Unloaded { position, pet }) => self.pets.insert(position, pet),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn load_respects_capacity() {
        let mut passengers = Passengers::with_capacity(2);
        assert!(passengers.load(1));
        assert!(passengers.load(2));
        assert!(passengers.is_full());
        assert!(!passengers.load(3));
        assert_eq!(passengers.pets(), &[1, 2]);
    }

    #[rstest]
    fn unload_takes_first_match_in_carry_order() {
        let mut passengers = Passengers::with_capacity(4);
        for pet in [5, 6, 7] {
            passengers.load(pet);
        }
        assert_eq!(passengers.unload_first(|pet| pet > 5), Some(6));
        assert_eq!(passengers.pets(), &[5, 7]);
        assert_eq!(passengers.unload_first(|pet| pet > 9), None);
    }

    #[rstest]
    fn rollback_restores_order_exactly() {
        let mut passengers = Passengers::with_capacity(4);
        passengers.load(1);
        passengers.load(2);
        passengers.load(3);
        let mark = passengers.mark();
        passengers.unload_first(|pet| pet == 2);
        passengers.load(4);
        passengers.unload_first(|pet| pet == 1);
        assert_eq!(passengers.pets(), &[3, 4]);
        passengers.rollback(mark);
        assert_eq!(passengers.pets(), &[1, 2, 3]);
    }

    #[rstest]
    fn nested_marks_roll_back_independently() {
        let mut passengers = Passengers::with_capacity(4);
        let outer = passengers.mark();
        passengers.load(1);
        let inner = passengers.mark();
        passengers.load(2);
        passengers.rollback(inner);
        assert_eq!(passengers.pets(), &[1]);
        passengers.rollback(outer);
        assert!(passengers.pets().is_empty());
    }
}
