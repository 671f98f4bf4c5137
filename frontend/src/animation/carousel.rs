use std::num::NonZeroUsize;
use std::rc::Rc;
use yew::prelude::*;

/// Active slot of a carousel with a fixed number of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    len: NonZeroUsize,
    active: usize,
}

pub enum RotationAction {
    Advance,
}

impl Rotation {
    /// `None` for an empty slide list, there is nothing to rotate.
    pub fn new(len: usize, start: usize) -> Option<Self> {
        let len = NonZeroUsize::new(len)?;
        Some(Self {
            len,
            active: start % len.get(),
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn advance(&mut self) {
        self.active = (self.active + 1) % self.len.get();
    }
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RotationAction::Advance => {
                let mut next = *self;
                next.advance();
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(rotation: Rotation, ticks: u64) -> usize {
        let len = rotation.len.get() as u64;
        ((rotation.active as u64 + ticks % len) % len) as usize
    }

    #[test]
    fn empty_list_has_no_rotation() {
        assert!(Rotation::new(0, 0).is_none());
    }

    #[test]
    fn start_is_wrapped_into_range() {
        let rotation = Rotation::new(4, 9).unwrap();
        assert_eq!(rotation.active(), 1);
    }

    #[test]
    fn advancing_matches_modular_position() {
        for len in 1..=6usize {
            for start in 0..len {
                let mut rotation = Rotation::new(len, start).unwrap();
                for t in 1..=50u64 {
                    rotation.advance();
                    assert_eq!(rotation.active(), (start + t as usize) % len);
                    assert!(rotation.active() < len);
                    assert_eq!(rotation.active(), after(Rotation::new(len, start).unwrap(), t));
                }
            }
        }
    }

    #[test]
    fn long_runs_stay_in_range() {
        let start = Rotation::new(5, 3).unwrap();
        let mut rotation = start;
        for _ in 0..10_007 {
            rotation.advance();
            assert!(rotation.active() < 5);
        }
        assert_eq!(rotation.active(), after(start, 10_007));
        assert_eq!(rotation.active(), 0);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut rotation = Rotation::new(1, 0).unwrap();
        rotation.advance();
        assert_eq!(rotation.active(), 0);
        assert_eq!(rotation, Rotation::new(1, 7).unwrap());
    }

    #[test]
    fn reducer_advances_and_wraps() {
        let rotation = Rc::new(Rotation::new(2, 1).unwrap());
        let next = rotation.reduce(RotationAction::Advance);
        assert_eq!(next.active(), 0);
        let next = next.reduce(RotationAction::Advance);
        assert_eq!(next.active(), 1);
    }
}
