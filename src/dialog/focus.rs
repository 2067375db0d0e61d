//! Focus ring over a dialog's input fields and buttons.

use std::fmt;

/// Positional handle of a focusable dialog element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Field(usize),
    Button(usize),
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusTarget::Field(idx) => write!(f, "field #{idx}"),
            FocusTarget::Button(idx) => write!(f, "button #{idx}"),
        }
    }
}

/// Elements in visual order (fields, then buttons). Traversal wraps at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    targets: Vec<FocusTarget>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ring for a dialog with `fields` input fields followed by `buttons` buttons.
    pub fn for_dialog(fields: usize, buttons: usize) -> Self {
        let targets = (0..fields)
            .map(FocusTarget::Field)
            .chain((0..buttons).map(FocusTarget::Button))
            .collect();
        Self { targets }
    }

    pub fn push(&mut self, target: FocusTarget) {
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn contains(&self, target: FocusTarget) -> bool {
        self.targets.contains(&target)
    }

    pub fn first(&self) -> Option<FocusTarget> {
        self.targets.first().copied()
    }

    /// Element after `current`. An element not in the ring resolves to the ring start.
    pub fn next_of(&self, current: FocusTarget) -> Option<FocusTarget> {
        let (_, next) = self.neighbours(current)?;
        self.targets.get(next).copied()
    }

    /// Element before `current`. An element not in the ring resolves to the ring start.
    pub fn prev_of(&self, current: FocusTarget) -> Option<FocusTarget> {
        let (prev, _) = self.neighbours(current)?;
        self.targets.get(prev).copied()
    }

    fn neighbours(&self, current: FocusTarget) -> Option<(usize, usize)> {
        let len = self.targets.len();
        if len == 0 {
            return None;
        }
        let Some(idx) = self.targets.iter().position(|target| *target == current) else {
            return Some((0, 0));
        };
        Some(((idx + len - 1) % len, (idx + 1) % len))
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusRing, FocusTarget};

    fn ring() -> FocusRing {
        FocusRing::for_dialog(2, 2)
    }

    #[test]
    fn fields_come_before_buttons() {
        let ring = ring();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.first(), Some(FocusTarget::Field(0)));
        assert_eq!(ring.next_of(FocusTarget::Field(1)), Some(FocusTarget::Button(0)));
    }

    #[test]
    fn traversal_wraps_both_ways() {
        let ring = ring();
        assert_eq!(ring.prev_of(FocusTarget::Field(0)), Some(FocusTarget::Button(1)));
        assert_eq!(ring.next_of(FocusTarget::Button(1)), Some(FocusTarget::Field(0)));
        assert_eq!(ring.prev_of(FocusTarget::Button(0)), Some(FocusTarget::Field(1)));
    }

    #[test]
    fn single_element_is_its_own_neighbour() {
        let ring = FocusRing::for_dialog(0, 1);
        assert_eq!(ring.next_of(FocusTarget::Button(0)), Some(FocusTarget::Button(0)));
        assert_eq!(ring.prev_of(FocusTarget::Button(0)), Some(FocusTarget::Button(0)));
    }

    #[test]
    fn unknown_element_resolves_to_ring_start() {
        let ring = ring();
        assert_eq!(ring.next_of(FocusTarget::Button(7)), Some(FocusTarget::Field(0)));
        assert_eq!(ring.prev_of(FocusTarget::Field(9)), Some(FocusTarget::Field(0)));
    }

    #[test]
    fn empty_ring_has_no_neighbours() {
        let ring = FocusRing::new();
        assert!(ring.is_empty());
        assert_eq!(ring.first(), None);
        assert_eq!(ring.next_of(FocusTarget::Field(0)), None);
        assert_eq!(ring.prev_of(FocusTarget::Field(0)), None);
    }

    #[test]
    fn push_appends_in_visual_order() {
        let mut ring = FocusRing::new();
        ring.push(FocusTarget::Field(0));
        ring.push(FocusTarget::Button(0));
        assert!(ring.contains(FocusTarget::Button(0)));
        assert!(!ring.contains(FocusTarget::Button(1)));
        assert_eq!(ring.next_of(FocusTarget::Field(0)), Some(FocusTarget::Button(0)));
    }
}
