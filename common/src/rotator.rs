// how long each testimonial stays on screen
pub const ROTATION_INTERVAL_MS: u32 = 6000;

// cycles through len items; an empty rotator stays at 0
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rotator {
    len: usize,
    index: usize,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Rotator { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn back(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    // out of range selections are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut rotator = Rotator::new(3);

        assert_eq!(rotator.advance(), 1);
        assert_eq!(rotator.advance(), 2);
        assert_eq!(rotator.advance(), 0);
        assert_eq!(rotator.back(), 2);
    }

    #[test]
    fn empty_and_single() {
        let mut empty = Rotator::new(0);
        assert_eq!(empty.advance(), 0);
        assert_eq!(empty.back(), 0);

        let mut one = Rotator::new(1);
        assert_eq!(one.advance(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut rotator = Rotator::new(2);
        rotator.select(1);
        rotator.select(5);
        assert_eq!(rotator.index(), 1);
    }
}
