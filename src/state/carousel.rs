/// Cursor over a fixed number of slides. Moving past either end wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.prev().index(), 2);
        assert_eq!(carousel.next().next().next().index(), 0);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(Carousel::new(1).next().index(), 0);
        assert_eq!(Carousel::new(0).prev().index(), 0);
    }
}
