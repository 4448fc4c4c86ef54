/// Index into a fixed-length ring of slides. Stepping wraps with modulo
/// arithmetic, so the index stays in bounds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
  index: usize,
  len: usize,
}

impl Carousel {
  pub fn new(len: usize) -> Self {
    debug_assert!(len > 0, "carousel needs at least one slide");
    Carousel { index: 0, len }
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn next(&mut self) {
    self.index = (self.index + 1) % self.len;
  }

  pub fn prev(&mut self) {
    self.index = (self.index + self.len - 1) % self.len;
  }

  /// Jump straight to a dot; out-of-range selections are ignored.
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
  fn test_next_wraps_modulo_len() {
    let mut ring = Carousel::new(8);
    for _ in 0..11 {
      ring.next();
    }
    assert_eq!(ring.index(), 11 % 8);
    for _ in 0..5 {
      ring.next();
    }
    assert_eq!(ring.index(), 16 % 8);
  }

  #[test]
  fn test_prev_from_zero_wraps_to_last() {
    let mut ring = Carousel::new(8);
    ring.prev();
    assert_eq!(ring.index(), 7);
    ring.prev();
    assert_eq!(ring.index(), 6);
  }

  #[test]
  fn test_select_ignores_out_of_range() {
    let mut ring = Carousel::new(8);
    ring.select(5);
    assert_eq!(ring.index(), 5);
    ring.select(8);
    assert_eq!(ring.index(), 5);
    ring.select(0);
    assert_eq!(ring.index(), 0);
  }

  #[test]
  fn test_single_slide_ring_stays_put() {
    let mut ring = Carousel::new(1);
    ring.next();
    ring.prev();
    assert_eq!(ring.index(), 0);
  }
}
