use std::ops::{Bound, RangeBounds};

use ranges::GenericRange;

use crate::{Sum, Val};

/// Ascending runs of values, kept unexpanded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spans {
    inner: ranges::Ranges<Val>,
}

impl Spans {
    #[inline]
    pub fn contains(&self, val: Val) -> bool {
        self.inner.contains(&val)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        let mut total = 0;
        for span in self.inner.as_slice() {
            let (min, max) = bounds(span);
            total += max - min + 1;
        }
        total as _
    }

    /// Remove and return the greatest remaining value.
    pub fn pop_max(&mut self) -> Option<Val> {
        let max = bounds(self.inner.as_slice().last()?).1;
        self.inner.remove(GenericRange::new_with_bounds(
            Bound::Included(max),
            Bound::Included(max),
        ));
        Some(max)
    }

    pub fn iter(&self) -> impl Iterator<Item = Val> + '_ {
        self.inner
            .as_slice()
            .iter()
            .map(|span| span.into_iter())
            .flatten()
    }

    pub fn total(&self) -> Sum {
        let mut total: Sum = 0;
        for span in self.inner.as_slice() {
            let (min, max) = bounds(span);
            let count = Sum::from(max - min + 1);
            total += (Sum::from(min) + Sum::from(max)) * count / 2;
        }
        total
    }
}

fn bounds(span: &GenericRange<Val>) -> (Val, Val) {
    let min = match span.start_bound() {
        Bound::Included(val) => *val,
        Bound::Excluded(val) => val + 1,
        Bound::Unbounded => unreachable!(),
    };

    let max = match span.end_bound() {
        Bound::Included(val) => *val,
        Bound::Excluded(val) => val - 1,
        Bound::Unbounded => unreachable!(),
    };

    (min, max)
}

impl<T: Into<ranges::Ranges<Val>>> From<T> for Spans {
    fn from(range: T) -> Self {
        Self {
            inner: range.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Spans;

    #[test]
    fn test_pop_max_drains_descending() {
        let mut spans = Spans::from(1..=3);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans.pop_max(), Some(3));
        assert_eq!(spans.pop_max(), Some(2));
        assert_eq!(spans.pop_max(), Some(1));
        assert_eq!(spans.pop_max(), None);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_total_and_iter() {
        let spans = Spans::from(4..8);
        assert_eq!(spans.total(), 22);
        assert_eq!(spans.iter().collect::<Vec<_>>(), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_contains_after_pop() {
        let mut spans = Spans::from(1..=5);
        spans.pop_max();
        assert!(spans.contains(4));
        assert!(!spans.contains(5));
    }
}
