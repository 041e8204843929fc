// Boundary search at both ends of a collection
use crate::trim::DequeSlice;
use crate::util::into_ok;

use std::collections::VecDeque;
use std::convert::Infallible;
use std::ops::Range;

/// Collections whose elements can be scanned from either end
///
/// Positions are `usize` offsets in `0..=end_index()`. For slices,
/// vectors and deques they count elements, for strings they are byte
/// offsets that always lie on `char` boundaries.
pub trait Bidirectional {
    /// Type handed to predicates
    type Element;

    /// Position one past the last element
    fn end_index(&self) -> usize;

    /// Position one past the longest leading run satisfying `pred`.
    ///
    /// Returns `0` if the first element fails and `end_index()` if
    /// every element passes. The first error returned by `pred` aborts
    /// the scan.
    fn try_end_of_prefix<E, P>(&self, pred: P) -> Result<usize, E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>;

    /// Position of the first element of the longest trailing run
    /// satisfying `pred`.
    ///
    /// Returns `end_index()` if the last element fails and `0` if every
    /// element passes.
    fn try_start_of_suffix<E, P>(&self, pred: P) -> Result<usize, E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>,
    {
        self.try_start_of_suffix_from(0, pred)
    }

    /// Like [Bidirectional::try_start_of_suffix], but only elements at
    /// or after position `from` are scanned.
    ///
    /// Returns `from` if every scanned element passes.
    ///
    /// # Panics
    ///
    /// Panics if `from > end_index()` or, for strings, `from` is not on a
    /// `char` boundary.
    fn try_start_of_suffix_from<E, P>(
        &self,
        from: usize,
        pred: P,
    ) -> Result<usize, E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>;

    /// Position one past the longest leading run satisfying `pred`
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqext::Bidirectional;
    ///
    /// let v = [0, 0, 3, 0];
    /// assert_eq!(v.end_of_prefix(|&x| x == 0), 2);
    /// ```
    fn end_of_prefix<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&Self::Element) -> bool,
    {
        into_ok(self.try_end_of_prefix(|e| Ok::<_, Infallible>(pred(e))))
    }

    /// Position of the first element of the longest trailing run
    /// satisfying `pred`
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqext::Bidirectional;
    ///
    /// assert_eq!("ab  ".start_of_suffix(|c| c.is_whitespace()), 2);
    /// ```
    fn start_of_suffix<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&Self::Element) -> bool,
    {
        into_ok(self.try_start_of_suffix(|e| Ok::<_, Infallible>(pred(e))))
    }
}

// Start of the first span whose element fails `pred`, or `end`
fn prefix_boundary<X, E>(
    spans: impl Iterator<Item = (Range<usize>, X)>,
    end: usize,
    mut pred: impl FnMut(X) -> Result<bool, E>,
) -> Result<usize, E> {
    for (span, x) in spans {
        if !pred(x)? {
            return Ok(span.start);
        }
    }
    Ok(end)
}

// End of the last span whose element fails `pred`, or `start`
fn suffix_boundary<X, E>(
    spans: impl DoubleEndedIterator<Item = (Range<usize>, X)>,
    start: usize,
    mut pred: impl FnMut(X) -> Result<bool, E>,
) -> Result<usize, E> {
    for (span, x) in spans.rev() {
        if !pred(x)? {
            return Ok(span.end);
        }
    }
    Ok(start)
}

impl<T> Bidirectional for [T] {
    type Element = T;

    fn end_index(&self) -> usize {
        self.len()
    }

    fn try_end_of_prefix<E, P>(&self, pred: P) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        let spans = self.iter().enumerate().map(|(i, x)| (i..i + 1, x));
        prefix_boundary(spans, self.len(), pred)
    }

    fn try_start_of_suffix_from<E, P>(
        &self,
        from: usize,
        pred: P,
    ) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        let spans = self[from..]
            .iter()
            .enumerate()
            .map(|(i, x)| (from + i..from + i + 1, x));
        suffix_boundary(spans, from, pred)
    }
}

impl<T> Bidirectional for Vec<T> {
    type Element = T;

    fn end_index(&self) -> usize {
        self.len()
    }

    fn try_end_of_prefix<E, P>(&self, pred: P) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        self.as_slice().try_end_of_prefix(pred)
    }

    fn try_start_of_suffix_from<E, P>(
        &self,
        from: usize,
        pred: P,
    ) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        self.as_slice().try_start_of_suffix_from(from, pred)
    }
}

impl<T> Bidirectional for VecDeque<T> {
    type Element = T;

    fn end_index(&self) -> usize {
        self.len()
    }

    fn try_end_of_prefix<E, P>(&self, pred: P) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        DequeSlice::new(self, 0..self.len()).try_end_of_prefix(pred)
    }

    fn try_start_of_suffix_from<E, P>(
        &self,
        from: usize,
        pred: P,
    ) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        DequeSlice::new(self, 0..self.len()).try_start_of_suffix_from(from, pred)
    }
}

// Positions are relative to the start of the view
impl<T> Bidirectional for DequeSlice<'_, T> {
    type Element = T;

    fn end_index(&self) -> usize {
        self.len()
    }

    fn try_end_of_prefix<E, P>(&self, pred: P) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        let spans = self.iter().enumerate().map(|(i, x)| (i..i + 1, x));
        prefix_boundary(spans, self.len(), pred)
    }

    fn try_start_of_suffix_from<E, P>(
        &self,
        from: usize,
        pred: P,
    ) -> Result<usize, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        assert!(from <= self.len(), "position {from} out of range");
        let spans = self
            .iter()
            .enumerate()
            .skip(from)
            .map(|(i, x)| (i..i + 1, x));
        suffix_boundary(spans, from, pred)
    }
}

impl Bidirectional for str {
    type Element = char;

    fn end_index(&self) -> usize {
        self.len()
    }

    fn try_end_of_prefix<E, P>(&self, mut pred: P) -> Result<usize, E>
    where
        P: FnMut(&char) -> Result<bool, E>,
    {
        let spans = self
            .char_indices()
            .map(|(i, c)| (i..i + c.len_utf8(), c));
        prefix_boundary(spans, self.len(), |c| pred(&c))
    }

    fn try_start_of_suffix_from<E, P>(
        &self,
        from: usize,
        mut pred: P,
    ) -> Result<usize, E>
    where
        P: FnMut(&char) -> Result<bool, E>,
    {
        let spans = self[from..]
            .char_indices()
            .map(|(i, c)| (from + i..from + i + c.len_utf8(), c));
        suffix_boundary(spans, from, |c| pred(&c))
    }
}

impl Bidirectional for String {
    type Element = char;

    fn end_index(&self) -> usize {
        self.len()
    }

    fn try_end_of_prefix<E, P>(&self, pred: P) -> Result<usize, E>
    where
        P: FnMut(&char) -> Result<bool, E>,
    {
        self.as_str().try_end_of_prefix(pred)
    }

    fn try_start_of_suffix_from<E, P>(
        &self,
        from: usize,
        pred: P,
    ) -> Result<usize, E>
    where
        P: FnMut(&char) -> Result<bool, E>,
    {
        self.as_str().try_start_of_suffix_from(from, pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tst_slice_boundaries() {
        let v = [1, 1, 2, 1, 1, 1];
        assert_eq!(v.end_of_prefix(|&x| x == 1), 2);
        assert_eq!(v.start_of_suffix(|&x| x == 1), 3);
        assert_eq!(v.end_of_prefix(|&x| x == 2), 0);
        assert_eq!(v.start_of_suffix(|&x| x == 2), v.len());
        assert_eq!(v.end_of_prefix(|_| true), v.len());
        assert_eq!(v.start_of_suffix(|_| true), 0);

        let empty: [i32; 0] = [];
        assert_eq!(empty.end_of_prefix(|_| true), 0);
        assert_eq!(empty.start_of_suffix(|_| false), 0);
    }

    #[test]
    fn tst_str_boundaries() {
        // multi-byte chars at both ends
        let s = "ääxyöö";
        assert_eq!(s.end_of_prefix(|&c| c == 'ä'), 4);
        assert_eq!(s.start_of_suffix(|&c| c == 'ö'), 6);
        assert_eq!(s.end_of_prefix(|c| c.is_alphabetic()), s.len());
        assert_eq!(String::from(s).start_of_suffix(|&c| c != 'x'), 5);
    }

    #[test]
    fn tst_deque_boundaries() {
        let mut d: VecDeque<_> = (0..5).collect();
        d.push_front(-1);
        assert_eq!(d.end_of_prefix(|&x| x < 2), 3);
        assert_eq!(d.start_of_suffix(|&x| x > 2), 4);
    }

    #[test]
    fn tst_suffix_from() {
        let v = [1, 0, 1, 1];
        let res: Result<usize, ()> = v.try_start_of_suffix_from(1, |&x| Ok(x == 1));
        assert_eq!(res, Ok(2));
        let res: Result<usize, ()> = v.try_start_of_suffix_from(2, |&x| Ok(x == 1));
        assert_eq!(res, Ok(2));
        let res: Result<usize, ()> = v.try_start_of_suffix_from(4, |_| Err(()));
        assert_eq!(res, Ok(4));

        let s = "aäaa";
        let res: Result<usize, ()> = s.try_start_of_suffix_from(1, |&c| Ok(c == 'a'));
        assert_eq!(res, Ok(3));
        let res: Result<usize, ()> = s.try_start_of_suffix_from(3, |&c| Ok(c == 'a'));
        assert_eq!(res, Ok(3));
    }

    #[test]
    fn tst_boundary_error() {
        let v = vec![0, 0, 1, 0];
        let res: Result<usize, &str> = v.try_end_of_prefix(|&x| {
            if x == 1 {
                Err("one")
            } else {
                Ok(x == 0)
            }
        });
        assert_eq!(res, Err("one"));

        let mut calls = 0;
        let res: Result<usize, ()> = v.try_start_of_suffix(|&x| {
            calls += 1;
            Ok(x == 0)
        });
        assert_eq!(res, Ok(3));
        assert_eq!(calls, 2);
    }
}
