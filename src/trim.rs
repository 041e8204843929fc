// Trimming of leading and trailing runs
use crate::index::Bidirectional;
use crate::util::into_ok;

use num_traits::Zero;

use std::collections::{vec_deque, VecDeque};
use std::convert::Infallible;
use std::ops::Range;

/// Collections that can hand out a view of a contiguous range
pub trait Subsequence: Bidirectional {
    /// Borrowed view of a range of the collection
    type Output<'a>
    where
        Self: 'a;

    /// View of the elements in `range`
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds or, for strings, does not lie
    /// on `char` boundaries.
    fn subsequence(&self, range: Range<usize>) -> Self::Output<'_>;
}

/// Collections that can remove a contiguous range in place
pub trait RemoveRange: Bidirectional {
    /// Remove the elements in `range`, shifting the tail forward
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds or, for strings, does not lie
    /// on `char` boundaries.
    fn remove_range(&mut self, range: Range<usize>);
}

impl<T> Subsequence for [T] {
    type Output<'a> = &'a [T] where Self: 'a;

    fn subsequence(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }
}

impl<T> Subsequence for Vec<T> {
    type Output<'a> = &'a [T] where Self: 'a;

    fn subsequence(&self, range: Range<usize>) -> &[T] {
        &self[range]
    }
}

/// Borrowed view of a contiguous range of a [VecDeque]
///
/// Positions passed to and returned from its methods are relative to the
/// start of the view.
#[derive(Debug)]
pub struct DequeSlice<'a, T> {
    deque: &'a VecDeque<T>,
    range: Range<usize>,
}

// manual impls, #[derive] would require `T: Clone`
impl<T> Clone for DequeSlice<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            range: self.range.clone(),
        }
    }
}

impl<'a, T> DequeSlice<'a, T> {
    pub(crate) fn new(deque: &'a VecDeque<T>, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= deque.len(),
            "range {range:?} out of bounds for length {}",
            deque.len()
        );
        Self { deque, range }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'a, T> {
        self.deque.range(self.range.clone())
    }
}

impl<'a, T> IntoIterator for DequeSlice<'a, T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DequeSlice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<[T]> for DequeSlice<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DequeSlice<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T> Subsequence for VecDeque<T> {
    type Output<'a> = DequeSlice<'a, T> where Self: 'a;

    fn subsequence(&self, range: Range<usize>) -> DequeSlice<'_, T> {
        DequeSlice::new(self, range)
    }
}

impl<'a, T> Subsequence for DequeSlice<'a, T> {
    type Output<'b> = DequeSlice<'a, T> where Self: 'b;

    fn subsequence(&self, range: Range<usize>) -> DequeSlice<'a, T> {
        assert!(
            range.start <= range.end && range.end <= self.len(),
            "range {range:?} out of bounds for length {}",
            self.len()
        );
        let offset = self.range.start;
        DequeSlice::new(self.deque, offset + range.start..offset + range.end)
    }
}

impl Subsequence for str {
    type Output<'a> = &'a str where Self: 'a;

    fn subsequence(&self, range: Range<usize>) -> &str {
        &self[range]
    }
}

impl Subsequence for String {
    type Output<'a> = &'a str where Self: 'a;

    fn subsequence(&self, range: Range<usize>) -> &str {
        &self[range]
    }
}

impl<T> RemoveRange for Vec<T> {
    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }
}

impl<T> RemoveRange for VecDeque<T> {
    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }
}

impl RemoveRange for String {
    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }
}

// Range left over after removing the leading and trailing runs
// satisfying `pred`, suffix scanned first. The prefix scan then stops at
// the element bounding the suffix at the latest.
fn trimmed_range_suffix_first<C, E, P>(coll: &C, mut pred: P) -> Result<Range<usize>, E>
where
    C: Bidirectional + ?Sized,
    P: FnMut(&C::Element) -> Result<bool, E>,
{
    let end = coll.try_start_of_suffix(&mut pred)?;
    if end == 0 {
        return Ok(0..0);
    }
    let start = coll.try_end_of_prefix(&mut pred)?;
    Ok(start.min(end)..end)
}

/// Trimmed views, leaving the collection untouched
///
/// # Example
///
/// ```rust
/// use seqext::Trimming;
///
/// let s = "  hello, world  ";
/// assert_eq!(s.trimming_while(|c| c.is_whitespace()), "hello, world");
/// assert_eq!(s.trimming_prefix_while(|c| c.is_whitespace()), "hello, world  ");
/// assert_eq!(s.trimming_suffix_while(|c| c.is_whitespace()), "  hello, world");
/// ```
pub trait Trimming: Subsequence {
    /// View without the longest leading run satisfying `pred`
    fn try_trimming_prefix_while<E, P>(
        &self,
        pred: P,
    ) -> Result<Self::Output<'_>, E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>,
    {
        let start = self.try_end_of_prefix(pred)?;
        Ok(self.subsequence(start..self.end_index()))
    }

    /// View without the longest trailing run satisfying `pred`
    fn try_trimming_suffix_while<E, P>(
        &self,
        pred: P,
    ) -> Result<Self::Output<'_>, E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>,
    {
        let end = self.try_start_of_suffix(pred)?;
        Ok(self.subsequence(0..end))
    }

    /// View without the longest leading and trailing runs satisfying `pred`
    ///
    /// The leading run is scanned first, then the trailing run of what
    /// remains, as with [Trimming::try_trimming_prefix_while] followed by
    /// [Trimming::try_trimming_suffix_while].
    fn try_trimming_while<E, P>(
        &self,
        mut pred: P,
    ) -> Result<Self::Output<'_>, E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>,
    {
        let start = self.try_end_of_prefix(&mut pred)?;
        let end = self.try_start_of_suffix_from(start, &mut pred)?;
        Ok(self.subsequence(start..end))
    }

    fn trimming_prefix_while<P>(&self, mut pred: P) -> Self::Output<'_>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        into_ok(self.try_trimming_prefix_while(|e| Ok::<_, Infallible>(pred(e))))
    }

    fn trimming_suffix_while<P>(&self, mut pred: P) -> Self::Output<'_>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        into_ok(self.try_trimming_suffix_while(|e| Ok::<_, Infallible>(pred(e))))
    }

    fn trimming_while<P>(&self, mut pred: P) -> Self::Output<'_>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        into_ok(self.try_trimming_while(|e| Ok::<_, Infallible>(pred(e))))
    }

    /// View without leading and trailing zeros
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqext::Trimming;
    ///
    /// let coeffs = [0., 0., 1., 0., 2., 0.];
    /// assert_eq!(coeffs.trimming_zeros(), &[1., 0., 2.]);
    /// ```
    fn trimming_zeros(&self) -> Self::Output<'_>
    where
        Self::Element: Zero,
    {
        self.trimming_while(|e| e.is_zero())
    }
}

impl<C: Subsequence + ?Sized> Trimming for C {}

/// In-place trimming
///
/// If a fallible predicate fails, the collection is left unchanged.
///
/// # Example
///
/// ```rust
/// use seqext::Trim;
///
/// let mut v = vec![0, 0, 1, 2, 0];
/// v.trim_while(|&x| x == 0);
/// assert_eq!(v, [1, 2]);
/// ```
pub trait Trim: RemoveRange {
    /// Remove the longest leading run satisfying `pred`
    fn try_trim_prefix_while<E, P>(&mut self, pred: P) -> Result<(), E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>,
    {
        let start = self.try_end_of_prefix(pred)?;
        if start > 0 {
            trace!("removing prefix 0..{start}");
            self.remove_range(0..start);
        }
        Ok(())
    }

    /// Remove the longest trailing run satisfying `pred`
    fn try_trim_suffix_while<E, P>(&mut self, pred: P) -> Result<(), E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>,
    {
        let end = self.try_start_of_suffix(pred)?;
        let len = self.end_index();
        if end < len {
            trace!("removing suffix {end}..{len}");
            self.remove_range(end..len);
        }
        Ok(())
    }

    /// Remove the longest leading and trailing runs satisfying `pred`
    ///
    /// Both boundaries are determined before anything is removed. The
    /// suffix goes first so the prefix boundary stays valid.
    fn try_trim_while<E, P>(&mut self, pred: P) -> Result<(), E>
    where
        P: FnMut(&Self::Element) -> Result<bool, E>,
    {
        let Range { start, end } = trimmed_range_suffix_first(&*self, pred)?;
        let len = self.end_index();
        if end < len {
            trace!("removing suffix {end}..{len}");
            self.remove_range(end..len);
        }
        if start > 0 {
            trace!("removing prefix 0..{start}");
            self.remove_range(0..start);
        }
        Ok(())
    }

    fn trim_prefix_while<P>(&mut self, mut pred: P)
    where
        P: FnMut(&Self::Element) -> bool,
    {
        into_ok(self.try_trim_prefix_while(|e| Ok::<_, Infallible>(pred(e))))
    }

    fn trim_suffix_while<P>(&mut self, mut pred: P)
    where
        P: FnMut(&Self::Element) -> bool,
    {
        into_ok(self.try_trim_suffix_while(|e| Ok::<_, Infallible>(pred(e))))
    }

    fn trim_while<P>(&mut self, mut pred: P)
    where
        P: FnMut(&Self::Element) -> bool,
    {
        into_ok(self.try_trim_while(|e| Ok::<_, Infallible>(pred(e))))
    }

    /// Remove leading and trailing zeros
    fn trim_zeros(&mut self)
    where
        Self::Element: Zero,
    {
        self.trim_while(|e| e.is_zero())
    }

    /// Remove trailing zeros only
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqext::Trim;
    ///
    /// let mut coeffs = vec![0, 1, 2, 0, 0];
    /// coeffs.trim_trailing_zeros();
    /// assert_eq!(coeffs, [0, 1, 2]);
    /// ```
    fn trim_trailing_zeros(&mut self)
    where
        Self::Element: Zero,
    {
        self.trim_suffix_while(|e| e.is_zero())
    }
}

impl<C: RemoveRange + ?Sized> Trim for C {}
