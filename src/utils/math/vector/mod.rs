pub mod math;

use std::fmt::{self, Debug};
use std::ops::Index;

use num::Num;

/// ZeroSpVec is a sparse vector that treats zero elements as absent.
/// It holds `inds` and `vals` side by side:
/// `inds` keeps the logical index of every stored element,
/// `vals` keeps the element values.
///
/// Stored elements are guaranteed to be sorted by ascending index
/// and never hold an explicit zero.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
    zero: N,
}

impl<N> ZeroSpVec<N>
where
    N: Num,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
            zero: N::zero(),
        }
    }

    /// `cap` is the expected number of non-zero elements, not the logical length.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
            zero: N::zero(),
        }
    }

    /// Build a vector of logical length `len` from `(index, value)` pairs.
    ///
    /// Pairs may come in any order. Zero values are dropped, out of range
    /// indices are ignored and a repeated index keeps the last value.
    pub fn from_pairs(len: usize, mut pairs: Vec<(usize, N)>) -> Self {
        pairs.retain(|(idx, val)| *idx < len && !val.is_zero());
        // stable sort: the last duplicate stays last
        pairs.sort_by_key(|(idx, _)| *idx);
        let mut vec = ZeroSpVec::with_capacity(pairs.len());
        vec.len = len;
        for (idx, val) in pairs {
            if vec.inds.last() == Some(&idx) {
                if let Some(last) = vec.vals.last_mut() {
                    *last = val;
                }
                continue;
            }
            vec.inds.push(idx);
            vec.vals.push(val);
        }
        vec
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// logical length (number of dimensions)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// number of stored (non-zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_zero_vec(&self) -> bool {
        self.inds.is_empty()
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }

    /// Append one dense element at the end.
    /// Zero is not stored but still extends the logical length.
    #[inline]
    pub fn push(&mut self, elem: N) {
        if !elem.is_zero() {
            self.inds.push(self.len);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals.get(pos),
            Err(_) => Some(&self.zero),
        }
    }

    /// Dense iterator over every logical element, zeros included.
    #[inline]
    pub fn iter(&self) -> ZeroSpVecIter<'_, N> {
        ZeroSpVecIter { vec: self, pos: 0 }
    }

    /// Iterator over stored `(index, value)` pairs in ascending index order.
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.inds
    }

    #[inline]
    pub fn values(&self) -> &[N] {
        &self.vals
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num,
{
    #[inline]
    fn default() -> Self {
        ZeroSpVec::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num,
{
    fn from(vec: Vec<N>) -> Self {
        let mut sp = ZeroSpVec::with_capacity(vec.len());
        for elem in vec {
            sp.push(elem);
        }
        sp
    }
}

impl<N> Index<usize> for ZeroSpVec<N>
where
    N: Num,
{
    type Output = N;

    /// Panics when `index >= len`, like slice indexing.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(val) => val,
            None => panic!("index {index} out of bounds for ZeroSpVec of len {}", self.len),
        }
    }
}

impl<N: Num + Debug> Debug for ZeroSpVec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .field("entries", &self.raw_iter().collect::<Vec<_>>())
                .finish()
        } else {
            f.debug_list().entries(self.iter()).finish()
        }
    }
}

pub struct ZeroSpVecIter<'a, N>
where
    N: Num,
{
    vec: &'a ZeroSpVec<N>,
    pos: usize,
}

impl<'a, N> Iterator for ZeroSpVecIter<'a, N>
where
    N: Num,
{
    type Item = &'a N;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.vec.get(self.pos).map(|val| {
            self.pos += 1;
            val
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_zero_but_keeps_len() {
        let mut v: ZeroSpVec<f64> = ZeroSpVec::new();
        v.push(0.0);
        v.push(2.5);
        v.push(0.0);
        assert_eq!(v.len(), 3);
        assert_eq!(v.nnz(), 1);
        assert_eq!(v[1], 2.5);
        assert_eq!(v.get(0), Some(&0.0));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn from_pairs_sorts_and_filters() {
        let v = ZeroSpVec::from_pairs(5, vec![(3, 1.0), (0, 2.0), (9, 4.0), (1, 0.0), (3, 7.0)]);
        assert_eq!(v.len(), 5);
        assert_eq!(v.indices(), &[0, 3]);
        assert_eq!(v.values(), &[2.0, 7.0]);
    }

    #[test]
    fn dense_iter_matches_from_vec() {
        let dense = vec![0u32, 4, 0, 0, 9];
        let v = ZeroSpVec::from(dense.clone());
        let back: Vec<u32> = v.iter().copied().collect();
        assert_eq!(back, dense);
        assert_eq!(v.raw_iter().map(|(i, _)| i).collect::<Vec<_>>(), vec![1, 4]);
    }
}
