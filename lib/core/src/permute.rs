//! In-place permutation of caller-owned sequences
//!
//! A computed ranking is applied to the caller's own storage using nothing
//! but index swaps. The permutation is decomposed into disjoint cycles and
//! each cycle is walked once, so a sequence of length n takes fewer than n
//! swaps and the only scratch memory is one visited flag per position.
//!
//! Two directions are provided:
//!
//! - **direct**: `rule[i]` is the destination of the element at `i`
//! - **inverse**: `rule[i]` is the source of the element that lands at `i`
//!
//! A ranking as returned by [`crate::rank`] lists source positions in rank
//! order, so it is applied with [`apply_ranking_inverse`].

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// A mutable random-access sequence that can swap two positions.
pub trait SwapSequence {
    fn len(&self) -> usize;

    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SwapSequence for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T> SwapSequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<T> SwapSequence for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}

/// Adapts a swap closure into a [`SwapSequence`].
///
/// Handy when the storage is not a single container, e.g. two parallel
/// vectors that must be reordered in lockstep.
pub struct Swapper<F> {
    len: usize,
    swap: F,
}

impl<F: FnMut(usize, usize)> Swapper<F> {
    pub fn new(len: usize, swap: F) -> Self {
        Self { len, swap }
    }
}

impl<F: FnMut(usize, usize)> SwapSequence for Swapper<F> {
    fn len(&self) -> usize {
        self.len
    }

    fn swap(&mut self, i: usize, j: usize) {
        (self.swap)(i, j);
    }
}

/// Move the element at position `i` to position `rule[i]`, for every `i`.
///
/// The sequence is left untouched if `rule` is not a permutation of
/// `0..seq.len()`.
pub fn apply_ranking_direct<S: SwapSequence + ?Sized>(seq: &mut S, rule: &[usize]) -> Result<()> {
    validate_rule(seq.len(), rule)?;
    apply_direct_unchecked(seq, rule);
    Ok(())
}

/// Fill position `i` with the element originally at `rule[i]`, for every `i`.
///
/// The sequence is left untouched if `rule` is not a permutation of
/// `0..seq.len()`.
pub fn apply_ranking_inverse<S: SwapSequence + ?Sized>(seq: &mut S, rule: &[usize]) -> Result<()> {
    validate_rule(seq.len(), rule)?;
    apply_inverse_unchecked(seq, rule);
    Ok(())
}

/// Check that `rule` is a permutation of `0..len`.
pub fn validate_rule(len: usize, rule: &[usize]) -> Result<()> {
    if rule.len() != len {
        return Err(Error::InvalidPermutation(format!(
            "rule has {} entries for a sequence of length {}",
            rule.len(),
            len
        )));
    }
    let mut seen = vec![false; len];
    for (i, &target) in rule.iter().enumerate() {
        if target >= len {
            return Err(Error::InvalidPermutation(format!(
                "rule[{i}] = {target} is out of range"
            )));
        }
        if std::mem::replace(&mut seen[target], true) {
            return Err(Error::InvalidPermutation(format!(
                "position {target} appears more than once"
            )));
        }
    }
    Ok(())
}

/// Direct application without validation. `rule` must be a permutation.
///
/// Position `start` of each cycle is used as the carrier: every swap drops
/// the carried element at its destination and picks up the next one.
pub(crate) fn apply_direct_unchecked<S: SwapSequence + ?Sized>(seq: &mut S, rule: &[usize]) {
    let mut visited = vec![false; rule.len()];
    for start in 0..rule.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut next = rule[start];
        while next != start {
            visited[next] = true;
            seq.swap(start, next);
            next = rule[next];
        }
    }
}

/// Inverse application without validation. `rule` must be a permutation.
pub(crate) fn apply_inverse_unchecked<S: SwapSequence + ?Sized>(seq: &mut S, rule: &[usize]) {
    let mut visited = vec![false; rule.len()];
    for start in 0..rule.len() {
        if visited[start] {
            continue;
        }
        let mut current = start;
        loop {
            visited[current] = true;
            let source = rule[current];
            if source == start {
                break;
            }
            seq.swap(current, source);
            current = source;
        }
    }
}
