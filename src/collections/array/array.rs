use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use super::InvalidChunkSize;

/// Calls `f` once for every element of `seq`, front to back.
///
/// # Examples
/// ```
/// # use seqkit::collections::array::for_each;
/// let mut seen = Vec::new();
/// for_each(&[1, 2, 3], |e| seen.push(*e));
/// assert_eq!(seen, [1, 2, 3]);
/// ```
pub fn for_each<'a, T, F: FnMut(&'a T)>(seq: &'a [T], mut f: F) {
    for item in seq {
        f(item);
    }
}

/// Returns the index of the first element equal to `target`, or [`None`] if there isn't one.
///
/// # Time Complexity
/// `O(n)`, stopping at the first match.
///
/// # Examples
/// ```
/// # use seqkit::collections::array::find;
/// assert_eq!(find(&["a", "b", "c"], &"b"), Some(1));
/// assert_eq!(find(&[1, 2, 3], &7), None);
/// ```
pub fn find<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    find_by(seq, |item| item == target)
}

/// Returns the index of the first element for which `pred` holds.
pub fn find_by<T, P: FnMut(&T) -> bool>(seq: &[T], mut pred: P) -> Option<usize> {
    for (index, item) in seq.iter().enumerate() {
        if pred(item) {
            return Some(index);
        }
    }
    None
}

/// Returns a new sequence of the same length where each element is `f` applied to the element at
/// the same position in `seq`.
///
/// # Examples
/// ```
/// # use seqkit::collections::array::map;
/// assert_eq!(map(&[1, 2, 3], |e| e * 2), [2, 4, 6]);
/// assert_eq!(map(&[1, 2], |e| e.to_string()), ["1", "2"]);
/// ```
pub fn map<T, U, F: FnMut(&T) -> U>(seq: &[T], mut f: F) -> Vec<U> {
    let mut res = Vec::with_capacity(seq.len());
    for_each(seq, |item| res.push(f(item)));
    res
}

/// Returns the elements of `seq` for which `pred` holds, in their original order.
///
/// # Examples
/// ```
/// # use seqkit::collections::array::filter;
/// assert_eq!(filter(&[-1, 2, -3, 4], |e| *e > 0), [2, 4]);
/// ```
pub fn filter<T: Clone, P: FnMut(&T) -> bool>(seq: &[T], mut pred: P) -> Vec<T> {
    let mut res = Vec::new();
    for_each(seq, |item| {
        if pred(item) {
            res.push(item.clone());
        }
    });
    res
}

/// Folds `seq` from left to right, starting from `initial`.
///
/// # Examples
/// ```
/// # use seqkit::collections::array::reduce;
/// assert_eq!(reduce(&[1, 2, 3, 4, 5], |acc, e| acc + e, 0), 15);
/// assert_eq!(
///     reduce(&["go", "lang"], |acc, e| format!("{acc}-{e}"), String::from("hey")),
///     "hey-go-lang"
/// );
/// ```
pub fn reduce<T, A, F: FnMut(A, &T) -> A>(seq: &[T], mut f: F, initial: A) -> A {
    let mut acc = initial;
    for item in seq {
        acc = f(acc, item);
    }
    acc
}

/// Returns a copy of `seq` with its elements in reverse order.
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// Returns the first occurrence of each distinct element of `seq`, in order of first appearance.
///
/// # Time Complexity
/// Expected `O(n)`, membership is tracked with a hash set of references into `seq` rather than by
/// rescanning the output.
///
/// # Examples
/// ```
/// # use seqkit::collections::array::unique;
/// assert_eq!(unique(&[1, 2, 2, 2, 3, 4, 4, 5, 5]), [1, 2, 3, 4, 5]);
/// ```
pub fn unique<T: Hash + Eq + Clone>(seq: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(seq.len());
    let mut res = Vec::new();
    for_each(seq, |item| {
        if seen.insert(item) {
            res.push(item.clone());
        }
    });
    res
}

/// Splits `seq` into groups of `size` elements. The final group holds whatever remains and may be
/// shorter. An empty `seq` produces no groups.
///
/// # Errors
/// Returns [`InvalidChunkSize`] if `size` is zero.
///
/// # Examples
/// ```
/// # use seqkit::collections::array::chunk;
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), [vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(&[1, 2, 3], 0).is_err());
/// ```
pub fn chunk<T: Clone>(seq: &[T], size: usize) -> Result<Vec<Vec<T>>, InvalidChunkSize> {
    if size == 0 {
        return Err(InvalidChunkSize { size });
    }

    let mut res = Vec::with_capacity(seq.len().div_ceil(size));
    let mut start = 0;
    while start < seq.len() {
        let end = usize::min(start + size, seq.len());
        res.push(seq[start..end].to_vec());
        start = end;
    }
    Ok(res)
}

/// Concatenates every sub-sequence of `seq`, in order, into one flat sequence.
///
/// # Examples
/// ```
/// # use seqkit::collections::array::flatten;
/// assert_eq!(flatten(&[vec![1, 2], vec![3, 4], vec![5]]), [1, 2, 3, 4, 5]);
/// ```
pub fn flatten<T: Clone, S: Borrow<[T]>>(seq: &[S]) -> Vec<T> {
    let len = reduce(seq, |acc, sub| acc + sub.borrow().len(), 0);
    let mut res = Vec::with_capacity(len);
    for_each(seq, |sub| res.extend_from_slice(sub.borrow()));
    res
}
