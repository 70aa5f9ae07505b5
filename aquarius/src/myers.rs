//! Linear-space Myers longest common subsequence.
//!
//! Only the matching pairs are needed by the differ, so the "equal" runs of the classic
//! divide-and-conquer recursion are collected into a flat, ascending list of `(old, new)` index
//! pairs. Deletions and insertions are whatever is left unmatched.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut, Range};

/// Returns the matched `(old, new)` index pairs of a longest common subsequence, ascending in
/// both components.
///
/// `eq(i, j)` compares `old[i]` with `new[j]`.
pub(crate) fn common_subsequence(
    old_len: usize,
    new_len: usize,
    eq: impl Fn(usize, usize) -> bool,
) -> Vec<(usize, usize)> {
    let max_d = max_d(old_len, new_len);
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut pairs = Vec::new();
    conquer(&eq, 0..old_len, 0..new_len, &mut vf, &mut vb, &mut pairs);
    pairs
}

fn max_d(old_len: usize, new_len: usize) -> usize {
    (old_len + new_len).div_ceil(2) + 1
}

/// Furthest-reaching x per diagonal `k`, indexable by negative diagonals.
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}

fn common_prefix_len<F>(eq: &F, old: Range<usize>, new: Range<usize>) -> usize
where
    F: Fn(usize, usize) -> bool,
{
    old.zip(new).take_while(|&(i, j)| eq(i, j)).count()
}

fn common_suffix_len<F>(eq: &F, old: Range<usize>, new: Range<usize>) -> usize
where
    F: Fn(usize, usize) -> bool,
{
    old.rev().zip(new.rev()).take_while(|&(i, j)| eq(i, j)).count()
}

fn conquer<F>(
    eq: &F,
    mut old: Range<usize>,
    mut new: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    pairs: &mut Vec<(usize, usize)>,
) where
    F: Fn(usize, usize) -> bool,
{
    let prefix = common_prefix_len(eq, old.clone(), new.clone());
    pairs.extend((0..prefix).map(|i| (old.start + i, new.start + i)));
    old.start += prefix;
    new.start += prefix;

    let suffix = common_suffix_len(eq, old.clone(), new.clone());
    old.end -= suffix;
    new.end -= suffix;

    if !old.is_empty() && !new.is_empty() {
        if let Some((x, y)) = find_middle_snake(eq, old.clone(), new.clone(), vf, vb) {
            let x = x.clamp(old.start, old.end);
            let y = y.clamp(new.start, new.end);
            let at_start = x == old.start && y == new.start;
            let at_end = x == old.end && y == new.end;
            // A split on a corner would recurse into the same problem.
            if !at_start && !at_end {
                conquer(eq, old.start..x, new.start..y, vf, vb, pairs);
                conquer(eq, x..old.end, y..new.end, vf, vb, pairs);
            }
        }
    }

    pairs.extend((0..suffix).map(|i| (old.end + i, new.end + i)));
}

fn find_middle_snake<F>(
    eq: &F,
    old: Range<usize>,
    new: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)>
where
    F: Fn(usize, usize) -> bool,
{
    let n = old.len();
    let m = new.len();
    let delta = n as isize - m as isize;
    let odd = delta & 1 == 1;
    vf[1] = 0;
    vb[1] = 0;

    let d_max = max_d(n, m) as isize;
    for d in 0..d_max {
        let mut k = d;
        while k >= -d {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = (x as isize - k) as usize;
            let (x0, y0) = (x, y);
            if x < n && y < m {
                x += common_prefix_len(eq, old.start + x..old.end, new.start + y..new.end);
            }
            vf[k] = x;
            if odd && (k - delta).abs() <= d - 1 && vf[k] + vb[-(k - delta)] >= n {
                return Some((old.start + x0, new.start + y0));
            }
            k -= 2;
        }

        let mut k = d;
        while k >= -d {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            if x < n && y < m {
                let advance = common_suffix_len(
                    eq,
                    old.start..old.start + n - x,
                    new.start..new.start + m - y,
                );
                x += advance;
                y += advance;
            }
            vb[k] = x;
            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((
                    old.start + n.saturating_sub(x),
                    new.start + m.saturating_sub(y),
                ));
            }
            k -= 2;
        }
    }

    None
}
