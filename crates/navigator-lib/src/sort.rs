//! Stable merge sort used to rank routes and order landmark listings.
//!
//! Ranking goes through this module rather than `slice::sort_by` so the
//! tie-break contract is spelled out here: elements with equal keys keep
//! their input order. Runs in O(n log n) time with one O(n) scratch buffer.

use std::cmp::Ordering;

/// Records that can be ranked by a numeric key, lowest first.
pub trait Ranked {
    fn rank_key(&self) -> f64;
}

/// Sort `items` in place with `compare`, preserving the relative order of
/// elements that compare equal.
pub fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let mut scratch = items.to_vec();
    sort_range(items, &mut scratch, &mut compare);
}

fn sort_range<T, F>(items: &mut [T], scratch: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        sort_range(left, scratch_left, compare);
        sort_range(right, scratch_right, compare);
    }
    merge(items, scratch, mid, compare);
}

fn merge<T, F>(items: &mut [T], scratch: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    scratch.clone_from_slice(items);

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        // Taking from the left half on ties is what makes the sort stable.
        if compare(&scratch[i], &scratch[j]) != Ordering::Greater {
            items[k] = scratch[i].clone();
            i += 1;
        } else {
            items[k] = scratch[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < mid {
        items[k] = scratch[i].clone();
        i += 1;
        k += 1;
    }
    while j < len {
        items[k] = scratch[j].clone();
        j += 1;
        k += 1;
    }
}

/// Rank records by ascending key. NaN keys sort after every number.
pub fn sort_by_distance<T>(items: &mut [T])
where
    T: Ranked + Clone,
{
    merge_sort_by(items, |a, b| a.rank_key().total_cmp(&b.rank_key()));
}

/// Order strings by character count, shortest first.
pub fn sort_by_length<S>(items: &mut [S])
where
    S: AsRef<str> + Clone,
{
    merge_sort_by(items, |a, b| {
        a.as_ref()
            .chars()
            .count()
            .cmp(&b.as_ref().chars().count())
    });
}
