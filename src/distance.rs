//! Memory-economical Levenshtein distance.
//!
//! One algorithm, generic over the symbol type, stands in for the
//! reference's separate byte/wide-character routines; monomorphization over
//! `u8` and `char` gives the two instantiations without duplicated source.

/// Strips the longest common prefix and suffix shared by `a` and `b`.
///
/// Returns the prefix length (needed by callers that must translate indices
/// of the stripped cores back into the original strings) together with the
/// remaining cores.
pub(crate) fn strip_common_affixes<'a, T: PartialEq>(
    a: &'a [T],
    b: &'a [T],
) -> (usize, &'a [T], &'a [T]) {
    let mut start = 0;
    while start < a.len() && start < b.len() && a[start] == b[start] {
        start += 1;
    }
    let mut end_a = a.len();
    let mut end_b = b.len();
    while end_a > start && end_b > start && a[end_a - 1] == b[end_b - 1] {
        end_a -= 1;
        end_b -= 1;
    }
    (start, &a[start..end_a], &b[start..end_b])
}

/// Computes the Levenshtein distance between `a` and `b`.
///
/// With `xcost == false`, insertion, deletion and substitution each cost 1
/// (classical Levenshtein). With `xcost == true`, substitution costs 2 (as
/// if implemented via a delete plus an insert); insertion and deletion still
/// cost 1.
pub fn distance<T: PartialEq + Copy>(a: &[T], b: &[T], xcost: bool) -> usize {
    let (_, s1, s2) = strip_common_affixes(a, b);

    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    let (s1, s2) = if s1.len() > s2.len() { (s2, s1) } else { (s1, s2) };

    if s1.len() == 1 {
        let z = s1[0];
        if s2.contains(&z) {
            return s2.len() - 1;
        }
        return s2.len() + usize::from(xcost);
    }

    if xcost {
        distance_xcost(s1, s2)
    } else {
        distance_corner_skip(s1, s2)
    }
}

/// Plain one-row sweep, substitution cost 2. Used when `xcost` is set; the
/// corner-skip optimisation below is only valid for unit substitution cost.
fn distance_xcost<T: PartialEq + Copy>(s1: &[T], s2: &[T]) -> usize {
    let len2 = s2.len();
    let mut row: Vec<usize> = (0..=len2).collect();

    for (i, &char1) in s1.iter().enumerate() {
        let mut d = i;
        let mut x = i + 1;
        for (j, &char2) in s2.iter().enumerate() {
            if char1 == char2 {
                x = d;
            } else {
                x += 1;
            }
            d = row[j + 1];
            if x > d + 1 {
                x = d + 1;
            }
            row[j + 1] = x;
        }
    }
    row[len2]
}

/// One-row sweep with unit substitution cost, skipping the two corner
/// triangles of the matrix that no optimal path can enter.
///
/// `s1.len() >= 2` and `s1.len() <= s2.len()` are required (the `len1 == 1`
/// and empty-string cases are handled by the caller).
fn distance_corner_skip<T: PartialEq + Copy>(s1: &[T], s2: &[T]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();
    let l1 = len1 + 1;
    let l2 = len2 + 1;
    let half = l1 >> 1;

    let mut row = vec![0usize; l2];
    let init_end = l2 - half;
    for (j, slot) in row.iter_mut().enumerate().take(init_end) {
        *slot = j;
    }
    row[0] = l1 - half - 1;

    let mut end_idx = l2 - 1;
    for i in 1..l1 {
        let char1 = s1[i - 1];
        let (mut p_idx, mut char2_idx, mut d, mut x);

        if i >= l1 - half {
            let offset = i - (l1 - half);
            let c3 = row[offset] + usize::from(char1 != s2[offset]);
            x = row[offset + 1];
            x += 1;
            d = x;
            if x > c3 {
                x = c3;
            }
            row[offset + 1] = x;
            p_idx = offset + 2;
            char2_idx = offset + 1;
        } else {
            p_idx = 1;
            char2_idx = 0;
            d = i;
            x = i;
        }

        if i <= half + 1 {
            end_idx = l2 + i - half - 2;
        }

        while p_idx <= end_idx {
            d -= 1;
            let c3 = d + usize::from(char1 != s2[char2_idx]);
            char2_idx += 1;
            x += 1;
            if x > c3 {
                x = c3;
            }
            d = row[p_idx];
            d += 1;
            if x > d {
                x = d;
            }
            row[p_idx] = x;
            p_idx += 1;
        }

        if i <= half {
            d -= 1;
            let c3 = d + usize::from(char1 != s2[char2_idx]);
            x += 1;
            if x > c3 {
                x = c3;
            }
            row[p_idx] = x;
        }
    }
    row[end_idx]
}
