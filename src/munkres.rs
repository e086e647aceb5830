//! Munkres (Kuhn-Blackman) assignment, used by [`crate::seqset::set_distance`]
//! to find the minimum-cost pairing between two sets of strings.

const EPSILON: f64 = 1e-14;

/// Finds, for a rectangular cost matrix with `n2` rows and `n1` columns
/// (`n1 <= n2`), the assignment of one distinct row to each column that
/// minimizes total cost.
///
/// Returns a vector of length `n1` where entry `j` is the row assigned to
/// column `j`. `cost` must have `n1 <= cost.len()` (the row count) and every
/// row the same length `n1`.
pub fn solve(cost: &[Vec<f64>]) -> Vec<usize> {
    let n2 = cost.len();
    if n2 == 0 {
        return Vec::new();
    }
    let n1 = cost[0].len();
    if n1 == 0 {
        return Vec::new();
    }

    let mut dists: Vec<Vec<f64>> = cost.to_vec();

    let mut covc = vec![false; n1];
    let mut covr = vec![false; n2];
    // 1-based: 0 means "no star/prime in this row/column".
    let mut zstarc = vec![0usize; n1];
    let mut zstarr = vec![0usize; n2];
    let mut zprimer = vec![0usize; n2];

    // Step 0/1: subtract each column's minimum, then star one zero per
    // column where possible.
    for j in 0..n1 {
        let mut minidx = 0;
        let mut minval = dists[0][j];
        for i in 1..n2 {
            if dists[i][j] < minval {
                minval = dists[i][j];
                minidx = i;
            }
        }
        for i in 0..n2 {
            dists[i][j] -= minval;
            if dists[i][j] < EPSILON {
                dists[i][j] = 0.0;
            }
        }
        if zstarc[j] == 0 && zstarr[minidx] == 0 {
            zstarc[j] = minidx + 1;
            zstarr[minidx] = j + 1;
        } else {
            for i in 0..n2 {
                if i != minidx && dists[i][j] == 0.0 && zstarc[j] == 0 && zstarr[i] == 0 {
                    zstarc[j] = i + 1;
                    zstarr[i] = j + 1;
                    break;
                }
            }
        }
    }

    loop {
        // Step 2: cover every column with a starred zero; done if all are.
        // This runs exactly once per augmentation, not once per Step 5
        // adjustment: Step 3 deliberately uncovers a star's column when it
        // covers that star's row, and Step 5 must preserve those covc/covr
        // changes while it keeps hunting for an augmenting path.
        for j in 0..n1 {
            covc[j] = zstarc[j] != 0;
        }
        if covc.iter().all(|&c| c) {
            break;
        }

        // Step 3 / Step 5: search for an uncovered zero to prime; whenever
        // none remains, adjust the matrix (Step 5) and keep searching with
        // the same covc/covr state, exactly as the reference's step_3 label
        // is re-entered from both the row-starred case and Step 5.
        let augment_row = loop {
            let mut found = None;
            'search: for j in 0..n1 {
                if covc[j] {
                    continue;
                }
                for i in 0..n2 {
                    if covr[i] || dists[i][j] != 0.0 {
                        continue;
                    }
                    found = Some((i, j));
                    break 'search;
                }
            }

            if let Some((i, j)) = found {
                zprimer[i] = j + 1;
                if zstarr[i] != 0 {
                    covr[i] = true;
                    covc[zstarr[i] - 1] = false;
                    continue;
                }
                break i;
            }

            // Step 5: no uncovered zero; adjust by the smallest uncovered value.
            let mut min_uncovered = f64::INFINITY;
            for i in 0..n2 {
                if covr[i] {
                    continue;
                }
                for j in 0..n1 {
                    if !covc[j] && dists[i][j] < min_uncovered {
                        min_uncovered = dists[i][j];
                    }
                }
            }
            for i in 0..n2 {
                for j in 0..n1 {
                    if covr[i] {
                        dists[i][j] += min_uncovered;
                    }
                    if !covc[j] {
                        dists[i][j] -= min_uncovered;
                    }
                    if dists[i][j].abs() < EPSILON {
                        dists[i][j] = 0.0;
                    }
                }
            }
        };

        // Step 4: augment along the alternating path of primes/stars.
        let mut r = augment_row;
        loop {
            let j = zprimer[r] - 1;
            let prev = zstarc[j];
            zstarc[j] = r + 1;
            zstarr[r] = j + 1;
            if prev == 0 {
                break;
            }
            r = prev - 1;
        }
        zprimer.iter_mut().for_each(|p| *p = 0);
        covr.iter_mut().for_each(|c| *c = false);
        covc.iter_mut().for_each(|c| *c = false);
    }

    (0..n1).map(|j| zstarc[j] - 1).collect()
}
