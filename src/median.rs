//! Generalized median strings: greedy construction and local-perturbation
//! improvement.

use crate::symbol::SymbolTable;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Per-input scratch: the Levenshtein matrix row for the current median
/// prefix, one per input string. `rows[i][k]` is the distance from the
/// median's first `k` symbols to `strings[i]`'s first ... well, to the full
/// row state needed to extend incrementally; see `finish_distance` for how
/// it is used to complete a computation without rebuilding from scratch.
struct Rows<T> {
    data: Vec<Vec<usize>>,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Rows<T> {
    fn new(strings: &[&[T]]) -> Self {
        let data = strings.iter().map(|s| (0..=s.len()).collect()).collect();
        Rows { data, _marker: std::marker::PhantomData }
    }
}

/// For each candidate symbol, evaluates what the next matrix row would look
/// like against every input without committing it, returning `(minsum,
/// totaldist)`: the weighted sum of row minima (a lower bound used to choose
/// the best symbol) and the weighted sum of row endpoints (the actual total
/// distance if the median stopped here).
fn score_candidate<T: PartialEq + Copy>(
    symbol: T,
    strings: &[&[T]],
    weights: &[f64],
    rows: &[Vec<usize>],
    len: usize,
) -> (f64, f64) {
    let mut minsum = 0.0;
    let mut totaldist = 0.0;
    for (i, &stri) in strings.iter().enumerate() {
        let row = &rows[i];
        let mut min = len;
        let mut x = len;
        for (k, &c) in stri.iter().enumerate() {
            let d = row[k] + usize::from(symbol != c);
            x += 1;
            if x > d {
                x = d;
            }
            if x > row[k + 1] + 1 {
                x = row[k + 1] + 1;
            }
            if x < min {
                min = x;
            }
        }
        minsum += min as f64 * weights[i];
        totaldist += x as f64 * weights[i];
    }
    (minsum, totaldist)
}

fn commit_symbol<T: PartialEq + Copy>(symbol: T, strings: &[&[T]], rows: &mut [Vec<usize>]) {
    for (i, &stri) in strings.iter().enumerate() {
        let oldrow = &rows[i];
        let mut newrow = vec![0usize; oldrow.len()];
        newrow[0] = oldrow[0] + 1;
        for k in 1..oldrow.len() {
            let c1 = oldrow[k] + 1;
            let c2 = newrow[k - 1] + 1;
            let c3 = oldrow[k - 1] + usize::from(symbol != stri[k - 1]);
            let mut v = if c2 > c3 { c3 } else { c2 };
            if v > c1 {
                v = c1;
            }
            newrow[k] = v;
        }
        rows[i] = newrow;
    }
}

/// Finds an approximate generalized median string of `strings` by greedy
/// column-by-column construction: at each step, the candidate symbol that
/// minimises the weighted sum of row-minima lower bounds is appended.
pub fn greedy_median<T>(strings: &[&[T]], weights: &[f64]) -> Vec<T>
where
    T: SymbolTable,
{
    let symlist = T::distinct_symbols(strings);
    if symlist.is_empty() {
        return Vec::new();
    }

    let maxlen = strings.iter().map(|s| s.len()).max().unwrap_or(0);
    let stoplen = 2 * maxlen + 1;
    let mut rows = Rows::new(strings).data;

    let mut mediandist = vec![0.0f64; stoplen + 1];
    mediandist[0] = strings.iter().zip(weights).map(|(s, w)| s.len() as f64 * w).sum();
    let mut median: Vec<T> = Vec::with_capacity(stoplen);

    let mut actual_stoplen = stoplen;
    for len in 1..=stoplen {
        let mut best_symbol = symlist[0];
        let mut best_minsum = f64::INFINITY;
        let mut best_totaldist = f64::INFINITY;
        for &symbol in &symlist {
            let (minsum, totaldist) = score_candidate(symbol, strings, weights, &rows, len);
            if minsum < best_minsum {
                best_minsum = minsum;
                best_totaldist = totaldist;
                best_symbol = symbol;
            }
        }
        mediandist[len] = best_totaldist;
        median.push(best_symbol);

        if len == stoplen || (len > maxlen && mediandist[len] > mediandist[len - 1]) {
            actual_stoplen = len;
            break;
        }
        commit_symbol(best_symbol, strings, &mut rows);
    }

    let mut bestlen = 0;
    for len in 1..=actual_stoplen {
        if mediandist[len] < mediandist[bestlen] {
            bestlen = len;
        }
    }
    median.truncate(bestlen);
    median
}

/// Parallel variant of [`greedy_median`]: scores candidate symbols
/// concurrently, since each candidate's score is independent of the others.
/// Only available with the `rayon` feature.
#[cfg(feature = "rayon")]
pub fn par_greedy_median<T>(strings: &[&[T]], weights: &[f64]) -> Vec<T>
where
    T: SymbolTable + Send + Sync,
{
    let symlist = T::distinct_symbols(strings);
    if symlist.is_empty() {
        return Vec::new();
    }

    let maxlen = strings.iter().map(|s| s.len()).max().unwrap_or(0);
    let stoplen = 2 * maxlen + 1;
    let mut rows = Rows::new(strings).data;

    let mut mediandist = vec![0.0f64; stoplen + 1];
    mediandist[0] = strings.iter().zip(weights).map(|(s, w)| s.len() as f64 * w).sum();
    let mut median: Vec<T> = Vec::with_capacity(stoplen);

    let mut actual_stoplen = stoplen;
    for len in 1..=stoplen {
        let (best_symbol, _best_minsum, best_totaldist) = symlist
            .par_iter()
            .map(|&symbol| {
                let (minsum, totaldist) = score_candidate(symbol, strings, weights, &rows, len);
                (symbol, minsum, totaldist)
            })
            .reduce(
                || (symlist[0], f64::INFINITY, f64::INFINITY),
                |a, b| if b.1 < a.1 { b } else { a },
            );

        mediandist[len] = best_totaldist;
        median.push(best_symbol);

        if len == stoplen || (len > maxlen && mediandist[len] > mediandist[len - 1]) {
            actual_stoplen = len;
            break;
        }
        commit_symbol(best_symbol, strings, &mut rows);
    }

    let mut bestlen = 0;
    for len in 1..=actual_stoplen {
        if mediandist[len] < mediandist[bestlen] {
            bestlen = len;
        }
    }
    median.truncate(bestlen);
    median
}

/// Completes a distance computation for each input given matrix rows
/// already known up to some prefix, and a `tail` that continues from there.
/// `tail[0]` corresponds to the position right after the known prefix.
fn finish_distance<T: PartialEq + Copy>(
    tail: &[T],
    strings: &[&[T]],
    weights: &[f64],
    rows: &[Vec<usize>],
) -> f64 {
    if tail.is_empty() {
        return strings.iter().zip(rows).zip(weights).map(|((s, r), w)| r[s.len()] as f64 * w).sum();
    }

    let mut distsum = 0.0;
    for ((stri, rowi), &w) in strings.iter().zip(rows).zip(weights) {
        let mut len = tail.len();
        let mut leni = stri.len();
        while len > 0 && leni > 0 && stri[leni - 1] == tail[len - 1] {
            len -= 1;
            leni -= 1;
        }
        if len == 0 {
            distsum += rowi[leni] as f64 * w;
            continue;
        }
        let offset = rowi[0];
        if leni == 0 {
            distsum += (offset + len) as f64 * w;
            continue;
        }

        let mut row = rowi[..=leni].to_vec();
        for i in 1..=len {
            let char1 = tail[i - 1];
            let mut d = i + offset;
            let mut x = i + offset;
            for k in 0..leni {
                d -= 1;
                let c3 = d + usize::from(char1 != stri[k]);
                x += 1;
                if x > c3 {
                    x = c3;
                }
                d = row[k + 1] + 1;
                if x > d {
                    x = d;
                }
                row[k + 1] = x;
            }
        }
        distsum += row[leni] as f64 * w;
    }
    distsum
}

/// Tries small perturbations (replace/insert/delete at each position) on an
/// initial median, accepting any that strictly lower the total weighted
/// distance. Never returns a result with a larger SOD than `median`; in the
/// worst case it returns `median` unchanged.
pub fn median_improve<T>(median: &[T], strings: &[&[T]], weights: &[f64]) -> Vec<T>
where
    T: SymbolTable,
{
    let symlist = T::distinct_symbols(strings);
    if symlist.is_empty() {
        return median.to_vec();
    }

    let mut rows = Rows::new(strings).data;
    let mut med: Vec<T> = median.to_vec();
    let mut minminsum = finish_distance(&med, strings, weights, &rows);

    let mut pos = 0usize;
    while pos <= med.len() {
        enum Action<T> {
            Keep,
            Replace(T),
            Insert(T),
            Delete,
        }
        let mut action = Action::Keep;

        if pos < med.len() {
            let orig = med[pos];
            for &symbol in &symlist {
                if symbol == orig {
                    continue;
                }
                med[pos] = symbol;
                let sum = finish_distance(&med[pos..], strings, weights, &rows);
                if sum < minminsum {
                    minminsum = sum;
                    action = Action::Replace(symbol);
                }
            }
            med[pos] = orig;
        }

        // Simulate inserting a symbol at `pos`: build a tail starting with the
        // candidate symbol followed by the untouched remainder, and measure it
        // against the rows for the prefix of length `pos` (one shorter than
        // the tail's first position) exactly as finish_distance does.
        let mut probe: Vec<T> = Vec::with_capacity(med.len() - pos + 1);
        for &symbol in &symlist {
            probe.clear();
            probe.push(symbol);
            probe.extend_from_slice(&med[pos..]);
            let sum = finish_distance(&probe, strings, weights, &rows);
            if sum < minminsum {
                minminsum = sum;
                action = Action::Insert(symbol);
            }
        }

        if pos < med.len() {
            let sum = finish_distance(&med[pos + 1..], strings, weights, &rows);
            if sum < minminsum {
                minminsum = sum;
                action = Action::Delete;
            }
        }

        match action {
            Action::Replace(symbol) => {
                med[pos] = symbol;
            }
            Action::Insert(symbol) => {
                med.insert(pos, symbol);
            }
            Action::Delete => {
                med.remove(pos);
            }
            Action::Keep => {}
        }

        if !matches!(action, Action::Delete) {
            let symbol = med[pos];
            commit_prefix_symbol(symbol, pos, strings, &mut rows);
            pos += 1;
        }
    }

    med
}

fn commit_prefix_symbol<T: PartialEq + Copy>(
    symbol: T,
    pos: usize,
    strings: &[&[T]],
    rows: &mut [Vec<usize>],
) {
    for (stri, rowi) in strings.iter().zip(rows.iter_mut()) {
        let leni = stri.len();
        let mut newrow = vec![0usize; leni + 1];
        newrow[0] = pos + 1;
        for k in 1..=leni {
            let c1 = rowi[k] + 1;
            let c2 = newrow[k - 1] + 1;
            let c3 = rowi[k - 1] + usize::from(symbol != stri[k - 1]);
            let mut v = if c2 > c3 { c3 } else { c2 };
            if v > c1 {
                v = c1;
            }
            newrow[k] = v;
        }
        *rowi = newrow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::distance;

    fn total_distance<T: PartialEq + Copy>(median: &[T], strings: &[&[T]], weights: &[f64]) -> f64 {
        strings.iter().zip(weights).map(|(s, w)| distance(median, s, false) as f64 * w).sum()
    }

    #[test]
    fn greedy_median_beats_empty_string_baseline() {
        let a: &[u8] = b"foo";
        let b: &[u8] = b"foobar";
        let c: &[u8] = b"fobar";
        let strings = [a, b, c];
        let weights = [1.0, 1.0, 1.0];
        let median = greedy_median(&strings, &weights);
        let baseline: f64 = strings.iter().map(|s| s.len() as f64).sum();
        assert!(total_distance(&median, &strings, &weights) <= baseline);
        assert!(median.len() <= 2 * 6 + 1);
    }

    #[test]
    fn greedy_median_is_order_independent_for_total_cost() {
        let a: &[u8] = b"foo";
        let b: &[u8] = b"foobar";
        let c: &[u8] = b"fobar";
        let m1 = greedy_median(&[a, b, c], &[1.0, 1.0, 1.0]);
        let m2 = greedy_median(&[c, a, b], &[1.0, 1.0, 1.0]);
        let d1 = total_distance(&m1, &[a, b, c], &[1.0, 1.0, 1.0]);
        let d2 = total_distance(&m2, &[c, a, b], &[1.0, 1.0, 1.0]);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn median_improve_never_worsens() {
        let strings: [&[u8]; 3] = [b"kitten", b"sitting", b"bitten"];
        let weights = [1.0, 1.0, 1.0];
        let initial = greedy_median(&strings, &weights);
        let before = total_distance(&initial, &strings, &weights);
        let improved = median_improve(&initial, &strings, &weights);
        let after = total_distance(&improved, &strings, &weights);
        assert!(after <= before + 1e-9);
    }

    #[test]
    fn median_improve_on_identical_inputs_is_a_fixed_point() {
        let strings: [&[u8]; 2] = [b"same", b"same"];
        let weights = [1.0, 1.0];
        let improved = median_improve(b"same", &strings, &weights);
        assert_eq!(improved, b"same");
    }
}
