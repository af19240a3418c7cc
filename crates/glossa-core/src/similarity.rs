//! Approximate string matching by longest common blocks (Ratcliff/Obershelp).
//!
//! Strings are compared as sequences of `char`. The similarity ratio of two
//! sequences is `2 * M / T` where `M` is the total size of their matching
//! blocks and `T` their combined length.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Sequences at least this long get popular elements excluded from match seeding
const AUTOJUNK_MIN_LEN: usize = 200;

/// A run of `size` equal elements: `a[a..a + size] == b[b..b + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl MatchingBlock {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }
}

/// Compares a changing sequence `a` against a fixed, indexed sequence `b`.
///
/// Set `b` once with [`SequenceMatcher::set_b`] and call
/// [`SequenceMatcher::set_a`] for every candidate; the index over `b` is
/// reused across comparisons.
#[derive(Debug, Default, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each element of `b`, popular elements removed
    b2j: HashMap<char, Vec<usize>>,
    popular: HashSet<char>,
    /// Element counts of the whole of `b`, for `quick_ratio`
    b_counts: HashMap<char, usize>,
    matching_blocks: Option<Vec<MatchingBlock>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let mut matcher = Self::default();
        matcher.set_b(b);
        matcher.set_a(a);
        matcher
    }

    pub fn set_a(&mut self, a: &str) {
        self.a = a.chars().collect();
        self.matching_blocks = None;
    }

    pub fn set_b(&mut self, b: &str) {
        self.b = b.chars().collect();
        self.matching_blocks = None;
        self.index_b();
    }

    /// Elements of `b` that were too frequent to seed matches
    pub fn popular(&self) -> &HashSet<char> {
        &self.popular
    }

    fn index_b(&mut self) {
        self.b2j.clear();
        self.popular.clear();
        self.b_counts.clear();

        for (j, &elt) in self.b.iter().enumerate() {
            self.b2j.entry(elt).or_default().push(j);
            *self.b_counts.entry(elt).or_default() += 1;
        }

        let n = self.b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let limit = n / 100 + 1;
            self.popular = self
                .b2j
                .iter()
                .filter(|(_, positions)| positions.len() > limit)
                .map(|(&elt, _)| elt)
                .collect();
            for elt in &self.popular {
                self.b2j.remove(elt);
            }
        }
    }

    /// Longest block of equal elements in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks, the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`. Returns a zero-size block at
    /// `(alo, blo)` when nothing matches.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> MatchingBlock {
        let (a, b) = (&self.a, &self.b);
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the longest block ending with a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, elt) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(elt) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next;
        }

        // Popular elements never seed a match but may still extend one
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock::new(best_i, best_j, best_size)
    }

    /// All matching blocks, ascending, adjacent blocks merged, terminated by
    /// the sentinel `(len(a), len(b), 0)`.
    pub fn matching_blocks(&mut self) -> &[MatchingBlock] {
        if self.matching_blocks.is_none() {
            self.matching_blocks = Some(self.compute_matching_blocks());
        }
        self.matching_blocks.as_deref().unwrap_or_default()
    }

    fn compute_matching_blocks(&self) -> Vec<MatchingBlock> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        blocks.sort_unstable();

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(MatchingBlock::new(la, lb, 0));
        merged
    }

    /// Similarity in `[0, 1]`; two empty sequences are identical (1.0)
    pub fn ratio(&mut self) -> f64 {
        let matches = self.matching_blocks().iter().map(|m| m.size).sum();
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from element counts alone
    pub fn quick_ratio(&self) -> f64 {
        let mut avail: HashMap<char, usize> = HashMap::new();
        let mut matches = 0;
        for elt in &self.a {
            let left = avail
                .entry(*elt)
                .or_insert_with(|| self.b_counts.get(elt).copied().unwrap_or(0));
            if *left > 0 {
                *left -= 1;
                matches += 1;
            }
        }
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from lengths alone
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        calculate_ratio(la.min(lb), la + lb)
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// Similarity ratio of two strings
pub fn ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}

/// A candidate that cleared the cutoff, with its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloseMatch<'a> {
    pub candidate: &'a str,
    pub ratio: f64,
}

/// Up to `n` candidates whose similarity to `word` is at least `cutoff`.
///
/// Sorted by ratio, most similar first; equal ratios order by candidate,
/// descending. `n == 0` yields nothing.
pub fn close_matches<'a, I>(
    word: &str,
    candidates: I,
    n: usize,
    cutoff: f64,
) -> Vec<CloseMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut matcher = SequenceMatcher::default();
    matcher.set_b(word);

    let mut found = Vec::new();
    for candidate in candidates {
        matcher.set_a(candidate);
        if matcher.real_quick_ratio() < cutoff || matcher.quick_ratio() < cutoff {
            continue;
        }
        let ratio = matcher.ratio();
        if ratio >= cutoff {
            found.push(CloseMatch { candidate, ratio });
        }
    }

    found.sort_by(|x, y| {
        y.ratio
            .partial_cmp(&x.ratio)
            .unwrap_or(Ordering::Equal)
            .then_with(|| y.candidate.cmp(x.candidate))
    });
    found.truncate(n);
    found
}
