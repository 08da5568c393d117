/// Character similarity between two strings as a percentage in [0, 100].
///
/// Finds the longest common contiguous run of characters, credits its
/// length, then matches the regions strictly before and strictly after it
/// against each other the same way. The recursion is driven by an explicit
/// work stack so long inputs cannot overflow the call stack. On a tied run
/// length, the first occurrence wins (by position in `a`, then in `b`),
/// which keeps the score reproducible.
///
/// The final score is `2 * matched / (len_a + len_b) * 100`, or 0 when
/// both strings are empty. Comparison is case-sensitive over characters
/// exactly as given; any folding is the tokenizer's job.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let mut matched = 0usize;

    // Work stack of (a-range, b-range) region pairs still to match
    let mut regions: Vec<(usize, usize, usize, usize)> = vec![(0, a.len(), 0, b.len())];

    while let Some((a_start, a_end, b_start, b_end)) = regions.pop() {
        if a_start >= a_end || b_start >= b_end {
            continue;
        }

        let (pos_a, pos_b, len) =
            longest_common_run(&a[a_start..a_end], &b[b_start..b_end]);
        if len == 0 {
            continue;
        }

        matched += len;

        // Regions before and after the matched run, in each string
        regions.push((a_start, a_start + pos_a, b_start, b_start + pos_b));
        regions.push((a_start + pos_a + len, a_end, b_start + pos_b + len, b_end));
    }

    2.0 * matched as f64 / (a.len() + b.len()) as f64 * 100.0
}

/// Longest common contiguous run of two char slices.
/// Returns (position in a, position in b, length); ties keep the first
/// occurrence because only a strictly longer run replaces the best.
fn longest_common_run(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);

    for i in 0..a.len() {
        for j in 0..b.len() {
            let mut len = 0;
            while i + len < a.len() && j + len < b.len() && a[i + len] == b[j + len] {
                len += 1;
            }
            if len > best.2 {
                best = (i, j, len);
            }
        }
    }

    best
}
