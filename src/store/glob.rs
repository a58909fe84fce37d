//! Glob matching with Redis `KEYS` semantics.
//!
//! Supports `*`, `?`, `[abc]`, `[a-z]`, `[^a]` and `\` escapes.

/// Returns true if `key` matches `pattern`.
pub fn glob_match(pattern: &str, key: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();
    match_from(&pattern, &key)
}

fn match_from(pattern: &[char], key: &[char]) -> bool {
    let (mut p, mut k) = (0, 0);
    // Position to resume from after the most recent `*`
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        let step = match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, k));
                p += 1;
                continue;
            }
            Some('?') => Some(1),
            Some('[') => match_class(&pattern[p..], key[k]),
            Some('\\') if p + 1 < pattern.len() => (pattern[p + 1] == key[k]).then_some(2),
            Some(&c) => (c == key[k]).then_some(1),
            None => None,
        };

        match step {
            Some(width) => {
                p += width;
                k += 1;
            }
            None => match backtrack {
                Some((star, start)) => {
                    p = star + 1;
                    k = start + 1;
                    backtrack = Some((star, start + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

/// Matches `c` against a `[...]` class at the start of `pattern`.
///
/// Returns the class width in pattern chars on success. Inside the class
/// `\` makes the next char literal. An unterminated class is treated as a
/// literal `[`.
fn match_class(pattern: &[char], c: char) -> Option<usize> {
    let mut i = 1;
    let negate = pattern.get(i) == Some(&'^');
    if negate {
        i += 1;
    }

    let mut matched = false;
    loop {
        let lo = match pattern.get(i) {
            None => return (c == '[').then_some(1),
            Some(']') => break,
            Some('\\') if i + 1 < pattern.len() => {
                i += 1;
                pattern[i]
            }
            Some(&ch) => ch,
        };
        i += 1;

        let is_range = pattern.get(i) == Some(&'-')
            && matches!(pattern.get(i + 1), Some(&hi) if hi != ']');
        if is_range {
            let mut hi = pattern[i + 1];
            i += 2;
            if hi == '\\' && i < pattern.len() {
                hi = pattern[i];
                i += 1;
            }
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            matched |= (lo..=hi).contains(&c);
        } else {
            matched |= lo == c;
        }
    }

    (matched != negate).then_some(i + 1)
}
