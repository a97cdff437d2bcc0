//! Unique 5-digit product code generation.

use std::collections::HashSet;

use rand::Rng;

/// Smallest assignable product code.
const CODE_MIN: u32 = 10_000;
/// Largest assignable product code.
const CODE_MAX: u32 = 99_999;

/// Draws uniform random codes in `[10000, 99999]` until one is found
/// that is not in `existing`, and returns it as a 5-digit string.
///
/// There is no retry bound: the codespace (90 000 values) is large
/// relative to realistic catalog sizes, so rejection sampling terminates
/// quickly in practice. The check runs against the caller's snapshot of
/// the catalog only; two admin sessions generating codes from
/// independent snapshots can race. That gap is documented, not fixed.
#[must_use]
pub fn generate_unique_code(existing: &HashSet<String>) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let code = rng.gen_range(CODE_MIN..=CODE_MAX).to_string();
        if !existing.contains(&code) {
            return code;
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn code_is_five_numeric_digits() {
        let code = generate_unique_code(&HashSet::new());
        assert_eq!(code.len(), 5);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn code_is_not_in_exclusion_set() {
        let existing: HashSet<String> = (0..500)
            .map(|i| (CODE_MIN + i).to_string())
            .collect();
        for _ in 0..100 {
            let code = generate_unique_code(&existing);
            assert!(!existing.contains(&code));
        }
    }

    #[test]
    fn terminates_with_nearly_full_codespace() {
        // Leave only the last hundred codes free.
        let existing: HashSet<String> = (CODE_MIN..CODE_MAX - 99)
            .map(|i| i.to_string())
            .collect();
        let code = generate_unique_code(&existing);
        assert!(!existing.contains(&code));
        let Ok(value) = code.parse::<u32>() else {
            panic!("code is not numeric");
        };
        assert!((CODE_MIN..=CODE_MAX).contains(&value));
    }
}
