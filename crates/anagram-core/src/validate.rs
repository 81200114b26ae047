//! Checking locked letters against the letter pool.

use crate::{Letter, LetterCounts, LetterPool, LockMap};

/// A locked letter is demanded more often than the pool supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{letter} not available in pool")]
pub struct PoolViolation {
    /// The offending letter.
    pub letter: Letter,
}

/// Checks that every locked letter can be taken from `pool`, and returns the letters
/// left over for the unlocked slots.
///
/// Locked letters are checked in the order they first appear when walking the locks by
/// ascending slot index; the first letter whose demand exceeds its supply is reported.
/// The leftover letters are grouped by letter in alphabetical order, and there are
/// exactly `pool.len() - locks.len()` of them.
///
/// # Errors
///
/// Returns [`PoolViolation`] naming the first letter the pool cannot cover.
///
/// # Examples
///
/// ```
/// use anagram_core::{Letter, LetterPool, LockMap, PoolViolation, validate_pool};
///
/// let pool = LetterPool::sanitize("CAT");
///
/// let locks: LockMap = [(0, Letter::C)].into_iter().collect();
/// assert_eq!(validate_pool(&pool, &locks), Ok(vec![Letter::A, Letter::T]));
///
/// let locks: LockMap = [(0, Letter::D)].into_iter().collect();
/// assert_eq!(
///     validate_pool(&pool, &locks),
///     Err(PoolViolation { letter: Letter::D })
/// );
/// ```
pub fn validate_pool(pool: &LetterPool, locks: &LockMap) -> Result<Vec<Letter>, PoolViolation> {
    let mut supply = pool.counts();
    let demand = locks.counts();

    let mut checked = LetterCounts::new();
    for (_, letter) in locks.iter() {
        if checked.get(letter) > 0 {
            continue;
        }
        checked.add(letter);

        let needed = demand.get(letter);
        let available = supply.get(letter);
        if available < needed {
            return Err(PoolViolation { letter });
        }
        supply.set(letter, available - needed);
    }

    Ok(supply.to_letters())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn locks_of(entries: &[(usize, char)]) -> LockMap {
        entries
            .iter()
            .map(|&(index, c)| (index, Letter::from_char(c).unwrap()))
            .collect()
    }

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().filter_map(Letter::from_char).collect()
    }

    #[test]
    fn empty_pool_and_locks_is_valid() {
        let remaining = validate_pool(&LetterPool::new(), &LockMap::new()).unwrap();
        assert!(remaining.is_empty());
    }

    #[test]
    fn no_locks_keeps_whole_pool() {
        let pool = LetterPool::sanitize("RRETOPUCM");
        let remaining = validate_pool(&pool, &LockMap::new()).unwrap();
        assert_eq!(remaining.len(), 9);
        assert_eq!(remaining.iter().filter(|&&l| l == Letter::R).count(), 2);
        assert_eq!(remaining, letters("CEMOPRRTU"));
    }

    #[test]
    fn locked_letter_is_consumed() {
        let pool = LetterPool::sanitize("CAT");
        let remaining = validate_pool(&pool, &locks_of(&[(0, 'C')])).unwrap();
        assert_eq!(remaining, letters("AT"));
    }

    #[test]
    fn missing_letter_is_reported() {
        let pool = LetterPool::sanitize("CAT");
        let err = validate_pool(&pool, &locks_of(&[(0, 'D')])).unwrap_err();
        assert_eq!(err, PoolViolation { letter: Letter::D });
        assert_eq!(err.to_string(), "D not available in pool");
    }

    #[test]
    fn duplicate_locks_exceeding_supply_fail() {
        let pool = LetterPool::sanitize("AAB");
        let err = validate_pool(&pool, &locks_of(&[(0, 'A'), (1, 'A'), (2, 'A')])).unwrap_err();
        assert_eq!(err.letter, Letter::A);

        let remaining = validate_pool(&pool, &locks_of(&[(0, 'A'), (2, 'A')])).unwrap();
        assert_eq!(remaining, letters("B"));
    }

    #[test]
    fn first_violation_follows_slot_order() {
        let pool = LetterPool::sanitize("CAT");
        let locks = locks_of(&[(1, 'Z'), (3, 'Q'), (0, 'X')]);
        let err = validate_pool(&pool, &locks).unwrap_err();
        assert_eq!(err.letter, Letter::X);
    }

    #[test]
    fn locks_past_any_length_still_consume() {
        let pool = LetterPool::sanitize("OX");
        let remaining = validate_pool(&pool, &locks_of(&[(18, 'X')])).unwrap();
        assert_eq!(remaining, letters("O"));
    }

    fn letter() -> impl Strategy<Value = Letter> {
        (0..Letter::COUNT).prop_map(Letter::from_index)
    }

    fn pool() -> impl Strategy<Value = LetterPool> {
        prop::collection::vec(letter(), 0..=LetterPool::MAX_LEN).prop_map(|letters| {
            let text: String = letters.into_iter().map(char::from).collect();
            LetterPool::sanitize(&text)
        })
    }

    /// A pool together with locks drawn from its own letters.
    fn satisfiable() -> impl Strategy<Value = (LetterPool, LockMap)> {
        pool().prop_flat_map(|pool| {
            let len = pool.len();
            let letters = pool.letters().to_vec();
            (
                Just(pool),
                prop::sample::subsequence(letters, 0..=len),
                prop::collection::vec(0..20usize, len),
            )
                .prop_map(|(pool, chosen, mut slots)| {
                    slots.sort_unstable();
                    slots.dedup();
                    let locks = slots.into_iter().zip(chosen).collect::<LockMap>();
                    (pool, locks)
                })
        })
    }

    proptest! {
        #[test]
        fn satisfiable_locks_validate((pool, locks) in satisfiable()) {
            let remaining = validate_pool(&pool, &locks).unwrap();
            prop_assert_eq!(remaining.len(), pool.len() - locks.len());

            let mut expected = pool.counts();
            for (letter, count) in locks.counts().iter() {
                expected.set(letter, expected.get(letter) - count);
            }
            prop_assert_eq!(remaining.iter().copied().collect::<LetterCounts>(), expected);
        }

        #[test]
        fn oversubscribed_letter_is_rejected(pool in pool(), target in letter(), extra in 1..3usize) {
            let demand = pool.counts().get(target) + extra;
            let locks: LockMap = (0..demand).map(|index| (index, target)).collect();
            let err = validate_pool(&pool, &locks).unwrap_err();
            prop_assert_eq!(err.letter, target);
        }

        #[test]
        fn reported_letter_is_oversubscribed(
            pool in pool(),
            locks in prop::collection::btree_map(0..20usize, letter(), 0..8),
        ) {
            let locks: LockMap = locks.into_iter().collect();
            let supply = pool.counts();
            let demand = locks.counts();
            match validate_pool(&pool, &locks) {
                Ok(remaining) => {
                    prop_assert!(demand.iter().all(|(letter, count)| count <= supply.get(letter)));
                    prop_assert_eq!(remaining.len(), pool.len() - locks.len());
                }
                Err(PoolViolation { letter }) => {
                    prop_assert!(demand.get(letter) > supply.get(letter));
                }
            }
        }
    }
}
