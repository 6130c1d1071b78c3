/*! Generates variable symbols that do not clash with a given set of names. */
use crate::syntax::V;
use std::collections::BTreeSet;

/// Returns the first variable among `b0`, `b1`, `b2`, ... that is not in `forbidden`, where `b`
/// is the name of `base`.
///
/// **Example**:
/// ```rust
/// # use deduce_fol::{syntax::V, transform::fresh_variable};
/// # use std::collections::BTreeSet;
/// let y = V::from("y");
/// let y0 = V::from("y0");
/// let forbidden: BTreeSet<&V> = vec![&y, &y0].into_iter().collect();
///
/// assert_eq!(V::from("y1"), fresh_variable(&y, &forbidden));
/// ```
pub fn fresh_variable(base: &V, forbidden: &BTreeSet<&V>) -> V {
    let mut counter: u64 = 0;
    loop {
        let candidate = V(format!("{}{}", base, counter));
        if !forbidden.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
