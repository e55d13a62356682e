// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered candidate reduction
//!
//! Face and axis selection both scan a fixed list of candidates and keep the
//! first one unless a later one is strictly better. Equal scores therefore
//! resolve to whichever candidate comes earlier in the list, which matters on
//! box edges, corners and cubes.

/// Keep the first candidate with the smallest score
///
/// Later candidates replace the current pick only on a strictly smaller score.
/// Returns `None` for an empty list.
pub fn first_min<T, I>(candidates: I) -> Option<(T, f64)>
where
    I: IntoIterator<Item = (T, f64)>,
{
    candidates.into_iter().fold(None, |best, (candidate, score)| match best {
        Some((_, best_score)) if !(score < best_score) => best,
        _ => Some((candidate, score)),
    })
}

/// Keep the first candidate with the largest score
///
/// Later candidates replace the current pick only on a strictly larger score.
pub fn first_max<T, I>(candidates: I) -> Option<(T, f64)>
where
    I: IntoIterator<Item = (T, f64)>,
{
    candidates.into_iter().fold(None, |best, (candidate, score)| match best {
        Some((_, best_score)) if !(score > best_score) => best,
        _ => Some((candidate, score)),
    })
}
