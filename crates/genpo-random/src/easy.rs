//! Easy numbers, simple fractions and leading coefficients.

use genpo_rings::Q;
use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest number of candidates an easy-number interval offers.
const MIN_CHOICES: i64 = 7;

/// Numerators and denominators of the simple fractions 1/3, 1/2 and 1/4.
pub const SIMPLE_FRACTIONS: [(i64, i64); 3] = [(1, 3), (1, 2), (1, 4)];

/// Returns an integer interval holding at least `max(7, |min_choices|)`
/// values.
///
/// With `negative` the interval is symmetric around zero, `[-u, u]` with
/// `u = ceil((m - 1) / 2)`; otherwise it is `[0, m - 1]`.
#[must_use]
pub fn easy_num_interval(negative: bool, min_choices: Option<i64>) -> (i64, i64) {
    let choices = min_choices.map_or(MIN_CHOICES, |m| m.saturating_abs().max(MIN_CHOICES));

    if negative {
        let upper = choices / 2;
        (-upper, upper)
    } else {
        (0, choices - 1)
    }
}

/// Draws an integer uniformly from [`easy_num_interval`].
pub fn rand_easy_num<R: Rng + ?Sized>(rng: &mut R, negative: bool, min_choices: Option<i64>) -> i64 {
    let (low, high) = easy_num_interval(negative, min_choices);
    rng.gen_range(low..=high)
}

/// Draws one of 1/3, 1/2 or 1/4 uniformly.
pub fn rand_simple_fraction<R: Rng + ?Sized>(rng: &mut R) -> Q {
    let (num, den) = SIMPLE_FRACTIONS.choose(rng).copied().unwrap_or((1, 2));
    Q::new(num, den)
}

/// Draws the leading coefficient of a generated polynomial.
///
/// Each of 1, -1, a positive simple fraction and a negative simple
/// fraction has probability 1/4.
pub fn random_leading_coefficient<R: Rng + ?Sized>(rng: &mut R) -> Q {
    let negative = rng.gen_bool(0.5);
    let magnitude = if rng.gen_bool(0.5) {
        Q::from_integer(1)
    } else {
        rand_simple_fraction(rng)
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
