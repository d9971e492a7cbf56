use crate::domain::Money;

pub fn sum_money<I>(values: I) -> Money
where
    I: IntoIterator<Item = Money>,
{
    values.into_iter().sum()
}

/// Arithmetic mean rounded half-up (toward positive infinity on ties).
/// An empty input averages to zero.
pub fn mean_rounded<I>(values: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0i128, 0i128), |(sum, count), value| {
            (sum + i128::from(value), count + 1)
        });
    if count == 0 {
        return 0;
    }
    ((2 * sum + count).div_euclid(2 * count)) as i64
}

/// `part` as a whole-number percentage of `whole`, rounded half-up.
pub fn percent_rounded(part: i64, whole: i64) -> i64 {
    if whole <= 0 {
        return 0;
    }
    let part = i128::from(part);
    let whole = i128::from(whole);
    ((200 * part + whole).div_euclid(2 * whole)) as i64
}

#[cfg(test)]
mod tests {
    use super::{mean_rounded, percent_rounded, sum_money};
    use crate::domain::Money;

    #[test]
    fn mean_rounds_half_up() {
        assert_eq!(mean_rounded([1, 2]), 2);
        assert_eq!(mean_rounded([1, 2, 2]), 2);
        assert_eq!(mean_rounded([45, 32, 12, 52, 28, 8, 18, 5]), 25);
        assert_eq!(mean_rounded([-1, -2]), -1);
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean_rounded(Vec::<i64>::new()), 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_rounded(1, 8), 13);
        assert_eq!(percent_rounded(3, 12), 25);
        assert_eq!(percent_rounded(5, 0), 0);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(sum_money(Vec::new()), Money::ZERO);
    }
}
