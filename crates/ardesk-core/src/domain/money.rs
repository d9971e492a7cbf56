use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// An amount of money in minor currency units (cents, paise).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    pub fn minor_units(self) -> i64 {
        self.0
    }

    /// Whole major units, truncated toward zero.
    pub fn major_units(self) -> i64 {
        self.0 / 100
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Dashboard card form: `$950`, `$340K`, `$1.2M`.
    pub fn format_compact(self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let major = (self.0 / 100).abs();
        if major >= 1_000_000 {
            let tenths = (major + 50_000) / 100_000;
            format!("{sign}{symbol}{}.{}M", tenths / 10, tenths % 10)
        } else if major >= 1_000 {
            let thousands = (major + 500) / 1_000;
            format!("{sign}{symbol}{thousands}K")
        } else {
            format!("{sign}{symbol}{major}")
        }
    }

    /// Full form with thousands separators: `$96,250.00`.
    pub fn format_full(self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = group_thousands(abs / 100);
        format!("{sign}{symbol}{major}.{:02}", abs % 100)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
