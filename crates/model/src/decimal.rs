use std::{
    fmt::{Debug, Display},
    iter::Sum,
    str::FromStr,
};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

const DECIMALS: u32 = 2;
const SCALE: i64 = 10i64.pow(DECIMALS);

/// Money amount stored as an integer number of minor units (cents).
///
/// Addition and subtraction saturate at the `i64` bounds.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(i64);

impl Decimal {
    pub fn int(value: i64) -> Decimal {
        Decimal(value.saturating_mul(SCALE))
    }

    pub fn from_minor(minor: i64) -> Decimal {
        Decimal(minor)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn zero() -> Decimal {
        Decimal(0)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    /// Splits the amount evenly over `count`, truncating to a cent.
    /// Zero count yields zero.
    pub fn div_count(&self, count: u32) -> Decimal {
        if count == 0 {
            Decimal::zero()
        } else {
            Decimal(self.0 / count as i64)
        }
    }

    /// `self / other` as a plain ratio, zero when `other` is zero.
    pub fn ratio(&self, other: Decimal) -> f64 {
        if other.is_zero() {
            0.0
        } else {
            self.0 as f64 / other.0 as f64
        }
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = ParseDecimalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        let (negative, digits) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value.strip_prefix('+').unwrap_or(value)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseDecimalError);
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(ParseDecimalError);
        }

        let int_value = if int_part.is_empty() {
            0
        } else {
            int_part.parse::<i64>().map_err(|_| ParseDecimalError)?
        };
        // Digits past the second fractional place are dropped.
        let frac_bytes = frac_part.as_bytes();
        let mut minor = 0i64;
        for idx in 0..DECIMALS as usize {
            minor *= 10;
            if let Some(digit) = frac_bytes.get(idx) {
                minor += (digit - b'0') as i64;
            }
        }

        let value = int_value
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(minor))
            .ok_or(ParseDecimalError)?;
        Ok(Decimal(if negative { -value } else { value }))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::try_from(s)
    }
}

impl std::ops::AddAssign for Decimal {
    fn add_assign(&mut self, other: Decimal) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::SubAssign for Decimal {
    fn sub_assign(&mut self, other: Decimal) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, other: Decimal) -> Decimal {
        Decimal(self.0.saturating_add(other.0))
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;

    fn sub(self, other: Decimal) -> Decimal {
        Decimal(self.0.saturating_sub(other.0))
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Decimal {
        iter.copied().sum()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseDecimalError;

impl std::fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse decimal value")
    }
}

impl std::error::Error for ParseDecimalError {}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Decimal::try_from(value.as_str()).map_err(D::Error::custom)
    }
}
