use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Monetary amount in euro cents.
///
/// Kept as integer cents so aggregates never accumulate float error;
/// the spreadsheet side deals in messy strings anyway, and the store
/// side gets a plain INTEGER column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Importe(i64);

impl Importe {
    pub const ZERO: Importe = Importe(0);

    pub fn from_cents(cents: i64) -> Self {
        Importe(cents)
    }

    /// Round a euro value to cents. Only used at normalization
    /// boundaries, never for arithmetic on already-normalized values.
    pub fn from_euros(euros: f64) -> Self {
        Importe((euros * 100.0).round() as i64)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Importe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Importe {
    type Output = Importe;
    fn add(self, rhs: Importe) -> Importe {
        Importe(self.0 + rhs.0)
    }
}

impl AddAssign for Importe {
    fn add_assign(&mut self, rhs: Importe) {
        self.0 += rhs.0;
    }
}

impl Sub for Importe {
    type Output = Importe;
    fn sub(self, rhs: Importe) -> Importe {
        Importe(self.0 - rhs.0)
    }
}

impl Sum for Importe {
    fn sum<I: Iterator<Item = Importe>>(iter: I) -> Importe {
        iter.fold(Importe::ZERO, |acc, x| acc + x)
    }
}

impl Serialize for Importe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}
