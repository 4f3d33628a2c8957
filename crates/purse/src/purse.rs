use core::str::FromStr;

use wizcoin_core::{DomainError, DomainResult, ValueObject};

use crate::denomination::Denomination;

/// Value object: a fixed amount of money held as coin counts.
///
/// Counts are unsigned, so a purse can never hold a negative number of coins.
/// Once built the counts never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoinPurse {
    galleons: u32,
    sickles: u32,
    knuts: u32,
}

impl ValueObject for CoinPurse {}

impl CoinPurse {
    pub const fn new(galleons: u32, sickles: u32, knuts: u32) -> Self {
        Self {
            galleons,
            sickles,
            knuts,
        }
    }

    /// Build a purse from signed, unchecked counts.
    ///
    /// Rejects negative counts and counts that do not fit in `u32`.
    pub fn try_new(galleons: i64, sickles: i64, knuts: i64) -> DomainResult<Self> {
        Ok(Self::new(
            checked_count(Denomination::Galleon, galleons)?,
            checked_count(Denomination::Sickle, sickles)?,
            checked_count(Denomination::Knut, knuts)?,
        ))
    }

    pub fn galleons(&self) -> u32 {
        self.galleons
    }

    pub fn sickles(&self) -> u32 {
        self.sickles
    }

    pub fn knuts(&self) -> u32 {
        self.knuts
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Galleon => self.galleons,
            Denomination::Sickle => self.sickles,
            Denomination::Knut => self.knuts,
        }
    }

    /// Total value of the purse in knuts.
    ///
    /// `u32::MAX * 523` still fits in a `u64`, so this cannot overflow.
    pub fn value(&self) -> u64 {
        Denomination::ALL
            .iter()
            .map(|d| u64::from(self.count(*d)) * d.knuts_per_coin())
            .sum()
    }

    /// Total weight of the coins in grams.
    pub fn weight_in_grams(&self) -> f64 {
        // Summed galleons, sickles, knuts in that order; the printed weights
        // depend on the rounding of this exact sequence.
        f64::from(self.galleons) * Denomination::Galleon.grams_per_coin()
            + f64::from(self.sickles) * Denomination::Sickle.grams_per_coin()
            + f64::from(self.knuts) * Denomination::Knut.grams_per_coin()
    }
}

fn checked_count(denomination: Denomination, count: i64) -> DomainResult<u32> {
    if count < 0 {
        tracing::debug!(%denomination, count, "rejected negative coin count");
        return Err(DomainError::validation(format!(
            "{denomination} cannot be negative (got {count})"
        )));
    }
    u32::try_from(count).map_err(|_| {
        tracing::debug!(%denomination, count, "rejected oversized coin count");
        DomainError::validation(format!(
            "{denomination} exceeds the maximum of {} (got {count})",
            u32::MAX
        ))
    })
}

impl core::fmt::Display for CoinPurse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("CoinPurse(")?;
        for (i, denomination) in Denomination::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", denomination.symbol(), self.count(*denomination))?;
        }
        f.write_str(")")
    }
}

/// Parses `"galleons,sickles,knuts"`, e.g. `"2, 5, 99"`.
impl FromStr for CoinPurse {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [g, sk, k] = parts.as_slice() else {
            return Err(DomainError::validation(format!(
                "expected three comma separated counts, got {:?}",
                s.trim()
            )));
        };

        let parse = |denomination: Denomination, raw: &str| {
            raw.parse::<i64>().map_err(|e| {
                DomainError::validation(format!("{denomination}: {raw:?} is not an integer ({e})"))
            })
        };

        Self::try_new(
            parse(Denomination::Galleon, *g)?,
            parse(Denomination::Sickle, *sk)?,
            parse(Denomination::Knut, *k)?,
        )
    }
}
