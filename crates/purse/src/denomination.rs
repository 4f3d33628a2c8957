//! Coin denominations and their fixed exchange/weight table.

/// Sickles in one galleon.
pub const SICKLES_PER_GALLEON: u64 = 17;

/// Knuts in one sickle.
pub const KNUTS_PER_SICKLE: u64 = 29;

/// One of the three coins a purse can hold, highest value first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    Galleon,
    Sickle,
    Knut,
}

impl Denomination {
    /// All denominations, highest value first.
    pub const ALL: [Denomination; 3] = [
        Denomination::Galleon,
        Denomination::Sickle,
        Denomination::Knut,
    ];

    /// Value of a single coin expressed in knuts (the base unit).
    pub const fn knuts_per_coin(self) -> u64 {
        match self {
            Denomination::Galleon => SICKLES_PER_GALLEON * KNUTS_PER_SICKLE,
            Denomination::Sickle => KNUTS_PER_SICKLE,
            Denomination::Knut => 1,
        }
    }

    /// Weight of a single coin in grams.
    pub const fn grams_per_coin(self) -> f64 {
        match self {
            Denomination::Galleon => 31.103,
            Denomination::Sickle => 11.34,
            Denomination::Knut => 5.0,
        }
    }

    /// One-letter label used in purse text output.
    pub const fn symbol(self) -> &'static str {
        match self {
            Denomination::Galleon => "G",
            Denomination::Sickle => "S",
            Denomination::Knut => "K",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Denomination::Galleon => "galleons",
            Denomination::Sickle => "sickles",
            Denomination::Knut => "knuts",
        }
    }
}

impl core::fmt::Display for Denomination {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
