//! Plain-text purse reports.

use std::io::{self, Write};

use wizcoin_purse::{CoinPurse, Denomination};

/// Write the four-line report for one purse.
///
/// The weight is printed with its fractional part even when whole
/// (`Weight: 5.0 grams`).
pub fn write_report<W: Write>(out: &mut W, purse: &CoinPurse) -> io::Result<()> {
    writeln!(out, "{purse}")?;
    writeln!(out, "{}", counts_line(purse))?;
    writeln!(out, "Total value: {}", purse.value())?;
    writeln!(out, "Weight: {:?} grams", purse.weight_in_grams())
}

/// Write a report per purse, each followed by a blank separator line.
pub fn write_reports<'a, W, I>(out: &mut W, purses: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a CoinPurse>,
{
    for purse in purses {
        write_report(out, purse)?;
        writeln!(out)?;
    }
    Ok(())
}

/// `G: 2 S: 5 K: 99`
fn counts_line(purse: &CoinPurse) -> String {
    Denomination::ALL
        .iter()
        .map(|d| format!("{}: {}", d.symbol(), purse.count(*d)))
        .collect::<Vec<_>>()
        .join(" ")
}
