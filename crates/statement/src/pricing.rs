//! Pricing policy: charge and loyalty credits per performance.
//!
//! Genres are a closed set of variants. Parsing the catalog's open-ended genre
//! string is the only place an unknown genre can surface, so every rule below
//! is an exhaustive `match`. Supporting a new genre means adding a variant and
//! its two rules here; nothing downstream changes.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use playbill_core::{Cents, StatementError, StatementResult};

/// Genres with a pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }

    /// Charge for one performance, in cents.
    pub fn amount(self, audience: u32) -> Cents {
        let audience = u64::from(audience);
        let amount = match self {
            Genre::Tragedy => 40_000 + 1_000 * audience.saturating_sub(30),
            Genre::Comedy => {
                let surcharge = if audience > 20 {
                    10_000 + 500 * (audience - 20)
                } else {
                    0
                };
                30_000 + surcharge + 300 * audience
            }
        };
        Cents(amount)
    }

    /// Loyalty credits earned by one performance.
    pub fn credits(self, audience: u32) -> u64 {
        let audience = u64::from(audience);
        let base = audience.saturating_sub(30);
        match self {
            Genre::Comedy => base + audience / 5,
            Genre::Tragedy => base,
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(StatementError::unknown_genre(other)),
        }
    }
}

/// Charge for a performance of a play with the given genre.
///
/// Fails with `UnknownGenre` when the genre has no pricing rule.
pub fn amount_for(genre: &str, audience: u32) -> StatementResult<Cents> {
    let genre: Genre = genre.parse()?;
    Ok(genre.amount(audience))
}

/// Loyalty credits for a performance. The genre is already known-valid.
pub fn credits_for(genre: Genre, audience: u32) -> u64 {
    genre.credits(audience)
}
