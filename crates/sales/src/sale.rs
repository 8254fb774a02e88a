use std::io::{self, Write};

use chrono::NaiveDate;

use stockroom_core::{Entity, Money};

stockroom_core::numeric_id! {
    /// Sale identifier.
    pub struct SaleId;
}

/// A completed sale.
#[derive(Debug, Clone)]
pub struct Sale {
    id: SaleId,
    date: NaiveDate,
    total_amount: Money,
}

impl Sale {
    pub fn new(id: SaleId, date: NaiveDate, total_amount: Money) -> Self {
        Self {
            id,
            date,
            total_amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Write the one-line receipt to `out`.
    pub fn write_receipt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Receipt: Sale ID={}, Date={}, Total={}",
            self.id, self.date, self.total_amount
        )
    }

    /// Print the receipt to standard output.
    ///
    /// A closed or broken stdout is logged, not reported.
    pub fn print_receipt(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.write_receipt(&mut out).and_then(|()| out.flush()) {
            tracing::warn!(sale_id = %self.id, error = %err, "failed to print receipt");
        }
    }
}

impl Entity for Sale {
    type Id = SaleId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Sale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Sale(id={}, date={}, total={})",
            self.id, self.date, self.total_amount
        )
    }
}
