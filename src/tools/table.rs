//! Table printer for `a_n = (2n)^p + (3n)^q`.

use std::fmt;

/// Cells per printed line.
const CELLS_PER_LINE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaTable {
    pub n: u32,
    pub p: f64,
    pub q: f64,
}

pub fn formula(n: u32, p: f64, q: f64) -> f64 {
    let n = f64::from(n);
    (n * 2.0).powf(p) + (n * 3.0).powf(q)
}

impl FormulaTable {
    pub fn new(n: u32, p: f64, q: f64) -> Self {
        Self { n, p, q }
    }

    /// `(i, a_i)` for `i` in `0..=n`.
    pub fn rows(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (0..=self.n).map(|i| (i, formula(i, self.p, self.q)))
    }

    /// Whether a blank line follows cell `i`. Never after the last cell.
    fn ends_line(&self, i: u32) -> bool {
        i % CELLS_PER_LINE == CELLS_PER_LINE - 1 && i != self.n
    }

    pub fn max_value(&self) -> f64 {
        formula(self.n, self.p, self.q)
    }

    /// `int(2^p * 3^q * (n + 1)) - 1`
    pub fn threshold(&self) -> i64 {
        let scaled = 2f64.powf(self.p) * 3f64.powf(self.q) * (f64::from(self.n) + 1.0);
        (scaled as i64).saturating_sub(1)
    }
}

impl fmt::Display for FormulaTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a_i) in self.rows() {
            write!(f, "{:^3} {:^10} ", i, a_i as i64)?;
            if self.ends_line(i) {
                write!(f, "\n\n")?;
            }
        }

        let rule = "-".repeat(self.n as usize * 3 + 19);
        writeln!(f, "\n{} |", rule)?;
        let max = format!("{:?}", self.max_value());
        writeln!(f, "\nMax a_n: {:^10} for n >= {}", max, self.threshold())
    }
}
