//! Configuration types for payroll processing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the standard
//! income-tax slab table used when no configuration is loaded.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The narrowest slip layout the formatter can render.
pub const MIN_SLIP_WIDTH: usize = 48;

/// The default slip width in characters.
pub const DEFAULT_SLIP_WIDTH: usize = 64;

/// The default slip title.
pub const DEFAULT_SLIP_TITLE: &str = "SALARY SLIP";

static STANDARD_TAX_SLABS: LazyLock<TaxSlabTable> = LazyLock::new(|| TaxSlabTable {
    slabs: vec![
        TaxSlab::bounded(Decimal::ZERO, Decimal::new(250_000, 0), Decimal::ZERO),
        TaxSlab::bounded(
            Decimal::new(250_000, 0),
            Decimal::new(500_000, 0),
            Decimal::new(5, 2),
        ),
        TaxSlab::bounded(
            Decimal::new(500_000, 0),
            Decimal::new(1_000_000, 0),
            Decimal::new(20, 2),
        ),
        TaxSlab::bounded(
            Decimal::new(1_000_000, 0),
            Decimal::new(1_500_000, 0),
            Decimal::new(30, 2),
        ),
        TaxSlab {
            lower: Decimal::new(1_500_000, 0),
            upper: None,
            rate: Decimal::new(30, 2),
        },
    ],
});

/// One income-tax slab: a range of annual income taxed at a marginal rate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxSlab {
    /// Income at which the slab starts (exclusive of income below it).
    pub lower: Decimal,
    /// Income at which the slab ends; `None` for the top slab.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Marginal rate as a fraction (0.05 for 5%).
    pub rate: Decimal,
}

impl TaxSlab {
    fn bounded(lower: Decimal, upper: Decimal, rate: Decimal) -> Self {
        Self {
            lower,
            upper: Some(upper),
            rate,
        }
    }
}

/// A progressive income-tax table.
///
/// Slabs are contiguous and ascending: the first starts at zero, each
/// starts where the previous one ends, and only the last is unbounded.
/// Tables can only be obtained through [`TaxSlabTable::standard`] or
/// [`TaxSlabTable::new`], which enforces those rules.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxSlabTable;
///
/// let table = TaxSlabTable::standard();
/// assert_eq!(table.slabs().len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSlabTable {
    slabs: Vec<TaxSlab>,
}

impl TaxSlabTable {
    /// Builds a table, checking that the slabs form a contiguous ladder.
    pub fn new(slabs: Vec<TaxSlab>) -> EngineResult<Self> {
        let invalid = |message: String| Err(EngineError::InvalidConfig { message });

        let Some(first) = slabs.first() else {
            return invalid("tax slab table is empty".to_string());
        };
        if !first.lower.is_zero() {
            return invalid(format!("first tax slab must start at 0, not {}", first.lower));
        }

        let last_index = slabs.len() - 1;
        for (index, slab) in slabs.iter().enumerate() {
            if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
                return invalid(format!(
                    "tax slab {} has rate {} outside 0..=1",
                    index + 1,
                    slab.rate
                ));
            }
            match slab.upper {
                Some(upper) if upper <= slab.lower => {
                    return invalid(format!(
                        "tax slab {} ends at {} which is not above its start {}",
                        index + 1,
                        upper,
                        slab.lower
                    ));
                }
                None if index != last_index => {
                    return invalid(format!(
                        "only the last tax slab may be unbounded (slab {} is not last)",
                        index + 1
                    ));
                }
                _ => {}
            }
            if let Some(next) = slabs.get(index + 1) {
                if slab.upper != Some(next.lower) {
                    return invalid(format!(
                        "tax slab {} starts at {} but the previous slab ends at {}",
                        index + 2,
                        next.lower,
                        slab.upper.map_or_else(|| "infinity".to_string(), |u| u.to_string())
                    ));
                }
            }
        }

        Ok(Self { slabs })
    }

    /// Returns the process-wide standard slab table.
    ///
    /// 0 to 250,000 at 0%, to 500,000 at 5%, to 1,000,000 at 20%,
    /// to 1,500,000 at 30%, and 30% above that.
    pub fn standard() -> &'static TaxSlabTable {
        &STANDARD_TAX_SLABS
    }

    /// Returns the slabs in ascending order.
    pub fn slabs(&self) -> &[TaxSlab] {
        &self.slabs
    }
}

/// Tax slab file structure (`tax_slabs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSlabsFile {
    /// The slabs, lowest first.
    pub slabs: Vec<TaxSlab>,
}

/// Layout of the rendered salary slip (`slip_layout.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlipLayout {
    /// Title printed in the slip header.
    pub title: String,
    /// Total line width in characters, including the box borders.
    pub width: usize,
}

impl Default for SlipLayout {
    fn default() -> Self {
        Self {
            title: DEFAULT_SLIP_TITLE.to_string(),
            width: DEFAULT_SLIP_WIDTH,
        }
    }
}

/// The complete payroll configuration.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    tax_slabs: TaxSlabTable,
    slip_layout: SlipLayout,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(tax_slabs: TaxSlabTable, slip_layout: SlipLayout) -> Self {
        Self {
            tax_slabs,
            slip_layout,
        }
    }

    /// Returns the income-tax slab table.
    pub fn tax_slabs(&self) -> &TaxSlabTable {
        &self.tax_slabs
    }

    /// Returns the slip layout.
    pub fn slip_layout(&self) -> &SlipLayout {
        &self.slip_layout
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self::new(TaxSlabTable::standard().clone(), SlipLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn slab(lower: &str, upper: Option<&str>, rate: &str) -> TaxSlab {
        TaxSlab {
            lower: dec(lower),
            upper: upper.map(dec),
            rate: dec(rate),
        }
    }

    fn assert_invalid(result: EngineResult<TaxSlabTable>, needle: &str) {
        match result {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains(needle), "unexpected message: {}", message)
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_standard_table_thresholds() {
        let table = TaxSlabTable::standard();
        let lowers: Vec<Decimal> = table.slabs().iter().map(|s| s.lower).collect();
        assert_eq!(
            lowers,
            vec![
                dec("0"),
                dec("250000"),
                dec("500000"),
                dec("1000000"),
                dec("1500000")
            ]
        );
        assert!(table.slabs().last().unwrap().upper.is_none());
    }

    #[test]
    fn test_standard_table_passes_validation() {
        let table = TaxSlabTable::standard();
        let rebuilt = TaxSlabTable::new(table.slabs().to_vec()).unwrap();
        assert_eq!(&rebuilt, table);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert_invalid(TaxSlabTable::new(vec![]), "empty");
    }

    #[test]
    fn test_table_must_start_at_zero() {
        assert_invalid(
            TaxSlabTable::new(vec![slab("100", None, "0.1")]),
            "must start at 0",
        );
    }

    #[test]
    fn test_gap_between_slabs_is_rejected() {
        assert_invalid(
            TaxSlabTable::new(vec![
                slab("0", Some("100"), "0"),
                slab("200", None, "0.1"),
            ]),
            "previous slab ends at 100",
        );
    }

    #[test]
    fn test_unbounded_middle_slab_is_rejected() {
        assert_invalid(
            TaxSlabTable::new(vec![slab("0", None, "0"), slab("100", None, "0.1")]),
            "only the last tax slab",
        );
    }

    #[test]
    fn test_rate_above_one_is_rejected() {
        assert_invalid(
            TaxSlabTable::new(vec![slab("0", None, "1.5")]),
            "outside 0..=1",
        );
    }

    #[test]
    fn test_inverted_slab_is_rejected() {
        assert_invalid(
            TaxSlabTable::new(vec![slab("0", Some("0"), "0")]),
            "not above its start",
        );
    }

    #[test]
    fn test_slip_layout_defaults() {
        let layout = SlipLayout::default();
        assert_eq!(layout.title, "SALARY SLIP");
        assert_eq!(layout.width, DEFAULT_SLIP_WIDTH);
    }

    #[test]
    fn test_slip_layout_partial_yaml_uses_defaults() {
        let layout: SlipLayout = serde_yaml::from_str("title: PAY ADVICE").unwrap();
        assert_eq!(layout.title, "PAY ADVICE");
        assert_eq!(layout.width, DEFAULT_SLIP_WIDTH);
    }
}
