//! Fixed-width text rendering of salary slips.
//!
//! The report is a box drawn with `+`, `-`, `=` and `|`. Amounts are
//! right-aligned in a fixed column with exactly two decimal places, so the
//! same slip and layout always render to the same bytes.

use std::fmt::Write;

use crate::config::{MIN_SLIP_WIDTH, SlipLayout};
use crate::error::{EngineError, EngineResult};
use crate::models::{SalarySlip, format_amount};

const AMOUNT_WIDTH: usize = 16;
const KEY_WIDTH: usize = 15;
// Longest fixed label ("Net Salary (In Hand)").
const LABEL_WIDTH: usize = 20;

/// Renders a slip with the default layout.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::net_salary;
/// use payroll_engine::models::Payroll;
/// use payroll_engine::slip::{build_slip, format_slip};
/// use rust_decimal::Decimal;
///
/// let mut payroll = Payroll::new(12, "Dec-2025", Decimal::new(30000, 0));
/// net_salary(&mut payroll)?;
///
/// let text = format_slip(&build_slip(&payroll)?)?;
/// assert!(text.contains("Net Salary (In Hand)"));
/// assert!(text.contains("30000.00"));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn format_slip(slip: &SalarySlip) -> EngineResult<String> {
    format_slip_with(slip, &SlipLayout::default())
}

/// Renders a slip with the given layout.
pub fn format_slip_with(slip: &SalarySlip, layout: &SlipLayout) -> EngineResult<String> {
    let mut out = String::new();
    write_slip(slip, layout, &mut out)?;
    Ok(out)
}

/// Writes a rendered slip into `out`.
///
/// The amount column widens to fit the longest amount; amounts are never
/// cut short. Fails before writing anything with
/// [`EngineError::LayoutTooNarrow`] if the layout is narrower than
/// [`MIN_SLIP_WIDTH`], or with [`EngineError::AmountTooWide`] if the widest
/// amount leaves no room for its label.
pub fn write_slip<W: Write>(
    slip: &SalarySlip,
    layout: &SlipLayout,
    out: &mut W,
) -> EngineResult<()> {
    if layout.width < MIN_SLIP_WIDTH {
        return Err(EngineError::LayoutTooNarrow {
            width: layout.width,
            minimum: MIN_SLIP_WIDTH,
        });
    }

    let earnings: Vec<(&str, String)> = std::iter::once(("Basic Salary", slip.basic_salary))
        .chain(slip.allowances.items())
        .chain(std::iter::once(("Total Earnings", slip.gross_salary)))
        .map(|(label, value)| (label, format_amount(value)))
        .collect();
    let deductions: Vec<(&str, String)> = slip
        .deductions
        .items()
        .into_iter()
        .chain(std::iter::once(("Total Deductions", slip.total_deductions)))
        .map(|(label, value)| (label, format_amount(value)))
        .collect();
    let net = format_amount(slip.net_salary);

    let inner = layout.width - 4;
    let widest = earnings
        .iter()
        .chain(&deductions)
        .map(|(_, value)| value)
        .chain(std::iter::once(&net))
        .max_by_key(|value| value.len())
        .unwrap_or(&net);
    let amount_width = AMOUNT_WIDTH.max(widest.len());
    if inner < amount_width + LABEL_WIDTH {
        return Err(EngineError::AmountTooWide {
            amount: widest.clone(),
            width: layout.width,
        });
    }

    let mut w = SlipWriter {
        out,
        inner,
        amount_width,
    };

    w.rule('-')?;
    w.centered(&layout.title)?;
    w.rule('-')?;

    w.field("Employee Name", &slip.employee.name)?;
    w.field("Employee No.", &slip.employee.employee_number)?;
    w.field("Employee ID", &slip.employee_id.to_string())?;
    w.field("Designation", &slip.employee.designation)?;
    w.field("Department", &slip.employee.department)?;
    w.field("Payroll ID", &slip.payroll_id.to_string())?;
    w.rule('-')?;

    let period = if slip.period_start == slip.period_end {
        slip.period_start.clone()
    } else {
        format!("{} to {}", slip.period_start, slip.period_end)
    };
    w.field("Pay Period", &period)?;
    w.rule('-')?;

    w.column("EARNINGS", "Amount")?;
    for (label, value) in &earnings {
        w.column(label, value)?;
    }
    w.rule('-')?;

    w.column("DEDUCTIONS", "Amount")?;
    for (label, value) in &deductions {
        w.column(label, value)?;
    }
    w.rule('=')?;

    w.column("Net Salary (In Hand)", &net)?;
    w.column("Payment Status", &slip.payment_status)?;
    w.rule('-')?;

    Ok(())
}

struct SlipWriter<'a, W> {
    out: &'a mut W,
    inner: usize,
    amount_width: usize,
}

impl<W: Write> SlipWriter<'_, W> {
    fn rule(&mut self, fill: char) -> std::fmt::Result {
        let line: String = std::iter::repeat_n(fill, self.inner + 2).collect();
        writeln!(self.out, "+{}+", line)
    }

    fn centered(&mut self, text: &str) -> std::fmt::Result {
        let inner = self.inner;
        writeln!(self.out, "| {:^inner$} |", fit(text, inner))
    }

    fn line(&mut self, text: &str) -> std::fmt::Result {
        let inner = self.inner;
        writeln!(self.out, "| {:<inner$} |", fit(text, inner))
    }

    fn field(&mut self, key: &str, value: &str) -> std::fmt::Result {
        self.line(&format!("{:<KEY_WIDTH$}: {}", key, value))
    }

    fn column(&mut self, label: &str, value: &str) -> std::fmt::Result {
        let amount_width = self.amount_width;
        let label_width = self.inner - amount_width;
        writeln!(
            self.out,
            "| {:<label_width$}{:>amount_width$} |",
            fit(label, label_width),
            fit(value, amount_width)
        )
    }
}

fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
