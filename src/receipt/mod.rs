//! Receipt

use std::{fmt::Write, io};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use smallvec::{SmallVec, smallvec};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    analysis::{DealAnalysis, Savings},
    comparisons::VendorComparison,
    deals::Deal,
    pricing::{PricingError, subtract_amounts},
    request::DealRequest,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The selected vendor has no price for an item it was chosen for.
    #[error("no offer for {item} from {vendor}")]
    MissingOffer {
        /// Item name
        item: String,

        /// Vendor name
        vendor: String,
    },

    /// An amount does not fit in minor units.
    #[error("amount {0} cannot be represented in minor units")]
    AmountNotRepresentable(Decimal),

    /// Money arithmetic overflowed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Printable receipt for a deal, optionally with its single-vendor analysis.
#[derive(Debug, Clone, Copy)]
pub struct DealReceipt<'a> {
    request: &'a DealRequest,
    deal: &'a Deal,
    comparisons: Option<&'a [VendorComparison]>,
    savings: Option<&'a Savings>,
    currency: &'static Currency,
}

impl<'a> DealReceipt<'a> {
    /// Receipt for a plain deal.
    pub fn from_deal(request: &'a DealRequest, deal: &'a Deal, currency: &'static Currency) -> Self {
        DealReceipt {
            request,
            deal,
            comparisons: None,
            savings: None,
            currency,
        }
    }

    /// Receipt for an analysed deal, including comparisons and savings.
    pub fn from_analysis(
        request: &'a DealRequest,
        analysis: &'a DealAnalysis,
        currency: &'static Currency,
    ) -> Self {
        DealReceipt {
            request,
            deal: analysis.optimal(),
            comparisons: Some(analysis.comparisons()),
            savings: Some(analysis.savings()),
            currency,
        }
    }

    /// Currency used for all monetary values.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Writes the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if a selected offer cannot be found, an amount cannot be
    /// formatted, or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        self.write_purchase_table(&mut out)?;
        self.write_purchase_summary(&mut out)?;

        if let Some(comparisons) = self.comparisons {
            self.write_comparison_table(&mut out, comparisons)?;
        }

        if let Some(savings) = self.savings {
            self.write_savings_summary(&mut out, savings)?;
        }

        Ok(())
    }

    fn write_purchase_table(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();
        let mut color_ops: SmallVec<[(usize, usize, Color); 32]> = smallvec![];

        builder.push_record(["", "Item", "Vendor", "Price"]);

        let mut current_row = 1;

        for (idx, item) in self.request.cart.iter().enumerate() {
            let vendor = self.deal.selection().vendor_for(item).unwrap_or_default();
            let price = self.offer_price(item, vendor)?;

            builder.push_record([
                format!("#{:<3}", idx + 1),
                item.to_string(),
                vendor.to_string(),
                self.money(price)?,
            ]);

            current_row += 1;
        }

        let shipping_row = current_row;

        for vendor in self.deal.breakdown().vendors_used() {
            let fee = self.shipping_fee(vendor);

            builder.push_record([
                String::new(),
                "Shipping".to_string(),
                vendor.clone(),
                self.money(fee)?,
            ]);

            color_ops.push((current_row, 1, color_dark_grey()));

            current_row += 1;
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        if shipping_row > 1 {
            theme.insert_horizontal_line(shipping_row, separator);
        }

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..4), Alignment::right());

        for (row, col, color) in color_ops {
            table.modify((row, col), color);
        }

        writeln!(out, "\n{}", colorize_borders(&table.to_string())).map_err(|_err| ReceiptError::IO)
    }

    fn write_purchase_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let breakdown = self.deal.breakdown();

        let lines = [
            (" Items:".to_string(), format!("{}  ", self.money(breakdown.items_cost())?)),
            (
                format!(" Shipping ({}):", breakdown.vendor_count()),
                format!("{}  ", self.money(breakdown.shipping_cost())?),
            ),
            (
                " \x1b[1mTotal:\x1b[0m".to_string(),
                format!("\x1b[1m{}\x1b[0m  ", self.money(self.deal.total_cost())?),
            ),
        ];

        write_summary_lines(out, &lines)
    }

    fn write_comparison_table(
        &self,
        out: &mut impl io::Write,
        comparisons: &[VendorComparison],
    ) -> Result<(), ReceiptError> {
        if comparisons.is_empty() {
            return writeln!(out, "\n No single vendor stocks the whole cart.\n")
                .map_err(|_err| ReceiptError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["Single vendor", "Items", "Shipping", "Total", "Difference"]);

        for comparison in comparisons {
            let difference = subtract_amounts(comparison.total(), self.deal.total_cost())?;

            builder.push_record([
                comparison.vendor().to_string(),
                self.money(comparison.items_cost())?,
                self.money(comparison.shipping())?,
                self.money(comparison.total())?,
                self.signed_money(difference)?,
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..5), Alignment::right());

        writeln!(out, "\n{}", colorize_borders(&table.to_string())).map_err(|_err| ReceiptError::IO)
    }

    fn write_savings_summary(
        &self,
        out: &mut impl io::Write,
        savings: &Savings,
    ) -> Result<(), ReceiptError> {
        let lines = [
            (
                " Saved vs cheapest vendor:".to_string(),
                format!("{}  ", self.signed_money(savings.vs_cheapest_single_vendor())?),
            ),
            (
                " Saved vs dearest vendor:".to_string(),
                format!(
                    "({:.2}%) {}  ",
                    savings.percentage_saved(),
                    self.signed_money(savings.vs_most_expensive_vendor())?
                ),
            ),
        ];

        write_summary_lines(out, &lines)
    }

    fn offer_price(&self, item: &str, vendor: &str) -> Result<Decimal, ReceiptError> {
        self.request
            .vendors
            .iter()
            .filter_map(|entry| entry.validate().ok())
            .find(|entry| entry.name() == vendor)
            .and_then(|entry| entry.price_of(item))
            .ok_or_else(|| ReceiptError::MissingOffer {
                item: item.to_string(),
                vendor: vendor.to_string(),
            })
    }

    fn shipping_fee(&self, vendor: &str) -> Decimal {
        self.request
            .vendors
            .iter()
            .filter_map(|entry| entry.validate().ok())
            .find(|entry| entry.name() == vendor)
            .map_or(Decimal::ZERO, |entry| entry.shipping())
    }

    fn money(&self, amount: Decimal) -> Result<String, ReceiptError> {
        Ok(format!("{}", to_money(amount, self.currency)?))
    }

    /// Formats with an explicit sign so savings and losses read the same way.
    fn signed_money(&self, amount: Decimal) -> Result<String, ReceiptError> {
        let sign = if amount < Decimal::ZERO { "-" } else { "+" };

        Ok(format!("{sign}{}", to_money(amount.abs(), self.currency)?))
    }
}

/// Converts a decimal amount to money in minor units, rounding to the nearest unit.
fn to_money(amount: Decimal, currency: &'static Currency) -> Result<Money<'static, Currency>, ReceiptError> {
    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or(ReceiptError::AmountNotRepresentable(amount))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Writes right-aligned label/value summary lines.
fn write_summary_lines(
    out: &mut impl io::Write,
    lines: &[(String, String)],
) -> Result<(), ReceiptError> {
    let label_width = lines
        .iter()
        .map(|(label, _)| visible_width(label))
        .max()
        .unwrap_or_default();

    let value_width = lines
        .iter()
        .map(|(_, value)| visible_width(value))
        .max()
        .unwrap_or_default();

    for (label, value) in lines {
        write_summary_line(out, label, value, label_width, value_width)?;
    }

    writeln!(out).map_err(|_err| ReceiptError::IO)
}

/// Wraps runs of UTF-8 box-drawing characters in ANSI dark-grey escape codes.
///
/// Box-drawing characters occupy the Unicode range U+2500..U+257F.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let box_char = ('\u{2500}'..='\u{257F}').contains(&ch);

        if box_char && !in_run {
            _ = out.write_str("\x1b[90m");
            in_run = true;
        } else if !box_char && in_run {
            _ = out.write_str("\x1b[0m");
            in_run = false;
        }

        out.push(ch);
    }

    if in_run {
        _ = out.write_str("\x1b[0m");
    }

    out
}

/// Returns the visible (non-ANSI) width of a string.
fn visible_width(s: &str) -> usize {
    let mut width = 0usize;
    let mut in_escape = false;

    for ch in s.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }

    width
}

/// Writes a summary line with a right-aligned label and a fixed-width value column.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
    value_col_width: usize,
) -> Result<(), ReceiptError> {
    let label_pad = label_col_width.saturating_sub(visible_width(label));
    let value_pad = value_col_width.saturating_sub(visible_width(value));

    writeln!(
        out,
        "{:>label_pad$}{label}  {value_pad}{value}",
        "",
        value_pad = " ".repeat(value_pad)
    )
    .map_err(|_err| ReceiptError::IO)
}

/// ANSI dark grey foreground.
fn color_dark_grey() -> Color {
    Color::new("\x1b[90m", "\x1b[0m")
}
