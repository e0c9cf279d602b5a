//! Forecast table export and display formatting
//!
//! The CSV export writes raw values; the thousands-separated two-decimal
//! formatting is for console display only.

use std::io;

use chrono::{Months, NaiveDate};

use crate::projection::{EconomicsConfig, EvaluationResult, MonthlyRecord, TotalsRecord};

/// Calendar label for a 1-indexed period against an effective date
pub fn calendar_label(effective_date: NaiveDate, period: u32) -> String {
    effective_date
        .checked_add_months(Months::new(period - 1))
        .map(|date| date.format("%Y-%m").to_string())
        .unwrap_or_default()
}

/// Format a value with thousands separators and two decimals, display only
pub fn format_display(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

fn header(detailed: bool, with_month: bool) -> Vec<&'static str> {
    let mut columns = vec!["period"];
    if with_month {
        columns.push("month");
    }
    columns.extend([
        "gross_oil_prod",
        "gross_gas_prod",
        "gross_ngl_prod",
        "gross_water_prod",
    ]);
    if detailed {
        columns.extend(["wi_oil_prod", "wi_gas_prod", "wi_ngl_prod", "wi_water_prod"]);
    }
    columns.extend([
        "net_oil_prod",
        "net_gas_prod",
        "net_ngl_prod",
        "realized_oil_price",
        "realized_gas_price",
        "realized_ngl_price",
        "oil_revenue",
        "gas_revenue",
        "ngl_revenue",
        "total_revenue",
        "fixed_loe",
        "variable_loe_oil",
        "variable_loe_gas",
        "variable_loe_water",
        "total_variable_loe",
        "gcp",
        "prod_tax",
        "ad_val_tax",
        "total_expenses",
    ]);
    if detailed {
        columns.extend(["drilling_capex", "completion_capex"]);
    }
    columns.extend(["d_and_c", "undisc_cf"]);
    if detailed {
        columns.extend(["discount_factor", "pv"]);
    }
    columns.push("cum_pv");
    columns
}

fn row_fields(row: &MonthlyRecord, detailed: bool, month: Option<String>) -> Vec<String> {
    let mut fields = vec![row.period.to_string()];
    if let Some(label) = month {
        fields.push(label);
    }
    fields.extend([
        row.gross_oil.to_string(),
        row.gross_gas.to_string(),
        row.gross_ngl.to_string(),
        row.gross_water.to_string(),
    ]);
    if detailed {
        fields.extend([
            row.wi_oil.to_string(),
            row.wi_gas.to_string(),
            row.wi_ngl.to_string(),
            row.wi_water.to_string(),
        ]);
    }
    fields.extend([
        row.net_oil.to_string(),
        row.net_gas.to_string(),
        row.net_ngl.to_string(),
        row.oil_price.to_string(),
        row.gas_price.to_string(),
        row.ngl_price.to_string(),
        row.oil_revenue.to_string(),
        row.gas_revenue.to_string(),
        row.ngl_revenue.to_string(),
        row.total_revenue.to_string(),
        row.fixed_loe.to_string(),
        row.variable_loe_oil.to_string(),
        row.variable_loe_gas.to_string(),
        row.variable_loe_water.to_string(),
        row.total_variable_loe.to_string(),
        row.gcp.to_string(),
        row.prod_tax.to_string(),
        row.ad_val_tax.to_string(),
        row.total_expenses.to_string(),
    ]);
    if detailed {
        fields.extend([row.drilling_capex.to_string(), row.completion_capex.to_string()]);
    }
    fields.extend([row.total_capex.to_string(), row.undisc_cf.to_string()]);
    if detailed {
        fields.extend([row.discount_factor.to_string(), row.pv.to_string()]);
    }
    fields.push(row.cum_pv.to_string());
    fields
}

fn totals_fields(totals: &TotalsRecord, detailed: bool, with_month: bool) -> Vec<String> {
    let mut fields = vec!["total".to_string()];
    if with_month {
        fields.push(String::new());
    }
    fields.extend([
        totals.gross_oil.to_string(),
        totals.gross_gas.to_string(),
        totals.gross_ngl.to_string(),
        totals.gross_water.to_string(),
    ]);
    if detailed {
        fields.extend([
            totals.wi_oil.to_string(),
            totals.wi_gas.to_string(),
            totals.wi_ngl.to_string(),
            totals.wi_water.to_string(),
        ]);
    }
    fields.extend([
        totals.net_oil.to_string(),
        totals.net_gas.to_string(),
        totals.net_ngl.to_string(),
        totals.oil_price.to_string(),
        totals.gas_price.to_string(),
        totals.ngl_price.to_string(),
        totals.oil_revenue.to_string(),
        totals.gas_revenue.to_string(),
        totals.ngl_revenue.to_string(),
        totals.total_revenue.to_string(),
        totals.fixed_loe.to_string(),
        totals.variable_loe_oil.to_string(),
        totals.variable_loe_gas.to_string(),
        totals.variable_loe_water.to_string(),
        totals.total_variable_loe.to_string(),
        totals.gcp.to_string(),
        totals.prod_tax.to_string(),
        totals.ad_val_tax.to_string(),
        totals.total_expenses.to_string(),
    ]);
    if detailed {
        fields.extend([
            totals.drilling_capex.to_string(),
            totals.completion_capex.to_string(),
        ]);
    }
    fields.extend([totals.total_capex.to_string(), totals.undisc_cf.to_string()]);
    if detailed {
        fields.extend([totals.discount_factor.to_string(), totals.pv.to_string()]);
    }
    // Cumulative PV is not meaningfully summable
    fields.push(String::new());
    fields
}

/// Write the forecast table (plus totals row) as CSV
pub fn write_csv<W: io::Write>(
    writer: W,
    result: &EvaluationResult,
    config: &EconomicsConfig,
) -> Result<(), csv::Error> {
    let detailed = config.detailed_output;
    let with_month = config.effective_date.is_some();
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(header(detailed, with_month))?;

    for row in &result.rows {
        let month = config
            .effective_date
            .map(|date| calendar_label(date, row.period));
        csv_writer.write_record(row_fields(row, detailed, month))?;
    }

    csv_writer.write_record(totals_fields(&result.totals, detailed, with_month))?;
    csv_writer.flush()?;
    Ok(())
}
