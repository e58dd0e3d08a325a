//! CSV export functionality
//!
//! Two layouts: flat rows for importing into other tools, and a
//! spreadsheet-style sheet meant to be opened and read as-is.

use std::io::Write;

use crate::error::BudgetResult;
use crate::models::Ledger;

use super::export_error;

/// Title written in the first row of the sheet layout
pub const SHEET_TITLE: &str = "My Monthly Budget";

/// Export one row per subcategory: `Category,Subcategory,Amount`
pub fn export_rows_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> BudgetResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(["Category", "Subcategory", "Amount"])
        .map_err(export_error)?;

    for row in ledger.rows() {
        let amount = format!("{:.2}", row.amount);
        csv.write_record([
            row.category.as_str(),
            row.subcategory.as_str(),
            amount.as_str(),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(export_error)?;
    Ok(())
}

/// Export the spreadsheet layout
///
/// A title row and a blank row, then for every category a header row with
/// the title in the first column, one row per subcategory with the label and
/// amount in the second and third columns, and a blank separator row.
pub fn export_sheet_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> BudgetResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record([SHEET_TITLE, "", ""]).map_err(export_error)?;
    csv.write_record(["", "", ""]).map_err(export_error)?;

    for category in ledger.categories() {
        csv.write_record([category.title.as_str(), "", ""])
            .map_err(export_error)?;

        for sub in &category.subcategories {
            let amount = format!("{:.2}", sub.amount());
            csv.write_record(["", sub.label.as_str(), amount.as_str()])
                .map_err(export_error)?;
        }

        csv.write_record(["", "", ""]).map_err(export_error)?;
    }

    csv.flush().map_err(export_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Subcategory};

    fn sample_ledger() -> Ledger {
        Ledger::from_categories(vec![
            Category::new("Food")
                .with_subcategory(Subcategory::with_value("Groceries", "120.5"))
                .with_subcategory(Subcategory::with_value("Dining, takeout", "abc")),
            Category::new("Loans"),
        ])
    }

    #[test]
    fn test_export_rows_csv() {
        let mut out = Vec::new();
        export_rows_csv(&sample_ledger(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Category,Subcategory,Amount");
        assert_eq!(lines[1], "Food,Groceries,120.50");
        assert_eq!(lines[2], "Food,\"Dining, takeout\",0.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_rows_csv_readable_by_csv_reader() {
        let mut out = Vec::new();
        export_rows_csv(&sample_ledger(), &mut out).unwrap();

        let mut reader = ::csv::Reader::from_reader(out.as_slice());
        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][1], "Dining, takeout");
    }

    #[test]
    fn test_export_sheet_csv() {
        let mut out = Vec::new();
        export_sheet_csv(&sample_ledger(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "My Monthly Budget,,");
        assert_eq!(lines[1], ",,");
        assert_eq!(lines[2], "Food,,");
        assert_eq!(lines[3], ",Groceries,120.50");
        assert_eq!(lines[4], ",\"Dining, takeout\",0.00");
        assert_eq!(lines[5], ",,");
        assert_eq!(lines[6], "Loans,,");
        assert_eq!(lines[7], ",,");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_export_empty_ledger() {
        let mut out = Vec::new();
        export_rows_csv(&Ledger::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Category,Subcategory,Amount\n");
    }
}
