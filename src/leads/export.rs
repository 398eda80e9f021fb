//! CSV export of the lead document.
//!
//! The header comes from the first record's field names (`email` first);
//! an empty export still carries the default header.

use super::LeadRecord;
use anyhow::{Context, Result};
use std::{borrow::Cow, fs, path::Path};

/// Header used when there are no records to derive one from.
const DEFAULT_HEADER: &[&str] = &["email", "source", "timestamp"];

/// Render `records` as CSV text, one row per record.
pub fn to_csv(records: &[LeadRecord]) -> String {
    let header: Vec<&str> = match records.first() {
        Some(first) => first.field_names(),
        None => DEFAULT_HEADER.to_vec(),
    };

    let mut out = String::new();
    push_row(&mut out, header.iter().map(|name| Cow::Borrowed(*name)));
    for record in records {
        // Fields outside the header are dropped; missing ones are left empty
        push_row(
            &mut out,
            header
                .iter()
                .map(|name| record.get(name).unwrap_or(Cow::Borrowed(""))),
        );
    }
    out
}

/// Write `records` as CSV to `path`.
pub fn export_csv(records: &[LeadRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, to_csv(records)).with_context(|| format!("Failed to write {}", path.display()))
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = Cow<'a, str>>) {
    let row: Vec<_> = cells.map(|cell| escape_cell(&cell).into_owned()).collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

/// Quote a cell containing a delimiter, quote or line break.
fn escape_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn record(email: &str, timestamp: &str) -> LeadRecord {
        LeadRecord {
            email: email.into(),
            source: "website".into(),
            timestamp: timestamp.into(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_empty_export_has_default_header() {
        assert_eq!(to_csv(&[]), "email,source,timestamp\n");
    }

    #[test]
    fn test_rows_follow_header() {
        let csv = to_csv(&[record("a@b.com", "t1"), record("c@d.com", "t2")]);
        assert_eq!(
            csv,
            "email,source,timestamp\na@b.com,website,t1\nc@d.com,website,t2\n"
        );
    }

    #[test]
    fn test_header_from_first_record() {
        let first: LeadRecord =
            serde_json::from_str(r#"{"email":"a@b.com","utm":"spring"}"#).unwrap();
        let second = record("c@d.com", "t2");

        let csv = to_csv(&[first, second]);
        assert_eq!(csv, "email,utm\na@b.com,spring\nc@d.com,\n");
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("plain"), "plain");
        assert_eq!(escape_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_export_csv_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exports/leads.csv");

        export_csv(&[record("a@b.com", "t1")], &path).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "email,source,timestamp\na@b.com,website,t1\n"
        );
    }
}
