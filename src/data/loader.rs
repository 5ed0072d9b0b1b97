use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use super::model::{SectorDataset, SectorRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read the structured CSV at `path` and parse every data row.
///
/// Only the read can fail; parsing is best-effort (see [`parse_records`]).
pub fn load_file(path: &Path) -> Result<SectorDataset> {
    let raw = std::fs::read(path)
        .with_context(|| format!("reading sector data from {}", path.display()))?;
    let records = parse_records(&raw);
    log::info!("Parsed {} sector rows from {}", records.len(), path.display());
    Ok(SectorDataset {
        records,
        raw,
        source: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Column layout of the structured CSV (positional, header row first):
///
/// | idx | column                              |
/// |-----|-------------------------------------|
/// | 0   | sector                              |
/// | 1   | average breach cost (M USD)         |
/// | 2   | cost source                         |
/// | 3   | incident count                      |
/// | 4   | breach count                        |
/// | 5-7 | top attack patterns                 |
/// | 8   | primary motive                      |
/// | 9   | breach / incident ratio             |
///
/// Quoted fields and embedded commas are handled by the `csv` reader. Rows
/// shorter than ten columns are kept: missing text becomes empty, missing
/// numbers become NaN. Rows the reader cannot decode are logged and skipped.
pub fn parse_records(bytes: &[u8]) -> Vec<SectorRecord> {
    let mut records = Vec::new();
    for result in csv_reader(bytes).records() {
        match result {
            Ok(row) if row.iter().all(str::is_empty) => continue,
            Ok(row) => records.push(record_from_row(&row)),
            Err(e) => match error_line(&e) {
                Some(line) => log::warn!("Skipping CSV line {line}: {e}"),
                None => log::warn!("Skipping CSV row: {e}"),
            },
        }
    }
    records
}

fn csv_reader(bytes: &[u8]) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes)
}

/// File line (1-based, header included) where a failed record starts.
fn error_line(e: &csv::Error) -> Option<u64> {
    e.position().map(|pos| pos.line())
}

fn record_from_row(row: &StringRecord) -> SectorRecord {
    let text = |idx: usize| row.get(idx).unwrap_or("").to_string();
    let field = |idx: usize| row.get(idx).unwrap_or("");

    SectorRecord {
        sector: text(0),
        average_breach_cost_musd: parse_decimal(field(1)),
        cost_source: text(2),
        incident_count: parse_count(field(3)),
        breach_count: parse_count(field(4)),
        top_patterns: [text(5), text(6), text(7)],
        primary_motive: text(8),
        breach_to_incident_ratio: parse_decimal(field(9)),
    }
}

// ---------------------------------------------------------------------------
// Lenient numbers
// ---------------------------------------------------------------------------

/// Parse a decimal, falling back to its leading numeric prefix
/// (`"9.77M"` → 9.77). Returns NaN when there is no prefix.
pub fn parse_decimal(s: &str) -> f64 {
    let s = s.trim();
    if let Ok(v) = s.parse::<f64>() {
        return v;
    }
    let end = numeric_prefix_len(s, true);
    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse an integer count, falling back to its leading digits
/// (`"2000.5"` → 2000). Returns `None` when there are no digits.
pub fn parse_count(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let end = numeric_prefix_len(s, false);
    s[..end].parse::<i64>().ok()
}

/// Length of the `[+-]?digits[.digits][e[+-]digits]` prefix of `s` (ASCII
/// only). Fraction and exponent are read only when `allow_fraction` is set;
/// an exponent marker without digits is not part of the prefix.
fn numeric_prefix_len(s: &str, allow_fraction: bool) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    end = digits_from(end);
    if !allow_fraction {
        return end;
    }
    if bytes.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Secteur,Cout_Violation_Moyen_USD_Millions,Source_Cout,Incidents_DBIR_2024,\
Violations_DBIR_2024,Top_Pattern_1,Top_Pattern_2,Top_Pattern_3,Motif_Principal,Ratio_Violation_Incident";

    fn csv_text(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn single_row_is_mapped_by_position() {
        let text = csv_text(&[
            "Healthcare,9.77,IBM 2024,2000,1950,Phishing,Ransomware,Insider,Financial,0.975",
        ]);
        let records = parse_records(text.as_bytes());
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.sector, "Healthcare");
        assert!((r.average_breach_cost_musd - 9.77).abs() < 1e-9);
        assert_eq!(r.cost_source, "IBM 2024");
        assert_eq!(r.incident_count, Some(2000));
        assert_eq!(r.breach_count, Some(1950));
        assert_eq!(r.top_patterns, ["Phishing", "Ransomware", "Insider"]);
        assert_eq!(r.primary_motive, "Financial");
        assert!((r.breach_to_incident_ratio - 0.975).abs() < 1e-9);
    }

    #[test]
    fn header_only_yields_no_records() {
        assert!(parse_records(HEADER.as_bytes()).is_empty());
        assert!(parse_records(format!("{HEADER}\n").as_bytes()).is_empty());
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_records(b"").is_empty());
    }

    #[test]
    fn rows_keep_source_order() {
        let text = csv_text(&[
            "B,1,s,1,1,a,b,c,m,0.1",
            "A,2,s,2,2,a,b,c,m,0.2",
            "C,3,s,3,3,a,b,c,m,0.3",
        ]);
        let sectors: Vec<String> = parse_records(text.as_bytes())
            .into_iter()
            .map(|r| r.sector)
            .collect();
        assert_eq!(sectors, ["B", "A", "C"]);
    }

    #[test]
    fn blank_lines_and_crlf_are_ignored() {
        let text = format!(
            "{HEADER}\r\nHealthcare,9.77,IBM 2024,2000,1950,a,b,c,Financial,0.975\r\n\r\n   \r\nRetail,3.48,IBM 2024,837,419,a,b,c,Financial,0.50\r\n"
        );
        let records = parse_records(text.as_bytes());
        assert_eq!(records.len(), 2);
        assert!((records[0].breach_to_incident_ratio - 0.975).abs() < 1e-9);
        assert_eq!(records[1].sector, "Retail");
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let text = csv_text(&[
            "\"Government, Public\",2.55,\"IBM, 2024\",1982,1125,a,b,c,Espionage,0.57",
        ]);
        let records = parse_records(text.as_bytes());
        assert_eq!(records[0].sector, "Government, Public");
        assert_eq!(records[0].cost_source, "IBM, 2024");
        assert_eq!(records[0].primary_motive, "Espionage");
    }

    #[test]
    fn malformed_numbers_become_nan() {
        let text = csv_text(&["Healthcare,n/a,IBM 2024,many,,a,b,c,Financial,?"]);
        let r = &parse_records(text.as_bytes())[0];
        assert!(r.average_breach_cost_musd.is_nan());
        assert_eq!(r.incident_count, None);
        assert_eq!(r.breach_count, None);
        assert!(r.breach_to_incident_ratio.is_nan());
    }

    #[test]
    fn short_rows_are_kept() {
        let text = csv_text(&["Healthcare,9.77,IBM 2024"]);
        let records = parse_records(text.as_bytes());
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.incident_count, None);
        assert_eq!(r.top_patterns, ["", "", ""]);
        assert!(r.breach_to_incident_ratio.is_nan());
    }

    #[test]
    fn invalid_utf8_row_is_skipped() {
        let mut bytes = csv_text(&["Healthcare,9.77,IBM 2024,2000,1950,a,b,c,Financial,0.975"]).into_bytes();
        bytes.extend_from_slice(b"\n\xff\xfe,1,s,1,1,a,b,c,m,0.1");
        let records = parse_records(&bytes);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sector, "Healthcare");
    }

    #[test]
    fn decode_errors_report_the_file_line() {
        let mut bytes = csv_text(&["Healthcare,9.77,IBM 2024,2000,1950,a,b,c,Financial,0.975"]).into_bytes();
        bytes.extend_from_slice(b"\n\xff\xfe,1,s,1,1,a,b,c,m,0.1\nRetail,3.48,s,837,419,a,b,c,m,0.5\n");

        let mut reader = csv_reader(&bytes);
        let errors: Vec<csv::Error> = reader.records().filter_map(Result::err).collect();
        assert_eq!(errors.len(), 1);
        // header is line 1, so the second data record sits on line 3
        assert_eq!(error_line(&errors[0]), Some(3));
    }

    #[test]
    fn lenient_number_prefixes() {
        assert!((parse_decimal("9.77M") - 9.77).abs() < 1e-9);
        assert!((parse_decimal(" 0.5 ") - 0.5).abs() < 1e-9);
        assert!((parse_decimal("-1.25x") + 1.25).abs() < 1e-9);
        assert!(parse_decimal("").is_nan());
        assert!(parse_decimal(".").is_nan());
        assert!((parse_decimal("1.5e3M") - 1500.0).abs() < 1e-9);
        assert!((parse_decimal("2e1x") - 20.0).abs() < 1e-9);
        assert!((parse_decimal("2.5E-1%") - 0.25).abs() < 1e-9);
        assert!((parse_decimal("3eM") - 3.0).abs() < 1e-9);
        assert!((parse_decimal("4e+") - 4.0).abs() < 1e-9);
        assert_eq!(parse_count("2e3"), Some(2));
        assert_eq!(parse_count("2000.5"), Some(2000));
        assert_eq!(parse_count("12abc"), Some(12));
        assert_eq!(parse_count("-"), None);
        assert_eq!(parse_count("abc"), None);
    }

    #[test]
    fn shipped_asset_has_seven_sectors() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("cyberattack_data_structured.csv");
        let dataset = load_file(&path).expect("shipped asset loads");
        assert_eq!(dataset.len(), 7);
        assert_eq!(dataset.records[0].sector, "Healthcare");
        assert_eq!(dataset.raw, std::fs::read(&path).unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("reading sector data"));
    }
}
