use crate::model::ad_record::AdRecord;

const HEADER: &str = "Ad Number,Headline,Description";

/// Renders records as RFC 4180 CSV, one row per record in parse order.
pub fn to_csv(records: &[AdRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&escape_field(&record.number));
        out.push(',');
        out.push_str(&escape_field(&record.headline));
        out.push(',');
        out.push_str(&escape_field(&record.description));
        out.push('\n');
    }

    out
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Reads CSV produced by [`to_csv`] back into records. The header row is
/// dropped; rows that do not carry exactly three fields are skipped.
pub fn from_csv(text: &str) -> Vec<AdRecord> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows.into_iter()
        .skip(1)
        .filter(|r| r.len() == 3)
        .map(|r| {
            let mut fields = r.into_iter();
            AdRecord {
                number: fields.next().unwrap_or_default(),
                headline: fields.next().unwrap_or_default(),
                description: fields.next().unwrap_or_default(),
            }
        })
        .collect()
}
