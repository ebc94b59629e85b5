use super::Format;
use super::ReadOptions;
use crate::Error;
use crate::Result;
use crate::table::Column;
use crate::table::Data;
use crate::table::Kind;
use crate::table::Table;

/// Parse CSV bytes. The first record names the columns, empty fields are null.
pub fn decode(path: &str, bytes: &[u8], options: &ReadOptions) -> Result<Table> {
    let ref mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| malformed(path, e))?
        .iter()
        .map(String::from)
        .collect::<Vec<String>>();
    let wanted = match options.columns {
        None => (0..headers.len()).collect::<Vec<usize>>(),
        Some(ref names) => {
            if let Some(name) = names.iter().find(|n| !headers.contains(n)) {
                return Err(malformed(path, format!("no column `{}`", name)));
            }
            (0..headers.len())
                .filter(|i| names.contains(&headers[*i]))
                .collect()
        }
    };
    let mut raw = vec![Vec::<Option<String>>::new(); wanted.len()];
    for record in reader.records().take(options.limit.unwrap_or(usize::MAX)) {
        let record = record.map_err(|e| malformed(path, e))?;
        for (values, i) in raw.iter_mut().zip(wanted.iter()) {
            values.push(record.get(*i).filter(|s| !s.is_empty()).map(String::from));
        }
    }
    wanted
        .iter()
        .map(|i| &headers[*i])
        .zip(raw)
        .map(|(name, values)| {
            let kind = options.kinds.get(name).copied().unwrap_or_else(|| {
                Kind::infer(values.iter().flatten().map(String::as_str))
            });
            Data::parse(name, values, kind).map(|data| Column::new(name.as_str(), data))
        })
        .collect::<Result<Vec<Column>>>()
        .and_then(Table::new)
}

/// Render a table as CSV bytes, nulls as empty fields.
pub fn encode(path: &str, table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(table.names())
        .map_err(|e| unwritable(path, e))?;
    for i in 0..table.rows() {
        writer
            .write_record(
                table
                    .columns()
                    .iter()
                    .map(|c| c.data().render(i).unwrap_or_default()),
            )
            .map_err(|e| unwritable(path, e))?;
    }
    writer.into_inner().map_err(|e| unwritable(path, e.error()))
}

fn malformed(path: &str, reason: impl std::fmt::Display) -> Error {
    Error::Format {
        path: path.to_string(),
        format: Format::Csv,
        reason: reason.to_string(),
    }
}

fn unwritable(path: &str, reason: impl std::fmt::Display) -> Error {
    Error::Write {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
