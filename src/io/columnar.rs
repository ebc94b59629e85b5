use super::Format;
use super::ReadOptions;
use crate::Error;
use crate::Result;
use crate::table::Column;
use crate::table::Data;
use crate::table::Kind;
use crate::table::Table;
use arrow::array::Array;
use arrow::array::ArrayRef;
use arrow::array::AsArray;
use arrow::array::Float64Array;
use arrow::array::Int64Array;
use arrow::array::StringArray;
use arrow::compute::CastOptions;
use arrow::datatypes::DataType;
use arrow::datatypes::Field;
use arrow::datatypes::Float64Type;
use arrow::datatypes::Int64Type;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::sync::Arc;

const BATCH: usize = 65_536;

/// Parse a Parquet file held in memory.
pub fn decode(path: &str, bytes: Bytes, options: &ReadOptions) -> Result<Table> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(bytes)
        .map_err(|e| malformed(path, e))?
        .with_batch_size(BATCH);
    let schema = builder.schema().clone();
    let builder = match options.limit {
        Some(n) => builder.with_limit(n),
        None => builder,
    };
    let batches = builder
        .build()
        .map_err(|e| malformed(path, e))?
        .collect::<std::result::Result<Vec<RecordBatch>, _>>()
        .map_err(|e| malformed(path, e))?;
    let batch = arrow::compute::concat_batches(&schema, &batches).map_err(|e| malformed(path, e))?;
    let names = schema
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect::<Vec<String>>();
    let wanted = match options.columns {
        None => names,
        Some(ref subset) => {
            if let Some(name) = subset.iter().find(|n| !names.contains(n)) {
                return Err(malformed(path, format!("no column `{}`", name)));
            }
            names.into_iter().filter(|n| subset.contains(n)).collect()
        }
    };
    wanted
        .iter()
        .map(|name| {
            let array = batch
                .column_by_name(name)
                .ok_or_else(|| malformed(path, format!("no column `{}`", name)))?;
            column(name, array, options.kinds.get(name).copied())
        })
        .collect::<Result<Vec<Column>>>()
        .and_then(Table::new)
}

/// Serialize a table as a single-row-group Parquet file.
pub fn encode(path: &str, table: &Table) -> Result<Vec<u8>> {
    let fields = table
        .columns()
        .iter()
        .map(|c| Field::new(c.name(), arrow(c.kind()), true))
        .collect::<Vec<Field>>();
    let arrays = table
        .columns()
        .iter()
        .map(|c| match c.data() {
            Data::Text(v) => Arc::new(v.iter().map(|s| s.as_deref()).collect::<StringArray>()) as ArrayRef,
            Data::Integer(v) => Arc::new(Int64Array::from(v.clone())) as ArrayRef,
            Data::Float(v) => Arc::new(Float64Array::from(v.clone())) as ArrayRef,
        })
        .collect::<Vec<ArrayRef>>();
    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), arrays).map_err(|e| unwritable(path, e))?;
    let mut buffer = Vec::new();
    let mut writer = ArrowWriter::try_new(&mut buffer, schema, None).map_err(|e| unwritable(path, e))?;
    writer.write(&batch).map_err(|e| unwritable(path, e))?;
    writer.close().map_err(|e| unwritable(path, e))?;
    Ok(buffer)
}

/// Cast one Arrow column into our representation.
/// Casting is strict, so a value that does not fit is an error rather than a null.
fn column(name: &str, array: &ArrayRef, kind: Option<Kind>) -> Result<Column> {
    let kind = kind.unwrap_or_else(|| native(array.data_type()));
    let ref options = CastOptions {
        safe: false,
        ..Default::default()
    };
    let cast = arrow::compute::cast_with_options(array, &arrow(kind), options).map_err(|e| {
        Error::TypeCoercion {
            column: name.to_string(),
            kind,
            value: e.to_string(),
        }
    })?;
    let data = match kind {
        Kind::Text => Data::Text(
            cast.as_string::<i32>()
                .iter()
                .map(|v| v.map(String::from))
                .collect(),
        ),
        Kind::Integer => Data::Integer(cast.as_primitive::<Int64Type>().iter().collect()),
        Kind::Float => Data::Float(cast.as_primitive::<Float64Type>().iter().collect()),
    };
    Ok(Column::new(name, data))
}

fn native(data: &DataType) -> Kind {
    match data {
        d if d.is_integer() => Kind::Integer,
        DataType::Boolean => Kind::Integer,
        d if d.is_floating() => Kind::Float,
        _ => Kind::Text,
    }
}

fn arrow(kind: Kind) -> DataType {
    match kind {
        Kind::Text => DataType::Utf8,
        Kind::Integer => DataType::Int64,
        Kind::Float => DataType::Float64,
    }
}

fn malformed(path: &str, reason: impl std::fmt::Display) -> Error {
    Error::Format {
        path: path.to_string(),
        format: Format::Parquet,
        reason: reason.to_string(),
    }
}

fn unwritable(path: &str, reason: impl std::fmt::Display) -> Error {
    Error::Write {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
