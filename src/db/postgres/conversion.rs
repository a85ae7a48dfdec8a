//! Type conversion utilities for the PostgreSQL backend.
//!
//! Handles conversion between:
//! - `SqlValue` → PostgreSQL parameters (via `ToSql`)
//! - `postgres::Row` cells → `SqlValue`

use std::error::Error;

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use postgres::types::{FromSql, IsNull, Kind, ToSql, Type, to_sql_checked};
use postgres::{Column, Row};
use uuid::Uuid;

use crate::db::backend::BackendError;
use crate::db::value::SqlValue;

/// Binds a `SqlValue` into whatever type the server inferred for the slot.
///
/// Integers narrow to `INT2`/`INT4` (failing when out of range) and widen to
/// floating point; text goes through as-is so the server can reject a
/// mismatched column type itself.
impl ToSql for SqlValue {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            SqlValue::Null => Ok(IsNull::Yes),
            SqlValue::Bool(b) => b.to_sql(ty, out),
            SqlValue::Int(i) => match *ty {
                Type::INT2 => i16::try_from(*i)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*i)?.to_sql(ty, out),
                Type::FLOAT4 => (*i as f32).to_sql(ty, out),
                Type::FLOAT8 => (*i as f64).to_sql(ty, out),
                Type::TEXT | Type::VARCHAR | Type::BPCHAR => i.to_string().to_sql(ty, out),
                _ => i.to_sql(ty, out),
            },
            SqlValue::Float(f) => match *ty {
                Type::FLOAT4 => (*f as f32).to_sql(ty, out),
                _ => f.to_sql(ty, out),
            },
            SqlValue::Text(s) => s.to_sql(ty, out),
            SqlValue::Date(d) => d.to_sql(ty, out),
            SqlValue::Timestamp(ts) => match *ty {
                Type::TIMESTAMPTZ => ts.and_utc().to_sql(ty, out),
                _ => ts.to_sql(ty, out),
            },
            SqlValue::Bytes(b) => b.to_sql(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

const NUMERIC_NEG: u16 = 0x4000;
const NUMERIC_NAN: u16 = 0xC000;
const NUMERIC_PINF: u16 = 0xD000;
const NUMERIC_NINF: u16 = 0xF000;

/// A `NUMERIC` cell in its exact decimal text form.
struct NumericText(String);

impl<'a> FromSql<'a> for NumericText {
    fn from_sql(_ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        decode_numeric(raw).map(NumericText)
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::NUMERIC
    }
}

/// Decode the binary `NUMERIC` wire format: a header of
/// `ndigits, weight, sign, dscale` followed by base-10000 digits, the first
/// of which has weight `weight`.
fn decode_numeric(raw: &[u8]) -> Result<String, Box<dyn Error + Sync + Send>> {
    let word = |i: usize| -> Result<u16, Box<dyn Error + Sync + Send>> {
        raw.get(i * 2..i * 2 + 2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
            .ok_or_else(|| "truncated numeric value".into())
    };

    let ndigits = usize::from(word(0)?);
    let weight = i64::from(word(1)? as i16);
    let sign = word(2)?;
    let dscale = usize::from(word(3)?);

    match sign {
        NUMERIC_NAN => return Ok("NaN".to_string()),
        NUMERIC_PINF => return Ok("Infinity".to_string()),
        NUMERIC_NINF => return Ok("-Infinity".to_string()),
        _ => {}
    }

    let digits = (0..ndigits)
        .map(|i| word(4 + i))
        .collect::<Result<Vec<_>, _>>()?;
    let digit = |idx: i64| -> u16 {
        usize::try_from(idx)
            .ok()
            .and_then(|i| digits.get(i).copied())
            .unwrap_or(0)
    };

    let mut out = String::new();
    if sign == NUMERIC_NEG {
        out.push('-');
    }
    if weight < 0 {
        out.push('0');
    } else {
        out.push_str(&digit(0).to_string());
        for idx in 1..=weight {
            out.push_str(&format!("{:04}", digit(idx)));
        }
    }

    if dscale > 0 {
        let mut fraction = String::with_capacity(dscale + 4);
        let mut idx = weight + 1;
        while fraction.len() < dscale {
            fraction.push_str(&format!("{:04}", digit(idx)));
            idx += 1;
        }
        fraction.truncate(dscale);
        out.push('.');
        out.push_str(&fraction);
    }
    Ok(out)
}

/// Any column type without a dedicated conversion.
///
/// Enum labels arrive as text; everything else keeps the server's binary
/// encoding as bytes.
struct RawCell(SqlValue);

impl<'a> FromSql<'a> for RawCell {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        let value = match ty.kind() {
            Kind::Enum(_) => SqlValue::Text(std::str::from_utf8(raw)?.to_string()),
            _ => SqlValue::Bytes(raw.to_vec()),
        };
        Ok(RawCell(value))
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

/// Convert every cell of a row into a `SqlValue`, following the column types.
///
/// `NUMERIC`, `TIME`, `UUID` and `JSON(B)` come back as their text form.
pub fn row_values(row: &Row, columns: &[Column]) -> Result<Vec<SqlValue>, BackendError> {
    let mut values = Vec::with_capacity(columns.len());
    for (idx, col) in columns.iter().enumerate() {
        let ty = col.type_();
        let value = match *ty {
            Type::BOOL => row.try_get::<_, Option<bool>>(idx).map(SqlValue::from),
            Type::INT2 => row
                .try_get::<_, Option<i16>>(idx)
                .map(|v| SqlValue::from(v.map(i64::from))),
            Type::INT4 => row
                .try_get::<_, Option<i32>>(idx)
                .map(|v| SqlValue::from(v.map(i64::from))),
            Type::INT8 => row.try_get::<_, Option<i64>>(idx).map(SqlValue::from),
            Type::OID => row
                .try_get::<_, Option<u32>>(idx)
                .map(|v| SqlValue::from(v.map(i64::from))),
            Type::FLOAT4 => row
                .try_get::<_, Option<f32>>(idx)
                .map(|v| SqlValue::from(v.map(f64::from))),
            Type::FLOAT8 => row.try_get::<_, Option<f64>>(idx).map(SqlValue::from),
            Type::NUMERIC => row
                .try_get::<_, Option<NumericText>>(idx)
                .map(|v| SqlValue::from(v.map(|n| n.0))),
            Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
                row.try_get::<_, Option<String>>(idx).map(SqlValue::from)
            }
            Type::DATE => row.try_get::<_, Option<NaiveDate>>(idx).map(SqlValue::from),
            Type::TIME => row
                .try_get::<_, Option<NaiveTime>>(idx)
                .map(|v| SqlValue::from(v.map(|t| t.to_string()))),
            Type::TIMESTAMP => row
                .try_get::<_, Option<NaiveDateTime>>(idx)
                .map(SqlValue::from),
            Type::TIMESTAMPTZ => row
                .try_get::<_, Option<DateTime<Utc>>>(idx)
                .map(|v| SqlValue::from(v.map(|ts| ts.naive_utc()))),
            Type::UUID => row
                .try_get::<_, Option<Uuid>>(idx)
                .map(|v| SqlValue::from(v.map(|u| u.to_string()))),
            Type::JSON | Type::JSONB => row
                .try_get::<_, Option<serde_json::Value>>(idx)
                .map(|v| SqlValue::from(v.map(|j| j.to_string()))),
            Type::BYTEA => row.try_get::<_, Option<Vec<u8>>>(idx).map(SqlValue::from),
            _ => row
                .try_get::<_, Option<RawCell>>(idx)
                .map(|v| v.map_or(SqlValue::Null, |cell| cell.0)),
        }
        .map_err(|e| format!("Failed to read column '{}': {}", col.name(), e))?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn encode(value: &SqlValue, ty: &Type) -> Result<Vec<u8>, Box<dyn Error + Sync + Send>> {
        let mut buf = BytesMut::new();
        value.to_sql(ty, &mut buf)?;
        Ok(buf.to_vec())
    }

    #[test]
    fn test_int_narrows_to_int4() {
        let bytes = encode(&SqlValue::Int(9900), &Type::INT4).unwrap();
        assert_eq!(bytes, 9900i32.to_be_bytes().to_vec());
    }

    #[test]
    fn test_int_out_of_range_for_int2_fails() {
        assert!(encode(&SqlValue::Int(100_000), &Type::INT2).is_err());
    }

    #[test]
    fn test_int_stays_int8() {
        let bytes = encode(&SqlValue::Int(7), &Type::INT8).unwrap();
        assert_eq!(bytes, 7i64.to_be_bytes().to_vec());
    }

    #[test]
    fn test_text_is_raw_utf8() {
        let bytes = encode(&SqlValue::Text("%Key%".into()), &Type::TEXT).unwrap();
        assert_eq!(bytes, b"%Key%".to_vec());
    }

    /// Binary NUMERIC payload from its header and base-10000 digits.
    fn numeric(weight: i16, sign: u16, dscale: u16, digits: &[u16]) -> Vec<u8> {
        let mut raw = Vec::new();
        for word in [digits.len() as u16, weight as u16, sign, dscale] {
            raw.extend_from_slice(&word.to_be_bytes());
        }
        for d in digits {
            raw.extend_from_slice(&d.to_be_bytes());
        }
        raw
    }

    #[rstest]
    #[case::wager(numeric(0, 0, 2, &[12, 5000]), "12.50")]
    #[case::zero(numeric(0, 0, 0, &[]), "0")]
    #[case::zero_scaled(numeric(0, 0, 2, &[]), "0.00")]
    #[case::large(numeric(1, 0, 0, &[1]), "10000")]
    #[case::grouped(numeric(2, 0, 1, &[12, 3456, 7890, 1000]), "1234567890.1")]
    #[case::small(numeric(-1, 0, 2, &[500]), "0.05")]
    #[case::tiny(numeric(-2, 0, 5, &[5000]), "0.00005")]
    #[case::negative(numeric(0, NUMERIC_NEG, 3, &[20, 1250]), "-20.125")]
    #[case::nan(numeric(0, NUMERIC_NAN, 0, &[]), "NaN")]
    #[case::infinity(numeric(0, NUMERIC_NINF, 0, &[]), "-Infinity")]
    fn test_numeric_decodes_exactly(#[case] raw: Vec<u8>, #[case] expected: &str) {
        let value = NumericText::from_sql(&Type::NUMERIC, &raw).unwrap();
        assert_eq!(value.0, expected);
    }

    #[test]
    fn test_truncated_numeric_is_an_error() {
        let mut raw = numeric(0, 0, 2, &[12, 5000]);
        raw.truncate(raw.len() - 1);
        assert!(NumericText::from_sql(&Type::NUMERIC, &raw).is_err());
    }

    #[test]
    fn test_enum_cell_is_its_label() {
        let ty = Type::new(
            "heist_status".to_string(),
            90_001,
            Kind::Enum(vec!["planned".to_string(), "won".to_string()]),
            "public".to_string(),
        );
        let cell = RawCell::from_sql(&ty, b"won").unwrap();
        assert_eq!(cell.0, SqlValue::from("won"));
    }

    #[test]
    fn test_unknown_cell_keeps_raw_bytes() {
        let raw = [0u8, 1, 2, 3];
        let cell = RawCell::from_sql(&Type::POINT, &raw).unwrap();
        assert_eq!(cell.0, SqlValue::Bytes(raw.to_vec()));
        assert!(<RawCell as FromSql>::accepts(&Type::INT4_ARRAY));
    }

    #[test]
    fn test_null_is_null() {
        let mut buf = BytesMut::new();
        let is_null = SqlValue::Null.to_sql(&Type::INT4, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(buf.is_empty());
    }
}
