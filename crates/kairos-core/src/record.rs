//! JSON interchange record for exported sigils.
//!
//! The wire format is a flat camelCase object; absent optionals are omitted.
//! `seed` is not part of it: the record identifies a moment, not
//! a rendering style.

use serde::{Deserialize, Serialize};

use crate::moment::decode_moment;
use crate::sigil::SigilParams;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SigilRecord {
    pub pulse: i64,
    pub beat: u32,
    pub step_index: u32,
    pub chakra_day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub timestamp: i64,
}

/// A record field that disagrees with the decode of the record's pulse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: u32,
    pub found: u32,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.field, self.expected, self.found
        )
    }
}

impl From<&SigilParams> for SigilRecord {
    fn from(p: &SigilParams) -> Self {
        Self {
            pulse: p.pulse,
            beat: p.beat,
            step_index: p.step_index,
            chakra_day: p.chakra_day,
            user_key: p.user_key.clone(),
            signature: p.signature.clone(),
            timestamp: p.timestamp,
        }
    }
}

impl SigilRecord {
    pub fn into_params(self, seed: u64) -> SigilParams {
        SigilParams {
            pulse: self.pulse,
            beat: self.beat,
            step_index: self.step_index,
            chakra_day: self.chakra_day,
            seed,
            user_key: self.user_key,
            signature: self.signature,
            timestamp: self.timestamp,
        }
    }

    /// Re-decode `pulse` and list every coordinate that disagrees with it.
    /// Empty means the record is internally consistent.
    pub fn mismatches(&self) -> Vec<Mismatch> {
        let m = decode_moment(self.pulse);
        [
            ("beat", m.beat, self.beat),
            ("stepIndex", m.step, self.step_index),
            ("chakraDay", m.day_index, self.chakra_day),
        ]
        .into_iter()
        .filter(|(_, expected, found)| expected != found)
        .map(|(field, expected, found)| Mismatch {
            field,
            expected,
            found,
        })
        .collect()
    }
}

/// Serialize a record to pretty JSON.
pub fn export_record(record: &SigilRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// Parse a record from JSON.
pub fn import_record(json: &str) -> serde_json::Result<SigilRecord> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consistent(pulse: i64) -> SigilRecord {
        let m = decode_moment(pulse);
        SigilRecord::from(&SigilParams::from_moment(&m, 1_715_323_541_888))
    }

    #[test]
    fn test_wire_field_names() {
        let rec = consistent(12345);
        let json: serde_json::Value = serde_json::from_str(&export_record(&rec).unwrap()).unwrap();
        assert_eq!(json["pulse"], 12345);
        assert!(json.get("stepIndex").is_some());
        assert!(json.get("chakraDay").is_some());
        assert!(json.get("userKey").is_none(), "None should be omitted");
        assert!(json.get("signature").is_none());
        assert!(json.get("seed").is_none());
    }

    #[test]
    fn test_optionals_roundtrip() {
        let params = SigilParams::new(-5, 35, 43, 5)
            .with_user_key("phi-key")
            .with_signature("abc123")
            .with_timestamp(99);
        let rec = SigilRecord::from(&params);
        let back = import_record(&export_record(&rec).unwrap()).unwrap();
        assert_eq!(back, rec);
        assert_eq!(back.into_params(params.seed), params);
    }

    #[test]
    fn test_import_minimal() {
        let rec = import_record(
            r#"{"pulse": 0, "beat": 0, "stepIndex": 0, "chakraDay": 0, "timestamp": 0}"#,
        )
        .unwrap();
        assert_eq!(rec.user_key, None);
        assert!(rec.mismatches().is_empty());
    }

    #[test]
    fn test_import_rejects_missing_field() {
        assert!(import_record(r#"{"pulse": 0, "beat": 0}"#).is_err());
    }

    #[test]
    fn test_consistent_record_has_no_mismatch() {
        for p in [-1, 0, 17_492, 9_876_543_210] {
            assert!(consistent(p).mismatches().is_empty(), "pulse {p}");
        }
    }

    #[test]
    fn test_tampered_record_reports_fields() {
        let mut rec = consistent(-1);
        rec.beat = 3;
        rec.chakra_day = 0;
        let mismatches = rec.mismatches();
        assert_eq!(
            mismatches,
            vec![
                Mismatch {
                    field: "beat",
                    expected: 35,
                    found: 3
                },
                Mismatch {
                    field: "chakraDay",
                    expected: 5,
                    found: 0
                },
            ]
        );
        assert_eq!(mismatches[0].to_string(), "beat: expected 35, found 3");
    }
}
