//! Proposal records and their stage-shaped payloads
//!
//! Proposals arrive already fetched as JSON. Decoding is tolerant: missing
//! containers become empty collections and malformed cells stay in the
//! tables as-is, to be coerced to zero by the reducers.

pub mod decode;
pub mod payload;
pub mod stage;

pub use decode::{decode_document, decode_str, parse_timestamp, parse_timestamp_str, DecodeOptions};
pub use payload::{
    Activity, FundingTables, IndicatorData, Payload, PlanningData, SubActivity,
};
pub use stage::Stage;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// One department's submission for one workflow stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proposal {
    pub id: String,
    pub department: Department,
    pub payload: Payload,
}

impl Proposal {
    pub fn stage(&self) -> Stage {
        self.payload.stage()
    }

    /// Proposals of `stage`, in input order
    pub fn of_stage<'a>(
        proposals: &'a [Proposal],
        stage: &'a Stage,
    ) -> impl Iterator<Item = &'a Proposal> + 'a {
        proposals.iter().filter(move |p| &p.stage() == stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stage_filter_keeps_order() {
        let document = json!([
            {"id": "a", "stage": "fund-disbursement"},
            {"id": "b", "stage": "iku"},
            {"id": "c", "stage": "disbursement"}
        ]);
        let proposals = decode_document(&document, &DecodeOptions::default()).unwrap();
        let ids: Vec<&str> = Proposal::of_stage(&proposals, &Stage::FundDisbursement)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
