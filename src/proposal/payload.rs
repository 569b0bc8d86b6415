//! Stage-specific payloads
//!
//! `data` on the wire is shaped entirely by the proposal stage. Each variant
//! here owns one decoder, and every container it reads may be missing.

use super::decode::{parse_timestamp, text_field, DecodeOptions};
use super::stage::Stage;
use crate::lifecycle::{classify_partial, Lifecycle};
use crate::table::PositionalTable;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Decoded `data` of a proposal, one variant per stage
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum Payload {
    ActivityPlanning(PlanningData),
    FundDisbursement(FundingTables),
    FundUsageReport(FundingTables),
    IndicatorReport(IndicatorData),
    Other { name: String },
}

impl Payload {
    pub fn decode(stage: &Stage, data: &Value, options: &DecodeOptions) -> Self {
        match stage {
            Stage::ActivityPlanning => Self::ActivityPlanning(PlanningData::decode(data, options)),
            Stage::FundDisbursement => Self::FundDisbursement(FundingTables::decode(data)),
            Stage::FundUsageReport => Self::FundUsageReport(FundingTables::decode(data)),
            Stage::IndicatorReport => Self::IndicatorReport(IndicatorData::decode(data)),
            Stage::Other(name) => Self::Other { name: name.clone() },
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Self::ActivityPlanning(_) => Stage::ActivityPlanning,
            Self::FundDisbursement(_) => Stage::FundDisbursement,
            Self::FundUsageReport(_) => Stage::FundUsageReport,
            Self::IndicatorReport(_) => Stage::IndicatorReport,
            Self::Other { name } => Stage::Other(name.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningData {
    pub activities: Vec<Activity>,
}

impl PlanningData {
    pub fn decode(data: &Value, options: &DecodeOptions) -> Self {
        let activities = objects(data.get("activityList"))
            .map(|activity| Activity::decode(activity, options))
            .collect();
        Self { activities }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub code: Option<String>,
    pub title: Option<String>,
    pub sub_activities: Vec<SubActivity>,
    pub funding: PositionalTable,
}

impl Activity {
    pub fn decode(value: &Value, options: &DecodeOptions) -> Self {
        Self {
            code: text_field(value, "code"),
            title: text_field(value, "title"),
            sub_activities: objects(value.get("subActivityList"))
                .map(|sub| SubActivity::decode(sub, options))
                .collect(),
            funding: PositionalTable::from_field(value, "funding"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubActivity {
    pub title: Option<String>,
    pub code: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub place: Option<String>,
    pub description: Option<String>,
}

impl SubActivity {
    pub fn decode(value: &Value, options: &DecodeOptions) -> Self {
        let instant = |key: &str| {
            value
                .get(key)
                .and_then(|raw| parse_timestamp(raw, options.utc_offset))
        };
        Self {
            title: text_field(value, "title"),
            code: text_field(value, "code"),
            started_at: instant("startedAt"),
            finished_at: instant("finishedAt"),
            place: text_field(value, "place"),
            description: text_field(value, "description"),
        }
    }

    /// Lifecycle at `now`. Recomputed on every call, never cached.
    pub fn lifecycle(&self, now: DateTime<Utc>) -> Lifecycle {
        classify_partial(self.started_at, self.finished_at, now)
    }
}

/// Tools and incentive tables. The layout that applies depends on the stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingTables {
    pub tools: PositionalTable,
    pub incentive: PositionalTable,
}

impl FundingTables {
    pub fn decode(data: &Value) -> Self {
        Self {
            tools: PositionalTable::from_field(data, "tableTools"),
            incentive: PositionalTable::from_field(data, "tableIncentive"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorData {
    pub indicators: PositionalTable,
}

impl IndicatorData {
    pub fn decode(data: &Value) -> Self {
        Self {
            indicators: PositionalTable::from_field(data, "IKU"),
        }
    }
}

/// Object elements of an optional array; anything else yields nothing
fn objects(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|item| item.is_object())
}
