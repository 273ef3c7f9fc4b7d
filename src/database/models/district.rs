use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub district_id: i64,
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

/// Every writable district column. Used as the body of both create and
/// full-replace update; `state_id` is not checked against `state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictFields {
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

impl District {
    pub fn fields(&self) -> DistrictFields {
        DistrictFields {
            district_name: self.district_name.clone(),
            state_id: self.state_id,
            cases: self.cases,
            cured: self.cured,
            active: self.active,
            deaths: self.deaths,
        }
    }
}
