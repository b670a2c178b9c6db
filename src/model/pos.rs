use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `wello_resto_status.status` while the current time falls in an opening slot.
pub const POS_STATUS_OPEN: &str = "OPEN";
/// `wello_resto_status.status` outside every opening slot.
pub const POS_STATUS_CLOSED: &str = "CLOSED";

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PosStatusEnvelopeDto {
    pub pos_status: PosStatusDto,
}

/// Opening state of the restaurant and of its delivery platform store.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PosStatusDto {
    #[serde(rename = "wello_resto_status")]
    pub wello_resto: WelloRestoStatusDto,
    /// `null` when the merchant has no enabled Uber Eats integration.
    #[serde(rename = "uber_eats_status")]
    pub uber_eats: Option<UberEatsStatusDto>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct WelloRestoStatusDto {
    /// Manual switch, `1` when the staff opened the POS.
    pub is_open: i32,
    /// `OPEN` or `CLOSED` from the opening hours, whatever the manual switch says.
    pub status: String,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 19:00:00")]
    pub next_start: Option<NaiveDateTime>,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 23:00:00")]
    pub next_end: Option<NaiveDateTime>,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UberEatsStatusDto {
    pub estimated_preparation_time: Option<String>,
    pub busy_mode_delay_duration: Option<String>,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-14 20:30:00")]
    pub busy_mode_delay_until: Option<NaiveDateTime>,
    #[serde(with = "crate::model::datetime::option")]
    #[schema(value_type = Option<String>, example = "2025-03-15 11:00:00")]
    pub closed_until: Option<NaiveDateTime>,
}

/// Body of the manual open/close switch.
#[derive(Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PosStatusUpdateDto {
    pub status: bool,
}
