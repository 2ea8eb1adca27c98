use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    validation::{is_entry_date_format, parse_day_month_year, Violations},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeEntryRequest {
    pub project_id: i64,
    pub developer_id: i64,
    pub description: String,
    pub hours: f64,
    pub date: String,
}

#[derive(Debug, PartialEq)]
pub struct NewTimeEntry {
    pub project_id: i64,
    pub developer_id: i64,
    pub description: String,
    pub hours: f64,
    pub date: String,
}

impl CreateTimeEntryRequest {
    pub fn validate(self) -> Result<NewTimeEntry, ApiError> {
        let date = self.date.trim().to_string();

        let mut v = Violations::new();
        v.check(self.project_id > 0, "projectId", "Invalid project id");
        v.check(self.developer_id > 0, "developerId", "Invalid developer id");
        v.non_empty(&self.description, "description", "Description is required");
        v.positive(self.hours, "hours", "Hours must be positive");
        v.check(
            is_entry_date_format(&date) && parse_day_month_year(&date).is_some(),
            "date",
            "Date must be a real day in dd/MM/yyyy format",
        );
        v.into_result()?;

        Ok(NewTimeEntry {
            project_id: self.project_id,
            developer_id: self.developer_id,
            description: self.description.trim().to_string(),
            hours: self.hours,
            date,
        })
    }
}

/// Entry row with its project and developer names resolved for listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabeledTimeEntry {
    pub id: i64,
    pub project_id: i64,
    pub project_name: String,
    pub developer_id: i64,
    pub developer_name: String,
    pub description: String,
    pub hours: f64,
    pub date: String,
}
