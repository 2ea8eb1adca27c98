use serde::Deserialize;

use crate::{
    developers::repo_types::{Developer, Seniority},
    error::ApiError,
    validation::{is_valid_email, Violations},
};

const SENIORITY_MSG: &str = "Seniority must be one of junior, mid, senior";

/// Request body for developer registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloperRequest {
    pub name: String,
    pub email: String,
    pub seniority: String,
    pub hourly_rate: f64,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeveloperRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub seniority: Option<String>,
    pub hourly_rate: Option<f64>,
}

/// A create request that passed validation, normalized for storage.
#[derive(Debug, PartialEq)]
pub struct NewDeveloper {
    pub name: String,
    pub email: String,
    pub seniority: Seniority,
    pub hourly_rate: f64,
}

impl CreateDeveloperRequest {
    pub fn validate(self) -> Result<NewDeveloper, ApiError> {
        let email = self.email.trim().to_lowercase();

        let mut v = Violations::new();
        v.non_empty(&self.name, "name", "Name is required");
        v.check(is_valid_email(&email), "email", "Invalid email");
        v.positive(self.hourly_rate, "hourlyRate", "Hourly rate must be positive");
        let seniority = match self.seniority.parse::<Seniority>() {
            Ok(seniority) => seniority,
            Err(_) => return Err(v.reject("seniority", SENIORITY_MSG)),
        };
        v.into_result()?;

        Ok(NewDeveloper {
            name: self.name.trim().to_string(),
            email,
            seniority,
            hourly_rate: self.hourly_rate,
        })
    }
}

impl UpdateDeveloperRequest {
    /// Validates the provided fields and applies them onto `dev`.
    pub fn apply_to(self, dev: &mut Developer) -> Result<(), ApiError> {
        let email = self.email.map(|e| e.trim().to_lowercase());

        let mut v = Violations::new();
        if let Some(name) = &self.name {
            v.non_empty(name, "name", "Name is required");
        }
        if let Some(email) = &email {
            v.check(is_valid_email(email), "email", "Invalid email");
        }
        if let Some(rate) = self.hourly_rate {
            v.positive(rate, "hourlyRate", "Hourly rate must be positive");
        }
        let seniority = match self.seniority.as_deref().map(str::parse::<Seniority>).transpose() {
            Ok(seniority) => seniority,
            Err(_) => return Err(v.reject("seniority", SENIORITY_MSG)),
        };
        v.into_result()?;

        if let Some(name) = self.name {
            dev.name = name.trim().to_string();
        }
        if let Some(email) = email {
            dev.email = email;
        }
        if let Some(seniority) = seniority {
            dev.seniority = seniority.to_string();
        }
        if let Some(rate) = self.hourly_rate {
            dev.hourly_rate = rate;
        }
        Ok(())
    }
}
