use serde::Deserialize;

use crate::{error::ApiError, projects::repo_types::Project, validation::Violations};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    pub total_hours: i32,
    pub description: String,
    pub cell: i32,
    pub client: i32,
    pub service: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub total_hours: Option<i32>,
    pub description: Option<String>,
    pub cell: Option<i32>,
    pub client: Option<i32>,
    pub service: Option<i32>,
}

#[derive(Debug, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub total_hours: i32,
    pub description: String,
    pub cell: i32,
    pub client: i32,
    pub service: i32,
}

fn check_codes(v: &mut Violations, cell: Option<i32>, client: Option<i32>, service: Option<i32>) {
    for (value, field, message) in [
        (cell, "cell", "Cell must be a positive number"),
        (client, "client", "Client must be a positive number"),
        (service, "service", "Service must be a positive number"),
    ] {
        if let Some(value) = value {
            v.check(value > 0, field, message);
        }
    }
}

impl CreateProjectRequest {
    pub fn validate(self) -> Result<NewProject, ApiError> {
        let mut v = Violations::new();
        v.non_empty(&self.name, "name", "Name is required");
        v.check(self.total_hours > 0, "totalHours", "Total hours must be positive");
        v.non_empty(&self.description, "description", "Description is required");
        check_codes(&mut v, Some(self.cell), Some(self.client), Some(self.service));
        v.into_result()?;

        Ok(NewProject {
            name: self.name.trim().to_string(),
            total_hours: self.total_hours,
            description: self.description.trim().to_string(),
            cell: self.cell,
            client: self.client,
            service: self.service,
        })
    }
}

impl UpdateProjectRequest {
    pub fn apply_to(self, project: &mut Project) -> Result<(), ApiError> {
        let mut v = Violations::new();
        if let Some(name) = &self.name {
            v.non_empty(name, "name", "Name is required");
        }
        if let Some(total) = self.total_hours {
            v.check(total > 0, "totalHours", "Total hours must be positive");
        }
        if let Some(description) = &self.description {
            v.non_empty(description, "description", "Description is required");
        }
        check_codes(&mut v, self.cell, self.client, self.service);
        v.into_result()?;

        if let Some(name) = self.name {
            project.name = name.trim().to_string();
        }
        if let Some(total) = self.total_hours {
            project.total_hours = total;
        }
        if let Some(description) = self.description {
            project.description = description.trim().to_string();
        }
        project.cell = self.cell.unwrap_or(project.cell);
        project.client = self.client.unwrap_or(project.client);
        project.service = self.service.unwrap_or(project.service);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn request() -> CreateProjectRequest {
        CreateProjectRequest {
            name: "Sistema E-commerce".into(),
            total_hours: 120,
            description: "Storefront and checkout".into(),
            cell: 101,
            client: 1001,
            service: 2001,
        }
    }

    #[test]
    fn valid_create_passes() {
        let new = request().validate().expect("valid");
        assert_eq!(new.total_hours, 120);
        assert_eq!(new.cell, 101);
    }

    #[test]
    fn create_rejects_non_positive_hours_and_codes() {
        let req = CreateProjectRequest {
            total_hours: 0,
            client: -3,
            ..request()
        };
        match req.validate() {
            Err(ApiError::Validation(fields)) => {
                let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["totalHours", "client"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn update_keeps_missing_fields() {
        let mut project = Project {
            id: 3,
            name: "App Mobile Delivery".into(),
            total_hours: 80,
            description: "Delivery app".into(),
            cell: 102,
            client: 1002,
            service: 2002,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let req = UpdateProjectRequest {
            total_hours: Some(100),
            service: Some(2010),
            ..Default::default()
        };
        req.apply_to(&mut project).expect("valid");
        assert_eq!(project.total_hours, 100);
        assert_eq!(project.service, 2010);
        assert_eq!(project.cell, 102);
        assert_eq!(project.name, "App Mobile Delivery");
    }
}
