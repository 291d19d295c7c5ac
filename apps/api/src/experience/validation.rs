//! Field-by-field validation of an untrusted request body into a `ProjectRecord`.
//!
//! Every violation is collected before returning so the caller can fix the
//! whole form in one round trip.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::experience::GeneratedExperience;

/// A validated project experience record.
///
/// Fields are private and the only constructor is `validate_record`, so every
/// value is present, trimmed and non-empty, and cannot change afterwards.
/// Dates and hours are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    project_title: String,
    organization_name: String,
    start_date: String,
    end_date: String,
    total_hours: String,
    role: String,
    project_description: String,
    deliverables: String,
    challenges: String,
    initiating: String,
    planning: String,
    executing: String,
    monitoring_controlling: String,
    closing: String,
}

impl ProjectRecord {
    pub fn project_title(&self) -> &str {
        &self.project_title
    }

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn total_hours(&self) -> &str {
        &self.total_hours
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn project_description(&self) -> &str {
        &self.project_description
    }

    pub fn deliverables(&self) -> &str {
        &self.deliverables
    }

    pub fn challenges(&self) -> &str {
        &self.challenges
    }

    pub fn initiating(&self) -> &str {
        &self.initiating
    }

    pub fn planning(&self) -> &str {
        &self.planning
    }

    pub fn executing(&self) -> &str {
        &self.executing
    }

    pub fn monitoring_controlling(&self) -> &str {
        &self.monitoring_controlling
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }

    /// Consumes the record, keeping only its identifying fields.
    pub fn into_generated(self, generated_experience: String) -> GeneratedExperience {
        GeneratedExperience {
            project_title: self.project_title,
            organization_name: self.organization_name,
            role: self.role,
            start_date: self.start_date,
            end_date: self.end_date,
            total_hours: self.total_hours,
            generated_experience,
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    Missing,
    InvalidType,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    /// A violation on the request body as a whole (not an object, unparseable JSON).
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            field: "body".to_string(),
            code: ViolationCode::InvalidType,
            message: message.into(),
        }
    }
}

/// Wire name and "required" message for each field, in form order.
pub const REQUIRED_FIELDS: [(&str, &str); 14] = [
    ("projectTitle", "Project title is required"),
    ("organizationName", "Organization name is required"),
    ("startDate", "Start date is required"),
    ("endDate", "End date is required"),
    ("totalHours", "Total hours is required"),
    ("role", "Role is required"),
    ("projectDescription", "Project description is required"),
    ("deliverables", "Key deliverables are required"),
    ("challenges", "Challenges are required"),
    ("initiating", "Initiating activities are required"),
    ("planning", "Planning activities are required"),
    ("executing", "Executing activities are required"),
    (
        "monitoringControlling",
        "Monitoring & Controlling activities are required",
    ),
    ("closing", "Closing activities are required"),
];

/// Validates a JSON body and returns the trimmed record, or every violation found.
pub fn validate_record(body: &Value) -> Result<ProjectRecord, Vec<FieldViolation>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldViolation::body(
            "Request body must be a JSON object",
        )]);
    };

    let mut violations = Vec::new();
    let mut values: Vec<String> = Vec::with_capacity(REQUIRED_FIELDS.len());

    for (field, required_message) in REQUIRED_FIELDS {
        match check_field(object, field, required_message) {
            Ok(value) => values.push(value),
            Err(violation) => violations.push(violation),
        }
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    // All fourteen checks passed, so `values` is in REQUIRED_FIELDS order.
    let mut values = values.into_iter();
    let mut next = || values.next().unwrap_or_default();

    Ok(ProjectRecord {
        project_title: next(),
        organization_name: next(),
        start_date: next(),
        end_date: next(),
        total_hours: next(),
        role: next(),
        project_description: next(),
        deliverables: next(),
        challenges: next(),
        initiating: next(),
        planning: next(),
        executing: next(),
        monitoring_controlling: next(),
        closing: next(),
    })
}

fn check_field(
    object: &Map<String, Value>,
    field: &str,
    required_message: &str,
) -> Result<String, FieldViolation> {
    let violation = |code, message: String| FieldViolation {
        field: field.to_string(),
        code,
        message,
    };

    match object.get(field) {
        None | Some(Value::Null) => Err(violation(
            ViolationCode::Missing,
            required_message.to_string(),
        )),
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(violation(ViolationCode::Empty, required_message.to_string()))
            } else {
                Ok(trimmed.to_string())
            }
        }
        Some(other) => Err(violation(
            ViolationCode::InvalidType,
            format!("Expected string, received {}", json_type_name(other)),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
