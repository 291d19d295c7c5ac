use serde::Serialize;

/// Export name used when the title yields no usable slug.
pub const FALLBACK_DOWNLOAD_FILENAME: &str = "pmp-experience.txt";

/// The identifying fields of a record paired with the generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedExperience {
    pub project_title: String,
    pub organization_name: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub total_hours: String,
    pub generated_experience: String,
}

impl GeneratedExperience {
    /// Plain-text export document: identifying header block, blank line, summary.
    pub fn to_plain_text(&self) -> String {
        format!(
            "Project Title: {}\nOrganization: {}\nRole: {}\nDuration: {} to {}\nHours Worked: {}\n\n{}",
            self.project_title,
            self.organization_name,
            self.role,
            self.start_date,
            self.end_date,
            self.total_hours,
            self.generated_experience
        )
    }

    /// `pmp-experience-<slug>.txt`, where the slug is the lowercased title with
    /// each whitespace run collapsed into a single `-`. Quotes and path
    /// separators are dropped so the name is safe in a `Content-Disposition`.
    /// An empty slug gives `FALLBACK_DOWNLOAD_FILENAME`.
    pub fn download_filename(&self) -> String {
        let title: String = self
            .project_title
            .chars()
            .filter(|c| !matches!(c, '"' | '\\' | '/') && (c.is_whitespace() || !c.is_control()))
            .collect();
        let slug = title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        if slug.is_empty() {
            return FALLBACK_DOWNLOAD_FILENAME.to_string();
        }
        format!("pmp-experience-{slug}.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedExperience {
        GeneratedExperience {
            project_title: "CRM Rollout".to_string(),
            organization_name: "Acme".to_string(),
            role: "PM".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-06-01".to_string(),
            total_hours: "500".to_string(),
            generated_experience: "**Project Summary**:\nDelivered the CRM.".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["projectTitle"], "CRM Rollout");
        assert_eq!(value["organizationName"], "Acme");
        assert_eq!(value["startDate"], "2023-01-01");
        assert_eq!(value["endDate"], "2023-06-01");
        assert_eq!(value["totalHours"], "500");
        assert!(value["generatedExperience"]
            .as_str()
            .unwrap()
            .starts_with("**Project Summary**"));
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_plain_text_export_layout() {
        let text = sample().to_plain_text();
        assert_eq!(
            text,
            "Project Title: CRM Rollout\n\
             Organization: Acme\n\
             Role: PM\n\
             Duration: 2023-01-01 to 2023-06-01\n\
             Hours Worked: 500\n\
             \n\
             **Project Summary**:\nDelivered the CRM."
        );
    }

    #[test]
    fn test_download_filename_slugifies_title() {
        assert_eq!(sample().download_filename(), "pmp-experience-crm-rollout.txt");

        let mut spaced = sample();
        spaced.project_title = "Data  Center\tMove".to_string();
        assert_eq!(
            spaced.download_filename(),
            "pmp-experience-data-center-move.txt"
        );
    }

    #[test]
    fn test_download_filename_drops_header_unsafe_characters() {
        let mut quoted = sample();
        quoted.project_title = "The \"Big\" A/B Test".to_string();
        assert_eq!(
            quoted.download_filename(),
            "pmp-experience-the-big-ab-test.txt"
        );
    }

    #[test]
    fn test_download_filename_falls_back_when_slug_is_empty() {
        let mut separators_only = sample();
        separators_only.project_title = "\"/\\ \"".to_string();
        assert_eq!(separators_only.download_filename(), FALLBACK_DOWNLOAD_FILENAME);
    }
}
