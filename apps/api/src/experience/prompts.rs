// Prompt template for PMP experience generation.
// Field values are inserted verbatim; there is no delimiting of user text.

use crate::experience::validation::ProjectRecord;

/// Experience generation prompt.
/// Slots: {project_title}, {organization_name}, {role}, {start_date}, {end_date},
///        {total_hours}, {project_description}, {deliverables}, {challenges},
///        {initiating}, {planning}, {executing}, {monitoring_controlling}, {closing}
pub const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"You are a PMP Application Experience Generator. Generate a professional, PMI-compliant experience summary for a PMP exam application.

Project Details:
- Project Title: {project_title}
- Organization: {organization_name}
- Role: {role}
- Duration: {start_date} to {end_date}
- Hours Worked: {total_hours}
- Project Description: {project_description}
- Key Deliverables: {deliverables}
- Challenges Faced: {challenges}

Process Group Activities:
- Initiating: {initiating}
- Planning: {planning}
- Executing: {executing}
- Monitoring & Controlling: {monitoring_controlling}
- Closing: {closing}

Generate a professional PMP application experience entry that:
1. Focuses on project management responsibilities (not just technical work)
2. Covers all five PMI Process Groups clearly
3. Uses PMI language (stakeholder engagement, risk management, scope baseline, etc.)
4. Emphasizes leadership and decision-making
5. Is written professionally for PMP auditors

Format the output as follows:

**Project Summary**:
[3-5 sentence summary of project purpose, role, scope and value delivered]

**Process Group Responsibilities**:

**Initiating**:
[2-3 sentences describing initiating activities with PMI terminology]

**Planning**:
[2-3 sentences describing planning activities with PMI terminology]

**Executing**:
[2-3 sentences describing executing activities with PMI terminology]

**Monitoring & Controlling**:
[2-3 sentences describing monitoring & controlling activities with PMI terminology]

**Closing**:
[2-3 sentences describing closing activities with PMI terminology]

**Challenges Overcome**:
[2-3 sentences describing how challenges were addressed using project management skills]"#;

/// Section markers the model is asked to emit, in output order.
#[cfg(test)]
pub const SECTION_MARKERS: [&str; 7] = [
    "**Project Summary**:",
    "**Initiating**:",
    "**Planning**:",
    "**Executing**:",
    "**Monitoring & Controlling**:",
    "**Closing**:",
    "**Challenges Overcome**:",
];

/// Renders the generation prompt for a validated record.
pub fn render_prompt(record: &ProjectRecord) -> String {
    fill_template(
        EXPERIENCE_PROMPT_TEMPLATE,
        &[
            ("project_title", record.project_title()),
            ("organization_name", record.organization_name()),
            ("role", record.role()),
            ("start_date", record.start_date()),
            ("end_date", record.end_date()),
            ("total_hours", record.total_hours()),
            ("project_description", record.project_description()),
            ("deliverables", record.deliverables()),
            ("challenges", record.challenges()),
            ("initiating", record.initiating()),
            ("planning", record.planning()),
            ("executing", record.executing()),
            ("monitoring_controlling", record.monitoring_controlling()),
            ("closing", record.closing()),
        ],
    )
}

/// Single-pass `{slot}` substitution. Inserted values are never rescanned, so
/// a value that itself contains `{planning}` stays literal. Unknown slots are
/// left untouched.
pub fn fill_template(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 1024);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            slots
                .iter()
                .find(|(slot, _)| *slot == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
