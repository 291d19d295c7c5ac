//! Experience generation — relays a validated record to the text generator.
//!
//! Flow: credential check → render_prompt → one generate call → assemble result.
//! No retries and no fallback model.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::experience::prompts::render_prompt;
use crate::experience::validation::ProjectRecord;
use crate::llm_client::{TextGenerator, MODEL};
use crate::models::experience::GeneratedExperience;

/// Generates the experience summary for one record.
///
/// Fails with `AppError::Configuration` before touching `llm` when no API key
/// is configured.
pub async fn generate_experience(
    config: &Config,
    llm: &dyn TextGenerator,
    record: ProjectRecord,
) -> Result<GeneratedExperience, AppError> {
    // Logged once, by AppError::into_response.
    let Some(api_key) = config.openai_api_key.as_deref() else {
        return Err(AppError::Configuration(
            "OPENAI_API_KEY is not set".to_string(),
        ));
    };

    let request_id = Uuid::new_v4();
    let span = info_span!("generate_experience", %request_id);

    async move {
        let prompt = render_prompt(&record);
        info!(
            "Generating experience for '{}' (model: {MODEL}, prompt_chars: {})",
            record.project_title(),
            prompt.len()
        );

        let text = llm
            .generate(api_key, &prompt)
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        info!("Generated {} chars", text.len());
        Ok::<_, AppError>(record.into_generated(text))
    }
    .instrument(span)
    .await
}
