//! Turn a narration request into display text
//!
//! The narrator's reply is shown verbatim apart from emphasis stripping.
//! It is never parsed for state changes.

use crate::core::error::Result;
use crate::llm::client::LlmClient;
use crate::llm::context::NarrationRequest;

/// Shown when delegation was wanted but no narrator is configured
pub const NARRATOR_UNAVAILABLE: &str = "LLM support is not available. Using basic descriptions.";

/// Shown when the narrator fails or returns nothing
pub const NARRATOR_FALLBACK: &str = "The situation doesn't seem to change.";

/// Ask the narrator to describe the outcome of a turn
pub async fn narrate(client: &LlmClient, request: &NarrationRequest) -> Result<String> {
    let response = client
        .complete(request.system_prompt(), &request.user_prompt())
        .await?;
    Ok(clean_narration(&response))
}

/// Strip markdown emphasis and surrounding whitespace
pub fn clean_narration(response: &str) -> String {
    let text = response.replace('*', "");
    let text = text.trim();
    if text.is_empty() {
        tracing::warn!("Narrator returned an empty response");
        return NARRATOR_FALLBACK.to_string();
    }
    text.to_string()
}
