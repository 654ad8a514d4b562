use std::time::Duration;

use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the input form to submit itself; answered with `Msg::FormSubmitted`.
    RequestFormSubmit,
    /// One-shot timer; answered with `Msg::SubmitUnlockElapsed`.
    ScheduleSubmitUnlock { after: Duration },
    /// Append a user-authored message to the conversation.
    AppendUserMessage { content: String },
    /// Retrieve enrichment for an admitted query.
    FetchEnrichment { request_id: RequestId, query: String },
    /// Empty the conversation and navigate back to the start page.
    ClearConversation,
    /// Stop the in-flight assistant reply.
    StopGeneration,
}
