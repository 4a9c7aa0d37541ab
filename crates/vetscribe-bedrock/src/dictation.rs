//! Exam dictation parsing via the Bedrock Converse API.
//!
//! Sends free dictation text to a Claude model and asks for a JSON patch
//! against the neurologic exam catalog. The result flows through the same
//! merge path as a preset, so a hallucinated section or flag can never
//! corrupt a record: ids outside the catalog are dropped here, and the
//! merge itself never touches identity fields.

use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use serde::Deserialize;
use tracing::info;

use vetscribe_catalogs::exam;
use vetscribe_core::models::exam::{ExamPatch, ExamSection, SectionPatch};
use vetscribe_core::models::flags::FlagList;
use vetscribe_core::models::section::{SectionState, SectionStatus};

use crate::error::BedrockError;

const DICTATION_PROMPT_PREAMBLE: &str = "\
You convert a veterinarian's dictated neurologic examination into a JSON \
patch. Respond with a single JSON object and nothing else, shaped like:\n\
{\"history\": \"two week history of back pain\", \"sections\": [{\"section\": \
\"gait\", \"status\": \"abnormal\", \"flags\": [\"paraparesis\"], \"note\": \"\"}]}\n\
Rules:\n\
- \"status\" is one of \"none\", \"normal\", \"abnormal\".\n\
- Include a section only when the dictation addresses it; \"none\" means the \
clinician said it was not examined.\n\
- \"flags\" may only contain ids listed below for that section. Never invent \
an id; wording with no matching flag belongs in \"note\".\n\
- Omit \"history\" unless the dictation includes presenting history.\n\
Sections and their flag ids:\n";

/// System prompt for dictation parsing: the JSON contract plus the full
/// section and flag catalog, so the model patches against real ids instead
/// of inventing its own.
pub fn dictation_system_prompt() -> String {
    let mut prompt = String::from(DICTATION_PROMPT_PREAMBLE);
    for def in exam::sections() {
        let ids: Vec<&str> = def.flags.iter().map(|f| f.id.as_str()).collect();
        prompt.push_str(&format!(
            "- {}: {}\n",
            section_wire_id(def.id),
            ids.join(", ")
        ));
    }
    prompt
}

/// Parse dictated exam findings into an [`ExamPatch`] via Bedrock.
///
/// The caller chooses the model (e.g. a Claude Sonnet inference profile)
/// and applies the returned patch through the regular merge path.
pub async fn parse_exam_dictation(
    config: &aws_config::SdkConfig,
    model_id: &str,
    text: &str,
) -> Result<ExamPatch, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(text.to_string()))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    info!(model_id, text_len = text.len(), "parsing exam dictation");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(dictation_system_prompt()))
        .messages(message)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let reply = response_text(&response)?;
    let patch = patch_from_response(&reply)?;

    info!(
        model_id,
        sections = patch.sections.len(),
        "exam dictation parsed"
    );

    Ok(patch)
}

/// Concatenate the text blocks of a Converse response.
pub fn response_text(response: &ConverseOutput) -> Result<String, BedrockError> {
    let message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(text)
}

#[derive(Debug, Deserialize)]
struct RawPatch {
    #[serde(default)]
    history: Option<String>,
    #[serde(default)]
    sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    section: String,
    status: String,
    #[serde(default)]
    flags: Vec<String>,
    #[serde(default)]
    note: Option<String>,
}

/// Turn a model reply into an [`ExamPatch`].
///
/// Accepts raw JSON, a ```json fence, or JSON embedded in prose. Sections
/// and flags outside the catalog are dropped, not errors; an unrecognized
/// status literal is a schema violation because the entry cannot be
/// interpreted safely.
pub fn patch_from_response(reply: &str) -> Result<ExamPatch, BedrockError> {
    let json = extract_json(reply)
        .ok_or_else(|| BedrockError::ResponseParse("no JSON object in response".to_string()))?;

    let raw: RawPatch = serde_json::from_str(json)?;

    let mut patch = ExamPatch {
        history: raw
            .history
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty()),
        sections: Vec::new(),
    };

    for entry in raw.sections {
        let Some(section) = parse_section_id(&entry.section) else {
            continue;
        };
        let status = parse_status(&entry.status)?;

        let mut state = SectionState {
            status,
            data: FlagList::new(),
            note: entry.note.map(|n| n.trim().to_string()).unwrap_or_default(),
        };
        if status == SectionStatus::Abnormal {
            let kept: Vec<String> = entry
                .flags
                .into_iter()
                .filter(|id| exam::flag_label(section, id).is_some())
                .collect();
            state.data = FlagList::from_active(kept);
        }
        patch.sections.push(SectionPatch { section, state });
    }

    Ok(patch)
}

/// Resolve a section id from model output. Ids outside the catalog resolve
/// to `None` and the caller drops the entry.
fn parse_section_id(id: &str) -> Option<ExamSection> {
    serde_json::from_value(serde_json::Value::String(id.to_string())).ok()
}

fn parse_status(status: &str) -> Result<SectionStatus, BedrockError> {
    match status.to_lowercase().as_str() {
        "none" => Ok(SectionStatus::None),
        "normal" => Ok(SectionStatus::Normal),
        "abnormal" => Ok(SectionStatus::Abnormal),
        other => Err(BedrockError::SchemaViolation(format!(
            "unrecognized section status {other:?}"
        ))),
    }
}

/// Wire id of a section as it appears in record JSON (`"mental_status"`).
fn section_wire_id(section: ExamSection) -> String {
    match serde_json::to_value(section) {
        Ok(serde_json::Value::String(id)) => id,
        _ => String::new(),
    }
}

/// Locate the JSON object inside a model reply.
///
/// Models asked for bare JSON still sometimes wrap it in a fence or lead
/// with a sentence, so this scans from the first `{` and returns the
/// balanced object. Braces inside JSON strings do not count toward the
/// balance.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + i]);
                }
            }
            _ => {}
        }
    }

    None
}
