use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    analysis::prompt::{ANALYSIS_TEMPERATURE, NUTRITION_PROMPT},
    common::generate_timestamp,
    image_intake::entities::{CanonicalImage, ImageSource},
};

/// One outbound analysis call. Created when the user supplies an image,
/// consumed exactly once by the vision client, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub source: ImageSource,
    pub payload: CanonicalImage,
    pub prompt: &'static str,
    pub temperature: f32,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRequest {
    pub fn new(source: ImageSource, payload: CanonicalImage) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            source,
            payload,
            prompt: NUTRITION_PROMPT,
            temperature: ANALYSIS_TEMPERATURE,
            created_at: now,
        }
    }
}

/// What the page renders: the model's text, verbatim, plus enough metadata
/// for the user to confirm what was analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub request_id: Uuid,
    pub source: ImageSource,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
    pub analysis: String,
    pub created_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(
        request_id: Uuid,
        source: ImageSource,
        mime_type: String,
        width: u32,
        height: u32,
        analysis: String,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            request_id,
            source,
            mime_type,
            width,
            height,
            analysis,
            created_at: now,
        }
    }
}
