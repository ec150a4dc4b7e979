use std::future::Future;

use crate::domain::{
    analysis::entities::AnalysisReport,
    common::entities::app_errors::CoreError,
    image_intake::entities::{CanonicalImage, ImageSource},
};

/// Client port for the external multimodal inference service. The concrete
/// protocol is owned entirely by the infrastructure adapter; callers see one
/// opaque request/response contract.
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    fn generate_from_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        temperature: f32,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the analysis use case.
pub trait AnalysisService: Send + Sync {
    fn analyze_image(
        &self,
        payload: CanonicalImage,
        source: ImageSource,
    ) -> impl Future<Output = Result<AnalysisReport, CoreError>> + Send;
}
