use crate::domain::{
    analysis::{
        entities::{AnalysisReport, AnalysisRequest},
        ports::{AnalysisService, VisionClient},
    },
    common::{entities::app_errors::CoreError, services::Service},
    image_intake::entities::{CanonicalImage, ImageSource},
};

impl<LLM> AnalysisService for Service<LLM>
where
    LLM: VisionClient,
{
    async fn analyze_image(
        &self,
        payload: CanonicalImage,
        source: ImageSource,
    ) -> Result<AnalysisReport, CoreError> {
        let request = AnalysisRequest::new(source, payload);

        tracing::debug!(
            request_id = %request.id,
            source = request.source.as_str(),
            width = request.payload.width,
            height = request.payload.height,
            phase = "calling_service",
            "dispatching analysis to the vision model"
        );

        let AnalysisRequest {
            id,
            source,
            payload,
            prompt,
            temperature,
            ..
        } = request;
        let CanonicalImage {
            bytes,
            mime_type,
            width,
            height,
        } = payload;

        let analysis = self
            .vision_client
            .generate_from_image(prompt.to_string(), bytes, mime_type.clone(), temperature)
            .await?;

        tracing::debug!(request_id = %id, "analysis rendered");

        Ok(AnalysisReport::new(
            id, source, mime_type, width, height, analysis,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Mutex};

    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    use super::*;
    use crate::domain::{
        analysis::prompt::{ANALYSIS_TEMPERATURE, NUTRITION_PROMPT},
        image_intake::{entities::CANONICAL_MIME_TYPE, services::intake},
    };

    struct StubVisionClient {
        reply: Result<String, CoreError>,
        calls: Mutex<Vec<(String, Vec<u8>, String, f32)>>,
    }

    impl StubVisionClient {
        fn replying(reply: Result<String, CoreError>) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl VisionClient for StubVisionClient {
        async fn generate_from_image(
            &self,
            prompt: String,
            image_data: Vec<u8>,
            mime_type: String,
            temperature: f32,
        ) -> Result<String, CoreError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt, image_data, mime_type, temperature));
            self.reply.clone()
        }
    }

    fn png_fixture() -> Vec<u8> {
        let banana = DynamicImage::ImageRgb8(RgbImage::from_pixel(6, 4, Rgb([240, 220, 60])));
        let mut bytes = Vec::new();
        banana
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn stubbed_collaborator_text_is_reported_verbatim() {
        let canonical = intake(&png_fixture()).unwrap();
        assert_eq!(canonical.mime_type, CANONICAL_MIME_TYPE);

        let service = Service::new(StubVisionClient::replying(Ok("Banana: ...".to_string())));

        let report = service
            .analyze_image(canonical, ImageSource::Uploaded)
            .await
            .unwrap();

        assert_eq!(report.analysis, "Banana: ...");
        assert_eq!(report.mime_type, CANONICAL_MIME_TYPE);
        assert_eq!(report.source, ImageSource::Uploaded);
    }

    #[tokio::test]
    async fn the_fixed_prompt_and_temperature_are_always_sent() {
        let canonical = intake(&png_fixture()).unwrap();
        let payload_bytes = canonical.bytes.clone();

        let service = Service::new(StubVisionClient::replying(Ok("ok".to_string())));
        service
            .analyze_image(canonical, ImageSource::Captured)
            .await
            .unwrap();

        let calls = service.vision_client.calls.lock().unwrap();
        let (prompt, image_data, mime_type, temperature) = &calls[0];

        assert_eq!(prompt, NUTRITION_PROMPT);
        assert_eq!(image_data, &payload_bytes);
        assert_eq!(mime_type, CANONICAL_MIME_TYPE);
        assert_eq!(*temperature, ANALYSIS_TEMPERATURE);
    }

    #[tokio::test]
    async fn collaborator_failure_surfaces_the_raw_detail() {
        let canonical = intake(&png_fixture()).unwrap();
        let service = Service::new(StubVisionClient::replying(Err(
            CoreError::ExternalServiceError("429 Too Many Requests".to_string()),
        )));

        let err = service
            .analyze_image(canonical, ImageSource::Uploaded)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::ExternalServiceError("429 Too Many Requests".to_string())
        );
    }
}
