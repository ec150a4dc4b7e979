use crate::domain::image_intake::entities::ImageSource;

/// The raw byte streams a single submission can carry, one per source widget.
#[derive(Debug, Clone, Default)]
pub struct IntakeSubmission {
    pub uploaded: Option<Vec<u8>>,
    pub captured: Option<Vec<u8>>,
}

impl IntakeSubmission {
    /// Picks the payload to analyze. A captured frame wins over an upload
    /// when both are present in the same submission.
    pub fn select(self) -> Option<(Vec<u8>, ImageSource)> {
        if let Some(bytes) = self.captured {
            return Some((bytes, ImageSource::Captured));
        }

        self.uploaded.map(|bytes| (bytes, ImageSource::Uploaded))
    }
}
