use serde::{Deserialize, Serialize};

use crate::clients::SubmissionRequest;

#[derive(Debug, Deserialize)]
pub struct SubmitCodeRequest {
    pub source_code: String,
    pub language_id: i32,
    #[serde(default)]
    pub stdin: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitCodeResponse {
    pub token: String,
}

impl From<SubmitCodeRequest> for SubmissionRequest {
    fn from(req: SubmitCodeRequest) -> Self {
        Self {
            source_code: req.source_code,
            language_id: req.language_id,
            stdin: req.stdin,
        }
    }
}
