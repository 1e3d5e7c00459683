use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;

const QUERY: [(&str, &str); 2] = [("base64_encoded", "false"), ("fields", "*")];

#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("invalid judge0 base url: {0}")]
    InvalidBaseUrl(String),
    #[error("request to judge0 failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("judge0 responded with status {status}")]
    Status { status: u16, body: Value },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub source_code: String,
    pub language_id: i32,
    pub stdin: String,
}

#[derive(Debug, Deserialize)]
struct SubmissionToken {
    token: String,
}

/// Judge0 (RapidAPI) 客户端，只做提交和按 token 查询两件事，不重试
#[derive(Clone)]
pub struct Judge0Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    host: String,
}

impl Judge0Client {
    pub fn new(config: &Config) -> Result<Self, JudgeError> {
        let base_url = Url::parse(&config.judge0_base_url)
            .map_err(|e| JudgeError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(JudgeError::InvalidBaseUrl(config.judge0_base_url.clone()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: config.judge0_api_key.clone(),
            host: config.judge0_host.clone(),
        })
    }

    /// 提交代码，返回 Judge0 的 token
    pub async fn submit(&self, req: &SubmissionRequest) -> Result<String, JudgeError> {
        let response = self
            .http
            .post(self.submissions_url(None)?)
            .query(&QUERY[..])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .json(req)
            .send()
            .await?;

        let submission: SubmissionToken = decode(response).await?;
        tracing::debug!("Judge0 accepted submission: {}", submission.token);
        Ok(submission.token)
    }

    /// 按 token 查询执行结果，负载原样返回
    pub async fn fetch(&self, token: &str) -> Result<Value, JudgeError> {
        let response = self
            .http
            .get(self.submissions_url(Some(token))?)
            .query(&QUERY[..])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .send()
            .await?;

        decode(response).await
    }

    fn submissions_url(&self, token: Option<&str>) -> Result<Url, JudgeError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| JudgeError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("submissions");
            if let Some(token) = token {
                segments.push(token);
            }
        }
        Ok(url)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, JudgeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    // 错误响应体尽量按 JSON 解析，否则包成字符串
    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    Err(JudgeError::Status {
        status: status.as_u16(),
        body,
    })
}
