use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Language, NewSnippet};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnippetRequest {
    pub username: String,
    pub code_language: String,
    #[serde(default)]
    pub stdin: String,
    pub source_code: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSnippetResponse {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 路径中的片段 id，非数字时返回 JSON 格式的 400
pub fn parse_snippet_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("Invalid snippet id: {}", raw)))
}

impl CreateSnippetRequest {
    pub fn validate(self) -> Result<NewSnippet, AppError> {
        if self.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".into()));
        }
        if self.source_code.trim().is_empty() {
            return Err(AppError::Validation("Source code is required".into()));
        }
        let language = Language::from_name(&self.code_language).ok_or_else(|| {
            AppError::Validation(format!("Unsupported language: {}", self.code_language))
        })?;

        Ok(NewSnippet {
            username: self.username,
            language,
            stdin: self.stdin,
            source_code: self.source_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, code_language: &str, source_code: &str) -> CreateSnippetRequest {
        CreateSnippetRequest {
            username: username.into(),
            code_language: code_language.into(),
            stdin: "1".into(),
            source_code: source_code.into(),
        }
    }

    #[test]
    fn test_camel_case_body() {
        let req: CreateSnippetRequest = serde_json::from_value(serde_json::json!({
            "username": "a",
            "codeLanguage": "Python",
            "stdin": "1",
            "sourceCode": "print(1)"
        }))
        .unwrap();

        let new = req.validate().unwrap();
        assert_eq!(new.username, "a");
        assert_eq!(new.language, Language::Python);
        assert_eq!(new.source_code, "print(1)");
    }

    #[test]
    fn test_stdin_defaults_to_empty() {
        let req: CreateSnippetRequest = serde_json::from_value(serde_json::json!({
            "username": "a",
            "codeLanguage": "C++",
            "sourceCode": "int main() {}"
        }))
        .unwrap();
        assert_eq!(req.stdin, "");
    }

    #[test]
    fn test_parse_snippet_id() {
        assert_eq!(parse_snippet_id("42").unwrap(), 42);
        let err = parse_snippet_id("abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid snippet id: abc");
        assert!(parse_snippet_id("99999999999").is_err());
    }

    #[test]
    fn test_rejects_unknown_language() {
        let err = request("a", "Cobol", "DISPLAY 1").validate().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language: Cobol");
    }

    #[test]
    fn test_rejects_blank_fields() {
        assert!(matches!(
            request("  ", "Python", "print(1)").validate(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            request("a", "Python", "\n").validate(),
            Err(AppError::Validation(_))
        ));
    }
}
