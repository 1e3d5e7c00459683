use serde::{Deserialize, Serialize};

/// 支持的编程语言，附带 Judge0 语言编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "C++")]
    Cpp,
    Java,
    JavaScript,
    Python,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Cpp,
        Language::Java,
        Language::JavaScript,
        Language::Python,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
        }
    }

    /// Judge0 CE 的 language_id
    pub fn judge0_id(&self) -> i32 {
        match self {
            Language::Cpp => 54,
            Language::Java => 62,
            Language::JavaScript => 63,
            Language::Python => 71,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.name() == name)
    }
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub name: &'static str,
    pub id: i32,
}

impl From<Language> for LanguageInfo {
    fn from(lang: Language) -> Self {
        Self {
            name: lang.name(),
            id: lang.judge0_id(),
        }
    }
}
