use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::speech::SpeechConfig;
use crate::view::Region;

const DEFAULT_API_BASE_URL: &str = "https://openapi.programming-hero.com/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("api base url must not be empty")]
    EmptyBaseUrl,
}

/// 小组件配置；每个分节都可以省略，省略时取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub api: ApiConfig,
    pub speech: SpeechConfig,
    pub dom: DomIds,
    pub placeholders: Placeholders,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            speech: SpeechConfig::default(),
            dom: DomIds::default(),
            placeholders: Placeholders::default(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validated()
    }

    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let base_url = self.api.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        self.api.base_url = base_url.to_string();
        if self.log_level.trim().is_empty() {
            self.log_level = "info".to_string();
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// 宿主页面必须提供的元素 ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomIds {
    pub lesson_list: String,
    pub word_list: String,
    pub spinner: String,
    pub detail_body: String,
    pub detail_modal: String,
    pub search_input: String,
    pub search_button: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            lesson_list: "level-container".to_string(),
            word_list: "word-container".to_string(),
            spinner: "spinner".to_string(),
            detail_body: "details-container".to_string(),
            detail_modal: "word_modal".to_string(),
            search_input: "input-search".to_string(),
            search_button: "btn-search".to_string(),
        }
    }
}

impl DomIds {
    pub fn id(&self, region: Region) -> &str {
        match region {
            Region::LessonList => &self.lesson_list,
            Region::WordList => &self.word_list,
            Region::Spinner => &self.spinner,
            Region::DetailBody => &self.detail_body,
            Region::DetailModal => &self.detail_modal,
            Region::SearchInput => &self.search_input,
            Region::SearchButton => &self.search_button,
        }
    }
}

/// 字段缺失时显示的占位文本与空状态文案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub word: String,
    pub meaning: String,
    pub pronunciation: String,
    pub sentence: String,
    pub synonyms: String,
    pub empty_image: String,
    pub empty_notice: String,
    pub empty_hint: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            word: "শব্দ পাওয়া যায়নি".to_string(),
            meaning: "অর্থ পাওয়া যায়নি".to_string(),
            pronunciation: "Pronunciation পাওয়া যায়নি".to_string(),
            sentence: "উদাহরণ পাওয়া যায়নি".to_string(),
            synonyms: "সমার্থক শব্দ পাওয়া যায়নি".to_string(),
            empty_image: "./assets/alert-error.png".to_string(),
            empty_notice: "এই Lesson এ এখনো কোন Vocabulary যুক্ত করা হয়নি।".to_string(),
            empty_hint: "নেক্সট Lesson এ যান".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(
            r#"{"api": {"base_url": "http://localhost:9000/api/"}, "speech": {"language": "en-GB"}}"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.speech.language, "en-GB");
        assert_eq!(config.speech.rate, 1.0);
        assert_eq!(config.dom.word_list, "word-container");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = WidgetConfig::from_json(r#"{"api": {"base_url": "  "}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBaseUrl));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            WidgetConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_dom_ids_by_region() {
        let ids = DomIds::default();
        assert_eq!(ids.id(Region::DetailModal), "word_modal");
        assert_eq!(ids.id(Region::SearchButton), "btn-search");
    }
}
