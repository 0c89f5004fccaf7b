//! 客户端搜索过滤

use crate::model::Word;

/// 规范化后的搜索词：去除首尾空白并转为小写
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 对 `word` 字段做不区分大小写的子串匹配；没有 `word` 或只有空白的记录永不匹配
    pub fn matches(&self, word: &Word) -> bool {
        word.text().is_some_and(|text| text.to_lowercase().contains(&self.0))
    }

    /// 保持输入顺序
    pub fn filter(&self, words: Vec<Word>) -> Vec<Word> {
        words.into_iter().filter(|word| self.matches(word)).collect()
    }
}
