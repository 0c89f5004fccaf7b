//! 远程 API 数据模型
//!
//! 所有响应都包裹在 `{ "data": ... }` 信封中。单词的每个字段都可能缺失或为 `null`。

use serde::{Deserialize, Serialize};

/// 响应信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// 课程（等级）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// 等级编号，同时作为请求单词列表的 ID
    pub level_no: i64,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "lessonName")]
    pub lesson_name: Option<String>,
}

impl Lesson {
    pub fn new(level_no: i64) -> Self {
        Self {
            level_no,
            id: None,
            lesson_name: None,
        }
    }

    /// 按钮上显示的标签
    pub fn label(&self) -> String {
        format!("Lesson - {}", self.level_no)
    }
}

/// 单词记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: Option<i64>,
    pub word: Option<String>,
    pub pronunciation: Option<String>,
    pub meaning: Option<String>,
    pub sentence: Option<String>,
    pub synonyms: Option<Vec<String>>,
}

impl Word {
    /// 单词文本；空白字符串视为缺失
    pub fn text(&self) -> Option<&str> {
        present(&self.word)
    }

    pub fn pronunciation(&self) -> Option<&str> {
        present(&self.pronunciation)
    }

    pub fn meaning(&self) -> Option<&str> {
        present(&self.meaning)
    }

    pub fn sentence(&self) -> Option<&str> {
        present(&self.sentence)
    }

    /// 近义词列表，缺失时返回空切片
    pub fn synonyms(&self) -> &[String] {
        self.synonyms.as_deref().unwrap_or(&[])
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}
