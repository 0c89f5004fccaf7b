#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use vocab_widget::{
    DataGateway, GatewayError, Lesson, Speaker, SpeechConfig, SpeechError, ViewController,
    ViewModel, WidgetConfig, Word,
};

pub type TestController = ViewController<StubGateway, ViewModel, RecordingSpeaker>;

pub fn unavailable() -> GatewayError {
    GatewayError::HttpStatus {
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        body: "unavailable".to_string(),
    }
}

pub fn word(id: i64, text: &str) -> Word {
    Word {
        id: Some(id),
        word: Some(text.to_string()),
        pronunciation: Some(format!("{}-pron", text.to_lowercase())),
        meaning: Some(format!("{}-meaning", text.to_lowercase())),
        sentence: Some(format!("An example with {text}.")),
        synonyms: Some(Vec::new()),
    }
}

/// 内存网关：未配置的数据按网络失败处理
#[derive(Default)]
pub struct StubGateway {
    pub lessons: Option<Vec<Lesson>>,
    pub lesson_words: HashMap<i64, Vec<Word>>,
    pub details: HashMap<i64, Word>,
    pub all_words: Option<Vec<Word>>,
    pub delays: HashMap<String, Duration>,
    pub calls: RefCell<Vec<String>>,
}

impl StubGateway {
    pub fn with_lessons(levels: &[i64]) -> Self {
        Self {
            lessons: Some(levels.iter().copied().map(Lesson::new).collect()),
            ..Default::default()
        }
    }

    pub fn words(mut self, level_no: i64, words: Vec<Word>) -> Self {
        self.lesson_words.insert(level_no, words);
        self
    }

    pub fn detail(mut self, word: Word) -> Self {
        if let Some(id) = word.id {
            self.details.insert(id, word);
        }
        self
    }

    pub fn all_words(mut self, words: Vec<Word>) -> Self {
        self.all_words = Some(words);
        self
    }

    /// 让某个端点（如 `level/1`、`words/all`）延迟返回
    pub fn delay(mut self, path: &str, millis: u64) -> Self {
        self.delays.insert(path.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    async fn record(&self, call: String) {
        let delay = self.delays.get(&call).copied();
        self.calls.borrow_mut().push(call);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl DataGateway for StubGateway {
    async fn fetch_all_lessons(&self) -> Result<Vec<Lesson>, GatewayError> {
        self.record("levels/all".to_string()).await;
        self.lessons.clone().ok_or_else(unavailable)
    }

    async fn fetch_words_for_lesson(&self, level_no: i64) -> Result<Vec<Word>, GatewayError> {
        self.record(format!("level/{level_no}")).await;
        self.lesson_words
            .get(&level_no)
            .cloned()
            .ok_or_else(unavailable)
    }

    async fn fetch_word_detail(&self, word_id: i64) -> Result<Word, GatewayError> {
        self.record(format!("word/{word_id}")).await;
        self.details.get(&word_id).cloned().ok_or_else(unavailable)
    }

    async fn fetch_all_words(&self) -> Result<Vec<Word>, GatewayError> {
        self.record("words/all".to_string()).await;
        self.all_words.clone().ok_or_else(unavailable)
    }
}

#[derive(Default)]
pub struct RecordingSpeaker {
    pub spoken: RefCell<Vec<(String, String)>>,
    pub fail: bool,
}

impl Speaker for RecordingSpeaker {
    fn speak(&self, text: &str, config: &SpeechConfig) -> Result<(), SpeechError> {
        if self.fail {
            return Err(SpeechError::SpeakFailed("synthesizer busy".to_string()));
        }
        self.spoken
            .borrow_mut()
            .push((text.to_string(), config.language.clone()));
        Ok(())
    }
}

pub fn controller(gateway: StubGateway) -> TestController {
    ViewController::new(
        &WidgetConfig::default(),
        gateway,
        ViewModel::new(),
        RecordingSpeaker::default(),
    )
}
