//! 视图控制器
//!
//! 响应启动与点击事件：调用 [`DataGateway`] 拉取数据，交给渲染器，再把更新写入 [`Surface`]。
//!
//! 所有处理函数都只需要 `&self`，可以在同一线程上并发挂起。网络请求失败只记录日志，
//! 界面保持原状；不取消、不重试，较晚返回的单词列表会覆盖较早的结果。

use std::cell::{Cell, Ref, RefCell};

use tracing::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::gateway::DataGateway;
use crate::render::{LessonRenderer, WordRenderer};
use crate::search::SearchQuery;
use crate::speech::{Speaker, SpeechConfig};
use crate::view::{Action, Region, Surface, UiUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    LoadingLessons,
    LoadingWords,
    ShowingWords,
    ShowingDetail,
}

pub struct ViewController<G, S, P> {
    gateway: G,
    surface: RefCell<S>,
    speaker: P,
    speech: SpeechConfig,
    lessons: LessonRenderer,
    words: WordRenderer,
    state: Cell<ViewState>,
}

impl<G, S, P> ViewController<G, S, P>
where
    G: DataGateway,
    S: Surface,
    P: Speaker,
{
    pub fn new(config: &WidgetConfig, gateway: G, surface: S, speaker: P) -> Self {
        Self {
            gateway,
            surface: RefCell::new(surface),
            speaker,
            speech: config.speech.clone(),
            lessons: LessonRenderer,
            words: WordRenderer::new(config.placeholders.clone()),
            state: Cell::new(ViewState::Idle),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state.get()
    }

    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn speaker(&self) -> &P {
        &self.speaker
    }

    fn apply<I>(&self, updates: I)
    where
        I: IntoIterator<Item = UiUpdate>,
    {
        self.surface.borrow_mut().apply_all(updates);
    }

    fn show_spinner(&self, loading: bool) {
        self.apply([
            UiUpdate::SetHidden {
                region: Region::Spinner,
                hidden: !loading,
            },
            UiUpdate::SetHidden {
                region: Region::WordList,
                hidden: loading,
            },
        ]);
    }

    /// 启动：加载全部课程并渲染按钮
    pub async fn start(&self) {
        self.state.set(ViewState::LoadingLessons);
        match self.gateway.fetch_all_lessons().await {
            Ok(lessons) => {
                info!(count = lessons.len(), "lessons loaded");
                self.apply([self.lessons.render(&lessons)]);
            }
            Err(err) => warn!(error = %err, "failed to load lessons"),
        }
        self.state.set(ViewState::Idle);
    }

    /// 点击课程按钮
    pub async fn select_lesson(&self, level_no: i64) {
        let previous = self.state.get();
        self.show_spinner(true);
        self.apply([
            UiUpdate::ClearActiveLessons,
            UiUpdate::ActivateLesson(level_no),
        ]);
        self.state.set(ViewState::LoadingWords);

        match self.gateway.fetch_words_for_lesson(level_no).await {
            Ok(words) => {
                debug!(level_no, count = words.len(), "lesson words loaded");
                self.show_spinner(false);
                self.apply([self.words.render_word_list(&words)]);
                self.state.set(ViewState::ShowingWords);
            }
            Err(err) => {
                warn!(level_no, error = %err, "failed to load lesson words");
                self.show_spinner(false);
                self.state.set(previous);
            }
        }
    }

    /// 点击搜索按钮；`raw` 为搜索框原始内容
    pub async fn search(&self, raw: &str) {
        let previous = self.state.get();
        self.apply([UiUpdate::ClearActiveLessons]);
        let query = SearchQuery::new(raw);
        debug!(query = query.as_str(), "searching words");
        self.state.set(ViewState::LoadingWords);

        match self.gateway.fetch_all_words().await {
            Ok(words) => {
                let total = words.len();
                let matched = query.filter(words);
                debug!(total, matched = matched.len(), "search finished");
                self.apply([self.words.render_word_list(&matched)]);
                self.state.set(ViewState::ShowingWords);
            }
            Err(err) => {
                warn!(error = %err, "failed to load words for search");
                self.state.set(previous);
            }
        }
    }

    /// 点击单词卡片的详情按钮
    pub async fn show_detail(&self, word_id: i64) {
        match self.gateway.fetch_word_detail(word_id).await {
            Ok(word) => {
                self.apply(self.words.render_word_detail(&word));
                self.state.set(ViewState::ShowingDetail);
            }
            Err(err) => warn!(word_id, error = %err, "failed to load word detail"),
        }
    }

    /// 朗读单词，不改变控制器状态
    pub fn pronounce(&self, text: &str) {
        if let Err(err) = self.speaker.speak(text, &self.speech) {
            warn!(text, error = %err, "pronunciation failed");
        }
    }

    /// 分发按钮上的操作
    pub async fn dispatch(&self, action: Action) {
        match action {
            Action::SelectLesson(level_no) => self.select_lesson(level_no).await,
            Action::ShowDetail(word_id) => self.show_detail(word_id).await,
            Action::Pronounce(text) => self.pronounce(&text),
        }
    }
}
