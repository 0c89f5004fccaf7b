//! 视图模型
//!
//! 渲染器不直接操作 DOM，而是产出 [`UiUpdate`]；[`Surface`] 负责落地。
//! - 浏览器宿主：把更新写入真实 DOM
//! - [`ViewModel`]：内存中的页面镜像，用于测试与无界面运行

pub mod markup;

use std::collections::{BTreeSet, HashMap, HashSet};

pub use markup::{render_html, select, Element, Node};

pub const ATTR_ACTION: &str = "data-action";
pub const ATTR_VALUE: &str = "data-value";

/// 宿主页面中的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    LessonList,
    WordList,
    Spinner,
    DetailBody,
    DetailModal,
    SearchInput,
    SearchButton,
}

/// 一次界面更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// 整体替换区域内容
    Replace { region: Region, nodes: Vec<Node> },
    SetHidden { region: Region, hidden: bool },
    /// 取消所有课程按钮的激活状态
    ClearActiveLessons,
    ActivateLesson(i64),
    ShowModal,
}

/// 按钮上携带的用户操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectLesson(i64),
    ShowDetail(i64),
    Pronounce(String),
}

impl Action {
    pub const SELECT_LESSON: &'static str = "select-lesson";
    pub const SHOW_DETAIL: &'static str = "show-detail";
    pub const PRONOUNCE: &'static str = "pronounce";

    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectLesson(_) => Self::SELECT_LESSON,
            Action::ShowDetail(_) => Self::SHOW_DETAIL,
            Action::Pronounce(_) => Self::PRONOUNCE,
        }
    }

    pub fn value(&self) -> String {
        match self {
            Action::SelectLesson(level_no) => level_no.to_string(),
            Action::ShowDetail(word_id) => word_id.to_string(),
            Action::Pronounce(text) => text.clone(),
        }
    }

    /// 从 `data-action` / `data-value` 属性还原操作
    pub fn from_data(action: &str, value: Option<&str>) -> Option<Self> {
        let value = value?;
        match action {
            Self::SELECT_LESSON => value.trim().parse().ok().map(Action::SelectLesson),
            Self::SHOW_DETAIL => value.trim().parse().ok().map(Action::ShowDetail),
            Self::PRONOUNCE => Some(Action::Pronounce(value.to_string())),
            _ => None,
        }
    }

    pub fn from_element(element: &Element) -> Option<Self> {
        Self::from_data(element.get_attr(ATTR_ACTION)?, element.get_attr(ATTR_VALUE))
    }

    /// 给元素挂上操作属性
    pub fn bind(&self, element: Element) -> Element {
        element
            .attr(ATTR_ACTION, self.name())
            .attr(ATTR_VALUE, self.value())
    }
}

/// 界面更新的落地目标
pub trait Surface {
    fn apply(&mut self, update: UiUpdate);

    fn apply_all<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = UiUpdate>,
        Self: Sized,
    {
        for update in updates {
            self.apply(update);
        }
    }
}

pub const LESSON_BUTTON_CLASS: &str = "lesson-btn";
pub const WORD_CARD_CLASS: &str = "word-card";
pub const EMPTY_STATE_CLASS: &str = "empty-state";
pub const SYNONYM_CLASS: &str = "synonym";

/// 页面的内存镜像
#[derive(Debug, Clone)]
pub struct ViewModel {
    regions: HashMap<Region, Vec<Node>>,
    hidden: HashSet<Region>,
    active_lessons: BTreeSet<i64>,
    modal_open: bool,
    modal_shown_count: usize,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModel {
    /// 初始页面：加载指示器隐藏，其余区域为空
    pub fn new() -> Self {
        let mut hidden = HashSet::new();
        hidden.insert(Region::Spinner);
        Self {
            regions: HashMap::new(),
            hidden,
            active_lessons: BTreeSet::new(),
            modal_open: false,
            modal_shown_count: 0,
        }
    }

    pub fn region(&self, region: Region) -> &[Node] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_hidden(&self, region: Region) -> bool {
        self.hidden.contains(&region)
    }

    pub fn lesson_buttons(&self) -> Vec<&Element> {
        select(self.region(Region::LessonList), &|e| {
            e.tag == "button" && e.has_class(LESSON_BUTTON_CLASS)
        })
    }

    pub fn active_lessons(&self) -> Vec<i64> {
        self.active_lessons.iter().copied().collect()
    }

    pub fn word_cards(&self) -> Vec<&Element> {
        select(self.region(Region::WordList), &|e| e.has_class(WORD_CARD_CLASS))
    }

    pub fn shows_empty_state(&self) -> bool {
        !select(self.region(Region::WordList), &|e| e.has_class(EMPTY_STATE_CLASS)).is_empty()
    }

    pub fn detail(&self) -> &[Node] {
        self.region(Region::DetailBody)
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// `show` 被调用的总次数
    pub fn modal_shown_count(&self) -> usize {
        self.modal_shown_count
    }

    /// 弹窗自带的关闭按钮
    pub fn dismiss_modal(&mut self) {
        self.modal_open = false;
    }

    fn has_lesson_button(&self, level_no: i64) -> bool {
        let id = crate::render::lesson_button_id(level_no);
        self.lesson_buttons()
            .iter()
            .any(|button| button.get_attr("id") == Some(id.as_str()))
    }
}

impl Surface for ViewModel {
    fn apply(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::Replace { region, nodes } => {
                if region == Region::LessonList {
                    self.active_lessons.clear();
                }
                self.regions.insert(region, nodes);
            }
            UiUpdate::SetHidden { region, hidden } => {
                if hidden {
                    self.hidden.insert(region);
                } else {
                    self.hidden.remove(&region);
                }
            }
            UiUpdate::ClearActiveLessons => self.active_lessons.clear(),
            UiUpdate::ActivateLesson(level_no) => {
                if self.has_lesson_button(level_no) {
                    self.active_lessons.insert(level_no);
                } else {
                    tracing::debug!(level_no, "no lesson button to activate");
                }
            }
            UiUpdate::ShowModal => {
                self.modal_open = true;
                self.modal_shown_count += 1;
            }
        }
    }
}
