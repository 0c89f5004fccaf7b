//! 词汇学习小组件核心库
//!
//! 从远程 API 拉取课程与单词，渲染课程按钮、单词卡片和详情弹窗，
//! 并提供搜索过滤与发音。平台无关：真实 DOM 由宿主（见 `vocab-widget-wasm`）实现 [`view::Surface`]。

pub mod config;
pub mod controller;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod render;
pub mod search;
pub mod speech;
pub mod view;

pub use config::{ApiConfig, ConfigError, DomIds, Placeholders, WidgetConfig};
pub use controller::{ViewController, ViewState};
pub use gateway::{DataGateway, GatewayError, HttpGateway};
pub use model::{Envelope, Lesson, Word};
pub use render::{LessonRenderer, WordRenderer};
pub use search::SearchQuery;
pub use speech::{NullSpeaker, Speaker, SpeechConfig, SpeechError};
pub use view::{Action, Node, Region, Surface, UiUpdate, ViewModel};
