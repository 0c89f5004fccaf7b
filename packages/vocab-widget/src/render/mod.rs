//! 渲染器：把课程和单词转换为 [`UiUpdate`](crate::view::UiUpdate)

mod lesson;
mod word;

pub use lesson::{lesson_button_id, LessonRenderer};
pub use word::WordRenderer;

use crate::view::{Element, Node};

/// Font Awesome 图标
pub(crate) fn icon(name: &str) -> Node {
    Element::new("i").class(&format!("fa-solid {name}")).into()
}
