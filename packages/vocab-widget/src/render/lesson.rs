use crate::model::Lesson;
use crate::view::{Action, Element, Node, Region, UiUpdate, LESSON_BUTTON_CLASS};

use super::icon;

pub fn lesson_button_id(level_no: i64) -> String {
    format!("lesson-btn-{level_no}")
}

/// 课程按钮渲染器
#[derive(Debug, Clone, Copy, Default)]
pub struct LessonRenderer;

impl LessonRenderer {
    /// 每个课程一个按钮，整体替换旧按钮
    pub fn render(&self, lessons: &[Lesson]) -> UiUpdate {
        let nodes = lessons.iter().map(|lesson| self.button(lesson)).collect();
        UiUpdate::Replace {
            region: Region::LessonList,
            nodes,
        }
    }

    fn button(&self, lesson: &Lesson) -> Node {
        let mut button = Element::new("button")
            .attr("id", lesson_button_id(lesson.level_no))
            .class(&format!("btn btn-outline btn-primary {LESSON_BUTTON_CLASS}"));
        if let Some(name) = lesson.lesson_name.as_deref() {
            button = button.attr("title", name);
        }
        let button = Action::SelectLesson(lesson.level_no)
            .bind(button)
            .child(icon("fa-book-open"))
            .text(format!(" {}", lesson.label()));

        Element::new("div").child(button).into()
    }
}
