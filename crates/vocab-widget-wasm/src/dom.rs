use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlDialogElement};

use vocab_widget::render::lesson_button_id;
use vocab_widget::view::{render_html, LESSON_BUTTON_CLASS};
use vocab_widget::{DomIds, Region, Surface, UiUpdate};

const HIDDEN_CLASS: &str = "hidden";
const ACTIVE_CLASS: &str = "active";

/// 把界面更新写入宿主页面的 DOM
pub struct DomSurface {
    document: Document,
    ids: DomIds,
}

impl DomSurface {
    pub fn new(document: Document, ids: DomIds) -> Self {
        Self { document, ids }
    }

    pub fn element(&self, region: Region) -> Option<Element> {
        let id = self.ids.id(region);
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            tracing::warn!(id, "host page element missing");
        }
        element
    }

    fn try_apply(&self, update: UiUpdate) -> Result<(), JsValue> {
        match update {
            UiUpdate::Replace { region, nodes } => {
                if let Some(element) = self.element(region) {
                    element.set_inner_html(&render_html(&nodes));
                }
            }
            UiUpdate::SetHidden { region, hidden } => {
                if let Some(element) = self.element(region) {
                    element
                        .class_list()
                        .toggle_with_force(HIDDEN_CLASS, hidden)?;
                }
            }
            UiUpdate::ClearActiveLessons => {
                let Some(container) = self.element(Region::LessonList) else {
                    return Ok(());
                };
                let selector = format!(".{LESSON_BUTTON_CLASS}");
                let buttons = container.query_selector_all(&selector)?;
                for i in 0..buttons.length() {
                    let button = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok());
                    if let Some(button) = button {
                        button.class_list().remove_1(ACTIVE_CLASS)?;
                    }
                }
            }
            UiUpdate::ActivateLesson(level_no) => {
                match self.document.get_element_by_id(&lesson_button_id(level_no)) {
                    Some(button) => button.class_list().add_1(ACTIVE_CLASS)?,
                    None => tracing::debug!(level_no, "no lesson button to activate"),
                }
            }
            UiUpdate::ShowModal => {
                if let Some(element) = self.element(Region::DetailModal) {
                    let dialog: HtmlDialogElement = element.dyn_into()?;
                    dialog.show_modal()?;
                }
            }
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn apply(&mut self, update: UiUpdate) {
        if let Err(err) = self.try_apply(update) {
            tracing::warn!(error = ?err, "failed to apply ui update");
        }
    }
}
