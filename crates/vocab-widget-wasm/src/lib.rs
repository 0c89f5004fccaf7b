mod console;
mod dom;
mod speech;

pub use console::*;
pub use dom::*;
pub use speech::*;

use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Element, Event, HtmlInputElement};

use vocab_widget::view::{ATTR_ACTION, ATTR_VALUE};
use vocab_widget::{logging, Action, HttpGateway, Region, ViewController, WidgetConfig};

type Controller = ViewController<HttpGateway, DomSurface, BrowserSpeaker>;

#[wasm_bindgen]
pub struct VocabWidget {
    controller: Rc<Controller>,
}

#[wasm_bindgen]
impl VocabWidget {
    /// `config` 可以省略，只需给出要覆盖的字段
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VocabWidget, JsValue> {
        let config = parse_config(config)?;
        logging::init_tracing_with_writer(&config.log_level, MakeConsoleWriter);

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let controller = ViewController::new(
            &config,
            HttpGateway::new(&config.api),
            DomSurface::new(document, config.dom.clone()),
            BrowserSpeaker,
        );
        Ok(Self {
            controller: Rc::new(controller),
        })
    }

    /// 绑定点击事件并开始加载课程
    #[wasm_bindgen]
    pub fn mount(&self) -> Result<(), JsValue> {
        for region in [Region::LessonList, Region::WordList] {
            let Some(container) = self.controller.surface().element(region) else {
                continue;
            };
            let controller = Rc::clone(&self.controller);
            let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if let Some(action) = action_from_event(&event) {
                    let controller = Rc::clone(&controller);
                    spawn_local(async move { controller.dispatch(action).await });
                }
            });
            container.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        if let Some(button) = self.controller.surface().element(Region::SearchButton) {
            let controller = Rc::clone(&self.controller);
            let on_search = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let raw = search_text(&controller);
                let controller = Rc::clone(&controller);
                spawn_local(async move { controller.search(&raw).await });
            });
            button.add_event_listener_with_callback("click", on_search.as_ref().unchecked_ref())?;
            on_search.forget();
        }

        let controller = Rc::clone(&self.controller);
        spawn_local(async move { controller.start().await });
        Ok(())
    }

    #[wasm_bindgen]
    pub fn search(&self, raw: String) -> Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move {
            controller.search(&raw).await;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[wasm_bindgen]
    pub fn pronounce(&self, text: &str) {
        self.controller.pronounce(text);
    }
}

fn parse_config(value: JsValue) -> Result<WidgetConfig, JsValue> {
    let config = if value.is_undefined() || value.is_null() {
        WidgetConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<WidgetConfig>(value)?
    };
    config
        .validated()
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

fn search_text(controller: &Controller) -> String {
    controller
        .surface()
        .element(Region::SearchInput)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// 事件委托：找到最近的带 `data-action` 的祖先
fn action_from_event(event: &Event) -> Option<Action> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let button = target.closest(&format!("[{ATTR_ACTION}]")).ok()??;
    let action = button.get_attribute(ATTR_ACTION)?;
    Action::from_data(&action, button.get_attribute(ATTR_VALUE).as_deref())
}
