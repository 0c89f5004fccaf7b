//! 轻量标记树
//!
//! 渲染器产出 [`Node`]，宿主再转换为 HTML。文本和属性值在输出时统一转义，
//! 单词内容永远不会被当作标记解释。

use std::fmt::Write;

use askama::{Html, MarkupDisplay};

type SafeText<'a> = MarkupDisplay<Html, &'a str>;

const VOID_TAGS: [&str; 4] = ["img", "br", "input", "hr"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn class(self, classes: &str) -> Self {
        self.attr("class", classes)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// 深度优先查找满足条件的元素（含自身），保持文档顺序
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if pred(element) {
                out.push(element);
            }
            for child in &element.children {
                child.find_all(pred, out);
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => {
                let _ = write!(out, "{}", SafeText::new_unsafe(text, Html));
            }
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {name}=\"{}\"", SafeText::new_unsafe(value, Html));
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// 将一组节点渲染为 HTML 片段
pub fn render_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

/// 在一组节点中查找元素
pub fn select<'a>(nodes: &'a [Node], pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut out = Vec::new();
    for node in nodes {
        node.find_all(pred, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text_and_attributes() {
        let node: Node = Element::new("button")
            .attr("data-value", "say \"x\"")
            .text("<b>&</b>")
            .into();
        let html = node.to_html();
        assert!(html.starts_with("<button data-value=\""));
        assert!(html.contains("&quot;x&quot;"));
        assert!(html.contains("&lt;b&gt;&amp;&lt;"));
        assert!(!html.contains("<b>"));
        assert!(html.ends_with("</button>"));
    }

    #[test]
    fn test_void_tag_has_no_closing() {
        let node: Node = Element::new("img").attr("src", "a.png").into();
        assert_eq!(node.to_html(), "<img src=\"a.png\">");
    }

    #[test]
    fn test_select_and_text_content() {
        let nodes = vec![Node::from(
            Element::new("div")
                .child(Element::new("span").class("btn pill").text("fast"))
                .text(" ")
                .child(Element::new("span").class("btn pill").text("quick")),
        )];
        let pills = select(&nodes, &|e| e.has_class("pill"));
        assert_eq!(pills.len(), 2);
        assert_eq!(nodes[0].text_content(), "fast quick");
        assert!(!pills[0].has_class("pil"));
    }
}
