use crate::config::Placeholders;
use crate::model::Word;
use crate::view::{
    Action, Element, Node, Region, UiUpdate, EMPTY_STATE_CLASS, SYNONYM_CLASS, WORD_CARD_CLASS,
};

use super::icon;

const SYNONYMS_HEADING: &str = "সমার্থক শব্দ গুলো / Synonyms";

/// 单词卡片与详情渲染器
///
/// 每个可选字段独立回退到占位文本，一个字段缺失不会影响其他字段。
#[derive(Debug, Clone, Default)]
pub struct WordRenderer {
    placeholders: Placeholders,
}

impl WordRenderer {
    pub fn new(placeholders: Placeholders) -> Self {
        Self { placeholders }
    }

    pub fn headline<'a>(&'a self, word: &'a Word) -> &'a str {
        word.text().unwrap_or(&self.placeholders.word)
    }

    pub fn meaning<'a>(&'a self, word: &'a Word) -> &'a str {
        word.meaning().unwrap_or(&self.placeholders.meaning)
    }

    pub fn pronunciation<'a>(&'a self, word: &'a Word) -> &'a str {
        word.pronunciation().unwrap_or(&self.placeholders.pronunciation)
    }

    pub fn sentence<'a>(&'a self, word: &'a Word) -> &'a str {
        word.sentence().unwrap_or(&self.placeholders.sentence)
    }

    /// 整体替换单词列表；空列表显示空状态面板
    pub fn render_word_list(&self, words: &[Word]) -> UiUpdate {
        let nodes = if words.is_empty() {
            vec![self.empty_state()]
        } else {
            words.iter().map(|word| self.card(word)).collect()
        };
        UiUpdate::Replace {
            region: Region::WordList,
            nodes,
        }
    }

    /// 填充详情弹窗并打开
    pub fn render_word_detail(&self, word: &Word) -> Vec<UiUpdate> {
        let headline = Element::new("h2")
            .class("poppins font-semibold text-2xl")
            .text(format!("{} (", self.headline(word)))
            .child(icon("fa-microphone-lines"))
            .text(format!(": {})", self.pronunciation(word)));

        let meaning = Element::new("div")
            .child(
                Element::new("h2")
                    .class("poppins font-semibold text-2xl")
                    .text("Meaning"),
            )
            .child(
                Element::new("p")
                    .class("hind-siliguri font-medium text-xl")
                    .text(self.meaning(word)),
            );

        let example = Element::new("div")
            .child(
                Element::new("h2")
                    .class("poppins font-semibold text-2xl")
                    .text("Example"),
            )
            .child(
                Element::new("p")
                    .class("poppins font-normal text-2xl text-[#999999]")
                    .text(self.sentence(word)),
            );

        let synonyms = Element::new("div")
            .child(
                Element::new("h2")
                    .class("hind-siliguri font-medium text-xl")
                    .text(SYNONYMS_HEADING),
            )
            .child(self.synonym_row(word.synonyms()));

        let nodes = vec![
            Element::new("div").child(headline).into(),
            meaning.into(),
            example.into(),
            synonyms.into(),
        ];

        vec![
            UiUpdate::Replace {
                region: Region::DetailBody,
                nodes,
            },
            UiUpdate::ShowModal,
        ]
    }

    fn synonym_row(&self, synonyms: &[String]) -> Element {
        let row = Element::new("div").class("synonyms");
        if synonyms.is_empty() {
            return row.child(
                Element::new("p")
                    .class("hind-siliguri text-[#79716B]")
                    .text(self.placeholders.synonyms.as_str()),
            );
        }

        let mut nodes = Vec::with_capacity(synonyms.len() * 2);
        for (i, synonym) in synonyms.iter().enumerate() {
            if i > 0 {
                nodes.push(Node::from(" "));
            }
            nodes.push(
                Element::new("span")
                    .class(&format!("btn poppins {SYNONYM_CLASS}"))
                    .text(synonym.as_str())
                    .into(),
            );
        }
        row.children(nodes)
    }

    fn card(&self, word: &Word) -> Node {
        let info = Element::new("button")
            .class("btn bg-[#1A91FF] rounded-md hover:bg-[#1A91FF10] text-white")
            .attr("title", "Details");
        let info = match word.id {
            Some(id) => Action::ShowDetail(id).bind(info),
            None => info.attr("disabled", "disabled"),
        };

        let speak = Element::new("button")
            .class("btn bg-[#E8F4FF] hover:bg-[#1A91FF10] rounded-md")
            .attr("title", "Pronounce");
        let speak = match word.text() {
            Some(text) => Action::Pronounce(text.to_string()).bind(speak),
            None => speak.attr("disabled", "disabled"),
        };

        Element::new("div")
            .class(&format!(
                "{WORD_CARD_CLASS} bg-[#FFFFFF] py-10 px-5 rounded-xl shadow-sm text-center space-y-5"
            ))
            .child(
                Element::new("h2")
                    .class("inter font-bold text-3xl")
                    .text(self.headline(word)),
            )
            .child(
                Element::new("p")
                    .class("inter font-medium text-xl")
                    .text("Meaning / Pronunciation"),
            )
            .child(
                Element::new("div")
                    .class("hind-siliguri font-semibold text-3xl")
                    .text(format!(
                        "\"{} / {}\"",
                        self.meaning(word),
                        self.pronunciation(word)
                    )),
            )
            .child(
                Element::new("div")
                    .class("flex justify-between items-center")
                    .child(info.child(icon("fa-circle-info")))
                    .child(speak.child(icon("fa-volume-high"))),
            )
            .into()
    }

    fn empty_state(&self) -> Node {
        Element::new("div")
            .class(&format!(
                "{EMPTY_STATE_CLASS} text-center col-span-full my-10 space-y-5"
            ))
            .child(
                Element::new("img")
                    .class("mx-auto")
                    .attr("src", self.placeholders.empty_image.as_str())
                    .attr("alt", "Error"),
            )
            .child(
                Element::new("p")
                    .class("hind-siliguri font-medium text-xl text-[#79716B]")
                    .text(self.placeholders.empty_notice.as_str()),
            )
            .child(
                Element::new("h2")
                    .class("hind-siliguri font-bold text-4xl")
                    .text(self.placeholders.empty_hint.as_str()),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::select;

    fn word(id: i64, text: &str) -> Word {
        Word {
            id: Some(id),
            word: Some(text.to_string()),
            pronunciation: Some(format!("{text}-pron")),
            meaning: Some(format!("{text}-meaning")),
            ..Default::default()
        }
    }

    fn replaced(update: UiUpdate) -> Vec<Node> {
        match update {
            UiUpdate::Replace { nodes, .. } => nodes,
            other => panic!("expected a replace, got {other:?}"),
        }
    }

    #[test]
    fn test_one_card_per_word_in_order() {
        let renderer = WordRenderer::default();
        let nodes = replaced(renderer.render_word_list(&[
            word(1, "Abundant"),
            word(2, "Brisk"),
            word(3, "Candid"),
        ]));

        let cards = select(&nodes, &|e| e.has_class(WORD_CARD_CLASS));
        assert_eq!(cards.len(), 3);
        let headlines: Vec<String> = cards.iter().copied().map(select_headline).collect();
        assert_eq!(headlines, ["Abundant", "Brisk", "Candid"]);
        assert!(select(&nodes, &|e| e.has_class(EMPTY_STATE_CLASS)).is_empty());
    }

    fn select_headline(card: &Element) -> String {
        card.children
            .iter()
            .filter_map(Node::as_element)
            .find(|e| e.tag == "h2")
            .map(Element::text_content)
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_list_renders_empty_state_only() {
        let renderer = WordRenderer::default();
        let nodes = replaced(renderer.render_word_list(&[]));

        assert!(select(&nodes, &|e| e.has_class(WORD_CARD_CLASS)).is_empty());
        let panel = select(&nodes, &|e| e.has_class(EMPTY_STATE_CLASS));
        assert_eq!(panel.len(), 1);
        let text = panel[0].text_content();
        assert!(text.contains("নেক্সট Lesson এ যান"));
        assert_eq!(select(&nodes, &|e| e.tag == "img").len(), 1);
    }

    #[test]
    fn test_missing_fields_fall_back_independently() {
        let renderer = WordRenderer::default();
        let defaults = Placeholders::default();
        let only_meaning = Word {
            id: Some(9),
            meaning: Some("আগ্রহী".to_string()),
            ..Default::default()
        };

        let nodes = replaced(renderer.render_word_list(&[only_meaning]));
        let text = nodes[0].text_content();
        assert!(text.contains(&defaults.word));
        assert!(text.contains("আগ্রহী"));
        assert!(!text.contains(&defaults.meaning));
        assert!(text.contains(&defaults.pronunciation));
    }

    #[test]
    fn test_card_actions() {
        let renderer = WordRenderer::default();
        let nodes = replaced(renderer.render_word_list(&[word(4, "Eager"), Word::default()]));

        let actions: Vec<_> = select(&nodes, &|e| e.tag == "button")
            .into_iter()
            .map(Action::from_element)
            .collect();
        assert_eq!(
            actions,
            [
                Some(Action::ShowDetail(4)),
                Some(Action::Pronounce("Eager".to_string())),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_detail_synonym_pills() {
        let renderer = WordRenderer::default();
        let detail = Word {
            synonyms: Some(vec!["fast".to_string(), "quick".to_string()]),
            ..word(11, "Rapid")
        };

        let updates = renderer.render_word_detail(&detail);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1], UiUpdate::ShowModal);

        let nodes = replaced(updates[0].clone());
        let rows = select(&nodes, &|e| e.has_class("synonyms"));
        assert_eq!(rows.len(), 1);
        let row = [Node::from(rows[0].clone())];
        let pills = select(&row, &|e| e.has_class(SYNONYM_CLASS));
        let labels: Vec<String> = pills.iter().map(|p| p.text_content()).collect();
        assert_eq!(labels, ["fast", "quick"]);
        assert_eq!(rows[0].text_content(), "fast quick");
    }

    #[test]
    fn test_detail_without_synonyms_uses_placeholder() {
        let renderer = WordRenderer::default();
        let updates = renderer.render_word_detail(&Word::default());
        let nodes = replaced(updates[0].clone());

        assert!(select(&nodes, &|e| e.has_class(SYNONYM_CLASS)).is_empty());
        let html = crate::view::render_html(&nodes);
        let defaults = Placeholders::default();
        for expected in [
            &defaults.word,
            &defaults.pronunciation,
            &defaults.meaning,
            &defaults.sentence,
            &defaults.synonyms,
        ] {
            assert!(html.contains(expected.as_str()), "missing {expected}");
        }
    }

    #[test]
    fn test_word_text_is_escaped() {
        let renderer = WordRenderer::default();
        let nodes = replaced(renderer.render_word_list(&[word(1, "<script>")]));
        let html = crate::view::render_html(&nodes);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
