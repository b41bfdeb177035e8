use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 卡牌的實體版型，決定多面卡如何顯示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Normal,
    Split,
    Flip,
    Transform,
    ModalDfc,
    Meld,
    Leveler,
    Class,
    Case,
    Saga,
    Adventure,
    Mutate,
    Prototype,
    Battle,
    Planar,
    Scheme,
    Vanguard,
    Token,
    DoubleFacedToken,
    Emblem,
    Augment,
    Host,
    ArtSeries,
    ReversibleCard,
    #[serde(other)]
    Other,
}

impl Layout {
    /// 兩面印在同一張圖上的版型
    pub fn is_single_image_composite(self) -> bool {
        matches!(self, Layout::Adventure | Layout::Split)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

impl ImageUris {
    /// 空字串視同缺圖
    pub fn normal(&self) -> Option<&str> {
        self.normal.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Face {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

impl Face {
    pub fn normal_image(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(ImageUris::normal)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub eur: Option<String>,
    pub tix: Option<String>,
}

/// 上游 API 回傳的單張卡牌
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(rename = "card_faces", default)]
    pub faces: Vec<Face>,
    #[serde(default)]
    pub legalities: HashMap<String, String>,
    #[serde(default)]
    pub prices: Prices,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
}

impl Card {
    pub fn normal_image(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(ImageUris::normal)
    }

    /// 名稱缺漏或只有空白時回傳 None
    pub fn usable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// `/cards/search` 的回應頁面
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub cards: Vec<Card>,
    pub total_cards: Option<u64>,
    pub has_more: bool,
    /// 無法解析成 Card 而被略過的記錄數
    pub rejected: usize,
}

#[derive(Debug, Deserialize)]
struct RawSearchPage {
    #[serde(default)]
    data: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    total_cards: Option<u64>,
    #[serde(default)]
    has_more: bool,
}

impl SearchPage {
    /// 逐筆解析 `data`，壞掉的記錄只影響自己
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        let raw: RawSearchPage = serde_json::from_value(value)?;
        let mut cards = Vec::new();
        let mut rejected = 0;

        for (index, item) in raw.data.unwrap_or_default().into_iter().enumerate() {
            match serde_json::from_value::<Card>(item) {
                Ok(card) => cards.push(card),
                Err(e) => {
                    rejected += 1;
                    tracing::warn!("Skipping unparseable card record #{}: {}", index, e);
                }
            }
        }

        Ok(Self {
            cards,
            total_cards: raw.total_cards,
            has_more: raw.has_more,
            rejected,
        })
    }
}

/// 上游錯誤回應，例如 `{"object":"error","status":404,"details":"..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_transform_card() {
        let card: Card = serde_json::from_value(json!({
            "id": "abc",
            "name": "Delver of Secrets // Insectile Aberration",
            "layout": "transform",
            "card_faces": [
                {"name": "Delver of Secrets", "image_uris": {"normal": "https://img/front.jpg"}},
                {"name": "Insectile Aberration", "image_uris": {"normal": "https://img/back.jpg"}}
            ],
            "legalities": {"legacy": "legal"},
            "prices": {"usd": "0.25", "eur": null},
            "set_name": "Innistrad"
        }))
        .unwrap();

        assert_eq!(card.layout, Layout::Transform);
        assert_eq!(card.faces.len(), 2);
        assert_eq!(card.faces[1].normal_image(), Some("https://img/back.jpg"));
        assert_eq!(card.prices.usd.as_deref(), Some("0.25"));
        assert!(card.image_uris.is_none());
    }

    #[test]
    fn test_layout_wire_names() {
        let layouts: Vec<Layout> =
            serde_json::from_value(json!(["modal_dfc", "adventure", "split", "brand_new_layout"]))
                .unwrap();
        assert_eq!(
            layouts,
            vec![Layout::ModalDfc, Layout::Adventure, Layout::Split, Layout::Other]
        );
        assert!(Layout::Split.is_single_image_composite());
        assert!(!Layout::ModalDfc.is_single_image_composite());
    }

    #[test]
    fn test_sparse_record_uses_defaults() {
        let card: Card = serde_json::from_value(json!({"id": "only-id"})).unwrap();

        assert_eq!(card.layout, Layout::Normal);
        assert!(card.faces.is_empty());
        assert!(card.legalities.is_empty());
        assert_eq!(card.usable_name(), None);
    }

    #[test]
    fn test_empty_image_url_counts_as_missing() {
        let card: Card =
            serde_json::from_value(json!({"id": "x", "image_uris": {"normal": ""}})).unwrap();
        assert_eq!(card.normal_image(), None);
    }

    #[test]
    fn test_search_page_skips_bad_records() {
        let page = SearchPage::from_json(json!({
            "object": "list",
            "total_cards": 3,
            "has_more": false,
            "data": [
                {"id": "1", "name": "Opt"},
                "not a card",
                {"id": "3", "name": "Ponder"}
            ]
        }))
        .unwrap();

        assert_eq!(page.cards.len(), 2);
        assert_eq!(page.rejected, 1);
        assert_eq!(page.total_cards, Some(3));
    }

    #[test]
    fn test_search_page_without_data_is_empty() {
        let page = SearchPage::from_json(json!({"object": "list"})).unwrap();
        assert!(page.cards.is_empty());
        assert_eq!(page.rejected, 0);
    }
}
