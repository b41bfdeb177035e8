use crate::core::face::{self, FaceSide, ResolveError};
use crate::domain::model::Card;
use serde::Serialize;

/// 換行標記，取代規則文字中的 `\n`
pub const LINE_BREAK: &str = "<br>";

pub const PRICE_PLACEHOLDER: &str = "N/A";

const SINGLE_FACE_ORACLE_PLACEHOLDER: &str = "N/A";

/// 合法性區塊固定的賽制順序
pub const FORMATS: [&str; 8] = [
    "standard", "modern", "legacy", "vintage", "commander", "pioneer", "brawl", "historic",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "url", rename_all = "snake_case")]
pub enum CardImage {
    Available(String),
    Missing,
}

impl CardImage {
    pub fn url(&self) -> Option<&str> {
        match self {
            CardImage::Available(url) => Some(url),
            CardImage::Missing => None,
        }
    }
}

impl From<Result<&str, ResolveError>> for CardImage {
    fn from(result: Result<&str, ResolveError>) -> Self {
        match result {
            Ok(url) => CardImage::Available(url.to_string()),
            Err(_) => CardImage::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceImage {
    pub side: FaceSide,
    pub name: String,
    pub image: CardImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardImages {
    Single { image: CardImage },
    Dual { faces: [FaceImage; 2] },
}

impl CardImages {
    /// 指定翻面狀態下要顯示的圖與名稱；單圖卡忽略翻面
    pub fn for_side(&self, side: FaceSide) -> (&CardImage, Option<&str>) {
        match self {
            CardImages::Single { image } => (image, None),
            CardImages::Dual { faces } => {
                let face = &faces[side.index()];
                (&face.image, Some(face.name.as_str()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub images: CardImages,
    pub is_dual_display: bool,
    /// 名稱缺漏，以 id 代替顯示
    pub malformed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalityEntry {
    pub format: &'static str,
    pub label: String,
    pub is_legal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesEntry {
    pub name: String,
    pub type_line: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDetail {
    pub id: String,
    pub name: String,
    pub set_name: String,
    pub images: CardImages,
    pub is_dual_display: bool,
    pub legalities: Vec<LegalityEntry>,
    pub price_usd: String,
    pub rules: Vec<RulesEntry>,
    pub malformed: bool,
}

impl CardDetail {
    pub fn image_for(&self, side: FaceSide) -> (&CardImage, Option<&str>) {
        self.images.for_side(side)
    }
}

pub fn build_summary(card: &Card) -> CardSummary {
    let (name, malformed) = display_name(card);

    CardSummary {
        id: card.id.clone(),
        name,
        images: build_images(card),
        is_dual_display: face::is_dual_display(card),
        malformed,
    }
}

pub fn build_detail(card: &Card) -> CardDetail {
    let (name, malformed) = display_name(card);

    CardDetail {
        id: card.id.clone(),
        rules: build_rules(card, &name),
        name,
        set_name: card.set_name.clone().unwrap_or_default(),
        images: build_images(card),
        is_dual_display: face::is_dual_display(card),
        legalities: build_legalities(card),
        price_usd: build_price(card),
        malformed,
    }
}

fn display_name(card: &Card) -> (String, bool) {
    match card.usable_name() {
        Some(name) => (name.to_string(), false),
        None => (card.id.clone(), true),
    }
}

fn build_images(card: &Card) -> CardImages {
    if !face::is_dual_display(card) {
        return CardImages::Single {
            image: face::resolve_primary_image(card).into(),
        };
    }

    let face_image = |side: FaceSide| {
        let face = &card.faces[side.index()];
        FaceImage {
            side,
            name: face.name.clone().unwrap_or_default(),
            image: face::resolve_face_image(card, side)
                .map(|resolved| resolved.url)
                .into(),
        }
    };

    CardImages::Dual {
        faces: [face_image(FaceSide::Front), face_image(FaceSide::Back)],
    }
}

fn build_legalities(card: &Card) -> Vec<LegalityEntry> {
    FORMATS
        .iter()
        .map(|&format| LegalityEntry {
            format,
            label: capitalize(format),
            is_legal: card.legalities.get(format).map(String::as_str) == Some("legal"),
        })
        .collect()
}

fn build_price(card: &Card) -> String {
    card.prices
        .usd
        .as_deref()
        .filter(|price| !price.is_empty())
        .unwrap_or(PRICE_PLACEHOLDER)
        .to_string()
}

fn build_rules(card: &Card, display_name: &str) -> Vec<RulesEntry> {
    if card.faces.len() > 1 {
        return card
            .faces
            .iter()
            .map(|face| RulesEntry {
                name: face.name.clone().unwrap_or_default(),
                type_line: face.type_line.clone().unwrap_or_default(),
                text: with_line_breaks(face.oracle_text.as_deref().unwrap_or_default()),
            })
            .collect();
    }

    vec![RulesEntry {
        name: display_name.to_string(),
        type_line: card.type_line.clone().unwrap_or_default(),
        text: with_line_breaks(
            card.oracle_text
                .as_deref()
                .filter(|text| !text.is_empty())
                .unwrap_or(SINGLE_FACE_ORACLE_PLACEHOLDER),
        ),
    }]
}

fn with_line_breaks(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

/// 首字母大寫，其餘不變
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
