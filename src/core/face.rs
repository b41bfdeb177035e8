//! Front/back face resolution.
//!
//! A card is *dual-display* when it has exactly two faces and its layout does
//! not print both halves on one image (adventure, split). Dual-display cards
//! get a flip toggle; everything else shows a single primary image.

use crate::domain::model::Card;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 翻面狀態，只屬於單一張正在渲染的卡
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceSide {
    #[default]
    Front,
    Back,
}

impl FaceSide {
    pub fn index(self) -> usize {
        match self {
            FaceSide::Front => 0,
            FaceSide::Back => 1,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            FaceSide::Front => FaceSide::Back,
            FaceSide::Back => FaceSide::Front,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no image available")]
    MissingImage,

    #[error("card is not dual-display")]
    NotDualDisplay,
}

/// 某一面的圖片與名稱
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFace<'a> {
    pub side: FaceSide,
    pub name: &'a str,
    pub url: &'a str,
}

pub fn is_dual_display(card: &Card) -> bool {
    card.faces.len() == 2 && !card.layout.is_single_image_composite()
}

/// 卡片本身的 normal 圖，其次是第一面的 normal 圖
pub fn resolve_primary_image(card: &Card) -> Result<&str, ResolveError> {
    card.normal_image()
        .or_else(|| card.faces.first().and_then(|face| face.normal_image()))
        .ok_or(ResolveError::MissingImage)
}

pub fn resolve_face_image(card: &Card, side: FaceSide) -> Result<ResolvedFace<'_>, ResolveError> {
    if !is_dual_display(card) {
        return Err(ResolveError::NotDualDisplay);
    }

    let face = &card.faces[side.index()];
    let url = face.normal_image().ok_or(ResolveError::MissingImage)?;

    Ok(ResolvedFace {
        side,
        name: face.name.as_deref().unwrap_or_default(),
        url,
    })
}
