use crate::core::face::FaceSide;
use crate::core::lookup::SearchOutcome;
use crate::core::view_model::{CardDetail, CardImage, CardImages, CardSummary, LINE_BREAK};
use std::fmt::Write;

const IMAGE_UNAVAILABLE: &str = "(image unavailable)";

fn image_text(image: &CardImage) -> &str {
    image.url().unwrap_or(IMAGE_UNAVAILABLE)
}

fn summary_line(summary: &CardSummary) -> String {
    let marker = if summary.malformed { "⚠ " } else { "" };
    let image = match &summary.images {
        CardImages::Single { image } => image_text(image).to_string(),
        CardImages::Dual { faces } => format!(
            "{} | back: {}",
            image_text(&faces[0].image),
            image_text(&faces[1].image)
        ),
    };
    format!("  {}{}  [{}]  {}", marker, summary.name, summary.id, image)
}

pub fn search(outcome: &SearchOutcome) -> String {
    if outcome.is_empty() {
        return "No cards found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} cards for {}:",
        outcome.total_cards.unwrap_or(outcome.summaries.len() as u64),
        outcome.query
    );
    for summary in &outcome.summaries {
        let _ = writeln!(out, "{}", summary_line(summary));
    }
    if outcome.rejected > 0 {
        let _ = writeln!(out, "  ({} unreadable records skipped)", outcome.rejected);
    }
    out
}

pub fn detail(detail: &CardDetail, side: FaceSide) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.name);
    if detail.malformed {
        let _ = writeln!(out, "⚠ This record has no name; showing its id.");
    }

    let (image, face_name) = detail.image_for(side);
    match face_name {
        Some(face_name) => {
            let _ = writeln!(out, "Showing: {} ({:?})", face_name, side);
            let _ = writeln!(out, "Image: {}", image_text(image));
            let flip_hint = match side {
                FaceSide::Front => "with",
                FaceSide::Back => "without",
            };
            let _ = writeln!(out, "Flip: run again {} --back", flip_hint);
        }
        None => {
            let _ = writeln!(out, "Image: {}", image_text(image));
        }
    }

    let _ = writeln!(out, "Set: {}", detail.set_name);
    let _ = writeln!(out, "Legalities:");
    for entry in &detail.legalities {
        let status = if entry.is_legal { "LEGAL" } else { "NOT LEGAL" };
        let _ = writeln!(out, "  {:<10} {}", status, entry.label);
    }
    let _ = writeln!(out, "Price (USD): ${}", detail.price_usd);

    for rules in &detail.rules {
        let _ = writeln!(out);
        if rules.type_line.is_empty() {
            let _ = writeln!(out, "{}", rules.name);
        } else {
            let _ = writeln!(out, "{} ({})", rules.name, rules.type_line);
        }
        for line in rules.text.split(LINE_BREAK) {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::SearchQuery;
    use crate::core::view_model::{build_detail, build_summary};
    use serde_json::json;

    fn delver_detail() -> CardDetail {
        let card = serde_json::from_value(json!({
            "id": "delver",
            "name": "Delver of Secrets // Insectile Aberration",
            "layout": "transform",
            "set_name": "Innistrad",
            "card_faces": [
                {"name": "Delver of Secrets", "oracle_text": "Look.\nReveal.", "image_uris": {"normal": "https://img/front.jpg"}},
                {"name": "Insectile Aberration", "oracle_text": "Flying"}
            ]
        }))
        .unwrap();
        build_detail(&card)
    }

    #[test]
    fn test_search_no_results() {
        let outcome = SearchOutcome {
            query: SearchQuery::from_input("zzz").unwrap(),
            summaries: vec![],
            total_cards: None,
            rejected: 0,
        };
        assert_eq!(search(&outcome), "No cards found.\n");
    }

    #[test]
    fn test_search_lists_error_items() {
        let good = serde_json::from_value(json!({"id": "1", "name": "Opt", "image_uris": {"normal": "https://img/opt.jpg"}})).unwrap();
        let bad = serde_json::from_value(json!({"id": "2"})).unwrap();
        let outcome = SearchOutcome {
            query: SearchQuery::from_input("o:scry").unwrap(),
            summaries: vec![build_summary(&good), build_summary(&bad)],
            total_cards: Some(2),
            rejected: 1,
        };

        let rendered = search(&outcome);

        assert!(rendered.starts_with("Found 2 cards for o:scry:"));
        assert!(rendered.contains("  Opt  [1]  https://img/opt.jpg"));
        assert!(rendered.contains("  ⚠ 2  [2]  (image unavailable)"));
        assert!(rendered.contains("1 unreadable records skipped"));
    }

    #[test]
    fn test_detail_front_and_back() {
        let detail = delver_detail();

        let front = super::detail(&detail, FaceSide::Front);
        assert!(front.contains("Showing: Delver of Secrets (Front)"));
        assert!(front.contains("Image: https://img/front.jpg"));
        assert!(front.contains("  Look.\n  Reveal.\n"));
        assert!(front.contains("Price (USD): $N/A"));

        let back = super::detail(&detail, FaceSide::Back);
        assert!(back.contains("Showing: Insectile Aberration (Back)"));
        assert!(back.contains("Image: (image unavailable)"));
    }

    #[test]
    fn test_detail_legality_lines() {
        let rendered = super::detail(&delver_detail(), FaceSide::Front);
        assert!(rendered.contains("  NOT LEGAL  Standard"));
        assert!(rendered.contains("  NOT LEGAL  Historic"));
    }
}
