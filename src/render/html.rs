//! HTML fragments matching the search and detail pages of the web UI.

use crate::core::face::FaceSide;
use crate::core::lookup::SearchOutcome;
use crate::core::view_model::{CardDetail, CardImage, CardImages, CardSummary, LINE_BREAK};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 規則文字逐段跳脫，保留換行標記
fn escape_rules_text(text: &str) -> String {
    text.split(LINE_BREAK)
        .map(escape)
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

fn img_tag(image: &CardImage, alt: &str) -> String {
    match image {
        CardImage::Available(url) => {
            format!(r#"<img src="{}" alt="{}" />"#, escape(url), escape(alt))
        }
        CardImage::Missing => {
            r#"<div class="image-unavailable">Image unavailable</div>"#.to_string()
        }
    }
}

fn tile(summary: &CardSummary) -> String {
    let class = if summary.malformed { "card error-item" } else { "card" };
    let body = match &summary.images {
        CardImages::Single { image } => img_tag(image, &summary.name),
        CardImages::Dual { faces } => {
            let back = faces[1]
                .image
                .url()
                .map(|url| format!(r#" data-back-src="{}""#, escape(url)))
                .unwrap_or_default();
            match &faces[0].image {
                CardImage::Available(url) => format!(
                    r#"<img src="{}" alt="{}"{} />"#,
                    escape(url),
                    escape(&summary.name),
                    back
                ),
                CardImage::Missing => img_tag(&CardImage::Missing, &summary.name),
            }
        }
    };

    format!(
        r#"<div class="{}"><a href="card.html?id={}">{}</a></div>"#,
        class,
        escape(&summary.id),
        body
    )
}

pub fn search(outcome: &SearchOutcome) -> String {
    if outcome.is_empty() {
        return "<p>No cards found.</p>".to_string();
    }
    outcome
        .summaries
        .iter()
        .map(tile)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn detail(detail: &CardDetail, side: FaceSide) -> String {
    let (image, face_name) = detail.image_for(side);
    let alt = face_name.unwrap_or(detail.name.as_str());

    let flip = if detail.is_dual_display {
        format!(
            r#"<button class="flip-button" data-side="{}">Flip</button>"#,
            match side.toggle() {
                FaceSide::Front => "front",
                FaceSide::Back => "back",
            }
        )
    } else {
        String::new()
    };

    let legalities = detail
        .legalities
        .iter()
        .map(|entry| {
            let (class, status) = if entry.is_legal {
                ("legal", "LEGAL")
            } else {
                ("not-legal", "NOT LEGAL")
            };
            format!(
                r#"<span class="legality-box {}">{} - {}</span>"#,
                class,
                status,
                escape(&entry.label)
            )
        })
        .collect::<Vec<_>>()
        .join("<br>");

    let rules = detail
        .rules
        .iter()
        .map(|rules| {
            let heading = if detail.rules.len() > 1 {
                format!(
                    "<h3>{}</h3><p><em>{}</em></p>",
                    escape(&rules.name),
                    escape(&rules.type_line)
                )
            } else {
                String::new()
            };
            format!("{}<p>{}</p>", heading, escape_rules_text(&rules.text))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="card-details-box">
  <h1>{name}</h1>
  {image}{flip}
  <div class="card-info">
    <p><strong>Set:</strong> {set}</p>
    <div class="legalities">{legalities}</div>
    <p><strong>Price (USD):</strong> ${price}</p>
    {rules}
  </div>
  <a href="index.html">← Back to search</a>
</div>"#,
        name = escape(&detail.name),
        image = img_tag(image, alt),
        flip = flip,
        set = escape(&detail.set_name),
        legalities = legalities,
        price = escape(&detail.price_usd),
        rules = rules,
    )
}
