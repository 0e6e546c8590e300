use serde::Serialize;
use xerago_core::{bind_collection, bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

use crate::builder::{build_config, GameError, GameKind};
use crate::models::{GameConfig, PrizeEntry, Weight};
use crate::redeem::SCRATCH_PREFIX;

pub const RESOURCE_TYPE: &str = "citi/components/floating-scratch-card";

const DEFAULT_VALUE: &str = "Save 10% on your next order";
const DEFAULT_ICON: &str = "🎯";
const DEFAULT_COLOR: &str = "#3b82f6";
const DEFAULT_PROBABILITY: i64 = 25;

const PRIZE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("prizeText"),
    FieldSpec::text("prizeValue"),
    FieldSpec::text("prizeIcon"),
    FieldSpec::text("prizeColor"),
    FieldSpec::integer_or("probability", DEFAULT_PROBABILITY),
    FieldSpec::text("redeemCode"),
];

const MODEL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text_or("title", "Scratch & Win!"),
    FieldSpec::text_or("buttonText", "🎫 SCRATCH CARD"),
    FieldSpec::text_or("modalTitle", "Scratch & Win!"),
    FieldSpec::text_or("modalSubtitle", "Enter your email and scratch the card to reveal your prize!"),
    FieldSpec::text_or("emailPlaceholder", "Enter your email to play"),
    FieldSpec::text_or("playButtonText", "START SCRATCHING"),
    FieldSpec::text_or("scratchText", "Scratch here to reveal your prize!"),
];

/// One authored row of the scratch card's prize multifield.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScratchCardPrize {
    pub prize_text: Option<String>,
    pub prize_value: Option<String>,
    pub prize_icon: Option<String>,
    pub prize_color: Option<String>,
    pub probability: Option<i64>,
    pub redeem_code: Option<String>,
}

impl FromContent for ScratchCardPrize {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, PRIZE_FIELDS);
        Self {
            prize_text: f.string("prizeText"),
            prize_value: f.string("prizeValue"),
            prize_icon: f.string("prizeIcon"),
            prize_color: f.string("prizeColor"),
            probability: f.integer("probability"),
            redeem_code: f.string("redeemCode"),
        }
    }
}

pub struct ScratchCard;

impl GameKind for ScratchCard {
    const NAME: &'static str = "scratch-card";
    const PREFIX: &'static str = SCRATCH_PREFIX;

    type Authored = ScratchCardPrize;
    type Entry = PrizeEntry;

    fn text(item: &ScratchCardPrize) -> Option<&str> {
        item.prize_text.as_deref()
    }

    fn redeem_code(item: &ScratchCardPrize) -> Option<&str> {
        item.redeem_code.as_deref()
    }

    fn complete(item: &ScratchCardPrize, text: &str, redeem_code: String) -> Result<PrizeEntry, GameError> {
        Ok(PrizeEntry {
            text: text.to_string(),
            value: item.prize_value.clone().unwrap_or_else(|| DEFAULT_VALUE.to_string()),
            icon: item.prize_icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
            color: Some(item.prize_color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string())),
            probability: Some(Weight::Integer(item.probability.unwrap_or(DEFAULT_PROBABILITY))),
            redeem_code,
        })
    }

    fn defaults() -> Vec<PrizeEntry> {
        vec![PrizeEntry {
            text: "10% OFF".to_string(),
            value: DEFAULT_VALUE.to_string(),
            icon: DEFAULT_ICON.to_string(),
            color: Some(DEFAULT_COLOR.to_string()),
            probability: None,
            redeem_code: "SCRATCH123".to_string(),
        }]
    }
}

/// Floating scratch card component.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScratchCardModel {
    pub title: String,
    pub button_text: String,
    pub modal_title: String,
    pub modal_subtitle: String,
    pub email_placeholder: String,
    pub play_button_text: String,
    pub scratch_text: String,
    pub prizes: GameConfig<PrizeEntry>,
}

impl FromContent for ScratchCardModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, MODEL_FIELDS);
        let authored: Vec<ScratchCardPrize> = bind_collection(node, "prizes");

        let prizes = build_config::<ScratchCard>(&authored).unwrap_or_else(|e| {
            tracing::error!("Scratch card {}: prize defaults unusable: {}", node.path, e);
            GameConfig::empty(e.to_string())
        });

        Self {
            title: f.string("title").unwrap_or_default(),
            button_text: f.string("buttonText").unwrap_or_default(),
            modal_title: f.string("modalTitle").unwrap_or_default(),
            modal_subtitle: f.string("modalSubtitle").unwrap_or_default(),
            email_placeholder: f.string("emailPlaceholder").unwrap_or_default(),
            play_button_text: f.string("playButtonText").unwrap_or_default(),
            scratch_text: f.string("scratchText").unwrap_or_default(),
            prizes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConfigSource;
    use serde_json::json;

    fn model(value: serde_json::Value) -> ScratchCardModel {
        ScratchCardModel::from_content(&ContentNode::from_json("/content/page/scratch", &value))
    }

    #[test]
    fn test_display_defaults() {
        let m = model(json!({}));
        assert_eq!(m.title, "Scratch & Win!");
        assert_eq!(m.button_text, "🎫 SCRATCH CARD");
        assert_eq!(m.play_button_text, "START SCRATCHING");
        assert_eq!(m.scratch_text, "Scratch here to reveal your prize!");
    }

    #[test]
    fn test_default_prize() {
        let m = model(json!({ "title": "Win big" }));
        assert_eq!(m.title, "Win big");
        assert_eq!(m.prizes.source, ConfigSource::NoAuthoredEntries);
        assert_eq!(m.prizes.count, 1);
        assert_eq!(m.prizes.entries[0].redeem_code, "SCRATCH123");
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&m.prizes.entries_json).unwrap(),
            json!([{ "text": "10% OFF", "value": "Save 10% on your next order", "icon": "🎯", "color": "#3b82f6", "redeemCode": "SCRATCH123" }])
        );
    }

    #[test]
    fn test_authored_prizes_fill_defaults() {
        let m = model(json!({
            "prizes": {
                "item0": { "prizeText": "10% OFF" },
                "item1": { "prizeText": " " },
                "item2": { "prizeText": "Free Coffee", "prizeValue": "One latte", "prizeIcon": "☕", "prizeColor": "#000", "probability": "60", "redeemCode": " COFFEE " }
            }
        }));

        assert_eq!(m.prizes.source, ConfigSource::Authored);
        assert_eq!(m.prizes.count, 2);

        let first = &m.prizes.entries[0];
        assert_eq!(first.redeem_code, "SCRATCH10OFF123");
        assert_eq!(first.value, DEFAULT_VALUE);
        assert_eq!(first.icon, DEFAULT_ICON);
        assert_eq!(first.color.as_deref(), Some(DEFAULT_COLOR));
        assert_eq!(first.probability, Some(Weight::Integer(25)));

        let second = &m.prizes.entries[1];
        assert_eq!(second.text, "Free Coffee");
        assert_eq!(second.icon, "☕");
        assert_eq!(second.probability, Some(Weight::Integer(60)));
        assert_eq!(second.redeem_code, "COFFEE");
    }
}
