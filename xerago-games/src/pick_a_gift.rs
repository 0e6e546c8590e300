use serde::Serialize;
use xerago_core::{bind_collection, bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

use crate::builder::{build_config, GameError, GameKind};
use crate::models::{GameConfig, PrizeEntry, Weight};
use crate::redeem::PICK_PREFIX;

pub const RESOURCE_TYPE: &str = "citi/components/floating-pick-a-gift";

const DEFAULT_ICON: &str = "🎁";

const PRIZE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("text"),
    FieldSpec::text("value"),
    FieldSpec::text_or("icon", DEFAULT_ICON),
    FieldSpec::text("color"),
    FieldSpec::integer("probability"),
    FieldSpec::text("redeemCode"),
];

const MODEL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("buttonText"),
    FieldSpec::text("modalTitle"),
    FieldSpec::text("modalSubtitle"),
    FieldSpec::text("emailPlaceholder"),
    FieldSpec::text("playButtonText"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickAGiftPrize {
    pub text: Option<String>,
    pub value: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub probability: Option<i64>,
    pub redeem_code: Option<String>,
}

impl FromContent for PickAGiftPrize {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, PRIZE_FIELDS);
        Self {
            text: f.string("text"),
            value: f.string("value"),
            icon: f.string("icon"),
            color: f.string("color"),
            probability: f.integer("probability"),
            redeem_code: f.string("redeemCode"),
        }
    }
}

pub struct PickAGift;

impl GameKind for PickAGift {
    const NAME: &'static str = "pick-a-gift";
    const PREFIX: &'static str = PICK_PREFIX;

    type Authored = PickAGiftPrize;
    type Entry = PrizeEntry;

    fn text(item: &PickAGiftPrize) -> Option<&str> {
        item.text.as_deref()
    }

    fn redeem_code(item: &PickAGiftPrize) -> Option<&str> {
        item.redeem_code.as_deref()
    }

    fn complete(item: &PickAGiftPrize, text: &str, redeem_code: String) -> Result<PrizeEntry, GameError> {
        Ok(PrizeEntry {
            text: text.to_string(),
            value: item.value.clone().unwrap_or_default(),
            icon: item.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
            color: item.color.clone(),
            probability: item.probability.map(Weight::Integer),
            redeem_code,
        })
    }

    fn defaults() -> Vec<PrizeEntry> {
        [
            ("10% Off", "Save 10% on your next order", "🎯", "#3b82f6", 30, "PICK10OFF"),
            ("Free Shipping", "Free shipping on orders over $50", "🚚", "#10b981", 25, "PICKFREESHIP"),
            ("15% Off", "Save 15% on your next order", "💰", "#f59e0b", 20, "PICK15OFF"),
            ("Buy 1 Get 1", "Buy one get one free on select items", "🎁", "#8b5cf6", 15, "PICKBOGO"),
            ("20% Off", "Save 20% on your next order", "⭐", "#ef4444", 8, "PICK20OFF"),
            ("$25 Off", "Get $25 off orders over $100", "💎", "#06b6d4", 2, "PICK25OFF"),
        ]
        .into_iter()
        .map(|(text, value, icon, color, probability, code)| PrizeEntry {
            text: text.to_string(),
            value: value.to_string(),
            icon: icon.to_string(),
            color: Some(color.to_string()),
            probability: Some(Weight::Integer(probability)),
            redeem_code: code.to_string(),
        })
        .collect()
    }
}

/// Floating pick-a-gift component. Display strings have no fallbacks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickAGiftModel {
    pub title: Option<String>,
    pub button_text: Option<String>,
    pub modal_title: Option<String>,
    pub modal_subtitle: Option<String>,
    pub email_placeholder: Option<String>,
    pub play_button_text: Option<String>,
    pub prizes: GameConfig<PrizeEntry>,
}

impl FromContent for PickAGiftModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, MODEL_FIELDS);
        let authored: Vec<PickAGiftPrize> = bind_collection(node, "prizes");

        let prizes = build_config::<PickAGift>(&authored).unwrap_or_else(|e| {
            tracing::error!("Pick-a-gift {}: prize defaults unusable: {}", node.path, e);
            GameConfig::empty(e.to_string())
        });

        Self {
            title: f.string("title"),
            button_text: f.string("buttonText"),
            modal_title: f.string("modalTitle"),
            modal_subtitle: f.string("modalSubtitle"),
            email_placeholder: f.string("emailPlaceholder"),
            play_button_text: f.string("playButtonText"),
            prizes,
        }
    }
}
