use serde::Serialize;
use xerago_core::{bind_collection, bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

use crate::builder::{build_config, GameError, GameKind};
use crate::models::{GameConfig, SegmentEntry, Weight};
use crate::redeem::WHEEL_PREFIX;

pub const RESOURCE_TYPE: &str = "citi/components/wheel-spin-game";

const DEFAULT_COLOR: &str = "#FF6B6B";
/// Equal share of an eight-segment wheel.
const DEFAULT_PROBABILITY: f64 = 0.125;

const SEGMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("text"),
    FieldSpec::text("color"),
    FieldSpec::text("value"),
    FieldSpec::text("bgColor"),
    FieldSpec::text("icon"),
    FieldSpec::decimal_or("probability", DEFAULT_PROBABILITY),
    FieldSpec::text("redeemCode"),
];

const MODEL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text_or("title", "Spin to Win!"),
    FieldSpec::text_or("buttonText", "SPIN"),
    FieldSpec::text_or("spinningText", "Spinning..."),
    FieldSpec::integer_or("wheelSize", 400),
    FieldSpec::integer_or("animationDuration", 3000),
    FieldSpec::integer_or("minRevolutions", 3),
    FieldSpec::integer_or("maxRevolutions", 5),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelSegment {
    pub text: Option<String>,
    pub color: Option<String>,
    pub value: Option<String>,
    pub bg_color: Option<String>,
    pub icon: Option<String>,
    pub probability: Option<f64>,
    pub redeem_code: Option<String>,
}

impl FromContent for WheelSegment {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, SEGMENT_FIELDS);
        Self {
            text: f.string("text"),
            color: f.string("color"),
            value: f.string("value"),
            bg_color: f.string("bgColor"),
            icon: f.string("icon"),
            probability: f.decimal("probability"),
            redeem_code: f.string("redeemCode"),
        }
    }
}

pub struct Wheel;

impl GameKind for Wheel {
    const NAME: &'static str = "wheel-spin";
    const PREFIX: &'static str = WHEEL_PREFIX;

    type Authored = WheelSegment;
    type Entry = SegmentEntry;

    fn text(item: &WheelSegment) -> Option<&str> {
        item.text.as_deref()
    }

    fn redeem_code(item: &WheelSegment) -> Option<&str> {
        item.redeem_code.as_deref()
    }

    fn complete(item: &WheelSegment, text: &str, redeem_code: String) -> Result<SegmentEntry, GameError> {
        let probability = Weight::Decimal(item.probability.unwrap_or(DEFAULT_PROBABILITY));
        if !probability.is_finite() {
            return Err(GameError::InvalidProbability { text: text.to_string() });
        }

        Ok(SegmentEntry {
            text: text.to_string(),
            color: item.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            value: item.value.clone().unwrap_or_default(),
            bg_color: Some(item.bg_color.clone().unwrap_or_default()),
            icon: Some(item.icon.clone().unwrap_or_default()),
            probability: Some(probability),
            redeem_code,
        })
    }

    fn defaults() -> Vec<SegmentEntry> {
        [
            ("🎁 Free Gift", "#FF6B6B", "Claim your free gift now!", "WHEELGIFT"),
            ("💰 $10 Cash", "#4ECDC4", "Cash prize added to your account", "WHEELCASH"),
            ("🎯 50% Off", "#45B7D1", "Use code: SPIN50", "WHEEL50OFF"),
            ("🎪 Try Again", "#96CEB4", "Better luck next time!", ""),
            ("🏆 Grand Prize", "#FFEAA7", "You won the grand prize!", "WHEELGRAND"),
            ("🎨 Mystery Box", "#DDA0DD", "Open to reveal your surprise", "WHEELMYSTERY"),
        ]
        .into_iter()
        .map(|(text, color, value, code)| SegmentEntry {
            text: text.to_string(),
            color: color.to_string(),
            value: value.to_string(),
            bg_color: None,
            icon: None,
            probability: None,
            redeem_code: code.to_string(),
        })
        .collect()
    }
}

/// Wheel spin game component.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSpinGameModel {
    pub title: String,
    pub button_text: String,
    pub spinning_text: String,
    pub wheel_size: i64,
    pub animation_duration: i64,
    pub min_revolutions: i64,
    pub max_revolutions: i64,
    pub segments: GameConfig<SegmentEntry>,
}

impl FromContent for WheelSpinGameModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, MODEL_FIELDS);
        let authored: Vec<WheelSegment> = bind_collection(node, "segments");

        let segments = build_config::<Wheel>(&authored).unwrap_or_else(|e| {
            tracing::error!("Wheel {}: segment defaults unusable: {}", node.path, e);
            GameConfig::empty(e.to_string())
        });

        Self {
            title: f.string("title").unwrap_or_default(),
            button_text: f.string("buttonText").unwrap_or_default(),
            spinning_text: f.string("spinningText").unwrap_or_default(),
            wheel_size: f.integer("wheelSize").unwrap_or_default(),
            animation_duration: f.integer("animationDuration").unwrap_or_default(),
            min_revolutions: f.integer("minRevolutions").unwrap_or_default(),
            max_revolutions: f.integer("maxRevolutions").unwrap_or_default(),
            segments,
        }
    }
}
