use serde::Serialize;
use xerago_core::{bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

pub const GAME_SCREEN_RESOURCE_TYPE: &str = "xeragotheme/components/smartRushGame/gamescreen";
pub const GAME_START_SCREEN_RESOURCE_TYPE: &str = "xeragotheme/components/smartRushGame/gamestartscreen";

const GAME_SCREEN_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("description"),
    FieldSpec::text("logoReference"),
    FieldSpec::text("refreshLogoReference"),
    FieldSpec::text("statTitle"),
    FieldSpec::text("timerImgReference"),
];

const START_SCREEN_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("logoReference"),
    FieldSpec::text("gameTitle"),
    FieldSpec::text("gameSubTitle"),
    FieldSpec::text("startButtonText"),
    FieldSpec::text("tncButtonText"),
    FieldSpec::text("tncButtonUrl"),
    FieldSpec::text("howToPlayButtonText"),
    FieldSpec::text("howToPlayButtonUrl"),
];

/// In-play screen of the rush game.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScreenModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub logo_reference: Option<String>,
    pub refresh_logo_reference: Option<String>,
    pub stat_title: Option<String>,
    pub timer_img_reference: Option<String>,
}

impl FromContent for GameScreenModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, GAME_SCREEN_FIELDS);
        Self {
            title: f.string("title"),
            description: f.string("description"),
            logo_reference: f.string("logoReference"),
            refresh_logo_reference: f.string("refreshLogoReference"),
            stat_title: f.string("statTitle"),
            timer_img_reference: f.string("timerImgReference"),
        }
    }
}

/// Start screen of the rush game. Nodes of this type also serve random
/// coupons.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStartScreenModel {
    pub logo_reference: Option<String>,
    pub game_title: Option<String>,
    pub game_sub_title: Option<String>,
    pub start_button_text: Option<String>,
    pub tnc_button_text: Option<String>,
    pub tnc_button_url: Option<String>,
    pub how_to_play_button_text: Option<String>,
    pub how_to_play_button_url: Option<String>,
}

impl FromContent for GameStartScreenModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, START_SCREEN_FIELDS);
        Self {
            logo_reference: f.string("logoReference"),
            game_title: f.string("gameTitle"),
            game_sub_title: f.string("gameSubTitle"),
            start_button_text: f.string("startButtonText"),
            tnc_button_text: f.string("tncButtonText"),
            tnc_button_url: f.string("tncButtonUrl"),
            how_to_play_button_text: f.string("howToPlayButtonText"),
            how_to_play_button_url: f.string("howToPlayButtonUrl"),
        }
    }
}
