use serde::Serialize;
use xerago_core::{bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

pub const HERO_RESOURCE_TYPE: &str = "citi/components/hero";
pub const BANNER_RESOURCE_TYPE: &str = "citi/components/citi-hero";

const HERO_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("heroBackgroundReference"),
    FieldSpec::text("title"),
    FieldSpec::text("description"),
    FieldSpec::text("buttonName"),
    FieldSpec::text("buttonUrl"),
];

const BANNER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("backgroundImage"),
    FieldSpec::text("backgroundAlt"),
    FieldSpec::text("title"),
    FieldSpec::text("description"),
    FieldSpec::text("ctaText"),
    FieldSpec::text("ctaLink"),
];

/// Home page hero with a single call to action.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroModel {
    pub hero_background_reference: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_name: Option<String>,
    pub button_url: Option<String>,
}

impl FromContent for HeroModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, HERO_FIELDS);
        Self {
            hero_background_reference: f.string("heroBackgroundReference"),
            title: f.string("title"),
            description: f.string("description"),
            button_name: f.string("buttonName"),
            button_url: f.string("buttonUrl"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerModel {
    pub background_image: Option<String>,
    pub background_alt: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

impl FromContent for BannerModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, BANNER_FIELDS);
        Self {
            background_image: f.string("backgroundImage"),
            background_alt: f.string("backgroundAlt"),
            title: f.string("title"),
            description: f.string("description"),
            cta_text: f.string("ctaText"),
            cta_link: f.string("ctaLink"),
        }
    }
}
