//! Simple editorial components with flat, optional fields.

use serde::Serialize;
use xerago_core::{bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

pub const TESTIMONIAL_RESOURCE_TYPE: &str = "citi/components/testimonial";
pub const MOBILE_BANKING_RESOURCE_TYPE: &str = "citi/components/mobile-banking";
pub const KNOWLEDGE_CARD_RESOURCE_TYPE: &str = "citi/components/knowledge-card";

const TESTIMONIAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("description"),
    FieldSpec::text("authorName"),
    FieldSpec::text("authorDesignation"),
    FieldSpec::text("authorImageReference"),
];

const MOBILE_BANKING_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("description"),
    FieldSpec::text("imageReference"),
    FieldSpec::text("buttonName"),
    FieldSpec::text("buttonLink"),
];

const KNOWLEDGE_CARD_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("cardTitle"),
    FieldSpec::text("cardDate"),
    FieldSpec::text("cardDescription"),
    FieldSpec::text("cardImageReference"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub author_designation: Option<String>,
    pub author_image_reference: Option<String>,
}

impl FromContent for TestimonialModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, TESTIMONIAL_FIELDS);
        Self {
            title: f.string("title"),
            description: f.string("description"),
            author_name: f.string("authorName"),
            author_designation: f.string("authorDesignation"),
            author_image_reference: f.string("authorImageReference"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileBankingModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_reference: Option<String>,
    pub button_name: Option<String>,
    pub button_link: Option<String>,
}

impl FromContent for MobileBankingModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, MOBILE_BANKING_FIELDS);
        Self {
            title: f.string("title"),
            description: f.string("description"),
            image_reference: f.string("imageReference"),
            button_name: f.string("buttonName"),
            button_link: f.string("buttonLink"),
        }
    }
}

/// A single article teaser.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCard {
    pub card_title: Option<String>,
    pub card_date: Option<String>,
    pub card_description: Option<String>,
    pub card_image_reference: Option<String>,
}

impl FromContent for KnowledgeCard {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, KNOWLEDGE_CARD_FIELDS);
        Self {
            card_title: f.string("cardTitle"),
            card_date: f.string("cardDate"),
            card_description: f.string("cardDescription"),
            card_image_reference: f.string("cardImageReference"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_testimonial() {
        let node = ContentNode::from_json(
            "/t",
            &json!({ "authorName": "A. Tan", "authorDesignation": "Customer since 2010", "rating": 5 }),
        );
        let model = TestimonialModel::from_content(&node);
        assert_eq!(model.author_name.as_deref(), Some("A. Tan"));
        assert_eq!(model.title, None);
    }

    #[test]
    fn test_mobile_banking() {
        let node = ContentNode::from_json("/m", &json!({ "buttonName": "Download", "buttonLink": "/app" }));
        let model = MobileBankingModel::from_content(&node);
        assert_eq!(model.button_link.as_deref(), Some("/app"));
    }

    #[test]
    fn test_knowledge_card_date_is_text() {
        let node = ContentNode::from_json("/k", &json!({ "cardTitle": "Saving 101", "cardDate": 20240105 }));
        let card = KnowledgeCard::from_content(&node);
        assert_eq!(card.card_title.as_deref(), Some("Saving 101"));
        assert_eq!(card.card_date.as_deref(), Some("20240105"));
    }
}
