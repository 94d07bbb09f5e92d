//! Content blocks: the closed set of layout variants a page is assembled from.
//!
//! A [`Block`] pairs a session-stable id with its [`BlockContent`]. Known
//! variants carry a typed payload. Blocks whose tag is not recognised, or
//! whose payload does not fit the typed shape, keep their raw JSON so they
//! pass through an editing session unchanged.

pub mod codec;
pub mod data;
pub mod patch;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;
use uuid::Uuid;

pub use codec::{CodecError, blocks_to_raw, decode_blocks, encode_blocks};
pub use data::{
    ButtonStyle, ChoiceError, Columns, CtaData, FaqData, FaqItem, FeatureItem, FeaturesData,
    HeroData, ImageData, PricingData, PricingPlan, TestimonialData, TestimonialItem, TextAlign,
    TextData, VideoData,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Hero,
    Text,
    Image,
    Features,
    Pricing,
    Faq,
    Testimonial,
    Video,
    Cta,
}

impl BlockType {
    /// Every variant, in add-menu order.
    pub const ALL: [BlockType; 9] = [
        BlockType::Hero,
        BlockType::Text,
        BlockType::Image,
        BlockType::Features,
        BlockType::Pricing,
        BlockType::Faq,
        BlockType::Testimonial,
        BlockType::Video,
        BlockType::Cta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Text => "text",
            BlockType::Image => "image",
            BlockType::Features => "features",
            BlockType::Pricing => "pricing",
            BlockType::Faq => "faq",
            BlockType::Testimonial => "testimonial",
            BlockType::Video => "video",
            BlockType::Cta => "cta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockType::Hero => "Hero",
            BlockType::Text => "Text",
            BlockType::Image => "Image",
            BlockType::Features => "Features",
            BlockType::Pricing => "Pricing",
            BlockType::Faq => "FAQ",
            BlockType::Testimonial => "Testimonial",
            BlockType::Video => "Video",
            BlockType::Cta => "Call to Action",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BlockType::Hero => "Title and subtitle",
            BlockType::Text => "Rich text content",
            BlockType::Image => "Image with caption",
            BlockType::Features => "Grid of feature highlights",
            BlockType::Pricing => "Plans with prices and features",
            BlockType::Faq => "Questions and answers",
            BlockType::Testimonial => "Customer quotes",
            BlockType::Video => "Embedded video",
            BlockType::Cta => "Headline with a button",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block type `{0}`")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownBlockType(value.to_string()))
    }
}

/// Client-generated block identifier; only meaningful as a render key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON payload kept verbatim.
#[derive(Debug, Clone)]
pub struct RawData(Box<RawValue>);

impl RawData {
    pub fn new(raw: Box<RawValue>) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> &str {
        self.0.get()
    }

    pub(crate) fn raw(&self) -> &RawValue {
        &self.0
    }
}

impl PartialEq for RawData {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Hero(HeroData),
    Text(TextData),
    Image(ImageData),
    Features(FeaturesData),
    Pricing(PricingData),
    Faq(FaqData),
    Testimonial(TestimonialData),
    Video(VideoData),
    Cta(CtaData),
    /// Known tag whose payload could not be read into the typed shape.
    Malformed {
        block_type: BlockType,
        data: RawData,
        reason: String,
    },
    /// Tag outside the closed set.
    Unknown { kind: String, data: RawData },
}

impl BlockContent {
    /// Wire tag (`type` field).
    pub fn kind(&self) -> &str {
        match self {
            BlockContent::Unknown { kind, .. } => kind,
            other => other
                .block_type()
                .map_or("", BlockType::as_str),
        }
    }

    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            BlockContent::Hero(_) => Some(BlockType::Hero),
            BlockContent::Text(_) => Some(BlockType::Text),
            BlockContent::Image(_) => Some(BlockType::Image),
            BlockContent::Features(_) => Some(BlockType::Features),
            BlockContent::Pricing(_) => Some(BlockType::Pricing),
            BlockContent::Faq(_) => Some(BlockType::Faq),
            BlockContent::Testimonial(_) => Some(BlockType::Testimonial),
            BlockContent::Video(_) => Some(BlockType::Video),
            BlockContent::Cta(_) => Some(BlockType::Cta),
            BlockContent::Malformed { block_type, .. } => Some(*block_type),
            BlockContent::Unknown { .. } => None,
        }
    }

    /// Whether a typed editor exists for this payload.
    pub fn is_editable(&self) -> bool {
        !matches!(
            self,
            BlockContent::Malformed { .. } | BlockContent::Unknown { .. }
        )
    }
}

/// Zero-value payload for a freshly added block.
pub fn default_data_for(block_type: BlockType) -> BlockContent {
    match block_type {
        BlockType::Hero => BlockContent::Hero(HeroData {
            subtitle: Some(String::new()),
            ..HeroData::default()
        }),
        BlockType::Text => BlockContent::Text(TextData::default()),
        BlockType::Image => BlockContent::Image(ImageData {
            alt: Some(String::new()),
            ..ImageData::default()
        }),
        BlockType::Features => BlockContent::Features(FeaturesData {
            title: Some(String::new()),
            subtitle: Some(String::new()),
            columns: Some(Columns::Three),
            ..FeaturesData::default()
        }),
        BlockType::Pricing => BlockContent::Pricing(PricingData {
            title: Some(String::new()),
            subtitle: Some(String::new()),
            ..PricingData::default()
        }),
        BlockType::Faq => BlockContent::Faq(FaqData {
            title: Some(String::new()),
            ..FaqData::default()
        }),
        BlockType::Testimonial => BlockContent::Testimonial(TestimonialData {
            title: Some(String::new()),
            subtitle: Some(String::new()),
            ..TestimonialData::default()
        }),
        BlockType::Video => BlockContent::Video(VideoData {
            title: Some(String::new()),
            ..VideoData::default()
        }),
        BlockType::Cta => BlockContent::Cta(CtaData {
            subtitle: Some(String::new()),
            button_style: Some(ButtonStyle::Primary),
            ..CtaData::default()
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub content: BlockContent,
}

impl Block {
    /// A new block of `block_type` with a fresh id and default payload.
    pub fn new(block_type: BlockType) -> Self {
        Self {
            id: BlockId::generate(),
            content: default_data_for(block_type),
        }
    }

    pub fn kind(&self) -> &str {
        self.content.kind()
    }

    pub fn block_type(&self) -> Option<BlockType> {
        self.content.block_type()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn block_type_round_trips_through_its_tag() {
        for kind in BlockType::ALL {
            assert_eq!(kind.as_str().parse::<BlockType>(), Ok(kind));
        }
        assert!("gallery".parse::<BlockType>().is_err());
    }

    #[test]
    fn defaults_match_their_variant() {
        for kind in BlockType::ALL {
            let content = default_data_for(kind);
            assert_eq!(content.block_type(), Some(kind));
            assert_eq!(content.kind(), kind.as_str());
            assert!(content.is_editable());
        }
    }

    #[test]
    fn hero_default_payload_has_empty_title_and_subtitle() {
        let block = Block::new(BlockType::Hero);
        let json = serde_json::to_value(&block).expect("json");
        assert_eq!(json["type"], "hero");
        assert_eq!(json["data"], json!({"title": "", "subtitle": ""}));
    }

    #[test]
    fn fresh_ids_are_unique() {
        let first = Block::new(BlockType::Text);
        let second = Block::new(BlockType::Text);
        assert_ne!(first.id, second.id);
    }
}
