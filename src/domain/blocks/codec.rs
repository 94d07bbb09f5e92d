//! JSON encoding of block sequences.
//!
//! Pages carry their blocks as a JSON array and posts as JSON text; both go
//! through the `Serialize`/`Deserialize` impls below. Decoding is lenient
//! about the shapes older clients persisted:
//!
//! - a missing `id` gets a generated one; a numeric one is kept as text;
//! - missing or `null` `data` becomes `{}`;
//! - a known type whose `data` is not an object decodes from `{}`;
//! - a known type whose object fails the typed shape is kept verbatim as
//!   [`BlockContent::Malformed`];
//! - an unknown type keeps its `data` text byte-for-byte.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::warn;

use super::{Block, BlockContent, BlockId, BlockType, RawData};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to decode blocks: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode blocks: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Parse a persisted block array. Blank text and `null` mean no blocks.
pub fn decode_blocks(text: &str) -> Result<Vec<Block>, CodecError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed).map_err(CodecError::Decode)
}

/// Compact JSON text for a block sequence.
pub fn encode_blocks(blocks: &[Block]) -> Result<String, CodecError> {
    serde_json::to_string(blocks).map_err(CodecError::Encode)
}

pub fn blocks_to_raw(blocks: &[Block]) -> Result<Box<RawValue>, CodecError> {
    serde_json::value::to_raw_value(blocks).map_err(CodecError::Encode)
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Block", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", self.kind())?;
        match &self.content {
            BlockContent::Hero(data) => state.serialize_field("data", data)?,
            BlockContent::Text(data) => state.serialize_field("data", data)?,
            BlockContent::Image(data) => state.serialize_field("data", data)?,
            BlockContent::Features(data) => state.serialize_field("data", data)?,
            BlockContent::Pricing(data) => state.serialize_field("data", data)?,
            BlockContent::Faq(data) => state.serialize_field("data", data)?,
            BlockContent::Testimonial(data) => state.serialize_field("data", data)?,
            BlockContent::Video(data) => state.serialize_field("data", data)?,
            BlockContent::Cta(data) => state.serialize_field("data", data)?,
            BlockContent::Malformed { data, .. } | BlockContent::Unknown { data, .. } => {
                state.serialize_field("data", data.raw())?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct WireBlock {
    #[serde(default)]
    id: Option<Value>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Option<Box<RawValue>>,
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireBlock::deserialize(deserializer)?;
        let id = wire_id(wire.id).map_or_else(BlockId::generate, BlockId::new);
        let data = match wire.data {
            Some(raw) => raw,
            None => RawValue::from_string("{}".to_string()).map_err(de::Error::custom)?,
        };

        Ok(Block {
            content: content_from_raw(&wire.kind, data),
            id,
        })
    }
}

/// Non-empty strings and numbers are usable ids; anything else is replaced.
fn wire_id(id: Option<Value>) -> Option<String> {
    match id? {
        Value::String(id) if !id.is_empty() => Some(id),
        Value::Number(number) => Some(number.to_string()),
        Value::Null | Value::String(_) => None,
        other => {
            warn!(id = %other, "block id is not a string; generating a new one");
            None
        }
    }
}

fn content_from_raw(kind: &str, raw: Box<RawValue>) -> BlockContent {
    let Ok(block_type) = kind.parse::<BlockType>() else {
        return BlockContent::Unknown {
            kind: kind.to_string(),
            data: RawData::new(raw),
        };
    };

    let text = if raw.get().trim_start().starts_with('{') {
        raw.get()
    } else {
        warn!(
            block_type = block_type.as_str(),
            data = raw.get(),
            "block data is not an object; using an empty payload"
        );
        "{}"
    };

    match decode_typed(block_type, text) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                block_type = block_type.as_str(),
                error = %err,
                "block data does not match its type; keeping it unedited"
            );
            BlockContent::Malformed {
                block_type,
                reason: err.to_string(),
                data: RawData::new(raw),
            }
        }
    }
}

fn decode_typed(block_type: BlockType, text: &str) -> Result<BlockContent, serde_json::Error> {
    Ok(match block_type {
        BlockType::Hero => BlockContent::Hero(parse(text)?),
        BlockType::Text => BlockContent::Text(parse(text)?),
        BlockType::Image => BlockContent::Image(parse(text)?),
        BlockType::Features => BlockContent::Features(parse(text)?),
        BlockType::Pricing => BlockContent::Pricing(parse(text)?),
        BlockType::Faq => BlockContent::Faq(parse(text)?),
        BlockType::Testimonial => BlockContent::Testimonial(parse(text)?),
        BlockType::Video => BlockContent::Video(parse(text)?),
        BlockType::Cta => BlockContent::Cta(parse(text)?),
    })
}

fn parse<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}
