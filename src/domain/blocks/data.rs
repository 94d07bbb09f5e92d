//! Payload shapes for each block variant.
//!
//! Every struct keeps keys it does not model in `extra`, so payloads written
//! by other clients survive an editing session unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextAlign::Left => "Left",
            TextAlign::Center => "Center",
            TextAlign::Right => "Right",
        }
    }
}

impl FromStr for TextAlign {
    type Err = ChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TextAlign::ALL
            .into_iter()
            .find(|align| align.as_str() == value)
            .ok_or_else(|| ChoiceError::new("align", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 3] = [
        ButtonStyle::Primary,
        ButtonStyle::Secondary,
        ButtonStyle::Outline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "primary",
            ButtonStyle::Secondary => "secondary",
            ButtonStyle::Outline => "outline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "Primary",
            ButtonStyle::Secondary => "Secondary",
            ButtonStyle::Outline => "Outline",
        }
    }
}

impl FromStr for ButtonStyle {
    type Err = ChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ButtonStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == value)
            .ok_or_else(|| ChoiceError::new("button_style", value))
    }
}

/// Grid width of a features block. Serialized as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Columns {
    Two,
    #[default]
    Three,
    Four,
}

impl Columns {
    pub const ALL: [Columns; 3] = [Columns::Two, Columns::Three, Columns::Four];

    pub fn get(self) -> u8 {
        match self {
            Columns::Two => 2,
            Columns::Three => 3,
            Columns::Four => 4,
        }
    }
}

impl From<Columns> for u8 {
    fn from(value: Columns) -> Self {
        value.get()
    }
}

impl TryFrom<u8> for Columns {
    type Error = ChoiceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Columns::Two),
            3 => Ok(Columns::Three),
            4 => Ok(Columns::Four),
            other => Err(ChoiceError::new("columns", other.to_string())),
        }
    }
}

impl FromStr for Columns {
    type Err = ChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u8>()
            .map_err(|_| ChoiceError::new("columns", value))
            .and_then(Columns::try_from)
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// `null` reads as the field's default, like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A value outside one of the closed choice sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid choice for `{field}`")]
pub struct ChoiceError {
    pub field: &'static str,
    pub value: String,
}

impl ChoiceError {
    fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeroData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextData {
    /// HTML or Markdown source.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeaturesData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Columns>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<FeatureItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeaturesData {
    pub fn columns_or_default(&self) -> Columns {
        self.columns.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon name (`star`, `check`) or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeatureItem {
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            description: Some(String::new()),
            icon: Some(String::new()),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plans: Vec<PricingPlan>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingPlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-form price label, e.g. `$99/month`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlighted: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PricingPlan {
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            description: Some(String::new()),
            features: Vec::new(),
            button_text: Some("Get Started".to_string()),
            button_url: Some(String::new()),
            highlighted: false,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FaqData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<FaqItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FaqItem {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestimonialData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub testimonials: Vec<TestimonialItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestimonialItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub quote: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// e.g. `CEO, Company Name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestimonialItem {
    pub fn empty() -> Self {
        Self {
            quote: String::new(),
            author: String::new(),
            avatar_url: Some(String::new()),
            role: Some(String::new()),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoData {
    /// YouTube, Vimeo or direct file URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub autoplay: bool,
    #[serde(rename = "loop", default, deserialize_with = "null_as_default")]
    pub looping: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CtaData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub button_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub button_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
    /// Colour or CSS gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
