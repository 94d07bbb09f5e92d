//! Single-field updates over block payloads.
//!
//! `with` consumes a payload and returns a new one where exactly the named
//! field changed. Sibling fields and `extra` keys pass through untouched.

use super::data::{
    ButtonStyle, Columns, CtaData, FaqData, FaqItem, FeatureItem, FeaturesData, HeroData,
    ImageData, PricingData, PricingPlan, TestimonialData, TestimonialItem, TextAlign, TextData,
    VideoData,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroField {
    Title(String),
    Subtitle(String),
    ImageUrl(String),
}

impl HeroData {
    pub fn with(self, field: HeroField) -> Self {
        match field {
            HeroField::Title(title) => Self { title, ..self },
            HeroField::Subtitle(value) => Self {
                subtitle: Some(value),
                ..self
            },
            HeroField::ImageUrl(value) => Self {
                image_url: Some(value),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextField {
    Content(String),
    Align(TextAlign),
}

impl TextData {
    pub fn with(self, field: TextField) -> Self {
        match field {
            TextField::Content(content) => Self { content, ..self },
            TextField::Align(align) => Self {
                align: Some(align),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageField {
    Url(String),
    Alt(String),
    Caption(String),
}

impl ImageData {
    pub fn with(self, field: ImageField) -> Self {
        match field {
            ImageField::Url(url) => Self { url, ..self },
            ImageField::Alt(value) => Self {
                alt: Some(value),
                ..self
            },
            ImageField::Caption(value) => Self {
                caption: Some(value),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeaturesField {
    Title(String),
    Subtitle(String),
    Columns(Columns),
    Items(Vec<FeatureItem>),
}

impl FeaturesData {
    pub fn with(self, field: FeaturesField) -> Self {
        match field {
            FeaturesField::Title(value) => Self {
                title: Some(value),
                ..self
            },
            FeaturesField::Subtitle(value) => Self {
                subtitle: Some(value),
                ..self
            },
            FeaturesField::Columns(columns) => Self {
                columns: Some(columns),
                ..self
            },
            FeaturesField::Items(items) => Self { items, ..self },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureItemField {
    Title(String),
    Description(String),
    Icon(String),
}

impl FeatureItem {
    pub fn with(self, field: FeatureItemField) -> Self {
        match field {
            FeatureItemField::Title(title) => Self { title, ..self },
            FeatureItemField::Description(value) => Self {
                description: Some(value),
                ..self
            },
            FeatureItemField::Icon(value) => Self {
                icon: Some(value),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PricingField {
    Title(String),
    Subtitle(String),
    Plans(Vec<PricingPlan>),
}

impl PricingData {
    pub fn with(self, field: PricingField) -> Self {
        match field {
            PricingField::Title(value) => Self {
                title: Some(value),
                ..self
            },
            PricingField::Subtitle(value) => Self {
                subtitle: Some(value),
                ..self
            },
            PricingField::Plans(plans) => Self { plans, ..self },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingPlanField {
    Name(String),
    Price(String),
    Description(String),
    Features(Vec<String>),
    ButtonText(String),
    ButtonUrl(String),
    Highlighted(bool),
}

impl PricingPlan {
    pub fn with(self, field: PricingPlanField) -> Self {
        match field {
            PricingPlanField::Name(name) => Self { name, ..self },
            PricingPlanField::Price(price) => Self { price, ..self },
            PricingPlanField::Description(value) => Self {
                description: Some(value),
                ..self
            },
            PricingPlanField::Features(features) => Self { features, ..self },
            PricingPlanField::ButtonText(value) => Self {
                button_text: Some(value),
                ..self
            },
            PricingPlanField::ButtonUrl(value) => Self {
                button_url: Some(value),
                ..self
            },
            PricingPlanField::Highlighted(highlighted) => Self {
                highlighted,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FaqField {
    Title(String),
    Items(Vec<FaqItem>),
}

impl FaqData {
    pub fn with(self, field: FaqField) -> Self {
        match field {
            FaqField::Title(value) => Self {
                title: Some(value),
                ..self
            },
            FaqField::Items(items) => Self { items, ..self },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaqItemField {
    Question(String),
    Answer(String),
}

impl FaqItem {
    pub fn with(self, field: FaqItemField) -> Self {
        match field {
            FaqItemField::Question(question) => Self { question, ..self },
            FaqItemField::Answer(answer) => Self { answer, ..self },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TestimonialField {
    Title(String),
    Subtitle(String),
    Testimonials(Vec<TestimonialItem>),
}

impl TestimonialData {
    pub fn with(self, field: TestimonialField) -> Self {
        match field {
            TestimonialField::Title(value) => Self {
                title: Some(value),
                ..self
            },
            TestimonialField::Subtitle(value) => Self {
                subtitle: Some(value),
                ..self
            },
            TestimonialField::Testimonials(testimonials) => Self {
                testimonials,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestimonialItemField {
    Quote(String),
    Author(String),
    AvatarUrl(String),
    Role(String),
}

impl TestimonialItem {
    pub fn with(self, field: TestimonialItemField) -> Self {
        match field {
            TestimonialItemField::Quote(quote) => Self { quote, ..self },
            TestimonialItemField::Author(author) => Self { author, ..self },
            TestimonialItemField::AvatarUrl(value) => Self {
                avatar_url: Some(value),
                ..self
            },
            TestimonialItemField::Role(value) => Self {
                role: Some(value),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoField {
    Url(String),
    Title(String),
    Description(String),
    Autoplay(bool),
    Loop(bool),
}

impl VideoData {
    pub fn with(self, field: VideoField) -> Self {
        match field {
            VideoField::Url(url) => Self { url, ..self },
            VideoField::Title(value) => Self {
                title: Some(value),
                ..self
            },
            VideoField::Description(value) => Self {
                description: Some(value),
                ..self
            },
            VideoField::Autoplay(autoplay) => Self { autoplay, ..self },
            VideoField::Loop(looping) => Self { looping, ..self },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CtaField {
    Title(String),
    Subtitle(String),
    ButtonText(String),
    ButtonUrl(String),
    ButtonStyle(ButtonStyle),
    Background(String),
}

impl CtaData {
    pub fn with(self, field: CtaField) -> Self {
        match field {
            CtaField::Title(title) => Self { title, ..self },
            CtaField::Subtitle(value) => Self {
                subtitle: Some(value),
                ..self
            },
            CtaField::ButtonText(button_text) => Self {
                button_text,
                ..self
            },
            CtaField::ButtonUrl(button_url) => Self { button_url, ..self },
            CtaField::ButtonStyle(style) => Self {
                button_style: Some(style),
                ..self
            },
            CtaField::Background(value) => Self {
                background: Some(value),
                ..self
            },
        }
    }
}
