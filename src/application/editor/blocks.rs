//! Per-type block editors.
//!
//! Each payload renders one field per attribute and turns a raw input string
//! back into a single-field patch. Sub-lists go through [`edit_list`], which
//! wraps a `Repeater`.

use super::form::{
    BlockForm, EditError, FieldChange, FieldKind, FieldView, FormView, ITEM_VALUE, ItemForm,
    edit_list, list_view, parse_flag,
};
use crate::domain::blocks::patch::{
    CtaField, FaqField, FaqItemField, FeatureItemField, FeaturesField, HeroField, ImageField,
    PricingField, PricingPlanField, TestimonialField, TestimonialItemField, TextField, VideoField,
};
use crate::domain::blocks::{
    BlockContent, BlockType, ButtonStyle, Columns, CtaData, FaqData, FaqItem, FeatureItem,
    FeaturesData, HeroData, ImageData, PricingData, PricingPlan, TestimonialData,
    TestimonialItem, TextAlign, TextData, VideoData,
};

const IMAGE_PLACEHOLDER: &str = "https://example.com/image.jpg";
const SIGNUP_PLACEHOLDER: &str = "https://example.com/signup";

impl BlockForm for HeroData {
    const BLOCK_TYPE: BlockType = BlockType::Hero;

    fn form(&self) -> FormView {
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::text("title", "Title", &self.title)
                    .required()
                    .placeholder("Hero Title"),
                FieldView::optional_text("subtitle", "Subtitle", self.subtitle.as_ref())
                    .placeholder("Hero Subtitle"),
                FieldView::optional_text("image_url", "Image URL", self.image_url.as_ref())
                    .kind(FieldKind::Image)
                    .placeholder(IMAGE_PLACEHOLDER),
            ],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "title" => HeroField::Title(value),
                "subtitle" => HeroField::Subtitle(value),
                "image_url" => HeroField::ImageUrl(value),
                _ => return Err(EditError::unknown_field("hero", field)),
            },
            other => return Err(no_lists("hero", &other)),
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Hero(self)
    }
}

impl BlockForm for TextData {
    const BLOCK_TYPE: BlockType = BlockType::Text;

    fn form(&self) -> FormView {
        let align = self.align.unwrap_or_default();
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::text("content", "Content", &self.content)
                    .kind(FieldKind::TextArea)
                    .required()
                    .placeholder("Enter your text content here..."),
                FieldView::select(
                    "align",
                    "Alignment",
                    align.as_str(),
                    TextAlign::ALL
                        .into_iter()
                        .map(|choice| (choice.as_str(), choice.label().to_string())),
                ),
            ],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "content" => TextField::Content(value),
                "align" => TextField::Align(value.parse()?),
                _ => return Err(EditError::unknown_field("text", field)),
            },
            other => return Err(no_lists("text", &other)),
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Text(self)
    }
}

impl BlockForm for ImageData {
    const BLOCK_TYPE: BlockType = BlockType::Image;

    fn form(&self) -> FormView {
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::text("url", "Image URL", &self.url)
                    .kind(FieldKind::Image)
                    .required()
                    .placeholder(IMAGE_PLACEHOLDER),
                FieldView::optional_text("alt", "Alt Text", self.alt.as_ref())
                    .placeholder("Descriptive alt text"),
                FieldView::optional_text("caption", "Caption", self.caption.as_ref())
                    .placeholder("Image caption"),
            ],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "url" => ImageField::Url(value),
                "alt" => ImageField::Alt(value),
                "caption" => ImageField::Caption(value),
                _ => return Err(EditError::unknown_field("image", field)),
            },
            other => return Err(no_lists("image", &other)),
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Image(self)
    }
}

impl BlockForm for FeaturesData {
    const BLOCK_TYPE: BlockType = BlockType::Features;

    fn form(&self) -> FormView {
        let columns = self.columns_or_default().to_string();
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::optional_text("title", "Title", self.title.as_ref())
                    .placeholder("Features Section Title"),
                FieldView::optional_text("subtitle", "Subtitle", self.subtitle.as_ref())
                    .placeholder("Features Section Subtitle"),
                FieldView::select(
                    "columns",
                    "Columns",
                    &columns,
                    [("2", "2 Columns"), ("3", "3 Columns"), ("4", "4 Columns")]
                        .into_iter()
                        .map(|(value, label)| (value, label.to_string())),
                ),
            ],
        )
        .with_list(list_view("items", "Feature Items", &self.items))
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "title" => FeaturesField::Title(value),
                "subtitle" => FeaturesField::Subtitle(value),
                "columns" => FeaturesField::Columns(value.parse::<Columns>()?),
                _ => return Err(EditError::unknown_field("features", field)),
            },
            other => match other.list() {
                Some("items") => FeaturesField::Items(edit_list(&self.items, other)?),
                _ => return Err(no_lists("features", &other)),
            },
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Features(self)
    }
}

impl ItemForm for FeatureItem {
    const NAME: &'static str = "feature";
    const ADD_LABEL: &'static str = "Add Feature";
    const EMPTY_MESSAGE: &'static str = "No features yet. Add your first feature below.";

    fn empty() -> Self {
        FeatureItem::empty()
    }

    fn form(&self) -> FormView {
        FormView::new(
            Self::NAME,
            vec![
                FieldView::text("title", "Title", &self.title)
                    .required()
                    .placeholder("Feature Title"),
                FieldView::optional_text("description", "Description", self.description.as_ref())
                    .kind(FieldKind::TextArea)
                    .placeholder("Feature Description"),
                FieldView::optional_text("icon", "Icon", self.icon.as_ref())
                    .placeholder("Icon name or URL"),
            ],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "title" => FeatureItemField::Title(value),
                "description" => FeatureItemField::Description(value),
                "icon" => FeatureItemField::Icon(value),
                _ => return Err(EditError::unknown_field(Self::NAME, field)),
            },
            other => return Err(no_lists(Self::NAME, &other)),
        };
        Ok(self.clone().with(field))
    }
}

impl BlockForm for PricingData {
    const BLOCK_TYPE: BlockType = BlockType::Pricing;

    fn form(&self) -> FormView {
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::optional_text("title", "Title", self.title.as_ref())
                    .placeholder("Pricing Section Title"),
                FieldView::optional_text("subtitle", "Subtitle", self.subtitle.as_ref())
                    .placeholder("Pricing Section Subtitle"),
            ],
        )
        .with_list(list_view("plans", "Pricing Plans", &self.plans))
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "title" => PricingField::Title(value),
                "subtitle" => PricingField::Subtitle(value),
                _ => return Err(EditError::unknown_field("pricing", field)),
            },
            other => match other.list() {
                Some("plans") => PricingField::Plans(edit_list(&self.plans, other)?),
                _ => return Err(no_lists("pricing", &other)),
            },
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Pricing(self)
    }
}

impl ItemForm for PricingPlan {
    const NAME: &'static str = "plan";
    const ADD_LABEL: &'static str = "Add Pricing Plan";
    const EMPTY_MESSAGE: &'static str = "No pricing plans yet. Add your first plan below.";

    fn empty() -> Self {
        PricingPlan::empty()
    }

    fn form(&self) -> FormView {
        FormView::new(
            Self::NAME,
            vec![
                FieldView::text("name", "Plan Name", &self.name)
                    .required()
                    .placeholder("e.g., Starter, Pro, Enterprise"),
                FieldView::text("price", "Price", &self.price)
                    .required()
                    .placeholder("e.g., $99/month or $999/year"),
                FieldView::optional_text("description", "Description", self.description.as_ref())
                    .kind(FieldKind::TextArea)
                    .placeholder("Plan description"),
                FieldView::checkbox("highlighted", "Highlighted Plan", self.highlighted),
                FieldView::optional_text("button_text", "Button Text", self.button_text.as_ref())
                    .placeholder("Get Started"),
                FieldView::optional_text("button_url", "Button URL", self.button_url.as_ref())
                    .kind(FieldKind::Url)
                    .placeholder(SIGNUP_PLACEHOLDER),
            ],
        )
        .with_list(list_view("features", "Features", &self.features))
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "name" => PricingPlanField::Name(value),
                "price" => PricingPlanField::Price(value),
                "description" => PricingPlanField::Description(value),
                "highlighted" => PricingPlanField::Highlighted(parse_flag(&field, &value)?),
                "button_text" => PricingPlanField::ButtonText(value),
                "button_url" => PricingPlanField::ButtonUrl(value),
                _ => return Err(EditError::unknown_field(Self::NAME, field)),
            },
            other => match other.list() {
                Some("features") => PricingPlanField::Features(edit_list(&self.features, other)?),
                _ => return Err(no_lists(Self::NAME, &other)),
            },
        };
        Ok(self.clone().with(field))
    }
}

/// Plan features are bare strings.
impl ItemForm for String {
    const NAME: &'static str = "plan feature";
    const ADD_LABEL: &'static str = "+ Add Feature";
    const EMPTY_MESSAGE: &'static str = "No features yet.";

    fn empty() -> Self {
        String::new()
    }

    fn form(&self) -> FormView {
        FormView::new(
            Self::NAME,
            vec![FieldView::text(ITEM_VALUE, "Feature", self).placeholder("Feature name")],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        match change {
            FieldChange::Set { field, value } if field == ITEM_VALUE => Ok(value),
            FieldChange::Set { field, .. } => Err(EditError::unknown_field(Self::NAME, field)),
            other => Err(no_lists(Self::NAME, &other)),
        }
    }
}

impl BlockForm for FaqData {
    const BLOCK_TYPE: BlockType = BlockType::Faq;

    fn form(&self) -> FormView {
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::optional_text("title", "Title", self.title.as_ref())
                    .placeholder("Frequently Asked Questions"),
            ],
        )
        .with_list(list_view("items", "FAQ Items", &self.items))
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "title" => FaqField::Title(value),
                _ => return Err(EditError::unknown_field("faq", field)),
            },
            other => match other.list() {
                Some("items") => FaqField::Items(edit_list(&self.items, other)?),
                _ => return Err(no_lists("faq", &other)),
            },
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Faq(self)
    }
}

impl ItemForm for FaqItem {
    const NAME: &'static str = "faq item";
    const ADD_LABEL: &'static str = "Add FAQ Item";
    const EMPTY_MESSAGE: &'static str = "No FAQ items yet. Add your first question below.";

    fn empty() -> Self {
        FaqItem::empty()
    }

    fn form(&self) -> FormView {
        FormView::new(
            Self::NAME,
            vec![
                FieldView::text("question", "Question", &self.question)
                    .required()
                    .placeholder("What is your question?"),
                FieldView::text("answer", "Answer", &self.answer)
                    .kind(FieldKind::TextArea)
                    .required()
                    .placeholder("Answer to the question"),
            ],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "question" => FaqItemField::Question(value),
                "answer" => FaqItemField::Answer(value),
                _ => return Err(EditError::unknown_field(Self::NAME, field)),
            },
            other => return Err(no_lists(Self::NAME, &other)),
        };
        Ok(self.clone().with(field))
    }
}

impl BlockForm for TestimonialData {
    const BLOCK_TYPE: BlockType = BlockType::Testimonial;

    fn form(&self) -> FormView {
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::optional_text("title", "Title", self.title.as_ref())
                    .placeholder("What Our Customers Say"),
                FieldView::optional_text("subtitle", "Subtitle", self.subtitle.as_ref())
                    .placeholder("Testimonials Section Subtitle"),
            ],
        )
        .with_list(list_view("testimonials", "Testimonials", &self.testimonials))
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "title" => TestimonialField::Title(value),
                "subtitle" => TestimonialField::Subtitle(value),
                _ => return Err(EditError::unknown_field("testimonial", field)),
            },
            other => match other.list() {
                Some("testimonials") => {
                    TestimonialField::Testimonials(edit_list(&self.testimonials, other)?)
                }
                _ => return Err(no_lists("testimonial", &other)),
            },
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Testimonial(self)
    }
}

impl ItemForm for TestimonialItem {
    const NAME: &'static str = "testimonial";
    const ADD_LABEL: &'static str = "Add Testimonial";
    const EMPTY_MESSAGE: &'static str = "No testimonials yet. Add your first testimonial below.";

    fn empty() -> Self {
        TestimonialItem::empty()
    }

    fn form(&self) -> FormView {
        FormView::new(
            Self::NAME,
            vec![
                FieldView::text("quote", "Quote", &self.quote)
                    .kind(FieldKind::TextArea)
                    .required()
                    .placeholder("Customer testimonial quote"),
                FieldView::text("author", "Author Name", &self.author)
                    .required()
                    .placeholder("John Doe"),
                FieldView::optional_text("role", "Role/Company", self.role.as_ref())
                    .placeholder("CEO, Company Name"),
                FieldView::optional_text("avatar_url", "Avatar Image", self.avatar_url.as_ref())
                    .kind(FieldKind::Image),
            ],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "quote" => TestimonialItemField::Quote(value),
                "author" => TestimonialItemField::Author(value),
                "role" => TestimonialItemField::Role(value),
                "avatar_url" => TestimonialItemField::AvatarUrl(value),
                _ => return Err(EditError::unknown_field(Self::NAME, field)),
            },
            other => return Err(no_lists(Self::NAME, &other)),
        };
        Ok(self.clone().with(field))
    }
}

impl BlockForm for VideoData {
    const BLOCK_TYPE: BlockType = BlockType::Video;

    fn form(&self) -> FormView {
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::text("url", "Video URL", &self.url)
                    .kind(FieldKind::Url)
                    .required()
                    .placeholder("https://www.youtube.com/watch?v=..."),
                FieldView::optional_text("title", "Title", self.title.as_ref())
                    .placeholder("Video Title"),
                FieldView::optional_text("description", "Description", self.description.as_ref())
                    .kind(FieldKind::TextArea)
                    .placeholder("Video description"),
                FieldView::checkbox("autoplay", "Autoplay", self.autoplay),
                FieldView::checkbox("loop", "Loop", self.looping),
            ],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "url" => VideoField::Url(value),
                "title" => VideoField::Title(value),
                "description" => VideoField::Description(value),
                "autoplay" => VideoField::Autoplay(parse_flag(&field, &value)?),
                "loop" => VideoField::Loop(parse_flag(&field, &value)?),
                _ => return Err(EditError::unknown_field("video", field)),
            },
            other => return Err(no_lists("video", &other)),
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Video(self)
    }
}

impl BlockForm for CtaData {
    const BLOCK_TYPE: BlockType = BlockType::Cta;

    fn form(&self) -> FormView {
        let style = self.button_style.unwrap_or_default();
        FormView::new(
            Self::BLOCK_TYPE.label(),
            vec![
                FieldView::text("title", "Title", &self.title)
                    .required()
                    .placeholder("Ready to get started?"),
                FieldView::optional_text("subtitle", "Subtitle", self.subtitle.as_ref())
                    .placeholder("Join thousands of happy customers"),
                FieldView::text("button_text", "Button Text", &self.button_text)
                    .required()
                    .placeholder("Get Started"),
                FieldView::text("button_url", "Button URL", &self.button_url)
                    .kind(FieldKind::Url)
                    .required()
                    .placeholder(SIGNUP_PLACEHOLDER),
                FieldView::select(
                    "button_style",
                    "Button Style",
                    style.as_str(),
                    ButtonStyle::ALL
                        .into_iter()
                        .map(|choice| (choice.as_str(), choice.label().to_string())),
                ),
                FieldView::optional_text("background", "Background", self.background.as_ref())
                    .placeholder("Color or gradient (e.g., #667eea or linear-gradient(...))"),
            ],
        )
    }

    fn apply(&self, change: FieldChange) -> Result<Self, EditError> {
        let field = match change {
            FieldChange::Set { field, value } => match field.as_str() {
                "title" => CtaField::Title(value),
                "subtitle" => CtaField::Subtitle(value),
                "button_text" => CtaField::ButtonText(value),
                "button_url" => CtaField::ButtonUrl(value),
                "button_style" => CtaField::ButtonStyle(value.parse()?),
                "background" => CtaField::Background(value),
                _ => return Err(EditError::unknown_field("cta", field)),
            },
            other => return Err(no_lists("cta", &other)),
        };
        Ok(self.clone().with(field))
    }

    fn into_content(self) -> BlockContent {
        BlockContent::Cta(self)
    }
}

fn no_lists(form: &'static str, change: &FieldChange) -> EditError {
    EditError::unknown_list(form, change.list().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn hero_form_lists_every_attribute() {
        let form = HeroData::default().form();
        let names: Vec<&str> = form.fields.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, ["title", "subtitle", "image_url"]);
        assert!(form.field("title").expect("title").required);
        assert_eq!(form.field("image_url").expect("image").kind, FieldKind::Image);
    }

    #[test]
    fn setting_one_field_keeps_siblings() {
        let hero = HeroData {
            title: "Welcome".into(),
            subtitle: Some("Hi".into()),
            ..HeroData::default()
        };
        let updated = hero
            .apply(FieldChange::set("subtitle", "Hello"))
            .expect("apply");
        assert_eq!(updated.title, "Welcome");
        assert_eq!(updated.subtitle.as_deref(), Some("Hello"));
    }

    #[test]
    fn constrained_fields_reject_unknown_choices() {
        let text = TextData::default();
        assert_eq!(
            text.apply(FieldChange::set("align", "center"))
                .expect("align")
                .align,
            Some(TextAlign::Center)
        );
        assert!(matches!(
            text.apply(FieldChange::set("align", "justify")),
            Err(EditError::InvalidChoice(_))
        ));

        let features = FeaturesData::default();
        assert!(features.apply(FieldChange::set("columns", "5")).is_err());
        assert_eq!(
            features
                .apply(FieldChange::set("columns", "4"))
                .expect("columns")
                .columns,
            Some(Columns::Four)
        );
    }

    #[test]
    fn unknown_field_is_reported() {
        let err = CtaData::default()
            .apply(FieldChange::set("colour", "red"))
            .expect_err("unknown");
        assert_eq!(err, EditError::unknown_field("cta", "colour"));
    }

    #[test]
    fn faq_items_are_added_and_edited_through_the_repeater() {
        let faq = FaqData::default();
        let faq = faq.apply(FieldChange::add_item("items")).expect("add");
        assert_eq!(faq.items, [FaqItem::empty()]);

        let faq = faq
            .apply(FieldChange::parse_set("items.0.question", "Is it free?").expect("path"))
            .expect("edit");
        assert_eq!(faq.items[0].question, "Is it free?");
        assert_eq!(faq.items[0].answer, "");

        assert!(matches!(
            faq.apply(FieldChange::remove_item("items", 4)),
            Err(EditError::ItemOutOfRange { index: 4, .. })
        ));
    }

    #[test]
    fn pricing_plan_features_are_nested_lists() {
        let pricing = PricingData::default()
            .apply(FieldChange::add_item("plans"))
            .expect("plan")
            .apply(FieldChange::parse_add("plans.0.features").expect("path"))
            .expect("feature")
            .apply(FieldChange::parse_set("plans.0.features.0", "Unlimited pages").expect("path"))
            .expect("set feature")
            .apply(FieldChange::parse_set("plans.0.highlighted", "true").expect("path"))
            .expect("highlight");

        let plan = &pricing.plans[0];
        assert_eq!(plan.features, ["Unlimited pages"]);
        assert!(plan.highlighted);
        assert_eq!(plan.button_text.as_deref(), Some("Get Started"));

        let form = pricing.form();
        let plan_form = &form.lists[0].items[0];
        assert_eq!(plan_form.title, "#1");
        assert_eq!(
            plan_form.lists[0].items[0].fields[0].name,
            "plans.0.features.0.value"
        );
        assert!(plan_form.field("plans.0.highlighted").expect("flag").is_checked());
    }

    #[test]
    fn video_flags_parse_and_serialize_under_wire_names() {
        let video = VideoData::default()
            .apply(FieldChange::set("loop", "yes"))
            .expect("loop");
        assert!(video.looping);
        let json = serde_json::to_value(&video).expect("json");
        assert_eq!(json["loop"], json!(true));
    }

    #[test]
    fn select_marks_current_choice() {
        let cta = CtaData {
            button_style: Some(ButtonStyle::Outline),
            ..CtaData::default()
        };
        let form = cta.form();
        let style = form.field("button_style").expect("style");
        let selected: Vec<&str> = style
            .options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(selected, ["outline"]);
    }
}
