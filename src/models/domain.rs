use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How a question accepts its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleSelect,
    MultiSelect,
    MultiSelectWithImage,
}

impl QuestionKind {
    /// Whether more than one option may be selected
    pub fn is_multi(self) -> bool {
        matches!(self, Self::MultiSelect | Self::MultiSelectWithImage)
    }
}

/// One selectable option of a question
///
/// `points` drives the color-type classifier; the remaining optional
/// fields are display metadata the core carries but never interprets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub points: Option<BTreeMap<ColorType, i32>>,
    #[serde(default)]
    pub hex_color: Option<String>,
    #[serde(default)]
    pub image_hint: Option<String>,
    #[serde(default)]
    pub makeup_tips: Option<serde_json::Value>,
    #[serde(default)]
    pub filter_tag: Option<String>,
}

/// Survey question definition, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub order: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub text: String,
    pub description: String,
    pub required: bool,
    #[serde(default)]
    pub max_selections: Option<usize>,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Look up an option by its id
    pub fn option_by_id(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| opt.id == option_id)
    }

    /// Look up an option by its 1-based display index
    ///
    /// Transports that accept numeric replies resolve them through this.
    pub fn option_by_index(&self, index: usize) -> Option<&QuestionOption> {
        if index >= 1 {
            self.options.get(index - 1)
        } else {
            None
        }
    }
}

/// Recorded answers of one session: question id -> selected option ids
///
/// Recording produces a new value rather than mutating in place, so a
/// snapshot handed to the scorer can never change underneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<String, Vec<String>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with the given answer inserted or overwritten
    pub fn with(&self, question_id: impl Into<String>, selected: Vec<String>) -> Self {
        let mut answers = self.answers.clone();
        answers.insert(question_id.into(), selected);
        Self { answers }
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn selected(&self, question_id: &str) -> Option<&[String]> {
        self.answers.get(question_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Seasonal color type, the classifier's category space
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorType {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl ColorType {
    pub const ALL: [ColorType; 4] = [
        ColorType::Winter,
        ColorType::Spring,
        ColorType::Summer,
        ColorType::Autumn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorType::Winter => "winter",
            ColorType::Spring => "spring",
            ColorType::Summer => "summer",
            ColorType::Autumn => "autumn",
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated points per color type
///
/// Every color type is present from construction, so an all-zero vector
/// still ties across the full category space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector {
    totals: BTreeMap<ColorType, i32>,
}

impl ScoreVector {
    pub fn new() -> Self {
        let mut totals = BTreeMap::new();
        for color_type in ColorType::ALL {
            totals.insert(color_type, 0);
        }
        Self { totals }
    }

    pub fn add(&mut self, color_type: ColorType, points: i32) {
        *self.totals.entry(color_type).or_insert(0) += points;
    }

    pub fn get(&self, color_type: ColorType) -> i32 {
        self.totals.get(&color_type).copied().unwrap_or(0)
    }

    /// Highest accumulated score across all color types
    pub fn max_score(&self) -> i32 {
        self.totals.values().copied().max().unwrap_or(0)
    }

    /// Color types sharing the maximum score
    pub fn leaders(&self) -> Vec<ColorType> {
        let max = self.max_score();
        self.totals
            .iter()
            .filter(|(_, &score)| score == max)
            .map(|(&color_type, _)| color_type)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorType, i32)> + '_ {
        self.totals.iter().map(|(&color_type, &score)| (color_type, score))
    }
}

impl Default for ScoreVector {
    fn default() -> Self {
        Self::new()
    }
}

/// Product category, one per catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Highlighter,
    Lipstick,
    LipGloss,
    Foundation,
    Eyeshadow,
    Mascara,
    Blush,
    Eyeliner,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::Highlighter,
        ProductCategory::Lipstick,
        ProductCategory::LipGloss,
        ProductCategory::Foundation,
        ProductCategory::Eyeshadow,
        ProductCategory::Mascara,
        ProductCategory::Blush,
        ProductCategory::Eyeliner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Highlighter => "highlighter",
            ProductCategory::Lipstick => "lipstick",
            ProductCategory::LipGloss => "lip_gloss",
            ProductCategory::Foundation => "foundation",
            ProductCategory::Eyeshadow => "eyeshadow",
            ProductCategory::Mascara => "mascara",
            ProductCategory::Blush => "blush",
            ProductCategory::Eyeliner => "eyeliner",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry with its acceptable values per preference dimension
///
/// `hair_color` and `face_shape` may be absent in data files; an empty
/// set simply never matches that dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub brand: String,
    pub color: String,
    pub skin_tone: Vec<String>,
    pub eye_color: Vec<String>,
    #[serde(default)]
    pub hair_color: Vec<String>,
    #[serde(default)]
    pub face_shape: Vec<String>,
    pub occasion: Vec<String>,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Immutable catalog snapshot, items grouped by category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: BTreeMap<ProductCategory, Vec<CatalogItem>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append items to a category, keeping file order
    pub fn add_items(&mut self, category: ProductCategory, items: Vec<CatalogItem>) {
        self.items.entry(category).or_default().extend(items);
    }

    pub fn items(&self, category: ProductCategory) -> &[CatalogItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn categories(&self) -> impl Iterator<Item = ProductCategory> + '_ {
        self.items.keys().copied()
    }

    pub fn total_items(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.values().all(Vec::is_empty)
    }
}

/// One chosen value per preference dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceQuery {
    pub skin_tone: String,
    pub eye_color: String,
    pub hair_color: String,
    pub face_shape: String,
    pub occasion: String,
}

/// Per-user quiz state, owned by exactly one caller session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: uuid::Uuid,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub answers: AnswerSet,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            started_at: chrono::Utc::now(),
            answers: AnswerSet::new(),
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
