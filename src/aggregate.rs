use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::parser::FaqItem;

/// The output buckets. Anything else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Templates,
    Billing,
    General,
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "templates" => Ok(Category::Templates),
            "billing" => Ok(Category::Billing),
            "general" => Ok(Category::General),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Ua,
}

impl Lang {
    /// Ukrainian sources live somewhere under a `uk` directory.
    /// Plain substring match on the path text.
    pub fn from_path(path: &Path) -> Lang {
        if path.to_string_lossy().contains("/uk/") {
            Lang::Ua
        } else {
            Lang::En
        }
    }
}

pub type Localized = BTreeMap<Lang, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: Localized,
    pub answer: Localized,
}

impl FaqEntry {
    pub fn new(lang: Lang, item: FaqItem) -> Self {
        FaqEntry {
            question: BTreeMap::from([(lang, item.question)]),
            answer: BTreeMap::from([(lang, item.answer)]),
        }
    }
}

/// Category-keyed output. Field order is the key order in the JSON.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FaqDataset {
    pub templates: Vec<FaqEntry>,
    pub billing: Vec<FaqEntry>,
    pub general: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absorbed {
    Added { category: Category, entries: usize },
    UnknownCategory,
}

impl FaqDataset {
    pub fn bucket_mut(&mut self, category: Category) -> &mut Vec<FaqEntry> {
        match category {
            Category::Templates => &mut self.templates,
            Category::Billing => &mut self.billing,
            Category::General => &mut self.general,
        }
    }

    /// Append one document's items under its category, keyed by the
    /// language its path implies.
    pub fn absorb(&mut self, path: &Path, category: &str, items: Vec<FaqItem>) -> Absorbed {
        let Ok(category) = category.parse::<Category>() else {
            return Absorbed::UnknownCategory;
        };
        let lang = Lang::from_path(path);
        let entries = items.len();
        self.bucket_mut(category)
            .extend(items.into_iter().map(|item| FaqEntry::new(lang, item)));
        Absorbed::Added { category, entries }
    }

    pub fn len(&self) -> usize {
        self.templates.len() + self.billing.len() + self.general.len()
    }
}
