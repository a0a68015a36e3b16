use crate::domain::{decode_block, lenient};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `content.json`: `{ "pages": { <page key>: <page subtree> } }`.
#[derive(Debug, Clone)]
pub struct ContentDocument(pub Value);

impl ContentDocument {
    pub fn page(&self, key: &str) -> Option<PageData<'_>> {
        self.0
            .get("pages")
            .and_then(|pages| pages.get(key))
            .filter(|page| page.is_object())
            .map(PageData)
    }
}

/// One page subtree; every named block is decoded on demand and independently.
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a>(pub &'a Value);

impl PageData<'_> {
    pub fn block<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        decode_block(self.0, name)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct PageHeader {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Hero {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    // rich text
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub buttons: Option<Vec<HeroButton>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct HeroButton {
    #[serde(deserialize_with = "lenient::text")]
    pub href: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub class: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
}

// feature cards and hobbies share this shape
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct IconCard {
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct CardList {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub items: Option<Vec<IconCard>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient::text")]
    pub avatar: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    // rich text
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub categories: Option<Vec<SkillCategory>>,
    // rich text
    #[serde(deserialize_with = "lenient::text")]
    pub note: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::vec")]
    pub items: Vec<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub items: Option<Vec<TimelineEntry>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct TimelineEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Social {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub accounts: Option<Vec<SocialAccount>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SocialAccount {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub handle: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::opt")]
    pub email: Option<EmailContact>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub links: Option<Vec<ContactLink>>,
    // rich text
    #[serde(deserialize_with = "lenient::text")]
    pub privacy: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct EmailContact {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub note: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ContactLink {
    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub text: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct TitledBlock {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct SearchBox {
    #[serde(deserialize_with = "lenient::text")]
    pub placeholder: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Categories {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub items: Option<Vec<Category>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ArticleList {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_vec")]
    pub items: Option<Vec<ArticleSummary>>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ArticleSummary {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    // join key for the category filter
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(rename = "categoryName", deserialize_with = "lenient::text")]
    pub category_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub external: bool,
    #[serde(deserialize_with = "lenient::vec")]
    pub tags: Vec<String>,
}
