use crate::domain::{decode_block, lenient};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct HtmlFragment {
    #[serde(deserialize_with = "lenient::text")]
    pub html: Option<String>,
}

/// `common.json`: the site chrome shared by every page. Only the header and footer
/// fragments are consumed; the rest of the document is ignored.
#[derive(Debug, Clone)]
pub struct CommonDocument(pub Value);

impl CommonDocument {
    pub fn header(&self) -> Option<HtmlFragment> {
        decode_block(&self.0, "header")
    }

    pub fn footer(&self) -> Option<HtmlFragment> {
        decode_block(&self.0, "footer")
    }
}
