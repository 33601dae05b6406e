use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The fixed set of resume layouts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TemplateKind {
    #[default]
    Classic,
    Modern,
    Creative,
    Minimalist,
}

impl TemplateKind {
    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::Classic => "Classic",
            TemplateKind::Modern => "Modern",
            TemplateKind::Creative => "Creative",
            TemplateKind::Minimalist => "Minimalist",
        }
    }
}
