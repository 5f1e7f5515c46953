//! Content Entry Model
//!
//! The about and home pages are backed by two key-value content tables with
//! identical shape. The set of known keys is enumerated here, with a typed
//! accessor and a documented default per key, so fallbacks live in one
//! place instead of being scattered across the presentation layer. Unknown
//! rows are still stored and served verbatim.

use serde::{Deserialize, Serialize};

/// One row of a content table (`about_content` / `home_content`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContentEntry {
    /// Semantic key, e.g. `philosophy_title`
    pub id: String,
    /// Section label used to group keys in the admin UI
    pub section: String,
    pub content: String,
}

/// Update content payload — body of `PUT /api/about/{id}` and
/// `PUT /api/home-content/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentUpdate {
    pub content: String,
}

/// Which content table a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTable {
    About,
    Home,
}

impl ContentTable {
    /// The backing table name
    pub const fn table(&self) -> &'static str {
        match self {
            Self::About => "about_content",
            Self::Home => "home_content",
        }
    }
}

/// Known keys of the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutKey {
    HeroTitle,
    HeroSubtitle,
    HeroTagline,
    AboutTitle,
    AboutDescription,
    AboutImage,
    FacebookName,
    FacebookUrl,
    FacebookIcon,
    LineId,
    LineUrl,
    LineIcon,
    Email,
    EmailIcon,
    Phone,
    PhoneIcon,
    Address,
    Hours,
}

impl AboutKey {
    pub const ALL: &'static [AboutKey] = &[
        Self::HeroTitle,
        Self::HeroSubtitle,
        Self::HeroTagline,
        Self::AboutTitle,
        Self::AboutDescription,
        Self::AboutImage,
        Self::FacebookName,
        Self::FacebookUrl,
        Self::FacebookIcon,
        Self::LineId,
        Self::LineUrl,
        Self::LineIcon,
        Self::Email,
        Self::EmailIcon,
        Self::Phone,
        Self::PhoneIcon,
        Self::Address,
        Self::Hours,
    ];

    /// The row id for this key
    pub const fn id(&self) -> &'static str {
        match self {
            Self::HeroTitle => "hero_title",
            Self::HeroSubtitle => "hero_subtitle",
            Self::HeroTagline => "hero_tagline",
            Self::AboutTitle => "about_title",
            Self::AboutDescription => "about_description",
            Self::AboutImage => "about_image",
            Self::FacebookName => "facebook_name",
            Self::FacebookUrl => "facebook_url",
            Self::FacebookIcon => "facebook_icon",
            Self::LineId => "line_id",
            Self::LineUrl => "line_url",
            Self::LineIcon => "line_icon",
            Self::Email => "email",
            Self::EmailIcon => "email_icon",
            Self::Phone => "phone",
            Self::PhoneIcon => "phone_icon",
            Self::Address => "address",
            Self::Hours => "hours",
        }
    }

    /// The section this key belongs to
    pub const fn section(&self) -> &'static str {
        match self {
            Self::HeroTitle | Self::HeroSubtitle | Self::HeroTagline => "hero",
            Self::AboutTitle | Self::AboutDescription | Self::AboutImage => "about",
            Self::FacebookName
            | Self::FacebookUrl
            | Self::FacebookIcon
            | Self::LineId
            | Self::LineUrl
            | Self::LineIcon
            | Self::Email
            | Self::EmailIcon
            | Self::Phone
            | Self::PhoneIcon => "contact",
            Self::Address | Self::Hours => "business",
        }
    }

    /// Default content served when the row is missing
    pub const fn default_content(&self) -> &'static str {
        match self {
            Self::HeroTitle => "Atelier",
            Self::HeroSubtitle => "Elevate Your Style",
            Self::HeroTagline => "Curated pieces for the discerning few",
            Self::AboutTitle => "About Us",
            Self::AboutDescription => {
                "Atelier is a curated fashion label. We believe in quiet luxury \
                 and lasting quality; every piece is selected with care."
            }
            Self::AboutImage => "",
            Self::FacebookName => "Atelier Official",
            Self::FacebookUrl => "",
            Self::FacebookIcon => "",
            Self::LineId => "@atelier",
            Self::LineUrl => "",
            Self::LineIcon => "",
            Self::Email => "contact@atelier.example",
            Self::EmailIcon => "",
            Self::Phone => "",
            Self::PhoneIcon => "",
            Self::Address => "Bangkok, Thailand",
            Self::Hours => "Mon - Fri 9:00 - 18:00",
        }
    }

    /// Resolve this key against fetched rows, falling back to the default
    pub fn resolve<'a>(&self, entries: &'a [ContentEntry]) -> &'a str {
        resolve(entries, self.id(), self.default_content())
    }
}

/// Known keys of the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeKey {
    PhilosophyLabel,
    PhilosophyTitle,
    PhilosophyTitleItalic,
    PhilosophyDescription,
    PhilosophyImage,
    PhilosophyLinkText,
    QuoteText,
    QuoteAuthor,
    QuoteImage,
    CraftLabel,
    CraftTitle,
    CraftTitleItalic,
    CraftDescription,
    CraftImage1,
    CraftImage2,
    CraftStat1Value,
    CraftStat1Label,
    CraftStat2Value,
    CraftStat2Label,
    CraftButtonText,
}

impl HomeKey {
    pub const ALL: &'static [HomeKey] = &[
        Self::PhilosophyLabel,
        Self::PhilosophyTitle,
        Self::PhilosophyTitleItalic,
        Self::PhilosophyDescription,
        Self::PhilosophyImage,
        Self::PhilosophyLinkText,
        Self::QuoteText,
        Self::QuoteAuthor,
        Self::QuoteImage,
        Self::CraftLabel,
        Self::CraftTitle,
        Self::CraftTitleItalic,
        Self::CraftDescription,
        Self::CraftImage1,
        Self::CraftImage2,
        Self::CraftStat1Value,
        Self::CraftStat1Label,
        Self::CraftStat2Value,
        Self::CraftStat2Label,
        Self::CraftButtonText,
    ];

    /// The row id for this key
    pub const fn id(&self) -> &'static str {
        match self {
            Self::PhilosophyLabel => "philosophy_label",
            Self::PhilosophyTitle => "philosophy_title",
            Self::PhilosophyTitleItalic => "philosophy_title_italic",
            Self::PhilosophyDescription => "philosophy_description",
            Self::PhilosophyImage => "philosophy_image",
            Self::PhilosophyLinkText => "philosophy_link_text",
            Self::QuoteText => "quote_text",
            Self::QuoteAuthor => "quote_author",
            Self::QuoteImage => "quote_image",
            Self::CraftLabel => "craft_label",
            Self::CraftTitle => "craft_title",
            Self::CraftTitleItalic => "craft_title_italic",
            Self::CraftDescription => "craft_description",
            Self::CraftImage1 => "craft_image_1",
            Self::CraftImage2 => "craft_image_2",
            Self::CraftStat1Value => "craft_stat_1_value",
            Self::CraftStat1Label => "craft_stat_1_label",
            Self::CraftStat2Value => "craft_stat_2_value",
            Self::CraftStat2Label => "craft_stat_2_label",
            Self::CraftButtonText => "craft_button_text",
        }
    }

    /// The section this key belongs to
    pub const fn section(&self) -> &'static str {
        match self {
            Self::PhilosophyLabel
            | Self::PhilosophyTitle
            | Self::PhilosophyTitleItalic
            | Self::PhilosophyDescription
            | Self::PhilosophyImage
            | Self::PhilosophyLinkText => "philosophy",
            Self::QuoteText | Self::QuoteAuthor | Self::QuoteImage => "quote",
            Self::CraftLabel
            | Self::CraftTitle
            | Self::CraftTitleItalic
            | Self::CraftDescription
            | Self::CraftImage1
            | Self::CraftImage2
            | Self::CraftStat1Value
            | Self::CraftStat1Label
            | Self::CraftStat2Value
            | Self::CraftStat2Label
            | Self::CraftButtonText => "craft",
        }
    }

    /// Default content served when the row is missing
    pub const fn default_content(&self) -> &'static str {
        match self {
            Self::PhilosophyLabel => "The Philosophy",
            Self::PhilosophyTitle => "Silence over",
            Self::PhilosophyTitleItalic => "noise.",
            Self::PhilosophyDescription => {
                "True luxury lies in what is removed, not what is added. We \
                 strip away the unnecessary to reveal the essential beauty of \
                 form and function."
            }
            Self::PhilosophyImage => "",
            Self::PhilosophyLinkText => "Our Story",
            Self::QuoteText => "Simplicity is the ultimate sophistication.",
            Self::QuoteAuthor => "Leonardo da Vinci",
            Self::QuoteImage => "",
            Self::CraftLabel => "The Craft",
            Self::CraftTitle => "Timeless",
            Self::CraftTitleItalic => "Elegance.",
            Self::CraftDescription => {
                "Every piece is a testament to meticulous curation. We partner \
                 with master artisans who have honed their skills over \
                 generations."
            }
            Self::CraftImage1 => "",
            Self::CraftImage2 => "",
            Self::CraftStat1Value => "100+",
            Self::CraftStat1Label => "Hours of Craft",
            Self::CraftStat2Value => "Ltd.",
            Self::CraftStat2Label => "Editions Only",
            Self::CraftButtonText => "View Collection",
        }
    }

    /// Resolve this key against fetched rows, falling back to the default
    pub fn resolve<'a>(&self, entries: &'a [ContentEntry]) -> &'a str {
        resolve(entries, self.id(), self.default_content())
    }
}

/// Look up a content id in fetched rows, falling back to `default`
pub fn resolve<'a>(entries: &'a [ContentEntry], id: &str, default: &'a str) -> &'a str {
    entries
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.content.as_str())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_about_key_has_id_and_section() {
        for key in AboutKey::ALL {
            assert!(!key.id().is_empty());
            assert!(!key.section().is_empty());
        }
    }

    #[test]
    fn test_every_home_key_has_id_and_section() {
        for key in HomeKey::ALL {
            assert!(!key.id().is_empty());
            assert!(!key.section().is_empty());
        }
    }

    #[test]
    fn test_key_ids_are_unique() {
        let mut ids: Vec<&str> = AboutKey::ALL.iter().map(|k| k.id()).collect();
        ids.extend(HomeKey::ALL.iter().map(|k| k.id()));
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        // about and home key sets are independent, but no duplicates within
        // or across them either
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_resolve_prefers_stored_row() {
        let entries = vec![ContentEntry {
            id: "quote_text".into(),
            section: "quote".into(),
            content: "Less, but better.".into(),
        }];
        assert_eq!(HomeKey::QuoteText.resolve(&entries), "Less, but better.");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let entries: Vec<ContentEntry> = vec![];
        assert_eq!(HomeKey::QuoteAuthor.resolve(&entries), "Leonardo da Vinci");
        assert_eq!(AboutKey::HeroTitle.resolve(&entries), "Atelier");
    }

    #[test]
    fn test_table_names() {
        assert_eq!(ContentTable::About.table(), "about_content");
        assert_eq!(ContentTable::Home.table(), "home_content");
    }
}
