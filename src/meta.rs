//! The resolved metadata record that the fragment renderers consume. The
//! original helpers reached into the host CMS's global accessors from inside
//! each function; here the host data is resolved up front by an adapter at
//! the boundary into one [`EntryMeta`] value, which keeps every renderer a
//! pure function of its inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::hash::{Hash, Hasher};
use url::Url;

/// A category an entry is filed under.
#[derive(Clone, Debug)]
pub struct Category {
    /// The category's name, slugified so e.g. `macOS` and `MacOS` resolve to
    /// the same value.
    pub name: String,

    /// The URL for the category's first index page.
    pub url: Url,
}

impl Category {
    /// Constructs a [`Category`] by slugifying `name` and joining the slug
    /// onto the category index base URL.
    pub fn new(name: &str, index_base_url: &Url) -> Result<Category, url::ParseError> {
        let name = slug::slugify(name);
        let url = index_base_url.join(&format!("{}/index.html", name))?;
        Ok(Category { name, url })
    }
}

impl<'de> Deserialize<'de> for Category {
    /// Deserializes the `{name, url}` map form, slugifying `name` on the
    /// way in so adapters can pass display names straight through and the
    /// name-based `Hash`/`PartialEq` impls stay consistent.
    fn deserialize<D>(deserializer: D) -> Result<Category, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            name: String,
            url: Url,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Category {
            name: slug::slugify(&raw.name),
            url: raw.url,
        })
    }
}

impl Hash for Category {
    /// Implements [`Hash`] for [`Category`] by delegating directly to the
    /// `name` field.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl PartialEq for Category {
    /// Implements [`PartialEq`] and [`Eq`] for [`Category`] by delegating
    /// directly to the `name` field.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Category {}

/// The entry's author: display name plus the URL of the author's archive
/// page.
#[derive(Clone, Debug, Deserialize)]
pub struct Author {
    pub name: String,
    pub url: Url,
}

/// Whether an entry is a dated post or a standalone page. Pages skip the
/// category links in the entry footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Post,
    Page,
}

impl Default for EntryKind {
    fn default() -> Self {
        EntryKind::Post
    }
}

/// Everything the fragment renderers need to know about one entry, resolved
/// by the caller. Fields with natural absent states are defaulted so
/// adapters only populate what the host actually supplies.
#[derive(Clone, Debug, Deserialize)]
pub struct EntryMeta {
    pub title: String,

    /// The entry's permanent URL.
    pub permalink: Url,

    pub published: DateTime<Utc>,

    /// The last-modified time; when absent the entry is treated as never
    /// modified after publication.
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,

    pub author: Author,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub comment_count: u64,

    #[serde(default = "default_true")]
    pub comments_open: bool,

    /// Password-protected entries render no comment information at all.
    #[serde(default)]
    pub password_required: bool,

    #[serde(default)]
    pub thumbnail: Option<Url>,

    /// Present only for callers with edit rights; gates the edit link.
    #[serde(default)]
    pub edit_url: Option<Url>,

    #[serde(default)]
    pub kind: EntryKind,

    /// The entry's markdown source, used for the estimated reading time.
    #[serde(default)]
    pub body: String,
}

impl EntryMeta {
    /// The effective last-modified time: the `modified` field when set,
    /// otherwise the publication time.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified.unwrap_or(self.published)
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    #[test]
    fn test_category_slugifies_name() -> Result<(), url::ParseError> {
        let base = Url::parse("https://example.org/categories/")?;
        let category = Category::new("Brass Instruments", &base)?;
        assert_eq!("brass-instruments", category.name);
        assert_eq!(
            "https://example.org/categories/brass-instruments/index.html",
            category.url.as_str(),
        );
        Ok(())
    }

    #[test]
    fn test_categories_compare_by_name() -> Result<(), url::ParseError> {
        let a = Category::new("macOS", &Url::parse("https://a.example/")?)?;
        let b = Category::new("MacOS", &Url::parse("https://b.example/")?)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_category_deserialize_slugifies_name() {
        let category: Category = serde_yaml::from_str(
            "name: Brass Instruments\n\
             url: https://example.org/categories/brass-instruments/index.html\n",
        )
        .unwrap();
        assert_eq!("brass-instruments", category.name);
        assert_eq!(
            "https://example.org/categories/brass-instruments/index.html",
            category.url.as_str(),
        );
    }

    #[test]
    fn test_deserialize_categories_resolve_to_same_slug() {
        let yaml = |name: &str| {
            format!(
                "name: {}\nurl: https://example.org/categories/macos/index.html\n",
                name,
            )
        };
        let a: Category = serde_yaml::from_str(&yaml("macOS")).unwrap();
        let b: Category = serde_yaml::from_str(&yaml("MacOS")).unwrap();
        assert_eq!("macos", a.name);
        assert_eq!(a, b);
    }

    #[test]
    fn test_modified_defaults_to_published() {
        let meta = fixture();
        assert_eq!(meta.published, meta.modified());
    }

    #[test]
    fn test_deserialize_defaults() {
        let meta: EntryMeta = serde_yaml::from_str(
            "title: Hello\n\
             permalink: https://example.org/posts/hello.html\n\
             published: 2021-03-14T00:00:00Z\n\
             author:\n  name: Craig\n  url: https://example.org/author/craig/\n",
        )
        .unwrap();
        assert_eq!(0, meta.comment_count);
        assert!(meta.comments_open);
        assert!(!meta.password_required);
        assert!(meta.thumbnail.is_none());
        assert!(meta.edit_url.is_none());
        assert_eq!(EntryKind::Post, meta.kind);
    }

    pub(crate) fn fixture() -> EntryMeta {
        use chrono::TimeZone;
        EntryMeta {
            title: "Hello, world!".to_owned(),
            permalink: Url::parse("https://example.org/posts/hello.html").unwrap(),
            published: Utc.timestamp_opt(1615680000, 0).unwrap(),
            modified: None,
            author: Author {
                name: "Craig".to_owned(),
                url: Url::parse("https://example.org/author/craig/").unwrap(),
            },
            categories: Vec::new(),
            comment_count: 0,
            comments_open: true,
            password_required: false,
            thumbnail: None,
            edit_url: None,
            kind: EntryKind::Post,
            body: String::new(),
        }
    }
}
