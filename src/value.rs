//! Conversions from the metadata types into [`gtmpl_value::Value`] so
//! themes can hand resolved records straight to their page templates.

use crate::meta::{Author, Category, EntryMeta};
use gtmpl_value::Value;
use std::collections::HashMap;
use url::Url;

fn url_to_value(url: &Url) -> Value {
    Value::String(url.to_string())
}

impl From<&Category> for Value {
    fn from(category: &Category) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("name".to_owned(), (&category.name).into());
        m.insert("url".to_owned(), url_to_value(&category.url));
        Value::Object(m)
    }
}

impl From<&Author> for Value {
    fn from(author: &Author) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("name".to_owned(), (&author.name).into());
        m.insert("url".to_owned(), url_to_value(&author.url));
        Value::Object(m)
    }
}

impl From<&EntryMeta> for Value {
    /// Converts an [`EntryMeta`] into a [`Value::Object`] with fields
    /// `title`, `permalink`, `published`, `modified` (RFC 3339 strings),
    /// `author`, `categories`, `comments`, and `thumbnail` (`Nil` when
    /// absent).
    fn from(meta: &EntryMeta) -> Value {
        let option_to_value = |opt: &Option<Url>| match opt {
            Some(url) => url_to_value(url),
            None => Value::Nil,
        };

        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), (&meta.title).into());
        m.insert("permalink".to_owned(), url_to_value(&meta.permalink));
        m.insert(
            "published".to_owned(),
            Value::String(meta.published.to_rfc3339()),
        );
        m.insert(
            "modified".to_owned(),
            Value::String(meta.modified().to_rfc3339()),
        );
        m.insert("author".to_owned(), (&meta.author).into());
        m.insert(
            "categories".to_owned(),
            Value::Array(meta.categories.iter().map(Value::from).collect()),
        );
        m.insert("comments".to_owned(), meta.comment_count.into());
        m.insert("thumbnail".to_owned(), option_to_value(&meta.thumbnail));
        Value::Object(m)
    }
}
