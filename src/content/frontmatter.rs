//! Front-matter parsing

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

use super::ContentError;

/// A single tag. Bare numbers (`2024`) are kept as their text.
struct TagName(String);

impl<'de> Deserialize<'de> for TagName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagVisitor;

        impl<'de> Visitor<'de> for TagVisitor {
            type Value = TagName;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a number")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(TagName(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(TagName(value.to_string()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(TagName(value.to_string()))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(TagName(value.to_string()))
            }
        }

        deserializer.deserialize_any(TagVisitor)
    }
}

/// Custom deserializer that handles both a single tag and a list of tags
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(TagName(item)) = seq.next_element()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// A metadata block that could not be decoded
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Front-matter fields a post may declare. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ParseError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if let Some((block, body)) = split_block(content, "---") {
            if block.trim().is_empty() {
                return Ok((FrontMatter::default(), body));
            }
            return Ok((serde_yaml::from_str(block)?, body));
        }

        if let Some((block, body)) = split_block(content, "+++") {
            return Ok((Self::from_toml(block)?, body));
        }

        if content.starts_with('{') {
            return Ok(Self::parse_json(content));
        }

        // No front-matter found
        Ok((FrontMatter::default(), content))
    }

    fn from_toml(block: &str) -> Result<Self, ParseError> {
        let mut table: toml::Table = toml::from_str(block)?;

        // TOML has a native datetime type; keep the schema string-based
        if let Some(toml::Value::Datetime(dt)) = table.get("date") {
            let text = dt.to_string();
            table.insert("date".to_string(), toml::Value::String(text));
        }

        Ok(toml::Value::Table(table).try_into()?)
    }

    /// A leading `{` that is not a JSON object is ordinary markdown.
    fn parse_json(content: &str) -> (Self, &str) {
        let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
        match stream.next() {
            Some(Ok(fm)) => {
                let remaining = content[stream.byte_offset()..].trim_start_matches(['\n', '\r']);
                (fm, remaining)
            }
            Some(Err(e)) => {
                tracing::debug!("leading brace is not JSON front-matter: {}", e);
                (FrontMatter::default(), content)
            }
            None => (FrontMatter::default(), content),
        }
    }

    /// Parse the date field. `Ok(None)` means the post is undated.
    pub fn parse_date(&self) -> Result<Option<DateTime<Local>>, ContentError> {
        match self.date.as_deref() {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_date_string(s)
                .map(Some)
                .ok_or_else(|| ContentError::InvalidDate {
                    value: s.to_string(),
                }),
        }
    }
}

/// Split `content` into the block fenced by `delimiter` lines and the rest.
/// An opening fence without a closing one means there is no block.
fn split_block<'a>(content: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let rest = content.strip_prefix(delimiter)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let (block, after) = match rest.strip_prefix(delimiter) {
        Some(after) => ("", after),
        None => {
            let end = rest.find(&format!("\n{}", delimiter))?;
            (&rest[..end], &rest[end + 1 + delimiter.len()..])
        }
    };

    Some((block, after.trim_start_matches(['\n', '\r'])))
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    // YAML timestamps may separate the zone offset with a space
    for fmt in ["%Y-%m-%d %H:%M:%S%.f %:z", "%Y-%m-%d %H:%M:%S %z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Local));
        }
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d",
        "%Y/%m/%d",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    None
}
