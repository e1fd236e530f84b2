use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// Custom messages from the `errorMessage` keyword, keyed by the keyword they
/// replace the default message for (`format`, `pattern`, `minLength`, ...).
///
/// Only string-valued entries are kept. A non-map `errorMessage` (a single
/// catch-all string) and nested maps such as `required: { ... }` are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessages(BTreeMap<String, String>);

impl ErrorMessages {
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.0.get(keyword).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorMessages
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ErrorMessages(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'de> Deserialize<'de> for ErrorMessages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientVisitor(PhantomData))
    }
}

/// One `errorMessage` entry: `Some` for strings, `None` for any other value.
struct Message(Option<String>);

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientVisitor(PhantomData))
    }
}

/// A value built from whatever JSON shows up. Shapes it has no use for are
/// consumed and yield `empty()`.
trait Lenient: Sized {
    fn empty() -> Self;

    fn from_text(_text: &str) -> Self {
        Self::empty()
    }

    fn from_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<Self, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Self::empty())
    }
}

impl Lenient for Message {
    fn empty() -> Self {
        Message(None)
    }

    fn from_text(text: &str) -> Self {
        Message(Some(text.to_owned()))
    }
}

impl Lenient for ErrorMessages {
    fn empty() -> Self {
        ErrorMessages::default()
    }

    fn from_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<Self, A::Error> {
        let mut messages = BTreeMap::new();
        while let Some((keyword, message)) = map.next_entry::<String, Message>()? {
            if let Message(Some(message)) = message {
                messages.insert(keyword, message);
            }
        }
        Ok(ErrorMessages(messages))
    }
}

struct LenientVisitor<T>(PhantomData<T>);

impl<'de, T: Lenient> Visitor<'de> for LenientVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<T, E> {
        Ok(T::from_text(text))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
        T::from_map(map)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(T::empty())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<T, E> {
        Ok(T::empty())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<T, E> {
        Ok(T::empty())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<T, E> {
        Ok(T::empty())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<T, E> {
        Ok(T::empty())
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Ok(T::empty())
    }
}
