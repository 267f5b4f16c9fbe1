//! Single-key JSON wrapper (`{"job_status": {...}}`, `{"tickets": [...]}`).

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A payload type that travels inside an envelope under a fixed key.
pub trait Enveloped {
    const KEY: &'static str;
}

impl<T: Enveloped + ?Sized> Enveloped for &T {
    const KEY: &'static str = T::KEY;
}

/// `{ T::KEY: T }`. Decoding fails if the key is missing; other keys are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T>(pub T);

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Enveloped + Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(T::KEY, &self.0)?;
        map.end()
    }
}

impl<'de, T: Enveloped + Deserialize<'de>> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EnvelopeVisitor<T>(PhantomData<T>);

        impl<'de, T: Enveloped + Deserialize<'de>> Visitor<'de> for EnvelopeVisitor<T> {
            type Value = Envelope<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an object with a `{}` key", T::KEY)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut payload: Option<T> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == T::KEY {
                        if payload.is_some() {
                            return Err(de::Error::duplicate_field(T::KEY));
                        }
                        payload = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                payload
                    .map(Envelope)
                    .ok_or_else(|| de::Error::missing_field(T::KEY))
            }
        }

        deserializer.deserialize_map(EnvelopeVisitor(PhantomData))
    }
}
