use std::{borrow::Cow, ops::Deref};

/// An API key taken from a request.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey {
    pub value: Cow<'static, str>,
}

impl core::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("value", &"...").finish()
    }
}

impl ApiKey {
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> Cow<'static, str> {
        self.value
    }
}

impl Deref for ApiKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<T> From<T> for ApiKey
where
    T: Into<Cow<'static, str>>,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
