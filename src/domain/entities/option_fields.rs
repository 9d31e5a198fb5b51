use serde::{Deserialize, Deserializer, Serialize};

/// Represents optional field semantics in PATCH-style requests.
///
/// - `Unchanged` → key absent from the body, field not touched
/// - `SetToNull` → key present with `null`
/// - `SetToValue` → key present with a value
///
/// Containers must mark these fields `#[serde(default)]` so that absent keys
/// fall back to `Unchanged`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

impl<T> OptionField<T> {
    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// If `SetToValue`, returns a reference to inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Overwrites a non-nullable target. `SetToNull` is left to validation
    /// and never reaches the target.
    pub fn apply(self, target: &mut T) {
        if let Self::SetToValue(v) = self {
            *target = v;
        }
    }

    /// Overwrites a nullable target, clearing it on `SetToNull`.
    pub fn apply_nullable(self, target: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *target = None,
            Self::SetToValue(v) => *target = Some(v),
        }
    }
}

impl OptionField<String> {
    pub fn flatten_str(&self) -> Option<&str> {
        self.value_ref().map(|s| s.as_str())
    }
}
