use serde_json::Value;

/// Read-only cursor over an untrusted JSON document.
///
/// Every accessor returns a sentinel (`None`, an empty slice, or an absent
/// node) instead of failing, so callers can chain lookups through missing or
/// mistyped fields and apply their own fallbacks at the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawNode<'a> {
    value: Option<&'a Value>,
}

impl<'a> RawNode<'a> {
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self { value: Some(value) }
    }

    /// Child node under `key`; absent unless `self` is an object holding it.
    #[must_use]
    pub fn get(self, key: &str) -> Self {
        Self {
            value: self.value.and_then(|value| value.get(key)),
        }
    }

    /// `true` when the node is missing or JSON `null`.
    #[must_use]
    pub fn is_nullish(self) -> bool {
        self.value.is_none_or(Value::is_null)
    }

    #[must_use]
    pub fn is_object(self) -> bool {
        self.value.is_some_and(Value::is_object)
    }

    /// Array elements, empty when the node is not an array.
    #[must_use]
    pub fn items(self) -> &'a [Value] {
        match self.value {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// `true` when the node is an array, even an empty one.
    #[must_use]
    pub fn is_array(self) -> bool {
        self.value.is_some_and(Value::is_array)
    }

    /// Scalar coerced to trimmed text; empty text counts as missing.
    ///
    /// Strings are trimmed, numbers and booleans use their JSON spelling.
    /// Objects, arrays and `null` have no text.
    #[must_use]
    pub fn text(self) -> Option<String> {
        let text = match self.value? {
            Value::String(text) => text.trim().to_owned(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => return None,
        };
        (!text.is_empty()).then_some(text)
    }

    /// Scalar coerced to a finite number.
    ///
    /// Numbers pass through; strings are parsed after trimming. Anything
    /// else, or a non-finite result, is `None`.
    #[must_use]
    pub fn number(self) -> Option<f64> {
        let number = match self.value? {
            Value::Number(number) => number.as_f64()?,
            Value::String(text) => text.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        number.is_finite().then_some(number)
    }

    /// Scalar coerced to a 1-based place.
    ///
    /// Zero, negative and fractional values are not places.
    #[must_use]
    pub fn place(self) -> Option<u32> {
        let number = self.number()?;
        if number >= 1.0 && number.fract() == 0.0 && number <= f64::from(u32::MAX) {
            Some(number as u32)
        } else {
            None
        }
    }
}

/// First present text among `nodes`, in order.
#[must_use]
pub fn first_text<'a, I>(nodes: I) -> Option<String>
where
    I: IntoIterator<Item = RawNode<'a>>,
{
    nodes.into_iter().find_map(RawNode::text)
}
