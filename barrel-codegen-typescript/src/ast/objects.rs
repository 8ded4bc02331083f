//! TypeScript/JavaScript object literal builder.

use barrelgen_codegen::CodeFragment;
use barrelgen_core::QuoteCharacter;

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
}

/// Builder for JavaScript/TypeScript object literals.
///
/// Keys are always quoted with the object's quote character.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
    quote: QuoteCharacter,
}

impl JsObject {
    pub fn new(quote: QuoteCharacter) -> Self {
        Self {
            properties: Vec::new(),
            quote,
        }
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        });
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Object(value),
        });
        self
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Convert properties to code fragments, one line (or block) per key.
    pub fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| {
                let key = self.quote.quote(&prop.key);
                match &prop.value {
                    PropertyValue::Raw(s) => CodeFragment::line(format!("{}: {},", key, s)),
                    PropertyValue::Object(obj) if obj.is_empty() => {
                        CodeFragment::line(format!("{}: {{}},", key))
                    }
                    PropertyValue::Object(obj) => CodeFragment::block(
                        format!("{}: {{", key),
                        obj.properties_to_fragments(),
                        Some("},".to_string()),
                    ),
                }
            })
            .collect()
    }
}
