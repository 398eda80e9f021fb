//! Per-render field context.
//!
//! A `RenderContext` starts as a copy of a template's fields and is then
//! overlaid with caller overrides. It is built fresh for every render.

use crate::registry::{Field, TemplateRecord};
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// Separator between `<li>` fragments, matching the base markup indentation.
const LIST_SEPARATOR: &str = "\n          ";

/// Value bound to a field name during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(Cow<'static, str>),
    List(Vec<Cow<'static, str>>),
}

impl Value {
    /// Text substituted for the field's token.
    pub fn expand(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::List(items) => Cow::Owned(
                items
                    .iter()
                    .map(|item| format!("<li>{item}</li>"))
                    .collect::<Vec<_>>()
                    .join(LIST_SEPARATOR),
            ),
        }
    }
}

impl From<Field> for Value {
    fn from(field: Field) -> Self {
        match field {
            Field::Text(text) => Self::Text(Cow::Borrowed(text)),
            Field::List(items) => Self::List(items.iter().copied().map(Cow::Borrowed).collect()),
        }
    }
}

/// Caller-supplied values that win over a template's defaults.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub tagline: Option<String>,
    /// Form target of the lead-capture section.
    pub leads_action: Option<String>,
}

impl Overrides {
    /// Present overrides as `(field, value)` pairs.
    fn pairs(self) -> impl Iterator<Item = (&'static str, String)> {
        [
            ("name", self.name),
            ("tagline", self.tagline),
            ("leads_action", self.leads_action),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

/// Template fields overlaid with overrides.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    fields: FxHashMap<Cow<'static, str>, Value>,
}

impl RenderContext {
    /// Context holding a template's default fields.
    pub fn from_template(template: &TemplateRecord) -> Self {
        let fields = template
            .fields
            .iter()
            .map(|(name, field)| (Cow::Borrowed(*name), Value::from(*field)))
            .collect();
        Self { fields }
    }

    /// Bind `name` to a scalar, replacing any existing value.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) {
        self.fields.insert(name.into(), Value::Text(value.into()));
    }

    /// Overlay overrides; an override wins on key collision.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        for (name, value) in overrides.pairs() {
            self.set(name, value);
        }
        self
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Expanded substitution text for every field.
    pub fn expanded(&self) -> FxHashMap<&str, Cow<'_, str>> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_ref(), value.expand()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_list_expansion_order() {
        let value = Value::List(vec!["One".into(), "Two".into(), "Three".into()]);
        assert_eq!(
            value.expand(),
            "<li>One</li>\n          <li>Two</li>\n          <li>Three</li>"
        );
    }

    #[test]
    fn test_empty_list_expands_to_nothing() {
        assert_eq!(Value::List(Vec::new()).expand(), "");
    }

    #[test]
    fn test_from_template() {
        let ctx = RenderContext::from_template(registry::get("estate").unwrap());
        assert_eq!(ctx.get("name"), Some(&Value::Text("Vestry Estates".into())));
        assert!(matches!(ctx.get("services"), Some(Value::List(items)) if items.len() == 5));
        assert!(ctx.get("missing").is_none());
    }

    #[test]
    fn test_overrides_win() {
        let ctx = RenderContext::from_template(registry::get("estate").unwrap()).with_overrides(
            Overrides {
                name: Some("Hearth & Acre".into()),
                tagline: None,
                leads_action: Some("http://127.0.0.1:8080/submit".into()),
            },
        );

        assert_eq!(ctx.get("name"), Some(&Value::Text("Hearth & Acre".into())));
        assert_eq!(
            ctx.get("tagline"),
            Some(&Value::Text("Where legacy meets landscape.".into()))
        );
        assert_eq!(
            ctx.get("leads_action"),
            Some(&Value::Text("http://127.0.0.1:8080/submit".into()))
        );
    }

    #[test]
    fn test_override_does_not_touch_registry() {
        let template = registry::get("art").unwrap();
        let _ = RenderContext::from_template(template).with_overrides(Overrides {
            name: Some("Other".into()),
            ..Default::default()
        });
        assert_eq!(template.text("name"), "Atelier Advisory");
    }
}
