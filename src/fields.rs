//! Field record construction
//!
//! Hits are built in layers: default fields, then user-supplied static
//! fields, then fields scanned from the element's prefixed attributes, with
//! an optional hit filter mutating the merged record last. Later layers win
//! by key.

use serde_json::Value;

use crate::dom::LinkElement;
use crate::types::{FieldsObj, HitFilter};

/// Overlay `src` onto `dst`, replacing existing keys.
pub fn assign(dst: &mut FieldsObj, src: FieldsObj) {
    for (key, value) in src {
        dst.insert(key, value);
    }
}

/// Convert a kebab-case or snake_case attribute remainder to camelCase.
///
/// `event-label` becomes `eventLabel`, `non_interaction` becomes
/// `nonInteraction`.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for ch in input.chars() {
        if ch == '-' || ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Scan an element's attributes for names carrying `prefix` and turn them
/// into fields.
///
/// The prefix is stripped and the remainder camel-cased, so with prefix
/// `ga-` the attribute `ga-event-label="custom"` yields the field
/// `eventLabel: "custom"`. Literal `"true"` and `"false"` values become
/// booleans. The bare `{prefix}on` attribute is reserved for declarative
/// wiring and never becomes a field. Elements with no matching attributes
/// simply yield an empty record.
pub fn attribute_fields(element: &dyn LinkElement, prefix: &str) -> FieldsObj {
    let reserved = format!("{prefix}on");
    let mut fields = FieldsObj::new();

    for (name, value) in element.attributes() {
        if !name.starts_with(prefix) || name == reserved {
            continue;
        }
        let field = camel_case(&name[prefix.len()..]);
        if field.is_empty() {
            continue;
        }
        let value = match value.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(value),
        };
        fields.insert(field, value);
    }

    fields
}

/// Merge the default and user layers and apply the optional hit filter.
///
/// The filter sees the fully merged record and may mutate it in place;
/// whatever it leaves behind is the final record.
pub fn compose_fields(
    defaults: FieldsObj,
    user: FieldsObj,
    hit_filter: Option<&HitFilter>,
    element: &dyn LinkElement,
) -> FieldsObj {
    let mut fields = defaults;
    assign(&mut fields, user);
    if let Some(filter) = hit_filter {
        filter(&mut fields, element);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FakeElement {
        attrs: Vec<(String, String)>,
    }

    impl FakeElement {
        fn new(attrs: &[(&str, &str)]) -> Self {
            Self {
                attrs: attrs
                    .iter()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl LinkElement for FakeElement {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone())
        }

        fn attributes(&self) -> Vec<(String, String)> {
            self.attrs.clone()
        }
    }

    fn fields(pairs: &[(&str, Value)]) -> FieldsObj {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("event-label"), "eventLabel");
        assert_eq!(camel_case("non_interaction"), "nonInteraction");
        assert_eq!(camel_case("label"), "label");
        assert_eq!(camel_case("a-b-c"), "aBC");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_attribute_fields_strips_prefix_and_camel_cases() {
        let element = FakeElement::new(&[
            ("href", "/report.pdf"),
            ("ga-event-label", "custom"),
            ("ga-event-category", "Docs"),
        ]);

        let fields = attribute_fields(&element, "ga-");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["eventLabel"], json!("custom"));
        assert_eq!(fields["eventCategory"], json!("Docs"));
    }

    #[test]
    fn test_attribute_fields_coerces_booleans() {
        let element = FakeElement::new(&[
            ("ga-non-interaction", "true"),
            ("ga-use-beacon", "false"),
            ("ga-event-value", "10"),
        ]);

        let fields = attribute_fields(&element, "ga-");
        assert_eq!(fields["nonInteraction"], json!(true));
        assert_eq!(fields["useBeacon"], json!(false));
        assert_eq!(fields["eventValue"], json!("10"));
    }

    #[test]
    fn test_attribute_fields_skips_reserved_and_empty_names() {
        let element = FakeElement::new(&[("ga-on", "ready"), ("ga-", "oops")]);
        assert!(attribute_fields(&element, "ga-").is_empty());
    }

    #[test]
    fn test_attribute_fields_ignores_other_prefixes() {
        let element = FakeElement::new(&[("data-label", "x"), ("aria-label", "y")]);
        assert!(attribute_fields(&element, "ga-").is_empty());
    }

    #[test]
    fn test_assign_later_wins() {
        let mut dst = fields(&[("a", json!(1)), ("b", json!(2))]);
        assign(&mut dst, fields(&[("b", json!(3)), ("c", json!(4))]));

        assert_eq!(dst["a"], json!(1));
        assert_eq!(dst["b"], json!(3));
        assert_eq!(dst["c"], json!(4));
    }

    #[test]
    fn test_compose_fields_merges_user_over_defaults() {
        let element = FakeElement::new(&[]);
        let defaults = fields(&[("eventLabel", json!("report.pdf")), ("transport", json!("beacon"))]);
        let user = fields(&[("eventLabel", json!("custom"))]);

        let out = compose_fields(defaults, user, None, &element);
        assert_eq!(out["eventLabel"], json!("custom"));
        assert_eq!(out["transport"], json!("beacon"));
    }

    #[test]
    fn test_compose_fields_runs_hit_filter_last() {
        let element = FakeElement::new(&[]);
        let defaults = fields(&[("eventLabel", json!("report.pdf"))]);
        let user = fields(&[("eventLabel", json!("custom"))]);

        let filter: HitFilter = Box::new(|fields, _element| {
            let label = fields["eventLabel"].as_str().unwrap().to_uppercase();
            fields.insert("eventLabel".to_string(), json!(label));
        });

        let out = compose_fields(defaults, user, Some(&filter), &element);
        assert_eq!(out["eventLabel"], json!("CUSTOM"));
    }
}
