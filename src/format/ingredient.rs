use serde_json::{Map, Value};

use crate::format::units::{convert_oz_to_ml, is_oz_unit, oz_to_ml, parse_amount};

/// The shapes model replies use for a single ingredient entry. Replies mix
/// plain strings with several object layouts, sometimes within one array.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientValue {
    /// A plain string: `"2 oz Gin"`.
    Text(String),
    /// `{"name": "Gin", "amount": "2", "unit": "oz"}` (amount sometimes
    /// arrives under `measure`, and as a number rather than a string).
    NamedAmount {
        name: String,
        amount: String,
        unit: String,
    },
    /// `{"ingredient": "Gin", "quantity": "2 oz"}`.
    NamedQuantity { name: String, quantity: String },
    /// Any other object shape. Rendered as a cleaned key/value projection
    /// rather than dropped, so no ingredient silently disappears.
    Opaque(Map<String, Value>),
}

impl IngredientValue {
    /// Classify a raw JSON value into one of the known ingredient shapes.
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::String(s) => IngredientValue::Text(s.clone()),
            Value::Object(map) => {
                if let Some(name) = map.get("name").and_then(Value::as_str) {
                    if let Some(quantity) = map.get("quantity") {
                        if !map.contains_key("amount") && !map.contains_key("unit") {
                            return IngredientValue::NamedQuantity {
                                name: name.to_string(),
                                quantity: scalar_to_string(quantity),
                            };
                        }
                    }
                    let amount = map
                        .get("amount")
                        .or_else(|| map.get("measure"))
                        .map(scalar_to_string)
                        .unwrap_or_default();
                    let unit = map
                        .get("unit")
                        .map(scalar_to_string)
                        .unwrap_or_default();
                    IngredientValue::NamedAmount {
                        name: name.to_string(),
                        amount,
                        unit,
                    }
                } else if let Some(name) = map.get("ingredient").and_then(Value::as_str) {
                    let quantity = map
                        .get("quantity")
                        .or_else(|| map.get("amount"))
                        .map(scalar_to_string)
                        .unwrap_or_default();
                    IngredientValue::NamedQuantity {
                        name: name.to_string(),
                        quantity,
                    }
                } else {
                    IngredientValue::Opaque(map.clone())
                }
            }
            other => IngredientValue::Text(scalar_to_string(other)),
        }
    }

    /// Render one display string, converting ounce quantities to ml.
    pub fn format(&self) -> String {
        match self {
            IngredientValue::Text(text) => convert_oz_to_ml(text.trim()),
            IngredientValue::NamedAmount { name, amount, unit } => {
                let (amount, unit) = if is_oz_unit(unit) {
                    match parse_amount(amount) {
                        Some(oz) => (oz_to_ml(oz).to_string(), "ml".to_string()),
                        None => (amount.clone(), unit.clone()),
                    }
                } else {
                    (amount.clone(), unit.clone())
                };
                let line = format!("{} {} {}", amount, unit, name);
                convert_oz_to_ml(&collapse_whitespace(line.trim()))
            }
            IngredientValue::NamedQuantity { name, quantity } => {
                let line = format!("{} {}", quantity, name);
                convert_oz_to_ml(&collapse_whitespace(line.trim()))
            }
            IngredientValue::Opaque(map) => {
                let fields: Vec<String> = map
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, clean_opaque(value)))
                    .collect();
                fields.join(", ")
            }
        }
    }
}

/// Classify-and-format shorthand used by the extraction stages.
pub fn format_ingredient(value: &Value) -> String {
    IngredientValue::classify(value).format()
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Structural stringification for unrecognized shapes: braces, quotes and
/// brackets stripped from the rendered value.
fn clean_opaque(value: &Value) -> String {
    value
        .to_string()
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '[' | ']' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
