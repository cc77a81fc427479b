use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Matches "2 oz", "1.5oz", "1/2 oz" with decimal or fractional amounts.
    static ref OZ_PATTERN: Regex =
        Regex::new(r"(?i)(\d+(?:\.\d+)?|\d+/\d+)\s*oz\b").expect("oz pattern should be valid");
}

/// Fixed oz to ml factor. 30 rather than 29.5735, a deliberate product choice
/// for round display numbers, preserved for compatibility.
const ML_PER_OZ: f64 = 30.0;

/// Replace every fluid-ounce quantity in `text` with its millilitre
/// equivalent: `"2 oz"` → `"60 ml"`, `"1/2 oz"` → `"15 ml"`.
pub fn convert_oz_to_ml(text: &str) -> String {
    OZ_PATTERN
        .replace_all(text, |caps: &Captures| {
            match parse_amount(&caps[1]) {
                Some(oz) => format!("{} ml", (oz * ML_PER_OZ).round() as i64),
                // Unparseable amount, leave the original expression alone
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Parse a decimal or fractional amount expression ("1.5", "3/4").
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if let Some((num, den)) = raw.split_once('/') {
        let num: f64 = num.trim().parse().ok()?;
        let den: f64 = den.trim().parse().ok()?;
        if den == 0.0 {
            return None;
        }
        Some(num / den)
    } else {
        raw.parse().ok()
    }
}

/// Convert an ounce amount to a whole-millilitre amount.
pub fn oz_to_ml(oz: f64) -> i64 {
    (oz * ML_PER_OZ).round() as i64
}

/// Whether a standalone unit field denotes fluid ounces.
pub fn is_oz_unit(unit: &str) -> bool {
    matches!(
        unit.trim().to_lowercase().as_str(),
        "oz" | "ounce" | "ounces"
    )
}
