use std::sync::OnceLock;

use regex::Regex;

use crate::error::PatchError;
use crate::schema::{FieldType, Schema};

use super::PatchOptions;

pub const ICON_COLOR_METHOD: &str = "createForumTopic";
pub const ICON_COLOR_PARAMETER: &str = "icon_color";

/// Matches `7322096 (0x6FB9F0)` in the parameter description.
const COLOR_PATTERN: &str = r"(\d+) \((0x[0-9A-Fa-f]{6})\)";

fn color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COLOR_PATTERN).expect("valid regex"))
}

/// Narrow `createForumTopic.icon_color` to the colors listed in its description.
///
/// The allowed colors exist only as prose upstream. If the wording changes and
/// nothing matches, generation stops rather than falling back to `number`.
pub fn apply(schema: &mut Schema, _options: &PatchOptions) -> Result<(), PatchError> {
    let method = schema
        .method_mut(ICON_COLOR_METHOD)
        .ok_or_else(|| PatchError::MissingMethod(ICON_COLOR_METHOD.to_string()))?;
    let parameter =
        method
            .parameter_mut(ICON_COLOR_PARAMETER)
            .ok_or_else(|| PatchError::MissingParameter {
                method: ICON_COLOR_METHOD.to_string(),
                parameter: ICON_COLOR_PARAMETER.to_string(),
            })?;

    let colors = scrape_colors(&parameter.description);
    if colors.is_empty() {
        return Err(PatchError::PatternNotFound {
            location: format!("{ICON_COLOR_METHOD}.{ICON_COLOR_PARAMETER}"),
            pattern: COLOR_PATTERN,
        });
    }

    log::debug!("{ICON_COLOR_METHOD}.{ICON_COLOR_PARAMETER}: {} colors", colors.len());
    parameter.kind = FieldType::Integer {
        enumeration: colors,
        default: None,
        min: None,
        max: None,
    };
    Ok(())
}

/// Decimal color values in the order they appear, skipping any whose hex form disagrees.
fn scrape_colors(description: &str) -> Vec<i64> {
    color_regex()
        .captures_iter(description)
        .filter_map(|caps| {
            let decimal: i64 = caps[1].parse().ok()?;
            let hex = i64::from_str_radix(&caps[2][2..], 16).ok()?;
            (decimal == hex).then_some(decimal)
        })
        .collect()
}
