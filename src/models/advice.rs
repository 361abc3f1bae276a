use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Label-to-value indicators returned alongside the advice, in backend order.
pub type Metrics = serde_json::Map<String, Value>;

/// A successful answer from the advice backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: Metrics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub research_sources: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AdviceResponse {
    pub fn new(
        advice: impl Into<String>,
        metrics: Metrics,
        research_sources: Vec<String>,
    ) -> Self {
        Self {
            advice: Some(advice.into()),
            metrics,
            research_sources,
        }
    }

    /// Returns the advice text if there is any to show.
    pub fn advice_text(&self) -> Option<&str> {
        self.advice.as_deref().filter(|text| !text.is_empty())
    }

    pub fn sections(&self) -> Vec<AdviceSection> {
        self.advice_text().map(parse_sections).unwrap_or_default()
    }

    pub fn metric_cards(&self) -> Vec<MetricCard> {
        metric_cards(&self.metrics)
    }

    /// Links for the research-sources section, or `None` when the section is hidden.
    pub fn research_links(&self) -> Option<Vec<ResearchLink>> {
        if self.research_sources.is_empty() {
            return None;
        }

        Some(
            self.research_sources
                .iter()
                .map(|url| ResearchLink {
                    href: url.clone(),
                    text: url.clone(),
                })
                .collect(),
        )
    }
}

/// A cited source, opened in a new tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResearchLink {
    pub href: String,
    pub text: String,
}

/// One titled block of the advice body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdviceSection {
    pub title: String,
    pub items: Vec<String>,
}

/// Splits advice text into titled sections.
///
/// Blocks are separated by blank lines. The first line of a block is its
/// title, every following non-blank line is one item.
pub fn parse_sections(text: &str) -> Vec<AdviceSection> {
    let normalized = text.replace("\r\n", "\n");
    let mut sections = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in normalized.lines() {
        if line.trim().is_empty() {
            push_section(&mut sections, &block);
            block.clear();
        } else {
            block.push(line);
        }
    }
    push_section(&mut sections, &block);

    sections
}

fn push_section(sections: &mut Vec<AdviceSection>, block: &[&str]) {
    let Some((title, rest)) = block.split_first() else {
        return;
    };

    let items = rest
        .iter()
        .map(|line| line.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    sections.push(AdviceSection {
        title: title.trim().to_string(),
        items,
    });
}

/// A displayable metric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCard {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Builds one card per metric, skipping null values.
pub fn metric_cards(metrics: &Metrics) -> Vec<MetricCard> {
    metrics
        .iter()
        .filter_map(|(key, value)| {
            format_metric_value(value).map(|value| MetricCard {
                key: key.clone(),
                label: format_metric_label(key),
                value,
            })
        })
        .collect()
}

/// `water_use` -> `Water Use`
pub fn format_metric_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Numbers get one decimal place, strings are shown verbatim, null is hidden.
pub fn format_metric_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(n.as_f64().map_or_else(|| n.to_string(), format_one_decimal)),
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Formats to one decimal place, rounding exact ties away from zero.
///
/// `{:.1}` rounds the exact binary value correctly but breaks ties to even;
/// an exact tie at one decimal only happens when `4 * v` is an odd integer.
fn format_one_decimal(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let quarters = v.abs() * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 == 1.0 && quarters < 1e15;

    if !is_tie {
        return format!("{v:.1}");
    }

    // abs * 10 is exact here, so ceil lands on the upper neighbour.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let tenths = (v.abs() * 10.0).ceil() as u64;
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}
