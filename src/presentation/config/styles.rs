use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"timer": "bold white"` or `"control": "black on gray"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, raw)| {
                parse_style(&raw)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style registered under `key`, or the unstyled default.
    pub fn style(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }

    /// Overlays `defaults` for every key the user did not set.
    pub fn merge_defaults(&mut self, defaults: &Styles) {
        for (key, style) in defaults.iter() {
            self.entry(key.clone()).or_insert(*style);
        }
    }
}

/// Parses `"<modifiers> <fg> on <bg>"`, where every part is optional.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let normalized = line.trim().to_ascii_lowercase();
    let (foreground, background) = match normalized.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match normalized.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (normalized.as_str(), None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        style = match parse_modifier(word) {
            Some(modifier) => style.add_modifier(modifier),
            None => style.fg(parse_color(word)?),
        };
    }
    if let Some(background) = background {
        style = style.bg(parse_color(background.trim())?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reversed" | "reverse" => Some(Modifier::REVERSED),
        "hidden" => Some(Modifier::HIDDEN),
        "crossed" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    Color::from_str(word).map_err(|_| format!("Unknown color `{word}`"))
}
