use super::color::RgbToVec4;
use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use colors_transform::Rgb;
use glam::Vec2;
use glam::Vec4;
use std::collections::HashMap;
use tinyjson::InnerAsRef;
use tinyjson::JsonValue;

pub fn read_array_raw<'a>(data: &'a HashMap<String, JsonValue>, name: &str) -> Result<&'a Vec<JsonValue>> {
    match data.get(name) {
        Some(JsonValue::Array(array)) => Ok(array),
        _ => bail!("Failed to read array {}", name),
    }
}

pub fn read_value<T>(data: &HashMap<String, JsonValue>, name: &str) -> Result<T>
where
    T: Clone + Default + InnerAsRef,
{
    let value = data.get(name).ok_or_else(|| anyhow!("Failed to read {}", name))?;
    if value.is_null() {
        return Ok(Default::default());
    }

    Ok(value.get::<T>().ok_or_else(|| anyhow!("Failed to parse {}", name))?.clone())
}

/// Same as [read_value], but a missing key yields `default` instead of an error.
pub fn read_value_or<T>(data: &HashMap<String, JsonValue>, name: &str, default: T) -> Result<T>
where
    T: Clone + Default + InnerAsRef,
{
    if !data.contains_key(name) {
        return Ok(default);
    }

    read_value(data, name)
}

pub fn read_color(data: &HashMap<String, JsonValue>, name: &str) -> Result<Vec4> {
    let value = data.get(name).ok_or_else(|| anyhow!("Failed to read {}", name))?;
    if value.is_null() {
        return Ok(Vec4::new(0.0, 0.0, 0.0, 1.0));
    }
    let parsed = value.get::<String>().ok_or_else(|| anyhow!("Failed to parse {}", name))?.clone();

    Ok(Rgb::from_hex_str(&parsed).map_err(|_| anyhow!("Failed to parse {} into RGB", name))?.to_vec4())
}

pub fn parse_position(value: &JsonValue) -> Result<Vec2> {
    let position = match value {
        JsonValue::Array(array) => array,
        _ => bail!("Failed to read position"),
    };

    let x = match position.first() {
        Some(JsonValue::Number(value)) => *value as f32,
        _ => bail!("Failed to parse position"),
    };
    let y = match position.get(1) {
        Some(JsonValue::Number(value)) => *value as f32,
        _ => bail!("Failed to parse position"),
    };

    Ok(Vec2::new(x, y))
}

pub fn read_position(data: &HashMap<String, JsonValue>, name: &str) -> Result<Vec2> {
    parse_position(data.get(name).ok_or_else(|| anyhow!("Failed to read position {}", name))?)
}

pub fn read_positions(data: &HashMap<String, JsonValue>, name: &str) -> Result<Vec<Vec2>> {
    read_array_raw(data, name)?.iter().map(parse_position).collect()
}
