//! Conversion of `sampler_state` blocks into graphics sampler settings.
//!
//! State names match ignoring ASCII case. Unknown states are ignored by
//! [`convert`] and returned by [`convert_checked`].

use serde::Serialize;

use fxscan_core::graphics::{address_mode, sample_filter};
use fxscan_core::numeric::parse_int;
use fxscan_core::{AddressMode, SampleFilter};

use crate::model::SamplerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamplerInfo {
    pub filter: SampleFilter,
    pub address_u: AddressMode,
    pub address_v: AddressMode,
    pub address_w: AddressMode,
    pub max_anisotropy: u32,
    /// Packed `0xAARRGGBB`.
    pub border_color: u32,
}

impl Default for SamplerInfo {
    fn default() -> Self {
        Self {
            filter: SampleFilter::default(),
            address_u: AddressMode::default(),
            address_v: AddressMode::default(),
            address_w: AddressMode::default(),
            max_anisotropy: 1,
            border_color: 0,
        }
    }
}

pub fn convert(sampler: &SamplerState) -> SamplerInfo {
    convert_checked(sampler).0
}

/// Like [`convert`], also returning the names of states it did not recognise
/// or could not read.
pub fn convert_checked(sampler: &SamplerState) -> (SamplerInfo, Vec<String>) {
    let mut info = SamplerInfo::default();
    let mut unknown = Vec::new();

    for item in &sampler.states {
        let value = item.value.as_str();
        match item.state.to_ascii_lowercase().as_str() {
            "filter" => info.filter = sample_filter(value),
            "addressu" => info.address_u = address_mode(value),
            "addressv" => info.address_v = address_mode(value),
            "addressw" => info.address_w = address_mode(value),
            "maxanisotropy" => match parse_int(value).and_then(|n| u32::try_from(n).ok()) {
                Some(n) => info.max_anisotropy = n.max(1),
                None => unknown.push(item.state.clone()),
            },
            "bordercolor" => match parse_color(value) {
                Some(color) => info.border_color = color,
                None => unknown.push(item.state.clone()),
            },
            _ => unknown.push(item.state.clone()),
        }
    }

    log::trace!(
        "sampler `{}` converted, {} unrecognised states",
        sampler.name,
        unknown.len()
    );
    (info, unknown)
}

/// `#RRGGBB`, `#RRGGBBAA`, or an integer literal taken as `0xAARRGGBB`.
fn parse_color(value: &str) -> Option<u32> {
    let Some(hex) = value.strip_prefix('#') else {
        return parse_int(value).and_then(|n| u32::try_from(n).ok());
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let rgb_a = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(0xFF00_0000 | rgb_a),
        8 => Some(rgb_a.rotate_right(8)),
        _ => None,
    }
}
