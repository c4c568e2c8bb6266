//! Graphics-subsystem enumerations and keyword lookups.
//!
//! Shader parameter types match exactly (case-sensitive), like the shading
//! language's own type names. Filter and address-mode keywords come from
//! sampler blocks written by hand and are matched ignoring ASCII case.
//! Unknown keywords map to each enum's fallback instead of failing.

use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum ShaderParamType {
    #[default]
    Unknown,
    Bool,
    Float,
    Int,
    String,
    Vec2,
    Vec3,
    Vec4,
    Int2,
    Int3,
    Int4,
    Matrix4x4,
    Texture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum SampleFilter {
    Point,
    #[default]
    Linear,
    Anisotropic,
    MinMagPointMipLinear,
    MinPointMagLinearMipPoint,
    MinPointMagMipLinear,
    MinLinearMagMipPoint,
    MinLinearMagPointMipLinear,
    MinMagLinearMipPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum AddressMode {
    #[default]
    Clamp,
    Wrap,
    Mirror,
    Border,
    MirrorOnce,
}

/// Keyed by lowercase keyword.
static SAMPLE_FILTERS: LazyLock<HashMap<&'static str, SampleFilter>> = LazyLock::new(|| {
    HashMap::from([
        ("anisotropy", SampleFilter::Anisotropic),
        ("point", SampleFilter::Point),
        ("linear", SampleFilter::Linear),
        ("min_mag_mip_point", SampleFilter::Point),
        ("min_mag_mip_linear", SampleFilter::Linear),
        ("min_mag_point_mip_linear", SampleFilter::MinMagPointMipLinear),
        ("min_point_mag_linear_mip_point", SampleFilter::MinPointMagLinearMipPoint),
        ("min_point_mag_mip_linear", SampleFilter::MinPointMagMipLinear),
        ("min_linear_mag_mip_point", SampleFilter::MinLinearMagMipPoint),
        ("min_linear_mag_point_mip_linear", SampleFilter::MinLinearMagPointMipLinear),
        ("min_mag_linear_mip_point", SampleFilter::MinMagLinearMipPoint),
    ])
});

/// Keyed by lowercase keyword.
static ADDRESS_MODES: LazyLock<HashMap<&'static str, AddressMode>> = LazyLock::new(|| {
    HashMap::from([
        ("wrap", AddressMode::Wrap),
        ("repeat", AddressMode::Wrap),
        ("clamp", AddressMode::Clamp),
        ("none", AddressMode::Clamp),
        ("mirror", AddressMode::Mirror),
        ("border", AddressMode::Border),
        ("mirroronce", AddressMode::MirrorOnce),
    ])
});

/// Maps a shader type name to its parameter type.
///
/// Every `texture*` type (`texture2d`, `texture_rect`, ...) is a texture.
pub fn shader_param_type(type_name: &str) -> ShaderParamType {
    match type_name {
        "float" => ShaderParamType::Float,
        "float2" => ShaderParamType::Vec2,
        "float3" => ShaderParamType::Vec3,
        "float4" => ShaderParamType::Vec4,
        "int" => ShaderParamType::Int,
        "int2" => ShaderParamType::Int2,
        "int3" => ShaderParamType::Int3,
        "int4" => ShaderParamType::Int4,
        "float4x4" => ShaderParamType::Matrix4x4,
        "bool" => ShaderParamType::Bool,
        "string" => ShaderParamType::String,
        t if t.starts_with("texture") => ShaderParamType::Texture,
        _ => ShaderParamType::Unknown,
    }
}

pub fn sample_filter(keyword: &str) -> SampleFilter {
    SAMPLE_FILTERS
        .get(keyword.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or_default()
}

pub fn address_mode(keyword: &str) -> AddressMode {
    ADDRESS_MODES
        .get(keyword.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or_default()
}

impl ShaderParamType {
    /// Number of scalar components stored for a default value, if numeric.
    pub fn component_count(self) -> Option<usize> {
        match self {
            Self::Bool | Self::Float | Self::Int => Some(1),
            Self::Vec2 | Self::Int2 => Some(2),
            Self::Vec3 | Self::Int3 => Some(3),
            Self::Vec4 | Self::Int4 => Some(4),
            Self::Matrix4x4 => Some(16),
            Self::Unknown | Self::String | Self::Texture => None,
        }
    }

    /// Whether default values of this type are stored as 32-bit floats.
    pub fn is_float(self) -> bool {
        matches!(
            self,
            Self::Float | Self::Vec2 | Self::Vec3 | Self::Vec4 | Self::Matrix4x4
        )
    }
}
