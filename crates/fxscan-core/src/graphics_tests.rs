use crate::graphics::{
    AddressMode, SampleFilter, ShaderParamType, address_mode, sample_filter, shader_param_type,
};

#[test]
fn param_types_match_exactly() {
    assert_eq!(shader_param_type("float"), ShaderParamType::Float);
    assert_eq!(shader_param_type("float3"), ShaderParamType::Vec3);
    assert_eq!(shader_param_type("float4x4"), ShaderParamType::Matrix4x4);
    assert_eq!(shader_param_type("int4"), ShaderParamType::Int4);
    assert_eq!(shader_param_type("bool"), ShaderParamType::Bool);
    assert_eq!(shader_param_type("Float"), ShaderParamType::Unknown);
    assert_eq!(shader_param_type("half"), ShaderParamType::Unknown);
}

#[test]
fn any_texture_type_is_a_texture() {
    assert_eq!(shader_param_type("texture2d"), ShaderParamType::Texture);
    assert_eq!(shader_param_type("texture_rect"), ShaderParamType::Texture);
    assert_eq!(shader_param_type("texture"), ShaderParamType::Texture);
}

#[test]
fn filters_ignore_case() {
    assert_eq!(sample_filter("Point"), SampleFilter::Point);
    assert_eq!(sample_filter("LINEAR"), SampleFilter::Linear);
    assert_eq!(sample_filter("anisotropy"), SampleFilter::Anisotropic);
    assert_eq!(sample_filter("MIN_MAG_MIP_POINT"), SampleFilter::Point);
    assert_eq!(
        sample_filter("MIN_LINEAR_MAG_POINT_MIP_LINEAR"),
        SampleFilter::MinLinearMagPointMipLinear
    );
}

#[test]
fn unknown_filter_falls_back_to_linear() {
    assert_eq!(sample_filter("Bicubic"), SampleFilter::Linear);
}

#[test]
fn address_modes() {
    assert_eq!(address_mode("Wrap"), AddressMode::Wrap);
    assert_eq!(address_mode("repeat"), AddressMode::Wrap);
    assert_eq!(address_mode("None"), AddressMode::Clamp);
    assert_eq!(address_mode("MirrorOnce"), AddressMode::MirrorOnce);
    assert_eq!(address_mode("border"), AddressMode::Border);
    assert_eq!(address_mode("sideways"), AddressMode::Clamp);
}

#[test]
fn component_counts() {
    assert_eq!(ShaderParamType::Matrix4x4.component_count(), Some(16));
    assert_eq!(ShaderParamType::Int2.component_count(), Some(2));
    assert_eq!(ShaderParamType::Texture.component_count(), None);
    assert!(ShaderParamType::Vec4.is_float());
    assert!(!ShaderParamType::Int.is_float());
}
