/// The fixed list of shader sources under `{proj_dir}/test` that every test
/// run compiles, in deterministic order.
pub const SHADERS: &[&str] = &[
    "chipvis.glsl",
    "fontstash.glsl",
    "imgui.glsl",
    "infinity.glsl",
    "inout_mismatch.glsl",
    "sgl.glsl",
    "shared_ub.glsl",
    "test1.glsl",
    "test1_pragma.glsl",
    "test_nim.glsl",
    "ub_equality_1.glsl",
    "ub_equality_2.glsl",
    "uniform_types.glsl",
    "unused_vertex_attr.glsl",
    // sokol-samples shaders
    "sapp/arraytex-sapp.glsl",
    "sapp/blend-sapp.glsl",
    "sapp/bufferoffsets-sapp.glsl",
    "sapp/cgltf-sapp.glsl",
    "sapp/cube-sapp.glsl",
    "sapp/cubemap-jpeg-sapp.glsl",
    "sapp/cubemaprt-sapp.glsl",
    "sapp/debugtext-context-sapp.glsl",
    "sapp/drawcallperf-sapp.glsl",
    "sapp/dyntex-sapp.glsl",
    "sapp/dyntex3d-sapp.glsl",
    "sapp/fontstash-layers-sapp.glsl",
    "sapp/imgui-usercallback-sapp.glsl",
    "sapp/instancing-pull-sapp.glsl",
    "sapp/instancing-sapp.glsl",
    "sapp/layerrender-sapp.glsl",
    "sapp/loadpng-sapp.glsl",
    "sapp/mipmap-sapp.glsl",
    "sapp/miprender-sapp.glsl",
    "sapp/mrt-pixelformats-sapp.glsl",
    "sapp/mrt-sapp.glsl",
    "sapp/noentry-dll-sapp.glsl",
    "sapp/noentry-sapp.glsl",
    "sapp/noninterleaved-sapp.glsl",
    "sapp/offscreen-msaa-sapp.glsl",
    "sapp/offscreen-sapp.glsl",
    "sapp/ozz-skin-sapp.glsl",
    "sapp/ozz-storagebuffer-sapp.glsl",
    "sapp/pixelformats-sapp.glsl",
    "sapp/plmpeg-sapp.glsl",
    "sapp/primtypes-sapp.glsl",
    "sapp/quad-sapp.glsl",
    "sapp/restart-sapp.glsl",
    "sapp/sbuftex-sapp.glsl",
    "sapp/sdf-sapp.glsl",
    "sapp/shadows-depthtex-sapp.glsl",
    "sapp/shadows-sapp.glsl",
    "sapp/shapes-sapp.glsl",
    "sapp/shapes-transform-sapp.glsl",
    "sapp/shdfeatures-sapp.glsl",
    "sapp/tex3d-sapp.glsl",
    "sapp/texcube-sapp.glsl",
    "sapp/triangle-bufferless-sapp.glsl",
    "sapp/triangle-sapp.glsl",
    "sapp/uniformtypes-sapp.glsl",
    "sapp/uvwrap-sapp.glsl",
    "sapp/vertexpull-sapp.glsl",
];
