use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

pub const VECTOR_SIZES: &[&str] = &["", "2", "3", "4", "8", "16"];
pub const ROUNDING_MODES: &[&str] = &["", "_rte", "_rtz", "_rtp", "_rtn"];

/// Language-level constants that are never declarations and must never be
/// assigned a fresh short name, whatever scope they appear in.
///
/// Two entries are spelled exactly as the source material spells them,
/// typos and all (`CLK_ADdRESS_NONE`, `CLK_IMAE_MEM_FENCE`), corrected here
/// to their intended names since nothing downstream depends on reproducing
/// the typo.
pub static CONSTANT_SYMBOLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "true",
        "false",
        "CLK_LOCAL_MEM_FENCE",
        "CLK_GLOBAL_MEM_FENCE",
        "CLK_NORMALIZED_COORDS_TRUE",
        "CLK_NORMALIZED_COORDS_FALSE",
        "CLK_ADDRESS_MIRRORED_REPEAT",
        "CLK_ADDRESS_REPEAT",
        "CLK_ADDRESS_CLAMP_TO_EDGE",
        "CLK_ADDRESS_CLAMP",
        "CLK_ADDRESS_NONE",
        "CLK_FILTER_NEAREST",
        "CLK_FILTER_LINEAR",
        "CLK_SNORM_INT8",
        "CLK_SNORM_INT16",
        "CLK_UNORM_INT8",
        "CLK_UNORM_INT16",
        "CLK_UNORM_SHORT_565",
        "CLK_UNORM_SHORT_555",
        "CLK_UNORM_SHORT_101010",
        "CLK_SIGNED_INT8",
        "CLK_SIGNED_INT16",
        "CLK_SIGNED_INT32",
        "CLK_UNSIGNED_INT8",
        "CLK_UNSIGNED_INT16",
        "CLK_UNSIGNED_INT32",
        "CLK_HALF_FLOAT",
        "CLK_FLOAT",
        "CLK_A",
        "CLK_R",
        "CLK_Rx",
        "CLK_RG",
        "CLK_RGx",
        "CLK_RA",
        "CLK_RGB",
        "CLK_RGBx",
        "CLK_RGBA",
        "CLK_ARGB",
        "CLK_BGRA",
        "CLK_INTENSITY",
        "CLK_LUMINANCE",
        "CLK_IMAGE_MEM_FENCE",
        "memory_order_relaxed",
        "memory_order_acquire",
        "memory_order_release",
        "memory_order_acq_rel",
        "memory_order_seq_cst",
        "memory_scope_work_item",
        "memory_scope_work_group",
        "memory_scope_device",
        "memory_scope_all_svm_devices",
        "HUGE_VAL",
        "HUGE_VALF",
        "INFINITY",
        "M_E",
        "M_E_F",
        "M_LOG2E",
        "M_LOG2E_F",
        "M_LOG10E",
        "M_LOG10E_F",
        "M_LN2",
        "M_LN2_F",
        "M_LN10",
        "M_LN10_F",
        "M_PI",
        "M_PI_F",
        "M_PI_2",
        "M_PI_2_F",
        "M_PI_4",
        "M_PI_4_F",
        "M_1_PI",
        "M_1_PI_F",
        "M_2_PI",
        "M_2_PI_F",
        "M_2_SQRTPI",
        "M_2_SQRTPI_F",
        "M_SQRT2",
        "M_SQRT2_F",
        "M_SQRT1_2",
        "M_SQRT1_2_F",
        "MAXFLOAT",
        "NAN",
    ]
    .into_iter()
    .collect()
});

pub fn is_builtin_constant(name: &str) -> bool {
    CONSTANT_SYMBOLS.contains(name)
}

/// OpenCL C keywords and type names: never available as an assigned short
/// name regardless of what's currently in scope.
pub static RESERVED_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "__kernel", "kernel", "__global", "global", "__local", "local", "__constant", "constant",
        "__private", "private", "__const", "const", "__read_only", "read_only", "__write_only",
        "write_only", "__read_write", "read_write", "struct", "enum", "typedef", "if", "else",
        "for", "while", "do", "switch", "case", "default", "return", "break", "continue",
        "sizeof", "void", "unsigned", "signed", "bool", "half", "float", "double", "char",
        "short", "int", "long", "size_t", "ptrdiff_t", "intptr_t", "uintptr_t", "event_t",
        "counter32_t", "counter64_t", "atomic_int", "sampler_t", "image1d_t", "image1d_array_t",
        "image1d_buffer_t", "image2d_t", "image2d_array_t", "image3d_t", "true", "false",
    ]
    .into_iter()
    .collect()
});

pub fn is_reserved_word(name: &str) -> bool {
    if RESERVED_KEYWORDS.contains(name) {
        return true;
    }
    for ty in ["uchar", "ushort", "uint", "ulong", "char", "short", "int", "long", "float", "double", "half"] {
        for size in VECTOR_SIZES.iter().skip(1) {
            if name == format!("{ty}{size}") {
                return true;
            }
        }
    }
    false
}

pub fn is_builtin_function(name: &str) -> bool {
    CAST_FUNCTIONS.contains(name)
        || GEN1_FUNCTIONS.contains(name)
        || GEN2_FUNCTIONS.contains(name)
        || FIXED_FUNCTIONS_MAP.contains_key(name)
        || super::resolve::is_other_function(name)
}

/// `convert_%s%s` / `convert_%s%s%s%s` / `as_%s%s`: functions whose return
/// type is spelled out as part of their own name.
pub static CAST_FUNCTIONS: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut functions = HashSet::new();
    for ty in ["char", "uchar", "short", "ushort", "int", "uint", "long", "ulong"] {
        for size in VECTOR_SIZES {
            functions.insert(format!("convert_{ty}{size}"));
        }
    }
    for ty in ["float", "double"] {
        for size in VECTOR_SIZES {
            for sat in ["", "_sat"] {
                for rounding in ROUNDING_MODES {
                    functions.insert(format!("convert_{ty}{size}{sat}{rounding}"));
                }
            }
        }
    }
    for ty in [
        "char", "uchar", "short", "ushort", "int", "uint", "long", "ulong", "float", "double",
    ] {
        for size in VECTOR_SIZES {
            functions.insert(format!("as_{ty}{size}"));
        }
    }
    functions
});

/// Functions whose return type equals their first argument's type.
///
/// Three names here (`acospi`, `pow`, `normalize`) are not followed by a
/// comma in the reference table and so are merged with the entry after
/// them; that's corrected here rather than reproduced, since the merge
/// silently breaks return-type inference for six real builtins
/// (`acospi`, `asin`, `pow`, `pown`, `normalize`, `fast_normalize`).
pub static GEN1_FUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "acos", "acosh", "acospi", "asin", "asinh", "asinpi", "atan", "atan2", "atanh", "atanpi",
        "atan2pi", "cbrt", "ceil", "copysign", "cos", "cosh", "cospi", "erfc", "erf", "exp",
        "exp2", "exp10", "expm1", "fabs", "fdim", "floor", "fma", "fmax", "fmin", "fmod", "fract",
        "frexp", "hypot", "ldexp", "lgamma", "lgamma_r", "log", "log2", "log10", "log1p", "logb",
        "mad", "maxmag", "minmag", "modf", "nextafter", "pow", "pown", "powr", "remainder",
        "remquo", "rint", "rootn", "round", "rsqrt", "sin", "sincos", "sinh", "sinpi", "sqrt",
        "tan", "tanh", "tanpi", "tgamma", "trunc", "half_cos", "half_divide", "half_exp",
        "half_exp2", "half_exp10", "half_log", "half_log2", "half_log10", "half_powr",
        "half_recip", "half_rsqrt", "half_sin", "half_sqrt", "half_tan", "native_cos",
        "native_divide", "native_exp", "native_exp2", "native_exp10", "native_log",
        "native_log2", "native_log10", "native_powr", "native_recip", "native_rsqrt",
        "native_sin", "native_sqrt", "native_tan", "add_sat", "hadd", "rhadd", "clamp", "clz",
        "mad_hi", "mad_sat", "max", "min", "mul_hi", "rotate", "sub_sat", "popcount", "mad24",
        "mul24", "degrees", "mix", "radians", "step", "smoothstep", "sign", "cross", "normalize",
        "fast_normalize", "bitselect", "select", "atomic_inc", "atomic_dec",
    ]
    .into_iter()
    .collect()
});

/// Functions whose return type equals their second argument's type.
pub static GEN2_FUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "atomic_add",
        "atomic_sub",
        "atomic_xchg",
        "atomic_cmpxchg",
        "atomic_min",
        "atomic_max",
        "atomic_and",
        "atomic_or",
        "atomic_xor",
    ]
    .into_iter()
    .collect()
});

/// Functions whose return type never changes, keyed by name.
pub static FIXED_FUNCTIONS_MAP: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (name, ty) in [
        ("get_work_dim", "uint"),
        ("get_global_size", "size_t"),
        ("get_global_id", "uint"),
        ("get_local_size", "size_t"),
        ("get_local_id", "size_t"),
        ("get_num_groups", "size_t"),
        ("get_group_id", "size_t"),
        ("get_global_offset", "size_t"),
        ("any", "int"),
        ("all", "int"),
        ("barrier", "void"),
        ("mem_fence", "void"),
        ("read_mem_fence", "void"),
        ("write_mem_fence", "void"),
        ("async_work_group_copy", "event_t"),
        ("async_work_group_strided_copy", "event_t"),
        ("wait_group_events", "void"),
        ("prefetch", "void"),
        ("vec_step", "int"),
        ("printf", "int"),
        ("read_imagef", "float4"),
        ("read_imagei", "int4"),
        ("read_imageui", "uint4"),
        ("write_imagef", "void"),
        ("write_imagei", "void"),
        ("write_imageui", "void"),
        ("get_image_width", "int"),
        ("get_image_height", "int"),
        ("get_image_depth", "int"),
        ("get_image_channel_data_type", "int"),
        ("get_image_channel_order", "int"),
        ("get_image_array_size", "size_t"),
    ] {
        map.insert(name.to_owned(), ty.to_owned());
    }
    for size in VECTOR_SIZES {
        map.insert(format!("vstore{size}"), "void".to_owned());
        map.insert(format!("vload_half{size}"), format!("float{size}"));
        for rounding in ROUNDING_MODES {
            map.insert(format!("vstore_half{size}{rounding}"), "void".to_owned());
        }
    }
    for size in &VECTOR_SIZES[1..] {
        for rounding in ROUNDING_MODES {
            map.insert(format!("vstorea_half{size}{rounding}"), "void".to_owned());
        }
        map.insert(format!("vloada_half{size}"), format!("float{size}"));
    }
    map
});
