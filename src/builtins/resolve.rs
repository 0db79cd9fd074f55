use super::catalog::{CAST_FUNCTIONS, FIXED_FUNCTIONS_MAP, GEN1_FUNCTIONS, GEN2_FUNCTIONS};

fn vector_size(arg_type: &str) -> String {
    arg_type.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn vector_type(arg_type: &str) -> String {
    arg_type.chars().filter(|c| c.is_alphabetic()).collect()
}

fn abs_function_return_type(args: &[String]) -> String {
    let arg = &args[0];
    if arg.starts_with('u') {
        arg.clone()
    } else {
        format!("u{arg}")
    }
}

fn upsample_function_return_type(args: &[String]) -> String {
    let size = vector_size(&args[0]);
    let mut ty = vector_type(&args[0]);
    let unsigned = ty.starts_with('u');
    if unsigned {
        ty = ty[1..].to_owned();
    }
    let widened = match ty.as_str() {
        "char" => "short",
        "short" => "int",
        "int" => "long",
        other => other,
    };
    format!("{}{widened}{size}", if unsigned { "u" } else { "" })
}

fn relational_function_return_type(args: &[String]) -> String {
    let arg0 = &args[0];
    let size = vector_size(arg0);
    if arg0.starts_with("float") {
        format!("int{size}")
    } else {
        format!("long{size}")
    }
}

fn shuffle_function_return_type(args: &[String]) -> String {
    format!("{}{}", vector_type(&args[0]), vector_size(args.last().unwrap()))
}

const OTHER_FUNCTION_NAMES: &[&str] = &[
    "ilogb",
    "nan",
    "abs",
    "abs_diff",
    "upsample",
    "dot",
    "distance",
    "length",
    "fast_distance",
    "fast_length",
    "isequal",
    "isnotequal",
    "isgreater",
    "isgreaterequal",
    "isless",
    "islessequal",
    "islessgreater",
    "isfinite",
    "isinf",
    "isnan",
    "isnormal",
    "isordered",
    "isunordered",
    "signbit",
    "shuffle",
    "shuffle2",
    "get_image_dim",
];

pub fn is_other_function(name: &str) -> bool {
    if OTHER_FUNCTION_NAMES.contains(&name) {
        return true;
    }
    match name.strip_prefix("vload") {
        Some(rest) => super::catalog::VECTOR_SIZES.contains(&rest),
        None => false,
    }
}

/// Resolve the return type of a built-in call given its name and the
/// (already-resolved) types of its arguments, following the resolution
/// order: cast-by-name, same-as-first-argument, same-as-second-argument,
/// fixed lookup, then the handful of functions needing bespoke handling.
/// Unknown names resolve to `void`, matching an unrecognized builtin being
/// treated as having no meaningful return value to rename around.
pub fn return_type(func_name: &str, args: &[String]) -> String {
    if CAST_FUNCTIONS.contains(func_name) {
        if let Some(ty) = func_name.split('_').nth(1) {
            return ty.to_owned();
        }
    }

    if GEN1_FUNCTIONS.contains(func_name) && !args.is_empty() {
        return args[0].clone();
    }

    if GEN2_FUNCTIONS.contains(func_name) && args.len() >= 2 {
        return args[1].clone();
    }

    if let Some(ty) = FIXED_FUNCTIONS_MAP.get(func_name) {
        return ty.clone();
    }

    if !args.is_empty() {
        match func_name {
            "ilogb" => return format!("int{}", vector_size(&args[0])),
            "nan" => {
                let width = args[0].get(4..).unwrap_or("");
                return if args[0].starts_with("uint") {
                    format!("float{width}")
                } else {
                    format!("double{width}")
                };
            }
            "abs" | "abs_diff" => return abs_function_return_type(args),
            "upsample" => return upsample_function_return_type(args),
            "dot" | "distance" | "length" | "fast_distance" | "fast_length" => {
                return vector_type(&args[0])
            }
            "isequal" | "isnotequal" | "isgreater" | "isgreaterequal" | "isless"
            | "islessequal" | "islessgreater" | "isfinite" | "isinf" | "isnan" | "isnormal"
            | "isordered" | "isunordered" | "signbit" => {
                return relational_function_return_type(args)
            }
            "shuffle" | "shuffle2" => return shuffle_function_return_type(args),
            "get_image_dim" => {
                return if args[0] == "image3d_t" {
                    "int3".to_owned()
                } else {
                    "int2".to_owned()
                }
            }
            _ => {}
        }
        if let Some(rest) = func_name.strip_prefix("vload") {
            if super::catalog::VECTOR_SIZES.contains(&rest) && args.len() >= 2 {
                return format!("{}{rest}", vector_type(&args[1]));
            }
        }
    }

    "void".to_owned()
}
