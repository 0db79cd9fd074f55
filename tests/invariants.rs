use pretty_assertions::assert_eq;
use oclminify::rewriter::Config;

/// With kernel renaming turned off, the kernel keeps its original name
/// while everything else inside it still gets shortened.
#[test]
fn rename_kernels_false_preserves_kernel_name() {
    let config = Config { rename_kernels: false, global_postfix: String::new() };
    let output = oclminify::minify(
        "__kernel void entry(){int longname=1;}",
        "test.cl",
        config,
    )
    .unwrap();
    assert!(output.source.contains("entry"));
    assert!(!output.source.contains("longname"));
    assert_eq!(output.kernels, vec!["entry".to_owned()]);
}

/// Minified output is itself valid input: re-parsing it must succeed.
#[test]
fn minified_output_reparses_cleanly() {
    let config = Config { rename_kernels: true, global_postfix: String::new() };
    let output = oclminify::minify(
        "__kernel void main(__global float *buf,int n){\
            for(int i=0;i<n;i=i+1){buf[i]=buf[i]*2.0f;}\
        }",
        "test.cl",
        config,
    )
    .unwrap();
    oclminify::parser::parse(&output.source, "reparsed.cl")
        .expect("minified output must still be valid OpenCL C");
}

/// A non-trivial program never comes out longer than it went in.
#[test]
fn output_is_not_longer_than_input() {
    let config = Config { rename_kernels: true, global_postfix: String::new() };
    let source = "__kernel void convolve(__global const float *input,__global float *output,int width){\
        int index = get_global_id(0);\
        float accumulator = 0.0f;\
        for(int offset=0;offset<width;offset=offset+1){\
            accumulator = accumulator + input[index+offset];\
        }\
        output[index] = accumulator;\
    }";
    let output = oclminify::minify(source, "test.cl", config).unwrap();
    assert!(output.source.len() <= source.len());
}

/// A non-empty `global_postfix` implies kernel renaming even if the caller
/// didn't separately set the flag (§7's conflict-resolution rule).
#[test]
fn nonempty_postfix_implies_kernel_renaming() {
    let config = Config { rename_kernels: false, global_postfix: "_x".to_owned() };
    let output = oclminify::minify("__kernel void entry(){}", "test.cl", config).unwrap();
    assert!(!output.source.contains("entry"));
    assert!(output.source.contains("_x"));
}
