use pretty_assertions::assert_eq;
use oclminify::rewriter::Config;

/// `(ushort4)(0,1,2,3)` is a cast applied to a parenthesized comma
/// expression (OpenCL's vector-literal constructor syntax), not a braced
/// compound literal; the emitter must keep the inner parens since a comma
/// expression is not "simple".
#[test]
fn vector_constructor_keeps_its_parens() {
    let config = Config { rename_kernels: true, global_postfix: String::new() };
    let output = oclminify::minify(
        "__kernel void main(){ushort4 test=(ushort4)(0,1,2,3);}",
        "test.cl",
        config,
    )
    .unwrap();
    assert_eq!(output.source, "__kernel void a(){ushort4 b=(ushort4)(0,1,2,3);}");
}
