use pretty_assertions::assert_eq;
use oclminify::rewriter::Config;

/// Three separate `int` declaration statements sharing a type collapse
/// into one comma-joined declaration.
#[test]
fn consecutive_decls_with_same_type_are_grouped() {
    let config = Config { rename_kernels: true, global_postfix: String::new() };
    let output = oclminify::minify(
        "__kernel void main(){int a=3;int b=5;int t=a*b-a+b/a;}",
        "test.cl",
        config,
    )
    .unwrap();
    assert_eq!(output.source, "__kernel void a(){int b=3,c=5,d=b*c-b+c/b;}");
}
