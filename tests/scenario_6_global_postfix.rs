use pretty_assertions::assert_eq;
use oclminify::rewriter::Config;

/// `global_postfix` is appended to names allocated at global scope depth
/// (the typedef, the function, the kernel) but not to a same-named local
/// declared inside a kernel body.
#[test]
fn postfix_applies_only_at_global_depth() {
    let config = Config { rename_kernels: true, global_postfix: "_1".to_owned() };
    let output = oclminify::minify(
        "typedef uint gt;void gf(){}__kernel void gk(){typedef uint lt;lt x=0;}",
        "test.cl",
        config,
    )
    .unwrap();

    assert!(!output.source.contains("gt"));
    assert!(!output.source.contains("gf"));
    assert!(!output.source.contains("gk"));
    assert!(!output.source.contains("lt"));

    // Global typedef, free function, and kernel all end up postfixed; the
    // nested typedef and the local it types start over from "a" with no
    // postfix, since "a_1" etc. don't textually collide with "a"/"b".
    assert_eq!(
        output.source,
        "typedef uint a_1;void b_1(){}__kernel void c_1(){typedef uint a;a b=0;}"
    );
}
