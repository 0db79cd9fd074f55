use pretty_assertions::assert_eq;
use oclminify::rewriter::Config;

/// A struct's fields get their own independent `a, b, c, ...` numbering
/// (per §4.4), separate from the allocator pool used for everything else
/// in scope; the tag itself is allocated from that shared pool like any
/// other declaration.
#[test]
fn struct_fields_get_per_struct_compact_names() {
    let config = Config { rename_kernels: true, global_postfix: String::new() };
    let source = "__kernel void main(){\
        struct Point{int test1;int test2;int test3;int test4;int test5;int test6;int test7;} p;\
        p.test1=1;p.test7=2;\
    }";
    let output = oclminify::minify(source, "test.cl", config).unwrap();

    assert!(!output.source.contains("test1"));
    assert!(!output.source.contains("test7"));
    assert_eq!(
        output.source,
        "__kernel void a(){struct b{int a;int b;int c;int d;int e;int f;int g;}c;c.a=1;c.g=2;}"
    );
}
