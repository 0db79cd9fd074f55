use pretty_assertions::assert_eq;
use oclminify::rewriter::Config;

/// Numeric selectors fold to `lo`/`odd` above width 4 and the reverse
/// direction (word aliases expand to letters) below it.
#[test]
fn swizzle_selectors_are_shortened_per_width() {
    let config = Config { rename_kernels: true, global_postfix: String::new() };
    let output = oclminify::minify(
        "__kernel void main(){float4 t=(float4)(0,1,2,3);uchar16 u=(uchar16)1;uchar8 v=u.s01234567;v=u.s13579bdf;float2 w=t.odd;}",
        "test.cl",
        config,
    )
    .unwrap();
    assert_eq!(
        output.source,
        "__kernel void a(){float4 b=(float4)(0,1,2,3);uchar16 c=(uchar16)1;uchar8 d=c.lo;d=c.odd;float2 e=b.yw;}"
    );
}
