use pretty_assertions::assert_eq;
use oclminify::rewriter::Config;

#[test]
fn empty_kernel_body_is_preserved_and_kernel_is_renamed() {
    let config = Config { rename_kernels: true, global_postfix: String::new() };
    let output = oclminify::minify("__kernel void main(){}", "test.cl", config).unwrap();
    assert_eq!(output.source, "__kernel void a(){}");
    assert_eq!(output.kernels, vec!["main".to_owned()]);
}
