use pretty_assertions::assert_eq;
use oclminify::rewriter::Config;

fn minify(source: &str) -> String {
    let config = Config { rename_kernels: true, global_postfix: String::new() };
    oclminify::minify(source, "test.cl", config).unwrap().source
}

/// Braces around a single-statement `if` body are only dropped when doing
/// so wouldn't change which `if` a trailing `else` binds to.
#[test]
fn dangling_else_keeps_disambiguating_braces() {
    let output = minify("__kernel void main(){int a=1;int b=2;int c=0;if(a){if(b)c=1;}else c=2;}");
    assert_eq!(
        output,
        "__kernel void a(){int b=1,c=2,d=0;if(b){if(c)d=1;}else d=2;}"
    );
}

/// A single-statement loop body still collapses to its bare form when
/// there's no outer `else` that could be misattributed.
#[test]
fn for_loop_single_statement_body_drops_braces() {
    let output = minify("__kernel void main(){int c=0;for(int i=0;i<10;i=i+1){c=c+i;}}");
    assert_eq!(
        output,
        "__kernel void a(){int b=0;for(int c=0;c<10;c=c+1)b=b+c;}"
    );
}

/// Declaration grouping mixes pointer and value declarators freely as long
/// as the leading type text is identical.
#[test]
fn grouping_mixes_pointer_and_value_declarators() {
    let output = minify("__kernel void main(){int a;int *b;int c;}");
    assert_eq!(output, "__kernel void a(){int b,*c,d;}");
}
