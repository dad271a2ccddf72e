//! Behavior-preservation checks: run a program under the curry kernel
//! before and after the rewrite and compare completion values.

use currypack_test_helpers::{eval_transformed, eval_with_runtime, transform_ok};

fn assert_same_completion(program: &str) -> String {
    let original = eval_with_runtime(program)
        .unwrap_or_else(|err| panic!("original program failed: {err}\n{program}"));
    let rewritten_src = transform_ok(program);
    let rewritten = eval_transformed(&rewritten_src)
        .unwrap_or_else(|err| panic!("rewritten program failed: {err}\n{rewritten_src}"));
    assert_eq!(
        original, rewritten,
        "completion values diverged\nrewritten source:\n{}",
        rewritten_src
    );
    original
}

#[test]
fn test_saturated_arithmetic_is_preserved() {
    let program = r#"
        var add = F2(function (a, b) { return a + b; });
        var mul3 = F3(function (a, b, c) { return a * b * c; });
        A2(add, A3(mul3, 2, 3, 4), 5);
    "#;

    assert_eq!(assert_same_completion(program), "29");
}

#[test]
fn test_application_through_a_rebinding_is_preserved() {
    let program = r#"
        var add = F2(function (a, b) { return a + b; });
        var plus = add;
        A2(plus, 20, 22);
    "#;

    assert_eq!(assert_same_completion(program), "42");
}

#[test]
fn test_mixed_saturation_is_preserved() {
    // A1 under-saturates the declaration, so it keeps the generic path at
    // runtime while A2 is rewritten away.
    let program = r#"
        var add = F2(function (a, b) { return a + b; });
        var bump = A1(add, 1);
        var two = A2(add, 1, 1);
        bump(two + 39);
    "#;

    assert_eq!(assert_same_completion(program), "42");
}

#[test]
fn test_higher_arity_application_is_preserved() {
    let program = r#"
        var join4 = F4(function (a, b, c, d) { return "" + a + b + c + d; });
        A4(join4, 1, 2, 3, 4);
    "#;

    assert_same_completion(program);
}

#[test]
fn test_call_sites_inside_functions_are_preserved() {
    let program = r#"
        var add = F2(function (a, b) { return a + b; });
        function total(xs) {
            var sum = 0;
            for (var i = 0; i < xs.length; i++) {
                sum = A2(add, sum, xs[i]);
            }
            return sum;
        }
        total([1, 2, 3, 4]);
    "#;

    assert_eq!(assert_same_completion(program), "10");
}

#[test]
fn test_rewritten_output_drops_the_generic_dispatch() {
    let program = r#"
        var add = F2(function (a, b) { return a + b; });
        A2(add, 20, 22);
    "#;

    let output = transform_ok(program);
    assert!(!output.contains("A2("), "dispatch survived: {}", output);
    assert_eq!(eval_transformed(&output).unwrap(), "42");
}
