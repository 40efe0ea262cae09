use rstest::rstest;
use serde_pgarray::{decode_int64_array, decode_string_array, from_str, Error};

#[rstest]
#[case(r#"{"}"#)]
#[case(r#"{""a}"#)]
#[case(r#"{mary,"}"#)]
#[case("{mary,}")]
#[case(r#"{"a"b}"#)]
#[case(r#"{"a""b"}"#)]
#[case(r#"{"unterminated"#)]
#[case(r#"{"\'"}"#)]
#[case(r#"{"\q"}"#)]
#[case(r#"{"\x4"}"#)]
#[case(r#"{"\xZZ"}"#)]
#[case(r#"{"\400"}"#)]
#[case(r#"{"\18"}"#)]
#[case(r#"{"\ud800"}"#)]
#[case(r#"{"\xff"}"#)]
#[case(r#"{"trailing\"#)]
fn malformed_literals_fail_with_syntax_error(#[case] literal: &str) {
    let err = decode_string_array(literal)
        .expect_err(&format!("{literal:?} should not decode"));
    assert!(err.is_syntax(), "{literal:?} gave {err:?}");
}

#[rstest]
#[case(r#"{"mary"}"#, &["mary"])]
#[case(r#"{"\""}"#, &["\""])]
#[case(r#"{"\\"}"#, &["\\"])]
#[case(r#"{"a\tb"}"#, &["a\tb"])]
#[case(r#"{"\a\b\f\n\r\v"}"#, &["\x07\x08\x0c\n\r\x0b"])]
#[case(r#"{"\x41\102"}"#, &["AB"])]
#[case(r#"{"é\U0001F600"}"#, &["é😀"])]
#[case(r#"{"mary",}"#, &["mary"])]
#[case(r#"{"",""}"#, &["", ""])]
#[case("{a,b,c}", &["a", "b", "c"])]
#[case("{}", &[])]
#[case("", &[])]
#[case("{{a}}", &["a"])]
fn well_formed_literals_decode(#[case] literal: &str, #[case] expected: &[&str]) {
    assert_eq!(decode_string_array(literal).unwrap(), expected);
}

#[rstest]
#[case(r#"{"ab"x}"#, 5)]
#[case("{mary,}", 5)]
#[case(r#"{"ab"#, 4)]
fn syntax_errors_carry_offsets(#[case] literal: &str, #[case] offset: usize) {
    match decode_string_array(literal) {
        Err(Error::Syntax { offset: actual, .. }) => assert_eq!(actual, offset),
        other => panic!("expected syntax error for {literal:?}, got {other:?}"),
    }
}

#[rstest]
#[case("{1,x}", 1)]
#[case("{x}", 0)]
#[case("{1,2,3,}", 3)]
#[case("{1,,3}", 1)]
fn split_decoder_failures_carry_index(#[case] literal: &str, #[case] index: usize) {
    let err = decode_int64_array(literal).unwrap_err();
    assert_eq!(err.element_index(), Some(index), "{err}");
}

#[rstest]
#[case("{1,x}", Some(1))]
#[case("{9223372036854775808}", Some(0))]
// the tokenizer rejects the dangling comma before any element is parsed
#[case("{1,2,3,}", None)]
fn serde_failures_carry_index(#[case] literal: &str, #[case] index: Option<usize>) {
    let err = from_str::<Vec<i64>>(literal).unwrap_err();
    match index {
        Some(index) => assert_eq!(err.element_index(), Some(index)),
        None => assert!(err.is_syntax(), "{err}"),
    }
}

#[rstest]
#[case("{1,2}", false)]
#[case("{1,2,3}", false)]
#[case(r#"{1,"x}"#, true)]
#[case("{1,x,}", true)]
fn single_element_tuple_rejects_leftovers(#[case] literal: &str, #[case] syntax: bool) {
    let err = from_str::<(i32,)>(literal).unwrap_err();
    assert_eq!(err.is_syntax(), syntax, "{err}");
}

#[rstest]
#[case("{1,2}", Some([1, 2]))]
#[case("{1}", None)]
#[case("{1,2,3}", None)]
#[case(r#"{1,2,x,"}"#, None)]
fn fixed_arrays_need_exact_length(#[case] literal: &str, #[case] expected: Option<[i64; 2]>) {
    assert_eq!(from_str::<[i64; 2]>(literal).ok(), expected);
}
