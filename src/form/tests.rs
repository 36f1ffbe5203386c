use super::*;
use rstest::rstest;

#[rstest]
#[case(Form::Model, "sample")]
#[case(Form::Ising, "sample_ising")]
#[case(Form::Qubo, "sample_qubo")]
fn test_names(#[case] form: Form, #[case] name: &str) {
    assert_eq!(form.to_string(), name);
    assert_eq!(form.as_ref(), name);
}

#[test]
fn test_of() {
    assert_eq!(Form::of(Vartype::Spin), Form::Ising);
    assert_eq!(Form::of(Vartype::Binary), Form::Qubo);
    assert_eq!(Form::Ising.vartype(), Some(Vartype::Spin));
    assert_eq!(Form::Model.vartype(), None);
}

#[test]
fn test_describe() {
    assert_eq!(describe(EnumSet::empty()), "");
    assert_eq!(describe(Form::Qubo | Form::Model), "sample, sample_qubo");
}
