use super::*;
use assert_matches::assert_matches;
use rstest::rstest;

#[rstest]
#[case(Capability::Parameters, "parameters")]
#[case(Capability::Properties, "properties")]
#[case(Capability::Sample, "sample")]
#[case(Capability::SampleIsing, "sample_ising")]
#[case(Capability::SampleQubo, "sample_qubo")]
fn test_capability_names(#[case] capability: Capability, #[case] name: &str) {
    assert_eq!(capability.to_string(), name);
}

#[test]
fn test_capability_from_form() {
    assert_eq!(Capability::from(Form::Model), Capability::Sample);
    assert_eq!(Capability::from(Form::Ising), Capability::SampleIsing);
    assert_eq!(Capability::from(Form::Qubo), Capability::SampleQubo);
}

#[test]
fn test_contract_violation_display() {
    let err = ContractViolation::Missing {
        sampler: "Dummy".into(),
        capability: Capability::Properties,
    };
    assert_eq!(err.to_string(), "sampler Dummy does not define required properties");
    assert_eq!(err.sampler(), "Dummy");
    assert_eq!(err.capability(), Some(Capability::Properties));

    let err = ContractViolation::NotDescriptor {
        sampler: "Dummy".into(),
        capability: Capability::Parameters,
    };
    assert_eq!(
        err.to_string(),
        "sampler Dummy defines parameters as an operation, expected a descriptor"
    );

    let err = ContractViolation::NoEntrypoint { sampler: "Dummy".into() };
    assert!(err.to_string().contains("sample_ising"));
    assert_eq!(err.capability(), None);
}

#[test]
fn test_unknown_parameter_display() {
    let err = Error::UnknownParameter {
        sampler: "Dummy".into(),
        name: "sed".into(),
        suggestions: Suggestions::new("sed", ["seed"]),
    };
    assert_eq!(
        err.to_string(),
        r#"sampler Dummy does not accept parameter "sed", did you mean "seed"?"#
    );
}

#[test]
fn test_sampling() {
    let err = Error::sampling("device offline");
    assert_matches!(&err, Error::Sampling(_));
    assert_eq!(err.to_string(), "device offline");
}

#[test]
fn test_from_contract_violation() {
    let err: Error = ContractViolation::NoEntrypoint { sampler: "Dummy".into() }.into();
    assert_matches!(err, Error::Contract(ContractViolation::NoEntrypoint { .. }));
}
