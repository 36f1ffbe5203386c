use super::*;
use maplit::btreemap;

#[test]
fn test_parameters() {
    let parameters = Parameters::new()
        .with("num_reads", Vec::<String>::new())
        .with("beta_range", ["beta_schedule_type"]);

    assert!(parameters.accepts("num_reads"));
    assert!(!parameters.accepts("seed"));
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters["beta_range"], vec!["beta_schedule_type".to_string()]);
}

#[test]
fn test_parameters_from() {
    let parameters = Parameters::from(btreemap! { "seed".to_string() => vec![] });
    assert!(parameters.accepts("seed"));

    let parameters: Parameters = [("seed", vec![]), ("num_reads", vec!["seed".to_string()])]
        .into_iter()
        .collect();
    assert_eq!(parameters.keys().collect::<Vec<_>>(), ["num_reads", "seed"]);
}

#[test]
fn test_parameters_serde() {
    let parameters: Parameters = json::from_str(r#"{"num_reads": [], "seed": ["num_reads"]}"#).unwrap();
    assert_eq!(parameters, Parameters::new().with("num_reads", Vec::<String>::new()).with("seed", ["num_reads"]));
}

#[test]
fn test_properties() {
    let properties = Properties::new()
        .with("max_num_reads", 1000)
        .with("topology", json::json!({ "type": "chimera", "shape": [16, 16, 4] }));

    assert_eq!(properties["max_num_reads"], 1000);
    assert_eq!(properties["topology"]["type"], "chimera");
}

#[test]
fn test_properties_try_from() {
    let properties = Properties::try_from(json::json!({ "a": 1 })).unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(Properties::try_from(json::json!([1, 2])), Err(json::json!([1, 2])));
}

#[test]
fn test_member() {
    let member: Member<Parameters, fn() -> Parameters> = Member::default();
    assert!(member.is_unset());
    assert_eq!(format!("{member:?}"), "Unset");

    let member: Member<Parameters, fn() -> Parameters> = Member::Operation(Parameters::new);
    assert!(member.is_operation());
    assert_eq!(format!("{member:?}"), "Operation(..)");

    let member: Member<Parameters, fn() -> Parameters> = Member::Descriptor(Parameters::new());
    assert!(!member.is_unset());
    assert!(!member.is_operation());
    assert_eq!(format!("{member:?}"), "Descriptor(Parameters({}))");
}
