use aml_model::boolean::{FALSE_SPELLINGS, TRUE_SPELLINGS};
use aml_model::{
    Application, CaseInsensitiveSet, Comparison, Group, ParamIndex, ParamType, Parameter,
    bool_str, parse_bool, same_name, starts_with_name,
};
use proptest::prelude::*;

#[test]
fn truth_table_spellings_are_disjoint() {
    for spelling in TRUE_SPELLINGS {
        assert!(!FALSE_SPELLINGS.contains(&spelling));
        assert!(parse_bool(spelling).unwrap());
    }
    for spelling in FALSE_SPELLINGS {
        assert!(!parse_bool(spelling).unwrap());
    }
    assert!(parse_bool("yes").unwrap());
    assert!(parse_bool(" YES").is_err());
}

#[test]
fn parameters_iterate_across_groups_in_order() {
    let mut first = Group::new("Files");
    first.parameters.push(Parameter::new("FROM", ParamType::Cube));
    let mut second = Group::new("Options");
    second.parameters.push(Parameter::new("LINE", ParamType::Integer));
    second.parameters.push(Parameter::new("SAMPLE", ParamType::Integer));
    let app = Application {
        groups: vec![first, second],
        ..Application::default()
    };

    let names: Vec<_> = app.parameters().map(|(_, p)| p.name.as_str()).collect();
    assert_eq!(names, ["FROM", "LINE", "SAMPLE"]);
    assert_eq!(app.parameter_count(), 3);
    assert_eq!(
        app.parameter(ParamIndex { group: 1, param: 1 }).name,
        "SAMPLE"
    );
}

#[test]
fn referenced_names_cover_every_link_list() {
    let mut param = Parameter::new("MIN", ParamType::Double);
    param.comparisons_mut(Comparison::LessThan).push("MAX".to_string());
    param.exclude.push("AUTO".to_string());
    param.include.push("MAX".to_string());
    let names: Vec<_> = param.referenced_names().collect();
    assert_eq!(names, ["MAX", "AUTO", "MAX"]);
}

proptest! {
    #[test]
    fn boolean_spelling_ignores_case(upper in any::<bool>(), pick in 0usize..4) {
        let spelling = TRUE_SPELLINGS[pick];
        let spelling = if upper { spelling.to_string() } else { spelling.to_lowercase() };
        prop_assert!(parse_bool(&spelling).unwrap());
    }

    #[test]
    fn stored_booleans_parse_back(value in any::<bool>()) {
        prop_assert_eq!(parse_bool(bool_str(value)).unwrap(), value);
    }

    #[test]
    fn names_match_their_own_prefixes(name in "[A-Za-z][A-Za-z0-9]{0,8}", cut in 0usize..10) {
        let cut = cut.min(name.len());
        let prefix = name[..cut].to_lowercase();
        prop_assert!(starts_with_name(&name, &prefix));
        prop_assert!(same_name(&name, &name.to_uppercase()));
    }

    #[test]
    fn case_insensitive_set_keeps_first_spelling(name in "[a-z]{1,6}") {
        let mut set = CaseInsensitiveSet::default();
        prop_assert!(set.insert(&name));
        prop_assert!(!set.insert(&name.to_uppercase()));
        prop_assert_eq!(set.get(&name.to_uppercase()), Some(name.as_str()));
        prop_assert_eq!(set.len(), 1);
    }
}
