use aml_core::{AmlError, ErrorKind, ParameterManager};

fn app(parameters: &str) -> ParameterManager {
    let xml = format!(
        r#"<application name="verify"><groups><group name="All">{parameters}</group></groups></application>"#
    );
    ParameterManager::from_xml_str(&xml).expect("valid application")
}

fn user_error(err: AmlError) -> String {
    assert_eq!(err.kind(), ErrorKind::User, "{err}");
    err.to_string()
}

const OPTION_EXCLUDE: &str = r#"
    <parameter name="X">
      <type>integer</type>
      <list>
        <option value="0"><exclusions><item>Y</item></exclusions></option>
        <option value="1"><inclusions><item>Z</item></inclusions></option>
      </list>
    </parameter>
    <parameter name="Y"><type>string</type></parameter>
    <parameter name="Z"><type>string</type><internalDefault>auto</internalDefault></parameter>
"#;

#[test]
fn option_exclusion_rejects_entered_parameter() {
    let mut apm = app(OPTION_EXCLUDE);
    apm.put_as_string("X", "0").unwrap();
    apm.put_as_string("Y", "anything").unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [Y] can not be entered if parameter [X] is equal to [0]"
    );
}

#[test]
fn option_exclusion_excuses_missing_parameter() {
    let mut apm = app(OPTION_EXCLUDE);
    apm.put_as_string("X", "0").unwrap();
    apm.verify_all().unwrap();
}

#[test]
fn option_inclusion_requires_value_or_default() {
    let mut apm = app(OPTION_EXCLUDE);
    apm.put_as_string("X", "1").unwrap();
    apm.put_as_string("Y", "y").unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [Z] must be entered if parameter [X] is equal to [1]"
    );
}

#[test]
fn inactive_option_does_not_excuse_missing_parameter() {
    let apm = app(r#"
        <parameter name="X">
          <type>integer</type>
          <default><item>1</item></default>
          <list>
            <option value="0"><exclusions><item>Y</item></exclusions></option>
            <option value="1"></option>
          </list>
        </parameter>
        <parameter name="Y"><type>string</type></parameter>
    "#);
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [Y] must be entered."
    );
}

#[test]
fn true_boolean_requires_included_parameter() {
    let apm = app(r#"
        <parameter name="B">
          <type>boolean</type>
          <default><item>YES</item></default>
          <inclusions><item>C</item></inclusions>
        </parameter>
        <parameter name="C"><type>string</type></parameter>
    "#);
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [C] must be used if parameter [B] equates to true."
    );
}

#[test]
fn false_boolean_excuses_included_parameter() {
    let mut apm = app(r#"
        <parameter name="B">
          <type>boolean</type>
          <default><item>YES</item></default>
          <inclusions><item>C</item></inclusions>
        </parameter>
        <parameter name="C"><type>string</type></parameter>
    "#);
    apm.put_boolean("B", false).unwrap();
    apm.verify_all().unwrap();
}

#[test]
fn true_boolean_forbids_excluded_values() {
    let mut apm = app(r#"
        <parameter name="ALL">
          <type>boolean</type>
          <default><item>NO</item></default>
          <exclusions><item>BAND</item></exclusions>
        </parameter>
        <parameter name="BAND"><type>integer</type><default><item>1</item></default></parameter>
    "#);
    apm.verify_all().unwrap();

    apm.put_as_string("ALL", "yes").unwrap();
    apm.verify_all().unwrap();

    apm.put_as_string("BAND", "3").unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [BAND] must NOT be used if parameter [ALL] equates to true."
    );
}

#[test]
fn mutually_exclusive_values() {
    let mut apm = app(r#"
        <parameter name="FROM"><type>cube</type><exclusions><item>FROMLIST</item></exclusions></parameter>
        <parameter name="FROMLIST"><type>filename</type><exclusions><item>FROM</item></exclusions></parameter>
    "#);
    apm.put_as_string("FROM", "a.cub").unwrap();
    apm.verify_all().unwrap();

    apm.put_as_string("FROML", "list.lis").unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [FROMLIST] must NOT be used if parameter [FROM] is used."
    );
}

#[test]
fn either_of_two_exclusive_parameters_suffices() {
    let mut apm = app(r#"
        <parameter name="FROM"><type>cube</type><exclusions><item>FROMLIST</item></exclusions></parameter>
        <parameter name="FROMLIST"><type>filename</type><exclusions><item>FROM</item></exclusions></parameter>
    "#);
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [FROM] must be entered."
    );
    apm.put_as_string("FROMLIST", "list.lis").unwrap();
    apm.verify_all().unwrap();
}

#[test]
fn inclusion_requires_active_parameter() {
    let mut apm = app(r#"
        <parameter name="LINE"><type>integer</type><internalDefault>none</internalDefault>
          <inclusions><item>SAMPLE</item></inclusions></parameter>
        <parameter name="SAMPLE"><type>integer</type><internalDefault>none</internalDefault></parameter>
    "#);
    apm.verify_all().unwrap();
    apm.put_as_string("LINE", "4").unwrap();
    apm.verify_all().unwrap();

    let mut apm = app(r#"
        <parameter name="LINE"><type>integer</type><internalDefault>none</internalDefault>
          <inclusions><item>SAMPLE</item></inclusions></parameter>
        <parameter name="SAMPLE"><type>integer</type><exclusions><item>LINE</item></exclusions></parameter>
    "#);
    apm.put_as_string("LINE", "4").unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [SAMPLE] must be used if parameter [LINE] is used."
    );
}

#[test]
fn numeric_links_compare_entered_values() {
    let mut apm = app(r#"
        <parameter name="MINIMUM"><type>double</type><lessThan><item>MAXIMUM</item></lessThan>
          <internalDefault>auto</internalDefault></parameter>
        <parameter name="MAXIMUM"><type>integer</type><internalDefault>auto</internalDefault></parameter>
    "#);
    apm.put_as_string("MINIMUM", "5.5").unwrap();
    apm.verify_all().unwrap();

    apm.put_as_string("MAXIMUM", "5").unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [MINIMUM] must be less than parameter [MAXIMUM]."
    );

    apm.clear("MAXIMUM").unwrap();
    apm.put_as_string("MAX", "6").unwrap();
    apm.verify_all().unwrap();
}

#[test]
fn numeric_link_to_text_parameter_is_a_programmer_error() {
    let mut apm = app(r#"
        <parameter name="LOW"><type>integer</type><notEqual><item>NAME</item></notEqual>
          <internalDefault>auto</internalDefault></parameter>
        <parameter name="NAME"><type>string</type><internalDefault>auto</internalDefault></parameter>
    "#);
    apm.put_as_string("LOW", "1").unwrap();
    apm.put_as_string("NAME", "one").unwrap();
    let err = apm.verify_all().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Programmer);
    assert_eq!(err.to_string(), "Parameter is not INTEGER or DOUBLE type [NAME]");
}

#[test]
fn unresolvable_link_surfaces_during_verification() {
    let apm = app(r#"
        <parameter name="A"><type>string</type><default><item>a</item></default>
          <inclusions><item>MISSING</item></inclusions></parameter>
    "#);
    let err = apm.verify_all().unwrap_err();
    assert!(matches!(err, AmlError::UnknownParameter { ref name } if name == "MISSING"));
}

#[test]
fn bad_default_is_a_programmer_error() {
    let apm = app(r#"
        <parameter name="N"><type>integer</type><default><item>ten</item></default></parameter>
    "#);
    let err = apm.verify_all().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Programmer);
    assert_eq!(
        err.to_string(),
        "Unable to convert default [ten] to an integer, parameter [N]."
    );
}

#[test]
fn odd_on_non_integer_is_a_programmer_error() {
    let apm = app(r#"
        <parameter name="D"><type>double</type><odd/><default><item>1</item></default></parameter>
    "#);
    let err = apm.verify_all().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Programmer);
}

#[test]
fn not_equal_link_rejects_equal_values() {
    let mut apm = app(r#"
        <parameter name="A"><type>integer</type><notEqual><item>B</item></notEqual>
          <internalDefault>auto</internalDefault></parameter>
        <parameter name="B"><type>integer</type><internalDefault>auto</internalDefault></parameter>
    "#);
    apm.put_as_string("A", "3").unwrap();
    apm.put_as_string("B", "3").unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [A] must NOT be equal to parameter [B]."
    );

    apm.clear("B").unwrap();
    apm.put_as_string("B", "4").unwrap();
    apm.verify_all().unwrap();
}

#[test]
fn true_boolean_on_the_excluded_side_rejects_entered_value() {
    let mut apm = app(r#"
        <parameter name="NAME"><type>string</type><internalDefault>none</internalDefault>
          <exclusions><item>AUTO</item></exclusions></parameter>
        <parameter name="AUTO"><type>boolean</type><default><item>YES</item></default></parameter>
    "#);
    apm.verify_all().unwrap();

    apm.put_as_string("NAME", "x").unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [AUTO] must be used if parameter [NAME] is used."
    );

    apm.put_boolean("AUTO", false).unwrap();
    apm.verify_all().unwrap();
}

#[test]
fn true_boolean_excuses_excluded_parameter_without_value() {
    let mut apm = app(r#"
        <parameter name="ALL">
          <type>boolean</type>
          <default><item>YES</item></default>
          <exclusions><item>BAND</item></exclusions>
        </parameter>
        <parameter name="BAND"><type>integer</type></parameter>
    "#);
    apm.verify_all().unwrap();

    apm.put_boolean("ALL", false).unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [BAND] must be entered."
    );
}

#[test]
fn inclusion_of_false_boolean_excuses_missing_parameter() {
    let mut apm = app(r#"
        <parameter name="LABEL"><type>string</type><inclusions><item>KEEP</item></inclusions></parameter>
        <parameter name="KEEP"><type>boolean</type><default><item>NO</item></default></parameter>
    "#);
    apm.verify_all().unwrap();

    apm.put_boolean("KEEP", true).unwrap();
    assert_eq!(
        user_error(apm.verify_all().unwrap_err()),
        "Parameter [KEEP] must be used if parameter [LABEL] is used."
    );

    apm.put_as_string("LABEL", "kept").unwrap();
    apm.verify_all().unwrap();
}
