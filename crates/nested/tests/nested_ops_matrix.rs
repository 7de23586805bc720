use nested::{
    get_path, merge, resolve, set_path, unset_path, NestedOptions, Path, Value,
    DEFAULT_NESTED_OPTIONS,
};
use serde_json::json;

fn doc(j: serde_json::Value) -> Value {
    Value::from(j)
}

#[test]
fn get_path_matrix() {
    let d = doc(json!({"a": {"b": 2}}));
    let opts = DEFAULT_NESTED_OPTIONS;

    assert_eq!(
        get_path(&d, &Path::from("a.b"), None, &opts),
        Some(Value::from(2))
    );
    assert_eq!(
        get_path(&d, &Path::from("a"), None, &opts),
        Some(doc(json!({"b": 2})))
    );
    assert_eq!(get_path(&d, &Path::from("a.x"), None, &opts), None);
    assert_eq!(
        get_path(&doc(json!({})), &Path::from("a.b"), Some(&Value::from("DEF")), &opts),
        Some(Value::from("DEF"))
    );
}

#[test]
fn set_path_matrix() {
    let opts = DEFAULT_NESTED_OPTIONS;

    // Without ensure, writing through missing intermediates silently fails.
    let mut d = doc(json!({}));
    assert_eq!(set_path(&mut d, &Path::from("a.b"), Value::from(5), &opts), None);
    assert_eq!(d, doc(json!({})));

    // With ensure, intermediates are created and the old value was absent.
    let mut d = doc(json!({}));
    assert_eq!(
        set_path(&mut d, &Path::from("a.b"), Value::from(5), &NestedOptions::ensured()),
        None
    );
    assert_eq!(d.to_json().unwrap(), json!({"a": {"b": 5}}));

    // Overwrites return the previous value.
    let old = set_path(&mut d, &Path::from("a.b"), Value::from(6), &opts);
    assert_eq!(old, Some(Value::from(5)));
}

#[test]
fn unset_path_matrix() {
    let mut d = doc(json!({"a": {"b": 5}}));
    let opts = DEFAULT_NESTED_OPTIONS;

    assert_eq!(unset_path(&mut d, &Path::from("a.b"), &opts), Some(Value::from(5)));
    assert_eq!(d.to_json().unwrap(), json!({"a": {}}));
    assert_eq!(unset_path(&mut d, &Path::from("a.b"), &opts), None);
}

#[test]
fn merge_matrix() {
    assert_eq!(
        merge(Some(doc(json!({"a": {"x": 1}}))), &[doc(json!({"a": {"y": 2}}))])
            .to_json()
            .unwrap(),
        json!({"a": {"x": 1, "y": 2}})
    );
    assert_eq!(
        merge(Some(doc(json!({"a": 1}))), &[doc(json!({"a": {"x": 1}}))])
            .to_json()
            .unwrap(),
        json!({"a": {"x": 1}})
    );

    // A key the donor does not mention never touches the target.
    let target = merge(
        Some(doc(json!({"a": [1, 2], "keep": true}))),
        &[doc(json!({"b": 3}))],
    );
    assert_eq!(target.to_json().unwrap(), json!({"a": [1, 2], "keep": true, "b": 3}));
}

#[test]
fn merge_scalar_donor_is_idempotent() {
    let donor = doc(json!({"a": 1, "b": "x", "c": true}));
    let once = merge(None, std::slice::from_ref(&donor));
    let twice = merge(Some(once.clone()), std::slice::from_ref(&donor));
    assert_eq!(once, twice);
}

/// A tombstoned key and a truly absent key both read as the default through
/// `get_path`, but only the absent key still produces a reference record at
/// the resolver level.
#[test]
fn tombstone_is_hidden_at_the_resolver_level() {
    let mut d = doc(json!({"a": {}}));
    let opts = DEFAULT_NESTED_OPTIONS;
    set_path(&mut d, &Path::from("a.hidden"), Value::Tombstone, &opts);

    // Absent key: resolution succeeds with an empty leaf.
    let meta = resolve(&d, &Path::from("a.absent"), &opts).unwrap();
    assert_eq!(meta.val, None);

    // Tombstoned key: resolution fails outright.
    assert!(resolve(&d, &Path::from("a.hidden"), &opts).is_none());

    // Through get_path the two are indistinguishable.
    let def = Value::from("DEF");
    assert_eq!(
        get_path(&d, &Path::from("a.absent"), Some(&def), &opts),
        Some(def.clone())
    );
    assert_eq!(
        get_path(&d, &Path::from("a.hidden"), Some(&def), &opts),
        Some(def)
    );
}

#[test]
fn tombstone_blocks_traversal_into_substructure() {
    // Hiding a subtree hides everything below it.
    let mut d = doc(json!({"section": {"inner": {"leaf": 1}}}));
    let opts = DEFAULT_NESTED_OPTIONS;
    set_path(&mut d, &Path::from("section"), Value::Tombstone, &opts);

    assert!(resolve(&d, &Path::from("section.inner.leaf"), &opts).is_none());
    assert_eq!(get_path(&d, &Path::from("section.inner.leaf"), None, &opts), None);
}

#[test]
fn pre_split_paths_allow_dotted_keys() {
    let mut d = doc(json!({"by_price": {"0.99": "cheap"}}));
    let path = Path::new(vec!["by_price".to_string(), "0.99".to_string()]);
    assert_eq!(
        get_path(&d, &path, None, &DEFAULT_NESTED_OPTIONS),
        Some(Value::from("cheap"))
    );
    assert_eq!(
        unset_path(&mut d, &path, &DEFAULT_NESTED_OPTIONS),
        Some(Value::from("cheap"))
    );
    assert_eq!(d.to_json().unwrap(), json!({"by_price": {}}));
}
