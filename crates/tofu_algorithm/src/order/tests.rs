use pretty_assertions::assert_eq;

use super::*;

fn cstrs(texts: &[&str]) -> Vec<TaggedValue> {
    texts.iter().map(|t| TaggedValue::new("cstr", *t)).collect()
}

fn texts(seq: &[TaggedValue]) -> Vec<&str> {
    seq.iter().map(TaggedValue::value).collect()
}

// Search

#[test]
fn search_returns_first_match() {
    let seq = cstrs(&["a", "b", "a"]);
    assert_eq!(search(&seq, &TaggedValue::new("cstr", "a")), Some(0));
    assert_eq!(search(&seq, &TaggedValue::new("cstr", "b")), Some(1));
}

#[test]
fn search_miss_is_none() {
    let seq = cstrs(&["a", "b"]);
    assert_eq!(search(&seq, &TaggedValue::new("cstr", "z")), None);
    // same text, different tag
    assert_eq!(search(&seq, &TaggedValue::new("wstr", "a")), None);
    assert_eq!(search(&[], &TaggedValue::new("cstr", "a")), None);
}

// Sort

#[test]
fn sort_ascending_is_lexicographic() {
    let mut seq = cstrs(&["20", "3", "100"]);
    sort(&mut seq, true);
    assert_eq!(texts(&seq), vec!["100", "20", "3"]);
}

#[test]
fn sort_descending() {
    let mut seq = cstrs(&["b", "c", "a"]);
    sort(&mut seq, false);
    assert_eq!(texts(&seq), vec!["c", "b", "a"]);
}

#[test]
fn sort_is_stable() {
    let mut seq = cstrs(&["b", "a", "b", "a"]);
    seq[0].set_attribute("first-b", "", "");
    seq[2].set_attribute("second-b", "", "");
    sort(&mut seq, true);
    assert_eq!(seq[2].attribute().name, "first-b");
    assert_eq!(seq[3].attribute().name, "second-b");
}

#[test]
fn sort_mixed_tags_groups_by_tag() {
    let mut seq = vec![
        TaggedValue::new("any", "a"),
        TaggedValue::new("i8", "9"),
        TaggedValue::new("cstr", "m"),
        TaggedValue::new("i8", "1"),
    ];
    sort(&mut seq, true);
    let ids: Vec<_> = seq.iter().map(TaggedValue::type_id).collect();
    assert_eq!(ids, vec!["i8", "i8", "cstr", "any"]);
    assert_eq!(seq[0].value(), "1");
}

#[test]
fn sort_empty_is_noop() {
    let mut seq: Vec<TaggedValue> = Vec::new();
    sort(&mut seq, true);
    assert!(seq.is_empty());
}

#[test]
fn sort_by_custom_order() {
    let mut seq = cstrs(&["ccc", "a", "bb"]);
    sort_by(&mut seq, |a, b| a.value().len().cmp(&b.value().len()));
    assert_eq!(texts(&seq), vec!["a", "bb", "ccc"]);
}

// Reverse

#[test]
fn reverse_mirrors() {
    let mut seq = cstrs(&["1", "2", "3"]);
    reverse(&mut seq);
    assert_eq!(texts(&seq), vec!["3", "2", "1"]);
    reverse(&mut seq);
    assert_eq!(texts(&seq), vec!["1", "2", "3"]);
}

// Extremes

#[test]
fn min_and_max() {
    let seq = cstrs(&["m", "a", "z", "q"]);
    assert_eq!(min(&seq).map(TaggedValue::value), Some("a"));
    assert_eq!(max(&seq).map(TaggedValue::value), Some("z"));
    assert!(min(&[]).is_none());
    assert!(max(&[]).is_none());
}

#[test]
fn extremes_return_first_on_ties() {
    let mut seq = cstrs(&["z", "a", "z", "a"]);
    seq[0].set_attribute("first-z", "", "");
    seq[1].set_attribute("first-a", "", "");
    assert_eq!(max(&seq).map(|v| v.attribute().name.as_str()), Some("first-z"));
    assert_eq!(min(&seq).map(|v| v.attribute().name.as_str()), Some("first-a"));
}

#[test]
fn extremes_point_into_the_slice() {
    let seq = cstrs(&["b", "a"]);
    let smallest = min(&seq).map(std::ptr::from_ref);
    assert_eq!(smallest, Some(std::ptr::from_ref(&seq[1])));
}

#[test]
fn min_by_custom_order() {
    let seq = cstrs(&["ccc", "a", "bb"]);
    let longest = max_by(&seq, |a, b| a.value().len().cmp(&b.value().len()));
    assert_eq!(longest.map(TaggedValue::value), Some("ccc"));
    let shortest = min_by(&seq, |a, b| a.value().len().cmp(&b.value().len()));
    assert_eq!(shortest.map(TaggedValue::value), Some("a"));
}
