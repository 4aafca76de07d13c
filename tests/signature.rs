use anagrams::signature;

#[test]
fn case_insensitive() {
    assert_eq!(signature("Tea"), signature("eat"));
    assert_eq!(signature("eat"), signature("ATE"));
}

#[test]
fn sorted_ascending_by_code_point() {
    assert_eq!(signature("Apple"), "aelpp");
    assert_eq!(signature("b2a"), "2ab");
}

#[test]
fn empty_maps_to_empty() {
    assert_eq!(signature(""), "");
}

#[test]
fn punctuation_participates_as_is() {
    assert_eq!(signature("a-b"), "-ab");
    assert_eq!(signature("("), "(");
}
