use hashbrown::HashMap;

use crate::disambiguate::{Compound, NounPredicatorDisambiguator};
use crate::utils::{hashmap, hashset};

fn disambiguator() -> NounPredicatorDisambiguator {
    NounPredicatorDisambiguator::new(
        hashset!["먹고", "싶다", "갔다", "했다"],
        hashset!["에", "이", "을"],
        hashset!["들"],
    )
}

fn nouns() -> HashMap<String, f64> {
    hashmap![
        "대학".to_string() => 0.9,
        "사람".to_string() => 0.8,
        "학교".to_string() => 0.7,
        "공부".to_string() => 0.6,
    ]
}

#[test]
fn test_whole_predicator() {
    let d = disambiguator();
    assert_eq!(d.decompose("했다", &nouns()), Some(Compound::Predicator));
}

#[test]
fn test_predicator_pair() {
    let d = disambiguator();
    assert_eq!(
        d.decompose("먹고싶다", &nouns()),
        Some(Compound::PredicatorPair { split: 2 })
    );
}

#[test]
fn test_noun_and_predicator() {
    let d = disambiguator();
    assert_eq!(
        d.decompose("공부했다", &nouns()),
        Some(Compound::NounSuffix {
            split: 2,
            inner_split: None
        })
    );
}

#[test]
fn test_noun_feature_predicator() {
    let d = disambiguator();
    assert_eq!(
        d.decompose("대학에갔다", &nouns()),
        Some(Compound::NounSuffix {
            split: 3,
            inner_split: Some(2)
        })
    );
}

#[test]
fn test_noun_and_feature() {
    let d = disambiguator();
    assert_eq!(
        d.decompose("사람이", &nouns()),
        Some(Compound::NounSuffix {
            split: 2,
            inner_split: None
        })
    );
    assert_eq!(
        d.decompose("학교들", &nouns()),
        Some(Compound::NounSuffix {
            split: 2,
            inner_split: None
        })
    );
}

#[test]
fn test_not_compound() {
    let d = disambiguator();
    let nouns = nouns();
    for word in ["사람", "학교", "", "밥", "학교생활", "사람에게"] {
        assert!(!d.is_compound(word, &nouns), "{word}");
    }
}

#[test]
fn test_two_chars_are_not_split() {
    // 사 is a noun and 이 is a feature, but the prefix must have two characters
    let nouns = hashmap!["사".to_string() => 1.0];
    let d = disambiguator();
    assert_eq!(d.decompose("사이", &nouns), None);
}

#[test]
fn test_decomposition_parts_are_known() {
    let d = disambiguator();
    let nouns = nouns();
    let predicators = hashset!["먹고", "싶다", "갔다", "했다"];
    let features = hashset!["에", "이", "을", "들", "먹고", "싶다", "갔다", "했다"];
    for word in ["먹고싶다", "공부했다", "대학에갔다", "사람이", "학교들", "대학을"] {
        let chars: Vec<char> = word.chars().collect();
        let part = |b: usize, e: usize| chars[b..e].iter().collect::<String>();
        match d.decompose(word, &nouns) {
            Some(Compound::PredicatorPair { split }) => {
                assert!(predicators.contains(&part(0, split)), "{word}");
                assert!(predicators.contains(&part(split, chars.len())), "{word}");
            }
            Some(Compound::NounSuffix { split, inner_split }) => {
                assert!(features.contains(&part(split, chars.len())), "{word}");
                match inner_split {
                    None => assert!(nouns.contains_key(&part(0, split)), "{word}"),
                    Some(i) => {
                        assert!(i >= 2);
                        assert!(nouns.contains_key(&part(0, i)), "{word}");
                        assert!(features.contains(&part(i, split)), "{word}");
                    }
                }
            }
            other => panic!("{word}: {other:?}"),
        }
    }
}

#[test]
fn test_partition() {
    let d = disambiguator();
    let mut nouns = nouns();
    nouns.insert("사람이".to_string(), 0.3);
    nouns.insert("공부했다".to_string(), 0.2);

    let partition = d.partition(&nouns);
    assert_eq!(partition.nouns.len(), 4);
    assert_eq!(partition.nouns.get("대학"), Some(&0.9));
    assert_eq!(partition.nouns.get("공부"), Some(&0.6));
    assert_eq!(
        partition.removals,
        hashmap!["사람이".to_string() => 0.3, "공부했다".to_string() => 0.2]
    );
}

#[test]
fn test_empty_features() {
    let d = NounPredicatorDisambiguator::new(hashset![], hashset![], hashset![]);
    let nouns = nouns();
    assert!(!d.is_compound("사람이", &nouns));
    assert!(!d.is_compound("공부했다", &nouns));

    let partition = d.partition(&nouns);
    assert_eq!(partition.nouns, nouns);
    assert!(partition.removals.is_empty());
}
