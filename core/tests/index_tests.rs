use search_core::{build_index, get_keyword, load_noise_words, DocumentList, KeywordIndex, NoiseWords, SearchError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_corpus(dir: &Path, docs: &[(&str, &str)], noise: &str) {
    let names: Vec<&str> = docs.iter().map(|(name, _)| *name).collect();
    fs::write(dir.join("docs.txt"), names.join("\n")).unwrap();
    fs::write(dir.join("noisewords.txt"), noise).unwrap();
    for (name, text) in docs {
        fs::write(dir.join(name), text).unwrap();
    }
}

fn build_from_dir(dir: &Path) -> Result<KeywordIndex, SearchError> {
    let list = DocumentList::load(dir.join("docs.txt"))?;
    let noise = load_noise_words(dir.join("noisewords.txt"))?;
    build_index(&list.documents, &noise, &list.source())
}

fn assert_sorted(index: &KeywordIndex) {
    for (keyword, list) in index.keywords() {
        assert!(list.windows(2).all(|w| w[0].frequency >= w[1].frequency), "{keyword} unsorted");
        let docs: HashSet<&str> = list.iter().map(|o| o.document.as_str()).collect();
        assert_eq!(docs.len(), list.len(), "{keyword} lists a document twice");
        assert!(keyword.chars().all(|c| c.is_alphabetic() && !c.is_uppercase()), "{keyword} not normalized");
    }
}

#[test]
fn two_small_documents() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path(), &[("doc1.txt", "The Cat sat."), ("doc2.txt", "A cat ran.")], "the\na\n");
    let index = build_from_dir(dir.path()).unwrap();

    let cat = index.occurrences("cat").unwrap();
    let docs: HashSet<&str> = cat.iter().map(|o| o.document.as_str()).collect();
    assert_eq!(docs, HashSet::from(["doc1.txt", "doc2.txt"]));
    assert!(cat.iter().all(|o| o.frequency == 1));
    assert!(index.occurrences("the").is_none());
    assert!(index.occurrences("a").is_none());
    assert_sorted(&index);
}

#[test]
fn ranked_query_over_files() {
    let dir = tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("deep1.txt", "deep deep deep world.\nDeep sea, deep dive!"),
            ("world1.txt", "world world world world world, hello."),
            ("both.txt", "A deep world? the world: deep."),
            ("none.txt", "nothing to see here"),
            ("deep2.txt", "Deep.\n\n deep"),
            ("world2.txt", "World!"),
        ],
        "the a to",
    );
    let index = build_from_dir(dir.path()).unwrap();
    assert_eq!(index.num_docs(), 6);
    assert_sorted(&index);

    assert_eq!(index.occurrences("deep").unwrap()[0].frequency, 5);
    let top = index.top5_search("deep", "world");
    assert_eq!(top, vec!["deep1.txt", "world1.txt", "both.txt", "deep2.txt", "world2.txt"]);
    assert_eq!(index.top5_search("sea", "zzz_not_present"), vec!["deep1.txt"]);
}

#[test]
fn words_with_inner_punctuation_are_skipped() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path(), &[("d.txt", "don't stop, won't-stop stop!!")], "");
    let index = build_from_dir(dir.path()).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.occurrences("stop").unwrap()[0].frequency, 2);
}

#[test]
fn missing_document_fails_the_build() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path(), &[("present.txt", "here")], "");
    fs::write(dir.path().join("docs.txt"), "present.txt\nabsent.txt\n").unwrap();
    match build_from_dir(dir.path()) {
        Err(SearchError::DocumentNotFound { document, .. }) => assert_eq!(document, "absent.txt"),
        other => panic!("expected DocumentNotFound, got {other:?}"),
    }
}

#[test]
fn missing_noise_file_fails_the_build() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path(), &[("present.txt", "here")], "");
    fs::remove_file(dir.path().join("noisewords.txt")).unwrap();
    assert!(matches!(build_from_dir(dir.path()), Err(SearchError::ConfigNotFound { .. })));
}

#[test]
fn trailing_punctuation_only() {
    let noise = NoiseWords::new();
    assert_eq!(get_keyword("Apple.", &noise).as_deref(), Some("apple"));
    assert_eq!(get_keyword("don't", &noise), None);
    assert_eq!(get_keyword("!!!", &noise), None);
}

#[test]
fn index_serializes_to_json() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path(), &[("d.txt", "json json")], "");
    let index = build_from_dir(dir.path()).unwrap();
    let value = serde_json::to_value(&index).unwrap();
    assert_eq!(value["keywords"]["json"][0]["frequency"], 2);
    assert_eq!(value["keywords"]["json"][0]["document"], "d.txt");
}

#[test]
fn document_listed_twice_counts_once() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path(), &[("d1.txt", "cat"), ("d2.txt", "cat cat")], "");
    fs::write(dir.path().join("docs.txt"), "d1.txt d2.txt\nd1.txt\n").unwrap();
    let index = build_from_dir(dir.path()).unwrap();
    let cat: Vec<(&str, u32)> = index.occurrences("cat").unwrap().iter().map(|o| (o.document.as_str(), o.frequency)).collect();
    assert_eq!(cat, vec![("d2.txt", 2), ("d1.txt", 1)]);
    assert_sorted(&index);
}
