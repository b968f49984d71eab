use std::{collections::BTreeSet, path::Path};

use blog_search::{load_store, IndexConfig, InvertedIndex, SearchEngine};

const ANSIBLE_URLS: [&str; 3] = [
    "/ansible/code-review/how-does-ansible-work/",
    "/ansible/code-review/remote-ansible-modules/",
    "/ansible/code-review/remote-ansible-modules2/",
];
const SMOLAGENTS_URL: &str = "/smolagents/ai/agents/smolagents-are-amazing/";

fn blog_index() -> InvertedIndex {
    let documents =
        load_store(Path::new("tests/data/lunr-store.js")).expect("Failed to load store");

    InvertedIndex::from_documents(IndexConfig::default(), documents)
        .expect("Failed to build index")
}

fn search_urls(engine: &SearchEngine, query: &str) -> BTreeSet<String> {
    engine
        .search(query)
        .expect("Failed to search")
        .into_iter()
        .map(|result| result.url)
        .collect()
}

#[test]
fn loads_every_record_with_unique_urls() {
    let index = blog_index();
    let urls: BTreeSet<&str> = index.documents().iter().map(|doc| doc.url.as_str()).collect();

    assert_eq!(index.len(), 4);
    assert_eq!(urls.len(), 4);
    assert!(urls.iter().all(|url| !url.is_empty()));
    assert!(index
        .documents()
        .iter()
        .all(|doc| doc.tags.is_empty() && doc.teaser.is_none()));
}

#[test]
fn ansible_returns_the_three_ansible_posts() {
    let engine = SearchEngine::new(blog_index());

    assert_eq!(
        search_urls(&engine, "Ansible"),
        ANSIBLE_URLS
            .iter()
            .map(ToString::to_string)
            .collect::<BTreeSet<_>>()
    );
}

#[test]
fn smolagents_returns_the_fourth_post() {
    let engine = SearchEngine::new(blog_index());

    assert_eq!(
        search_urls(&engine, "Smolagents"),
        BTreeSet::from([SMOLAGENTS_URL.to_string()])
    );
}

#[test]
fn wildcard_on_whole_word_finds_stemmed_terms() {
    let engine = SearchEngine::new(blog_index());

    assert_eq!(
        search_urls(&engine, "Ansible*"),
        ANSIBLE_URLS
            .iter()
            .map(ToString::to_string)
            .collect::<BTreeSet<_>>()
    );
    assert_eq!(
        search_urls(&engine, "smolagents*"),
        BTreeSet::from([SMOLAGENTS_URL.to_string()])
    );
    assert_eq!(search_urls(&engine, "modules*").len(), 3);
}

#[test]
fn every_title_word_finds_its_post() {
    let index = blog_index();

    for document in index.documents() {
        for word in document
            .title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
        {
            assert!(
                index.lookup(word).contains(document.url.as_str()),
                "`{word}` should find {}",
                document.url
            );
        }
    }
}

#[test]
fn unstemmed_index_matches_exact_words() {
    let documents =
        load_store(Path::new("tests/data/lunr-store.js")).expect("Failed to load store");
    let index = InvertedIndex::from_documents(
        IndexConfig {
            stem: false,
            ..IndexConfig::default()
        },
        documents,
    )
    .expect("Failed to build index");

    assert!(index.contains_term("ansible"));
    assert!(index.contains_term("smolagents"));
    assert_eq!(
        index.lookup("Ansible").into_iter().collect::<Vec<_>>(),
        ANSIBLE_URLS.to_vec()
    );
}

#[test]
fn directory_store_skips_bad_and_duplicate_records() {
    let documents = load_store(Path::new("tests/data/split")).expect("Failed to load store");

    // The url-less draft is dropped while loading; the duplicate survives until indexing.
    assert_eq!(documents.len(), 3);

    let index = InvertedIndex::from_documents(IndexConfig::default(), documents)
        .expect("Failed to build index");
    let engine = SearchEngine::new(index);

    assert_eq!(engine.index().len(), 2);
    assert_eq!(
        search_urls(&engine, "rust"),
        BTreeSet::from([
            "/rust/stemming-words/".to_string(),
            "/rust/tiny-indexer/".to_string()
        ])
    );
    assert!(search_urls(&engine, "again").is_empty());

    let results = engine.search("postings").expect("Failed to search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].teaser.as_deref(), Some("/assets/images/indexer.png"));

    let indexer = engine
        .index()
        .document(0)
        .expect("First document should be indexed");
    assert_eq!(indexer.excerpt, "Postings & terms, nothing more...");
    assert_eq!(indexer.title, "Writing a tiny indexer");
    assert!(engine.index().lookup("em").is_empty());
}
