//! End-to-end tests of the vector space engine.

use vector_space_model::{
    DefaultNormalizer, EngineConfig, Hits, ScoringMode, UnknownTermPolicy, VectorSpace, VsmError,
};

const EPS: f64 = 1e-9;

fn pets() -> VectorSpace {
    VectorSpace::new(&[
        "The cat in the hat disabled",
        "A cat is a fine pet ponies.",
        "Dogs and cats make good pets.",
        "I haven't got a hat.",
    ])
    .unwrap()
}

#[test]
fn cat_sat_vocabulary_and_vector() {
    let vs: VectorSpace = VectorSpace::build(
        &["the cat sat", "the dog sat"],
        DefaultNormalizer::with_stopwords(&["the"]),
        EngineConfig::default(),
    )
    .unwrap();
    let terms: Vec<_> = vs.vocabulary().terms().collect();
    assert_eq!(terms, vec!["cat", "sat", "dog"]);
    assert_eq!(vs.documents()[0], vec![1, 1, 0]);
    assert_eq!(vs.query_vector(&["the cat sat"]).unwrap(), vec![1, 1, 0]);
}

#[test]
fn english_corpus_rankings() {
    let vs = pets();
    let cos = vs.tf_cosine(&["cat"]).unwrap();
    assert_eq!(cos.len(), 4);
    // "cat" occurs in documents 0 and 1 only ("cats" is a different term)
    assert!(cos[0] > 0.0 && cos[1] > 0.0);
    assert_eq!(cos[2], 0.0);
    assert_eq!(cos[3], 0.0);

    let mut hits = Hits::from_scores(["d0", "d1", "d2", "d3"], &vs.tf_euclidean(&["hat"]).unwrap());
    hits.rank(ScoringMode::TfEuclidean).top_k(1);
    // "I haven't got a hat." reduces to [haven, t, got, hat]: farther than
    // [hat, disabled, cat], so document 0 wins
    assert_eq!(hits.list[0].0, "d0");
}

#[test]
fn all_modes_return_one_score_per_document() {
    let vs = pets();
    for mode in ScoringMode::ALL {
        let scores = vs.score(mode, &["cat", "hat"]).unwrap();
        assert_eq!(scores.len(), vs.len(), "{:?}", mode);
        assert!(scores.iter().all(|s| s.is_finite()));
    }
}

#[test]
fn idf_modes_are_repeatable() {
    let vs = pets();
    let first = vs.idf_cosine(&["cat"]).unwrap();
    let _ = vs.idf_euclidean(&["pet", "hat"]).unwrap();
    let _ = vs.feedback_cosine(&["dogs"]).unwrap();
    assert_eq!(vs.idf_cosine(&["cat"]).unwrap(), first);
}

#[test]
fn feedback_on_exact_document_match() {
    let vs = pets();
    let query = ["Dogs and cats make good pets."];
    let r = vs.feedback(&query).unwrap();
    assert_eq!(r.top_document, 2);
    let best = r.scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(r.scores[2], best);
    assert!(r.scores[2] >= r.initial[2] - EPS);
    assert_eq!(vs.feedback_cosine(&query).unwrap(), r.scores);
}

#[test]
fn feedback_weight_comes_from_config() {
    let config = EngineConfig { feedback_weight: 2.0, ..Default::default() };
    let vs = VectorSpace::with_config(&["cat dog", "dog bird"], config).unwrap();
    let r = vs.feedback(&["cat"]).unwrap();
    assert_eq!(r.top_document, 0);
    assert_eq!(r.refined_query, vec![3.0, 2.0, 0.0]);
}

#[test]
fn unknown_terms_policies() {
    let vs = pets();
    assert!(matches!(
        vs.idf_cosine(&["cat", "unicorn"]),
        Err(VsmError::UnknownTerm { term }) if term == "unicorn"
    ));

    let config = EngineConfig { unknown_terms: UnknownTermPolicy::Drop, ..Default::default() };
    let vs = VectorSpace::with_config(&["cat dog", "dog bird"], config).unwrap();
    assert_eq!(
        vs.tf_cosine(&["cat", "unicorn"]).unwrap(),
        vs.tf_cosine(&["cat"]).unwrap()
    );
}

#[test]
fn config_loaded_from_json_file() {
    let path = std::env::temp_dir().join(format!("vsm-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "idf_scale": 100.0, "unknown_terms": "drop" }"#).unwrap();
    let config = EngineConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.idf_scale, 100.0);
    assert_eq!(config.unknown_terms, UnknownTermPolicy::Drop);

    let vs = VectorSpace::with_config(&["cat dog", "dog"], config).unwrap();
    let m = vs.weighted_matrix().unwrap();
    assert!((m.idf[0] - 2.0).abs() < EPS);
    assert!((m.idf[1] - 50f64.log10()).abs() < EPS);

    assert!(matches!(
        EngineConfig::from_json_file("/nonexistent/vsm.json"),
        Err(VsmError::Io(_))
    ));
}

#[test]
fn invalid_config_fails_build() {
    let config = EngineConfig { idf_scale: -1.0, ..Default::default() };
    assert!(matches!(
        VectorSpace::with_config(&["cat"], config),
        Err(VsmError::Config(_))
    ));
}
