/*!
 * End-to-end tests for single-document analysis
 */

use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};

use emostyle::analysis::{AnalysisResult, DocumentAnalyzer, EmotionLexicon};
use emostyle::app_config::{AnalysisConfig, LexiconConfig};
use emostyle::errors::{AnalysisError, AnnotationError, AppError};
use crate::common::{self, mock_services::{FailingAnnotator, FailingLemmatizer, WhitespaceLemmatizer}};

fn lexicon() -> Arc<EmotionLexicon> {
    Arc::new(
        EmotionLexicon::parse(common::SAMPLE_LEXICON, &LexiconConfig::default())
            .expect("sample lexicon parses"),
    )
}

fn default_analyzer() -> Result<DocumentAnalyzer> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_test_config(temp_dir.path())?;
    Ok(DocumentAnalyzer::from_config(&config)?)
}

fn to_value(result: &AnalysisResult) -> Value {
    serde_json::from_str(&result.to_json(false).expect("serializes")).expect("valid JSON")
}

#[test]
fn test_analyze_withDialogue_shouldCountSpeechVerbAndSentenceTypes() -> Result<()> {
    let result = default_analyzer()?.analyze("Ana vorbește. Ion pleacă?")?;

    assert_eq!(result.style.sentence_count, 2);
    assert_eq!(result.style.dicendi_count, 1);
    assert_eq!(result.style.sentence_types.declarative, 1);
    assert_eq!(result.style.sentence_types.interrogative, 1);
    assert_eq!(result.style.sentence_types.exclamative, 0);

    let json = to_value(&result);
    assert_eq!(
        json["sentence_types"],
        json!({ "declarative": 1, "interogative": 1, "exclamative": 0 })
    );
    Ok(())
}

#[test]
fn test_analyze_withUnknownWords_shouldScoreOnlyLexiconLemmas() -> Result<()> {
    let lexicon = Arc::new(EmotionLexicon::from_entries(
        vec!["fear".to_string(), "joy".to_string()],
        vec![("frică".to_string(), vec![2.0, 0.0])],
    ));
    let analyzer = DocumentAnalyzer::new(
        Arc::new(emostyle::analysis::RuleTagger::default()),
        Arc::new(WhitespaceLemmatizer::new()),
        lexicon,
        &AnalysisConfig::default(),
    );

    let result = analyzer.analyze("frică necunoscut")?;
    let scores = &result.emotion_analysis.emotion_over_sentences[0].scores;
    assert_eq!(scores.get("fear"), Some(2.0));
    assert_eq!(scores.get("joy"), Some(0.0));
    Ok(())
}

#[test]
fn test_analyze_withEmptyDocument_shouldReturnZeroedResult() -> Result<()> {
    let result = default_analyzer()?.analyze("")?;
    let json = to_value(&result);

    assert_eq!(json["word_count"], json!(0));
    assert_eq!(json["sentence_count"], json!(0));
    assert_eq!(json["uniqueness_ratio"], json!(0.0));
    assert_eq!(json["emotion_analysis"]["emotion_over_sentences"], json!([]));
    assert_eq!(
        json["emotion_analysis"]["total_emotion_distribution"],
        json!({
            "Furie": 0.0, "Frica": 0.0, "Bucurie": 0.0,
            "Tristete": 0.0, "Pozitivitate": 0.0, "Negativitate": 0.0
        })
    );
    Ok(())
}

#[test]
fn test_analyze_withSampleDocument_shouldProduceFullReport() -> Result<()> {
    let result = default_analyzer()?.analyze(common::SAMPLE_DOCUMENT)?;

    assert_eq!(result.style.sentence_count, 4);
    assert_eq!(result.style.sentence_types.exclamative, 1);
    assert_eq!(result.style.sentence_types.interrogative, 1);
    assert_eq!(result.style.dicendi_count, 1);
    assert!(result.style.abstract_words >= 1);

    let totals = &result.emotion_analysis.total_emotion_distribution;
    assert_eq!(totals.get("Frica"), Some(2.0));
    assert_eq!(totals.get("Furie"), Some(1.0));
    assert_eq!(totals.get("Bucurie"), Some(1.0));
    assert_eq!(totals.get("Tristete"), Some(1.0));

    let summary = &result.emotion_analysis.emotion_summary;
    assert_eq!(summary.dominant_emotion.as_deref(), Some("Frica"));
    assert_eq!(summary.net_valence, Some(1.0 - 4.0));
    Ok(())
}

#[test]
fn test_toJson_shouldRoundRatiosToTwoDecimals() -> Result<()> {
    let result = default_analyzer()?.analyze("Unu doi trei. Unu doi. Trei patru!")?;
    let json = to_value(&result);

    assert_eq!(json["avg_sentence_length"], json!(2.33));
    assert_eq!(json["uniqueness_ratio"], json!(0.57));
    assert!((result.style.avg_sentence_length - 7.0 / 3.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_toJson_shouldKeepLexiconColumnOrder() -> Result<()> {
    let result = default_analyzer()?.analyze("Ce bucurie!")?;
    let text = result.to_json(false)?;

    let furie = text.find("\"Furie\"").expect("Furie present");
    let negativitate = text.find("\"Negativitate\"").expect("Negativitate present");
    assert!(furie < negativitate);
    Ok(())
}

#[test]
fn test_analyze_withFailingAnnotator_shouldPropagateError() {
    let analyzer = DocumentAnalyzer::new(
        Arc::new(FailingAnnotator),
        Arc::new(WhitespaceLemmatizer::new()),
        lexicon(),
        &AnalysisConfig::default(),
    );

    let err = analyzer.analyze("Text.").unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Annotation(AnnotationError::EngineFailure { .. })
    ));
}

#[test]
fn test_analyze_withFailingLemmatizer_shouldReturnNoPartialResult() {
    let analyzer = DocumentAnalyzer::new(
        Arc::new(emostyle::analysis::RuleTagger::default()),
        Arc::new(FailingLemmatizer),
        lexicon(),
        &AnalysisConfig::default(),
    );

    assert!(analyzer.analyze("Prima. A doua.").is_err());
    assert!(analyzer.analyze("").is_ok());
}

#[test]
fn test_analyze_shouldLemmatizeEachSentenceSeparately() -> Result<()> {
    let lemmatizer = Arc::new(WhitespaceLemmatizer::new());
    let analyzer = DocumentAnalyzer::new(
        Arc::new(emostyle::analysis::RuleTagger::default()),
        lemmatizer.clone(),
        lexicon(),
        &AnalysisConfig::default(),
    );

    analyzer.analyze("Unu. Doi. Trei.")?;
    assert_eq!(lemmatizer.call_count(), 3);
    Ok(())
}

#[test]
fn test_analyzerFromConfig_withZeroSmoothingWindow_shouldReturnConfigError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_test_config(temp_dir.path())?;
    config.analysis.smoothing_window = 0;

    let err = DocumentAnalyzer::from_config(&config).err().expect("configuration is rejected");
    assert!(matches!(err, AppError::Config(ref message) if message.contains("Smoothing window")));
    Ok(())
}
