/*!
 * Tests for loading the emotion lexicon from files
 */

use anyhow::Result;
use emostyle::app_config::LexiconConfig;
use emostyle::analysis::EmotionLexicon;
use emostyle::errors::LexiconError;
use crate::common;

fn config_for(path: std::path::PathBuf) -> LexiconConfig {
    LexiconConfig {
        path,
        ..LexiconConfig::default()
    }
}

#[test]
fn test_lexicon_load_withSampleFile_shouldExposeEmotionColumns() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let lexicon = EmotionLexicon::load(&config_for(common::create_test_lexicon(temp_dir.path())?))?;

    assert_eq!(
        lexicon.emotion_names(),
        &["Furie", "Frica", "Bucurie", "Tristete", "Pozitivitate", "Negativitate"]
    );
    assert_eq!(lexicon.len(), 6);
    assert_eq!(lexicon.lookup("FRICĂ").get("Frica"), Some(1.0));
    Ok(())
}

#[test]
fn test_lexicon_lookup_withAbsentWord_shouldReturnZeroVector() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let lexicon = EmotionLexicon::load(&config_for(common::create_test_lexicon(temp_dir.path())?))?;

    let scores = lexicon.lookup("masă");
    assert!(scores.is_zero());
    assert_eq!(scores.len(), 6);
    Ok(())
}

#[test]
fn test_lexicon_load_withMissingFile_shouldReturnIoError() {
    let err = EmotionLexicon::load(&config_for("does/not/exist.csv".into())).unwrap_err();
    assert!(matches!(err, LexiconError::Io(_)));
}

#[test]
fn test_lexicon_load_withoutWordColumn_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "bad.csv", "id;lemma;pos;Frica;sursa\n1;frică;n;1;x\n")?;

    let err = EmotionLexicon::load(&config_for(path)).unwrap_err();
    assert!(matches!(err, LexiconError::MissingColumn(ref column) if column == "word"));
    Ok(())
}

#[test]
fn test_lexicon_load_withShortRow_shouldReportLine() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "short.csv",
        "id;word;pos;Frica;sursa\n1;frică;n;1;x\n2;bucurie;n\n",
    )?;

    let err = EmotionLexicon::load(&config_for(path)).unwrap_err();
    assert!(matches!(err, LexiconError::MalformedRow { line: 3, found: 3, expected: 5 }));
    Ok(())
}

#[test]
fn test_lexicon_load_withTabDelimiter_shouldHonourConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "tabs.tsv",
        "word\tFrica\tBucurie\nfrică\t2\t0\n",
    )?;
    let config = LexiconConfig {
        path,
        delimiter: '\t',
        leading_metadata_columns: 1,
        trailing_metadata_columns: 0,
        ..LexiconConfig::default()
    };

    let lexicon = EmotionLexicon::load(&config)?;
    assert_eq!(lexicon.emotion_names(), &["Frica", "Bucurie"]);
    assert_eq!(lexicon.lookup("frică").scores(), &[2.0, 0.0]);
    Ok(())
}

#[test]
fn test_lexicon_load_withShippedSample_shouldParse() -> Result<()> {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("data");
    path.push("RoEmoLex.csv");

    let lexicon = EmotionLexicon::load(&config_for(path))?;
    assert_eq!(lexicon.emotion_names().len(), 10);
    assert!(lexicon.contains("bucurie"));
    Ok(())
}
