/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use emostyle::app_config::Config;
use emostyle::app_controller::Controller;
use crate::common;

/// Test the controller initialization with a reachable lexicon
#[test]
fn test_controller_initialization_withTestLexicon_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::create_test_config(temp_dir.path())?;

    let controller = Controller::with_config(config)?;
    assert_eq!(controller.config().analysis.smoothing_window, 2);
    Ok(())
}

/// Test that a missing lexicon aborts before any analysis
#[test]
fn test_controller_initialization_withMissingLexicon_shouldFail() {
    let mut config = Config::default();
    config.lexicon.path = "nowhere/lexicon.csv".into();

    let err = Controller::with_config(config).err().expect("initialization fails");
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to initialize analysis services"));
    assert!(message.contains("lexicon"));
}

/// Test that a broken lemma dictionary aborts initialization
#[test]
fn test_controller_initialization_withBrokenLemmaDictionary_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_test_config(temp_dir.path())?;
    config.annotation.lemma_dictionary =
        Some(common::create_test_file(temp_dir.path(), "lemmas.tsv", "only-one-field\n")?);

    assert!(Controller::with_config(config).is_err());
    Ok(())
}

/// Test analysis of an in-memory document
#[test]
fn test_controller_analyzeText_shouldReturnResult() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path())?)?;

    let result = controller.analyze_text(common::SAMPLE_DOCUMENT)?;
    assert_eq!(result.style.sentence_count, 4);
    Ok(())
}

/// Test single-file mode writing to an output file
#[tokio::test]
async fn test_controller_run_withOutputPath_shouldWriteJson() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path())?)?;
    let input = common::create_test_file(temp_dir.path(), "story.txt", common::SAMPLE_DOCUMENT)?;
    let output = temp_dir.path().join("out/story.json");

    controller.run(input, Some(output.clone()), true, false).await?;

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(json["sentence_count"], 4);
    assert!(json["emotion_analysis"]["emotion_summary"].is_object());
    Ok(())
}

/// Test that an existing output is kept without the force flag
#[tokio::test]
async fn test_controller_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path())?)?;
    let input = common::create_test_file(temp_dir.path(), "story.txt", "Ce bucurie!")?;
    let output = common::create_test_file(temp_dir.path(), "story.json", "old")?;

    controller.run(input.clone(), Some(output.clone()), false, false).await?;
    assert_eq!(std::fs::read_to_string(&output)?, "old");

    controller.run(input, Some(output.clone()), false, true).await?;
    assert_ne!(std::fs::read_to_string(&output)?, "old");
    Ok(())
}

/// Test that a missing input file is an error
#[test]
fn test_controller_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path())?)?;

    let outcome = tokio_test::block_on(controller.run(
        temp_dir.path().join("missing.txt"),
        None,
        false,
        false,
    ));
    assert!(outcome.is_err());
    Ok(())
}

/// Test folder mode over several documents
#[tokio::test]
async fn test_controller_runFolder_shouldWriteOneAnalysisPerDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_test_config(temp_dir.path())?;
    config.analysis.concurrent_documents = 2;
    let controller = Controller::with_config(config)?;

    let corpus = temp_dir.path().join("corpus");
    common::create_test_file(&corpus, "a.txt", "Ana vorbește. Ion pleacă?")?;
    common::create_test_file(&corpus, "b.txt", "Ce frică!")?;
    common::create_test_file(&corpus, "nested/c.txt", common::SAMPLE_DOCUMENT)?;
    common::create_test_file(&corpus, "notes.md", "ignored")?;

    let summary = controller.run_folder(corpus.clone(), false, false).await?;
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);

    assert!(corpus.join("a.analysis.json").is_file());
    assert!(corpus.join("b.analysis.json").is_file());
    assert!(corpus.join("nested/c.analysis.json").is_file());
    assert!(!corpus.join("notes.analysis.json").exists());

    let rerun = controller.run_folder(corpus, false, false).await?;
    assert_eq!(rerun.processed, 0);
    assert_eq!(rerun.skipped, 3);
    Ok(())
}

/// Test folder mode on a directory without documents
#[tokio::test]
async fn test_controller_runFolder_withNoDocuments_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path())?)?;
    let empty = temp_dir.path().join("empty");
    std::fs::create_dir_all(&empty)?;

    assert!(controller.run_folder(empty, false, false).await.is_err());
    Ok(())
}

/// Test the error payload shape
#[test]
fn test_controller_errorPayload_shouldBeSingleErrorField() -> Result<()> {
    let payload: serde_json::Value = serde_json::from_str(&Controller::error_payload("boom"))?;
    assert_eq!(payload, serde_json::json!({ "error": "boom" }));
    Ok(())
}
