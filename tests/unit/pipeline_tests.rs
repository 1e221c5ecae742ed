/*!
 * Property tests for the analysis pipeline stages
 */

use std::sync::Arc;

use anyhow::Result;
use rand::seq::SliceRandom;

use emostyle::analysis::annotation::{PosTag, RuleTagger, SuffixLemmatizer};
use emostyle::analysis::scorer::EmotionScorer;
use emostyle::analysis::segmenter::split_into_sentences;
use emostyle::analysis::smoothing::TemporalSmoother;
use emostyle::analysis::{DocumentAnalyzer, EmotionLexicon};
use emostyle::app_config::{AnalysisConfig, LexiconConfig};
use crate::common::{self, mock_services::FixedTagAnnotator};

const TEXTS: &[&str] = &[
    common::SAMPLE_DOCUMENT,
    "Unu. Doi doi! Trei trei trei? Patru patru patru patru.",
    "Fără punct la final",
    "Ce frică!Ce bucurie?  Și apoi   liniște.",
    "",
];

fn sample_lexicon() -> Arc<EmotionLexicon> {
    Arc::new(
        EmotionLexicon::parse(common::SAMPLE_LEXICON, &LexiconConfig::default())
            .expect("sample lexicon parses"),
    )
}

fn analyzer_with_window(window: usize) -> DocumentAnalyzer {
    let config = AnalysisConfig {
        smoothing_window: window,
        ..AnalysisConfig::default()
    };
    DocumentAnalyzer::new(
        Arc::new(RuleTagger::default()),
        Arc::new(SuffixLemmatizer::default()),
        sample_lexicon(),
        &config,
    )
}

#[test]
fn test_segmentation_shouldBeIdempotent() {
    for text in TEXTS {
        let sentences = split_into_sentences(text);
        let rejoined = sentences.join(" ");
        assert_eq!(split_into_sentences(&rejoined), sentences, "text: {:?}", text);
    }
}

#[test]
fn test_styleStats_invariants_shouldHoldForAllTexts() -> Result<()> {
    let analyzer = analyzer_with_window(2);
    for text in TEXTS {
        let stats = analyzer.analyze(text)?.style;

        assert_eq!(stats.sentence_count, split_into_sentences(text).len());
        assert!((0.0..=1.0).contains(&stats.uniqueness_ratio), "text: {:?}", text);
        assert!(stats.unique_words <= stats.word_count);
        assert_eq!(stats.filler_words as i64 + stats.content_words, stats.word_count as i64);
        assert_eq!(
            stats.sentence_length_distribution.iter().map(|(_, freq)| freq).sum::<usize>(),
            stats.sentence_count
        );
        assert_eq!(
            stats.sentence_length_distribution.iter().map(|(len, freq)| len * freq).sum::<usize>(),
            stats.word_count
        );
        assert_eq!(stats.sentence_types.total(), stats.sentence_count);
        assert!(stats.most_common_words.len() <= 10);
    }
    Ok(())
}

#[test]
fn test_scorer_withShuffledLemmas_shouldNotChange() {
    let lexicon = sample_lexicon();
    let scorer = EmotionScorer::new(&lexicon);
    let mut lemmas = vec!["frică", "bucurie", "necunoscut", "frică", "tristețe", "furie", "iubire"];
    let expected = scorer.score(&lemmas);

    let mut rng = rand::rng();
    for _ in 0..20 {
        lemmas.shuffle(&mut rng);
        assert_eq!(scorer.score(&lemmas), expected);
    }
}

#[test]
fn test_aggregate_shouldNotDependOnSmoothingWindow() -> Result<()> {
    let sentences: Vec<String> = split_into_sentences(common::SAMPLE_DOCUMENT);

    let narrow = analyzer_with_window(1).analyze_emotions(&sentences)?;
    let wide = analyzer_with_window(5).analyze_emotions(&sentences)?;
    assert_eq!(narrow.total_emotion_distribution, wide.total_emotion_distribution);

    let mut raw_sum = sample_lexicon().zero_vector();
    for entry in &narrow.emotion_over_sentences {
        raw_sum += &entry.scores;
    }
    assert_eq!(narrow.total_emotion_distribution, raw_sum);
    Ok(())
}

#[test]
fn test_smoothing_withWindowTwo_shouldAverageNeighbours() -> Result<()> {
    let sentences = split_into_sentences(common::SAMPLE_DOCUMENT);
    let timeline = analyzer_with_window(2)
        .analyze_emotions(&sentences)?
        .emotion_over_sentences;

    assert_eq!(timeline[0].smoothed_scores, timeline[0].scores);
    for i in 1..timeline.len() {
        let expected = {
            let mut sum = timeline[i - 1].scores.clone();
            sum += &timeline[i].scores;
            sum.scaled(0.5)
        };
        assert_eq!(timeline[i].smoothed_scores, expected);
    }

    let raw: Vec<_> = timeline.iter().map(|e| e.scores.clone()).collect();
    let smoothed = TemporalSmoother::new(2).smooth(&raw);
    assert_eq!(smoothed.len(), raw.len());
    Ok(())
}

#[test]
fn test_analyzer_withMockServices_shouldUseInjectedAnnotator() -> Result<()> {
    let analyzer = DocumentAnalyzer::new(
        Arc::new(FixedTagAnnotator::new(PosTag::Adp)),
        common::mock_services::whitespace_lemmatizer(),
        sample_lexicon(),
        &AnalysisConfig::default(),
    );

    let stats = analyzer.analyze("Frică și bucurie. Atât.")?.style;
    assert_eq!(stats.word_count, 4);
    assert_eq!(stats.filler_words, 4);
    assert_eq!(stats.content_words, 0);
    assert_eq!(stats.concrete_words, 0);
    Ok(())
}
