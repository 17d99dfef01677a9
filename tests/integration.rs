#![cfg(test)]

use std::sync::Arc;

use async_trait::async_trait;
use carewise::{
    base::{
        config::{Config, ConfigInner},
        types::{Res, Void},
    },
    interaction::advice::AdviceRequest,
    runtime::Runtime,
    service::{
        llm::{AdviceClient, GenericAdviceClient},
        report::{AdviceReport, GenericReportRenderer, ReportClient},
    },
    triage::{ClassificationResult, RuleSet},
};
use mockall::mock;

// Mocks.

// Mock advice client for testing.

mock! {
    pub Advice {}

    #[async_trait]
    impl GenericAdviceClient for Advice {
        async fn generate_advice(&self, symptom_description: &str) -> Res<String>;
        async fn list_models(&self) -> Res<Vec<String>>;
    }
}

// Mock report renderer for testing.

mock! {
    pub Renderer {}

    impl GenericReportRenderer for Renderer {
        fn render(&self, report: &AdviceReport, path: &std::path::Path) -> Void;
    }
}

fn get_mock_advice(advice: &str) -> MockAdvice {
    let advice = advice.to_string();
    let mut mock = MockAdvice::new();

    mock.expect_generate_advice().returning(move |_| Ok(advice.clone()));
    mock.expect_list_models().returning(|| Ok(vec!["gpt-4o-mini".to_string()]));

    mock
}

/// Helper function to set up the test environment with a canned advice reply.
fn setup_test_runtime(advice: &str, classify_advice: bool) -> Runtime {
    let config = Config {
        inner: Arc::new(ConfigInner {
            openai_api_key: "test_key".to_string(),
            classify_advice,
            ..Default::default()
        }),
    };

    Runtime {
        config,
        rules: RuleSet::builtin(),
        llm: AdviceClient::new(Arc::new(get_mock_advice(advice))),
        report: ReportClient::markdown(),
    }
}

#[tokio::test]
async fn test_advice_request_classifies_symptom_text() {
    // The advice text deliberately contains no trigger keywords; the match must
    // come from the user's own description.
    let runtime = setup_test_runtime("Rest, hydrate, and see a doctor if things worsen.", false);

    let request = AdviceRequest {
        symptom_text: "I have fever, body pain, and fatigue".to_string(),
        report_path: None,
    };

    let outcome = runtime.advise(request).await.expect("advice request failed");

    assert_eq!(outcome.classification, ClassificationResult::Matched { label: "Dengue".to_string() });
    assert_eq!(outcome.advice, "Rest, hydrate, and see a doctor if things worsen.");
    assert!(outcome.report_path.is_none());
}

#[tokio::test]
async fn test_classify_advice_flag_switches_input() {
    // With `classify_advice` on, the flu keywords in the generated prose win
    // even though the user described dengue symptoms.
    let runtime = setup_test_runtime("This sounds like a cough with sore throat and chills.", true);

    let request = AdviceRequest {
        symptom_text: "I have fever, body pain, and fatigue".to_string(),
        report_path: None,
    };

    let outcome = runtime.advise(request).await.expect("advice request failed");

    assert_eq!(outcome.classification, ClassificationResult::Matched { label: "Flu-like illness".to_string() });
}

#[tokio::test]
async fn test_no_match_is_a_normal_outcome() {
    let runtime = setup_test_runtime("Nothing concerning here.", false);

    let request = AdviceRequest {
        symptom_text: "mild cough only".to_string(),
        report_path: None,
    };

    let outcome = runtime.advise(request).await.expect("advice request failed");

    assert_eq!(outcome.classification, ClassificationResult::NoMatch);
    assert_eq!(outcome.classification.label(), None);
}

#[tokio::test]
async fn test_blank_input_is_rejected_before_the_model_call() {
    let mut mock = MockAdvice::new();
    mock.expect_generate_advice().times(0);

    let runtime = Runtime {
        config: Config {
            inner: Arc::new(ConfigInner::default()),
        },
        rules: RuleSet::builtin(),
        llm: AdviceClient::new(Arc::new(mock)),
        report: ReportClient::markdown(),
    };

    let request = AdviceRequest {
        symptom_text: "   \n".to_string(),
        report_path: None,
    };

    let result = runtime.advise(request).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_report_renderer_receives_the_classified_exchange() {
    let mut renderer = MockRenderer::new();
    renderer
        .expect_render()
        .withf(|report, path| report.condition.as_deref() == Some("Migraine") && path.ends_with("report.md"))
        .times(1)
        .returning(|_, _| Ok(()));

    let mut runtime = setup_test_runtime("Dim the lights and rest.", false);
    runtime.report = ReportClient::new(Arc::new(renderer));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");

    let request = AdviceRequest {
        symptom_text: "bad headache, nausea, sensitivity to light".to_string(),
        report_path: Some(path.clone()),
    };

    let outcome = runtime.advise(request).await.expect("advice request failed");

    assert_eq!(outcome.report_path, Some(path));
}

#[tokio::test]
async fn test_markdown_report_is_written_end_to_end() {
    let runtime = setup_test_runtime("Sip fluids and rest your stomach.", false);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("HealthAdvice.md");

    let request = AdviceRequest {
        symptom_text: "vomiting and diarrhea, severe dehydration".to_string(),
        report_path: Some(path.clone()),
    };

    runtime.advise(request).await.expect("advice request failed");

    let body = std::fs::read_to_string(&path).expect("report file missing");
    assert!(body.contains("vomiting and diarrhea, severe dehydration"));
    assert!(body.contains("Sip fluids and rest your stomach."));
    assert!(body.contains("Food Poisoning"));
}

#[tokio::test]
async fn test_runtime_loads_rules_from_configured_file() {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
        [[rules]]
        label = "Heat Exhaustion"
        keywords = ["dizziness", "sweating", "thirst"]
        "#
    )
    .unwrap();

    let config = Config {
        inner: Arc::new(ConfigInner {
            openai_api_key: "test_key".to_string(),
            rules_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        }),
    };

    let runtime = Runtime::new(config).expect("runtime construction failed");

    assert_eq!(runtime.rules.len(), 1);
    assert_eq!(runtime.rules.classify("dizziness, sweating, extreme thirst").label(), Some("Heat Exhaustion"));
}
