#[cfg(test)]
mod tests {
    use farm_advisor::config::Config;
    use farm_advisor::hooks::use_advice::{AdviceAction, AdviceSink, AdviceState};
    use farm_advisor::hooks::use_submission::{
        SubmissionAction, SubmissionState, complete_submission,
    };
    use farm_advisor::models::{
        advice::{AdviceResponse, Metrics, parse_sections},
        error::AppError,
        form::{AdviceRequest, FormInput},
    };
    use farm_advisor::services::api::{decode_reply, error_for_status};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::functional::Reducible;

    // Helper function to create a filled-in form
    fn create_test_form() -> FormInput {
        FormInput {
            location: "California".to_string(),
            crop: "Tomatoes".to_string(),
            soil_type: "Loamy".to_string(),
            season: "Spring".to_string(),
            water_availability: "Medium".to_string(),
            previous_crop: "Wheat".to_string(),
            pest_issues: "Aphids".to_string(),
        }
    }

    // In-memory advice store driven by the same reducer as the app
    #[derive(Default)]
    struct TestStore(RefCell<Rc<AdviceState>>);

    impl TestStore {
        fn state(&self) -> Rc<AdviceState> {
            Rc::clone(&self.0.borrow())
        }
    }

    impl AdviceSink for TestStore {
        fn update(&self, advice: String, metrics: Metrics, sources: Vec<String>) {
            let next = self
                .state()
                .reduce(AdviceAction::Update(AdviceResponse::new(advice, metrics, sources)));
            *self.0.borrow_mut() = next;
        }
    }

    // ===== Request Tests =====

    #[test]
    fn test_query_template() {
        let form = create_test_form();
        assert_eq!(
            form.to_query(),
            "Location: California, Crop: Tomatoes, Soil Type: Loamy, Season: Spring, \
             Water Availability: Medium, Previous Crop: Wheat, Pest Issues: Aphids"
        );
    }

    #[test]
    fn test_request_body() {
        let form = create_test_form();
        let body = serde_json::to_value(AdviceRequest::from(&form)).unwrap();

        assert_eq!(body, json!({ "input": form.to_query() }));
    }

    #[test]
    fn test_query_with_empty_optional_fields() {
        let form = FormInput {
            previous_crop: String::new(),
            pest_issues: String::new(),
            ..create_test_form()
        };

        assert!(form.is_complete());
        assert!(form.to_query().ends_with("Previous Crop: , Pest Issues: "));
    }

    // ===== Response Decoding Tests =====

    #[test]
    fn test_full_response_deserialization() {
        let json = r#"{
            "advice": "Irrigation\n- Water early",
            "metrics": {"water_use": 12.345, "ph_level": null, "rating": "Good"},
            "research_sources": ["https://example.org/paper"]
        }"#;

        let response = decode_reply(json).unwrap();
        assert_eq!(response.advice_text(), Some("Irrigation\n- Water early"));
        assert_eq!(response.metrics.len(), 3);
        assert_eq!(response.research_sources, vec!["https://example.org/paper"]);
    }

    #[test]
    fn test_missing_optional_fields() {
        let response = decode_reply(r#"{"advice": "A\n- x"}"#).unwrap();
        assert!(response.metrics.is_empty());
        assert!(response.research_sources.is_empty());

        let response =
            decode_reply(r#"{"advice": "A", "metrics": null, "research_sources": null}"#).unwrap();
        assert!(response.metrics.is_empty());
        assert!(response.research_sources.is_empty());
    }

    #[test]
    fn test_metric_order_follows_backend() {
        let response =
            decode_reply(r#"{"advice": "A", "metrics": {"zeta": 1, "alpha": 2}}"#).unwrap();
        let labels: Vec<String> = response
            .metric_cards()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["Zeta", "Alpha"]);
    }

    // ===== Renderer Tests =====

    #[test]
    fn test_two_sections_with_one_item_each() {
        let sections = parse_sections("A\n- x\n\nB\n- y");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "A");
        assert_eq!(sections[0].items, vec!["- x"]);
        assert_eq!(sections[1].title, "B");
        assert_eq!(sections[1].items, vec!["- y"]);
    }

    #[test]
    fn test_items_are_trimmed() {
        let sections = parse_sections("Soil\n   - add compost   \n\tcheck pH");
        assert_eq!(sections[0].items, vec!["- add compost", "check pH"]);
    }

    #[test]
    fn test_null_metric_is_omitted() {
        let mut metrics = Metrics::new();
        metrics.insert("water_use".to_string(), json!(12.345));
        metrics.insert("ph_level".to_string(), json!(null));

        let response = AdviceResponse::new("A", metrics, vec![]);
        let cards = response.metric_cards();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].label, "Water Use");
        assert_eq!(cards[0].value, "12.3");
    }

    #[test]
    fn test_exact_ties_round_up() {
        let response =
            decode_reply(r#"{"advice": "A", "metrics": {"a": 0.25, "b": 2.25, "c": 12.45}}"#)
                .unwrap();
        let values: Vec<String> = response
            .metric_cards()
            .into_iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(values, vec!["0.3", "2.3", "12.4"]);
    }

    #[test]
    fn test_single_research_source_link() {
        let response =
            decode_reply(r#"{"advice": "A", "research_sources": ["https://example.org/x"]}"#)
                .unwrap();
        let links = response.research_links().unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "https://example.org/x");
        assert_eq!(links[0].text, "https://example.org/x");
    }

    #[test]
    fn test_research_section_hidden_without_sources() {
        for body in [
            r#"{"advice": "A"}"#,
            r#"{"advice": "A", "research_sources": []}"#,
        ] {
            assert!(decode_reply(body).unwrap().research_links().is_none());
        }
    }

    #[test]
    fn test_placeholder_until_advice_arrives() {
        let store = TestStore::default();
        assert!(store.state().displayed().is_none());

        complete_submission(&store, decode_reply(r#"{"advice": "A\n- x"}"#));
        assert!(store.state().displayed().is_some());
    }

    #[test]
    fn test_text_metric_rendered_verbatim() {
        let mut metrics = Metrics::new();
        metrics.insert("sustainability_score".to_string(), json!("High"));

        let cards = AdviceResponse::new("A", metrics, vec![]).metric_cards();
        assert_eq!(cards[0].label, "Sustainability Score");
        assert_eq!(cards[0].value, "High");
    }

    // ===== Error Handling Tests =====

    #[test]
    fn test_backend_error_leaves_state_untouched() {
        let store = TestStore::default();
        let action = complete_submission(
            &store,
            decode_reply(r#"{"advice": "Previous\n- keep me", "metrics": {"yield": 3}}"#),
        );
        assert_eq!(action, SubmissionAction::Succeeded);
        let before = store.state();

        let action = complete_submission(&store, decode_reply(r#"{"error": "Invalid crop"}"#));
        assert_eq!(action, SubmissionAction::Failed("Invalid crop".to_string()));
        assert_eq!(store.state(), before);
        assert_eq!(
            store.state().latest().unwrap().advice_text(),
            Some("Previous\n- keep me")
        );
    }

    #[test]
    fn test_failed_status_leaves_state_untouched() {
        let store = TestStore::default();
        let action = complete_submission(&store, Err(error_for_status(503, "unavailable")));

        assert_eq!(
            action,
            SubmissionAction::Failed(Config::GENERIC_FAILURE_MESSAGE.to_string())
        );
        assert!(store.state().latest().is_none());
    }

    #[test]
    fn test_transport_failures_use_generic_message() {
        let errors = [
            AppError::Network("connection refused".to_string()),
            AppError::Parse("expected value".to_string()),
            error_for_status(502, "Bad Gateway"),
        ];

        for err in errors {
            assert_eq!(err.user_message(), Config::GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_structured_error_on_failure_status() {
        let err = error_for_status(400, r#"{"error": "Missing input parameter"}"#);
        assert_eq!(err, AppError::Backend("Missing input parameter".to_string()));
    }

    #[test]
    fn test_app_error_display() {
        let error = AppError::Backend("Invalid crop".to_string());
        assert_eq!(error.to_string(), "Backend error: Invalid crop");

        let error = AppError::Status {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(error.to_string(), "Unexpected status 500: oops");
    }

    // ===== State Tests =====

    #[test]
    fn test_each_update_bumps_revision() {
        let state = Rc::new(AdviceState::default());
        let same = AdviceResponse::new("A", Metrics::new(), vec![]);

        let state = state.reduce(AdviceAction::Update(same.clone()));
        let state = state.reduce(AdviceAction::Update(same));
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn test_submission_lifecycle() {
        let idle = Rc::new(SubmissionState::default());
        assert!(!idle.in_flight);

        let started = idle.reduce(SubmissionAction::Started);
        assert!(started.in_flight);

        let failed = started.reduce(SubmissionAction::Failed("Invalid crop".to_string()));
        assert!(!failed.in_flight);
        assert_eq!(failed.error.as_deref(), Some("Invalid crop"));

        let retried = failed.reduce(SubmissionAction::Started);
        assert!(retried.in_flight);
        assert!(retried.error.is_none());

        let done = retried.reduce(SubmissionAction::Succeeded);
        assert!(!done.in_flight);
        assert!(done.error.is_none());
    }
}
