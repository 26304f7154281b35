use semporna::domain::{
    CUSTOMER_INSIGHT_HEADING, SERVICE_EVALUATION_HEADING, render_markdown,
};

#[test]
fn given_two_results_when_rendering_then_document_matches_fixed_layout() {
    let content = render_markdown("Good service.", "Happy customer.");

    assert_eq!(
        content,
        "# Service Evaluation\nGood service.\n\n# Customer Insight\nHappy customer.\n"
    );
}

#[test]
fn given_rendered_report_then_each_heading_appears_exactly_once() {
    let content = render_markdown("Good service.", "Happy customer.");

    let service_heading = format!("# {}", SERVICE_EVALUATION_HEADING);
    let insight_heading = format!("# {}", CUSTOMER_INSIGHT_HEADING);

    assert_eq!(content.matches(&service_heading).count(), 1);
    assert_eq!(content.matches(&insight_heading).count(), 1);
}

#[test]
fn given_rendered_report_then_service_evaluation_precedes_customer_insight() {
    let content = render_markdown("Good service.", "Happy customer.");

    let service_at = content.find(SERVICE_EVALUATION_HEADING).unwrap();
    let insight_at = content.find(CUSTOMER_INSIGHT_HEADING).unwrap();

    assert!(service_at < insight_at);
}
