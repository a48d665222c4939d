use crate::app;
use contact_form::contact_client::SubmissionError;
use contact_form::domain::ContactForm;
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

#[actix_web::test]
async fn a_valid_form_reaches_the_inbox_and_is_cleared() {
    let app = app::spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut form = ContactForm::new("Jane", "jane@example.com", "hi");
    app.contact_client
        .submit(&mut form)
        .await
        .expect("Submission failed");

    assert!(form.is_empty());
    let emails = app.sent_emails().await;
    assert_eq!(emails[0]["ReplyTo"], "jane@example.com");
}

#[actix_web::test]
async fn a_relay_failure_keeps_the_form_filled_in() {
    let app = app::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.email_server)
        .await;

    let mut form = ContactForm::new("Jane", "jane@example.com", "hi");
    let error = app
        .contact_client
        .submit(&mut form)
        .await
        .expect_err("Submission should have failed");

    assert!(matches!(error, SubmissionError::Transport(_)));
    assert_eq!(form, ContactForm::new("Jane", "jane@example.com", "hi"));
}

#[actix_web::test]
async fn a_form_the_relay_rejects_is_reported_as_a_generic_error() {
    let app = app::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Passes the form's checks, but the relay does not accept whitespace-only names.
    let mut form = ContactForm::new(" ", "jane@example.com", "hi");
    let error = app
        .contact_client
        .submit(&mut form)
        .await
        .expect_err("Submission should have failed");

    assert_eq!(error.to_string(), "Error - something went wrong");
    assert!(!form.is_empty());
}

#[actix_web::test]
async fn a_name_with_punctuation_reaches_the_inbox() {
    let app = app::spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut form = ContactForm::new("Jane (Acme Corp)", "jane@example.com", "hi");
    app.contact_client
        .submit(&mut form)
        .await
        .expect("Submission failed");

    assert!(form.is_empty());
    let emails = app.sent_emails().await;
    assert_eq!(emails[0]["Subject"], "New Customer: Jane (Acme Corp)");
}
