use crate::app;
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

fn jane() -> String {
    serde_json::json!({
        "name": "Jane",
        "email": "jane@example.com",
        "message": "Do you ship to Norway?"
    })
    .to_string()
}

#[actix_web::test]
async fn contact_returns_a_200_for_a_valid_submission() {
    let app = app::spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    let response = app
        .post_contact(jane())
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
}

#[actix_web::test]
async fn contact_forwards_the_submission_as_one_email() {
    let app = app::spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_contact(jane())
        .await
        .expect("Failed to execute request");

    let emails = app.sent_emails().await;
    let email = &emails[0];

    assert_eq!(email["From"], "hello@yourdomain.com");
    assert_eq!(email["To"], "sales@yourdomain.com");
    assert_eq!(email["ReplyTo"], "jane@example.com");
    assert_eq!(email["Subject"], "New Customer: Jane");
    for body in ["TextBody", "HtmlBody"] {
        let body = email[body].as_str().expect("Email body is not a string");
        assert!(body.contains("Jane"));
        assert!(body.contains("jane@example.com"));
        assert!(body.contains("Do you ship to Norway?"));
    }
}

#[actix_web::test]
async fn contact_returns_a_400_when_data_is_missing() {
    let app = app::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (r#"{"name":"Jane","email":"jane@example.com"}"#, "missing the message"),
        (r#"{"name":"Jane","message":"hi"}"#, "missing the email"),
        (r#"{"email":"jane@example.com","message":"hi"}"#, "missing the name"),
        ("{}", "missing every field"),
        ("not json", "not JSON at all"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app
            .post_contact(invalid_body.into())
            .await
            .expect("Failed to execute request");

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with a 400 Bad Request when the payload was {}.",
            error_message
        );
    }
}

#[actix_web::test]
async fn contact_returns_a_400_when_fields_are_invalid() {
    let app = app::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (
            r#"{"name":"","email":"jane@example.com","message":"hi"}"#,
            "empty name",
        ),
        (
            r#"{"name":"  ","email":"jane@example.com","message":"hi"}"#,
            "whitespace name",
        ),
        (r#"{"name":"Jane","email":"","message":"hi"}"#, "empty email"),
        (
            r#"{"name":"Jane","email":"definitely-not-an-email","message":"hi"}"#,
            "invalid email",
        ),
        (
            r#"{"name":"Jane","email":"jane@example.com","message":""}"#,
            "empty message",
        ),
    ];

    for (body, description) in test_cases {
        let response = app
            .post_contact(body.into())
            .await
            .expect("Failed to execute request");

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with a 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[actix_web::test]
async fn contact_returns_a_500_when_the_email_cannot_be_sent() {
    let app = app::spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_contact(jane())
        .await
        .expect("Failed to execute request");

    assert_eq!(500, response.status().as_u16());
}
