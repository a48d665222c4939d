use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    email_client::EmailClient,
    routes::{health_check, relay_contact, ContactInbox},
};

/// A running contact relay
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build an HTTP server running the relay. The behavior of the app is
    /// configured through the `settings` argument.
    ///
    /// Fails if the email settings are invalid or the address can't be bound.
    pub async fn build(settings: Settings) -> Result<Self, anyhow::Error> {
        let email_client = settings.email_client.client()?;
        let inbox = settings
            .email_client
            .recipient()
            .map_err(anyhow::Error::msg)?;

        let app_config = settings.application;
        let app_address = format!("{}:{}", &app_config.host, app_config.port);
        let listener = TcpListener::bind(app_address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, email_client, ContactInbox(inbox))?;
        Ok(Self { port, server })
    }

    /// The port that the app is listening on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Listen and handle requests until we receive a stop signal
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Starts a server, listening on `listener`, running in the background and returns it
fn run(
    listener: TcpListener,
    email_client: EmailClient,
    inbox: ContactInbox,
) -> std::io::Result<Server> {
    let email_client = web::Data::new(email_client);
    let inbox = web::Data::new(inbox);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(relay_contact)
            .app_data(email_client.clone())
            .app_data(inbox.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
