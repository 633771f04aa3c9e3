//! SMTP session handling
//!
//! A delivery opens its own connection, runs the exchange and closes the
//! connection again before returning. The session is consumed by
//! [`RelaySession::close`], so it is released exactly once on every path.

use lettre::{
    Message,
    transport::smtp::{
        authentication::{Credentials, DEFAULT_MECHANISMS},
        client::{SmtpConnection, TlsParameters},
        extension::ClientId,
    },
};

use crate::{DeliveryError, DeliveryResult, MailConfig};

pub trait Relay {
    type Session: RelaySession;

    fn connect(&self, config: &MailConfig) -> Result<Self::Session, DeliveryError>;
}

pub trait RelaySession {
    fn starttls(&mut self, domain: &str) -> DeliveryResult;
    fn authenticate(&mut self, credentials: &Credentials) -> DeliveryResult;
    fn transmit(&mut self, message: &Message) -> DeliveryResult;
    fn close(self);
}

/// Run one delivery: connect, optional STARTTLS, optional AUTH, send, close.
pub fn deliver<R: Relay>(relay: &R, config: &MailConfig, message: &Message) -> DeliveryResult {
    let mut session = relay.connect(config)?;
    let result = exchange(&mut session, config, message);
    session.close();

    result
}

fn exchange<S: RelaySession>(
    session: &mut S,
    config: &MailConfig,
    message: &Message,
) -> DeliveryResult {
    if config.use_tls {
        session.starttls(&config.host)?;
    }

    if let Some(credentials) = config.credentials() {
        session.authenticate(&credentials)?;
    }

    session.transmit(message)
}

/// Plain TCP relay, upgraded in-session when `use_tls` is set
#[derive(Debug, Default, Clone, Copy)]
pub struct SmtpRelay;

impl Relay for SmtpRelay {
    type Session = SmtpSession;

    fn connect(&self, config: &MailConfig) -> Result<Self::Session, DeliveryError> {
        let hello = ClientId::default();
        let connection = SmtpConnection::connect(
            (config.host.as_str(), config.port),
            config.timeout(),
            &hello,
            None,
            None,
        )
        .map_err(|e| DeliveryError::Connect {
            host: config.host.to_owned(),
            port: config.port,
            source: Box::new(e),
        })?;

        Ok(SmtpSession { connection, hello })
    }
}

pub struct SmtpSession {
    connection: SmtpConnection,
    hello: ClientId,
}

impl RelaySession for SmtpSession {
    fn starttls(&mut self, domain: &str) -> DeliveryResult {
        let parameters = TlsParameters::new(domain.to_owned())
            .map_err(|e| DeliveryError::Tls(Box::new(e)))?;

        self.connection
            .starttls(&parameters, &self.hello)
            .map_err(|e| DeliveryError::Tls(Box::new(e)))
    }

    fn authenticate(&mut self, credentials: &Credentials) -> DeliveryResult {
        self.connection
            .auth(DEFAULT_MECHANISMS, credentials)
            .map(|_| ())
            .map_err(|e| DeliveryError::Auth(Box::new(e)))
    }

    fn transmit(&mut self, message: &Message) -> DeliveryResult {
        self.connection
            .send(message.envelope(), &message.formatted())
            .map(|_| ())
            .map_err(|e| DeliveryError::Send(Box::new(e)))
    }

    fn close(mut self) {
        if self.connection.has_broken() {
            self.connection.abort();
            return;
        }

        if let Err(err) = self.connection.quit() {
            tracing::debug!(error = %err, "QUIT failed, aborting connection");
            self.connection.abort();
        }
    }
}
