//! Best-effort SMTP notifier
//!
//! Sends the address-update mail through a plain local relay: no TLS,
//! no authentication. Delivery failures surface as errors that the
//! caller logs and otherwise ignores.

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
};
use tracing::{debug, instrument, trace};

use application::error::ApplicationError;
use application::ports::NotificationPort;

use crate::config::NotificationConfig;

/// Notification adapter talking SMTP to a local relay
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    config: NotificationConfig,
}

impl SmtpNotifier {
    /// Create a notifier with the given configuration
    pub const fn new(config: NotificationConfig) -> Self {
        Self { config }
    }

    /// Builds the message in RFC 5322 format
    fn build_message(&self, address: &str, raw_input: &str) -> String {
        format!(
            "From: {}\r\n\
             To: {}\r\n\
             Subject: {}\r\n\
             MIME-Version: 1.0\r\n\
             Content-Type: text/plain; charset=utf-8\r\n\
             Content-Transfer-Encoding: 8bit\r\n\
             \r\n\
             The monitored address was updated.\r\n\
             \r\n\
             Saved address: {}\r\n\
             Raw input: {}\r\n",
            self.config.from, self.config.to, self.config.subject, address, raw_input
        )
    }

    async fn send_smtp(&self, content: &str) -> Result<(), ApplicationError> {
        let addr = format!("{}:{}", self.config.smtp_host, self.config.smtp_port);

        let stream = TcpStream::connect(&addr)
            .await
            .map_err(|e| ApplicationError::Internal(format!("SMTP connection failed: {e}")))?;

        let (reader, mut writer) = tokio::io::split(stream);
        let mut reader = BufReader::new(reader);

        Self::expect_response(&mut reader, "220").await?;

        Self::send_command(&mut writer, "HELO windlantern").await?;
        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, &format!("MAIL FROM:<{}>", self.config.from)).await?;
        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, &format!("RCPT TO:<{}>", self.config.to)).await?;
        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, "DATA").await?;
        Self::expect_response(&mut reader, "354").await?;

        // Escape dots at the start of lines
        let escaped_content = content.replace("\r\n.", "\r\n..");
        writer
            .write_all(escaped_content.as_bytes())
            .await
            .map_err(|e| ApplicationError::Internal(format!("Failed to send content: {e}")))?;

        // End DATA with <CRLF>.<CRLF>
        writer
            .write_all(b"\r\n.\r\n")
            .await
            .map_err(|e| ApplicationError::Internal(format!("Failed to end DATA: {e}")))?;
        writer.flush().await.ok();

        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, "QUIT").await?;
        // Don't wait for the QUIT response, the server may close first

        Ok(())
    }

    async fn send_command<W>(writer: &mut W, command: &str) -> Result<(), ApplicationError>
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        trace!(command = %command.split(' ').next().unwrap_or(command), "Sending SMTP command");
        writer
            .write_all(format!("{command}\r\n").as_bytes())
            .await
            .map_err(|e| ApplicationError::Internal(format!("Failed to send command: {e}")))?;
        writer.flush().await.ok();
        Ok(())
    }

    async fn read_response<R>(reader: &mut BufReader<R>) -> Result<String, ApplicationError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let mut response = String::new();
        loop {
            let mut line = String::new();
            reader
                .read_line(&mut line)
                .await
                .map_err(|e| ApplicationError::Internal(format!("Failed to read response: {e}")))?;

            trace!(line = %line.trim(), "SMTP response");
            response.push_str(&line);

            // Last line of a multi-line reply has no hyphen after the code
            if line.len() >= 4 && line.chars().nth(3) != Some('-') {
                break;
            }
        }
        Ok(response)
    }

    async fn expect_response<R>(
        reader: &mut BufReader<R>,
        expected_code: &str,
    ) -> Result<(), ApplicationError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let response = Self::read_response(reader).await?;
        if !response.starts_with(expected_code) {
            return Err(ApplicationError::Internal(format!(
                "SMTP expected {expected_code}, got: {response}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationPort for SmtpNotifier {
    #[instrument(skip(self, address, raw_input))]
    async fn address_updated(
        &self,
        address: &str,
        raw_input: &str,
    ) -> Result<(), ApplicationError> {
        if self.config.to.is_empty() {
            return Err(ApplicationError::Configuration(
                "notification recipient not configured".to_string(),
            ));
        }

        let content = self.build_message(address, raw_input);
        self.send_smtp(&content).await?;

        debug!(to = %self.config.to, "Address-update notification sent");
        Ok(())
    }
}
