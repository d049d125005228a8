//! 邮件服务：通过 SMTP 中继发送账号通知邮件
//!
//! 未配置 SMTP 服务器时静默跳过；发送失败由调用方记录日志，
//! 不影响请求主流程。

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials, Message,
    SmtpTransport, Transport,
};
use secrecy::ExposeSecret;

use crate::config::MailConfig;

/// 邮件错误类型
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Mail task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub struct MailService {
    config: MailConfig,
}

impl MailService {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// 给新建账号发送欢迎邮件，附带生成的初始密码
    pub async fn send_welcome_email(
        &self,
        to: &str,
        first_name: &str,
        password: &str,
    ) -> Result<(), MailError> {
        let Some(server) = self.config.smtp_server.clone() else {
            tracing::debug!("SMTP server not configured, skipping welcome email");
            return Ok(());
        };

        let body = format!(
            "Hello {first_name},\n\n\
             An administrator created an account for you on the booking platform.\n\
             Your login details:\n\n\
             \tEmail: {to}\n\
             \tPassword: {password}\n\n\
             You can sign in at {front_url}\n",
            front_url = self.config.front_url,
        );

        let message = Message::builder()
            .from(format!("Booking <{}>", self.config.smtp_username).parse()?)
            .to(to.parse()?)
            .subject("Your booking platform account")
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        let transport = SmtpTransport::starttls_relay(&server)?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.expose_secret().clone(),
            ))
            .build();

        // SMTP 传输是阻塞 IO，移出异步运行时执行
        tokio::task::spawn_blocking(move || transport.send(&message)).await??;

        tracing::info!(to = %to, "Welcome email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    #[tokio::test]
    async fn test_unconfigured_mail_is_noop() {
        let service = MailService::new(MailConfig {
            smtp_server: None,
            smtp_port: 587,
            smtp_username: "".to_string(),
            smtp_password: Secret::new("".to_string()),
            front_url: "http://localhost:3000".to_string(),
        });

        // 未配置服务器时直接成功，不尝试连接
        service
            .send_welcome_email("a@x.com", "Ada", "secret123")
            .await
            .unwrap();
    }
}
