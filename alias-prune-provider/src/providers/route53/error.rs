//! Route 53 error mapping

use std::fmt::Debug;

use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_route53::operation::change_resource_record_sets::ChangeResourceRecordSetsError;

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::Route53Provider;

/// Route 53 error code mapping
/// Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Authentication error
            Some(
                "InvalidClientTokenId"
                | "UnrecognizedClientException"
                | "SignatureDoesNotMatch"
                | "ExpiredToken"
                | "MissingAuthenticationToken",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // PriorRequestNotComplete: a previous change on the zone is still being applied
            Some(
                "Throttling"
                | "ThrottlingException"
                | "PriorRequestNotComplete"
                | "TooManyRequestsException",
            ) => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("NoSuchHostedZone" | "HostedZoneNotFound") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            Some("InvalidChangeBatch") => ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                messages: vec![raw.message],
            },

            Some("InvalidInput" | "InvalidArgument" | "InvalidPaginationToken") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: context.param.unwrap_or_else(|| "request".to_string()),
                    detail: raw.message,
                }
            }

            // Other error fallback
            _ => self.unknown_error(raw),
        }
    }
}

impl Route53Provider {
    /// 将 SDK 错误映射到统一错误类型
    pub(crate) fn map_sdk_error<E, R>(
        &self,
        err: SdkError<E, R>,
        context: ErrorContext,
    ) -> ProviderError
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: Debug + 'static,
    {
        let detail = truncate_for_log(&DisplayErrorContext(&err).to_string());

        match &err {
            SdkError::TimeoutError(_) => ProviderError::Timeout {
                provider: self.provider_name().to_string(),
                detail,
            },
            SdkError::DispatchFailure(_) => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail,
            },
            SdkError::ResponseError(_) => self.parse_error(detail),
            SdkError::ConstructionFailure(_) => self.serialization_error(detail),
            _ => {
                let message = err.message().map_or(detail, str::to_string);
                let raw = match err.code() {
                    Some(code) => RawApiError::with_code(code, message),
                    None => RawApiError::new(message),
                };
                log::debug!("[route53] API error: code={:?}", raw.code);
                self.map_error(raw, context)
            }
        }
    }

    /// `ChangeResourceRecordSets` 专用映射，保留 `InvalidChangeBatch` 的逐条消息
    pub(crate) fn map_change_error<R>(
        &self,
        err: SdkError<ChangeResourceRecordSetsError, R>,
        context: ErrorContext,
    ) -> ProviderError
    where
        R: Debug + 'static,
    {
        if let Some(ChangeResourceRecordSetsError::InvalidChangeBatch(invalid)) =
            err.as_service_error()
        {
            let mut messages = invalid.messages().to_vec();
            if messages.is_empty() {
                messages.extend(invalid.message().map(str::to_string));
            }
            return ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                messages,
            };
        }

        self.map_sdk_error(err, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_route53::config::{BehaviorVersion, Region};

    fn provider() -> Route53Provider {
        let config = aws_sdk_route53::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        Route53Provider::new(aws_sdk_route53::Client::from_conf(config))
    }

    fn ctx() -> ErrorContext {
        ErrorContext::default()
    }

    #[test]
    fn auth_codes_map_to_invalid_credentials() {
        let p = provider();
        for code in [
            "InvalidClientTokenId",
            "UnrecognizedClientException",
            "SignatureDoesNotMatch",
            "ExpiredToken",
            "MissingAuthenticationToken",
        ] {
            let err = p.map_error(RawApiError::with_code(code, "denied"), ctx());
            assert!(
                matches!(err, ProviderError::InvalidCredentials { .. }),
                "{code} => {err:?}"
            );
        }
    }

    #[test]
    fn access_denied_maps_to_permission_denied() {
        let err = provider().map_error(
            RawApiError::with_code("AccessDenied", "not authorized to perform route53:ChangeResourceRecordSets"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    #[test]
    fn throttling_and_prior_request_map_to_rate_limited() {
        let p = provider();
        for code in ["Throttling", "PriorRequestNotComplete"] {
            let err = p.map_error(RawApiError::with_code(code, "slow down"), ctx());
            assert!(matches!(err, ProviderError::RateLimited { .. }), "{code}");
        }
    }

    #[test]
    fn no_such_hosted_zone_uses_context_zone() {
        let err = provider().map_error(
            RawApiError::with_code("NoSuchHostedZone", "No hosted zone found with ID: Z9"),
            ErrorContext::zone("Z9"),
        );
        match err {
            ProviderError::ZoneNotFound { zone, .. } => assert_eq!(zone, "Z9"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn invalid_change_batch_code_keeps_message() {
        let err = provider().map_error(
            RawApiError::with_code("InvalidChangeBatch", "record not found"),
            ctx(),
        );
        match err {
            ProviderError::InvalidChangeBatch { messages, .. } => {
                assert_eq!(messages, vec!["record not found".to_string()]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn invalid_input_defaults_param_name() {
        let err = provider().map_error(RawApiError::with_code("InvalidInput", "bad id"), ctx());
        match err {
            ProviderError::InvalidParameter { param, detail, .. } => {
                assert_eq!(param, "request");
                assert_eq!(detail, "bad id");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unmapped_code_falls_back_to_unknown() {
        let err = provider().map_error(RawApiError::with_code("InternalFailure", "boom"), ctx());
        match err {
            ProviderError::Unknown {
                raw_code,
                raw_message,
                ..
            } => {
                assert_eq!(raw_code.as_deref(), Some("InternalFailure"));
                assert_eq!(raw_message, "boom");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_code_falls_back_to_unknown() {
        let err = provider().map_error(RawApiError::new("no code"), ctx());
        assert!(matches!(err, ProviderError::Unknown { raw_code: None, .. }));
    }
}
