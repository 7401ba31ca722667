use chrono::Utc;
use shared_types::{AppError, Choice, ExchangeReceipt, ExchangeRequest, IntakeConfig};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use uuid::Uuid;

use crate::error_convert::ValidateRequest;

/// Shown on the confirmation overlay and returned with every receipt.
pub const RECEIPT_MESSAGE: &str = "Thank you for your interest! We've received your details and \
are on our way to helping you switch to electric. Our team will contact you shortly.";

/// Accepts exchange requests and hands them to the valuation desk.
///
/// The hand-off is simulated by a fixed delay.
#[derive(Debug)]
pub struct ExchangeIntake {
    delay: Duration,
    accepted: AtomicU64,
}

impl ExchangeIntake {
    pub fn new(config: &IntakeConfig) -> Self {
        Self::with_delay(Duration::from_millis(config.simulated_delay_ms))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            accepted: AtomicU64::new(0),
        }
    }

    /// Number of requests accepted since startup.
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    #[tracing::instrument(
        skip(self, request),
        fields(city = request.city.value(), vehicle_type = request.vehicle_type.value())
    )]
    pub async fn submit(&self, request: ExchangeRequest) -> Result<ExchangeReceipt, AppError> {
        request.validate_request()?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let reference = reference_for(Uuid::new_v4());
        let total = self.accepted.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(%reference, total, "exchange request accepted");

        Ok(ExchangeReceipt {
            reference,
            received_at: Utc::now().to_rfc3339(),
            message: RECEIPT_MESSAGE.to_string(),
        })
    }
}

/// `EVX-` followed by the first eight hex digits of `id`, uppercased.
fn reference_for(id: Uuid) -> String {
    let simple = id.simple().to_string();
    format!("EVX-{}", simple[..8].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, City, VehicleColor, VehicleType};

    fn request() -> ExchangeRequest {
        ExchangeRequest {
            full_name: "Sita Sharma".to_string(),
            email: "sita@example.com".to_string(),
            phone: "9841234567".to_string(),
            city: City::Pokhara,
            vehicle_model: "Hyundai Creta".to_string(),
            vehicle_type: VehicleType::Suv,
            make_year: "2019".to_string(),
            vehicle_color: VehicleColor::White,
            km_driven: 45_000,
            expected_valuation: 3_500_000,
            features: None,
            fuel_type: None,
            condition: None,
            accidents: None,
            accident_info: None,
            transmission: None,
            new_vehicle_brand: None,
            new_vehicle_model: None,
            new_vehicle_price_range: None,
            downpayment: None,
            finance: None,
            additional_info: None,
        }
    }

    #[test]
    fn reference_uses_uuid_prefix() {
        let id = Uuid::parse_str("0a1b2c3d-0000-4000-8000-000000000000").unwrap();
        assert_eq!(reference_for(id), "EVX-0A1B2C3D");
    }

    #[tokio::test]
    async fn accepts_valid_request() {
        let intake = ExchangeIntake::with_delay(Duration::ZERO);
        let receipt = intake.submit(request()).await.unwrap();
        assert!(receipt.reference.starts_with("EVX-"));
        assert_eq!(receipt.message, RECEIPT_MESSAGE);
        assert!(chrono::DateTime::parse_from_rfc3339(&receipt.received_at).is_ok());
        assert_eq!(intake.accepted(), 1);
    }

    #[tokio::test]
    async fn rejects_invalid_request_without_counting_it() {
        let intake = ExchangeIntake::with_delay(Duration::ZERO);
        let mut bad = request();
        bad.email = "not-an-email".to_string();
        let err = intake.submit(bad).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert_eq!(intake.accepted(), 0);
    }

    #[tokio::test]
    async fn waits_for_simulated_delay() {
        let intake = ExchangeIntake::with_delay(Duration::from_millis(40));
        let started = std::time::Instant::now();
        intake.submit(request()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    /// Captures `log` records so the accepted line can be counted.
    struct CapturingLogger(std::sync::Mutex<Vec<String>>);

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURED: CapturingLogger = CapturingLogger(std::sync::Mutex::new(Vec::new()));

    #[tokio::test]
    async fn accepted_request_is_logged_at_most_once() {
        let _ = log::set_logger(&CAPTURED);
        log::set_max_level(log::LevelFilter::Trace);

        let intake = ExchangeIntake::with_delay(Duration::ZERO);
        let receipt = intake.submit(request()).await.unwrap();

        let lines = CAPTURED.0.lock().unwrap();
        let mentions = lines.iter().filter(|l| l.contains(&receipt.reference)).count();
        assert!(mentions <= 1, "logged {mentions} times");
    }
}
