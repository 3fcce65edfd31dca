use crate::core::service::SurvivalService;
use crate::domain::model::{EmbarkPort, PassengerRecord, Sex, TicketClass};
use crate::domain::ports::{Classifier, Scaler};
use crate::utils::error::{PredictError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, Validate};

/// One form submission: the passenger fields plus the display name. The name
/// is presentation-only and never enters the feature vector.
#[derive(Debug, Clone)]
pub struct FormRequest {
    pub name: String,
    pub sex: Sex,
    pub age: f64,
    pub siblings_spouses: u32,
    pub parents_children: u32,
    pub class: TicketClass,
    pub port: EmbarkPort,
    pub fare: f64,
}

impl Validate for FormRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name).map_err(|_| {
            PredictError::ValidationError {
                message: "Please enter the passenger's name.".to_string(),
            }
        })?;
        // No upper bounds on age or fare; the fitted artifacts accept any
        // non-negative value.
        validate_non_negative("age", self.age).map_err(|_| PredictError::ValidationError {
            message: format!("Age must be a non-negative number, got {}.", self.age),
        })?;
        validate_non_negative("fare", self.fare).map_err(|_| PredictError::ValidationError {
            message: format!("Fare must be a non-negative number, got {}.", self.fare),
        })?;
        Ok(())
    }
}

impl FormRequest {
    pub fn to_record(&self) -> PassengerRecord {
        PassengerRecord {
            class: self.class,
            sex: self.sex,
            age: self.age,
            siblings_spouses: self.siblings_spouses,
            parents_children: self.parents_children,
            fare: self.fare,
            port: self.port,
        }
    }

    /// Validate, predict, and format the user-facing result. Validation
    /// failures block the request before any model work starts.
    pub fn submit<S: Scaler, C: Classifier>(
        &self,
        service: &SurvivalService<S, C>,
    ) -> Result<String> {
        self.validate()?;

        tracing::debug!("Submitting record for: {}", self.name.trim());
        let percentage = service.predict(&self.to_record())?;

        Ok(format!(
            "{}, your survival probability is {:.2}%.",
            self.name.trim(),
            percentage
        ))
    }
}
