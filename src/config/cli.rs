use crate::app::form::FormRequest;
use crate::config::{ArtifactPaths, TomlConfig};
use crate::domain::model::{EmbarkPort, Sex, TicketClass};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::{Parser, ValueEnum};

// CLI-facing choice widgets. Kept separate from the domain enums so the
// library builds without clap; the mapping below is the single place the
// choice labels meet the fitted encodings.

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ClassArg {
    #[value(alias = "1")]
    First,
    #[value(alias = "2")]
    Second,
    #[value(alias = "3")]
    Third,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PortArg {
    #[value(alias = "s")]
    Southampton,
    #[value(alias = "c")]
    Cherbourg,
    #[value(alias = "q")]
    Queenstown,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

impl From<ClassArg> for TicketClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::First => TicketClass::First,
            ClassArg::Second => TicketClass::Second,
            ClassArg::Third => TicketClass::Third,
        }
    }
}

impl From<PortArg> for EmbarkPort {
    fn from(arg: PortArg) -> Self {
        match arg {
            PortArg::Southampton => EmbarkPort::Southampton,
            PortArg::Cherbourg => EmbarkPort::Cherbourg,
            PortArg::Queenstown => EmbarkPort::Queenstown,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "titanic-survival")]
#[command(about = "Estimate a passenger's survival probability from fitted artifacts")]
pub struct CliConfig {
    /// Path to the fitted scaler artifact (JSON)
    #[arg(long, env = "SURVIVAL_SCALER_PATH")]
    pub scaler_path: Option<String>,

    /// Path to the fitted classifier artifact (JSON)
    #[arg(long, env = "SURVIVAL_MODEL_PATH")]
    pub model_path: Option<String>,

    /// TOML config file; flags and env vars take precedence over it
    #[arg(long)]
    pub config: Option<String>,

    /// Passenger name
    #[arg(long)]
    pub name: String,

    #[arg(long, value_enum)]
    pub sex: SexArg,

    #[arg(long, default_value_t = 25.0)]
    pub age: f64,

    /// Siblings/spouses aboard
    #[arg(long, default_value_t = 0)]
    pub sibsp: u32,

    /// Parents/children aboard
    #[arg(long, default_value_t = 0)]
    pub parch: u32,

    /// Ticket class (1/2/3)
    #[arg(long, value_enum)]
    pub class: ClassArg,

    /// Port of embarkation
    #[arg(long, value_enum)]
    pub port: PortArg,

    #[arg(long, default_value_t = 32.0)]
    pub fare: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process resource usage")]
    pub monitor: bool,
}

impl CliConfig {
    /// Resolve artifact locations: flag/env first, then the config file.
    pub fn resolve_artifacts(&self) -> Result<ArtifactPaths> {
        let file_config = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let scaler_path = self
            .scaler_path
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.artifacts.scaler_path.clone()));
        let model_path = self
            .model_path
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.artifacts.model_path.clone()));

        let paths = ArtifactPaths {
            scaler_path: validate_required_field("scaler_path", &scaler_path)?.clone(),
            model_path: validate_required_field("model_path", &model_path)?.clone(),
        };
        paths.validate()?;
        Ok(paths)
    }

    pub fn form_request(&self) -> FormRequest {
        FormRequest {
            name: self.name.clone(),
            sex: self.sex.into(),
            age: self.age,
            siblings_spouses: self.sibsp,
            parents_children: self.parch,
            class: self.class.into(),
            port: self.port.into(),
            fare: self.fare,
        }
    }
}
