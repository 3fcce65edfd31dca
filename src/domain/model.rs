use serde::{Deserialize, Serialize};

/// Number of features the fitted artifacts expect.
pub const FEATURE_COUNT: usize = 7;

/// Column order the scaler/classifier pair was fit with. The feature vector
/// must be assembled in exactly this order; the artifacts carry no column
/// names of their own.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["Pclass", "Sex", "Age", "SibSp", "Parch", "Fare", "Embarked"];

/// Passenger sex, with the integer encoding the artifacts were fit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn code(self) -> f64 {
        match self {
            Sex::Male => 0.0,
            Sex::Female => 1.0,
        }
    }
}

/// Ticket class. Codes match the historical dataset (1 is the highest class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketClass {
    First,
    Second,
    Third,
}

impl TicketClass {
    pub fn code(self) -> f64 {
        match self {
            TicketClass::First => 1.0,
            TicketClass::Second => 2.0,
            TicketClass::Third => 3.0,
        }
    }
}

/// Port of embarkation, with the integer encoding the artifacts were fit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbarkPort {
    Southampton,
    Cherbourg,
    Queenstown,
}

impl EmbarkPort {
    pub fn code(self) -> f64 {
        match self {
            EmbarkPort::Southampton => 0.0,
            EmbarkPort::Cherbourg => 1.0,
            EmbarkPort::Queenstown => 2.0,
        }
    }
}

/// One prediction request. Built fresh per submission, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerRecord {
    pub class: TicketClass,
    pub sex: Sex,
    pub age: f64,
    pub siblings_spouses: u32,
    pub parents_children: u32,
    pub fare: f64,
    pub port: EmbarkPort,
}

impl PassengerRecord {
    /// Encode the record in the fixed column order of [`FEATURE_NAMES`].
    pub fn to_feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.class.code(),
            self.sex.code(),
            self.age,
            f64::from(self.siblings_spouses),
            f64::from(self.parents_children),
            self.fare,
            self.port.code(),
        ]
    }
}
