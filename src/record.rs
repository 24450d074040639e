use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The mandatory column set, order-sensitive. Input files whose header row
/// differs from this in any way are rejected before entering the pipeline.
pub const EXPECTED_HEADERS: [&str; 9] = [
    "City",
    "Country",
    "CustomerID",
    "FirstName",
    "LastName",
    "Birthday",
    "Age",
    "Email",
    "Newsletter",
];

/// One customer row. Absent `Birthday`/`Age` cells are `None`, never a
/// sentinel value; empty CSV fields deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "CustomerID")]
    pub customer_id: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Birthday")]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Newsletter")]
    pub newsletter: String,
}

impl CustomerRecord {
    /// Force the newsletter field into one textual representation so that
    /// boolean-typed and text-typed source columns compare equal during
    /// dedup. Applied once, immediately after parse.
    pub fn coerce_newsletter(&mut self) {
        self.newsletter = match self.newsletter.trim() {
            t if t.eq_ignore_ascii_case("true") => "True".to_string(),
            t if t.eq_ignore_ascii_case("false") => "False".to_string(),
            t => t.to_string(),
        };
    }

    /// Hashable identity over all nine fields, used for exact-duplicate
    /// removal. The age is keyed bitwise so that `f64` rows can live in a
    /// `HashSet` without an `Eq` impl on the record itself.
    pub fn dedup_key(&self) -> String {
        let age_bits = self
            .age
            .map(|a| a.to_bits().to_string())
            .unwrap_or_default();
        let birthday = self
            .birthday
            .map(|d| d.to_string())
            .unwrap_or_default();
        [
            self.city.as_str(),
            self.country.as_str(),
            self.customer_id.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            birthday.as_str(),
            age_bits.as_str(),
            self.email.as_str(),
            self.newsletter.as_str(),
        ]
        .join("\u{1f}")
    }
}
