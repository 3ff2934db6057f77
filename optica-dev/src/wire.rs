use optica_core::{MeasurementSet, Quantity};
use optica_solve::{ImageCharacteristics, RawInputs};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeStruct};

/// Inbound body of `POST /calculate`.
///
/// Numeric fields accept JSON numbers or strings; strings are kept verbatim
/// so validation can report the offending text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Request {
    pub optic_type: Option<String>,
    pub shape: Option<String>,
    #[serde(alias = "f", deserialize_with = "numeric_text")]
    pub focal_length: Option<String>,
    #[serde(deserialize_with = "numeric_text")]
    pub u: Option<String>,
    #[serde(deserialize_with = "numeric_text")]
    pub v: Option<String>,
    #[serde(deserialize_with = "numeric_text")]
    pub h1: Option<String>,
    #[serde(deserialize_with = "numeric_text")]
    pub h2: Option<String>,
}

impl Request {
    /// Converts the request into solver input.
    #[must_use]
    pub fn to_raw(&self) -> RawInputs {
        let mut raw = RawInputs::new();
        raw.optic_type.clone_from(&self.optic_type);
        raw.shape.clone_from(&self.shape);

        let fields = [
            (Quantity::FocalLength, &self.focal_length),
            (Quantity::ObjectDistance, &self.u),
            (Quantity::ImageDistance, &self.v),
            (Quantity::ObjectHeight, &self.h1),
            (Quantity::ImageHeight, &self.h2),
        ];
        for (quantity, text) in fields {
            if let Some(text) = text {
                raw = raw.value(quantity, text.as_str());
            }
        }
        raw
    }
}

fn numeric_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Number(f64),
        Text(String),
    }

    Ok(
        Option::<Field>::deserialize(deserializer)?.map(|field| match field {
            Field::Number(value) => value.to_string(),
            Field::Text(text) => text,
        }),
    )
}

/// Outbound body of `POST /calculate`.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Success {
        results: MeasurementSet,
        image_characteristics: Option<ImageCharacteristics>,
        warnings: Vec<String>,
        diagram: Option<serde_json::Value>,
    },
    Failure {
        errors: Vec<String>,
    },
}

impl Response {
    /// A failure for a fault outside the calculation itself.
    #[must_use]
    pub fn server_error(error: impl std::fmt::Display) -> Self {
        Self::Failure {
            errors: vec![format!("Server error: {error}")],
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success {
                results,
                image_characteristics,
                warnings,
                diagram,
            } => {
                let len = if image_characteristics.is_some() { 5 } else { 4 };
                let mut state = serializer.serialize_struct("Response", len)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("results", results)?;
                if let Some(characteristics) = image_characteristics {
                    state.serialize_field("image_characteristics", characteristics)?;
                }
                state.serialize_field("warnings", warnings)?;
                state.serialize_field("diagram", diagram)?;
                state.end()
            }
            Self::Failure { errors } => {
                let mut state = serializer.serialize_struct("Response", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("errors", errors)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn accepts_numbers_strings_and_the_short_focal_key() {
        let request: Request = serde_json::from_value(json!({
            "optic_type": "mirror",
            "shape": "concave",
            "f": 50,
            "u": "-20",
            "v": null,
            "h1": "",
        }))
        .unwrap();

        assert_eq!(request.focal_length.as_deref(), Some("50"));
        assert_eq!(request.u.as_deref(), Some("-20"));
        assert_eq!(request.v, None);
        assert_eq!(request.h1.as_deref(), Some(""));
        assert_eq!(request.h2, None);

        let raw = request.to_raw();
        assert_eq!(raw.get(Quantity::FocalLength), Some("50"));
        assert_eq!(raw.get(Quantity::ObjectHeight), None);
        assert_eq!(raw.supplied_count(), 2);
    }

    #[test]
    fn long_focal_key_and_fractional_numbers() {
        let request: Request =
            serde_json::from_value(json!({ "focal_length": -12.5, "h2": 3 })).unwrap();

        assert_eq!(request.focal_length.as_deref(), Some("-12.5"));
        assert_eq!(request.h2.as_deref(), Some("3"));
        assert_eq!(request.optic_type, None);
    }

    #[test]
    fn failure_shape() {
        let json = serde_json::to_value(Response::server_error("boom")).unwrap();
        assert_eq!(
            json,
            json!({ "success": false, "errors": ["Server error: boom"] })
        );
    }

    #[test]
    fn success_shape_keeps_nulls() {
        let response = Response::Success {
            results: MeasurementSet::new().with(Quantity::FocalLength, -50.),
            image_characteristics: None,
            warnings: vec![],
            diagram: None,
        };
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["results"]["focal_length"], -50.0);
        assert!(json["results"]["u"].is_null());
        assert!(json["diagram"].is_null());
        assert!(json.get("image_characteristics").is_none());
    }
}
