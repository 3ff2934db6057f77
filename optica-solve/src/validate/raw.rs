use optica_core::Quantity;

/// Unparsed user input for one calculation.
///
/// Values are kept as text so that parsing failures can be reported with the
/// offending input. Empty or whitespace-only text counts as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub optic_type: Option<String>,
    pub shape: Option<String>,
    pub f: Option<String>,
    pub u: Option<String>,
    pub v: Option<String>,
    pub h1: Option<String>,
    pub h2: Option<String>,
}

impl RawInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the optic type selection.
    #[must_use]
    pub fn optic_type(mut self, optic_type: impl Into<String>) -> Self {
        self.optic_type = Some(optic_type.into());
        self
    }

    /// Sets the shape selection.
    #[must_use]
    pub fn shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Sets the raw text for `quantity`.
    #[must_use]
    pub fn value(mut self, quantity: Quantity, text: impl Into<String>) -> Self {
        *self.slot_mut(quantity) = Some(text.into());
        self
    }

    /// Returns the trimmed text for `quantity`, or `None` if not supplied.
    #[must_use]
    pub fn get(&self, quantity: Quantity) -> Option<&str> {
        let text = match quantity {
            Quantity::FocalLength => &self.f,
            Quantity::ObjectDistance => &self.u,
            Quantity::ImageDistance => &self.v,
            Quantity::ObjectHeight => &self.h1,
            Quantity::ImageHeight => &self.h2,
        };
        text.as_deref().map(str::trim).filter(|text| !text.is_empty())
    }

    /// Number of quantities supplied.
    #[must_use]
    pub fn supplied_count(&self) -> usize {
        Quantity::ALL
            .into_iter()
            .filter(|&quantity| self.get(quantity).is_some())
            .count()
    }

    fn slot_mut(&mut self, quantity: Quantity) -> &mut Option<String> {
        match quantity {
            Quantity::FocalLength => &mut self.f,
            Quantity::ObjectDistance => &mut self.u,
            Quantity::ImageDistance => &mut self.v,
            Quantity::ObjectHeight => &mut self.h1,
            Quantity::ImageHeight => &mut self.h2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_not_supplied() {
        let raw = RawInputs::new()
            .value(Quantity::FocalLength, "  ")
            .value(Quantity::ObjectDistance, " -20 ");

        assert_eq!(raw.get(Quantity::FocalLength), None);
        assert_eq!(raw.get(Quantity::ObjectDistance), Some("-20"));
        assert_eq!(raw.supplied_count(), 1);
    }
}
