use serde::Serialize;

/// An enumerated form choice rendered as a `<select>`.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// All available options, in display order.
    fn all() -> &'static [Self];

    /// The string placed into the form input.
    fn value(&self) -> &'static str;

    /// Human-readable option text.
    fn label(&self) -> &'static str {
        self.value()
    }
}

/// Soil types offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilType {
    Loamy,
    Sandy,
    Clay,
    Silty,
    Peaty,
    Chalky,
}

impl Choice for SoilType {
    fn all() -> &'static [Self] {
        &[
            SoilType::Loamy,
            SoilType::Sandy,
            SoilType::Clay,
            SoilType::Silty,
            SoilType::Peaty,
            SoilType::Chalky,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            SoilType::Loamy => "Loamy",
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Silty => "Silty",
            SoilType::Peaty => "Peaty",
            SoilType::Chalky => "Chalky",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Choice for Season {
    fn all() -> &'static [Self] {
        &[Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    }

    fn value(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

/// How much water the field has access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterAvailability {
    /// Regular rainfall or irrigation
    High,
    /// Seasonal rainfall
    Medium,
    /// Limited water access
    Low,
}

impl Choice for WaterAvailability {
    fn all() -> &'static [Self] {
        &[
            WaterAvailability::High,
            WaterAvailability::Medium,
            WaterAvailability::Low,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            WaterAvailability::High => "High",
            WaterAvailability::Medium => "Medium",
            WaterAvailability::Low => "Low",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WaterAvailability::High => "High (Regular rainfall/irrigation)",
            WaterAvailability::Medium => "Medium (Seasonal rainfall)",
            WaterAvailability::Low => "Low (Limited water access)",
        }
    }
}

/// The seven farming-context fields collected by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub location: String,
    pub crop: String,
    pub soil_type: String,
    pub season: String,
    pub water_availability: String,
    pub previous_crop: String,
    pub pest_issues: String,
}

/// Identifies one of the seven form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Location,
    Crop,
    SoilType,
    Season,
    WaterAvailability,
    PreviousCrop,
    PestIssues,
}

impl FormInput {
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Location => &mut self.location,
            FormField::Crop => &mut self.crop,
            FormField::SoilType => &mut self.soil_type,
            FormField::Season => &mut self.season,
            FormField::WaterAvailability => &mut self.water_availability,
            FormField::PreviousCrop => &mut self.previous_crop,
            FormField::PestIssues => &mut self.pest_issues,
        };
        *slot = value;
    }

    /// True when every required field is non-empty.
    ///
    /// Previous crop and pest issues are optional.
    pub fn is_complete(&self) -> bool {
        [
            &self.location,
            &self.crop,
            &self.soil_type,
            &self.season,
            &self.water_availability,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    /// Serializes all seven fields into the natural-language query sent to the backend.
    pub fn to_query(&self) -> String {
        format!(
            "Location: {}, Crop: {}, Soil Type: {}, Season: {}, Water Availability: {}, Previous Crop: {}, Pest Issues: {}",
            self.location,
            self.crop,
            self.soil_type,
            self.season,
            self.water_availability,
            self.previous_crop,
            self.pest_issues
        )
    }
}

/// JSON body of the outbound advice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceRequest {
    pub input: String,
}

impl From<&FormInput> for AdviceRequest {
    fn from(form: &FormInput) -> Self {
        Self {
            input: form.to_query(),
        }
    }
}
